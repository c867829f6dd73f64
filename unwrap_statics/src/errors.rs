/// A literal that was supposed to always be valid, and was not.
#[derive(Debug, thiserror::Error)]
pub enum StaticValueError {
    #[error("URL constant \"{literal}\" for \"{purpose}\": {source}")]
    Url {
        literal: &'static str,
        purpose: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid static regex pattern {pattern} for \"{purpose}\": {source}")]
    Regex {
        pattern: &'static str,
        purpose: &'static str,
        #[source]
        source: regex::Error,
    },
}

impl StaticValueError {
    /// What the literal was meant to be used for.
    pub fn purpose(&self) -> &'static str {
        match self {
            Self::Url { purpose, .. } | Self::Regex { purpose, .. } => purpose,
        }
    }
}
