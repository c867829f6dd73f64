use std::sync::OnceLock;

use tracing::warn;

use crate::bool_enum;

/// Environment variable read once, on first use of the process-wide mode.
pub const BUILD_MODE_ENV: &str = "UNWRAP_BUILD_MODE";

static GLOBAL_MODE: OnceLock<BuildMode> = OnceLock::new();

bool_enum!(
    /// Selects what happens when a value that must be present is absent.
    ///
    /// `Development` aborts at the defect, `Production` hands a recoverable
    /// error back to the caller.
    BuildMode(Development = "development" | "dev" | "debug"; Production = "production" | "prod" | "release")
);

impl BuildMode {
    /// The mode implied by how this crate was compiled.
    #[must_use]
    pub const fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Reads [`BUILD_MODE_ENV`], ignoring (and logging) values that do not parse.
    pub fn from_env() -> Option<Self> {
        let raw = std::env::var(BUILD_MODE_ENV).ok()?;
        match raw.parse() {
            Ok(mode) => Some(mode),
            Err(err) => {
                warn!("Ignoring {BUILD_MODE_ENV}: {err}");
                None
            }
        }
    }

    /// The process-wide mode. Fixed the first time it is read.
    pub fn global() -> Self {
        *GLOBAL_MODE.get_or_init(|| Self::from_env().unwrap_or_else(Self::from_build))
    }

    /// Fixes the process-wide mode at startup.
    ///
    /// # Errors
    /// Returns the mode already in effect if it was installed or read before.
    pub fn install(self) -> Result<(), Self> {
        GLOBAL_MODE.set(self).map_err(|_| Self::global())
    }

    #[must_use]
    pub fn is_development(self) -> bool {
        self.into()
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::from_build()
    }
}
