/// Declares a two-valued enum that converts to and from `bool`, with stable
/// lowercase names for display and parsing.
///
/// Extra accepted spellings can be listed after each name.
#[macro_export]
macro_rules! bool_enum {
    (
        $(#[$meta:meta])*
        $name:ident(
            $true_value:ident = $true_name:literal $(| $true_alias:literal)*
            ; $false_value:ident = $false_name:literal $(| $false_alias:literal)*
        )
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        pub enum $name {
            $true_value,
            $false_value,
        }

        impl $name {
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    Self::$true_value => $true_name,
                    Self::$false_value => $false_name,
                }
            }
        }

        impl From<$name> for bool {
            fn from(value: $name) -> bool {
                value == $name::$true_value
            }
        }

        impl From<bool> for $name {
            fn from(value: bool) -> Self {
                if value {
                    Self::$true_value
                } else {
                    Self::$false_value
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                let value = value.trim();
                if [$true_name $(, $true_alias)*]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(value))
                {
                    Ok(Self::$true_value)
                } else if [$false_name $(, $false_alias)*]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(value))
                {
                    Ok(Self::$false_value)
                } else {
                    Err(format!(
                        "expected `{}` or `{}`, got `{value}`",
                        $true_name, $false_name
                    ))
                }
            }
        }
    };
}
