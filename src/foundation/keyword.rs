/// Implements `as_str`, `Display` and a case-insensitive `FromStr` for a fieldless enum whose
/// variants map one-to-one onto query-string keywords.
macro_rules! keyword_enum {
    ($name:ident, $what:literal, { $($variant:ident => $kw:literal),+ $(,)? }) => {
        impl $name {
            /// Query-string identifier.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $kw,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::foundation::error::ChronosError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($kw => Ok(Self::$variant),)+
                    _ => Err($crate::foundation::error::ChronosError::invalid_parameter(format!(
                        "invalid {} \"{}\"; expected one of {}",
                        $what,
                        s,
                        [$($kw),+].join(", ")
                    ))),
                }
            }
        }
    };
}

pub(crate) use keyword_enum;
