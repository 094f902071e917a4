//! Closed vocabularies: enums with a fixed, ordered set of named values.
//!
//! Every vocabulary parses case-insensitively from its canonical
//! `SCREAMING_SNAKE_CASE` name (`-` and spaces are accepted in place of `_`),
//! renders as that name, and serializes as that name.

/// Canonical spelling used for comparison against vocabulary names.
pub(crate) fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

macro_rules! define_choice {
    ($(#[doc = $doc:expr])* $name:ident, $kind:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Canonical name of this value.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            /// Comma-separated list of every canonical name.
            #[must_use]
            pub fn choices() -> String {
                Self::ALL
                    .iter()
                    .map(|value| value.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = $crate::choice::normalize(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str() == wanted)
                    .ok_or_else(|| $crate::error::ValidationError::InvalidChoice {
                        kind: $kind,
                        value: s.trim().to_string(),
                        choices: Self::choices(),
                    })
            }
        }
    };
}

pub(crate) use define_choice;
