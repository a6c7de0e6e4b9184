//! Macros for defining validated identifier part types.

/// Macro to define a validated part newtype.
///
/// This generates a newtype wrapper around `String` with:
/// - A `PART` constant naming the part in errors
/// - `parse()` that enforces `[a-z0-9._-]+`
/// - `Display`, `FromStr`, `TryFrom<String>` and `AsRef<str>`
/// - `Serialize` and `Deserialize` implementations (deserialization validates)
///
/// # Example
///
/// ```ignore
/// define_part!(NetworkAbbreviation, Part::NetworkAbbreviation);
///
/// let network: NetworkAbbreviation = "bsz".parse()?;
/// assert!("BSZ".parse::<NetworkAbbreviation>().is_err());
/// ```
#[macro_export]
macro_rules! define_part {
    ($name:ident, $part:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// The part this type holds.
            pub const PART: $crate::Part = $part;

            /// Parses a part value, rejecting anything outside `[a-z0-9._-]+`.
            pub fn parse(s: &str) -> Result<Self, $crate::UrnError> {
                $crate::validate_part(Self::PART, s)?;
                Ok(Self(s.to_string()))
            }

            /// Returns the validated value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the part, returning the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::UrnError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::UrnError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                $crate::validate_part(Self::PART, &s)?;
                Ok(Self(s))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::try_from(s).map_err(serde::de::Error::custom)
            }
        }
    };
}
