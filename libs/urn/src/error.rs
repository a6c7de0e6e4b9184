//! Error types for identifier construction and validation.

use std::fmt;

use thiserror::Error;

/// One of the four structured parts of a URN:NBN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    NetworkAbbreviation,
    LibraryIdentifier,
    SubNamespacePrefix,
    UniqueNumber,
}

impl Part {
    /// All parts, in the order `build()` checks them.
    pub const ALL: [Part; 4] = [
        Part::NetworkAbbreviation,
        Part::LibraryIdentifier,
        Part::SubNamespacePrefix,
        Part::UniqueNumber,
    ];

    /// Returns the snake_case name of the part.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Part::NetworkAbbreviation => "network_abbreviation",
            Part::LibraryIdentifier => "library_identifier",
            Part::SubNamespacePrefix => "sub_namespace_prefix",
            Part::UniqueNumber => "unique_number",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when building, parsing, or verifying a URN:NBN.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrnError {
    /// A part does not match `[a-z0-9._-]+`.
    #[error("invalid character in {part}: '{value}' must match [a-z0-9._-]+")]
    InvalidCharacter { part: Part, value: String },

    /// `build()` was called before this part was set.
    #[error("missing {0}")]
    MissingPart(Part),

    /// The checksum alphabet has no code for this character.
    ///
    /// Unreachable through the validated part types.
    #[error("character '{0}' has no check digit code")]
    UnmappedCharacter(char),

    /// The running checksum left the 64-bit range.
    #[error("check digit computation overflowed")]
    ChecksumOverflow,

    /// The identifier text does not have the URN:NBN shape.
    #[error("malformed URN:NBN: {reason}")]
    MalformedUrn { reason: String },

    /// The trailing check digit does not match the computed one.
    #[error("check digit mismatch: expected {expected}, got {actual}")]
    CheckDigitMismatch { expected: u8, actual: u8 },

    /// No named configuration is registered under this name.
    #[error("unknown configuration '{name}'")]
    UnknownConfiguration { name: String },
}

impl UrnError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        UrnError::MalformedUrn {
            reason: reason.into(),
        }
    }

    /// Returns true if a supplied part violated the grammar.
    pub fn is_invalid_character(&self) -> bool {
        matches!(self, UrnError::InvalidCharacter { .. })
    }

    /// Returns true if a part was missing at build time.
    pub fn is_missing_part(&self) -> bool {
        matches!(self, UrnError::MissingPart(_))
    }

    /// Returns the part this error refers to, if any.
    pub fn part(&self) -> Option<Part> {
        match self {
            UrnError::InvalidCharacter { part, .. } | UrnError::MissingPart(part) => Some(*part),
            _ => None,
        }
    }
}
