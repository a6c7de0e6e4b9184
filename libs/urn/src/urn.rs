//! The checksummed URN:NBN value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::checksum;
use crate::error::UrnError;
use crate::parts::{LibraryIdentifier, NetworkAbbreviation, SubNamespacePrefix, UniqueNumber};

/// URN scheme of every identifier built by this crate.
pub const SCHEME: &str = "urn:nbn:de";

/// Textual prefix preceding the scheme-specific string.
pub const PREFIX: &str = "urn:nbn:de:";

/// Builds the scheme-specific string that gets checksummed:
/// `{network}:{library}-{prefix}-{number}`.
pub fn canonical_string(
    network: &NetworkAbbreviation,
    library: &LibraryIdentifier,
    prefix: &SubNamespacePrefix,
    number: &UniqueNumber,
) -> String {
    format!("{network}:{library}-{prefix}-{number}")
}

/// A complete URN:NBN with a verified check digit.
///
/// Values are only created by [`crate::UrnBuilder::build`], [`crate::mint`],
/// or by parsing text whose check digit matches.
///
/// Equality, ordering and hashing use the textual form only; a parsed value
/// may attribute in-part hyphens differently from the one that was built.
#[derive(Debug, Clone)]
pub struct Urn {
    text: String,
    network: NetworkAbbreviation,
    library: LibraryIdentifier,
    prefix: SubNamespacePrefix,
    number: UniqueNumber,
    check_digit: u8,
}

impl Urn {
    /// Assembles the identifier and computes its check digit.
    pub(crate) fn assemble(
        network: NetworkAbbreviation,
        library: LibraryIdentifier,
        prefix: SubNamespacePrefix,
        number: UniqueNumber,
    ) -> Result<Self, UrnError> {
        let canonical = canonical_string(&network, &library, &prefix, &number);
        let check_digit = checksum::check_digit(&canonical)?;
        Ok(Self {
            text: format!("{PREFIX}{canonical}{check_digit}"),
            network,
            library,
            prefix,
            number,
            check_digit,
        })
    }

    /// Parses and verifies an identifier such as `urn:nbn:de:swb:14-opus-47118`.
    ///
    /// The check digit is verified over the whole scheme-specific string, so
    /// it does not depend on how hyphens are attributed to parts. The library
    /// identifier is the shortest non-empty run before a hyphen and the unique
    /// number the shortest non-empty run after one; anything between is the
    /// sub-namespace prefix.
    pub fn parse(s: &str) -> Result<Self, UrnError> {
        let Some(nss) = s.strip_prefix(PREFIX) else {
            return Err(UrnError::malformed(format!("'{s}' does not start with '{PREFIX}'")));
        };

        let Some(last) = nss.chars().last().filter(char::is_ascii_digit) else {
            return Err(UrnError::malformed("missing trailing check digit"));
        };
        let body = &nss[..nss.len() - last.len_utf8()];

        let Some((network, rest)) = body.split_once(':') else {
            return Err(UrnError::malformed("missing ':' after network abbreviation"));
        };
        let (library, prefix, number) = split_parts(rest)?;

        let network = NetworkAbbreviation::parse(network)?;
        let library = LibraryIdentifier::parse(library)?;
        let prefix = SubNamespacePrefix::parse(prefix)?;
        let number = UniqueNumber::parse(number)?;

        checksum::verify(nss)?;
        Self::assemble(network, library, prefix, number)
    }

    /// Returns the URN scheme, always `urn:nbn:de`.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        SCHEME
    }

    /// Returns the full textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the opaque part: canonical string plus check digit.
    #[must_use]
    pub fn nss(&self) -> &str {
        &self.text[PREFIX.len()..]
    }

    /// Returns the canonical string without the check digit.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.text[PREFIX.len()..self.text.len() - 1]
    }

    #[must_use]
    pub const fn check_digit(&self) -> u8 {
        self.check_digit
    }

    #[must_use]
    pub fn network_abbreviation(&self) -> &NetworkAbbreviation {
        &self.network
    }

    #[must_use]
    pub fn library_identifier(&self) -> &LibraryIdentifier {
        &self.library
    }

    #[must_use]
    pub fn sub_namespace_prefix(&self) -> &SubNamespacePrefix {
        &self.prefix
    }

    #[must_use]
    pub fn unique_number(&self) -> &UniqueNumber {
        &self.number
    }
}

/// Splits `{library}-{prefix}-{number}` so that every part is non-empty.
fn split_parts(rest: &str) -> Result<(&str, &str, &str), UrnError> {
    // Skip index 0 so a leading hyphen belongs to the library identifier.
    let first = rest
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '-')
        .map(|(i, _)| i);
    let Some(first) = first else {
        return Err(UrnError::malformed("missing '-' after library identifier"));
    };
    let (library, remainder) = (&rest[..first], &rest[first + 1..]);

    // Rightmost hyphen leaving both prefix and number non-empty.
    let split = remainder
        .char_indices()
        .filter(|&(i, c)| c == '-' && i > 0 && i + 1 < remainder.len())
        .map(|(i, _)| i)
        .last();
    let Some(second) = split else {
        return Err(UrnError::malformed("missing '-' before unique number"));
    };

    Ok((library, &remainder[..second], &remainder[second + 1..]))
}

impl PartialEq for Urn {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Urn {}

impl Hash for Urn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Urn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Urn {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Urn {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Urn {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Urn> for String {
    fn from(urn: Urn) -> Self {
        urn.text
    }
}

impl serde::Serialize for Urn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> serde::Deserialize<'de> for Urn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
