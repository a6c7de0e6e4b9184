//! Validated part types.
//!
//! Each of the four structured parts of a URN:NBN is its own type, so an
//! unvalidated string can never reach the checksum step and parts cannot be
//! passed in the wrong position.

use crate::define_part;
use crate::error::{Part, UrnError};

define_part!(NetworkAbbreviation, Part::NetworkAbbreviation);
define_part!(LibraryIdentifier, Part::LibraryIdentifier);
define_part!(SubNamespacePrefix, Part::SubNamespacePrefix);
define_part!(UniqueNumber, Part::UniqueNumber);

/// Returns true if `c` may appear inside a part.
pub const fn is_part_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-')
}

/// Checks `value` against the part grammar `[a-z0-9._-]+`.
///
/// The empty string does not match the grammar.
pub fn validate_part(part: Part, value: &str) -> Result<(), UrnError> {
    if value.is_empty() || !value.chars().all(is_part_char) {
        return Err(UrnError::InvalidCharacter {
            part,
            value: value.to_string(),
        });
    }
    Ok(())
}
