//! # nbn-urn
//!
//! Construction and validation of URN:NBN persistent identifiers for the
//! German library networks.
//!
//! ## Identifier Format
//!
//! `urn:nbn:de:{network}:{library}-{prefix}-{number}{check digit}`
//!
//! Examples:
//! - `urn:nbn:de:swb:14-opus-47118`
//! - `urn:nbn:de:bsz:14-qucosa-141916`
//!
//! ## Design Principles
//!
//! - Each part is a validated newtype matching `[a-z0-9._-]+`
//! - Check digits follow the German National Library's scheme
//! - Computation is pure: identical parts always give the identical identifier
//! - Identifiers roundtrip through their textual form (build → format → parse)
//!
//! ```
//! let urn = nbn_urn::mint("swb", "14", "opus", "4711")?;
//! assert_eq!(urn.to_string(), "urn:nbn:de:swb:14-opus-47118");
//!
//! let parsed: nbn_urn::Urn = "urn:nbn:de:swb:14-opus-47118".parse()?;
//! assert_eq!(parsed, urn);
//! # Ok::<(), nbn_urn::UrnError>(())
//! ```

mod builder;
pub mod checksum;
mod config;
mod error;
mod macros;
mod parts;
mod urn;

pub use builder::{mint, UrnBuilder};
pub use checksum::{char_code, check_digit, verify};
pub use config::{ConfigurationRegistry, NamedConfiguration};
pub use error::{Part, UrnError};
pub use parts::{
    is_part_char, validate_part, LibraryIdentifier, NetworkAbbreviation, SubNamespacePrefix,
    UniqueNumber,
};
pub use urn::{canonical_string, Urn, PREFIX, SCHEME};
