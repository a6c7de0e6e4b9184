//! Identifier builder.

use crate::config::NamedConfiguration;
use crate::error::{Part, UrnError};
use crate::parts::{LibraryIdentifier, NetworkAbbreviation, SubNamespacePrefix, UniqueNumber};
use crate::urn::Urn;

/// Accumulates the four parts of a URN:NBN and builds the checksummed value.
///
/// Every setter validates its argument immediately; a rejected value leaves
/// the slot as it was. `build()` consumes the builder.
///
/// ```
/// use nbn_urn::UrnBuilder;
///
/// let mut builder = UrnBuilder::new();
/// builder
///     .set_network_abbreviation("swb")?
///     .set_library_identifier("14")?
///     .set_sub_namespace_prefix("opus")?
///     .set_unique_number("4711")?;
/// let urn = builder.build()?;
/// assert_eq!(urn.as_str(), "urn:nbn:de:swb:14-opus-47118");
/// # Ok::<(), nbn_urn::UrnError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrnBuilder {
    network: Option<NetworkAbbreviation>,
    library: Option<LibraryIdentifier>,
    prefix: Option<SubNamespacePrefix>,
    number: Option<UniqueNumber>,
}

impl UrnBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_network_abbreviation(&mut self, s: &str) -> Result<&mut Self, UrnError> {
        self.network = Some(NetworkAbbreviation::parse(s)?);
        Ok(self)
    }

    pub fn set_library_identifier(&mut self, s: &str) -> Result<&mut Self, UrnError> {
        self.library = Some(LibraryIdentifier::parse(s)?);
        Ok(self)
    }

    pub fn set_sub_namespace_prefix(&mut self, s: &str) -> Result<&mut Self, UrnError> {
        self.prefix = Some(SubNamespacePrefix::parse(s)?);
        Ok(self)
    }

    pub fn set_unique_number(&mut self, s: &str) -> Result<&mut Self, UrnError> {
        self.number = Some(UniqueNumber::parse(s)?);
        Ok(self)
    }

    /// Sets network abbreviation, library identifier and sub-namespace prefix
    /// from a named configuration.
    pub fn apply_named_configuration(&mut self, config: &NamedConfiguration) -> &mut Self {
        self.network = Some(config.network_abbreviation.clone());
        self.library = Some(config.library_identifier.clone());
        self.prefix = Some(config.sub_namespace_prefix.clone());
        self
    }

    #[must_use]
    pub fn with_network_abbreviation(mut self, network: NetworkAbbreviation) -> Self {
        self.network = Some(network);
        self
    }

    #[must_use]
    pub fn with_library_identifier(mut self, library: LibraryIdentifier) -> Self {
        self.library = Some(library);
        self
    }

    #[must_use]
    pub fn with_sub_namespace_prefix(mut self, prefix: SubNamespacePrefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    #[must_use]
    pub fn with_unique_number(mut self, number: UniqueNumber) -> Self {
        self.number = Some(number);
        self
    }

    /// Returns true once all four parts are set.
    pub fn is_complete(&self) -> bool {
        self.missing_part().is_none()
    }

    /// Returns the first unset part, in build order.
    pub fn missing_part(&self) -> Option<Part> {
        if self.network.is_none() {
            Some(Part::NetworkAbbreviation)
        } else if self.library.is_none() {
            Some(Part::LibraryIdentifier)
        } else if self.prefix.is_none() {
            Some(Part::SubNamespacePrefix)
        } else if self.number.is_none() {
            Some(Part::UniqueNumber)
        } else {
            None
        }
    }

    /// Validates completeness, computes the check digit and returns the
    /// identifier. Fails with the first missing part in the order network,
    /// library, prefix, number.
    pub fn build(self) -> Result<Urn, UrnError> {
        let network = self
            .network
            .ok_or(UrnError::MissingPart(Part::NetworkAbbreviation))?;
        let library = self
            .library
            .ok_or(UrnError::MissingPart(Part::LibraryIdentifier))?;
        let prefix = self
            .prefix
            .ok_or(UrnError::MissingPart(Part::SubNamespacePrefix))?;
        let number = self
            .number
            .ok_or(UrnError::MissingPart(Part::UniqueNumber))?;

        Urn::assemble(network, library, prefix, number)
    }
}

/// Builds an identifier from four raw parts in one call.
///
/// Holds no state and may be called from any number of threads.
pub fn mint(network: &str, library: &str, prefix: &str, number: &str) -> Result<Urn, UrnError> {
    let mut builder = UrnBuilder::new();
    builder
        .set_network_abbreviation(network)?
        .set_library_identifier(library)?
        .set_sub_namespace_prefix(prefix)?
        .set_unique_number(number)?;
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> UrnBuilder {
        let mut builder = UrnBuilder::new();
        builder
            .set_network_abbreviation("swb")
            .unwrap()
            .set_library_identifier("14")
            .unwrap()
            .set_sub_namespace_prefix("opus")
            .unwrap()
            .set_unique_number("4711")
            .unwrap();
        builder
    }

    #[test]
    fn test_build_end_to_end() {
        let urn = complete().build().unwrap();
        assert_eq!(urn.as_str(), "urn:nbn:de:swb:14-opus-47118");
        assert_eq!(urn.scheme(), "urn:nbn:de");
        assert_eq!(urn.nss(), "swb:14-opus-47118");
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = complete().build().unwrap();
        let second = complete().build().unwrap();
        assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
    }

    #[test]
    fn test_setters_reject_invalid_and_keep_state() {
        let mut builder = complete();
        let err = builder.set_network_abbreviation("SWB").unwrap_err();
        assert_eq!(
            err,
            UrnError::InvalidCharacter {
                part: Part::NetworkAbbreviation,
                value: "SWB".to_string()
            }
        );
        let err = builder.set_library_identifier("1,4").unwrap_err();
        assert_eq!(err.part(), Some(Part::LibraryIdentifier));
        let err = builder.set_sub_namespace_prefix("op us").unwrap_err();
        assert_eq!(err.part(), Some(Part::SubNamespacePrefix));
        let err = builder.set_unique_number("").unwrap_err();
        assert_eq!(err.part(), Some(Part::UniqueNumber));

        assert_eq!(
            builder.build().unwrap().as_str(),
            "urn:nbn:de:swb:14-opus-47118"
        );
    }

    #[test]
    fn test_rejected_value_leaves_part_unset() {
        let mut builder = UrnBuilder::new();
        assert!(builder.set_network_abbreviation("Bsz").is_err());
        assert_eq!(builder.missing_part(), Some(Part::NetworkAbbreviation));
    }

    #[test]
    fn test_missing_part_order() {
        assert_eq!(
            UrnBuilder::new().build().unwrap_err(),
            UrnError::MissingPart(Part::NetworkAbbreviation)
        );

        let mut builder = UrnBuilder::new();
        builder.set_unique_number("1").unwrap();
        builder.set_sub_namespace_prefix("opus").unwrap();
        assert_eq!(
            builder.build().unwrap_err(),
            UrnError::MissingPart(Part::NetworkAbbreviation)
        );

        let mut builder = UrnBuilder::new();
        builder.set_network_abbreviation("swb").unwrap();
        builder.set_unique_number("1").unwrap();
        assert_eq!(
            builder.build().unwrap_err(),
            UrnError::MissingPart(Part::LibraryIdentifier)
        );

        let mut builder = UrnBuilder::new();
        builder
            .set_network_abbreviation("swb")
            .unwrap()
            .set_library_identifier("14")
            .unwrap();
        assert_eq!(
            builder.clone().build().unwrap_err(),
            UrnError::MissingPart(Part::SubNamespacePrefix)
        );

        builder.set_sub_namespace_prefix("opus").unwrap();
        assert!(!builder.is_complete());
        assert_eq!(
            builder.build().unwrap_err(),
            UrnError::MissingPart(Part::UniqueNumber)
        );
    }

    #[test]
    fn test_apply_named_configuration() {
        let config = NamedConfiguration::new("bsz", "14", "qucosa").unwrap();
        let mut builder = UrnBuilder::new();
        builder
            .apply_named_configuration(&config)
            .set_unique_number("14191")
            .unwrap();
        assert!(builder.is_complete());
        assert_eq!(
            builder.build().unwrap().as_str(),
            "urn:nbn:de:bsz:14-qucosa-141916"
        );
    }

    #[test]
    fn test_typed_setters() {
        let urn = UrnBuilder::new()
            .with_network_abbreviation("bsz".parse().unwrap())
            .with_library_identifier("15".parse().unwrap())
            .with_sub_namespace_prefix("qucosa".parse().unwrap())
            .with_unique_number("1060".parse().unwrap())
            .build()
            .unwrap();
        assert_eq!(urn.as_str(), "urn:nbn:de:bsz:15-qucosa-10603");
    }

    #[test]
    fn test_mint() {
        assert_eq!(
            mint("bsz", "15", "qucosa", "1059").unwrap().as_str(),
            "urn:nbn:de:bsz:15-qucosa-10591"
        );
        assert_eq!(
            mint("bsz", "15", "Qucosa", "1059").unwrap_err().part(),
            Some(Part::SubNamespacePrefix)
        );
    }

    #[test]
    fn test_mint_from_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| mint("swb", "14", "opus", "4711").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap().as_str(),
                "urn:nbn:de:swb:14-opus-47118"
            );
        }
    }
}
