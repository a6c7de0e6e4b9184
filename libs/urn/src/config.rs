//! Named configurations.
//!
//! A named configuration bundles the network abbreviation, library identifier
//! and sub-namespace prefix used by one caller role, so that minting only needs
//! the unique number. The registry is plain in-memory data; loading it from
//! disk is left to the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::UrnError;
use crate::parts::{LibraryIdentifier, NetworkAbbreviation, SubNamespacePrefix};

/// The three reusable parts of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedConfiguration {
    pub network_abbreviation: NetworkAbbreviation,
    pub library_identifier: LibraryIdentifier,
    pub sub_namespace_prefix: SubNamespacePrefix,
}

impl NamedConfiguration {
    /// Creates a configuration from raw strings, validating each.
    pub fn new(network: &str, library: &str, prefix: &str) -> Result<Self, UrnError> {
        Ok(Self {
            network_abbreviation: NetworkAbbreviation::parse(network)?,
            library_identifier: LibraryIdentifier::parse(library)?,
            sub_namespace_prefix: SubNamespacePrefix::parse(prefix)?,
        })
    }
}

/// Named configurations keyed by role name.
///
/// Names are kept in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigurationRegistry {
    inner: BTreeMap<String, NamedConfiguration>,
}

impl ConfigurationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a configuration.
    ///
    /// Returns the previous configuration if the name was taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        config: NamedConfiguration,
    ) -> Option<NamedConfiguration> {
        self.inner.insert(name.into(), config)
    }

    /// Looks up a configuration by name.
    pub fn get(&self, name: &str) -> Result<&NamedConfiguration, UrnError> {
        self.inner
            .get(name)
            .ok_or_else(|| UrnError::UnknownConfiguration {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Iterate over names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NamedConfiguration)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromIterator<(String, NamedConfiguration)> for ConfigurationRegistry {
    fn from_iter<I: IntoIterator<Item = (String, NamedConfiguration)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Part;

    fn qucosa() -> NamedConfiguration {
        NamedConfiguration::new("bsz", "14", "qucosa").unwrap()
    }

    #[test]
    fn test_new_validates() {
        let err = NamedConfiguration::new("bsz", "1 4", "qucosa").unwrap_err();
        assert_eq!(err.part(), Some(Part::LibraryIdentifier));
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = ConfigurationRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.insert("qucosa", qucosa()).is_none());
        assert!(registry.insert("qucosa", qucosa()).is_some());

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("qucosa"));
        assert_eq!(registry.get("qucosa").unwrap(), &qucosa());
        assert_eq!(
            registry.get("opus").unwrap_err(),
            UrnError::UnknownConfiguration {
                name: "opus".to_string()
            }
        );
    }

    #[test]
    fn test_names_sorted() {
        let registry: ConfigurationRegistry = [
            ("zeta".to_string(), qucosa()),
            ("alpha".to_string(), qucosa()),
        ]
        .into_iter()
        .collect();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["alpha", "zeta"]);
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "qucosa": {
                "network_abbreviation": "bsz",
                "library_identifier": "14",
                "sub_namespace_prefix": "qucosa"
            }
        }"#;
        let registry: ConfigurationRegistry = serde_json::from_str(json).unwrap();
        assert_eq!(registry.get("qucosa").unwrap(), &qucosa());
    }

    #[test]
    fn test_deserialize_rejects_invalid_part() {
        let json = r#"{
            "network_abbreviation": "BSZ",
            "library_identifier": "14",
            "sub_namespace_prefix": "qucosa"
        }"#;
        let result: Result<NamedConfiguration, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
