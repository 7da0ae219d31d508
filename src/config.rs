//! Ledger configuration
use super::error::OperationError;
use super::item::Location;
use std::collections::BTreeSet;

/// Storage locations a ledger knows about.
///
/// A fresh config accepts any relocation target. Registering a location with
/// [`LedgerConfig::with_location`] turns the registry closed: from then on only
/// registered locations (and the default) are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    default_location: Location,
    known_locations: Option<BTreeSet<Location>>, // None accepts any target
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_location: Location::main(),
            known_locations: None,
        }
    }
}

impl LedgerConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_location(mut self, name: &str) -> Result<Self, OperationError> {
        let location = Location::parse(name)?;
        self.known_locations
            .get_or_insert_with(|| BTreeSet::from([self.default_location.clone()]))
            .insert(location);
        Ok(self)
    }
    /// Replace the default location, registering it as known if the registry is closed
    pub fn with_default_location(mut self, name: &str) -> Result<Self, OperationError> {
        let location = Location::parse(name)?;
        if let Some(known) = self.known_locations.as_mut() {
            known.insert(location.clone());
        }
        self.default_location = location;
        Ok(self)
    }
    pub fn default_location(&self) -> &Location {
        &self.default_location
    }
    pub fn is_restricted(&self) -> bool {
        self.known_locations.is_some()
    }
    pub fn is_known(&self, location: &Location) -> bool {
        match &self.known_locations {
            Some(known) => known.contains(location),
            None => true,
        }
    }
    /// Registered locations; empty while the registry is open
    pub fn known_locations(&self) -> impl Iterator<Item = &Location> {
        self.known_locations.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accepts_any_location() {
        let config = LedgerConfig::default();

        assert_eq!(config.default_location(), &Location::main());
        assert!(!config.is_restricted());
        assert!(config.is_known(&Location::parse("B").unwrap()));
        assert_eq!(config.known_locations().count(), 0);
    }

    #[test]
    fn registering_closes_the_registry() {
        let config = LedgerConfig::new().with_location("B").unwrap();

        assert!(config.is_restricted());
        assert!(config.is_known(&Location::parse("B").unwrap()));
        assert!(config.is_known(&Location::main()));
        assert!(!config.is_known(&Location::parse("Nowhere").unwrap()));
        assert_eq!(config.known_locations().count(), 2);
    }

    #[test]
    fn builder_registers_locations() {
        let config = LedgerConfig::new()
            .with_location("B")
            .unwrap()
            .with_default_location("Backroom")
            .unwrap();

        assert!(config.is_known(&Location::parse("B").unwrap()));
        assert!(config.is_known(&Location::main()));
        assert_eq!(config.default_location().as_str(), "Backroom");
        assert!(config.is_known(config.default_location()));
    }

    #[test]
    fn default_location_alone_keeps_registry_open() {
        let config = LedgerConfig::new().with_default_location("Backroom").unwrap();

        assert!(!config.is_restricted());
        assert_eq!(config.default_location().as_str(), "Backroom");
    }

    #[test]
    fn builder_rejects_blank_names() {
        assert!(LedgerConfig::new().with_location("  ").is_err());
    }
}
