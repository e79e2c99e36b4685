use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Syndication feeds with a registered adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vendor {
    PropertyFinder,
    #[serde(rename = "propspace")]
    PropSpace,
}

impl Vendor {
    pub const fn ordered() -> [Self; 2] {
        [Self::PropertyFinder, Self::PropSpace]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::PropertyFinder => "property-finder",
            Self::PropSpace => "propspace",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Vendor {
    type Err = AdapterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "property-finder" | "propertyfinder" | "property_finder" | "pf" => {
                Ok(Self::PropertyFinder)
            }
            "propspace" | "prop-space" | "prop_space" => Ok(Self::PropSpace),
            _ => Err(AdapterError::UnknownVendor(value.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("no feed adapter registered for vendor '{0}'")]
    UnknownVendor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_ids_round_trip_through_from_str() {
        for vendor in Vendor::ordered() {
            assert_eq!(vendor.id().parse::<Vendor>().expect("known vendor"), vendor);
        }
        assert_eq!(
            " PropertyFinder ".parse::<Vendor>().expect("alias"),
            Vendor::PropertyFinder
        );
    }

    #[test]
    fn unknown_vendor_is_rejected() {
        let err = "bayut".parse::<Vendor>().expect_err("unknown vendor");
        assert_eq!(err.to_string(), "no feed adapter registered for vendor 'bayut'");
    }
}
