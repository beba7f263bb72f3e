//! Layer type and category enumerations
//!
//! Every layer a caller can declare has a fixed type; the category is
//! derived from the type and selects the validation rule-set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of declarable layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerType {
    Property,
    Headquarters,
    Consolidated,
    Native,
    Fallow,
    Roadway,
    Railway,
    Powerline,
    Ppa,
    Restricted,
    Reserve,
}

/// Rule-set grouping for a layer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerCategory {
    Property,
    SoilCoverage,
    Administrative,
    RestrictedUse,
    LegalReserve,
}

impl LayerType {
    /// All layer types, property first.
    pub const ALL: [LayerType; 11] = [
        LayerType::Property,
        LayerType::Headquarters,
        LayerType::Consolidated,
        LayerType::Native,
        LayerType::Fallow,
        LayerType::Roadway,
        LayerType::Railway,
        LayerType::Powerline,
        LayerType::Ppa,
        LayerType::Restricted,
        LayerType::Reserve,
    ];

    /// Stable string identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            LayerType::Property => "property",
            LayerType::Headquarters => "headquarters",
            LayerType::Consolidated => "consolidated",
            LayerType::Native => "native",
            LayerType::Fallow => "fallow",
            LayerType::Roadway => "roadway",
            LayerType::Railway => "railway",
            LayerType::Powerline => "powerline",
            LayerType::Ppa => "ppa",
            LayerType::Restricted => "restricted",
            LayerType::Reserve => "reserve",
        }
    }

    /// Parse a stable string identifier.
    pub fn parse(s: &str) -> Option<LayerType> {
        LayerType::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Human-readable label.
    pub fn display_name(self) -> &'static str {
        match self {
            LayerType::Property => "Property boundary",
            LayerType::Headquarters => "Headquarters",
            LayerType::Consolidated => "Consolidated use",
            LayerType::Native => "Native vegetation",
            LayerType::Fallow => "Fallow land",
            LayerType::Roadway => "Roadway right-of-way",
            LayerType::Railway => "Railway right-of-way",
            LayerType::Powerline => "Powerline right-of-way",
            LayerType::Ppa => "Permanent preservation area",
            LayerType::Restricted => "Restricted use",
            LayerType::Reserve => "Legal reserve",
        }
    }

    /// Category is fully determined by the layer type.
    pub fn category(self) -> LayerCategory {
        match self {
            LayerType::Property | LayerType::Headquarters => LayerCategory::Property,
            LayerType::Consolidated | LayerType::Native | LayerType::Fallow => {
                LayerCategory::SoilCoverage
            }
            LayerType::Roadway | LayerType::Railway | LayerType::Powerline => {
                LayerCategory::Administrative
            }
            LayerType::Ppa | LayerType::Restricted => LayerCategory::RestrictedUse,
            LayerType::Reserve => LayerCategory::LegalReserve,
        }
    }

    /// Administrative service rights-of-way counted against the net area.
    pub fn is_administrative_service(self) -> bool {
        matches!(
            self,
            LayerType::Roadway | LayerType::Railway | LayerType::Powerline
        )
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_is_total() {
        for t in LayerType::ALL {
            // Category derivation never panics and round-trips with parse
            let _ = t.category();
            assert_eq!(LayerType::parse(t.as_str()), Some(t));
        }
        assert_eq!(LayerType::parse("unknown"), None);
    }

    #[test]
    fn test_administrative_service_set() {
        assert!(LayerType::Roadway.is_administrative_service());
        assert!(LayerType::Railway.is_administrative_service());
        assert!(LayerType::Powerline.is_administrative_service());
        assert!(!LayerType::Property.is_administrative_service());
        assert!(!LayerType::Native.is_administrative_service());
    }

    #[test]
    fn test_headquarters_shares_property_category() {
        assert_eq!(LayerType::Headquarters.category(), LayerCategory::Property);
        assert_eq!(LayerType::Reserve.category(), LayerCategory::LegalReserve);
        assert_eq!(LayerType::Ppa.category(), LayerCategory::RestrictedUse);
    }
}
