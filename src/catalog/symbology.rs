//! Default rendering symbology per layer type

use serde::{Deserialize, Serialize};

use super::types::LayerType;

/// Fill and outline colors as RGBA in the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Symbology {
    pub fill: [f32; 4],
    pub outline: [f32; 4],
}

impl Symbology {
    /// Grey fallback for unknown identifiers.
    pub const FALLBACK: Symbology = Symbology {
        fill: [0.5, 0.5, 0.5, 0.5],
        outline: [0.5, 0.5, 0.5, 1.0],
    };
}

/// Default symbology for a layer type.
pub fn default_symbology(layer_type: LayerType) -> Symbology {
    let (r, g, b, fill_alpha) = match layer_type {
        LayerType::Property => (0.0, 0.0, 1.0, 0.5),
        LayerType::Headquarters => (1.0, 0.0, 0.0, 1.0),
        LayerType::Consolidated => (1.0, 1.0, 0.0, 0.5),
        LayerType::Native => (0.0, 0.5, 0.0, 0.5),
        LayerType::Fallow => (0.65, 0.16, 0.16, 0.5),
        LayerType::Roadway => (0.5, 0.5, 0.5, 0.5),
        LayerType::Railway => (0.0, 0.0, 0.0, 0.5),
        LayerType::Powerline => (1.0, 0.65, 0.0, 0.5),
        LayerType::Ppa => (0.0, 1.0, 1.0, 0.5),
        LayerType::Restricted => (1.0, 0.0, 1.0, 0.5),
        LayerType::Reserve => (0.2, 0.8, 0.2, 0.5),
    };
    Symbology {
        fill: [r, g, b, fill_alpha],
        outline: [r, g, b, 1.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_symbology() {
        for t in LayerType::ALL {
            let s = default_symbology(t);
            assert!(s.fill.iter().all(|c| (0.0..=1.0).contains(c)));
            assert_eq!(s.outline[3], 1.0);
        }
    }
}
