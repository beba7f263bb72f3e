//! Registry data types

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{LayerCategory, LayerType};

/// One declared layer. The geometry lives in the registry's geometry
/// map so this record stays serializable and shareable on its own.
#[derive(Debug, Clone, Serialize)]
pub struct Layer {
    #[serde(rename = "id")]
    pub layer_type: LayerType,
    pub name: String,
    /// Derived from `layer_type`, never caller-supplied.
    pub category: LayerCategory,
    /// Derived from the stored geometry, in hectares.
    pub area_ha: f64,
    pub created_at: DateTime<Utc>,
    pub symbol_type: String,
}

/// Derived property-level figures, recomputed after every committed
/// mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub municipality_id: Option<String>,
    pub municipality_name: Option<String>,
    pub property_area_ha: f64,
    /// Sum of roadway, railway, and powerline layer areas.
    pub administrative_service_area_ha: f64,
    /// Property area minus the administrative service area, never
    /// negative.
    pub net_area_ha: f64,
    /// Property area not covered by any declared layer.
    pub anthropized_area_ha: f64,
    /// Share of the property covered by the union of non-property
    /// layers, 0-100.
    pub coverage_percentage: f64,
}

impl PropertyRecord {
    /// Zero every derived area figure, keeping the municipality
    /// selection.
    pub(crate) fn clear_areas(&mut self) {
        self.property_area_ha = 0.0;
        self.administrative_service_area_ha = 0.0;
        self.net_area_ha = 0.0;
        self.anthropized_area_ha = 0.0;
        self.coverage_percentage = 0.0;
    }
}

/// Input for [`super::LayerRegistry::add_layer`]. The category is
/// derived from `layer_type`; callers cannot supply one.
#[derive(Debug, Clone)]
pub struct NewLayer<G> {
    pub layer_type: LayerType,
    pub name: String,
    pub geometry: G,
    pub symbol_type: Option<String>,
}

/// Outcome of a mutating registry operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationOutcome {
    pub success: bool,
    pub message: String,
}

impl MutationOutcome {
    pub(crate) fn accepted(message: impl Into<String>) -> Self {
        MutationOutcome {
            success: true,
            message: message.into(),
        }
    }

    pub(crate) fn rejected(message: impl Into<String>) -> Self {
        MutationOutcome {
            success: false,
            message: message.into(),
        }
    }
}

/// Serializable view of the registry: layers in insertion order plus
/// the derived record. Geometries are not included.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrySnapshot {
    pub layers: Vec<Layer>,
    pub property: PropertyRecord,
}
