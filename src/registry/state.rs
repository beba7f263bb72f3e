//! Registry state, construction, and getters

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::catalog::{default_symbology, LayerCategory, LayerType, MunicipalityCatalog, Symbology};
use crate::config::RegistryConfig;
use crate::geometry::{GeometryEngine, HydrographyIndex};
use crate::validation::CoverageStatus;

use super::types::{Layer, PropertyRecord, RegistrySnapshot};

/// Canonical layer + geometry + derived-record state. The engine and
/// configuration are injected at construction; `&mut self` receivers
/// keep mutations single-flight.
pub struct LayerRegistry<E: GeometryEngine> {
    pub(super) engine: E,
    pub(super) config: RegistryConfig,
    pub(super) municipalities: MunicipalityCatalog<E::Geometry>,
    pub(super) hydrography: HydrographyIndex<E::Geometry>,
    pub(super) layers: IndexMap<LayerType, Layer>,
    pub(super) geometries: IndexMap<LayerType, E::Geometry>,
    pub(super) visibility: HashMap<LayerType, bool>,
    pub(super) symbology: HashMap<LayerType, Symbology>,
    pub(super) record: PropertyRecord,
    pub(super) loading: bool,
    pub(super) last_error: Option<String>,
}

impl<E: GeometryEngine> LayerRegistry<E>
where
    E::Geometry: Clone,
{
    /// Registry with default configuration and the default municipality
    /// allow-list.
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, RegistryConfig::default(), MunicipalityCatalog::with_defaults())
    }

    pub fn with_config(
        engine: E,
        config: RegistryConfig,
        municipalities: MunicipalityCatalog<E::Geometry>,
    ) -> Self {
        LayerRegistry {
            engine,
            config,
            municipalities,
            hydrography: HydrographyIndex::new(),
            layers: IndexMap::new(),
            geometries: IndexMap::new(),
            visibility: HashMap::new(),
            symbology: HashMap::new(),
            record: PropertyRecord::default(),
            loading: false,
            last_error: None,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn municipalities(&self) -> &MunicipalityCatalog<E::Geometry> {
        &self.municipalities
    }

    /// Mutable catalog access, e.g. to register boundary geometries.
    pub fn municipalities_mut(&mut self) -> &mut MunicipalityCatalog<E::Geometry> {
        &mut self.municipalities
    }

    /// Select the declared municipality. Validated when the property
    /// layer is added.
    pub fn set_municipality(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.record.municipality_id = Some(id.into());
        self.record.municipality_name = Some(name.into());
    }

    pub fn layer(&self, layer_type: LayerType) -> Option<&Layer> {
        self.layers.get(&layer_type)
    }

    pub fn geometry(&self, layer_type: LayerType) -> Option<&E::Geometry> {
        self.geometries.get(&layer_type)
    }

    /// Layers in insertion order.
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers_by_category(&self, category: LayerCategory) -> Vec<&Layer> {
        self.layers
            .values()
            .filter(|layer| layer.category == category)
            .collect()
    }

    /// Stored symbology override, or the catalog default.
    pub fn symbology(&self, layer_type: LayerType) -> Symbology {
        self.symbology
            .get(&layer_type)
            .copied()
            .unwrap_or_else(|| default_symbology(layer_type))
    }

    /// Layers are visible unless explicitly hidden.
    pub fn is_visible(&self, layer_type: LayerType) -> bool {
        self.visibility.get(&layer_type).copied().unwrap_or(true)
    }

    pub fn property_record(&self) -> &PropertyRecord {
        &self.record
    }

    pub fn is_property_defined(&self) -> bool {
        self.geometries.contains_key(&LayerType::Property)
    }

    /// Whether the recorded coverage meets the completeness threshold.
    pub fn is_complete(&self) -> bool {
        self.record.coverage_percentage >= self.config.complete_coverage_min_pct
    }

    pub fn coverage_status(&self) -> CoverageStatus {
        CoverageStatus::from_percentage(self.record.coverage_percentage)
    }

    /// Sum of non-property layer areas over the property area as a
    /// percentage, capped at 100. A quick figure that double-counts
    /// overlapping layers, unlike the recorded coverage percentage.
    pub fn total_coverage(&self) -> f64 {
        if self.record.property_area_ha <= 0.0 {
            return 0.0;
        }
        let layer_area: f64 = self
            .layers
            .values()
            .filter(|layer| layer.layer_type != LayerType::Property)
            .map(|layer| layer.area_ha)
            .sum();
        (layer_area / self.record.property_area_ha * 100.0).min(100.0)
    }

    /// True while a mutation is being applied; observable status for
    /// presentation layers.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last rejected or failed mutation, cleared when a
    /// new mutation starts.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Serializable view: layers in insertion order plus the derived
    /// record.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            layers: self.layers.values().cloned().collect(),
            property: self.record.clone(),
        }
    }

    /// Snapshot as a JSON value; serialization problems collapse to
    /// null rather than panicking.
    pub fn snapshot_json(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or(serde_json::Value::Null)
    }
}
