//! Add/update/delete sequencing
//!
//! Every mutation validates before committing and recomputes the
//! derived record after. The loading flag is raised on entry and
//! cleared on every exit path; rejection messages are mirrored into
//! `last_error`.

use chrono::Utc;
use tracing::{debug, warn};

use crate::accounting;
use crate::catalog::{messages, LayerCategory, LayerType, Symbology};
use crate::geometry::{GeometryEngine, HydrographyIndex};
use crate::validation;

use super::state::LayerRegistry;
use super::types::{Layer, MutationOutcome, NewLayer};

impl<E> LayerRegistry<E>
where
    E: GeometryEngine + Sync,
    E::Geometry: Sync,
{
    /// Validate and store a new layer. An existing layer with the same
    /// type is replaced. On acceptance the derived record is
    /// recomputed, and for non-property layers the coverage percentage
    /// is refreshed.
    pub fn add_layer(&mut self, new_layer: NewLayer<E::Geometry>) -> MutationOutcome {
        self.begin();

        if new_layer.name.trim().is_empty() {
            return self.fail(messages::LAYER_DATA_INCOMPLETE);
        }

        let (message, clip) = match self.run_validation(new_layer.layer_type, &new_layer.geometry)
        {
            Ok(accepted) => accepted,
            Err(message) => return self.fail(&message),
        };

        // Store the clipped geometry when validation produced one
        let final_geometry = clip.unwrap_or(new_layer.geometry);
        let area_ha = accounting::area_hectares(&self.engine, &final_geometry);

        let layer = Layer {
            layer_type: new_layer.layer_type,
            name: new_layer.name,
            category: new_layer.layer_type.category(),
            area_ha,
            created_at: Utc::now(),
            symbol_type: new_layer
                .symbol_type
                .unwrap_or_else(|| "default".to_string()),
        };
        self.layers.insert(new_layer.layer_type, layer);
        self.geometries.insert(new_layer.layer_type, final_geometry);
        self.visibility.insert(new_layer.layer_type, true);

        if new_layer.layer_type == LayerType::Property {
            self.record.property_area_ha = area_ha;
        }

        self.recalculate_areas();
        if new_layer.layer_type != LayerType::Property {
            self.refresh_coverage();
        }

        debug!(layer = %new_layer.layer_type, area_ha, "layer added");
        self.finish(if message.is_empty() {
            messages::LAYER_ADDED.to_string()
        } else {
            message
        })
    }

    /// Replace the geometry of an existing layer and recompute the
    /// derived record. Category validation re-runs only when
    /// `revalidate_on_update` is configured; by default only additions
    /// are validated.
    pub fn update_layer(&mut self, layer_type: LayerType, geometry: E::Geometry) -> MutationOutcome {
        self.begin();

        if !self.layers.contains_key(&layer_type) {
            return self.fail(messages::LAYER_NOT_FOUND);
        }

        let mut final_geometry = geometry;
        if self.config.revalidate_on_update {
            match self.run_validation(layer_type, &final_geometry) {
                Ok((_, clip)) => {
                    if let Some(clip) = clip {
                        final_geometry = clip;
                    }
                }
                Err(message) => return self.fail(&message),
            }
        }

        let area_ha = accounting::area_hectares(&self.engine, &final_geometry);
        if let Some(layer) = self.layers.get_mut(&layer_type) {
            layer.area_ha = area_ha;
        }
        self.geometries.insert(layer_type, final_geometry);

        if layer_type == LayerType::Property {
            self.record.property_area_ha = area_ha;
        }

        self.recalculate_areas();
        self.refresh_coverage();

        debug!(layer = %layer_type, area_ha, "layer updated");
        self.finish(messages::LAYER_UPDATED.to_string())
    }

    /// Remove a layer and its geometry. Removing the property cascades
    /// to every other layer and zeroes the derived area figures.
    pub fn delete_layer(&mut self, layer_type: LayerType) -> MutationOutcome {
        self.begin();

        if !self.layers.contains_key(&layer_type) {
            return self.fail(messages::LAYER_NOT_FOUND);
        }

        if layer_type == LayerType::Property {
            let others: Vec<LayerType> = self
                .layers
                .keys()
                .copied()
                .filter(|t| *t != LayerType::Property)
                .collect();
            for other in others {
                self.remove_entry(other);
            }
        }
        self.remove_entry(layer_type);

        if layer_type == LayerType::Property {
            self.record.clear_areas();
        }

        self.recalculate_areas();
        self.refresh_coverage();

        debug!(layer = %layer_type, "layer removed");
        self.finish(messages::LAYER_REMOVED.to_string())
    }

    /// Metadata only; no validation or accounting cascade.
    pub fn toggle_layer_visibility(&mut self, layer_type: LayerType, visible: bool) {
        self.visibility.insert(layer_type, visible);
    }

    /// Metadata only; no validation or accounting cascade.
    pub fn update_layer_symbology(&mut self, layer_type: LayerType, symbology: Symbology) {
        self.symbology.insert(layer_type, symbology);
    }

    /// Replace the hydrography features the headquarters rule tests
    /// against.
    pub fn set_hydrography(&mut self, features: Vec<E::Geometry>) -> MutationOutcome {
        match HydrographyIndex::build(&self.engine, features) {
            Ok(index) => {
                let count = index.len();
                self.hydrography = index;
                MutationOutcome::accepted(format!("{count} hydrography features indexed."))
            }
            Err(error) => {
                warn!(%error, "hydrography indexing failed");
                self.last_error = Some(messages::VALIDATION_UNAVAILABLE.to_string());
                MutationOutcome::rejected(messages::VALIDATION_UNAVAILABLE)
            }
        }
    }

    /// Category-selected validation. `Ok` carries the acceptance
    /// message and an optional clipped geometry to store instead of
    /// the candidate.
    fn run_validation(
        &self,
        layer_type: LayerType,
        geometry: &E::Geometry,
    ) -> Result<(String, Option<E::Geometry>), String> {
        match layer_type.category() {
            LayerCategory::Property => {
                if layer_type == LayerType::Property {
                    let report = validation::validate_property_location(
                        &self.engine,
                        &self.config,
                        &self.municipalities,
                        geometry,
                        self.record.municipality_id.as_deref(),
                    );
                    if report.is_valid {
                        Ok((report.message, None))
                    } else {
                        Err(report.message)
                    }
                } else {
                    let Some(property) = self.geometries.get(&LayerType::Property) else {
                        return Err(messages::PROPERTY_REQUIRED.to_string());
                    };
                    let report = validation::validate_headquarters(
                        &self.engine,
                        &self.config,
                        geometry,
                        property,
                        &self.hydrography,
                    );
                    if report.is_valid {
                        Ok((report.message, None))
                    } else {
                        Err(report.message)
                    }
                }
            }
            LayerCategory::SoilCoverage
            | LayerCategory::Administrative
            | LayerCategory::RestrictedUse
            | LayerCategory::LegalReserve => {
                let Some(property) = self.geometries.get(&LayerType::Property) else {
                    return Err(messages::PROPERTY_REQUIRED.to_string());
                };
                let report = validation::validate_soil_coverage(
                    &self.engine,
                    &self.config,
                    geometry,
                    property,
                    layer_type,
                );
                if report.is_valid {
                    Ok((report.message, report.clip_result))
                } else {
                    Err(report.message)
                }
            }
        }
    }

    /// Recompute the administrative, net, and anthropized areas. A
    /// no-op without a property geometry.
    fn recalculate_areas(&mut self) {
        if !self.is_property_defined() {
            return;
        }

        let administrative: f64 = self
            .layers
            .values()
            .filter(|layer| layer.layer_type.is_administrative_service())
            .map(|layer| layer.area_ha)
            .sum();

        let anthropized = match self.geometries.get(&LayerType::Property) {
            Some(property) => {
                validation::calculate_anthropized_area(
                    &self.engine,
                    &self.config,
                    property,
                    &self.geometries,
                )
                .area_ha
            }
            None => 0.0,
        };

        self.record.administrative_service_area_ha = administrative;
        self.record.net_area_ha = accounting::net_area(self.record.property_area_ha, administrative);
        self.record.anthropized_area_ha = anthropized;
    }

    /// Re-run the complete-coverage check across all non-property
    /// geometries and record the percentage. A no-op without a
    /// property geometry.
    fn refresh_coverage(&mut self) {
        let report = match self.geometries.get(&LayerType::Property) {
            Some(property) => {
                let parts: Vec<&E::Geometry> = self
                    .geometries
                    .iter()
                    .filter(|(layer_type, _)| **layer_type != LayerType::Property)
                    .map(|(_, geometry)| geometry)
                    .collect();
                validation::validate_complete_coverage(&self.engine, &self.config, property, &parts)
            }
            None => return,
        };
        self.record.coverage_percentage = report.coverage_percentage;
    }

    fn remove_entry(&mut self, layer_type: LayerType) {
        self.layers.shift_remove(&layer_type);
        self.geometries.shift_remove(&layer_type);
        self.visibility.remove(&layer_type);
        self.symbology.remove(&layer_type);
    }

    fn begin(&mut self) {
        self.loading = true;
        self.last_error = None;
    }

    fn fail(&mut self, message: &str) -> MutationOutcome {
        self.last_error = Some(message.to_string());
        self.loading = false;
        MutationOutcome::rejected(message)
    }

    fn finish(&mut self, message: String) -> MutationOutcome {
        self.loading = false;
        MutationOutcome::accepted(message)
    }
}
