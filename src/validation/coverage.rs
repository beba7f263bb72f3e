//! Complete-coverage and anthropized-area derivations

use indexmap::IndexMap;
use tracing::warn;

use crate::accounting;
use crate::catalog::{messages, LayerType};
use crate::config::RegistryConfig;
use crate::geometry::units::square_meters_to_hectares;
use crate::geometry::{GeometryEngine, GeometryEngineError};

use super::types::{AnthropizedArea, CoverageReport};
use super::union_fold::union_fold;

/// Check whether the supplied layer geometries cover the whole
/// property. Coverage is the area of the layers' union intersected with
/// the property, as a percentage of the property area; completeness is
/// reached at the configured threshold, not at a literal 100%.
pub fn validate_complete_coverage<E: GeometryEngine>(
    engine: &E,
    config: &RegistryConfig,
    property: &E::Geometry,
    layer_geometries: &[&E::Geometry],
) -> CoverageReport {
    if layer_geometries.is_empty() {
        return CoverageReport::incomplete(messages::NO_LAYERS);
    }

    let folded = union_fold(engine, config.tolerance, layer_geometries);
    let Some(union) = folded.geometry else {
        return CoverageReport::incomplete(messages::COVERAGE_MERGE_FAILED);
    };

    match coverage_percentage(engine, config, property, &union) {
        Ok(Some(percentage)) => {
            let is_valid = percentage >= config.complete_coverage_min_pct;
            let message = if is_valid {
                messages::COVERAGE_COMPLETE.to_string()
            } else {
                format!(
                    "{:.2}% of the property area remains uncovered.",
                    100.0 - percentage
                )
            };
            CoverageReport {
                is_valid,
                coverage_percentage: percentage,
                message,
            }
        }
        Ok(None) => {
            CoverageReport::incomplete("Could not intersect the layers with the property.")
        }
        Err(error) => {
            warn!(%error, "coverage computation failed");
            CoverageReport::incomplete(messages::VALIDATION_UNAVAILABLE)
        }
    }
}

/// Percentage of the property covered by `union`; `None` when the
/// union does not touch the property. Both areas are taken in square
/// meters before any conversion.
fn coverage_percentage<E: GeometryEngine>(
    engine: &E,
    config: &RegistryConfig,
    property: &E::Geometry,
    union: &E::Geometry,
) -> Result<Option<f64>, GeometryEngineError> {
    let property_m2 = engine.area_m2(property)?;
    let Some(intersection) = engine.intersect(union, property, config.tolerance)? else {
        return Ok(None);
    };
    let covered_m2 = engine.area_m2(&intersection)?;
    Ok(Some(accounting::percentage(covered_m2, property_m2)))
}

/// Area of the property not covered by any non-property layer. With no
/// other layers the whole property counts as anthropized; a union or
/// difference failure defaults to zero.
pub fn calculate_anthropized_area<E: GeometryEngine>(
    engine: &E,
    config: &RegistryConfig,
    property: &E::Geometry,
    layer_geometries: &IndexMap<LayerType, E::Geometry>,
) -> AnthropizedArea<E::Geometry> {
    match anthropized(engine, config, property, layer_geometries) {
        Ok(result) => result,
        Err(error) => {
            warn!(%error, "anthropized area computation failed");
            AnthropizedArea::zero()
        }
    }
}

fn anthropized<E: GeometryEngine>(
    engine: &E,
    config: &RegistryConfig,
    property: &E::Geometry,
    layer_geometries: &IndexMap<LayerType, E::Geometry>,
) -> Result<AnthropizedArea<E::Geometry>, GeometryEngineError> {
    let others: Vec<&E::Geometry> = layer_geometries
        .iter()
        .filter(|(layer_type, _)| **layer_type != LayerType::Property)
        .map(|(_, geometry)| geometry)
        .collect();

    if others.is_empty() {
        let area_ha = square_meters_to_hectares(engine.area_m2(property)?);
        return Ok(AnthropizedArea {
            area_ha,
            geometry: Some(property.clone()),
        });
    }

    let folded = union_fold(engine, config.tolerance, &others);
    let Some(union) = folded.geometry else {
        return Ok(AnthropizedArea::zero());
    };

    let Some(remainder) = engine.difference(property, &union, config.tolerance)? else {
        return Ok(AnthropizedArea::zero());
    };

    let area_ha = square_meters_to_hectares(engine.area_m2(&remainder)?);
    Ok(AnthropizedArea {
        area_ha,
        geometry: Some(remainder),
    })
}
