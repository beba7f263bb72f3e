//! Property, headquarters, and soil-coverage rules

use tracing::warn;

use crate::accounting;
use crate::catalog::{messages, LayerType, MunicipalityCatalog};
use crate::config::RegistryConfig;
use crate::geometry::{GeometryEngine, GeometryEngineError, HydrographyIndex};

use super::types::{SoilCoverageReport, ValidationReport};

/// Validate a property boundary against the declared municipality.
///
/// The municipality id must carry the state prefix and appear in the
/// allow-list before any geometric test runs. With a registered
/// boundary the property must be within it, or overlap it by at least
/// the configured ratio. Without a boundary the outcome depends on
/// `accept_unverified_municipality`.
pub fn validate_property_location<E: GeometryEngine>(
    engine: &E,
    config: &RegistryConfig,
    municipalities: &MunicipalityCatalog<E::Geometry>,
    property: &E::Geometry,
    municipality_id: Option<&str>,
) -> ValidationReport {
    let id = match municipality_id {
        Some(id) if !id.is_empty() => id,
        _ => return ValidationReport::rejected(messages::MUNICIPALITY_NOT_SELECTED),
    };

    if !municipalities.is_recognized(id) {
        return ValidationReport::rejected(messages::INVALID_LOCATION);
    }

    let Some(boundary) = municipalities.boundary(id) else {
        if config.accept_unverified_municipality {
            return ValidationReport::accepted(messages::PROPERTY_VALIDATED);
        }
        return ValidationReport::rejected(messages::MUNICIPALITY_BOUNDARY_UNAVAILABLE);
    };

    match boundary_check(engine, config, property, boundary) {
        Ok(report) => report,
        Err(error) => {
            warn!(municipality = id, %error, "property location check failed");
            ValidationReport::rejected(messages::VALIDATION_UNAVAILABLE)
        }
    }
}

/// Containment against the municipality boundary, falling back to the
/// overlap-ratio policy when the property is not fully within it.
fn boundary_check<E: GeometryEngine>(
    engine: &E,
    config: &RegistryConfig,
    property: &E::Geometry,
    boundary: &E::Geometry,
) -> Result<ValidationReport, GeometryEngineError> {
    if engine.within(property, boundary, config.tolerance)? {
        return Ok(ValidationReport::accepted(messages::PROPERTY_VALIDATED));
    }

    let Some(intersection) = engine.intersect(property, boundary, config.tolerance)? else {
        return Ok(ValidationReport::rejected(messages::INVALID_LOCATION));
    };

    let overlap_m2 = engine.area_m2(&intersection)?;
    let property_m2 = engine.area_m2(property)?;
    let overlap_pct = accounting::percentage(overlap_m2, property_m2);

    if overlap_pct < config.municipality_overlap_min_pct {
        return Ok(ValidationReport::rejected(format!(
            "The property must lie mostly within the municipality (current overlap: {:.2}%).",
            overlap_pct
        )));
    }
    Ok(ValidationReport::accepted(messages::PROPERTY_VALIDATED))
}

/// Validate a headquarters point: inside the property, clear of every
/// hydrography feature.
pub fn validate_headquarters<E>(
    engine: &E,
    config: &RegistryConfig,
    headquarters: &E::Geometry,
    property: &E::Geometry,
    hydrography: &HydrographyIndex<E::Geometry>,
) -> ValidationReport
where
    E: GeometryEngine + Sync,
    E::Geometry: Sync,
{
    match engine.within(headquarters, property, config.tolerance) {
        Ok(false) => return ValidationReport::rejected(messages::HEADQUARTERS_INSIDE),
        Ok(true) => {}
        Err(error) => {
            warn!(%error, "headquarters containment check failed");
            return ValidationReport::rejected(messages::VALIDATION_UNAVAILABLE);
        }
    }

    match hydrography.intersects_any(engine, headquarters, config.tolerance) {
        Ok(true) => ValidationReport::rejected(messages::HEADQUARTERS_HYDROGRAPHY),
        Ok(false) => ValidationReport::accepted(messages::HEADQUARTERS_VALIDATED),
        Err(error) => {
            warn!(%error, "headquarters hydrography check failed");
            ValidationReport::rejected(messages::VALIDATION_UNAVAILABLE)
        }
    }
}

/// Validate a soil-coverage (or other property-bound) layer. A layer
/// that spills past the property is accepted with a `clip_result` the
/// caller must store in place of the original.
pub fn validate_soil_coverage<E: GeometryEngine>(
    engine: &E,
    config: &RegistryConfig,
    layer: &E::Geometry,
    property: &E::Geometry,
    layer_type: LayerType,
) -> SoilCoverageReport<E::Geometry> {
    match clip_to_property(engine, config, layer, property) {
        Ok(report) => report,
        Err(error) => {
            warn!(layer = %layer_type, %error, "soil coverage check failed");
            SoilCoverageReport {
                is_valid: false,
                message: messages::VALIDATION_UNAVAILABLE.to_string(),
                clip_result: None,
            }
        }
    }
}

fn clip_to_property<E: GeometryEngine>(
    engine: &E,
    config: &RegistryConfig,
    layer: &E::Geometry,
    property: &E::Geometry,
) -> Result<SoilCoverageReport<E::Geometry>, GeometryEngineError> {
    let Some(intersection) = engine.intersect(layer, property, config.tolerance)? else {
        return Ok(SoilCoverageReport {
            is_valid: false,
            message: messages::LAYER_INSIDE.to_string(),
            clip_result: None,
        });
    };

    if !engine.equals(layer, &intersection, config.tolerance)? {
        return Ok(SoilCoverageReport {
            is_valid: true,
            message: messages::LAYER_CLIPPED.to_string(),
            clip_result: Some(intersection),
        });
    }

    Ok(SoilCoverageReport {
        is_valid: true,
        message: messages::LAYER_VALIDATED.to_string(),
        clip_result: None,
    })
}
