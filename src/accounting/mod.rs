//! Area accounting engine
//!
//! Derives hectare figures from geometries: single areas, net area,
//! percentages, pairwise overlap, and coverage breakdowns. Engine
//! failures are logged and collapse to safe defaults (zero area, no
//! geometry) instead of propagating.

use tracing::warn;

use crate::geometry::units::square_meters_to_hectares;
use crate::geometry::{GeometryEngine, GeometryEngineError};

/// Intersection of two geometries with its area.
#[derive(Debug, Clone)]
pub struct OverlapReport<G> {
    pub geometry: Option<G>,
    pub area_ha: f64,
    pub has_overlap: bool,
}

impl<G> OverlapReport<G> {
    fn none() -> Self {
        OverlapReport {
            geometry: None,
            area_ha: 0.0,
            has_overlap: false,
        }
    }
}

/// How much of a base geometry the given parts cover.
#[derive(Debug, Clone)]
pub struct CoverageBreakdown<G> {
    pub coverage_geometry: Option<G>,
    pub covered_area_ha: f64,
    pub uncovered_area_ha: f64,
    pub coverage_percentage: f64,
}

/// Geodesic area in hectares; zero when the engine cannot measure the
/// geometry.
pub fn area_hectares<E: GeometryEngine>(engine: &E, geometry: &E::Geometry) -> f64 {
    match engine.area_m2(geometry) {
        Ok(area_m2) => square_meters_to_hectares(area_m2),
        Err(error) => {
            warn!(%error, "area computation failed, defaulting to zero");
            0.0
        }
    }
}

/// Property area minus administrative rights-of-way, floored at zero.
pub fn net_area(property_ha: f64, administrative_ha: f64) -> f64 {
    if property_ha <= 0.0 {
        return 0.0;
    }
    (property_ha - administrative_ha).max(0.0)
}

/// `value` as a percentage of `total`; zero for a non-positive total,
/// negative values clamped to zero first.
pub fn percentage(value: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    value.max(0.0) / total * 100.0
}

/// Intersection of two geometries with its area in hectares.
pub fn overlap<E: GeometryEngine>(
    engine: &E,
    tolerance: f64,
    a: &E::Geometry,
    b: &E::Geometry,
) -> OverlapReport<E::Geometry> {
    match overlap_inner(engine, tolerance, a, b) {
        Ok(report) => report,
        Err(error) => {
            warn!(%error, "overlap computation failed");
            OverlapReport::none()
        }
    }
}

fn overlap_inner<E: GeometryEngine>(
    engine: &E,
    tolerance: f64,
    a: &E::Geometry,
    b: &E::Geometry,
) -> Result<OverlapReport<E::Geometry>, GeometryEngineError> {
    let Some(geometry) = engine.intersect(a, b, tolerance)? else {
        return Ok(OverlapReport::none());
    };
    let area_ha = square_meters_to_hectares(engine.area_m2(&geometry)?);
    Ok(OverlapReport {
        geometry: Some(geometry),
        has_overlap: area_ha > 0.0,
        area_ha,
    })
}

/// Coverage of `base` by the union of `parts`. Degenerate inputs (no
/// parts, failed union, no intersection) report zero covered area and
/// the full base as uncovered.
pub fn coverage<E: GeometryEngine>(
    engine: &E,
    tolerance: f64,
    base: &E::Geometry,
    parts: &[&E::Geometry],
) -> CoverageBreakdown<E::Geometry> {
    match coverage_inner(engine, tolerance, base, parts) {
        Ok(breakdown) => breakdown,
        Err(error) => {
            warn!(%error, "coverage computation failed");
            CoverageBreakdown {
                coverage_geometry: None,
                covered_area_ha: 0.0,
                uncovered_area_ha: 0.0,
                coverage_percentage: 0.0,
            }
        }
    }
}

fn coverage_inner<E: GeometryEngine>(
    engine: &E,
    tolerance: f64,
    base: &E::Geometry,
    parts: &[&E::Geometry],
) -> Result<CoverageBreakdown<E::Geometry>, GeometryEngineError> {
    let base_m2 = engine.area_m2(base)?;
    let base_ha = square_meters_to_hectares(base_m2);

    let uncovered = |geometry| CoverageBreakdown {
        coverage_geometry: geometry,
        covered_area_ha: 0.0,
        uncovered_area_ha: base_ha,
        coverage_percentage: 0.0,
    };

    if parts.is_empty() {
        return Ok(uncovered(None));
    }

    let folded = crate::validation::union_fold(engine, tolerance, parts);
    let Some(union) = folded.geometry else {
        return Ok(uncovered(None));
    };

    let Some(intersection) = engine.intersect(&union, base, tolerance)? else {
        return Ok(uncovered(None));
    };

    let covered_m2 = engine.area_m2(&intersection)?;
    let covered_ha = square_meters_to_hectares(covered_m2);
    Ok(CoverageBreakdown {
        coverage_geometry: Some(intersection),
        covered_area_ha: covered_ha,
        uncovered_area_ha: base_ha - covered_ha,
        coverage_percentage: percentage(covered_m2, base_m2),
    })
}
