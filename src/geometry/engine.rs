//! Geometry-engine contract
//!
//! Measurement and relation operations over an opaque geometry type.
//! Backends decide the coordinate model; callers thread one configured
//! tolerance through every call.

use thiserror::Error;

/// Failure inside a geometry backend. Expected rule failures are never
/// reported this way; this is reserved for malformed geometry and
/// unsupported operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryEngineError {
    /// The geometry cannot be processed (degenerate rings, poisoned
    /// test fixtures, wrong dimensionality for the operation).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// The backend does not support the requested operation for this
    /// geometry combination.
    #[error("unsupported operation: {0}")]
    Unsupported(String),
    /// The operation ran and failed.
    #[error("geometry operation failed: {0}")]
    OperationFailed(String),
}

/// Measurement and relation operations the validation and accounting
/// engines depend on.
///
/// `tolerance` is a small positional/area epsilon in the backend's
/// linear unit; backends use it to absorb floating-point and
/// tessellation slivers where the operation allows.
pub trait GeometryEngine {
    type Geometry: Clone;

    /// Geodesic area in square meters. Zero-dimensional geometries
    /// report 0.
    fn area_m2(&self, geometry: &Self::Geometry) -> Result<f64, GeometryEngineError>;

    /// Intersection of two geometries; `None` when they do not overlap.
    fn intersect(
        &self,
        a: &Self::Geometry,
        b: &Self::Geometry,
        tolerance: f64,
    ) -> Result<Option<Self::Geometry>, GeometryEngineError>;

    /// Union of all parts; `None` for an empty input.
    fn union(
        &self,
        parts: &[Self::Geometry],
        tolerance: f64,
    ) -> Result<Option<Self::Geometry>, GeometryEngineError>;

    /// `a` minus `b`; `None` when nothing remains.
    fn difference(
        &self,
        a: &Self::Geometry,
        b: &Self::Geometry,
        tolerance: f64,
    ) -> Result<Option<Self::Geometry>, GeometryEngineError>;

    /// Whether `inner` lies within `outer`.
    fn within(
        &self,
        inner: &Self::Geometry,
        outer: &Self::Geometry,
        tolerance: f64,
    ) -> Result<bool, GeometryEngineError>;

    /// Whether the two geometries share any point.
    fn intersects(
        &self,
        a: &Self::Geometry,
        b: &Self::Geometry,
        tolerance: f64,
    ) -> Result<bool, GeometryEngineError>;

    /// Whether the two geometries are equal up to the tolerance.
    fn equals(
        &self,
        a: &Self::Geometry,
        b: &Self::Geometry,
        tolerance: f64,
    ) -> Result<bool, GeometryEngineError>;

    /// Whether `outer` contains `inner`.
    fn contains(
        &self,
        outer: &Self::Geometry,
        inner: &Self::Geometry,
    ) -> Result<bool, GeometryEngineError>;

    /// Axis-aligned bounds as `[min_x, min_y, max_x, max_y]`; `None`
    /// for an empty geometry.
    fn bounding_box(
        &self,
        geometry: &Self::Geometry,
    ) -> Result<Option<[f64; 4]>, GeometryEngineError>;
}
