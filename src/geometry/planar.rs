//! Default geometry backend over the `geo` crate
//!
//! Geometries are WGS84 longitude/latitude values. Areas are geodesic
//! (square meters); relations and boolean operations are planar, the
//! same split the upstream map SDKs use. Boolean-operation residue with
//! geodesic area at or below `tolerance²` square meters counts as
//! empty, which is how the configured tolerance absorbs slivers here.

use geo::{Area, BooleanOps, BoundingRect, GeodesicArea, Intersects, Relate};
use geo::{Geometry, MultiPolygon, Point};

use super::engine::{GeometryEngine, GeometryEngineError};

/// Engine over `geo` primitives.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarEngine;

impl PlanarEngine {
    pub fn new() -> Self {
        PlanarEngine
    }

    /// Polygonal view of a geometry, when it has one.
    fn polygonal(geometry: &Geometry<f64>) -> Option<MultiPolygon<f64>> {
        match geometry {
            Geometry::Polygon(p) => Some(MultiPolygon(vec![p.clone()])),
            Geometry::MultiPolygon(mp) => Some(mp.clone()),
            Geometry::Rect(r) => Some(MultiPolygon(vec![r.to_polygon()])),
            Geometry::Triangle(t) => Some(MultiPolygon(vec![t.to_polygon()])),
            _ => None,
        }
    }

    fn point(geometry: &Geometry<f64>) -> Option<Point<f64>> {
        match geometry {
            Geometry::Point(p) => Some(*p),
            _ => None,
        }
    }

    /// Boolean-op residue below the tolerance area floor is noise.
    fn is_empty(mp: &MultiPolygon<f64>, tolerance: f64) -> bool {
        if mp.0.is_empty() || mp.unsigned_area() == 0.0 {
            return true;
        }
        mp.geodesic_area_unsigned() <= tolerance * tolerance
    }

    fn require_polygonal(
        geometry: &Geometry<f64>,
        operation: &str,
    ) -> Result<MultiPolygon<f64>, GeometryEngineError> {
        Self::polygonal(geometry).ok_or_else(|| {
            GeometryEngineError::Unsupported(format!("{operation} requires a polygonal geometry"))
        })
    }
}

impl GeometryEngine for PlanarEngine {
    type Geometry = Geometry<f64>;

    fn area_m2(&self, geometry: &Self::Geometry) -> Result<f64, GeometryEngineError> {
        match Self::polygonal(geometry) {
            Some(mp) => Ok(mp.geodesic_area_unsigned()),
            None => Ok(0.0),
        }
    }

    fn intersect(
        &self,
        a: &Self::Geometry,
        b: &Self::Geometry,
        tolerance: f64,
    ) -> Result<Option<Self::Geometry>, GeometryEngineError> {
        // Point against polygon keeps the point, mirroring SDK behavior
        if let (Some(p), Some(mp)) = (Self::point(a), Self::polygonal(b)) {
            return Ok(mp.intersects(&p).then_some(Geometry::Point(p)));
        }
        if let (Some(mp), Some(p)) = (Self::polygonal(a), Self::point(b)) {
            return Ok(mp.intersects(&p).then_some(Geometry::Point(p)));
        }

        let a = Self::require_polygonal(a, "intersect")?;
        let b = Self::require_polygonal(b, "intersect")?;
        let result = a.intersection(&b);
        if Self::is_empty(&result, tolerance) {
            Ok(None)
        } else {
            Ok(Some(Geometry::MultiPolygon(result)))
        }
    }

    fn union(
        &self,
        parts: &[Self::Geometry],
        tolerance: f64,
    ) -> Result<Option<Self::Geometry>, GeometryEngineError> {
        let mut merged: Option<MultiPolygon<f64>> = None;
        for part in parts {
            let mp = Self::require_polygonal(part, "union")?;
            merged = Some(match merged {
                None => mp,
                Some(current) => current.union(&mp),
            });
        }
        match merged {
            Some(mp) if !Self::is_empty(&mp, tolerance) => Ok(Some(Geometry::MultiPolygon(mp))),
            _ => Ok(None),
        }
    }

    fn difference(
        &self,
        a: &Self::Geometry,
        b: &Self::Geometry,
        tolerance: f64,
    ) -> Result<Option<Self::Geometry>, GeometryEngineError> {
        let a = Self::require_polygonal(a, "difference")?;
        let b = Self::require_polygonal(b, "difference")?;
        let result = a.difference(&b);
        if Self::is_empty(&result, tolerance) {
            Ok(None)
        } else {
            Ok(Some(Geometry::MultiPolygon(result)))
        }
    }

    fn within(
        &self,
        inner: &Self::Geometry,
        outer: &Self::Geometry,
        tolerance: f64,
    ) -> Result<bool, GeometryEngineError> {
        if let (Some(a), Some(b)) = (Self::polygonal(inner), Self::polygonal(outer)) {
            // Tolerance-aware containment: nothing of `inner` may remain
            // outside `outer` beyond the sliver floor
            return Ok(Self::is_empty(&a.difference(&b), tolerance));
        }
        Ok(inner.relate(outer).is_within())
    }

    fn intersects(
        &self,
        a: &Self::Geometry,
        b: &Self::Geometry,
        _tolerance: f64,
    ) -> Result<bool, GeometryEngineError> {
        Ok(a.intersects(b))
    }

    fn equals(
        &self,
        a: &Self::Geometry,
        b: &Self::Geometry,
        tolerance: f64,
    ) -> Result<bool, GeometryEngineError> {
        if let (Some(a), Some(b)) = (Self::polygonal(a), Self::polygonal(b)) {
            // Symmetric difference below the sliver floor means equal
            return Ok(Self::is_empty(&a.xor(&b), tolerance));
        }
        Ok(a.relate(b).is_equal_topo())
    }

    fn contains(
        &self,
        outer: &Self::Geometry,
        inner: &Self::Geometry,
    ) -> Result<bool, GeometryEngineError> {
        Ok(outer.relate(inner).is_contains())
    }

    fn bounding_box(
        &self,
        geometry: &Self::Geometry,
    ) -> Result<Option<[f64; 4]>, GeometryEngineError> {
        Ok(geometry
            .bounding_rect()
            .map(|rect| [rect.min().x, rect.min().y, rect.max().x, rect.max().y]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn square(x0: f64, y0: f64, size: f64) -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
            (x: x0, y: y0),
        ])
    }

    const TOL: f64 = 0.1;

    #[test]
    fn test_geodesic_area_positive() {
        let engine = PlanarEngine::new();
        // ~1.1km square near the equator is roughly 120 ha
        let g = square(-47.0, -22.0, 0.01);
        let area = engine.area_m2(&g).unwrap();
        assert!(area > 1_000_000.0 && area < 2_000_000.0, "area = {area}");
    }

    #[test]
    fn test_point_area_is_zero() {
        let engine = PlanarEngine::new();
        let p = Geometry::Point(Point::new(-47.0, -22.0));
        assert_eq!(engine.area_m2(&p).unwrap(), 0.0);
    }

    #[test]
    fn test_intersect_disjoint_is_none() {
        let engine = PlanarEngine::new();
        let a = square(0.0, 0.0, 1.0);
        let b = square(5.0, 5.0, 1.0);
        assert!(engine.intersect(&a, &b, TOL).unwrap().is_none());
        assert!(!engine.intersects(&a, &b, TOL).unwrap());
    }

    #[test]
    fn test_intersect_overlapping() {
        let engine = PlanarEngine::new();
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 0.0, 2.0);
        let overlap = engine.intersect(&a, &b, TOL).unwrap().unwrap();
        // The overlap is the strip [1,2] x [0,2]
        let bounds = engine.bounding_box(&overlap).unwrap().unwrap();
        assert!((bounds[0] - 1.0).abs() < 1e-9);
        assert!((bounds[2] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_within_and_difference() {
        let engine = PlanarEngine::new();
        let outer = square(0.0, 0.0, 4.0);
        let inner = square(1.0, 1.0, 1.0);
        assert!(engine.within(&inner, &outer, TOL).unwrap());
        assert!(!engine.within(&outer, &inner, TOL).unwrap());

        let hole = engine.difference(&outer, &inner, TOL).unwrap().unwrap();
        let outer_area = engine.area_m2(&outer).unwrap();
        let inner_area = engine.area_m2(&inner).unwrap();
        let hole_area = engine.area_m2(&hole).unwrap();
        assert!((hole_area - (outer_area - inner_area)).abs() / outer_area < 1e-3);
    }

    #[test]
    fn test_point_within_polygon() {
        let engine = PlanarEngine::new();
        let outer = square(0.0, 0.0, 4.0);
        let inside = Geometry::Point(Point::new(2.0, 2.0));
        let outside = Geometry::Point(Point::new(9.0, 9.0));
        assert!(engine.within(&inside, &outer, TOL).unwrap());
        assert!(!engine.within(&outside, &outer, TOL).unwrap());
        assert!(engine
            .intersect(&inside, &outer, TOL)
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_equals_ignores_slivers() {
        let engine = PlanarEngine::new();
        let a = square(0.0, 0.0, 1.0);
        let b = square(0.0, 0.0, 1.0);
        assert!(engine.equals(&a, &b, TOL).unwrap());
        let c = square(0.0, 0.0, 2.0);
        assert!(!engine.equals(&a, &c, TOL).unwrap());
    }

    #[test]
    fn test_union_merges_parts() {
        let engine = PlanarEngine::new();
        let parts = vec![square(0.0, 0.0, 1.0), square(1.0, 0.0, 1.0)];
        let merged = engine.union(&parts, TOL).unwrap().unwrap();
        let bounds = engine.bounding_box(&merged).unwrap().unwrap();
        assert!((bounds[2] - 2.0).abs() < 1e-9);
        assert!(engine.union(&[], TOL).unwrap().is_none());
    }

    #[test]
    fn test_union_rejects_points() {
        let engine = PlanarEngine::new();
        let parts = vec![Geometry::Point(Point::new(0.0, 0.0))];
        assert!(engine.union(&parts, TOL).is_err());
    }
}
