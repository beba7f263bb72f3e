//! Deterministic cell-based geometry backend
//!
//! A geometry is a set of unit cells; every engine operation is exact
//! set arithmetic, which makes area and relation outcomes predictable
//! down to the hectare. One cell measures one hectare. Geometries can
//! be poisoned so that any operation touching them fails, which is how
//! the partial-failure paths get exercised.

use std::collections::BTreeSet;

use super::engine::{GeometryEngine, GeometryEngineError};

/// Area of one grid cell in square meters (one hectare).
pub const GRID_CELL_AREA_M2: f64 = 10_000.0;

/// A set of unit cells on an integer grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGeometry {
    cells: BTreeSet<(i64, i64)>,
    poisoned: bool,
}

impl GridGeometry {
    /// Axis-aligned rectangle covering `width` x `height` cells.
    pub fn rect(x0: i64, y0: i64, width: i64, height: i64) -> Self {
        let mut cells = BTreeSet::new();
        for x in x0..x0 + width {
            for y in y0..y0 + height {
                cells.insert((x, y));
            }
        }
        GridGeometry {
            cells,
            poisoned: false,
        }
    }

    /// Single cell; stands in for a point feature.
    pub fn cell(x: i64, y: i64) -> Self {
        GridGeometry::rect(x, y, 1, 1)
    }

    /// Geometry with no cells.
    pub fn empty() -> Self {
        GridGeometry {
            cells: BTreeSet::new(),
            poisoned: false,
        }
    }

    /// Geometry that fails every engine operation.
    pub fn poisoned() -> Self {
        GridGeometry {
            cells: BTreeSet::new(),
            poisoned: true,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn check(&self) -> Result<(), GeometryEngineError> {
        if self.poisoned {
            Err(GeometryEngineError::InvalidGeometry(
                "poisoned geometry".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

/// Engine over [`GridGeometry`] values. Tolerance parameters are
/// accepted and ignored; the grid is exact.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridEngine;

impl GridEngine {
    pub fn new() -> Self {
        GridEngine
    }
}

impl GeometryEngine for GridEngine {
    type Geometry = GridGeometry;

    fn area_m2(&self, geometry: &Self::Geometry) -> Result<f64, GeometryEngineError> {
        geometry.check()?;
        Ok(geometry.cells.len() as f64 * GRID_CELL_AREA_M2)
    }

    fn intersect(
        &self,
        a: &Self::Geometry,
        b: &Self::Geometry,
        _tolerance: f64,
    ) -> Result<Option<Self::Geometry>, GeometryEngineError> {
        a.check()?;
        b.check()?;
        let cells: BTreeSet<(i64, i64)> = a.cells.intersection(&b.cells).copied().collect();
        if cells.is_empty() {
            Ok(None)
        } else {
            Ok(Some(GridGeometry {
                cells,
                poisoned: false,
            }))
        }
    }

    fn union(
        &self,
        parts: &[Self::Geometry],
        _tolerance: f64,
    ) -> Result<Option<Self::Geometry>, GeometryEngineError> {
        let mut cells = BTreeSet::new();
        for part in parts {
            part.check()?;
            cells.extend(part.cells.iter().copied());
        }
        if cells.is_empty() && parts.is_empty() {
            Ok(None)
        } else {
            Ok(Some(GridGeometry {
                cells,
                poisoned: false,
            }))
        }
    }

    fn difference(
        &self,
        a: &Self::Geometry,
        b: &Self::Geometry,
        _tolerance: f64,
    ) -> Result<Option<Self::Geometry>, GeometryEngineError> {
        a.check()?;
        b.check()?;
        let cells: BTreeSet<(i64, i64)> = a.cells.difference(&b.cells).copied().collect();
        if cells.is_empty() {
            Ok(None)
        } else {
            Ok(Some(GridGeometry {
                cells,
                poisoned: false,
            }))
        }
    }

    fn within(
        &self,
        inner: &Self::Geometry,
        outer: &Self::Geometry,
        _tolerance: f64,
    ) -> Result<bool, GeometryEngineError> {
        inner.check()?;
        outer.check()?;
        Ok(inner.cells.is_subset(&outer.cells))
    }

    fn intersects(
        &self,
        a: &Self::Geometry,
        b: &Self::Geometry,
        _tolerance: f64,
    ) -> Result<bool, GeometryEngineError> {
        a.check()?;
        b.check()?;
        Ok(!a.cells.is_disjoint(&b.cells))
    }

    fn equals(
        &self,
        a: &Self::Geometry,
        b: &Self::Geometry,
        _tolerance: f64,
    ) -> Result<bool, GeometryEngineError> {
        a.check()?;
        b.check()?;
        Ok(a.cells == b.cells)
    }

    fn contains(
        &self,
        outer: &Self::Geometry,
        inner: &Self::Geometry,
    ) -> Result<bool, GeometryEngineError> {
        outer.check()?;
        inner.check()?;
        Ok(inner.cells.is_subset(&outer.cells))
    }

    fn bounding_box(
        &self,
        geometry: &Self::Geometry,
    ) -> Result<Option<[f64; 4]>, GeometryEngineError> {
        geometry.check()?;
        if geometry.cells.is_empty() {
            return Ok(None);
        }
        let mut bounds = [i64::MAX, i64::MAX, i64::MIN, i64::MIN];
        for (x, y) in &geometry.cells {
            bounds[0] = bounds[0].min(*x);
            bounds[1] = bounds[1].min(*y);
            bounds[2] = bounds[2].max(*x + 1);
            bounds[3] = bounds[3].max(*y + 1);
        }
        Ok(Some([
            bounds[0] as f64,
            bounds[1] as f64,
            bounds[2] as f64,
            bounds[3] as f64,
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_area_in_hectares() {
        let engine = GridEngine::new();
        let g = GridGeometry::rect(0, 0, 10, 10);
        assert_eq!(g.cell_count(), 100);
        assert_eq!(engine.area_m2(&g).unwrap(), 1_000_000.0);
        assert_eq!(engine.area_m2(&GridGeometry::empty()).unwrap(), 0.0);
    }

    #[test]
    fn test_set_relations() {
        let engine = GridEngine::new();
        let outer = GridGeometry::rect(0, 0, 4, 4);
        let inner = GridGeometry::rect(1, 1, 2, 2);
        let apart = GridGeometry::rect(10, 10, 2, 2);

        assert!(engine.within(&inner, &outer, 0.1).unwrap());
        assert!(engine.contains(&outer, &inner).unwrap());
        assert!(engine.intersects(&inner, &outer, 0.1).unwrap());
        assert!(!engine.intersects(&inner, &apart, 0.1).unwrap());
        assert!(engine.intersect(&inner, &apart, 0.1).unwrap().is_none());

        let clipped = engine.intersect(&outer, &inner, 0.1).unwrap().unwrap();
        assert!(engine.equals(&clipped, &inner, 0.1).unwrap());
    }

    #[test]
    fn test_union_and_difference() {
        let engine = GridEngine::new();
        let left = GridGeometry::rect(0, 0, 2, 2);
        let right = GridGeometry::rect(2, 0, 2, 2);
        let merged = engine
            .union(&[left.clone(), right.clone()], 0.1)
            .unwrap()
            .unwrap();
        assert_eq!(merged.cell_count(), 8);

        let diff = engine.difference(&merged, &left, 0.1).unwrap().unwrap();
        assert!(engine.equals(&diff, &right, 0.1).unwrap());
        assert!(engine.difference(&left, &merged, 0.1).unwrap().is_none());
        assert!(engine.union(&[], 0.1).unwrap().is_none());
    }

    #[test]
    fn test_poisoned_geometry_fails_operations() {
        let engine = GridEngine::new();
        let good = GridGeometry::rect(0, 0, 2, 2);
        let bad = GridGeometry::poisoned();
        assert!(engine.area_m2(&bad).is_err());
        assert!(engine.union(&[good.clone(), bad.clone()], 0.1).is_err());
        assert!(engine.within(&bad, &good, 0.1).is_err());
    }

    #[test]
    fn test_bounding_box() {
        let engine = GridEngine::new();
        let g = GridGeometry::rect(2, 3, 4, 5);
        assert_eq!(
            engine.bounding_box(&g).unwrap(),
            Some([2.0, 3.0, 6.0, 8.0])
        );
        assert_eq!(engine.bounding_box(&GridGeometry::empty()).unwrap(), None);
    }
}
