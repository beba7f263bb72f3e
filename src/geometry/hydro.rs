//! Spatial index of hydrography features
//!
//! R-tree over engine-reported bounding boxes. Probes query the tree
//! with a tolerance-expanded envelope to collect candidates, then run
//! the precise intersection test through the engine; large candidate
//! sets fan out across threads.

use rayon::prelude::*;
use rstar::{RTree, RTreeObject, AABB};

use super::engine::{GeometryEngine, GeometryEngineError};

/// Candidate counts past this run the precise tests in parallel.
const PARALLEL_THRESHOLD: usize = 32;

/// One indexed hydrography feature with its cached envelope.
#[derive(Debug, Clone)]
pub struct HydroFeature<G> {
    pub geometry: G,
    envelope: AABB<[f64; 2]>,
}

impl<G> RTreeObject for HydroFeature<G> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// R-tree backed collection of hydrography geometries.
#[derive(Debug)]
pub struct HydrographyIndex<G> {
    tree: RTree<HydroFeature<G>>,
}

impl<G: Clone> HydrographyIndex<G> {
    /// Empty index; every probe misses.
    pub fn new() -> Self {
        HydrographyIndex { tree: RTree::new() }
    }

    /// Index the given features using engine-reported bounds. Features
    /// with no bounds (empty geometries) are skipped.
    pub fn build<E>(engine: &E, features: Vec<G>) -> Result<Self, GeometryEngineError>
    where
        E: GeometryEngine<Geometry = G>,
    {
        let mut items = Vec::with_capacity(features.len());
        for geometry in features {
            if let Some(bounds) = engine.bounding_box(&geometry)? {
                items.push(HydroFeature {
                    geometry,
                    envelope: AABB::from_corners([bounds[0], bounds[1]], [bounds[2], bounds[3]]),
                });
            }
        }
        Ok(HydrographyIndex {
            tree: RTree::bulk_load(items),
        })
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Features whose envelope intersects `bounds` expanded by
    /// `tolerance` on every side.
    pub fn candidates(&self, bounds: [f64; 4], tolerance: f64) -> Vec<&HydroFeature<G>> {
        let search = AABB::from_corners(
            [bounds[0] - tolerance, bounds[1] - tolerance],
            [bounds[2] + tolerance, bounds[3] + tolerance],
        );
        self.tree.locate_in_envelope_intersecting(&search).collect()
    }

    /// Whether the probe geometry intersects any indexed feature.
    pub fn intersects_any<E>(
        &self,
        engine: &E,
        probe: &G,
        tolerance: f64,
    ) -> Result<bool, GeometryEngineError>
    where
        E: GeometryEngine<Geometry = G> + Sync,
        G: Sync,
    {
        if self.is_empty() {
            return Ok(false);
        }
        let Some(bounds) = engine.bounding_box(probe)? else {
            return Ok(false);
        };
        let candidates = self.candidates(bounds, tolerance);

        if candidates.len() <= PARALLEL_THRESHOLD {
            for candidate in candidates {
                if engine.intersects(probe, &candidate.geometry, tolerance)? {
                    return Ok(true);
                }
            }
            return Ok(false);
        }

        let hits: Result<Vec<bool>, GeometryEngineError> = candidates
            .par_iter()
            .map(|candidate| engine.intersects(probe, &candidate.geometry, tolerance))
            .collect();
        Ok(hits?.into_iter().any(|hit| hit))
    }
}

impl<G: Clone> Default for HydrographyIndex<G> {
    fn default() -> Self {
        Self::new()
    }
}
