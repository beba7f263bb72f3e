//! Partial-failure-tolerant union accumulator
//!
//! Unions are folded pairwise so one failing step keeps the last good
//! accumulator instead of aborting the whole batch. Failing step
//! indices are reported for inspection.

use tracing::warn;

use crate::geometry::GeometryEngine;

/// Result of folding a geometry list into one union.
#[derive(Debug, Clone)]
pub struct UnionFold<G> {
    /// The accumulated union; `None` only for an empty input.
    pub geometry: Option<G>,
    /// Zero-based indices of parts whose union step failed and was
    /// skipped.
    pub failed_steps: Vec<usize>,
}

/// Fold `parts` into a single union. A single part is used directly;
/// a failing pairwise union (engine error or empty result) records the
/// step and continues with the previous accumulator.
pub fn union_fold<E: GeometryEngine>(
    engine: &E,
    tolerance: f64,
    parts: &[&E::Geometry],
) -> UnionFold<E::Geometry> {
    let mut accumulator: Option<E::Geometry> = None;
    let mut failed_steps = Vec::new();

    for (step, part) in parts.iter().enumerate() {
        match accumulator.take() {
            None => accumulator = Some((*part).clone()),
            Some(current) => {
                match engine.union(&[current.clone(), (*part).clone()], tolerance) {
                    Ok(Some(merged)) => accumulator = Some(merged),
                    Ok(None) => {
                        warn!(step, "union step produced nothing, keeping accumulator");
                        failed_steps.push(step);
                        accumulator = Some(current);
                    }
                    Err(error) => {
                        warn!(step, %error, "union step failed, keeping accumulator");
                        failed_steps.push(step);
                        accumulator = Some(current);
                    }
                }
            }
        }
    }

    UnionFold {
        geometry: accumulator,
        failed_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{GridEngine, GridGeometry};

    #[test]
    fn test_empty_input_yields_none() {
        let engine = GridEngine::new();
        let folded = union_fold(&engine, 0.1, &[]);
        assert!(folded.geometry.is_none());
        assert!(folded.failed_steps.is_empty());
    }

    #[test]
    fn test_single_part_used_directly() {
        let engine = GridEngine::new();
        let only = GridGeometry::rect(0, 0, 2, 2);
        let folded = union_fold(&engine, 0.1, &[&only]);
        assert_eq!(folded.geometry, Some(only));
        assert!(folded.failed_steps.is_empty());
    }

    #[test]
    fn test_accumulates_all_parts() {
        let engine = GridEngine::new();
        let a = GridGeometry::rect(0, 0, 2, 2);
        let b = GridGeometry::rect(2, 0, 2, 2);
        let c = GridGeometry::rect(4, 0, 2, 2);
        let folded = union_fold(&engine, 0.1, &[&a, &b, &c]);
        assert_eq!(folded.geometry.unwrap().cell_count(), 12);
        assert!(folded.failed_steps.is_empty());
    }

    #[test]
    fn test_failed_step_keeps_accumulator_and_is_reported() {
        let engine = GridEngine::new();
        let a = GridGeometry::rect(0, 0, 2, 2);
        let bad = GridGeometry::poisoned();
        let c = GridGeometry::rect(2, 0, 2, 2);
        let folded = union_fold(&engine, 0.1, &[&a, &bad, &c]);
        // Step 1 failed; steps 0 and 2 still merged
        assert_eq!(folded.failed_steps, vec![1]);
        assert_eq!(folded.geometry.unwrap().cell_count(), 8);
    }

    #[test]
    fn test_poisoned_first_part_survives_as_accumulator() {
        let engine = GridEngine::new();
        let bad = GridGeometry::poisoned();
        let b = GridGeometry::rect(0, 0, 2, 2);
        // The first part becomes the accumulator unconditionally; the
        // next union step then fails against it
        let folded = union_fold(&engine, 0.1, &[&bad, &b]);
        assert_eq!(folded.failed_steps, vec![1]);
        assert_eq!(folded.geometry, Some(bad));
    }
}
