//! Registry configuration
//!
//! One configuration value injected at registry construction; every
//! geometry-engine call receives its tolerance from here.

/// Policy knobs for validation and area accounting.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Positional/area tolerance passed to every geometry-engine call,
    /// in the engine's linear unit. Absorbs floating-point and
    /// tessellation slivers.
    pub tolerance: f64,
    /// Minimum property/municipality overlap ratio (percent) accepted
    /// when the property is not fully within the municipality boundary.
    pub municipality_overlap_min_pct: f64,
    /// Coverage percentage at or above which the property counts as
    /// completely covered.
    pub complete_coverage_min_pct: f64,
    /// Accept a property on municipality-id match alone when no boundary
    /// geometry is registered for that municipality. Off by default: the
    /// id-only check cannot detect a property drawn elsewhere.
    pub accept_unverified_municipality: bool,
    /// Re-run category validation (and clipping) on `update_layer`. Off
    /// by default: only additions are validated.
    pub revalidate_on_update: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.1,
            municipality_overlap_min_pct: 90.0,
            complete_coverage_min_pct: 99.9,
            accept_unverified_municipality: false,
            revalidate_on_update: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = RegistryConfig::default();
        assert_eq!(cfg.tolerance, 0.1);
        assert_eq!(cfg.municipality_overlap_min_pct, 90.0);
        assert_eq!(cfg.complete_coverage_min_pct, 99.9);
        assert!(!cfg.accept_unverified_municipality);
        assert!(!cfg.revalidate_on_update);
    }
}
