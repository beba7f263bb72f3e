//! Layer validation engine
//!
//! Decides acceptability of candidate geometries against the property,
//! the municipality boundary, and hydrography, and derives coverage and
//! anthropized-area figures. Rule outcomes are values; engine failures
//! are caught here and converted to rejections or safe defaults.
//!
//! # Submodules
//! - `types` - Structured rule outcomes
//! - `union_fold` - Partial-failure-tolerant union accumulator
//! - `rules` - Property, headquarters, and soil-coverage rules
//! - `coverage` - Complete-coverage and anthropized-area derivations

mod coverage;
mod rules;
mod types;
mod union_fold;

pub use coverage::{calculate_anthropized_area, validate_complete_coverage};
pub use rules::{validate_headquarters, validate_property_location, validate_soil_coverage};
pub use types::{
    AnthropizedArea, CoverageReport, CoverageStatus, SoilCoverageReport, ValidationReport,
};
pub use union_fold::{union_fold, UnionFold};
