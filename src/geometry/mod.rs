//! Geometry primitives and measures
//!
//! The core never inspects coordinates; every measurement and relation
//! goes through the [`GeometryEngine`] contract, injected at registry
//! construction.
//!
//! # Submodules
//! - `engine` - The geometry-engine contract and its error type
//! - `planar` - Default backend over the `geo` crate
//! - `grid` - Deterministic cell-based backend for tests and examples
//! - `hydro` - R-tree index of hydrography features
//! - `units` - Square-meter/hectare conversion helpers

mod engine;
mod grid;
mod hydro;
mod planar;

pub mod units;

pub use engine::{GeometryEngine, GeometryEngineError};
pub use grid::{GridEngine, GridGeometry, GRID_CELL_AREA_M2};
pub use hydro::{HydroFeature, HydrographyIndex};
pub use planar::PlanarEngine;
