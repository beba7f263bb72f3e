//! Land-parcel validation and area accounting for rural-property
//! registration workflows.
//!
//! Callers declare spatial layers (property boundary, headquarters,
//! vegetation classes, rights-of-way, reserves) against a satellite
//! map; this crate decides whether each geometry is acceptable
//! (inside the municipality, inside the property, clear of
//! hydrography), clips spill-over to the property boundary, and keeps
//! the derived figures current: net area, anthropized area, and
//! coverage completeness.
//!
//! Geometry math goes through the [`GeometryEngine`] contract injected
//! at construction. [`PlanarEngine`] backs it with the `geo` crate;
//! [`GridEngine`] is a deterministic cell-based backend for tests.
//!
//! ```
//! use landparcel::{GridEngine, GridGeometry, LayerRegistry, LayerType, NewLayer, RegistryConfig};
//! use landparcel::catalog::MunicipalityCatalog;
//!
//! let mut municipalities = MunicipalityCatalog::with_defaults();
//! municipalities.register_boundary("3550308", GridGeometry::rect(0, 0, 20, 20));
//! let mut registry =
//!     LayerRegistry::with_config(GridEngine::new(), RegistryConfig::default(), municipalities);
//!
//! registry.set_municipality("3550308", "São Paulo");
//! let outcome = registry.add_layer(NewLayer {
//!     layer_type: LayerType::Property,
//!     name: "Fazenda Santa Clara".to_string(),
//!     geometry: GridGeometry::rect(2, 2, 10, 10),
//!     symbol_type: None,
//! });
//! assert!(outcome.success);
//! assert_eq!(registry.property_record().property_area_ha, 100.0);
//! ```

pub mod accounting;
pub mod catalog;
pub mod config;
pub mod geometry;
pub mod registry;
pub mod validation;

pub use catalog::{LayerCategory, LayerType, MunicipalityCatalog, Symbology};
pub use config::RegistryConfig;
pub use geometry::{
    GeometryEngine, GeometryEngineError, GridEngine, GridGeometry, HydrographyIndex, PlanarEngine,
};
pub use registry::{Layer, LayerRegistry, MutationOutcome, NewLayer, PropertyRecord, RegistrySnapshot};
pub use validation::{CoverageReport, CoverageStatus, ValidationReport};
