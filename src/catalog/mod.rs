//! Layer classification catalog
//!
//! Static knowledge about the declared layer set: type/category
//! enumeration, display names, default symbology, the municipality
//! allow-list, and user-facing message constants.
//!
//! # Submodules
//! - `types` - Layer type and category enumerations
//! - `symbology` - Default rendering symbology per layer type
//! - `municipality` - Accepted-municipality catalog and boundaries
//! - `messages` - User-facing message constants

mod types;
mod symbology;
mod municipality;

pub mod messages;

pub use types::{LayerCategory, LayerType};
pub use symbology::{default_symbology, Symbology};
pub use municipality::{MunicipalityCatalog, STATE_CODE_PREFIX};
