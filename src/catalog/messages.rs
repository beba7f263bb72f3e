//! User-facing message constants

pub const MUNICIPALITY_NOT_SELECTED: &str = "No municipality selected.";
pub const MUNICIPALITY_BOUNDARY_UNAVAILABLE: &str =
    "Municipality boundary is unavailable for verification.";
pub const INVALID_LOCATION: &str =
    "The property must lie within the selected municipality in São Paulo state.";
pub const PROPERTY_VALIDATED: &str = "Property is valid for the selected municipality.";
pub const PROPERTY_REQUIRED: &str = "The property boundary must be drawn first.";

pub const HEADQUARTERS_INSIDE: &str = "The headquarters must be inside the property boundary.";
pub const HEADQUARTERS_HYDROGRAPHY: &str = "The headquarters cannot be placed over hydrography.";
pub const HEADQUARTERS_VALIDATED: &str = "Headquarters validated.";

pub const LAYER_INSIDE: &str = "The layer must be inside the property boundary.";
pub const LAYER_CLIPPED: &str = "Layer clipped to the property boundary.";
pub const LAYER_VALIDATED: &str = "Layer validated.";

pub const NO_LAYERS: &str = "No layers were found.";
pub const COVERAGE_COMPLETE: &str = "Property coverage is complete.";
pub const COVERAGE_MERGE_FAILED: &str = "Could not merge layer geometries.";

pub const LAYER_DATA_INCOMPLETE: &str = "Layer data is incomplete.";
pub const LAYER_NOT_FOUND: &str = "Layer not found.";
pub const LAYER_ADDED: &str = "Layer added.";
pub const LAYER_UPDATED: &str = "Layer updated.";
pub const LAYER_REMOVED: &str = "Layer removed.";

pub const VALIDATION_UNAVAILABLE: &str = "Could not complete geometric validation.";
