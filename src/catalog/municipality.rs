//! Accepted-municipality catalog
//!
//! Municipality identifiers are IBGE codes; São Paulo state codes carry
//! the `35` prefix. Recognition requires both the prefix and allow-list
//! membership. A boundary geometry may be registered per municipality
//! for the geometric containment check.

use std::collections::{BTreeSet, HashMap};

/// IBGE state-code prefix for São Paulo municipalities.
pub const STATE_CODE_PREFIX: &str = "35";

/// São Paulo municipalities accepted by default.
const DEFAULT_ALLOW_LIST: &[&str] = &[
    "3502804", // Araçatuba
    "3506003", // Bauru
    "3507506", // Botucatu
    "3509502", // Campinas
    "3510609", // Carapicuíba
    "3513801", // Diadema
    "3516200", // Franca
    "3518800", // Guarulhos
    "3523107", // Itaquaquecetuba
    "3525904", // Jundiaí
    "3526902", // Limeira
    "3529005", // Marília
    "3529401", // Mauá
    "3530607", // Mogi das Cruzes
    "3534401", // Osasco
    "3538709", // Piracicaba
    "3541406", // Presidente Prudente
    "3543402", // Ribeirão Preto
    "3547809", // Santo André
    "3548500", // Santos
    "3548708", // São Bernardo do Campo
    "3549805", // São José do Rio Preto
    "3549904", // São José dos Campos
    "3550308", // São Paulo
    "3552205", // Sorocaba
    "3554102", // Taubaté
];

/// Allow-list of accepted municipality codes plus registered boundary
/// geometries.
#[derive(Debug, Clone)]
pub struct MunicipalityCatalog<G> {
    allowed: BTreeSet<String>,
    boundaries: HashMap<String, G>,
}

impl<G> MunicipalityCatalog<G> {
    /// Empty catalog; nothing is recognized until allowed.
    pub fn new() -> Self {
        Self {
            allowed: BTreeSet::new(),
            boundaries: HashMap::new(),
        }
    }

    /// Catalog seeded with the default São Paulo allow-list.
    pub fn with_defaults() -> Self {
        Self {
            allowed: DEFAULT_ALLOW_LIST.iter().map(|id| id.to_string()).collect(),
            boundaries: HashMap::new(),
        }
    }

    /// Add a municipality code to the allow-list.
    pub fn allow(&mut self, id: impl Into<String>) {
        self.allowed.insert(id.into());
    }

    /// A code is recognized when it carries the state prefix and appears
    /// in the allow-list.
    pub fn is_recognized(&self, id: &str) -> bool {
        id.starts_with(STATE_CODE_PREFIX) && self.allowed.contains(id)
    }

    /// Register the boundary geometry for a municipality.
    pub fn register_boundary(&mut self, id: impl Into<String>, geometry: G) {
        self.boundaries.insert(id.into(), geometry);
    }

    /// Boundary geometry for a municipality, if registered.
    pub fn boundary(&self, id: &str) -> Option<&G> {
        self.boundaries.get(id)
    }

    /// Number of accepted municipality codes.
    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl<G> Default for MunicipalityCatalog<G> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_allow_list_both_required() {
        let catalog: MunicipalityCatalog<()> = MunicipalityCatalog::with_defaults();
        assert!(catalog.is_recognized("3550308"));
        assert!(catalog.is_recognized("3509502"));
        // Right prefix, not in the allow-list
        assert!(!catalog.is_recognized("3599999"));
        // Allow-listed shape but wrong state prefix
        assert!(!catalog.is_recognized("4106902"));
        assert!(!catalog.is_recognized(""));
    }

    #[test]
    fn test_custom_allow_and_boundary() {
        let mut catalog: MunicipalityCatalog<&str> = MunicipalityCatalog::new();
        assert!(!catalog.is_recognized("3550308"));
        catalog.allow("3550308");
        assert!(catalog.is_recognized("3550308"));

        assert!(catalog.boundary("3550308").is_none());
        catalog.register_boundary("3550308", "boundary");
        assert_eq!(catalog.boundary("3550308"), Some(&"boundary"));
    }
}
