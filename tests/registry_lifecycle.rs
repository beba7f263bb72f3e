// Lifecycle tests for the layer registry: preconditions, replacement,
// cascade, and status signals.
use landparcel::catalog::{messages, MunicipalityCatalog};
use landparcel::{
    GridEngine, GridGeometry, LayerRegistry, LayerType, MutationOutcome, NewLayer, RegistryConfig,
    Symbology,
};

fn registry_with(config: RegistryConfig) -> LayerRegistry<GridEngine> {
    let mut municipalities = MunicipalityCatalog::with_defaults();
    municipalities.register_boundary("3550308", GridGeometry::rect(0, 0, 40, 40));
    let mut registry = LayerRegistry::with_config(GridEngine::new(), config, municipalities);
    registry.set_municipality("3550308", "São Paulo");
    registry
}

fn registry() -> LayerRegistry<GridEngine> {
    registry_with(RegistryConfig::default())
}

fn add(
    registry: &mut LayerRegistry<GridEngine>,
    layer_type: LayerType,
    name: &str,
    geometry: GridGeometry,
) -> MutationOutcome {
    registry.add_layer(NewLayer {
        layer_type,
        name: name.to_string(),
        geometry,
        symbol_type: None,
    })
}

#[test]
fn test_layers_require_property_first() {
    let mut registry = registry();

    for (layer_type, geometry) in [
        (LayerType::Consolidated, GridGeometry::rect(0, 0, 2, 2)),
        (LayerType::Roadway, GridGeometry::rect(0, 0, 2, 1)),
        (LayerType::Reserve, GridGeometry::rect(2, 2, 2, 2)),
        (LayerType::Headquarters, GridGeometry::cell(1, 1)),
    ] {
        let outcome = add(&mut registry, layer_type, "too early", geometry);
        assert!(!outcome.success);
        assert_eq!(outcome.message, messages::PROPERTY_REQUIRED);
    }
    assert_eq!(registry.layer_count(), 0);
}

#[test]
fn test_property_requires_municipality_selection() {
    let mut municipalities = MunicipalityCatalog::with_defaults();
    municipalities.register_boundary("3550308", GridGeometry::rect(0, 0, 40, 40));
    let mut registry =
        LayerRegistry::with_config(GridEngine::new(), RegistryConfig::default(), municipalities);

    let outcome = add(
        &mut registry,
        LayerType::Property,
        "no municipality",
        GridGeometry::rect(0, 0, 10, 10),
    );
    assert!(!outcome.success);
    assert_eq!(outcome.message, messages::MUNICIPALITY_NOT_SELECTED);
    assert!(!registry.is_property_defined());
}

#[test]
fn test_add_then_replace_property() {
    let mut registry = registry();

    let outcome = add(
        &mut registry,
        LayerType::Property,
        "boundary",
        GridGeometry::rect(0, 0, 10, 10),
    );
    assert!(outcome.success, "{}", outcome.message);
    assert_eq!(registry.property_record().property_area_ha, 100.0);

    // Same id replaces, it does not duplicate
    let outcome = add(
        &mut registry,
        LayerType::Property,
        "boundary v2",
        GridGeometry::rect(0, 0, 12, 10),
    );
    assert!(outcome.success);
    assert_eq!(registry.layer_count(), 1);
    assert_eq!(registry.property_record().property_area_ha, 120.0);
    assert_eq!(registry.layer(LayerType::Property).unwrap().name, "boundary v2");
}

#[test]
fn test_add_then_delete_property_round_trips_to_empty() {
    let mut registry = registry();

    add(
        &mut registry,
        LayerType::Property,
        "boundary",
        GridGeometry::rect(0, 0, 10, 10),
    );
    let outcome = registry.delete_layer(LayerType::Property);
    assert!(outcome.success);

    assert_eq!(registry.layer_count(), 0);
    assert!(registry.geometry(LayerType::Property).is_none());
    assert!(!registry.is_property_defined());

    let record = registry.property_record();
    assert_eq!(record.property_area_ha, 0.0);
    assert_eq!(record.administrative_service_area_ha, 0.0);
    assert_eq!(record.net_area_ha, 0.0);
    assert_eq!(record.anthropized_area_ha, 0.0);
    assert_eq!(record.coverage_percentage, 0.0);
    // The municipality selection is caller input, not derived state
    assert_eq!(record.municipality_id.as_deref(), Some("3550308"));
}

#[test]
fn test_deleting_property_cascades_to_all_layers() {
    let mut registry = registry();

    add(
        &mut registry,
        LayerType::Property,
        "boundary",
        GridGeometry::rect(0, 0, 10, 10),
    );
    add(
        &mut registry,
        LayerType::Consolidated,
        "consolidated",
        GridGeometry::rect(0, 0, 4, 4),
    );
    add(
        &mut registry,
        LayerType::Native,
        "native",
        GridGeometry::rect(4, 0, 4, 4),
    );
    add(
        &mut registry,
        LayerType::Roadway,
        "roadway",
        GridGeometry::rect(0, 9, 10, 1),
    );
    assert_eq!(registry.layer_count(), 4);

    let outcome = registry.delete_layer(LayerType::Property);
    assert!(outcome.success);
    assert_eq!(registry.layer_count(), 0);
    for layer_type in LayerType::ALL {
        assert!(registry.geometry(layer_type).is_none());
        assert!(registry.layer(layer_type).is_none());
    }
}

#[test]
fn test_unknown_layer_update_and_delete_fail() {
    let mut registry = registry();

    let outcome = registry.update_layer(LayerType::Native, GridGeometry::rect(0, 0, 2, 2));
    assert!(!outcome.success);
    assert_eq!(outcome.message, messages::LAYER_NOT_FOUND);

    let outcome = registry.delete_layer(LayerType::Native);
    assert!(!outcome.success);
    assert_eq!(outcome.message, messages::LAYER_NOT_FOUND);
}

#[test]
fn test_empty_name_is_rejected() {
    let mut registry = registry();
    let outcome = add(
        &mut registry,
        LayerType::Property,
        "   ",
        GridGeometry::rect(0, 0, 10, 10),
    );
    assert!(!outcome.success);
    assert_eq!(outcome.message, messages::LAYER_DATA_INCOMPLETE);
}

#[test]
fn test_error_signal_tracks_last_mutation() {
    let mut registry = registry();

    let outcome = add(
        &mut registry,
        LayerType::Native,
        "native",
        GridGeometry::rect(0, 0, 2, 2),
    );
    assert!(!outcome.success);
    assert_eq!(registry.last_error(), Some(messages::PROPERTY_REQUIRED));
    assert!(!registry.is_loading());

    add(
        &mut registry,
        LayerType::Property,
        "boundary",
        GridGeometry::rect(0, 0, 10, 10),
    );
    assert_eq!(registry.last_error(), None);
    assert!(!registry.is_loading());
}

#[test]
fn test_visibility_and_symbology_metadata() {
    let mut registry = registry();
    add(
        &mut registry,
        LayerType::Property,
        "boundary",
        GridGeometry::rect(0, 0, 10, 10),
    );

    assert!(registry.is_visible(LayerType::Property));
    registry.toggle_layer_visibility(LayerType::Property, false);
    assert!(!registry.is_visible(LayerType::Property));

    let default = registry.symbology(LayerType::Property);
    let custom = Symbology {
        fill: [0.1, 0.2, 0.3, 0.4],
        outline: [0.1, 0.2, 0.3, 1.0],
    };
    registry.update_layer_symbology(LayerType::Property, custom);
    assert_ne!(registry.symbology(LayerType::Property), default);
    assert_eq!(registry.symbology(LayerType::Property), custom);

    // Metadata mutations never touch the derived record
    assert_eq!(registry.property_record().property_area_ha, 100.0);
}

#[test]
fn test_snapshot_serializes_layers_and_record() {
    let mut registry = registry();
    add(
        &mut registry,
        LayerType::Property,
        "boundary",
        GridGeometry::rect(0, 0, 10, 10),
    );
    add(
        &mut registry,
        LayerType::Native,
        "native",
        GridGeometry::rect(0, 0, 5, 5),
    );

    let json = registry.snapshot_json();
    let layers = json["layers"].as_array().expect("layers array");
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0]["id"], "property");
    assert_eq!(layers[1]["id"], "native");
    assert_eq!(layers[1]["category"], "soil_coverage");
    assert_eq!(json["property"]["property_area_ha"], 100.0);
}
