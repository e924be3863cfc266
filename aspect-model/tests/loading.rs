//! End-to-end loads: sources, vocabulary directories, roots, and lookup.

mod fixtures;

use samm_aspect_model::model::{CharacteristicKind, QuantifiableKind};
use samm_aspect_model::{AspectLoader, LoaderOptions, MetaModelVersion, ModelSource, Result};

use fixtures::{document, path, urn, SHARED_CHARACTERISTIC};

fn load(content: &str) -> Result<samm_aspect_model::AspectModel> {
    AspectLoader::default().load_str(content)
}

#[test]
fn shared_characteristic_is_built_once() -> Result<()> {
    let model = load(SHARED_CHARACTERISTIC)?;
    assert_eq!(model.meta_model_version(), MetaModelVersion::V2_1_0);

    let aspect = model.aspect().expect("aspect root");
    assert_eq!(aspect.name(), "Movement");
    assert_eq!(aspect.preferred_name("en"), Some("movement"));

    let properties = aspect.properties();
    let names: Vec<_> = properties.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["speed", "altitude"]);

    let speed = properties[0].characteristic().expect("speed characteristic");
    let altitude = properties[1].characteristic().expect("altitude characteristic");
    assert_eq!(speed, altitude);
    assert_eq!(speed.name(), "Number");
    assert_eq!(speed.parent_elements(), properties);
    Ok(())
}

#[test]
fn operations_and_events_share_properties() -> Result<()> {
    let model = load(SHARED_CHARACTERISTIC)?;
    let aspect = model.aspect().expect("aspect root");
    let speed = model.find_by_urn(&urn("speed")).expect("speed");

    let operation = model.find_by_urn(&urn("stop")).expect("operation");
    assert_eq!(operation.properties(), vec![speed]);
    let output = operation.as_operation().and_then(|o| o.output);
    assert_eq!(output, model.find_by_urn(&urn("altitude")).map(|p| p.id()));

    let event = model.find_by_urn(&urn("speedLimitExceeded")).expect("event");
    assert_eq!(event.properties(), vec![speed]);

    let parents = speed.parent_elements();
    assert_eq!(parents.len(), 3);
    assert!(parents.contains(&aspect));
    assert!(parents.contains(&operation));
    assert!(parents.contains(&event));
    Ok(())
}

#[test]
fn payload_name_defaults_to_name() -> Result<()> {
    let model = load(SHARED_CHARACTERISTIC)?;
    let speed = model.find_by_urn(&urn("speed")).expect("speed");
    let altitude = model.find_by_urn(&urn("altitude")).expect("altitude");

    assert_eq!(speed.payload_name(), "speed");
    assert_eq!(altitude.payload_name(), "alt");
    assert_eq!(model.find_by_name("alt"), vec![altitude]);
    assert!(model.find_by_name("altitude").is_empty());
    Ok(())
}

#[test]
fn example_values_are_decoded() -> Result<()> {
    use samm_aspect_model::model::{ScalarValue, Value};

    let model = load(SHARED_CHARACTERISTIC)?;
    let speed = model.find_by_urn(&urn("speed")).expect("speed");
    let example = speed.as_property().and_then(|p| p.example_value.as_ref());
    assert_eq!(example, Some(&Value::Scalar(ScalarValue::Float(12.5))));
    Ok(())
}

#[test]
fn files_and_vocabulary_directories_are_merged() -> Result<()> {
    let loader = AspectLoader::new(LoaderOptions {
        vocabulary_dirs: vec![path("vocabulary")],
        ..LoaderOptions::default()
    });
    let model = loader.load_files(&[path("models/Movement.ttl"), path("models/SharedEntities.ttl")])?;

    let aspect = model.aspect().expect("aspect root");
    let names: Vec<_> = aspect.properties().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["isMoving", "speed", "position"]);

    // Built-in characteristic instance.
    let is_moving = aspect.properties()[0];
    assert_eq!(is_moving.characteristic().map(|c| c.name()), Some("Boolean"));
    assert_eq!(is_moving.data_type().and_then(|d| d.urn()), Some("http://www.w3.org/2001/XMLSchema#boolean"));

    // Entity from the second document.
    let position = aspect.properties()[2].data_type().expect("position entity");
    assert_eq!(position.kind_name(), "Entity");
    assert_eq!(position.properties().len(), 2);

    // Unit from the vocabulary directory.
    let speed = model.find_by_urn(&urn("Speed")).expect("Speed");
    let Some(CharacteristicKind::Quantifiable { kind, unit: Some(unit) }) =
        speed.as_characteristic().map(|c| &c.variant)
    else {
        panic!("Speed should be a measurement with a unit");
    };
    assert_eq!(*kind, QuantifiableKind::Measurement);
    let unit = model.get(*unit).expect("unit element");
    assert_eq!(unit.name(), "kilometrePerHour");
    assert_eq!(unit.preferred_name("en"), Some("kilometre per hour"));

    let details = unit.as_unit().expect("unit structure");
    assert_eq!(details.symbol.as_deref(), Some("km/h"));
    assert_eq!(details.code.as_deref(), Some("KMH"));
    assert_eq!(details.reference_unit.as_deref(), Some("metrePerSecond"));
    assert_eq!(details.conversion_factor.as_deref(), Some("0.277778 m/s"));
    let kinds: Vec<_> = details
        .quantity_kinds
        .iter()
        .filter_map(|&id| model.get(id))
        .map(|k| (k.kind_name(), k.name()))
        .collect();
    assert_eq!(kinds, [("QuantityKind", "speed"), ("QuantityKind", "velocity")]);
    Ok(())
}

#[test]
fn unit_without_catalog_is_still_a_unit() -> Result<()> {
    let model = AspectLoader::default()
        .load_files(&[path("models/Movement.ttl"), path("models/SharedEntities.ttl")])?;
    let unit = model
        .find_by_urn("urn:samm:org.eclipse.esmf.samm:unit:2.1.0#kilometrePerHour")
        .expect("unit");
    assert_eq!(unit.kind_name(), "Unit");
    assert_eq!(unit.as_unit().and_then(|u| u.symbol.as_deref()), None);
    Ok(())
}

#[test]
fn names_shared_by_several_urns_are_all_found() -> Result<()> {
    let loader = AspectLoader::new(LoaderOptions {
        vocabulary_dirs: vec![path("vocabulary")],
        ..LoaderOptions::default()
    });
    let model = loader.load_files(&[path("models/Movement.ttl"), path("models/SharedEntities.ttl")])?;
    let kinds: Vec<_> = model.find_by_name("speed").iter().map(|e| e.kind_name()).collect();
    assert_eq!(kinds.len(), 2);
    assert!(kinds.contains(&"Property"));
    assert!(kinds.contains(&"QuantityKind"));
    Ok(())
}

#[test]
fn mixed_sources_load_as_one_model() -> Result<()> {
    let shared = std::fs::read_to_string(path("models/SharedEntities.ttl")).expect("fixture");
    let model = AspectLoader::default().load_sources(vec![
        ModelSource::File(path("models/Movement.ttl")),
        ModelSource::Text {
            name: "shared".to_string(),
            content: shared,
        },
    ])?;
    assert!(model.find_by_urn(&urn("Position")).is_some());
    Ok(())
}

#[test]
fn without_builtin_vocabulary_references_stay_unresolved() -> Result<()> {
    let loader = AspectLoader::new(LoaderOptions {
        builtin_vocabulary: false,
        ..LoaderOptions::default()
    });
    let model = loader.load_files(&[path("models/Movement.ttl"), path("models/SharedEntities.ttl")])?;
    let is_moving = model.find_by_urn(&urn("isMoving")).expect("isMoving");
    // An untyped, undescribed node is taken for a scalar data type.
    assert_eq!(is_moving.characteristic().map(|c| c.kind_name()), Some("Scalar"));
    Ok(())
}

#[test]
fn explicit_root_limits_the_load() -> Result<()> {
    let loader = AspectLoader::new(LoaderOptions {
        root: Some(urn("altitude")),
        ..LoaderOptions::default()
    });
    let model = loader.load_str(SHARED_CHARACTERISTIC)?;
    let roots = model.roots();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].name(), "altitude");
    assert!(model.aspect().is_none());
    assert!(model.find_by_urn(&urn("Movement")).is_none());
    assert!(model.find_by_urn(&urn("Number")).is_some());
    Ok(())
}

#[test]
fn models_without_aspect_use_typed_subjects_as_roots() -> Result<()> {
    let model = load(&document(
        r#"
:Speed a samm:Characteristic ;
    samm:dataType xsd:float .

:Color a samm:Entity ;
    samm:properties ( :code ) .

:code a samm:Property ;
    samm:characteristic :Speed .
"#,
    ))?;
    assert!(model.aspect().is_none());
    let roots: Vec<_> = model.roots().iter().map(|r| r.name()).collect();
    assert_eq!(roots, ["Color", "Speed", "code"]);
    Ok(())
}

#[test]
fn legacy_models_use_explicit_names() -> Result<()> {
    let model = load(
        r#"
@prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:1.0.0#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix :     <urn:samm:org.eclipse.test:1.0.0#> .

:Legacy a samm:Aspect ;
    samm:name "legacyAspect" ;
    samm:properties ( :temp ) .

:temp a samm:Property ;
    samm:name "temperature" ;
    samm:characteristic :T .

:T a samm:Characteristic ;
    samm:dataType xsd:float .
"#,
    )?;
    assert_eq!(model.meta_model_version(), MetaModelVersion::V1_0_0);
    let aspect = model.aspect().expect("aspect root");
    assert_eq!(aspect.name(), "legacyAspect");
    let temp = aspect.properties()[0];
    assert_eq!(temp.name(), "temperature");
    assert_eq!(temp.characteristic().map(|c| c.name()), Some("T"));
    assert_eq!(model.find_by_name("temperature"), vec![temp]);
    Ok(())
}

#[test]
fn repeated_loads_are_independent() -> Result<()> {
    let loader = AspectLoader::default();
    let first = loader.load_str(SHARED_CHARACTERISTIC)?;
    let second = loader.load_str(SHARED_CHARACTERISTIC)?;
    assert_eq!(first.len(), second.len());

    let a = first.find_by_urn(&urn("Number")).expect("first");
    let b = second.find_by_urn(&urn("Number")).expect("second");
    assert_eq!(a.id(), b.id());
    assert_ne!(a, b);
    assert_eq!(a.parent_elements().len(), b.parent_elements().len());
    Ok(())
}

#[test]
fn options_deserialize_from_toml() {
    let options: LoaderOptions = toml::from_str(
        r#"
vocabulary_dirs = ["vendor/samm"]
root = "urn:samm:org.eclipse.test:1.0.0#Movement"
"#,
    )
    .expect("valid options");
    assert_eq!(options.vocabulary_dirs, vec![std::path::PathBuf::from("vendor/samm")]);
    assert_eq!(options.root.as_deref(), Some("urn:samm:org.eclipse.test:1.0.0#Movement"));
    assert!(options.builtin_vocabulary);
    assert_eq!(options.max_ancestor_depth, 64);

    let unknown = toml::from_str::<LoaderOptions>("vocabulary = []");
    assert!(unknown.is_err());
}
