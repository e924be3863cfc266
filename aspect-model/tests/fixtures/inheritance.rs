//! Abstract entity extended by two entities.

/// `:Car` and `:Truck` extend `:Vehicle`; the aspect reaches `:Car` first.
pub const INHERITANCE: &str = r#"
@prefix samm:   <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
@prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
@prefix xsd:    <http://www.w3.org/2001/XMLSchema#> .
@prefix :       <urn:samm:org.eclipse.test:1.0.0#> .

:Fleet a samm:Aspect ;
    samm:properties ( :car :truck ) .

:car a samm:Property ;
    samm:characteristic :CarCharacteristic .

:truck a samm:Property ;
    samm:characteristic [ a samm-c:SingleEntity ; samm:dataType :Truck ] .

:CarCharacteristic a samm-c:SingleEntity ;
    samm:dataType :Car .

:Vehicle a samm:AbstractEntity ;
    samm:preferredName "Vehicle"@en , "Fahrzeug"@de ;
    samm:description "Anything with wheels"@en ;
    samm:see <https://example.org/vehicle> ;
    samm:properties ( :wheels ) .

:Car a samm:Entity ;
    samm:extends :Vehicle ;
    samm:preferredName "Car"@en ;
    samm:see <https://example.org/car> ;
    samm:properties ( :seats ) .

:Truck a samm:Entity ;
    samm:extends :Vehicle ;
    samm:properties ( :payload ) .

:wheels a samm:Property ;
    samm:characteristic :Count .

:seats a samm:Property ;
    samm:characteristic :Count .

:payload a samm:Property ;
    samm:characteristic :Count .

:Count a samm:Characteristic ;
    samm:dataType xsd:int .
"#;

/// Same model with `:Truck` declared and reached before `:Car`.
pub const INHERITANCE_REVERSED: &str = r#"
@prefix samm:   <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
@prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
@prefix xsd:    <http://www.w3.org/2001/XMLSchema#> .
@prefix :       <urn:samm:org.eclipse.test:1.0.0#> .

:Fleet a samm:Aspect ;
    samm:properties ( :truck :car ) .

:Truck a samm:Entity ;
    samm:extends :Vehicle ;
    samm:properties ( :payload ) .

:truck a samm:Property ;
    samm:characteristic [ a samm-c:SingleEntity ; samm:dataType :Truck ] .

:car a samm:Property ;
    samm:characteristic :CarCharacteristic .

:CarCharacteristic a samm-c:SingleEntity ;
    samm:dataType :Car .

:Car a samm:Entity ;
    samm:extends :Vehicle ;
    samm:preferredName "Car"@en ;
    samm:see <https://example.org/car> ;
    samm:properties ( :seats ) .

:Vehicle a samm:AbstractEntity ;
    samm:preferredName "Vehicle"@en , "Fahrzeug"@de ;
    samm:description "Anything with wheels"@en ;
    samm:see <https://example.org/vehicle> ;
    samm:properties ( :wheels ) .

:wheels a samm:Property ;
    samm:characteristic :Count .

:seats a samm:Property ;
    samm:characteristic :Count .

:payload a samm:Property ;
    samm:characteristic :Count .

:Count a samm:Characteristic ;
    samm:dataType xsd:int .
"#;
