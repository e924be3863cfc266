//! Anonymous property shapes: reference with overrides, and extension of an
//! abstract property.

/// `[ samm:property :item ... ]` and `[ samm:extends :area ... ]`.
pub const BLANK_PROPERTIES: &str = r#"
@prefix samm:   <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
@prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
@prefix unit:   <urn:samm:org.eclipse.esmf.samm:unit:2.1.0#> .
@prefix xsd:    <http://www.w3.org/2001/XMLSchema#> .
@prefix :       <urn:samm:org.eclipse.test:1.0.0#> .

:Inventory a samm:Aspect ;
    samm:properties (
        [ samm:property :item ; samm:optional true ; samm:payloadName "entry" ]
        :square
    ) .

:item a samm:Property ;
    samm:preferredName "Item"@en ;
    samm:characteristic samm-c:Text .

:square a samm:Property ;
    samm:characteristic [ a samm-c:SingleEntity ; samm:dataType :Square ] .

:Shape a samm:AbstractEntity ;
    samm:properties ( [ samm:property :area ; samm:optional true ] ) .

:area a samm:AbstractProperty ;
    samm:description "Surface area"@en .

:Square a samm:Entity ;
    samm:extends :Shape ;
    samm:properties ( [ samm:extends :area ; samm:characteristic :AreaValue ] ) .

:AreaValue a samm-c:Measurement ;
    samm:dataType xsd:float ;
    samm-c:unit unit:squareMetre .
"#;
