//! One characteristic referenced by two properties of the same aspect.

/// `:speed` and `:altitude` share `:Number`.
pub const SHARED_CHARACTERISTIC: &str = r#"
@prefix samm:   <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
@prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
@prefix xsd:    <http://www.w3.org/2001/XMLSchema#> .
@prefix :       <urn:samm:org.eclipse.test:1.0.0#> .

:Movement a samm:Aspect ;
    samm:preferredName "movement"@en ;
    samm:description "Aspect for movement information"@en ;
    samm:properties ( :speed :altitude ) ;
    samm:operations ( :stop ) ;
    samm:events ( :speedLimitExceeded ) .

:speed a samm:Property ;
    samm:preferredName "speed"@en ;
    samm:characteristic :Number ;
    samm:exampleValue "12.5"^^xsd:float .

:altitude a samm:Property ;
    samm:characteristic :Number ;
    samm:payloadName "alt" .

:Number a samm:Characteristic ;
    samm:dataType xsd:float .

:stop a samm:Operation ;
    samm:input ( :speed ) ;
    samm:output :altitude .

:speedLimitExceeded a samm:Event ;
    samm:parameters ( :speed ) .
"#;
