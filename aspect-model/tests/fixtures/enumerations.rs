//! Enumerations and states with literal, `samm:Value`, and entity values.

/// `:status` (strings), `:level` (`samm:Value`s), `:color` (entity state).
pub const ENUMERATIONS: &str = r#"
@prefix samm:   <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
@prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
@prefix xsd:    <http://www.w3.org/2001/XMLSchema#> .
@prefix :       <urn:samm:org.eclipse.test:1.0.0#> .

:Lamp a samm:Aspect ;
    samm:properties ( :status :level :color ) .

:status a samm:Property ;
    samm:characteristic :StatusEnum .

:StatusEnum a samm-c:Enumeration ;
    samm:dataType xsd:string ;
    samm-c:values ( "ok" "failed" ) .

:level a samm:Property ;
    samm:characteristic :LevelEnum .

:LevelEnum a samm-c:Enumeration ;
    samm:dataType xsd:string ;
    samm-c:values ( :Low :High ) .

:Low a samm:Value ;
    samm:value "low" .

:High a samm:Value ;
    samm:value "high" .

:color a samm:Property ;
    samm:characteristic :ColorState .

:ColorState a samm-c:State ;
    samm:dataType :Color ;
    samm-c:values ( :Red :Green ) ;
    samm-c:defaultValue :Red .

:Color a samm:Entity ;
    samm:properties ( :code :aliases ) .

:code a samm:Property ;
    samm:characteristic samm-c:Text .

:aliases a samm:Property ;
    samm:characteristic :AliasList .

:AliasList a samm-c:List ;
    samm:dataType xsd:string .

:Red a :Color ;
    :code "r" ;
    :aliases ( "crimson" "scarlet" ) .

:Green a :Color ;
    :code "g" ;
    :aliases ( ) .
"#;
