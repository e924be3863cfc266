//! Local names of the SAMM predicates and individuals read by the loader.
//!
//! Combine with [`Vocabulary::samm`](super::Vocabulary::samm) or
//! [`Vocabulary::samm_c`](super::Vocabulary::samm_c) to get full IRIs.

// samm: base attributes
/// `samm:name` (1.0.0 only).
pub const NAME: &str = "name";
/// `samm:preferredName`.
pub const PREFERRED_NAME: &str = "preferredName";
/// `samm:description`.
pub const DESCRIPTION: &str = "description";
/// `samm:see`.
pub const SEE: &str = "see";

// samm: structure
/// `samm:properties`.
pub const PROPERTIES: &str = "properties";
/// `samm:operations`.
pub const OPERATIONS: &str = "operations";
/// `samm:events`.
pub const EVENTS: &str = "events";
/// `samm:input`.
pub const INPUT: &str = "input";
/// `samm:output`.
pub const OUTPUT: &str = "output";
/// `samm:parameters`.
pub const PARAMETERS: &str = "parameters";
/// `samm:characteristic`.
pub const CHARACTERISTIC: &str = "characteristic";
/// `samm:dataType`.
pub const DATA_TYPE: &str = "dataType";
/// `samm:exampleValue`.
pub const EXAMPLE_VALUE: &str = "exampleValue";
/// `samm:optional`.
pub const OPTIONAL: &str = "optional";
/// `samm:notInPayload`.
pub const NOT_IN_PAYLOAD: &str = "notInPayload";
/// `samm:payloadName`.
pub const PAYLOAD_NAME: &str = "payloadName";
/// `samm:property`.
pub const PROPERTY: &str = "property";
/// `samm:extends`.
pub const EXTENDS: &str = "extends";
/// `samm:value`.
pub const VALUE: &str = "value";

// samm: units
/// `samm:symbol`.
pub const SYMBOL: &str = "symbol";
/// `samm:commonCode`.
pub const COMMON_CODE: &str = "commonCode";
/// `samm:referenceUnit`.
pub const REFERENCE_UNIT: &str = "referenceUnit";
/// `samm:conversionFactor`.
pub const CONVERSION_FACTOR: &str = "conversionFactor";
/// `samm:quantityKind`.
pub const QUANTITY_KIND: &str = "quantityKind";

// samm-c: characteristics
/// `samm-c:baseCharacteristic`.
pub const BASE_CHARACTERISTIC: &str = "baseCharacteristic";
/// `samm-c:constraint`.
pub const CONSTRAINT: &str = "constraint";
/// `samm-c:elementCharacteristic`.
pub const ELEMENT_CHARACTERISTIC: &str = "elementCharacteristic";
/// `samm-c:values`.
pub const VALUES: &str = "values";
/// `samm-c:defaultValue`.
pub const DEFAULT_VALUE: &str = "defaultValue";
/// `samm-c:unit`.
pub const UNIT: &str = "unit";
/// `samm-c:left`.
pub const LEFT: &str = "left";
/// `samm-c:right`.
pub const RIGHT: &str = "right";
/// `samm-c:deconstructionRule`.
pub const DECONSTRUCTION_RULE: &str = "deconstructionRule";
/// `samm-c:elements`.
pub const ELEMENTS: &str = "elements";

// samm-c: constraints
/// `samm-c:minValue`.
pub const MIN_VALUE: &str = "minValue";
/// `samm-c:maxValue`.
pub const MAX_VALUE: &str = "maxValue";
/// `samm-c:lowerBoundDefinition`.
pub const LOWER_BOUND_DEFINITION: &str = "lowerBoundDefinition";
/// `samm-c:upperBoundDefinition`.
pub const UPPER_BOUND_DEFINITION: &str = "upperBoundDefinition";
/// `samm-c:languageCode`.
pub const LANGUAGE_CODE: &str = "languageCode";
/// `samm-c:localeCode`.
pub const LOCALE_CODE: &str = "localeCode";
/// `samm-c:scale`.
pub const SCALE: &str = "scale";
/// `samm-c:integer`.
pub const INTEGER: &str = "integer";

// samm-c: bound definition individuals
/// `samm-c:AT_LEAST`.
pub const AT_LEAST: &str = "AT_LEAST";
/// `samm-c:AT_MOST`.
pub const AT_MOST: &str = "AT_MOST";
/// `samm-c:GREATER_THAN`.
pub const GREATER_THAN: &str = "GREATER_THAN";
/// `samm-c:LESS_THAN`.
pub const LESS_THAN: &str = "LESS_THAN";
