//! Properties, including abstract and extending properties.

use super::element::ElementId;
use super::value::Value;

/// A named feature of an Aspect, Entity, Operation, or Event.
///
/// A property reached through an anonymous `[ samm:property ... ]` node
/// carries the referenced property's attributes together with the
/// reference's own `optional` / `notInPayload` / `payloadName` settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Property {
    /// The characteristic, absent only for abstract properties.
    pub characteristic: Option<ElementId>,
    /// `samm:exampleValue`.
    pub example_value: Option<Value>,
    /// True for `samm:AbstractProperty`.
    pub is_abstract: bool,
    /// `samm:optional`.
    pub optional: bool,
    /// `samm:notInPayload`.
    pub not_in_payload: bool,
    /// Explicit `samm:payloadName`; see
    /// [`ElementRef::payload_name`](super::ElementRef::payload_name) for the
    /// defaulted view.
    pub payload_name: Option<String>,
    /// The abstract property this property extends.
    pub extends: Option<ElementId>,
}
