//! Aspects and their operations and events.

use super::element::ElementId;

/// The root of an Aspect Model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aspect {
    /// Properties in declaration order.
    pub properties: Vec<ElementId>,
    /// Operations in declaration order.
    pub operations: Vec<ElementId>,
    /// Events in declaration order.
    pub events: Vec<ElementId>,
}

/// A function offered by an Aspect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operation {
    /// Input properties in declaration order.
    pub input: Vec<ElementId>,
    /// The single output property, if declared.
    pub output: Option<ElementId>,
}

/// An event emitted by an Aspect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    /// Event parameters in declaration order.
    pub parameters: Vec<ElementId>,
}
