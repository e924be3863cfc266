//! Data types: scalars and complex types.

use super::element::ElementId;

/// A scalar data type, identified solely by its URN (e.g. `xsd:int`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scalar;

/// Structure shared by Entities and Abstract Entities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexType {
    /// Own properties in declaration order (inherited ones excluded).
    pub properties: Vec<ElementId>,
    /// The complex type this one extends.
    pub extends: Option<ElementId>,
    /// Complex types declaring `samm:extends` to this one.
    pub extending_elements: Vec<ElementId>,
}
