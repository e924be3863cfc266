//! Units and quantity kinds.

use super::element::ElementId;

/// A unit from the unit catalog or declared in the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unit {
    /// `samm:symbol`.
    pub symbol: Option<String>,
    /// `samm:commonCode`.
    pub code: Option<String>,
    /// Name of the `samm:referenceUnit`.
    pub reference_unit: Option<String>,
    /// `samm:conversionFactor`.
    pub conversion_factor: Option<String>,
    /// Distinct quantity kinds, in declaration order.
    pub quantity_kinds: Vec<ElementId>,
}

/// A quantity kind such as `length`; carries only base attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuantityKind;
