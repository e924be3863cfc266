//! Element identity, base attributes, and the closed set of element kinds.

use std::collections::BTreeMap;
use std::fmt;

use super::aspect::{Aspect, Event, Operation};
use super::characteristic::Characteristic;
use super::constraint::Constraint;
use super::data_type::{ComplexType, Scalar};
use super::property::Property;
use super::unit::{QuantityKind, Unit};
use super::value::Value;
use crate::vocabulary::MetaModelVersion;

/// Index of an element in its [`AspectModel`](super::AspectModel).
///
/// Ids are only meaningful for the model that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    pub(crate) fn from_index(index: usize) -> Self {
        // Arena sizes are bounded by the number of graph nodes.
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Position of the element in the model arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Attributes shared by every meta-model element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseAttributes {
    /// Meta-model version the element was loaded with.
    pub meta_model_version: MetaModelVersion,
    /// URN of a named element, `None` for anonymous (blank node) elements.
    pub urn: Option<String>,
    /// Element name, synthesized for anonymous elements.
    pub name: String,
    /// Language tag → preferred name.
    pub preferred_names: BTreeMap<String, String>,
    /// Language tag → description.
    pub descriptions: BTreeMap<String, String>,
    /// `samm:see` references, sorted.
    pub see: Vec<String>,
}

impl BaseAttributes {
    /// Creates attributes with a name and URN and no localized content.
    #[must_use]
    pub fn new(meta_model_version: MetaModelVersion, urn: Option<String>, name: impl Into<String>) -> Self {
        Self {
            meta_model_version,
            urn,
            name: name.into(),
            preferred_names: BTreeMap::new(),
            descriptions: BTreeMap::new(),
            see: Vec::new(),
        }
    }
}

/// The concrete shape of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// `samm:Aspect`.
    Aspect(Aspect),
    /// `samm:Property` or `samm:AbstractProperty`.
    Property(Property),
    /// `samm:Operation`.
    Operation(Operation),
    /// `samm:Event`.
    Event(Event),
    /// Any characteristic class.
    Characteristic(Characteristic),
    /// Any constraint class.
    Constraint(Constraint),
    /// A scalar data type such as `xsd:string`.
    Scalar(Scalar),
    /// `samm:Entity`.
    Entity(ComplexType),
    /// `samm:AbstractEntity`.
    AbstractEntity(ComplexType),
    /// `samm:Unit`.
    Unit(Unit),
    /// `samm:QuantityKind`.
    QuantityKind(QuantityKind),
    /// `samm:Value`.
    Value(Value),
}

impl ElementKind {
    /// Short human-readable kind name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aspect(_) => "Aspect",
            Self::Property(p) if p.is_abstract => "AbstractProperty",
            Self::Property(_) => "Property",
            Self::Operation(_) => "Operation",
            Self::Event(_) => "Event",
            Self::Characteristic(c) => c.variant.name(),
            Self::Constraint(c) => c.name(),
            Self::Scalar(_) => "Scalar",
            Self::Entity(_) => "Entity",
            Self::AbstractEntity(_) => "AbstractEntity",
            Self::Unit(_) => "Unit",
            Self::QuantityKind(_) => "QuantityKind",
            Self::Value(_) => "Value",
        }
    }

    /// Elements this element owns a reference to, each of which records this
    /// element among its parents.
    ///
    /// `extends` edges are inheritance, not containment, and are excluded.
    #[must_use]
    pub fn children(&self) -> Vec<ElementId> {
        match self {
            Self::Aspect(a) => a
                .properties
                .iter()
                .chain(&a.operations)
                .chain(&a.events)
                .copied()
                .collect(),
            Self::Property(p) => p.characteristic.into_iter().collect(),
            Self::Operation(o) => o.input.iter().copied().chain(o.output).collect(),
            Self::Event(e) => e.parameters.clone(),
            Self::Characteristic(c) => c.children(),
            Self::Entity(t) | Self::AbstractEntity(t) => t.properties.clone(),
            Self::Unit(u) => u.quantity_kinds.clone(),
            Self::Constraint(_) | Self::Scalar(_) | Self::QuantityKind(_) | Self::Value(_) => {
                Vec::new()
            }
        }
    }
}

/// One constructed meta-model element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Shared attributes.
    pub base: BaseAttributes,
    /// Kind-specific structure.
    pub kind: ElementKind,
    pub(crate) parents: Vec<ElementId>,
}

impl Element {
    /// Creates an element with no recorded parents.
    #[must_use]
    pub fn new(base: BaseAttributes, kind: ElementKind) -> Self {
        Self {
            base,
            kind,
            parents: Vec::new(),
        }
    }

    /// Elements that reference this one, in the order they were constructed.
    #[must_use]
    pub fn parent_elements(&self) -> &[ElementId] {
        &self.parents
    }
}
