//! Characteristics: how a property's value is to be interpreted.

use super::element::ElementId;
use super::value::Value;

/// Which collection characteristic a [`CharacteristicKind::Collection`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// `samm-c:Collection`: unordered, duplicates allowed.
    Collection,
    /// `samm-c:List`: ordered, duplicates allowed.
    List,
    /// `samm-c:Set`: unordered, no duplicates.
    Set,
    /// `samm-c:SortedSet`: ordered, no duplicates.
    SortedSet,
    /// `samm-c:TimeSeries`: a list of timestamped values.
    TimeSeries,
}

impl CollectionKind {
    /// Returns true if element order is significant.
    #[must_use]
    pub fn is_ordered(self) -> bool {
        matches!(self, Self::List | Self::SortedSet | Self::TimeSeries)
    }

    /// Returns true if duplicates are allowed.
    #[must_use]
    pub fn allows_duplicates(self) -> bool {
        matches!(self, Self::Collection | Self::List | Self::TimeSeries)
    }
}

/// Which quantifiable characteristic a [`CharacteristicKind::Quantifiable`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantifiableKind {
    /// `samm-c:Quantifiable`: unit optional.
    Quantifiable,
    /// `samm-c:Duration`: unit required.
    Duration,
    /// `samm-c:Measurement`: unit required.
    Measurement,
}

/// One part of a `samm-c:StructuredValue` deconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuredElement {
    /// A property receiving a captured group.
    Property(ElementId),
    /// A literal separator between groups.
    Literal(String),
}

/// Variant-specific structure of a characteristic.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacteristicKind {
    /// `samm:Characteristic`.
    Plain,
    /// `samm-c:Code`.
    Code,
    /// `samm-c:Collection` and its subclasses.
    Collection {
        /// Which collection class.
        kind: CollectionKind,
        /// Characteristic of each element, if declared.
        element_characteristic: Option<ElementId>,
    },
    /// `samm-c:Enumeration`.
    Enumeration {
        /// Allowed values in declaration order.
        values: Vec<Value>,
    },
    /// `samm-c:State`.
    State {
        /// Allowed values in declaration order.
        values: Vec<Value>,
        /// The initial state.
        default_value: Value,
    },
    /// `samm-c:Quantifiable`, `samm-c:Duration`, `samm-c:Measurement`.
    Quantifiable {
        /// Which quantifiable class.
        kind: QuantifiableKind,
        /// The unit.
        unit: Option<ElementId>,
    },
    /// `samm-c:SingleEntity`.
    SingleEntity,
    /// `samm-c:StructuredValue`.
    StructuredValue {
        /// Regular expression with one group per property element.
        deconstruction_rule: String,
        /// Properties and separators in order.
        elements: Vec<StructuredElement>,
    },
    /// `samm-c:Trait`.
    Trait {
        /// The constrained characteristic.
        base_characteristic: ElementId,
        /// At least one constraint.
        constraints: Vec<ElementId>,
    },
    /// `samm-c:Either`.
    Either {
        /// Characteristic of the left alternative.
        left: ElementId,
        /// Characteristic of the right alternative.
        right: ElementId,
    },
}

impl CharacteristicKind {
    /// The SAMM class name of this variant.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain => "Characteristic",
            Self::Code => "Code",
            Self::Collection { kind, .. } => match kind {
                CollectionKind::Collection => "Collection",
                CollectionKind::List => "List",
                CollectionKind::Set => "Set",
                CollectionKind::SortedSet => "SortedSet",
                CollectionKind::TimeSeries => "TimeSeries",
            },
            Self::Enumeration { .. } => "Enumeration",
            Self::State { .. } => "State",
            Self::Quantifiable { kind, .. } => match kind {
                QuantifiableKind::Quantifiable => "Quantifiable",
                QuantifiableKind::Duration => "Duration",
                QuantifiableKind::Measurement => "Measurement",
            },
            Self::SingleEntity => "SingleEntity",
            Self::StructuredValue { .. } => "StructuredValue",
            Self::Trait { .. } => "Trait",
            Self::Either { .. } => "Either",
        }
    }
}

/// A characteristic: a data type plus variant-specific structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Characteristic {
    /// Own `samm:dataType`. Traits and Eithers have none; for those (and
    /// for collections without one) see
    /// [`ElementRef::data_type`](super::ElementRef::data_type).
    pub data_type: Option<ElementId>,
    /// Variant-specific structure.
    pub variant: CharacteristicKind,
}

impl Characteristic {
    /// Returns true for `samm-c:Trait`.
    #[must_use]
    pub fn is_trait(&self) -> bool {
        matches!(self.variant, CharacteristicKind::Trait { .. })
    }

    /// Returns true for the collection family.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self.variant, CharacteristicKind::Collection { .. })
    }

    /// Referenced child elements (data type first).
    #[must_use]
    pub fn children(&self) -> Vec<ElementId> {
        let mut children: Vec<ElementId> = self.data_type.into_iter().collect();
        match &self.variant {
            CharacteristicKind::Collection {
                element_characteristic,
                ..
            } => children.extend(*element_characteristic),
            CharacteristicKind::Quantifiable { unit, .. } => children.extend(*unit),
            CharacteristicKind::StructuredValue { elements, .. } => {
                children.extend(elements.iter().filter_map(|e| match e {
                    StructuredElement::Property(id) => Some(*id),
                    StructuredElement::Literal(_) => None,
                }));
            }
            CharacteristicKind::Trait {
                base_characteristic,
                constraints,
            } => {
                children.push(*base_characteristic);
                children.extend(constraints.iter().copied());
            }
            CharacteristicKind::Either { left, right } => {
                children.push(*left);
                children.push(*right);
            }
            CharacteristicKind::Plain
            | CharacteristicKind::Code
            | CharacteristicKind::Enumeration { .. }
            | CharacteristicKind::State { .. }
            | CharacteristicKind::SingleEntity => {}
        }
        children
    }
}
