//! Borrowed element handles and the inheritance-aware derived views.
//!
//! Derived views (`all_properties`, merged localized maps,
//! `effective_characteristic`, `data_type`) are recomputed from the live
//! `extends` / trait chains on every call; nothing is memoized. Every chain
//! walk carries a visited set, so a cyclic `extends` or a trait wrapping
//! itself terminates instead of looping.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use super::aspect::{Aspect, Event, Operation};
use super::aspect_model::AspectModel;
use super::characteristic::{Characteristic, CharacteristicKind};
use super::constraint::Constraint;
use super::data_type::ComplexType;
use super::element::{BaseAttributes, Element, ElementId, ElementKind};
use super::property::Property;
use super::unit::Unit;
use crate::vocabulary::MetaModelVersion;

/// A borrowed handle to one element of an [`AspectModel`].
#[derive(Clone, Copy)]
pub struct ElementRef<'m> {
    model: &'m AspectModel,
    id: ElementId,
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.model, other.model) && self.id == other.id
    }
}

impl Eq for ElementRef<'_> {}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("id", &self.id)
            .field("kind", &self.kind_name())
            .field("name", &self.name())
            .finish()
    }
}

impl<'m> ElementRef<'m> {
    pub(crate) fn new(model: &'m AspectModel, id: ElementId) -> Self {
        Self { model, id }
    }

    fn at(self, id: ElementId) -> ElementRef<'m> {
        ElementRef::new(self.model, id)
    }

    fn all(self, ids: &[ElementId]) -> Vec<ElementRef<'m>> {
        ids.iter().map(|&id| self.at(id)).collect()
    }

    /// The element's id.
    #[must_use]
    pub fn id(self) -> ElementId {
        self.id
    }

    /// The model this element belongs to.
    #[must_use]
    pub fn model(self) -> &'m AspectModel {
        self.model
    }

    /// The underlying element record.
    #[must_use]
    pub fn element(self) -> &'m Element {
        self.model.raw(self.id)
    }

    /// Own (unmerged) base attributes.
    #[must_use]
    pub fn base(self) -> &'m BaseAttributes {
        &self.element().base
    }

    /// Kind-specific structure.
    #[must_use]
    pub fn kind(self) -> &'m ElementKind {
        &self.element().kind
    }

    /// SAMM class name of the element.
    #[must_use]
    pub fn kind_name(self) -> &'static str {
        self.kind().name()
    }

    /// URN of a named element.
    #[must_use]
    pub fn urn(self) -> Option<&'m str> {
        self.base().urn.as_deref()
    }

    /// Element name.
    #[must_use]
    pub fn name(self) -> &'m str {
        &self.base().name
    }

    /// Meta-model version.
    #[must_use]
    pub fn meta_model_version(self) -> MetaModelVersion {
        self.base().meta_model_version
    }

    /// Elements referencing this one, in the order they were constructed.
    #[must_use]
    pub fn parent_elements(self) -> Vec<ElementRef<'m>> {
        self.all(self.element().parent_elements())
    }

    // Typed accessors.

    /// The aspect structure, if this is an Aspect.
    #[must_use]
    pub fn as_aspect(self) -> Option<&'m Aspect> {
        match self.kind() {
            ElementKind::Aspect(a) => Some(a),
            _ => None,
        }
    }

    /// The property structure, if this is a (possibly abstract) Property.
    #[must_use]
    pub fn as_property(self) -> Option<&'m Property> {
        match self.kind() {
            ElementKind::Property(p) => Some(p),
            _ => None,
        }
    }

    /// The operation structure, if this is an Operation.
    #[must_use]
    pub fn as_operation(self) -> Option<&'m Operation> {
        match self.kind() {
            ElementKind::Operation(o) => Some(o),
            _ => None,
        }
    }

    /// The event structure, if this is an Event.
    #[must_use]
    pub fn as_event(self) -> Option<&'m Event> {
        match self.kind() {
            ElementKind::Event(e) => Some(e),
            _ => None,
        }
    }

    /// The characteristic structure, if this is a Characteristic.
    #[must_use]
    pub fn as_characteristic(self) -> Option<&'m Characteristic> {
        match self.kind() {
            ElementKind::Characteristic(c) => Some(c),
            _ => None,
        }
    }

    /// The constraint, if this is a Constraint.
    #[must_use]
    pub fn as_constraint(self) -> Option<&'m Constraint> {
        match self.kind() {
            ElementKind::Constraint(c) => Some(c),
            _ => None,
        }
    }

    /// The complex type structure, if this is an Entity or Abstract Entity.
    #[must_use]
    pub fn as_complex_type(self) -> Option<&'m ComplexType> {
        match self.kind() {
            ElementKind::Entity(t) | ElementKind::AbstractEntity(t) => Some(t),
            _ => None,
        }
    }

    /// The unit structure, if this is a Unit.
    #[must_use]
    pub fn as_unit(self) -> Option<&'m Unit> {
        match self.kind() {
            ElementKind::Unit(u) => Some(u),
            _ => None,
        }
    }

    /// Returns true for Entities and Abstract Entities.
    #[must_use]
    pub fn is_complex_type(self) -> bool {
        self.as_complex_type().is_some()
    }

    /// Returns true for scalar data types.
    #[must_use]
    pub fn is_scalar(self) -> bool {
        matches!(self.kind(), ElementKind::Scalar(_))
    }

    // Inheritance.

    /// The element this one extends (Entities, Abstract Entities, Properties).
    #[must_use]
    pub fn extends(self) -> Option<ElementRef<'m>> {
        let id = match self.kind() {
            ElementKind::Entity(t) | ElementKind::AbstractEntity(t) => t.extends,
            ElementKind::Property(p) => p.extends,
            _ => None,
        };
        id.map(|id| self.at(id))
    }

    /// Complex types that extend this one.
    #[must_use]
    pub fn extending_elements(self) -> Vec<ElementRef<'m>> {
        self.as_complex_type()
            .map(|t| self.all(&t.extending_elements))
            .unwrap_or_default()
    }

    /// This element followed by its `extends` ancestors, most-derived first.
    fn extends_chain(self) -> Vec<ElementRef<'m>> {
        let mut chain = vec![self];
        let mut seen = HashSet::from([self.id]);
        let mut current = self;
        while let Some(parent) = current.extends() {
            if !seen.insert(parent.id) {
                break;
            }
            chain.push(parent);
            current = parent;
        }
        chain
    }

    fn merged_map(
        self,
        select: impl Fn(&'m BaseAttributes) -> &'m BTreeMap<String, String>,
    ) -> BTreeMap<&'m str, &'m str> {
        let mut merged = BTreeMap::new();
        for element in self.extends_chain().into_iter().rev() {
            for (lang, text) in select(element.base()) {
                merged.insert(lang.as_str(), text.as_str());
            }
        }
        merged
    }

    /// Preferred names by language, own entries overriding those inherited
    /// through `extends`.
    #[must_use]
    pub fn preferred_names(self) -> BTreeMap<&'m str, &'m str> {
        self.merged_map(|b| &b.preferred_names)
    }

    /// Descriptions by language, own entries overriding those inherited
    /// through `extends`.
    #[must_use]
    pub fn descriptions(self) -> BTreeMap<&'m str, &'m str> {
        self.merged_map(|b| &b.descriptions)
    }

    /// The preferred name for `language`, following `extends`.
    #[must_use]
    pub fn preferred_name(self, language: &str) -> Option<&'m str> {
        self.preferred_names().get(language).copied()
    }

    /// The description for `language`, following `extends`.
    #[must_use]
    pub fn description(self, language: &str) -> Option<&'m str> {
        self.descriptions().get(language).copied()
    }

    /// Own `see` references followed by inherited ones (not deduplicated).
    #[must_use]
    pub fn see(self) -> Vec<&'m str> {
        self.extends_chain()
            .into_iter()
            .flat_map(|e| e.base().see.iter().map(String::as_str))
            .collect()
    }

    // Properties.

    /// Own properties of an Aspect, Entity, or Abstract Entity; the
    /// parameters of an Event; the inputs of an Operation.
    #[must_use]
    pub fn properties(self) -> Vec<ElementRef<'m>> {
        match self.kind() {
            ElementKind::Aspect(a) => self.all(&a.properties),
            ElementKind::Entity(t) | ElementKind::AbstractEntity(t) => self.all(&t.properties),
            ElementKind::Event(e) => self.all(&e.parameters),
            ElementKind::Operation(o) => self.all(&o.input),
            _ => Vec::new(),
        }
    }

    /// Own properties followed by every inherited property, most-derived
    /// first. Equal to [`properties`](Self::properties) for non-complex
    /// elements.
    #[must_use]
    pub fn all_properties(self) -> Vec<ElementRef<'m>> {
        if !self.is_complex_type() {
            return self.properties();
        }
        self.extends_chain()
            .into_iter()
            .flat_map(ElementRef::properties)
            .collect()
    }

    /// The property's own characteristic.
    #[must_use]
    pub fn characteristic(self) -> Option<ElementRef<'m>> {
        self.as_property()
            .and_then(|p| p.characteristic)
            .map(|id| self.at(id))
    }

    /// For a Property, its characteristic with every wrapping Trait removed;
    /// for a Characteristic, itself unwrapped the same way.
    #[must_use]
    pub fn effective_characteristic(self) -> Option<ElementRef<'m>> {
        let mut current = match self.kind() {
            ElementKind::Property(_) => self.characteristic()?,
            ElementKind::Characteristic(_) => self,
            _ => return None,
        };
        let mut seen = HashSet::new();
        while let Some(CharacteristicKind::Trait {
            base_characteristic,
            ..
        }) = current.as_characteristic().map(|c| &c.variant)
        {
            if !seen.insert(current.id) {
                return None;
            }
            current = self.at(*base_characteristic);
        }
        Some(current)
    }

    /// The data type of a Property (through its effective characteristic) or
    /// of a Characteristic.
    ///
    /// Collections without an own data type fall back to their element
    /// characteristic's data type. A chain of element characteristics that
    /// leads back to itself has no data type.
    #[must_use]
    pub fn data_type(self) -> Option<ElementRef<'m>> {
        let mut current = self;
        let mut seen = HashSet::new();
        loop {
            let characteristic = current.effective_characteristic()?;
            if !seen.insert(characteristic.id) {
                return None;
            }
            let c = characteristic.as_characteristic()?;
            match (c.data_type, &c.variant) {
                (Some(id), _) => return Some(self.at(id)),
                (
                    None,
                    CharacteristicKind::Collection {
                        element_characteristic: Some(element),
                        ..
                    },
                ) => current = self.at(*element),
                _ => return None,
            }
        }
    }

    /// The payload name of a Property: the explicit `samm:payloadName` if
    /// present, otherwise its name. Other elements return their name.
    #[must_use]
    pub fn payload_name(self) -> &'m str {
        self.as_property()
            .and_then(|p| p.payload_name.as_deref())
            .unwrap_or_else(|| self.name())
    }

    pub(crate) fn lookup_name(self) -> &'m str {
        self.payload_name()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::model::CollectionKind;

    fn list(name: &str, element: usize) -> Element {
        Element::new(
            BaseAttributes::new(MetaModelVersion::V2_1_0, None, name),
            ElementKind::Characteristic(Characteristic {
                data_type: None,
                variant: CharacteristicKind::Collection {
                    kind: CollectionKind::List,
                    element_characteristic: Some(ElementId::from_index(element)),
                },
            }),
        )
    }

    #[test]
    fn mutually_nested_lists_have_no_data_type() {
        let model = AspectModel::new(
            MetaModelVersion::V2_1_0,
            vec![list("L1", 1), list("L2", 0)],
            HashMap::new(),
            Vec::new(),
        );
        let first = model.get(ElementId::from_index(0));
        assert_eq!(first.map(|l| l.name()), Some("L1"));
        assert!(first.and_then(ElementRef::data_type).is_none());
    }
}
