//! The characteristic family.

use std::collections::HashSet;

use super::value::decode_value;
use crate::error::{LoadError, Result};
use crate::graph::Node;
use crate::loader::factory::ModelElementFactory;
use crate::model::{
    Characteristic, CharacteristicKind, CollectionKind, Element, ElementId, ElementKind,
    QuantifiableKind, StructuredElement, Value,
};
use crate::vocabulary::{terms, Concept};

fn finish(
    f: &ModelElementFactory<'_>,
    node: &Node,
    data_type: Option<ElementId>,
    variant: CharacteristicKind,
) -> Result<Element> {
    Ok(Element::new(
        f.base_attributes(node)?,
        ElementKind::Characteristic(Characteristic { data_type, variant }),
    ))
}

/// `samm:Characteristic`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without a data type.
pub fn create_characteristic(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let data_type = f.data_type(node, true)?;
    finish(f, node, data_type, CharacteristicKind::Plain)
}

/// `samm-c:Code`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without a data type.
pub fn create_code(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let data_type = f.data_type(node, true)?;
    finish(f, node, data_type, CharacteristicKind::Code)
}

/// Rejects a collection whose element characteristics (through any wrapping
/// Traits) lead back to a characteristic already on the chain.
fn ensure_finite_nesting(f: &ModelElementFactory<'_>, node: &Node) -> Result<()> {
    let element = f.samm_c(terms::ELEMENT_CHARACTERISTIC);
    let base = f.samm_c(terms::BASE_CHARACTERISTIC);
    let mut visited = HashSet::new();
    let mut current = node.clone();
    while visited.insert(current.clone()) {
        match f.value(&current, &element).or_else(|| f.value(&current, &base)) {
            Some(next) => current = next,
            None => return Ok(()),
        }
    }
    Err(LoadError::syntax(node, "cyclic samm-c:elementCharacteristic chain"))
}

fn collection(f: &mut ModelElementFactory<'_>, node: &Node, kind: CollectionKind) -> Result<Element> {
    ensure_finite_nesting(f, node)?;
    let data_type = f.data_type(node, false)?;
    let element_characteristic = f.optional_child(node, &f.samm_c(terms::ELEMENT_CHARACTERISTIC))?;
    finish(
        f,
        node,
        data_type,
        CharacteristicKind::Collection {
            kind,
            element_characteristic,
        },
    )
}

/// `samm-c:Collection`.
///
/// # Errors
///
/// Propagates errors from the data type and element characteristic.
pub fn create_collection(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    collection(f, node, CollectionKind::Collection)
}

/// `samm-c:List`.
///
/// # Errors
///
/// Propagates errors from the data type and element characteristic.
pub fn create_list(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    collection(f, node, CollectionKind::List)
}

/// `samm-c:Set`.
///
/// # Errors
///
/// Propagates errors from the data type and element characteristic.
pub fn create_set(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    collection(f, node, CollectionKind::Set)
}

/// `samm-c:SortedSet`.
///
/// # Errors
///
/// Propagates errors from the data type and element characteristic.
pub fn create_sorted_set(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    collection(f, node, CollectionKind::SortedSet)
}

/// `samm-c:TimeSeries`.
///
/// # Errors
///
/// Propagates errors from the data type and element characteristic.
pub fn create_time_series(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    collection(f, node, CollectionKind::TimeSeries)
}

fn values(f: &ModelElementFactory<'_>, node: &Node) -> Result<Vec<Value>> {
    let predicate = f.samm_c(terms::VALUES);
    if f.value(node, &predicate).is_none() {
        return Err(LoadError::missing(node, "enumeration must declare samm-c:values"));
    }
    f.list_items(node, &predicate)?
        .iter()
        .map(|item| decode_value(f, item, 0))
        .collect()
}

/// `samm-c:Enumeration`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without a data type or values.
pub fn create_enumeration(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let data_type = f.data_type(node, true)?;
    let values = values(f, node)?;
    finish(f, node, data_type, CharacteristicKind::Enumeration { values })
}

/// `samm-c:State`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without a data type, values, or
/// default value.
pub fn create_state(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let data_type = f.data_type(node, true)?;
    let values = values(f, node)?;
    let default_node = f
        .value(node, &f.samm_c(terms::DEFAULT_VALUE))
        .ok_or_else(|| LoadError::missing(node, "state must declare samm-c:defaultValue"))?;
    let default_value = decode_value(f, &default_node, 0)?;
    finish(
        f,
        node,
        data_type,
        CharacteristicKind::State {
            values,
            default_value,
        },
    )
}

fn quantifiable(
    f: &mut ModelElementFactory<'_>,
    node: &Node,
    kind: QuantifiableKind,
) -> Result<Element> {
    let data_type = f.data_type(node, true)?;
    let unit = match f.value(node, &f.samm_c(terms::UNIT)) {
        Some(unit) => Some(f.create_element_as(&unit, Concept::Unit)?),
        None if kind == QuantifiableKind::Quantifiable => None,
        None => return Err(LoadError::missing(node, "characteristic must have a unit")),
    };
    finish(f, node, data_type, CharacteristicKind::Quantifiable { kind, unit })
}

/// `samm-c:Quantifiable`. The unit is optional.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without a data type.
pub fn create_quantifiable(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    quantifiable(f, node, QuantifiableKind::Quantifiable)
}

/// `samm-c:Duration`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without a data type or unit.
pub fn create_duration(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    quantifiable(f, node, QuantifiableKind::Duration)
}

/// `samm-c:Measurement`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without a data type or unit.
pub fn create_measurement(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    quantifiable(f, node, QuantifiableKind::Measurement)
}

/// `samm-c:SingleEntity`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without a data type.
pub fn create_single_entity(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let data_type = f.data_type(node, true)?;
    finish(f, node, data_type, CharacteristicKind::SingleEntity)
}

/// `samm-c:StructuredValue`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without a data type or
/// deconstruction rule.
pub fn create_structured_value(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let data_type = f.data_type(node, true)?;
    let deconstruction_rule = f.required_string(
        node,
        &f.samm_c(terms::DECONSTRUCTION_RULE),
        "structured value must have a deconstruction rule",
    )?;
    let mut elements = Vec::new();
    for item in f.list_items(node, &f.samm_c(terms::ELEMENTS))? {
        let element = match &item {
            Node::Literal(literal) => StructuredElement::Literal(literal.lexical.clone()),
            _ => StructuredElement::Property(f.create_element_as(&item, Concept::Property)?),
        };
        elements.push(element);
    }
    finish(
        f,
        node,
        data_type,
        CharacteristicKind::StructuredValue {
            deconstruction_rule,
            elements,
        },
    )
}

/// `samm-c:Trait`: a base characteristic plus at least one constraint.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without a base characteristic or
/// with no constraint.
pub fn create_trait(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let base_characteristic = f.required_child(
        node,
        &f.samm_c(terms::BASE_CHARACTERISTIC),
        "Trait must have a base characteristic",
    )?;
    let mut constraints = Vec::new();
    for constraint in f.graph().objects(node, &f.samm_c(terms::CONSTRAINT)) {
        constraints.push(f.create_element(&constraint)?);
    }
    if constraints.is_empty() {
        return Err(LoadError::missing(node, "Trait must have at least one constraint"));
    }
    finish(
        f,
        node,
        None,
        CharacteristicKind::Trait {
            base_characteristic,
            constraints,
        },
    )
}

/// `samm-c:Either`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without both alternatives.
pub fn create_either(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let left = f.required_child(node, &f.samm_c(terms::LEFT), "Either must have a left characteristic")?;
    let right = f.required_child(node, &f.samm_c(terms::RIGHT), "Either must have a right characteristic")?;
    finish(f, node, None, CharacteristicKind::Either { left, right })
}
