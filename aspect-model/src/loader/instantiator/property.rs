//! Properties and abstract properties in their three shapes.
//!
//! - A named node is a direct definition.
//! - A blank node with `samm:property` references a named property and
//!   overrides only `optional`, `notInPayload` and `payloadName`.
//! - A blank node with `samm:extends` is a property of its own that extends
//!   an abstract property.

use super::value::decode_value;
use crate::error::{LoadError, Result};
use crate::graph::Node;
use crate::loader::factory::ModelElementFactory;
use crate::model::{Element, ElementKind, Property};
use crate::vocabulary::terms;

/// `samm:Property`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] for a concrete property without a
/// characteristic and [`LoadError::Syntax`] for an unrecognised blank shape.
pub fn create_property(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    build(f, node, false)
}

/// `samm:AbstractProperty`.
///
/// # Errors
///
/// Same as [`create_property`].
pub fn create_abstract_property(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    build(f, node, true)
}

fn build(f: &mut ModelElementFactory<'_>, node: &Node, is_abstract: bool) -> Result<Element> {
    if node.is_iri() {
        let base = f.base_attributes(node)?;
        let mut property = definition(f, node, is_abstract)?;
        apply_overrides(f, node, &mut property)?;
        return Ok(Element::new(base, ElementKind::Property(property)));
    }

    if let Some(target) = f.value(node, &f.samm(terms::PROPERTY)) {
        return borrowed(f, node, &target, is_abstract);
    }

    if f.value(node, &f.samm(terms::EXTENDS)).is_some() {
        let base = f.base_attributes(node)?;
        let mut property = definition(f, node, is_abstract)?;
        if property.extends.is_none() {
            return Err(LoadError::syntax(node, "samm:extends must reference a named property"));
        }
        apply_overrides(f, node, &mut property)?;
        return Ok(Element::new(base, ElementKind::Property(property)));
    }

    Err(LoadError::syntax(
        node,
        "an anonymous property must carry samm:property or samm:extends",
    ))
}

/// `[ samm:property :target ; samm:optional true ]`: the referenced
/// property's definition with the blank node's overrides.
fn borrowed(
    f: &mut ModelElementFactory<'_>,
    node: &Node,
    target: &Node,
    is_abstract: bool,
) -> Result<Element> {
    if !target.is_iri() {
        return Err(LoadError::syntax(node, "samm:property must reference a named property"));
    }
    let target_id = f.create_element(target)?;
    let base = f.base_attributes(target)?;
    let mut property = match f.built(target_id).map(|e| &e.kind) {
        Some(ElementKind::Property(finished)) => Property {
            optional: false,
            not_in_payload: false,
            payload_name: None,
            ..finished.clone()
        },
        // The target is still under construction further up the stack.
        _ => definition(f, target, is_abstract)?,
    };
    apply_overrides(f, node, &mut property)?;
    Ok(Element::new(base, ElementKind::Property(property)))
}

/// Characteristic, example value and `extends` of a property definition.
fn definition(f: &mut ModelElementFactory<'_>, node: &Node, is_abstract: bool) -> Result<Property> {
    let characteristic = if is_abstract {
        f.optional_child(node, &f.samm(terms::CHARACTERISTIC))?
    } else {
        Some(f.required_child(
            node,
            &f.samm(terms::CHARACTERISTIC),
            "property must have a characteristic",
        )?)
    };
    let example_value = match f.value(node, &f.samm(terms::EXAMPLE_VALUE)) {
        Some(example) => Some(decode_value(f, &example, 0)?),
        None => None,
    };
    let extends = match f.value(node, &f.samm(terms::EXTENDS)) {
        Some(target) if target.is_iri() => Some(f.create_element(&target)?),
        Some(_) => {
            return Err(LoadError::syntax(node, "samm:extends must reference a named property"))
        }
        None => None,
    };
    Ok(Property {
        characteristic,
        example_value,
        is_abstract,
        extends,
        ..Property::default()
    })
}

fn apply_overrides(f: &ModelElementFactory<'_>, node: &Node, property: &mut Property) -> Result<()> {
    property.optional = f.bool_value(node, &f.samm(terms::OPTIONAL))?;
    property.not_in_payload = f.bool_value(node, &f.samm(terms::NOT_IN_PAYLOAD))?;
    property.payload_name = f.string_value(node, &f.samm(terms::PAYLOAD_NAME));
    Ok(())
}
