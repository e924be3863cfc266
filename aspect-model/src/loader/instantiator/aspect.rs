//! Aspects, operations, and events.

use crate::error::{LoadError, Result};
use crate::graph::Node;
use crate::loader::factory::ModelElementFactory;
use crate::model::{Aspect, Element, ElementKind, Event, Operation};
use crate::vocabulary::{terms, Concept};

/// `samm:Aspect`. Must be a named node; all three lists are optional.
///
/// # Errors
///
/// Returns [`LoadError::Syntax`] for a blank aspect node.
pub fn create_aspect(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    if !node.is_iri() {
        return Err(LoadError::syntax(node, "an Aspect must be a named node"));
    }
    let base = f.base_attributes(node)?;
    let properties = f.list_children_as(node, &f.samm(terms::PROPERTIES), Concept::Property)?;
    let operations = f.list_children(node, &f.samm(terms::OPERATIONS))?;
    let events = f.list_children(node, &f.samm(terms::EVENTS))?;
    Ok(Element::new(
        base,
        ElementKind::Aspect(Aspect {
            properties,
            operations,
            events,
        }),
    ))
}

/// `samm:Operation`.
///
/// # Errors
///
/// Propagates errors from building the input and output properties.
pub fn create_operation(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let base = f.base_attributes(node)?;
    let input = f.list_children_as(node, &f.samm(terms::INPUT), Concept::Property)?;
    let output = match f.value(node, &f.samm(terms::OUTPUT)) {
        Some(output) => Some(f.create_element_as(&output, Concept::Property)?),
        None => None,
    };
    Ok(Element::new(base, ElementKind::Operation(Operation { input, output })))
}

/// `samm:Event`.
///
/// # Errors
///
/// Propagates errors from building the parameters.
pub fn create_event(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let base = f.base_attributes(node)?;
    let parameters = f.list_children_as(node, &f.samm(terms::PARAMETERS), Concept::Property)?;
    Ok(Element::new(base, ElementKind::Event(Event { parameters })))
}
