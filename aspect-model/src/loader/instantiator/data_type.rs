//! Scalars, entities, and abstract entities.
//!
//! Entities are the one place where construction can legitimately re-enter
//! itself: an entity may extend an abstract entity whose list of extending
//! elements leads back to the entity being built. The factory's
//! under-construction set breaks those loops; the mark is cleared on every
//! exit path.

use crate::error::{LoadError, Result};
use crate::graph::Node;
use crate::loader::factory::ModelElementFactory;
use crate::model::{ComplexType, Element, ElementId, ElementKind, Scalar};
use crate::vocabulary::{terms, Concept};

/// A scalar data type, identified by its URN only.
///
/// # Errors
///
/// Propagates base attribute extraction errors.
pub fn create_scalar(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let base = f.base_attributes(node)?;
    Ok(Element::new(base, ElementKind::Scalar(Scalar)))
}

/// `samm:Entity`.
///
/// # Errors
///
/// Returns [`LoadError::Syntax`] for a blank entity node.
pub fn create_entity(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let complex = complex_type(f, node, "Entity")?;
    Ok(Element::new(f.base_attributes(node)?, ElementKind::Entity(complex)))
}

/// `samm:AbstractEntity`.
///
/// # Errors
///
/// Returns [`LoadError::Syntax`] for a blank abstract entity node.
pub fn create_abstract_entity(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let complex = complex_type(f, node, "AbstractEntity")?;
    Ok(Element::new(
        f.base_attributes(node)?,
        ElementKind::AbstractEntity(complex),
    ))
}

fn complex_type(f: &mut ModelElementFactory<'_>, node: &Node, kind: &str) -> Result<ComplexType> {
    let Some(urn) = node.as_iri() else {
        return Err(LoadError::syntax(node, format!("an {kind} must be a named node")));
    };
    f.begin_instantiation(urn);
    let result = complex_type_body(f, node);
    f.end_instantiation(urn);
    result
}

fn complex_type_body(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<ComplexType> {
    let properties = f.list_children_as(node, &f.samm(terms::PROPERTIES), Concept::Property)?;

    let extends = match f.value(node, &f.samm(terms::EXTENDS)) {
        Some(target) => Some(resolve_related(f, node, &target)?),
        None => None,
    };

    let mut extending_elements = Vec::new();
    for subject in f.graph().subjects(&f.samm(terms::EXTENDS), node) {
        let id = resolve_related(f, node, &subject)?;
        if !extending_elements.contains(&id) {
            extending_elements.push(id);
        }
    }

    Ok(ComplexType {
        properties,
        extends,
        extending_elements,
    })
}

/// Resolves a node on the other end of an `extends` edge, reusing the
/// reserved id if it is already under construction.
fn resolve_related(f: &mut ModelElementFactory<'_>, node: &Node, related: &Node) -> Result<ElementId> {
    let Some(urn) = related.as_iri() else {
        return Err(LoadError::syntax(
            node,
            "samm:extends must connect named complex types",
        ));
    };
    if f.is_instantiating(urn) {
        return f
            .cached_id(urn)
            .ok_or_else(|| LoadError::syntax(related, "complex type under construction is not reserved"));
    }
    f.create_element(related)
}
