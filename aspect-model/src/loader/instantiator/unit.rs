//! Units and quantity kinds.

use crate::error::Result;
use crate::graph::Node;
use crate::loader::base_attributes::name_from_urn;
use crate::loader::factory::ModelElementFactory;
use crate::model::{Element, ElementKind, QuantityKind, Unit};
use crate::vocabulary::{terms, Concept};

/// `samm:Unit`.
///
/// # Errors
///
/// Propagates errors from building the quantity kinds.
pub fn create_unit(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let base = f.base_attributes(node)?;
    let symbol = f.string_value(node, &f.samm(terms::SYMBOL));
    let code = f.string_value(node, &f.samm(terms::COMMON_CODE));
    let conversion_factor = f.string_value(node, &f.samm(terms::CONVERSION_FACTOR));
    let reference_unit = f
        .value(node, &f.samm(terms::REFERENCE_UNIT))
        .and_then(|unit| match unit {
            Node::Iri(urn) => Some(name_from_urn(&urn).to_string()),
            other => other.lexical().map(str::to_string),
        });

    let mut quantity_kinds = Vec::new();
    for kind in f.graph().objects(node, &f.samm(terms::QUANTITY_KIND)) {
        let id = f.create_element_as(&kind, Concept::QuantityKind)?;
        if !quantity_kinds.contains(&id) {
            quantity_kinds.push(id);
        }
    }

    Ok(Element::new(
        base,
        ElementKind::Unit(Unit {
            symbol,
            code,
            reference_unit,
            conversion_factor,
            quantity_kinds,
        }),
    ))
}

/// `samm:QuantityKind`: base attributes only.
///
/// # Errors
///
/// Propagates base attribute extraction errors.
pub fn create_quantity_kind(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    Ok(Element::new(
        f.base_attributes(node)?,
        ElementKind::QuantityKind(QuantityKind),
    ))
}
