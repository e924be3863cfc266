//! Decoding of enumeration, state, and example values.

use std::collections::BTreeMap;

use crate::error::{LoadError, Result};
use crate::graph::Node;
use crate::loader::base_attributes::{local_part, name_from_urn};
use crate::loader::factory::ModelElementFactory;
use crate::model::{Element, ElementKind, ScalarValue, Value};
use crate::vocabulary::{iris, terms, Concept};

/// `samm:Value` as a stand-alone element.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without `samm:value`.
pub fn create_value(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let value = decode_value(f, node, 0)?;
    Ok(Element::new(f.base_attributes(node)?, ElementKind::Value(value)))
}

/// Decodes a value node.
///
/// - A literal becomes a [`Value::Scalar`].
/// - A node typed `samm:Value` becomes its `samm:value` literal.
/// - Any other node becomes a [`Value::Complex`] keyed by the local name of
///   each outgoing predicate. A predicate whose characteristic belongs to
///   the collection family is read as an RDF list. Named nodes get a `name`
///   field from their URN unless they declare one.
///
/// # Errors
///
/// Returns [`LoadError::InvalidValue`] when nesting exceeds the factory's
/// depth bound and [`LoadError::MissingRequired`] for a `samm:Value`
/// without `samm:value`.
pub fn decode_value(f: &ModelElementFactory<'_>, node: &Node, depth: usize) -> Result<Value> {
    if depth > f.max_depth() {
        return Err(LoadError::invalid_value(node, "value nesting is too deep"));
    }
    if let Node::Literal(literal) = node {
        return Ok(Value::Scalar(ScalarValue::from_literal(literal)));
    }

    let value_class = f.vocab().class_iri(Concept::Value).unwrap_or_default();
    if f.graph().types(node).contains(&value_class) {
        let inner = f
            .value(node, &f.samm(terms::VALUE))
            .ok_or_else(|| LoadError::missing(node, "samm:Value must have samm:value"))?;
        return decode_value(f, &inner, depth + 1);
    }

    let mut fields = BTreeMap::new();
    for (predicate, object) in f.graph().predicate_objects(node) {
        if predicate == iris::RDF_TYPE {
            continue;
        }
        let key = local_part(&predicate).to_string();
        if fields.contains_key(&key) {
            continue;
        }
        let value = if is_collection_valued(f, &predicate) {
            let items = f
                .graph()
                .list_items(&object)?
                .iter()
                .map(|item| decode_value(f, item, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            Value::List(items)
        } else {
            decode_value(f, &object, depth + 1)?
        };
        fields.insert(key, value);
    }
    if let Node::Iri(urn) = node {
        fields
            .entry("name".to_string())
            .or_insert_with(|| Value::Scalar(ScalarValue::String(name_from_urn(urn).to_string())));
    }
    Ok(Value::Complex(fields))
}

/// Returns true if the property `predicate` has a collection characteristic.
fn is_collection_valued(f: &ModelElementFactory<'_>, predicate: &str) -> bool {
    let property = Node::iri(predicate);
    let Some(characteristic) = f.value(&property, &f.samm(terms::CHARACTERISTIC)) else {
        return false;
    };
    f.graph().types(&characteristic).iter().any(|t| {
        matches!(
            f.vocab().concept_from_urn(t),
            Some(
                Concept::Collection
                    | Concept::List
                    | Concept::Set
                    | Concept::SortedSet
                    | Concept::TimeSeries
            )
        )
    })
}
