//! Turtle 1.1 ingestion into [`RdfGraph`] via `sophia_turtle`.
//!
//! Blank node labels are rewritten with a per-document scope prefix so that
//! `_:b0` in two merged documents stays two distinct nodes.

use sophia_api::source::TripleSource;
use sophia_api::term::Term;
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::turtle;

use super::{Node, RdfGraph, Triple};
use crate::error::{LoadError, Result};

/// Parses `text` and merges its triples into `graph`.
///
/// `scope` must be unique per document within one graph. Returns the number
/// of triples that were new to the graph.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the document is not valid Turtle or
/// contains a statement that cannot be represented (e.g. RDF-star terms),
/// and [`LoadError::Store`] if the store rejects a triple.
pub fn parse_into(graph: &mut RdfGraph, source_name: &str, scope: usize, text: &str) -> Result<usize> {
    let mut parsed = Vec::new();
    let mut unsupported = false;

    turtle::parse_str(text)
        .for_each_triple(|t| {
            let subject = scoped(t.s(), scope);
            let predicate = scoped(t.p(), scope);
            let object = scoped(t.o(), scope);
            match (subject, predicate, object) {
                (Some(s), Some(Node::Iri(p)), Some(o)) if !matches!(s, Node::Literal(_)) => {
                    parsed.push(Triple::new(s, p, o));
                }
                _ => unsupported = true,
            }
        })
        .map_err(|e| LoadError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

    if unsupported {
        return Err(LoadError::Parse {
            source_name: source_name.to_string(),
            message: "statement uses an unsupported term kind".to_string(),
        });
    }

    let mut added = 0usize;
    for triple in parsed {
        if graph.insert(triple)? {
            added += 1;
        }
    }
    Ok(added)
}

fn scoped<T: Term>(term: T, scope: usize) -> Option<Node> {
    match Node::from_term(term)? {
        Node::Blank(id) => Some(Node::Blank(format!("d{scope}_{id}"))),
        other => Some(other),
    }
}
