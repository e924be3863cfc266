//! Query facade over the merged RDF graph.
//!
//! Triples parsed from every model and vocabulary document are stored in a
//! `sophia_inmem` [`FastGraph`]. The instantiators only ever talk to the
//! graph through the queries defined here (`value`, `objects`, `subjects`,
//! `predicate_objects`, `subject_predicates`, `list_items`), each a
//! `triples_matching` call whose hits are converted to owned [`Node`]s.
//!
//! Query results are sorted, so every derived list is deterministic no
//! matter how the store orders its indexes.

pub mod turtle;

use std::collections::HashSet;
use std::fmt;

use sophia_api::graph::{Graph, MutableGraph};
use sophia_api::term::matcher::{Any, TermMatcher};
use sophia_api::term::{BnodeId, IriRef, LanguageTag, SimpleTerm, Term, TermKind};
use sophia_api::triple::Triple as _;
use sophia_api::MownStr;
use sophia_inmem::graph::FastGraph;

use crate::error::{LoadError, Result};
use crate::vocabulary::iris;

/// An RDF literal with its optional datatype IRI and language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// The lexical form as written in the document.
    pub lexical: String,
    /// Full datatype IRI, if the parser reported one.
    pub datatype: Option<String>,
    /// Language tag for `rdf:langString` literals.
    pub language: Option<String>,
}

impl Literal {
    /// Creates a plain `xsd:string` literal.
    #[must_use]
    pub fn string(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(iris::XSD_STRING.to_string()),
            language: None,
        }
    }

    /// Creates a typed literal.
    #[must_use]
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
            language: None,
        }
    }

    /// Creates a language-tagged literal.
    #[must_use]
    pub fn lang(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(iris::RDF_LANG_STRING.to_string()),
            language: Some(language.into()),
        }
    }
}

/// A node of the merged graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    /// A named node (URN or IRI).
    Iri(String),
    /// A blank node, labelled uniquely across all merged documents.
    Blank(String),
    /// A literal value.
    Literal(Literal),
}

impl Node {
    /// Creates a named node.
    #[must_use]
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    /// Converts a sophia term. Quoted triples and variables have no
    /// counterpart and yield `None`.
    pub fn from_term<T: Term>(term: T) -> Option<Self> {
        match term.kind() {
            TermKind::Iri => term.iri().map(|iri| Node::Iri(iri.as_str().to_string())),
            TermKind::BlankNode => term.bnode_id().map(|id| Node::Blank(id.as_str().to_string())),
            TermKind::Literal => Some(Node::Literal(Literal {
                lexical: term.lexical_form()?.to_string(),
                datatype: term.datatype().map(|dt| dt.as_str().to_string()),
                language: term.language_tag().map(|tag| tag.as_str().to_string()),
            })),
            _ => None,
        }
    }

    /// Borrows the node as a sophia term.
    #[must_use]
    pub fn as_term(&self) -> SimpleTerm<'_> {
        match self {
            Node::Iri(iri) => SimpleTerm::Iri(IriRef::new_unchecked(MownStr::from(iri.as_str()))),
            Node::Blank(id) => SimpleTerm::BlankNode(BnodeId::new_unchecked(MownStr::from(id.as_str()))),
            Node::Literal(literal) => {
                let lexical = MownStr::from(literal.lexical.as_str());
                match &literal.language {
                    Some(tag) => SimpleTerm::LiteralLanguage(
                        lexical,
                        LanguageTag::new_unchecked(MownStr::from(tag.as_str())),
                    ),
                    None => {
                        let datatype = literal.datatype.as_deref().unwrap_or(iris::XSD_STRING);
                        SimpleTerm::LiteralDatatype(lexical, IriRef::new_unchecked(MownStr::from(datatype)))
                    }
                }
            }
        }
    }

    /// Returns the IRI of a named node.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal of a literal node.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Returns true for named nodes.
    #[must_use]
    pub fn is_iri(&self) -> bool {
        matches!(self, Node::Iri(_))
    }

    /// Returns true for blank nodes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    /// Returns the lexical form of a literal or the IRI of a named node.
    #[must_use]
    pub fn lexical(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            Node::Literal(literal) => Some(&literal.lexical),
            Node::Blank(_) => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{iri}>"),
            Node::Blank(id) => write!(f, "_:{id}"),
            Node::Literal(literal) => match (&literal.language, &literal.datatype) {
                (Some(lang), _) => write!(f, "\"{}\"@{lang}", literal.lexical),
                (None, Some(dt)) => write!(f, "\"{}\"^^<{dt}>", literal.lexical),
                (None, None) => write!(f, "\"{}\"", literal.lexical),
            },
        }
    }
}

/// A single statement with owned terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    /// Subject node (never a literal).
    pub subject: Node,
    /// Full predicate IRI.
    pub predicate: String,
    /// Object node.
    pub object: Node,
}

impl Triple {
    /// Creates a triple.
    #[must_use]
    pub fn new(subject: Node, predicate: impl Into<String>, object: Node) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }

    fn from_terms<S: Term, P: Term, O: Term>(s: S, p: P, o: O) -> Option<Self> {
        let Node::Iri(predicate) = Node::from_term(p)? else {
            return None;
        };
        Some(Self::new(Node::from_term(s)?, predicate, Node::from_term(o)?))
    }
}

fn predicate_term(predicate: &str) -> [IriRef<&str>; 1] {
    [IriRef::new_unchecked(predicate)]
}

/// The merged graph of one load.
pub struct RdfGraph {
    store: FastGraph,
}

impl Default for RdfGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl RdfGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: FastGraph::default(),
        }
    }

    /// Inserts a triple. Returns false if the identical triple was already present.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Store`] if the store cannot index another term.
    pub fn insert(&mut self, triple: Triple) -> Result<bool> {
        self.store
            .insert(
                triple.subject.as_term(),
                IriRef::new_unchecked(triple.predicate.as_str()),
                triple.object.as_term(),
            )
            .map_err(|e| LoadError::Store(e.to_string()))
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.triples().count()
    }

    /// Returns true if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.triples().next().is_none()
    }

    /// Every triple, sorted.
    #[must_use]
    pub fn triples(&self) -> Vec<Triple> {
        self.matching(Any, Any, Any)
    }

    /// Distinct subjects of the graph, sorted.
    #[must_use]
    pub fn subject_nodes(&self) -> Vec<Node> {
        let mut subjects: Vec<Node> = self.triples().into_iter().map(|t| t.subject).collect();
        subjects.dedup();
        subjects
    }

    fn matching<S, P, O>(&self, sm: S, pm: P, om: O) -> Vec<Triple>
    where
        S: TermMatcher,
        P: TermMatcher,
        O: TermMatcher,
    {
        // Reads from the in-memory store cannot fail.
        let mut found: Vec<Triple> = self
            .store
            .triples_matching(sm, pm, om)
            .filter_map(std::result::Result::ok)
            .filter_map(|t| Triple::from_terms(t.s(), t.p(), t.o()))
            .collect();
        found.sort();
        found
    }

    /// First object of `(subject, predicate, ?)`, if any.
    #[must_use]
    pub fn value(&self, subject: &Node, predicate: &str) -> Option<Node> {
        self.objects(subject, predicate).into_iter().next()
    }

    /// All objects of `(subject, predicate, ?)`.
    #[must_use]
    pub fn objects(&self, subject: &Node, predicate: &str) -> Vec<Node> {
        self.matching([subject.as_term()], predicate_term(predicate), Any)
            .into_iter()
            .map(|t| t.object)
            .collect()
    }

    /// All subjects of `(?, predicate, object)`.
    #[must_use]
    pub fn subjects(&self, predicate: &str, object: &Node) -> Vec<Node> {
        self.matching(Any, predicate_term(predicate), [object.as_term()])
            .into_iter()
            .map(|t| t.subject)
            .collect()
    }

    /// All `(predicate, object)` pairs leaving `subject`.
    #[must_use]
    pub fn predicate_objects(&self, subject: &Node) -> Vec<(String, Node)> {
        self.matching([subject.as_term()], Any, Any)
            .into_iter()
            .map(|t| (t.predicate, t.object))
            .collect()
    }

    /// All `(subject, predicate)` pairs pointing at `object`.
    #[must_use]
    pub fn subject_predicates(&self, object: &Node) -> Vec<(Node, String)> {
        self.matching(Any, Any, [object.as_term()])
            .into_iter()
            .map(|t| (t.subject, t.predicate))
            .collect()
    }

    /// Returns true if `subject` has at least one `predicate` statement.
    #[must_use]
    pub fn has(&self, subject: &Node, predicate: &str) -> bool {
        self.store
            .triples_matching([subject.as_term()], predicate_term(predicate), Any)
            .next()
            .is_some()
    }

    /// IRIs of every `rdf:type` of `subject`.
    #[must_use]
    pub fn types(&self, subject: &Node) -> Vec<String> {
        self.objects(subject, iris::RDF_TYPE)
            .into_iter()
            .filter_map(|node| match node {
                Node::Iri(iri) => Some(iri),
                _ => None,
            })
            .collect()
    }

    /// Flattens an RDF collection into its members, in list order.
    ///
    /// Traversal follows `rdf:first`/`rdf:rest` pairs until `rdf:nil` or a
    /// cell without `rdf:rest`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Syntax`] if the collection is cyclic.
    pub fn list_items(&self, head: &Node) -> Result<Vec<Node>> {
        let nil = Node::iri(iris::RDF_NIL);
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut cell = head.clone();
        while cell != nil {
            if !visited.insert(cell.clone()) {
                return Err(LoadError::syntax(head, "RDF list is cyclic"));
            }
            if let Some(first) = self.value(&cell, iris::RDF_FIRST) {
                items.push(first);
            }
            match self.value(&cell, iris::RDF_REST) {
                Some(rest) => cell = rest,
                None => break,
            }
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_graph() -> Result<(RdfGraph, Node)> {
        let mut graph = RdfGraph::new();
        let head = Node::Blank("l0".into());
        let second = Node::Blank("l1".into());
        graph.insert(Triple::new(head.clone(), iris::RDF_FIRST, Node::iri("urn:b")))?;
        graph.insert(Triple::new(head.clone(), iris::RDF_REST, second.clone()))?;
        graph.insert(Triple::new(second.clone(), iris::RDF_FIRST, Node::iri("urn:a")))?;
        graph.insert(Triple::new(second, iris::RDF_REST, Node::iri(iris::RDF_NIL)))?;
        Ok((graph, head))
    }

    #[test]
    fn duplicate_triples_are_stored_once() -> Result<()> {
        let mut graph = RdfGraph::new();
        let t = Triple::new(Node::iri("urn:s"), "urn:p", Node::iri("urn:o"));
        assert!(graph.insert(t.clone())?);
        assert!(!graph.insert(t)?);
        assert_eq!(graph.len(), 1);
        Ok(())
    }

    #[test]
    fn list_items_follow_the_list_not_the_sort_order() -> Result<()> {
        let (graph, head) = list_graph()?;
        let items = graph.list_items(&head)?;
        assert_eq!(items, vec![Node::iri("urn:b"), Node::iri("urn:a")]);
        Ok(())
    }

    #[test]
    fn nil_is_the_empty_list() {
        let graph = RdfGraph::new();
        let items = graph.list_items(&Node::iri(iris::RDF_NIL));
        assert!(matches!(items, Ok(v) if v.is_empty()));
    }

    #[test]
    fn cyclic_list_is_rejected() -> Result<()> {
        let mut graph = RdfGraph::new();
        let head = Node::Blank("c".into());
        graph.insert(Triple::new(head.clone(), iris::RDF_FIRST, Node::iri("urn:a")))?;
        graph.insert(Triple::new(head.clone(), iris::RDF_REST, head.clone()))?;
        assert!(matches!(graph.list_items(&head), Err(LoadError::Syntax { .. })));
        Ok(())
    }

    #[test]
    fn reverse_lookups_are_sorted() -> Result<()> {
        let mut graph = RdfGraph::new();
        let o = Node::iri("urn:o");
        graph.insert(Triple::new(Node::iri("urn:s2"), "urn:p", o.clone()))?;
        graph.insert(Triple::new(Node::iri("urn:s1"), "urn:p", o.clone()))?;
        graph.insert(Triple::new(Node::iri("urn:s3"), "urn:q", o.clone()))?;
        assert_eq!(graph.subjects("urn:p", &o), vec![Node::iri("urn:s1"), Node::iri("urn:s2")]);
        assert_eq!(graph.subject_predicates(&o).len(), 3);
        assert_eq!(
            graph.subject_nodes(),
            vec![Node::iri("urn:s1"), Node::iri("urn:s2"), Node::iri("urn:s3")]
        );
        Ok(())
    }

    #[test]
    fn literals_survive_the_store() -> Result<()> {
        let mut graph = RdfGraph::new();
        let s = Node::iri("urn:s");
        let tagged = Node::Literal(Literal::lang("Tempo", "de"));
        let typed = Node::Literal(Literal::typed("3", iris::XSD_DECIMAL));
        graph.insert(Triple::new(s.clone(), "urn:label", tagged.clone()))?;
        graph.insert(Triple::new(s.clone(), "urn:count", typed.clone()))?;
        assert_eq!(graph.value(&s, "urn:label"), Some(tagged));
        assert_eq!(graph.value(&s, "urn:count"), Some(typed));
        assert!(graph.has(&s, "urn:count"));
        assert!(!graph.has(&s, "urn:other"));
        Ok(())
    }
}
