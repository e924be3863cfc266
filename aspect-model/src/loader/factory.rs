//! Type dispatch: maps a graph node to its meta-model concept and runs the
//! matching instantiator.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::base_attributes::BaseAttributeExtractor;
use super::cache::ElementCache;
use super::instantiator::{self, Instantiator};
use crate::error::{LoadError, Result};
use crate::graph::{Literal, Node, RdfGraph};
use crate::model::{AspectModel, BaseAttributes, Element, ElementId};
use crate::vocabulary::{iris, terms, Concept, Vocabulary};

/// Builds elements from one merged graph into one identity cache.
///
/// A factory serves exactly one load. It owns the cache, so independent loads
/// never share state.
pub struct ModelElementFactory<'g> {
    graph: &'g RdfGraph,
    vocab: Vocabulary,
    cache: ElementCache,
    instantiating: HashSet<String>,
    max_ancestor_depth: usize,
}

impl<'g> ModelElementFactory<'g> {
    /// Creates a factory over `graph` for the vocabulary's meta-model version.
    #[must_use]
    pub fn new(graph: &'g RdfGraph, vocab: Vocabulary, max_ancestor_depth: usize) -> Self {
        Self {
            graph,
            vocab,
            cache: ElementCache::new(),
            instantiating: HashSet::new(),
            max_ancestor_depth,
        }
    }

    /// The merged graph.
    #[must_use]
    pub fn graph(&self) -> &'g RdfGraph {
        self.graph
    }

    /// The active vocabulary.
    #[must_use]
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Upper bound for ancestor walks and value nesting.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_ancestor_depth
    }

    /// Builds (or returns the already built) element for `node`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnknownElementType`] if the node's type does not
    /// map to a concept, or any error of the concept's instantiator.
    pub fn create_element(&mut self, node: &Node) -> Result<ElementId> {
        if let Some(id) = self.cached(node) {
            return Ok(id);
        }
        let concept = self.element_type(node)?;
        self.instantiate(node, concept)
    }

    /// Like [`create_element`](Self::create_element), but an untyped node
    /// that structural inference would leave as a Scalar is built as
    /// `fallback`.
    ///
    /// Used where the position fixes the concept: the target of `samm-c:unit`
    /// when no unit catalog was merged, or a member of a property list.
    ///
    /// # Errors
    ///
    /// Same as [`create_element`](Self::create_element).
    pub fn create_element_as(&mut self, node: &Node, fallback: Concept) -> Result<ElementId> {
        if let Some(id) = self.cached(node) {
            return Ok(id);
        }
        let concept = match self.element_type(node)? {
            Concept::Scalar if self.graph.types(node).is_empty() => fallback,
            inferred => inferred,
        };
        self.instantiate(node, concept)
    }

    fn cached(&self, node: &Node) -> Option<ElementId> {
        let id = self.cache.get(node.as_iri()?)?;
        trace!(%node, %id, "cache hit");
        Some(id)
    }

    fn instantiate(&mut self, node: &Node, concept: Concept) -> Result<ElementId> {
        if let Node::Literal(_) = node {
            return Err(LoadError::syntax(
                node,
                format!("a literal cannot be instantiated as {concept}"),
            ));
        }
        let id = self.cache.reserve(node.as_iri());
        debug!(%node, %concept, %id, "instantiating");
        let element = dispatch(concept)(self, node)?;
        Ok(self.cache.resolve_instance(id, element))
    }

    /// Determines the concept of `node`.
    ///
    /// An explicit `rdf:type` wins. Untyped nodes are inferred: a node with
    /// `samm:extends` is a Property, a node with `samm:property` takes the
    /// type of the referenced node, anything else is a Scalar.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnknownElementType`] if the node is typed but no
    /// type maps to a concept, and [`LoadError::Syntax`] if `samm:property`
    /// references form a cycle.
    pub fn element_type(&self, node: &Node) -> Result<Concept> {
        let extends = self.vocab.samm(terms::EXTENDS);
        let property = self.vocab.samm(terms::PROPERTY);
        let mut visited = HashSet::new();
        let mut current = node.clone();
        loop {
            if !visited.insert(current.clone()) {
                return Err(LoadError::syntax(node, "cyclic samm:property reference"));
            }
            let types = self.graph.types(&current);
            if let Some(first) = types.first() {
                return types
                    .iter()
                    .find_map(|t| self.vocab.concept_from_urn(t))
                    .or_else(|| {
                        types
                            .iter()
                            .any(|t| t == iris::RDFS_DATATYPE)
                            .then_some(Concept::Scalar)
                    })
                    .ok_or_else(|| LoadError::UnknownElementType {
                        node: current.to_string(),
                        type_iri: first.clone(),
                    });
            }
            if self.graph.has(&current, &extends) {
                return Ok(Concept::Property);
            }
            match self.graph.value(&current, &property) {
                Some(target) => current = target,
                None => return Ok(Concept::Scalar),
            }
        }
    }

    // Inheritance guard.

    /// Marks `urn` as under construction.
    pub fn begin_instantiation(&mut self, urn: &str) {
        self.instantiating.insert(urn.to_string());
    }

    /// Clears the under-construction mark of `urn`.
    pub fn end_instantiation(&mut self, urn: &str) {
        self.instantiating.remove(urn);
    }

    /// Returns true while `urn` is under construction.
    #[must_use]
    pub fn is_instantiating(&self, urn: &str) -> bool {
        self.instantiating.contains(urn)
    }

    /// Id bound to `urn`, built or still under construction.
    #[must_use]
    pub fn cached_id(&self, urn: &str) -> Option<ElementId> {
        self.cache.get(urn)
    }

    /// The finished element in `id`, if construction has completed.
    #[must_use]
    pub fn built(&self, id: ElementId) -> Option<&Element> {
        self.cache.element(id)
    }

    /// Ids of finished named elements matching `name` (payload name first).
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Vec<ElementId> {
        self.cache.get_by_name(name)
    }

    /// Number of elements reserved so far.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.cache.len()
    }

    /// Freezes everything built into an [`AspectModel`].
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingRequired`] if an element was reserved but
    /// never finished.
    pub fn finish(self, roots: Vec<ElementId>) -> Result<AspectModel> {
        self.cache.into_model(self.vocab.version(), roots)
    }

    // Graph helpers used by the instantiators.

    /// Full `samm:` IRI.
    #[must_use]
    pub fn samm(&self, local: &str) -> String {
        self.vocab.samm(local)
    }

    /// Full `samm-c:` IRI.
    #[must_use]
    pub fn samm_c(&self, local: &str) -> String {
        self.vocab.samm_c(local)
    }

    /// Base attributes of `node`.
    ///
    /// # Errors
    ///
    /// Propagates extraction failures.
    pub fn base_attributes(&self, node: &Node) -> Result<BaseAttributes> {
        BaseAttributeExtractor::new(self.graph, &self.vocab, self.max_ancestor_depth).extract(node)
    }

    /// First object of `(node, predicate)`.
    #[must_use]
    pub fn value(&self, node: &Node, predicate: &str) -> Option<Node> {
        self.graph.value(node, predicate)
    }

    /// Builds the element referenced by `(node, predicate)`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingRequired`] with `message` if the
    /// predicate is absent.
    pub fn required_child(&mut self, node: &Node, predicate: &str, message: &str) -> Result<ElementId> {
        let child = self
            .value(node, predicate)
            .ok_or_else(|| LoadError::missing(node, message))?;
        self.create_element(&child)
    }

    /// Builds the element referenced by `(node, predicate)`, if present.
    ///
    /// # Errors
    ///
    /// Propagates errors from building the child.
    pub fn optional_child(&mut self, node: &Node, predicate: &str) -> Result<Option<ElementId>> {
        self.value(node, predicate)
            .map(|child| self.create_element(&child))
            .transpose()
    }

    /// Builds every member of the RDF list referenced by `(node, predicate)`.
    /// An absent predicate yields an empty list.
    ///
    /// # Errors
    ///
    /// Propagates list traversal and child construction errors.
    pub fn list_children(&mut self, node: &Node, predicate: &str) -> Result<Vec<ElementId>> {
        self.list_items(node, predicate)?
            .iter()
            .map(|item| self.create_element(item))
            .collect()
    }

    /// Like [`list_children`](Self::list_children), building untyped members
    /// as `fallback`.
    ///
    /// # Errors
    ///
    /// Propagates list traversal and child construction errors.
    pub fn list_children_as(
        &mut self,
        node: &Node,
        predicate: &str,
        fallback: Concept,
    ) -> Result<Vec<ElementId>> {
        self.list_items(node, predicate)?
            .iter()
            .map(|item| self.create_element_as(item, fallback))
            .collect()
    }

    /// Members of the RDF list referenced by `(node, predicate)`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Syntax`] for a cyclic list.
    pub fn list_items(&self, node: &Node, predicate: &str) -> Result<Vec<Node>> {
        match self.value(node, predicate) {
            Some(head) => self.graph.list_items(&head),
            None => Ok(Vec::new()),
        }
    }

    /// Builds the `samm:dataType` of a characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingRequired`] if `required` and absent.
    pub fn data_type(&mut self, node: &Node, required: bool) -> Result<Option<ElementId>> {
        let predicate = self.samm(terms::DATA_TYPE);
        if required {
            self.required_child(node, &predicate, "characteristic must have a data type")
                .map(Some)
        } else {
            self.optional_child(node, &predicate)
        }
    }

    /// Literal object of `(node, predicate)`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidValue`] if the object is not a literal.
    pub fn literal(&self, node: &Node, predicate: &str) -> Result<Option<Literal>> {
        match self.value(node, predicate) {
            None => Ok(None),
            Some(Node::Literal(literal)) => Ok(Some(literal)),
            Some(other) => Err(LoadError::invalid_value(
                node,
                format!("expected a literal for <{predicate}>, found {other}"),
            )),
        }
    }

    /// Lexical form (or IRI) of `(node, predicate)`.
    #[must_use]
    pub fn string_value(&self, node: &Node, predicate: &str) -> Option<String> {
        self.value(node, predicate)
            .and_then(|value| value.lexical().map(str::to_string))
    }

    /// Like [`string_value`](Self::string_value), but absent is an error.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingRequired`] with `message` if absent.
    pub fn required_string(&self, node: &Node, predicate: &str, message: &str) -> Result<String> {
        self.string_value(node, predicate)
            .ok_or_else(|| LoadError::missing(node, message))
    }

    /// Boolean literal of `(node, predicate)`, `false` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidValue`] for a non-boolean literal.
    pub fn bool_value(&self, node: &Node, predicate: &str) -> Result<bool> {
        match self.literal(node, predicate)? {
            None => Ok(false),
            Some(literal) => match literal.lexical.trim() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                other => Err(LoadError::invalid_value(
                    node,
                    format!("`{other}` is not a boolean"),
                )),
            },
        }
    }

    /// Non-negative integer literal of `(node, predicate)`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidValue`] if the literal does not parse.
    pub fn u64_value(&self, node: &Node, predicate: &str) -> Result<Option<u64>> {
        self.literal(node, predicate)?
            .map(|literal| {
                literal.lexical.trim().parse::<u64>().map_err(|_| {
                    LoadError::invalid_value(
                        node,
                        format!("`{}` is not a non-negative integer", literal.lexical),
                    )
                })
            })
            .transpose()
    }
}

fn dispatch(concept: Concept) -> Instantiator {
    use instantiator::{aspect, characteristic, constraint, data_type, property, unit, value};
    match concept {
        Concept::Aspect => aspect::create_aspect,
        Concept::Operation => aspect::create_operation,
        Concept::Event => aspect::create_event,
        Concept::Property => property::create_property,
        Concept::AbstractProperty => property::create_abstract_property,
        Concept::Scalar => data_type::create_scalar,
        Concept::Entity => data_type::create_entity,
        Concept::AbstractEntity => data_type::create_abstract_entity,
        Concept::Unit => unit::create_unit,
        Concept::QuantityKind => unit::create_quantity_kind,
        Concept::Value => value::create_value,
        Concept::Characteristic => characteristic::create_characteristic,
        Concept::Code => characteristic::create_code,
        Concept::Collection => characteristic::create_collection,
        Concept::List => characteristic::create_list,
        Concept::Set => characteristic::create_set,
        Concept::SortedSet => characteristic::create_sorted_set,
        Concept::TimeSeries => characteristic::create_time_series,
        Concept::Enumeration => characteristic::create_enumeration,
        Concept::State => characteristic::create_state,
        Concept::Quantifiable => characteristic::create_quantifiable,
        Concept::Duration => characteristic::create_duration,
        Concept::Measurement => characteristic::create_measurement,
        Concept::SingleEntity => characteristic::create_single_entity,
        Concept::StructuredValue => characteristic::create_structured_value,
        Concept::Trait => characteristic::create_trait,
        Concept::Either => characteristic::create_either,
        Concept::Constraint => constraint::create_constraint,
        Concept::EncodingConstraint => constraint::create_encoding_constraint,
        Concept::FixedPointConstraint => constraint::create_fixed_point_constraint,
        Concept::LanguageConstraint => constraint::create_language_constraint,
        Concept::LengthConstraint => constraint::create_length_constraint,
        Concept::LocaleConstraint => constraint::create_locale_constraint,
        Concept::RangeConstraint => constraint::create_range_constraint,
        Concept::RegularExpressionConstraint => constraint::create_regular_expression_constraint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Triple;
    use crate::vocabulary::MetaModelVersion;

    fn setup() -> (RdfGraph, Vocabulary) {
        (RdfGraph::new(), Vocabulary::new(MetaModelVersion::V2_1_0))
    }

    #[test]
    fn explicit_types_are_mapped() -> Result<()> {
        let (mut graph, vocab) = setup();
        let node = Node::iri("urn:x#SpeedTrait");
        graph.insert(Triple::new(node.clone(), iris::RDF_TYPE, Node::iri(vocab.samm_c("Trait"))))?;
        let factory = ModelElementFactory::new(&graph, vocab, 64);
        assert_eq!(factory.element_type(&node)?, Concept::Trait);
        Ok(())
    }

    #[test]
    fn untyped_nodes_are_inferred() -> Result<()> {
        let (mut graph, vocab) = setup();
        let extending = Node::Blank("e".into());
        let borrowing = Node::Blank("b".into());
        let target = Node::iri("urn:x#speed");
        graph.insert(Triple::new(extending.clone(), vocab.samm("extends"), Node::iri("urn:x#abstract")))?;
        graph.insert(Triple::new(borrowing.clone(), vocab.samm("property"), target.clone()))?;
        graph.insert(Triple::new(target, iris::RDF_TYPE, Node::iri(vocab.samm("AbstractProperty"))))?;
        let factory = ModelElementFactory::new(&graph, vocab, 64);
        assert_eq!(factory.element_type(&extending)?, Concept::Property);
        assert_eq!(factory.element_type(&borrowing)?, Concept::AbstractProperty);
        assert_eq!(factory.element_type(&Node::iri(iris::XSD_STRING))?, Concept::Scalar);
        Ok(())
    }

    #[test]
    fn foreign_types_are_fatal() -> Result<()> {
        let (mut graph, vocab) = setup();
        let node = Node::iri("urn:x#Thing");
        let v1 = Vocabulary::new(MetaModelVersion::V1_0_0);
        graph.insert(Triple::new(node.clone(), iris::RDF_TYPE, Node::iri(v1.samm("Aspect"))))?;
        let factory = ModelElementFactory::new(&graph, vocab, 64);
        assert!(matches!(
            factory.element_type(&node),
            Err(LoadError::UnknownElementType { .. })
        ));
        Ok(())
    }

    #[test]
    fn rdfs_datatypes_are_scalars() -> Result<()> {
        let (mut graph, vocab) = setup();
        let node = Node::iri("urn:x#customType");
        graph.insert(Triple::new(node.clone(), iris::RDF_TYPE, Node::iri(iris::RDFS_DATATYPE)))?;
        let factory = ModelElementFactory::new(&graph, vocab, 64);
        assert_eq!(factory.element_type(&node)?, Concept::Scalar);
        Ok(())
    }

    #[test]
    fn scalars_are_built_once() -> Result<()> {
        let (graph, vocab) = setup();
        let mut factory = ModelElementFactory::new(&graph, vocab, 64);
        let a = factory.create_element(&Node::iri(iris::XSD_STRING))?;
        let b = factory.create_element(&Node::iri(iris::XSD_STRING))?;
        assert_eq!(a, b);
        assert_eq!(factory.element_count(), 1);
        assert_eq!(factory.find_by_name("string"), vec![a]);
        Ok(())
    }

    #[test]
    fn positional_fallback_applies_to_untyped_nodes() -> Result<()> {
        let (graph, vocab) = setup();
        let unit = Node::iri(vocab.unit("kilometrePerHour"));
        let mut factory = ModelElementFactory::new(&graph, vocab, 64);
        let id = factory.create_element_as(&unit, Concept::Unit)?;
        assert!(matches!(
            factory.built(id).map(|e| &e.kind),
            Some(crate::model::ElementKind::Unit(_))
        ));
        Ok(())
    }
}
