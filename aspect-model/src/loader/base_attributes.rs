//! Extraction of the attributes every element shares: name, URN, localized
//! strings and `samm:see` references.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::graph::{Node, RdfGraph};
use crate::model::BaseAttributes;
use crate::vocabulary::{iris, terms, Vocabulary};

/// Derives an element name from its URN.
///
/// Returns the fragment after `#`; without a fragment, the second-to-last
/// `:`-separated segment; with neither, the whole URN.
#[must_use]
pub fn name_from_urn(urn: &str) -> &str {
    if let Some((_, fragment)) = urn.rsplit_once('#') {
        return fragment;
    }
    let segments: Vec<&str> = urn.split(':').collect();
    match segments.len() {
        0 | 1 => urn,
        n => segments[n - 2],
    }
}

/// Local part of an arbitrary predicate IRI.
pub(crate) fn local_part(iri: &str) -> &str {
    iri.rsplit_once('#')
        .or_else(|| iri.rsplit_once('/'))
        .map_or(iri, |(_, local)| local)
}

pub(crate) struct BaseAttributeExtractor<'a> {
    graph: &'a RdfGraph,
    vocab: &'a Vocabulary,
    max_ancestor_depth: usize,
}

impl<'a> BaseAttributeExtractor<'a> {
    pub(crate) fn new(graph: &'a RdfGraph, vocab: &'a Vocabulary, max_ancestor_depth: usize) -> Self {
        Self {
            graph,
            vocab,
            max_ancestor_depth,
        }
    }

    /// Builds the base attributes of `node`.
    pub(crate) fn extract(&self, node: &Node) -> Result<BaseAttributes> {
        let urn = node.as_iri().map(str::to_string);
        let name = self.name(node);
        let mut base = BaseAttributes::new(self.vocab.version(), urn, name);
        base.preferred_names = self.localized(node, terms::PREFERRED_NAME);
        base.descriptions = self.localized(node, terms::DESCRIPTION);
        base.see = self.see(node);
        Ok(base)
    }

    fn name(&self, node: &Node) -> String {
        if self.vocab.version().has_explicit_names() {
            if let Some(Node::Literal(literal)) = self.graph.value(node, &self.vocab.samm(terms::NAME)) {
                return literal.lexical;
            }
        }
        match node {
            Node::Iri(urn) => name_from_urn(urn).to_string(),
            _ => self.synthesized_name(node),
        }
    }

    /// Name of an anonymous node.
    ///
    /// An `extends` target lends its name. Otherwise the walk climbs through
    /// incoming edges (skipping RDF list cells) to the nearest named
    /// ancestor and yields `{ancestor}_{predicate}`, with `_{index}` appended
    /// when the predicate has more than one value. A walk that finds no
    /// named ancestor within `max_ancestor_depth` steps yields `""`.
    pub(crate) fn synthesized_name(&self, node: &Node) -> String {
        if let Some(Node::Iri(target)) = self.graph.value(node, &self.vocab.samm(terms::EXTENDS)) {
            return name_from_urn(&target).to_string();
        }

        let mut current = node.clone();
        let mut child = node.clone();
        let mut list_index = 0usize;
        let mut suffix: Option<String> = None;

        for _ in 0..self.max_ancestor_depth {
            let Some((subject, predicate)) = self.graph.subject_predicates(&current).into_iter().next()
            else {
                return String::new();
            };
            if predicate == iris::RDF_FIRST {
                child = current;
                current = subject;
                continue;
            }
            if predicate == iris::RDF_REST {
                list_index += 1;
                current = subject;
                continue;
            }
            if suffix.is_none() {
                suffix = Some(self.edge_suffix(&subject, &predicate, &current, &child, list_index));
            }
            if let Node::Iri(urn) = &subject {
                return format!("{}_{}", name_from_urn(urn), suffix.unwrap_or_default());
            }
            child = subject.clone();
            current = subject;
            list_index = 0;
        }
        String::new()
    }

    /// `{predicate}` or `{predicate}_{index}` for the edge `subject --predicate--> object`.
    fn edge_suffix(
        &self,
        subject: &Node,
        predicate: &str,
        object: &Node,
        origin: &Node,
        list_index: usize,
    ) -> String {
        let local = self.vocab.local_name(predicate).unwrap_or_else(|| local_part(predicate));
        let (index, siblings) = if origin == object {
            let objects = self.graph.objects(subject, predicate);
            let index = objects.iter().position(|o| o == object).unwrap_or(0);
            (index, objects.len())
        } else {
            let len = self.graph.list_items(object).map_or(0, |items| items.len());
            (list_index, len)
        };
        if siblings > 1 {
            format!("{local}_{index}")
        } else {
            local.to_string()
        }
    }

    /// Language tag → text for every tagged literal of `samm:<local>`.
    ///
    /// Untagged literals are ignored; on a repeated tag the lexically
    /// smallest text wins.
    fn localized(&self, node: &Node, local: &str) -> BTreeMap<String, String> {
        let mut map: BTreeMap<String, String> = BTreeMap::new();
        for object in self.graph.objects(node, &self.vocab.samm(local)) {
            let Some(literal) = object.as_literal() else {
                continue;
            };
            let Some(language) = &literal.language else {
                continue;
            };
            map.entry(language.clone())
                .and_modify(|existing| {
                    if literal.lexical < *existing {
                        existing.clone_from(&literal.lexical);
                    }
                })
                .or_insert_with(|| literal.lexical.clone());
        }
        map
    }

    fn see(&self, node: &Node) -> Vec<String> {
        let mut see: Vec<String> = self
            .graph
            .objects(node, &self.vocab.samm(terms::SEE))
            .into_iter()
            .filter_map(|o| o.lexical().map(str::to_string))
            .collect();
        see.sort();
        see
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Literal, Triple};
    use crate::vocabulary::MetaModelVersion;

    fn vocab() -> Vocabulary {
        Vocabulary::new(MetaModelVersion::V2_1_0)
    }

    #[test]
    fn names_from_urns() {
        assert_eq!(name_from_urn("urn:samm:com.example:1.0.0#Movement"), "Movement");
        assert_eq!(name_from_urn("urn:example:Speed:"), "Speed");
        assert_eq!(name_from_urn("plain"), "plain");
    }

    #[test]
    fn localized_strings_keep_one_value_per_language() -> Result<()> {
        let v = vocab();
        let mut graph = RdfGraph::new();
        let node = Node::iri("urn:x#Speed");
        let pn = v.samm(terms::PREFERRED_NAME);
        graph.insert(Triple::new(node.clone(), &pn, Node::Literal(Literal::lang("speed", "en"))))?;
        graph.insert(Triple::new(node.clone(), &pn, Node::Literal(Literal::lang("Tempo", "de"))))?;
        graph.insert(Triple::new(node.clone(), &pn, Node::Literal(Literal::lang("Geschw.", "de"))))?;
        graph.insert(Triple::new(node.clone(), &pn, Node::Literal(Literal::string("untagged"))))?;

        let base = BaseAttributeExtractor::new(&graph, &v, 64).extract(&node)?;
        assert_eq!(base.name, "Speed");
        assert_eq!(base.urn.as_deref(), Some("urn:x#Speed"));
        assert_eq!(base.preferred_names.len(), 2);
        assert_eq!(base.preferred_names.get("de").map(String::as_str), Some("Geschw."));
        Ok(())
    }

    #[test]
    fn see_references_are_sorted() -> Result<()> {
        let v = vocab();
        let mut graph = RdfGraph::new();
        let node = Node::iri("urn:x#A");
        graph.insert(Triple::new(node.clone(), v.samm(terms::SEE), Node::iri("https://z.example")))?;
        graph.insert(Triple::new(node.clone(), v.samm(terms::SEE), Node::iri("https://a.example")))?;
        let base = BaseAttributeExtractor::new(&graph, &v, 64).extract(&node)?;
        assert_eq!(base.see, vec!["https://a.example", "https://z.example"]);
        Ok(())
    }

    #[test]
    fn blank_names_follow_the_nearest_named_ancestor() -> Result<()> {
        let v = vocab();
        let mut graph = RdfGraph::new();
        let trait_node = Node::iri("urn:x#SpeedTrait");
        let constraint = Node::Blank("c".into());
        graph.insert(Triple::new(trait_node, v.samm_c(terms::CONSTRAINT), constraint.clone()))?;
        let name = BaseAttributeExtractor::new(&graph, &v, 64).synthesized_name(&constraint);
        assert_eq!(name, "SpeedTrait_constraint");
        Ok(())
    }

    #[test]
    fn blank_names_in_lists_carry_their_position() -> Result<()> {
        let v = vocab();
        let mut graph = RdfGraph::new();
        let aspect = Node::iri("urn:x#Movement");
        let head = Node::Blank("l0".into());
        let tail = Node::Blank("l1".into());
        let first = Node::Blank("p0".into());
        let second = Node::Blank("p1".into());
        graph.insert(Triple::new(aspect, v.samm(terms::PROPERTIES), head.clone()))?;
        graph.insert(Triple::new(head.clone(), iris::RDF_FIRST, first.clone()))?;
        graph.insert(Triple::new(head, iris::RDF_REST, tail.clone()))?;
        graph.insert(Triple::new(tail.clone(), iris::RDF_FIRST, second.clone()))?;
        graph.insert(Triple::new(tail, iris::RDF_REST, Node::iri(iris::RDF_NIL)))?;

        let extractor = BaseAttributeExtractor::new(&graph, &v, 64);
        assert_eq!(extractor.synthesized_name(&first), "Movement_properties_0");
        assert_eq!(extractor.synthesized_name(&second), "Movement_properties_1");
        Ok(())
    }

    #[test]
    fn extends_target_lends_its_name() -> Result<()> {
        let v = vocab();
        let mut graph = RdfGraph::new();
        let blank = Node::Blank("b".into());
        graph.insert(Triple::new(blank.clone(), v.samm(terms::EXTENDS), Node::iri("urn:x#abstractSpeed")))?;
        let name = BaseAttributeExtractor::new(&graph, &v, 64).synthesized_name(&blank);
        assert_eq!(name, "abstractSpeed");
        Ok(())
    }

    #[test]
    fn orphaned_or_too_deep_blank_nodes_get_an_empty_name() -> Result<()> {
        let v = vocab();
        let mut graph = RdfGraph::new();
        let a = Node::Blank("a".into());
        let b = Node::Blank("b".into());
        graph.insert(Triple::new(a.clone(), "urn:p", b.clone()))?;
        graph.insert(Triple::new(b.clone(), "urn:p", a.clone()))?;
        let extractor = BaseAttributeExtractor::new(&graph, &v, 8);
        assert_eq!(extractor.synthesized_name(&a), "");
        assert_eq!(extractor.synthesized_name(&Node::Blank("lonely".into())), "");
        Ok(())
    }
}
