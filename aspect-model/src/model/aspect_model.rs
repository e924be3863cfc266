//! The frozen result of one load.

use std::collections::HashMap;

use super::element::{Element, ElementId, ElementKind};
use super::view::ElementRef;
use crate::vocabulary::MetaModelVersion;

/// Every element constructed by one load, with URN and name lookup.
///
/// The model is immutable once returned by the loader; all cross references
/// are [`ElementId`]s into this arena and are navigated through
/// [`ElementRef`] handles.
#[derive(Debug, Clone)]
pub struct AspectModel {
    version: MetaModelVersion,
    elements: Vec<Element>,
    by_urn: HashMap<String, ElementId>,
    roots: Vec<ElementId>,
}

impl AspectModel {
    pub(crate) fn new(
        version: MetaModelVersion,
        elements: Vec<Element>,
        by_urn: HashMap<String, ElementId>,
        roots: Vec<ElementId>,
    ) -> Self {
        Self {
            version,
            elements,
            by_urn,
            roots,
        }
    }

    /// Meta-model version the model was loaded with.
    #[must_use]
    pub fn meta_model_version(&self) -> MetaModelVersion {
        self.version
    }

    /// Number of elements, anonymous ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if nothing was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a handle to the element with `id`, or `None` if the id does
    /// not belong to this model.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<ElementRef<'_>> {
        (id.index() < self.elements.len()).then(|| ElementRef::new(self, id))
    }

    pub(crate) fn raw(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    /// All elements in construction order.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        (0..self.elements.len()).map(move |i| ElementRef::new(self, ElementId::from_index(i)))
    }

    /// The top-level elements the load started from.
    #[must_use]
    pub fn roots(&self) -> Vec<ElementRef<'_>> {
        self.roots.iter().map(|&id| ElementRef::new(self, id)).collect()
    }

    /// The first root that is an Aspect.
    #[must_use]
    pub fn aspect(&self) -> Option<ElementRef<'_>> {
        self.roots()
            .into_iter()
            .find(|r| matches!(r.kind(), ElementKind::Aspect(_)))
    }

    /// Looks up a named element by URN.
    #[must_use]
    pub fn find_by_urn(&self, urn: &str) -> Option<ElementRef<'_>> {
        self.by_urn.get(urn).map(|&id| ElementRef::new(self, id))
    }

    /// Returns every named element whose payload name (for properties with
    /// an explicit one) or name equals `name`, in construction order.
    ///
    /// Several distinct URNs may share a name, so all matches are returned.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Vec<ElementRef<'_>> {
        let mut ids: Vec<ElementId> = self.by_urn.values().copied().collect();
        ids.sort();
        ids.into_iter()
            .map(|id| ElementRef::new(self, id))
            .filter(|r| r.lookup_name() == name)
            .collect()
    }
}
