//! Identity cache: one arena slot per constructed element, one slot per URN.
//!
//! A slot is reserved *before* an element's instantiator runs, and the URN is
//! bound to that slot at the same moment. Any recursive reference reached
//! while the element is still being built therefore resolves to the reserved
//! id instead of starting a second construction. The slot is filled by
//! [`ElementCache::resolve_instance`], which is also the single place where
//! parent edges are recorded.

use std::collections::HashMap;

use tracing::trace;

use crate::error::{LoadError, Result};
use crate::model::{AspectModel, Element, ElementId, ElementKind};
use crate::vocabulary::MetaModelVersion;

#[derive(Debug, Default)]
pub(crate) struct ElementCache {
    slots: Vec<Option<Element>>,
    parents: Vec<Vec<ElementId>>,
    by_urn: HashMap<String, ElementId>,
}

impl ElementCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Id bound to `urn`, whether or not its element is finished.
    pub(crate) fn get(&self, urn: &str) -> Option<ElementId> {
        self.by_urn.get(urn).copied()
    }

    /// Finished elements whose payload name (or name) equals `name`, in
    /// reservation order.
    pub(crate) fn get_by_name(&self, name: &str) -> Vec<ElementId> {
        let mut ids: Vec<ElementId> = self
            .by_urn
            .values()
            .copied()
            .filter(|&id| {
                self.element(id).is_some_and(|e| {
                    let lookup = match &e.kind {
                        ElementKind::Property(p) => {
                            p.payload_name.as_deref().unwrap_or(&e.base.name)
                        }
                        _ => &e.base.name,
                    };
                    lookup == name
                })
            })
            .collect();
        ids.sort();
        ids
    }

    /// Reserves a slot. Named elements are bound to their URN immediately.
    pub(crate) fn reserve(&mut self, urn: Option<&str>) -> ElementId {
        let id = ElementId::from_index(self.slots.len());
        self.slots.push(None);
        self.parents.push(Vec::new());
        if let Some(urn) = urn {
            self.by_urn.entry(urn.to_string()).or_insert(id);
        }
        id
    }

    /// Stores a constructed element in its reserved slot and records it as a
    /// parent of each of its children.
    ///
    /// If the slot is already filled the new element is discarded and the
    /// existing id is returned unchanged.
    pub(crate) fn resolve_instance(&mut self, id: ElementId, element: Element) -> ElementId {
        let Some(slot) = self.slots.get_mut(id.index()) else {
            return id;
        };
        if slot.is_some() {
            trace!(%id, "slot already resolved, discarding duplicate");
            return id;
        }
        for child in element.kind.children() {
            if let Some(parents) = self.parents.get_mut(child.index()) {
                if !parents.contains(&id) {
                    parents.push(id);
                }
            }
        }
        *slot = Some(element);
        id
    }

    /// The finished element in `id`, if any.
    pub(crate) fn element(&self, id: ElementId) -> Option<&Element> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Number of reserved slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Freezes the cache into a model.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingRequired`] if a reserved slot was never
    /// filled.
    pub(crate) fn into_model(
        self,
        version: MetaModelVersion,
        roots: Vec<ElementId>,
    ) -> Result<AspectModel> {
        let mut elements = Vec::with_capacity(self.slots.len());
        for (index, (slot, parents)) in self.slots.into_iter().zip(self.parents).enumerate() {
            let Some(mut element) = slot else {
                let id = ElementId::from_index(index);
                let element = self
                    .by_urn
                    .iter()
                    .find(|(_, v)| **v == id)
                    .map_or_else(|| id.to_string(), |(urn, _)| urn.clone());
                return Err(LoadError::MissingRequired {
                    element,
                    message: "element was referenced but never constructed".to_string(),
                });
            };
            element.parents = parents;
            elements.push(element);
        }
        Ok(AspectModel::new(version, elements, self.by_urn, roots))
    }
}
