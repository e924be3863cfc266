//! One constructor function per meta-model concept.
//!
//! Every instantiator has the [`Instantiator`] signature: it reads the
//! predicates of its concept from the graph, builds referenced children
//! through the factory, and returns the finished element. The factory
//! reserves the element's slot before the call and stores the result after
//! it, so instantiators never touch the cache directly.

pub mod aspect;
pub mod characteristic;
pub mod constraint;
pub mod data_type;
pub mod property;
pub mod unit;
pub mod value;

use super::factory::ModelElementFactory;
use crate::error::Result;
use crate::graph::Node;
use crate::model::Element;

/// Signature shared by all instantiators.
pub type Instantiator = fn(&mut ModelElementFactory<'_>, &Node) -> Result<Element>;
