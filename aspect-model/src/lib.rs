//! SAMM Aspect Models loaded from Turtle into a typed element graph.
//!
//! The `samm-aspect-model` crate reads one or more Aspect Model documents,
//! merges them with the SAMM vocabulary, and instantiates every reachable
//! meta-model element (aspects, properties, characteristics, constraints,
//! entities, units) exactly once per URN. The result is an immutable
//! [`AspectModel`] arena navigated through [`ElementRef`] handles.
//!
//! # Entry Point
//!
//! ```no_run
//! let model = samm_aspect_model::load_aspect_model("Movement.ttl")?;
//! if let Some(aspect) = model.aspect() {
//!     for property in aspect.properties() {
//!         println!("{} ({})", property.payload_name(), property.kind_name());
//!     }
//! }
//! # Ok::<(), samm_aspect_model::LoadError>(())
//! ```
//!
//! # Configuration
//!
//! ```no_run
//! use samm_aspect_model::{AspectLoader, LoaderOptions};
//!
//! let loader = AspectLoader::new(LoaderOptions {
//!     vocabulary_dirs: vec!["vendor/samm".into()],
//!     ..LoaderOptions::default()
//! });
//! let model = loader.load_files(&["Movement.ttl", "SharedEntities.ttl"])?;
//! # Ok::<(), samm_aspect_model::LoadError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod graph;
pub mod loader;
pub mod model;
pub mod vocabulary;

pub use error::{LoadError, Result};
pub use loader::{load_aspect_model, AspectLoader, LoaderOptions, ModelSource};
pub use model::{AspectModel, ElementId, ElementKind, ElementRef};
pub use vocabulary::{Concept, MetaModelVersion};
