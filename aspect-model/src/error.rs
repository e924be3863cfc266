//! Error taxonomy of the loader.
//!
//! Every variant is fatal: a load either produces a complete, consistent
//! [`AspectModel`](crate::AspectModel) or one of these errors.

use std::path::PathBuf;

use crate::graph::Node;

/// Convenience alias used throughout the crate.
pub type Result<T, E = LoadError> = std::result::Result<T, E>;

/// Errors raised while reading, parsing, or instantiating an Aspect Model.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// An input model file or vocabulary path does not exist.
    #[error("file not found: `{}`", path.display())]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },
    /// Reading an existing file failed.
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A document is not valid Turtle.
    #[error("failed to parse `{source_name}`: {message}")]
    Parse {
        /// File path or label of the document.
        source_name: String,
        /// Parser message.
        message: String,
    },
    /// The model declares a meta-model version this crate has no vocabulary for.
    #[error("unsupported meta-model version `{0}`")]
    UnsupportedVersion(String),
    /// No meta-model namespace was found in the model documents.
    #[error("no SAMM meta-model namespace found in the model documents")]
    VersionNotDetected,
    /// The model documents reference more than one meta-model version.
    #[error("model documents reference conflicting meta-model versions: {}", versions.join(", "))]
    VersionConflict {
        /// All versions found, sorted.
        versions: Vec<String>,
    },
    /// A node's `rdf:type` does not map to any known meta-model concept.
    #[error("unknown element type `{type_iri}` for node {node}")]
    UnknownElementType {
        /// The offending node.
        node: String,
        /// The unmapped `rdf:type` IRI.
        type_iri: String,
    },
    /// A node has the wrong shape or kind for its position.
    #[error("syntax error at {node}: {message}")]
    Syntax {
        /// The offending node.
        node: String,
        /// What is wrong with it.
        message: String,
    },
    /// A required child (characteristic, data type, constraint, ...) is absent.
    #[error("{element}: {message}")]
    MissingRequired {
        /// URN of the element, or its node label when anonymous.
        element: String,
        /// What is missing.
        message: String,
    },
    /// A literal could not be decoded where a specific value was required.
    #[error("invalid value at {node}: {message}")]
    InvalidValue {
        /// The offending node.
        node: String,
        /// Decoding failure detail.
        message: String,
    },
    /// The configured root URN is not a subject of the merged graph.
    #[error("root element `{0}` not found in the model")]
    RootNotFound(String),
    /// A built-in pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// The in-memory triple store refused a statement.
    #[error("triple store rejected a statement: {0}")]
    Store(String),
}

impl LoadError {
    /// Builds a [`LoadError::Syntax`] for `node`.
    pub fn syntax(node: &Node, message: impl Into<String>) -> Self {
        Self::Syntax {
            node: node.to_string(),
            message: message.into(),
        }
    }

    /// Builds a [`LoadError::MissingRequired`] for `node`.
    pub fn missing(node: &Node, message: impl Into<String>) -> Self {
        Self::MissingRequired {
            element: node_label(node),
            message: message.into(),
        }
    }

    /// Builds a [`LoadError::InvalidValue`] for `node`.
    pub fn invalid_value(node: &Node, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            node: node.to_string(),
            message: message.into(),
        }
    }
}

fn node_label(node: &Node) -> String {
    match node {
        Node::Iri(urn) => urn.clone(),
        other => other.to_string(),
    }
}
