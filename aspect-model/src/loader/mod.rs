//! Loading entry point: reads documents, merges them into one graph, detects
//! the meta-model version, picks the root nodes, and runs the factory.
//!
//! # Loading Order
//!
//! 1. Every model file and vocabulary path is checked for existence.
//! 2. Model documents are parsed and merged.
//! 3. The meta-model version is detected from the model documents' IRIs.
//! 4. Vocabulary documents (`*.ttl` under each vocabulary directory) are
//!    parsed and merged.
//! 5. The built-in characteristic instances are merged (unless disabled).
//! 6. Root nodes are chosen and built; the result is frozen.

mod base_attributes;
mod cache;
pub mod factory;
pub mod instantiator;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use walkdir::WalkDir;

pub use base_attributes::name_from_urn;
pub use factory::ModelElementFactory;

use crate::error::{LoadError, Result};
use crate::graph::{turtle, Node, RdfGraph};
use crate::model::AspectModel;
use crate::vocabulary::{builtin, iris, Concept, MetaModelVersion, Vocabulary};

/// Matches a SAMM namespace IRI and captures its version.
const VERSION_IRI: &str =
    r"urn:samm:org\.eclipse\.esmf\.samm:(?:meta-model|characteristic|entity|unit):(\d+\.\d+\.\d+)#";

/// Loader configuration. Deserializable from TOML:
///
/// ```toml
/// vocabulary_dirs = ["vendor/samm"]
/// builtin_vocabulary = true
/// root = "urn:samm:com.example:1.0.0#Movement"
/// max_ancestor_depth = 64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderOptions {
    /// Directories (or single files) of vocabulary Turtle documents.
    pub vocabulary_dirs: Vec<PathBuf>,
    /// Merge the built-in characteristic instances.
    pub builtin_vocabulary: bool,
    /// Build only this node instead of the detected roots.
    pub root: Option<String>,
    /// Bound on ancestor walks when naming anonymous nodes, and on value
    /// nesting.
    pub max_ancestor_depth: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            vocabulary_dirs: Vec::new(),
            builtin_vocabulary: true,
            root: None,
            max_ancestor_depth: 64,
        }
    }
}

/// One model document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A Turtle file on disk.
    File(PathBuf),
    /// In-memory Turtle text.
    Text {
        /// Label used in errors and logs.
        name: String,
        /// The document.
        content: String,
    },
}

impl ModelSource {
    fn name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Text { name, .. } => name.clone(),
        }
    }
}

/// Loads Aspect Models. Each call is an independent load with its own
/// cache; a loader can be reused.
#[derive(Debug, Clone, Default)]
pub struct AspectLoader {
    options: LoaderOptions,
}

impl AspectLoader {
    /// Creates a loader.
    #[must_use]
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// The loader's options.
    #[must_use]
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Loads the model spread over `paths`.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`]; a missing path fails before anything is parsed.
    pub fn load_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<AspectModel> {
        let sources = paths
            .iter()
            .map(|p| ModelSource::File(p.as_ref().to_path_buf()))
            .collect();
        self.load_sources(sources)
    }

    /// Loads a model from Turtle text.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`].
    pub fn load_str(&self, content: &str) -> Result<AspectModel> {
        self.load_sources(vec![ModelSource::Text {
            name: "<inline>".to_string(),
            content: content.to_string(),
        }])
    }

    /// Loads a model from any mix of sources.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`].
    pub fn load_sources(&self, sources: Vec<ModelSource>) -> Result<AspectModel> {
        // 1. Existence checks
        for source in &sources {
            if let ModelSource::File(path) = source {
                ensure_exists(path)?;
            }
        }
        for dir in &self.options.vocabulary_dirs {
            ensure_exists(dir)?;
        }

        // 2. Model documents
        let mut graph = RdfGraph::new();
        let mut scope = 0usize;
        for source in &sources {
            let text = read_source(source)?;
            let added = turtle::parse_into(&mut graph, &source.name(), scope, &text)?;
            debug!(source = %source.name(), triples = added, "parsed model document");
            scope += 1;
        }
        let model_subjects = graph.subject_nodes();

        // 3. Version
        let version = detect_version(&graph)?;
        let vocab = Vocabulary::new(version);

        // 4. Vocabulary documents
        for file in vocabulary_files(&self.options.vocabulary_dirs)? {
            let text = std::fs::read_to_string(&file).map_err(|source| LoadError::Io {
                path: file.clone(),
                source,
            })?;
            let added = turtle::parse_into(&mut graph, &file.display().to_string(), scope, &text)?;
            debug!(source = %file.display(), triples = added, "parsed vocabulary document");
            scope += 1;
        }

        // 5. Built-in vocabulary
        if self.options.builtin_vocabulary {
            let text = builtin::characteristic_instances(version);
            turtle::parse_into(&mut graph, builtin::SOURCE_NAME, scope, &text)?;
        }

        // 6. Roots and instantiation
        let root_nodes = self.root_nodes(&graph, &vocab, &model_subjects)?;
        let mut factory = ModelElementFactory::new(&graph, vocab, self.options.max_ancestor_depth);
        let mut roots = Vec::with_capacity(root_nodes.len());
        for node in &root_nodes {
            roots.push(factory.create_element(node)?);
        }
        let model = factory.finish(roots)?;

        info!(
            sources = sources.len(),
            version = %version,
            triples = graph.len(),
            roots = root_nodes.len(),
            elements = model.len(),
            "loaded aspect model"
        );
        Ok(model)
    }

    /// The configured root, else every Aspect of the model documents, else
    /// every typed meta-model element they declare.
    fn root_nodes(
        &self,
        graph: &RdfGraph,
        vocab: &Vocabulary,
        model_subjects: &[Node],
    ) -> Result<Vec<Node>> {
        if let Some(root) = &self.options.root {
            let node = Node::iri(root.as_str());
            if graph.predicate_objects(&node).is_empty() {
                return Err(LoadError::RootNotFound(root.clone()));
            }
            return Ok(vec![node]);
        }

        let aspect_class = vocab.class_iri(Concept::Aspect).unwrap_or_default();
        let aspects: Vec<Node> = model_subjects
            .iter()
            .filter(|s| s.is_iri() && graph.types(s).contains(&aspect_class))
            .cloned()
            .collect();
        if !aspects.is_empty() {
            return Ok(aspects);
        }

        Ok(model_subjects
            .iter()
            .filter(|s| {
                s.is_iri()
                    && graph
                        .types(s)
                        .iter()
                        .any(|t| vocab.concept_from_urn(t).is_some())
            })
            .cloned()
            .collect())
    }
}

/// Loads the model in `path` with default options.
///
/// # Errors
///
/// Any [`LoadError`].
pub fn load_aspect_model(path: impl AsRef<Path>) -> Result<AspectModel> {
    AspectLoader::default().load_files(&[path])
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}

fn read_source(source: &ModelSource) -> Result<String> {
    match source {
        ModelSource::File(path) => std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        }),
        ModelSource::Text { content, .. } => Ok(content.clone()),
    }
}

/// Every `*.ttl` file under `dirs`, sorted per directory.
fn vocabulary_files(dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for dir in dirs {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| LoadError::Io {
                path: e.path().map_or_else(|| dir.clone(), Path::to_path_buf),
                source: e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
            })?;
            let path = entry.path();
            if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "ttl") {
                files.push(path.to_path_buf());
            }
        }
    }
    Ok(files)
}

/// Detects the meta-model version referenced by the triples of `graph`.
fn detect_version(graph: &RdfGraph) -> Result<MetaModelVersion> {
    let pattern = Regex::new(VERSION_IRI)?;
    let mut versions = BTreeSet::new();
    let mut scan = |iri: &str| {
        for captures in pattern.captures_iter(iri) {
            if let Some(version) = captures.get(1) {
                versions.insert(version.as_str().to_string());
            }
        }
    };
    for triple in graph.triples() {
        scan(&triple.predicate);
        for node in [&triple.subject, &triple.object] {
            match node {
                Node::Iri(iri) => scan(iri),
                Node::Literal(literal) => {
                    if let Some(datatype) = &literal.datatype {
                        if !datatype.starts_with(iris::XSD) {
                            scan(datatype);
                        }
                    }
                }
                Node::Blank(_) => {}
            }
        }
    }
    match versions.len() {
        0 => Err(LoadError::VersionNotDetected),
        1 => versions
            .into_iter()
            .next()
            .ok_or(LoadError::VersionNotDetected)?
            .parse(),
        _ => Err(LoadError::VersionConflict {
            versions: versions.into_iter().collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = LoaderOptions::default();
        assert!(options.builtin_vocabulary);
        assert_eq!(options.max_ancestor_depth, 64);
        assert!(options.vocabulary_dirs.is_empty());
    }

    #[test]
    fn version_is_read_from_namespace_iris() -> Result<()> {
        let mut graph = RdfGraph::new();
        turtle::parse_into(
            &mut graph,
            "test",
            0,
            "@prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.0.0#> .\n\
             <urn:x#A> a samm:Aspect .",
        )?;
        assert_eq!(detect_version(&graph)?, MetaModelVersion::V2_0_0);
        Ok(())
    }

    #[test]
    fn graph_without_samm_iris_has_no_version() {
        let graph = RdfGraph::new();
        assert!(matches!(detect_version(&graph), Err(LoadError::VersionNotDetected)));
    }

    #[test]
    fn unknown_version_is_unsupported() -> Result<()> {
        let mut graph = RdfGraph::new();
        turtle::parse_into(
            &mut graph,
            "test",
            0,
            "<urn:x#A> a <urn:samm:org.eclipse.esmf.samm:meta-model:9.9.9#Aspect> .",
        )?;
        assert!(matches!(
            detect_version(&graph),
            Err(LoadError::UnsupportedVersion(v)) if v == "9.9.9"
        ));
        Ok(())
    }

    #[test]
    fn model_subjects_are_distinct_and_sorted() -> Result<()> {
        let mut graph = RdfGraph::new();
        turtle::parse_into(
            &mut graph,
            "test",
            0,
            "<urn:x#B> <urn:p> 1 . <urn:x#A> <urn:p> 2 . <urn:x#B> <urn:q> 3 .",
        )?;
        let subjects = graph.subject_nodes();
        assert_eq!(subjects, vec![Node::iri("urn:x#A"), Node::iri("urn:x#B")]);
        Ok(())
    }
}
