//! `samm-inspect`: loads an Aspect Model and prints its element graph.
//!
//! **Usage:**
//! ```text
//! samm-inspect <FILES>... [--vocabulary <dir>]... [--no-builtin-vocabulary]
//!              [--root <urn>] [--config <loader.toml>] [--format text|json]
//!              [--find <urn|name>] [-v...]
//! ```
//!
//! Options from `--config` are read first; command-line flags extend or
//! override them. Exits non-zero if the model fails to load.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use samm_aspect_model::{AspectLoader, AspectModel, ElementId, ElementRef, LoaderOptions};
use serde_json::{json, Value};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Load a SAMM Aspect Model and print its elements.
#[derive(Parser)]
#[command(name = "samm-inspect", about = "Load a SAMM Aspect Model and print its element graph")]
struct Args {
    /// Model documents (Turtle).
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Vocabulary directory or file; repeatable.
    #[arg(long = "vocabulary", value_name = "DIR")]
    vocabulary: Vec<PathBuf>,

    /// Do not merge the built-in characteristic instances.
    #[arg(long)]
    no_builtin_vocabulary: bool,

    /// Build only the element with this URN.
    #[arg(long, value_name = "URN")]
    root: Option<String>,

    /// Loader options in TOML.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print only the element with this URN, or every element with this
    /// (payload) name.
    #[arg(long, value_name = "URN|NAME")]
    find: Option<String>,

    /// Log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("samm-inspect: {err:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("samm_aspect_model={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let options = loader_options(args)?;
    debug!(?options, files = args.files.len(), "loader options resolved");
    let model = AspectLoader::new(options)
        .load_files(&args.files)
        .context("failed to load aspect model")?;
    info!(elements = model.len(), roots = model.roots().len(), "model ready");

    let selected: Vec<ElementRef<'_>> = match &args.find {
        Some(key) => match model.find_by_urn(key) {
            Some(element) => vec![element],
            None => model.find_by_name(key),
        },
        None => model.roots(),
    };

    let output = match args.format {
        Format::Text => render_text(&model, &selected),
        Format::Json => serde_json::to_string_pretty(&summary(&model, &selected))?,
    };
    println!("{output}");
    Ok(())
}

/// Options from `--config`, then the command-line flags.
fn loader_options(args: &Args) -> Result<LoaderOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("invalid loader options in {}", path.display()))?
        }
        None => LoaderOptions::default(),
    };
    options.vocabulary_dirs.extend(args.vocabulary.iter().cloned());
    if args.no_builtin_vocabulary {
        options.builtin_vocabulary = false;
    }
    if args.root.is_some() {
        options.root.clone_from(&args.root);
    }
    Ok(options)
}

// Text

fn render_text(model: &AspectModel, selected: &[ElementRef<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Aspect Model (SAMM {}): {} elements",
        model.meta_model_version(),
        model.len()
    );
    let mut printed = HashSet::new();
    for element in selected {
        render_element(&mut out, *element, 0, &mut printed);
    }
    out.trim_end().to_string()
}

fn render_element(out: &mut String, element: ElementRef<'_>, depth: usize, printed: &mut HashSet<ElementId>) {
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}{} {}", element.kind_name(), label(element));
    if let Some(property) = element.as_property() {
        if element.payload_name() != element.name() {
            let _ = write!(out, " [payload: {}]", element.payload_name());
        }
        if property.optional {
            out.push_str(" (optional)");
        }
        if property.not_in_payload {
            out.push_str(" (not in payload)");
        }
    }
    if let Some(data_type) = element.as_characteristic().and(element.data_type()) {
        let _ = write!(out, " -> {}", label(data_type));
    }

    if !printed.insert(element.id()) {
        out.push_str(" ...\n");
        return;
    }
    out.push('\n');

    for child in element.kind().children() {
        if let Some(child) = element.model().get(child) {
            if child.is_scalar() {
                continue;
            }
            render_element(out, child, depth + 1, printed);
        }
    }
}

fn label(element: ElementRef<'_>) -> String {
    if element.name().is_empty() {
        format!("<anonymous {}>", element.id())
    } else {
        element.name().to_string()
    }
}

// JSON

fn summary(model: &AspectModel, selected: &[ElementRef<'_>]) -> Value {
    json!({
        "metaModelVersion": model.meta_model_version().as_str(),
        "elementCount": model.len(),
        "selected": selected.iter().map(|e| e.id().index()).collect::<Vec<_>>(),
        "elements": model.elements().map(element_json).collect::<Vec<_>>(),
    })
}

fn element_json(element: ElementRef<'_>) -> Value {
    let mut value = json!({
        "id": element.id().index(),
        "kind": element.kind_name(),
        "name": element.name(),
        "urn": element.urn(),
        "preferredNames": element.preferred_names(),
        "descriptions": element.descriptions(),
        "see": element.see(),
        "parents": element.parent_elements().iter().map(|p| p.id().index()).collect::<Vec<_>>(),
        "children": element.kind().children().iter().map(|c| c.index()).collect::<Vec<_>>(),
    });
    if let Some(property) = element.as_property() {
        value["payloadName"] = json!(element.payload_name());
        value["optional"] = json!(property.optional);
        value["notInPayload"] = json!(property.not_in_payload);
        value["effectiveCharacteristic"] = json!(element.effective_characteristic().map(|c| c.id().index()));
    }
    if element.as_property().is_some() || element.as_characteristic().is_some() {
        value["dataType"] = json!(element.data_type().map(|d| d.urn().unwrap_or_else(|| d.name())));
    }
    if let Some(extends) = element.extends() {
        value["extends"] = json!(extends.id().index());
    }
    if element.is_complex_type() {
        value["allProperties"] = json!(element
            .all_properties()
            .iter()
            .map(|p| p.id().index())
            .collect::<Vec<_>>());
    }
    value
}
