//! Aspect Model fixtures for the integration tests.
//!
//! Each constant is a complete SAMM 2.1.0 Turtle document. Documents on disk
//! (for file-based loading) live under `models/` and `vocabulary/`.

#![allow(dead_code, unused_imports)]

mod blank_properties;
mod enumerations;
mod inheritance;
mod shared_characteristic;

use std::path::PathBuf;

pub use blank_properties::BLANK_PROPERTIES;
pub use enumerations::ENUMERATIONS;
pub use inheritance::{INHERITANCE, INHERITANCE_REVERSED};
pub use shared_characteristic::SHARED_CHARACTERISTIC;

/// Prefix block shared by the generated documents.
pub const PREFIXES: &str = r#"
@prefix samm:   <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
@prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
@prefix unit:   <urn:samm:org.eclipse.esmf.samm:unit:2.1.0#> .
@prefix xsd:    <http://www.w3.org/2001/XMLSchema#> .
@prefix :       <urn:samm:org.eclipse.test:1.0.0#> .
"#;

/// URN of `local` in the test namespace.
#[must_use]
pub fn urn(local: &str) -> String {
    format!("urn:samm:org.eclipse.test:1.0.0#{local}")
}

/// A document with `body` below the shared prefixes.
#[must_use]
pub fn document(body: &str) -> String {
    format!("{PREFIXES}\n{body}")
}

/// Path of a file under `tests/fixtures/`.
#[must_use]
pub fn path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}
