//! Vocabulary documents compiled into the crate.
//!
//! The predefined characteristic instances (`samm-c:Text`, `samm-c:Boolean`,
//! ...) are referenced by almost every model. Shipping them lets a model load
//! without an external vocabulary directory.

use super::MetaModelVersion;

const CHARACTERISTIC_INSTANCES: &str = include_str!("../../vocabulary/characteristic-instances.ttl");

/// Label under which the built-in document is reported in errors and logs.
pub const SOURCE_NAME: &str = "builtin:characteristic-instances.ttl";

/// Returns the built-in characteristic instances for `version` as Turtle.
#[must_use]
pub fn characteristic_instances(version: MetaModelVersion) -> String {
    CHARACTERISTIC_INSTANCES.replace("{{version}}", version.as_str())
}
