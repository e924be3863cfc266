//! Versioned SAMM vocabulary: namespaces, term names, and concept mapping.
//!
//! The same instantiator logic runs against every supported meta-model
//! version; only the namespace IRIs differ. [`Vocabulary`] is built once per
//! load for the detected [`MetaModelVersion`] and hands out full term IRIs.

pub mod builtin;
pub mod terms;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Fixed IRIs outside the SAMM namespaces.
pub mod iris {
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:first`.
    pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    /// `rdf:rest`.
    pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    /// `rdf:nil`.
    pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    /// `rdf:langString`.
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    /// `rdfs:Datatype`.
    pub const RDFS_DATATYPE: &str = "http://www.w3.org/2000/01/rdf-schema#Datatype";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xsd:decimal`.
    pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// `xsd:float`.
    pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";
    /// `xsd:double`.
    pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// Local names of the XSD integer family, all decoded as `i64`.
    pub const XSD_INTEGER_TYPES: &[&str] = &[
        "integer",
        "int",
        "long",
        "short",
        "byte",
        "nonNegativeInteger",
        "positiveInteger",
        "nonPositiveInteger",
        "negativeInteger",
        "unsignedInt",
        "unsignedLong",
        "unsignedShort",
        "unsignedByte",
    ];
}

/// Common prefix of every SAMM namespace URN.
pub const SAMM_URN_PREFIX: &str = "urn:samm:org.eclipse.esmf.samm:";

/// A supported meta-model release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetaModelVersion {
    /// SAMM 1.0.0: element names come from the explicit `samm:name` predicate.
    #[serde(rename = "1.0.0")]
    V1_0_0,
    /// SAMM 2.0.0.
    #[serde(rename = "2.0.0")]
    V2_0_0,
    /// SAMM 2.1.0.
    #[serde(rename = "2.1.0")]
    V2_1_0,
}

impl MetaModelVersion {
    /// All supported versions, oldest first.
    pub const ALL: [MetaModelVersion; 3] = [Self::V1_0_0, Self::V2_0_0, Self::V2_1_0];

    /// Returns the version string used in namespace URNs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1_0_0 => "1.0.0",
            Self::V2_0_0 => "2.0.0",
            Self::V2_1_0 => "2.1.0",
        }
    }

    /// Returns true if this is the legacy format with explicit `samm:name`.
    #[must_use]
    pub fn has_explicit_names(self) -> bool {
        self == Self::V1_0_0
    }
}

impl FromStr for MetaModelVersion {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| LoadError::UnsupportedVersion(s.to_string()))
    }
}

impl fmt::Display for MetaModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four SAMM namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SammNamespace {
    /// `samm:`, the meta-model.
    MetaModel,
    /// `samm-c:`, characteristics and constraints.
    Characteristic,
    /// `samm-e:`, shared entities.
    Entity,
    /// `unit:`, the unit catalog.
    Unit,
}

impl SammNamespace {
    /// Path segment used in the namespace URN.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::MetaModel => "meta-model",
            Self::Characteristic => "characteristic",
            Self::Entity => "entity",
            Self::Unit => "unit",
        }
    }

    /// Conventional Turtle prefix.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::MetaModel => "samm",
            Self::Characteristic => "samm-c",
            Self::Entity => "samm-e",
            Self::Unit => "unit",
        }
    }
}

/// Every meta-model concept the factory can instantiate.
///
/// This is the closed dispatch domain: each variant maps to exactly one
/// instantiator function in the factory's static table.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Concept {
    Aspect,
    Property,
    AbstractProperty,
    Operation,
    Event,
    Entity,
    AbstractEntity,
    Scalar,
    Unit,
    QuantityKind,
    Value,
    Characteristic,
    Code,
    Collection,
    List,
    Set,
    SortedSet,
    TimeSeries,
    Enumeration,
    State,
    Quantifiable,
    Duration,
    Measurement,
    SingleEntity,
    StructuredValue,
    Trait,
    Either,
    Constraint,
    EncodingConstraint,
    FixedPointConstraint,
    LanguageConstraint,
    LengthConstraint,
    LocaleConstraint,
    RangeConstraint,
    RegularExpressionConstraint,
}

impl Concept {
    /// Every concept, in declaration order.
    pub const ALL: [Concept; 35] = [
        Self::Aspect,
        Self::Property,
        Self::AbstractProperty,
        Self::Operation,
        Self::Event,
        Self::Entity,
        Self::AbstractEntity,
        Self::Scalar,
        Self::Unit,
        Self::QuantityKind,
        Self::Value,
        Self::Characteristic,
        Self::Code,
        Self::Collection,
        Self::List,
        Self::Set,
        Self::SortedSet,
        Self::TimeSeries,
        Self::Enumeration,
        Self::State,
        Self::Quantifiable,
        Self::Duration,
        Self::Measurement,
        Self::SingleEntity,
        Self::StructuredValue,
        Self::Trait,
        Self::Either,
        Self::Constraint,
        Self::EncodingConstraint,
        Self::FixedPointConstraint,
        Self::LanguageConstraint,
        Self::LengthConstraint,
        Self::LocaleConstraint,
        Self::RangeConstraint,
        Self::RegularExpressionConstraint,
    ];

    /// The namespace and local name of the concept's class, or `None` for
    /// [`Concept::Scalar`], which has no class of its own.
    #[must_use]
    pub fn class(self) -> Option<(SammNamespace, &'static str)> {
        use SammNamespace::{Characteristic as C, MetaModel as M};
        let class = match self {
            Self::Aspect => (M, "Aspect"),
            Self::Property => (M, "Property"),
            Self::AbstractProperty => (M, "AbstractProperty"),
            Self::Operation => (M, "Operation"),
            Self::Event => (M, "Event"),
            Self::Entity => (M, "Entity"),
            Self::AbstractEntity => (M, "AbstractEntity"),
            Self::Scalar => return None,
            Self::Unit => (M, "Unit"),
            Self::QuantityKind => (M, "QuantityKind"),
            Self::Value => (M, "Value"),
            Self::Characteristic => (M, "Characteristic"),
            Self::Constraint => (M, "Constraint"),
            Self::Code => (C, "Code"),
            Self::Collection => (C, "Collection"),
            Self::List => (C, "List"),
            Self::Set => (C, "Set"),
            Self::SortedSet => (C, "SortedSet"),
            Self::TimeSeries => (C, "TimeSeries"),
            Self::Enumeration => (C, "Enumeration"),
            Self::State => (C, "State"),
            Self::Quantifiable => (C, "Quantifiable"),
            Self::Duration => (C, "Duration"),
            Self::Measurement => (C, "Measurement"),
            Self::SingleEntity => (C, "SingleEntity"),
            Self::StructuredValue => (C, "StructuredValue"),
            Self::Trait => (C, "Trait"),
            Self::Either => (C, "Either"),
            Self::EncodingConstraint => (C, "EncodingConstraint"),
            Self::FixedPointConstraint => (C, "FixedPointConstraint"),
            Self::LanguageConstraint => (C, "LanguageConstraint"),
            Self::LengthConstraint => (C, "LengthConstraint"),
            Self::LocaleConstraint => (C, "LocaleConstraint"),
            Self::RangeConstraint => (C, "RangeConstraint"),
            Self::RegularExpressionConstraint => (C, "RegularExpressionConstraint"),
        };
        Some(class)
    }

    /// Concept name as used in the vocabulary.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.class().map_or("Scalar", |(_, name)| name)
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Term IRIs for one meta-model version.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    version: MetaModelVersion,
    samm: String,
    samm_c: String,
    samm_e: String,
    unit: String,
}

impl Vocabulary {
    /// Builds the vocabulary for `version`.
    #[must_use]
    pub fn new(version: MetaModelVersion) -> Self {
        Self {
            version,
            samm: namespace_iri(SammNamespace::MetaModel, version),
            samm_c: namespace_iri(SammNamespace::Characteristic, version),
            samm_e: namespace_iri(SammNamespace::Entity, version),
            unit: namespace_iri(SammNamespace::Unit, version),
        }
    }

    /// The meta-model version this vocabulary serves.
    #[must_use]
    pub fn version(&self) -> MetaModelVersion {
        self.version
    }

    /// Returns the namespace IRI (ending in `#`).
    #[must_use]
    pub fn namespace(&self, ns: SammNamespace) -> &str {
        match ns {
            SammNamespace::MetaModel => &self.samm,
            SammNamespace::Characteristic => &self.samm_c,
            SammNamespace::Entity => &self.samm_e,
            SammNamespace::Unit => &self.unit,
        }
    }

    /// Full IRI of a `samm:` term.
    #[must_use]
    pub fn samm(&self, local: &str) -> String {
        format!("{}{local}", self.samm)
    }

    /// Full IRI of a `samm-c:` term.
    #[must_use]
    pub fn samm_c(&self, local: &str) -> String {
        format!("{}{local}", self.samm_c)
    }

    /// Full IRI of a `samm-e:` term.
    #[must_use]
    pub fn samm_e(&self, local: &str) -> String {
        format!("{}{local}", self.samm_e)
    }

    /// Full IRI of a `unit:` term.
    #[must_use]
    pub fn unit(&self, local: &str) -> String {
        format!("{}{local}", self.unit)
    }

    /// Full class IRI of a concept, or `None` for [`Concept::Scalar`].
    #[must_use]
    pub fn class_iri(&self, concept: Concept) -> Option<String> {
        concept
            .class()
            .map(|(ns, local)| format!("{}{local}", self.namespace(ns)))
    }

    /// Maps an `rdf:type` IRI to its concept.
    ///
    /// Only the `samm:` and `samm-c:` namespaces of this version are
    /// recognised; anything else returns `None`.
    #[must_use]
    pub fn concept_from_urn(&self, urn: &str) -> Option<Concept> {
        let (ns, local) = if let Some(local) = urn.strip_prefix(self.samm.as_str()) {
            (SammNamespace::MetaModel, local)
        } else if let Some(local) = urn.strip_prefix(self.samm_c.as_str()) {
            (SammNamespace::Characteristic, local)
        } else {
            return None;
        };
        Concept::ALL
            .into_iter()
            .find(|c| c.class() == Some((ns, local)))
    }

    /// Returns the local name of a term in any of this version's namespaces.
    #[must_use]
    pub fn local_name<'a>(&self, iri: &'a str) -> Option<&'a str> {
        [&self.samm, &self.samm_c, &self.samm_e, &self.unit]
            .into_iter()
            .find_map(|ns| iri.strip_prefix(ns.as_str()))
    }
}

/// Builds the namespace IRI of `ns` for `version`.
#[must_use]
pub fn namespace_iri(ns: SammNamespace, version: MetaModelVersion) -> String {
    format!("{SAMM_URN_PREFIX}{}:{}#", ns.segment(), version.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_concept_round_trips_through_its_class_iri() {
        for version in MetaModelVersion::ALL {
            let vocab = Vocabulary::new(version);
            for concept in Concept::ALL {
                match vocab.class_iri(concept) {
                    Some(iri) => assert_eq!(vocab.concept_from_urn(&iri), Some(concept)),
                    None => assert_eq!(concept, Concept::Scalar),
                }
            }
        }
    }

    #[test]
    fn foreign_versions_are_not_recognised() {
        let v2 = Vocabulary::new(MetaModelVersion::V2_1_0);
        let v1 = Vocabulary::new(MetaModelVersion::V1_0_0);
        let trait_v1 = v1.samm_c("Trait");
        assert_eq!(v2.concept_from_urn(&trait_v1), None);
        assert_eq!(v2.concept_from_urn("urn:example:1.0.0#Trait"), None);
    }

    #[test]
    fn namespace_iris_follow_the_urn_scheme() {
        let vocab = Vocabulary::new(MetaModelVersion::V2_1_0);
        assert_eq!(
            vocab.samm("Aspect"),
            "urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#Aspect"
        );
        assert_eq!(
            vocab.unit("metre"),
            "urn:samm:org.eclipse.esmf.samm:unit:2.1.0#metre"
        );
    }

    #[test]
    fn version_parsing() {
        assert_eq!("2.0.0".parse::<MetaModelVersion>().ok(), Some(MetaModelVersion::V2_0_0));
        assert!(matches!(
            "3.0.0".parse::<MetaModelVersion>(),
            Err(LoadError::UnsupportedVersion(v)) if v == "3.0.0"
        ));
    }
}
