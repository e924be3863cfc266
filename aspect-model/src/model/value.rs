//! Decoded literal and complex values (enumeration values, example values,
//! range bounds).

use std::collections::BTreeMap;
use std::fmt;

use crate::graph::Literal;
use crate::vocabulary::iris;

/// A literal decoded into its native representation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// `xsd:string` or an untyped literal.
    String(String),
    /// A language-tagged string.
    LangString {
        /// The text.
        value: String,
        /// BCP 47 language tag.
        language: String,
    },
    /// Any member of the XSD integer family.
    Integer(i64),
    /// `xsd:float` / `xsd:double`.
    Float(f64),
    /// `xsd:decimal`, kept in lexical form to avoid rounding.
    Decimal(String),
    /// `xsd:boolean`.
    Boolean(bool),
    /// Any other datatype, or a lexical form that did not parse.
    Typed {
        /// Lexical form.
        lexical: String,
        /// Datatype IRI.
        datatype: String,
    },
}

impl ScalarValue {
    /// Decodes a literal according to its datatype.
    ///
    /// Numeric or boolean lexical forms that do not parse are kept as
    /// [`ScalarValue::Typed`] rather than rejected.
    #[must_use]
    pub fn from_literal(literal: &Literal) -> Self {
        let lexical = literal.lexical.clone();
        if let Some(language) = &literal.language {
            return Self::LangString {
                value: lexical,
                language: language.clone(),
            };
        }
        let Some(datatype) = literal.datatype.as_deref() else {
            return Self::String(lexical);
        };
        let typed = || Self::Typed {
            lexical: literal.lexical.clone(),
            datatype: datatype.to_string(),
        };
        match datatype.strip_prefix(iris::XSD) {
            Some("string") => Self::String(lexical),
            Some(local) if iris::XSD_INTEGER_TYPES.contains(&local) => {
                lexical.trim().parse().map(Self::Integer).unwrap_or_else(|_| typed())
            }
            Some("float" | "double") => lexical.trim().parse().map(Self::Float).unwrap_or_else(|_| typed()),
            Some("decimal") => Self::Decimal(lexical),
            Some("boolean") => match lexical.trim() {
                "true" | "1" => Self::Boolean(true),
                "false" | "0" => Self::Boolean(false),
                _ => typed(),
            },
            _ => typed(),
        }
    }

    /// Numeric view of integer, float, and decimal values.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Decimal(d) => d.trim().parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) | Self::Decimal(s) => f.write_str(s),
            Self::LangString { value, language } => write!(f, "{value}@{language}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Typed { lexical, .. } => f.write_str(lexical),
        }
    }
}

/// A value appearing in the model: a scalar, a complex (entity instance)
/// value, or a list of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A literal.
    Scalar(ScalarValue),
    /// An entity instance expanded into field name → value. Named instances
    /// carry a synthetic `name` field holding the URN fragment.
    Complex(BTreeMap<String, Value>),
    /// A collection value.
    List(Vec<Value>),
}

impl Value {
    /// Returns the scalar of a scalar value.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a field of a complex value.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Complex(fields) => fields.get(name),
            _ => None,
        }
    }
}

impl From<ScalarValue> for Value {
    fn from(value: ScalarValue) -> Self {
        Self::Scalar(value)
    }
}
