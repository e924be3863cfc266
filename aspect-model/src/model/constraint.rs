//! Constraints attached to characteristics through a Trait.

use std::fmt;

use super::value::ScalarValue;

/// How a range bound is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundDefinition {
    /// No bound on this side.
    Open,
    /// `value >= bound`.
    AtLeast,
    /// `value > bound`.
    GreaterThan,
    /// `value <= bound`.
    AtMost,
    /// `value < bound`.
    LessThan,
}

impl BoundDefinition {
    /// Maps a `samm-c:` bound individual's local name.
    #[must_use]
    pub fn from_local_name(name: &str) -> Option<Self> {
        match name {
            "AT_LEAST" => Some(Self::AtLeast),
            "GREATER_THAN" => Some(Self::GreaterThan),
            "AT_MOST" => Some(Self::AtMost),
            "LESS_THAN" => Some(Self::LessThan),
            _ => None,
        }
    }

    /// Default lower-bound interpretation when none is declared.
    #[must_use]
    pub fn inferred_lower(has_min: bool) -> Self {
        if has_min {
            Self::AtLeast
        } else {
            Self::Open
        }
    }

    /// Default upper-bound interpretation when none is declared.
    #[must_use]
    pub fn inferred_upper(has_max: bool) -> Self {
        if has_max {
            Self::AtMost
        } else {
            Self::Open
        }
    }
}

impl fmt::Display for BoundDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "OPEN",
            Self::AtLeast => "AT_LEAST",
            Self::GreaterThan => "GREATER_THAN",
            Self::AtMost => "AT_MOST",
            Self::LessThan => "LESS_THAN",
        })
    }
}

/// A single validation rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// `samm:Constraint` with no further structure.
    Generic,
    /// `samm-c:EncodingConstraint`.
    Encoding {
        /// The encoding IRI, e.g. `samm:UTF-8`.
        value: String,
    },
    /// `samm-c:FixedPointConstraint`.
    FixedPoint {
        /// Digits after the decimal point.
        scale: u32,
        /// Digits before the decimal point.
        integer: u32,
    },
    /// `samm-c:LanguageConstraint`.
    Language {
        /// ISO 639-1 code.
        language_code: String,
    },
    /// `samm-c:LengthConstraint`.
    Length {
        /// Minimum length.
        min_value: Option<u64>,
        /// Maximum length.
        max_value: Option<u64>,
    },
    /// `samm-c:LocaleConstraint`.
    Locale {
        /// BCP 47 locale.
        locale_code: String,
    },
    /// `samm-c:RangeConstraint`.
    Range {
        /// Lower bound value.
        min_value: Option<ScalarValue>,
        /// Upper bound value.
        max_value: Option<ScalarValue>,
        /// Declared or inferred lower bound interpretation.
        lower_bound_definition: BoundDefinition,
        /// Declared or inferred upper bound interpretation.
        upper_bound_definition: BoundDefinition,
    },
    /// `samm-c:RegularExpressionConstraint`.
    RegularExpression {
        /// The pattern.
        value: String,
    },
}

impl Constraint {
    /// The SAMM class name of this constraint.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Generic => "Constraint",
            Self::Encoding { .. } => "EncodingConstraint",
            Self::FixedPoint { .. } => "FixedPointConstraint",
            Self::Language { .. } => "LanguageConstraint",
            Self::Length { .. } => "LengthConstraint",
            Self::Locale { .. } => "LocaleConstraint",
            Self::Range { .. } => "RangeConstraint",
            Self::RegularExpression { .. } => "RegularExpressionConstraint",
        }
    }
}
