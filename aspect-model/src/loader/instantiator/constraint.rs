//! The constraint family.

use crate::error::{LoadError, Result};
use crate::graph::Node;
use crate::loader::factory::ModelElementFactory;
use crate::model::{BoundDefinition, Constraint, Element, ElementKind, ScalarValue};
use crate::vocabulary::terms;

fn finish(f: &ModelElementFactory<'_>, node: &Node, constraint: Constraint) -> Result<Element> {
    Ok(Element::new(
        f.base_attributes(node)?,
        ElementKind::Constraint(constraint),
    ))
}

/// `samm:Constraint`.
///
/// # Errors
///
/// Propagates base attribute extraction errors.
pub fn create_constraint(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    finish(f, node, Constraint::Generic)
}

/// `samm-c:EncodingConstraint`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without `samm:value`.
pub fn create_encoding_constraint(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let value = f.required_string(node, &f.samm(terms::VALUE), "encoding constraint must have a value")?;
    finish(f, node, Constraint::Encoding { value })
}

/// `samm-c:FixedPointConstraint`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without scale or integer, and
/// [`LoadError::InvalidValue`] if either does not fit a `u32`.
pub fn create_fixed_point_constraint(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let scale = required_u32(f, node, terms::SCALE)?;
    let integer = required_u32(f, node, terms::INTEGER)?;
    finish(f, node, Constraint::FixedPoint { scale, integer })
}

fn required_u32(f: &ModelElementFactory<'_>, node: &Node, local: &str) -> Result<u32> {
    let value = f
        .u64_value(node, &f.samm_c(local))?
        .ok_or_else(|| LoadError::missing(node, format!("fixed point constraint must have samm-c:{local}")))?;
    u32::try_from(value)
        .map_err(|_| LoadError::invalid_value(node, format!("samm-c:{local} `{value}` is out of range")))
}

/// `samm-c:LanguageConstraint`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without a language code.
pub fn create_language_constraint(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let language_code = f.required_string(
        node,
        &f.samm_c(terms::LANGUAGE_CODE),
        "language constraint must have a language code",
    )?;
    finish(f, node, Constraint::Language { language_code })
}

/// `samm-c:LengthConstraint`. Both bounds are optional.
///
/// # Errors
///
/// Returns [`LoadError::InvalidValue`] for a bound that is not a
/// non-negative integer.
pub fn create_length_constraint(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let min_value = f.u64_value(node, &f.samm_c(terms::MIN_VALUE))?;
    let max_value = f.u64_value(node, &f.samm_c(terms::MAX_VALUE))?;
    finish(f, node, Constraint::Length { min_value, max_value })
}

/// `samm-c:LocaleConstraint`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without a locale code.
pub fn create_locale_constraint(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let locale_code = f.required_string(
        node,
        &f.samm_c(terms::LOCALE_CODE),
        "locale constraint must have a locale code",
    )?;
    finish(f, node, Constraint::Locale { locale_code })
}

/// `samm-c:RangeConstraint`.
///
/// Missing bound definitions are inferred: `OPEN` for an absent bound,
/// `AT_LEAST` / `AT_MOST` for a present one.
///
/// # Errors
///
/// Returns [`LoadError::InvalidValue`] for a bound definition that is not
/// one of the four bound individuals.
pub fn create_range_constraint(f: &mut ModelElementFactory<'_>, node: &Node) -> Result<Element> {
    let min_value = f
        .literal(node, &f.samm_c(terms::MIN_VALUE))?
        .as_ref()
        .map(ScalarValue::from_literal);
    let max_value = f
        .literal(node, &f.samm_c(terms::MAX_VALUE))?
        .as_ref()
        .map(ScalarValue::from_literal);
    let lower_bound_definition = bound_definition(f, node, terms::LOWER_BOUND_DEFINITION)?
        .unwrap_or_else(|| BoundDefinition::inferred_lower(min_value.is_some()));
    let upper_bound_definition = bound_definition(f, node, terms::UPPER_BOUND_DEFINITION)?
        .unwrap_or_else(|| BoundDefinition::inferred_upper(max_value.is_some()));
    finish(
        f,
        node,
        Constraint::Range {
            min_value,
            max_value,
            lower_bound_definition,
            upper_bound_definition,
        },
    )
}

fn bound_definition(
    f: &ModelElementFactory<'_>,
    node: &Node,
    local: &str,
) -> Result<Option<BoundDefinition>> {
    let Some(value) = f.value(node, &f.samm_c(local)) else {
        return Ok(None);
    };
    value
        .as_iri()
        .and_then(|iri| f.vocab().local_name(iri))
        .and_then(BoundDefinition::from_local_name)
        .map(Some)
        .ok_or_else(|| {
            LoadError::invalid_value(node, format!("{value} is not a bound definition"))
        })
}

/// `samm-c:RegularExpressionConstraint`.
///
/// # Errors
///
/// Returns [`LoadError::MissingRequired`] without a pattern.
pub fn create_regular_expression_constraint(
    f: &mut ModelElementFactory<'_>,
    node: &Node,
) -> Result<Element> {
    let value = f.required_string(
        node,
        &f.samm(terms::VALUE),
        "regular expression constraint must have a value",
    )?;
    finish(f, node, Constraint::RegularExpression { value })
}
