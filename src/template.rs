//! Request-path templating.
//!
//! Every API operation declares its path as a template such as
//! `/catalogs/{pin}/{area}/products{?q,skip,take,sort}`: literal text, simple
//! variables that expand into required path segments, and an optional trailing
//! query expression whose variables are emitted only when a value was
//! supplied. This module parses such templates and expands them against a
//! [`Params`] set into the concrete request path.
//!
//! # Grammar
//!
//! The supported grammar is the subset of RFC 6570 the API actually uses:
//!
//! - **Literals** are copied verbatim into the output.
//! - **`{name}`** expands to the percent-encoded value of `name`; a missing
//!   value is a [`TemplateError::MissingVariable`] because these represent
//!   path segments (catalog PIN, SPN, area) that cannot be omitted.
//! - **`{?a,b,c}`** may appear once, as the final segment. Variables are
//!   emitted in *declared* order as `key=value` pairs joined with `&`,
//!   skipping absent ones; the `?` prefix appears only when at least one pair
//!   was emitted. Declared order guarantees that identical input always
//!   produces a byte-identical URL.
//!
//! Other RFC 6570 operators (`+`, `#`, `.`, `/`, `;`, `&`, `=`, `,`, `!`,
//! `@`, `|`) are rejected at parse time as unsupported.
//!
//! # Example
//!
//! ```rust
//! use meplato_store::template::{Params, Template};
//!
//! let template = Template::parse("/catalogs/{pin}/{area}/products{?q,skip,take,sort}").unwrap();
//! let params = Params::new()
//!     .set("pin", "AD8CCDD5F9")
//!     .set("area", "work")
//!     .set("skip", 10_u64);
//!
//! let path = template.expand(&params).unwrap();
//! assert_eq!(path, "/catalogs/AD8CCDD5F9/work/products?skip=10");
//! ```

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// RFC 6570 operator characters other than `?`, none of which are supported.
const UNSUPPORTED_OPERATORS: &[char] = &['+', '#', '.', '/', ';', '&', '=', ',', '!', '@', '|'];

/// Both brace characters, for locating the next expression boundary.
const BRACES: &[char] = &['{', '}'];

/// Errors raised while parsing or expanding a path template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template text is malformed.
    #[error("Malformed path template '{pattern}': {reason}")]
    Syntax {
        /// The template text that failed to parse.
        pattern: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A required (non-query) variable has no value in the parameter set.
    #[error("Missing value for required path variable '{name}'")]
    MissingVariable {
        /// The name of the variable without a value.
        name: String,
    },
}

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Verbatim text, already percent-safe.
    Literal(String),
    /// `{name}`: a required, percent-encoded path variable.
    Variable(String),
    /// `{?a,b,c}`: the trailing query expression, variables in declared order.
    Query(Vec<String>),
}

/// A parsed path template, ready for expansion.
///
/// Templates are immutable; each API operation declares its pattern as a
/// module constant and parses it when building the request. The query
/// variable order is captured here at parse time, never inferred from the
/// parameter set, so expansion is deterministic.
///
/// # Example
///
/// ```rust
/// use meplato_store::template::{Params, Template};
///
/// let template = Template::parse("/jobs/{id}").unwrap();
/// let path = template.expand(&Params::new().set("id", "a3c2")).unwrap();
/// assert_eq!(path, "/jobs/a3c2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pattern: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses a template pattern.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Syntax`] on unbalanced or nested braces, an
    /// empty expression, an unsupported operator, a variable list outside a
    /// query expression, an invalid variable name, or a query expression
    /// that is not the final segment.
    pub fn parse(pattern: impl Into<String>) -> Result<Self, TemplateError> {
        let pattern = pattern.into();
        let mut segments = Vec::new();

        let mut rest = pattern.as_str();
        while let Some(brace) = rest.find(BRACES) {
            let (literal, tail) = rest.split_at(brace);
            if !literal.is_empty() {
                segments.push(Segment::Literal(literal.to_string()));
            }
            if tail.starts_with('}') {
                return Err(Self::syntax(&pattern, "unmatched '}'"));
            }

            let inner = &tail[1..];
            let close = inner
                .find(BRACES)
                .ok_or_else(|| Self::syntax(&pattern, "unmatched '{'"))?;
            if inner.as_bytes()[close] == b'{' {
                return Err(Self::syntax(&pattern, "nested '{'"));
            }

            segments.push(Self::parse_expression(&inner[..close], &pattern)?);
            rest = &inner[close + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        // At most one query expression, and only in final position
        for (index, segment) in segments.iter().enumerate() {
            if matches!(segment, Segment::Query(_)) && index + 1 != segments.len() {
                return Err(Self::syntax(
                    &pattern,
                    "query expression must be the final segment",
                ));
            }
        }

        Ok(Self { pattern, segments })
    }

    /// Parses one brace-delimited expression body.
    fn parse_expression(expression: &str, pattern: &str) -> Result<Segment, TemplateError> {
        if expression.is_empty() {
            return Err(Self::syntax(pattern, "empty expression"));
        }

        if let Some(variables) = expression.strip_prefix('?') {
            if variables.is_empty() {
                return Err(Self::syntax(pattern, "empty query expression"));
            }
            let mut names = Vec::new();
            for name in variables.split(',') {
                Self::check_variable_name(name, pattern)?;
                names.push(name.to_string());
            }
            return Ok(Segment::Query(names));
        }

        if let Some(operator) = expression.chars().next() {
            if UNSUPPORTED_OPERATORS.contains(&operator) {
                return Err(Self::syntax(
                    pattern,
                    format!("unsupported operator '{operator}'"),
                ));
            }
        }
        if expression.contains(',') {
            return Err(Self::syntax(
                pattern,
                "variable lists are only supported in query expressions",
            ));
        }
        Self::check_variable_name(expression, pattern)?;
        Ok(Segment::Variable(expression.to_string()))
    }

    fn check_variable_name(name: &str, pattern: &str) -> Result<(), TemplateError> {
        if name.is_empty() {
            return Err(Self::syntax(pattern, "empty variable name"));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(Self::syntax(
                pattern,
                format!("invalid variable name '{name}'"),
            ));
        }
        Ok(())
    }

    fn syntax(pattern: &str, reason: impl Into<String>) -> TemplateError {
        TemplateError::Syntax {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Expands the template against a parameter set.
    ///
    /// Values are percent-encoded as URL components. Query variables are
    /// emitted in the order they were declared in the pattern, skipping any
    /// that have no value; the `?` prefix appears only when at least one
    /// pair was emitted.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingVariable`] if a non-query variable
    /// has no value in `params`.
    pub fn expand(&self, params: &Params) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Variable(name) => {
                    let value =
                        params
                            .get(name)
                            .ok_or_else(|| TemplateError::MissingVariable {
                                name: name.clone(),
                            })?;
                    out.push_str(&urlencoding::encode(value));
                }
                Segment::Query(names) => {
                    let mut pairs = Vec::new();
                    for name in names {
                        if let Some(value) = params.get(name) {
                            pairs.push(format!("{name}={}", urlencoding::encode(value)));
                        }
                    }
                    if !pairs.is_empty() {
                        out.push('?');
                        out.push_str(&pairs.join("&"));
                    }
                }
            }
        }
        Ok(out)
    }

    /// Parses `pattern` and expands it against `params` in one step.
    ///
    /// This is the form the API operations use: each declares its pattern as
    /// a constant and calls `expand_pattern` while building the request.
    ///
    /// # Errors
    ///
    /// Returns any [`TemplateError`] from parsing or expansion.
    pub fn expand_pattern(pattern: &str, params: &Params) -> Result<String, TemplateError> {
        Self::parse(pattern)?.expand(params)
    }

    /// Returns the original pattern text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

/// A stringified parameter value.
///
/// Parameters travel as strings; this wrapper fixes the stringification rule
/// per source type (canonical display for integers and booleans, shortest
/// round-trip form for floats) so every call site formats values the same
/// way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamValue(String);

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self(value.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self(value.to_string())
    }
}

/// A set of named parameter values for template expansion.
///
/// Built per call and discarded after expansion. A variable is either
/// *present* (with a possibly-empty string value) or *absent*; absent
/// variables are omitted from query output entirely, while a present empty
/// string still emits `key=`.
///
/// # Example
///
/// ```rust
/// use meplato_store::template::Params;
///
/// let params = Params::new()
///     .set("pin", "AD8CCDD5F9")
///     .set_opt("skip", Some(10_u64))
///     .set_opt::<&str>("q", None);
///
/// assert_eq!(params.get("pin"), Some("AD8CCDD5F9"));
/// assert_eq!(params.get("skip"), Some("10"));
/// assert_eq!(params.get("q"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, String>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, replacing any previous value.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.values.insert(name.into(), value.into().0);
        self
    }

    /// Sets a parameter only when a value is present.
    ///
    /// `None` leaves the set unchanged, which is how optional query
    /// variables stay absent.
    #[must_use]
    pub fn set_opt<V: Into<ParamValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    /// Returns the stringified value of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of parameters set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Template>();
    assert_send_sync::<Params>();
    assert_send_sync::<TemplateError>();
};
