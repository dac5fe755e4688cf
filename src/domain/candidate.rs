//! Comment candidates and their validation.
//!
//! A [`CommentCandidate`] is what a caller submits. [`validate`] is a pure
//! function turning it into either a [`ValidCandidate`] (the only input the
//! store accepts) or the full list of violated constraints.

use std::fmt;

use serde::Serialize;

/// Maximum length of `name`, in characters.
pub const NAME_MAX_LEN: usize = 200;

/// Maximum length of `text`, in characters.
pub const TEXT_MAX_LEN: usize = 399;

/// Placeholder stored when the caller omits `name` entirely.
pub const DEFAULT_NAME: &str = "noname";

/// A not-yet-persisted comment as submitted by a caller.
///
/// Both fields are optional at this stage so that "absent" and "empty" can
/// be told apart during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentCandidate {
    /// Author name. Omitted means [`DEFAULT_NAME`]; empty is rejected.
    pub name: Option<String>,
    /// Comment body. Required and non-empty.
    pub text: Option<String>,
}

impl CommentCandidate {
    /// Convenience constructor for a candidate with both fields present.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            text: Some(text.into()),
        }
    }
}

/// A candidate that passed [`validate`].
///
/// Fields are private; the only way to obtain one is through validation,
/// so storage never sees unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCandidate {
    name: String,
    text: String,
}

impl ValidCandidate {
    /// Validated author name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validated comment body.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Candidate field a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The `name` field.
    Name,
    /// The `text` field.
    Text,
}

impl Field {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Violation {
    /// The field is missing or empty.
    #[error("{field} is required")]
    Required {
        /// Offending field.
        field: Field,
    },
    /// The field exceeds its maximum length.
    #[error("{field} must be at most {max} characters (got {actual})")]
    TooLong {
        /// Offending field.
        field: Field,
        /// Allowed maximum.
        max: usize,
        /// Submitted length.
        actual: usize,
    },
}

impl Violation {
    /// Field this violation refers to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::Required { field } | Self::TooLong { field, .. } => *field,
        }
    }
}

/// Non-empty list of violations produced by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    /// The individual violations, in field order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }

    /// Returns `true` if any violation refers to `field`.
    #[must_use]
    pub fn has_field(&self, field: Field) -> bool {
        self.0.iter().any(|v| v.field() == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks a candidate against the required-field and length constraints.
///
/// Collects every violation rather than stopping at the first one.
/// Lengths are counted in Unicode scalar values.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing each violated constraint.
pub fn validate(candidate: CommentCandidate) -> Result<ValidCandidate, ValidationErrors> {
    let mut violations = Vec::new();

    let name = candidate
        .name
        .unwrap_or_else(|| DEFAULT_NAME.to_string());
    check_field(Field::Name, &name, NAME_MAX_LEN, &mut violations);

    let text = candidate.text.unwrap_or_default();
    check_field(Field::Text, &text, TEXT_MAX_LEN, &mut violations);

    if violations.is_empty() {
        Ok(ValidCandidate { name, text })
    } else {
        Err(ValidationErrors(violations))
    }
}

fn check_field(field: Field, value: &str, max: usize, violations: &mut Vec<Violation>) {
    if value.is_empty() {
        violations.push(Violation::Required { field });
        return;
    }
    let actual = value.chars().count();
    if actual > max {
        violations.push(Violation::TooLong { field, max, actual });
    }
}
