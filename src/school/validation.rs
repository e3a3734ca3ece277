use serde::{Deserialize, Serialize};

use crate::i18n::{Locale, Message};
use crate::school::{SchoolField, SchoolInput, SchoolSlot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    NameRequired,
    BelowMin { min: f64 },
    AboveMax { max: f64 },
    NotFinite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: SchoolField,
    pub issue: ValidationIssue,
}

impl FieldError {
    pub fn message(&self) -> Message {
        match self.issue {
            ValidationIssue::NameRequired => Message::NameRequired,
            ValidationIssue::BelowMin { min } => Message::MinValue { min },
            ValidationIssue::AboveMax { max } => Message::MaxValue { max },
            ValidationIssue::NotFinite => Message::NotFinite,
        }
    }

    pub fn render(&self, locale: Locale) -> String {
        self.message().render(locale)
    }
}

/// Per-field advisory checks. An empty result means the form is clean; a
/// non-empty one never blocks computation.
pub fn validate_school(input: &SchoolInput) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if input.name.trim().is_empty() {
        errors.push(FieldError {
            field: SchoolField::Name,
            issue: ValidationIssue::NameRequired,
        });
    }

    for field in SchoolField::NUMERIC {
        let (Some(value), Some(bounds)) = (input.numeric(field), field.bounds()) else {
            continue;
        };
        let issue = if !value.is_finite() {
            ValidationIssue::NotFinite
        } else if value < bounds.min {
            ValidationIssue::BelowMin { min: bounds.min }
        } else if value > bounds.max {
            ValidationIssue::AboveMax { max: bounds.max }
        } else {
            continue;
        };
        errors.push(FieldError { field, issue });
    }
    errors
}

/// A field problem tagged with the school it was found on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotFieldError {
    pub slot: SchoolSlot,
    #[serde(flatten)]
    pub error: FieldError,
}

pub fn validate_pair(school1: &SchoolInput, school2: &SchoolInput) -> Vec<SlotFieldError> {
    [(SchoolSlot::School1, school1), (SchoolSlot::School2, school2)]
        .into_iter()
        .flat_map(|(slot, input)| {
            validate_school(input)
                .into_iter()
                .map(move |error| SlotFieldError { slot, error })
        })
        .collect()
}
