pub mod validation;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use validation::{validate_pair, validate_school, FieldError, SlotFieldError, ValidationIssue};

/// One school's raw entry as edited by the surrounding form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolInput {
    pub name: String,
    pub tuition: f64,
    pub scholarship: f64,
    pub living_cost: f64,
    pub program_length: f64,
    pub post_grad_salary: f64,
    pub reputation: f64,
    pub location: f64,
    pub program_fit: f64,
}

impl Default for SchoolInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            tuition: 0.0,
            scholarship: 0.0,
            living_cost: 0.0,
            program_length: 4.0,
            post_grad_salary: 0.0,
            reputation: 5.0,
            location: 5.0,
            program_fit: 5.0,
        }
    }
}

impl SchoolInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Minimum data needed before a comparison is worth computing.
    pub fn is_ready(&self) -> bool {
        !self.name.is_empty() && self.tuition >= 0.0 && self.program_length > 0.0
    }

    pub fn numeric(&self, field: SchoolField) -> Option<f64> {
        let value = match field {
            SchoolField::Name => return None,
            SchoolField::Tuition => self.tuition,
            SchoolField::Scholarship => self.scholarship,
            SchoolField::LivingCost => self.living_cost,
            SchoolField::ProgramLength => self.program_length,
            SchoolField::PostGradSalary => self.post_grad_salary,
            SchoolField::Reputation => self.reputation,
            SchoolField::Location => self.location,
            SchoolField::ProgramFit => self.program_fit,
        };
        Some(value)
    }

    pub fn set_numeric(&mut self, field: SchoolField, to: f64) -> bool {
        match field {
            SchoolField::Name => return false,
            SchoolField::Tuition => self.tuition = to,
            SchoolField::Scholarship => self.scholarship = to,
            SchoolField::LivingCost => self.living_cost = to,
            SchoolField::ProgramLength => self.program_length = to,
            SchoolField::PostGradSalary => self.post_grad_salary = to,
            SchoolField::Reputation => self.reputation = to,
            SchoolField::Location => self.location = to,
            SchoolField::ProgramFit => self.program_fit = to,
        }
        true
    }
}

/// Partial update for a stored school; `None` keeps the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolOverrides {
    pub name: Option<String>,
    pub tuition: Option<f64>,
    pub scholarship: Option<f64>,
    pub living_cost: Option<f64>,
    pub program_length: Option<f64>,
    pub post_grad_salary: Option<f64>,
    pub reputation: Option<f64>,
    pub location: Option<f64>,
    pub program_fit: Option<f64>,
}

impl SchoolOverrides {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.numeric_changes().is_empty()
    }

    pub fn numeric_changes(&self) -> Vec<(SchoolField, f64)> {
        [
            (SchoolField::Tuition, self.tuition),
            (SchoolField::Scholarship, self.scholarship),
            (SchoolField::LivingCost, self.living_cost),
            (SchoolField::ProgramLength, self.program_length),
            (SchoolField::PostGradSalary, self.post_grad_salary),
            (SchoolField::Reputation, self.reputation),
            (SchoolField::Location, self.location),
            (SchoolField::ProgramFit, self.program_fit),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

pub fn apply_overrides(input: &mut SchoolInput, overrides: &SchoolOverrides) {
    if let Some(name) = &overrides.name {
        input.name = name.clone();
    }
    for (field, value) in overrides.numeric_changes() {
        input.set_numeric(field, value);
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SchoolSlot {
    School1,
    School2,
}

impl SchoolSlot {
    pub const ALL: [SchoolSlot; 2] = [SchoolSlot::School1, SchoolSlot::School2];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::School1 => "school1",
            Self::School2 => "school2",
        }
    }

    pub fn storage_key(&self) -> &'static str {
        match self {
            Self::School1 => "schoolEvaluator_school1",
            Self::School2 => "schoolEvaluator_school2",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Self::School1 => Self::School2,
            Self::School2 => Self::School1,
        }
    }
}

impl Display for SchoolSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::School1 => "School 1",
            Self::School2 => "School 2",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Error)]
#[error("unknown school slot: {0} (expected school1 or school2)")]
pub struct SlotParseError(pub String);

impl FromStr for SchoolSlot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "school1" | "1" | "a" => Ok(Self::School1),
            "school2" | "2" | "b" => Ok(Self::School2),
            _ => Err(SlotParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum SchoolField {
    Name,
    Tuition,
    Scholarship,
    LivingCost,
    ProgramLength,
    PostGradSalary,
    Reputation,
    Location,
    ProgramFit,
}

impl SchoolField {
    pub const NUMERIC: [SchoolField; 8] = [
        SchoolField::Tuition,
        SchoolField::Scholarship,
        SchoolField::LivingCost,
        SchoolField::ProgramLength,
        SchoolField::PostGradSalary,
        SchoolField::Reputation,
        SchoolField::Location,
        SchoolField::ProgramFit,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Tuition => "tuition",
            Self::Scholarship => "scholarship",
            Self::LivingCost => "livingCost",
            Self::ProgramLength => "programLength",
            Self::PostGradSalary => "postGradSalary",
            Self::Reputation => "reputation",
            Self::Location => "location",
            Self::ProgramFit => "programFit",
        }
    }

    /// Advisory bounds enforced by the form, never by the calculator.
    pub fn bounds(&self) -> Option<FieldBounds> {
        let (min, max) = match self {
            Self::Name => return None,
            Self::Tuition | Self::Scholarship => (0.0, 200_000.0),
            Self::LivingCost => (0.0, 100_000.0),
            Self::ProgramLength => (0.5, 10.0),
            Self::PostGradSalary => (0.0, 1_000_000.0),
            Self::Reputation | Self::Location | Self::ProgramFit => (1.0, 10.0),
        };
        Some(FieldBounds { min, max })
    }
}

impl Display for SchoolField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

#[derive(Debug, Error)]
#[error("unknown school field: {0}")]
pub struct FieldParseError(pub String);

impl FromStr for SchoolField {
    type Err = FieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        let field = match normalized.as_str() {
            "name" => Self::Name,
            "tuition" => Self::Tuition,
            "scholarship" => Self::Scholarship,
            "livingcost" | "living" => Self::LivingCost,
            "programlength" | "length" | "years" => Self::ProgramLength,
            "postgradsalary" | "salary" => Self::PostGradSalary,
            "reputation" => Self::Reputation,
            "location" => Self::Location,
            "programfit" | "fit" => Self::ProgramFit,
            _ => return Err(FieldParseError(s.to_string())),
        };
        Ok(field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
}

impl FieldBounds {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{apply_overrides, SchoolField, SchoolInput, SchoolOverrides, SchoolSlot};

    #[test]
    fn defaults_match_blank_form() {
        let input = SchoolInput::default();
        assert!(input.name.is_empty());
        assert_eq!(input.program_length, 4.0);
        assert_eq!(input.reputation, 5.0);
        assert_eq!(input.location, 5.0);
        assert_eq!(input.program_fit, 5.0);
        assert_eq!(input.tuition, 0.0);
        assert_eq!(input.post_grad_salary, 0.0);
    }

    #[test]
    fn deserializes_camel_case_and_fills_missing_fields() {
        let input: SchoolInput = serde_json::from_str(
            r#"{"name":"North","tuition":12000,"livingCost":8000,"programFit":9}"#,
        )
        .expect("failed to parse school");
        assert_eq!(input.name, "North");
        assert_eq!(input.living_cost, 8000.0);
        assert_eq!(input.program_fit, 9.0);
        assert_eq!(input.program_length, 4.0);
        assert_eq!(input.reputation, 5.0);
    }

    #[test]
    fn readiness_requires_name_and_positive_length() {
        assert!(!SchoolInput::default().is_ready());
        assert!(SchoolInput::named("East").is_ready());

        let mut zero_length = SchoolInput::named("East");
        zero_length.program_length = 0.0;
        assert!(!zero_length.is_ready());

        let mut negative_tuition = SchoolInput::named("East");
        negative_tuition.tuition = -1.0;
        assert!(!negative_tuition.is_ready());
    }

    #[test]
    fn overrides_only_touch_given_fields() {
        let mut input = SchoolInput::named("West");
        input.tuition = 10_000.0;
        apply_overrides(
            &mut input,
            &SchoolOverrides {
                scholarship: Some(2_500.0),
                reputation: Some(9.0),
                ..SchoolOverrides::default()
            },
        );
        assert_eq!(input.name, "West");
        assert_eq!(input.tuition, 10_000.0);
        assert_eq!(input.scholarship, 2_500.0);
        assert_eq!(input.reputation, 9.0);
    }

    #[test]
    fn parses_slots_and_fields() {
        assert_eq!(SchoolSlot::from_str("school1").ok(), Some(SchoolSlot::School1));
        assert_eq!(SchoolSlot::from_str("2").ok(), Some(SchoolSlot::School2));
        assert!(SchoolSlot::from_str("school3").is_err());
        assert_eq!(
            SchoolField::from_str("living_cost").ok(),
            Some(SchoolField::LivingCost)
        );
        assert_eq!(
            SchoolField::from_str("postGradSalary").ok(),
            Some(SchoolField::PostGradSalary)
        );
        assert!(SchoolField::from_str("gpa").is_err());
    }

    #[test]
    fn storage_keys_are_stable() {
        assert_eq!(SchoolSlot::School1.storage_key(), "schoolEvaluator_school1");
        assert_eq!(SchoolSlot::School2.storage_key(), "schoolEvaluator_school2");
        assert_eq!(SchoolSlot::School1.other(), SchoolSlot::School2);
    }
}
