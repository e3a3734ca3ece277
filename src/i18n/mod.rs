//! Typed message catalog.
//!
//! Every label and sentence shown to a user is an enumerated key; each
//! locale's table is an exhaustive `match`, so a missing translation fails to
//! compile instead of falling through at runtime.

mod catalog;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::school::{SchoolField, SchoolSlot};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
    Ja,
    Es,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Zh, Locale::Ja, Locale::Es, Locale::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
            Self::Ja => "ja",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
            Self::Ja => "日本語",
            Self::Es => "Español",
            Self::Fr => "Français",
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Error)]
#[error("unsupported locale: {0} (expected one of en, zh, ja, es, fr)")]
pub struct LocaleParseError(pub String);

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        // Region subtags ("en-US", "zh_CN") resolve to the base language.
        let base = normalized
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        match base {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            "ja" => Ok(Self::Ja),
            "es" => Ok(Self::Es),
            "fr" => Ok(Self::Fr),
            _ => Err(LocaleParseError(s.to_string())),
        }
    }
}

/// Static labels with no arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Title,
    School1,
    School2,
    Metric,
    NetCost,
    TotalProgramCost,
    EstimatedRoi,
    WeightedScore,
    Recommendation,
    BetterFinancially,
    BetterOverall,
    Tie,
    NotReady,
    Field,
    Problem,
    SchoolName,
    Tuition,
    Scholarship,
    LivingCost,
    ProgramLength,
    PostGradSalary,
    Reputation,
    Location,
    ProgramFit,
}

impl MessageKey {
    pub fn for_slot(slot: SchoolSlot) -> Self {
        match slot {
            SchoolSlot::School1 => Self::School1,
            SchoolSlot::School2 => Self::School2,
        }
    }

    pub fn for_field(field: SchoolField) -> Self {
        match field {
            SchoolField::Name => Self::SchoolName,
            SchoolField::Tuition => Self::Tuition,
            SchoolField::Scholarship => Self::Scholarship,
            SchoolField::LivingCost => Self::LivingCost,
            SchoolField::ProgramLength => Self::ProgramLength,
            SchoolField::PostGradSalary => Self::PostGradSalary,
            SchoolField::Reputation => Self::Reputation,
            SchoolField::Location => Self::Location,
            SchoolField::ProgramFit => Self::ProgramFit,
        }
    }
}

/// Sentences with interpolated arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    NameRequired,
    MinValue { min: f64 },
    MaxValue { max: f64 },
    NotFinite,
    RecommendSimilar,
    RecommendClearWinner { winner: String },
    RecommendTradeOff { financial: String, overall: String },
    RecommendFinancialOnly { winner: String },
    RecommendOverallOnly { winner: String },
}

impl Message {
    pub fn render(&self, locale: Locale) -> String {
        let template = catalog::template(locale, self);
        match self {
            Self::NameRequired | Self::NotFinite | Self::RecommendSimilar => template.to_string(),
            Self::MinValue { min } => {
                interpolate(template, &[("min", format_number(*min).as_str())])
            }
            Self::MaxValue { max } => {
                interpolate(template, &[("max", format_number(*max).as_str())])
            }
            Self::RecommendClearWinner { winner }
            | Self::RecommendFinancialOnly { winner }
            | Self::RecommendOverallOnly { winner } => {
                interpolate(template, &[("winner", winner.as_str())])
            }
            Self::RecommendTradeOff { financial, overall } => interpolate(
                template,
                &[("financial", financial.as_str()), ("overall", overall.as_str())],
            ),
        }
    }
}

pub fn text(locale: Locale, key: MessageKey) -> &'static str {
    catalog::label(locale, key)
}

fn format_number(value: f64) -> String {
    format!("{value}")
}

/// Single pass over the template so argument values are never re-scanned for
/// placeholders.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        match args.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}
