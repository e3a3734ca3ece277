use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::i18n::{Locale, Message};
use crate::metrics::DerivedMetrics;
use crate::school::SchoolSlot;

/// Cost difference worth one ROI percentage point.
pub const COST_PER_ROI_POINT: f64 = 10_000.0;
/// Financial scores closer than this are a tie.
pub const FINANCIAL_TIE_THRESHOLD: f64 = 5.0;
/// Weighted scores closer than this are a tie.
pub const OVERALL_TIE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    School1,
    School2,
    Tie,
}

impl Winner {
    pub fn from_score(score: f64, dead_zone: f64) -> Self {
        if score.abs() < dead_zone {
            Self::Tie
        } else if score > 0.0 {
            Self::School1
        } else {
            Self::School2
        }
    }

    pub fn slot(&self) -> Option<SchoolSlot> {
        match self {
            Self::School1 => Some(SchoolSlot::School1),
            Self::School2 => Some(SchoolSlot::School2),
            Self::Tie => None,
        }
    }

    pub fn swapped(&self) -> Self {
        match self {
            Self::School1 => Self::School2,
            Self::School2 => Self::School1,
            Self::Tie => Self::Tie,
        }
    }
}

impl Display for Winner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::School1 => "school1",
            Self::School2 => "school2",
            Self::Tie => "tie",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub better_financially: Winner,
    pub better_overall: Winner,
    pub message: String,
}

/// Which sentence a pair of verdicts produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Similar,
    ClearWinner(SchoolSlot),
    TradeOff { financial: Winner, overall: Winner },
}

impl Verdict {
    pub fn select(financial: Winner, overall: Winner) -> Self {
        if financial == Winner::Tie && overall == Winner::Tie {
            return Self::Similar;
        }
        if financial == overall {
            if let Some(slot) = financial.slot() {
                return Self::ClearWinner(slot);
            }
        }
        Self::TradeOff { financial, overall }
    }

    pub fn message(&self, labels: &[String; 2]) -> Message {
        let label = |slot: SchoolSlot| match slot {
            SchoolSlot::School1 => labels[0].clone(),
            SchoolSlot::School2 => labels[1].clone(),
        };
        match *self {
            Self::Similar => Message::RecommendSimilar,
            Self::ClearWinner(slot) => Message::RecommendClearWinner {
                winner: label(slot),
            },
            Self::TradeOff { financial, overall } => match (financial.slot(), overall.slot()) {
                (Some(financial), Some(overall)) => Message::RecommendTradeOff {
                    financial: label(financial),
                    overall: label(overall),
                },
                (Some(financial), None) => Message::RecommendFinancialOnly {
                    winner: label(financial),
                },
                (None, Some(overall)) => Message::RecommendOverallOnly {
                    winner: label(overall),
                },
                (None, None) => Message::RecommendSimilar,
            },
        }
    }
}

/// Positive favours school 1. Blends ROI points with the cost gap scaled so
/// every $10,000 of cost advantage counts as one ROI point.
pub fn financial_score(a: &DerivedMetrics, b: &DerivedMetrics) -> f64 {
    (a.estimated_roi - b.estimated_roi)
        + (b.total_program_cost - a.total_program_cost) / COST_PER_ROI_POINT
}

pub fn overall_score(a: &DerivedMetrics, b: &DerivedMetrics) -> f64 {
    a.weighted_score - b.weighted_score
}

pub fn financial_winner(a: &DerivedMetrics, b: &DerivedMetrics) -> Winner {
    Winner::from_score(financial_score(a, b), FINANCIAL_TIE_THRESHOLD)
}

pub fn overall_winner(a: &DerivedMetrics, b: &DerivedMetrics) -> Winner {
    Winner::from_score(overall_score(a, b), OVERALL_TIE_THRESHOLD)
}

/// `labels` are the display labels for school 1 and school 2, in that order.
pub fn recommend(
    a: &DerivedMetrics,
    b: &DerivedMetrics,
    labels: &[String; 2],
    locale: Locale,
) -> Recommendation {
    let better_financially = financial_winner(a, b);
    let better_overall = overall_winner(a, b);
    let message = Verdict::select(better_financially, better_overall)
        .message(labels)
        .render(locale);

    Recommendation {
        better_financially,
        better_overall,
        message,
    }
}
