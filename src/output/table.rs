use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::comparison::{display_label, ComparisonResult, DerivedMetric};
use crate::i18n::{text, Locale, MessageKey};
use crate::recommendation::Winner;
use crate::school::{SchoolField, SchoolInput, SchoolSlot, SlotFieldError};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn render_comparison_table(result: &ComparisonResult, locale: Locale) -> String {
    let labels = [
        display_label(&result.school1.input, SchoolSlot::School1, locale),
        display_label(&result.school2.input, SchoolSlot::School2, locale),
    ];

    let mut table = new_table();
    table.set_header(vec![
        text(locale, MessageKey::Metric).to_string(),
        labels[0].clone(),
        labels[1].clone(),
    ]);

    for metric in DerivedMetric::ALL {
        let leader = result.leader(metric);
        let mut row = vec![Cell::new(text(locale, metric.label_key()))];
        for slot in SchoolSlot::ALL {
            let value = format_metric(metric, metric.value(&result.report(slot).metrics));
            let cell = if leader.slot() == Some(slot) {
                Cell::new(value).fg(Color::Green)
            } else {
                Cell::new(value)
            };
            row.push(cell);
        }
        table.add_row(Row::from(row));
    }

    let rec = &result.recommendation;
    let mut out = table.to_string();
    out.push_str(&format!(
        "\n{}: {}\n{}: {}\n{}: {}",
        text(locale, MessageKey::BetterFinancially),
        winner_label(rec.better_financially, &labels, locale),
        text(locale, MessageKey::BetterOverall),
        winner_label(rec.better_overall, &labels, locale),
        text(locale, MessageKey::Recommendation),
        rec.message,
    ));
    out
}

pub fn render_schools_table(
    school1: &SchoolInput,
    school2: &SchoolInput,
    locale: Locale,
) -> String {
    let mut table = new_table();
    table.set_header(vec![
        text(locale, MessageKey::Field),
        text(locale, MessageKey::School1),
        text(locale, MessageKey::School2),
    ]);

    table.add_row(vec![
        text(locale, MessageKey::SchoolName).to_string(),
        school1.name.clone(),
        school2.name.clone(),
    ]);
    for field in SchoolField::NUMERIC {
        table.add_row(vec![
            text(locale, MessageKey::for_field(field)).to_string(),
            format_input(school1.numeric(field)),
            format_input(school2.numeric(field)),
        ]);
    }
    table.to_string()
}

pub fn render_validation_table(errors: &[SlotFieldError], locale: Locale) -> String {
    let mut table = new_table();
    table.set_header(vec![
        "",
        text(locale, MessageKey::Field),
        text(locale, MessageKey::Problem),
    ]);
    for item in errors {
        table.add_row(Row::from(vec![
            Cell::new(text(locale, MessageKey::for_slot(item.slot))),
            Cell::new(text(locale, MessageKey::for_field(item.error.field))),
            Cell::new(item.error.render(locale)).fg(Color::Red),
        ]));
    }
    table.to_string()
}

fn winner_label(winner: Winner, labels: &[String; 2], locale: Locale) -> String {
    match winner.slot() {
        Some(SchoolSlot::School1) => labels[0].clone(),
        Some(SchoolSlot::School2) => labels[1].clone(),
        None => text(locale, MessageKey::Tie).to_string(),
    }
}

fn format_metric(metric: DerivedMetric, value: f64) -> String {
    match metric {
        DerivedMetric::NetAnnualCost | DerivedMetric::TotalProgramCost => format_money(value),
        DerivedMetric::EstimatedRoi => format!("{value:.1}%"),
        DerivedMetric::WeightedScore => format!("{value:.2}"),
    }
}

fn format_input(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Whole dollars with thousands separators, e.g. `$140,000`.
fn format_money(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}")
}
