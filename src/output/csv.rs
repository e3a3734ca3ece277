use anyhow::Result;

use crate::comparison::{ComparisonResult, DerivedMetric};
use crate::i18n::Locale;
use crate::school::SlotFieldError;

pub fn comparison_to_csv(result: &ComparisonResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["metric", "school1", "school2", "leader"])?;
    for metric in DerivedMetric::ALL {
        writer.write_record([
            metric.as_key().to_string(),
            format!("{:.2}", metric.value(&result.school1.metrics)),
            format!("{:.2}", metric.value(&result.school2.metrics)),
            result.leader(metric).to_string(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn validation_to_csv(errors: &[SlotFieldError], locale: Locale) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["slot", "field", "message"])?;
    for item in errors {
        writer.write_record([
            item.slot.as_slug().to_string(),
            item.error.field.as_key().to_string(),
            item.error.render(locale),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}
