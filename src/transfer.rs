use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::school::{SchoolInput, SchoolSlot};

pub const EXPORT_VERSION: &str = "1.0";

/// Portable snapshot of both schools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: String,
    pub exported_at: String,
    pub school1: SchoolInput,
    pub school2: SchoolInput,
}

impl ExportDocument {
    pub fn new(school1: SchoolInput, school2: SchoolInput, now: DateTime<Utc>) -> Self {
        Self {
            version: EXPORT_VERSION.to_string(),
            exported_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            school1,
            school2,
        }
    }

    pub fn school(&self, slot: SchoolSlot) -> &SchoolInput {
        match slot {
            SchoolSlot::School1 => &self.school1,
            SchoolSlot::School2 => &self.school2,
        }
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("import file is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("import document must be a JSON object")]
    NotAnObject,
    #[error("import document is missing {0}")]
    MissingSchool(SchoolSlot),
    #[error("{slot} in import document is invalid: {reason}")]
    InvalidSchool { slot: SchoolSlot, reason: String },
}

pub fn parse_import(raw: &str) -> Result<(SchoolInput, SchoolInput), ImportError> {
    let value: Value = serde_json::from_str(raw)?;
    read_import(&value)
}

/// Extracts both schools or rejects the whole document.
pub fn read_import(value: &Value) -> Result<(SchoolInput, SchoolInput), ImportError> {
    let object = value.as_object().ok_or(ImportError::NotAnObject)?;

    if let Some(version) = object.get("version").and_then(Value::as_str) {
        if !version.starts_with("1.") {
            warn!("importing document with unrecognised version {version}");
        }
    }

    let school1 = read_school(object, SchoolSlot::School1)?;
    let school2 = read_school(object, SchoolSlot::School2)?;
    Ok((school1, school2))
}

fn read_school(
    object: &serde_json::Map<String, Value>,
    slot: SchoolSlot,
) -> Result<SchoolInput, ImportError> {
    let raw = object
        .get(slot.as_slug())
        .filter(|v| v.is_object())
        .ok_or(ImportError::MissingSchool(slot))?;
    serde_json::from_value(raw.clone()).map_err(|e| ImportError::InvalidSchool {
        slot,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::school::{SchoolInput, SchoolSlot};
    use crate::transfer::{parse_import, read_import, ExportDocument, ImportError};

    #[test]
    fn export_carries_version_and_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let doc = ExportDocument::new(SchoolInput::named("Pine"), SchoolInput::named("Cedar"), now);
        let value = serde_json::to_value(&doc).expect("serialize export");
        assert_eq!(value["version"], "1.0");
        assert_eq!(value["exportedAt"], "2026-03-14T09:26:53.000Z");
        assert_eq!(value["school1"]["name"], "Pine");
        assert_eq!(value["school2"]["programLength"], 4.0);
    }

    #[test]
    fn export_then_import_restores_both_schools() {
        let mut pine = SchoolInput::named("Pine");
        pine.tuition = 18_500.0;
        let doc = ExportDocument::new(pine.clone(), SchoolInput::named("Cedar"), Utc::now());
        let raw = serde_json::to_string(&doc).expect("serialize export");
        let (school1, school2) = parse_import(&raw).expect("import");
        assert_eq!(school1, pine);
        assert_eq!(school2.name, "Cedar");
    }

    #[test]
    fn rejects_missing_school() {
        let err = read_import(&json!({"version": "1.0", "school1": {"name": "Pine"}}))
            .expect_err("school2 missing");
        assert!(matches!(err, ImportError::MissingSchool(SchoolSlot::School2)));

        let err = read_import(&json!({"school1": null, "school2": {}})).expect_err("null school");
        assert!(matches!(err, ImportError::MissingSchool(SchoolSlot::School1)));
    }

    #[test]
    fn rejects_non_object_documents_and_bad_json() {
        assert!(matches!(
            read_import(&json!([1, 2])),
            Err(ImportError::NotAnObject)
        ));
        assert!(matches!(parse_import("{not json"), Err(ImportError::Syntax(_))));
    }

    #[test]
    fn rejects_wrongly_typed_fields() {
        let err = read_import(&json!({
            "school1": {"name": "Pine", "tuition": "a lot"},
            "school2": {"name": "Cedar"}
        }))
        .expect_err("tuition must be numeric");
        assert!(matches!(
            err,
            ImportError::InvalidSchool {
                slot: SchoolSlot::School1,
                ..
            }
        ));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let (school1, _) = read_import(&json!({
            "school1": {"name": "Pine"},
            "school2": {"name": "Cedar"}
        }))
        .expect("import");
        assert_eq!(school1.program_length, 4.0);
        assert_eq!(school1.reputation, 5.0);
    }
}
