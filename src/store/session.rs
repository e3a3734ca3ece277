use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::comparison::{compare, ComparisonResult};
use crate::i18n::Locale;
use crate::school::{apply_overrides, SchoolField, SchoolInput, SchoolOverrides, SchoolSlot};
use crate::store::KeyValueStore;
use crate::transfer::{read_import, ExportDocument, ImportError};

/// Owns the two school records and keeps them in step with the store.
pub struct SchoolSession<S: KeyValueStore> {
    store: S,
    school1: SchoolInput,
    school2: SchoolInput,
}

impl<S: KeyValueStore> SchoolSession<S> {
    /// Missing entries start blank; unreadable ones are logged and replaced
    /// with a blank form.
    pub fn open(store: S) -> Self {
        let school1 = load_school(&store, SchoolSlot::School1);
        let school2 = load_school(&store, SchoolSlot::School2);
        Self {
            store,
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

    pub fn schools(&self) -> (&SchoolInput, &SchoolInput) {
        (&self.school1, &self.school2)
    }

    pub fn replace(&mut self, slot: SchoolSlot, input: SchoolInput) -> Result<()> {
        persist(&mut self.store, slot, &input)?;
        *self.slot_mut(slot) = input;
        Ok(())
    }

    /// Read the current record, apply the given fields, write it back.
    pub fn apply(
        &mut self,
        slot: SchoolSlot,
        overrides: &SchoolOverrides,
    ) -> Result<&SchoolInput> {
        let mut updated = self.school(slot).clone();
        apply_overrides(&mut updated, overrides);
        self.replace(slot, updated)?;
        Ok(self.school(slot))
    }

    /// Records are only blanked once both keys are gone from the store.
    pub fn reset(&mut self) -> Result<()> {
        for slot in SchoolSlot::ALL {
            self.store
                .clear(slot.storage_key())
                .with_context(|| format!("failed clearing {slot}"))?;
        }
        self.school1 = SchoolInput::default();
        self.school2 = SchoolInput::default();
        info!("reset both schools");
        Ok(())
    }

    pub fn compare(&self, locale: Locale) -> Option<ComparisonResult> {
        compare(&self.school1, &self.school2, locale)
    }

    pub fn export(&self, now: DateTime<Utc>) -> ExportDocument {
        ExportDocument::new(self.school1.clone(), self.school2.clone(), now)
    }

    /// Applies both schools or neither. A rejected document leaves the
    /// session and the store untouched.
    pub fn import(&mut self, document: &Value) -> Result<(), SessionImportError> {
        let (school1, school2) = read_import(document)?;

        let previous1 = self.school1.clone();
        persist(&mut self.store, SchoolSlot::School1, &school1)?;
        if let Err(err) = persist(&mut self.store, SchoolSlot::School2, &school2) {
            if let Err(rollback) = persist(&mut self.store, SchoolSlot::School1, &previous1) {
                warn!("failed restoring school1 after import error: {rollback:#}");
            }
            return Err(err.into());
        }

        self.school1 = school1;
        self.school2 = school2;
        info!("imported both schools");
        Ok(())
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn slot_mut(&mut self, slot: SchoolSlot) -> &mut SchoolInput {
        match slot {
            SchoolSlot::School1 => &mut self.school1,
            SchoolSlot::School2 => &mut self.school2,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionImportError {
    #[error(transparent)]
    Rejected(#[from] ImportError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

fn load_school<S: KeyValueStore>(store: &S, slot: SchoolSlot) -> SchoolInput {
    let key = slot.storage_key();
    let value = match store.load(key) {
        Ok(Some(value)) => value,
        Ok(None) => return SchoolInput::default(),
        Err(err) => {
            warn!("failed reading {key}: {err:#}");
            return SchoolInput::default();
        }
    };
    match serde_json::from_value(value) {
        Ok(school) => school,
        Err(err) => {
            warn!("ignoring unreadable entry {key}: {err}");
            SchoolInput::default()
        }
    }
}

/// JSON has no NaN or infinity; such a field would be written as `null` and
/// the record could not be read back.
fn persist<S: KeyValueStore>(store: &mut S, slot: SchoolSlot, input: &SchoolInput) -> Result<()> {
    let non_finite = SchoolField::NUMERIC
        .into_iter()
        .find(|field| input.numeric(*field).is_some_and(|v| !v.is_finite()));
    if let Some(field) = non_finite {
        bail!("{slot} {field} must be a finite number");
    }
    let value = serde_json::to_value(input)?;
    store
        .save(slot.storage_key(), &value)
        .with_context(|| format!("failed saving {slot}"))
}
