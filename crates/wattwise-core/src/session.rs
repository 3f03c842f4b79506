//! Session state: the user's profile and daily record store
//!
//! Everything here lives for the lifetime of one user session and is never
//! written to disk. Callers own a [`Session`] and pass it explicitly to the
//! code that needs it.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use chrono::{NaiveDate, Utc};
use tracing::info;

use crate::calculator::{self, EnergyEstimate};
use crate::error::{Error, Result};
use crate::models::{DailyEntry, DailyRecord, NewProfile, Profile};

/// In-memory daily records keyed by date
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: HashMap<NaiveDate, DailyRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the record for `date`, returning the stored record
    pub fn upsert(
        &mut self,
        date: NaiveDate,
        base_energy: f64,
        appliance_energy: f64,
        total_energy: f64,
        appliances: BTreeSet<String>,
        notes: Option<String>,
    ) -> &DailyRecord {
        let record = DailyRecord {
            date,
            base_energy,
            appliance_energy,
            total_energy,
            appliances,
            notes: notes.filter(|n| !n.trim().is_empty()),
            created_at: Utc::now(),
        };
        match self.records.entry(date) {
            Entry::Occupied(mut slot) => {
                slot.insert(record);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(record),
        }
    }

    /// All records, sorted by date ascending
    pub fn all(&self) -> Vec<DailyRecord> {
        let mut records: Vec<DailyRecord> = self.records.values().cloned().collect();
        records.sort_by_key(|r| r.date);
        records
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.records.get(&date)
    }

    /// Remove every record. Without `confirmed` this is a no-op error.
    pub fn clear(&mut self, confirmed: bool) -> Result<usize> {
        if !confirmed {
            return Err(Error::ConfirmationRequired(
                "clearing history deletes every saved day".to_string(),
            ));
        }
        let removed = self.records.len();
        self.records.clear();
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One user's session: profile plus recorded days
#[derive(Debug, Clone, Default)]
pub struct Session {
    profile: Option<Profile>,
    records: RecordStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the profile wholesale
    pub fn save_profile(&mut self, input: NewProfile) -> &Profile {
        let profile = input.into_profile();
        info!(dwelling_size = %profile.dwelling_size, "Profile saved");
        self.profile.insert(profile)
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// The saved profile, or `ProfileIncomplete` when none has been saved
    pub fn require_profile(&self) -> Result<&Profile> {
        self.profile.as_ref().ok_or(Error::ProfileIncomplete)
    }

    /// Compute the energy breakdown for an entry without saving it
    pub fn estimate(&self, entry: &DailyEntry) -> Result<EnergyEstimate> {
        let profile = self.require_profile()?;
        Ok(calculator::estimate(
            profile.dwelling_size,
            &entry.appliances,
            &entry.usage_hours,
        ))
    }

    /// Compute an entry against the profile and upsert it by date
    ///
    /// Entries without a date are recorded for today.
    pub fn record_entry(&mut self, entry: DailyEntry) -> Result<DailyRecord> {
        let estimate = self.estimate(&entry)?;
        let date = entry.date.unwrap_or_else(|| Utc::now().date_naive());

        let replaced = self.records.get(date).is_some();

        let record = self.records.upsert(
            date,
            estimate.base_energy,
            estimate.appliance_energy,
            estimate.total_energy,
            estimate.appliances,
            entry.notes,
        );
        info!(
            %date,
            total_energy = record.total_energy,
            replaced,
            "Daily consumption saved"
        );

        Ok(record.clone())
    }

    /// Sorted view of all records
    pub fn records(&self) -> Vec<DailyRecord> {
        self.records.all()
    }

    pub fn record(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.records.get(date)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn clear_records(&mut self, confirmed: bool) -> Result<usize> {
        let removed = self.records.clear(confirmed)?;
        info!(removed, "All energy records cleared");
        Ok(removed)
    }
}
