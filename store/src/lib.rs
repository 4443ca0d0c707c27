//! Flat-file persistence for the patient collection.
//!
//! The whole collection lives in a single JSON array on disk. Every operation
//! reloads the file and every mutation rewrites it in full, so the file is the
//! single source of truth and there is no in-memory state to go stale between
//! requests. The cost is an O(collection) read and write per request, which is
//! fine for the dataset sizes this service is built for.

use std::path::PathBuf;

use tokio::sync::Mutex;
use tracing::instrument;

use crate::models::{Patient, PatientUpdate, SortField, SortOrder};

mod error;
mod macros;
pub mod models;

pub use error::{StorageError, StoreError};

/// Handle to the JSON dataset file holding every patient record.
pub struct PatientStore {
    path: PathBuf,

    /// Serializes load-mutate-save cycles. Concurrent mutations would each
    /// read the file independently and the last save would silently drop the
    /// other's write.
    write_lock: Mutex<()>,
}

impl PatientStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Reads the entire collection from disk.
    ///
    /// A missing or unparseable dataset file is a [`StorageError`]; there is
    /// no recovery path for either.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<Vec<Patient>, StorageError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(StorageError::Read)?;
        serde_json::from_slice(&bytes).map_err(StorageError::Parse)
    }

    /// Writes the full collection back, replacing the previous contents.
    ///
    /// The bytes go to a sibling temp file first and are moved into place, so
    /// a crash mid-write cannot leave a truncated dataset behind.
    #[instrument(skip_all, fields(count = records.len()))]
    pub async fn save(&self, records: &[Patient]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(records).map_err(StorageError::Encode)?;

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(StorageError::Write)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(StorageError::Write)
    }

    /// Finds the record with the given identifier.
    #[instrument(skip(self))]
    pub async fn get(&self, id: u32) -> Result<Patient, StoreError> {
        let records = self.load().await?;
        records
            .into_iter()
            .find(|patient| patient.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Returns the collection ordered by `field`.
    ///
    /// The sort is stable, so records comparing equal keep their relative
    /// order from the file. Descending order reverses the comparator rather
    /// than the sequence, which preserves that tie behavior.
    #[instrument(skip(self), fields(field = %field, order = %order))]
    pub async fn sorted(
        &self,
        field: SortField,
        order: SortOrder,
    ) -> Result<Vec<Patient>, StoreError> {
        let mut records = self.load().await?;

        match (field, order) {
            (SortField::Age, SortOrder::Asc) => records.sort_by(|a, b| a.age.cmp(&b.age)),
            (SortField::Age, SortOrder::Desc) => records.sort_by(|a, b| b.age.cmp(&a.age)),
            (SortField::Name, SortOrder::Asc) => records.sort_by(|a, b| a.name.cmp(&b.name)),
            (SortField::Name, SortOrder::Desc) => records.sort_by(|a, b| b.name.cmp(&a.name)),
        }

        Ok(records)
    }

    /// Validates and appends a new record, then persists the collection.
    #[instrument(skip(self, patient), fields(id = patient.id))]
    pub async fn create(&self, patient: Patient) -> Result<(), StoreError> {
        patient.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;

        if records.iter().any(|existing| existing.id == patient.id) {
            return Err(StoreError::AlreadyExists(patient.id));
        }

        records.push(patient);
        self.save(&records).await?;
        Ok(())
    }

    /// Overlays `patch` onto the stored record and persists the result.
    ///
    /// The merged record is re-validated against the full schema before
    /// anything is written; a constraint violation leaves storage untouched.
    /// The record keeps its position in the collection.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: u32, patch: PatientUpdate) -> Result<Patient, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;

        let slot = records
            .iter_mut()
            .find(|patient| patient.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut merged = slot.clone();
        patch.apply_to(&mut merged);
        merged.validate()?;

        *slot = merged.clone();
        self.save(&records).await?;
        Ok(merged)
    }

    /// Removes the record with the given identifier and persists the rest,
    /// preserving their relative order.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: u32) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load().await?;

        let before = records.len();
        records.retain(|patient| patient.id != id);
        if records.len() == before {
            return Err(StoreError::NotFound(id));
        }

        self.save(&records).await?;
        Ok(())
    }
}
