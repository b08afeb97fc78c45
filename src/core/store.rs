use super::demo;
use super::records::CatalogRecord;
use crate::config::Config;
use crate::utils::{PantryError, Result};
use chrono::{DateTime, Duration, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Local catalog persisted as one JSON array file per collection.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    data_dir: PathBuf,
}

impl CatalogStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_dir())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn collection_path<T: CatalogRecord>(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", T::COLLECTION))
    }

    pub fn load<T: CatalogRecord>(&self) -> Result<Vec<T>> {
        let path = self.collection_path::<T>();
        if !path.exists() {
            log::debug!("[{}] no collection file at {}", T::COLLECTION, path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            log::error!("[{}] read failed: {}", T::COLLECTION, e);
            PantryError::store_error(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let mut records: Vec<T> = serde_json::from_str(&content).map_err(|e| {
            log::error!("[{}] parse failed: {}", T::COLLECTION, e);
            PantryError::store_error(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        if T::newest_first() {
            records.sort_by(|a, b| created_instant(b).cmp(&created_instant(a)));
        }

        log::info!("[{}] loaded {} records", T::COLLECTION, records.len());
        Ok(records)
    }

    pub fn insert<T: CatalogRecord>(&self, mut record: T) -> Result<T> {
        record.validate()?;
        record.assign_id(uuid::Uuid::new_v4().to_string());
        record.stamp_created(Utc::now());

        let mut records = self.load::<T>()?;
        records.push(record.clone());
        self.save_all(&records)?;

        log::info!(
            "[{}] inserted {}",
            T::COLLECTION,
            record.id().unwrap_or_default()
        );
        Ok(record)
    }

    pub fn update<T: CatalogRecord>(&self, mut record: T) -> Result<T> {
        record.validate()?;
        let id = record
            .id()
            .map(str::to_string)
            .ok_or_else(|| PantryError::invalid_record("cannot update a record without an id"))?;

        let mut records = self.load::<T>()?;
        let position = records
            .iter()
            .position(|existing| existing.id() == Some(id.as_str()))
            .ok_or_else(|| {
                log::error!("[{}] update of unknown record {}", T::COLLECTION, id);
                PantryError::record_not_found(T::COLLECTION, &id)
            })?;

        if let Some(created_at) = records[position].created_at() {
            if record.created_at().is_none() {
                if let Ok(at) = DateTime::parse_from_rfc3339(created_at) {
                    record.stamp_created(at.with_timezone(&Utc));
                }
            }
        }
        record.stamp_updated(Utc::now());
        records[position] = record.clone();
        self.save_all(&records)?;

        log::info!("[{}] updated {}", T::COLLECTION, id);
        Ok(record)
    }

    /// Remove every record whose id is listed. Returns how many were removed.
    pub fn delete<T: CatalogRecord>(&self, ids: &[String]) -> Result<usize> {
        let mut records = self.load::<T>()?;
        let before = records.len();
        records.retain(|record| match record.id() {
            Some(id) => !ids.iter().any(|doomed| doomed == id),
            None => true,
        });
        let removed = before - records.len();

        if removed > 0 {
            self.save_all(&records)?;
        }

        log::info!("[{}] deleted {} of {} requested", T::COLLECTION, removed, ids.len());
        Ok(removed)
    }

    /// Write the demo catalog. Existing non-empty collections are kept unless
    /// `force` is set. Returns the number of records written.
    pub fn seed_demo(&self, force: bool) -> Result<usize> {
        let mut written = 0;
        written += self.seed_collection(demo::products(), force)?;
        written += self.seed_collection(demo::phones(), force)?;
        written += self.seed_collection(demo::locations(), force)?;
        written += self.seed_collection(demo::orders(), force)?;
        written += self.seed_collection(demo::transactions(), force)?;
        Ok(written)
    }

    fn seed_collection<T: CatalogRecord>(&self, records: Vec<T>, force: bool) -> Result<usize> {
        if !force && !self.load::<T>()?.is_empty() {
            log::info!("[{}] already populated, skipping seed", T::COLLECTION);
            return Ok(0);
        }

        let now = Utc::now();
        let seeded: Vec<T> = records
            .into_iter()
            .enumerate()
            .map(|(index, mut record)| {
                record.assign_id(uuid::Uuid::new_v4().to_string());
                record.stamp_created(now - Duration::hours(index as i64 * 6));
                record
            })
            .collect();

        self.save_all(&seeded)?;
        log::info!("[{}] seeded {} records", T::COLLECTION, seeded.len());
        Ok(seeded.len())
    }

    fn save_all<T: CatalogRecord>(&self, records: &[T]) -> Result<()> {
        fs::create_dir_all(&self.data_dir).map_err(|e| {
            PantryError::store_error(format!(
                "Failed to create data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;

        let path = self.collection_path::<T>();
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&path, json).map_err(|e| {
            log::error!("[{}] write failed: {}", T::COLLECTION, e);
            PantryError::store_error(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

fn created_instant<T: CatalogRecord>(record: &T) -> Option<DateTime<Utc>> {
    record
        .created_at()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|at| at.with_timezone(&Utc))
}
