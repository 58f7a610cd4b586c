//! Store Directory
//!
//! Maps store ids to display info and printer addresses. Loaded once at
//! startup from a JSON file (see `stores.example.json`); stores change
//! rarely enough that a redeploy per change is fine, so there is no write
//! path.

use std::collections::BTreeMap;
use std::path::Path;

use shared::models::Store;

use crate::utils::AppError;

pub struct StoreDirectory {
    stores: BTreeMap<i64, Store>,
}

impl StoreDirectory {
    /// Load the directory from a JSON array of store records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::internal(format!(
                "Cannot read store directory {}: {e}",
                path.display()
            ))
        })?;
        let stores: Vec<Store> = serde_json::from_str(&raw).map_err(|e| {
            AppError::internal(format!(
                "Invalid store directory {}: {e}",
                path.display()
            ))
        })?;

        tracing::info!("Loaded {} stores from {}", stores.len(), path.display());

        Ok(Self::from_stores(stores))
    }

    /// Build a directory from in-memory records (tests use this).
    pub fn from_stores(stores: Vec<Store>) -> Self {
        let stores = stores.into_iter().map(|s| (s.id, s)).collect();
        Self { stores }
    }

    pub fn get(&self, id: i64) -> Option<&Store> {
        self.stores.get(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.stores.contains_key(&id)
    }

    /// All stores, ordered by id.
    pub fn all(&self) -> Vec<Store> {
        self.stores.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stores() -> Vec<Store> {
        serde_json::from_str(
            r#"[
                {"id": 201, "name": "Depot Drug", "city": "Olathe", "phone": "913-555-0198"},
                {"id": 157, "name": "Main Street Pharmacy", "city": "Overland Park",
                 "phone": "913-555-0142", "printer_host": "192.168.10.57"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_and_membership() {
        let directory = StoreDirectory::from_stores(sample_stores());

        assert!(directory.contains(157));
        assert!(!directory.contains(999));
        assert_eq!(directory.get(157).unwrap().city, "Overland Park");
        assert!(directory.get(999).is_none());
    }

    #[test]
    fn test_all_is_ordered_by_id() {
        let directory = StoreDirectory::from_stores(sample_stores());

        let ids: Vec<i64> = directory.all().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![157, 201]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stores.json");
        std::fs::write(
            &path,
            r#"[{"id": 316, "name": "Riverside Apothecary", "city": "Kansas City",
                "phone": "816-555-0175"}]"#,
        )
        .unwrap();

        let directory = StoreDirectory::load(&path).unwrap();
        assert!(directory.contains(316));
        assert_eq!(directory.get(316).unwrap().printer_port, 9100);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(StoreDirectory::load("/nonexistent/stores.json").is_err());
    }
}
