//! # Catalog Store
//!
//! The fixed, ordered list of videos the app browses. Built once at startup
//! (either the built-in sample set or a JSON file) and never mutated after.
//!
//! ```text
//! Catalog
//! └── records: Arc<[VideoRecord]>   // shared, immutable, catalog order
//! ```
//!
//! Everything downstream (filter results, card selection) refers to records
//! by their position in this list, so the order here is the display order.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// One catalog entry. All display fields are pre-formatted strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    /// `H:MM:SS` or `MM:SS`, shown as-is.
    pub duration: String,
    /// Already formatted, e.g. "1.2M".
    pub view_count: String,
    /// Relative time label, e.g. "2 дня назад".
    pub uploaded_label: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    DuplicateId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate video id in catalog: {id}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Immutable, cheaply cloneable list of videos.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Arc<[VideoRecord]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(records: Vec<VideoRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self {
            records: records.into(),
        })
    }

    /// Load a catalog from a JSON array of records.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_json(&contents)?;
        info!(
            "Loaded {} videos from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<VideoRecord> = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        debug!("Parsed {} catalog records", records.len());
        Self::new(records)
    }

    /// The built-in demo catalog.
    pub fn sample() -> Self {
        Self {
            records: sample_records().into(),
        }
    }

    pub fn records(&self) -> &[VideoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VideoRecord> {
        self.records.get(index)
    }
}

/// id, title, description, thumbnail, duration, views, uploaded, tags
type SampleRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
);

const SAMPLE: [SampleRow; 6] = [
    (
        "1",
        "Космические пейзажи в 4K",
        "Путешествие по галактикам и звездным системам",
        "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?w=800&h=450&fit=crop",
        "12:34",
        "1.2M",
        "2 дня назад",
        &["космос", "природа", "4k"],
    ),
    (
        "2",
        "Современный веб-дизайн 2024",
        "Тренды и лучшие практики UI/UX дизайна",
        "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=800&h=450&fit=crop",
        "25:10",
        "850K",
        "1 неделю назад",
        &["дизайн", "web", "обучение"],
    ),
    (
        "3",
        "Расслабляющая природа",
        "Звуки леса и шум воды для медитации",
        "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800&h=450&fit=crop",
        "45:00",
        "2.5M",
        "3 недели назад",
        &["природа", "релакс", "медитация"],
    ),
    (
        "4",
        "Основы TypeScript",
        "Полное руководство для начинающих разработчиков",
        "https://images.unsplash.com/photo-1516116216624-53e697fedbea?w=800&h=450&fit=crop",
        "1:15:30",
        "500K",
        "1 месяц назад",
        &["программирование", "typescript", "обучение"],
    ),
    (
        "5",
        "Городские огни в таймлапсе",
        "Ночной город в движении",
        "https://images.unsplash.com/photo-1514565131-fce0801e5785?w=800&h=450&fit=crop",
        "8:20",
        "3.1M",
        "5 дней назад",
        &["город", "таймлапс", "ночь"],
    ),
    (
        "6",
        "React Hooks глубокое погружение",
        "Все о хуках React: useState, useEffect и другие",
        "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=450&fit=crop",
        "42:15",
        "675K",
        "2 недели назад",
        &["react", "программирование", "hooks"],
    ),
];

fn sample_records() -> Vec<VideoRecord> {
    SAMPLE
        .iter()
        .map(
            |&(id, title, description, thumbnail_url, duration, view_count, uploaded_label, tags)| {
                VideoRecord {
                    id: id.to_string(),
                    title: title.to_string(),
                    description: description.to_string(),
                    thumbnail_url: thumbnail_url.to_string(),
                    duration: duration.to_string(),
                    view_count: view_count.to_string(),
                    uploaded_label: uploaded_label.to_string(),
                    tags: tags.iter().map(|t| t.to_string()).collect(),
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_has_six_unique_records() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 6);
        let ids: Vec<&str> = catalog.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        // Rebuilding through the checked constructor must succeed
        assert!(Catalog::new(catalog.records().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut records = Catalog::sample().records().to_vec();
        records[5].id = "2".to_string();
        match Catalog::new(records) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "2"),
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_uses_camel_case_fields() {
        let json = r#"[
            {
                "id": "a",
                "title": "Title",
                "description": "Desc",
                "thumbnailUrl": "https://example.com/a.jpg",
                "duration": "1:00",
                "viewCount": "10",
                "uploadedLabel": "сегодня",
                "tags": ["x", "y"]
            },
            {
                "id": "b",
                "title": "No tags",
                "description": "",
                "thumbnailUrl": "",
                "duration": "0:30",
                "viewCount": "1",
                "uploadedLabel": "вчера"
            }
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].thumbnail_url, "https://example.com/a.jpg");
        assert_eq!(catalog.records()[0].tags, vec!["x", "y"]);
        assert!(catalog.records()[1].tags.is_empty());
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(Catalog::load(&path), Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_load_round_trips_sample() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string(Catalog::sample().records()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(loaded.records(), Catalog::sample().records());
    }

    #[test]
    fn test_sample_record_fields() {
        let catalog = Catalog::sample();
        let typescript = &catalog.records()[3];
        assert_eq!(typescript.title, "Основы TypeScript");
        assert_eq!(typescript.duration, "1:15:30");
        assert_eq!(typescript.tags, vec!["программирование", "typescript", "обучение"]);
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.get(0).unwrap().id, "1");
        assert!(catalog.get(6).is_none());
    }
}
