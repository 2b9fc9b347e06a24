use menagerie::api::{ExportSelection, FilterSpec, Selection, SortKey, SortSpec};
use menagerie::config::{ZooConfig, ZooPaths};
use menagerie::model::{AnimalDraft, AnimalPatch, Habitat, HealthStatus};
use menagerie::{ZooApi, ZooError};
use std::fs;
use tempfile::TempDir;

fn lion() -> AnimalDraft {
    AnimalDraft::new(1, "Lion", "Savannah", "2023-06-01")
}

#[test]
fn test_fresh_data_dir_starts_empty() {
    let dir = TempDir::new().unwrap();
    let api = ZooApi::open(&ZooPaths::from_data_dir(dir.path())).unwrap();
    assert!(api.list().is_empty());
    assert!(!dir.path().join("animals.json").exists());
}

#[test]
fn test_add_then_update_health() {
    let dir = TempDir::new().unwrap();
    let paths = ZooPaths::from_data_dir(dir.path());
    let mut api = ZooApi::open(&paths).unwrap();

    let added = api.add(lion()).unwrap().affected_animals.remove(0);
    api.update(1, &AnimalPatch::new().health_status("Fair"))
        .unwrap();

    let listed = api.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].health_status, HealthStatus::Fair);
    assert_eq!(listed[0].species, added.species);
    assert_eq!(listed[0].habitat, added.habitat);
    assert_eq!(listed[0].arrival_date, added.arrival_date);
    assert_eq!(listed[0].is_fed, added.is_fed);

    // A second session sees the same data.
    let reopened = ZooApi::open(&paths).unwrap();
    assert_eq!(reopened.list(), listed);
}

#[test]
fn test_malformed_document_fails_to_open() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("animals.json"), "[{\"id\": 1,").unwrap();

    match ZooApi::open(&ZooPaths::from_data_dir(dir.path())) {
        Err(ZooError::Persistence { path, .. }) => {
            assert_eq!(path, dir.path().join("animals.json"))
        }
        Err(other) => panic!("Expected persistence error, got {:?}", other),
        Ok(_) => panic!("Expected persistence error, got a loaded collection"),
    }
}

#[test]
fn test_duplicate_add_keeps_document_unchanged() {
    let dir = TempDir::new().unwrap();
    let paths = ZooPaths::from_data_dir(dir.path());
    let mut api = ZooApi::open(&paths).unwrap();
    api.add(lion()).unwrap();
    api.add(AnimalDraft::new(2, "Zebra", "Grassland", "2022-11-11"))
        .unwrap();
    let before = fs::read_to_string(dir.path().join("animals.json")).unwrap();

    let result = api.add(AnimalDraft::new(2, "Okapi", "Rainforest", "2021-01-01"));
    assert!(matches!(result, Err(ZooError::DuplicateId(2))));

    let after = fs::read_to_string(dir.path().join("animals.json")).unwrap();
    assert_eq!(before, after);
    let ids: Vec<_> = api.list().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_configured_data_file_and_compact_output() {
    let dir = TempDir::new().unwrap();
    ZooConfig {
        data_file: "inventory.json".into(),
        export_dir: None,
        pretty: false,
    }
    .save(dir.path())
    .unwrap();

    let mut api = ZooApi::open(&ZooPaths::from_data_dir(dir.path())).unwrap();
    api.add(lion()).unwrap();

    let raw = fs::read_to_string(dir.path().join("inventory.json")).unwrap();
    assert!(!raw.contains('\n'));
    assert!(raw.contains("\"species\":\"Lion\""));
}

#[test]
fn test_search_sort_and_export_view() {
    let dir = TempDir::new().unwrap();
    let mut api = ZooApi::open(&ZooPaths::from_data_dir(dir.path())).unwrap();
    api.add(AnimalDraft::new(3, "Lion", "Savannah", "2020-05-01"))
        .unwrap();
    api.add(AnimalDraft::new(1, "Elephant", "Savannah", "1999-12-31"))
        .unwrap();
    api.add(AnimalDraft::new(2, "Walrus", "Arctic", "2020-01-01").with_fed(false))
        .unwrap();

    let view = api.query(
        &FilterSpec::Habitat(Selection::All),
        Some(SortSpec::ascending(SortKey::ArrivalDate)),
    );
    let ids: Vec<_> = view.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let view = api.query(
        &"Savannah"
            .parse::<Selection<Habitat>>()
            .map(FilterSpec::Habitat)
            .unwrap(),
        Some(SortSpec::descending(SortKey::Species)),
    );
    let ids: Vec<_> = view.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 1]);

    let dest = dir.path().join("exports").join("savannah.json");
    let result = api.export(ExportSelection::LastQuery, &dest).unwrap();
    assert_eq!(result.export.unwrap().count, 2);

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&dest).unwrap()).unwrap();
    let species: Vec<_> = exported
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["species"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(species, vec!["Lion", "Elephant"]);

    // The main document is untouched by exports.
    let main: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("animals.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(main.as_array().unwrap().len(), 3);
}

#[test]
fn test_delete_then_id_search() {
    let dir = TempDir::new().unwrap();
    let mut api = ZooApi::open(&ZooPaths::from_data_dir(dir.path())).unwrap();
    api.add(lion()).unwrap();
    api.add(AnimalDraft::new(2, "Zebra", "Grassland", "2022-11-11"))
        .unwrap();

    assert_eq!(api.query(&FilterSpec::id("2"), None).len(), 1);
    api.remove(2).unwrap();
    assert!(api.last_query().unwrap().is_empty());
    assert_eq!(api.query(&FilterSpec::id(""), None).len(), 1);
    assert!(matches!(api.remove(2), Err(ZooError::NotFound(2))));
}
