//! Tests for OutlineRepository against the real filesystem

use std::fs;
use std::sync::Arc;

use rstest::{fixture, rstest};
use tempfile::TempDir;

use tripguide::application::ApplicationError;
use tripguide::domain::{DomainError, OutlineDocument, OutlineNode};
use tripguide::infrastructure::traits::RealFileSystem;
use tripguide::infrastructure::{InfraError, OutlineRepository};
use tripguide::util::testing;

#[fixture]
fn repo() -> OutlineRepository {
    testing::init_test_setup();
    OutlineRepository::new(Arc::new(RealFileSystem))
}

fn sample() -> OutlineDocument {
    OutlineDocument {
        location: "Tbilisi".into(),
        outline: vec![
            OutlineNode::new("1", "Old Town", 1)
                .with_children(vec![OutlineNode::new("1-1", "Baths", 2)]),
            OutlineNode::new("2", "Wine", 1),
        ],
    }
}

#[rstest]
fn given_document_when_saving_and_loading_then_identical(repo: OutlineRepository) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/dir/outline.json");

    repo.save(&path, &sample()).unwrap();
    let loaded = repo.load(&path).unwrap();

    assert_eq!(loaded, sample());
    assert!(fs::read_to_string(&path).unwrap().ends_with("}\n"));
}

#[rstest]
fn given_existing_file_when_saving_then_replaced(repo: OutlineRepository) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("outline.json");
    repo.save(&path, &sample()).unwrap();

    let mut doc = sample();
    doc.outline.truncate(1);
    repo.save(&path, &doc).unwrap();

    assert_eq!(repo.load(&path).unwrap().outline.len(), 1);
    // no temp files left behind
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[rstest]
fn given_provider_json_without_children_when_loading_then_leaves(repo: OutlineRepository) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("outline.json");
    fs::write(
        &path,
        r#"{"location":"Tbilisi","outline":[{"id":"1","title":"Old Town","level":1}]}"#,
    )
    .unwrap();

    let doc = repo.load(&path).unwrap();
    assert!(doc.outline[0].children.is_empty());
}

#[rstest]
fn given_missing_file_when_loading_then_io_not_found(repo: OutlineRepository) {
    let dir = TempDir::new().unwrap();
    let err = repo.load(&dir.path().join("absent.json")).unwrap_err();
    match err {
        InfraError::Io { source, .. } => assert_eq!(source.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[rstest]
fn given_malformed_json_when_loading_then_json_error(repo: OutlineRepository) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("outline.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(repo.load(&path), Err(InfraError::Json { .. })));
}

#[rstest]
fn given_duplicate_ids_on_disk_when_loading_then_rejected(repo: OutlineRepository) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("outline.json");
    fs::write(
        &path,
        r#"{"location":"X","outline":[
            {"id":"1","title":"A","level":1,"children":[{"id":"1","title":"B","level":2}]}
        ]}"#,
    )
    .unwrap();

    let err = repo.load(&path).unwrap_err();
    assert!(matches!(
        err,
        InfraError::Application(ApplicationError::Domain(DomainError::DuplicateId(id))) if id == "1"
    ));
}
