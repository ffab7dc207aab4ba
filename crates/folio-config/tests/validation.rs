//! Tests for filesystem validation of project inputs.

use std::fs;
use std::path::Path;

use folio_config::{
    ConfigError, ConfigValidator, FsValidator, PageDescriptor, PageRegistry, ProjectLayout,
};
use tempfile::TempDir;

fn pages() -> PageRegistry {
    PageRegistry::new(vec![
        PageDescriptor::new("home", "Home"),
        PageDescriptor::new("about", "About"),
    ])
}

fn scaffold(root: &Path) {
    fs::create_dir_all(root.join("src/images")).expect("create images");
    fs::create_dir_all(root.join("src/styles")).expect("create styles");
    fs::write(root.join("src/home.js"), "").expect("write home");
    fs::write(root.join("src/about.js"), "").expect("write about");
    fs::write(root.join("src/images/favicon.ico"), "").expect("write favicon");
    fs::write(root.join("src/styles/vars.less"), "@primary: #1890ff;").expect("write vars");
    fs::write(root.join("template.ejs"), "<html></html>").expect("write template");
}

#[test]
fn complete_project_passes() {
    let dir = TempDir::new().expect("tempdir");
    scaffold(dir.path());

    let layout = ProjectLayout::rooted(dir.path());
    assert!(FsValidator.validate(&layout, &pages()).is_ok());
    assert!(FsValidator.missing(&layout, &pages()).is_empty());
}

#[test]
fn missing_entry_source_is_reported_first() {
    let dir = TempDir::new().expect("tempdir");
    scaffold(dir.path());
    fs::remove_file(dir.path().join("src/about.js")).expect("remove about");
    fs::remove_file(dir.path().join("template.ejs")).expect("remove template");

    let layout = ProjectLayout::rooted(dir.path());
    match FsValidator.validate(&layout, &pages()) {
        Err(ConfigError::PathNotFound { field, path }) => {
            assert_eq!(field, "entry source");
            assert!(path.ends_with("src/about.js"));
        }
        other => panic!("expected PathNotFound, got {other:?}"),
    }

    let missing: Vec<_> = FsValidator
        .missing(&layout, &pages())
        .into_iter()
        .map(|(field, _)| field)
        .collect();
    assert_eq!(missing, vec!["entry source", "template"]);
}

#[test]
fn missing_theme_variables_are_reported() {
    let dir = TempDir::new().expect("tempdir");
    scaffold(dir.path());
    fs::remove_file(dir.path().join("src/styles/vars.less")).expect("remove vars");

    let layout = ProjectLayout::rooted(dir.path());
    assert!(matches!(
        FsValidator.validate(&layout, &pages()),
        Err(ConfigError::PathNotFound {
            field: "theme variables file",
            ..
        })
    ));
}

#[test]
fn schema_errors_come_before_filesystem_checks() {
    let dir = TempDir::new().expect("tempdir");
    let layout = ProjectLayout::rooted(dir.path());
    let dupes = PageRegistry::new(vec![
        PageDescriptor::new("home", "Home"),
        PageDescriptor::new("home", "Home"),
    ]);

    assert!(matches!(
        FsValidator.validate(&layout, &dupes),
        Err(ConfigError::DuplicatePage { .. })
    ));
}
