use super::{run, Options};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const GUIDE: &str = "# Intro\nWelcome.\n\n## Setup\nDo X.\n\n### Details\nNested info.\n\n## Usage\nDo Y.\n";

fn options_for(dir: &TempDir, doc: &str) -> Options {
    let input = dir.path().join("DOCS.md");
    fs::write(&input, doc).unwrap();
    Options {
        input,
        output_dir: dir.path().join("docs_split"),
        ..Options::default()
    }
}

fn read_dir_sorted(dir: &Path) -> Vec<(PathBuf, String)> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let content = fs::read_to_string(&path).unwrap();
            (PathBuf::from(path.file_name().unwrap()), content)
        })
        .collect();
    files.sort();
    files
}

#[test]
fn test_default_options() {
    let options = Options::default();
    assert_eq!(options.input, PathBuf::from("DOCS.md"));
    assert_eq!(options.output_dir, PathBuf::from("docs_split"));
    assert!(options.extract);
    assert_eq!(options.manifest, None);
}

#[test]
fn test_guide_end_to_end() {
    let dir = TempDir::new().unwrap();
    let options = options_for(&dir, GUIDE);
    let out = &options.output_dir;

    let report = run(&options).unwrap();

    assert_eq!(report.index.total_sections, 3);
    assert_eq!(report.index_path, out.join("00_index.md"));
    assert_eq!(
        fs::read_to_string(out.join("000_intro.md")).unwrap(),
        "# Intro\nWelcome.\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("002_usage.md")).unwrap(),
        "## Usage\nDo Y.\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("00_index.md")).unwrap(),
        "# Documentation Index\n\n\
         Total sections: 3\n\n\
         - [Intro](./000_intro.md) (3 lines)\n  \
         - [Setup](./001_setup.md) (6 lines)\n  \
         - [Usage](./002_usage.md) (3 lines)\n"
    );

    let extraction = report.extraction.unwrap();
    assert_eq!(extraction.types_path, None);
    assert_eq!(extraction.schemas_path, None);
    assert_eq!(read_dir_sorted(out).len(), 4);
}

#[test]
fn test_graphql_block_is_extracted() {
    let dir = TempDir::new().unwrap();
    let options = options_for(&dir, "# API\n```graphql\ntype User { id: ID! }\n```\n");

    let report = run(&options).unwrap();

    assert_eq!(report.extraction.unwrap().types, 1);
    assert_eq!(
        fs::read_to_string(options.output_dir.join("graphql_types.md")).unwrap(),
        "# GraphQL Types\n\n## Type 1\n\n```graphql\ntype User { id: ID! }\n```\n\n"
    );
    assert!(fs::read_to_string(options.output_dir.join("000_api.md"))
        .unwrap()
        .contains("type User"));
}

#[test]
fn test_no_extract_skips_aggregate_files() {
    let dir = TempDir::new().unwrap();
    let mut options = options_for(&dir, "# API\n```graphql\ntype User { id: ID! }\n```\n");
    options.extract = false;

    let report = run(&options).unwrap();

    assert!(report.extraction.is_none());
    assert!(!options.output_dir.join("graphql_types.md").exists());
}

#[test]
fn test_document_without_headings() {
    let dir = TempDir::new().unwrap();
    let options = options_for(&dir, "one\ntwo");

    let report = run(&options).unwrap();

    assert_eq!(report.index.total_sections, 1);
    assert_eq!(
        fs::read_to_string(options.output_dir.join("000_introduction.md")).unwrap(),
        "one\ntwo"
    );
}

#[test]
fn test_runs_are_deterministic() {
    let dir = TempDir::new().unwrap();
    let first = options_for(&dir, GUIDE);
    let second = Options {
        output_dir: dir.path().join("again"),
        ..first.clone()
    };

    run(&first).unwrap();
    run(&second).unwrap();

    assert_eq!(
        read_dir_sorted(&first.output_dir),
        read_dir_sorted(&second.output_dir)
    );
}

#[test]
fn test_manifest_is_written_on_request() {
    let dir = TempDir::new().unwrap();
    let mut options = options_for(&dir, GUIDE);
    let manifest = dir.path().join("index.json");
    options.manifest = Some(manifest.clone());

    run(&options).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(manifest).unwrap()).unwrap();
    assert_eq!(json["total_sections"], 3);
    assert_eq!(json["entries"][2]["title"], "Usage");
}

#[test]
fn test_missing_input_leaves_only_output_dir() {
    let dir = TempDir::new().unwrap();
    let options = Options {
        input: dir.path().join("absent.md"),
        output_dir: dir.path().join("out"),
        ..Options::default()
    };

    let err = run(&options).err().unwrap();

    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert!(options.output_dir.is_dir());
    assert!(read_dir_sorted(&options.output_dir).is_empty());
}

#[test]
fn test_existing_output_dir_is_reused() {
    let dir = TempDir::new().unwrap();
    let options = options_for(&dir, GUIDE);
    fs::create_dir(&options.output_dir).unwrap();
    fs::write(options.output_dir.join("000_intro.md"), "stale").unwrap();

    run(&options).unwrap();

    assert_eq!(
        fs::read_to_string(options.output_dir.join("000_intro.md")).unwrap(),
        "# Intro\nWelcome.\n"
    );
}
