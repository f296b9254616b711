//! Phase 4 tests: dataset builder, chart options, JSON output and the CLI.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::{tempdir, NamedTempFile};

use osint_explorer::chart::{chart_option, ChartSettings, LayoutMode};
use osint_explorer::config::ThemeConfig;
use osint_explorer::format::{category_name, DatasetBuilder, JsonWriter, TreeReader};
use osint_explorer::tree::{annotate, find_path_by_id};
use osint_explorer::types::{ExplorerError, RawNode, DEFAULT_ROOT_NAME};

// ==================== Fixtures ====================

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Lay out a small category directory tree.
fn make_dataset(root: &Path) {
    write(
        &root.join("02-Email/tools.yaml"),
        "tools:\n  - name: Hunter\n    url: https://hunter.test\n    description: Find email addresses\n  - name: Holehe\n    url: https://holehe.test\n",
    );
    write(
        &root.join("02-Email/01-Breach/tools.yaml"),
        "tools:\n  - name: HaveIBeenPwned\n    url: https://hibp.test\n    description: Check breached accounts\n",
    );
    write(
        &root.join("01-Username/tools.yaml"),
        "tools:\n  - name: Sherlock\n    url: https://sherlock.test\n    description: Hunt usernames\n",
    );
    write(&root.join("01-Username/notes.txt"), "ignored");
}

fn sample_json() -> &'static str {
    r#"{"name":"Root","children":[
        {"name":"Email","children":[
            {"name":"user@example.com","url":"https://x.test","description":"found"},
            {"name":"Breach","children":[{"name":"Dehashed","url":"https://dehashed.test"}]}
        ]},
        {"name":"Phone","children":[{"name":"Lookup","description":"Reverse phone lookup"}]}
    ]}"#
}

// ==================== Dataset Tests ====================

#[test]
fn test_category_name_parsing() {
    assert_eq!(category_name("03-Email").unwrap(), "Email");
    assert_eq!(category_name("04-Social Media").unwrap(), "Social Media");
    assert_eq!(category_name("05-Social Media-old").unwrap(), "Social Media");
    assert!(matches!(
        category_name("Email"),
        Err(ExplorerError::InvalidDirectoryName(_))
    ));
    assert!(category_name("06-").is_err());
}

#[test]
fn test_build_dataset() {
    let dir = tempdir().unwrap();
    make_dataset(dir.path());

    let root = DatasetBuilder::new().build(dir.path()).unwrap();
    assert_eq!(root.name, DEFAULT_ROOT_NAME);

    let categories: Vec<&str> = root.children().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(categories, vec!["Username", "Email"]);

    // Tools first, then subcategories
    let email = &root.children()[1];
    let names: Vec<&str> = email.children().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Hunter", "Holehe", "Breach"]);
    assert_eq!(email.children()[0].url.as_deref(), Some("https://hunter.test"));
    assert!(email.children()[1].description.is_none());
    assert_eq!(email.children()[2].children()[0].name, "HaveIBeenPwned");
    assert_eq!(root.node_count(), 8);
}

#[test]
fn test_build_dataset_custom_root_name() {
    let dir = tempdir().unwrap();
    make_dataset(dir.path());
    let root = DatasetBuilder::new()
        .root_name("My Tools")
        .build(dir.path())
        .unwrap();
    assert_eq!(root.name, "My Tools");
}

#[test]
fn test_build_dataset_bad_directory_name() {
    let dir = tempdir().unwrap();
    make_dataset(dir.path());
    std::fs::create_dir_all(dir.path().join("misc")).unwrap();
    assert!(matches!(
        DatasetBuilder::new().build(dir.path()),
        Err(ExplorerError::InvalidDirectoryName(_))
    ));
}

#[test]
fn test_build_dataset_missing_tools_list() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("01-Email/tools.yaml"), "other: []\n");
    assert!(matches!(
        DatasetBuilder::new().build(dir.path()),
        Err(ExplorerError::MissingTools(_))
    ));
}

#[test]
fn test_build_dataset_bad_yaml() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("01-Email/tools.yaml"), "tools: [unclosed\n");
    assert!(matches!(
        DatasetBuilder::new().build(dir.path()),
        Err(ExplorerError::Yaml { .. })
    ));
}

#[test]
fn test_dataset_json_roundtrip_through_writer() {
    let dir = tempdir().unwrap();
    make_dataset(dir.path().join("data").as_path());
    let root = DatasetBuilder::new()
        .build(&dir.path().join("data"))
        .unwrap();

    let out = dir.path().join("data.json");
    JsonWriter::new(true).write_to_file(&root, &out).unwrap();
    let reread = TreeReader::read_from_file(&out).unwrap();
    assert_eq!(reread, root);
}

// ==================== Chart Tests ====================

#[test]
fn test_chart_option_tree_layout() {
    let annotated = annotate(
        TreeReader::read_from_str(sample_json()).unwrap(),
        &ThemeConfig::default(),
    );
    let option = chart_option(&annotated.root, &ChartSettings::default());
    let series = &option["series"][0];

    assert_eq!(series["type"], "tree");
    assert_eq!(series["layout"], "orthogonal");
    assert_eq!(series["symbol"], "diamond");
    assert_eq!(series["left"], "7%");
    assert_eq!(series["label"]["show"], true);
    assert_eq!(series["leaves"]["label"]["position"], "right");
    assert_eq!(option["tooltip"]["triggerOn"], "click");
    assert!(option.get("backgroundColor").is_none());

    let root = &series["data"][0];
    assert_eq!(root["originalName"], "Root");
    assert_eq!(root["collapsed"], false);
    let leaf = &root["children"][0]["children"][0];
    assert_eq!(leaf["url"], "https://x.test");
    assert!(leaf["tooltip"]["formatter"]
        .as_str()
        .unwrap()
        .contains("Description: found"));
    assert!(leaf.get("collapsed").is_none());
    // Depth 2 branch starts collapsed
    assert_eq!(root["children"][0]["children"][1]["collapsed"], true);
}

#[test]
fn test_chart_option_radial_without_labels() {
    let annotated = annotate(
        TreeReader::read_from_str(sample_json()).unwrap(),
        &ThemeConfig::default(),
    );
    let settings = ChartSettings {
        layout: LayoutMode::Radial,
        show_labels: false,
        dark: true,
        ..ChartSettings::default()
    };
    let option = chart_option(&annotated.root, &settings);
    let series = &option["series"][0];
    assert_eq!(series["layout"], "radial");
    assert_eq!(series["label"]["show"], false);
    assert_eq!(series["label"]["rotate"], "radial");
    assert!(series.get("leaves").is_none());
    assert!(option["backgroundColor"].is_string());
}

#[test]
fn test_chart_option_highlight_expands_path() {
    let annotated = annotate(
        TreeReader::read_from_str(sample_json()).unwrap(),
        &ThemeConfig::default(),
    );
    let dehashed = annotated.root.children()[0].children()[1].children()[0].id();
    let path: Vec<_> = find_path_by_id(&annotated.root, dehashed)
        .unwrap()
        .iter()
        .map(|n| n.id())
        .collect();

    let settings = ChartSettings {
        highlight: path,
        ..ChartSettings::default()
    };
    let option = chart_option(&annotated.root, &settings);
    let breach_branch = &option["series"][0]["data"][0]["children"][0]["children"][1];
    assert_eq!(breach_branch["collapsed"], false);
    assert_eq!(breach_branch["selected"], true);
    assert_eq!(breach_branch["children"][0]["selected"], true);
}

#[test]
fn test_chart_option_collapse_follows_initial_depth() {
    let annotated = annotate(
        TreeReader::read_from_str(sample_json()).unwrap(),
        &ThemeConfig::default(),
    );
    let settings = ChartSettings {
        initial_depth: 1,
        ..ChartSettings::default()
    };
    let option = chart_option(&annotated.root, &settings);
    let series = &option["series"][0];
    assert_eq!(series["initialTreeDepth"], 1);

    let root = &series["data"][0];
    assert_eq!(root["collapsed"], false);
    assert_eq!(root["children"][0]["collapsed"], true);
    assert_eq!(root["children"][1]["collapsed"], true);
    // Leaves carry no flag at any depth
    assert!(root["children"][1]["children"][0].get("collapsed").is_none());
}

#[test]
fn test_layout_mode_names() {
    assert_eq!(LayoutMode::from_name("RADIAL"), Some(LayoutMode::Radial));
    assert_eq!(LayoutMode::from_name("orthogonal"), Some(LayoutMode::Tree));
    assert_eq!(LayoutMode::from_name("sunburst"), None);
    assert_eq!(LayoutMode::Tree.toggled(), LayoutMode::Radial);
    assert_eq!(LayoutMode::Radial.to_string(), "radial");
}

#[test]
fn test_json_writer_compact_and_pretty() {
    let node = RawNode::new("A").child(RawNode::new("B"));
    let compact = JsonWriter::new(false).to_string(&node).unwrap();
    assert_eq!(compact, r#"{"name":"A","children":[{"name":"B"}]}"#);
    let pretty = JsonWriter::new(true).to_string(&node).unwrap();
    assert!(pretty.contains('\n'));
}

// ==================== CLI Helpers ====================

fn oexp_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_oexp"))
}

fn run_oexp(args: &[&str]) -> Output {
    Command::new(oexp_bin())
        .args(args)
        .output()
        .expect("Failed to run oexp")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "oexp failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn sample_file() -> NamedTempFile {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), sample_json()).unwrap();
    tmp
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_build_then_stats() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data");
    make_dataset(&data);
    let out = dir.path().join("data.json");

    let output = run_oexp(&[
        "build",
        data.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);
    assert_success(&output);
    assert!(out.exists());

    let output = run_oexp(&["--format", "json", "stats", out.to_str().unwrap()]);
    assert_success(&output);
    let stats: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(stats["nodes"], 8);
    assert_eq!(stats["categories"], 2);
    assert_eq!(stats["branches"], 1);
    assert_eq!(stats["root"], DEFAULT_ROOT_NAME);
}

#[test]
fn test_cli_search() {
    let tmp = sample_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_oexp(&["search", path, "example"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("Root > Email > user@example.com"));

    let output = run_oexp(&["--format", "json", "search", path, "x"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["status"], "inactive");

    let output = run_oexp(&[
        "--format", "json", "search", path, "lookup", "--category", "Email",
    ]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["status"], "matches");
    assert_eq!(value["results"].as_array().unwrap().len(), 0);
}

#[test]
fn test_cli_unknown_category() {
    let tmp = sample_file();
    let output = run_oexp(&[
        "search",
        tmp.path().to_str().unwrap(),
        "lookup",
        "--category",
        "Nope",
    ]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_category_by_display_label() {
    let tmp = sample_file();
    let path = tmp.path().to_str().unwrap();
    let annotated = annotate(
        TreeReader::read_from_str(sample_json()).unwrap(),
        &ThemeConfig::default(),
    );
    let phone_label = annotated.root.children()[1].name().to_string();

    let output = run_oexp(&["project", path, "--category", &phone_label]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["children"].as_array().unwrap().len(), 1);
    assert_eq!(value["children"][0]["originalName"], "Phone");

    let output = run_oexp(&[
        "--format", "json", "search", path, "lookup", "--category", &phone_label,
    ]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["results"][0]["name"], "Lookup");
}

#[test]
fn test_cli_path() {
    let tmp = sample_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_oexp(&["--format", "json", "path", path, "Dehashed"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(
        value["names"],
        serde_json::json!(["Root", "Email", "Breach", "Dehashed"])
    );

    let output = run_oexp(&["path", path, "Nobody"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_project_and_chart() {
    let tmp = sample_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_oexp(&["project", path, "--category", "Phone"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["children"].as_array().unwrap().len(), 1);
    assert_eq!(value["children"][0]["originalName"], "Phone");

    let output = run_oexp(&["chart", path, "--layout", "radial", "--no-labels"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["series"][0]["layout"], "radial");
    assert_eq!(value["series"][0]["label"]["show"], false);

    let output = run_oexp(&["chart", path, "--layout", "sunburst"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_cli_malformed_data() {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "{ not json").unwrap();
    let output = run_oexp(&["categories", tmp.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));

    let output = run_oexp(&["categories", "/definitely/not/here.json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_theme_init_and_use() {
    let dir = tempdir().unwrap();
    let theme_path = dir.path().join("theme.toml");
    let output = run_oexp(&["theme-init", theme_path.to_str().unwrap()]);
    assert_success(&output);
    assert!(ThemeConfig::load(&theme_path).is_ok());

    let tmp = sample_file();
    let output = run_oexp(&[
        "--theme",
        theme_path.to_str().unwrap(),
        "--format",
        "json",
        "categories",
        tmp.path().to_str().unwrap(),
    ]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value[0]["name"], "Email");
    assert_eq!(value[1]["leaves"], 1);
}
