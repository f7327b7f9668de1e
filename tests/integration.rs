// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use std::{fs, path::Path};

const STRUCTURE: &str = "proj/
├── src/
│   ├── main.py
├── README.md
";

fn arbo(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("arbo").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

/// Every path below `root`, relative to it, sorted.
fn tree(root: &Path) -> Vec<String> {
    let mut paths: Vec<String> = walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.unwrap())
        .map(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let mut display = relative.to_string_lossy().replace('\\', "/");
            if entry.file_type().is_dir() {
                display.push('/');
            }
            display
        })
        .collect();
    paths.sort();
    paths
}

#[test]
fn creates_tree_from_default_structure_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("structure.md"), STRUCTURE).unwrap();

    arbo(dir.path())
        .args(["--output", "out"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Tree created under out"));

    assert_eq!(
        tree(&dir.path().join("out")),
        vec!["proj/", "proj/README.md", "proj/src/", "proj/src/main.py"]
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("out/proj/src/main.py")).unwrap(),
        ""
    );
}

#[test]
fn missing_description_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    arbo(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("not found"));

    assert!(!dir.path().join("output_project").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("layout.txt"), STRUCTURE).unwrap();

    arbo(dir.path())
        .args(["layout.txt", "-o", "out", "--dry-run"])
        .assert()
        .success()
        .stdout(predicates::str::contains("main.py"))
        .stdout(predicates::str::contains("Dry run"));

    assert!(!dir.path().join("out").exists());
}

#[test]
fn config_file_supplies_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("arbo.toml"),
        "structure = \"design.md\"\noutput = \"skeleton\"\n",
    )
    .unwrap();
    fs::write(dir.path().join("design.md"), "app\n└── Cargo.toml\n").unwrap();

    arbo(dir.path()).assert().success();

    assert_eq!(
        tree(&dir.path().join("skeleton")),
        vec!["app/", "app/Cargo.toml"]
    );
}

#[test]
fn malformed_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("arbo.toml"), "output = [\n").unwrap();

    arbo(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("Parsing error"));
}

#[test]
fn diagram_is_taken_from_markdown_fence() {
    let dir = tempfile::tempdir().unwrap();
    let doc = format!("# Project layout\n\nCreate this:\n\n```text\n{STRUCTURE}```\n\nThanks.\n");
    fs::write(dir.path().join("structure.md"), doc).unwrap();

    arbo(dir.path()).args(["-o", "out"]).assert().success();

    assert_eq!(
        tree(&dir.path().join("out")),
        vec!["proj/", "proj/README.md", "proj/src/", "proj/src/main.py"]
    );
}

#[test]
fn second_run_empties_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("structure.md"), STRUCTURE).unwrap();

    arbo(dir.path()).args(["-o", "out"]).assert().success();
    let readme = dir.path().join("out/proj/README.md");
    fs::write(&readme, "notes").unwrap();
    arbo(dir.path()).args(["-o", "out"]).assert().success();

    assert_eq!(fs::read_to_string(readme).unwrap(), "");
    assert_eq!(tree(&dir.path().join("out")).len(), 4);
}

#[test]
fn empty_description_succeeds_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("structure.md"), "\n   \n").unwrap();

    arbo(dir.path())
        .args(["-o", "out"])
        .assert()
        .success()
        .stdout(predicates::str::contains("nothing to create"));

    assert!(!dir.path().join("out").exists());
}
