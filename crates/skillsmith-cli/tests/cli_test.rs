//! Runs the skillsmith binary against a temporary skills tree

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn write_skill(root: &Path, rel: &str, content: &str) {
    let dir = root.join(rel);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("SKILL.md"), content).unwrap();
}

fn corpus() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    let skills = tmp.path().join("skills");
    write_skill(
        &skills,
        "web/api-design",
        "---\nname: api-design\ndescription: HTTP APIs.\n---\n# API Design\n\n## Best Practices\n\n- **Validate Input**: never trust user data.\n- Consider pagination for large collections.\n",
    );
    write_skill(
        &skills,
        "web/overview-only",
        "---\nname: overview-only\n---\n# Overview Only\n\n## Overview\n\nNothing to extract.\n",
    );
    fs::write(tmp.path().join("skillsmith.toml"), "[logging]\nlevel = \"warn\"\n").unwrap();
    tmp
}

fn skillsmith(workdir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_skillsmith"))
        .current_dir(workdir)
        .env("HOME", workdir)
        .env_remove("SKILLSMITH_ROOT")
        .env_remove("RUST_LOG")
        .args(["--config", "skillsmith.toml", "--root", "skills"])
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_rules_command() {
    let tmp = corpus();
    let output = skillsmith(tmp.path(), &["rules", "--verbose"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Found 2 skill directories\n"));
    assert!(stdout.contains("  OK: web/api-design (2 rules, 4 files)\n"));
    assert!(stdout.contains("  SKIP (no best practices): web/overview-only\n"));
    assert!(stdout.contains("  With rules/:        1\n"));

    let rules = tmp.path().join("skills/web/api-design/rules");
    assert!(rules.join("_sections.md").is_file());
    assert!(rules.join("api-design-validate-input.md").is_file());
    assert!(!tmp.path().join("skills/web/overview-only/rules").exists());
}

#[test]
fn test_rules_dry_run() {
    let tmp = corpus();
    let output = skillsmith(tmp.path(), &["rules", "--dry-run"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("DRY RUN -- no files will be written\n"));
    assert!(!stdout.contains("SKIP"));
    assert!(!tmp.path().join("skills/web/api-design/rules").exists());
}

#[test]
fn test_docs_and_audit_commands() {
    let tmp = corpus();

    let docs = skillsmith(tmp.path(), &["docs"]);
    assert!(docs.status.success());
    let stdout = String::from_utf8(docs.stdout).unwrap();
    assert!(stdout.ends_with("Done: 2 processed, 0 skipped\n"));
    assert!(tmp.path().join("skills/web/api-design/metadata.json").is_file());

    let audit = skillsmith(tmp.path(), &["audit", "--bottom", "1"]);
    assert!(audit.status.success());
    let stdout = String::from_utf8(audit.stdout).unwrap();
    assert!(stdout.starts_with("Total skills analyzed: 2\n\nBOTTOM 1 (lowest quality scores):\n"));
    assert!(stdout.contains("  CRITICAL (<0): 2\n"));
}

#[test]
fn test_missing_root_fails() {
    let tmp = corpus();
    let output = Command::new(env!("CARGO_BIN_EXE_skillsmith"))
        .current_dir(tmp.path())
        .env("HOME", tmp.path())
        .args(["--config", "skillsmith.toml", "--root", "nowhere", "rules"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("skills root not found"));
}
