//! Discovery and loading against an on-disk skill tree

use skillsmith_skills::{find_sub_skills, SkillsRegistry};
use std::fs;
use std::path::Path;

fn write_skill(root: &Path, rel: &str, content: &str) {
    let dir = root.join(rel);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("SKILL.md"), content).unwrap();
}

#[test]
fn test_discover_sorts_by_relative_path() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    write_skill(root, "cloud/azure", "---\nname: azure\n---\nBody\n");
    write_skill(root, "cloud", "---\nname: cloud\n---\nBody\n");
    write_skill(root, "backend/api-design", "---\nname: api-design\n---\nBody\n");
    fs::create_dir_all(root.join("empty/dir")).unwrap();

    let mut registry = SkillsRegistry::new(root);
    registry.discover().unwrap();

    let rels: Vec<String> = registry
        .skills()
        .map(|skill| skill.unwrap().rel_path)
        .collect();
    assert_eq!(rels, ["backend/api-design", "cloud", "cloud/azure"]);
}

#[test]
fn test_name_falls_back_to_directory() {
    let tmp = tempfile::tempdir().unwrap();
    write_skill(tmp.path(), "tools/ripgrep", "# No frontmatter here\n");

    let mut registry = SkillsRegistry::new(tmp.path());
    registry.discover().unwrap();
    let skill = registry.skills().next().unwrap().unwrap();

    assert_eq!(skill.name(), "ripgrep");
    assert!(!skill.has_frontmatter);
    assert_eq!(skill.display_name(), "Ripgrep");
    assert_eq!(skill.body(), "# No frontmatter here\n");
}

#[test]
fn test_find_sub_skills() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    write_skill(root, "dotnet", "---\nname: dotnet\n---\nBody\n");
    write_skill(
        root,
        "dotnet/efcore",
        "---\nname: efcore\ndescription: |\n  Entity Framework Core data access.\n  USE FOR: orm, migrations\nmetadata:\n  displayName: EF Core\n---\nBody\n",
    );
    write_skill(root, "dotnet/aspnet", "---\nname: aspnet-core\n---\nBody\n");
    fs::create_dir_all(root.join("dotnet/notes")).unwrap();

    let subs = find_sub_skills(&root.join("dotnet")).unwrap();

    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].dir, "aspnet");
    assert_eq!(subs[0].name, "aspnet-core");
    assert_eq!(subs[0].display_name, "Aspnet Core");
    assert_eq!(subs[1].display_name, "EF Core");
    assert_eq!(subs[1].description, "Entity Framework Core data access.");
}

#[test]
fn test_sub_skills_of_missing_dir_is_empty() {
    let subs = find_sub_skills(Path::new("/no/such/skill")).unwrap();
    assert!(subs.is_empty());
}
