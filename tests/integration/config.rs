//! `hdrgen.toml` discovery and precedence.

use crate::common::TestProject;
use predicates::prelude::*;

const PROJECT_CONFIG: &str = r#"
[amalgamate]
input = "include/lib/all.hpp"
output = "single/lib.hpp"
include_path = "include"
prefix = "lib"

[amalgamate.banner]
guard = "LIB_HPP_INCLUDED"
title = "lib single header"
repository = "https://example.com/lib"
published_url = "https://example.com/lib.hpp"
license = ["Licensed under the MIT license"]
"#;

#[test]
fn test_amalgamate_from_project_config() {
    let project = TestProject::new().with_sample_library();
    project.write("hdrgen.toml", PROJECT_CONFIG);

    project.hdrgen().args(["amalgamate", "--hash", "abcdef0123"]).assert().success();

    let output = project.read("single/lib.hpp");
    assert!(output.starts_with("#ifndef LIB_HPP_INCLUDED\n#define LIB_HPP_INCLUDED\n\n// lib single header\n"));
    assert!(output.contains(" from https://example.com/lib/tree/abcdef0.\n"));
    assert!(output.contains("// Latest published version of this file: https://example.com/lib.hpp.\n"));
    assert!(output.contains("// Licensed under the MIT license\n"));
    assert!(output.ends_with("\n#endif // LIB_HPP_INCLUDED\n"));
}

#[test]
fn test_cli_flags_override_config() {
    let project = TestProject::new().with_sample_library();
    project.write("hdrgen.toml", PROJECT_CONFIG);

    project.hdrgen().args(["amalgamate", "-o", "elsewhere.hpp"]).assert().success();

    assert!(project.path().join("elsewhere.hpp").exists());
    assert!(!project.path().join("single/lib.hpp").exists());
}

#[test]
fn test_project_dir_resolves_config_paths() {
    let project = TestProject::new().with_sample_library();
    project.write("hdrgen.toml", PROJECT_CONFIG);
    let elsewhere = TestProject::new();

    elsewhere
        .hdrgen()
        .arg("--project-dir")
        .arg(project.path())
        .arg("amalgamate")
        .assert()
        .success();

    assert!(project.path().join("single/lib.hpp").exists());
}

#[test]
fn test_explicit_config_path() {
    let project = TestProject::new().with_sample_library();
    project.write("ci/custom.toml", PROJECT_CONFIG);

    project.hdrgen().args(["--config", "ci/custom.toml", "amalgamate"]).assert().success();
    assert!(project.path().join("single/lib.hpp").exists());

    project
        .hdrgen()
        .args(["--config", "ci/missing.toml", "amalgamate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ci/missing.toml"));
}

#[test]
fn test_invalid_config_is_reported() {
    let project = TestProject::new().with_sample_library();
    project.write("hdrgen.toml", "[amalgamate\nprefix = ");

    project
        .hdrgen()
        .args(["amalgamate", "lib"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}
