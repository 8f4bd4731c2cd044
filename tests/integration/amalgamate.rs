//! End-to-end tests for `hdrgen amalgamate`.

use crate::common::TestProject;
use predicates::prelude::*;
use std::fs;

const SAMPLE_ARGS: [&str; 8] =
    ["amalgamate", "-i", "include/lib/all.hpp", "-p", "include", "-o", "single/lib.hpp", "lib"];

#[test]
fn test_generates_single_header() {
    let project = TestProject::new().with_sample_library();

    project
        .hdrgen()
        .args(SAMPLE_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rebuilding include/lib/all.hpp:"))
        .stdout(predicate::str::contains("created"))
        .stderr(predicate::str::contains("lib/a.hpp (13)"))
        .stderr(predicate::str::contains("lib/b.hpp (15)"));

    let output = project.read("single/lib.hpp");
    assert!(output.starts_with("#ifndef BOOST_LEAF_HPP_INCLUDED\n#define BOOST_LEAF_HPP_INCLUDED\n"));
    assert!(output.contains("// Boost LEAF single header distribution. Do not edit.\n"));
    assert!(output.contains("// >>> #include <lib/a.hpp>\n// #line 4 \"lib/a.hpp\"\n"));
    assert!(output.contains("// <<< #include <lib/b.hpp>\n// #line 5 \"lib/a.hpp\"\n"));
    assert!(output.contains("// #include <lib/b.hpp> // Expanded at line 15\n"));
    assert!(output.ends_with("\n#endif // BOOST_LEAF_HPP_INCLUDED\n"));
    assert!(!output.contains("Copyright 2018 Emil Dotchevski"));
    assert_eq!(output.matches("int b;").count(), 1);
}

#[test]
fn test_second_run_leaves_output_untouched() {
    let project = TestProject::new().with_sample_library();

    project.hdrgen().args(SAMPLE_ARGS).assert().success();
    let path = project.path().join("single/lib.hpp");
    let first = fs::read(&path).unwrap();
    let modified = fs::metadata(&path).unwrap().modified().unwrap();

    project
        .hdrgen()
        .args(SAMPLE_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));

    assert_eq!(fs::read(&path).unwrap(), first);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);

    let stray: Vec<_> = fs::read_dir(project.path().join("single"))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name() != "lib.hpp")
        .collect();
    assert!(stray.is_empty(), "temporary files left behind: {stray:?}");
}

#[test]
fn test_linerefs_and_hash() {
    let project = TestProject::new().with_sample_library();

    project
        .hdrgen()
        .args(SAMPLE_ARGS)
        .args(["--linerefs", "--hash", "5fde62d0123456789"])
        .assert()
        .success();

    let output = project.read("single/lib.hpp");
    assert!(output.contains("from https://github.com/boostorg/leaf/tree/5fde62d.\n"));
    assert!(output.contains("\n#line 4 \"lib/a.hpp\"\n"));
    assert!(!output.contains("// #line"));
}

#[test]
fn test_expand_all_reinlines_headers() {
    let project = TestProject::new().with_sample_library();

    project.hdrgen().args(SAMPLE_ARGS).arg("--expand-all").assert().success();

    let output = project.read("single/lib.hpp");
    assert_eq!(output.matches("int b;").count(), 2);
    assert!(!output.contains("Expanded at line"));
    assert!(output.contains("\n#line 5 \"lib/a.hpp\"\n"));
}

#[test]
fn test_quiet_prints_nothing() {
    let project = TestProject::new().with_sample_library();

    project
        .hdrgen()
        .arg("--quiet")
        .args(SAMPLE_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert!(project.path().join("single/lib.hpp").exists());
}

#[test]
fn test_defaults_to_in_cpp_and_out_cpp() {
    let project = TestProject::new();
    project.write("in.cpp", "#include \"lib/x.hpp\"\nint main() {}\n");
    project.write("lib/x.hpp", "int x;\n");

    project.hdrgen().args(["amalgamate", "lib"]).assert().success();

    let output = project.read("out.cpp");
    assert!(output.contains("// >>> #include \"lib/x.hpp\"\nint x;\nint main() {}\n"));
}

#[test]
fn test_missing_include_fails() {
    let project = TestProject::new();
    project.write("include/lib/all.hpp", "#include <lib/gone.hpp>\n");

    project
        .hdrgen()
        .args(SAMPLE_ARGS)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Included file 'lib/gone.hpp' not found"));

    assert!(!project.path().join("single/lib.hpp").exists());
}

#[test]
fn test_missing_input_fails() {
    let project = TestProject::new();

    project
        .hdrgen()
        .args(["amalgamate", "-i", "nope.hpp", "lib"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Input file not found: nope.hpp"));
}

#[test]
fn test_empty_prefix_fails() {
    let project = TestProject::new().with_sample_library();

    project
        .hdrgen()
        .args(["amalgamate", "-i", "include/lib/all.hpp", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-empty"));

    project
        .hdrgen()
        .args(["amalgamate", "-i", "include/lib/all.hpp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-empty"));

    assert!(!project.path().join("out.cpp").exists());
}
