//! End-to-end tests for `hdrgen fetch`.

use crate::common::{TestProject, serve_once};
use predicates::prelude::*;

#[test]
fn test_existing_file_skips_download() {
    let project = TestProject::new();
    project.write("test/nlohmann/json.hpp", "// vendored\n");

    // No --url: any request would go to the real pinned release
    project
        .hdrgen()
        .arg("fetch")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping download"));

    assert_eq!(project.read("test/nlohmann/json.hpp"), "// vendored\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_downloads_missing_file() {
    let project = TestProject::new();
    let url = serve_once("200 OK", "// nlohmann json\n").await;

    project
        .hdrgen()
        .args(["fetch", "--url", &url])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"))
        .stdout(predicate::str::contains("17 bytes"));

    assert_eq!(project.read("test/nlohmann/json.hpp"), "// nlohmann json\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_custom_destination() {
    let project = TestProject::new();
    let url = serve_once("200 OK", "x").await;

    project
        .hdrgen()
        .args(["fetch", "--url", &url, "--dest", "third_party/json.hpp"])
        .assert()
        .success();

    assert_eq!(project.read("third_party/json.hpp"), "x");
    assert!(!project.path().join("test").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_http_error_fails_without_writing() {
    let project = TestProject::new();
    let url = serve_once("500 Internal Server Error", "boom").await;

    project
        .hdrgen()
        .args(["fetch", "--url", &url])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to download"))
        .stderr(predicate::str::contains("500"));

    assert!(!project.path().join("test/nlohmann/json.hpp").exists());
}
