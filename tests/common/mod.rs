//! Common test utilities and fixtures for hdrgen integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A throwaway project directory holding a header tree.
pub struct TestProject {
    temp: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write a file relative to the project root, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path().join(relative)).unwrap()
    }

    /// `hdrgen` running inside the project directory.
    pub fn hdrgen(&self) -> Command {
        let mut cmd = Command::cargo_bin("hdrgen").unwrap();
        cmd.current_dir(self.path()).env_remove("RUST_LOG").env("NO_COLOR", "1");
        cmd
    }

    /// A small library under `include/lib` with one shared header.
    ///
    /// `all.hpp` pulls in `a.hpp` and `b.hpp`; `a.hpp` also includes `b.hpp`,
    /// so `b.hpp` is inlined once and collapsed once.
    pub fn with_sample_library(self) -> Self {
        self.write("include/lib/all.hpp", "#include <lib/a.hpp>\n#include <lib/b.hpp>\n");
        self.write(
            "include/lib/a.hpp",
            "// Copyright 2018 Emil Dotchevski\n\
// Distributed under the Boost Software License\n\
\n\
#include <lib/b.hpp>\n\
#include <vector>\n\
int a;\n",
        );
        self.write("include/lib/b.hpp", "int b;\n");
        self
    }
}

/// Serve a single HTTP response on a local port and return the URL to request.
pub async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{addr}/json.hpp")
}
