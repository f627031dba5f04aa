//! Shared fixture for integration tests.
//!
//! Builds synthetic repositories on disk: a `.git` directory with a loose
//! object store and `refs/heads` tree, no git binary required. Objects are
//! written the way git stores them (zlib-deflated, `commit <len>\0` header
//! glued to the body), so the reader is exercised against realistic bytes.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use tempfile::TempDir;

/// A synthetic repository rooted in a temp directory.
pub struct FakeRepo {
    dir: TempDir,
}

impl FakeRepo {
    /// Create an empty repository skeleton.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
        std::fs::create_dir_all(dir.path().join(".git/refs/heads")).unwrap();
        Self { dir }
    }

    /// The working-directory path (parent of `.git`).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The `.git` directory path.
    pub fn git_dir(&self) -> PathBuf {
        self.dir.path().join(".git")
    }

    /// Store a commit object with the given parents.
    pub fn write_commit(&self, oid: &str, parents: &[&str]) {
        let mut body = String::new();
        body.push_str("tree 0000000000000000000000000000000000000000\n");
        for parent in parents {
            body.push_str(&format!("parent {parent}\n"));
        }
        body.push_str("author A U Thor <author@example.com> 1700000000 +0000\n");
        body.push_str("committer A U Thor <author@example.com> 1700000000 +0000\n");
        body.push_str("\ntest commit\n");
        let payload = format!("commit {}\0{}", body.len(), body);
        self.write_object(oid, payload.as_bytes());
    }

    /// Store an arbitrary payload as a zlib-deflated loose object.
    pub fn write_object(&self, oid: &str, payload: &[u8]) {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(payload).unwrap();
        self.write_object_bytes(oid, &encoder.finish().unwrap());
    }

    /// Store raw bytes at an object path without deflating them.
    pub fn write_object_bytes(&self, oid: &str, bytes: &[u8]) {
        let dir = self.git_dir().join("objects").join(&oid[..2]);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(&oid[2..]), bytes).unwrap();
    }

    /// Point a branch at a commit. Nested names create subdirectories.
    pub fn write_branch(&self, name: &str, oid: &str) {
        let path = self.git_dir().join("refs/heads").join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, format!("{oid}\n")).unwrap();
    }
}

/// A 40-hex oid made of a single repeated character.
pub fn oid(fill: char) -> String {
    std::iter::repeat(fill).take(40).collect()
}
