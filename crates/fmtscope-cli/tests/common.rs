//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    snapshot_path: PathBuf,
}

impl TestFixture {
    /// Write a snapshot file with the given JSON contents.
    pub fn with_snapshot(snapshot: Value) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let snapshot_path = temp_dir.path().join("run.json");
        fs::write(&snapshot_path, snapshot.to_string()).expect("Failed to write snapshot");
        Self {
            _temp_dir: temp_dir,
            snapshot_path,
        }
    }

    /// The standard fixture: a small two-statement formatting run.
    pub fn new() -> Self {
        Self::with_snapshot(sample_snapshot())
    }

    pub fn snapshot_path(&self) -> &PathBuf {
        &self.snapshot_path
    }

    /// A command with the snapshot path appended after the given subcommand
    /// arguments.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::cargo_bin("fmtscope").expect("binary exists");
        cmd.args(args).arg(&self.snapshot_path);
        cmd
    }

    /// Run a subcommand and return (stdout, stderr), asserting success.
    pub fn run(&self, args: &[&str]) -> (String, String) {
        let output = self.command(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "{:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        (
            String::from_utf8(output.stdout).expect("stdout is utf-8"),
            String::from_utf8(output.stderr).expect("stderr is utf-8"),
        )
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// The inner assignment level: conditional indent on break tag 7, broken.
pub fn assignment_level() -> Value {
    json!({
        "type": "level",
        "id": 110,
        "openOp": {
            "id": 111,
            "plusIndent": {
                "type": "if",
                "condition": {"id": 7},
                "thenIndent": {"type": "const", "amount": 4},
                "elseIndent": {"type": "const", "amount": 0}
            },
            "breakBehaviour": {"type": "preferBreakingLastInnerLevel"},
            "breakabilityIfLastLevel": "ABORT",
            "debugName": "assignment"
        },
        "docs": [
            {
                "type": "break",
                "id": 112,
                "flat": " ",
                "breakState": {"broken": true, "newIndent": 4},
                "optTag": {"id": 7}
            },
            {"type": "token", "id": 113, "flat": "="},
            {"type": "space"},
            {"type": "token", "id": 114, "flat": "1;"}
        ],
        "flat": " = 1;",
        "evalPlusIndent": 4,
        "isOneLine": false
    })
}

/// A dump of formatting `int x=1;int yy=22;`: the first assignment broke on
/// a conditional break (tag 7), the second stayed flat.
pub fn sample_snapshot() -> Value {
    json!({
        "javaInput": "int x=1;int yy=22;\n",
        "ops": [
            {"type": "openOp", "id": 20, "toString": "OpenOp{plusIndent=Const{0}}"},
            {"type": "token", "id": 21, "beforeText": "", "text": "int", "afterText": " "},
            {"type": "token", "id": 22, "beforeText": "", "text": "x", "afterText": ""},
            {
                "type": "break",
                "id": 23,
                "conditional": false,
                "fillMode": "UNIFIED",
                "toString": "Break{fillMode=UNIFIED}"
            },
            {"type": "token", "id": 24, "beforeText": "", "text": "=", "afterText": " "},
            {
                "type": "break",
                "id": 25,
                "conditional": true,
                "fillMode": "INDEPENDENT",
                "toString": "Break{conditional, fillMode=INDEPENDENT}"
            },
            {"type": "token", "id": 26, "beforeText": "", "text": "1;", "afterText": ""},
            {"type": "closeOp"}
        ],
        "doc": {
            "type": "level",
            "id": 100,
            "openOp": {
                "id": 101,
                "plusIndent": {"type": "const", "amount": 0},
                "breakBehaviour": {"type": "breakThisLevel"},
                "breakabilityIfLastLevel": "ABORT"
            },
            "docs": [
                {"type": "token", "id": 102, "flat": "int"},
                {"type": "space"},
                {"type": "token", "id": 103, "flat": "x"},
                assignment_level(),
                {
                    "type": "break",
                    "id": 120,
                    "flat": " ",
                    "breakState": {"broken": true, "newIndent": 0}
                },
                {"type": "token", "id": 121, "flat": "int"},
                {"type": "space"},
                {"type": "token", "id": 122, "flat": "yy"},
                {
                    "type": "break",
                    "id": 123,
                    "flat": " ",
                    "breakState": {"broken": false, "newIndent": 0},
                    "optTag": {"id": 7}
                },
                {"type": "token", "id": 124, "flat": "= 22;"},
                {
                    "type": "level",
                    "id": 130,
                    "openOp": {
                        "id": 131,
                        "plusIndent": {"type": "const", "amount": 0},
                        "breakBehaviour": {"type": "breakThisLevel"},
                        "breakabilityIfLastLevel": "ABORT"
                    },
                    "docs": [{"type": "token", "id": 132, "flat": "ghost"}],
                    "flat": "",
                    "evalPlusIndent": 0,
                    "isOneLine": true
                }
            ],
            "flat": "int x = 1; int yy = 22;",
            "evalPlusIndent": 0,
            "isOneLine": false
        },
        "formatterDecisions": {
            "type": "exploration",
            "id": 0,
            "humanDescription": "Explore",
            "startColumn": 0,
            "children": [{
                "type": "level",
                "id": 1,
                "parentId": 0,
                "levelId": 110,
                "debugName": "assignment",
                "flat": " = 1;",
                "toString": "Level{= 1;}",
                "acceptedExplorationId": 3,
                "incomingState": {"column": 5, "lastIndent": 0},
                "children": [
                    {
                        "type": "exploration",
                        "id": 2,
                        "parentId": 1,
                        "humanDescription": "fit on one line",
                        "startColumn": 6,
                        "incomingState": {"column": 5},
                        "children": [{
                            "type": "level",
                            "id": 4,
                            "parentId": 2,
                            "levelId": 130,
                            "flat": "",
                            "toString": "Level{}",
                            "incomingState": {"column": 5}
                        }]
                    },
                    {
                        "type": "exploration",
                        "id": 3,
                        "parentId": 1,
                        "humanDescription": "break last inner level",
                        "startColumn": 6,
                        "incomingState": {"column": 5},
                        "result": {
                            "outputLevel": assignment_level(),
                            "finalState": {"column": 9}
                        }
                    }
                ]
            }]
        },
        "javaOutput": "int x\n    = 1;\nint yy = 22;\n"
    })
}

/// The sample snapshot with the ops panel replaced by undecodable data.
pub fn broken_ops_snapshot() -> Value {
    let mut snapshot = sample_snapshot();
    snapshot["ops"] = json!([{"type": "mystery"}]);
    snapshot
}
