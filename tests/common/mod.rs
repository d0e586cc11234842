#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fake solver: fails with exit 3 on inputs containing `FAIL`, otherwise
/// prints a CRLF proof trace with two rule firings and one `evaluate` step.
const FAKE_SOLVER: &str = r#"#!/bin/sh
for arg in "$@"; do input="$arg"; done
if grep -q FAIL "$input"; then
  printf '(error "unsupported input %s")\r\n' "$input" >&2
  exit 3
fi
printf 'unsat\r\n'
printf '(step t1 (cl (= (bvule x x) true)) :rule all_simplify :args (bv-ule-self x))\r\n'
printf '(step t2 (cl (= (not true) false)) :rule all_simplify :args (evaluate))\r\n'
printf '(step t3 (cl (= (bvor a b) c)) :rule all_simplify :args (bv-or-concat-pullup a b c))\r\n'
"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub solver: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let input = root.join("problems");
        let output = root.join("traces");
        fs::create_dir_all(&input).expect("create input dir");
        let solver = write_fake_solver(&root);

        Self {
            _tmp: tmp,
            root,
            input,
            output,
            solver,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rulestat");
        cmd.env_remove("CVC5").env_remove("RUST_LOG");
        cmd
    }

    pub fn problem(&self, rel: &str, body: &str) -> PathBuf {
        let path = self.input.join(rel);
        fs::create_dir_all(path.parent().expect("problem parent")).expect("create problem dir");
        fs::write(&path, body).expect("write problem");
        path
    }

    pub fn file(&self, name: &str, body: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, body).expect("write fixture");
        path
    }

    pub fn trace_cmd(&self, threads: usize) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("trace")
            .arg("-f")
            .arg(&self.input)
            .arg("-o")
            .arg(&self.output)
            .arg("--cvc5")
            .arg(&self.solver)
            .arg("--threads")
            .arg(threads.to_string());
        cmd
    }

    pub fn run_json(&self, mut cmd: Command) -> Value {
        let out = cmd
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn out(&self, rel: &str) -> PathBuf {
        self.output.join(rel)
    }
}

#[cfg(unix)]
fn write_fake_solver(root: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = root.join("fake-cvc5");
    fs::write(&path, FAKE_SOLVER).expect("write fake solver");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake solver");
    path
}

#[cfg(not(unix))]
fn write_fake_solver(root: &Path) -> PathBuf {
    root.join("fake-cvc5")
}
