mod common;

use common::TestEnv;
use predicates::str::contains;

const RULES: &str = "; bit-vector rewrites
(define-rule bv-eq-sym-1 ((x ?BitVec) (y ?BitVec))
  (= x y) (= y x))
(define-cond-rule* bv-rec-rec-rec-1 ;comment
  (= x y) (= y x))
(define-rule* bv-or-concat-pullup
(define-const not-a-rule Int)
";

const SHEET: &str = "Name,RARE,Status
OR pullup,bv-or-concat-pullup,done
Pending,,todo
Eq sym,bv-eq-sym-1,done
";

#[test]
fn help_lists_every_mode() {
    let env = TestEnv::new();
    let out = env.cmd().arg("--help").assert().success().get_output().stdout.clone();
    let help = String::from_utf8(out).unwrap();
    for mode in [
        "read-rules",
        "read-sheets",
        "read-counts",
        "trace",
        "trace-count",
        "make-regression",
    ] {
        assert!(help.contains(mode), "help is missing {mode}");
    }
}

#[test]
fn unknown_mode_exits_cleanly() {
    let env = TestEnv::new();
    env.cmd()
        .arg("frobnicate")
        .assert()
        .success()
        .stdout(contains("Unknown mode: frobnicate"));
}

#[test]
fn read_rules_prints_sorted_names() {
    let env = TestEnv::new();
    let rules = env.file("rewrites", RULES);
    env.cmd()
        .args(["read-rules", "-f"])
        .arg(&rules)
        .assert()
        .success()
        .stdout("bv-eq-sym-1\nbv-or-concat-pullup\nbv-rec-rec-rec-1\n");
}

#[test]
fn read_sheets_drops_empty_cells() {
    let env = TestEnv::new();
    let sheet = env.file("sheet.csv", SHEET);
    env.cmd()
        .args(["read-sheets", "-f"])
        .arg(&sheet)
        .assert()
        .success()
        .stdout("bv-eq-sym-1\nbv-or-concat-pullup\n");
}

#[test]
fn read_sheets_without_rare_column_fails() {
    let env = TestEnv::new();
    let sheet = env.file("sheet.csv", "Name,Status\nx,done\n");
    env.cmd()
        .args(["read-sheets", "-f"])
        .arg(&sheet)
        .assert()
        .failure()
        .stderr(contains("RARE"));
}

#[test]
fn read_counts_aligns_counts_with_sheet_rows() {
    let env = TestEnv::new();
    let sheet = env.file("sheet.csv", SHEET);
    let listing = env.file(
        "counts.txt",
        "Rule counts\n\u{1b}[92m+bv-eq-sym-1,4\nbv-unused,9\n",
    );
    let out = env
        .cmd()
        .args(["read-counts", "-f"])
        .arg(&listing)
        .arg("-a")
        .arg(&sheet)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "RARE");
    assert!(lines[1].trim_matches('"').is_empty());
    assert!(lines[2].trim_matches('"').is_empty());
    assert_eq!(lines[3], "4");
}

#[test]
fn trace_requires_output_dir() {
    let env = TestEnv::new();
    env.cmd()
        .arg("trace")
        .arg("-f")
        .arg(&env.input)
        .assert()
        .failure()
        .stderr(contains("-o/--output"));
}
