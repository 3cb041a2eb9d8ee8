use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper that runs the binary against a storage file inside a temp dir
struct TestEnv {
    _temp_dir: TempDir,
    storage: String,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let storage = temp_dir
            .path()
            .join("cli_test.db")
            .to_str()
            .expect("utf-8 path")
            .to_string();
        Self {
            _temp_dir: temp_dir,
            storage,
        }
    }

    /// Command with --no-color and the test storage file
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskpad").expect("Failed to find taskpad binary");
        cmd.args(["--no-color", "--storage-file", &self.storage]);
        cmd
    }

    fn run(&self, args: &[&str]) {
        self.cmd().args(args).assert().success();
    }
}

#[test]
fn test_cli_first_run_shows_default_task() {
    let env = TestEnv::new();

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tasks"))
        .stdout(predicate::str::contains("- [ ] 0. Default Task"));
}

#[test]
fn test_cli_add_task() {
    let env = TestEnv::new();

    env.cmd()
        .args(["task", "add", "Buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Added task 1"))
        .stdout(predicate::str::contains("- [ ] 1. Buy milk"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Buy milk"));
}

#[test]
fn test_cli_add_blank_task_is_ignored() {
    let env = TestEnv::new();

    env.cmd()
        .args(["task", "add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task title is blank"))
        .stdout(predicate::str::contains("1.").not());
}

#[test]
fn test_cli_toggle_task_cascades() {
    let env = TestEnv::new();
    env.run(&["subtask", "add", "0", "Eggs"]);
    env.run(&["subtask", "add", "0", "Milk"]);

    env.cmd()
        .args(["task", "toggle", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default Task (✓ Done)"))
        .stdout(predicate::str::contains("- 0. [x] Eggs"))
        .stdout(predicate::str::contains("- 1. [x] Milk"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("- [x] 0. Default Task (2/2)"));
}

#[test]
fn test_cli_subtask_toggle_does_not_complete_task() {
    let env = TestEnv::new();
    env.run(&["subtask", "add", "0", "Only"]);

    env.cmd()
        .args(["subtask", "toggle", "0", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default Task (○ Open)"))
        .stdout(predicate::str::contains("- 0. [x] Only"));
}

#[test]
fn test_cli_rename_and_delete_subtask() {
    let env = TestEnv::new();
    env.run(&["subtask", "add", "0", "first"]);
    env.run(&["subtask", "add", "0", "second"]);
    env.run(&["subtask", "rename", "0", "1", "SECOND"]);

    env.cmd()
        .args(["subtask", "delete", "0", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- 0. [ ] SECOND"))
        .stdout(predicate::str::contains("first").not());
}

#[test]
fn test_cli_rename_task() {
    let env = TestEnv::new();

    env.cmd()
        .args(["task", "rename", "0", "Renamed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 0. Renamed"));
}

#[test]
fn test_cli_rename_task_to_blank_is_ignored() {
    let env = TestEnv::new();

    env.cmd()
        .args(["task", "rename", "0", "  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task title is blank"))
        .stdout(predicate::str::contains("# 0. Default Task"));

    env.cmd()
        .args(["task", "rename", "0", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task title is blank"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("- [ ] 0. Default Task"));
}

#[test]
fn test_cli_rename_subtask_to_blank_is_ignored() {
    let env = TestEnv::new();
    env.run(&["subtask", "add", "0", "Eggs"]);

    env.cmd()
        .args(["subtask", "rename", "0", "0", " "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subtask text is blank"))
        .stdout(predicate::str::contains("- 0. [ ] Eggs"));

    env.cmd()
        .args(["subtask", "rename", "0", "4", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Subtask 4 of task 0 not found"));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let env = TestEnv::new();
    env.run(&["task", "add", "second"]);
    env.run(&["task", "add", "third"]);

    env.cmd()
        .args(["task", "delete", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled: Kept task 'second'"))
        .stdout(predicate::str::contains("1. second"));

    env.cmd()
        .args(["task", "delete", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Deleted task 'second'"))
        .stdout(predicate::str::contains("1. third"));
}

#[test]
fn test_cli_delete_with_yes_flag() {
    let env = TestEnv::new();
    env.run(&["task", "add", "second"]);

    env.cmd()
        .args(["task", "delete", "0", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task 'Default Task'"))
        .stdout(predicate::str::contains("0. second"));
}

#[test]
fn test_cli_deleting_last_task_reseeds_default() {
    let env = TestEnv::new();
    env.run(&["task", "delete", "0", "--yes"]);

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0. Default Task"));
}

#[test]
fn test_cli_out_of_range_index_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["task", "toggle", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task 7 not found"));

    env.cmd()
        .args(["subtask", "toggle", "0", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Subtask 3 of task 0 not found"));
}

#[test]
fn test_cli_theme_set_and_toggle() {
    let env = TestEnv::new();

    env.cmd()
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));

    env.cmd()
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("taskpad")
        .expect("Failed to find taskpad binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("task"))
        .stdout(predicate::str::contains("subtask"))
        .stdout(predicate::str::contains("theme"));
}
