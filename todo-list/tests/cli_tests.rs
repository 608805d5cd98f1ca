use assert_cmd::Command;
use predicates::prelude::*;

fn todo_list() -> Command {
    let mut cmd = Command::cargo_bin("todo-list").unwrap();
    cmd.env_remove("TODO_LIST_TITLE");
    cmd
}

#[test]
fn prints_list_with_default_title() {
    todo_list()
        .args(["Buy milk", "Clean room", "Go to gym"])
        .assert()
        .success()
        .stdout("--------Today's Todos---------\n\n[ ] Buy milk\n[ ] Clean room\n[ ] Go to gym\n");
}

#[test]
fn marks_items_done_by_index() {
    todo_list()
        .args(["--title", "Today's todos", "--done", "1"])
        .args(["Buy milk", "clean room", "go to gym"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[X] clean room"))
        .stdout(predicate::str::contains("[ ] Buy milk"));
}

#[test]
fn title_can_come_from_environment() {
    todo_list()
        .env("TODO_LIST_TITLE", "Chores")
        .assert()
        .success()
        .stdout("------------Chores------------\n\n\n");
}

#[test]
fn out_of_range_index_fails() {
    todo_list()
        .args(["--done", "100", "Buy milk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Index 100 is out of range for a list of 1 items",
        ));
}

#[test]
fn unknown_title_fails() {
    todo_list()
        .args(["--done-title", "walk dog", "Buy milk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No todo titled \"walk dog\""));
}

#[test]
fn completed_prints_only_finished_items() {
    todo_list()
        .args(["--completed", "--done", "2", "Buy milk", "clean room", "go to gym"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[X] go to gym"))
        .stdout(predicate::str::contains("Buy milk").not());
}

#[test]
fn all_done_marks_everything() {
    todo_list()
        .args(["--all-done", "Buy milk", "clean room"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ]").not());
}
