#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use stockroom::config::StockConfig;
use tempfile::TempDir;

const HEADER: &str = "id,name,desc,price,quantity";

fn stockroom_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("stockroom"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_add_and_exit_writes_default_file() {
    let temp = TempDir::new().unwrap();

    stockroom_cmd(temp.path())
        .write_stdin("add\nWidget\nA small widget\n9.5\n10\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added successfully."))
        .stdout(predicate::str::contains("Exiting the program..."));

    assert_eq!(
        read_lines(&temp.path().join("db_products.csv")),
        vec![HEADER, "1,Widget,A small widget,9.5,10"]
    );
}

#[test]
fn test_existing_file_is_loaded_and_renumbered_on_delete() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("db_products.csv");
    fs::write(
        &data,
        format!("{HEADER}\n1,Widget,A small widget,9.5,10\n2,Gadget,A shiny gadget,25.0,3\n"),
    )
    .unwrap();

    stockroom_cmd(temp.path())
        .write_stdin("view\n2\n\ndelete\n1\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Description: A shiny gadget"))
        .stdout(predicate::str::contains("$25.00"))
        .stdout(predicate::str::contains("Product with ID 1 deleted successfully."));

    assert_eq!(
        read_lines(&data),
        vec![HEADER, "1,Gadget,A shiny gadget,25.0,3"]
    );
}

#[test]
fn test_malformed_file_fails_without_touching_it() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("db_products.csv");
    let original = format!("{HEADER}\n1,Widget,ok,9.5,10\n2,Gadget,bad,cheap,1\n");
    fs::write(&data, &original).unwrap();

    stockroom_cmd(temp.path())
        .write_stdin("exit\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Malformed data"));

    assert_eq!(fs::read_to_string(&data).unwrap(), original);
}

#[test]
fn test_closed_stdin_still_saves() {
    let temp = TempDir::new().unwrap();

    stockroom_cmd(temp.path())
        .write_stdin("add\nBolts, assorted\nBox of 200\n4.25\n3\n")
        .assert()
        .success();

    assert_eq!(
        read_lines(&temp.path().join("db_products.csv")),
        vec![HEADER, "1,\"Bolts, assorted\",Box of 200,4.25,3"]
    );
}

#[test]
fn test_file_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    StockConfig {
        data_file: PathBuf::from("from-config.csv"),
        ..StockConfig::default()
    }
    .save(temp.path())
    .unwrap();

    stockroom_cmd(temp.path())
        .write_stdin("add\nA\na\n1\n1\nexit\n")
        .assert()
        .success();
    assert!(temp.path().join("from-config.csv").exists());

    stockroom_cmd(temp.path())
        .args(["--file", "from-flag.csv", "--no-clear"])
        .write_stdin("exit\n")
        .assert()
        .success();
    assert_eq!(read_lines(&temp.path().join("from-flag.csv")), vec![HEADER]);
    assert!(!temp.path().join("db_products.csv").exists());
}

#[test]
fn test_invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("stockroom.json"), "{ nope").unwrap();

    stockroom_cmd(temp.path())
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn test_bad_input_keeps_the_loop_alive() {
    let temp = TempDir::new().unwrap();

    stockroom_cmd(temp.path())
        .write_stdin("SELL\nview\nabc\nupdate\n4\nadd\nWidget\nx\nfree\n1\nEXIT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid action. Please try again."))
        .stdout(predicate::str::contains(
            "Invalid input. Please enter a valid product ID.",
        ))
        .stdout(predicate::str::contains("Product not found."))
        .stdout(predicate::str::contains("Invalid input. Invalid price"));

    assert_eq!(
        read_lines(&temp.path().join("db_products.csv")),
        vec![HEADER]
    );
}

#[test]
fn test_messages_are_not_repeated_when_piped() {
    let temp = TempDir::new().unwrap();

    let output = stockroom_cmd(temp.path())
        .write_stdin("sell\nexit\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Invalid action. Please try again.").count(), 1);
}

#[test]
fn test_save_failure_on_exit_is_reported() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    stockroom_cmd(temp.path())
        .args(["--file", "blocker/stock.csv"])
        .write_stdin("add\nWidget\nA small widget\n9.5\n10\nexit\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Product added successfully."))
        .stdout(predicate::str::contains("Exiting the program...").not())
        .stderr(predicate::str::starts_with("Error: "));

    assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
}
