//! Integration tests for the `xeno` CLI binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn xeno() -> Command {
    let mut cmd = Command::cargo_bin("xeno").unwrap();
    cmd.args(["--seed", "42"]);
    cmd
}

#[test]
fn greets_and_exits_cleanly() {
    xeno()
        .write_stdin("Kael\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Xeno RPG!"))
        .stdout(predicate::str::contains("Hello, Kael! Let's start the game."))
        .stdout(predicate::str::contains("Current Area: Hometown"))
        .stdout(predicate::str::contains("Game Over!"));
}

#[test]
fn eof_without_exit_still_terminates_cleanly() {
    xeno().write_stdin("Kael\n").assert().success();
}

#[test]
fn blank_lines_are_skipped() {
    xeno()
        .write_stdin("\n\nKael\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, Kael!"));
}

#[test]
fn unknown_destination_warns_and_keeps_playing() {
    xeno()
        .write_stdin("Kael\nAtlantis\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unknown area 'Atlantis'. Moving to a random area instead.",
        ));
}

#[test]
fn moving_into_barren_offers_combat() {
    xeno()
        .write_stdin("Kael\nBarren\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "NPC: Scorpion King, Role: Boss, Health: 80",
        ))
        .stdout(predicate::str::contains("1. Attack"));
}

#[test]
fn rejects_a_malformed_seed() {
    let mut cmd = Command::cargo_bin("xeno").unwrap();
    cmd.args(["--seed", "not-a-number"]).assert().failure();
}
