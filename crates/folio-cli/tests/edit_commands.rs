// SPDX-License-Identifier: Apache-2.0
// © Folio Contributors <https://github.com/folio-dev/folio>
//! End-to-end checks of the editing subcommands against an isolated
//! config dir. Every collection must be editable in place by id (or by
//! position for skills) once edit mode is unlocked.
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn folio(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env("FOLIO_CONFIG_DIR", dir.path());
    cmd
}

fn unlock(dir: &tempfile::TempDir) {
    folio(dir)
        .args(["unlock", "portfolio2024"])
        .assert()
        .success();
}

#[test]
fn edit_work_rewrites_the_item_in_place() {
    let dir = tempfile::tempdir().unwrap();
    unlock(&dir);

    // the default document ships an ongoing work with id "1"
    folio(&dir)
        .args(["edit-work", "1", "--title", "Rebuilt Portfolio", "--status", "testing"])
        .assert()
        .success();

    folio(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rebuilt Portfolio"))
        .stdout(predicate::str::contains("AI-Powered Task Manager"));
}

#[test]
fn edit_cert_rewrites_the_item_in_place() {
    let dir = tempfile::tempdir().unwrap();
    unlock(&dir);

    folio(&dir)
        .args(["edit-cert", "2", "--issuer", "Linux Foundation"])
        .assert()
        .success();

    folio(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Linux Foundation"))
        // the sibling certification is untouched
        .stdout(predicate::str::contains("Amazon Web Services"));
}

#[test]
fn editing_an_unknown_id_fails_without_changing_the_document() {
    let dir = tempfile::tempdir().unwrap();
    unlock(&dir);

    folio(&dir)
        .args(["edit-work", "404", "--title", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no ongoing work with id 404"));

    folio(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Modern Portfolio Website"));
}

#[test]
fn add_cert_defaults_the_date_to_today() {
    let dir = tempfile::tempdir().unwrap();
    unlock(&dir);

    folio(&dir).arg("add-cert").assert().success();

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    folio(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("New Certification"))
        .stdout(predicate::str::contains(today));
}

#[test]
fn mutating_commands_are_refused_while_locked() {
    let dir = tempfile::tempdir().unwrap();

    folio(&dir)
        .args(["edit-work", "1", "--title", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("edit mode is locked"));
}
