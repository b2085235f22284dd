use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../web/public/en.json")
}

fn argyle() -> Command {
    let mut cmd = Command::cargo_bin("argyle").expect("bin");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn pages_lists_every_identifier() {
    argyle()
        .arg("pages")
        .assert()
        .success()
        .stdout("home\nshop\nabout\ncommunity\ncontact\n");
}

#[test]
fn check_summarizes_a_valid_document() {
    argyle()
        .arg("check")
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("3 features, 8 inventory items, 4 posts"))
        .stdout(predicate::str::contains("item 7: Dual Signature Booklet /10 (Call for price)"))
        .stdout(predicate::str::contains("post p-101: Marcus T."));
}

#[test]
fn check_fails_on_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");

    argyle()
        .arg("check")
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn check_rejects_duplicate_ids() {
    let dir = tempfile::tempdir().expect("tempdir");
    let raw = fs::read_to_string(fixture()).expect("fixture");
    let broken = raw.replacen("\"id\": 2,", "\"id\": 1,", 1);
    assert_ne!(raw, broken, "fixture should contain item 2");
    let path = dir.path().join("en.json");
    fs::write(&path, broken).expect("write");

    argyle()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate inventory item id '1'"));
}

#[test]
fn render_shop_emits_every_card() {
    let output = argyle()
        .args(["render", "shop", "--content"])
        .arg(fixture())
        .output()
        .expect("run");

    assert!(output.status.success());
    let html = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(html.matches("class=\"product-card\"").count(), 8);
}

#[test]
fn render_unknown_page_falls_back_to_home() {
    let output = argyle()
        .args(["render", "checkout", "--content"])
        .arg(fixture())
        .output()
        .expect("run");

    assert!(output.status.success());
    let html = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(html.matches("class=\"product-card\"").count(), 4);
    assert!(html.contains("class=\"hero\""));
}

#[test]
fn render_page_ids_are_case_sensitive() {
    let output = argyle()
        .args(["render", "Shop", "--content"])
        .arg(fixture())
        .output()
        .expect("run");

    assert!(output.status.success());
    let html = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(html.matches("class=\"product-card\"").count(), 4, "falls back to home");
}

#[test]
fn render_document_wraps_html() {
    argyle()
        .args(["render", "about", "--document", "--content"])
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<title>ARGYLE COLLECTIBLES | About Us</title>"));
}

#[test]
fn no_arguments_prints_help() {
    argyle().assert().failure().stderr(predicate::str::contains("Usage"));
}
