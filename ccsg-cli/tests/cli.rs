//! End-to-end CLI tests driving the `ccsg` binary in a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn ccsg() -> Command {
    Command::cargo_bin("ccsg").unwrap()
}

#[test]
fn init_scaffolds_a_site_and_refuses_twice() {
    let tmp = tempdir().unwrap();

    ccsg()
        .current_dir(tmp.path())
        .args(["init", "mysite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized"));

    let seed = fs::read_to_string(tmp.path().join("mysite/content/index.md")).unwrap();
    assert_eq!(seed, "# Home\n\nWelcome to your new static site!");

    ccsg()
        .current_dir(tmp.path())
        .args(["init", "mysite"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn scaffold_then_build_produces_the_home_artifact() {
    let tmp = tempdir().unwrap();

    ccsg()
        .current_dir(tmp.path())
        .args(["init", "mysite"])
        .assert()
        .success();

    let site = tmp.path().join("mysite");

    ccsg()
        .current_dir(&site)
        .args(["new", "theme", "default"])
        .assert()
        .success();

    ccsg()
        .current_dir(&site)
        .args(["new", "page", "about"])
        .assert()
        .success();

    ccsg().current_dir(&site).arg("build").assert().success();

    let home = fs::read_to_string(site.join("public/index.html")).unwrap();
    assert!(home.contains("<title>Home</title>"));
    assert!(home.contains("<h1>Home</h1>"));
    assert!(home.contains("<p>Welcome to your new static site!</p>"));

    let about = fs::read_to_string(site.join("public/about.html")).unwrap();
    assert!(about.contains("<title>About</title>"));
}

#[test]
fn build_without_a_theme_reports_no_theme_found() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("content")).unwrap();
    fs::write(tmp.path().join("content/index.md"), "# Home").unwrap();

    ccsg()
        .current_dir(tmp.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no theme found"));
}

#[test]
fn build_with_two_themes_needs_an_explicit_pick() {
    let tmp = tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("content")).unwrap();
    fs::write(tmp.path().join("content/index.md"), "# Home\n\nhi").unwrap();
    for name in ["dark", "light"] {
        let dir = tmp.path().join("themes").join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("index.html"),
            format!("<!-- {name} --><title>{{{{ Title }}}}</title>{{{{ Content }}}}"),
        )
        .unwrap();
    }

    ccsg()
        .current_dir(tmp.path())
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("multiple themes"));

    ccsg()
        .current_dir(tmp.path())
        .args(["build", "--theme", "dark"])
        .assert()
        .success();

    let home = fs::read_to_string(tmp.path().join("public/index.html")).unwrap();
    assert!(home.contains("<!-- dark -->"));
}

#[test]
fn config_file_supplies_the_root() {
    let tmp = tempdir().unwrap();
    let site = tmp.path().join("site");
    fs::create_dir_all(site.join("content")).unwrap();
    fs::create_dir_all(site.join("themes/plain")).unwrap();
    fs::write(site.join("content/index.md"), "# Configured\n\nok").unwrap();
    fs::write(
        site.join("themes/plain/index.html"),
        "<title>{{ Title }}</title>{{ Content }}",
    )
    .unwrap();
    fs::write(tmp.path().join("ccsg.yml"), "root: site\n").unwrap();

    ccsg().current_dir(tmp.path()).arg("build").assert().success();

    let home = fs::read_to_string(site.join("public/index.html")).unwrap();
    assert!(home.contains("<title>Configured</title>"));
}
