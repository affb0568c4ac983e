use crate::helpers::prelude::*;

#[test]
fn it_leaves_everything_untouched_when_declined() {
    let template = create_template();
    let dir = tempdir()
        .file("Asteroids/notes.txt", "my notes")
        .file("Asteroids/Asteroids.sln", "hand edited")
        .build();
    let before = dir.snapshot("");

    binary()
        .arg_template(template.path())
        .arg_project("Asteroids", dir.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(
            predicates::str::contains("already exists. Continue? [Y/N]")
                .from_utf8()
                .and(predicates::str::contains("No project files were created, exiting").from_utf8())
                .and(predicates::str::contains("Creating project under").not().from_utf8()),
        );

    assert_eq!(dir.snapshot(""), before);
}

#[test]
fn it_reports_the_decline_whatever_the_log_filter() {
    let template = create_template();
    let dir = tempdir().dir("Asteroids").build();

    binary()
        .arg_template(template.path())
        .arg_project("Asteroids", dir.path())
        .env("RUST_LOG", "off")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("No project files were created, exiting").from_utf8());

    assert!(dir.snapshot("Asteroids").is_empty());
}

#[test]
fn it_declines_when_no_answer_is_given() {
    let template = create_template();
    let dir = tempdir().dir("Asteroids").build();

    binary()
        .arg_template(template.path())
        .arg_project("Asteroids", dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No project files were created").from_utf8());

    assert!(dir.snapshot("Asteroids").is_empty());
}

#[test]
fn it_only_accepts_y_as_confirmation() {
    let template = create_template();
    let dir = tempdir().dir("Asteroids").build();

    binary()
        .arg_template(template.path())
        .arg_project("Asteroids", dir.path())
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("No project files were created").from_utf8());

    assert!(!dir.exists("Asteroids/Asteroids.sln"));
}

#[test]
fn it_merges_into_the_existing_directory_when_confirmed() {
    let template = create_template();
    let dir = tempdir()
        .file("Asteroids/notes.txt", "my notes")
        .file("Asteroids/Source/Extra.cpp", "int extra;")
        .file("Asteroids/Config/Window.ini", "Title=Old")
        .build();

    binary()
        .arg_template(template.path())
        .arg_project("Asteroids", dir.path())
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Project created!").from_utf8());

    assert_eq!(dir.read("Asteroids/notes.txt"), "my notes");
    assert_eq!(dir.read("Asteroids/Source/Extra.cpp"), "int extra;");
    assert_eq!(dir.read("Asteroids/Config/Window.ini"), "Title=Minimal\n");
    assert!(dir.read("Asteroids/Source/Main.cpp").contains("AsteroidsGame"));
}

#[test]
fn it_skips_the_prompt_with_yes() {
    let template = create_template();
    let dir = tempdir()
        .file("Asteroids/notes.txt", "my notes")
        .build();

    binary()
        .arg_template(template.path())
        .arg_project("Asteroids", dir.path())
        .arg_yes()
        .assert()
        .success()
        .stdout(
            predicates::str::contains("already exists")
                .not()
                .from_utf8()
                .and(predicates::str::contains("Project created!").from_utf8()),
        );

    assert_eq!(dir.read("Asteroids/notes.txt"), "my notes");
    assert!(dir.exists("Asteroids/Project/Asteroids.vcxproj"));
}

#[test]
fn it_truncates_longer_existing_descriptors() {
    let template = create_template();
    let padding = "x".repeat(4096);
    let dir = tempdir()
        .file("Asteroids/Asteroids.sln", &padding)
        .file("Asteroids/Project/Asteroids.vcxproj", &padding)
        .build();

    binary()
        .arg_template(template.path())
        .arg_project("Asteroids", dir.path())
        .arg_yes()
        .assert()
        .success();

    assert_eq!(
        dir.read_bytes("Asteroids/Asteroids.sln"),
        b"Project(\"{8BC9}\") = \"Asteroids\", \"Project\\Asteroids.vcxproj\"\r\nEndProject\r\n"
    );
    assert_eq!(
        dir.read("Asteroids/Project/Asteroids.vcxproj"),
        indoc! {r#"
            <Project>
              <RootNamespace>Asteroids</RootNamespace>
              <TargetName>Asteroids_$(Configuration)</TargetName>
            </Project>
        "#}
    );
}

#[test]
fn it_is_idempotent_when_run_twice() {
    let template = create_template();
    let dir = tempdir().build();

    binary()
        .arg_template(template.path())
        .arg_project("Asteroids", dir.path())
        .assert()
        .success();
    let first = dir.snapshot("Asteroids");

    binary()
        .arg_template(template.path())
        .arg_project("Asteroids", dir.path())
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Project created!").from_utf8());

    assert_eq!(dir.snapshot("Asteroids"), first);
}
