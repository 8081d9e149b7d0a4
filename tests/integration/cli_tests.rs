use super::fixture::TestFixture;
use crate::{
    assert_command_success, assert_file_contains, assert_not_exists, assert_stdout_contains,
};

#[test]
fn test_import_command_machine_output() {
    let fixture = TestFixture::new("test_import_command_machine_output");
    let source =
        fixture.add_source("【AI】Prompt Basics", &[("cover.webp", "i"), ("talk.mov", "v")]);

    let output = fixture.run_aimp(&[
        "-m",
        "import",
        source.to_str().unwrap(),
        "--category",
        "AI 人工智能",
        "--subcategory",
        "prompting",
    ]);
    assert_command_success!(output);

    let json = TestFixture::json(&output);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["request"]["slug"], "prompt-basics");
    assert_eq!(json["data"]["request"]["title"], "Prompt Basics");
    assert_eq!(json["data"]["request"]["author"], "Fixture Author");
    assert_eq!(json["data"]["metadata"]["status"], "created");
    assert_eq!(json["data"]["resources"]["video"], "talk.mov");

    let index = fixture.content_root.join("ai/prompting/prompt-basics/index.md");
    assert_file_contains!(&index, "title: Prompt Basics\n");
    assert_file_contains!(&index, "author: Fixture Author\n");
    assert_file_contains!(&index, "cover: cover.webp\nresources:\n  video: talk.mov\n");
}

#[test]
fn test_import_dry_run_human_output() {
    let fixture = TestFixture::new("test_import_dry_run_human_output");
    let source = fixture.add_source("Dry Notes", &[("cover.png", "i")]);

    let output = fixture.run_aimp(&[
        "--plain",
        "import",
        source.to_str().unwrap(),
        "-c",
        "finance",
        "--dry-run",
    ]);
    assert_command_success!(output);
    assert_stdout_contains!(output, "slug: dry-notes");
    assert_stdout_contains!(output, "metadata: preview");
    assert_not_exists!(&fixture.content_root);
}

#[test]
fn test_machine_error_is_structured() {
    let fixture = TestFixture::new("test_machine_error_is_structured");
    let source = fixture.add_source("anything", &[("a.mp3", "a")]);

    let output = fixture.run_aimp(&["-m", "import", source.to_str().unwrap(), "-c", "poetry"]);
    assert!(!output.success);
    assert_eq!(output.exit_code, 1);

    let json = TestFixture::json(&output);
    assert_eq!(json["error"], true);
    assert_eq!(json["code"], "UNKNOWN_CATEGORY");
    assert_eq!(json["numeric_code"], 201);
    assert!(json["suggestion"].as_str().unwrap().contains("politics"));
    assert_not_exists!(&fixture.content_root);
}

#[test]
fn test_list_after_import() {
    let fixture = TestFixture::new("test_list_after_import");
    let source = fixture.add_source("Listed Article", &[("cover.png", "i")]);
    let import = fixture.run_aimp(&["-q", "import", source.to_str().unwrap(), "-c", "startup"]);
    assert_command_success!(import);

    let output = fixture.run_aimp(&["-O", "tsv", "list", "--category", "创业"]);
    assert_command_success!(output);
    let lines: Vec<&str> = output.stdout.lines().collect();
    assert_eq!(lines[0], "date\tcategory\tsubcategory\tslug\ttitle");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("\tstartup\t\tlisted-article\tListed Article"));
}

#[test]
fn test_root_flag_and_env_override() {
    let fixture = TestFixture::new("test_root_flag_and_env_override");
    let source = fixture.add_source("Elsewhere", &[("a.mp3", "a")]);

    let output = fixture.run_aimp_with_env(
        &["-q", "import", source.to_str().unwrap(), "-c", "social"],
        &[("AIMP_CONTENT_ROOT", "env-posts")],
    );
    assert_command_success!(output);
    assert!(fixture.root.join("env-posts/social/elsewhere/index.md").is_file());

    let output = fixture.run_aimp_with_env(
        &["-q", "--root", "flag-posts", "import", source.to_str().unwrap(), "-c", "social"],
        &[("AIMP_CONTENT_ROOT", "env-posts")],
    );
    assert_command_success!(output);
    assert!(fixture.root.join("flag-posts/social/elsewhere/index.md").is_file());
}

#[test]
fn test_config_command_reports_effective_values() {
    let fixture = TestFixture::new("test_config_command_reports_effective_values");

    let output = fixture.run_aimp(&["config", "article.default_author"]);
    assert_command_success!(output);
    assert_eq!(output.stdout.trim(), "Fixture Author");

    let output = fixture.run_aimp(&["-m", "config"]);
    assert_command_success!(output);
    let json = TestFixture::json(&output);
    assert_eq!(json["data"]["config"]["content"]["root"], "posts");
}
