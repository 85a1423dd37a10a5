use super::{TEMPLATES, base_dir, execute_jsrender};

use std::fs;

#[test]
fn test_version() {
    let dir = base_dir(&[]);
    let (stdout, _stderr, success) = execute_jsrender(dir.path(), &["--version"]);
    assert!(success);
    assert!(stdout.starts_with("jsrender "));
}

#[test]
fn test_unknown_arg() {
    let dir = base_dir(&[]);
    let (_stdout, stderr, success) = execute_jsrender(dir.path(), &["--render-all"]);
    assert!(!success);
    assert!(stderr.contains("--render-all"));
}

#[test]
fn test_base_dir_arg() {
    let dir = base_dir(&TEMPLATES);
    fs::create_dir(dir.path().join("dist")).unwrap();
    let cwd = base_dir(&[]);

    let base = dir.path().to_str().unwrap();
    let (stdout, _stderr, success) = execute_jsrender(cwd.path(), &["--base-dir", base]);
    assert!(success);
    assert!(stdout.contains(&format!("{base}/dist/post-events.js")));
    assert!(dir.path().join("dist/create-owner.js").is_file());
    assert!(!cwd.path().join("dist").exists());
}

#[test]
fn test_output_dir_arg() {
    let dir = base_dir(&TEMPLATES);
    fs::create_dir(dir.path().join("build")).unwrap();

    let (_stdout, _stderr, success) = execute_jsrender(dir.path(), &["-o", "build"]);
    assert!(success);
    assert_eq!(
        fs::read_to_string(dir.path().join("build/post-events.js")).unwrap(),
        "var req=1;var auth=1;"
    );
}

#[test]
fn test_config_arg() {
    let dir = base_dir(&TEMPLATES);
    fs::write(
        dir.path().join("jsrender.yml"),
        "outputs:\n  - create-owner.js\ncreate_dirs_is_not_a_key: true\n",
    )
    .unwrap();

    let (stdout, _stderr, success) =
        execute_jsrender(dir.path(), &["--config", "jsrender.yml", "-p"]);
    assert!(!success);
    assert!(stdout.contains("unknown field"));

    fs::write(
        dir.path().join("jsrender.yml"),
        "outputs:\n  - create-owner.js\n",
    )
    .unwrap();

    let (_stdout, _stderr, success) =
        execute_jsrender(dir.path(), &["--config", "jsrender.yml", "-p"]);
    assert!(success);
    let dist = dir.path().join("dist");
    assert!(dist.join("create-owner.js").is_file());
    assert!(!dist.join("post-events.js").exists());
}

#[test]
fn test_check_arg() {
    let dir = base_dir(&TEMPLATES);

    let (stdout, _stderr, success) = execute_jsrender(dir.path(), &["--check"]);
    assert!(success);
    assert!(stdout.contains("check: "));
    assert!(stdout.contains("create-object.js"));
    assert!(!dir.path().join("dist").exists());
}

#[test]
fn test_verbose_arg() {
    let dir = base_dir(&TEMPLATES);

    let (stdout, _stderr, success) = execute_jsrender(dir.path(), &["--check", "-vv"]);
    assert!(success);
    assert!(stdout.contains("start logger"));
    assert!(stdout.contains("rendering fragment require.js.j2"));
}
