use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn craftflow(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_craftflow"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("CRAFTFLOW_TEMPLATES_DIR")
        .env_remove("CRAFTFLOW_INSTALL_CMD")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ── Dispatch ────────────────────────────────────────────────────────

#[test]
fn no_arguments_fails() {
    let tmp = TempDir::new().unwrap();

    let out = craftflow(tmp.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("No command provided."));
}

#[test]
fn help_prints_usage() {
    let tmp = TempDir::new().unwrap();

    let out = craftflow(tmp.path(), &["help"]);

    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Usage: craftflow <command>"));
    assert!(text.contains("create <module-name>"));
}

#[test]
fn unknown_command_fails_with_usage() {
    let tmp = TempDir::new().unwrap();

    let out = craftflow(tmp.path(), &["frobnicate"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Unknown command: frobnicate"));
    assert!(stdout(&out).contains("Usage: craftflow <command>"));
}

#[test]
fn help_ignores_extra_arguments() {
    let tmp = TempDir::new().unwrap();

    let out = craftflow(tmp.path(), &["help", "x"]);

    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("Usage: craftflow <command>"));
}

#[test]
fn version_flag_succeeds() {
    let tmp = TempDir::new().unwrap();

    let out = craftflow(tmp.path(), &["--version"]);

    assert!(out.status.success());
    assert!(stdout(&out).contains(env!("CARGO_PKG_VERSION")));
}

// ── create ──────────────────────────────────────────────────────────

#[test]
fn create_without_name_fails_without_writes() {
    let tmp = TempDir::new().unwrap();

    let out = craftflow(tmp.path(), &["create"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("No module name provided."));
    assert!(!tmp.path().join("src/packages").exists());
}

#[test]
fn create_generates_module() {
    let tmp = TempDir::new().unwrap();

    let out = craftflow(tmp.path(), &["create", "task"]);

    assert!(out.status.success(), "{}", stderr(&out));
    let controller =
        fs::read_to_string(tmp.path().join("src/packages/task/controllers/index.ts")).unwrap();
    assert!(controller.contains("taskService"));
    assert!(stdout(&out).contains("Module \"task\" created successfully in src/packages/task"));
}

#[test]
fn create_ignores_arguments_after_name() {
    let tmp = TempDir::new().unwrap();

    let out = craftflow(tmp.path(), &["create", "task", "extra"]);

    assert!(out.status.success(), "{}", stderr(&out));
    assert!(tmp.path().join("src/packages/task/services/index.ts").is_file());
    assert!(!tmp.path().join("src/packages/extra").exists());
}

#[test]
fn create_accepts_hyphen_leading_name() {
    let tmp = TempDir::new().unwrap();

    let out = craftflow(tmp.path(), &["create", "-x"]);

    assert!(out.status.success(), "{}", stderr(&out));
    assert!(tmp.path().join("src/packages/-x/controllers/index.ts").is_file());
}

#[test]
fn create_absolute_name_fails() {
    let tmp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let target = elsewhere.path().join("evil");

    let out = craftflow(tmp.path(), &["create", target.to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Invalid module name"));
    assert!(!target.exists());
}

#[test]
fn create_existing_module_fails() {
    let tmp = TempDir::new().unwrap();
    assert!(craftflow(tmp.path(), &["create", "task"]).status.success());

    let out = craftflow(tmp.path(), &["create", "task"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Module \"task\" already exists"));
}

#[test]
fn create_with_templates_dir_flag() {
    let tmp = TempDir::new().unwrap();
    let templates = tmp.path().join("tpl");
    fs::create_dir_all(&templates).unwrap();
    for name in [
        "base-controller.ts",
        "base-dto.ts",
        "base-model.ts",
        "base-route.ts",
        "base-service.ts",
        "base-validation.ts",
    ] {
        fs::write(templates.join(name), "// Base base").unwrap();
    }

    let out = craftflow(
        tmp.path(),
        &["--templates-dir", templates.to_str().unwrap(), "create", "invoice"],
    );

    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(
        fs::read_to_string(tmp.path().join("src/packages/invoice/models/index.ts")).unwrap(),
        "// Invoice invoice"
    );
}

#[test]
fn create_with_missing_template_fails() {
    let tmp = TempDir::new().unwrap();
    let templates = tmp.path().join("empty");
    fs::create_dir_all(&templates).unwrap();

    let out = craftflow(
        tmp.path(),
        &["--templates-dir", templates.to_str().unwrap(), "create", "task"],
    );

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Template not found: base-controller.ts"));
}

// ── init ────────────────────────────────────────────────────────────

#[test]
fn init_skip_install_then_refuses_second_run() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("package.json"), "{\n  \"name\": \"app\"\n}").unwrap();

    let first = craftflow(tmp.path(), &["init", "--skip-install"]);
    assert!(first.status.success(), "{}", stderr(&first));
    assert!(tmp.path().join("src/app.ts").is_file());

    let second = craftflow(tmp.path(), &["init", "--skip-install"]);
    assert_eq!(second.status.code(), Some(1));
    assert!(stderr(&second).contains("Project already initialized"));
}

#[test]
fn init_without_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    let out = craftflow(tmp.path(), &["init", "--skip-install"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("package.json"));
}

#[cfg(unix)]
#[test]
fn init_installer_failure_exits_nonzero() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("package.json"), "{}").unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_craftflow"))
        .arg("init")
        .current_dir(tmp.path())
        .env("NO_COLOR", "1")
        .env("CRAFTFLOW_INSTALL_CMD", "false")
        .env_remove("CRAFTFLOW_TEMPLATES_DIR")
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("`false` exited with status 1"));
}
