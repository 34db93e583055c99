//! Shared testing harness for `devprompt` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with no config file.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create an environment whose config signs in as `user_id`.
    pub(crate) fn signed_in(user_id: &str) -> Self {
        let ctx = Self::new();
        ctx.write_config(&format!(
            "[identity]\nid = \"{}\"\n\n[history]\ndir = \"{}\"\n",
            user_id,
            ctx.history_dir().display()
        ));
        ctx
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Config file passed through `DEVPROMPT_CONFIG`.
    pub(crate) fn config_path(&self) -> PathBuf {
        self.root.path().join("config.toml")
    }

    pub(crate) fn history_dir(&self) -> PathBuf {
        self.root.path().join("history")
    }

    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Write a file relative to the work directory and return its path.
    pub(crate) fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Build a command for invoking the compiled `devprompt` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("devprompt").expect("Failed to locate devprompt binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("XDG_DATA_HOME", self.root.path().join("data"))
            .env("DEVPROMPT_CONFIG", self.config_path())
            .env_remove("DEVPROMPT_USER_ID")
            .env_remove("DEVPROMPT_USER_EMAIL")
            .env_remove("DEVPROMPT_LOG");
        cmd
    }

    /// Run `compose --save` on an answers file and return the printed entry id.
    pub(crate) fn save_prompt(&self, answers_file: &Path) -> String {
        let output = self
            .cli()
            .args(["compose", "--save", "--answers"])
            .arg(answers_file)
            .output()
            .expect("Failed to run devprompt");
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .trim()
            .rsplit(' ')
            .next()
            .expect("save output should end with the entry id")
            .to_string()
    }
}
