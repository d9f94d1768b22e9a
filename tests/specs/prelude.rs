//! Shared helpers for specs.

use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;

const ISOLATED_ENV: &[&str] = &[
    "SM_APP_DIR",
    "SM_ROOT_DIR",
    "SM_INTERNAL_DIR",
    "SM_DEBUG",
    "SM_LOG_RETENTION_DAYS",
    "SM_KEEP_DRIVER",
    "RUST_LOG",
    "COLOR",
];

/// `sm` with a clean environment and no application directory.
pub fn cli() -> Cli {
    Cli::new(assert_cmd::Command::cargo_bin("sm").expect("sm binary is built"))
}

/// Same as [`cli`], but runs a copy of the binary placed at `program`.
pub fn cli_at(program: &Path) -> Cli {
    Cli::new(assert_cmd::Command::new(program))
}

/// Path of the built `sm` binary
pub fn sm_binary() -> PathBuf {
    assert_cmd::cargo::cargo_bin("sm")
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    fn new(mut cmd: assert_cmd::Command) -> Self {
        for key in ISOLATED_ENV {
            cmd.env_remove(key);
        }
        cmd.env("NO_COLOR", "1").env("SM_LOG_MODE", "0");
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require exit code 0
    pub fn passes(mut self) -> Run {
        let run = Run { output: self.cmd.output().expect("sm runs") };
        assert!(run.output.status.success(), "expected success\n{}", run.describe());
        run
    }

    /// Run and require a non-zero exit code
    pub fn fails(mut self) -> Run {
        let run = Run { output: self.cmd.output().expect("sm runs") };
        assert!(!run.output.status.success(), "expected failure\n{}", run.describe());
        run
    }
}

pub struct Run {
    output: Output,
}

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout().contains(needle), "stdout missing {needle:?}\n{}", self.describe());
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout().contains(needle), "stdout has {needle:?}\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr().contains(needle), "stderr missing {needle:?}\n{}", self.describe());
        self
    }

    pub fn exit_code(self, code: i32) -> Self {
        assert_eq!(self.code(), Some(code), "{}", self.describe());
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout is JSON")
    }

    fn describe(&self) -> String {
        format!("--- stdout ---\n{}\n--- stderr ---\n{}", self.stdout(), self.stderr())
    }
}

/// Temporary application directory; the root lives at `<dir>/app`.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: TempDir::new().expect("tempdir") }
    }

    /// Project with the standard layout already created
    pub fn with_layout() -> Self {
        let project = Self::empty();
        for name in ["downloads", "logs", "scripts", "helpers"] {
            project.dir(name);
        }
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path under the application root
    pub fn root(&self, rel: &str) -> PathBuf {
        self.dir.path().join("app").join(rel)
    }

    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root(rel);
        std::fs::create_dir_all(path.parent().expect("has parent")).expect("create parent");
        std::fs::write(&path, contents).expect("write file");
        path
    }

    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.root(rel);
        std::fs::create_dir_all(&path).expect("create dir");
        path
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.root(rel).exists()
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.root(rel)).expect("read file")
    }

    /// `sm --app-dir <project>` with a clean environment
    pub fn sm(&self) -> Cli {
        let app_dir = self.path().to_string_lossy().into_owned();
        cli().args(&["--app-dir", &app_dir])
    }
}
