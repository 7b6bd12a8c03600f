#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// A scratch farm: its own config home and data directory under the system
/// temp dir, wiped on creation.
pub struct Farm {
    pub root: PathBuf,
}

impl Farm {
    pub fn new(name: &str) -> Self {
        let mut root = env::temp_dir();
        root.push(format!("herdbook_test_{name}"));
        fs::remove_dir_all(&root).ok();
        fs::create_dir_all(&root).expect("create farm root");
        Self { root }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    pub fn data_dir_str(&self) -> String {
        self.data_dir().to_string_lossy().to_string()
    }

    /// Binary with an isolated config home and the farm data dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("herdbook");
        cmd.env("HERDBOOK_HOME", self.root.join("home"))
            .env_remove("HERDBOOK_USER")
            .env_remove("HERDBOOK_PASSWORD")
            .args(["--data-dir", &self.data_dir_str()]);
        cmd
    }

    pub fn as_user(&self, user: &str, password: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--user", user, "--password", password]);
        cmd
    }

    pub fn admin(&self) -> Command {
        self.as_user("admin", "admin")
    }

    pub fn init(&self) {
        self.cmd().args(["--test", "init"]).assert().success();
    }

    pub fn read(&self, file: &str) -> String {
        fs::read_to_string(self.data_dir().join(file)).expect("read data file")
    }

    /// Initialized farm with one worker account `joko` / `pw`.
    pub fn with_worker(name: &str) -> Self {
        let farm = Farm::new(name);
        farm.init();
        farm.admin()
            .args(["user", "add", "joko", "--new-password", "pw"])
            .assert()
            .success();
        farm
    }

    pub fn add_animal(&self, species: &str, born: &str, weight: &str, pen: &str) {
        self.admin()
            .args([
                "livestock",
                "add",
                "--species",
                species,
                "--born",
                born,
                "--weight",
                weight,
                "--pen",
                pen,
            ])
            .assert()
            .success();
    }

    pub fn out_path(&self, name: &str) -> String {
        self.root.join(name).to_string_lossy().to_string()
    }
}

/// Unique scratch directory for library-level store tests.
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("herdbook_store_{name}"));
    fs::remove_dir_all(&path).ok();
    path
}
