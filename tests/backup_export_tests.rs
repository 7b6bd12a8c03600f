use flate2::read::GzDecoder;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs::{self, File};
use std::path::Path;

mod common;
use common::Farm;

fn seeded(name: &str) -> Farm {
    let farm = Farm::new(name);
    farm.init();
    farm.add_animal("Bali", "2023-04-01", "300", "K1");
    farm.add_animal("Limousin", "2022-01-15", "150.5", "K2");
    farm
}

#[test]
fn test_plain_backup_copies_every_file() {
    let farm = seeded("backup_plain");
    let dest = farm.out_path("copy");

    farm.admin()
        .args(["backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let copy = fs::read_to_string(Path::new(&dest).join("livestock.csv")).expect("copy");
    assert_eq!(copy, farm.read("livestock.csv"));
    assert!(Path::new(&dest).join("users.csv").exists());
}

#[test]
fn test_tar_gz_backup_contains_collections() {
    let farm = seeded("backup_tar");
    let dest = farm.out_path("farm");

    farm.admin()
        .args(["backup", "--file", &dest, "--compress", "--archive", "tar-gz"])
        .assert()
        .success();

    let archive = format!("{dest}.tar.gz");
    let file = File::open(&archive).expect("archive exists");
    let mut tar = tar::Archive::new(GzDecoder::new(file));
    let names: Vec<String> = tar
        .entries()
        .expect("entries")
        .map(|e| {
            e.expect("entry")
                .path()
                .expect("path")
                .to_string_lossy()
                .to_string()
        })
        .collect();

    assert!(names.contains(&"livestock.csv".to_string()));
    assert!(names.contains(&"activity_log.csv".to_string()));
}

#[test]
fn test_zip_backup_contains_collections() {
    let farm = seeded("backup_zip");
    let dest = farm.out_path("farm.zip");

    farm.admin()
        .args(["backup", "--file", &dest, "--compress", "--archive", "zip"])
        .assert()
        .success();

    let file = File::open(&dest).expect("zip exists");
    let zip = zip::ZipArchive::new(file).expect("valid zip");
    let names: Vec<&str> = zip.file_names().collect();
    assert!(names.contains(&"livestock.csv"));
    assert!(names.contains(&"users.csv"));
}

#[test]
fn test_backup_requires_admin() {
    let farm = Farm::with_worker("backup_worker");
    let dest = farm.out_path("copy");

    farm.as_user("joko", "pw")
        .args(["backup", "--file", &dest])
        .assert()
        .failure()
        .stderr(contains("not allowed"));

    assert!(!Path::new(&dest).exists());
}

#[test]
fn test_export_livestock_csv_sorted() {
    let farm = seeded("export_csv");
    let out = farm.out_path("herd.csv");

    farm.admin()
        .args(["export", "--file", &out, "--by", "weight"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("export");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,species,birth_date,current_weight,health_status,pen_id")
    );
    assert!(lines.next().expect("first row").starts_with("S002,"));
    assert!(lines.next().expect("second row").starts_with("S001,"));
}

#[test]
fn test_export_livestock_json() {
    let farm = seeded("export_json");
    let out = farm.out_path("herd.json");

    farm.admin()
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("export")).expect("valid json");
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "S001");
    assert_eq!(rows[1]["current_weight"], "150.5");
    assert_eq!(rows[1]["health_status"], "Healthy");
}

#[test]
fn test_export_requires_absolute_path() {
    let farm = seeded("export_relative");

    farm.admin()
        .args(["export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_of_empty_collection_writes_nothing() {
    let farm = Farm::new("export_empty");
    farm.init();
    let out = farm.out_path("feeding.csv");

    farm.admin()
        .args(["export", "--target", "feeding", "--file", &out])
        .assert()
        .success()
        .stderr(contains("No records to export"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_empty_export_does_not_ask_to_overwrite() {
    let farm = Farm::new("export_empty_existing");
    farm.init();
    let out = farm.out_path("feeding.csv");
    fs::write(&out, "keep me\n").expect("existing file");

    // no --force and no stdin: a confirmation prompt would cancel the command
    farm.admin()
        .args(["export", "--target", "feeding", "--file", &out])
        .assert()
        .success()
        .stderr(contains("No records to export"))
        .stderr(contains("already exists").not());

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me\n");
}
