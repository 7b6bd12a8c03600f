use predicates::str::contains;
use std::fs;

mod common;
use common::Farm;

#[test]
fn test_init_creates_every_data_file() {
    let farm = Farm::new("init");
    farm.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    for file in [
        "users.csv",
        "livestock.csv",
        "health_records.csv",
        "feeding_log.csv",
        "activity_log.csv",
    ] {
        assert!(farm.data_dir().join(file).exists(), "{file} missing");
    }

    assert!(farm.read("users.csv").contains("admin,admin,admin"));
    assert_eq!(
        farm.read("livestock.csv"),
        "id,species,birth_date,current_weight,health_status,pen_id\n"
    );
}

#[test]
fn test_admin_adds_and_lists_livestock() {
    let farm = Farm::new("add_list");
    farm.init();

    farm.admin()
        .args([
            "livestock",
            "add",
            "--species",
            "Bali",
            "--born",
            "2023-04-01",
            "--weight",
            "250.5",
            "--pen",
            "k1",
        ])
        .assert()
        .success()
        .stdout(contains("Livestock S001 added."));

    assert!(
        farm.read("livestock.csv")
            .contains("S001,Bali,2023-04-01,250.5,Healthy,K1")
    );

    farm.admin()
        .args(["livestock", "list"])
        .assert()
        .success()
        .stdout(contains("S001"))
        .stdout(contains("Bali"));
}

#[test]
fn test_invalid_birth_date_is_rejected() {
    let farm = Farm::new("bad_date");
    farm.init();

    farm.admin()
        .args([
            "livestock",
            "add",
            "--species",
            "Bali",
            "--born",
            "01/04/2023",
            "--weight",
            "250",
            "--pen",
            "K1",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    assert_eq!(farm.read("livestock.csv").lines().count(), 1);
}

#[test]
fn test_negative_weight_is_rejected_by_the_parser() {
    let farm = Farm::new("bad_weight");
    farm.init();
    farm.add_animal("Bali", "2023-04-01", "250", "K1");

    farm.admin().args(["weigh", "S001", "--", "-5"]).assert().failure();
    assert!(farm.read("livestock.csv").contains(",250,"));
}

#[test]
fn test_wrong_password_is_refused() {
    let farm = Farm::new("wrong_password");
    farm.init();

    farm.as_user("admin", "nope")
        .args(["livestock", "list"])
        .assert()
        .failure()
        .stderr(contains("Wrong username or password"));
}

#[test]
fn test_worker_cannot_run_admin_commands() {
    let farm = Farm::with_worker("worker_denied");
    farm.add_animal("Bali", "2023-04-01", "250", "K1");

    for args in [
        vec!["report"],
        vec!["livestock", "delete", "S001", "--yes"],
        vec!["health", "history", "S001"],
        vec!["user", "list"],
        vec!["log", "--print"],
    ] {
        farm.as_user("joko", "pw")
            .args(&args)
            .assert()
            .failure()
            .stderr(contains("not allowed"));
    }

    assert!(farm.read("livestock.csv").contains("S001"));
}

#[test]
fn test_worker_health_check_marks_animal_sick() {
    let farm = Farm::with_worker("health_cascade");
    farm.add_animal("Bali", "2023-04-01", "250", "K1");

    farm.as_user("joko", "pw")
        .args(["health", "record", "s001", "--symptoms", "coughing", "--action", "isolated"])
        .assert()
        .success()
        .stdout(contains("Health record H001 for S001 saved."))
        .stdout(contains("set to 'Sick'"));

    assert!(farm.read("livestock.csv").contains(",Sick,K1"));
    assert!(farm.read("health_records.csv").contains("H001,S001,"));
    assert!(farm.read("health_records.csv").contains(",coughing,isolated,joko"));

    farm.admin()
        .args(["health", "history", "S001"])
        .assert()
        .success()
        .stdout(contains("coughing"));
}

#[test]
fn test_routine_check_keeps_status() {
    let farm = Farm::with_worker("routine_check");
    farm.add_animal("Bali", "2023-04-01", "250", "K1");

    farm.as_user("joko", "pw")
        .args(["health", "record", "S001"])
        .assert()
        .success();

    assert!(farm.read("livestock.csv").contains(",Healthy,K1"));
    assert!(farm.read("health_records.csv").contains("Routine checkup"));
}

#[test]
fn test_health_check_for_unknown_animal_warns() {
    let farm = Farm::with_worker("health_unknown");

    farm.as_user("joko", "pw")
        .args(["health", "record", "S404", "--symptoms", "fever"])
        .assert()
        .success()
        .stderr(contains("livestock S404 not found"));

    assert!(farm.read("health_records.csv").contains("H001,S404,"));
}

#[test]
fn test_worker_weighs_and_feeds() {
    let farm = Farm::with_worker("weigh_feed");
    farm.add_animal("Bali", "2023-04-01", "250", "K1");

    farm.as_user("joko", "pw")
        .args(["weigh", "S001", "262.5"])
        .assert()
        .success()
        .stdout(contains("262.5 kg"));
    assert!(farm.read("livestock.csv").contains(",262.5,"));

    farm.as_user("joko", "pw")
        .args(["feed", "record", "--pen", "k1", "--feed-type", "hay", "--amount", "12.5"])
        .assert()
        .success()
        .stdout(contains("Feeding F001 for pen K1 saved."));
    assert!(farm.read("feeding_log.csv").contains("F001,K1,"));
    assert!(farm.read("feeding_log.csv").contains(",hay,12.5,joko"));

    farm.admin()
        .args(["feed", "list", "--pen", "K1"])
        .assert()
        .success()
        .stdout(contains("F001"));
}

#[test]
fn test_weigh_unknown_animal_fails_without_rewrite() {
    let farm = Farm::with_worker("weigh_unknown");
    farm.add_animal("Bali", "2023-04-01", "250", "K1");
    let before = farm.read("livestock.csv");

    farm.as_user("joko", "pw")
        .args(["weigh", "S999", "100"])
        .assert()
        .failure()
        .stderr(contains("'S999' not found"));

    assert_eq!(farm.read("livestock.csv"), before);
}

#[test]
fn test_delete_missing_animal_leaves_file_identical() {
    let farm = Farm::new("delete_missing");
    farm.init();
    farm.add_animal("Bali", "2023-04-01", "250", "K1");
    let before = fs::read(farm.data_dir().join("livestock.csv")).expect("read");

    farm.admin()
        .args(["livestock", "delete", "S999", "--yes"])
        .assert()
        .failure()
        .stderr(contains("not found"));

    let after = fs::read(farm.data_dir().join("livestock.csv")).expect("read");
    assert_eq!(before, after);
}

#[test]
fn test_delete_removes_the_animal() {
    let farm = Farm::new("delete_ok");
    farm.init();
    farm.add_animal("Bali", "2023-04-01", "250", "K1");
    farm.add_animal("Limousin", "2022-04-01", "300", "K2");

    farm.admin()
        .args(["livestock", "delete", "s001", "--yes"])
        .assert()
        .success()
        .stdout(contains("S001 has been deleted"));

    let content = farm.read("livestock.csv");
    assert!(!content.contains("S001"));
    assert!(content.contains("S002"));
}

#[test]
fn test_edit_changes_pen_and_status() {
    let farm = Farm::new("edit");
    farm.init();
    farm.add_animal("Bali", "2023-04-01", "250", "K1");

    farm.admin()
        .args(["livestock", "edit", "S001", "--pen", "k7", "--status", "sick"])
        .assert()
        .success();

    assert!(farm.read("livestock.csv").contains("S001,Bali,2023-04-01,250,Sick,K7"));
}

#[test]
fn test_report_orders_by_weight() {
    let farm = Farm::new("report");
    farm.init();
    farm.add_animal("Bali", "2023-04-01", "300", "K1");
    farm.add_animal("Bali", "2023-04-01", "100", "K1");
    farm.add_animal("Bali", "2023-04-01", "200", "K1");

    let output = farm
        .admin()
        .args(["report", "--by", "weight", "--desc"])
        .output()
        .expect("run report");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let pos = |id: &str| stdout.find(id).expect("id in report");
    assert!(pos("S001") < pos("S003"));
    assert!(pos("S003") < pos("S002"));

    let output = farm.admin().args(["report"]).output().expect("run report");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let pos = |id: &str| stdout.find(id).expect("id in report");
    assert!(pos("S002") < pos("S003"));
    assert!(pos("S003") < pos("S001"));
}

#[test]
fn test_duplicate_user_is_refused() {
    let farm = Farm::with_worker("duplicate_user");

    farm.admin()
        .args(["user", "add", "joko", "--new-password", "other"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    assert_eq!(farm.read("users.csv").matches("joko").count(), 1);

    farm.admin()
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(contains("joko"))
        .stdout(contains("worker"));
}

#[test]
fn test_activity_log_records_mutations() {
    let farm = Farm::with_worker("activity");
    farm.add_animal("Bali", "2023-04-01", "250", "K1");

    farm.admin()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Activity log"))
        .stdout(contains("register"))
        .stdout(contains("S001"));

    let log = farm.read("activity_log.csv");
    assert!(log.contains(",admin,add,S001,"));
    assert!(log.contains(",system,init,"));
}

#[test]
fn test_missing_files_are_recreated_on_demand() {
    let farm = Farm::new("recreate");
    farm.init();
    fs::remove_file(farm.data_dir().join("feeding_log.csv")).expect("remove");

    farm.admin()
        .args(["livestock", "list"])
        .assert()
        .success();

    assert_eq!(
        farm.read("feeding_log.csv"),
        "id,pen_id,date,feed_type,amount_kg,recorded_by\n"
    );
}

#[test]
fn test_config_print_shows_defaults() {
    let farm = Farm::new("config_print");

    farm.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("report_field: weight"))
        .stdout(contains("report_descending: false"))
        .stdout(contains(farm.data_dir_str()));
}
