use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_row, first_read_only_id, init_test_db, saved_calculation_id, setup_test_db, tc};

#[test]
fn test_show_fresh_worksheet() {
    let db_path = setup_test_db("cli_show_fresh");
    init_test_db(&db_path);

    tc().args(["--db", &db_path, "--test", "show"])
        .assert()
        .success()
        .stdout(contains("Experiencia Específica"))
        .stdout(contains("Experiencia General"))
        .stdout(contains("0 años, 0 meses, 0 días"));
}

#[test]
fn test_add_specific_mirrors_into_general() {
    let db_path = setup_test_db("cli_add_specific");
    init_test_db(&db_path);

    tc().args([
        "--db",
        &db_path,
        "--test",
        "add",
        "-t",
        "s",
        "--start",
        "2020-01-01",
        "--end",
        "2020-01-10",
    ])
    .assert()
    .success()
    .stdout(contains("added to Experiencia Específica"))
    .stdout(contains("0 años, 0 meses, 10 días"))
    .stdout(contains("[Solo lectura]"));
}

#[test]
fn test_overlap_and_removal_scenario() {
    let db_path = setup_test_db("cli_overlap_removal");
    init_test_db(&db_path);

    let specific = add_row(&db_path, "specific", "2020-01-01", "2020-01-10");

    tc().args([
        "--db",
        &db_path,
        "--test",
        "add",
        "-t",
        "general",
        "--start",
        "2020-01-05",
        "--end",
        "2020-01-20",
    ])
    .assert()
    .success()
    .stdout(contains("0 años, 0 meses, 20 días"));

    tc().args(["--db", &db_path, "--test", "--yes", "del", &specific.to_string()])
        .assert()
        .success()
        .stdout(contains("Fila eliminada"))
        .stdout(contains("0 años, 0 meses, 16 días"))
        .stdout(contains("[Solo lectura]").not());
}

#[test]
fn test_read_only_row_is_refused() {
    let db_path = setup_test_db("cli_read_only");
    init_test_db(&db_path);

    add_row(&db_path, "s", "2020-01-01", "2020-01-10");

    let out = tc()
        .args(["--db", &db_path, "--test", "show"])
        .output()
        .expect("run show");
    let derived = first_read_only_id(&out.stdout, "Solo lectura");

    tc().args(["--db", &db_path, "--test", "--yes", "del", &derived.to_string()])
        .assert()
        .success()
        .stdout(contains("solo lectura"));

    tc().args([
        "--db",
        &db_path,
        "--test",
        "set",
        &derived.to_string(),
        "--start",
        "2019-01-01",
    ])
    .assert()
    .success()
    .stdout(contains("solo lectura"));

    tc().args(["--db", &db_path, "--test", "show"])
        .assert()
        .success()
        .stdout(contains("[Solo lectura]"))
        .stdout(contains("2019-01-01").not());
}

#[test]
fn test_removal_asks_first() {
    let db_path = setup_test_db("cli_removal_asks");
    init_test_db(&db_path);

    let id = add_row(&db_path, "g", "2021-03-01", "2021-03-30");

    tc().args(["--db", &db_path, "--test", "del", &id.to_string()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("¿Eliminar fila?"))
        .stdout(contains("Operación cancelada."));

    tc().args(["--db", &db_path, "--test", "del", &id.to_string()])
        .write_stdin("s\n")
        .assert()
        .success()
        .stdout(contains("Fila eliminada"))
        .stdout(contains("2021-03-01").not());
}

#[test]
fn test_set_updates_one_endpoint() {
    let db_path = setup_test_db("cli_set_endpoint");
    init_test_db(&db_path);

    let id = add_row(&db_path, "s", "2020-01-01", "2020-01-10");

    tc().args([
        "--db",
        &db_path,
        "--test",
        "set",
        &id.to_string(),
        "--end",
        "2020-01-31",
    ])
    .assert()
    .success()
    .stdout(contains("0 años, 1 meses, 1 días"));

    tc().args(["--db", &db_path, "--test", "set", &id.to_string(), "--clear-end"])
        .assert()
        .success()
        .stdout(contains("0 años, 0 meses, 0 días"));
}

#[test]
fn test_invalid_input_is_reported() {
    let db_path = setup_test_db("cli_invalid_input");
    init_test_db(&db_path);

    tc().args(["--db", &db_path, "--test", "add", "--start", "2020-13-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    tc().args(["--db", &db_path, "--test", "del", "12345"])
        .assert()
        .failure()
        .stderr(contains("No row with id 12345"));

    tc().args(["--db", &db_path, "--test", "lang", "fr"])
        .assert()
        .failure()
        .stderr(contains("Unsupported language"));
}

#[test]
fn test_clear_table() {
    let db_path = setup_test_db("cli_clear_table");
    init_test_db(&db_path);

    tc().args(["--db", &db_path, "--test", "--yes", "clear", "-t", "g"])
        .assert()
        .success()
        .stdout(contains("Nothing to clear"));

    add_row(&db_path, "s", "2020-01-01", "2020-01-10");

    tc().args(["--db", &db_path, "--test", "--yes", "clear", "-t", "specific"])
        .assert()
        .success()
        .stdout(contains("Campos limpiados"))
        .stdout(contains("[Solo lectura]").not());
}

#[test]
fn test_save_requires_valid_details() {
    let db_path = setup_test_db("cli_save_validation");
    init_test_db(&db_path);

    tc().args(["--db", &db_path, "--test", "--yes", "save"])
        .assert()
        .failure()
        .stderr(contains("Por favor, complete todos los campos."));

    tc().args([
        "--db",
        &db_path,
        "--test",
        "--yes",
        "save",
        "--registro",
        "abc",
        "--first-name",
        "Ana",
        "--last-name",
        "García",
    ])
    .assert()
    .failure()
    .stderr(contains("entero positivo"));

    tc().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No hay cálculos guardados."));
}

#[test]
fn test_save_list_edit_delete() {
    let db_path = setup_test_db("cli_save_edit_delete");
    init_test_db(&db_path);

    add_row(&db_path, "s", "2020-01-01", "2020-01-10");

    let out = tc()
        .args([
            "--db",
            &db_path,
            "--test",
            "--yes",
            "save",
            "--registro",
            "12345",
            "--first-name",
            "Ana",
            "--last-name",
            "García",
        ])
        .output()
        .expect("run save");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Cálculo guardado"));
    let id = saved_calculation_id(&out.stdout);

    tc().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("12345"))
        .stdout(contains("García"))
        .stdout(contains("0 años, 0 meses, 10 días"));

    // the worksheet was cleared by the save
    tc().args(["--db", &db_path, "--test", "show"])
        .assert()
        .success()
        .stdout(contains("2020-01-01").not());

    tc().args(["--db", &db_path, "--test", "edit", &id.to_string()])
        .assert()
        .success()
        .stdout(contains("Cálculo cargado"))
        .stdout(contains("Editando el cálculo de Ana García"))
        .stdout(contains("2020-01-01"));

    // saving while editing overwrites the same record
    tc().args(["--db", &db_path, "--test", "--yes", "save"])
        .assert()
        .success()
        .stdout(contains(format!("Calculation id: {}", id)));

    let out = tc()
        .args(["--db", &db_path, "--test", "list"])
        .output()
        .expect("run list");
    let listing = String::from_utf8_lossy(&out.stdout);
    assert_eq!(listing.matches("García").count(), 1);

    tc().args(["--db", &db_path, "--test", "--yes", "delete", &id.to_string()])
        .assert()
        .success()
        .stdout(contains("Eliminado"));

    tc().args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No hay cálculos guardados."));
}

#[test]
fn test_cancel_editing() {
    let db_path = setup_test_db("cli_cancel_editing");
    init_test_db(&db_path);

    tc().args(["--db", &db_path, "--test", "cancel"])
        .assert()
        .success()
        .stdout(contains("No calculation is being edited."));

    add_row(&db_path, "s", "2020-01-01", "2020-01-10");
    let out = tc()
        .args([
            "--db",
            &db_path,
            "--test",
            "--yes",
            "save",
            "--registro",
            "7",
            "--first-name",
            "Eva",
            "--last-name",
            "Ruiz",
        ])
        .output()
        .expect("run save");
    let id = saved_calculation_id(&out.stdout);

    tc().args(["--db", &db_path, "--test", "edit", &id.to_string()])
        .assert()
        .success();

    tc().args(["--db", &db_path, "--test", "cancel"])
        .assert()
        .success()
        .stdout(contains("Edición cancelada."))
        .stdout(contains("Editando").not());
}

#[test]
fn test_edit_unknown_calculation_fails() {
    let db_path = setup_test_db("cli_edit_unknown");
    init_test_db(&db_path);

    tc().args(["--db", &db_path, "--test", "edit", "99"])
        .assert()
        .failure()
        .stderr(contains("No saved calculation with id 99"));
}

#[test]
fn test_language_switch() {
    let db_path = setup_test_db("cli_language_switch");
    init_test_db(&db_path);

    add_row(&db_path, "s", "2020-01-01", "2020-01-10");

    tc().args(["--db", &db_path, "--test", "lang", "en"])
        .assert()
        .success();

    tc().args(["--db", &db_path, "--test", "show"])
        .assert()
        .success()
        .stdout(contains("Specific Experience"))
        .stdout(contains("0 years, 0 months, 10 days"))
        .stdout(contains("[Read only]"));
}

#[test]
fn test_log_records_actions() {
    let db_path = setup_test_db("cli_log_actions");
    init_test_db(&db_path);

    add_row(&db_path, "s", "2020-01-01", "2020-01-10");
    tc().args([
        "--db",
        &db_path,
        "--test",
        "--yes",
        "save",
        "--registro",
        "1",
        "--first-name",
        "Ana",
        "--last-name",
        "García",
    ])
    .assert()
    .success();

    tc().args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("Calculation saved"));
}

#[test]
fn test_db_check() {
    let db_path = setup_test_db("cli_db_check");
    init_test_db(&db_path);

    tc().args(["--db", &db_path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}
