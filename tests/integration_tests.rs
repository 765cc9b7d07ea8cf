use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, rsl, setup_test_db};

#[test]
fn test_list_all_expenses() {
    let db_path = setup_test_db("list_all");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Found 3 expense(s):"))
        .stdout(contains("2025-10-20"))
        .stdout(contains("2025-10-25"))
        .stdout(contains("2025-10-30"))
        .stdout(contains("Groceries"))
        .stdout(contains("Alice"))
        .stdout(contains("Bob"));
}

#[test]
fn test_list_orders_most_recent_first() {
    let db_path = setup_test_db("list_order");
    init_db_with_data(&db_path);

    let output = rsl()
        .args(["--db", &db_path, "list"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8(output.stdout).expect("utf8");

    let pos_30 = stdout.find("2025-10-30").expect("missing 2025-10-30");
    let pos_25 = stdout.find("2025-10-25").expect("missing 2025-10-25");
    let pos_20 = stdout.find("2025-10-20").expect("missing 2025-10-20");

    assert!(pos_30 < pos_25);
    assert!(pos_25 < pos_20);
}

#[test]
fn test_list_filter_date_range() {
    let db_path = setup_test_db("filter_date");
    init_db_with_data(&db_path);

    rsl()
        .args([
            "--db",
            &db_path,
            "list",
            "--from",
            "2025-10-22",
            "--to",
            "2025-10-28",
        ])
        .assert()
        .success()
        .stdout(contains("2025-10-25"))
        .stdout(contains("2025-10-20").not())
        .stdout(contains("2025-10-30").not());
}

#[test]
fn test_list_filter_amount_range() {
    let db_path = setup_test_db("filter_amount");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "list", "--min", "25", "--max", "45"])
        .assert()
        .success()
        .stdout(contains("Groceries"))
        .stdout(contains("Bus pass").not())
        .stdout(contains("Dinner out").not());
}

#[test]
fn test_list_filter_combines_predicates() {
    let db_path = setup_test_db("filter_combined");
    init_db_with_data(&db_path);

    // Date range alone matches 2025-10-25 and 2025-10-30; adding the
    // category narrows it to the Food row only.
    rsl()
        .args([
            "--db",
            &db_path,
            "list",
            "--from",
            "2025-10-22",
            "--category",
            "Food",
        ])
        .assert()
        .success()
        .stdout(contains("Dinner out"))
        .stdout(contains("Bus pass").not())
        .stdout(contains("Groceries").not());
}

#[test]
fn test_list_filter_category_case_insensitive() {
    let db_path = setup_test_db("filter_cat_case");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "list", "--category", "food"])
        .assert()
        .success()
        .stdout(contains("Groceries"))
        .stdout(contains("Dinner out"))
        .stdout(contains("Bus pass").not());
}

#[test]
fn test_list_filter_unknown_category_yields_nothing() {
    let db_path = setup_test_db("filter_cat_unknown");
    init_db_with_data(&db_path);

    // An unknown category must give an empty result, never "all expenses".
    rsl()
        .args(["--db", &db_path, "list", "--category", "Ghost"])
        .assert()
        .success()
        .stdout(contains("No expenses found."))
        .stdout(contains("2025-10-20").not());
}

#[test]
fn test_list_filter_by_user_id() {
    let db_path = setup_test_db("filter_user");
    init_db_with_data(&db_path);

    // Alice was created first -> id 1
    rsl()
        .args(["--db", &db_path, "list", "--user-id", "1"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob").not());
}

#[test]
fn test_list_rejects_non_positive_user_id() {
    let db_path = setup_test_db("filter_user_invalid");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "list", "--user-id", "0"])
        .assert()
        .failure()
        .stderr(contains("User id must be positive"));
}

#[test]
fn test_list_rejects_inverted_date_range() {
    let db_path = setup_test_db("filter_date_inverted");
    init_db_with_data(&db_path);

    rsl()
        .args([
            "--db",
            &db_path,
            "list",
            "--from",
            "2025-10-30",
            "--to",
            "2025-10-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date range"));
}

#[test]
fn test_add_rejects_invalid_date() {
    let db_path = setup_test_db("add_bad_date");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // 2025-02-30 is shape-valid but not calendar-valid
    rsl()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-02-30",
            "Phantom",
            "10",
            "--category",
            "Food",
            "--user",
            "Alice",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_add_rejects_non_positive_amount() {
    let db_path = setup_test_db("add_bad_amount");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsl()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-10-20",
            "Nothing",
            "0",
            "--category",
            "Food",
            "--user",
            "Alice",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn test_add_rejects_blank_title() {
    let db_path = setup_test_db("add_blank_title");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsl()
        .args([
            "--db", &db_path, "add", "2025-10-20", "   ", "10", "--category", "Food", "--user",
            "Alice",
        ])
        .assert()
        .failure()
        .stderr(contains("Title cannot be empty"));
}

#[test]
fn test_add_creates_user_and_category_on_first_use() {
    let db_path = setup_test_db("add_creates");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsl()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-11-02",
            "Ski pass",
            "75.50",
            "--category",
            "Winter sports",
            "--user",
            "Carol",
        ])
        .assert()
        .success()
        .stdout(contains("Created new user: Carol"))
        .stdout(contains("Created new category: Winter sports"))
        .stdout(contains("Expense recorded with ID: 1"));

    // Both must now be listed, and the expense row shows the joined names.
    rsl()
        .args(["--db", &db_path, "users"])
        .assert()
        .success()
        .stdout(contains("Carol"));

    rsl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Winter sports"))
        .stdout(contains("Carol"))
        .stdout(contains("$75.50"));
}

#[test]
fn test_summary_totals_and_breakdown() {
    let db_path = setup_test_db("summary_totals");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Total Expenses: $100.00"))
        .stdout(contains("Number of Expenses: 3"))
        .stdout(contains("Alice's expenses"))
        .stdout(contains("Bob's expenses"))
        .stdout(contains("Food: $80.00 (80.0%)"))
        .stdout(contains("Transportation: $20.00 (20.0%)"));
}

#[test]
fn test_summary_respects_filters() {
    let db_path = setup_test_db("summary_filtered");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "summary", "--category", "food"])
        .assert()
        .success()
        .stdout(contains("Total Expenses: $80.00"))
        .stdout(contains("Number of Expenses: 2"))
        .stdout(contains("Bob's expenses").not());
}

#[test]
fn test_summary_empty_has_no_breakdown() {
    let db_path = setup_test_db("summary_empty");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // No expenses at all: totals are zero and the percentage section is
    // omitted entirely.
    rsl()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Total Expenses: $0.00"))
        .stdout(contains("Number of Expenses: 0"))
        .stdout(contains("CATEGORY BREAKDOWN").not())
        .stdout(contains("NaN").not());
}

#[test]
fn test_categories_seeded_at_init() {
    let db_path = setup_test_db("categories_seeded");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "categories"])
        .assert()
        .success()
        .stdout(contains("Food"))
        .stdout(contains("Transportation"))
        .stdout(contains("Entertainment"))
        .stdout(contains("Utilities"))
        .stdout(contains("Healthcare"))
        .stdout(contains("Shopping"))
        .stdout(contains("Other"));
}

#[test]
fn test_users_add_and_list() {
    let db_path = setup_test_db("users_add");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "users", "--add", "Dave"])
        .assert()
        .success()
        .stdout(contains("Created user 'Dave' with id 1"));

    rsl()
        .args(["--db", &db_path, "users"])
        .assert()
        .success()
        .stdout(contains("Dave"));
}

#[test]
fn test_db_info_reports_counts() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    rsl()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Expenses:"))
        .stdout(contains("Total recorded:"))
        .stdout(contains("100.00"));
}

#[test]
fn test_db_check_passes_on_fresh_db() {
    let db_path = setup_test_db("db_check");

    rsl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rsl()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."));
}
