use clientdir_core::db::migrations::latest_version;
use clientdir_core::db::open_db_in_memory;
use clientdir_core::{ClientRepository, NewClient, RepoError, SqliteClientRepository};
use rusqlite::Connection;

#[test]
fn insert_assigns_ids_and_persists_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    let first = repo
        .insert_client(&NewClient::new("Alice Smith", "555-0100"))
        .unwrap();
    let second = repo
        .insert_client(&NewClient::new("Amy Lee", "555-0101 x123"))
        .unwrap();
    assert!(second > first);

    let found = repo.find_by_name_prefix("Amy").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, second);
    assert_eq!(found[0].name, "Amy Lee");
    assert_eq!(found[0].phone_number, "555-0101 x123");
    assert_eq!(found[0].initials, "AL");
}

#[test]
fn insert_rejects_empty_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    let err = repo.insert_client(&NewClient::new("  ", "555")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.count_clients().unwrap(), 0);
}

#[test]
fn duplicate_clients_are_allowed() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    let draft = NewClient::new("Bob Jones", "555-0102");
    let first = repo.insert_client(&draft).unwrap();
    let second = repo.insert_client(&draft).unwrap();

    assert_ne!(first, second);
    assert_eq!(repo.count_clients().unwrap(), 2);
}

#[test]
fn prefix_lookup_is_sorted_by_name_then_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    let zed = repo.insert_client(&NewClient::new("Aaron Zed", "1")).unwrap();
    repo.insert_client(&NewClient::new("Aaron Abbot", "2")).unwrap();
    let zed_again = repo.insert_client(&NewClient::new("Aaron Zed", "3")).unwrap();

    let names: Vec<_> = repo
        .find_by_name_prefix("Aaron")
        .unwrap()
        .into_iter()
        .map(|client| (client.name, client.id))
        .collect();
    assert_eq!(names[0].0, "Aaron Abbot");
    assert_eq!(names[1], ("Aaron Zed".to_string(), zed));
    assert_eq!(names[2], ("Aaron Zed".to_string(), zed_again));
}

#[test]
fn prefix_lookup_is_case_sensitive() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    repo.insert_client(&NewClient::new("alice lower", "1")).unwrap();
    repo.insert_client(&NewClient::new("Alice Upper", "2")).unwrap();

    let upper = repo.find_by_name_prefix("A").unwrap();
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].name, "Alice Upper");

    let lower = repo.find_by_name_prefix("a").unwrap();
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].name, "alice lower");
}

#[test]
fn prefix_lookup_treats_wildcards_literally() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    repo.insert_client(&NewClient::new("Alice Smith", "1")).unwrap();
    repo.insert_client(&NewClient::new("%Percent Name", "2")).unwrap();

    assert!(repo.find_by_name_prefix("_").unwrap().is_empty());
    assert!(repo.find_by_name_prefix("*").unwrap().is_empty());

    let percent = repo.find_by_name_prefix("%").unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].name, "%Percent Name");
}

#[test]
fn prefix_lookup_matches_non_ascii_prefix() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    repo.insert_client(&NewClient::new("Émile Zola", "1")).unwrap();
    repo.insert_client(&NewClient::new("Emma Stone", "2")).unwrap();

    let found = repo.find_by_name_prefix("É").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].initials, "ÉZ");
}

#[test]
fn prefix_lookup_without_matches_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();

    repo.insert_client(&NewClient::new("Bob Jones", "1")).unwrap();

    assert!(repo.find_by_name_prefix("Z").unwrap().is_empty());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteClientRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_clients_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteClientRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("clients"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE clients (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            phone_number TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteClientRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "clients",
            column: "initials"
        })
    ));
}
