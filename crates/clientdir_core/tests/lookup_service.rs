use clientdir_core::db::open_db_in_memory;
use clientdir_core::{
    ClientRepository, LookupResponse, LookupService, NewClient, SqliteClientRepository,
};
use std::collections::HashSet;

fn names(response: &LookupResponse) -> Vec<&str> {
    response
        .clients
        .iter()
        .map(|client| client.name.as_str())
        .collect()
}

#[test]
fn lookup_returns_matching_clients_in_ascending_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();
    for name in ["Alice Smith", "Bob Jones", "Amy Lee"] {
        repo.insert_client(&NewClient::new(name, "555-0100")).unwrap();
    }

    let service = LookupService::new(repo);
    let response = service.lookup(Some("A")).unwrap();

    assert_eq!(names(&response), vec!["Alice Smith", "Amy Lee"]);
}

#[test]
fn missing_and_empty_letter_behave_like_a() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();
    for name in ["Alice Smith", "Bob Jones", "Amy Lee", "aaron lowercase"] {
        repo.insert_client(&NewClient::new(name, "555-0100")).unwrap();
    }

    let service = LookupService::new(repo);
    let explicit = service.lookup(Some("A")).unwrap();

    assert_eq!(service.lookup(None).unwrap(), explicit);
    assert_eq!(service.lookup(Some("")).unwrap(), explicit);
}

#[test]
fn lookup_without_matches_returns_empty_envelope() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();
    repo.insert_client(&NewClient::new("Bob Jones", "555-0100"))
        .unwrap();

    let service = LookupService::new(repo);
    let response = service.lookup(Some("Q")).unwrap();

    assert!(response.clients.is_empty());
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({ "clients": [] })
    );
}

#[test]
fn lookup_is_idempotent_and_returns_exact_matching_subset() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();
    let all_names = [
        "Zoe Adams",
        "Mark Twain",
        "Mary Jane Watson",
        "Madonna",
        "mark lowercase",
        "Marty McFly",
        "Bob Jones",
    ];
    for name in all_names {
        repo.insert_client(&NewClient::new(name, "555-0100")).unwrap();
    }
    let total = repo.count_clients().unwrap() as usize;

    let service = LookupService::new(&repo);
    for letter in ["M", "Mar", "m", "Z", "B", "X"] {
        let first = service.lookup(Some(letter)).unwrap();
        let second = service.lookup(Some(letter)).unwrap();
        assert_eq!(first, second);
        assert!(first.clients.len() <= total);

        let expected: HashSet<&str> = all_names
            .iter()
            .copied()
            .filter(|name| name.starts_with(letter))
            .collect();
        let actual: HashSet<&str> = names(&first).into_iter().collect();
        assert_eq!(actual, expected, "letter {letter}");

        let returned = names(&first);
        let mut sorted = returned.clone();
        sorted.sort_unstable();
        assert_eq!(returned, sorted, "letter {letter}");
    }
}

#[test]
fn lookup_response_serializes_clients_under_named_field() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();
    let id = repo
        .insert_client(&NewClient::new("Jane Doe", "+1-555-010-0199"))
        .unwrap();

    let service = LookupService::new(repo);
    let json = serde_json::to_value(service.lookup(Some("J")).unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "clients": [{
                "id": id,
                "name": "Jane Doe",
                "phone_number": "+1-555-010-0199",
                "initials": "JD",
            }]
        })
    );
}
