use accounts_core::{Account, AccountInMemoryRepository, AccountProps, CreateAccount};
use chrono::{Duration, TimeZone, Utc};
use engine::repository::{Repository, SearchableRepository};
use engine::search::{SearchParams, SortDirection};
use engine::{Entity, Identifier};
use serde_json::json;

fn account(email: &str, seconds: i64) -> Account {
    let base = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let created_at = base + Duration::seconds(seconds);
    Account::new(AccountProps {
        id: Identifier::generate(),
        email: email.to_owned(),
        profile_id: Identifier::generate(),
        created_at: Some(created_at),
        updated_at: None,
    })
}

fn emails(items: &[Account]) -> Vec<&str> {
    items.iter().map(Account::email).collect()
}

#[test]
fn create_generates_ids_and_validates() {
    let account = Account::create(CreateAccount::new("user@example.com"));

    assert!(!account.notification().has_errors());
    assert_ne!(account.id(), account.profile_id());
    assert_eq!(account.created_at(), account.updated_at());
}

#[test]
fn create_keeps_supplied_ids() {
    let id = Identifier::generate();
    let profile_id = Identifier::generate();

    let account = Account::create(CreateAccount {
        id: Some(id),
        email: "user@example.com".to_owned(),
        profile_id: Some(profile_id),
    });

    assert_eq!(&id, account.id());
    assert_eq!(&profile_id, account.profile_id());
}

#[test]
fn create_with_invalid_email_keeps_error() {
    let account = Account::create(CreateAccount::new("not-an-email"));

    assert_eq!(
        json!([{ "email": ["email must be an email"] }]),
        account.notification().to_json()
    );
}

#[test]
fn change_email_revalidates_and_accumulates() {
    let mut account = Account::create(CreateAccount::new("bad"));
    let before = account.updated_at();

    account.change_email("still bad");
    assert_eq!(
        Some(["email must be an email".to_owned(), "email must be an email".to_owned()].as_slice()),
        account.notification().field_errors("email")
    );

    account.change_email("fixed@example.com");
    assert_eq!("fixed@example.com", account.email());
    assert!(account.updated_at() >= before);
    assert_eq!(2, account.notification().field_errors("email").unwrap().len());
}

#[test]
fn to_json_omits_notification() {
    let account = account("user@example.com", 0);
    let value = account.to_json();

    assert_eq!(json!("user@example.com"), value["email"]);
    assert_eq!(json!(account.id().to_string()), value["id"]);
    assert_eq!(json!(account.profile_id().to_string()), value["profile_id"]);
    assert!(value.get("notification").is_none());
}

#[tokio::test]
async fn search_filters_on_email_and_keeps_insertion_order_by_default() {
    let repo = AccountInMemoryRepository::with_items(vec![
        account("zed@example.com", 2),
        account("amy@other.org", 1),
        account("bob@EXAMPLE.com", 0),
    ]);

    let result = repo
        .search(SearchParams::new().with_filter("example"))
        .await
        .unwrap();

    assert_eq!(vec!["zed@example.com", "bob@EXAMPLE.com"], emails(result.items()));
    assert_eq!(2, result.total());
}

#[tokio::test]
async fn search_sorts_by_email_or_created_at() {
    let repo = AccountInMemoryRepository::with_items(vec![
        account("b@example.com", 2),
        account("a@example.com", 1),
        account("c@example.com", 0),
    ]);

    let by_email = repo
        .search(SearchParams::new().with_sort("email", SortDirection::Asc))
        .await
        .unwrap();
    assert_eq!(
        vec!["a@example.com", "b@example.com", "c@example.com"],
        emails(by_email.items())
    );

    let by_created = repo
        .search(SearchParams::new().with_sort("created_at", SortDirection::Desc))
        .await
        .unwrap();
    assert_eq!(
        vec!["b@example.com", "a@example.com", "c@example.com"],
        emails(by_created.items())
    );
}

#[tokio::test]
async fn find_unknown_account_is_not_found() {
    let repo = AccountInMemoryRepository::new();
    let id = Identifier::generate();

    let err = repo.find_by_id(id).await.unwrap_err();

    assert_eq!(
        format!("Account not found using ID {id}"),
        err.current_context().to_string()
    );
}
