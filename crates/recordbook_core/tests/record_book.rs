use recordbook_core::{
    CoreConfig, LoginCredentials, NoLatency, RecordBook, RecordDraft, RecordSort, SortField,
};
use std::sync::Arc;

#[tokio::test]
async fn records_require_authenticated_session() {
    let book = RecordBook::with_latency(&CoreConfig::default(), Arc::new(NoLatency)).unwrap();
    assert!(book.records().is_none());

    book.session()
        .login(LoginCredentials::new("demo@example.com", "password"))
        .await
        .unwrap();

    let (user, records) = book.records().unwrap();
    assert_eq!(user.email, "demo@example.com");
    assert_eq!(records.list_all().await.unwrap().len(), 5);

    book.session().logout();
    assert!(book.records().is_none());
}

#[tokio::test]
async fn mistyped_relogin_keeps_records_available() {
    let book = RecordBook::with_latency(&CoreConfig::default(), Arc::new(NoLatency)).unwrap();
    book.session()
        .login(LoginCredentials::new("demo@example.com", "password"))
        .await
        .unwrap();

    book.session()
        .login(LoginCredentials::new("demo@example.com", "passwrod"))
        .await
        .unwrap_err();

    let (user, records) = book.records().unwrap();
    assert_eq!(user.username, "demo_user");
    assert_eq!(records.list_all().await.unwrap().len(), 5);
}

#[tokio::test]
async fn unseeded_book_starts_empty_and_sorts_created_records() {
    let config = CoreConfig {
        seed: false,
        ..CoreConfig::default()
    };
    let book = RecordBook::with_latency(&config, Arc::new(NoLatency)).unwrap();
    book.session()
        .login(LoginCredentials::new("demo@example.com", "password"))
        .await
        .unwrap();

    let (_, records) = book.records().unwrap();
    assert!(records.list_all().await.unwrap().is_empty());

    records.create(RecordDraft::new("zeta", "a")).await.unwrap();
    records.create(RecordDraft::new("Alpha", "b")).await.unwrap();

    let mut sort = RecordSort::default();
    let sorted = sort.sorted(records.list_all().await.unwrap());
    assert_eq!(sorted[0].title, "Alpha");

    sort.toggle(SortField::Title);
    let sorted = sort.sorted(records.list_all().await.unwrap());
    assert_eq!(sorted[0].title, "zeta");
}
