//! PostgreSQL store tests against sea-orm's mock connection.
//!
//! Each test checks the statement the repository issued and how the
//! returned rows were mapped.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use sea_orm::{
    DatabaseConnection, DbBackend, DbErr, MockDatabase, MockExecResult, Transaction, Value,
};

use lightbnb::domain::{NewProperty, NewUser, PropertySearch};
use lightbnb::errors::AppError;
use lightbnb::infra::repositories::{queries, PropertyQuery};
use lightbnb::config::DataSource;
use lightbnb::infra::{
    Database, Persistence, PropertyRepository, PropertyStore, ReservationRepository,
    ReservationStore, Store, UserRepository, UserStore,
};

type Row = BTreeMap<&'static str, Value>;

fn postgres() -> MockDatabase {
    MockDatabase::new(DbBackend::Postgres)
}

fn connection(mock: MockDatabase) -> Arc<DatabaseConnection> {
    Arc::new(mock.into_connection())
}

/// Statements issued so far; every repository sharing `db` must be dropped.
fn transaction_log(db: Arc<DatabaseConnection>) -> Vec<Transaction> {
    Arc::try_unwrap(db)
        .expect("repository still holds the connection")
        .into_transaction_log()
}

fn user_row(id: i32, email: &str) -> Row {
    BTreeMap::from([
        ("id", Value::from(id)),
        ("name", Value::from("Devin Sanders")),
        ("email", Value::from(email)),
        ("password", Value::from("$argon2id$v=19$stub")),
    ])
}

fn property_row(id: i32, cost_per_night: i32, average_rating: Option<f64>) -> Row {
    BTreeMap::from([
        ("id", Value::from(id)),
        ("owner_id", Value::from(1)),
        ("title", Value::from("Speed lamp")),
        ("description", Value::from("description")),
        ("thumbnail_photo_url", Value::from("https://img/t.jpg")),
        ("cover_photo_url", Value::from("https://img/c.jpg")),
        ("cost_per_night", Value::from(cost_per_night)),
        ("parking_spaces", Value::from(2)),
        ("number_of_bathrooms", Value::from(1)),
        ("number_of_bedrooms", Value::from(3)),
        ("country", Value::from("Canada")),
        ("street", Value::from("536 Namsub Highway")),
        ("city", Value::from("Sotboske")),
        ("province", Value::from("Quebec")),
        ("post_code", Value::from("28142")),
        ("active", Value::from(true)),
        ("average_rating", Value::from(average_rating)),
    ])
}

fn new_property() -> NewProperty {
    NewProperty {
        owner_id: 1,
        title: "Speed lamp".to_string(),
        description: "description".to_string(),
        thumbnail_photo_url: "https://img/t.jpg".to_string(),
        cover_photo_url: "https://img/c.jpg".to_string(),
        cost_per_night: 93_061,
        street: "536 Namsub Highway".to_string(),
        city: "Sotboske".to_string(),
        province: "Quebec".to_string(),
        post_code: "28142".to_string(),
        country: "Canada".to_string(),
        parking_spaces: 2,
        number_of_bathrooms: 1,
        number_of_bedrooms: 3,
    }
}


#[tokio::test]
async fn find_by_email_issues_case_insensitive_lookup() {
    let db = connection(postgres().append_query_results([vec![user_row(
        1,
        "tristanjacobs@gmail.com",
    )]]));
    let repo = UserStore::new(Arc::clone(&db));

    let user = repo.find_by_email("TristanJacobs@gmail.com").await.unwrap();

    assert_eq!(user.map(|u| u.id), Some(1));
    drop(repo);
    assert_eq!(
        transaction_log(db),
        vec![Transaction::one(queries::user_by_email("TristanJacobs@gmail.com"))]
    );
}

#[tokio::test]
async fn find_by_id_returns_none_for_missing_row() {
    let db = connection(postgres().append_query_results([Vec::<Row>::new()]));
    let repo = UserStore::new(Arc::clone(&db));

    assert_eq!(repo.find_by_id(42).await.unwrap(), None);
    drop(repo);
    assert_eq!(
        transaction_log(db),
        vec![Transaction::one(queries::user_by_id(42))]
    );
}

#[tokio::test]
async fn create_user_returns_stored_row() {
    let db = connection(postgres().append_query_results([vec![user_row(7, "new@example.com")]]));
    let repo = UserStore::new(Arc::clone(&db));
    let new_user = NewUser {
        name: "Devin Sanders".to_string(),
        email: "new@example.com".to_string(),
        password: "$argon2id$v=19$stub".to_string(),
    };

    let user = repo.create(new_user.clone()).await.unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.email, "new@example.com");
    drop(repo);
    assert_eq!(
        transaction_log(db),
        vec![Transaction::one(queries::insert_user(&new_user))]
    );
}

#[tokio::test]
async fn create_user_surfaces_database_errors() {
    let db = connection(
        postgres().append_query_errors([DbErr::Custom("connection reset".to_string())]),
    );
    let repo = UserStore::new(db);
    let new_user = NewUser {
        name: "Devin Sanders".to_string(),
        email: "new@example.com".to_string(),
        password: "hash".to_string(),
    };

    let result = repo.create(new_user).await;
    assert!(matches!(result, Err(AppError::Database(_))));
}

#[tokio::test]
async fn search_runs_built_query_and_maps_rating() {
    let db = connection(postgres().append_query_results([vec![
        property_row(3, 46_058, Some(4.5)),
        property_row(4, 82_640, None),
    ]]));
    let repo = PropertyStore::new(Arc::clone(&db));
    let search = PropertySearch {
        city: Some("Sotboske".to_string()),
        minimum_price_per_night: Some(400.0),
        ..Default::default()
    };

    let listings = repo.search(&search, 10).await.unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].property.id, 3);
    assert_eq!(listings[0].average_rating, Some(4.5));
    assert_eq!(listings[1].average_rating, None);
    drop(repo);
    assert_eq!(
        transaction_log(db),
        vec![Transaction::one(PropertyQuery::new(&search, 10).into_statement())]
    );
}

#[tokio::test]
async fn create_property_returns_stored_row() {
    let mut row = property_row(9, 93_061, None);
    row.remove("average_rating");
    let db = connection(postgres().append_query_results([vec![row]]));
    let repo = PropertyStore::new(Arc::clone(&db));
    let property = new_property();

    let created = repo.create(property.clone()).await.unwrap();

    assert_eq!(created.id, 9);
    assert!(created.active);
    drop(repo);
    assert_eq!(
        transaction_log(db),
        vec![Transaction::one(queries::insert_property(&property))]
    );
}

#[tokio::test]
async fn list_for_guest_maps_reservation_and_property() {
    let mut row = property_row(5, 12_500, Some(5.0));
    row.insert("reservation_id", Value::from(4));
    row.insert(
        "start_date",
        Value::from(NaiveDate::from_ymd_opt(2014, 10, 21).unwrap()),
    );
    row.insert(
        "end_date",
        Value::from(NaiveDate::from_ymd_opt(2014, 10, 23).unwrap()),
    );
    row.insert("guest_id", Value::from(1));

    let db = connection(postgres().append_query_results([vec![row]]));
    let repo = ReservationStore::new(Arc::clone(&db));

    let listings = repo.list_for_guest(1, 10).await.unwrap();

    assert_eq!(listings.len(), 1);
    let listing = &listings[0];
    assert_eq!(listing.reservation.id, 4);
    assert_eq!(listing.reservation.property_id, 5);
    assert_eq!(listing.reservation.guest_id, 1);
    assert_eq!(listing.property.cost_per_night, 12_500);
    assert_eq!(listing.average_rating, Some(5.0));
    drop(repo);
    assert_eq!(
        transaction_log(db),
        vec![Transaction::one(queries::reservations_for_guest(1, 10))]
    );
}

#[tokio::test]
async fn persistence_serves_repositories_over_one_connection() {
    let mock = postgres()
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_query_results([vec![user_row(2, "allisonjackson@mail.com")]]);
    let store = Persistence::new(Database::from_connection(mock.into_connection()));

    assert_eq!(store.source(), DataSource::Postgres);
    assert!(store.ping().await.is_ok());

    let user = store.users().find_by_id(2).await.unwrap();
    assert_eq!(user.map(|u| u.email), Some("allisonjackson@mail.com".to_string()));
}
