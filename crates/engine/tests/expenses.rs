use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{BillCmd, Engine, EngineError, ItemCmd};
use migration::MigratorTrait;
use uuid::Uuid;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

async fn engine_with_file_db() -> (Engine, DatabaseConnection, std::path::PathBuf) {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_dbs");
    std::fs::create_dir_all(&root).unwrap();

    let path = root.join(format!("engine_{}.db", Uuid::new_v4()));
    let url = format!("sqlite:{}?mode=rwc", path.display());

    let db = Database::connect(&url).await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();

    (engine, db, path)
}

#[tokio::test]
async fn signup_then_lookup_by_email() {
    let (engine, _db) = engine_with_db().await;

    let user_id = engine
        .signup("alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    let user = engine.user_by_email("alice@example.com").await.unwrap();
    assert_eq!(user.id, user_id);
    assert_eq!(user.username, "alice");
    assert_eq!(user.total_expenses, 0.0);

    let same = engine.user_by_id(user_id).await.unwrap();
    assert_eq!(same.email, "alice@example.com");
}

#[tokio::test]
async fn signup_stores_bcrypt_digest_not_plaintext() {
    let (engine, db) = engine_with_db().await;
    let backend = db.get_database_backend();

    let user_id = engine
        .signup("alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    let row = db
        .query_one(Statement::from_sql_and_values(
            backend,
            "SELECT password_hash FROM users WHERE id = ?;",
            vec![user_id.to_string().into()],
        ))
        .await
        .unwrap()
        .unwrap();
    let stored: String = row.try_get("", "password_hash").unwrap();
    assert_ne!(stored, "hunter2");
    assert!(bcrypt::verify("hunter2", &stored).unwrap());
}

#[tokio::test]
async fn duplicate_signup_is_rejected() {
    let (engine, _db) = engine_with_db().await;

    engine
        .signup("alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    let err = engine
        .signup("alice", "other@example.com", "hunter2")
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::ExistingKey("alice".to_string()));

    let err = engine
        .signup("alice2", "alice@example.com", "hunter2")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::ExistingKey("alice@example.com".to_string())
    );
}

#[tokio::test]
async fn blank_signup_fields_are_rejected() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .signup("  ", "alice@example.com", "hunter2")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidAmount("username must not be empty".to_string())
    );

    let err = engine
        .signup("alice", "alice@example.com", "")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidAmount("password must not be empty".to_string())
    );
}

#[tokio::test]
async fn unknown_user_is_key_not_found() {
    let (engine, _db) = engine_with_db().await;
    let ghost = Uuid::new_v4();
    let not_found = EngineError::KeyNotFound("user not exists".to_string());

    assert_eq!(engine.user_by_id(ghost).await.unwrap_err(), not_found);
    assert_eq!(engine.total_expenses(ghost).await.unwrap_err(), not_found);
    assert_eq!(engine.new_friend(ghost, "Bob").await.unwrap_err(), not_found);
    assert_eq!(
        engine
            .new_bill(BillCmd::new(ghost, "dinner", 10.0, 5.0))
            .await
            .unwrap_err(),
        not_found
    );
    assert_eq!(
        engine
            .new_item(ItemCmd::new(ghost, "groceries", "milk", 2.0))
            .await
            .unwrap_err(),
        not_found
    );
}

#[tokio::test]
async fn new_bill_charges_owner_and_persists_totals() {
    let (engine, db) = engine_with_db().await;
    let backend = db.get_database_backend();

    let user_id = engine
        .signup("alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    let bill_id = engine
        .new_bill(
            BillCmd::new(user_id, "dinner", 10.0, 5.0)
                .participants(vec!["Bob".to_string(), "Carol".to_string()])
                .includes_me(true),
        )
        .await
        .unwrap();

    assert_eq!(engine.total_expenses(user_id).await.unwrap(), 10.0);

    let row = db
        .query_one(Statement::from_sql_and_values(
            backend,
            "SELECT total_spending FROM bills WHERE id = ?;",
            vec![bill_id.to_string().into()],
        ))
        .await
        .unwrap()
        .unwrap();
    let total: f64 = row.try_get("", "total_spending").unwrap();
    assert_eq!(total, 15.0);
}

#[tokio::test]
async fn negative_amounts_are_rejected() {
    let (engine, _db) = engine_with_db().await;
    let user_id = engine
        .signup("alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    let err = engine
        .new_bill(BillCmd::new(user_id, "dinner", -1.0, 5.0))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidAmount("my_spending must be >= 0".to_string())
    );
    assert_eq!(engine.total_expenses(user_id).await.unwrap(), 0.0);

    let err = engine
        .new_item(ItemCmd::new(user_id, "groceries", "milk", -2.0))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidAmount("cost must be >= 0".to_string())
    );
}

#[tokio::test]
async fn friends_are_listed_in_insertion_order() {
    let (engine, _db) = engine_with_db().await;
    let user_id = engine
        .signup("alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(
        engine.friends(user_id).await.unwrap_err(),
        EngineError::KeyNotFound("no friends yet".to_string())
    );

    engine.new_friend(user_id, "Bob").await.unwrap();
    engine.new_friend(user_id, " Carol ").await.unwrap();

    let friends = engine.friends(user_id).await.unwrap();
    let names: Vec<&str> = friends.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Carol"]);
}

#[tokio::test]
async fn bills_listing_filters_bills_paid_for_others() {
    let (engine, _db) = engine_with_db().await;
    let user_id = engine
        .signup("alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(
        engine.bills_for_user(user_id).await.unwrap_err(),
        EngineError::KeyNotFound("no bills yet".to_string())
    );

    engine
        .new_bill(
            BillCmd::new(user_id, "gift for Bob", 12.0, 0.0)
                .participants(vec!["Bob".to_string()]),
        )
        .await
        .unwrap();

    // Only bills the owner took part in show up; a user with bills that were
    // all paid for others gets an empty list, not an error.
    let shared = engine.bills_for_user(user_id).await.unwrap();
    assert!(shared.is_empty());

    engine
        .new_bill(
            BillCmd::new(user_id, "dinner", 10.0, 5.0)
                .participants(vec!["Bob".to_string(), "Carol".to_string()])
                .includes_me(true),
        )
        .await
        .unwrap();
    engine
        .new_bill(BillCmd::new(user_id, "solo lunch", 7.0, 0.0).includes_me(true))
        .await
        .unwrap();

    let shared = engine.bills_for_user(user_id).await.unwrap();
    assert_eq!(shared.len(), 2);
    assert_eq!(shared[0].description, "dinner");
    assert_eq!(shared[0].participants, vec!["Bob", "Carol"]);
    assert_eq!(shared[0].total_spending(), 15.0);
    assert_eq!(shared[1].description, "solo lunch");
    assert!(shared[1].participants.is_empty());
}

#[tokio::test]
async fn items_do_not_touch_the_balance() {
    let (engine, db) = engine_with_db().await;
    let backend = db.get_database_backend();
    let user_id = engine
        .signup("alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    engine
        .new_item(ItemCmd::new(user_id, "groceries", "milk", 2.5).friends("Bob Carol"))
        .await
        .unwrap();

    assert_eq!(engine.total_expenses(user_id).await.unwrap(), 0.0);

    let row = db
        .query_one(Statement::from_sql_and_values(
            backend,
            "SELECT COUNT(*) AS n FROM items WHERE user_id = ?;",
            vec![user_id.to_string().into()],
        ))
        .await
        .unwrap()
        .unwrap();
    let count: i64 = row.try_get("", "n").unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn concurrent_bills_accumulate_exactly() {
    let (engine, db, path) = engine_with_file_db().await;
    let user_id = engine
        .signup("alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    let engine = std::sync::Arc::new(engine);
    let mut handles = Vec::new();
    for i in 0..8 {
        let engine = engine.clone();
        handles.push(tokio::spawn(async move {
            engine
                .new_bill(BillCmd::new(user_id, format!("bill {i}"), 2.5, 0.0))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(engine.total_expenses(user_id).await.unwrap(), 20.0);

    drop(engine);
    drop(db);
    let _ = std::fs::remove_file(path);
}
