//! Startup index lifecycle for the `users` collection.
//!
//! The OAuth identifier fields (`googleId`, `facebookId`) must be unique
//! among documents that carry them, while documents without them stay
//! unconstrained (sparse semantics). These indexes used to exist under the
//! driver's auto-generated single-field names; they were renamed to explicit
//! custom names, so every startup first drops the old names and then
//! (re)creates the new ones. Both phases are idempotent and never fail the
//! process: every error is caught and logged here.

use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    error::ErrorKind,
    options::IndexOptions,
    IndexModel,
};

use super::MongoDB;

pub const USERS_COLLECTION: &str = "users";

/// One index rename, applied at startup: drop the legacy auto-generated
/// name, then ensure the custom-named replacement on the same field.
pub struct IndexMigration {
    pub field: &'static str,
    pub legacy_name: &'static str,
    pub index_name: &'static str,
}

/// Applied in order on every startup. Re-running against an already-migrated
/// database is a pair of no-ops per entry.
pub const USER_INDEX_MIGRATIONS: &[IndexMigration] = &[
    IndexMigration {
        field: "googleId",
        legacy_name: "googleId_1",
        index_name: "custom_googleId_index",
    },
    IndexMigration {
        field: "facebookId",
        legacy_name: "facebookId_1",
        index_name: "custom_facebookId_index",
    },
];

/// Runs the two phases in order: legacy drops complete before any create
/// starts, so the old auto-named and new custom-named index for a field
/// never coexist.
pub async fn run_startup_migrations(db: &MongoDB) {
    drop_legacy_indexes(db).await;
    ensure_indexes(db).await;
}

/// Drops the legacy auto-generated indexes by name.
///
/// A missing index is a logged no-op; any other failure is logged and the
/// remaining drops still run.
pub async fn drop_legacy_indexes(db: &MongoDB) {
    let users = db.collection::<Document>(USERS_COLLECTION);

    match list_index_names(&users).await {
        Ok(names) => log::info!("Existing user indexes: {:?}", names),
        Err(e) => log::warn!("Could not list user indexes: {}", e),
    }

    for migration in USER_INDEX_MIGRATIONS {
        match users.drop_index(migration.legacy_name).await {
            Ok(()) => {
                log::info!("Dropped legacy index '{}'", migration.legacy_name);
            }
            Err(e) if is_index_not_found(&e) => {
                log::info!(
                    "Legacy index '{}' not found, skipping drop",
                    migration.legacy_name
                );
            }
            Err(e) => {
                log::error!("Error dropping index '{}': {}", migration.legacy_name, e);
            }
        }
    }
}

/// Creates the custom-named unique sparse indexes. Creating an index that
/// already exists with identical options is a server-side no-op, so this is
/// safe on every startup. Failures are logged and never propagated.
pub async fn ensure_indexes(db: &MongoDB) {
    let users = db.collection::<Document>(USERS_COLLECTION);

    for migration in USER_INDEX_MIGRATIONS {
        let model = IndexModel::builder()
            .keys(doc! { migration.field: 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name(migration.index_name.to_string())
                    .build(),
            )
            .build();

        match users.create_index(model).await {
            Ok(result) => log::info!("Index '{}' ensured", result.index_name),
            Err(e) => log::error!("Error ensuring index '{}': {}", migration.index_name, e),
        }
    }
}

async fn list_index_names(
    users: &mongodb::Collection<Document>,
) -> mongodb::error::Result<Vec<String>> {
    let models: Vec<IndexModel> = users.list_indexes().await?.try_collect().await?;
    Ok(models
        .into_iter()
        .filter_map(|m| m.options.and_then(|o| o.name))
        .collect())
}

/// `dropIndexes` on a name that does not exist answers server error 27
/// (codeName `IndexNotFound`).
fn is_index_not_found(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Command(ref cmd) if cmd.code == 27 || cmd.code_name == "IndexNotFound"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_names_follow_driver_convention() {
        // The old indexes were auto-named `<field>_1` by the driver.
        for migration in USER_INDEX_MIGRATIONS {
            assert_eq!(migration.legacy_name, format!("{}_1", migration.field));
        }
    }

    #[test]
    fn custom_names_differ_from_legacy_names() {
        for migration in USER_INDEX_MIGRATIONS {
            assert_ne!(migration.index_name, migration.legacy_name);
        }
    }

    #[cfg(test)]
    mod mongo {
        use super::super::*;
        use mongodb::bson::doc;

        async fn test_db() -> MongoDB {
            dotenv::dotenv().ok();
            let url = std::env::var("MONGO_URL")
                .unwrap_or_else(|_| "mongodb://localhost:27017/FoodOrderingTest".to_string());
            MongoDB::new(&url).await.expect("MongoDB must be running")
        }

        async fn custom_index_names(db: &MongoDB) -> Vec<String> {
            let users = db.collection::<Document>(USERS_COLLECTION);
            let models: Vec<IndexModel> = users
                .list_indexes()
                .await
                .unwrap()
                .try_collect()
                .await
                .unwrap();
            let mut names: Vec<String> = models
                .into_iter()
                .filter_map(|m| m.options.and_then(|o| o.name))
                .filter(|n| n.starts_with("custom_"))
                .collect();
            names.sort();
            names
        }

        #[tokio::test]
        #[ignore] // Requires MongoDB to be running
        async fn migrations_are_idempotent() {
            let db = test_db().await;
            let users = db.collection::<Document>(USERS_COLLECTION);
            users.drop().await.unwrap();

            // Fresh collection: both drops are no-ops, both creates succeed.
            run_startup_migrations(&db).await;
            // Second and third runs must leave the exact same index set.
            run_startup_migrations(&db).await;
            run_startup_migrations(&db).await;

            assert_eq!(
                custom_index_names(&db).await,
                vec![
                    "custom_facebookId_index".to_string(),
                    "custom_googleId_index".to_string(),
                ]
            );
        }

        #[tokio::test]
        #[ignore] // Requires MongoDB to be running
        async fn migrations_replace_legacy_indexes() {
            let db = test_db().await;
            let users = db.collection::<Document>(USERS_COLLECTION);
            users.drop().await.unwrap();

            // Recreate the historical state: driver-default names, no custom
            // options.
            for migration in USER_INDEX_MIGRATIONS {
                let model = IndexModel::builder()
                    .keys(doc! { migration.field: 1 })
                    .build();
                users.create_index(model).await.unwrap();
            }

            run_startup_migrations(&db).await;

            let users = db.collection::<Document>(USERS_COLLECTION);
            let models: Vec<IndexModel> = users
                .list_indexes()
                .await
                .unwrap()
                .try_collect()
                .await
                .unwrap();
            let names: Vec<String> = models
                .into_iter()
                .filter_map(|m| m.options.and_then(|o| o.name))
                .collect();

            for migration in USER_INDEX_MIGRATIONS {
                assert!(!names.contains(&migration.legacy_name.to_string()));
                assert!(names.contains(&migration.index_name.to_string()));
            }
        }

        #[tokio::test]
        #[ignore] // Requires MongoDB to be running
        async fn sparse_unique_semantics() {
            let db = test_db().await;
            let users = db.collection::<Document>(USERS_COLLECTION);
            users.drop().await.unwrap();

            run_startup_migrations(&db).await;

            let users = db.collection::<Document>(USERS_COLLECTION);

            // Absent googleId on both documents: sparse index must not treat
            // absence as a duplicate.
            users
                .insert_one(doc! { "name": "a", "email": "a@example.com" })
                .await
                .unwrap();
            users
                .insert_one(doc! { "name": "b", "email": "b@example.com" })
                .await
                .unwrap();

            // Same non-null googleId twice: second insert must be rejected.
            users
                .insert_one(doc! { "name": "c", "googleId": "g-123" })
                .await
                .unwrap();
            let dup = users
                .insert_one(doc! { "name": "d", "googleId": "g-123" })
                .await;
            assert!(dup.is_err());
        }
    }
}
