pub mod indexes;

use actix_web::web;
use mongodb::{Client, Collection, Database};
use std::error::Error;

use crate::state::AppState;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty() && !s.contains(':'))
            .unwrap_or("FoodOrdering");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        Ok(Self { client, db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Background bootstrap: connect once, then run the user-index migrations.
///
/// Runs as a spawned task so the HTTP listener is never gated on database
/// readiness. A failed (or impossible) connection is logged and leaves the
/// process alive with database-backed routes answering 503. No retry.
pub async fn bootstrap(state: web::Data<AppState>, mongo_url: Option<String>) {
    let Some(url) = mongo_url else {
        log::error!("MONGO_URL is not set; database-backed routes will stay unavailable");
        return;
    };

    match MongoDB::new(&url).await {
        Ok(db) => {
            log::info!("Connected to MongoDB");
            // The handle is usable as soon as the connection is up; requests
            // may legitimately reach database-backed routes before the index
            // migrations below finish.
            state.set_db(db.clone());
            indexes::run_startup_migrations(&db).await;
        }
        Err(e) => {
            log::error!("NOT CONNECTED TO NETWORK: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();
        let _ = env_logger::builder().is_test(true).try_init();

        let url = std::env::var("MONGO_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/FoodOrderingTest".to_string());
        let db = MongoDB::new(&url).await;
        assert!(db.is_ok());
    }

    #[tokio::test]
    async fn bootstrap_without_url_leaves_state_empty() {
        let state = web::Data::new(AppState::new());
        bootstrap(state.clone(), None).await;
        assert!(state.db().is_none());
    }

    #[tokio::test]
    async fn bootstrap_with_invalid_url_leaves_state_empty() {
        let state = web::Data::new(AppState::new());
        // Invalid scheme fails at option parsing, no network involved.
        bootstrap(state.clone(), Some("not-a-mongodb-uri".to_string())).await;
        assert!(state.db().is_none());
    }
}
