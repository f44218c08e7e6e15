use once_cell::sync::OnceCell;

use crate::database::MongoDB;

/// Shared application state injected into every handler.
///
/// The database handle is published by the background bootstrap task once the
/// connection succeeds; the HTTP server starts serving before (and regardless
/// of whether) that happens. Handlers that need the database check `db()` and
/// answer 503 while the cell is still empty.
pub struct AppState {
    db: OnceCell<MongoDB>,
}

impl AppState {
    pub fn new() -> Self {
        Self { db: OnceCell::new() }
    }

    pub fn db(&self) -> Option<&MongoDB> {
        self.db.get()
    }

    /// Publish the connected handle. Set exactly once per process.
    pub fn set_db(&self, db: MongoDB) {
        if self.db.set(db).is_err() {
            log::warn!("Database handle already set, ignoring duplicate bootstrap");
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_starts_without_database() {
        let state = AppState::new();
        assert!(state.db().is_none());
    }
}
