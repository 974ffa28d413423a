//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use time::Duration;

use crate::{Error, db::initialize, session::DEFAULT_SESSION_DURATION};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// How long a newly issued session cookie is kept by the client.
    pub session_duration: Duration,

    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            session_duration: DEFAULT_SESSION_DURATION,
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}
