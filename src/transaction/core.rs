//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, OptionalExtension, Row, types::Type};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, session::SessionId};

// ============================================================================
// MODELS
// ============================================================================

/// Alias for the type used to uniquely identify a transaction.
pub type TransactionId = Uuid;

/// A credit or debit recorded against a session.
///
/// The sign of `amount` encodes the kind of transaction: credits are stored as
/// positive amounts and debits as negative amounts. To create a new
/// `Transaction`, use [NewTransaction::new] and [create_transaction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub title: String,
    /// The amount of money earned (positive) or spent (negative).
    pub amount: f64,
    /// The session that created this transaction.
    pub session_id: SessionId,
    /// When the transaction was recorded, as set by the database.
    pub created_at: String,
}

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in.
    Credit,
    /// Money going out.
    Debit,
}

impl TransactionType {
    /// Apply the sign for this type of transaction to the unsigned `amount`.
    pub fn signed_amount(self, amount: f64) -> f64 {
        match self {
            TransactionType::Credit => amount,
            TransactionType::Debit => -amount,
        }
    }
}

/// The title of a transaction, guaranteed not to be blank.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionTitle(String);

impl TransactionTitle {
    /// Create a transaction title.
    ///
    /// # Errors
    /// Returns [Error::EmptyTitle] if `title` is empty or only whitespace.
    pub fn new(title: &str) -> Result<Self, Error> {
        if title.trim().is_empty() {
            Err(Error::EmptyTitle)
        } else {
            Ok(Self(title.to_owned()))
        }
    }

    /// Create a transaction title without validation.
    #[cfg(test)]
    pub fn new_unchecked(title: &str) -> Self {
        Self(title.to_owned())
    }

    /// The title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A validated transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// What the transaction was for.
    pub title: TransactionTitle,
    /// The signed amount to store.
    pub amount: f64,
}

impl NewTransaction {
    /// Create a new transaction from the magnitude of its `amount` and its type.
    ///
    /// # Errors
    /// Returns [Error::NegativeAmount] if `amount` is less than zero.
    pub fn new(
        title: TransactionTitle,
        amount: f64,
        transaction_type: TransactionType,
    ) -> Result<Self, Error> {
        if amount < 0.0 {
            return Err(Error::NegativeAmount(amount));
        }

        Ok(Self {
            title,
            amount: transaction_type.signed_amount(amount),
        })
    }
}

/// The derived total of a session's transactions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of the amounts of all the session's transactions.
    pub amount: f64,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Store a new transaction for `session_id` in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    transaction: NewTransaction,
    session_id: &SessionId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (id, title, amount, session_id)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, title, amount, session_id, created_at",
        )?
        .query_row(
            (
                Uuid::new_v4().to_string(),
                transaction.title.as_str(),
                transaction.amount,
                session_id.as_str(),
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve all the transactions that belong to `session_id`.
///
/// The transactions are returned in whatever order SQLite produces them.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_transactions_by_session(
    session_id: &SessionId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, title, amount, session_id, created_at
             FROM transactions WHERE session_id = :session_id",
        )?
        .query_map(&[(":session_id", session_id.as_str())], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Retrieve the transaction with `id` if it belongs to `session_id`.
///
/// Returns `None` when there is no such transaction, including when `id`
/// belongs to another session.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_transaction(
    id: TransactionId,
    session_id: &SessionId,
    connection: &Connection,
) -> Result<Option<Transaction>, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, title, amount, session_id, created_at
             FROM transactions WHERE id = :id AND session_id = :session_id",
        )?
        .query_row(
            &[
                (":id", id.to_string().as_str()),
                (":session_id", session_id.as_str()),
            ],
            map_transaction_row,
        )
        .optional()?;

    Ok(transaction)
}

/// Sum the amounts of all the transactions that belong to `session_id`.
///
/// A session without transactions has a total of zero.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_summary(session_id: &SessionId, connection: &Connection) -> Result<Summary, Error> {
    let amount = connection.query_row(
        "SELECT TOTAL(amount) FROM transactions WHERE session_id = ?1",
        (session_id.as_str(),),
        |row| row.get(0),
    )?;

    Ok(Summary { amount })
}

/// Create the transactions table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                session_id TEXT NOT NULL,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_session_id ON transactions(session_id);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let raw_id: String = row.get(0)?;
    let id = Uuid::parse_str(&raw_id).map_err(|error| {
        rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(error))
    })?;
    let title = row.get(1)?;
    let amount = row.get(2)?;
    let session_id: String = row.get(3)?;
    let created_at = row.get(4)?;

    Ok(Transaction {
        id,
        title,
        amount,
        session_id: SessionId::new_unchecked(&session_id),
        created_at,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod model_tests {
    use crate::{
        Error,
        transaction::{NewTransaction, TransactionTitle, TransactionType},
    };

    #[test]
    fn credit_keeps_sign() {
        assert_eq!(TransactionType::Credit.signed_amount(5000.0), 5000.0);
    }

    #[test]
    fn debit_negates_amount() {
        assert_eq!(TransactionType::Debit.signed_amount(2000.0), -2000.0);
    }

    #[test]
    fn deserializes_lowercase_type() {
        let got: TransactionType = serde_json::from_str("\"debit\"").unwrap();

        assert_eq!(got, TransactionType::Debit);
        assert!(serde_json::from_str::<TransactionType>("\"Debit\"").is_err());
        assert!(serde_json::from_str::<TransactionType>("\"transfer\"").is_err());
    }

    #[test]
    fn empty_title_is_rejected() {
        assert_eq!(TransactionTitle::new(""), Err(Error::EmptyTitle));
        assert_eq!(TransactionTitle::new("  \t"), Err(Error::EmptyTitle));
    }

    #[test]
    fn title_is_not_trimmed() {
        let title = TransactionTitle::new(" rent ").unwrap();

        assert_eq!(title.as_str(), " rent ");
    }

    #[test]
    fn negative_amount_is_rejected() {
        let result = NewTransaction::new(
            TransactionTitle::new_unchecked("refund"),
            -1.0,
            TransactionType::Credit,
        );

        assert_eq!(result, Err(Error::NegativeAmount(-1.0)));
    }

    #[test]
    fn new_debit_stores_negative_amount() {
        let transaction = NewTransaction::new(
            TransactionTitle::new_unchecked("groceries"),
            42.5,
            TransactionType::Debit,
        )
        .unwrap();

        assert_eq!(transaction.amount, -42.5);
    }
}
