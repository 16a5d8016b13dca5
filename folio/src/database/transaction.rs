//! Conditional writes.

use rusqlite::{params, OptionalExtension, TransactionBehavior};

use crate::error::Result;
use crate::path::StorageKey;
use crate::store::{check_token, next_token};

use super::connection::Database;
use super::schema::{SELECT_TOKEN, UPSERT_PAGE};

impl Database {
    /// Writes `content` under `key` if the stored token equals `expected`.
    ///
    /// The compare and the write run inside one `IMMEDIATE` transaction,
    /// which takes the database write lock up front, so concurrent
    /// writers in other connections or processes serialize here rather
    /// than both reading the old token.
    ///
    /// Returns the new token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conflict`](crate::Error::Conflict) on token
    /// mismatch (nothing is written), or a database error.
    pub fn compare_and_put(
        &mut self,
        key: &StorageKey,
        expected: Option<i64>,
        content: &str,
    ) -> Result<i64> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let current: Option<i64> = tx
            .query_row(SELECT_TOKEN, params![key.name()], |row| row.get(0))
            .optional()?;
        check_token(key, expected, current)?;

        let token = next_token(current)?;
        tx.execute(UPSERT_PAGE, params![key.name(), content, token])?;
        tx.commit()?;

        Ok(token)
    }
}
