//! SQLite-backed document store adapter.
//!
//! # Responsibility
//! - Persist documents in the `documents` table created by migrations.
//! - Keep SQL details inside the adapter boundary.
//!
//! # Invariants
//! - Merge writes read the current row first; only patched fields change.
//! - Stored quantities outside `u32` range are rejected on read instead of
//!   being silently truncated.

use super::{DocumentStore, FieldPatch, ItemFields, StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Document store over a migrated SQLite connection.
pub struct SqliteDocumentStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDocumentStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn unavailable(err: rusqlite::Error) -> StoreError {
        StoreError::Unavailable {
            details: err.to_string(),
        }
    }
}

impl DocumentStore for SqliteDocumentStore<'_> {
    fn get_all(&self, collection: &str) -> StoreResult<Vec<(String, ItemFields)>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, quantity, category
                 FROM documents
                 WHERE collection = ?1;",
            )
            .map_err(Self::unavailable)?;

        let mut rows = stmt.query([collection]).map_err(Self::unavailable)?;
        let mut documents = Vec::new();

        while let Some(row) = rows.next().map_err(Self::unavailable)? {
            let id: String = row.get(0).map_err(Self::unavailable)?;
            let quantity: i64 = row.get(1).map_err(Self::unavailable)?;
            let category: String = row.get(2).map_err(Self::unavailable)?;
            let fields = fields_from_row(collection, &id, quantity, category)?;
            documents.push((id, fields));
        }

        Ok(documents)
    }

    fn get_one(&self, collection: &str, id: &str) -> StoreResult<Option<ItemFields>> {
        let row = self
            .conn
            .query_row(
                "SELECT quantity, category
                 FROM documents
                 WHERE collection = ?1 AND id = ?2;",
                params![collection, id],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()
            .map_err(Self::unavailable)?;

        match row {
            Some((quantity, category)) => {
                Ok(Some(fields_from_row(collection, id, quantity, category)?))
            }
            None => Ok(None),
        }
    }

    fn set_one(
        &self,
        collection: &str,
        id: &str,
        patch: &FieldPatch,
        merge: bool,
    ) -> StoreResult<()> {
        let fields = if merge {
            match self.get_one(collection, id)? {
                Some(existing) => patch.apply_to(&existing),
                None => patch
                    .clone()
                    .into_fields()
                    .ok_or_else(|| incomplete(collection, id))?,
            }
        } else {
            patch
                .clone()
                .into_fields()
                .ok_or_else(|| incomplete(collection, id))?
        };

        self.conn
            .execute(
                "INSERT INTO documents (collection, id, quantity, category)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (collection, id) DO UPDATE SET
                    quantity = excluded.quantity,
                    category = excluded.category,
                    updated_at = (strftime('%s', 'now') * 1000);",
                params![collection, id, i64::from(fields.quantity), fields.category],
            )
            .map_err(Self::unavailable)?;

        Ok(())
    }

    fn delete_one(&self, collection: &str, id: &str) -> StoreResult<()> {
        // Zero affected rows is fine: deleting an absent id is a no-op.
        self.conn
            .execute(
                "DELETE FROM documents WHERE collection = ?1 AND id = ?2;",
                params![collection, id],
            )
            .map_err(Self::unavailable)?;

        Ok(())
    }
}

fn fields_from_row(
    collection: &str,
    id: &str,
    quantity: i64,
    category: String,
) -> StoreResult<ItemFields> {
    let quantity = u32::try_from(quantity).map_err(|_| StoreError::InvalidDocument {
        collection: collection.to_string(),
        id: id.to_string(),
        details: format!("quantity `{quantity}` is outside the supported range"),
    })?;

    Ok(ItemFields { quantity, category })
}

fn incomplete(collection: &str, id: &str) -> StoreError {
    StoreError::IncompleteDocument {
        collection: collection.to_string(),
        id: id.to_string(),
    }
}
