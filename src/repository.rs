//! Persistence access for translation items. Sole owner of SQL statement
//! text and row-to-entity mapping.

use crate::entity::TranslationItem;
use crate::error::RepoError;
use async_trait::async_trait;
use sqlx::PgPool;

/// The five operations the gateway needs. Handlers depend on this trait
/// rather than a concrete store client, so tests can substitute an in-memory
/// implementation.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn get_item_by_id(&self, id: i64) -> Result<TranslationItem, RepoError>;
    async fn create_item(&self, item: &TranslationItem) -> Result<i64, RepoError>;
    async fn update_item(&self, item: &TranslationItem) -> Result<(), RepoError>;
    async fn list_items(&self) -> Result<Vec<TranslationItem>, RepoError>;
    async fn delete_item(&self, id: i64) -> Result<(), RepoError>;
}

/// Create the items table if it does not exist. Called once at startup,
/// before the server accepts requests.
pub async fn ensure_items_table(pool: &PgPool) -> Result<(), RepoError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id BIGSERIAL PRIMARY KEY,
            word TEXT NOT NULL,
            translation TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

type ItemRow = (i64, String, String);

fn row_to_item(row: ItemRow) -> TranslationItem {
    TranslationItem {
        id: row.0,
        word: row.1,
        translation: row.2,
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn get_item_by_id(&self, id: i64) -> Result<TranslationItem, RepoError> {
        const QUERY: &str = "SELECT id, word, translation FROM items WHERE id = $1";
        tracing::debug!(sql = QUERY, id, "query");
        let row: Option<ItemRow> = sqlx::query_as(QUERY)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(row_to_item).ok_or(RepoError::NotFound)
    }

    async fn create_item(&self, item: &TranslationItem) -> Result<i64, RepoError> {
        // Id column is excluded so a caller-supplied id never reaches the store.
        const QUERY: &str = "INSERT INTO items(word, translation) VALUES ($1, $2) RETURNING id";
        tracing::debug!(sql = QUERY, "query");
        let (id,): (i64,) = sqlx::query_as(QUERY)
            .bind(&item.word)
            .bind(&item.translation)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update_item(&self, item: &TranslationItem) -> Result<(), RepoError> {
        const QUERY: &str = "UPDATE items SET word = $1, translation = $2 WHERE id = $3";
        tracing::debug!(sql = QUERY, id = item.id, "query");
        let result = sqlx::query(QUERY)
            .bind(&item.word)
            .bind(&item.translation)
            .bind(item.id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NoRowsAffected);
        }
        Ok(())
    }

    async fn list_items(&self) -> Result<Vec<TranslationItem>, RepoError> {
        const QUERY: &str = "SELECT id, word, translation FROM items ORDER BY word ASC";
        tracing::debug!(sql = QUERY, "query");
        let rows: Vec<ItemRow> = sqlx::query_as(QUERY).fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(row_to_item).collect())
    }

    async fn delete_item(&self, id: i64) -> Result<(), RepoError> {
        const QUERY: &str = "DELETE FROM items WHERE id = $1";
        tracing::debug!(sql = QUERY, id, "query");
        let result = sqlx::query(QUERY).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(RepoError::NoRowsAffected);
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::*;
    use std::sync::Mutex;

    /// In-memory stand-in for gateway tests. Observable semantics match the
    /// Postgres repository, including word-ordered listing and the
    /// rows-affected convention for update/delete misses.
    #[derive(Default)]
    pub(crate) struct InMemoryRepository {
        inner: Mutex<Inner>,
    }

    #[derive(Default)]
    struct Inner {
        next_id: i64,
        items: Vec<TranslationItem>,
    }

    impl InMemoryRepository {
        pub(crate) fn len(&self) -> usize {
            self.inner.lock().unwrap().items.len()
        }
    }

    #[async_trait]
    impl ItemRepository for InMemoryRepository {
        async fn get_item_by_id(&self, id: i64) -> Result<TranslationItem, RepoError> {
            let inner = self.inner.lock().unwrap();
            inner
                .items
                .iter()
                .find(|item| item.id == id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        async fn create_item(&self, item: &TranslationItem) -> Result<i64, RepoError> {
            let mut inner = self.inner.lock().unwrap();
            inner.next_id += 1;
            let id = inner.next_id;
            inner.items.push(TranslationItem {
                id,
                word: item.word.clone(),
                translation: item.translation.clone(),
            });
            Ok(id)
        }

        async fn update_item(&self, item: &TranslationItem) -> Result<(), RepoError> {
            let mut inner = self.inner.lock().unwrap();
            match inner.items.iter_mut().find(|i| i.id == item.id) {
                Some(existing) => {
                    existing.word = item.word.clone();
                    existing.translation = item.translation.clone();
                    Ok(())
                }
                None => Err(RepoError::NoRowsAffected),
            }
        }

        async fn list_items(&self) -> Result<Vec<TranslationItem>, RepoError> {
            let mut items = self.inner.lock().unwrap().items.clone();
            items.sort_by(|a, b| a.word.cmp(&b.word));
            Ok(items)
        }

        async fn delete_item(&self, id: i64) -> Result<(), RepoError> {
            let mut inner = self.inner.lock().unwrap();
            let before = inner.items.len();
            inner.items.retain(|item| item.id != id);
            if inner.items.len() == before {
                return Err(RepoError::NoRowsAffected);
            }
            Ok(())
        }
    }
}
