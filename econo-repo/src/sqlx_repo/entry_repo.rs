use crate::entry_repo::EntryRepoError::EntryNotFound;
use crate::entry_repo::{Entry, EntryRepo, EntryRepoError, EntryUpdate, NewEntry};
use crate::sqlx_repo::SQLxRepo;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use tracing::instrument;

const SELECT_ENTRY: &str = "SELECT id, id_usuario AS user_id, tipo AS kind, id_categoria AS category_id, descricao AS description, valor AS amount, data AS date FROM financas";

impl SQLxRepo {
    async fn get_entry_row(&self, entry_id: i32) -> Result<Option<Entry>, EntryRepoError> {
        let entry = sqlx::query_as::<_, Entry>(&format!("{} WHERE id = $1", SELECT_ENTRY))
            .bind(entry_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to get entry {}", entry_id))?;
        Ok(entry)
    }
}

#[async_trait]
impl EntryRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_entry(&self, entry_id: i32) -> Result<Entry, EntryRepoError> {
        self.get_entry_row(entry_id)
            .await?
            .ok_or(EntryNotFound(entry_id))
    }

    #[instrument(skip(self))]
    async fn get_all_entries(&self) -> Result<Vec<Entry>, EntryRepoError> {
        let entries =
            sqlx::query_as::<_, Entry>(&format!("{} ORDER BY data DESC, id DESC", SELECT_ENTRY))
                .fetch_all(&self.pool)
                .await
                .context("Unable to get entries")?;
        Ok(entries)
    }

    #[instrument(skip(self, new_entry))]
    async fn create_entry(&self, new_entry: NewEntry) -> Result<Entry, EntryRepoError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO financas(id_usuario, tipo, id_categoria, descricao, valor, data) VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(new_entry.user_id)
        .bind(&new_entry.kind)
        .bind(new_entry.category_id)
        .bind(&new_entry.description)
        .bind(new_entry.amount)
        .bind(new_entry.date)
        .fetch_one(&self.pool)
        .await
        .context("Unable to insert entry")?;

        self.get_entry_row(id)
            .await?
            .ok_or_else(|| EntryRepoError::Other(anyhow!("Entry {} missing after insert", id)))
    }

    #[instrument(skip(self, update))]
    async fn update_entry(
        &self,
        entry_id: i32,
        update: EntryUpdate,
    ) -> Result<Entry, EntryRepoError> {
        let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM financas WHERE id = $1")
            .bind(entry_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to check for entry {}", entry_id))?;
        if exists.is_none() {
            return Err(EntryNotFound(entry_id));
        }

        let mut query_builder = QueryBuilder::new("UPDATE financas SET ");
        let mut fields = query_builder.separated(", ");
        if let Some(user_id) = update.user_id {
            fields.push("id_usuario = ").push_bind_unseparated(user_id);
        }
        if let Some(kind) = update.kind {
            fields.push("tipo = ").push_bind_unseparated(kind);
        }
        if let Some(category_id) = update.category_id {
            fields
                .push("id_categoria = ")
                .push_bind_unseparated(category_id);
        }
        if let Some(description) = update.description {
            fields
                .push("descricao = ")
                .push_bind_unseparated(description);
        }
        if let Some(amount) = update.amount {
            fields.push("valor = ").push_bind_unseparated(amount);
        }
        if let Some(date) = update.date {
            fields.push("data = ").push_bind_unseparated(date);
        }
        query_builder.push(" WHERE id = ").push_bind(entry_id);
        query_builder
            .build()
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to update entry {}", entry_id))?;

        self.get_entry_row(entry_id)
            .await?
            .ok_or(EntryNotFound(entry_id))
    }

    #[instrument(skip(self))]
    async fn delete_entry(&self, entry_id: i32) -> Result<(), EntryRepoError> {
        let result = sqlx::query("DELETE FROM financas WHERE id = $1")
            .bind(entry_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to delete entry {}", entry_id))?;
        if result.rows_affected() == 0 {
            Err(EntryNotFound(entry_id))
        } else {
            Ok(())
        }
    }
}
