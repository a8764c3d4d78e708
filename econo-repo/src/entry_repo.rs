use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait EntryRepo: Sync + Send {
    async fn get_entry(&self, entry_id: i32) -> Result<Entry, EntryRepoError>;

    /// All entries, most recent first: ordered by date descending, ties
    /// broken by id descending.
    async fn get_all_entries(&self) -> Result<Vec<Entry>, EntryRepoError>;

    async fn create_entry(&self, new_entry: NewEntry) -> Result<Entry, EntryRepoError>;

    /// Applies the supplied fields only. `update` must contain at least one
    /// field.
    async fn update_entry(&self, entry_id: i32, update: EntryUpdate)
        -> Result<Entry, EntryRepoError>;

    async fn delete_entry(&self, entry_id: i32) -> Result<(), EntryRepoError>;
}

#[derive(Error, Debug)]
pub enum EntryRepoError {
    #[error("Entry with id {0} not found")]
    EntryNotFound(i32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Row of the `financas` table: a single revenue/expense record owned by a
/// user. Timestamps travel as ISO-8601 strings on the wire.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, sqlx::FromRow)]
pub struct Entry {
    pub id: i32,
    #[serde(rename = "id_usuario")]
    pub user_id: i32,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "id_categoria")]
    pub category_id: Option<i32>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "valor")]
    pub amount: Decimal,
    #[serde(rename = "data")]
    pub date: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct NewEntry {
    #[serde(rename = "id_usuario")]
    pub user_id: i32,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "id_categoria")]
    pub category_id: Option<i32>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "valor")]
    pub amount: Decimal,
    #[serde(rename = "data")]
    pub date: NaiveDateTime,
}

impl NewEntry {
    pub const fn new(
        user_id: i32,
        kind: String,
        category_id: Option<i32>,
        description: Option<String>,
        amount: Decimal,
        date: NaiveDateTime,
    ) -> NewEntry {
        NewEntry {
            user_id,
            kind,
            category_id,
            description,
            amount,
            date,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct EntryUpdate {
    #[serde(rename = "id_usuario")]
    pub user_id: Option<i32>,
    #[serde(rename = "tipo")]
    pub kind: Option<String>,
    #[serde(rename = "id_categoria")]
    pub category_id: Option<i32>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "valor")]
    pub amount: Option<Decimal>,
    #[serde(rename = "data")]
    pub date: Option<NaiveDateTime>,
}

impl EntryUpdate {
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.kind.is_none()
            && self.category_id.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.date.is_none()
    }
}
