use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The link table has no surrogate id; the `(entry_id, tag_id)` pair is the
/// natural key, so there is no get-by-id or update.
#[async_trait]
pub trait EntryTagRepo: Sync + Send {
    /// All links, ordered by entry id then tag id.
    async fn get_all_links(&self) -> Result<Vec<EntryTagLink>, EntryTagRepoError>;

    /// Inserts the pair as-is. Neither side is checked for existence; the
    /// database's foreign keys are the only validation.
    async fn create_link(&self, link: EntryTagLink) -> Result<(), EntryTagRepoError>;

    async fn delete_link(&self, entry_id: i32, tag_id: i32) -> Result<(), EntryTagRepoError>;
}

#[derive(Error, Debug)]
pub enum EntryTagRepoError {
    #[error("Link between entry {0} and tag {1} not found")]
    LinkNotFound(i32, i32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Row of the `financas_tags` table.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, sqlx::FromRow)]
pub struct EntryTagLink {
    #[serde(rename = "id_financa")]
    pub entry_id: i32,
    #[serde(rename = "id_tag")]
    pub tag_id: i32,
}

impl EntryTagLink {
    pub const fn new(entry_id: i32, tag_id: i32) -> EntryTagLink {
        EntryTagLink { entry_id, tag_id }
    }
}
