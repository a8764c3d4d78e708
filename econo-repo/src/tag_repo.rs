use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait TagRepo: Sync + Send {
    async fn get_tag(&self, tag_id: i32) -> Result<Tag, TagRepoError>;

    /// All tags, ordered by id ascending.
    async fn get_all_tags(&self) -> Result<Vec<Tag>, TagRepoError>;

    async fn create_tag(&self, new_tag: NewTag) -> Result<Tag, TagRepoError>;

    /// Applies the supplied fields only. `update` must contain at least one
    /// field.
    async fn update_tag(&self, tag_id: i32, update: TagUpdate) -> Result<Tag, TagRepoError>;

    async fn delete_tag(&self, tag_id: i32) -> Result<(), TagRepoError>;
}

#[derive(Error, Debug)]
pub enum TagRepoError {
    #[error("Tag with id {0} not found")]
    TagNotFound(i32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Row of the `tags` table. `color` is a hex-like string such as `FF0000`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, sqlx::FromRow)]
pub struct Tag {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cor")]
    pub color: String,
    #[serde(rename = "id_usuario")]
    pub user_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct NewTag {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cor")]
    pub color: String,
    #[serde(rename = "id_usuario")]
    pub user_id: Option<i32>,
}

impl NewTag {
    pub const fn new(name: String, color: String, user_id: Option<i32>) -> NewTag {
        NewTag {
            name,
            color,
            user_id,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct TagUpdate {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "cor")]
    pub color: Option<String>,
    #[serde(rename = "id_usuario")]
    pub user_id: Option<i32>,
}

impl TagUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none() && self.user_id.is_none()
    }
}
