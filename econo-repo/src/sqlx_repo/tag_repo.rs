use crate::sqlx_repo::SQLxRepo;
use crate::tag_repo::TagRepoError::TagNotFound;
use crate::tag_repo::{NewTag, Tag, TagRepo, TagRepoError, TagUpdate};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use tracing::instrument;

const SELECT_TAG: &str = "SELECT id, nome AS name, cor AS color, id_usuario AS user_id FROM tags";

impl SQLxRepo {
    async fn get_tag_row(&self, tag_id: i32) -> Result<Option<Tag>, TagRepoError> {
        let tag = sqlx::query_as::<_, Tag>(&format!("{} WHERE id = $1", SELECT_TAG))
            .bind(tag_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to get tag {}", tag_id))?;
        Ok(tag)
    }
}

#[async_trait]
impl TagRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_tag(&self, tag_id: i32) -> Result<Tag, TagRepoError> {
        self.get_tag_row(tag_id).await?.ok_or(TagNotFound(tag_id))
    }

    #[instrument(skip(self))]
    async fn get_all_tags(&self) -> Result<Vec<Tag>, TagRepoError> {
        let tags = sqlx::query_as::<_, Tag>(&format!("{} ORDER BY id", SELECT_TAG))
            .fetch_all(&self.pool)
            .await
            .context("Unable to get tags")?;
        Ok(tags)
    }

    #[instrument(skip(self, new_tag))]
    async fn create_tag(&self, new_tag: NewTag) -> Result<Tag, TagRepoError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO tags(nome, cor, id_usuario) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&new_tag.name)
        .bind(&new_tag.color)
        .bind(new_tag.user_id)
        .fetch_one(&self.pool)
        .await
        .context("Unable to insert tag")?;

        self.get_tag_row(id)
            .await?
            .ok_or_else(|| TagRepoError::Other(anyhow!("Tag {} missing after insert", id)))
    }

    #[instrument(skip(self, update))]
    async fn update_tag(&self, tag_id: i32, update: TagUpdate) -> Result<Tag, TagRepoError> {
        let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM tags WHERE id = $1")
            .bind(tag_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to check for tag {}", tag_id))?;
        if exists.is_none() {
            return Err(TagNotFound(tag_id));
        }

        let mut query_builder = QueryBuilder::new("UPDATE tags SET ");
        let mut fields = query_builder.separated(", ");
        if let Some(name) = update.name {
            fields.push("nome = ").push_bind_unseparated(name);
        }
        if let Some(color) = update.color {
            fields.push("cor = ").push_bind_unseparated(color);
        }
        if let Some(user_id) = update.user_id {
            fields.push("id_usuario = ").push_bind_unseparated(user_id);
        }
        query_builder.push(" WHERE id = ").push_bind(tag_id);
        query_builder
            .build()
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to update tag {}", tag_id))?;

        self.get_tag_row(tag_id).await?.ok_or(TagNotFound(tag_id))
    }

    #[instrument(skip(self))]
    async fn delete_tag(&self, tag_id: i32) -> Result<(), TagRepoError> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(tag_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to delete tag {}", tag_id))?;
        if result.rows_affected() == 0 {
            Err(TagNotFound(tag_id))
        } else {
            Ok(())
        }
    }
}
