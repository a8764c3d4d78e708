use crate::entry_tag_repo::EntryTagRepoError::LinkNotFound;
use crate::entry_tag_repo::{EntryTagLink, EntryTagRepo, EntryTagRepoError};
use crate::sqlx_repo::SQLxRepo;
use anyhow::Context;
use async_trait::async_trait;
use tracing::instrument;

#[async_trait]
impl EntryTagRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_all_links(&self) -> Result<Vec<EntryTagLink>, EntryTagRepoError> {
        let links = sqlx::query_as::<_, EntryTagLink>(
            "SELECT id_financa AS entry_id, id_tag AS tag_id FROM financas_tags ORDER BY id_financa, id_tag",
        )
        .fetch_all(&self.pool)
        .await
        .context("Unable to get entry-tag links")?;
        Ok(links)
    }

    #[instrument(skip(self))]
    async fn create_link(&self, link: EntryTagLink) -> Result<(), EntryTagRepoError> {
        sqlx::query("INSERT INTO financas_tags(id_financa, id_tag) VALUES ($1, $2)")
            .bind(link.entry_id)
            .bind(link.tag_id)
            .execute(&self.pool)
            .await
            .with_context(|| {
                format!(
                    "Unable to link entry {} with tag {}",
                    link.entry_id, link.tag_id
                )
            })?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_link(&self, entry_id: i32, tag_id: i32) -> Result<(), EntryTagRepoError> {
        let result =
            sqlx::query("DELETE FROM financas_tags WHERE id_financa = $1 AND id_tag = $2")
                .bind(entry_id)
                .bind(tag_id)
                .execute(&self.pool)
                .await
                .with_context(|| {
                    format!("Unable to unlink entry {} from tag {}", entry_id, tag_id)
                })?;
        if result.rows_affected() == 0 {
            Err(LinkNotFound(entry_id, tag_id))
        } else {
            Ok(())
        }
    }
}
