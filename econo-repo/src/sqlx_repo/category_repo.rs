use crate::category_repo::CategoryRepoError::CategoryNotFound;
use crate::category_repo::{
    Category, CategoryRepo, CategoryRepoError, CategoryUpdate, NewCategory,
};
use crate::sqlx_repo::SQLxRepo;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use sqlx::QueryBuilder;
use tracing::instrument;

const SELECT_CATEGORY: &str = "SELECT id, nome AS name, tipo AS kind FROM categorias";

impl SQLxRepo {
    async fn get_category_row(
        &self,
        category_id: i32,
    ) -> Result<Option<Category>, CategoryRepoError> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "{} WHERE id = $1",
            SELECT_CATEGORY
        ))
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to get category {}", category_id))?;
        Ok(category)
    }
}

#[async_trait]
impl CategoryRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_category(&self, category_id: i32) -> Result<Category, CategoryRepoError> {
        self.get_category_row(category_id)
            .await?
            .ok_or(CategoryNotFound(category_id))
    }

    #[instrument(skip(self))]
    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryRepoError> {
        let categories =
            sqlx::query_as::<_, Category>(&format!("{} ORDER BY id", SELECT_CATEGORY))
                .fetch_all(&self.pool)
                .await
                .context("Unable to get categories")?;
        Ok(categories)
    }

    #[instrument(skip(self, new_category))]
    async fn create_category(
        &self,
        new_category: NewCategory,
    ) -> Result<Category, CategoryRepoError> {
        let id: i32 =
            sqlx::query_scalar("INSERT INTO categorias(nome, tipo) VALUES ($1, $2) RETURNING id")
                .bind(&new_category.name)
                .bind(&new_category.kind)
                .fetch_one(&self.pool)
                .await
                .context("Unable to insert category")?;

        self.get_category_row(id)
            .await?
            .ok_or_else(|| CategoryRepoError::Other(anyhow!("Category {} missing after insert", id)))
    }

    #[instrument(skip(self, update))]
    async fn update_category(
        &self,
        category_id: i32,
        update: CategoryUpdate,
    ) -> Result<Category, CategoryRepoError> {
        let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM categorias WHERE id = $1")
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to check for category {}", category_id))?;
        if exists.is_none() {
            return Err(CategoryNotFound(category_id));
        }

        let mut query_builder = QueryBuilder::new("UPDATE categorias SET ");
        let mut fields = query_builder.separated(", ");
        if let Some(name) = update.name {
            fields.push("nome = ").push_bind_unseparated(name);
        }
        if let Some(kind) = update.kind {
            fields.push("tipo = ").push_bind_unseparated(kind);
        }
        query_builder.push(" WHERE id = ").push_bind(category_id);
        query_builder
            .build()
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to update category {}", category_id))?;

        self.get_category_row(category_id)
            .await?
            .ok_or(CategoryNotFound(category_id))
    }

    #[instrument(skip(self))]
    async fn delete_category(&self, category_id: i32) -> Result<(), CategoryRepoError> {
        let result = sqlx::query("DELETE FROM categorias WHERE id = $1")
            .bind(category_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to delete category {}", category_id))?;
        if result.rows_affected() == 0 {
            Err(CategoryNotFound(category_id))
        } else {
            Ok(())
        }
    }
}
