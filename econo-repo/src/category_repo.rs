use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait CategoryRepo: Sync + Send {
    async fn get_category(&self, category_id: i32) -> Result<Category, CategoryRepoError>;

    /// All categories, ordered by id ascending.
    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryRepoError>;

    async fn create_category(&self, new_category: NewCategory)
        -> Result<Category, CategoryRepoError>;

    /// Applies the supplied fields only. `update` must contain at least one
    /// field.
    async fn update_category(
        &self,
        category_id: i32,
        update: CategoryUpdate,
    ) -> Result<Category, CategoryRepoError>;

    async fn delete_category(&self, category_id: i32) -> Result<(), CategoryRepoError>;
}

#[derive(Error, Debug)]
pub enum CategoryRepoError {
    #[error("Category with id {0} not found")]
    CategoryNotFound(i32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Row of the `categorias` table. `kind` is a short code such as `R`
/// (revenue) or `D` (expense).
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct NewCategory {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
}

impl NewCategory {
    pub const fn new(name: String, kind: String) -> NewCategory {
        NewCategory { name, kind }
    }
}

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct CategoryUpdate {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: Option<String>,
}

impl CategoryUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.kind.is_none()
    }
}
