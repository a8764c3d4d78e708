mod category_repo;
mod entry_repo;
mod entry_tag_repo;
mod tag_repo;
mod user_repo;

use crate::Repos;
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::Arc;

/// One pooled connection to the pre-provisioned schema. A single clone-able
/// struct implements every entity repo trait.
#[derive(Clone)]
pub struct SQLxRepo {
    pool: Pool<Postgres>,
}

impl SQLxRepo {
    pub fn new(pool: Pool<Postgres>) -> SQLxRepo {
        SQLxRepo { pool }
    }
}

pub async fn create_repos(database_url: String, max_pool_size: u32) -> Result<Repos, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_pool_size)
        .connect(&database_url)
        .await
        .context("Unable to connect to database")?;

    let repo = SQLxRepo::new(pool);
    Ok(Repos {
        user_repo: Arc::new(repo.clone()),
        category_repo: Arc::new(repo.clone()),
        entry_repo: Arc::new(repo.clone()),
        tag_repo: Arc::new(repo.clone()),
        entry_tag_repo: Arc::new(repo),
    })
}
