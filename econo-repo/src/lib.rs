use std::sync::Arc;

pub mod category_repo;
pub mod entry_repo;
pub mod entry_tag_repo;
pub mod tag_repo;
pub mod user_repo;

// implementation modules
pub mod mem_repo;
pub mod sqlx_repo;

use crate::category_repo::CategoryRepo;
use crate::entry_repo::EntryRepo;
use crate::entry_tag_repo::EntryTagRepo;
use crate::tag_repo::TagRepo;
use crate::user_repo::UserRepo;

/// Handles to a single storage backend, one per table.
#[derive(Clone)]
pub struct Repos {
    pub user_repo: Arc<dyn UserRepo>,
    pub category_repo: Arc<dyn CategoryRepo>,
    pub entry_repo: Arc<dyn EntryRepo>,
    pub tag_repo: Arc<dyn TagRepo>,
    pub entry_tag_repo: Arc<dyn EntryTagRepo>,
}
