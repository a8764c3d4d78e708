mod category_repo;
mod entry_repo;
mod entry_tag_repo;
mod tag_repo;
mod user_repo;

use crate::Repos;
use std::sync::Arc;

pub fn create_repos() -> Repos {
    Repos {
        user_repo: Arc::new(user_repo::MemUserRepo::new()),
        category_repo: Arc::new(category_repo::MemCategoryRepo::new()),
        entry_repo: Arc::new(entry_repo::MemEntryRepo::new()),
        tag_repo: Arc::new(tag_repo::MemTagRepo::new()),
        entry_tag_repo: Arc::new(entry_tag_repo::MemEntryTagRepo::new()),
    }
}
