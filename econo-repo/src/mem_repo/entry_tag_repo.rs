use crate::entry_tag_repo::EntryTagRepoError::LinkNotFound;
use crate::entry_tag_repo::{EntryTagLink, EntryTagRepo, EntryTagRepoError};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub struct MemEntryTagRepo {
    // BTreeSet keeps links in (entry_id, tag_id) order.
    links: RwLock<BTreeSet<EntryTagLink>>,
}

impl MemEntryTagRepo {
    pub fn new() -> MemEntryTagRepo {
        MemEntryTagRepo {
            links: RwLock::new(BTreeSet::new()),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<BTreeSet<EntryTagLink>>, anyhow::Error> {
        self.links.read().map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<BTreeSet<EntryTagLink>>, anyhow::Error> {
        self.links
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

#[async_trait]
impl EntryTagRepo for MemEntryTagRepo {
    async fn get_all_links(&self) -> Result<Vec<EntryTagLink>, EntryTagRepoError> {
        let read_guard = self.read_lock()?;

        Ok(read_guard.iter().copied().collect())
    }

    async fn create_link(&self, link: EntryTagLink) -> Result<(), EntryTagRepoError> {
        let mut write_guard = self.write_lock()?;

        write_guard.insert(link);
        Ok(())
    }

    async fn delete_link(&self, entry_id: i32, tag_id: i32) -> Result<(), EntryTagRepoError> {
        let mut write_guard = self.write_lock()?;

        if write_guard.remove(&EntryTagLink::new(entry_id, tag_id)) {
            Ok(())
        } else {
            Err(LinkNotFound(entry_id, tag_id))
        }
    }
}
