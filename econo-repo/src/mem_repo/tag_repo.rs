use crate::tag_repo::TagRepoError::TagNotFound;
use crate::tag_repo::{NewTag, Tag, TagRepo, TagRepoError, TagUpdate};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct State {
    tags: HashMap<i32, Tag>,
    next_id: i32,
}

pub struct MemTagRepo {
    state: RwLock<State>,
}

impl MemTagRepo {
    pub fn new() -> MemTagRepo {
        let state = State {
            tags: HashMap::new(),
            next_id: 1,
        };
        MemTagRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state.read().map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

#[async_trait]
impl TagRepo for MemTagRepo {
    async fn get_tag(&self, tag_id: i32) -> Result<Tag, TagRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .tags
            .get(&tag_id)
            .cloned()
            .ok_or(TagNotFound(tag_id))
    }

    async fn get_all_tags(&self) -> Result<Vec<Tag>, TagRepoError> {
        let read_guard = self.read_lock()?;

        let mut tags: Vec<Tag> = read_guard.tags.values().cloned().collect();
        tags.sort_by_key(|t| t.id);
        Ok(tags)
    }

    async fn create_tag(&self, new_tag: NewTag) -> Result<Tag, TagRepoError> {
        let mut write_guard = self.write_lock()?;

        let id = write_guard.next_id;
        write_guard.next_id += 1;

        let tag = Tag {
            id,
            name: new_tag.name,
            color: new_tag.color,
            user_id: new_tag.user_id,
        };
        write_guard.tags.insert(id, tag.clone());
        Ok(tag)
    }

    async fn update_tag(&self, tag_id: i32, update: TagUpdate) -> Result<Tag, TagRepoError> {
        let mut write_guard = self.write_lock()?;

        let tag = write_guard
            .tags
            .get_mut(&tag_id)
            .ok_or(TagNotFound(tag_id))?;
        if let Some(name) = update.name {
            tag.name = name;
        }
        if let Some(color) = update.color {
            tag.color = color;
        }
        if let Some(user_id) = update.user_id {
            tag.user_id = Some(user_id);
        }
        Ok(tag.clone())
    }

    async fn delete_tag(&self, tag_id: i32) -> Result<(), TagRepoError> {
        let mut write_guard = self.write_lock()?;

        if write_guard.tags.remove(&tag_id).is_some() {
            Ok(())
        } else {
            Err(TagNotFound(tag_id))
        }
    }
}
