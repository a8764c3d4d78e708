use crate::entry_repo::EntryRepoError::EntryNotFound;
use crate::entry_repo::{Entry, EntryRepo, EntryRepoError, EntryUpdate, NewEntry};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct State {
    entries: HashMap<i32, Entry>,
    next_id: i32,
}

pub struct MemEntryRepo {
    state: RwLock<State>,
}

impl MemEntryRepo {
    pub fn new() -> MemEntryRepo {
        let state = State {
            entries: HashMap::new(),
            next_id: 1,
        };
        MemEntryRepo {
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
impl EntryRepo for MemEntryRepo {
    async fn get_entry(&self, entry_id: i32) -> Result<Entry, EntryRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .entries
            .get(&entry_id)
            .cloned()
            .ok_or(EntryNotFound(entry_id))
    }

    async fn get_all_entries(&self) -> Result<Vec<Entry>, EntryRepoError> {
        let read_guard = self.read_lock()?;

        let mut entries: Vec<Entry> = read_guard.entries.values().cloned().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(entries)
    }

    async fn create_entry(&self, new_entry: NewEntry) -> Result<Entry, EntryRepoError> {
        let mut write_guard = self.write_lock()?;

        let id = write_guard.next_id;
        write_guard.next_id += 1;

        let entry = Entry {
            id,
            user_id: new_entry.user_id,
            kind: new_entry.kind,
            category_id: new_entry.category_id,
            description: new_entry.description,
            amount: new_entry.amount,
            date: new_entry.date,
        };
        write_guard.entries.insert(id, entry.clone());
        Ok(entry)
    }

    async fn update_entry(
        &self,
        entry_id: i32,
        update: EntryUpdate,
    ) -> Result<Entry, EntryRepoError> {
        let mut write_guard = self.write_lock()?;

        let entry = write_guard
            .entries
            .get_mut(&entry_id)
            .ok_or(EntryNotFound(entry_id))?;
        if let Some(user_id) = update.user_id {
            entry.user_id = user_id;
        }
        if let Some(kind) = update.kind {
            entry.kind = kind;
        }
        if let Some(category_id) = update.category_id {
            entry.category_id = Some(category_id);
        }
        if let Some(description) = update.description {
            entry.description = Some(description);
        }
        if let Some(amount) = update.amount {
            entry.amount = amount;
        }
        if let Some(date) = update.date {
            entry.date = date;
        }
        Ok(entry.clone())
    }

    async fn delete_entry(&self, entry_id: i32) -> Result<(), EntryRepoError> {
        let mut write_guard = self.write_lock()?;

        if write_guard.entries.remove(&entry_id).is_some() {
            Ok(())
        } else {
            Err(EntryNotFound(entry_id))
        }
    }
}
