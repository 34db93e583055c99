use std::cell::RefCell;

use crate::domain::{AppError, HistoryEntry};
use crate::ports::HistoryStore;

/// In-memory history store.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct MemoryHistoryStore {
    entries: RefCell<Vec<HistoryEntry>>,
    fail_writes: bool,
}

#[allow(dead_code)]
impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_writes() -> Self {
        Self { entries: RefCell::default(), fail_writes: true }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn save(&self, entry: &HistoryEntry) -> Result<(), AppError> {
        if self.fail_writes {
            return Err(AppError::HistoryError("store is read-only".to_string()));
        }
        self.entries.borrow_mut().push(entry.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, AppError> {
        let mut entries = self.entries.borrow().clone();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        Ok(entries.len() != before)
    }
}
