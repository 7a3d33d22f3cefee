//! Read and write descriptors shared by every entity

use serde::{Deserialize, Serialize};

/// Optional server-side pagination. No limit means the whole result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Page {
    pub fn all() -> Self {
        Self::default()
    }

    /// Apply the page to an already ordered sequence
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let offset = self.offset.unwrap_or(0) as usize;
        let iter = items.into_iter().skip(offset);
        match self.limit {
            Some(limit) => iter.take(limit as usize).collect(),
            None => iter.collect(),
        }
    }
}

/// Outcome of an insert or delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteResult {
    pub affected_rows: u64,
    /// Generated identity of an inserted row
    pub insert_id: Option<i32>,
}

impl WriteResult {
    pub fn inserted(id: i32) -> Self {
        Self {
            affected_rows: 1,
            insert_id: Some(id),
        }
    }

    pub fn deleted(affected_rows: u64) -> Self {
        Self {
            affected_rows,
            insert_id: None,
        }
    }
}
