//! Generic keyed collection backing each entity kind.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A record type that carries its own creation timestamp.
pub trait Stored: Clone {
    /// When the record was inserted.
    fn created_at(&self) -> DateTime<Utc>;
}

struct Row<T> {
    /// Store-wide insertion sequence, used as the ordering tie-break when
    /// two records share a creation timestamp.
    seq: u64,
    value: T,
}

/// A keyed in-memory collection with creation-time-descending retrieval.
///
/// Reads return owned clones so callers never hold a lock across their own
/// work. Each operation holds the lock for its full duration and nothing
/// suspends while locked.
pub struct Table<T> {
    rows: RwLock<HashMap<Uuid, Row<T>>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Stored> Table<T> {
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, Row<T>>> {
        // A poisoned lock still guards a consistent map: no operation
        // panics between mutations.
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, Row<T>>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts a record under `id` with the given insertion sequence.
    pub fn insert(&self, id: Uuid, seq: u64, value: T) {
        self.write().insert(id, Row { seq, value });
    }

    /// Returns the record stored under `id`, if any.
    pub fn get(&self, id: Uuid) -> Option<T> {
        self.read().get(&id).map(|row| row.value.clone())
    }

    /// Returns all records, most recently created first. Records sharing a
    /// creation timestamp keep their insertion order, as a stable sort
    /// over an insertion-ordered collection would leave them.
    pub fn all_desc(&self) -> Vec<T> {
        self.filter_desc(|_| true)
    }

    /// Returns records matching `pred`, in the same order as [`all_desc`].
    ///
    /// [`all_desc`]: Self::all_desc
    pub fn filter_desc(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        let rows = self.read();
        let mut matched: Vec<(u64, T)> = rows
            .values()
            .filter(|row| pred(&row.value))
            .map(|row| (row.seq, row.value.clone()))
            .collect();
        drop(rows);
        matched.sort_by(|a, b| {
            b.1.created_at()
                .cmp(&a.1.created_at())
                .then(a.0.cmp(&b.0))
        });
        matched.into_iter().map(|(_, value)| value).collect()
    }

    /// Mutates the record under `id` in place, returning the updated value,
    /// or `None` (with no side effect) when absent.
    pub fn update(&self, id: Uuid, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut rows = self.write();
        let row = rows.get_mut(&id)?;
        f(&mut row.value);
        Some(row.value.clone())
    }

    /// Removes the record under `id`. Returns whether a record existed.
    pub fn remove(&self, id: Uuid) -> bool {
        self.write().remove(&id).is_some()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.read().len()
    }
}
