//! In-process person store. Ids start at 1 and are never reused.

use super::{not_found, PersonStore};
use crate::error::AppError;
use crate::model::{NewPerson, Person};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Person>,
}

#[derive(Default)]
pub struct MemoryPersonStore {
    inner: RwLock<Inner>,
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_err() -> AppError {
    AppError::Persistence("memory store lock poisoned".into())
}

#[async_trait]
impl PersonStore for MemoryPersonStore {
    async fn create(&self, person: &NewPerson) -> Result<Person, AppError> {
        let mut guard = self.inner.write().map_err(|_| lock_err())?;
        guard.next_id += 1;
        let stored = Person {
            id: guard.next_id,
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            age: person.age,
        };
        guard.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Person, AppError> {
        let guard = self.inner.read().map_err(|_| lock_err())?;
        guard.rows.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        let guard = self.inner.read().map_err(|_| lock_err())?;
        Ok(guard.rows.values().cloned().collect())
    }

    async fn save(&self, person: &Person) -> Result<(), AppError> {
        let mut guard = self.inner.write().map_err(|_| lock_err())?;
        match guard.rows.get_mut(&person.id) {
            Some(row) => {
                *row = person.clone();
                Ok(())
            }
            None => Err(not_found(person.id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut guard = self.inner.write().map_err(|_| lock_err())?;
        guard.rows.remove(&id).map(|_| ()).ok_or_else(|| not_found(id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
