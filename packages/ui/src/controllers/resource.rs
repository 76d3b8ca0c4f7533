//! The in-memory copy of a server collection.
//!
//! [`ResourceList`] only ever splices server-provided items: creates are
//! prepended, updates replace by id, deletes remove by id. It never merges
//! fields itself.

use api::{ApiError, Project, Task, User};

/// Anything the backend identifies by a numeric primary key.
pub trait Identified {
    fn id(&self) -> u64;
}

impl Identified for Project {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Identified for Task {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Identified for User {
    fn id(&self) -> u64 {
        self.id
    }
}

/// `Idle → Loading → {Loaded | Failed}`; any reload re-enters `Loading`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceList<T> {
    items: Vec<T>,
    phase: LoadPhase,
}

impl<T> Default for ResourceList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: LoadPhase::Idle,
        }
    }
}

impl<T: Identified> ResourceList<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Adopt a fetched collection. On failure the previous items stay and the
    /// error is handed back for the caller to phrase.
    pub fn finish_load(&mut self, result: Result<Vec<T>, ApiError>) -> Result<(), ApiError> {
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = LoadPhase::Loaded;
                Ok(())
            }
            Err(err) => {
                self.phase = LoadPhase::Failed;
                Err(err)
            }
        }
    }

    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Replace the entry with the same id. Returns false when it is not present.
    pub fn replace(&mut self, item: T) -> bool {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            username: name.to_string(),
            email: String::new(),
        }
    }

    #[test]
    fn test_load_lifecycle() {
        let mut list = ResourceList::<User>::default();
        assert_eq!(list.phase(), LoadPhase::Idle);

        list.begin_load();
        assert!(list.is_loading());

        list.finish_load(Ok(vec![user(1, "ana"), user(2, "bia")]))
            .unwrap();
        assert_eq!(list.phase(), LoadPhase::Loaded);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_failed_reload_keeps_previous_items() {
        let mut list = ResourceList::<User>::default();
        list.finish_load(Ok(vec![user(1, "ana")])).unwrap();

        list.begin_load();
        let err = list
            .finish_load(Err(ApiError::Network("refused".into())))
            .unwrap_err();

        assert_eq!(err, ApiError::Network("refused".into()));
        assert_eq!(list.phase(), LoadPhase::Failed);
        assert_eq!(list.items(), &[user(1, "ana")]);
    }

    #[test]
    fn test_splicing_by_id() {
        let mut list = ResourceList::<User>::default();
        list.finish_load(Ok(vec![user(1, "ana"), user(2, "bia")]))
            .unwrap();

        list.prepend(user(3, "caio"));
        assert_eq!(list.items()[0].id, 3);

        assert!(list.replace(user(2, "beatriz")));
        assert_eq!(list.get(2).unwrap().username, "beatriz");
        assert_eq!(list.get(1).unwrap().username, "ana");
        assert!(!list.replace(user(9, "ghost")));

        assert_eq!(list.remove(1).map(|u| u.id), Some(1));
        assert!(list.remove(1).is_none());
        assert_eq!(list.len(), 2);
    }
}
