//! In-process store backed by a `Vec` behind a tokio `RwLock`.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NewTodo, StoreError, TodoPatch, TodoStore};
use crate::types::Todo;

/// Keeps todos in insertion order. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.todos.read().await.clone())
    }

    async fn insert(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            text: todo.text,
            completed: todo.completed,
        };
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn find_and_update(&self, id: &str, patch: TodoPatch) -> Result<Todo, StoreError> {
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        patch.apply(todo);
        Ok(todo.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut todos = self.todos.write().await;
        let index = todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        todos.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_todo(text: &str) -> NewTodo {
        NewTodo {
            text: text.to_string(),
            completed: false,
        }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = MemoryStore::new();
        let a = store.insert(new_todo("a")).await.unwrap();
        let b = store.insert(new_todo("b")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn find_all_preserves_insertion_order() {
        let store = MemoryStore::new();
        for text in ["first", "second", "third"] {
            store.insert(new_todo(text)).await.unwrap();
        }
        let texts: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|todo| todo.text)
            .collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn update_changes_completed_only() {
        let store = MemoryStore::new();
        let created = store.insert(new_todo("walk dog")).await.unwrap();
        let updated = store
            .find_and_update(&created.id, TodoPatch::completed(true))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.text, "walk dog");
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        store.insert(new_todo("only")).await.unwrap();
        let err = store
            .find_and_update("missing", TodoPatch::completed(true))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "missing"));
        assert!(!store.find_all().await.unwrap()[0].completed);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = MemoryStore::new();
        let created = store.insert(new_todo("gone")).await.unwrap();
        store.delete_by_id(&created.id).await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());

        let err = store.delete_by_id(&created.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
