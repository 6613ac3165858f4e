//! # テスト用モックリポジトリ
//!
//! ハンドラ・ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use todo_domain::todo::{TodoId, TodoItem, TodoText};

use crate::{error::InfraError, repository::TodoRepository};

// ===== MockTodoRepository =====

#[derive(Clone, Default)]
pub struct MockTodoRepository {
    todos:       Arc<Mutex<Vec<TodoItem>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// すべての操作が接続エラーで失敗するリポジトリを作成する
    pub fn unavailable() -> Self {
        let repo = Self::new();
        repo.set_unavailable(true);
        repo
    }

    /// ストアの到達可否を切り替える
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn add_todo(&self, item: TodoItem) {
        self.todos.lock().unwrap().push(item);
    }

    pub fn snapshot(&self) -> Vec<TodoItem> {
        self.todos.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<(), InfraError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn list_all(&self) -> Result<Vec<TodoItem>, InfraError> {
        self.check_available()?;
        Ok(self.snapshot())
    }

    async fn create(&self, text: TodoText) -> Result<TodoItem, InfraError> {
        self.check_available()?;
        let item = TodoItem::new(TodoId::new(), text);
        self.todos.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError> {
        self.check_available()?;
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| t.id() != id);
        Ok(todos.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::InfraErrorKind;

    fn text(s: &str) -> TodoText {
        TodoText::new(s).unwrap()
    }

    #[tokio::test]
    async fn test_createした項目がlist_allに作成順で含まれる() {
        let repo = MockTodoRepository::new();

        let first = repo.create(text("first")).await.unwrap();
        let second = repo.create(text("second")).await.unwrap();

        assert_eq!(repo.list_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_deleteは2回目以降falseを返す() {
        let repo = MockTodoRepository::new();
        let item = repo.create(text("once")).await.unwrap();

        assert!(repo.delete(item.id()).await.unwrap());
        assert!(!repo.delete(item.id()).await.unwrap());
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unavailableではすべての操作がdatabaseエラーになる() {
        let repo = MockTodoRepository::unavailable();

        let err = repo.list_all().await.unwrap_err();
        assert!(matches!(err.kind(), InfraErrorKind::Database(_)));
        assert!(repo.create(text("x")).await.is_err());
        assert!(repo.delete(&TodoId::new()).await.is_err());
    }
}
