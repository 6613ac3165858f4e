//! Todo リスト操作ユースケース

use std::sync::Arc;

use todo_domain::todo::{TodoId, TodoItem, TodoText};
use todo_infra::repository::TodoRepository;

use crate::error::WebError;

/// Todo リスト操作ユースケース
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    /// すべての Todo 項目を取得する
    pub async fn list_todos(&self) -> Result<Vec<TodoItem>, WebError> {
        Ok(self.todo_repository.list_all().await?)
    }

    /// Todo 項目を追加する
    ///
    /// 前後の空白を除去した結果が空の場合や NUL 文字を含む場合は、何もせず `None` を返す。
    /// 利用者へのフィードバック経路はないため、エラーにはしない。
    pub async fn add_todo(&self, raw_text: &str) -> Result<Option<TodoItem>, WebError> {
        let Ok(text) = TodoText::new(raw_text) else {
            tracing::debug!("不正なテキストのため Todo の追加をスキップしました");
            return Ok(None);
        };

        let item = self.todo_repository.create(text).await?;
        tracing::info!(todo_id = %item.id(), "Todo を追加しました");
        Ok(Some(item))
    }

    /// Todo 項目を削除する
    ///
    /// 1. ID の形式を検証（不正なら `BadRequest`）
    /// 2. 削除（該当なしは成功扱い）
    pub async fn delete_todo(&self, raw_id: &str) -> Result<(), WebError> {
        let id = TodoId::parse(raw_id).map_err(|e| WebError::BadRequest(e.to_string()))?;

        if self.todo_repository.delete(&id).await? {
            tracing::info!(todo_id = %id, "Todo を削除しました");
        } else {
            tracing::debug!(todo_id = %id, "該当する Todo がないため削除をスキップしました");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use todo_infra::mock::MockTodoRepository;

    use super::*;

    fn sut_with(repo: &MockTodoRepository) -> TodoUseCaseImpl {
        TodoUseCaseImpl::new(Arc::new(repo.clone()))
    }

    #[tokio::test]
    async fn test_add_todoでトリミング済みのテキストが保存される() {
        let repo = MockTodoRepository::new();
        let sut = sut_with(&repo);

        let item = sut.add_todo("  Buy milk  ").await.unwrap().unwrap();

        assert_eq!(item.text().as_str(), "Buy milk");
        let todos = sut.list_todos().await.unwrap();
        assert_eq!(todos, vec![item]);
    }

    #[rstest]
    #[case::空文字列("")]
    #[case::空白のみ("    ")]
    #[case::改行とタブ("\n\t")]
    #[case::nul文字を含む("a\0b")]
    #[tokio::test]
    async fn test_add_todoは不正なテキストをスキップする(#[case] input: &str) {
        let repo = MockTodoRepository::new();
        let sut = sut_with(&repo);

        let result = sut.add_todo(input).await.unwrap();

        assert!(result.is_none());
        assert!(repo.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_delete_todoで項目が除外される() {
        let repo = MockTodoRepository::new();
        let sut = sut_with(&repo);
        let keep = sut.add_todo("keep").await.unwrap().unwrap();
        let target = sut.add_todo("remove").await.unwrap().unwrap();

        sut.delete_todo(&target.id().to_string()).await.unwrap();

        assert_eq!(repo.snapshot(), vec![keep]);
    }

    #[tokio::test]
    async fn test_delete_todoは存在しないidでも成功する() {
        let repo = MockTodoRepository::new();
        let sut = sut_with(&repo);
        let item = sut.add_todo("once").await.unwrap().unwrap();
        let id = item.id().to_string();

        sut.delete_todo(&id).await.unwrap();
        let second = sut.delete_todo(&id).await;

        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn test_delete_todoは不正なidをbad_requestにする() {
        let repo = MockTodoRepository::new();
        let sut = sut_with(&repo);

        let result = sut.delete_todo("not-a-uuid").await;

        assert!(matches!(result, Err(WebError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_ストアに到達できない場合はdatabaseエラーになる() {
        let repo = MockTodoRepository::unavailable();
        let sut = sut_with(&repo);

        assert!(matches!(sut.list_todos().await, Err(WebError::Database(_))));
        assert!(matches!(sut.add_todo("x").await, Err(WebError::Database(_))));
    }

    #[tokio::test]
    async fn test_空白のみの追加はストアに触れない() {
        // ストア到達不可でもスキップ判定が先に行われる
        let repo = MockTodoRepository::unavailable();
        let sut = sut_with(&repo);

        assert!(sut.add_todo("   ").await.unwrap().is_none());
    }
}
