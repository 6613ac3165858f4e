//! # TodoRepository
//!
//! Todo 項目の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID の採番はストア側**: 呼び出し元はテキストのみを渡し、ID は `create` 内で採番する
//! - **削除は冪等**: 該当行がなくてもエラーにしない
//! - **並び順**: UUID v7 の ID 昇順（= 作成順）で返す

use async_trait::async_trait;
use sqlx::PgPool;
use todo_domain::todo::{TodoId, TodoItem, TodoText};
use uuid::Uuid;

use crate::error::InfraError;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// すべての Todo 項目を作成順で取得する
    ///
    /// 1 件もない場合は空の Vec を返す。
    async fn list_all(&self) -> Result<Vec<TodoItem>, InfraError>;

    /// Todo 項目を作成し、採番済みのエンティティを返す
    async fn create(&self, text: TodoText) -> Result<TodoItem, InfraError>;

    /// ID を指定して Todo 項目を削除する
    ///
    /// 実際に削除した場合は `true`、該当する項目がなかった場合は `false` を返す。
    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError>;
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn list_all(&self) -> Result<Vec<TodoItem>, InfraError> {
        let rows: Vec<(Uuid, String)> = sqlx::query_as(
            r#"
            SELECT id, text
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, text)| {
                // CHECK 制約により空文字列は格納されないが、制約外の空白のみの値は弾く
                let text = TodoText::new(text).map_err(|e| InfraError::unexpected(e.to_string()))?;
                Ok(TodoItem::new(TodoId::from_uuid(id), text))
            })
            .collect()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn create(&self, text: TodoText) -> Result<TodoItem, InfraError> {
        let item = TodoItem::new(TodoId::new(), text);

        sqlx::query(
            r#"
            INSERT INTO todos (id, text)
            VALUES ($1, $2)
            "#,
        )
        .bind(*item.id().as_uuid())
        .bind(item.text().as_str())
        .execute(&self.pool)
        .await?;

        tracing::debug!(todo_id = %item.id(), "Todo を作成しました");
        Ok(item)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &TodoId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(*id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
