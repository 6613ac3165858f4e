//! # Todo
//!
//! Todo リストの 1 項目を表すエンティティと、その値オブジェクト。
//!
//! ## ライフサイクル
//!
//! - 追加操作で作成される（ID はこの時点で採番）
//! - 作成後に変更されることはない（編集経路は存在しない）
//! - ID 指定の削除操作で破棄される（論理削除・履歴は持たない）
//!
//! ## UUID v7 の採用
//!
//! UUID v7 はタイムスタンプベースのため、ID 順に並べると作成順になる。
//! 一覧表示の順序はこの性質に依存する。

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

define_uuid_id! {
    /// Todo 項目の一意識別子
    ///
    /// 作成時に採番され、以後変更されない。
    pub struct TodoId;
}

// =========================================================================
// TodoText（Todo のテキスト）
// =========================================================================

/// Todo のテキスト（値オブジェクト）
///
/// # 不変条件
///
/// - 前後の空白はトリミング済み
/// - 空文字列ではない
/// - NUL 文字（U+0000）を含まない（PostgreSQL の `TEXT` に格納できないため）
/// - 長さの上限は設けない
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct TodoText(String);

impl TodoText {
    /// Todo のテキストを作成する
    ///
    /// 前後の空白を除去した結果が空の場合、または NUL 文字を含む場合はエラーを返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "Todo のテキストは必須です".to_string(),
            ));
        }
        if value.contains('\0') {
            return Err(DomainError::Validation(
                "Todo のテキストに NUL 文字は使用できません".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =========================================================================
// TodoItem（Todo エンティティ）
// =========================================================================

/// Todo 項目エンティティ
///
/// # 不変条件
///
/// - `id` はシステム内で一意
/// - `text` はトリミング済みで空ではない（[`TodoText`] が保証）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id:   TodoId,
    text: TodoText,
}

impl TodoItem {
    /// Todo 項目を作成する（データベースからの復元にも使用する）
    pub fn new(id: TodoId, text: TodoText) -> Self {
        Self { id, text }
    }

    /// ID を取得する
    pub fn id(&self) -> &TodoId {
        &self.id
    }

    /// テキストを取得する
    pub fn text(&self) -> &TodoText {
        &self.text
    }
}
