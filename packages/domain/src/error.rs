//! # ドメイン層エラー定義
//!
//! 入力規則違反を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | （応答しない） | 空の Todo テキスト。追加処理ではスキップ扱い |
//! | `InvalidIdentifier` | 400 Bad Request | ID の形式が不正 |
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::DomainError;
//!
//! let error = DomainError::InvalidIdentifier("not-a-uuid".to_string());
//! assert_eq!(error.to_string(), "不正な識別子です: not-a-uuid");
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がドメインの規則に違反している場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 識別子の形式が不正
    ///
    /// パスパラメータなど外部から受け取った文字列が ID として解釈できない場合。
    /// 該当するエンティティが存在しないこと（削除のスキップ扱い）とは区別する。
    #[error("不正な識別子です: {0}")]
    InvalidIdentifier(String),
}
