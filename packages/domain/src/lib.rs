//! # Todo ドメイン層
//!
//! Todo リストの中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`todo::TodoItem`]）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（[`todo::TodoText`]）
//! - **ドメインエラー**: 入力規則違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! web → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::todo::{TodoId, TodoItem, TodoText};
//!
//! let text = TodoText::new("  Buy milk ").unwrap();
//! let item = TodoItem::new(TodoId::new(), text);
//! assert_eq!(item.text().as_str(), "Buy milk");
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod todo;

pub use error::DomainError;
