//! # ユースケース層
//!
//! Todo リストの操作を実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、入力の解釈とスキップ判定はユースケースに集約

pub mod todo;

pub use todo::TodoUseCaseImpl;
