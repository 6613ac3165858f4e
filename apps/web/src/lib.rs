//! # Todo Web アプリケーション
//!
//! Todo リストの表示・追加・削除を行う Web アプリケーション。
//! テスト用にルーター構築と内部モジュールへのアクセスを提供する。
//!
//! ## 構成
//!
//! ```text
//! Browser ──▶ handler ──▶ usecase ──▶ TodoRepository ──▶ PostgreSQL
//!                │
//!                └──▶ template_renderer（HTML） / HealthResponse（JSON）
//! ```

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod template_renderer;
pub mod usecase;
