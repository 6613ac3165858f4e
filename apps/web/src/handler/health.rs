//! # ヘルスチェックハンドラ
//!
//! サーバーの稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! ## レスポンス
//!
//! ```json
//! { "status": "ok" }
//! ```
//!
//! データベースへの疎通は確認しない。ストアに到達できない状態でも 200 を返す。

use axum::Json;
use todo_shared::HealthResponse;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
