//! # アプリケーション構築
//!
//! ルーターとミドルウェアレイヤーの組み立てを担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use todo_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{TodoState, add_todo, delete_todo, health_check, index};

/// ルーター定義を行う
///
/// レイヤーは下から順に適用される（最後に追加したものが最も外側）:
///
/// 1. `SetRequestIdLayer`: `X-Request-Id` を採番（クライアント指定があればそれを使う）
/// 2. `TraceLayer`: Request ID を含むリクエストスパンを作成
/// 3. `PropagateRequestIdLayer`: レスポンスに `X-Request-Id` を付与
pub fn build_app(todo_state: Arc<TodoState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add_todo))
        .route("/delete/{id}", post(delete_todo))
        .with_state(todo_state)
        .route("/health", get(health_check))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
