//! # Web エラー定義
//!
//! Web アプリケーション固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 発生条件 |
//! |-----------|----------------|---------|
//! | `BadRequest` | 400 | 削除対象 ID の形式が不正 |
//! | `Database` | 500 | ストアへの接続失敗・クエリ失敗 |
//! | `Render` | 500 | テンプレートの描画失敗 |
//!
//! 空テキストの追加や存在しない ID の削除はエラーにならない（ユースケース層でスキップ）。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_shared::ErrorResponse;

/// Web アプリケーションで発生するエラー
#[derive(Debug, Error)]
pub enum WebError {
    /// 不正なリクエスト
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] todo_infra::InfraError),

    /// テンプレート描画エラー
    #[error("描画エラー: {0}")]
    Render(#[from] tera::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = match &self {
            WebError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            WebError::Database(e) => {
                // セキュリティ: 内部エラー詳細はログのみ
                tracing::error!(span_trace = %e.span_trace(), "データベースエラー: {}", e);
                ErrorResponse::internal_error()
            }
            WebError::Render(e) => {
                tracing::error!("描画エラー: {:?}", e);
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_requestは400を返す() {
        let response = WebError::BadRequest("不正な識別子です: x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_databaseは500を返す() {
        let infra = todo_infra::InfraError::unexpected("接続できません");
        let response = WebError::Database(infra).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
