//! # Todo ハンドラ
//!
//! Todo リストの表示・追加・削除を提供する。
//!
//! ## エンドポイント
//!
//! - `GET /` - 一覧ページ（HTML）
//! - `POST /add` - 追加（フォームフィールド `text`）。常に `/` へリダイレクト
//!   （本文が解釈できない場合や `text` がない場合は空として扱う）
//! - `POST /delete/{id}` - 削除。常に `/` へリダイレクト（ID 形式不正は 400）

use std::sync::Arc;

use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};

use crate::{error::WebError, template_renderer::TodoPageRenderer, usecase::TodoUseCaseImpl};

/// Todo ハンドラの共有状態
pub struct TodoState {
    pub usecase:  TodoUseCaseImpl,
    pub renderer: TodoPageRenderer,
}

/// 追加フォームのフィールド名
const TEXT_FIELD: &str = "text";

/// フォームの `text` フィールドを取り出す
///
/// 同名フィールドが複数ある場合は最初の値を採用する。
/// 本文が解釈できない場合やフィールドがない場合は空文字列を返す。
fn text_field(form: Result<Form<Vec<(String, String)>>, FormRejection>) -> String {
    let fields = match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            tracing::debug!(%rejection, "フォームを解釈できないため空の入力として扱います");
            return String::new();
        }
    };

    fields
        .into_iter()
        .find(|(name, _)| name == TEXT_FIELD)
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// GET /
///
/// 現在の Todo 項目をすべて含むページを返す。
pub async fn index(State(state): State<Arc<TodoState>>) -> Result<Html<String>, WebError> {
    let todos = state.usecase.list_todos().await?;
    let html = state.renderer.render_index(&todos)?;
    Ok(Html(html))
}

/// POST /add
///
/// ## レスポンス
///
/// - `302 Found`: 追加の有無に関わらず `/` へ
/// - `500 Internal Server Error`: ストアに到達できない
pub async fn add_todo(
    State(state): State<Arc<TodoState>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<impl IntoResponse, WebError> {
    state.usecase.add_todo(&text_field(form)).await?;
    Ok(redirect_to_index())
}

/// POST /delete/{id}
///
/// ## レスポンス
///
/// - `302 Found`: 削除の有無に関わらず `/` へ
/// - `400 Bad Request`: ID の形式が不正
/// - `500 Internal Server Error`: ストアに到達できない
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, WebError> {
    state.usecase.delete_todo(&id).await?;
    Ok(redirect_to_index())
}

/// 一覧ページへの 302 リダイレクト
fn redirect_to_index() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/")])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Result<Form<Vec<(String, String)>>, FormRejection> {
        Ok(Form(
            pairs
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
        ))
    }

    #[test]
    fn test_text_fieldはtextの値を返す() {
        assert_eq!(text_field(fields(&[("text", "Buy milk")])), "Buy milk");
    }

    #[test]
    fn test_text_fieldは同名フィールドの最初の値を採用する() {
        assert_eq!(text_field(fields(&[("text", "a"), ("text", "b")])), "a");
    }

    #[test]
    fn test_text_fieldは他のフィールドを無視する() {
        assert_eq!(text_field(fields(&[("other", "x"), ("text", "y")])), "y");
    }

    #[test]
    fn test_text_fieldはフィールドがなければ空文字列を返す() {
        assert_eq!(text_field(fields(&[("other", "x")])), "");
    }
}
