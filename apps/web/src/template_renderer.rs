//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで Todo リストのページを HTML として生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **自動エスケープ**: テンプレートを `.html` で終わる名前で登録し、tera の
//!   autoescape を有効にする。項目テキストに含まれるマークアップはそのまま出力されない
//! - **表示専用の DTO**: ドメインエンティティはテンプレートに直接渡さない

use serde::Serialize;
use tera::{Context, Tera};
use todo_domain::todo::TodoItem;

/// 一覧ページのテンプレート名
const INDEX_TEMPLATE: &str = "index.html";

/// テンプレートに渡す Todo 項目
#[derive(Debug, Serialize)]
struct TodoView<'a> {
    id:   String,
    text: &'a str,
}

/// テンプレートレンダラー
pub struct TodoPageRenderer {
    engine: Tera,
}

impl TodoPageRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// テンプレートの構文エラーはここで検出される。
    pub fn new() -> Result<Self, tera::Error> {
        let mut engine = Tera::default();
        engine.add_raw_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
        Ok(Self { engine })
    }

    /// 一覧ページを描画する
    ///
    /// 項目が 0 件でもページ全体（追加フォームと空のリスト）を返す。
    pub fn render_index(&self, todos: &[TodoItem]) -> Result<String, tera::Error> {
        let views: Vec<TodoView<'_>> = todos
            .iter()
            .map(|todo| TodoView {
                id:   todo.id().to_string(),
                text: todo.text().as_str(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("todos", &views);

        self.engine.render(INDEX_TEMPLATE, &context)
    }
}
