//! # Todo Web サーバー
//!
//! ブラウザから Todo リストを操作するための Web サーバー。
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Browser    │────▶│   Todo Web   │────▶│  PostgreSQL  │
//! │              │     │  port: 5001  │     │   (todos)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `WEB_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `WEB_PORT` | No | ポート番号（デフォルト: `5001`） |
//! | `DATABASE_URL` | No | PostgreSQL 接続 URL（デフォルト: `postgres://localhost:5432/todo_app`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,todo=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルがあれば読み込む）
//! cargo run -p todo-web
//!
//! # 本番環境
//! DATABASE_URL=postgres://... LOG_FORMAT=json cargo run -p todo-web --release
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use todo_infra::{
    db,
    repository::{PostgresTodoRepository, TodoRepository},
};
use todo_shared::observability::TracingConfig;
use todo_web::{
    app_builder::build_app,
    config::WebConfig,
    handler::TodoState,
    template_renderer::TodoPageRenderer,
    usecase::TodoUseCaseImpl,
};
use tokio::net::TcpListener;

/// Web サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. データベース接続プールの作成とマイグレーション
/// 5. 依存コンポーネントの組み立てとルーターの構築
/// 6. HTTP サーバーの起動（Ctrl+C で停止）
/// 7. 接続プールのクローズ
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("web");
    let _root_span = todo_shared::observability::init_tracing(&tracing_config).entered();

    // 設定読み込み
    let config = WebConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!("Web サーバーを起動します: {}:{}", config.host, config.port);

    // データベース接続プールを作成
    let pool = db::create_pool(&config.database_url)
        .await
        .context("データベース接続に失敗しました")?;
    db::run_migrations(&pool)
        .await
        .context("マイグレーションの適用に失敗しました")?;
    tracing::info!("データベースに接続しました");

    // 依存コンポーネントを初期化
    let todo_repository: Arc<dyn TodoRepository> =
        Arc::new(PostgresTodoRepository::new(pool.clone()));
    let renderer = TodoPageRenderer::new().context("テンプレートの読み込みに失敗しました")?;
    let todo_state = Arc::new(TodoState {
        usecase: TodoUseCaseImpl::new(todo_repository),
        renderer,
    });

    let app = build_app(todo_state);

    // サーバー起動（WEB_HOST には IPv6 アドレスやホスト名も指定できる）
    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("{}:{} にバインドできません", config.host, config.port))?;
    tracing::info!("Web サーバーが起動しました: {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // サーバー停止後に接続を解放する
    pool.close().await;
    tracing::info!("Web サーバーを停止しました");

    Ok(())
}

/// Ctrl+C を待つ
///
/// シグナルの購読に失敗した場合はログを出して即座に停止処理へ進む。
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("停止シグナルを受信しました"),
        Err(e) => tracing::error!("停止シグナルの購読に失敗しました: {}", e),
    }
}
