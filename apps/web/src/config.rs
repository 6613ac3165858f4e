//! # Web 設定
//!
//! 環境変数から Web サーバーの設定を読み込む。
//!
//! すべての項目にデフォルト値があるため、環境変数を一切設定せずに起動できる。

use std::env;

use thiserror::Error;

/// バインドアドレスのデフォルト（全インターフェース）
const DEFAULT_HOST: &str = "0.0.0.0";
/// ポート番号のデフォルト
const DEFAULT_PORT: u16 = 5001;
/// データベース接続 URL のデフォルト（ローカルインスタンスの固定データベース）
const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/todo_app";

/// 設定読み込みのエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// ポート番号として解釈できない
    #[error("WEB_PORT は有効なポート番号である必要があります: {0}")]
    InvalidPort(String),
}

/// Web サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// データベース接続 URL
    pub database_url: String,
}

impl WebConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストでプロセスの環境変数を書き換えずに済むよう分離している。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("WEB_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("WEB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        })
    }

    /// `TcpListener::bind` に渡すアドレス
    ///
    /// ホストとポートを組のまま渡すため、IPv6 アドレスやホスト名も解決される。
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
