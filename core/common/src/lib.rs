//! aibatch共通ライブラリ
//!
//! `aibatch`コマンドの基盤となる機能（エラー型・ポート・標準アダプタ・
//! LLM補完プロバイダ層）を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Ports & Adapters のポート定義
pub mod ports;

/// 標準アダプタ
pub mod adapter;

/// LLM補完ドライバーとプロバイダ
pub mod llm;
