//! エラーハンドリング
//!
//! メッセージと終了コードを持つエラー型。終了コードは sysexits.h に倣う
//! （64: usage / 70: software / 74: io）。

/// エラー型
///
/// バリアントが終了コードとエラーの種別を決め、メッセージは
/// ユーザーにそのまま表示される。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数・設定の誤り（EX_USAGE）
    #[error("{0}")]
    InvalidArgument(String),

    /// ファイル入出力の失敗（EX_IOERR）
    #[error("{0}")]
    Io(String),

    /// HTTP リクエストの失敗（EX_IOERR）
    #[error("{0}")]
    Http(String),

    /// JSON の生成・解析の失敗（EX_IOERR）
    #[error("{0}")]
    Json(String),

    /// 上記以外の内部エラー（EX_SOFTWARE）
    #[error("{0}")]
    System(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// I/O エラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// HTTP エラー
    pub fn http(msg: impl Into<String>) -> Self {
        Error::Http(msg.into())
    }

    /// JSON エラー
    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    /// システムエラー
    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::Io(_) | Error::Http(_) | Error::Json(_) => 74,
            Error::System(_) => 70,
        }
    }

    /// usage エラー（使い方の表示が必要）かどうか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}
