//! 错误定义 Error definitions

use thiserror::Error;

/// 结果类型 Result type
pub type Result<T> = std::result::Result<T, Error>;

/// 数据格式错误 Data format error
#[derive(Error, Debug)]
pub enum Error {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("gzip: {0}")]
  Gzip(std::io::Error),

  #[error("binary: {0}")]
  Binary(#[from] bitcode::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("unknown compression: {0:?}")]
  UnknownCodec(Box<str>),

  #[error("unknown format: {0:?}")]
  UnknownFormat(Box<str>),
}
