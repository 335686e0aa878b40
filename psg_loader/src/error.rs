use psg_blob_key::BlobKey;
use thiserror::Error;

/// Error from the upstream service / 上游服务错误
pub type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
  #[error("chunk: {0}")]
  Chunk(#[from] psg_chunk::Error),

  #[error("invalid blob key: {0}")]
  InvalidKey(BlobKey),

  #[error("upstream: {0}")]
  Upstream(BoxErr),
}

pub type Result<T> = std::result::Result<T, Error>;
