#![cfg_attr(docsrs, feature(doc_cfg))]

//! PubSeq Gateway data loader core / PubSeq Gateway 数据加载核心
//!
//! Looks up the caches first and falls back to an [`Upstream`] service on
//! miss. Responses are validated and decoded before they reach a cache.
//! 先查缓存，未命中时回源 [`Upstream`]。应答在写入缓存前完成校验与解码。

pub mod error;
mod loader;

pub use error::{BoxErr, Error, Result};
pub use loader::{BlobReply, Loader, Upstream};
pub use psg_blob_key::{BlobKey, Id2Info};
pub use psg_cache::{BioseqInfo, Conf, Mol, ResolveReply, SeqId};
pub use psg_chunk::{BlobInfo, ChunkContent, ChunkInfo, SplitInfo};
