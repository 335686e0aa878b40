#![cfg_attr(docsrs, feature(doc_cfg))]

//! Blob chunk reassembly 分块重组
//!
//! Chunks arrive out of order over the network; `ChunkAssembler` keeps them
//! by number and decodes the concatenated stream once all are in.
//! 分块乱序到达；`ChunkAssembler` 按编号保存，全部到齐后解码拼接流。

mod assembler;
mod blob_info;
mod codec;
pub mod error;
mod reader;
mod split_info;

pub use assembler::ChunkAssembler;
pub use blob_info::BlobInfo;
pub use codec::{Codec, Format};
pub use error::{Error, Result};
pub use reader::ChunkReader;
pub use split_info::{ChunkContent, ChunkInfo, SplitInfo};
