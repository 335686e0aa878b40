//! Split-info record 拆分信息记录
//!
//! Describes how a large sequence record is divided into separately
//! fetchable chunks.
//! 描述大序列记录如何切分为可单独获取的分块。

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Encode, Decode)]
pub struct SplitInfo {
  pub split_version: i32,
  /// Serialized skeleton entry, kept opaque / 序列化的骨架条目，不解析
  pub skeleton: Vec<u8>,
  pub chunks: Vec<ChunkInfo>,
}

impl SplitInfo {
  /// Find chunk by id / 按 id 查找分块
  pub fn chunk(&self, id: i32) -> Option<&ChunkInfo> {
    self.chunks.iter().find(|c| c.id == id)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct ChunkInfo {
  pub id: i32,
  pub content: Vec<ChunkContent>,
}

/// What a chunk provides / 分块提供的内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum ChunkContent {
  /// Sequence data for `id` over `[from, to]` / `id` 在 `[from, to]` 上的序列数据
  Seq { id: String, from: u32, to: u32 },
  /// Named annotation set / 命名注释集
  Annot { name: String },
  /// Descriptor types, bitmask / 描述符类型位掩码
  Descr { mask: u32 },
}
