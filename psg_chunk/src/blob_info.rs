//! Blob metadata from the blob service / blob 服务返回的元数据

use psg_blob_key::{BlobKey, Id2Info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlobInfo {
  /// `"<sat>.<sat_key>"`
  pub blob_id: String,
  /// Compression name, e.g. `"gzip"` / 压缩名称
  pub compression: String,
  /// Structural format name, e.g. `"binary"` / 结构格式名称
  pub format: String,
  /// Split descriptor, present for split blobs / 拆分描述，仅拆分 blob 具有
  pub id2_info: Option<String>,
}

impl BlobInfo {
  #[inline]
  pub fn key(&self) -> BlobKey {
    BlobKey::parse(&self.blob_id)
  }

  #[inline]
  pub fn id2(&self) -> Option<Id2Info> {
    self.id2_info.as_deref().and_then(Id2Info::parse)
  }
}
