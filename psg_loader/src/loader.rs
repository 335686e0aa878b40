//! Loader / 加载器

use std::{sync::Arc, time::Duration};

use log::{debug, warn};
use psg_blob_key::BlobKey;
use psg_cache::{
  BioseqCache, BioseqInfo, Conf, Maintainer, ParsedConf, ResolveReply, SeqId, SplitInfoCache,
};
use psg_chunk::{BlobInfo, ChunkAssembler, SplitInfo};

use crate::{BoxErr, Error, Result};

/// Blob fetched from the blob service / 从 blob 服务获取的 blob
#[derive(Debug, Clone, Default)]
pub struct BlobReply {
  pub info: BlobInfo,
  /// `(chunk_no, bytes)`, any order / 任意顺序
  pub chunks: Vec<(u32, Vec<u8>)>,
}

/// Upstream resolve and blob service / 上游解析与 blob 服务
pub trait Upstream: Send + Sync {
  /// `None` when the id is unknown / id 未知时返回 `None`
  fn resolve(&self, id: &SeqId) -> std::result::Result<Option<ResolveReply>, BoxErr>;

  fn blob(&self, key: BlobKey) -> std::result::Result<BlobReply, BoxErr>;
}

/// Cache-first loader / 缓存优先的加载器
pub struct Loader<U> {
  upstream: U,
  bioseq: BioseqCache,
  split: Arc<SplitInfoCache>,
}

impl<U: Upstream> Loader<U> {
  pub fn new(upstream: U, conf: &[Conf]) -> Self {
    let conf = ParsedConf::parse(conf);
    Self {
      upstream,
      bioseq: BioseqCache::with_conf(&conf),
      split: Arc::new(SplitInfoCache::with_conf(&conf)),
    }
  }

  /// Bioseq metadata, resolved upstream on miss
  /// bioseq 元数据，未命中时向上游解析
  pub fn bioseq(&self, id: &SeqId) -> Result<Option<Arc<BioseqInfo>>> {
    if let Some(info) = self.bioseq.get(id) {
      return Ok(Some(info));
    }
    debug!("bioseq miss {id}");
    let reply = self.upstream.resolve(id).map_err(Error::Upstream)?;
    Ok(reply.map(|r| self.bioseq.add(r)))
  }

  /// Split info, fetched and decoded on miss. Nothing is cached on failure.
  /// 拆分信息，未命中时获取并解码。失败时不写缓存。
  pub fn split_info(&self, key: BlobKey) -> Result<Arc<SplitInfo>> {
    if !key.is_valid() {
      return Err(Error::InvalidKey(key));
    }
    if let Some(info) = self.split.get_blob(&key) {
      return Ok(info);
    }
    debug!("split info miss {key}");
    let reply = self.upstream.blob(key).map_err(Error::Upstream)?;
    let mut asm = ChunkAssembler::for_blob(&reply.info)?;
    for (no, data) in reply.chunks {
      asm.add_chunk(no, data);
    }
    let info = asm.split_info().inspect_err(|e| warn!("split info {key}: {e}"))?;
    Ok(self.split.add_blob(key, Arc::new(info)))
  }

  /// Split info of a split blob, `None` if the blob is not split
  /// 拆分 blob 的拆分信息，未拆分时返回 `None`
  pub fn split_info_for(&self, blob: &BlobInfo) -> Result<Option<Arc<SplitInfo>>> {
    match blob.id2() {
      Some(id2) => self.split_info(id2.split_info_key()).map(Some),
      None => Ok(None),
    }
  }

  #[inline]
  pub fn maintain(&self) -> usize {
    self.split.maintain()
  }

  /// Run `maintain` every `every` until the handle drops
  /// 每隔 `every` 执行 `maintain`，直到句柄被 drop
  #[inline]
  pub fn spawn_maintainer(&self, every: Duration) -> Maintainer {
    Maintainer::spawn(self.split.clone(), every)
  }

  #[inline]
  pub fn bioseq_cache(&self) -> &BioseqCache {
    &self.bioseq
  }

  #[inline]
  pub fn split_cache(&self) -> &SplitInfoCache {
    &self.split
  }

  #[inline]
  pub fn upstream(&self) -> &U {
    &self.upstream
  }
}
