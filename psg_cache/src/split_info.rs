//! Split-info cache 拆分信息缓存
//!
//! LRU over blob keys with a high/low water eviction band. Eviction runs
//! only in `maintain`, so the cache may sit above the high water mark
//! between maintenance passes.
//! 按 blob 键的 LRU，高低水位淘汰。淘汰只在 `maintain` 中进行，
//! 两次维护之间缓存可能超过高水位。

use std::sync::Arc;

use coarsetime::Instant;
use log::debug;
use parking_lot::Mutex;
use psg_blob_key::BlobKey;
use psg_chunk::SplitInfo;
use psg_lru::{Cache, Lru};

use crate::ParsedConf;

struct Entry {
  last_touch: Instant,
  payload: Arc<SplitInfo>,
}

/// Thread-safe split-info cache / 线程安全的拆分信息缓存
pub struct SplitInfoCache {
  lru: Mutex<Lru<BlobKey, Entry>>,
  high_water: usize,
  low_water: usize,
}

impl SplitInfoCache {
  /// `low_water` is clamped to `high_water` / `low_water` 不超过 `high_water`
  pub fn new(high_water: usize, low_water: usize) -> Self {
    Self {
      lru: Mutex::new(Lru::new()),
      high_water,
      low_water: low_water.min(high_water),
    }
  }

  #[inline]
  pub fn with_conf(conf: &ParsedConf) -> Self {
    Self::new(conf.high_water, conf.low_water)
  }

  /// Lookup, a hit becomes most recently used
  /// 查找，命中则成为最近使用
  pub fn get_blob(&self, key: &BlobKey) -> Option<Arc<SplitInfo>> {
    let mut lru = self.lru.lock();
    lru.get_mut(key).map(|e| {
      e.last_touch = Instant::now();
      e.payload.clone()
    })
  }

  /// Insert; an existing entry keeps its payload and is only touched.
  /// Returns the payload now cached under `key`.
  /// 插入；已存在的条目保留原值，仅刷新访问。返回缓存中的值。
  pub fn add_blob(&self, key: BlobKey, payload: Arc<SplitInfo>) -> Arc<SplitInfo> {
    let now = Instant::now();
    let mut lru = self.lru.lock();
    if let Some(e) = lru.get_mut(&key) {
      e.last_touch = now;
      return e.payload.clone();
    }
    lru.set(
      key,
      Entry {
        last_touch: now,
        payload: payload.clone(),
      },
    );
    payload
  }

  /// Evict least recently used entries down to the low water mark once
  /// above the high water mark. Returns evicted count.
  /// 超过高水位时淘汰最久未使用的条目直到低水位。返回淘汰数量。
  pub fn maintain(&self) -> usize {
    let mut lru = self.lru.lock();
    let before = lru.len();
    if before <= self.high_water {
      return 0;
    }
    while lru.len() > self.low_water {
      if lru.pop_lru().is_none() {
        break;
      }
    }
    let evicted = before - lru.len();
    debug!("split info cache: evicted {evicted}, {} left", lru.len());
    evicted
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.lru.lock().len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Keys from least to most recently used
  /// 从最久未使用到最近使用的键
  pub fn keys(&self) -> Vec<BlobKey> {
    self.lru.lock().keys().copied().collect()
  }

  /// Last access time, without touching / 最近访问时间，不刷新
  pub fn last_touch(&self, key: &BlobKey) -> Option<Instant> {
    self.lru.lock().peek(key).map(|e| e.last_touch)
  }

  #[inline]
  pub fn high_water(&self) -> usize {
    self.high_water
  }

  #[inline]
  pub fn low_water(&self) -> usize {
    self.low_water
  }
}
