//! Bioseq cache / bioseq 缓存
//!
//! Every alias of a sequence maps to one shared record. Eviction is FIFO
//! by insertion; lookups never reorder.
//! 序列的每个别名映射到同一共享记录。按插入顺序 FIFO 淘汰，查找不改变顺序。

use std::{
  collections::{HashMap, VecDeque},
  fmt,
  sync::Arc,
};

use log::{debug, warn};
use parking_lot::Mutex;

use crate::ParsedConf;

/// Textual sequence identifier, cheap to clone
/// 文本序列标识，克隆开销低
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeqId(Arc<str>);

impl SeqId {
  #[inline]
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for SeqId {
  #[inline]
  fn from(s: &str) -> Self {
    Self(s.into())
  }
}

impl From<String> for SeqId {
  #[inline]
  fn from(s: String) -> Self {
    Self(s.into())
  }
}

impl fmt::Display for SeqId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// 分子类型 Molecule type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mol {
  #[default]
  NotSet,
  Dna,
  Rna,
  Aa,
  Na,
  Other,
}

/// Upstream resolve reply, each field optional
/// 上游解析应答，各字段可缺省
#[derive(Debug, Clone, Default)]
pub struct ResolveReply {
  pub canonical_id: Option<SeqId>,
  pub other_ids: Vec<SeqId>,
  pub mol: Option<Mol>,
  pub length: Option<u32>,
  pub state: Option<u32>,
  pub tax_id: Option<i64>,
  pub hash: Option<i32>,
}

/// Immutable bioseq metadata / 不可变的 bioseq 元数据
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BioseqInfo {
  /// Canonical id first, then the other ids / 先规范 id，后其它 id
  pub ids: Vec<SeqId>,
  pub mol: Mol,
  pub length: u32,
  /// Bitmask / 位掩码
  pub state: u32,
  pub tax_id: i64,
  pub hash: i32,
}

impl From<ResolveReply> for BioseqInfo {
  fn from(r: ResolveReply) -> Self {
    let mut ids = Vec::with_capacity(r.other_ids.len() + 1);
    ids.extend(r.canonical_id);
    ids.extend(r.other_ids);
    Self {
      ids,
      mol: r.mol.unwrap_or_default(),
      length: r.length.unwrap_or_default(),
      state: r.state.unwrap_or_default(),
      tax_id: r.tax_id.unwrap_or_default(),
      hash: r.hash.unwrap_or_default(),
    }
  }
}

#[derive(Default)]
struct Inner {
  index: HashMap<SeqId, Arc<BioseqInfo>>,
  fifo: VecDeque<Arc<BioseqInfo>>,
}

/// Thread-safe bioseq cache / 线程安全的 bioseq 缓存
pub struct BioseqCache {
  inner: Mutex<Inner>,
  max: usize,
}

impl BioseqCache {
  /// Create with record cap (min 1) / 创建，指定记录上限（最小 1）
  pub fn new(max: usize) -> Self {
    Self {
      inner: Mutex::new(Inner::default()),
      max: max.max(1),
    }
  }

  #[inline]
  pub fn with_conf(conf: &ParsedConf) -> Self {
    Self::new(conf.bioseq_max)
  }

  /// Lookup by any alias / 按任一别名查找
  #[inline]
  pub fn get(&self, id: &SeqId) -> Option<Arc<BioseqInfo>> {
    self.inner.lock().index.get(id).cloned()
  }

  /// Build record from reply, evict oldest while full, index under all aliases
  /// 由应答构建记录，满则淘汰最旧，并以全部别名建立索引
  pub fn add(&self, reply: ResolveReply) -> Arc<BioseqInfo> {
    let info = Arc::new(BioseqInfo::from(reply));
    if info.ids.is_empty() {
      // Kept and counted, but no lookup can reach it.
      // 仍然入队计数，但无法被查到。
      warn!("bioseq reply without ids, record unreachable");
    }

    let mut inner = self.inner.lock();
    let Inner { index, fifo } = &mut *inner;
    while fifo.len() >= self.max {
      let Some(old) = fifo.pop_front() else {
        break;
      };
      for id in &old.ids {
        // Alias may already point to a newer record
        // 别名可能已指向更新的记录
        if index.get(id).is_some_and(|cur| Arc::ptr_eq(cur, &old)) {
          index.remove(id);
        }
      }
      debug!("bioseq cache: evicted {:?}", old.ids.first());
    }
    fifo.push_back(info.clone());
    for id in &info.ids {
      index.insert(id.clone(), info.clone());
    }
    info
  }

  /// Records queued / 队列中的记录数
  #[inline]
  pub fn len(&self) -> usize {
    self.inner.lock().fifo.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Aliases indexed / 已索引的别名数
  #[inline]
  pub fn id_count(&self) -> usize {
    self.inner.lock().index.len()
  }

  #[inline]
  pub fn max(&self) -> usize {
    self.max
  }
}
