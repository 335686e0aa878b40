#![cfg_attr(docsrs, feature(doc_cfg))]

//! Recency-ordered cache map
//! 按访问顺序排列的缓存映射
//!
//! Map and recency list live in one structure, so they cannot drift apart.
//! 映射与访问链表为同一结构，两者不会失去同步。

mod lru;

pub use lru::Lru;

/// Cache trait for basic operations
/// 缓存基本操作 trait
///
/// # Complexity
/// 复杂度
///
/// - get / get_mut / peek: O(1)
/// - set: O(1) amortized
/// - rm / pop_lru: O(1)
pub trait Cache<K, V> {
  /// Get value and mark as most recently used
  /// 获取值并标记为最近使用
  fn get(&mut self, key: &K) -> Option<&V>;

  /// Mutable get, marks as most recently used
  /// 可变获取，标记为最近使用
  fn get_mut(&mut self, key: &K) -> Option<&mut V>;

  /// Get value without touching recency
  /// 获取值但不改变访问顺序
  fn peek(&self, key: &K) -> Option<&V>;

  /// Insert or replace, marks as most recently used
  /// 插入或替换，标记为最近使用
  fn set(&mut self, key: K, val: V);

  /// Remove by key
  /// 按键删除
  fn rm(&mut self, key: &K) -> Option<V>;

  /// Remove least recently used entry
  /// 删除最久未使用的条目
  fn pop_lru(&mut self) -> Option<(K, V)>;

  fn len(&self) -> usize;

  #[inline(always)]
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
