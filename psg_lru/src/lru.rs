//! LRU (Least Recently Used) map
//! LRU（最近最少使用）映射
//!
//! Based on hashlink::LruCache with linked list for O(1) access order tracking.
//! Unbounded: the owner decides when to evict through `pop_lru`.
//! 基于 hashlink::LruCache，用链表实现 O(1) 访问顺序跟踪。
//! 无容量上限：由持有者通过 `pop_lru` 决定何时淘汰。

use std::hash::Hash;

use hashlink::LruCache;

use crate::Cache;

/// Recency-ordered map
/// 按访问顺序排列的映射
pub struct Lru<K: Hash + Eq, V>(pub LruCache<K, V>);

impl<K: Hash + Eq, V> Lru<K, V> {
  #[inline(always)]
  pub fn new() -> Self {
    Self(LruCache::new_unbounded())
  }

  /// Keys from least to most recently used
  /// 从最久未使用到最近使用的键
  #[inline]
  pub fn keys(&self) -> impl Iterator<Item = &K> {
    self.0.iter().map(|(k, _)| k)
  }

  #[inline(always)]
  pub fn contains(&self, key: &K) -> bool {
    self.0.contains_key(key)
  }
}

impl<K: Hash + Eq, V> Default for Lru<K, V> {
  #[inline(always)]
  fn default() -> Self {
    Self::new()
  }
}

impl<K: Hash + Eq, V> Cache<K, V> for Lru<K, V> {
  #[inline(always)]
  fn get(&mut self, key: &K) -> Option<&V> {
    self.0.get(key)
  }

  #[inline(always)]
  fn get_mut(&mut self, key: &K) -> Option<&mut V> {
    self.0.get_mut(key)
  }

  #[inline(always)]
  fn peek(&self, key: &K) -> Option<&V> {
    self.0.peek(key)
  }

  #[inline(always)]
  fn set(&mut self, key: K, val: V) {
    self.0.insert(key, val);
  }

  #[inline(always)]
  fn rm(&mut self, key: &K) -> Option<V> {
    self.0.remove(key)
  }

  #[inline(always)]
  fn pop_lru(&mut self) -> Option<(K, V)> {
    self.0.remove_lru()
  }

  #[inline(always)]
  fn len(&self) -> usize {
    self.0.len()
  }
}
