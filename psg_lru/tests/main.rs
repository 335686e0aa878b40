use aok::{OK, Void};
use log::info;
use psg_lru::{Cache, Lru};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn keys<V>(cache: &Lru<i32, V>) -> Vec<i32> {
  cache.keys().copied().collect()
}

#[test]
fn test_lru_basic_operations() -> Void {
  info!("> 测试 LRU 基本操作");

  let mut cache = Lru::new();

  cache.set("key1".to_string(), "value1");
  cache.set("key2".to_string(), "value2");
  cache.set("key3".to_string(), "value3");
  assert_eq!(cache.len(), 3);

  assert_eq!(cache.get(&"key1".to_string()), Some(&"value1"));
  assert_eq!(cache.get(&"key2".to_string()), Some(&"value2"));
  assert_eq!(cache.get(&"nonexistent".to_string()), None);

  assert_eq!(cache.rm(&"key2".to_string()), Some("value2"));
  assert_eq!(cache.get(&"key2".to_string()), None);
  assert_eq!(cache.len(), 2);
  assert_eq!(cache.rm(&"key2".to_string()), None);
  OK
}

#[test]
fn test_lru_order() -> Void {
  info!("> 测试访问顺序");

  let mut cache = Lru::new();
  for i in 1..=3 {
    cache.set(i, i * 10);
  }
  assert_eq!(keys(&cache), [1, 2, 3]);

  // get 移到最近使用端
  assert_eq!(cache.get(&1), Some(&10));
  assert_eq!(keys(&cache), [2, 3, 1]);

  // peek 不改变顺序
  assert_eq!(cache.peek(&2), Some(&20));
  assert_eq!(keys(&cache), [2, 3, 1]);

  if let Some(v) = cache.get_mut(&3) {
    *v = 33;
  }
  assert_eq!(keys(&cache), [2, 1, 3]);
  assert_eq!(cache.peek(&3), Some(&33));

  assert_eq!(cache.pop_lru(), Some((2, 20)));
  assert_eq!(cache.pop_lru(), Some((1, 10)));
  assert_eq!(cache.pop_lru(), Some((3, 33)));
  assert_eq!(cache.pop_lru(), None);
  assert!(cache.is_empty());
  OK
}

#[test]
fn test_lru_unbounded() -> Void {
  info!("> 测试无上限");

  let mut cache = Lru::new();
  for i in 0..10_000 {
    cache.set(i, ());
  }
  assert_eq!(cache.len(), 10_000);
  assert!(cache.contains(&0));
  assert!(cache.contains(&9_999));
  OK
}

#[test]
fn test_lru_update_existing() -> Void {
  info!("> 测试更新已存在的键");

  let mut cache = Lru::new();
  cache.set(1, "old");
  cache.set(2, "other");
  cache.set(1, "new");
  assert_eq!(cache.len(), 2);
  assert_eq!(cache.peek(&1), Some(&"new"));
  assert_eq!(keys(&cache), [2, 1]);
  OK
}
