use aok::{OK, Void};
use log::info;
use proptest::prelude::*;
use psg_blob_key::{BlobKey, Id2Info};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test_parse_valid() -> Void {
  info!("> 解析合法键");

  let key = BlobKey::parse("4.123456");
  assert_eq!(key, BlobKey::new(4, 123456));
  assert!(key.is_valid());
  assert_eq!(key.to_string(), "4.123456");

  let key: BlobKey = "0.0".into();
  assert_eq!(key, BlobKey::new(0, 0));
  assert!(key.is_valid());
  OK
}

#[test]
fn test_parse_malformed() -> Void {
  info!("> 解析非法键");

  for text in [
    "", "abc", "1.2.3", "1", ".", "1.", ".2", "-1.2", "1.-2", "1 .2", "+1.2", "1.2a",
    "99999999999.1",
  ] {
    let key = BlobKey::parse(text);
    assert!(!key.is_valid(), "{text:?} should not parse");
    assert_eq!(key, BlobKey::UNSET);
  }
  OK
}

#[test]
fn test_default_is_unset() {
  assert_eq!(BlobKey::default(), BlobKey::UNSET);
  assert!(!BlobKey::default().is_valid());
  assert!(!BlobKey::new(-1, 5).is_valid());
  assert!(!BlobKey::new(5, -1).is_valid());
}

#[test]
fn test_ordering() {
  assert!(BlobKey::new(1, 5) < BlobKey::new(2, 0));
  assert!(BlobKey::new(1, 5) < BlobKey::new(1, 6));
  assert!(!(BlobKey::new(1, 5) < BlobKey::new(1, 5)));

  let mut keys = vec![
    BlobKey::new(2, 0),
    BlobKey::new(1, 6),
    BlobKey::new(1, 5),
    BlobKey::new(0, 100),
  ];
  keys.sort();
  assert_eq!(
    keys,
    vec![
      BlobKey::new(0, 100),
      BlobKey::new(1, 5),
      BlobKey::new(1, 6),
      BlobKey::new(2, 0),
    ]
  );
}

#[test]
fn test_serde() -> Void {
  let key = BlobKey::new(25, 117);
  let json = serde_json::to_string(&key)?;
  let back: BlobKey = serde_json::from_str(&json)?;
  assert_eq!(back, key);

  let bin = bitcode::encode(&key);
  let back: BlobKey = bitcode::decode(&bin)?;
  assert_eq!(back, key);
  OK
}

#[test]
fn test_id2_info() -> Void {
  info!("> 拆分描述");

  let id2 = Id2Info::parse("4.1000.3.7").expect("parse");
  assert_eq!(id2.nchunks, 3);
  assert_eq!(id2.split_version, 7);
  assert_eq!(id2.split_info_key(), BlobKey::new(4, 1000));
  assert_eq!(id2.chunk_key(1), Some(BlobKey::new(4, 997)));
  assert_eq!(id2.chunk_key(3), Some(BlobKey::new(4, 999)));
  assert_eq!(id2.chunk_key(0), None);
  assert_eq!(id2.chunk_key(4), None);

  let id2 = Id2Info::parse("4.1000.3").expect("parse");
  assert_eq!(id2.split_version, 0);

  assert!(Id2Info::parse("4.1000").is_none());
  assert!(Id2Info::parse("4.1000.3.7.1").is_none());
  assert!(Id2Info::parse("4.x.3").is_none());

  // Chunk below key 0 is invalid / 键小于 0 的分块无效
  let id2 = Id2Info::parse("4.1.3").expect("parse");
  assert_eq!(id2.chunk_key(1), None);
  OK
}

proptest! {
  #[test]
  fn prop_roundtrip(sat in 0..=i32::MAX, sat_key in 0..=i32::MAX) {
    let key = BlobKey::new(sat, sat_key);
    prop_assert_eq!(BlobKey::parse(&key.to_string()), key);
  }

  #[test]
  fn prop_order_matches_tuple(a in (0..100i32, 0..100i32), b in (0..100i32, 0..100i32)) {
    let ka = BlobKey::new(a.0, a.1);
    let kb = BlobKey::new(b.0, b.1);
    prop_assert_eq!(ka.cmp(&kb), a.cmp(&b));
    prop_assert_eq!(ka == kb, a == b);
  }
}
