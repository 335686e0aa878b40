#![cfg_attr(docsrs, feature(doc_cfg))]

//! Blob identifiers 二进制对象标识
//!
//! `BlobKey` addresses one blob in the blob store by satellite and
//! per-satellite key. `Id2Info` describes how a split blob maps onto
//! its split-info and chunk blobs.

mod id2;
mod key;

pub use id2::Id2Info;
pub use key::BlobKey;

/// Split on `.` into exactly `N` non-empty digit-only parts
/// 按 `.` 切分为恰好 `N` 个非空纯数字部分
pub(crate) fn parse_parts<const N: usize>(text: &str) -> Option<[i32; N]> {
  let mut out = [0; N];
  let mut iter = text.split('.');
  for slot in out.iter_mut() {
    let part = iter.next()?;
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
      return None;
    }
    *slot = part.parse().ok()?;
  }
  if iter.next().is_some() {
    return None;
  }
  Some(out)
}
