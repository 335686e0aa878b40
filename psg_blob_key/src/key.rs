//! Blob key 二进制对象键

use std::fmt;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::parse_parts;

/// Satellite + key pair addressing one blob
/// 卫星号 + 键，定位一个 blob
///
/// Ordered by `sat` first, then `sat_key`.
/// 先按 `sat` 排序，再按 `sat_key`。
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Encode, Decode,
)]
pub struct BlobKey {
  pub sat: i32,
  pub sat_key: i32,
}

impl BlobKey {
  /// Unset key, never valid / 未设置的键，永远无效
  pub const UNSET: Self = Self {
    sat: -1,
    sat_key: -1,
  };

  #[inline]
  pub const fn new(sat: i32, sat_key: i32) -> Self {
    Self { sat, sat_key }
  }

  /// Parse `"<sat>.<sat_key>"`, malformed text gives `UNSET`
  /// 解析 `"<sat>.<sat_key>"`，格式错误返回 `UNSET`
  pub fn parse(text: &str) -> Self {
    match parse_parts::<2>(text) {
      Some([sat, sat_key]) => Self { sat, sat_key },
      None => Self::UNSET,
    }
  }

  #[inline]
  pub const fn is_valid(&self) -> bool {
    self.sat >= 0 && self.sat_key >= 0
  }
}

impl Default for BlobKey {
  #[inline]
  fn default() -> Self {
    Self::UNSET
  }
}

impl From<&str> for BlobKey {
  #[inline]
  fn from(text: &str) -> Self {
    Self::parse(text)
  }
}

impl fmt::Display for BlobKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}", self.sat, self.sat_key)
  }
}
