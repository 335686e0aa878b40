//! Split descriptor 拆分描述
//!
//! Blob metadata of a split blob carries `"<sat>.<info>.<nchunks>[.<split_version>]"`.
//! The split-info blob sits at `info`, chunk `n` (1-based) sits
//! `nchunks + 1 - n` keys below it.
//! 拆分 blob 的元数据携带 `"<sat>.<info>.<nchunks>[.<split_version>]"`。

use crate::{BlobKey, parse_parts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id2Info {
  pub sat: i32,
  pub info: i32,
  pub nchunks: i32,
  pub split_version: i32,
}

impl Id2Info {
  /// Quiet parse, `None` on any malformed input
  /// 静默解析，格式错误返回 `None`
  pub fn parse(text: &str) -> Option<Self> {
    if let Some([sat, info, nchunks, split_version]) = parse_parts::<4>(text) {
      return Some(Self {
        sat,
        info,
        nchunks,
        split_version,
      });
    }
    let [sat, info, nchunks] = parse_parts::<3>(text)?;
    Some(Self {
      sat,
      info,
      nchunks,
      split_version: 0,
    })
  }

  /// Key of the split-info blob / 拆分信息 blob 的键
  #[inline]
  pub const fn split_info_key(&self) -> BlobKey {
    BlobKey::new(self.sat, self.info)
  }

  /// Key of chunk `n` (1-based) / 第 `n` 个分块的键（从 1 开始）
  pub fn chunk_key(&self, n: i32) -> Option<BlobKey> {
    if n < 1 || n > self.nchunks {
      return None;
    }
    let sat_key = self.info.checked_sub(self.nchunks - n + 1)?;
    let key = BlobKey::new(self.sat, sat_key);
    key.is_valid().then_some(key)
  }
}
