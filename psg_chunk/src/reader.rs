//! Sequential reader over numbered chunks
//! 编号分块上的顺序读取器

use std::{
  collections::{BTreeMap, btree_map::Values},
  io::{self, BufRead, Read},
};

/// Concatenation of chunks in ascending chunk number
/// 按分块编号升序拼接
///
/// Empty chunks and numbering gaps are skipped; past the last chunk reads return 0.
/// 跳过空分块与编号空缺；读完最后一块后返回 0。
pub struct ChunkReader<'a> {
  rest: Values<'a, u32, Vec<u8>>,
  cur: &'a [u8],
}

impl<'a> ChunkReader<'a> {
  pub(crate) fn new(chunks: &'a BTreeMap<u32, Vec<u8>>) -> Self {
    Self {
      rest: chunks.values(),
      cur: &[],
    }
  }
}

impl BufRead for ChunkReader<'_> {
  fn fill_buf(&mut self) -> io::Result<&[u8]> {
    while self.cur.is_empty() {
      match self.rest.next() {
        Some(next) => self.cur = next,
        None => break,
      }
    }
    Ok(self.cur)
  }

  #[inline]
  fn consume(&mut self, amt: usize) {
    self.cur = &self.cur[amt.min(self.cur.len())..];
  }
}

impl Read for ChunkReader<'_> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let avail = self.fill_buf()?;
    let n = avail.len().min(buf.len());
    buf[..n].copy_from_slice(&avail[..n]);
    self.consume(n);
    Ok(n)
  }
}
