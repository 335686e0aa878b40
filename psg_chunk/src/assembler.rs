//! Chunk assembler 分块组装器
//!
//! Pipeline: chunk reader → optional gzip → structural decoder.
//! 流水线：分块读取器 → 可选 gzip → 结构解码。

use std::{collections::BTreeMap, io::Read};

use bitcode::Decode;
use log::warn;
use serde::de::DeserializeOwned;

use crate::{BlobInfo, ChunkReader, Codec, Error, Format, Result, SplitInfo};

/// Numbered chunks of one blob, read in ascending chunk number
/// 单个 blob 的编号分块，按编号升序读取
#[derive(Debug, Default)]
pub struct ChunkAssembler {
  chunks: BTreeMap<u32, Vec<u8>>,
  codec: Codec,
  format: Format,
}

impl ChunkAssembler {
  #[inline]
  pub fn new(codec: Codec, format: Format) -> Self {
    Self {
      chunks: BTreeMap::new(),
      codec,
      format,
    }
  }

  /// Negotiate codec and format from blob metadata
  /// 根据 blob 元数据协商压缩与格式
  pub fn for_blob(info: &BlobInfo) -> Result<Self> {
    Ok(Self::new(
      Codec::from_name(&info.compression)?,
      Format::from_name(&info.format)?,
    ))
  }

  /// Store chunk, same number overwrites
  /// 存储分块，相同编号覆盖
  #[inline]
  pub fn add_chunk(&mut self, chunk_no: u32, data: impl Into<Vec<u8>>) {
    self.chunks.insert(chunk_no, data.into());
  }

  #[inline]
  pub fn set_gzip(&mut self, gzip: bool) {
    self.codec = if gzip { Codec::Gzip } else { Codec::None };
  }

  #[inline]
  pub fn is_gzip(&self) -> bool {
    self.codec == Codec::Gzip
  }

  #[inline]
  pub fn codec(&self) -> Codec {
    self.codec
  }

  #[inline]
  pub fn format(&self) -> Format {
    self.format
  }

  #[inline]
  pub fn chunk_count(&self) -> usize {
    self.chunks.len()
  }

  /// Raw bytes held, before decompression / 持有的原始字节数（解压前）
  pub fn byte_len(&self) -> usize {
    self.chunks.values().map(Vec::len).sum()
  }

  /// Raw concatenated stream / 原始拼接流
  #[inline]
  pub fn stream(&self) -> ChunkReader<'_> {
    ChunkReader::new(&self.chunks)
  }

  /// Decompress if needed, then decode as `T`
  /// 按需解压后解码为 `T`
  pub fn deserialize<T>(&self) -> Result<T>
  where
    T: for<'de> Decode<'de> + DeserializeOwned,
  {
    let mut buf = Vec::with_capacity(self.byte_len());
    if let Err(e) = self.codec.wrap(self.stream()).read_to_end(&mut buf) {
      warn!("read {} chunks ({:?}): {e}", self.chunks.len(), self.codec);
      return Err(match self.codec {
        Codec::Gzip => Error::Gzip(e),
        Codec::None => Error::Io(e),
      });
    }
    let r = match self.format {
      Format::Binary => bitcode::decode(&buf).map_err(Error::from),
      Format::Json => serde_json::from_slice(&buf).map_err(Error::from),
    };
    if let Err(e) = &r {
      warn!("decode {} bytes: {e}", buf.len());
    }
    r
  }

  #[inline]
  pub fn split_info(&self) -> Result<SplitInfo> {
    self.deserialize()
  }
}
