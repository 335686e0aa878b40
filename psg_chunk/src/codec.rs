//! Compression and format negotiation 压缩与格式协商

use std::io::Read;

use flate2::read::GzDecoder;

use crate::{Error, Result};

/// 压缩算法 Compression codec
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Codec {
  #[default]
  None,
  Gzip,
}

impl Codec {
  /// 从名称转换 Convert from wire name
  pub fn from_name(name: &str) -> Result<Self> {
    match name {
      "" | "none" => Ok(Self::None),
      "gzip" => Ok(Self::Gzip),
      _ => Err(Error::UnknownCodec(name.into())),
    }
  }

  /// Wrap reader with decompressor if needed
  /// 按需为读取器套上解压层
  pub fn wrap<'a, R: Read + 'a>(self, src: R) -> Box<dyn Read + 'a> {
    match self {
      Self::None => Box::new(src),
      Self::Gzip => Box::new(GzDecoder::new(src)),
    }
  }
}

/// 结构化格式 Structural format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
  /// bitcode
  #[default]
  Binary,
  Json,
}

impl Format {
  /// 从名称转换 Convert from wire name
  pub fn from_name(name: &str) -> Result<Self> {
    match name {
      "binary" => Ok(Self::Binary),
      "json" => Ok(Self::Json),
      _ => Err(Error::UnknownFormat(name.into())),
    }
  }
}
