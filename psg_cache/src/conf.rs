//! Cache configuration / 缓存配置

/// Default split-info high water mark / 拆分信息缓存默认高水位
pub const DEFAULT_HIGH_WATER: usize = 1000;
/// Default split-info low water mark / 拆分信息缓存默认低水位
pub const DEFAULT_LOW_WATER: usize = 500;
/// Default bioseq FIFO cap / bioseq 缓存默认容量
pub const DEFAULT_BIOSEQ_MAX: usize = 10_000;

/// Cache configuration options / 缓存配置选项
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// Split-info size that triggers eviction / 触发淘汰的拆分信息缓存大小
  HighWater(usize),
  /// Split-info size eviction shrinks to / 淘汰后收缩到的大小
  LowWater(usize),
  /// Max bioseq records / 最大 bioseq 记录数
  BioseqMax(usize),
}

/// Parsed config / 解析后的配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedConf {
  pub high_water: usize,
  pub low_water: usize,
  pub bioseq_max: usize,
}

impl Default for ParsedConf {
  fn default() -> Self {
    Self::parse(&[])
  }
}

impl ParsedConf {
  pub fn parse(conf: &[Conf]) -> Self {
    let mut c = Self {
      high_water: DEFAULT_HIGH_WATER,
      low_water: DEFAULT_LOW_WATER,
      bioseq_max: DEFAULT_BIOSEQ_MAX,
    };
    for item in conf {
      match *item {
        Conf::HighWater(v) => c.high_water = v,
        Conf::LowWater(v) => c.low_water = v,
        Conf::BioseqMax(v) => c.bioseq_max = v,
      }
    }
    c.low_water = c.low_water.min(c.high_water);
    c.bioseq_max = c.bioseq_max.max(1);
    c
  }
}
