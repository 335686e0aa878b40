#![cfg_attr(docsrs, feature(doc_cfg))]

//! PubSeq Gateway caches / PubSeq Gateway 缓存
//!
//! Two independent caches, one mutex each:
//! 两个独立缓存，各自持有一把互斥锁：
//!
//! - [`SplitInfoCache`]: blob key → split-info, LRU with high/low water eviction
//! - [`BioseqCache`]: sequence alias → bioseq metadata, FIFO eviction
//!
//! Cached values are `Arc`s; eviction only drops the cache's reference.
//! 缓存值为 `Arc`；淘汰只释放缓存自身的引用。

mod bioseq;
mod conf;
mod maintainer;
mod split_info;

pub use bioseq::{BioseqCache, BioseqInfo, Mol, ResolveReply, SeqId};
pub use conf::{Conf, DEFAULT_BIOSEQ_MAX, DEFAULT_HIGH_WATER, DEFAULT_LOW_WATER, ParsedConf};
pub use maintainer::Maintainer;
pub use split_info::SplitInfoCache;
