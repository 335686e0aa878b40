//! Periodic split-info maintenance / 拆分信息缓存定期维护

use std::{
  sync::Arc,
  thread::{self, JoinHandle},
  time::Duration,
};

use crossbeam_channel::{RecvTimeoutError, Sender, bounded};
use log::{debug, error};

use crate::SplitInfoCache;

/// Background thread calling `maintain`, stopped on drop
/// 后台线程调用 `maintain`，drop 时停止
pub struct Maintainer {
  stop: Option<Sender<()>>,
  handle: Option<JoinHandle<()>>,
}

impl Maintainer {
  pub fn spawn(cache: Arc<SplitInfoCache>, every: Duration) -> Self {
    let (tx, rx) = bounded::<()>(1);
    let handle = thread::spawn(move || {
      loop {
        match rx.recv_timeout(every) {
          Err(RecvTimeoutError::Timeout) => {
            cache.maintain();
          }
          Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
      }
      debug!("split info maintainer stopped");
    });
    Self {
      stop: Some(tx),
      handle: Some(handle),
    }
  }

  /// Stop and join / 停止并等待退出
  #[inline]
  pub fn stop(self) {
    drop(self);
  }
}

impl Drop for Maintainer {
  fn drop(&mut self) {
    // Disconnect wakes the thread / 断开通道唤醒线程
    drop(self.stop.take());
    if let Some(handle) = self.handle.take() {
      if handle.join().is_err() {
        error!("split info maintainer panicked");
      }
    }
  }
}
