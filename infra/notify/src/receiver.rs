use crate::toast::Toast;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tracing::{debug, warn};

/// Ergonomic helpers over a toast subscription.
///
/// Lagged receivers skip ahead to the oldest retained toast instead of failing.
pub trait ToastReceiverExt {
    /// Wait for the next toast, returning `None` when the center is gone.
    fn next_toast(&mut self) -> impl Future<Output = Option<Arc<Toast>>> + Send;

    /// Collect every queued toast without waiting.
    fn drain(&mut self) -> Vec<Arc<Toast>>;
}

impl ToastReceiverExt for Receiver<Arc<Toast>> {
    async fn next_toast(&mut self) -> Option<Arc<Toast>> {
        let mut skipped = 0u64;

        loop {
            match self.recv().await {
                Ok(toast) => {
                    if skipped > 0 {
                        warn!(skipped, "Toast receiver lagged; continuing from oldest retained");
                    }
                    return Some(toast);
                },
                Err(RecvError::Lagged(n)) => {
                    skipped = skipped.saturating_add(n);
                    debug!(skipped = n, total_skipped = skipped, "Toast receiver lagged");
                },
                Err(RecvError::Closed) => return None,
            }
        }
    }

    fn drain(&mut self) -> Vec<Arc<Toast>> {
        let mut toasts = Vec::new();

        loop {
            match self.try_recv() {
                Ok(toast) => toasts.push(toast),
                Err(TryRecvError::Lagged(n)) => {
                    warn!(skipped = n, "Toast receiver lagged while draining");
                },
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        toasts
    }
}
