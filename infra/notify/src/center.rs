use crate::error::NotifyError;
use crate::toast::Toast;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::trace;

/// Buffer for live subscribers; a front end drains it on every redraw.
const DEFAULT_CHANNEL_CAPACITY: usize = 128;
/// Toasts kept for late readers (status bars, `recent`).
const DEFAULT_HISTORY: usize = 32;

#[derive(Debug)]
struct Inner {
    sender: broadcast::Sender<Arc<Toast>>,
    history: RwLock<VecDeque<Arc<Toast>>>,
    history_limit: usize,
    next_seq: AtomicU64,
}

/// Notification center shared by the slices and the front end.
///
/// Cloning is cheap; every clone publishes into the same channel and history.
#[derive(Debug, Clone)]
pub struct Notifications {
    inner: Arc<Inner>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::build(DEFAULT_CHANNEL_CAPACITY, DEFAULT_HISTORY)
    }
}

impl Notifications {
    /// Creates a center with the default bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a center with explicit channel and history bounds.
    ///
    /// # Errors
    /// Returns [`NotifyError::InvalidCapacity`] if either bound is zero.
    ///
    /// # Examples
    /// ```rust
    /// use inv_notify::Notifications;
    ///
    /// # fn main() -> Result<(), inv_notify::NotifyError> {
    /// let center = Notifications::with_capacity(16, 4)?;
    /// assert_eq!(center.history_len(), 0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_capacity(channel: usize, history: usize) -> Result<Self, NotifyError> {
        if channel == 0 {
            return Err(NotifyError::InvalidCapacity {
                message: "channel capacity must be greater than zero".into(),
                context: None,
            });
        }
        if history == 0 {
            return Err(NotifyError::InvalidCapacity {
                message: "history size must be greater than zero".into(),
                context: None,
            });
        }
        Ok(Self::build(channel, history))
    }

    fn build(channel: usize, history: usize) -> Self {
        let (sender, _) = broadcast::channel(channel);
        Self {
            inner: Arc::new(Inner {
                sender,
                history: RwLock::new(VecDeque::with_capacity(history)),
                history_limit: history,
                next_seq: AtomicU64::new(1),
            }),
        }
    }

    /// Stamps the toast, stores it in history and broadcasts it.
    ///
    /// Returns how many subscribers received it; zero subscribers is not an error.
    ///
    /// # Examples
    /// ```rust
    /// use inv_notify::{Notifications, Toast};
    ///
    /// let center = Notifications::new();
    /// let delivered = center.notify(Toast::success("Saved", "Settings stored"));
    /// assert_eq!(delivered, 0);
    /// assert_eq!(center.recent(1)[0].seq, 1);
    /// ```
    pub fn notify(&self, mut toast: Toast) -> usize {
        // Stamp, record and send under one lock so history and subscribers see `seq` in order.
        let mut history = self.inner.history.write();
        toast.seq = self.inner.next_seq.fetch_add(1, Ordering::Relaxed);
        let toast = Arc::new(toast);

        if history.len() == self.inner.history_limit {
            history.pop_front();
        }
        history.push_back(Arc::clone(&toast));

        let sent = self.inner.sender.send(toast);
        drop(history);

        sent.map_or_else(
            |_| {
                trace!("Toast kept in history only: no active subscribers");
                0
            },
            |count| {
                trace!(count, "Toast dispatched");
                count
            },
        )
    }

    /// Subscribes to toasts published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<Toast>> {
        self.inner.sender.subscribe()
    }

    /// The newest `n` toasts, oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<Arc<Toast>> {
        let history = self.inner.history.read();
        let skip = history.len().saturating_sub(n);
        history.iter().skip(skip).cloned().collect()
    }

    /// The most recent toast, if any.
    #[must_use]
    pub fn latest(&self) -> Option<Arc<Toast>> {
        self.inner.history.read().back().cloned()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.inner.history.read().len()
    }

    pub fn clear_history(&self) {
        self.inner.history.write().clear();
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.sender.receiver_count()
    }
}
