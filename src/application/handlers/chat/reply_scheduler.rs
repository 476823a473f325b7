//! Cancelable delivery of simulated assistant replies.
//!
//! Each pending reply is a tokio task keyed by the conversation it belongs
//! to. Cancelling a conversation aborts every pending task for it, so a
//! reply never lands after its conversation was deleted or left.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::domain::foundation::ConversationId;

/// Pending reply tasks per conversation.
#[derive(Clone, Default)]
pub struct ReplyScheduler {
    pending: Arc<Mutex<HashMap<ConversationId, Vec<JoinHandle<()>>>>>,
}

impl ReplyScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `deliver` after `delay` unless the conversation is cancelled first.
    pub async fn schedule<F>(&self, conversation_id: ConversationId, delay: Duration, deliver: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            deliver.await;
        });

        let mut pending = self.pending.lock().await;
        let handles = pending.entry(conversation_id).or_default();
        handles.retain(|handle| !handle.is_finished());
        handles.push(handle);

        tracing::debug!(%conversation_id, delay_ms = delay.as_millis() as u64, "Scheduled reply");
    }

    /// Aborts every pending reply for a conversation.
    ///
    /// Returns true if at least one reply was still pending.
    pub async fn cancel(&self, conversation_id: ConversationId) -> bool {
        let Some(handles) = self.pending.lock().await.remove(&conversation_id) else {
            return false;
        };

        let mut cancelled = false;
        for handle in handles {
            if !handle.is_finished() {
                handle.abort();
                cancelled = true;
            }
        }

        if cancelled {
            tracing::debug!(%conversation_id, "Cancelled pending reply");
        }
        cancelled
    }

    /// Number of replies still waiting to be delivered.
    pub async fn pending_count(&self) -> usize {
        self.pending
            .lock()
            .await
            .values()
            .flatten()
            .filter(|handle| !handle.is_finished())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    #[tokio::test(start_paused = true)]
    async fn delivers_after_delay() {
        let scheduler = ReplyScheduler::new();
        let delivered = counter();
        let hits = delivered.clone();

        scheduler
            .schedule(ConversationId::new(), Duration::from_millis(1500), async move {
                hits.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(delivered.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(delivered.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_delivery() {
        let scheduler = ReplyScheduler::new();
        let id = ConversationId::new();
        let delivered = counter();
        let hits = delivered.clone();

        scheduler
            .schedule(id, Duration::from_millis(1500), async move {
                hits.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        assert!(scheduler.cancel(id).await);
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(delivered.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.pending_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_only_affects_its_conversation() {
        let scheduler = ReplyScheduler::new();
        let kept = ConversationId::new();
        let dropped = ConversationId::new();
        let delivered = counter();

        for id in [kept, dropped] {
            let hits = delivered.clone();
            scheduler
                .schedule(id, Duration::from_millis(100), async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                })
                .await;
        }

        scheduler.cancel(dropped).await;
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(delivered.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cancel_unknown_returns_false() {
        let scheduler = ReplyScheduler::new();
        assert!(!scheduler.cancel(ConversationId::new()).await);
    }
}
