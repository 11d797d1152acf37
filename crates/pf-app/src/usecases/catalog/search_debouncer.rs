use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::{sleep_until, Instant};

/// Quiet period after the last keystroke before a search term is committed.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// A term whose delay elapsed, stamped with the push that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedSearch {
    generation: u64,
    term: String,
}

impl CommittedSearch {
    pub fn term(&self) -> &str {
        &self.term
    }
}

/// Collapses a burst of search input into a single committed term.
///
/// Each `push` aborts the pending timer and starts a new one. A timer that
/// fired before a later `push` or `cancel` may already have queued its value;
/// [`SearchDebouncer::accept`] rejects it by generation.
pub struct SearchDebouncer {
    delay: Duration,
    committed_tx: mpsc::UnboundedSender<CommittedSearch>,
    pending: Option<AbortHandle>,
    generation: u64,
}

impl SearchDebouncer {
    pub fn new(delay: Duration, committed_tx: mpsc::UnboundedSender<CommittedSearch>) -> Self {
        Self {
            delay,
            committed_tx,
            pending: None,
            generation: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record the current content of the search input.
    pub fn push(&mut self, raw: impl Into<String>) {
        self.cancel();

        let commit = CommittedSearch {
            generation: self.generation,
            term: raw.into(),
        };
        let deadline = Instant::now() + self.delay;
        let tx = self.committed_tx.clone();
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            if tx.send(commit).is_err() {
                tracing::debug!("search receiver closed before commit");
            }
        });

        self.pending = Some(handle.abort_handle());
    }

    /// Whether a pushed value is still waiting out its delay.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Supersede every earlier push, queued or not. Returns whether a timer
    /// was still running.
    pub fn cancel(&mut self) -> bool {
        self.generation += 1;
        let was_pending = self.is_pending();
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        was_pending
    }

    /// The term to evaluate, or `None` when a later push or cancel
    /// superseded it.
    pub fn accept(&self, commit: CommittedSearch) -> Option<String> {
        if commit.generation == self.generation {
            Some(commit.term)
        } else {
            tracing::debug!(term = %commit.term, "dropping superseded search commit");
            None
        }
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;
    use tokio::time::{advance, timeout};

    #[tokio::test]
    async fn rapid_input_commits_only_final_value() {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = SearchDebouncer::new(DEFAULT_SEARCH_DEBOUNCE, tx);

        debouncer.push("c");
        advance(Duration::from_millis(100)).await;
        debouncer.push("ca");
        advance(Duration::from_millis(100)).await;
        let last_keystroke = Instant::now();
        debouncer.push("cad");

        let commit = rx.recv().await.unwrap();
        assert_eq!(debouncer.accept(commit).as_deref(), Some("cad"));
        assert!(last_keystroke.elapsed() >= DEFAULT_SEARCH_DEBOUNCE);

        let nothing_else = timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(nothing_else.is_err(), "superseded input must not commit");
    }

    #[tokio::test]
    async fn paused_typing_commits_each_burst() {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = SearchDebouncer::new(Duration::from_millis(300), tx);

        debouncer.push("fea");
        let commit = rx.recv().await.unwrap();
        assert_eq!(debouncer.accept(commit).as_deref(), Some("fea"));

        debouncer.push("cfd");
        let commit = rx.recv().await.unwrap();
        assert_eq!(debouncer.accept(commit).as_deref(), Some("cfd"));
    }

    #[tokio::test]
    async fn cancel_discards_pending_commit() {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = SearchDebouncer::new(Duration::from_millis(300), tx);

        debouncer.push("cad");
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;

        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test]
    async fn fired_but_unread_commit_is_rejected_after_cancel() {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = SearchDebouncer::new(Duration::from_millis(300), tx);

        debouncer.push("cad");
        advance(Duration::from_millis(301)).await;
        tokio::task::yield_now().await;

        assert!(!debouncer.cancel(), "timer already fired");
        let queued = rx.try_recv().unwrap();
        assert_eq!(queued.term(), "cad");
        assert_eq!(debouncer.accept(queued), None);
    }

    #[tokio::test]
    async fn fired_but_unread_commit_is_rejected_after_newer_push() {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = SearchDebouncer::new(Duration::from_millis(300), tx);

        debouncer.push("cad");
        advance(Duration::from_millis(301)).await;
        tokio::task::yield_now().await;
        debouncer.push("cam");

        let stale = rx.recv().await.unwrap();
        assert_eq!(debouncer.accept(stale), None);
        let fresh = rx.recv().await.unwrap();
        assert_eq!(debouncer.accept(fresh).as_deref(), Some("cam"));
    }

    #[tokio::test]
    async fn pending_until_committed() {
        tokio::time::pause();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = SearchDebouncer::new(Duration::from_millis(300), tx);
        assert!(!debouncer.is_pending());

        debouncer.push("cad");
        assert!(debouncer.is_pending());

        let commit = rx.recv().await.unwrap();
        assert_eq!(commit.term(), "cad");
        tokio::task::yield_now().await;
        assert!(!debouncer.is_pending());
    }
}
