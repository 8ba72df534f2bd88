//! Per-query deadline and cancellation.
//!
//! Every catalog operation takes a [`QueryContext`] and checks it before each
//! store call, so a slow or abandoned query stops between reads instead of
//! running to completion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{CatalogError, CatalogResult};

/// Shared flag used to cancel in-flight queries.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. All clones observe it.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Deadline and cancel state for one query.
#[derive(Debug, Clone)]
pub struct QueryContext {
    started: Instant,
    timeout: Option<Duration>,
    cancel: CancelToken,
}

impl Default for QueryContext {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl QueryContext {
    /// A context with no deadline.
    pub fn unbounded() -> Self {
        Self {
            started: Instant::now(),
            timeout: None,
            cancel: CancelToken::new(),
        }
    }

    /// A context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::unbounded()
        }
    }

    /// Attach an external cancel token.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Time since the context was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Time left before the deadline, `None` when unbounded.
    pub fn remaining(&self) -> Option<Duration> {
        self.timeout
            .map(|timeout| timeout.saturating_sub(self.started.elapsed()))
    }

    /// Fail if the query was cancelled or has run out of time.
    pub fn checkpoint(&self) -> CatalogResult<()> {
        if self.cancel.is_cancelled() {
            return Err(CatalogError::Cancelled);
        }
        match self.timeout {
            Some(timeout) if self.started.elapsed() >= timeout => {
                Err(CatalogError::DeadlineExceeded(timeout))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded() {
        let ctx = QueryContext::unbounded();
        assert!(ctx.remaining().is_none());
        assert!(ctx.checkpoint().is_ok());
    }

    #[test]
    fn test_expired() {
        let ctx = QueryContext::with_timeout(Duration::ZERO);
        assert_eq!(ctx.remaining(), Some(Duration::ZERO));
        assert!(matches!(
            ctx.checkpoint(),
            Err(CatalogError::DeadlineExceeded(_))
        ));
    }

    #[test]
    fn test_cancel_shared() {
        let token = CancelToken::new();
        let ctx = QueryContext::with_timeout(Duration::from_secs(60))
            .with_cancel_token(token.clone());
        assert!(ctx.checkpoint().is_ok());

        token.cancel();
        assert!(ctx.cancel_token().is_cancelled());
        assert!(matches!(ctx.checkpoint(), Err(CatalogError::Cancelled)));
    }
}
