//! Cooperative cancellation.
//!
//! An [`AbortController`] owns the right to cancel; any number of
//! [`AbortSignal`]s observe it. Operations check the signal at their
//! suspension points and fail with [`DomainError::Aborted`](crate::DomainError::Aborted).

use std::sync::{Mutex, PoisonError};

use tokio::sync::watch;

/// Owner side of a cancellation signal.
#[derive(Debug)]
pub struct AbortController {
    tx: watch::Sender<bool>,
}

impl AbortController {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// A signal observing this controller.
    pub fn signal(&self) -> AbortSignal {
        AbortSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Abort every operation holding one of this controller's signals.
    pub fn abort(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_aborted(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for AbortController {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer side of a cancellation signal.
#[derive(Debug, Clone)]
pub struct AbortSignal {
    rx: watch::Receiver<bool>,
}

impl AbortSignal {
    /// A signal that never fires.
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { rx }
    }

    pub fn is_aborted(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the controller aborts. Pends forever if the controller
    /// is dropped without aborting.
    pub async fn aborted(&self) {
        let mut rx = self.rx.clone();
        if rx.wait_for(|aborted| *aborted).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Holds at most one outstanding controller for one logical operation
/// (e.g. "save post"). Starting a new request aborts the previous one.
#[derive(Debug, Default)]
pub struct AbortSlot {
    current: Mutex<Option<AbortController>>,
}

impl AbortSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the in-flight request, if any, and hand out a fresh signal.
    pub fn renew(&self) -> AbortSignal {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = current.take() {
            previous.abort();
        }
        let controller = AbortController::new();
        let signal = controller.signal();
        *current = Some(controller);
        signal
    }

    /// Abort the in-flight request without starting a new one.
    pub fn abort(&self) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = current.take() {
            previous.abort();
        }
    }

    /// Forget the in-flight request once it has completed.
    pub fn finish(&self) {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    pub fn is_pending(&self) -> bool {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
