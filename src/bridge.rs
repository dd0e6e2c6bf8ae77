//! Request/resolution bridge
//!
//! Connects an async caller to a future user decision. Each dialog request
//! creates one [`Settle`] handle and one receiver; the handle is stored with
//! the session and invoked by exactly one dismissal trigger, the receiver is
//! awaited by the caller.

use tokio::sync::oneshot;
use tracing::debug;

/// Single-use settlement handle for a pending dialog request.
///
/// Settlement is idempotent: the first call delivers the result, every later
/// call is a no-op. This guards against a late animation event firing after a
/// programmatic close has already settled the session.
#[derive(Debug)]
pub(crate) struct Settle {
    sender: Option<oneshot::Sender<bool>>,
}

impl Settle {
    /// Create a settle handle and the receiver its result is delivered on.
    pub(crate) fn channel() -> (Self, oneshot::Receiver<bool>) {
        let (sender, receiver) = oneshot::channel();
        (
            Self {
                sender: Some(sender),
            },
            receiver,
        )
    }

    /// Deliver the final result to the caller.
    ///
    /// A send failure means the caller dropped its future and is ignored;
    /// a second call finds the sender gone and is ignored as well.
    pub(crate) fn settle(&mut self, accepted: bool) {
        match self.sender.take() {
            Some(sender) => {
                let _ = sender.send(accepted);
            }
            None => debug!("ignoring duplicate settlement"),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_settled(&self) -> bool {
        self.sender.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_result_once() {
        let (mut settle, receiver) = Settle::channel();
        settle.settle(true);
        assert!(settle.is_settled());
        assert!(receiver.await.unwrap());
    }

    #[tokio::test]
    async fn second_settlement_is_a_no_op() {
        let (mut settle, receiver) = Settle::channel();
        settle.settle(false);
        settle.settle(true);
        assert!(!receiver.await.unwrap());
    }

    #[tokio::test]
    async fn dropped_handle_reads_as_dismissed() {
        let (settle, receiver) = Settle::channel();
        drop(settle);
        assert!(!receiver.await.unwrap_or(false));
    }

    #[tokio::test]
    async fn settling_after_caller_gave_up_does_not_panic() {
        let (mut settle, receiver) = Settle::channel();
        drop(receiver);
        settle.settle(true);
        assert!(settle.is_settled());
    }
}
