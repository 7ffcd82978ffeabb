//! Mock connector that hands out scripted transports.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pjlib_core::error::{Error, Result};
use pjlib_core::transport::{Connector, Transport};

use crate::mock_transport::MockTransport;

/// A [`Connector`] that returns queued [`MockTransport`]s in order.
///
/// Each `connect()` pops the next queued transport; `None` entries (from
/// [`push_failure`](MockConnector::push_failure)) and an empty queue both
/// fail with [`Error::ConnectFailed`]. Clones share the queue and counter.
#[derive(Debug, Clone, Default)]
pub struct MockConnector {
    queue: Arc<Mutex<VecDeque<Option<MockTransport>>>>,
    opens: Arc<AtomicUsize>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a transport for the next `connect()` call.
    pub fn push(&self, transport: MockTransport) {
        self.queue
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Some(transport));
    }

    /// Make the next `connect()` call fail.
    pub fn push_failure(&self) {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).push_back(None);
    }

    /// Number of `connect()` calls made so far, successful or not.
    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn connect(&self) -> Result<Box<dyn Transport>> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        let next = self.queue.lock().unwrap_or_else(|e| e.into_inner()).pop_front();
        match next {
            Some(Some(transport)) => Ok(Box::new(transport)),
            Some(None) => Err(Error::ConnectFailed("mock connect failure".into())),
            None => Err(Error::ConnectFailed("no more mock transports".into())),
        }
    }

    fn address(&self) -> String {
        "mock:20554".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hands_out_transports_in_order() {
        let connector = MockConnector::new();
        let first = MockTransport::new();
        first.greeting(b"1");
        connector.push(first);
        connector.push_failure();

        assert!(connector.connect().await.is_ok());
        assert!(matches!(
            connector.connect().await,
            Err(Error::ConnectFailed(_))
        ));
        assert!(matches!(
            connector.connect().await,
            Err(Error::ConnectFailed(_))
        ));
        assert_eq!(connector.open_count(), 3);
    }
}
