//! Ordered handoff of puzzle addresses from the registry to the solvers.
//!
//! A dispatch queue has exactly one [`QueuePublisher`] and one
//! [`QueueConsumer`]. The publisher pushes addresses in creation order and
//! then closes the queue by consuming itself; the consumer sees every
//! address in that order followed by `None`. Closing is the only
//! completion signal the queue carries.

use tokio::sync::mpsc;
use tracing::{debug, info};

/// Errors that can occur while publishing to a dispatch queue.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The consumer was dropped before every address was delivered.
    #[error("dispatch queue {queue} closed by consumer after {delivered} addresses")]
    ConsumerGone {
        /// Queue name.
        queue: &'static str,
        /// Addresses delivered before the consumer went away.
        delivered: usize,
    },
}

/// Create a named dispatch queue.
///
/// `capacity` bounds how far the publisher may run ahead of the consumer;
/// zero is treated as one.
pub fn dispatch_queue(name: &'static str, capacity: usize) -> (QueuePublisher, QueueConsumer) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (
        QueuePublisher {
            name,
            tx,
            published: 0,
        },
        QueueConsumer {
            name,
            rx,
            received: 0,
        },
    )
}

/// Producing end of a dispatch queue.
#[derive(Debug)]
pub struct QueuePublisher {
    name: &'static str,
    tx: mpsc::Sender<String>,
    published: usize,
}

impl QueuePublisher {
    /// Queue name used in logs.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Push one address, waiting while the queue is full.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::ConsumerGone`] if the consumer was dropped.
    pub async fn publish(&mut self, address: String) -> Result<(), DispatchError> {
        self.tx
            .send(address)
            .await
            .map_err(|_closed| DispatchError::ConsumerGone {
                queue: self.name,
                delivered: self.published,
            })?;
        self.published = self.published.saturating_add(1);
        Ok(())
    }

    /// Push every address in order, then close the queue.
    ///
    /// Returns the number of addresses published.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::ConsumerGone`] if the consumer was dropped
    /// part-way; the queue is closed either way.
    pub async fn publish_all<I>(mut self, addresses: I) -> Result<usize, DispatchError>
    where
        I: IntoIterator<Item = String>,
    {
        for address in addresses {
            debug!(queue = self.name, address = %address, "publishing puzzle address");
            self.publish(address).await?;
        }
        Ok(self.close())
    }

    /// Close the queue. Returns the number of addresses published.
    pub fn close(self) -> usize {
        info!(queue = self.name, published = self.published, "dispatch queue closed");
        self.published
    }
}

/// Consuming end of a dispatch queue.
#[derive(Debug)]
pub struct QueueConsumer {
    name: &'static str,
    rx: mpsc::Receiver<String>,
    received: usize,
}

impl QueueConsumer {
    /// Queue name used in logs.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of addresses received so far.
    pub const fn received(&self) -> usize {
        self.received
    }

    /// Next address, or `None` once the queue is closed and drained.
    pub async fn recv(&mut self) -> Option<String> {
        let address = self.rx.recv().await?;
        self.received = self.received.saturating_add(1);
        Some(address)
    }
}
