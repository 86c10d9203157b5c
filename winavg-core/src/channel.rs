//! Local channels for inter-stage communication.
//!
//! Uses crossbeam-channel for bounded communication between the source,
//! reduce, and collector stages running in different threads. Bounded
//! capacity gives natural backpressure: a fast partitioner blocks instead of
//! buffering the whole stream in memory.

use anyhow::{anyhow, Result};
use crossbeam_channel::{bounded, Receiver, Sender};

use crate::types::StreamElement;

/// Sender side of a local channel.
#[derive(Clone)]
pub struct LocalChannelSender<T> {
    sender: Sender<StreamElement<T>>,
}

impl<T> LocalChannelSender<T> {
    /// Send a stream element, blocking if the channel is full.
    pub fn send(&self, element: StreamElement<T>) -> Result<()> {
        self.sender
            .send(element)
            .map_err(|_| anyhow!("channel closed: receiver dropped"))
    }
}

/// Receiver side of a local channel.
pub struct LocalChannelReceiver<T> {
    receiver: Receiver<StreamElement<T>>,
}

impl<T> LocalChannelReceiver<T> {
    /// Receive the next stream element, blocking until one is available.
    ///
    /// Errors once all senders are dropped and the buffer is drained —
    /// that is how an upstream failure reaches downstream stages.
    pub fn recv(&self) -> Result<StreamElement<T>> {
        self.receiver
            .recv()
            .map_err(|_| anyhow!("channel closed: sender dropped"))
    }
}

/// Create a bounded local channel pair with the given capacity.
pub fn local_channel<T>(capacity: usize) -> (LocalChannelSender<T>, LocalChannelReceiver<T>) {
    let (sender, receiver) = bounded(capacity);
    (
        LocalChannelSender { sender },
        LocalChannelReceiver { receiver },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_recv() {
        let (sender, receiver) = local_channel::<i32>(10);
        sender.send(StreamElement::Record(42)).unwrap();
        assert_eq!(receiver.recv().unwrap(), StreamElement::Record(42));
    }

    #[test]
    fn test_end_marker() {
        let (sender, receiver) = local_channel::<i32>(10);
        sender.send(StreamElement::End).unwrap();
        assert_eq!(receiver.recv().unwrap(), StreamElement::End);
    }

    #[test]
    fn test_recv_fails_after_sender_dropped() {
        let (sender, receiver) = local_channel::<i32>(10);
        sender.send(StreamElement::Record(1)).unwrap();
        drop(sender);

        // Buffered element still arrives, then the channel reports closure.
        assert_eq!(receiver.recv().unwrap(), StreamElement::Record(1));
        assert!(receiver.recv().is_err());
    }

    #[test]
    fn test_clone_sender() {
        let (sender, receiver) = local_channel::<i32>(10);
        let sender2 = sender.clone();
        sender.send(StreamElement::Record(1)).unwrap();
        sender2.send(StreamElement::Record(2)).unwrap();
        assert_eq!(receiver.recv().unwrap(), StreamElement::Record(1));
        assert_eq!(receiver.recv().unwrap(), StreamElement::Record(2));
    }
}
