//! Publish/subscribe plumbing used by sessions and the gym.
//!
//! A [`Channel`] only remembers *who* is subscribed. Delivery goes through a
//! [`ReceiverDirectory`], which resolves each subscriber id to the value that
//! actually stores its notification history.

use serde::Serialize;
use tracing::debug;

use crate::domain::common::PartyId;

/// Something that accepts pushed messages.
pub trait Receiver {
    fn update(&mut self, message: &str);
}

/// Resolves subscriber ids to live receivers.
pub trait ReceiverDirectory {
    type Receiver: Receiver;

    fn receiver_mut(&mut self, id: PartyId) -> Option<&mut Self::Receiver>;
}

/// Ordered, duplicate-free set of subscribers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Channel {
    subscribers: Vec<PartyId>,
}

impl Channel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` unless it is already subscribed. Returns whether it was added.
    pub fn subscribe(&mut self, id: PartyId) -> bool {
        if self.subscribers.contains(&id) {
            return false;
        }
        self.subscribers.push(id);
        true
    }

    /// Removes `id` if present. Returns whether anything was removed.
    pub fn unsubscribe(&mut self, id: PartyId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| *subscriber != id);
        self.subscribers.len() != before
    }

    pub fn is_subscribed(&self, id: PartyId) -> bool {
        self.subscribers.contains(&id)
    }

    pub fn subscribers(&self) -> &[PartyId] {
        &self.subscribers
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Pushes `message` to every subscriber in subscription order and returns
    /// how many receivers were reached. Subscribers stay subscribed.
    pub fn broadcast<D>(&self, message: &str, directory: &mut D) -> usize
    where
        D: ReceiverDirectory,
    {
        let mut delivered = 0;
        for id in &self.subscribers {
            match directory.receiver_mut(*id) {
                Some(receiver) => {
                    receiver.update(message);
                    delivered += 1;
                }
                None => debug!(subscriber = %id, "skipping subscriber without an inbox"),
            }
        }
        delivered
    }
}
