//! Message-passing seam between ranks.
//!
//! Every coordination primitive the engine needs is behind the
//! [`Communicator`] trait: rank/size discovery, a non-blocking byte send,
//! a blocking receive, a probe that reports the next message's length
//! without consuming it, and a broadcast built from those. The in-process
//! implementation is a full mesh of `crossbeam-channel` pairs: one
//! dedicated channel per ordered rank pair, so delivery order between any
//! fixed pair is preserved while workers share no state beyond the
//! endpoints they own.

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Message-passing failures.
#[derive(Debug, thiserror::Error)]
pub enum CommError {
    /// The peer's endpoint is gone (its thread exited or panicked).
    #[error("rank {peer} disconnected")]
    Disconnected {
        /// The rank whose channel closed.
        peer: usize,
    },

    /// A rank outside `0..size`, or a self-send, was addressed.
    #[error("invalid peer rank {rank} (communicator size {size})")]
    InvalidRank {
        /// The addressed rank.
        rank: usize,
        /// Communicator size.
        size: usize,
    },

    /// A fixed-width control message had the wrong length.
    #[error("control frame from rank {peer} has {got} bytes, expected {want}")]
    BadControlFrame {
        /// Sending rank.
        peer: usize,
        /// Received length.
        got: usize,
        /// Required length.
        want: usize,
    },
}

/// Point-to-point message passing among a fixed set of ranks.
///
/// Delivery order must be preserved per ordered rank pair; nothing is
/// guaranteed across different pairs.
pub trait Communicator: Send {
    /// This worker's zero-based rank.
    fn rank(&self) -> usize;

    /// Total number of ranks.
    fn size(&self) -> usize;

    /// Queue `payload` for `dest` without blocking. Delivery completes
    /// once the destination posts the matching receive.
    fn send(&mut self, dest: usize, payload: Vec<u8>) -> Result<(), CommError>;

    /// Block until a message from `src` arrives and return its length
    /// without consuming it.
    fn probe(&mut self, src: usize) -> Result<usize, CommError>;

    /// Block until a message from `src` arrives and consume it.
    fn recv(&mut self, src: usize) -> Result<Vec<u8>, CommError>;

    /// One-to-all broadcast of a `u64`, returning the root's value on
    /// every rank. Blocking on non-root ranks.
    fn broadcast_u64(&mut self, root: usize, value: u64) -> Result<u64, CommError> {
        if self.rank() == root {
            for dest in 0..self.size() {
                if dest != root {
                    self.send(dest, value.to_le_bytes().to_vec())?;
                }
            }
            return Ok(value);
        }

        let frame = self.recv(root)?;
        let bytes: [u8; 8] = frame.as_slice().try_into().map_err(|_| {
            CommError::BadControlFrame {
                peer: root,
                got: frame.len(),
                want: 8,
            }
        })?;
        Ok(u64::from_le_bytes(bytes))
    }
}

/// In-process communicator: one ordered channel per rank pair.
pub struct ChannelComm {
    rank: usize,
    outboxes: Vec<Option<Sender<Vec<u8>>>>,
    inboxes: Vec<Option<Receiver<Vec<u8>>>>,
    /// Message pulled off a channel by `probe` but not yet consumed.
    stashed: Vec<Option<Vec<u8>>>,
}

impl ChannelComm {
    /// Build a fully connected mesh of `size` endpoints, one per rank.
    #[must_use]
    pub fn mesh(size: usize) -> Vec<ChannelComm> {
        assert!(size > 0, "communicator needs at least one rank");

        let mut endpoints: Vec<ChannelComm> = (0..size)
            .map(|rank| ChannelComm {
                rank,
                outboxes: (0..size).map(|_| None).collect(),
                inboxes: (0..size).map(|_| None).collect(),
                stashed: (0..size).map(|_| None).collect(),
            })
            .collect();

        for from in 0..size {
            for to in 0..size {
                if from == to {
                    continue;
                }
                let (tx, rx) = unbounded();
                endpoints[from].outboxes[to] = Some(tx);
                endpoints[to].inboxes[from] = Some(rx);
            }
        }

        endpoints
    }

    fn check_peer(&self, peer: usize) -> Result<(), CommError> {
        if peer >= self.outboxes.len() || peer == self.rank {
            return Err(CommError::InvalidRank {
                rank: peer,
                size: self.outboxes.len(),
            });
        }
        Ok(())
    }

    fn pull(&mut self, src: usize) -> Result<Vec<u8>, CommError> {
        let inbox = self.inboxes[src]
            .as_ref()
            .ok_or(CommError::InvalidRank {
                rank: src,
                size: self.inboxes.len(),
            })?;
        inbox
            .recv()
            .map_err(|_| CommError::Disconnected { peer: src })
    }
}

impl Communicator for ChannelComm {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.outboxes.len()
    }

    fn send(&mut self, dest: usize, payload: Vec<u8>) -> Result<(), CommError> {
        self.check_peer(dest)?;
        let outbox = self.outboxes[dest]
            .as_ref()
            .ok_or(CommError::InvalidRank {
                rank: dest,
                size: self.outboxes.len(),
            })?;
        outbox
            .send(payload)
            .map_err(|_| CommError::Disconnected { peer: dest })
    }

    fn probe(&mut self, src: usize) -> Result<usize, CommError> {
        self.check_peer(src)?;
        if self.stashed[src].is_none() {
            let message = self.pull(src)?;
            self.stashed[src] = Some(message);
        }
        Ok(self.stashed[src].as_ref().map_or(0, Vec::len))
    }

    fn recv(&mut self, src: usize) -> Result<Vec<u8>, CommError> {
        self.check_peer(src)?;
        if let Some(message) = self.stashed[src].take() {
            return Ok(message);
        }
        self.pull(src)
    }
}
