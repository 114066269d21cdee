//! Non-blocking parameter writes.
//!
//! Toggle flips and other fire-and-forget mutations must never wait on the
//! storage medium. `ParamWriter` queues writes onto a crossbeam channel
//! drained by a background thread that owns a store handle; the UI thread
//! only pays for the channel send.

use crossbeam::channel::{unbounded, Sender};
use std::thread;

use super::StoreHandle;

enum WriteOp {
    Put { key: String, value: String },
    Remove { key: String },
    Flush(Sender<()>),
}

/// Fire-and-forget writer over a shared store handle.
#[derive(Clone)]
pub struct ParamWriter {
    tx: Sender<WriteOp>,
}

impl ParamWriter {
    /// Spawn the background writer thread for `store`.
    pub fn spawn(store: StoreHandle) -> Self {
        let (tx, rx) = unbounded::<WriteOp>();

        thread::spawn(move || {
            for op in rx {
                match op {
                    WriteOp::Put { key, value } => store.put(&key, &value),
                    WriteOp::Remove { key } => store.remove(&key),
                    WriteOp::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
        });

        Self { tx }
    }

    /// Queue a raw write.
    pub fn put(&self, key: &str, value: &str) {
        self.send(WriteOp::Put {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    /// Queue an integer write.
    pub fn put_int(&self, key: &str, value: i64) {
        self.put(key, &value.to_string());
    }

    /// Queue a boolean write.
    pub fn put_bool(&self, key: &str, value: bool) {
        self.put(key, if value { "1" } else { "0" });
    }

    /// Queue a key removal.
    pub fn remove(&self, key: &str) {
        self.send(WriteOp::Remove {
            key: key.to_string(),
        });
    }

    /// Block until every previously queued write has been applied.
    ///
    /// Used on shutdown so queued writes are not lost when the process exits,
    /// and by tests that assert on store contents.
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = crossbeam::channel::bounded(1);
        self.send(WriteOp::Flush(ack_tx));
        let _ = ack_rx.recv();
    }

    fn send(&self, op: WriteOp) {
        if self.tx.send(op).is_err() {
            tracing::warn!("param writer thread is gone; dropping write");
        }
    }
}
