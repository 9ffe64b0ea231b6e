//! Runs server calls on a tokio runtime and hands results back to the UI
//! thread over a channel.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use highlight_client::{ClientResult, HttpSegmentStore};
use highlight_timeline::{SaveAck, SaveRequest, SegmentStore, SegmentsFile};
use tokio::runtime::Runtime;
use tracing::debug;

/// Result of a background call.
#[derive(Debug)]
pub enum BridgeMessage {
    Saved(highlight_core::Result<SaveAck>),
    Fetched {
        file_name: String,
        result: ClientResult<SegmentsFile>,
    },
}

pub struct ServerBridge {
    runtime: Runtime,
    store: Arc<HttpSegmentStore>,
    tx: Sender<BridgeMessage>,
    rx: Receiver<BridgeMessage>,
}

impl ServerBridge {
    pub fn new(store: HttpSegmentStore) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("highlight-io")
            .enable_all()
            .build()?;
        let (tx, rx) = crossbeam_channel::unbounded();
        Ok(Self {
            runtime,
            store: Arc::new(store),
            tx,
            rx,
        })
    }

    /// Send a validated save request. The UI is repainted when it resolves.
    pub fn save(&self, request: SaveRequest, ctx: egui::Context) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = store.update_highlights(&request).await;
            if tx.send(BridgeMessage::Saved(result)).is_err() {
                debug!("UI gone before save finished");
            }
            ctx.request_repaint();
        });
    }

    /// Fetch the pipeline result for `file_name`.
    pub fn fetch(&self, file_name: String, ctx: egui::Context) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = store.fetch_segments(&file_name).await;
            if tx
                .send(BridgeMessage::Fetched { file_name, result })
                .is_err()
            {
                debug!("UI gone before fetch finished");
            }
            ctx.request_repaint();
        });
    }

    /// Messages that arrived since the last frame.
    pub fn poll(&self) -> Vec<BridgeMessage> {
        self.rx.try_iter().collect()
    }
}
