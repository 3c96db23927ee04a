//! InfluxWriterActor - Buffers points and flushes them in batches
//!
//! The write endpoint is only hit in batches, mirroring the buffering the
//! official client libraries do internally:
//!
//! - **Size trigger**: flush after 1000 points
//! - **Time trigger**: flush after 1000 ms
//!
//! A failed flush is logged and the batch dropped. There is no retry policy;
//! readings are continuously produced and the next batch fills the gap.
//!
//! ## Message Flow
//!
//! ```text
//! HTTP handler → Write { point } → batch buffer → POST /api/v2/write
//!                                        ↑
//!                                        └── Commands (Flush, Shutdown)
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::{mpsc, oneshot};
use tokio::time::interval;
use tracing::{debug, error, instrument, trace, warn};

use crate::config::InfluxConfig;

use super::line_protocol::Point;

/// Batch size trigger - flush after this many points
const BATCH_SIZE_TRIGGER: usize = 1000;

/// Batch time trigger - flush after this duration
const BATCH_TIME_TRIGGER: Duration = Duration::from_millis(1000);

/// Commands that can be sent to the InfluxWriterActor
#[derive(Debug)]
pub enum WriterCommand {
    /// Buffer a point for the next batch
    Write { point: Point },

    /// Flush the current batch immediately
    ///
    /// Used for testing and graceful shutdown.
    Flush {
        /// Channel to send the result back
        respond_to: oneshot::Sender<Result<()>>,
    },

    /// Flush the remaining batch and shut down
    Shutdown {
        /// Acknowledged once the final flush completed
        respond_to: oneshot::Sender<()>,
    },
}

/// Actor that owns the connection to the database
///
/// The backend spawns exactly one writer at startup. All request handlers
/// share its handle, so the HTTP client and the batch buffer are reused
/// across requests.
pub struct InfluxWriterActor {
    config: InfluxConfig,

    /// HTTP client (reused across flushes for efficiency)
    client: reqwest::Client,

    /// Points waiting to be flushed
    batch: Vec<Point>,

    /// Command receiver
    command_rx: mpsc::Receiver<WriterCommand>,
}

impl InfluxWriterActor {
    pub fn new(config: InfluxConfig, command_rx: mpsc::Receiver<WriterCommand>) -> Self {
        Self {
            config,
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            batch: Vec::with_capacity(BATCH_SIZE_TRIGGER),
            command_rx,
        }
    }

    /// Run the actor's main loop
    ///
    /// Runs until a Shutdown command is received or the command channel is
    /// closed. Both paths flush the remaining batch before exiting.
    #[instrument(skip(self), fields(host = %self.config.host, bucket = %self.config.bucket))]
    pub async fn run(mut self) {
        debug!("starting influx writer actor");

        let mut ticker = interval(BATCH_TIME_TRIGGER);

        loop {
            tokio::select! {
                // Timer tick - flush whatever accumulated
                _ = ticker.tick() => {
                    if !self.batch.is_empty()
                        && let Err(e) = self.flush().await
                    {
                        error!("failed to flush batch: {e:#}");
                    }
                }

                // Handle commands
                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(WriterCommand::Write { point }) => {
                            trace!("buffering point");
                            self.batch.push(point);

                            if self.batch.len() >= BATCH_SIZE_TRIGGER
                                && let Err(e) = self.flush().await
                            {
                                error!("failed to flush batch: {e:#}");
                            }
                        }

                        Some(WriterCommand::Flush { respond_to }) => {
                            debug!("received Flush command");
                            let result = self.flush().await;
                            let _ = respond_to.send(result);
                        }

                        Some(WriterCommand::Shutdown { respond_to }) => {
                            debug!("received shutdown command");
                            if let Err(e) = self.flush().await {
                                error!("failed to flush final batch: {e:#}");
                            }
                            let _ = respond_to.send(());
                            break;
                        }

                        // All handles dropped - exit
                        None => {
                            warn!("command channel closed, shutting down");
                            if let Err(e) = self.flush().await {
                                error!("failed to flush final batch: {e:#}");
                            }
                            break;
                        }
                    }
                }
            }
        }

        debug!("influx writer actor stopped");
    }

    /// POST the buffered batch as line protocol
    ///
    /// The batch is cleared either way: a failed write drops its points.
    async fn flush(&mut self) -> Result<()> {
        if self.batch.is_empty() {
            return Ok(());
        }

        let body = self
            .batch
            .iter()
            .map(Point::to_line)
            .collect::<Vec<_>>()
            .join("\n");
        let count = self.batch.len();
        self.batch.clear();

        trace!("flushing {count} points");

        let response = self
            .client
            .post(format!("{}/api/v2/write", self.config.host.trim_end_matches('/')))
            .query(&[
                ("org", self.config.org.as_str()),
                ("bucket", self.config.bucket.as_str()),
                ("precision", "ns"),
            ])
            .header("Authorization", format!("Token {}", self.config.token))
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(body)
            .send()
            .await
            .context("failed to send write request")?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {}", response.status());
        }

        debug!("flushed {count} points");

        Ok(())
    }
}

/// Handle for controlling an InfluxWriterActor
///
/// This handle provides a typed API for sending commands to the actor.
/// It can be cloned and shared across request handlers.
#[derive(Debug, Clone)]
pub struct WriterHandle {
    /// Command sender
    sender: mpsc::Sender<WriterCommand>,
}

impl WriterHandle {
    /// Spawn a new writer actor
    ///
    /// This creates the actor, spawns it as a tokio task, and returns a handle.
    pub fn spawn(config: InfluxConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel(1024);

        let actor = InfluxWriterActor::new(config, cmd_rx);

        tokio::spawn(actor.run());

        Self { sender: cmd_tx }
    }

    /// Hand a point to the writer
    ///
    /// The point is buffered; the actual database write happens on the next
    /// flush trigger.
    pub async fn write(&self, point: Point) -> Result<()> {
        self.sender
            .send(WriterCommand::Write { point })
            .await
            .context("failed to send Write command")?;
        Ok(())
    }

    /// Flush the current batch immediately
    pub async fn flush(&self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(WriterCommand::Flush { respond_to: tx })
            .await
            .context("failed to send Flush command")?;

        rx.await.context("failed to receive response")??;
        Ok(())
    }

    /// Flush the remaining batch and shut the writer down
    pub async fn shutdown(&self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(WriterCommand::Shutdown { respond_to: tx })
            .await
            .context("failed to send Shutdown command")?;

        rx.await.context("failed to receive shutdown ack")?;
        Ok(())
    }
}
