//! InfluxDB 2.x write path
//!
//! The backend does not talk to the database synchronously. Points are handed
//! to a [`WriterHandle`], buffered by a background actor and flushed in
//! batches over the `/api/v2/write` endpoint as line protocol.

pub mod line_protocol;
pub mod writer;

pub use line_protocol::Point;
pub use writer::{InfluxWriterActor, WriterCommand, WriterHandle};
