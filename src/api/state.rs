//! API shared state

use crate::influx::WriterHandle;

/// Shared state passed to all API handlers
#[derive(Clone)]
pub struct ApiState {
    /// Handle to the buffered database writer
    pub writer: WriterHandle,
}

impl ApiState {
    pub fn new(writer: WriterHandle) -> Self {
        Self { writer }
    }
}
