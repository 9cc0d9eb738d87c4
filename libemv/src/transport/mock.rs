// libemv/src/transport/mock.rs

//! Queue-driven transport for tests.

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent commands and returns
/// queued responses in order. Queued failures and the `fail_*` flags
/// simulate a card leaving the field.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Commands received, oldest first.
    pub sent: Vec<Vec<u8>>,
    /// Answers still queued, next first.
    pub responses: Vec<Result<Vec<u8>>>,
    /// Make `connect` fail.
    pub fail_connect: bool,
    /// Make `close` fail.
    pub fail_close: bool,
    /// Times `connect` was called.
    pub connect_calls: usize,
    /// Times `close` was called.
    pub close_calls: usize,
}

impl MockTransport {
    /// Empty queue, every call succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw answer.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(Ok(resp));
    }

    /// Queue a transport failure for the next `transceive`.
    pub fn push_failure(&mut self, reason: &str) {
        self.responses.push(Err(Error::Transport(reason.to_string())));
    }

    /// True when every queued response has been consumed.
    pub fn is_drained(&self) -> bool {
        self.responses.is_empty()
    }
}

impl Transport for MockTransport {
    fn connect(&mut self) -> Result<()> {
        self.connect_calls += 1;
        if self.fail_connect {
            return Err(Error::Transport("connect refused".to_string()));
        }
        Ok(())
    }

    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(command.to_vec());
        if self.responses.is_empty() {
            Err(Error::Transport("tag was lost".to_string()))
        } else {
            self.responses.remove(0)
        }
    }

    fn close(&mut self) -> Result<()> {
        self.close_calls += 1;
        if self.fail_close {
            return Err(Error::Transport("close failed".to_string()));
        }
        Ok(())
    }
}
