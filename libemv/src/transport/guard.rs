// libemv/src/transport/guard.rs

//! Scoped connection handling.

use crate::Result;
use crate::transport::traits::Transport;
use std::ops::{Deref, DerefMut};

/// An open connection that is closed when dropped. Close failures are
/// logged and otherwise ignored.
pub struct ConnectionGuard<'a, T: Transport + ?Sized> {
    transport: &'a mut T,
}

impl<'a, T: Transport + ?Sized> ConnectionGuard<'a, T> {
    /// Connect `transport`; on failure nothing needs closing.
    pub fn open(transport: &'a mut T) -> Result<Self> {
        transport.connect()?;
        Ok(Self { transport })
    }
}

impl<T: Transport + ?Sized> Deref for ConnectionGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.transport
    }
}

impl<T: Transport + ?Sized> DerefMut for ConnectionGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.transport
    }
}

impl<T: Transport + ?Sized> Drop for ConnectionGuard<'_, T> {
    fn drop(&mut self) {
        if let Err(e) = self.transport.close() {
            log::trace!("ignoring close failure: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;

    #[test]
    fn closes_on_drop() {
        let mut m = MockTransport::new();
        {
            let mut g = ConnectionGuard::open(&mut m).unwrap();
            let _ = g.transceive(&[0x00]);
        }
        assert_eq!(m.connect_calls, 1);
        assert_eq!(m.close_calls, 1);
    }

    #[test]
    fn close_failure_is_swallowed() {
        let mut m = MockTransport {
            fail_close: true,
            ..Default::default()
        };
        drop(ConnectionGuard::open(&mut m).unwrap());
        assert_eq!(m.close_calls, 1);
    }

    #[test]
    fn failed_connect_does_not_close() {
        let mut m = MockTransport {
            fail_connect: true,
            ..Default::default()
        };
        assert!(ConnectionGuard::open(&mut m).is_err());
        assert_eq!(m.close_calls, 0);
    }
}
