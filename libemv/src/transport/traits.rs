// libemv/src/transport/traits.rs

//! Transport trait

use crate::Result;

/// Transport trait abstracts the contactless link away from the EMV logic.
///
/// Implementations wrap whatever ISO-DEP handle the platform provides. Every
/// method reports link failures as `Error::Transport`.
pub trait Transport {
    /// Open the connection to the card. Called once before the first command.
    fn connect(&mut self) -> Result<()>;

    /// Send one command APDU and return the full response, status word
    /// included.
    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>>;

    /// Close the connection.
    fn close(&mut self) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn connect(&mut self) -> Result<()> {
        (**self).connect()
    }

    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        (**self).transceive(command)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn connect(&mut self) -> Result<()> {
        (**self).connect()
    }

    fn transceive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        (**self).transceive(command)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}
