// libemv/src/config.rs

//! Read flow configuration.

/// Which discovery stages a read runs. The defaults run everything, in
/// order: contactless directory, contact directory, then every known scheme
/// AID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ReaderConfig {
    /// Select `2PAY.SYS.DDF01` first.
    pub use_ppse: bool,
    /// Select `1PAY.SYS.DDF01` when the contactless directory yields nothing.
    pub use_pse: bool,
    /// Try the registered scheme AIDs when neither directory works.
    pub scheme_fallback: bool,
    /// Keep walking the contactless directory after the first success until
    /// a second, different card number turns up.
    pub capture_second_card: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            use_ppse: true,
            use_pse: true,
            scheme_fallback: true,
            capture_second_card: true,
        }
    }
}

impl ReaderConfig {
    /// Same as `ReaderConfig::default()`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or skip the contactless directory.
    pub fn with_ppse(mut self, on: bool) -> Self {
        self.use_ppse = on;
        self
    }

    /// Enable or skip the contact directory.
    pub fn with_pse(mut self, on: bool) -> Self {
        self.use_pse = on;
        self
    }

    /// Enable or skip the scheme AID fallback.
    pub fn with_scheme_fallback(mut self, on: bool) -> Self {
        self.scheme_fallback = on;
        self
    }

    /// Enable or skip looking for a second card number.
    pub fn with_second_card_capture(mut self, on: bool) -> Self {
        self.capture_second_card = on;
        self
    }
}
