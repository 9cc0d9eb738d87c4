// libemv/src/card/mod.rs

//! Card data captured from a tap.

use crate::protocol::find_value;
use crate::schemes::{CardScheme, SchemeCatalog};
use crate::tags;
use crate::types::Aid;

mod service_code;
mod track2;

pub use service_code::ServiceCode;
pub use track2::Track2;

/// Primary account number - Newtype Pattern. `Debug` and `Display` show the
/// masked form; use [`CardNumber::as_str`] for the digits.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CardNumber(String);

impl CardNumber {
    /// Wrap a digit string.
    pub fn new(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    /// The unmasked digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// No digits captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First six and last four digits, the rest replaced by `*`. Numbers of
    /// ten digits or fewer keep only the last four.
    pub fn masked(&self) -> String {
        let digits: Vec<char> = self.0.chars().collect();
        let n = digits.len();
        let (head, tail) = if n > 10 { (6, 4) } else { (0, n.min(4)) };
        digits
            .iter()
            .enumerate()
            .map(|(i, &c)| if i < head || i >= n - tail { c } else { '*' })
            .collect()
    }
}

impl std::fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CardNumber").field(&self.masked()).finish()
    }
}

impl std::fmt::Display for CardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Everything read from one tap. Starts out locked; the session clears the
/// flag once an application yields data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardRecord {
    holder_name: Option<String>,
    card_number: CardNumber,
    expiry_month: String,
    expiry_year: String,
    second_card_number: CardNumber,
    second_expiry_month: String,
    second_expiry_year: String,
    service_code: Option<ServiceCode>,
    aid: Option<Aid>,
    locked: bool,
}

impl Default for CardRecord {
    fn default() -> Self {
        Self {
            holder_name: None,
            card_number: CardNumber::default(),
            expiry_month: String::new(),
            expiry_year: String::new(),
            second_card_number: CardNumber::default(),
            second_expiry_month: String::new(),
            second_expiry_year: String::new(),
            service_code: None,
            aid: None,
            locked: true,
        }
    }
}

impl CardRecord {
    /// An empty, locked record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for track 2 (tag 57 or 9F6B) in `data` and record it.
    ///
    /// The first number seen fills the primary slot together with its
    /// service code. A different number afterwards fills the secondary slot
    /// (without a service code); the same number again changes nothing.
    /// Returns true whenever track 2 was found and parsed.
    pub fn apply_track2(&mut self, data: &[u8]) -> bool {
        let Some(raw) = find_value(data, &[tags::TRACK_2_EQV_DATA, tags::TRACK_2_DATA]) else {
            return false;
        };
        let Some(track) = Track2::parse(&raw) else {
            log::trace!("track 2 present but not parseable ({} bytes)", raw.len());
            return false;
        };

        let pan = CardNumber::new(track.pan);
        if self.card_number.is_empty() {
            log::debug!("track 2: primary card {}", pan);
            self.card_number = pan;
            self.expiry_month = track.expiry_month;
            self.expiry_year = track.expiry_year;
            self.service_code = track.service_code.as_deref().map(ServiceCode::new);
        } else if self.card_number != pan {
            log::debug!("track 2: secondary card {}", pan);
            self.second_card_number = pan;
            self.second_expiry_month = track.expiry_month;
            self.second_expiry_year = track.expiry_year;
        } else {
            log::trace!("track 2: card {} read again", pan);
        }
        true
    }

    /// Record the cardholder name (tag 5F20) if `data` carries one.
    pub fn apply_holder_name(&mut self, data: &[u8]) -> bool {
        match find_value(data, &[tags::CARDHOLDER_NAME]) {
            Some(name) => {
                self.holder_name = Some(String::from_utf8_lossy(&name).into_owned());
                true
            }
            None => false,
        }
    }

    /// Remember the application that produced the primary number.
    pub fn set_aid_if_unset(&mut self, aid: &Aid) {
        if self.aid.is_none() && !self.card_number.is_empty() {
            self.aid = Some(aid.clone());
        }
    }

    /// Mark that an application yielded data.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Cardholder name (tag 5F20), if the card gave one.
    pub fn holder_name(&self) -> Option<&str> {
        self.holder_name.as_deref()
    }

    /// Primary card number; empty until one is read.
    pub fn card_number(&self) -> &CardNumber {
        &self.card_number
    }

    /// `MM` of the primary card.
    pub fn expiry_month(&self) -> &str {
        &self.expiry_month
    }

    /// `YY` of the primary card.
    pub fn expiry_year(&self) -> &str {
        &self.expiry_year
    }

    /// Set only when a second, different number was read.
    pub fn second_card_number(&self) -> Option<&CardNumber> {
        (!self.second_card_number.is_empty()).then_some(&self.second_card_number)
    }

    /// `MM` of the second card.
    pub fn second_expiry_month(&self) -> &str {
        &self.second_expiry_month
    }

    /// `YY` of the second card.
    pub fn second_expiry_year(&self) -> &str {
        &self.second_expiry_year
    }

    /// Service code of the primary card.
    pub fn service_code(&self) -> Option<&ServiceCode> {
        self.service_code.as_ref()
    }

    /// Application that produced the primary card number.
    pub fn aid(&self) -> Option<&Aid> {
        self.aid.as_ref()
    }

    /// Scheme of the application that produced the primary number.
    pub fn scheme(&self) -> Option<&'static CardScheme> {
        self.aid
            .as_ref()
            .and_then(|aid| SchemeCatalog::scheme_for_aid(aid.as_bytes()))
    }

    /// True while no application has yielded data.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// A primary account number was captured.
    pub fn is_ready(&self) -> bool {
        !self.card_number.is_empty()
    }
}
