// libemv/src/schemes.rs

//! Card schemes and their registered application identifiers.
//!
//! When a card has no readable directory the session tries these AIDs one
//! by one, in table order.

use derive_more::Display;

/// One registered application identifier of a payment scheme.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{}", name)]
pub struct CardScheme {
    /// Stable identifier, e.g. `"MASTER_CARD2"`.
    pub id: &'static str,
    /// Human readable scheme name; several entries may share one.
    pub name: &'static str,
    /// Registered application identifier (or its prefix).
    pub aid: &'static [u8],
}

impl CardScheme {
    const fn new(id: &'static str, name: &'static str, aid: &'static [u8]) -> Self {
        Self { id, name, aid }
    }

    /// `aid` as upper-case hex.
    pub fn aid_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.aid)
    }
}

#[rustfmt::skip]
static SCHEMES: [CardScheme; 34] = [
    CardScheme::new("VISA", "VISA", &[0xA0, 0x00, 0x00, 0x00, 0x03]),
    CardScheme::new("VISA2", "VISA", &[0xA0, 0x00, 0x00, 0x00, 0x03, 0x10, 0x10]),
    CardScheme::new("VISA3", "VISA", &[0xA0, 0x00, 0x00, 0x00, 0x98, 0x08, 0x48]),
    CardScheme::new("NAB_VISA", "VISA", &[0xA0, 0x00, 0x00, 0x00, 0x03]),
    CardScheme::new("NAB_VISA2", "VISA", &[0xA0, 0x00, 0x00, 0x03]),
    CardScheme::new("NAB_VISA3", "VISA", &[0xA0, 0x00, 0x00, 0x00, 0x03, 0x10, 0x10]),
    CardScheme::new("NAB_VISA4", "VISA", &[0xA0, 0x00, 0x00, 0x00, 0x98, 0x08, 0x48]),
    CardScheme::new("MASTER_CARD", "Master card", &[0xA0, 0x00, 0x00, 0x00, 0x04]),
    CardScheme::new("MASTER_CARD2", "Master card", &[0xA0, 0x00, 0x00, 0x00, 0x05]),
    CardScheme::new("AMERICAN_EXPRESS", "American express", &[0xA0, 0x00, 0x00, 0x00, 0x25]),
    CardScheme::new("CB", "CB", &[0xA0, 0x00, 0x00, 0x00, 0x42]),
    CardScheme::new("LINK", "LINK", &[0xA0, 0x00, 0x00, 0x00, 0x29]),
    CardScheme::new("JCB", "JCB", &[0xA0, 0x00, 0x00, 0x00, 0x65]),
    CardScheme::new("DANKORT", "Dankort", &[0xA0, 0x00, 0x00, 0x01, 0x21, 0x10, 0x10]),
    CardScheme::new("COGEBAN", "CoGeBan", &[0xA0, 0x00, 0x00, 0x01, 0x41, 0x00, 0x01]),
    CardScheme::new("DISCOVER", "Discover", &[0xA0, 0x00, 0x00, 0x01, 0x52, 0x30, 0x10]),
    CardScheme::new("BANRISUL", "Banrisul", &[0xA0, 0x00, 0x00, 0x01, 0x54]),
    CardScheme::new("SPAN", "Saudi Payments Network", &[0xA0, 0x00, 0x00, 0x02, 0x28]),
    CardScheme::new("INTERAC", "Interac", &[0xA0, 0x00, 0x00, 0x02, 0x77]),
    CardScheme::new("ZIP", "Discover Card", &[0xA0, 0x00, 0x00, 0x03, 0x24]),
    CardScheme::new("UNIONPAY", "UnionPay", &[0xA0, 0x00, 0x00, 0x03, 0x33]),
    CardScheme::new("EAPS", "Euro Alliance of Payment Schemes", &[0xA0, 0x00, 0x00, 0x03, 0x59]),
    CardScheme::new("VERVE", "Verve", &[0xA0, 0x00, 0x00, 0x03, 0x71]),
    CardScheme::new("TENN", "The Exchange Network ATM Network", &[0xA0, 0x00, 0x00, 0x04, 0x39]),
    CardScheme::new("RUPAY", "Rupay", &[0xA0, 0x00, 0x00, 0x05, 0x24, 0x10, 0x10]),
    CardScheme::new("PRO100", "PRO100", &[0xA0, 0x00, 0x00, 0x04, 0x32, 0x00, 0x01]),
    CardScheme::new("ZKA", "ZKA", &[0xD2, 0x76, 0x00, 0x00, 0x25, 0x45, 0x50, 0x01, 0x00]),
    CardScheme::new("BANKAXEPT", "Bankaxept", &[0xD5, 0x78, 0x00, 0x00, 0x02, 0x10, 0x10]),
    CardScheme::new("BRADESCO", "BRADESCO", &[0xF0, 0x00, 0x00, 0x00, 0x03, 0x00, 0x01]),
    CardScheme::new("MIDLAND", "Midland", &[0xA0, 0x00, 0x00, 0x00, 0x24, 0x01]),
    CardScheme::new("PBS", "PBS", &[0xA0, 0x00, 0x00, 0x01, 0x21, 0x10, 0x10]),
    CardScheme::new("ETRANZACT", "eTranzact", &[0xA0, 0x00, 0x00, 0x04, 0x54]),
    CardScheme::new("GOOGLE", "Google", &[0xA0, 0x00, 0x00, 0x04, 0x76, 0x6C]),
    CardScheme::new("INTER_SWITCH", "InterSwitch", &[0xA0, 0x00, 0x00, 0x03, 0x71, 0x00, 0x01]),
];

/// Read-only view of the scheme table.
pub struct SchemeCatalog;

impl SchemeCatalog {
    /// All entries in registration order.
    pub fn all() -> &'static [CardScheme] {
        &SCHEMES
    }

    /// Scheme whose registered AID is the longest prefix of `aid`. Ties go
    /// to the earlier entry.
    pub fn scheme_for_aid(aid: &[u8]) -> Option<&'static CardScheme> {
        SCHEMES
            .iter()
            .filter(|s| !s.aid.is_empty() && aid.starts_with(s.aid))
            .fold(None, |best: Option<&'static CardScheme>, s| match best {
                Some(b) if b.aid.len() >= s.aid.len() => Some(b),
                _ => Some(s),
            })
    }

    /// Scheme registered under `id`, e.g. `"VISA"`.
    pub fn find_by_id(id: &str) -> Option<&'static CardScheme> {
        SCHEMES.iter().find(|s| s.id == id)
    }
}
