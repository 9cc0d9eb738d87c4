// libemv/src/card/service_code.rs

//! Magnetic-stripe service code (three digits from track 2).

const INTERCHANGE_AND_TECHNOLOGY: [Option<&str>; 10] = [
    None,
    Some("Interchange: International interchange; Technology: None"),
    Some("Interchange: International interchange; Technology: Integrated circuit card"),
    None,
    None,
    Some("Interchange: National interchange; Technology: None"),
    Some("Interchange: National interchange; Technology: Integrated circuit card"),
    Some("Interchange: Private; Technology: None"),
    None,
    None,
];

const AUTHORISATION_PROCESSING: [Option<&str>; 10] = [
    Some("Authorisation: Normal"),
    None,
    Some("Authorisation: By issuer"),
    None,
    Some("Authorisation: By issuer unless explicit bilateral agreement applies"),
    None,
    None,
    None,
    None,
    None,
];

const ALLOWED_SERVICES_AND_PIN_REQUIREMENTS: [Option<&str>; 10] = [
    Some("Allowed services: No restrictions; Pin requirements: PIN required"),
    Some("Allowed services: No restrictions; Pin requirements: None"),
    Some("Allowed services: Goods and services only; Pin requirements: None"),
    Some("Allowed services: ATM only; Pin requirements: PIN required"),
    Some("Allowed services: Cash only; Pin requirements: None"),
    Some("Allowed services: Goods and services only; Pin requirements: PIN required"),
    Some("Allowed services: No restrictions; Pin requirements: Prompt for PIN if PED present"),
    Some(
        "Allowed services: Goods and services only; Pin requirements: Prompt for PIN if PED present",
    ),
    None,
    None,
];

/// Decoded service code. The three descriptions are only filled in when the
/// source is exactly three ASCII digits; a digit with no table entry leaves
/// its field unset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct ServiceCode {
    code: String,
    interchange_and_technology: Option<&'static str>,
    authorization_processing: Option<&'static str>,
    allowed_services_and_pin: Option<&'static str>,
}

impl ServiceCode {
    /// Decode `code`; anything but three digits leaves every field unset.
    pub fn new(code: &str) -> Self {
        let mut sc = Self {
            code: code.to_string(),
            interchange_and_technology: None,
            authorization_processing: None,
            allowed_services_and_pin: None,
        };
        if let [d1, d2, d3] = code.as_bytes() {
            if [d1, d2, d3].iter().all(|d| d.is_ascii_digit()) {
                let idx = |d: &u8| (d - b'0') as usize;
                sc.interchange_and_technology = INTERCHANGE_AND_TECHNOLOGY[idx(d1)];
                sc.authorization_processing = AUTHORISATION_PROCESSING[idx(d2)];
                sc.allowed_services_and_pin = ALLOWED_SERVICES_AND_PIN_REQUIREMENTS[idx(d3)];
            }
        }
        sc
    }

    /// The digits as read from the card.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Digit 1
    pub fn interchange_and_technology(&self) -> Option<&'static str> {
        self.interchange_and_technology
    }

    /// Digit 2
    pub fn authorization_processing(&self) -> Option<&'static str> {
        self.authorization_processing
    }

    /// Digit 3
    pub fn allowed_services_and_pin(&self) -> Option<&'static str> {
        self.allowed_services_and_pin
    }
}

impl From<String> for ServiceCode {
    fn from(code: String) -> Self {
        Self::new(&code)
    }
}

impl From<ServiceCode> for String {
    fn from(sc: ServiceCode) -> Self {
        sc.code
    }
}

impl std::fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}
