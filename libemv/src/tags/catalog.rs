// libemv/src/tags/catalog.rs

//! Static table of known EMV and ISO 7816-4 data object tags.
//!
//! Entries are `(tag hex, value type, name, description)`. When a tag id
//! occurs more than once the first entry wins.

use crate::types::ValueType;

pub(crate) type CatalogEntry = (&'static str, ValueType, &'static str, &'static str);

pub(crate) static ENTRIES: &[CatalogEntry] = &[
    (
        "06",
        ValueType::Binary,
        "Object Identifier (OID)",
        "Universal tag for OID",
    ),
    (
        "41",
        ValueType::Numeric,
        "Country Code",
        "Country code (encoding specified in ISO 3166-1) and optional national data",
    ),
    (
        "42",
        ValueType::Numeric,
        "Issuer Identification Number (IIN)",
        "The number that identifies the major industry and the card issuer and that forms the first part of the Primary Account Number (PAN)",
    ),
    (
        "4F",
        ValueType::Binary,
        "Application Identifier (AID) - card",
        "Identifies the application as described in ISO/IEC 7816-5",
    ),
    (
        "50",
        ValueType::Text,
        "Application Label",
        "Mnemonic associated with the AID according to ISO/IEC 7816-5",
    ),
    (
        "51",
        ValueType::Binary,
        "File reference data element",
        "ISO-7816 Path",
    ),
    (
        "52",
        ValueType::Binary,
        "Command APDU",
        "",
    ),
    (
        "53",
        ValueType::Binary,
        "Discretionary data (or template)",
        "",
    ),
    (
        "61",
        ValueType::Binary,
        "Application Template",
        "Contains one or more data objects relevant to an application directory entry according to ISO/IEC 7816-5",
    ),
    (
        "6F",
        ValueType::Binary,
        "File Control Information (FCI) Template",
        "Set of file control parameters and file management data (according to ISO/IEC 7816-4)",
    ),
    (
        "73",
        ValueType::Binary,
        "Directory Discretionary Template",
        "Issuer discretionary part of the directory according to ISO/IEC 7816-5",
    ),
    (
        "84",
        ValueType::Binary,
        "Dedicated File (DF) Name",
        "Identifies the name of the DF as described in ISO/IEC 7816-4",
    ),
    (
        "88",
        ValueType::Binary,
        "Short File Identifier (SFI)",
        "Identifies the SFI to be used in the commands related to a given AEF or DDF. The SFI data object is a binary field with the three high order bits set to zero",
    ),
    (
        "A5",
        ValueType::Binary,
        "File Control Information (FCI) Proprietary Template",
        "Identifies the data object proprietary to this specification in the FCI template according to ISO/IEC 7816-4",
    ),
    (
        "5F50",
        ValueType::Text,
        "Issuer URL",
        "The URL provides the location of the Issuer’s Library Server on the Internet",
    ),
    (
        "57",
        ValueType::Binary,
        "Track 2 Equivalent Data",
        "Contains the data elements of track 2 according to ISO/IEC 7813, excluding start sentinel, end sentinel, and Longitudinal Redundancy Check (LRC)",
    ),
    (
        "5A",
        ValueType::Numeric,
        "Application Primary Account Number (PAN)",
        "Valid cardholder account number",
    ),
    (
        "70",
        ValueType::Binary,
        "Record Template (EMV Proprietary)",
        "Template proprietary to the EMV specification",
    ),
    (
        "71",
        ValueType::Binary,
        "Issuer Script Template 1",
        "Contains proprietary issuer data for transmission to the ICC before the second GENERATE AC command",
    ),
    (
        "72",
        ValueType::Binary,
        "Issuer Script Template 2",
        "Contains proprietary issuer data for transmission to the ICC after the second GENERATE AC command",
    ),
    (
        "77",
        ValueType::Binary,
        "Response Message Template Format 2",
        "Contains the data objects (with tags and lengths) returned by the ICC in response to a command",
    ),
    (
        "80",
        ValueType::Binary,
        "Response Message Template Format 1",
        "Contains the data objects (without tags and lengths) returned by the ICC in response to a command",
    ),
    (
        "81",
        ValueType::Binary,
        "Amount, Authorised (Binary)",
        "Authorised amount of the transaction (excluding adjustments)",
    ),
    (
        "82",
        ValueType::Binary,
        "Application Interchange Profile",
        "Indicates the capabilities of the card to support specific functions in the application",
    ),
    (
        "83",
        ValueType::Binary,
        "Command Template",
        "Identifies the data field of a command message",
    ),
    (
        "86",
        ValueType::Binary,
        "Issuer Script Command",
        "Contains a command for transmission to the ICC",
    ),
    (
        "87",
        ValueType::Binary,
        "Application Priority Indicator",
        "Indicates the priority of a given application or group of applications in a directory",
    ),
    (
        "89",
        ValueType::Binary,
        "Authorisation Code",
        "Value generated by the authorisation authority for an approved transaction",
    ),
    (
        "8A",
        ValueType::Text,
        "Authorisation Response Code",
        "Code that defines the disposition of a message",
    ),
    (
        "8C",
        ValueType::Dol,
        "Card Risk Management Data Object List 1 (CDOL1)",
        "List of data objects (tag and length) to be passed to the ICC in the first GENERATE AC command",
    ),
    (
        "8D",
        ValueType::Dol,
        "Card Risk Management Data Object List 2 (CDOL2)",
        "List of data objects (tag and length) to be passed to the ICC in the second GENERATE AC command",
    ),
    (
        "8E",
        ValueType::Binary,
        "Cardholder Verification Method (CVM) List",
        "Identifies a method of verification of the cardholder supported by the application",
    ),
    (
        "8F",
        ValueType::Binary,
        "Certification Authority Public Key Index - card",
        "Identifies the certification authority’s public key in conjunction with the RID",
    ),
    (
        "90",
        ValueType::Binary,
        "Issuer Public Key Certificate",
        "Issuer public key certified by a certification authority",
    ),
    (
        "91",
        ValueType::Binary,
        "Issuer Authentication Data",
        "Data sent to the ICC for online issuer authentication",
    ),
    (
        "92",
        ValueType::Binary,
        "Issuer Public Key Remainder",
        "Remaining digits of the Issuer Public Key Modulus",
    ),
    (
        "93",
        ValueType::Binary,
        "Signed Static Application Data",
        "Digital signature on critical application parameters for SDA",
    ),
    (
        "94",
        ValueType::Binary,
        "Application File Locator (AFL)",
        "Indicates the location (SFI, range of records) of the AEFs related to a given application",
    ),
    (
        "95",
        ValueType::Binary,
        "Terminal Verification Results (TVR)",
        "Status of the different functions as seen from the terminal",
    ),
    (
        "97",
        ValueType::Binary,
        "Transaction Certificate Data Object List (TDOL)",
        "List of data objects (tag and length) to be used by the terminal in generating the TC Hash Value",
    ),
    (
        "98",
        ValueType::Binary,
        "Transaction Certificate (TC) Hash Value",
        "Result of a hash function specified in Book 2, Annex B3.1",
    ),
    (
        "99",
        ValueType::Binary,
        "Transaction Personal Identification Number (PIN) Data",
        "Data entered by the cardholder for the purpose of the PIN verification",
    ),
    (
        "9A",
        ValueType::Numeric,
        "Transaction Date",
        "Local date that the transaction was authorised",
    ),
    (
        "9B",
        ValueType::Binary,
        "Transaction Status Information",
        "Indicates the functions performed in a transaction",
    ),
    (
        "9C",
        ValueType::Numeric,
        "Transaction Type",
        "Indicates the type of financial transaction, represented by the first two digits of ISO 8583:1987 Processing Code",
    ),
    (
        "9D",
        ValueType::Binary,
        "Directory Definition File (DDF) Name",
        "Identifies the name of a DF associated with a directory",
    ),
    (
        "5F20",
        ValueType::Text,
        "Cardholder Name",
        "Indicates cardholder name according to ISO 7813",
    ),
    (
        "5F24",
        ValueType::Numeric,
        "Application Expiration Date",
        "Date after which application expires",
    ),
    (
        "5F25",
        ValueType::Numeric,
        "Application Effective Date",
        "Date from which the application may be used",
    ),
    (
        "5F28",
        ValueType::Numeric,
        "Issuer Country Code",
        "Indicates the country of the issuer according to ISO 3166",
    ),
    (
        "5F2A",
        ValueType::Text,
        "Transaction Currency Code",
        "Indicates the currency code of the transaction according to ISO 4217",
    ),
    (
        "5F2D",
        ValueType::Text,
        "Language Preference",
        "1–4 languages stored in order of preference, each represented by 2 alphabetical characters according to ISO 639",
    ),
    (
        "5F30",
        ValueType::Numeric,
        "Service Code",
        "Service code as defined in ISO/IEC 7813 for track 1 and track 2",
    ),
    (
        "5F34",
        ValueType::Numeric,
        "Application Primary Account Number (PAN) Sequence Number",
        "Identifies and differentiates cards with the same PAN",
    ),
    (
        "5F36",
        ValueType::Numeric,
        "Transaction Currency Exponent",
        "Indicates the implied position of the decimal point from the right of the transaction amount represented according to ISO 4217",
    ),
    (
        "5F53",
        ValueType::Binary,
        "International Bank Account Number (IBAN)",
        "Uniquely identifies the account of a customer at a financial institution as defined in ISO 13616",
    ),
    (
        "5F54",
        ValueType::Mixed,
        "Bank Identifier Code (BIC)",
        "Uniquely identifies a bank as defined in ISO 9362",
    ),
    (
        "5F55",
        ValueType::Text,
        "Issuer Country Code (alpha2 format)",
        "Indicates the country of the issuer as defined in ISO 3166 (using a 2 character alphabetic code)",
    ),
    (
        "5F56",
        ValueType::Text,
        "Issuer Country Code (alpha3 format)",
        "Indicates the country of the issuer as defined in ISO 3166 (using a 3 character alphabetic code)",
    ),
    (
        "9F01",
        ValueType::Numeric,
        "Acquirer Identifier",
        "Uniquely identifies the acquirer within each payment system",
    ),
    (
        "9F02",
        ValueType::Numeric,
        "Amount, Authorised (Numeric)",
        "Authorised amount of the transaction (excluding adjustments)",
    ),
    (
        "9F03",
        ValueType::Numeric,
        "Amount, Other (Numeric)",
        "Secondary amount associated with the transaction representing a cashback amount",
    ),
    (
        "9F04",
        ValueType::Numeric,
        "Amount, Other (Binary)",
        "Secondary amount associated with the transaction representing a cashback amount",
    ),
    (
        "9F05",
        ValueType::Binary,
        "Application Discretionary Data",
        "Issuer or payment system specified data relating to the application",
    ),
    (
        "9F06",
        ValueType::Binary,
        "Application Identifier (AID) - terminal",
        "Identifies the application as described in ISO/IEC 7816-5",
    ),
    (
        "9F07",
        ValueType::Binary,
        "Application Usage Control",
        "Indicates issuer’s specified restrictions on the geographic usage and services allowed for the application",
    ),
    (
        "9F08",
        ValueType::Binary,
        "Application Version Number - card",
        "Version number assigned by the payment system for the application",
    ),
    (
        "9F09",
        ValueType::Binary,
        "Application Version Number - terminal",
        "Version number assigned by the payment system for the application",
    ),
    (
        "9F0B",
        ValueType::Text,
        "Cardholder Name Extended",
        "Indicates the whole cardholder name when greater than 26 characters using the same coding convention as in ISO 7813",
    ),
    (
        "9F0D",
        ValueType::Binary,
        "Issuer Action Code - Default",
        "Specifies the issuer’s conditions that cause a transaction to be rejected if it might have been approved online, but the terminal is unable to process the transaction online",
    ),
    (
        "9F0E",
        ValueType::Binary,
        "Issuer Action Code - Denial",
        "Specifies the issuer’s conditions that cause the denial of a transaction without attempt to go online",
    ),
    (
        "9F0F",
        ValueType::Binary,
        "Issuer Action Code - Online",
        "Specifies the issuer’s conditions that cause a transaction to be transmitted online",
    ),
    (
        "9F10",
        ValueType::Binary,
        "Issuer Application Data",
        "Contains proprietary application data for transmission to the issuer in an online transaction",
    ),
    (
        "9F11",
        ValueType::Numeric,
        "Issuer Code Table Index",
        "Indicates the code table according to ISO/IEC 8859 for displaying the Application Preferred Name",
    ),
    (
        "9F12",
        ValueType::Text,
        "Application Preferred Name",
        "Preferred mnemonic associated with the AID",
    ),
    (
        "9F13",
        ValueType::Binary,
        "Last Online Application Transaction Counter (ATC) Register",
        "ATC value of the last transaction that went online",
    ),
    (
        "9F14",
        ValueType::Binary,
        "Lower Consecutive Offline Limit",
        "Issuer-specified preference for the maximum number of consecutive offline transactions for this ICC application allowed in a terminal with online capability",
    ),
    (
        "9F15",
        ValueType::Numeric,
        "Merchant Category Code",
        "Classifies the type of business being done by the merchant, represented according to ISO 8583:1993 for Card Acceptor Business Code",
    ),
    (
        "9F16",
        ValueType::Text,
        "Merchant Identifier",
        "When concatenated with the Acquirer Identifier, uniquely identifies a given merchant",
    ),
    (
        "9F17",
        ValueType::Binary,
        "Personal Identification Number (PIN) Try Counter",
        "Number of PIN tries remaining",
    ),
    (
        "9F18",
        ValueType::Binary,
        "Issuer Script Identifier",
        "Identification of the Issuer Script",
    ),
    (
        "9F1A",
        ValueType::Text,
        "Terminal Country Code",
        "Indicates the country of the terminal, represented according to ISO 3166",
    ),
    (
        "9F1B",
        ValueType::Binary,
        "Terminal Floor Limit",
        "Indicates the floor limit in the terminal in conjunction with the AID",
    ),
    (
        "9F1C",
        ValueType::Text,
        "Terminal Identification",
        "Designates the unique location of a terminal at a merchant",
    ),
    (
        "9F1D",
        ValueType::Binary,
        "Terminal Risk Management Data",
        "Application-specific value used by the card for risk management purposes",
    ),
    (
        "9F1E",
        ValueType::Text,
        "Interface Device (IFD) Serial Number",
        "Unique and permanent serial number assigned to the IFD by the manufacturer",
    ),
    (
        "9F1F",
        ValueType::Text,
        "[Magnetic Stripe] Track 1 Discretionary Data",
        "Discretionary part of track 1 according to ISO/IEC 7813",
    ),
    (
        "9F20",
        ValueType::Text,
        "[Magnetic Stripe] Track 2 Discretionary Data",
        "Discretionary part of track 2 according to ISO/IEC 7813",
    ),
    (
        "9F21",
        ValueType::Numeric,
        "Transaction Time (HHMMSS)",
        "Local time that the transaction was authorised",
    ),
    (
        "9F22",
        ValueType::Binary,
        "Certification Authority Public Key Index - Terminal",
        "Identifies the certification authority’s public key in conjunction with the RID",
    ),
    (
        "9F23",
        ValueType::Binary,
        "Upper Consecutive Offline Limit",
        "Issuer-specified preference for the maximum number of consecutive offline transactions for this ICC application allowed in a terminal without online capability",
    ),
    (
        "9F26",
        ValueType::Binary,
        "Application Cryptogram",
        "Cryptogram returned by the ICC in response of the GENERATE AC command",
    ),
    (
        "9F27",
        ValueType::Binary,
        "Cryptogram Information Data",
        "Indicates the type of cryptogram and the actions to be performed by the terminal",
    ),
    (
        "9F2D",
        ValueType::Binary,
        "ICC PIN Encipherment Public Key Certificate",
        "ICC PIN Encipherment Public Key certified by the issuer",
    ),
    (
        "9F2E",
        ValueType::Binary,
        "ICC PIN Encipherment Public Key Exponent",
        "ICC PIN Encipherment Public Key Exponent used for PIN encipherment",
    ),
    (
        "9F2F",
        ValueType::Binary,
        "ICC PIN Encipherment Public Key Remainder",
        "Remaining digits of the ICC PIN Encipherment Public Key Modulus",
    ),
    (
        "9F32",
        ValueType::Binary,
        "Issuer Public Key Exponent",
        "Issuer public key exponent used for the verification of the Signed Static Application Data and the ICC Public Key Certificate",
    ),
    (
        "9F33",
        ValueType::Binary,
        "Terminal Capabilities",
        "Indicates the card data input, CVM, and security capabilities of the terminal",
    ),
    (
        "9F34",
        ValueType::Binary,
        "Cardholder Verification (CVM) Results",
        "Indicates the results of the last CVM performed",
    ),
    (
        "9F35",
        ValueType::Numeric,
        "Terminal Type",
        "Indicates the environment of the terminal, its communications capability, and its operational control",
    ),
    (
        "9F36",
        ValueType::Binary,
        "Application Transaction Counter (ATC)",
        "Counter maintained by the application in the ICC (incrementing the ATC is managed by the ICC)",
    ),
    (
        "9F37",
        ValueType::Binary,
        "Unpredictable Number",
        "Value to provide variability and uniqueness to the generation of a cryptogram",
    ),
    (
        "9F38",
        ValueType::Dol,
        "Processing Options Data Object List (PDOL)",
        "Contains a list of terminal resident data objects (tags and lengths) needed by the ICC in processing the GET PROCESSING OPTIONS command",
    ),
    (
        "9F39",
        ValueType::Numeric,
        "Point-of-Service (POS) Entry Mode",
        "Indicates the method by which the PAN was entered, according to the first two digits of the ISO 8583:1987 POS Entry Mode",
    ),
    (
        "9F3A",
        ValueType::Binary,
        "Amount, Reference Currency",
        "Authorised amount expressed in the reference currency",
    ),
    (
        "9F3B",
        ValueType::Numeric,
        "Application Reference Currency",
        "1–4 currency codes used between the terminal and the ICC when the Transaction Currency Code is different from the Application Currency Code; each code is 3 digits according to ISO 4217",
    ),
    (
        "9F3C",
        ValueType::Numeric,
        "Transaction Reference Currency Code",
        "Code defining the common currency used by the terminal in case the Transaction Currency Code is different from the Application Currency Code",
    ),
    (
        "9F3D",
        ValueType::Numeric,
        "Transaction Reference Currency Exponent",
        "Indicates the implied position of the decimal point from the right of the transaction amount, with the Transaction Reference Currency Code represented according to ISO 4217",
    ),
    (
        "9F40",
        ValueType::Binary,
        "Additional Terminal Capabilities",
        "Indicates the data input and output capabilities of the terminal",
    ),
    (
        "9F41",
        ValueType::Numeric,
        "Transaction Sequence Counter",
        "Counter maintained by the terminal that is incremented by one for each transaction",
    ),
    (
        "9F42",
        ValueType::Numeric,
        "Application Currency Code",
        "Indicates the currency in which the account is managed according to ISO 4217",
    ),
    (
        "9F43",
        ValueType::Numeric,
        "Application Reference Currency Exponent",
        "Indicates the implied position of the decimal point from the right of the amount, for each of the 1–4 reference currencies represented according to ISO 4217",
    ),
    (
        "9F44",
        ValueType::Numeric,
        "Application Currency Exponent",
        "Indicates the implied position of the decimal point from the right of the amount represented according to ISO 4217",
    ),
    (
        "9F45",
        ValueType::Binary,
        "Data Authentication Code",
        "An issuer assigned value that is retained by the terminal during the verification process of the Signed Static Application Data",
    ),
    (
        "9F46",
        ValueType::Binary,
        "ICC Public Key Certificate",
        "ICC Public Key certified by the issuer",
    ),
    (
        "9F47",
        ValueType::Binary,
        "ICC Public Key Exponent",
        "ICC Public Key Exponent used for the verification of the Signed Dynamic Application Data",
    ),
    (
        "9F48",
        ValueType::Binary,
        "ICC Public Key Remainder",
        "Remaining digits of the ICC Public Key Modulus",
    ),
    (
        "9F49",
        ValueType::Dol,
        "Dynamic Data Authentication Data Object List (DDOL)",
        "List of data objects (tag and length) to be passed to the ICC in the INTERNAL AUTHENTICATE command",
    ),
    (
        "9F4A",
        ValueType::Binary,
        "Static Data Authentication Tag List",
        "List of tags of primitive data objects defined in this specification whose value fields are to be included in the Signed Static or Dynamic Application Data",
    ),
    (
        "9F4B",
        ValueType::Binary,
        "Signed Dynamic Application Data",
        "Digital signature on critical application parameters for DDA or CDA",
    ),
    (
        "9F4C",
        ValueType::Binary,
        "ICC Dynamic Number",
        "Time-variant number generated by the ICC, to be captured by the terminal",
    ),
    (
        "9F4D",
        ValueType::Binary,
        "Log Entry",
        "Provides the SFI of the Transaction Log file and its number of records",
    ),
    (
        "9F4E",
        ValueType::Text,
        "Merchant Name and Location",
        "Indicates the name and location of the merchant",
    ),
    (
        "9F4F",
        ValueType::Dol,
        "Log Format",
        "List (in tag and length format) of data objects representing the logged data elements that are passed to the terminal when a transaction log record is read",
    ),
    (
        "BF0C",
        ValueType::Binary,
        "File Control Information (FCI) Issuer Discretionary Data",
        "Issuer discretionary part of the FCI (e.g. O/S Manufacturer proprietary data)",
    ),
    (
        "DF60",
        ValueType::Binary,
        "VISA Log Entry",
        "",
    ),
    (
        "56",
        ValueType::Binary,
        "Track 1 Data",
        "Track 1 Data contains the data objects of the track 1 according to [ISO/IEC 7813] Structure B, excluding start sentinel, end sentinel and LRC.",
    ),
    (
        "9F66",
        ValueType::Binary,
        "Terminal Transaction Qualifiers",
        "Provided by the reader in the GPO command and used by the card to determine processing choices based on reader functionality",
    ),
    (
        "9F6B",
        ValueType::Binary,
        "Track 2 Data",
        "Track 2 Data contains the data objects of the track 2 according to [ISO/IEC 7813] Structure B, excluding start sentinel, end sentinel and LRC.",
    ),
    (
        "9F6E",
        ValueType::Binary,
        "Visa Low-Value Payment (VLP) Issuer Authorisation Code",
        "",
    ),
    (
        "9F29",
        ValueType::Binary,
        "Indicates the card's preference for the kernel on which the contactless application can be processed",
        "",
    ),
    (
        "9F2A",
        ValueType::Binary,
        "The value to be appended to the ADF Name in the data field of the SELECT command, if the Extended Selection Support flag is present and set to 1",
        "",
    ),
    (
        "9F52",
        ValueType::Binary,
        "Upper Cumulative Domestic Offline Transaction Amount",
        "Issuer specified data element indicating the required maximum cumulative offline amount allowed for the application before the transaction goes online.",
    ),
    (
        "9F56",
        ValueType::Binary,
        "?",
        "",
    ),
    (
        "9F6C",
        ValueType::Binary,
        "Mag Stripe Application Version Number (Card)",
        "Must be personalized with the value 0x0001",
    ),
    (
        "DF3E",
        ValueType::Binary,
        "?",
        "",
    ),
    (
        "9F50",
        ValueType::Binary,
        "Offline Accumulator Balance",
        "Represents the amount of offline spending available in the Card.",
    ),
    (
        "9F51",
        ValueType::Binary,
        "DRDOL",
        "A data object in the Card that provides the Kernel with a list of data objects that must be passed to the Card in the data field of the RECOVER AC command",
    ),
    (
        "9F53",
        ValueType::Binary,
        "Transaction Category Code",
        "",
    ),
    (
        "9F54",
        ValueType::Binary,
        "DS ODS Card",
        "",
    ),
    (
        "9F55",
        ValueType::Binary,
        "Mobile Support Indicator",
        "",
    ),
    (
        "9F5B",
        ValueType::Binary,
        "DSDOL",
        "",
    ),
    (
        "9F5C",
        ValueType::Binary,
        "DS Requested Operator ID",
        "",
    ),
    (
        "9F5D",
        ValueType::Binary,
        "Application Capabilities Information",
        "Lists a number of card features beyond regular payment",
    ),
    (
        "9F5E",
        ValueType::Binary,
        "Data Storage Identifier",
        "Constructed as follows: Application PAN (without any 'F' padding) || Application PAN Sequence Number (+ zero padding)",
    ),
    (
        "9F5F",
        ValueType::Binary,
        "DS Slot Availability",
        "",
    ),
    (
        "9F60",
        ValueType::Binary,
        "CVC3 (Track1)",
        "The CVC3 (Track1) is a 2-byte cryptogram returned by the Card in the response to the COMPUTE CRYPTOGRAPHIC CHECKSUM command.",
    ),
    (
        "9F61",
        ValueType::Binary,
        "CVC3 (Track2)",
        "The CVC3 (Track2) is a 2-byte cryptogram returned by the Card in the response to the COMPUTE CRYPTOGRAPHIC CHECKSUM command.",
    ),
    (
        "9F62",
        ValueType::Binary,
        "Track 1 bit map for CVC3",
        "PCVC3(Track1) indicates to the Kernel the positions in the discretionary data field of the Track 1 Data where the CVC3 (Track1) digits must be copied",
    ),
    (
        "9F63",
        ValueType::Binary,
        "Track 1 bit map for UN and ATC",
        "PUNATC(Track1) indicates to the Kernel the positions in the discretionary data field of Track 1 Data where the Unpredictable Number (Numeric) digits and Application Transaction Counter digits have to be copied.",
    ),
    (
        "9F64",
        ValueType::Binary,
        "Track 1 number of ATC digits",
        "The value of NATC(Track1) represents the number of digits of the Application Transaction Counter to be included in the discretionary data field of Track 1 Data",
    ),
    (
        "9F65",
        ValueType::Binary,
        "Track 2 bit map for CVC3",
        "PCVC3(Track2) indicates to the Kernel the positions in the discretionary data field of the Track 2 Data where the CVC3 (Track2) digits must be copied",
    ),
    (
        "9F67",
        ValueType::Binary,
        "Track 2 number of ATC digits",
        "The value of NATC(Track2) represents the number of digits of the Application Transaction Counter to be included in the discretionary data field of Track 2 Data",
    ),
    (
        "9F69",
        ValueType::Binary,
        "UDOL",
        "",
    ),
    (
        "9F6A",
        ValueType::Binary,
        "Unpredictable Number (Numeric)",
        "",
    ),
    (
        "9F6D",
        ValueType::Binary,
        "Mag-stripe Application Version Number (Reader)",
        "",
    ),
    (
        "9F6F",
        ValueType::Binary,
        "DS Slot Management Control",
        "",
    ),
    (
        "9F70",
        ValueType::Binary,
        "Protected Data Envelope 1",
        "",
    ),
    (
        "9F71",
        ValueType::Binary,
        "Protected Data Envelope 2",
        "",
    ),
    (
        "9F72",
        ValueType::Binary,
        "Protected Data Envelope 3",
        "",
    ),
    (
        "9F73",
        ValueType::Binary,
        "Protected Data Envelope 4",
        "",
    ),
    (
        "9F74",
        ValueType::Binary,
        "Protected Data Envelope 5",
        "",
    ),
    (
        "9F75",
        ValueType::Binary,
        "Unprotected Data Envelope 1",
        "",
    ),
    (
        "9F76",
        ValueType::Binary,
        "Unprotected Data Envelope 2",
        "",
    ),
    (
        "9F77",
        ValueType::Binary,
        "Unprotected Data Envelope 3",
        "",
    ),
    (
        "9F78",
        ValueType::Binary,
        "Unprotected Data Envelope 4",
        "",
    ),
    (
        "9F79",
        ValueType::Binary,
        "Unprotected Data Envelope 5",
        "",
    ),
    (
        "9F7C",
        ValueType::Binary,
        "Merchant Custom Data",
        "",
    ),
    (
        "9F7D",
        ValueType::Binary,
        "DS Summary 1",
        "",
    ),
    (
        "9F7F",
        ValueType::Binary,
        "DS Unpredictable Number",
        "",
    ),
    (
        "DF4B",
        ValueType::Binary,
        "POS Cardholder Interaction Information",
        "",
    ),
    (
        "DF61",
        ValueType::Binary,
        "DS Digest H",
        "",
    ),
    (
        "DF62",
        ValueType::Binary,
        "DS ODS Info",
        "",
    ),
    (
        "DF63",
        ValueType::Binary,
        "DS ODS Term",
        "",
    ),
    (
        "DF8104",
        ValueType::Binary,
        "Balance Read Before Gen AC",
        "",
    ),
    (
        "DF8105",
        ValueType::Binary,
        "Balance Read After Gen AC",
        "",
    ),
    (
        "DF8106",
        ValueType::Binary,
        "Data Needed",
        "",
    ),
    (
        "DF8107",
        ValueType::Binary,
        "CDOL1 Related Data",
        "",
    ),
    (
        "DF8108",
        ValueType::Binary,
        "DS AC Type",
        "",
    ),
    (
        "DF8109",
        ValueType::Binary,
        "DS Input (Term)",
        "",
    ),
    (
        "DF810A",
        ValueType::Binary,
        "DS ODS Info For Reader",
        "",
    ),
    (
        "DF810B",
        ValueType::Binary,
        "DS Summary Status",
        "",
    ),
    (
        "DF810C",
        ValueType::Binary,
        "Kernel ID",
        "",
    ),
    (
        "DF810D",
        ValueType::Binary,
        "DSVN Term",
        "",
    ),
    (
        "DF810E",
        ValueType::Binary,
        "Post-Gen AC Put Data Status",
        "",
    ),
    (
        "DF810F",
        ValueType::Binary,
        "Pre-Gen AC Put Data Status",
        "",
    ),
    (
        "DF8110",
        ValueType::Binary,
        "Proceed To First Write Flag",
        "",
    ),
    (
        "DF8111",
        ValueType::Binary,
        "PDOL Related Data",
        "",
    ),
    (
        "DF8112",
        ValueType::Binary,
        "Tags To Read",
        "",
    ),
    (
        "DF8113",
        ValueType::Binary,
        "DRDOL Related Data",
        "",
    ),
    (
        "DF8114",
        ValueType::Binary,
        "Reference Control Parameter",
        "",
    ),
    (
        "DF8115",
        ValueType::Binary,
        "Error Indication",
        "",
    ),
    (
        "DF8116",
        ValueType::Binary,
        "User Interface Request Data",
        "",
    ),
    (
        "DF8117",
        ValueType::Binary,
        "Card Data Input Capability",
        "",
    ),
    (
        "DF8118",
        ValueType::Binary,
        "CVM Capability - CVM Required",
        "",
    ),
    (
        "DF8119",
        ValueType::Binary,
        "CVM Capability - No CVM Required",
        "",
    ),
    (
        "DF811A",
        ValueType::Binary,
        "Default UDOL",
        "",
    ),
    (
        "DF811B",
        ValueType::Binary,
        "Kernel Configuration",
        "",
    ),
    (
        "DF811C",
        ValueType::Binary,
        "Max Lifetime of Torn Transaction Log Record",
        "",
    ),
    (
        "DF811D",
        ValueType::Binary,
        "Max Number of Torn Transaction Log Records",
        "",
    ),
    (
        "DF811E",
        ValueType::Binary,
        "Mag-stripe CVM Capability – CVM Required",
        "",
    ),
    (
        "DF811F",
        ValueType::Binary,
        "Security Capability",
        "",
    ),
    (
        "DF8120",
        ValueType::Binary,
        "Terminal Action Code – Default",
        "",
    ),
    (
        "DF8121",
        ValueType::Binary,
        "Terminal Action Code – Denial",
        "",
    ),
    (
        "DF8122",
        ValueType::Binary,
        "Terminal Action Code – Online",
        "",
    ),
    (
        "DF8123",
        ValueType::Binary,
        "Reader Contactless Floor Limit",
        "",
    ),
    (
        "DF8124",
        ValueType::Binary,
        "Reader Contactless Transaction Limit (No On-device CVM)",
        "",
    ),
    (
        "DF8125",
        ValueType::Binary,
        "Reader Contactless Transaction Limit (On-device CVM)",
        "",
    ),
    (
        "DF8126",
        ValueType::Binary,
        "Reader CVM Required Limit",
        "",
    ),
    (
        "DF8127",
        ValueType::Binary,
        "TIME_OUT_VALUE",
        "",
    ),
    (
        "DF8128",
        ValueType::Binary,
        "IDS Status",
        "",
    ),
    (
        "DF8129",
        ValueType::Binary,
        "Outcome Parameter Set",
        "",
    ),
    (
        "DF812A",
        ValueType::Binary,
        "DD Card (Track1)",
        "",
    ),
    (
        "DF812B",
        ValueType::Binary,
        "DD Card (Track2)",
        "",
    ),
    (
        "DF812C",
        ValueType::Binary,
        "Mag-stripe CVM Capability – No CVM Required",
        "",
    ),
    (
        "DF812D",
        ValueType::Binary,
        "Message Hold Time",
        "",
    ),
    (
        "FF8101",
        ValueType::Binary,
        "Torn Record",
        "",
    ),
    (
        "FF8102",
        ValueType::Binary,
        "Tags To Write Before Gen AC",
        "",
    ),
    (
        "FF8103",
        ValueType::Binary,
        "Tags To Write After Gen AC",
        "",
    ),
    (
        "FF8104",
        ValueType::Binary,
        "Data To Send",
        "",
    ),
    (
        "FF8105",
        ValueType::Binary,
        "Data Record",
        "",
    ),
    (
        "FF8106",
        ValueType::Binary,
        "Discretionary Data",
        "",
    ),
];
