//! GSTIN structure and checksum validation.
//!
//! A GSTIN has 15 characters:
//!
//! | Pos.  | Content                                  |
//! |-------|------------------------------------------|
//! | 1–2   | GST state code (`07` = Delhi)            |
//! | 3–12  | PAN of the holder (`AAAAA9999A`)         |
//! | 13    | entity number for that PAN (`1`–`9`, `A`–`Z`) |
//! | 14    | always `Z`                               |
//! | 15    | mod-36 check character                   |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::IndianState;

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Error returned when a GSTIN fails format or checksum validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GstinError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for GstinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid GSTIN '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for GstinError {}

/// A structurally valid GSTIN with a correct check character.
///
/// Deserialization goes through [`validate_gstin_format`], so a decoded
/// value upholds the same invariant as a parsed one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gstin(String);

impl Gstin {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-digit state code.
    pub fn state_code(&self) -> &str {
        &self.0[..2]
    }

    /// Embedded PAN.
    pub fn pan(&self) -> &str {
        &self.0[2..12]
    }

    /// Registration number of this PAN within the state.
    pub fn entity_number(&self) -> char {
        char::from(self.0.as_bytes()[12])
    }

    /// State of registration, if it is one of the selectable states.
    /// Union territory codes (e.g. `04` Chandigarh) return `None`.
    pub fn state(&self) -> Option<IndianState> {
        IndianState::from_code(self.state_code())
    }
}

impl fmt::Display for Gstin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Gstin {
    type Error = GstinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_gstin_format(&value)
    }
}

impl From<Gstin> for String {
    fn from(gstin: Gstin) -> Self {
        gstin.0
    }
}

impl std::str::FromStr for Gstin {
    type Err = GstinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_gstin_format(s)
    }
}

/// Compute the check character for the first 14 characters of a GSTIN.
///
/// Returns `None` if `body` is not exactly 14 base-36 characters (uppercase).
pub fn gstin_checksum(body: &str) -> Option<char> {
    if body.len() != 14 {
        return None;
    }
    let mut sum: u32 = 0;
    for (i, b) in body.bytes().enumerate() {
        let value = BASE36.iter().position(|&c| c == b)? as u32;
        let factor = if i % 2 == 0 { 1 } else { 2 };
        let product = value * factor;
        sum += product / 36 + product % 36;
    }
    let check = (36 - sum % 36) % 36;
    Some(char::from(BASE36[check as usize]))
}

fn fail(value: &str, reason: impl Into<String>) -> GstinError {
    GstinError {
        value: value.into(),
        reason: reason.into(),
    }
}

/// Validate a GSTIN by structure and check character (no network call).
///
/// Surrounding whitespace is trimmed and letters are upper-cased before
/// checking.
pub fn validate_gstin_format(input: &str) -> Result<Gstin, GstinError> {
    let gstin = input.trim().to_ascii_uppercase();

    if gstin.len() != 15 || !gstin.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(fail(&gstin, "must be exactly 15 letters or digits"));
    }
    let bytes = gstin.as_bytes();

    let state_code = &gstin[..2];
    let state_ok = state_code.bytes().all(|b| b.is_ascii_digit())
        && matches!(state_code.parse::<u8>(), Ok(1..=38 | 97 | 99));
    if !state_ok {
        return Err(fail(&gstin, format!("unknown state code '{state_code}'")));
    }

    let pan = &bytes[2..12];
    let pan_ok = pan[..5].iter().all(u8::is_ascii_uppercase)
        && pan[5..9].iter().all(u8::is_ascii_digit)
        && pan[9].is_ascii_uppercase();
    if !pan_ok {
        return Err(fail(&gstin, "characters 3-12 must be a PAN (AAAAA9999A)"));
    }

    if bytes[12] == b'0' {
        return Err(fail(&gstin, "entity number must be 1-9 or A-Z"));
    }

    if bytes[13] != b'Z' {
        return Err(fail(&gstin, "character 14 must be 'Z'"));
    }

    let expected = gstin_checksum(&gstin[..14])
        .ok_or_else(|| fail(&gstin, "contains characters outside 0-9/A-Z"))?;
    let actual = char::from(bytes[14]);
    if actual != expected {
        return Err(fail(
            &gstin,
            format!("check character is '{actual}', expected '{expected}'"),
        ));
    }

    Ok(Gstin(gstin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_delhi() {
        let g = validate_gstin_format("07AABCU9603R1ZP").unwrap();
        assert_eq!(g.state_code(), "07");
        assert_eq!(g.pan(), "AABCU9603R");
        assert_eq!(g.entity_number(), '1');
        assert_eq!(g.state(), Some(IndianState::Delhi));
    }

    #[test]
    fn valid_maharashtra() {
        let g = validate_gstin_format("27AAPFU0939F1ZV").unwrap();
        assert_eq!(g.state(), Some(IndianState::Maharashtra));
    }

    #[test]
    fn checksum_values() {
        assert_eq!(gstin_checksum("07AABCU9603R1Z"), Some('P'));
        assert_eq!(gstin_checksum("27AAPFU0939F1Z"), Some('V'));
        assert_eq!(gstin_checksum("29AAGCB7383J1Z"), Some('4'));
        assert_eq!(gstin_checksum("short"), None);
        assert_eq!(gstin_checksum("07aabcu9603r1z"), None);
    }

    #[test]
    fn form_placeholder_has_wrong_check_character() {
        let err = validate_gstin_format("07AABCU9603R1ZX").unwrap_err();
        assert!(err.reason.contains("expected 'P'"));
    }

    #[test]
    fn lowercase_and_whitespace_normalised() {
        let g = validate_gstin_format("  07aabcu9603r1zp ").unwrap();
        assert_eq!(g.as_str(), "07AABCU9603R1ZP");
    }

    #[test]
    fn wrong_length() {
        assert!(validate_gstin_format("07AABCU9603R1Z").is_err());
        assert!(validate_gstin_format("").is_err());
    }

    #[test]
    fn bad_state_code() {
        let err = validate_gstin_format("00AABCU9603R1ZP").unwrap_err();
        assert!(err.reason.contains("state code"));
        assert!(validate_gstin_format("A7AABCU9603R1ZP").is_err());
    }

    #[test]
    fn bad_pan() {
        assert!(validate_gstin_format("07AABC19603R1ZP").is_err());
    }

    #[test]
    fn missing_z() {
        let err = validate_gstin_format("07AABCU9603R1YP").unwrap_err();
        assert!(err.reason.contains("'Z'"));
    }

    #[test]
    fn union_territory_has_no_state() {
        let body = "04AABCU9603R1Z";
        let gstin = format!("{body}{}", gstin_checksum(body).unwrap());
        let g = validate_gstin_format(&gstin).unwrap();
        assert_eq!(g.state(), None);
    }

    #[test]
    fn from_str() {
        let g: Gstin = "27AAPFU0939F1ZV".parse().unwrap();
        assert_eq!(g.to_string(), "27AAPFU0939F1ZV");
    }
}
