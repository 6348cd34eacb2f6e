//! GSTIN (GST Identification Number) format validation.
//!
//! A GSTIN has 15 characters:
//!
//! | Position | Content |
//! |----------|---------|
//! | 1–2 | State code (see [`state_name`](super::state_name)) |
//! | 3–12 | PAN of the registered person (`AAAAA9999A`) |
//! | 13 | Entity number for the same PAN within the state (`1`–`9`, `A`–`Z`) |
//! | 14 | Always `Z` |
//! | 15 | Check character (mod-36 checksum over positions 1–14) |

use std::fmt;

use super::states::is_known_state_code;

const CHARSET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Error returned when a GSTIN fails format validation.
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

/// The components of a structurally valid GSTIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GstinParts<'a> {
    /// Two-digit state code.
    pub state_code: &'a str,
    /// Ten-character PAN.
    pub pan: &'a str,
    /// Entity number (13th character).
    pub entity_code: char,
    /// Check character (15th character).
    pub check_char: char,
}

/// Trim and upper-case user input so it can be validated.
pub fn normalize_gstin(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

/// Validate a GSTIN by structure and check character (no network call).
///
/// Surrounding whitespace is ignored; letters must already be upper case
/// (see [`normalize_gstin`]).
pub fn validate_gstin(gstin: &str) -> Result<GstinParts<'_>, GstinError> {
    let gstin = gstin.trim();
    let fail = |reason: &str| GstinError {
        value: gstin.into(),
        reason: reason.into(),
    };

    if !gstin.is_ascii() {
        return Err(fail("must contain only ASCII letters and digits"));
    }
    if gstin.len() != 15 {
        return Err(fail("must be exactly 15 characters"));
    }

    let bytes = gstin.as_bytes();
    if !bytes
        .iter()
        .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    {
        return Err(fail("must contain only digits and upper-case letters"));
    }

    let state_code = &gstin[..2];
    if !is_known_state_code(state_code) {
        return Err(fail("unknown state code"));
    }

    let pan = &gstin[2..12];
    if !is_pan(pan) {
        return Err(fail("characters 3-12 must be a PAN (5 letters, 4 digits, 1 letter)"));
    }

    let entity_code = bytes[12] as char;
    if entity_code == '0' {
        return Err(fail("entity number must not be 0"));
    }

    if bytes[13] != b'Z' {
        return Err(fail("14th character must be 'Z'"));
    }

    let check_char = bytes[14] as char;
    match gstin_check_char(&gstin[..14]) {
        Some(expected) if expected == check_char => Ok(GstinParts {
            state_code,
            pan,
            entity_code,
            check_char,
        }),
        Some(expected) => Err(fail(&format!(
            "check character mismatch (expected '{expected}')"
        ))),
        None => Err(fail("cannot compute check character")),
    }
}

/// Compute the check character for the first 14 characters of a GSTIN.
///
/// Returns `None` if `body` is not 14 characters from `0-9A-Z`.
pub fn gstin_check_char(body: &str) -> Option<char> {
    if body.len() != 14 {
        return None;
    }

    let mut sum = 0u32;
    for (i, b) in body.bytes().enumerate() {
        let value = CHARSET.iter().position(|&c| c == b)? as u32;
        let factor = if i % 2 == 0 { 1 } else { 2 };
        let product = value * factor;
        sum += product / 36 + product % 36;
    }

    let check = (36 - sum % 36) % 36;
    Some(CHARSET[check as usize] as char)
}

fn is_pan(pan: &str) -> bool {
    let b = pan.as_bytes();
    b.len() == 10
        && b[..5].iter().all(u8::is_ascii_uppercase)
        && b[5..9].iter().all(u8::is_ascii_digit)
        && b[9].is_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_gstin_parts() {
        let parts = validate_gstin("27AAPFU0939F1ZV").unwrap();
        assert_eq!(parts.state_code, "27");
        assert_eq!(parts.pan, "AAPFU0939F");
        assert_eq!(parts.entity_code, '1');
        assert_eq!(parts.check_char, 'V');
    }

    #[test]
    fn whitespace_is_ignored() {
        assert!(validate_gstin("  24AELPV7892J1ZK ").is_ok());
    }

    #[test]
    fn check_char_known_values() {
        assert_eq!(gstin_check_char("24AELPV7892J1Z"), Some('K'));
        assert_eq!(gstin_check_char("27AAPFU0939F1Z"), Some('V'));
        assert_eq!(gstin_check_char("29AAGCB7383J1Z"), Some('4'));
    }

    #[test]
    fn check_char_rejects_bad_body() {
        assert_eq!(gstin_check_char("24AELPV7892J1"), None);
        assert_eq!(gstin_check_char("24aelpv7892j1z"), None);
    }

    #[test]
    fn wrong_check_char() {
        let err = validate_gstin("24ABCDE1234F1Z5").unwrap_err();
        assert!(err.reason.contains("expected '6'"));
    }

    #[test]
    fn lower_case_rejected_until_normalized() {
        assert!(validate_gstin("27aapfu0939f1zv").is_err());
        assert!(validate_gstin(&normalize_gstin(" 27aapfu0939f1zv ")).is_ok());
    }

    #[test]
    fn non_ascii_does_not_panic() {
        assert!(validate_gstin("27AAPFU0939F1Zé").is_err());
        assert!(validate_gstin("₹₹₹₹₹").is_err());
    }

    #[test]
    fn structural_failures() {
        assert!(validate_gstin("").is_err());
        assert!(validate_gstin("27AAPFU0939F1Z").is_err());
        assert!(validate_gstin("00AAPFU0939F1ZV").is_err());
        assert!(validate_gstin("271APFU0939F1ZV").is_err());
        assert!(validate_gstin("27AAPFU0939F0ZV").is_err());
        assert!(validate_gstin("27AAPFU0939F1YV").is_err());
    }
}
