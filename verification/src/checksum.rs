//! Verhoeff check-digit validation for identity numbers.
//!
//! The check value is folded over the digits least significant first:
//! `c = D[c][P[i mod 8][digit]]`. A number is valid iff the final `c` is 0.

use kyc_types::{FormatError, IdentityNumber};

/// Cayley table of the dihedral group D5.
pub static MULTIPLICATION: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position-dependent permutation, applied cyclically every 8 digits.
pub static PERMUTATION: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Group inverse of each element of D5.
pub static INVERSE: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Whether `raw` is a well-formed identity number.
///
/// Non-digit characters are stripped first; anything but exactly 12 digits
/// is rejected without running the checksum.
pub fn validate(raw: &str) -> bool {
    verify(raw).is_ok()
}

/// Normalize `raw` and check its Verhoeff digit.
pub fn verify(raw: &str) -> Result<IdentityNumber, FormatError> {
    let identity = IdentityNumber::normalize(raw)?;
    if fold(identity.digits(), 0) != 0 {
        return Err(FormatError::ChecksumMismatch);
    }
    Ok(identity)
}

/// Compute the check digit that makes `payload` followed by it valid.
///
/// Returns `None` if `payload` is empty or contains anything but ASCII digits.
pub fn check_digit(payload: &str) -> Option<u8> {
    if payload.is_empty() || !payload.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits: Vec<u8> = payload.bytes().map(|b| b - b'0').collect();
    // The check digit will occupy position 0, so the payload starts at 1.
    Some(INVERSE[fold(&digits, 1) as usize])
}

/// Fold digit values (0-9, most significant first) into a check value.
fn fold(digits: &[u8], offset: usize) -> u8 {
    digits.iter().rev().enumerate().fold(0u8, |c, (i, &v)| {
        let permuted = PERMUTATION[(i + offset) % 8][v as usize];
        MULTIPLICATION[c as usize][permuted as usize]
    })
}
