//! URN:NBN check digit computation.
//!
//! Implements the German National Library's check digit scheme. Every
//! character of the scheme-specific string is replaced by its one- or
//! two-digit code, each resulting digit is weighted by its 1-based position
//! in the full expanded sequence, and the weighted sum is divided by the last
//! digit of that sequence. The check digit is the units digit of the
//! quotient.
//!
//! The fixed `urn:nbn:de:` prefix expands to 22 digits with a weighted sum of
//! 801, so computation over the scheme-specific string starts from there.

use crate::error::UrnError;

/// Weighted sum contributed by the expanded `urn:nbn:de:` prefix.
pub const PREFIX_SUM: i64 = 801;

/// Number of digits the `urn:nbn:de:` prefix expands to.
pub const PREFIX_DIGITS: i64 = 22;

/// Returns the check digit code for `c`, or `None` if `c` is outside the
/// checksum alphabet.
pub const fn char_code(c: char) -> Option<u8> {
    let code = match c {
        '0' => 1,
        '1' => 2,
        '2' => 3,
        '3' => 4,
        '4' => 5,
        '5' => 6,
        '6' => 7,
        '7' => 8,
        '8' => 9,
        '9' => 41,
        'a' => 18,
        'b' => 14,
        'c' => 19,
        'd' => 15,
        'e' => 16,
        'f' => 21,
        'g' => 22,
        'h' => 23,
        'i' => 24,
        'j' => 25,
        'k' => 42,
        'l' => 26,
        'm' => 27,
        'n' => 13,
        'o' => 28,
        'p' => 29,
        'q' => 31,
        'r' => 12,
        's' => 32,
        't' => 33,
        'u' => 11,
        'v' => 34,
        'w' => 35,
        'x' => 36,
        'y' => 37,
        'z' => 38,
        '+' => 49,
        ':' => 17,
        '-' => 39,
        '/' => 45,
        '_' => 43,
        '.' => 47,
        _ => return None,
    };
    Some(code)
}

/// Running state of the weighted sum.
struct Accumulator {
    sum: i64,
    position: i64,
    last_digit: i64,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            sum: PREFIX_SUM,
            position: PREFIX_DIGITS,
            last_digit: 0,
        }
    }

    fn push_digit(&mut self, digit: i64) -> Result<(), UrnError> {
        self.position = self
            .position
            .checked_add(1)
            .ok_or(UrnError::ChecksumOverflow)?;
        self.sum = digit
            .checked_mul(self.position)
            .and_then(|weighted| self.sum.checked_add(weighted))
            .ok_or(UrnError::ChecksumOverflow)?;
        self.last_digit = digit;
        Ok(())
    }

    fn push_code(&mut self, code: u8) -> Result<(), UrnError> {
        let code = i64::from(code);
        if code < 10 {
            self.push_digit(code)
        } else {
            self.push_digit(code / 10)?;
            self.push_digit(code % 10)
        }
    }
}

/// Computes the check digit for a scheme-specific string such as
/// `swb:14-opus-4711` (without the `urn:nbn:de:` prefix).
pub fn check_digit(canonical: &str) -> Result<u8, UrnError> {
    if canonical.is_empty() {
        return Err(UrnError::malformed("scheme-specific string is empty"));
    }

    let mut acc = Accumulator::new();
    for c in canonical.chars() {
        let code = char_code(c).ok_or(UrnError::UnmappedCharacter(c))?;
        acc.push_code(code)?;
    }

    // No code in the alphabet ends in 0, so the divisor is never zero.
    debug_assert_ne!(acc.last_digit, 0);
    let digit = (acc.sum / acc.last_digit) % 10;
    Ok(digit as u8)
}

/// Verifies a scheme-specific string that ends in its check digit, e.g.
/// `swb:14-opus-47118`. Returns the check digit on success.
pub fn verify(nss: &str) -> Result<u8, UrnError> {
    let Some(last) = nss.chars().last() else {
        return Err(UrnError::malformed("scheme-specific string is empty"));
    };
    let Some(actual) = last.to_digit(10) else {
        return Err(UrnError::malformed(format!(
            "last character '{last}' is not a check digit"
        )));
    };

    let canonical = &nss[..nss.len() - last.len_utf8()];
    let expected = check_digit(canonical)?;
    let actual = actual as u8;
    if expected != actual {
        return Err(UrnError::CheckDigitMismatch { expected, actual });
    }
    Ok(actual)
}
