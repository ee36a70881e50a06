//! Letter/index conversions shared by every stage of the machine.
//!
//! Letters are carried as uppercase ASCII bytes (`b'A'..=b'Z'`); contact
//! positions are carried as indices `0..26`.

/// Number of letters on every rotor, reflector and the plugboard.
pub const ALPHABET_LEN: usize = 26;

/// A fixed 26-letter table, indexed by contact position.
pub type Wiring = [u8; ALPHABET_LEN];

/// The identity wiring `ABC...Z`.
pub const IDENTITY: Wiring = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Index (0..26) of an uppercase letter.
#[inline]
pub fn index(letter: u8) -> usize {
    usize::from(letter - b'A')
}

/// Uppercase letter at an index, wrapping mod 26.
#[inline]
pub fn letter(index: usize) -> u8 {
    // `index % 26` always fits in a u8.
    b'A' + (index % ALPHABET_LEN) as u8
}

/// `(a + b - c) mod 26` without going negative.
#[inline]
pub fn offset(a: usize, b: usize, c: usize) -> usize {
    (a + b + ALPHABET_LEN - c % ALPHABET_LEN) % ALPHABET_LEN
}

/// Shift a letter forward through the alphabet, wrapping from Z to A.
#[inline]
pub fn caesar_shift(letter_in: u8, by: usize) -> u8 {
    letter(index(letter_in) + by)
}

/// True when `wiring` contains every letter exactly once.
pub fn is_permutation(wiring: &Wiring) -> bool {
    let mut seen = [false; ALPHABET_LEN];
    for &c in wiring {
        if !c.is_ascii_uppercase() || seen[index(c)] {
            return false;
        }
        seen[index(c)] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_letter() {
        assert_eq!(index(b'A'), 0);
        assert_eq!(index(b'Z'), 25);
        assert_eq!(letter(0), b'A');
        assert_eq!(letter(25), b'Z');
        assert_eq!(letter(26), b'A');
    }

    #[test]
    fn test_offset_wraps_below_zero() {
        assert_eq!(offset(0, 0, 1), 25);
        assert_eq!(offset(3, 4, 2), 5);
        assert_eq!(offset(25, 25, 0), 24);
    }

    #[test]
    fn test_caesar_shift() {
        assert_eq!(caesar_shift(b'A', 0), b'A');
        assert_eq!(caesar_shift(b'A', 3), b'D');
        assert_eq!(caesar_shift(b'Y', 3), b'B');
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&IDENTITY));
        let mut broken = IDENTITY;
        broken[1] = b'A';
        assert!(!is_permutation(&broken));
    }
}
