use std::fmt::Display;
use std::str::FromStr;

/// Set of letters `a`-`z`, one bit per letter with `a` in the least significant bit.
pub type Bitmask = u32;

pub const ALPHABET_LENGTH: u32 = 26;

/// Every bit that maps to a letter. Anything above it is ignored.
pub const LETTERS_MASK: Bitmask = (1 << ALPHABET_LENGTH) - 1;

/// Compute the bitmask of a word.
///
/// Characters outside of `a-z`/`A-Z` do not contribute to the mask.
pub fn bitmask(word: &str) -> Bitmask {
    word.chars().fold(0, |bm, c| bm | letters::bitmask(&c))
}

/// Parse a decimal integer of any length into the bits that map to letters.
///
/// The value is reduced modulo `2^26` while parsing, so inputs far larger
/// than any primitive integer still keep their low 26 bits.
pub fn parse_bitmask(input: &str) -> Result<Bitmask, ParseBitmaskError> {
    let input = input.trim();
    if input.starts_with('-') {
        return Err(ParseBitmaskError::Negative);
    }

    let digits = input.strip_prefix('+').unwrap_or(input);
    if digits.is_empty() {
        return Err(ParseBitmaskError::Empty);
    }

    // Single underscores may group digits, as in `1_000`.
    let mut bm: Bitmask = 0;
    let mut after_digit = false;
    let mut chars = digits.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' && after_digit && chars.peek().is_some_and(char::is_ascii_digit) {
            after_digit = false;
            continue;
        }
        let digit = c.to_digit(10).ok_or(ParseBitmaskError::InvalidDigit(c))?;
        bm = (bm * 10 + digit) & LETTERS_MASK;
        after_digit = true;
    }
    Ok(bm)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBitmaskError {
    Empty,
    Negative,
    InvalidDigit(char),
}

impl Display for ParseBitmaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseBitmaskError::Empty => write!(f, "expected a number, got an empty string"),
            ParseBitmaskError::Negative => write!(f, "negative numbers have no letter bits"),
            ParseBitmaskError::InvalidDigit(c) => {
                write!(f, "invalid digit {:?} in number", c)
            }
        }
    }
}

impl std::error::Error for ParseBitmaskError {}

/// Letters selected by a bitmask, ordered by bit position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letters(pub Vec<char>);

impl Letters {
    pub fn mask(&self) -> Bitmask {
        self.0.iter().fold(0, |bm, c| bm | letters::bitmask(c))
    }
}

impl From<Bitmask> for Letters {
    fn from(mask: Bitmask) -> Self {
        Self(letters::decode(mask))
    }
}

impl FromStr for Letters {
    type Err = ParseBitmaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_bitmask(s).map(Letters::from)
    }
}

impl Display for Letters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut letters = self.0.iter();
        if let Some(first) = letters.next() {
            write!(f, "{}", first)?;
            for letter in letters {
                write!(f, " {}", letter)?;
            }
        }
        Ok(())
    }
}

pub mod letters {
    use super::{ALPHABET_LENGTH, Bitmask};

    const REFERENCE_ORD: u8 = b'a';

    /// Compute the bitmask of a character. Non-latin characters map to an empty mask.
    pub fn bitmask(letter: &char) -> Bitmask {
        if !letter.is_ascii_alphabetic() {
            return 0;
        }
        1 << (letter.to_ascii_lowercase() as u8 - REFERENCE_ORD)
    }

    /// Letters whose bit is set in `mask`, in ascending bit order.
    pub fn decode(mask: Bitmask) -> Vec<char> {
        (0..ALPHABET_LENGTH)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| (REFERENCE_ORD + i as u8) as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_single_bits() {
        assert_eq!(letters::decode(0), Vec::<char>::new());
        assert_eq!(letters::decode(1), vec!['a']);
        assert_eq!(letters::decode(1 << 25), vec!['z']);
        assert_eq!(letters::decode(3), vec!['a', 'b']);
    }

    #[test]
    fn decode_ignores_high_bits() {
        assert!(letters::decode(1 << 26).is_empty());
        assert!(letters::decode(!LETTERS_MASK).is_empty());
        assert_eq!(letters::decode((1 << 31) | 0b101), vec!['a', 'c']);
    }

    #[test]
    fn decode_then_encode_reconstructs_mask() {
        let samples = (0..=LETTERS_MASK)
            .step_by(4099)
            .chain([LETTERS_MASK, LETTERS_MASK - 1, 1 << 12]);
        for mask in samples {
            let word: String = letters::decode(mask).into_iter().collect();
            assert_eq!(bitmask(&word), mask, "word {:?}", word);
        }
    }

    #[test]
    fn bitmask_is_case_insensitive_and_skips_non_letters() {
        assert_eq!(bitmask("Bee"), 0b10010);
        assert_eq!(bitmask("b-e e!"), 0b10010);
        assert_eq!(bitmask(""), 0);
    }

    #[test]
    fn parse_small_numbers() {
        assert_eq!(parse_bitmask("0"), Ok(0));
        assert_eq!(parse_bitmask(" 3\n"), Ok(3));
        assert_eq!(parse_bitmask("+33554432"), Ok(1 << 25));
    }

    #[test]
    fn parse_reduces_huge_numbers() {
        // 2^26 * 3 + 5
        assert_eq!(parse_bitmask("201326597"), Ok(5));
        // u128::MAX has every low bit set
        assert_eq!(
            parse_bitmask("340282366920938463463374607431768211455"),
            Ok(LETTERS_MASK)
        );
        // 10^40 = 2^40 * 5^40, no low bits
        assert_eq!(parse_bitmask(&format!("1{}", "0".repeat(40))), Ok(0));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(parse_bitmask(""), Err(ParseBitmaskError::Empty));
        assert_eq!(parse_bitmask("+"), Err(ParseBitmaskError::Empty));
        assert_eq!(parse_bitmask("-1"), Err(ParseBitmaskError::Negative));
        assert_eq!(parse_bitmask("0x1f"), Err(ParseBitmaskError::InvalidDigit('x')));
        assert_eq!(parse_bitmask("1 2"), Err(ParseBitmaskError::InvalidDigit(' ')));
    }

    #[test]
    fn parse_accepts_grouping_underscores() {
        assert_eq!(parse_bitmask("1_000"), Ok(1000));
        assert_eq!(parse_bitmask("33_554_432"), Ok(1 << 25));
        assert_eq!(parse_bitmask("+1_1"), Ok(11));
        assert_eq!(parse_bitmask("_1"), Err(ParseBitmaskError::InvalidDigit('_')));
        assert_eq!(parse_bitmask("1_"), Err(ParseBitmaskError::InvalidDigit('_')));
        assert_eq!(parse_bitmask("1__0"), Err(ParseBitmaskError::InvalidDigit('_')));
    }

    #[test]
    fn letters_display_joins_with_spaces() {
        assert_eq!(Letters::from(0).to_string(), "");
        assert_eq!(Letters::from(1).to_string(), "a");
        assert_eq!("7".parse::<Letters>().unwrap().to_string(), "a b c");
        assert_eq!(Letters::from(0b10010).mask(), 0b10010);
    }
}
