//! Numbers spelled out in British English, without spaces or hyphens.

use log::debug;

use crate::error::{Error, Result};

const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Spell `n` in words, e.g. `342` as `"threehundredandfortytwo"`.
///
/// Only `1..=1000` is supported.
///
/// ```rust
/// use stepseq::euler::spell;
///
/// assert_eq!(spell(115).unwrap(), "onehundredandfifteen");
/// assert_eq!(spell(1000).unwrap(), "onethousand");
/// assert!(spell(0).is_err());
/// ```
pub fn spell(n: u32) -> Result<String> {
    match n {
        1..=1000 => Ok(words(n as usize)),
        _ => Err(Error::Unspellable(n)),
    }
}

fn words(n: usize) -> String {
    match n {
        1000 => "onethousand".to_string(),
        100..=999 if n % 100 == 0 => format!("{}hundred", ONES[n / 100]),
        100..=999 => format!("{}hundredand{}", ONES[n / 100], words(n % 100)),
        20..=99 => format!("{}{}", TENS[n / 10], ONES[n % 10]),
        10..=19 => TEENS[n % 10].to_string(),
        _ => ONES[n].to_string(),
    }
}

/// Total number of letters in the spellings of `1..=n`.
pub fn sum_word_lengths(n: u32) -> Result<usize> {
    let total = (1..=n).map(|i| spell(i).map(|w| w.len())).sum::<Result<usize>>()?;
    debug!("letters used spelling 1..={n}: {total}");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_units_teens_and_tens() {
        assert_eq!(spell(1).unwrap(), "one");
        assert_eq!(spell(10).unwrap(), "ten");
        assert_eq!(spell(19).unwrap(), "nineteen");
        assert_eq!(spell(20).unwrap(), "twenty");
        assert_eq!(spell(99).unwrap(), "ninetynine");
    }

    #[test]
    fn test_spell_hundreds() {
        assert_eq!(spell(100).unwrap(), "onehundred");
        assert_eq!(spell(115).unwrap(), "onehundredandfifteen");
        assert_eq!(spell(342).unwrap(), "threehundredandfortytwo");
        assert_eq!(spell(900).unwrap(), "ninehundred");
        assert_eq!(spell(999).unwrap(), "ninehundredandninetynine");
    }

    #[test]
    fn test_spell_thousand() {
        assert_eq!(spell(1000).unwrap(), "onethousand");
    }

    #[test]
    fn test_spell_out_of_range() {
        assert_eq!(spell(0), Err(Error::Unspellable(0)));
        assert_eq!(spell(1001), Err(Error::Unspellable(1001)));
    }

    #[test]
    fn test_sum_word_lengths() {
        assert_eq!(sum_word_lengths(0), Ok(0));
        // one two three four five
        assert_eq!(sum_word_lengths(5), Ok(19));
        assert_eq!(sum_word_lengths(1000), Ok(21124));
    }

    #[test]
    fn test_sum_word_lengths_past_thousand() {
        assert_eq!(sum_word_lengths(1001), Err(Error::Unspellable(1001)));
    }
}
