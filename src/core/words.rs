//! Amount in words, Indian numbering.
//!
//! Groups are Thousand (10^3), Lakh (10^5) and Crore (10^7). Every
//! rendering ends in "Rupees Only", exactly once.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Words for an amount of zero.
pub const ZERO_IN_WORDS: &str = "Zero Rupees Only";

const SUFFIX: &str = "Rupees Only";
const THOUSAND: u128 = 1_000;
const LAKH: u128 = 100_000;
const CRORE: u128 = 10_000_000;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Render a whole rupee amount in words.
///
/// ```
/// use gstbill::core::to_words;
///
/// assert_eq!(to_words(0), "Zero Rupees Only");
/// assert_eq!(
///     to_words(1234),
///     "One Thousand Two Hundred and Thirty Four Rupees Only"
/// );
/// assert_eq!(to_words(100_000), "One Lakh Rupees Only");
/// ```
pub fn to_words(n: u64) -> String {
    words_for(n.into())
}

/// Render a money amount in words after dropping the paise (floor).
///
/// Negative amounts render as zero. Any `Decimal` fits, so totals past
/// `u64::MAX` still read correctly.
pub fn amount_in_words(amount: Decimal) -> String {
    let rupees = amount.floor().to_u128().unwrap_or(0);
    words_for(rupees)
}

fn words_for(n: u128) -> String {
    if n == 0 {
        return ZERO_IN_WORDS.to_string();
    }
    let mut words = Vec::new();
    push_indian(n, &mut words);
    words.push(SUFFIX);
    words.join(" ")
}

/// Push the words for `n` (> 0) using Thousand/Lakh/Crore grouping.
fn push_indian(n: u128, words: &mut Vec<&'static str>) {
    if n >= CRORE {
        // Crore counts past 999 are grouped again ("One Thousand Crore").
        push_indian(n / CRORE, words);
        words.push("Crore");
        let rest = n % CRORE;
        if rest != 0 {
            push_indian(rest, words);
        }
        return;
    }

    if n >= LAKH {
        push_below_thousand(n / LAKH, words);
        words.push("Lakh");
    }

    let thousands = (n % LAKH) / THOUSAND;
    if thousands != 0 {
        push_below_thousand(thousands, words);
        words.push("Thousand");
    }

    push_below_thousand(n % THOUSAND, words);
}

/// Push the words for `n % 1000`. Zero pushes nothing.
fn push_below_thousand(n: u128, words: &mut Vec<&'static str>) {
    let n = (n % THOUSAND) as usize;
    let (hundreds, rest) = (n / 100, n % 100);

    if hundreds != 0 {
        words.push(ONES[hundreds]);
        words.push("Hundred");
        if rest != 0 {
            words.push("and");
        }
    }

    match rest {
        0 => {}
        1..=9 => words.push(ONES[rest]),
        10..=19 => words.push(TEENS[rest - 10]),
        _ => {
            words.push(TENS[rest / 10]);
            if rest % 10 != 0 {
                words.push(ONES[rest % 10]);
            }
        }
    }
}
