//! INR currency helpers: boundary rounding, display formatting with Indian
//! digit grouping, and amount-in-words rendering for invoice documents.
//!
//! Monetary values are `rust_decimal::Decimal` throughout. Intermediate
//! arithmetic stays unrounded; callers round once at the output boundary
//! via [`round_money`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

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

/// Rounds a monetary value to 2 decimal places (paise precision).
///
/// Midpoints round away from zero, the convention invoice displays expect
/// (2.675 → 2.68), rather than banker's rounding.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as Indian Rupees for display: `₹` symbol, exactly two
/// fraction digits, and Indian digit grouping (last three digits, then
/// groups of two), e.g. `₹12,34,567.89`.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), "00"),
    };
    let grouped = group_indian(int_part);
    if negative {
        format!("-₹{}.{}", grouped, frac_part)
    } else {
        format!("₹{}.{}", grouped, frac_part)
    }
}

/// Applies lakh/crore comma placement to a bare digit string.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        groups.push(&head[i - 2..i]);
        i -= 2;
    }
    groups.push(&head[..i]);
    let mut out = String::new();
    for group in groups.iter().rev() {
        out.push_str(group);
        out.push(',');
    }
    out.push_str(tail);
    out
}

/// Renders an amount in words using the Indian numbering system
/// (Thousand / Lakh / Crore), suffixed with "Rupees ... Only", with a
/// "and <words> Paise" clause when a fractional component exists.
///
/// `0` renders as `"Zero Rupees Only"`. Negative amounts render their
/// magnitude.
pub fn amount_in_words(amount: Decimal) -> String {
    if amount.is_zero() {
        return "Zero Rupees Only".to_string();
    }

    let abs = amount.abs();
    let rupees = abs.trunc().to_u64().unwrap_or(0);
    let paise = ((abs - abs.trunc()) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0);

    let mut result = rupee_words(rupees);
    result.push_str("Rupees");

    if paise > 0 {
        result.push_str(" and ");
        result.push_str(&convert_hundreds(paise));
        result.push_str("Paise");
    }

    result.push_str(" Only");
    result.trim().to_string()
}

/// Decomposes a rupee count into crore / lakh / thousand / hundreds groups.
/// Amounts of a thousand crore or more reuse the same grouping on the crore
/// count itself ("One Lakh Crore").
fn rupee_words(rupees: u64) -> String {
    let crores = rupees / 10_000_000;
    let lakhs = (rupees % 10_000_000) / 100_000;
    let thousands = (rupees % 100_000) / 1_000;
    let hundreds = rupees % 1_000;

    let mut result = String::new();

    if crores > 0 {
        if crores < 1_000 {
            result.push_str(&convert_hundreds(crores));
        } else {
            result.push_str(&rupee_words(crores));
        }
        result.push_str("Crore ");
    }

    if lakhs > 0 {
        result.push_str(&convert_hundreds(lakhs));
        result.push_str("Lakh ");
    }

    if thousands > 0 {
        result.push_str(&convert_hundreds(thousands));
        result.push_str("Thousand ");
    }

    if hundreds > 0 {
        result.push_str(&convert_hundreds(hundreds));
    }

    result
}

/// Converts 1–999 to words with a trailing space per rendered word.
fn convert_hundreds(mut num: u64) -> String {
    debug_assert!(num < 1_000);
    let mut result = String::new();

    if num >= 100 {
        result.push_str(ONES[(num / 100) as usize]);
        result.push_str(" Hundred ");
        num %= 100;
    }

    if num >= 20 {
        result.push_str(TENS[(num / 10) as usize]);
        result.push(' ');
        num %= 10;
    } else if num >= 10 {
        result.push_str(TEENS[(num - 10) as usize]);
        result.push(' ');
        return result;
    }

    if num > 0 {
        result.push_str(ONES[num as usize]);
        result.push(' ');
    }

    result
}
