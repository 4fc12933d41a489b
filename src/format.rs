//! Price formatting

use rust_decimal::{Decimal, RoundingStrategy};

use crate::locale::Locale;

/// Format an amount for display in the given locale.
///
/// At most three fraction digits are shown (halves round away from zero) and
/// trailing zeros are dropped. Thousands are grouped with `,` in English and a
/// no-break space in Russian; the decimal mark is `.` and `,` respectively.
pub fn format_price(amount: Decimal, locale: Locale) -> String {
    let (group, decimal_mark) = match locale {
        Locale::En => (',', '.'),
        Locale::Ru => ('\u{a0}', ','),
    };

    let rounded = amount
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let digits = rounded.abs().to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }

    let len = integer.chars().count();

    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(group);
        }

        out.push(digit);
    }

    if !fraction.is_empty() {
        out.push(decimal_mark);
        out.push_str(fraction);
    }

    out
}
