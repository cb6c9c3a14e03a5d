//! Brazilian phone mask applied on every keystroke.
//!
//! `11987654321` becomes `(11) 98765-4321`. Shorter input is masked as far
//! as it goes, so the field reads naturally while typing.

use crate::constants::{AREA_CODE_DIGITS, PHONE_MAX_DIGITS, SUBSCRIBER_HYPHEN_AFTER};

/// Mask raw phone input.
///
/// Non-digits are dropped and the digits are capped at eleven. From the
/// third digit on the area code is parenthesized; once six or more digits
/// follow it, a hyphen goes after the fifth of them. Applying the mask to
/// its own output returns it unchanged.
pub fn mask_phone(raw: &str) -> String {
    let digits: String =
        raw.chars().filter(char::is_ascii_digit).take(PHONE_MAX_DIGITS).collect();

    if digits.len() <= AREA_CODE_DIGITS {
        return digits;
    }

    let (area_code, subscriber) = digits.split_at(AREA_CODE_DIGITS);
    let mut masked = String::with_capacity(digits.len() + 4);
    masked.push('(');
    masked.push_str(area_code);
    masked.push_str(") ");

    if subscriber.len() > SUBSCRIBER_HYPHEN_AFTER {
        let (head, tail) = subscriber.split_at(SUBSCRIBER_HYPHEN_AFTER);
        masked.push_str(head);
        masked.push('-');
        masked.push_str(tail);
    } else {
        masked.push_str(subscriber);
    }

    masked
}
