/// Shortest dialable number accepted, counting digits only.
pub const MIN_PHONE_DIGITS: usize = 10;
/// Longest number accepted, per the E.164 ceiling.
pub const MAX_PHONE_DIGITS: usize = 15;
/// Country code assumed when a bare national number is given.
pub const DEFAULT_COUNTRY_CODE: &str = "91";

/// Strip every non-digit character from the input.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Whether the input contains a plausible phone number: 10 to 15 digits
/// once separators and symbols are stripped. Pure and total; anything
/// unrecognizable is simply rejected.
pub fn validate_phone_number(raw: &str) -> bool {
    let digits = digits_only(raw);
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len())
}

/// Normalize a number for the messaging channel: strip separators, then
/// prefix the country code when the input is a bare 10-digit national
/// number. Already-prefixed input passes through unchanged, as does any
/// ambiguous length.
pub fn format_phone_number(raw: &str, default_country_code: &str) -> String {
    let digits = digits_only(raw);

    if digits.starts_with(default_country_code) {
        return digits;
    }

    if digits.len() == 10 {
        return format!("{}{}", default_country_code, digits);
    }

    digits
}
