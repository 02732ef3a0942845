// Phone number digit extraction

/// Appends the digit subsequence of a phone number to `out`, as values 0-9.
///
/// Every character that is not an ASCII digit is a separator and is dropped.
/// The phone number string itself is left as is; callers echo it verbatim.
pub fn phone_digits_into(phone: &str, out: &mut Vec<u8>) {
    out.extend(
        phone
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0'),
    );
}

/// Returns the digit subsequence of a phone number.
pub fn phone_digits(phone: &str) -> Vec<u8> {
    let mut digits = Vec::with_capacity(phone.len());
    phone_digits_into(phone, &mut digits);
    digits
}
