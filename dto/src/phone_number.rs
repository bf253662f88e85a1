/// Reduce a phone number typed by a user to its canonical, digits-only form.
///
/// Spaces, hyphens, parentheses, plus signs, letters, ... are all dropped.
/// No length or country code validation is made.
pub fn normalize_phone_number(raw: Option<&str>) -> String {
    raw.map(|raw| raw.chars().filter(char::is_ascii_digit).collect())
        .unwrap_or_default()
}
