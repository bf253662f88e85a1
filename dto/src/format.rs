use crate::temporal_value::TemporalValue;
use chrono::Locale;

pub const NO_DATE_TEXT: &str = "Sin fecha registrada";
pub const INVALID_DATE_TEXT: &str = "Fecha no válida";
pub const NO_PRICE_TEXT: &str = "—";

const DATE_FORMAT: &str = "%-d de %B de %Y";
const DATE_LOCALE: Locale = Locale::es_MX;
const CURRENCY_SYMBOL: &str = "$";
const THOUSANDS_SEPARATOR: char = '.';

/// Render a stored date the way it is displayed to members, e.g. `5 de marzo de 2025`.
pub fn format_date(value: Option<&TemporalValue>) -> String {
    let Some(value) = value.filter(|value| !value.is_blank()) else {
        return NO_DATE_TEXT.to_owned();
    };

    value
        .to_local_date()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date_time| {
            date_time
                .and_utc()
                .format_localized(DATE_FORMAT, DATE_LOCALE)
                .to_string()
        })
        .unwrap_or_else(|| INVALID_DATE_TEXT.to_owned())
}

/// Render a price in Colombian pesos, without any fractional digit, e.g. `$ 15.000`.
pub fn format_price(value: Option<f64>) -> String {
    let Some(value) = value.filter(|value| value.is_finite()) else {
        return NO_PRICE_TEXT.to_owned();
    };

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!(
        "{sign}{CURRENCY_SYMBOL}\u{a0}{}",
        group_thousands(&digits)
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}
