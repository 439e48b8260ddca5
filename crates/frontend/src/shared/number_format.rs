//! Number formatting helpers for tables and cards.

/// Formats a value with comma thousands separators and the given number of
/// decimal places, e.g. `1234.567` → `"1,234.57"`.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Insert a comma every 3 digits from the right of the integer part.
    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    let mut digits = 0usize;
    for c in chars {
        if c.is_ascii_digit() {
            if digits > 0 && digits % 3 == 0 {
                grouped.push(',');
            }
            digits += 1;
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", grouped, d),
        None => grouped,
    }
}

/// US-dollar display, two decimal places: `1234.56` → `"$1,234.56"`,
/// negatives as `"-$1,234.56"`.
pub fn format_currency(value: f64) -> String {
    let body = format_number_with_decimals(value.abs(), 2);
    if value < 0.0 {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Currency with an explicit sign for difference columns: `"+$1,234.56"`.
pub fn format_signed_currency(value: f64) -> String {
    if value < 0.0 {
        format_currency(value)
    } else {
        format!("+{}", format_currency(value))
    }
}

/// Integer display with comma separators.
pub fn format_int(value: i64) -> String {
    format_number_with_decimals(value as f64, 0)
}

/// Percent display: `4.362` with 1 decimal → `"4.4%"`.
pub fn format_percent(value: f64, decimals: u8) -> String {
    format!("{}%", format_number_with_decimals(value, decimals))
}

/// Signed unit change for trend rows: `-88` → `"-88"`, `138` → `"+138"`.
pub fn format_signed_int(value: i64) -> String {
    if value < 0 {
        format_int(value)
    } else {
        format!("+{}", format_int(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-6554.74), "-$6,554.74");
    }

    #[test]
    fn test_format_signed_currency() {
        assert_eq!(format_signed_currency(14911.49), "+$14,911.49");
        assert_eq!(format_signed_currency(-4994.98), "-$4,994.98");
        assert_eq!(format_signed_currency(0.0), "+$0.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1,234.50");
    }

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(1234567), "1,234,567");
        assert_eq!(format_int(0), "0");
        assert_eq!(format_int(-1234), "-1,234");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(4.362, 1), "4.4%");
        assert_eq!(format_percent(-12.5, 1), "-12.5%");
        assert_eq!(format_percent(0.0, 0), "0%");
    }

    #[test]
    fn test_format_signed_int() {
        assert_eq!(format_signed_int(138), "+138");
        assert_eq!(format_signed_int(-88), "-88");
        assert_eq!(format_signed_int(0), "+0");
    }
}
