//! Display formatting helpers shared by the dashboard and the CLI.

/// Format a number with thousand separators ("12,345").
pub fn format_number(num: f64) -> String {
    let negative = num < 0.0;
    let rounded = num.abs().round() as u64;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

/// Format a number in compact form ("1.2K", "3.4M").
pub fn format_compact(num: f64) -> String {
    let abs = num.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", num / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", num / 1_000.0)
    } else {
        format_number(num)
    }
}

/// Format a percentage with one decimal place. When `is_decimal` is true the
/// input is a 0..1 fraction, otherwise it is already on the 0..100 scale.
pub fn format_percent(num: f64, is_decimal: bool) -> String {
    let value = if is_decimal { num * 100.0 } else { num };
    format!("{:.1}%", value)
}

/// Format a year range ("2008\u{2013}2024", or just "2020" when collapsed).
pub fn format_year_range(start: i32, end: i32) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{}\u{2013}{}", start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1234.0), "1,234");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
        assert_eq!(format_number(-5021.0), "-5,021");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(1200.0), "1.2K");
        assert_eq!(format_compact(3_400_000.0), "3.4M");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.123, true), "12.3%");
        assert_eq!(format_percent(45.67, false), "45.7%");
    }

    #[test]
    fn test_format_year_range() {
        assert_eq!(format_year_range(2008, 2024), "2008\u{2013}2024");
        assert_eq!(format_year_range(2020, 2020), "2020");
    }
}
