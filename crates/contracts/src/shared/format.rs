/// Digits grouped by thousands with commas: 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$1,234.50`; negative amounts use a minus sign: `−$90.00`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "\u{2212}" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Whole-dollar variant for metric cards: `$124,580`
pub fn format_currency_whole(amount: f64) -> String {
    let dollars = amount.abs().round() as u64;
    let sign = if amount < 0.0 && dollars > 0 { "\u{2212}" } else { "" };
    format!("{}${}", sign, group_thousands(dollars))
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(-90.0), "\u{2212}$90.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(22.5), "$22.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn test_whole_and_percent() {
        assert_eq!(format_currency_whole(124580.0), "$124,580");
        assert_eq!(format_currency_whole(999.0), "$999");
        assert_eq!(format_percent(4.2), "4.2%");
    }
}
