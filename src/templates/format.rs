// templates/format.rs

/// Whole dollars, en-US style: "$1,250,000". Unknown prices read
/// "Price not available".
pub fn format_currency(amount: Option<u64>) -> String {
    match amount {
        Some(n) => format!("${}", group_thousands(n)),
        None => "Price not available".to_string(),
    }
}

/// "25,000", or "N/A" when unknown.
pub fn format_number(num: Option<u64>) -> String {
    match num {
        Some(n) => group_thousands(n),
        None => "N/A".to_string(),
    }
}

/// Bath counts keep a half when there is one: "2", "2.5".
pub fn format_baths(baths: f64) -> String {
    if baths.fract() == 0.0 {
        format!("{}", baths as u64)
    } else {
        format!("{baths:.1}")
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_has_no_fraction_and_groups() {
        assert_eq!(format_currency(Some(15_000_000)), "$15,000,000");
        assert_eq!(format_currency(Some(999)), "$999");
        assert_eq!(format_currency(Some(1_000)), "$1,000");
        assert_eq!(format_currency(None), "Price not available");
    }

    #[test]
    fn numbers_group() {
        assert_eq!(format_number(Some(0)), "0");
        assert_eq!(format_number(Some(35_000)), "35,000");
        assert_eq!(format_number(Some(1_234_567)), "1,234,567");
        assert_eq!(format_number(None), "N/A");
    }

    #[test]
    fn baths() {
        assert_eq!(format_baths(2.0), "2");
        assert_eq!(format_baths(2.5), "2.5");
    }
}
