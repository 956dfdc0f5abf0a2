//! Wei/ETH conversions
//!
//! Amounts cross three representations: decimal ETH strings in forms and the
//! backend API, hex wei quantities on the wire, and `u128` wei internally.

/// Wei per ETH (10^18)
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Parse a decimal ETH string ("1.5") into wei
///
/// Rejects empty input, more than 18 fractional digits, and anything that is
/// not a plain decimal number.
pub fn parse_eth(amount: &str) -> Result<u128, String> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err("Amount is empty".to_string());
    }

    let (whole, frac) = match amount.split_once('.') {
        Some((w, f)) => (w, f),
        None => (amount, ""),
    };

    if frac.len() > 18 {
        return Err("Amount has more than 18 decimal places".to_string());
    }

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| format!("Invalid amount: {:?}", amount))?
    };

    let frac_wei: u128 = if frac.is_empty() {
        0
    } else {
        let padded = format!("{:0<18}", frac);
        padded
            .parse()
            .map_err(|_| format!("Invalid amount: {:?}", amount))?
    };

    whole
        .checked_mul(WEI_PER_ETH)
        .and_then(|w| w.checked_add(frac_wei))
        .ok_or_else(|| "Amount is too large".to_string())
}

/// Format a wei amount as a decimal ETH string
///
/// Trims trailing zeros but keeps at least two decimal places.
pub fn format_eth(wei: u128) -> String {
    let whole = wei / WEI_PER_ETH;
    let frac = wei % WEI_PER_ETH;

    let mut frac_str = format!("{:018}", frac);
    while frac_str.len() > 2 && frac_str.ends_with('0') {
        frac_str.pop();
    }

    format!("{}.{}", whole, frac_str)
}

/// Hex quantity ("0x...") to wei
pub fn parse_hex_wei(hex: &str) -> Result<u128, String> {
    let digits = hex
        .strip_prefix("0x")
        .ok_or_else(|| format!("Quantity missing 0x prefix: {}", hex))?;
    u128::from_str_radix(digits, 16).map_err(|e| format!("Invalid hex quantity {}: {}", hex, e))
}

/// Wei to a hex quantity for transaction values
pub fn to_hex_wei(wei: u128) -> String {
    format!("{:#x}", wei)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_eth() {
        assert_eq!(parse_eth("1").unwrap(), WEI_PER_ETH);
        assert_eq!(parse_eth("1.5").unwrap(), 1_500_000_000_000_000_000);
        assert_eq!(parse_eth("0.000000000000000001").unwrap(), 1);
        assert_eq!(parse_eth(".5").unwrap(), 500_000_000_000_000_000);
        assert!(parse_eth("").is_err());
        assert!(parse_eth("abc").is_err());
        assert!(parse_eth("1.0000000000000000001").is_err());
        assert!(parse_eth("-1").is_err());
    }

    #[test]
    fn test_format_eth() {
        assert_eq!(format_eth(0), "0.00");
        assert_eq!(format_eth(WEI_PER_ETH), "1.00");
        assert_eq!(format_eth(1_500_000_000_000_000_000), "1.50");
        assert_eq!(format_eth(1), "0.000000000000000001");
    }

    #[test]
    fn test_round_trip() {
        for amount in ["1.50", "0.25", "12.345"] {
            let wei = parse_eth(amount).unwrap();
            assert_eq!(parse_eth(&format_eth(wei)).unwrap(), wei);
        }
    }

    #[test]
    fn test_hex_wei() {
        assert_eq!(parse_hex_wei("0x0").unwrap(), 0);
        assert_eq!(parse_hex_wei("0xde0b6b3a7640000").unwrap(), WEI_PER_ETH);
        assert_eq!(to_hex_wei(WEI_PER_ETH), "0xde0b6b3a7640000");
        assert!(parse_hex_wei("123").is_err());
    }
}
