use std::io::{self, Read};

use bond_cashflows_core::schedule::CashFlowScheduleInput;

/// Read a schedule input as piped JSON from stdin.
/// Returns None when stdin is a TTY (interactive) or nothing was piped.
pub fn read_stdin() -> Result<Option<CashFlowScheduleInput>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped_input(&buffer)
}

/// Parse piped JSON into a typed schedule input. Blank input counts as
/// nothing piped.
fn parse_piped_input(raw: &str) -> Result<Option<CashFlowScheduleInput>, Box<dyn std::error::Error>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let input: CashFlowScheduleInput = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse piped JSON: {}", e))?;
    Ok(Some(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bond_cashflows_core::BondType;

    #[test]
    fn test_piped_json_parses_to_schedule_input() {
        let raw = r#"{
            "bond_type": "ZeroCoupon",
            "face_value": "1000",
            "issue_price": "950",
            "coupon_rate": "0",
            "maturity_years": 5,
            "payment_frequency": 1
        }"#;
        let parsed = parse_piped_input(raw).unwrap().unwrap();
        assert_eq!(parsed.bond_type, BondType::ZeroCoupon);
        assert_eq!(parsed.maturity_years, 5);
    }

    #[test]
    fn test_blank_pipe_is_treated_as_no_input() {
        assert!(parse_piped_input("").unwrap().is_none());
        assert!(parse_piped_input("  \n\t").unwrap().is_none());
    }

    #[test]
    fn test_malformed_pipe_reports_parse_error() {
        let err = parse_piped_input("{not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse piped JSON"));
    }
}
