use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Bond structure: whether the instrument pays periodic coupons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondType {
    /// No periodic interest; face value repaid at maturity.
    ZeroCoupon,
    /// Fixed coupon paid every period, principal at maturity.
    Coupon,
}

impl FromStr for BondType {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Tolerate the hyphenated spelling used in market data feeds.
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "zerocoupon" => Ok(BondType::ZeroCoupon),
            "coupon" => Ok(BondType::Coupon),
            _ => Err(ScheduleError::InvalidBondType(s.to_string())),
        }
    }
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondType::ZeroCoupon => write!(f, "ZeroCoupon"),
            BondType::Coupon => write!(f, "Coupon"),
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bond_type_parse_variants() {
        assert_eq!("ZeroCoupon".parse::<BondType>().unwrap(), BondType::ZeroCoupon);
        assert_eq!("Zero-Coupon".parse::<BondType>().unwrap(), BondType::ZeroCoupon);
        assert_eq!("zero-coupon".parse::<BondType>().unwrap(), BondType::ZeroCoupon);
        assert_eq!("Coupon".parse::<BondType>().unwrap(), BondType::Coupon);
        assert_eq!("coupon".parse::<BondType>().unwrap(), BondType::Coupon);
    }

    #[test]
    fn test_bond_type_parse_rejects_unknown() {
        let err = "Annuity".parse::<BondType>().unwrap_err();
        match err {
            ScheduleError::InvalidBondType(s) => assert_eq!(s, "Annuity"),
            other => panic!("Expected InvalidBondType, got {:?}", other),
        }
    }

    #[test]
    fn test_bond_type_display_round_trips() {
        for bt in [BondType::ZeroCoupon, BondType::Coupon] {
            assert_eq!(bt.to_string().parse::<BondType>().unwrap(), bt);
        }
    }
}
