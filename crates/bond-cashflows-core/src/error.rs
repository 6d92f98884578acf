use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Invalid bond type: '{0}' — must be 'ZeroCoupon' or 'Coupon'")]
    InvalidBondType(String),

    #[error("Invalid maturity: maturity_years must be positive, got {0}")]
    InvalidMaturity(u32),

    #[error("Invalid payment frequency: payment_frequency must be positive, got {0}")]
    InvalidFrequency(u32),

    #[error("Invalid face value: face_value must be positive, got {0}")]
    InvalidFaceValue(Decimal),

    #[error("Invalid issue price: issue_price cannot be negative, got {0}")]
    InvalidIssuePrice(Decimal),

    #[error("Invalid coupon rate: coupon_rate cannot be negative, got {0}")]
    InvalidCouponRate(Decimal),

    #[error("Schedule too long: {maturity_years} years at {payment_frequency} payments per year overflows the period counter")]
    ScheduleTooLong {
        maturity_years: u32,
        payment_frequency: u32,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ScheduleError {
    fn from(e: serde_json::Error) -> Self {
        ScheduleError::SerializationError(e.to_string())
    }
}
