//! Pre-tax cash-flow schedule generation for fixed-income instruments.
//!
//! Produces the period-indexed coupon and principal payments of a bond from
//! its contractual terms. Downstream consumers (yield solvers, pricing, tax
//! analysis) operate on the schedule; no discounting or day-count handling
//! happens here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::ScheduleError;
use crate::types::{with_metadata, BondType, ComputationOutput, Money, Rate};
use crate::ScheduleResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for cash-flow schedule generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowScheduleInput {
    /// Zero-coupon or coupon-bearing
    pub bond_type: BondType,
    /// Par / face value repaid at maturity (typically 1000)
    pub face_value: Money,
    /// Price paid by the purchaser at issue. Informational; the schedule
    /// does not depend on it.
    pub issue_price: Money,
    /// Annual coupon rate as a decimal (e.g. 0.05 = 5%). Ignored for
    /// zero-coupon bonds.
    pub coupon_rate: Rate,
    /// Bond lifetime in whole years
    pub maturity_years: u32,
    /// Coupon periods per year: 1 = annual, 2 = semi-annual, 4 = quarterly,
    /// 12 = monthly
    pub payment_frequency: u32,
}

/// A single period's cash flows. Periods are 1-based and sequential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowPeriod {
    pub period: u32,
    pub coupon_payment: Money,
    /// Face value at the final period, zero everywhere else
    pub principal_payment: Money,
    /// Coupon plus principal for the period
    pub pre_tax_cash_flow: Money,
}

/// Output of schedule generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowScheduleOutput {
    /// maturity_years * payment_frequency
    pub total_periods: u32,
    /// Coupon paid each period (zero for zero-coupon bonds)
    pub periodic_coupon: Money,
    /// Sum of all pre-tax cash flows over the bond's life
    pub total_pre_tax_cash_flow: Money,
    /// One entry per period, ascending period order
    pub periods: Vec<CashFlowPeriod>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate the full pre-tax cash-flow schedule for a bond.
///
/// Pure and deterministic: the same input always produces the same schedule.
/// All validation happens before any computation; either the complete
/// schedule is returned or nothing is.
pub fn generate_cash_flows(
    input: &CashFlowScheduleInput,
) -> ScheduleResult<ComputationOutput<CashFlowScheduleOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validate ---
    validate_input(input)?;

    let total_periods = input
        .maturity_years
        .checked_mul(input.payment_frequency)
        .ok_or(ScheduleError::ScheduleTooLong {
            maturity_years: input.maturity_years,
            payment_frequency: input.payment_frequency,
        })?;

    // --- Periodic coupon ---
    let periodic_coupon = match input.bond_type {
        BondType::ZeroCoupon => {
            if !input.coupon_rate.is_zero() {
                warnings.push(format!(
                    "coupon_rate {} is ignored for zero-coupon bonds",
                    input.coupon_rate
                ));
            }
            if input.issue_price > input.face_value {
                warnings.push(
                    "Zero-coupon bond issued above face value implies a negative yield".into(),
                );
            }
            Decimal::ZERO
        }
        BondType::Coupon => {
            if input.coupon_rate.is_zero() {
                warnings.push(
                    "Coupon bond with zero coupon rate produces the same cash-flow shape \
                     as a zero-coupon bond"
                        .into(),
                );
            }
            input.face_value * input.coupon_rate / Decimal::from(input.payment_frequency)
        }
    };

    // --- Build schedule ---
    let periods = build_schedule(total_periods, periodic_coupon, input.face_value);

    let total_pre_tax_cash_flow = periods
        .iter()
        .map(|p| p.pre_tax_cash_flow)
        .sum::<Decimal>();

    let output = CashFlowScheduleOutput {
        total_periods,
        periodic_coupon,
        total_pre_tax_cash_flow,
        periods,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Bond Cash-Flow Schedule — contractual coupon and principal per period",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &CashFlowScheduleInput) -> ScheduleResult<()> {
    if input.maturity_years == 0 {
        return Err(ScheduleError::InvalidMaturity(input.maturity_years));
    }
    if input.payment_frequency == 0 {
        return Err(ScheduleError::InvalidFrequency(input.payment_frequency));
    }
    if input.face_value <= Decimal::ZERO {
        return Err(ScheduleError::InvalidFaceValue(input.face_value));
    }
    if input.issue_price < Decimal::ZERO {
        return Err(ScheduleError::InvalidIssuePrice(input.issue_price));
    }
    if input.coupon_rate < Decimal::ZERO {
        return Err(ScheduleError::InvalidCouponRate(input.coupon_rate));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Schedule construction
// ---------------------------------------------------------------------------

fn build_schedule(
    total_periods: u32,
    periodic_coupon: Money,
    face_value: Money,
) -> Vec<CashFlowPeriod> {
    let mut periods = Vec::with_capacity(total_periods as usize);

    for period in 1..=total_periods {
        let principal_payment = if period == total_periods {
            face_value
        } else {
            Decimal::ZERO
        };
        periods.push(CashFlowPeriod {
            period,
            coupon_payment: periodic_coupon,
            principal_payment,
            pre_tax_cash_flow: periodic_coupon + principal_payment,
        });
    }

    periods
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
