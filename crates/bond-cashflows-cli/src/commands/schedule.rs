use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use bond_cashflows_core::schedule::{self, CashFlowScheduleInput};
use bond_cashflows_core::BondType;

use crate::input;

/// Arguments for cash-flow schedule generation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ScheduleArgs {
    /// Bond type: 'ZeroCoupon' or 'Coupon'
    #[arg(long, alias = "type")]
    pub bond_type: Option<String>,

    /// Par / face value of the bond
    #[arg(long)]
    pub face_value: Option<Decimal>,

    /// Issue price paid by the purchaser
    #[arg(long)]
    pub issue_price: Option<Decimal>,

    /// Annual coupon rate as a decimal (e.g. 0.05 for 5%)
    #[arg(long, default_value = "0")]
    pub coupon_rate: Decimal,

    /// Years until maturity
    #[arg(long)]
    pub maturity_years: Option<u32>,

    /// Coupon payments per year (1 = annual, 2 = semi-annual, 4 = quarterly)
    #[arg(long, default_value = "1")]
    pub payment_frequency: u32,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: CashFlowScheduleInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(piped) = input::stdin::read_stdin()? {
        piped
    } else {
        let bond_type: BondType = args
            .bond_type
            .ok_or("--bond-type is required (or provide --input)")?
            .parse()?;
        CashFlowScheduleInput {
            bond_type,
            face_value: args
                .face_value
                .ok_or("--face-value is required (or provide --input)")?,
            issue_price: args.issue_price.unwrap_or(dec!(0)),
            coupon_rate: args.coupon_rate,
            maturity_years: args
                .maturity_years
                .ok_or("--maturity-years is required (or provide --input)")?,
            payment_frequency: args.payment_frequency,
        }
    };
    let result = schedule::generate_cash_flows(&schedule_input)?;
    Ok(serde_json::to_value(result)?)
}
