//! # Abacus Finance
//!
//! HP-12C style financial functions for the Abacus calculator engine.
//!
//! This crate provides:
//!
//! - **Time value of money**: solve for FV, PV, PMT, N or the periodic rate
//! - **Cash flows**: net present value and internal rate of return
//! - **Amortization**: level-payment loan schedules
//! - **Depreciation**: straight-line, declining-balance and sum-of-years-digits
//! - **Bonds**: price of a semiannual-coupon bond
//! - **Percentages**: percent-of, percent change, percent of total, markup and margin
//! - **Statistics**: mean, sample standard deviation and linear regression
//!
//! ## Conventions
//!
//! Rates go in and come out as percentages (`5.0` means 5%). Cash paid out is
//! negative and cash received is positive, so a loan of 10 000 has `pv = 10000`
//! and a negative payment.
//!
//! ## Example
//!
//! ```rust
//! use abacus_finance::prelude::*;
//!
//! let pmt = payment(360.0, 0.5, 200_000.0, 0.0, PaymentTiming::End).unwrap();
//! assert!((pmt + 1199.10).abs() < 0.01);
//!
//! let rate = interest_rate(360.0, 200_000.0, pmt, 0.0, PaymentTiming::End).unwrap();
//! assert!((rate - 0.5).abs() < 1e-8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

pub mod amortization;
pub mod bond;
pub mod cashflows;
pub mod depreciation;
pub mod error;
pub mod format;
pub mod percent;
pub mod statistics;
pub mod tvm;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::amortization::{amortization_schedule, total_interest, AmortizationRow};
    pub use crate::bond::bond_price;
    pub use crate::cashflows::{irr, irr_with_config, npv};
    pub use crate::depreciation::{
        declining_balance, declining_balance_with_factor, straight_line, sum_of_years_digits,
    };
    pub use crate::error::{FinanceError, FinanceResult};
    pub use crate::format::{format_amount, format_percent};
    pub use crate::percent::{margin, markup, percent_change, percent_of, percent_total};
    pub use crate::statistics::{linear_regression, mean, std_dev, LinearFit};
    pub use crate::tvm::{
        future_value, interest_rate, interest_rate_with_config, number_of_periods, payment,
        present_value, PaymentTiming,
    };
    pub use abacus_math::solvers::SolverConfig;
}

pub use error::{FinanceError, FinanceResult};
