//! Rate and Period Based Financial Formulas
//!
//! This crate implements the time-value-of-money formulas used to discount,
//! compound and value annuities. Every formula is driven by a
//! [`RateAndPeriods`] pair and is available both as a free function and as a
//! small operator type implementing [`core_kernel::MonetaryOperator`].
//!
//! # Formulas
//!
//! | Operator | Result |
//! |---|---|
//! | `present_value_factor` | `(1 + r)^n` |
//! | `PresentValue` | `A / (1 + r)^n` |
//! | `FutureValue` | `A * (1 + r)^n` |
//! | `present_value_of_annuity_payment_factor` | `(1 - (1 + r)^-n) / r` |
//! | `PresentValueOfAnnuity` | `A * PVA` |
//! | `PresentValueOfAnnuityDue` | `A * PVA * (1 + r)` |
//! | `FutureValueOfAnnuity` | `A * ((1 + r)^n - 1) / r` |
//! | `ContinuousCompoundInterest` | `A * e^(r n)` |
//! | `PresentValueContinuousCompounding` | `A * e^-(r n)` |
//! | `BasisPoint` | `A * bp / 10000` |
//!
//! # Precision
//!
//! Intermediate results are rounded to 16 significant digits, half to even
//! (see [`CalculationContext`]). Only the continuous compounding formulas use
//! binary floating point, for the exponential.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Currency, Money};
//! use domain_calc::{FutureValueOfAnnuity, Rate};
//! use rust_decimal_macros::dec;
//!
//! let fva = FutureValueOfAnnuity::of(Rate::new(dec!(0.05)), 2).unwrap();
//! let value = Money::new(dec!(1), Currency::CHF).with(&fva).unwrap();
//! assert_eq!(value.amount(), dec!(2.05));
//! ```

mod operator;

pub mod basis_point;
pub mod context;
pub mod continuous_compound_interest;
pub mod error;
pub mod future_value;
pub mod future_value_of_annuity;
pub mod present_value;
pub mod present_value_continuous_compounding;
pub mod present_value_factor;
pub mod present_value_of_annuity;
pub mod present_value_of_annuity_due;
pub mod present_value_of_annuity_payment_factor;
pub mod rate;

pub use basis_point::BasisPoint;
pub use context::CalculationContext;
pub use continuous_compound_interest::ContinuousCompoundInterest;
pub use error::CalcError;
pub use future_value::FutureValue;
pub use future_value_of_annuity::FutureValueOfAnnuity;
pub use present_value::PresentValue;
pub use present_value_continuous_compounding::PresentValueContinuousCompounding;
pub use present_value_of_annuity::PresentValueOfAnnuity;
pub use present_value_of_annuity_due::PresentValueOfAnnuityDue;
pub use rate::{Rate, RateAndPeriods};
