//! Shared shape of the rate/period based operators
//!
//! Every operator owns one `RateAndPeriods` and nothing else. The macro
//! below generates the struct, its constructors and accessors, value
//! equality and the `Name{rate=Rate[r], periods=n}` display form; each
//! formula module then only implements `MonetaryOperator`.

macro_rules! rate_and_periods_operator {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name {
            rate_and_periods: $crate::rate::RateAndPeriods,
        }

        impl $name {
            /// Creates the operator for the given rate and periods
            pub fn new(rate_and_periods: $crate::rate::RateAndPeriods) -> Self {
                Self { rate_and_periods }
            }

            /// Creates the operator, validating the period count
            pub fn of(
                rate: $crate::rate::Rate,
                periods: i64,
            ) -> ::std::result::Result<Self, $crate::error::CalcError> {
                $crate::rate::RateAndPeriods::new(rate, periods).map(Self::new)
            }

            pub fn rate_and_periods(&self) -> &$crate::rate::RateAndPeriods {
                &self.rate_and_periods
            }

            pub fn rate(&self) -> $crate::rate::Rate {
                self.rate_and_periods.rate()
            }

            pub fn periods(&self) -> u32 {
                self.rate_and_periods.periods()
            }
        }

        impl ::std::convert::From<$crate::rate::RateAndPeriods> for $name {
            fn from(rate_and_periods: $crate::rate::RateAndPeriods) -> Self {
                Self::new(rate_and_periods)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    "{}{{rate={}, periods={}}}",
                    stringify!($name),
                    self.rate(),
                    self.periods()
                )
            }
        }
    };
}

pub(crate) use rate_and_periods_operator;
