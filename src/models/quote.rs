use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("fee must not be negative")]
    NegativeFee,
    #[error("exchange rate must be positive")]
    NonPositiveRate,
    #[error("amount {amount} does not cover the fee {fee}")]
    FeeExceedsAmount { amount: Decimal, fee: Decimal },
    #[error("amount is too large to convert")]
    Overflow,
}

/// Display-only conversion of a send amount into the receive side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferQuote {
    pub amount: Decimal,
    pub fee: Decimal,
    pub rate: Decimal,
    /// Exact `(amount - fee) * rate`, unrounded.
    pub receive_amount: Decimal,
}

impl TransferQuote {
    /// Receive amount rounded to `minor_units` decimal places, midpoint away from zero.
    pub fn receive_rounded(&self, minor_units: u32) -> Decimal {
        self.receive_amount
            .round_dp_with_strategy(minor_units, RoundingStrategy::MidpointAwayFromZero)
    }
}

pub fn quote(amount: Decimal, rate: Decimal, fee: Decimal) -> Result<TransferQuote, QuoteError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(QuoteError::NegativeAmount);
    }
    if fee.is_sign_negative() && !fee.is_zero() {
        return Err(QuoteError::NegativeFee);
    }
    if rate <= Decimal::ZERO {
        return Err(QuoteError::NonPositiveRate);
    }
    if amount < fee {
        return Err(QuoteError::FeeExceedsAmount { amount, fee });
    }

    let receive_amount = amount
        .checked_sub(fee)
        .and_then(|net| net.checked_mul(rate))
        .ok_or(QuoteError::Overflow)?;

    Ok(TransferQuote { amount, fee, rate, receive_amount })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn usd_to_inr_example() {
        let q = quote(dec!(1000), dec!(83.5), dec!(5)).unwrap();
        assert_eq!(q.receive_amount, dec!(83057.5));
        assert_eq!(q.receive_rounded(2), dec!(83057.50));
    }

    #[test]
    fn fee_equal_to_amount_gives_zero() {
        let q = quote(dec!(3.99), dec!(83.5), dec!(3.99)).unwrap();
        assert!(q.receive_amount.is_zero());
    }

    #[test]
    fn fee_above_amount_is_rejected() {
        let err = quote(dec!(2), dec!(83.5), dec!(3.99)).unwrap_err();
        assert_eq!(err, QuoteError::FeeExceedsAmount { amount: dec!(2), fee: dec!(3.99) });
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert_eq!(quote(dec!(-1), dec!(1), dec!(0)), Err(QuoteError::NegativeAmount));
        assert_eq!(quote(dec!(10), dec!(1), dec!(-1)), Err(QuoteError::NegativeFee));
        assert_eq!(quote(dec!(10), dec!(0), dec!(1)), Err(QuoteError::NonPositiveRate));
        assert_eq!(quote(dec!(10), dec!(-2), dec!(1)), Err(QuoteError::NonPositiveRate));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(quote(Decimal::MAX, dec!(2), dec!(0)), Err(QuoteError::Overflow));
    }

    #[test]
    fn rounding_is_midpoint_away_from_zero() {
        let q = quote(dec!(1), dec!(0.125), dec!(0)).unwrap();
        assert_eq!(q.receive_rounded(2), dec!(0.13));
        assert_eq!(q.receive_rounded(0), dec!(0));
    }

    fn money() -> impl Strategy<Value = Decimal> {
        (0i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
    }

    fn rate() -> impl Strategy<Value = Decimal> {
        (1i64..100_000_000).prop_map(|r| Decimal::new(r, 4))
    }

    proptest! {
        #[test]
        fn prop_matches_formula_and_is_non_negative(a in money(), f in money(), r in rate()) {
            let (amount, fee) = if a >= f { (a, f) } else { (f, a) };
            let q = quote(amount, r, fee).unwrap();
            prop_assert_eq!(q.receive_amount, (amount - fee) * r);
            prop_assert!(q.receive_amount >= Decimal::ZERO);
        }

        #[test]
        fn prop_is_deterministic(a in money(), f in money(), r in rate()) {
            prop_assert_eq!(quote(a, r, f), quote(a, r, f));
        }

        #[test]
        fn prop_rounding_stays_within_half_unit(a in money(), r in rate()) {
            let q = quote(a, r, Decimal::ZERO).unwrap();
            let diff = (q.receive_rounded(2) - q.receive_amount).abs();
            prop_assert!(diff <= dec!(0.005));
        }
    }
}
