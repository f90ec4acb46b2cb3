//! Matched bet calculations.
//!
//! Derives the lay stake that offsets a placed back bet, the exchange
//! liability that stake creates, and the profit breakdown under either
//! settlement, across the four promotional scenarios.
//!
//! Everything here is a pure function of [`BetParameters`]: no I/O, no
//! logging, no shared state. Callers surface errors; the engine only
//! returns them.

use crate::types::{
    round_currency, BetParameters, BetScenario, CalcError, CalculationResult, OutcomeProfit,
};

// ---------------------------------------------------------------------------
// Public contract
// ---------------------------------------------------------------------------

/// Compute the offsetting lay position for a back bet.
///
/// Matching formula (qualifying case):
///   lay_stake = (back_odds × back_stake) / (lay_odds − lay_commission)
/// which sets the exchange recovery on a back loss against the exchange
/// liability on a back win so the net position is the same either way.
/// Promotional scenarios swap in their own numerator (see the scenario
/// dispatch below); liability is `lay_stake × (lay_odds − 1)` in every
/// case.
///
/// Validation happens before any formula is evaluated and every
/// derived figure is checked before the result is returned, so an
/// `Ok` never carries `NaN` or infinite values. Currency fields are
/// rounded to two decimal places at this boundary only.
pub fn compute(params: &BetParameters) -> Result<CalculationResult, CalcError> {
    validate(params)?;

    let lay_stake = required_lay_stake(params);
    let lay_liability = lay_stake * (params.lay_odds - 1.0);

    // Back side wins: bookmaker pays out, the lay liability is lost.
    let back_bookmaker = match params.scenario {
        // Stake not returned: only the net win pays.
        BetScenario::FreeBetStakeNotReturned { free_bet_value } => {
            free_bet_value * (params.back_odds - 1.0)
        }
        // Stake returned: the full payout is profit (the stake was free).
        BetScenario::FreeBetStakeReturned { free_bet_value } => free_bet_value * params.back_odds,
        BetScenario::Qualifying | BetScenario::MoneyBackIfBetLoses { .. } => {
            params.back_stake * (params.back_odds - 1.0)
        }
    };

    // Lay side wins: the back stake is lost (if it was cash), the
    // exchange pays the lay stake less commission.
    let lay_bookmaker = match params.scenario {
        BetScenario::Qualifying => -params.back_stake,
        // Promotional stake forfeited; nothing of ours was risked.
        BetScenario::FreeBetStakeNotReturned { .. } | BetScenario::FreeBetStakeReturned { .. } => {
            0.0
        }
        BetScenario::MoneyBackIfBetLoses { cashback_value, cashback_retention } => {
            -params.back_stake + cashback_value * cashback_retention
        }
    };
    let lay_exchange = lay_stake * (1.0 - params.lay_commission);

    let result = CalculationResult {
        required_lay_stake: round_currency(lay_stake),
        lay_liability: round_currency(lay_liability),
        back_side_wins: OutcomeProfit::from_raw(back_bookmaker, -lay_liability),
        lay_side_wins: OutcomeProfit::from_raw(lay_bookmaker, lay_exchange),
    };

    // Inputs are range-checked one at a time, so a large stake against
    // large odds can still overflow f64 in the products, or two orders
    // of magnitude earlier in the cent-rounding step. A non-finite
    // figure must not leave the engine inside an Ok.
    if !result_is_finite(&result) {
        return Err(CalcError::MissingScenarioField { field: staked_amount_field(params) });
    }

    Ok(result)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(params: &BetParameters) -> Result<(), CalcError> {
    if !(params.back_odds.is_finite() && params.back_odds > 1.0) {
        return Err(CalcError::InvalidOdds { field: "back_odds", value: params.back_odds });
    }
    // Lay odds of exactly 1.0 are well-formed decimal odds but leave no
    // room to hedge; they fall through to the degenerate-market check.
    if !(params.lay_odds.is_finite() && params.lay_odds >= 1.0) {
        return Err(CalcError::InvalidOdds { field: "lay_odds", value: params.lay_odds });
    }

    check_commission("back_commission", params.back_commission)?;
    check_commission("lay_commission", params.lay_commission)?;

    let effective = effective_lay_odds(params);
    if effective <= 1.0 {
        return Err(CalcError::DegenerateMarket { effective });
    }

    match params.scenario {
        BetScenario::Qualifying => check_amount("back_stake", params.back_stake)?,
        BetScenario::FreeBetStakeNotReturned { free_bet_value }
        | BetScenario::FreeBetStakeReturned { free_bet_value } => {
            // back_stake is ignored for free bets, so it is not checked.
            check_amount("free_bet_value", free_bet_value)?;
        }
        BetScenario::MoneyBackIfBetLoses { cashback_value, cashback_retention } => {
            check_amount("back_stake", params.back_stake)?;
            check_amount("cashback_value", cashback_value)?;
            if !(cashback_retention.is_finite() && (0.0..=1.0).contains(&cashback_retention)) {
                return Err(CalcError::MissingScenarioField { field: "cashback_retention" });
            }
        }
    }

    Ok(())
}

fn check_commission(field: &'static str, value: f64) -> Result<(), CalcError> {
    // NaN fails the range test, so non-finite values are rejected too.
    if !(0.0..1.0).contains(&value) {
        return Err(CalcError::InvalidCommission { field, value });
    }
    Ok(())
}

fn check_amount(field: &'static str, value: f64) -> Result<(), CalcError> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(CalcError::MissingScenarioField { field });
    }
    Ok(())
}

/// Scenario field blamed when the derived figures overflow.
fn staked_amount_field(params: &BetParameters) -> &'static str {
    match params.scenario {
        BetScenario::FreeBetStakeNotReturned { .. }
        | BetScenario::FreeBetStakeReturned { .. } => "free_bet_value",
        _ => "back_stake",
    }
}

fn result_is_finite(result: &CalculationResult) -> bool {
    [
        result.required_lay_stake,
        result.lay_liability,
        result.back_side_wins.bookmaker_pl,
        result.back_side_wins.exchange_pl,
        result.back_side_wins.total,
        result.lay_side_wins.bookmaker_pl,
        result.lay_side_wins.exchange_pl,
        result.lay_side_wins.total,
    ]
    .iter()
    .all(|v| v.is_finite())
}

/// Exchange odds after commission, in the form the scenario's stake
/// denominator uses. At or below 1.0 the lay position cannot offset
/// anything: hedging is structurally impossible.
fn effective_lay_odds(params: &BetParameters) -> f64 {
    match params.scenario {
        BetScenario::MoneyBackIfBetLoses { .. } => {
            params.lay_odds * (1.0 - params.lay_commission)
        }
        _ => params.lay_odds - params.lay_commission,
    }
}

// ---------------------------------------------------------------------------
// Scenario dispatch
// ---------------------------------------------------------------------------

/// Stake to place at the exchange. Denominators are strictly above 1.0
/// once validation has passed.
fn required_lay_stake(params: &BetParameters) -> f64 {
    let denom = params.lay_odds - params.lay_commission;
    match params.scenario {
        BetScenario::Qualifying => (params.back_odds * params.back_stake) / denom,
        BetScenario::FreeBetStakeNotReturned { free_bet_value } => {
            ((params.back_odds - 1.0) / denom) * free_bet_value
        }
        BetScenario::FreeBetStakeReturned { free_bet_value } => {
            (params.back_odds * free_bet_value) / denom
        }
        BetScenario::MoneyBackIfBetLoses { .. } => {
            (params.back_stake * (params.back_odds - 1.0))
                / (params.lay_odds * (1.0 - params.lay_commission))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn make_qualifying(back_stake: f64, back_odds: f64, lay_odds: f64, lay_commission: f64) -> BetParameters {
        BetParameters {
            back_stake,
            back_odds,
            back_commission: 0.0,
            lay_odds,
            lay_commission,
            scenario: BetScenario::Qualifying,
        }
    }

    fn make_snr(free_bet_value: f64, back_odds: f64, lay_odds: f64, lay_commission: f64) -> BetParameters {
        BetParameters {
            back_stake: 0.0,
            back_odds,
            back_commission: 0.0,
            lay_odds,
            lay_commission,
            scenario: BetScenario::FreeBetStakeNotReturned { free_bet_value },
        }
    }

    fn make_sr(free_bet_value: f64, back_odds: f64, lay_odds: f64, lay_commission: f64) -> BetParameters {
        BetParameters {
            back_stake: 0.0,
            back_odds,
            back_commission: 0.0,
            lay_odds,
            lay_commission,
            scenario: BetScenario::FreeBetStakeReturned { free_bet_value },
        }
    }

    fn make_mbibl(
        back_stake: f64,
        back_odds: f64,
        lay_odds: f64,
        lay_commission: f64,
        cashback_value: f64,
        cashback_retention: f64,
    ) -> BetParameters {
        BetParameters {
            back_stake,
            back_odds,
            back_commission: 0.0,
            lay_odds,
            lay_commission,
            scenario: BetScenario::MoneyBackIfBetLoses { cashback_value, cashback_retention },
        }
    }

    // -- Worked scenarios --

    #[test]
    fn test_qualifying_worked_example() {
        // £100 back at 2.5, laid at 2.4 with 2% commission.
        let result = compute(&make_qualifying(100.0, 2.5, 2.4, 0.02)).unwrap();

        assert_eq!(result.required_lay_stake, 105.04);
        assert_eq!(result.lay_liability, 147.06);

        assert_eq!(result.back_side_wins.bookmaker_pl, 150.0);
        assert_eq!(result.back_side_wins.exchange_pl, -147.06);
        assert_eq!(result.back_side_wins.total, 2.94);

        assert_eq!(result.lay_side_wins.bookmaker_pl, -100.0);
        assert_eq!(result.lay_side_wins.exchange_pl, 102.94);
        assert_eq!(result.lay_side_wins.total, 2.94);
    }

    #[test]
    fn test_snr_worked_example() {
        // £20 SNR free bet at 3.0, laid at 2.9 commission-free. The
        // extracted value is locked in on both sides.
        let result = compute(&make_snr(20.0, 3.0, 2.9, 0.0)).unwrap();

        assert_eq!(result.required_lay_stake, 13.79);
        assert_eq!(result.lay_liability, 26.21);

        assert_eq!(result.back_side_wins.bookmaker_pl, 40.0);
        assert_eq!(result.back_side_wins.total, 13.79);

        assert_eq!(result.lay_side_wins.bookmaker_pl, 0.0);
        assert_eq!(result.lay_side_wins.total, 13.79);
    }

    #[test]
    fn test_sr_worked_example() {
        // Same market, stake returned: full payout on a back win, so a
        // larger lay is needed and more value extracted.
        let result = compute(&make_sr(20.0, 3.0, 2.9, 0.0)).unwrap();

        assert_eq!(result.required_lay_stake, 20.69);
        assert_eq!(result.lay_liability, 39.31);

        assert_eq!(result.back_side_wins.bookmaker_pl, 60.0);
        assert_eq!(result.back_side_wins.total, 20.69);
        assert_eq!(result.lay_side_wins.total, 20.69);
    }

    #[test]
    fn test_mbibl_worked_example() {
        // £50 back at 2.0 with £50 cashback on a loss, retained at 70%.
        // Under-laying leaves the cashback as upside on either outcome.
        let result = compute(&make_mbibl(50.0, 2.0, 1.95, 0.02, 50.0, 0.7)).unwrap();

        assert_eq!(result.required_lay_stake, 26.16);
        assert_eq!(result.lay_liability, 24.86);

        assert_eq!(result.back_side_wins.bookmaker_pl, 50.0);
        assert_eq!(result.back_side_wins.total, 25.14);

        // Lost stake partly recovered: -50 + 50 × 0.7 = -15.
        assert_eq!(result.lay_side_wins.bookmaker_pl, -15.0);
        assert_eq!(result.lay_side_wins.exchange_pl, 25.64);
        assert_eq!(result.lay_side_wins.total, 10.64);
    }

    // -- Matching invariant --

    #[test]
    fn test_matching_invariant_zero_commission() {
        // With no commission the two outcomes net out identically for
        // a qualifying bet. The defining property of the lay formula.
        for &back_stake in &[5.0, 25.0, 100.0, 333.33] {
            for &back_odds in &[1.5, 2.0, 3.0, 7.5] {
                for &lay_odds in &[1.5, 2.1, 3.0, 8.0] {
                    let result =
                        compute(&make_qualifying(back_stake, back_odds, lay_odds, 0.0)).unwrap();
                    assert!(
                        (result.back_side_wins.total - result.lay_side_wins.total).abs() < 1e-9,
                        "mismatch at stake={back_stake} back={back_odds} lay={lay_odds}: {} vs {}",
                        result.back_side_wins.total,
                        result.lay_side_wins.total,
                    );
                }
            }
        }
    }

    #[test]
    fn test_matching_holds_with_commission() {
        // The equalization survives commission for cash and free bets;
        // commission shrinks the locked-in amount, it does not skew it.
        let cases = [
            make_qualifying(80.0, 2.2, 2.3, 0.05),
            make_snr(25.0, 4.0, 4.2, 0.02),
            make_sr(25.0, 4.0, 4.2, 0.02),
        ];
        for params in &cases {
            let result = compute(params).unwrap();
            assert!(
                (result.back_side_wins.total - result.lay_side_wins.total).abs() < 1e-9,
                "mismatch for {params}",
            );
        }
    }

    // -- Monotonicity --

    #[test]
    fn test_lay_commission_monotonicity() {
        // Higher commission means more stake is needed and less comes
        // back: lay total strictly falls, stake strictly rises. The
        // bookmaker legs never carry a commission term.
        let commissions = [0.0, 0.02, 0.05, 0.10];
        let mut last_stake = f64::NEG_INFINITY;
        let mut last_lay_total = f64::INFINITY;

        for &c in &commissions {
            let result = compute(&make_qualifying(50.0, 2.0, 2.2, c)).unwrap();
            assert!(result.required_lay_stake > last_stake);
            assert!(result.lay_side_wins.total < last_lay_total);
            assert_eq!(result.back_side_wins.bookmaker_pl, 50.0);
            assert_eq!(result.lay_side_wins.bookmaker_pl, -50.0);
            last_stake = result.required_lay_stake;
            last_lay_total = result.lay_side_wins.total;
        }
    }

    // -- Scale invariance --

    #[test]
    fn test_scale_invariance_qualifying() {
        let base = compute(&make_qualifying(10.0, 2.0, 2.5, 0.0)).unwrap();
        let scaled = compute(&make_qualifying(30.0, 2.0, 2.5, 0.0)).unwrap();

        assert_eq!(scaled.required_lay_stake, base.required_lay_stake * 3.0);
        assert_eq!(scaled.lay_liability, base.lay_liability * 3.0);
        assert_eq!(scaled.back_side_wins.total, base.back_side_wins.total * 3.0);
        assert_eq!(scaled.lay_side_wins.total, base.lay_side_wins.total * 3.0);
    }

    #[test]
    fn test_scale_invariance_free_bet() {
        let base = compute(&make_snr(10.0, 3.0, 2.0, 0.0)).unwrap();
        let scaled = compute(&make_snr(50.0, 3.0, 2.0, 0.0)).unwrap();

        assert_eq!(scaled.required_lay_stake, base.required_lay_stake * 5.0);
        assert_eq!(scaled.lay_liability, base.lay_liability * 5.0);
        assert_eq!(scaled.back_side_wins.total, base.back_side_wins.total * 5.0);
        assert_eq!(scaled.lay_side_wins.total, base.lay_side_wins.total * 5.0);
    }

    #[test]
    fn test_scale_invariance_mbibl_scales_cashback() {
        // For cashback bets the offer scales with the stake.
        let base = compute(&make_mbibl(10.0, 2.0, 2.0, 0.0, 10.0, 0.5)).unwrap();
        let scaled = compute(&make_mbibl(20.0, 2.0, 2.0, 0.0, 20.0, 0.5)).unwrap();

        assert_eq!(scaled.required_lay_stake, base.required_lay_stake * 2.0);
        assert_eq!(scaled.lay_liability, base.lay_liability * 2.0);
        assert_eq!(scaled.back_side_wins.total, base.back_side_wins.total * 2.0);
        assert_eq!(scaled.lay_side_wins.total, base.lay_side_wins.total * 2.0);
    }

    // -- Liability and output sanity --

    #[test]
    fn test_liability_never_negative() {
        let cases = [
            make_qualifying(0.0, 2.0, 2.1, 0.02),
            make_qualifying(100.0, 1.01, 10.0, 0.0),
            make_snr(50.0, 10.0, 12.0, 0.05),
            make_sr(50.0, 10.0, 12.0, 0.05),
            make_mbibl(25.0, 3.0, 3.1, 0.02, 25.0, 1.0),
        ];
        for params in &cases {
            let result = compute(params).unwrap();
            assert!(result.lay_liability >= 0.0, "negative liability for {params}");
            assert!(result.required_lay_stake.is_finite());
            assert!(result.back_side_wins.total.is_finite());
            assert!(result.lay_side_wins.total.is_finite());
        }
    }

    #[test]
    fn test_zero_stake_is_all_zeros() {
        let result = compute(&make_qualifying(0.0, 2.0, 2.1, 0.02)).unwrap();
        assert_eq!(result.required_lay_stake, 0.0);
        assert_eq!(result.lay_liability, 0.0);
        assert_eq!(result.back_side_wins.total, 0.0);
        assert_eq!(result.lay_side_wins.total, 0.0);
        // Rounding must not leave a negative zero behind.
        assert!(result.lay_side_wins.bookmaker_pl.is_sign_positive());
    }

    #[test]
    fn test_snr_ignores_back_stake() {
        let with_garbage = BetParameters {
            back_stake: -999.0,
            ..make_snr(20.0, 3.0, 2.9, 0.0)
        };
        assert_eq!(compute(&with_garbage).unwrap(), compute(&make_snr(20.0, 3.0, 2.9, 0.0)).unwrap());
    }

    #[test]
    fn test_ok_results_never_carry_infinity() {
        // Magnitudes straddling the representable edge: each case must
        // either be refused or come back fully finite.
        let stakes = [25.0, 1e100, 1e305, 1e308];
        let odds = [(2.5, 2.4), (1.01, 1.05), (1000.0, 990.0)];
        let (mut accepted, mut rejected) = (0, 0);

        for &back_stake in &stakes {
            for &(back_odds, lay_odds) in &odds {
                match compute(&make_qualifying(back_stake, back_odds, lay_odds, 0.02)) {
                    Ok(result) => {
                        accepted += 1;
                        assert!(result.required_lay_stake.is_finite());
                        assert!(result.lay_liability.is_finite());
                        assert!(result.back_side_wins.bookmaker_pl.is_finite());
                        assert!(result.back_side_wins.exchange_pl.is_finite());
                        assert!(result.back_side_wins.total.is_finite());
                        assert!(result.lay_side_wins.bookmaker_pl.is_finite());
                        assert!(result.lay_side_wins.exchange_pl.is_finite());
                        assert!(result.lay_side_wins.total.is_finite());
                    }
                    Err(err) => {
                        rejected += 1;
                        assert_eq!(err, CalcError::MissingScenarioField { field: "back_stake" });
                    }
                }
            }
        }
        assert!(accepted > 0 && rejected > 0);
    }

    // -- Rejection --

    #[test]
    fn test_rejects_back_odds_at_one() {
        let err = compute(&make_qualifying(50.0, 1.0, 2.0, 0.0)).unwrap_err();
        assert_eq!(err, CalcError::InvalidOdds { field: "back_odds", value: 1.0 });
    }

    #[test]
    fn test_rejects_non_finite_odds() {
        let err = compute(&make_qualifying(50.0, f64::NAN, 2.0, 0.0)).unwrap_err();
        assert_eq!(err.kind(), "invalid_odds");

        let err = compute(&make_qualifying(50.0, 2.0, f64::INFINITY, 0.0)).unwrap_err();
        assert_eq!(err.kind(), "invalid_odds");
    }

    #[test]
    fn test_rejects_lay_odds_below_one() {
        let err = compute(&make_qualifying(50.0, 2.0, 0.8, 0.0)).unwrap_err();
        assert_eq!(err, CalcError::InvalidOdds { field: "lay_odds", value: 0.8 });
    }

    #[test]
    fn test_rejects_commission_of_one() {
        let err = compute(&make_qualifying(50.0, 2.0, 2.1, 1.0)).unwrap_err();
        assert_eq!(err, CalcError::InvalidCommission { field: "lay_commission", value: 1.0 });
    }

    #[test]
    fn test_rejects_negative_and_oversized_commission() {
        let err = compute(&make_qualifying(50.0, 2.0, 2.1, -0.01)).unwrap_err();
        assert_eq!(err.kind(), "invalid_commission");

        let mut params = make_qualifying(50.0, 2.0, 2.1, 0.02);
        params.back_commission = 1.2;
        let err = compute(&params).unwrap_err();
        assert_eq!(err, CalcError::InvalidCommission { field: "back_commission", value: 1.2 });
    }

    #[test]
    fn test_lay_odds_of_one_is_degenerate_for_every_scenario() {
        let cases = [
            make_qualifying(50.0, 2.0, 1.0, 0.02),
            make_snr(20.0, 3.0, 1.0, 0.02),
            make_sr(20.0, 3.0, 1.0, 0.02),
            make_mbibl(50.0, 2.0, 1.0, 0.02, 50.0, 0.7),
        ];
        for params in &cases {
            let err = compute(params).unwrap_err();
            assert_eq!(err.kind(), "degenerate_market", "expected degenerate for {params}");
        }
    }

    #[test]
    fn test_degenerate_market_reports_effective_odds() {
        // Odds barely above 1.0 collapse once commission is applied.
        let err = compute(&make_qualifying(50.0, 2.0, 1.01, 0.05)).unwrap_err();
        match err {
            CalcError::DegenerateMarket { effective } => {
                assert!((effective - 0.96).abs() < 1e-9);
            }
            other => panic!("expected DegenerateMarket, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_negative_scenario_amounts() {
        let err = compute(&make_snr(-1.0, 3.0, 2.9, 0.0)).unwrap_err();
        assert_eq!(err, CalcError::MissingScenarioField { field: "free_bet_value" });

        let err = compute(&make_mbibl(50.0, 2.0, 1.95, 0.0, -5.0, 0.7)).unwrap_err();
        assert_eq!(err, CalcError::MissingScenarioField { field: "cashback_value" });

        let err = compute(&make_qualifying(-10.0, 2.0, 2.1, 0.0)).unwrap_err();
        assert_eq!(err, CalcError::MissingScenarioField { field: "back_stake" });
    }

    #[test]
    fn test_rejects_retention_out_of_range() {
        let err = compute(&make_mbibl(50.0, 2.0, 1.95, 0.0, 50.0, 1.5)).unwrap_err();
        assert_eq!(err, CalcError::MissingScenarioField { field: "cashback_retention" });

        let err = compute(&make_mbibl(50.0, 2.0, 1.95, 0.0, 50.0, -0.1)).unwrap_err();
        assert_eq!(err, CalcError::MissingScenarioField { field: "cashback_retention" });

        // Full retention (a straight cash refund) is fine.
        assert!(compute(&make_mbibl(50.0, 2.0, 1.95, 0.0, 50.0, 1.0)).is_ok());
    }

    #[test]
    fn test_rejects_amounts_that_overflow() {
        // Every field is individually valid here; the products are not
        // representable. The bet must be refused, not returned with
        // infinite legs.
        let err = compute(&make_qualifying(1e308, 2.5, 2.4, 0.02)).unwrap_err();
        assert_eq!(err, CalcError::MissingScenarioField { field: "back_stake" });

        let err = compute(&make_snr(1e308, 3.0, 2.9, 0.0)).unwrap_err();
        assert_eq!(err, CalcError::MissingScenarioField { field: "free_bet_value" });

        let err = compute(&make_sr(1e308, 3.0, 2.9, 0.0)).unwrap_err();
        assert_eq!(err, CalcError::MissingScenarioField { field: "free_bet_value" });

        let err = compute(&make_mbibl(1e308, 3.0, 2.9, 0.02, 50.0, 0.7)).unwrap_err();
        assert_eq!(err, CalcError::MissingScenarioField { field: "back_stake" });
    }

    #[test]
    fn test_validation_precedes_formulas() {
        // Several fields invalid at once: odds are reported first, so
        // callers can fix inputs in a stable order.
        let mut params = make_qualifying(-10.0, 1.0, 0.5, 2.0);
        params.back_commission = -1.0;
        let err = compute(&params).unwrap_err();
        assert_eq!(err, CalcError::InvalidOdds { field: "back_odds", value: 1.0 });
    }
}
