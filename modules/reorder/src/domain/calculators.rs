//! Arithmetic cores of the standalone pricing calculators.

use rust_decimal::Decimal;

/// One supplier quote in the unit-cost comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteOption {
    pub total_price: Decimal,
    pub shipping: Decimal,
    pub quantity: u32,
}

/// Landed cost per unit: `(total_price + shipping) / quantity`.
///
/// A zero quantity yields zero rather than an error; the form layer treats
/// an unfilled quantity field as "nothing to compute yet".
pub fn unit_cost(option: &QuoteOption) -> Decimal {
    if option.quantity == 0 {
        return Decimal::ZERO;
    }
    (option.total_price + option.shipping) / Decimal::from(option.quantity)
}

/// Index of the quote with the lowest per-unit cost. Zero-quantity quotes
/// are skipped; the earliest quote wins ties.
pub fn cheapest_per_unit(options: &[QuoteOption]) -> Option<usize> {
    let mut best: Option<(usize, Decimal)> = None;
    for (index, option) in options.iter().enumerate() {
        if option.quantity == 0 {
            continue;
        }
        let cost = unit_cost(option);
        match best {
            Some((_, best_cost)) if best_cost <= cost => {}
            _ => best = Some((index, cost)),
        }
    }
    best.map(|(index, _)| index)
}

/// Rough tax-deduction estimate for annual packaging spend, rounded to
/// cents. The marginal rate is clamped to `[0, 1]`.
pub fn estimated_deduction(annual_spend: Decimal, marginal_rate: Decimal) -> Decimal {
    let rate = marginal_rate.clamp(Decimal::ZERO, Decimal::ONE);
    (annual_spend * rate).round_dp(2)
}
