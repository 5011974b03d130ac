use rust_decimal::{Decimal, RoundingStrategy};

/// Centavo precision for Philippine peso amounts
pub const PESO_SCALE: u32 = 2;

const MAX_AMOUNT_PESOS: i64 = 1_000_000_000_000_000;

/// Largest salary or taxable income accepted as input (one quadrillion pesos).
///
/// Annualizing and summing whole rosters of such amounts stays well inside
/// `Decimal`'s range.
pub fn max_amount() -> Decimal {
    Decimal::from(MAX_AMOUNT_PESOS)
}

/// Rounds an amount to centavos (banker's rounding).
///
/// Calculation code keeps amounts unrounded; only call this at the
/// presentation boundary so aggregated totals stay exact.
pub fn round_centavos(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(PESO_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Formats an amount for display, e.g. `PHP 1,234.50`
pub fn format_peso(amount: Decimal) -> String {
    let rounded = round_centavos(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.width$}", rounded.abs(), width = PESO_SCALE as usize);
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("PHP {}{}.{}", sign, grouped, fraction)
}
