//! Rendering of session results

use parking_core::ParkingResult;
use parking_services::SessionReport;
use rust_decimal::{Decimal, RoundingStrategy};

const RULE_WIDTH: usize = 85;

/// Two-decimal dollar amount
pub fn money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// Fixed-width text table, one row per session
pub fn render_table(reports: &[SessionReport]) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str("Session Results:\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<8} {:<6} {:<10} {:<10} {:<15} {:<15} Amount\n",
        "Session", "Hours", "Hourly", "Flat", "Progressive", "Best Plan"
    ));
    out.push_str(&rule);
    out.push('\n');

    for r in reports {
        out.push_str(&format!(
            "{:<8} {:<6} {:<10} {:<10} {:<15} {:<15} {}\n",
            r.index,
            r.rounded_hours,
            money(r.hourly),
            money(r.flat),
            money(r.progressive),
            r.best.plan,
            money(r.best.amount)
        ));
    }

    out
}

/// Pretty-printed JSON array of reports
pub fn render_json(reports: &[SessionReport]) -> ParkingResult<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
