// ─────────────────────────────────────────────────────────────────────
// Carbon Ledger — Recommendations
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Advisory recommendation rules.
//!
//! Each category share is compared against its threshold with strict
//! `>`, using the unrounded category sums over the unrounded total. A
//! zero total means all shares are zero; only the two closing lines are
//! emitted. All matching rules fire, in fixed order.

use carbon_types::footprint::CalculationInput;

use crate::calculator::RawBreakdown;

/// Energy share above which the energy rules fire.
const ENERGY_SHARE_THRESHOLD: f64 = 0.30;

/// Transportation share above which the fleet/travel rules fire.
const TRANSPORT_SHARE_THRESHOLD: f64 = 0.30;

/// Operations share above which the facilities rules fire.
const OPERATIONS_SHARE_THRESHOLD: f64 = 0.25;

/// Supply-chain share above which the supplier/packaging rules fire.
const SUPPLY_CHAIN_SHARE_THRESHOLD: f64 = 0.20;

/// Renewable percentage at or above which the switch-to-renewables line
/// is dropped from the energy rule.
const RENEWABLE_TARGET_PCT: f64 = 50.0;

pub(crate) fn recommendations(
    raw: &RawBreakdown,
    total: f64,
    input: &CalculationInput,
) -> Vec<String> {
    let mut out = Vec::new();
    let share = |category: f64| if total > 0.0 { category / total } else { 0.0 };

    if share(raw.energy) > ENERGY_SHARE_THRESHOLD {
        if input.energy_data.renewable_percentage < RENEWABLE_TARGET_PCT {
            out.push("Consider switching to renewable energy sources".to_string());
        }
        out.push("Implement energy efficiency measures in your facilities".to_string());
    }

    if share(raw.transportation) > TRANSPORT_SHARE_THRESHOLD {
        out.push("Consider electric or hybrid vehicles for your fleet".to_string());
        out.push("Implement remote work policies to reduce business travel".to_string());
    }

    if share(raw.operations) > OPERATIONS_SHARE_THRESHOLD {
        out.push("Optimize office space usage and implement green building practices".to_string());
        if input.operations_data.data_center {
            out.push("Consider cloud migration to reduce data center emissions".to_string());
        }
    }

    if share(raw.supply_chain) > SUPPLY_CHAIN_SHARE_THRESHOLD {
        out.push("Work with local suppliers to reduce shipping distances".to_string());
        out.push("Switch to sustainable packaging materials".to_string());
    }

    out.push("Purchase verified carbon credits to offset remaining emissions".to_string());
    out.push("Set science-based targets for emission reduction".to_string());

    out
}
