// ─────────────────────────────────────────────────────────────────────
// Carbon Ledger — Emissions Calculator
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Annual footprint calculation.
//!
//! Algorithm:
//! 1. Energy: annualized electricity scaled by the non-renewable share,
//!    plus annualized gas.
//! 2. Transportation: fleet miles plus business travel.
//! 3. Operations: headcount and floor area, then facility multipliers
//!    composed multiplicatively — data center first, manufacturing on
//!    the already-scaled value.
//! 4. Supply chain: suppliers and shipping, scaled by the packaging
//!    multiplier.
//! 5. Total = sum of the four unrounded categories; rounding to two
//!    decimals happens only at output. Offset cost = unrounded total ×
//!    the per-ton price, rounded last.

use carbon_types::constants::OFFSET_PRICE_PER_TON;
use carbon_types::footprint::{
    CalculationInput, CalculationResult, EmissionBreakdown, Packaging,
};

use crate::recommend;

/// Tons CO2e per kWh of grid electricity.
pub const ELECTRICITY_FACTOR: f64 = 0.0004;

/// Tons CO2e per therm of natural gas.
pub const GAS_FACTOR: f64 = 0.0053;

/// Tons CO2e per fleet-vehicle mile.
pub const VEHICLE_FACTOR: f64 = 0.00044;

/// Tons CO2e per business-travel mile.
pub const BUSINESS_TRAVEL_FACTOR: f64 = 0.00019;

/// Tons CO2e per employee per year.
pub const EMPLOYEE_FACTOR: f64 = 2.5;

/// Tons CO2e per sq ft of office space per year.
pub const OFFICE_SPACE_FACTOR: f64 = 0.02;

/// Tons CO2e per supplier per year.
pub const SUPPLIER_FACTOR: f64 = 15.0;

/// Tons CO2e per shipping mile.
pub const SHIPPING_FACTOR: f64 = 0.1;

/// Operations multiplier for businesses running a data center.
pub const DATA_CENTER_MULTIPLIER: f64 = 2.5;

/// Operations multiplier for businesses running manufacturing.
pub const MANUFACTURING_MULTIPLIER: f64 = 3.0;

/// Monthly activity inputs are annualized before the factors apply.
const MONTHS_PER_YEAR: f64 = 12.0;

/// Packaging multiplier on the supply-chain subtotal. Unrecognized
/// categories scale by 1.0; that fallback is a compatibility contract.
pub fn packaging_multiplier(packaging: Packaging) -> f64 {
    match packaging {
        Packaging::Recycled => 0.7,
        Packaging::Mixed => 1.0,
        Packaging::Conventional => 1.3,
        Packaging::Unspecified => 1.0,
    }
}

/// Unrounded category sums. Recommendation shares are evaluated against
/// these, never against the rounded output values.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawBreakdown {
    pub energy: f64,
    pub transportation: f64,
    pub operations: f64,
    pub supply_chain: f64,
}

impl RawBreakdown {
    pub fn total(&self) -> f64 {
        self.energy + self.transportation + self.operations + self.supply_chain
    }
}

pub(crate) fn raw_breakdown(input: &CalculationInput) -> RawBreakdown {
    let energy = &input.energy_data;
    let transport = &input.transportation_data;
    let operations = &input.operations_data;
    let supply = &input.supply_chain_data;

    // Renewable share offsets the electricity term only, not gas.
    let renewable_fraction = energy.renewable_percentage / 100.0;
    let energy_emissions = energy.electricity * MONTHS_PER_YEAR
        * ELECTRICITY_FACTOR
        * (1.0 - renewable_fraction)
        + energy.gas * MONTHS_PER_YEAR * GAS_FACTOR;

    let transportation_emissions = transport.fleet_vehicles * transport.average_miles
        * VEHICLE_FACTOR
        + transport.business_travel * BUSINESS_TRAVEL_FACTOR;

    let mut operations_emissions =
        operations.employees * EMPLOYEE_FACTOR + operations.office_space * OFFICE_SPACE_FACTOR;
    // Facility multipliers compose multiplicatively, data center first.
    if operations.data_center {
        operations_emissions *= DATA_CENTER_MULTIPLIER;
    }
    if operations.manufacturing {
        operations_emissions *= MANUFACTURING_MULTIPLIER;
    }

    let supply_emissions = (supply.suppliers * SUPPLIER_FACTOR
        + supply.shipping_distance * SHIPPING_FACTOR)
        * packaging_multiplier(supply.packaging);

    RawBreakdown {
        energy: energy_emissions,
        transportation: transportation_emissions,
        operations: operations_emissions,
        supply_chain: supply_emissions,
    }
}

/// Calculate the annual footprint for one set of activity inputs.
///
/// Total over all numeric input: never fails, never divides by zero.
/// Negative inputs are a caller error and propagate arithmetically.
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let raw = raw_breakdown(input);
    let total = raw.total();

    CalculationResult {
        total_emissions: round2(total),
        breakdown: EmissionBreakdown {
            energy: round2(raw.energy),
            transportation: round2(raw.transportation),
            operations: round2(raw.operations),
            supply_chain: round2(raw.supply_chain),
        },
        recommendations: recommend::recommendations(&raw, total, input),
        offset_cost_estimate: round2(total * OFFSET_PRICE_PER_TON),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
