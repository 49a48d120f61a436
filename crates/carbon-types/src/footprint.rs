// ─────────────────────────────────────────────────────────────────────
// Carbon Ledger — Footprint Types
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Input and output records for the emissions calculator.
//!
//! Every input field is optional on the wire: missing numerics default
//! to zero, missing flags to false, missing packaging to `Mixed`. The
//! calculator itself is total over any combination of these values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Monthly energy consumption.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnergyUse {
    /// Grid electricity (kWh per month).
    pub electricity: f64,
    /// Natural gas (therms per month).
    pub gas: f64,
    /// Share of electricity under renewable contracts (0-100).
    pub renewable_percentage: f64,
}

/// Monthly fleet and travel activity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransportUse {
    /// Vehicles in the company fleet.
    pub fleet_vehicles: f64,
    /// Average miles per fleet vehicle per month.
    pub average_miles: f64,
    /// Business travel (miles per month).
    pub business_travel: f64,
}

/// Facility and headcount profile.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperationsProfile {
    pub employees: f64,
    /// Office floor area (sq ft).
    pub office_space: f64,
    pub data_center: bool,
    pub manufacturing: bool,
}

/// Supplier network and shipping activity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SupplyChainProfile {
    pub suppliers: f64,
    /// Shipping distance (miles per month).
    pub shipping_distance: f64,
    pub packaging: Packaging,
}

/// Declared packaging material category.
///
/// Unknown categories deserialize to `Unspecified` and scale the
/// supply-chain subtotal by 1.0, same as `Mixed`. This fallback is a
/// compatibility contract, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Packaging {
    Recycled,
    #[default]
    Mixed,
    Conventional,
    #[serde(other)]
    Unspecified,
}

/// Raw activity data for one footprint calculation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationInput {
    pub energy_data: EnergyUse,
    pub transportation_data: TransportUse,
    pub operations_data: OperationsProfile,
    pub supply_chain_data: SupplyChainProfile,
}

/// Annual emissions by category (tons CO2e), rounded to 2 decimals.
/// Each category is independently non-negative for non-negative input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub energy: f64,
    pub transportation: f64,
    pub operations: f64,
    pub supply_chain: f64,
}

/// Calculator output: total, per-category breakdown, advisory
/// recommendations, and an offset cost estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_emissions: f64,
    pub breakdown: EmissionBreakdown,
    pub recommendations: Vec<String>,
    pub offset_cost_estimate: f64,
}

/// Persisted footprint document. Append-only: one calculator invocation
/// produces one record, never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintRecord {
    pub id: Uuid,
    pub business_id: Uuid,
    pub calculation_date: DateTime<Utc>,
    #[serde(flatten)]
    pub input: CalculationInput,
    pub total_emissions: f64,
    pub breakdown: EmissionBreakdown,
}

impl FootprintRecord {
    pub fn new(business_id: Uuid, input: CalculationInput, result: &CalculationResult) -> Self {
        FootprintRecord {
            id: Uuid::new_v4(),
            business_id,
            calculation_date: Utc::now(),
            input,
            total_emissions: result.total_emissions,
            breakdown: result.breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let input: CalculationInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.energy_data.electricity, 0.0);
        assert_eq!(input.operations_data.employees, 0.0);
        assert!(!input.operations_data.data_center);
        assert_eq!(input.supply_chain_data.packaging, Packaging::Mixed);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let input: CalculationInput = serde_json::from_str(
            r#"{
                "energy_data": {"electricity": 1000, "renewablePercentage": 40},
                "transportation_data": {"fleetVehicles": 3, "averageMiles": 500},
                "operations_data": {"officeSpace": 2500, "dataCenter": true},
                "supply_chain_data": {"shippingDistance": 120, "packaging": "recycled"}
            }"#,
        )
        .unwrap();
        assert_eq!(input.energy_data.renewable_percentage, 40.0);
        assert_eq!(input.transportation_data.fleet_vehicles, 3.0);
        assert!(input.operations_data.data_center);
        assert_eq!(input.supply_chain_data.packaging, Packaging::Recycled);
    }

    #[test]
    fn test_unknown_packaging_falls_back() {
        let profile: SupplyChainProfile =
            serde_json::from_str(r#"{"packaging": "compostable-ish"}"#).unwrap();
        assert_eq!(profile.packaging, Packaging::Unspecified);
    }
}
