// ─────────────────────────────────────────────────────────────────────
// Carbon Ledger — Demo Catalog
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Demo marketplace catalog: five verified offset projects and eight
//! eco products.

use std::collections::HashMap;

use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use carbon_types::models::{EcoProduct, OffsetProject};

use crate::store::MemoryStore;

/// Load the demo projects and products into a store.
pub fn load_demo_catalog(store: &mut MemoryStore) {
    for project in demo_projects() {
        store.insert_project(project);
    }
    for product in demo_products() {
        store.insert_product(product);
    }
}

fn metrics(entries: &[(&str, Value)]) -> HashMap<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn project(
    name: &str,
    project_type: &str,
    location: &str,
    price_per_credit: f64,
    available_credits: u32,
    description: &str,
    impact: HashMap<String, Value>,
) -> OffsetProject {
    OffsetProject {
        id: Uuid::new_v4(),
        name: name.to_string(),
        project_type: project_type.to_string(),
        location: location.to_string(),
        price_per_credit,
        available_credits,
        description: description.to_string(),
        verified: true,
        impact_metrics: impact,
        created_at: Utc::now(),
    }
}

pub fn demo_projects() -> Vec<OffsetProject> {
    vec![
        project(
            "Amazon Rainforest Conservation",
            "Forest Protection",
            "Brazil",
            25.0,
            50_000,
            "Protecting 100,000 hectares of Amazon rainforest from deforestation",
            metrics(&[
                ("trees_protected", json!(2_500_000)),
                ("biodiversity_species", json!(1_200)),
                ("communities_supported", json!(45)),
            ]),
        ),
        project(
            "Wind Farm Development",
            "Renewable Energy",
            "Texas, USA",
            18.0,
            75_000,
            "Clean wind energy generation replacing fossil fuel power plants",
            metrics(&[
                ("mw_capacity", json!(500)),
                ("households_powered", json!(150_000)),
                ("co2_reduced", json!("2.5M tons/year")),
            ]),
        ),
        project(
            "Clean Cookstoves Program",
            "Community Development",
            "Kenya",
            12.0,
            25_000,
            "Providing efficient cookstoves to reduce emissions and improve health",
            metrics(&[
                ("families_benefited", json!(15_000)),
                ("health_improvements", json!("85% reduction in indoor air pollution")),
                ("fuel_savings", json!("60% less wood needed")),
            ]),
        ),
        project(
            "Mangrove Restoration",
            "Forest Protection",
            "Indonesia",
            22.0,
            30_000,
            "Restoring coastal mangrove forests to protect against climate change",
            metrics(&[
                ("hectares_restored", json!(5_000)),
                ("carbon_sequestered", json!("50 tons CO2/hectare/year")),
                ("coastal_protection", json!("100km of coastline")),
            ]),
        ),
        project(
            "Solar Panel Installation",
            "Renewable Energy",
            "India",
            16.0,
            40_000,
            "Large-scale solar installations in rural communities",
            metrics(&[
                ("solar_capacity", json!("200 MW")),
                ("rural_electrification", json!("50,000 homes")),
                ("jobs_created", json!(2_500)),
            ]),
        ),
    ]
}

fn product(
    name: &str,
    brand: &str,
    price: f64,
    category: &str,
    description: &str,
    carbon_footprint: f64,
    sustainability_score: u8,
    image_emoji: &str,
) -> EcoProduct {
    EcoProduct {
        id: Uuid::new_v4(),
        name: name.to_string(),
        brand: brand.to_string(),
        price,
        category: category.to_string(),
        description: description.to_string(),
        carbon_footprint,
        sustainability_score,
        image_emoji: image_emoji.to_string(),
        created_at: Utc::now(),
    }
}

pub fn demo_products() -> Vec<EcoProduct> {
    vec![
        product(
            "Bamboo Phone Case",
            "EcoTech Accessories",
            29.99,
            "Electronics",
            "100% biodegradable bamboo phone case with organic coating",
            0.8,
            92,
            "📱",
        ),
        product(
            "Organic Cotton T-Shirt",
            "Pure Threads",
            35.00,
            "Fashion",
            "GOTS certified organic cotton, fair trade manufacturing",
            2.1,
            88,
            "👕",
        ),
        product(
            "Solar Power Bank",
            "SunCharge",
            89.99,
            "Electronics",
            "Portable solar charger with recycled aluminum housing",
            5.2,
            85,
            "🔋",
        ),
        product(
            "Reusable Water Bottle",
            "HydroGreen",
            24.99,
            "Lifestyle",
            "Stainless steel bottle with lifetime warranty",
            1.5,
            95,
            "🍃",
        ),
        product(
            "Recycled Laptop Stand",
            "Eco Office",
            49.99,
            "Electronics",
            "Made from 100% recycled aluminum and plastic",
            3.2,
            90,
            "💻",
        ),
        product(
            "Hemp Sneakers",
            "Green Steps",
            120.00,
            "Fashion",
            "Sustainable sneakers made from hemp and organic cotton",
            4.5,
            87,
            "👟",
        ),
        product(
            "Biodegradable Phone Cleaner",
            "Clean Tech",
            12.99,
            "Electronics",
            "Plant-based screen cleaner in compostable packaging",
            0.3,
            96,
            "🧽",
        ),
        product(
            "Organic Wool Blanket",
            "Cozy Earth",
            89.99,
            "Home & Garden",
            "Ethically sourced wool from organic farms",
            6.8,
            89,
            "🏠",
        ),
    ]
}
