// ─────────────────────────────────────────────────────────────────────
// Carbon Ledger — Document Store
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! In-memory document store with JSON snapshot persistence.
//!
//! Six collections: businesses, footprint records, offset projects,
//! credit transactions, certificates, and eco products. Footprint
//! records are append-only. A snapshot serializes the whole store to
//! one JSON file; loading a missing file yields an empty store.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use carbon_types::error::{CarbonError, CarbonResult};
use carbon_types::footprint::FootprintRecord;
use carbon_types::models::{
    Business, Certificate, CreditTransaction, EcoProduct, OffsetProject, PaymentStatus,
};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    businesses: HashMap<Uuid, Business>,
    footprints: Vec<FootprintRecord>,
    projects: HashMap<Uuid, OffsetProject>,
    transactions: Vec<CreditTransaction>,
    certificates: Vec<Certificate>,
    products: HashMap<Uuid, EcoProduct>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Load a snapshot. A missing file is an empty store, not an error.
    pub fn load(path: &Path) -> CarbonResult<Self> {
        if !path.exists() {
            return Ok(MemoryStore::new());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the whole store to one JSON snapshot file.
    pub fn save(&self, path: &Path) -> CarbonResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    // ── Businesses ───────────────────────────────────────────────────

    pub fn insert_business(&mut self, business: Business) {
        self.businesses.insert(business.id, business);
    }

    pub fn business(&self, id: Uuid) -> Option<&Business> {
        self.businesses.get(&id)
    }

    pub fn business_mut(&mut self, id: Uuid) -> Option<&mut Business> {
        self.businesses.get_mut(&id)
    }

    pub fn business_by_email(&self, email: &str) -> Option<&Business> {
        self.businesses.values().find(|b| b.email == email)
    }

    // ── Footprints ───────────────────────────────────────────────────

    /// Append a footprint record and refresh the owning business's
    /// cached footprint total.
    pub fn record_footprint(&mut self, record: FootprintRecord) {
        if let Some(business) = self.businesses.get_mut(&record.business_id) {
            business.carbon_footprint = record.total_emissions;
        }
        self.footprints.push(record);
    }

    pub fn footprints_for(&self, business_id: Uuid) -> Vec<FootprintRecord> {
        self.footprints
            .iter()
            .filter(|f| f.business_id == business_id)
            .cloned()
            .collect()
    }

    // ── Projects ─────────────────────────────────────────────────────

    pub fn insert_project(&mut self, project: OffsetProject) {
        self.projects.insert(project.id, project);
    }

    /// List projects, optionally filtered by type. The literal filter
    /// "all" matches everything, same as no filter.
    pub fn projects(&self, project_type: Option<&str>) -> Vec<OffsetProject> {
        let mut listed: Vec<OffsetProject> = self
            .projects
            .values()
            .filter(|p| match project_type {
                Some(kind) if kind != "all" => p.project_type == kind,
                _ => true,
            })
            .cloned()
            .collect();
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        listed
    }

    pub fn project(&self, id: Uuid) -> Option<&OffsetProject> {
        self.projects.get(&id)
    }

    /// Decrement a project's available credits.
    pub fn take_project_credits(&mut self, id: Uuid, credits: u32) -> CarbonResult<()> {
        let project = self.projects.get_mut(&id).ok_or(CarbonError::NotFound {
            kind: "project",
            id: id.to_string(),
        })?;
        project.available_credits = project.available_credits.checked_sub(credits).ok_or(
            CarbonError::InsufficientCredits {
                available: project.available_credits,
                requested: credits,
            },
        )?;
        Ok(())
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    // ── Transactions ─────────────────────────────────────────────────

    pub fn push_transaction(&mut self, transaction: CreditTransaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions_for(&self, business_id: Uuid) -> Vec<CreditTransaction> {
        self.transactions
            .iter()
            .filter(|t| t.business_id == business_id)
            .cloned()
            .collect()
    }

    pub fn completed_transactions_for(&self, business_id: Uuid) -> Vec<CreditTransaction> {
        self.transactions
            .iter()
            .filter(|t| {
                t.business_id == business_id && t.payment_status == PaymentStatus::Completed
            })
            .cloned()
            .collect()
    }

    // ── Certificates ─────────────────────────────────────────────────

    pub fn push_certificate(&mut self, certificate: Certificate) {
        self.certificates.push(certificate);
    }

    pub fn certificates_for(&self, business_id: Uuid) -> Vec<Certificate> {
        self.certificates
            .iter()
            .filter(|c| c.business_id == business_id)
            .cloned()
            .collect()
    }

    // ── Products ─────────────────────────────────────────────────────

    pub fn insert_product(&mut self, product: EcoProduct) {
        self.products.insert(product.id, product);
    }

    /// List products, optionally filtered by category ("all" matches
    /// everything).
    pub fn products(&self, category: Option<&str>) -> Vec<EcoProduct> {
        let mut listed: Vec<EcoProduct> = self
            .products
            .values()
            .filter(|p| match category {
                Some(cat) if cat != "all" => p.category == cat,
                _ => true,
            })
            .cloned()
            .collect();
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        listed
    }

    pub fn product(&self, id: Uuid) -> Option<&EcoProduct> {
        self.products.get(&id)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}
