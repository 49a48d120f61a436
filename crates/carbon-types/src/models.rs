// ─────────────────────────────────────────────────────────────────────
// Carbon Ledger — Domain Models
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Document models for the platform: businesses, offset projects,
//! credit transactions, certificates, eco products, and the dashboard
//! summary. All documents carry uuid identifiers and UTC timestamps and
//! serialize directly to their JSON wire shape.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::constants::CERTIFICATE_VALID_DAYS;

// ── Businesses ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificationStatus {
    #[default]
    Pending,
    Active,
    Expired,
}

/// A registered business account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub industry: String,
    pub size: BusinessSize,
    #[serde(default)]
    pub address: HashMap<String, Value>,
    pub created_at: DateTime<Utc>,
    /// Latest calculated footprint (tons CO2e), cached on the account.
    #[serde(default)]
    pub carbon_footprint: f64,
    /// Offset credits purchased to date.
    #[serde(default)]
    pub offset_credits: u32,
    #[serde(default)]
    pub certification_status: CertificationStatus,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBusiness {
    pub name: String,
    pub email: String,
    pub password: String,
    pub industry: String,
    pub size: BusinessSize,
    #[serde(default)]
    pub address: HashMap<String, Value>,
}

/// Login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Business profile without credential material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub industry: String,
    pub size: BusinessSize,
    pub address: HashMap<String, Value>,
    pub created_at: DateTime<Utc>,
    pub carbon_footprint: f64,
    pub offset_credits: u32,
    pub certification_status: CertificationStatus,
}

impl From<&Business> for BusinessProfile {
    fn from(business: &Business) -> Self {
        BusinessProfile {
            id: business.id,
            name: business.name.clone(),
            email: business.email.clone(),
            industry: business.industry.clone(),
            size: business.size,
            address: business.address.clone(),
            created_at: business.created_at,
            carbon_footprint: business.carbon_footprint,
            offset_credits: business.offset_credits,
            certification_status: business.certification_status,
        }
    }
}

/// Profile fields a business may change itself. Credential and identity
/// fields are deliberately absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub size: Option<BusinessSize>,
    pub address: Option<HashMap<String, Value>>,
}

// ── Marketplace ──────────────────────────────────────────────────────

/// A verified carbon offset project in the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetProject {
    pub id: Uuid,
    pub name: String,
    /// Project category, e.g. "Forest Protection" or "Renewable Energy".
    pub project_type: String,
    pub location: String,
    pub price_per_credit: f64,
    pub available_credits: u32,
    pub description: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub impact_metrics: HashMap<String, Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

/// A credit purchase against a project. `project_name` and
/// `price_per_credit` are snapshots taken at purchase time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditTransaction {
    pub id: Uuid,
    pub business_id: Uuid,
    pub project_id: Uuid,
    pub project_name: String,
    pub credits_purchased: u32,
    pub price_per_credit: f64,
    pub total_amount: f64,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// Purchase request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditPurchase {
    pub project_id: Uuid,
    pub credits: u32,
}

/// Purchase acknowledgment returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub transaction_id: Uuid,
    pub credits_purchased: u32,
    pub total_amount: f64,
    /// Set when the purchase pushed the balance over the footprint and
    /// a carbon-neutral certificate was issued.
    pub certificate_id: Option<Uuid>,
}

// ── Certificates ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateKind {
    CarbonNeutral,
    QuarterlyOffset,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateStatus {
    #[default]
    Active,
    Expired,
}

/// An issued offset certificate, valid for one year from issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub id: Uuid,
    pub business_id: Uuid,
    pub business_name: String,
    pub kind: CertificateKind,
    pub issue_date: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub credits_offset: u32,
    pub status: CertificateStatus,
}

impl Certificate {
    pub fn issue(
        business_id: Uuid,
        business_name: &str,
        kind: CertificateKind,
        credits_offset: u32,
    ) -> Self {
        let now = Utc::now();
        Certificate {
            id: Uuid::new_v4(),
            business_id,
            business_name: business_name.to_string(),
            kind,
            issue_date: now,
            valid_until: now + Duration::days(CERTIFICATE_VALID_DAYS),
            credits_offset,
            status: CertificateStatus::Active,
        }
    }
}

// ── Eco products ─────────────────────────────────────────────────────

/// A listed eco-friendly product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EcoProduct {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    /// Cradle-to-gate footprint of the product itself (tons CO2e).
    pub carbon_footprint: f64,
    /// 0-100 sustainability rating.
    pub sustainability_score: u8,
    /// Emoji placeholder standing in for a catalog image.
    pub image_emoji: String,
    pub created_at: DateTime<Utc>,
}

/// Product creation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub carbon_footprint: f64,
    pub sustainability_score: u8,
    #[serde(default = "default_product_emoji")]
    pub image_emoji: String,
}

fn default_product_emoji() -> String {
    "📦".to_string()
}

// ── Dashboard ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyProgress {
    /// Abbreviated month name, e.g. "Mar".
    pub month: String,
    pub footprint: f64,
    pub offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactMetrics {
    pub trees_equivalent: u64,
    pub cars_off_road: u64,
    pub homes_annual_energy: u64,
}

/// Aggregated account overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub total_footprint: f64,
    pub offset_credits: u32,
    pub carbon_neutral: bool,
    pub monthly_progress: Vec<MonthlyProgress>,
    pub projects_supported: usize,
    pub certificates_earned: usize,
    pub impact_metrics: ImpactMetrics,
}

// ── Sessions ─────────────────────────────────────────────────────────

/// Bearer token handed back on register/login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub business_id: Uuid,
    pub business_name: String,
    pub expires_at: DateTime<Utc>,
}
