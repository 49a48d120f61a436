// ─────────────────────────────────────────────────────────────────────
// Carbon Ledger — Platform Service
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Account, calculator, marketplace, certificate, and catalog
//! operations. This is the library surface a serving layer calls once
//! per request; every operation authenticates a bearer token against
//! the session registry and reads or mutates the document store.

use chrono::Utc;
use log::{info, warn};
use uuid::Uuid;

use carbon_engine::calculate;
use carbon_types::config::PlatformConfig;
use carbon_types::error::{CarbonError, CarbonResult};
use carbon_types::footprint::{CalculationInput, CalculationResult, FootprintRecord};
use carbon_types::models::{
    AccessToken, Business, BusinessProfile, Certificate, CertificateKind, CertificationStatus,
    CreditPurchase, CreditTransaction, Credentials, Dashboard, EcoProduct, NewBusiness,
    NewProduct, OffsetProject, PaymentStatus, ProfileUpdate, PurchaseReceipt,
};

use crate::auth::{self, SessionRegistry};
use crate::dashboard::build_dashboard;
use crate::seed;
use crate::store::MemoryStore;

pub struct CarbonPlatform {
    config: PlatformConfig,
    store: MemoryStore,
    sessions: SessionRegistry,
}

impl CarbonPlatform {
    /// Open a platform instance: load the snapshot if configured, and
    /// seed the demo catalog into an empty marketplace if requested.
    pub fn open(config: PlatformConfig) -> CarbonResult<Self> {
        let mut store = match &config.snapshot_path {
            Some(path) => MemoryStore::load(path)?,
            None => MemoryStore::new(),
        };
        if config.seed_demo_catalog && store.project_count() == 0 {
            seed::load_demo_catalog(&mut store);
            info!("seeded demo catalog");
        }
        Ok(CarbonPlatform {
            config,
            store,
            sessions: SessionRegistry::new(),
        })
    }

    pub fn with_store(config: PlatformConfig, store: MemoryStore) -> Self {
        CarbonPlatform {
            config,
            store,
            sessions: SessionRegistry::new(),
        }
    }

    /// Write the store snapshot if a path is configured.
    pub fn persist(&self) -> CarbonResult<()> {
        if let Some(path) = &self.config.snapshot_path {
            self.store.save(path)?;
        }
        Ok(())
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    // ── Accounts ─────────────────────────────────────────────────────

    pub fn register(&mut self, new: NewBusiness) -> CarbonResult<AccessToken> {
        if new.name.trim().is_empty() {
            return Err(CarbonError::Validation("business name is required".into()));
        }
        if !new.email.contains('@') {
            return Err(CarbonError::Validation(format!(
                "not a valid email address: {}",
                new.email
            )));
        }
        if self.store.business_by_email(&new.email).is_some() {
            return Err(CarbonError::EmailTaken(new.email));
        }

        let business = Business {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            password_hash: auth::hash_password(&new.password)?,
            industry: new.industry,
            size: new.size,
            address: new.address,
            created_at: Utc::now(),
            carbon_footprint: 0.0,
            offset_credits: 0,
            certification_status: CertificationStatus::Pending,
        };
        info!("registered business {} ({})", business.name, business.id);
        let token = self.issue_token(&business);
        self.store.insert_business(business);
        Ok(token)
    }

    /// Unknown email and wrong password produce the same error.
    pub fn login(&mut self, credentials: Credentials) -> CarbonResult<AccessToken> {
        let business = self
            .store
            .business_by_email(&credentials.email)
            .ok_or(CarbonError::InvalidCredentials)?;
        if !auth::verify_password(&credentials.password, &business.password_hash)? {
            warn!("failed login for {}", credentials.email);
            return Err(CarbonError::InvalidCredentials);
        }
        let business = business.clone();
        Ok(self.issue_token(&business))
    }

    pub fn logout(&mut self, token: &str) -> bool {
        self.sessions.revoke(token)
    }

    fn issue_token(&mut self, business: &Business) -> AccessToken {
        let (token, expires_at) = self
            .sessions
            .issue(business.id, self.config.session_ttl_hours);
        AccessToken {
            access_token: token,
            token_type: "bearer".to_string(),
            business_id: business.id,
            business_name: business.name.clone(),
            expires_at,
        }
    }

    /// Resolve a bearer token to a live business account.
    fn authenticate(&self, token: &str) -> CarbonResult<Uuid> {
        let business_id = self.sessions.resolve(token)?;
        if self.store.business(business_id).is_none() {
            return Err(CarbonError::TokenInvalid);
        }
        Ok(business_id)
    }

    fn authenticated_business(&self, token: &str) -> CarbonResult<&Business> {
        let business_id = self.authenticate(token)?;
        self.store.business(business_id).ok_or(CarbonError::TokenInvalid)
    }

    pub fn profile(&self, token: &str) -> CarbonResult<BusinessProfile> {
        Ok(BusinessProfile::from(self.authenticated_business(token)?))
    }

    pub fn update_profile(&mut self, token: &str, update: ProfileUpdate) -> CarbonResult<BusinessProfile> {
        let business_id = self.authenticate(token)?;
        let business = self
            .store
            .business_mut(business_id)
            .ok_or(CarbonError::TokenInvalid)?;
        if let Some(name) = update.name {
            business.name = name;
        }
        if let Some(industry) = update.industry {
            business.industry = industry;
        }
        if let Some(size) = update.size {
            business.size = size;
        }
        if let Some(address) = update.address {
            business.address = address;
        }
        Ok(BusinessProfile::from(&*business))
    }

    // ── Calculator ───────────────────────────────────────────────────

    /// Run the emissions calculator and persist the footprint record.
    /// The business's cached footprint total is refreshed to the new
    /// result.
    pub fn record_footprint(
        &mut self,
        token: &str,
        input: CalculationInput,
    ) -> CarbonResult<CalculationResult> {
        let business_id = self.authenticate(token)?;
        let result = calculate(&input);
        info!(
            "footprint for {}: {} t CO2e",
            business_id, result.total_emissions
        );
        self.store
            .record_footprint(FootprintRecord::new(business_id, input, &result));
        Ok(result)
    }

    pub fn footprint_history(&self, token: &str) -> CarbonResult<Vec<FootprintRecord>> {
        let business_id = self.authenticate(token)?;
        Ok(self.store.footprints_for(business_id))
    }

    // ── Marketplace ──────────────────────────────────────────────────

    pub fn projects(&self, project_type: Option<&str>) -> Vec<OffsetProject> {
        self.store.projects(project_type)
    }

    pub fn project(&self, id: Uuid) -> CarbonResult<OffsetProject> {
        self.store
            .project(id)
            .cloned()
            .ok_or(CarbonError::NotFound {
                kind: "project",
                id: id.to_string(),
            })
    }

    /// Purchase credits from a project.
    ///
    /// Known gap: the transaction append, project decrement, balance
    /// update, and certificate issuance are a plain multi-step update
    /// with no atomicity. A failure partway leaves a partial purchase.
    pub fn purchase_credits(
        &mut self,
        token: &str,
        purchase: CreditPurchase,
    ) -> CarbonResult<PurchaseReceipt> {
        let business_id = self.authenticate(token)?;
        if purchase.credits == 0 {
            return Err(CarbonError::Validation(
                "purchase must be at least one credit".into(),
            ));
        }

        let project = self.project(purchase.project_id)?;
        if project.available_credits < purchase.credits {
            return Err(CarbonError::InsufficientCredits {
                available: project.available_credits,
                requested: purchase.credits,
            });
        }

        let total_amount = f64::from(purchase.credits) * project.price_per_credit;
        let transaction = CreditTransaction {
            id: Uuid::new_v4(),
            business_id,
            project_id: project.id,
            project_name: project.name.clone(),
            credits_purchased: purchase.credits,
            price_per_credit: project.price_per_credit,
            total_amount,
            payment_status: PaymentStatus::Completed,
            created_at: Utc::now(),
        };
        let transaction_id = transaction.id;

        self.store.push_transaction(transaction);
        self.store
            .take_project_credits(project.id, purchase.credits)?;

        let business = self
            .store
            .business_mut(business_id)
            .ok_or(CarbonError::TokenInvalid)?;
        business.offset_credits += purchase.credits;
        let new_balance = business.offset_credits;
        let footprint = business.carbon_footprint;
        let name = business.name.clone();

        // A purchase that covers a positive footprint earns the
        // carbon-neutral certificate immediately.
        let mut certificate_id = None;
        if footprint > 0.0 && f64::from(new_balance) >= footprint {
            business.certification_status = CertificationStatus::Active;
            let certificate = Certificate::issue(
                business_id,
                &name,
                CertificateKind::CarbonNeutral,
                new_balance,
            );
            certificate_id = Some(certificate.id);
            info!("issued carbon-neutral certificate for {}", business_id);
            self.store.push_certificate(certificate);
        }

        info!(
            "purchase {}: {} credits from {} for {}",
            transaction_id, purchase.credits, project.name, business_id
        );
        Ok(PurchaseReceipt {
            transaction_id,
            credits_purchased: purchase.credits,
            total_amount,
            certificate_id,
        })
    }

    pub fn transactions(&self, token: &str) -> CarbonResult<Vec<CreditTransaction>> {
        let business_id = self.authenticate(token)?;
        Ok(self.store.transactions_for(business_id))
    }

    // ── Certificates ─────────────────────────────────────────────────

    /// Issue a certificate on demand for the current credit balance.
    pub fn issue_certificate(
        &mut self,
        token: &str,
        kind: CertificateKind,
    ) -> CarbonResult<Certificate> {
        let business = self.authenticated_business(token)?;
        let certificate =
            Certificate::issue(business.id, &business.name, kind, business.offset_credits);
        self.store.push_certificate(certificate.clone());
        Ok(certificate)
    }

    pub fn certificates(&self, token: &str) -> CarbonResult<Vec<Certificate>> {
        let business_id = self.authenticate(token)?;
        Ok(self.store.certificates_for(business_id))
    }

    // ── Eco products ─────────────────────────────────────────────────

    pub fn products(&self, category: Option<&str>) -> Vec<EcoProduct> {
        self.store.products(category)
    }

    pub fn add_product(&mut self, token: &str, new: NewProduct) -> CarbonResult<EcoProduct> {
        self.authenticate(token)?;
        if new.sustainability_score > 100 {
            return Err(CarbonError::Validation(
                "sustainability score must be 0-100".into(),
            ));
        }
        let product = EcoProduct {
            id: Uuid::new_v4(),
            name: new.name,
            brand: new.brand,
            price: new.price,
            category: new.category,
            description: new.description,
            carbon_footprint: new.carbon_footprint,
            sustainability_score: new.sustainability_score,
            image_emoji: new.image_emoji,
            created_at: Utc::now(),
        };
        self.store.insert_product(product.clone());
        Ok(product)
    }

    /// Acknowledge a brand-contact request. No mail is sent; the caller
    /// gets the confirmation line the UI displays.
    pub fn contact_brand(&self, token: &str, product_id: Uuid) -> CarbonResult<String> {
        self.authenticate(token)?;
        let product = self
            .store
            .product(product_id)
            .ok_or(CarbonError::NotFound {
                kind: "product",
                id: product_id.to_string(),
            })?;
        Ok(format!("Your message has been sent to {}", product.brand))
    }

    // ── Dashboard ────────────────────────────────────────────────────

    pub fn dashboard(&self, token: &str) -> CarbonResult<Dashboard> {
        let business = self.authenticated_business(token)?;
        let completed = self.store.completed_transactions_for(business.id);
        let certificates = self.store.certificates_for(business.id);
        Ok(build_dashboard(
            business,
            &completed,
            &certificates,
            Utc::now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbon_types::models::BusinessSize;
    use std::collections::HashMap;

    fn platform() -> CarbonPlatform {
        let mut store = MemoryStore::new();
        seed::load_demo_catalog(&mut store);
        CarbonPlatform::with_store(PlatformConfig::default(), store)
    }

    fn registration(email: &str) -> NewBusiness {
        NewBusiness {
            name: "Acme Corp".to_string(),
            email: email.to_string(),
            password: "tr0ub4dor&3".to_string(),
            industry: "Logistics".to_string(),
            size: BusinessSize::Medium,
            address: HashMap::new(),
        }
    }

    #[test]
    fn test_register_rejects_duplicate_email() {
        let mut platform = platform();
        platform.register(registration("ops@acme.example")).unwrap();
        let err = platform
            .register(registration("ops@acme.example"))
            .unwrap_err();
        assert!(matches!(err, CarbonError::EmailTaken(_)));
    }

    #[test]
    fn test_register_validates_email_shape() {
        let mut platform = platform();
        let err = platform.register(registration("not-an-email")).unwrap_err();
        assert!(matches!(err, CarbonError::Validation(_)));
    }

    #[test]
    fn test_login_same_error_for_unknown_email_and_bad_password() {
        let mut platform = platform();
        platform.register(registration("ops@acme.example")).unwrap();

        let unknown = platform
            .login(Credentials {
                email: "nobody@acme.example".to_string(),
                password: "tr0ub4dor&3".to_string(),
            })
            .unwrap_err();
        let wrong = platform
            .login(Credentials {
                email: "ops@acme.example".to_string(),
                password: "wrong".to_string(),
            })
            .unwrap_err();
        assert!(matches!(unknown, CarbonError::InvalidCredentials));
        assert!(matches!(wrong, CarbonError::InvalidCredentials));
    }

    #[test]
    fn test_logout_invalidates_token() {
        let mut platform = platform();
        let token = platform.register(registration("ops@acme.example")).unwrap();
        assert!(platform.profile(&token.access_token).is_ok());
        assert!(platform.logout(&token.access_token));
        assert!(matches!(
            platform.profile(&token.access_token),
            Err(CarbonError::TokenInvalid)
        ));
    }

    #[test]
    fn test_record_footprint_updates_cached_total_and_history() {
        let mut platform = platform();
        let token = platform.register(registration("ops@acme.example")).unwrap();
        let mut input = CalculationInput::default();
        input.operations_data.employees = 10.0;

        let result = platform
            .record_footprint(&token.access_token, input)
            .unwrap();
        assert_eq!(result.total_emissions, 25.0);

        let profile = platform.profile(&token.access_token).unwrap();
        assert_eq!(profile.carbon_footprint, 25.0);

        let history = platform.footprint_history(&token.access_token).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].total_emissions, 25.0);
    }

    #[test]
    fn test_purchase_decrements_project_and_credits_balance() {
        let mut platform = platform();
        let token = platform.register(registration("ops@acme.example")).unwrap();
        let project = platform.projects(Some("Renewable Energy"))[0].clone();
        let before = project.available_credits;

        let receipt = platform
            .purchase_credits(
                &token.access_token,
                CreditPurchase {
                    project_id: project.id,
                    credits: 10,
                },
            )
            .unwrap();
        assert_eq!(receipt.credits_purchased, 10);
        assert_eq!(receipt.total_amount, 10.0 * project.price_per_credit);
        // No footprint yet, so no certificate.
        assert!(receipt.certificate_id.is_none());

        assert_eq!(
            platform.project(project.id).unwrap().available_credits,
            before - 10
        );
        let profile = platform.profile(&token.access_token).unwrap();
        assert_eq!(profile.offset_credits, 10);
        assert_eq!(platform.transactions(&token.access_token).unwrap().len(), 1);
    }

    #[test]
    fn test_purchase_rejects_oversized_order() {
        let mut platform = platform();
        let token = platform.register(registration("ops@acme.example")).unwrap();
        let project = platform.projects(None)[0].clone();
        let err = platform
            .purchase_credits(
                &token.access_token,
                CreditPurchase {
                    project_id: project.id,
                    credits: project.available_credits + 1,
                },
            )
            .unwrap_err();
        assert!(matches!(err, CarbonError::InsufficientCredits { .. }));
    }

    #[test]
    fn test_covering_purchase_issues_carbon_neutral_certificate() {
        let mut platform = platform();
        let token = platform.register(registration("ops@acme.example")).unwrap();

        // 10 employees → 25 t CO2e footprint.
        let mut input = CalculationInput::default();
        input.operations_data.employees = 10.0;
        platform
            .record_footprint(&token.access_token, input)
            .unwrap();

        let project = platform.projects(None)[0].clone();
        let receipt = platform
            .purchase_credits(
                &token.access_token,
                CreditPurchase {
                    project_id: project.id,
                    credits: 25,
                },
            )
            .unwrap();
        assert!(receipt.certificate_id.is_some());

        let certificates = platform.certificates(&token.access_token).unwrap();
        assert_eq!(certificates.len(), 1);
        assert_eq!(certificates[0].kind, CertificateKind::CarbonNeutral);
        assert_eq!(certificates[0].credits_offset, 25);

        let profile = platform.profile(&token.access_token).unwrap();
        assert_eq!(profile.certification_status, CertificationStatus::Active);

        let dash = platform.dashboard(&token.access_token).unwrap();
        assert!(dash.carbon_neutral);
        assert_eq!(dash.projects_supported, 1);
        assert_eq!(dash.certificates_earned, 1);
    }

    #[test]
    fn test_unknown_project_not_found() {
        let mut platform = platform();
        let token = platform.register(registration("ops@acme.example")).unwrap();
        let err = platform
            .purchase_credits(
                &token.access_token,
                CreditPurchase {
                    project_id: Uuid::new_v4(),
                    credits: 1,
                },
            )
            .unwrap_err();
        assert!(matches!(err, CarbonError::NotFound { kind: "project", .. }));
    }

    #[test]
    fn test_product_catalog_and_contact() {
        let mut platform = platform();
        let token = platform.register(registration("ops@acme.example")).unwrap();

        assert_eq!(platform.products(None).len(), 8);
        assert_eq!(platform.products(Some("Fashion")).len(), 2);

        let product = platform.products(Some("Lifestyle"))[0].clone();
        let ack = platform
            .contact_brand(&token.access_token, product.id)
            .unwrap();
        assert_eq!(ack, "Your message has been sent to HydroGreen");
    }

    #[test]
    fn test_update_profile_preserves_identity_fields() {
        let mut platform = platform();
        let token = platform.register(registration("ops@acme.example")).unwrap();
        let updated = platform
            .update_profile(
                &token.access_token,
                ProfileUpdate {
                    name: Some("Acme Holdings".to_string()),
                    industry: None,
                    size: Some(BusinessSize::Large),
                    address: None,
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Acme Holdings");
        assert_eq!(updated.size, BusinessSize::Large);
        assert_eq!(updated.email, "ops@acme.example");
        assert_eq!(updated.industry, "Logistics");
    }
}
