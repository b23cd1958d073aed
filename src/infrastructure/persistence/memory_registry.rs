//! In-memory registry backing every repository trait.
//!
//! One `RwLock` guards the whole store, so each operation runs to
//! completion before the next one observes anything: compound writes like
//! publishing (domain + code payload + app record) are atomic without
//! finer-grained coordination. State lives for the process lifetime only.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Months, TimeZone, Utc};
use parking_lot::RwLock;
use serde_json::json;

use crate::domain::entities::{
    App, AppCategory, AppStatus, DeployedToken, Domain, DomainType, NewApp, NewDomain, NewReview,
    NewToken, NewUsageEvent, Review, UsageAction, UsageEvent,
};
use crate::domain::repositories::{
    AppRepository, DomainRepository, ReviewRepository, TokenRepository, UsageRepository,
};
use crate::error::AppError;
use crate::utils::ids::IdSequence;
use crate::utils::sanitize::round2;

/// Demo payload served for the seeded sample app.
const SAMPLE_APP_CODE: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Lucky Wheel</title>
    <style>
      body { margin: 0; min-height: 100vh; display: grid; place-items: center; background: #0b0b0f; color: #fff; font-family: system-ui, sans-serif; }
      .card { border: 1px solid #333; border-radius: 16px; padding: 32px; text-align: center; background: #121216; }
      .btn { border: 0; border-radius: 10px; background: #00ff41; color: #000; padding: 12px 20px; font-weight: 700; cursor: pointer; }
    </style>
  </head>
  <body>
    <div class="card">
      <h1>幸运转盘</h1>
      <p>每次抽奖消耗 100 DOGE2</p>
      <button class="btn">SPIN</button>
    </div>
  </body>
</html>"#;

/// Mutable store state. Only ever touched through the outer lock.
///
/// `apps` is a `Vec` so listings keep insertion order; lookups by id scan
/// linearly, which is fine at in-memory scale.
struct Inner {
    ids: IdSequence,
    token_ids: IdSequence,
    apps: Vec<App>,
    domains: HashMap<String, Domain>,
    code_by_hash: HashMap<String, String>,
    usage_by_app: HashMap<String, Vec<UsageEvent>>,
    active_users_by_app: HashMap<String, HashSet<String>>,
    deployed_tokens: HashMap<String, DeployedToken>,
}

impl Inner {
    fn empty() -> Self {
        Self {
            ids: IdSequence::new(),
            token_ids: IdSequence::new(),
            apps: Vec::new(),
            domains: HashMap::new(),
            code_by_hash: HashMap::new(),
            usage_by_app: HashMap::new(),
            active_users_by_app: HashMap::new(),
            deployed_tokens: HashMap::new(),
        }
    }
}

/// Process-wide in-memory store implementing all repository traits.
///
/// Cloning shares the underlying state. Construct once at startup and hand
/// clones (or an `Arc`) to each service.
#[derive(Clone)]
pub struct MemoryRegistry {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::empty())),
        }
    }

    /// Creates a registry preloaded with the demo lottery app.
    ///
    /// The sample carries marketing-sized counters and a rating that does
    /// not match its two stored reviews; the first real review write
    /// recomputes the aggregate from the list. Both id sequences start at
    /// 10 so generated ids never collide with the fixtures.
    pub fn with_sample_data() -> Self {
        let mut inner = Inner::empty();
        inner.ids = IdSequence::starting_at(10);
        inner.token_ids = IdSequence::starting_at(10);

        let created_at = seed_date(2026, 2, 20);
        let app_id = "app-1".to_string();
        let code_hash = "app:app-1:code".to_string();

        inner
            .code_by_hash
            .insert(code_hash.clone(), SAMPLE_APP_CODE.to_string());

        inner.apps.push(App {
            id: app_id.clone(),
            name: "幸运转盘".to_string(),
            description: "用 DOGE2 代币参与转盘抽奖，赢取丰厚奖励！".to_string(),
            category: AppCategory::Lottery,
            creator_id: "user-1".to_string(),
            creator_name: "DOGE2 社区".to_string(),
            code_hash,
            subdomain: "lottery".to_string(),
            domain_type: DomainType::Premium,
            token_id: Some("DOGE2".to_string()),
            total_users: 12345,
            daily_active: 2340,
            total_revenue: 45000.0,
            rating: 4.8,
            rating_count: 1234,
            reviews: vec![
                Review {
                    id: "review-seed-1".to_string(),
                    user_id: "user-a".to_string(),
                    rating: 5.0,
                    comment: "很好玩，中大奖了！".to_string(),
                    date: seed_date(2026, 2, 21),
                },
                Review {
                    id: "review-seed-2".to_string(),
                    user_id: "user-b".to_string(),
                    rating: 4.0,
                    comment: "界面漂亮，体验流畅。".to_string(),
                    date: seed_date(2026, 2, 22),
                },
            ],
            status: AppStatus::Published,
            created_at,
            updated_at: created_at,
            icon: Some("🎰".to_string()),
        });

        inner.domains.insert(
            "lottery".to_string(),
            Domain {
                id: "domain-1".to_string(),
                name: "lottery".to_string(),
                owner_id: "user-1".to_string(),
                app_id: Some(app_id.clone()),
                domain_type: DomainType::Premium,
                price_paid: 100,
                expires_at: seed_date(2027, 2, 20),
                created_at,
            },
        );

        inner.active_users_by_app.insert(
            app_id,
            HashSet::from(["user-a".to_string(), "user-b".to_string()]),
        );

        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Expiry for a registration made now: one calendar year out, clamped to
/// the end of the month for leap-day edge cases.
fn one_year_from(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_add_months(Months::new(12))
        .unwrap_or(now + Duration::days(365))
}

fn app_not_found(id: &str) -> AppError {
    AppError::not_found("App not found", json!({ "id": id }))
}

#[async_trait]
impl AppRepository for MemoryRegistry {
    async fn insert_published(&self, new_app: NewApp) -> Result<App, AppError> {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        if inner.domains.contains_key(&new_app.subdomain) {
            return Err(AppError::conflict(
                "Domain already taken",
                json!({ "name": new_app.subdomain }),
            ));
        }

        let now = Utc::now();
        let app_id = inner.ids.next("app");
        let code_hash = format!("code:{}:{}", app_id, now.timestamp_millis());
        let domain_id = inner.ids.next("domain");

        inner.domains.insert(
            new_app.subdomain.clone(),
            Domain {
                id: domain_id,
                name: new_app.subdomain.clone(),
                owner_id: new_app.creator_id.clone(),
                app_id: Some(app_id.clone()),
                domain_type: new_app.domain_type,
                price_paid: new_app.domain_type.price(&new_app.subdomain),
                expires_at: one_year_from(now),
                created_at: now,
            },
        );
        inner.code_by_hash.insert(code_hash.clone(), new_app.code);

        let app = App {
            id: app_id,
            name: new_app.name,
            description: new_app.description,
            category: new_app.category,
            creator_id: new_app.creator_id,
            creator_name: new_app.creator_name,
            code_hash,
            subdomain: new_app.subdomain,
            domain_type: new_app.domain_type,
            token_id: new_app.token_id,
            total_users: 0,
            daily_active: 0,
            total_revenue: 0.0,
            rating: 0.0,
            rating_count: 0,
            reviews: Vec::new(),
            status: AppStatus::Published,
            created_at: now,
            updated_at: now,
            icon: Some(new_app.icon),
        };
        inner.apps.push(app.clone());

        Ok(app)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<App>, AppError> {
        let inner = self.inner.read();
        Ok(inner.apps.iter().find(|app| app.id == id).cloned())
    }

    async fn list_published(&self) -> Result<Vec<App>, AppError> {
        let inner = self.inner.read();
        Ok(inner
            .apps
            .iter()
            .filter(|app| app.is_published())
            .cloned()
            .collect())
    }

    async fn find_code(&self, code_hash: &str) -> Result<Option<String>, AppError> {
        let inner = self.inner.read();
        Ok(inner.code_by_hash.get(code_hash).cloned())
    }
}

#[async_trait]
impl DomainRepository for MemoryRegistry {
    async fn insert(&self, new_domain: NewDomain) -> Result<Domain, AppError> {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        if inner.domains.contains_key(&new_domain.name) {
            return Err(AppError::conflict(
                "Domain already taken",
                json!({ "name": new_domain.name }),
            ));
        }

        let now = Utc::now();
        let domain = Domain {
            id: inner.ids.next("domain"),
            name: new_domain.name.clone(),
            owner_id: new_domain.owner_id,
            app_id: new_domain.app_id,
            domain_type: new_domain.domain_type,
            price_paid: new_domain.domain_type.price(&new_domain.name),
            expires_at: one_year_from(now),
            created_at: now,
        };
        inner.domains.insert(new_domain.name, domain.clone());

        Ok(domain)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Domain>, AppError> {
        let inner = self.inner.read();
        Ok(inner.domains.get(name).cloned())
    }
}

#[async_trait]
impl UsageRepository for MemoryRegistry {
    async fn record_usage(&self, app_id: &str, event: NewUsageEvent) -> Result<(), AppError> {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        let Some(app) = inner.apps.iter_mut().find(|app| app.id == app_id) else {
            return Err(app_not_found(app_id));
        };

        let now = Utc::now();
        let usage_id = inner.ids.next("usage");
        inner
            .usage_by_app
            .entry(app.id.clone())
            .or_default()
            .push(UsageEvent {
                id: usage_id,
                app_id: app.id.clone(),
                user_id: event.user_id.clone(),
                action: event.action,
                amount: event.amount,
                created_at: now,
            });

        let active = inner.active_users_by_app.entry(app.id.clone()).or_default();
        let was_active = active.contains(&event.user_id);
        active.insert(event.user_id);
        let active_count = active.len() as i64;

        match event.action {
            UsageAction::Open if !was_active => {
                app.total_users += 1;
                app.daily_active = active_count;
            }
            UsageAction::Interact if !was_active => {
                app.daily_active = active_count;
            }
            UsageAction::Pay => {
                app.total_revenue = round2(app.total_revenue + event.amount);
            }
            _ => {}
        }

        app.updated_at = now;
        Ok(())
    }

    async fn usage_events(&self, app_id: &str) -> Result<Vec<UsageEvent>, AppError> {
        let inner = self.inner.read();
        Ok(inner.usage_by_app.get(app_id).cloned().unwrap_or_default())
    }

    async fn reset_daily_active(&self, app_id: &str) -> Result<(), AppError> {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        let Some(app) = inner.apps.iter_mut().find(|app| app.id == app_id) else {
            return Err(app_not_found(app_id));
        };

        if let Some(active) = inner.active_users_by_app.get_mut(&app.id) {
            active.clear();
        }
        app.daily_active = 0;

        Ok(())
    }
}

#[async_trait]
impl ReviewRepository for MemoryRegistry {
    async fn upsert_review(&self, app_id: &str, review: NewReview) -> Result<Review, AppError> {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        let Some(app) = inner.apps.iter_mut().find(|app| app.id == app_id) else {
            return Err(app_not_found(app_id));
        };

        let now = Utc::now();
        let stored = match app
            .reviews
            .iter_mut()
            .find(|existing| existing.user_id == review.user_id)
        {
            Some(existing) => {
                existing.rating = review.rating;
                existing.comment = review.comment;
                existing.date = now;
                existing.clone()
            }
            None => {
                let created = Review {
                    id: inner.ids.next("review"),
                    user_id: review.user_id,
                    rating: review.rating,
                    comment: review.comment,
                    date: now,
                };
                app.reviews.push(created.clone());
                created
            }
        };

        let total: f64 = app.reviews.iter().map(|r| r.rating).sum();
        app.rating_count = app.reviews.len() as i64;
        app.rating = if app.rating_count > 0 {
            round2(total / app.rating_count as f64)
        } else {
            0.0
        };
        app.updated_at = now;

        Ok(stored)
    }
}

#[async_trait]
impl TokenRepository for MemoryRegistry {
    async fn insert_token(&self, token: NewToken) -> Result<DeployedToken, AppError> {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        let token_id = inner.token_ids.next("token");
        // Stub address: "EQ" plus the last 16 alphanumerics of the id.
        let alphanumeric: Vec<char> = token_id
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        let tail_start = alphanumeric.len().saturating_sub(16);
        let tail: String = alphanumeric[tail_start..].iter().collect();
        let address = format!("EQ{tail}");

        let deployed = DeployedToken {
            token_id: token_id.clone(),
            explorer_url: format!("https://tonscan.org/address/{address}"),
            address,
            symbol: token.symbol,
            name: token.name,
            description: token.description,
            logo: token.logo,
            initial_supply: token.initial_supply,
            created_at: Utc::now(),
        };
        inner.deployed_tokens.insert(token_id, deployed.clone());

        Ok(deployed)
    }

    async fn find_token(&self, token_id: &str) -> Result<Option<DeployedToken>, AppError> {
        let inner = self.inner.read();
        Ok(inner.deployed_tokens.get(token_id).cloned())
    }
}
