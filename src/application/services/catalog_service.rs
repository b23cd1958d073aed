//! Read-side catalog service: listing, sorting, pagination and search.

use std::sync::Arc;

use crate::domain::entities::{AppSort, PublicApp};
use crate::domain::repositories::AppRepository;
use crate::error::AppError;
use crate::utils::token_display::derive_token_symbol;

/// Raw listing parameters as accepted at the API boundary.
#[derive(Debug, Clone, Default)]
pub struct ListAppsParams {
    pub category: Option<String>,
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// One page of the public app catalog.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    pub apps: Vec<PublicApp>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

/// Service answering catalog queries over published apps.
///
/// All filtering, ordering and pagination happens here, against a snapshot
/// of the published apps; the store only hands out the raw records.
pub struct CatalogService<R: AppRepository> {
    repository: Arc<R>,
    platform_domain: String,
}

impl<R: AppRepository> CatalogService<R> {
    /// Creates a new catalog service serving URLs under `platform_domain`.
    pub fn new(repository: Arc<R>, platform_domain: String) -> Self {
        Self {
            repository,
            platform_domain,
        }
    }

    /// Lists published apps, filtered, sorted and paginated.
    ///
    /// `category` filters by exact category name unless it is `all` (the
    /// default); an unknown category simply matches nothing. `sort` is one
    /// of `hot` (default), `new`, `rating`, `revenue`, all descending.
    /// `page` is clamped to [1, 999] and `limit` to [1, 100]; zero or
    /// missing values fall back to 1 and 20. `total` counts the filtered
    /// set before pagination.
    pub async fn list(&self, params: ListAppsParams) -> Result<CatalogPage, AppError> {
        let page = match params.page {
            Some(value) if value != 0 => value.clamp(1, 999),
            _ => 1,
        };
        let limit = match params.limit {
            Some(value) if value != 0 => value.clamp(1, 100),
            _ => 20,
        };

        let category = params
            .category
            .as_deref()
            .map(|value| value.trim().to_lowercase())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "all".to_string());
        let sort = AppSort::parse_lenient(
            &params
                .sort
                .as_deref()
                .map(|value| value.trim().to_lowercase())
                .unwrap_or_default(),
        );

        let mut filtered: Vec<_> = self
            .repository
            .list_published()
            .await?
            .into_iter()
            .filter(|app| category == "all" || app.category.as_str() == category)
            .collect();

        match sort {
            AppSort::New => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            AppSort::Rating => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            AppSort::Revenue => {
                filtered.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
            }
            AppSort::Hot => filtered.sort_by(|a, b| b.hot_score().total_cmp(&a.hot_score())),
        }

        let total = filtered.len() as i64;
        let start = ((page - 1) * limit) as usize;
        let apps = filtered
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .map(|app| app.to_public(&self.platform_domain))
            .collect();

        Ok(CatalogPage {
            apps,
            total,
            page,
            limit,
        })
    }

    /// Finds published apps matching a free-text query.
    ///
    /// Case-insensitive substring match against name, description, category
    /// and the derived token symbol. An empty or whitespace-only query
    /// returns no apps rather than all of them.
    pub async fn search(&self, query: &str) -> Result<Vec<PublicApp>, AppError> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .repository
            .list_published()
            .await?
            .into_iter()
            .filter(|app| {
                let token_symbol = app
                    .token_id
                    .as_deref()
                    .map(|token_id| derive_token_symbol(token_id).to_lowercase())
                    .unwrap_or_default();

                app.name.to_lowercase().contains(&query)
                    || app.description.to_lowercase().contains(&query)
                    || app.category.as_str().contains(&query)
                    || token_symbol.contains(&query)
            })
            .map(|app| app.to_public(&self.platform_domain))
            .collect())
    }
}
