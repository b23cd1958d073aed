//! Simulated token deployment service.

use std::sync::Arc;

use crate::domain::entities::{DeployedToken, NewToken};
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use crate::utils::sanitize::{sanitize_text, truncate_chars};

/// Raw deployment request as accepted at the API boundary.
///
/// The boundary has already verified that `name` and `symbol` are non-empty
/// after trimming.
#[derive(Debug, Clone)]
pub struct DeployTokenInput {
    pub name: String,
    pub symbol: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub initial_supply: Option<f64>,
}

/// Service minting simulated token deployments.
///
/// No chain is contacted; the store derives a deterministic stub address and
/// explorer URL from the minted token id.
pub struct TokenService<R: TokenRepository> {
    repository: Arc<R>,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Deploys a token with conditioned metadata.
    ///
    /// # Field conditioning
    ///
    /// - `symbol`: stripped of angle brackets, uppercased, at most 10 chars;
    ///   `TKN` if nothing survives
    /// - `name`: stripped of angle brackets, at most 64 chars; `Unnamed Token`
    ///   if nothing survives
    /// - `description`: stripped of angle brackets, at most 300 chars
    /// - `logo`: trimmed, empty when missing
    /// - `initial_supply`: floored to a whole number of at least 1; missing,
    ///   zero or non-finite values fall back to 1,000,000
    pub async fn deploy(&self, input: DeployTokenInput) -> Result<DeployedToken, AppError> {
        let mut symbol = truncate_chars(
            &sanitize_text(input.symbol.trim()).to_uppercase(),
            10,
        );
        if symbol.is_empty() {
            symbol = "TKN".to_string();
        }

        let mut name = truncate_chars(&sanitize_text(input.name.trim()), 64);
        if name.is_empty() {
            name = "Unnamed Token".to_string();
        }

        let description = truncate_chars(
            &sanitize_text(input.description.as_deref().unwrap_or("").trim()),
            300,
        );

        let logo = input
            .logo
            .map(|value| value.trim().to_string())
            .unwrap_or_default();

        let initial_supply = match input.initial_supply {
            Some(value) if value.is_finite() && value != 0.0 => (value.floor() as i64).max(1),
            _ => 1_000_000,
        };

        self.repository
            .insert_token(NewToken {
                symbol,
                name,
                description,
                logo,
                initial_supply,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTokenRepository;
    use chrono::Utc;

    fn deployed(token: &NewToken) -> DeployedToken {
        DeployedToken {
            token_id: "token-1".to_string(),
            address: "EQtoken1".to_string(),
            explorer_url: "https://tonscan.org/address/EQtoken1".to_string(),
            symbol: token.symbol.clone(),
            name: token.name.clone(),
            description: token.description.clone(),
            logo: token.logo.clone(),
            initial_supply: token.initial_supply,
            created_at: Utc::now(),
        }
    }

    fn input(name: &str, symbol: &str) -> DeployTokenInput {
        DeployTokenInput {
            name: name.to_string(),
            symbol: symbol.to_string(),
            description: None,
            logo: None,
            initial_supply: None,
        }
    }

    #[tokio::test]
    async fn test_deploy_uppercases_and_caps_symbol() {
        let mut mock_repo = MockTokenRepository::new();
        mock_repo
            .expect_insert_token()
            .withf(|token| token.symbol == "SUPERLONGS" && token.name == "Super Coin")
            .times(1)
            .returning(|token| Ok(deployed(&token)));

        let service = TokenService::new(Arc::new(mock_repo));

        let result = service
            .deploy(input("Super Coin", "superlongsymbol"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_deploy_symbol_falls_back_to_tkn() {
        let mut mock_repo = MockTokenRepository::new();
        mock_repo
            .expect_insert_token()
            .withf(|token| token.symbol == "TKN")
            .times(1)
            .returning(|token| Ok(deployed(&token)));

        let service = TokenService::new(Arc::new(mock_repo));

        assert!(service.deploy(input("Coin", "<>")).await.is_ok());
    }

    #[tokio::test]
    async fn test_deploy_default_supply_is_one_million() {
        let mut mock_repo = MockTokenRepository::new();
        mock_repo
            .expect_insert_token()
            .withf(|token| token.initial_supply == 1_000_000)
            .times(1)
            .returning(|token| Ok(deployed(&token)));

        let service = TokenService::new(Arc::new(mock_repo));

        assert!(service.deploy(input("Coin", "C")).await.is_ok());
    }

    #[tokio::test]
    async fn test_deploy_zero_and_nan_supply_use_default() {
        let mut mock_repo = MockTokenRepository::new();
        mock_repo
            .expect_insert_token()
            .withf(|token| token.initial_supply == 1_000_000)
            .times(2)
            .returning(|token| Ok(deployed(&token)));

        let service = TokenService::new(Arc::new(mock_repo));

        let mut zero = input("Coin", "C");
        zero.initial_supply = Some(0.0);
        let mut nan = input("Coin", "C");
        nan.initial_supply = Some(f64::NAN);

        assert!(service.deploy(zero).await.is_ok());
        assert!(service.deploy(nan).await.is_ok());
    }

    #[tokio::test]
    async fn test_deploy_fractional_supply_floors() {
        let mut mock_repo = MockTokenRepository::new();
        mock_repo
            .expect_insert_token()
            .withf(|token| token.initial_supply == 42)
            .times(1)
            .returning(|token| Ok(deployed(&token)));

        let service = TokenService::new(Arc::new(mock_repo));

        let mut request = input("Coin", "C");
        request.initial_supply = Some(42.9);

        assert!(service.deploy(request).await.is_ok());
    }

    #[tokio::test]
    async fn test_deploy_negative_supply_becomes_one() {
        let mut mock_repo = MockTokenRepository::new();
        mock_repo
            .expect_insert_token()
            .withf(|token| token.initial_supply == 1)
            .times(1)
            .returning(|token| Ok(deployed(&token)));

        let service = TokenService::new(Arc::new(mock_repo));

        let mut request = input("Coin", "C");
        request.initial_supply = Some(-500.0);

        assert!(service.deploy(request).await.is_ok());
    }

    #[tokio::test]
    async fn test_deploy_sanitizes_description_and_trims_logo() {
        let mut mock_repo = MockTokenRepository::new();
        mock_repo
            .expect_insert_token()
            .withf(|token| {
                token.description == "to the moon 3" && token.logo == "https://img.example/t.png"
            })
            .times(1)
            .returning(|token| Ok(deployed(&token)));

        let service = TokenService::new(Arc::new(mock_repo));

        let request = DeployTokenInput {
            name: "Coin".to_string(),
            symbol: "C".to_string(),
            description: Some("  to the moon <3  ".to_string()),
            logo: Some("  https://img.example/t.png  ".to_string()),
            initial_supply: None,
        };

        assert!(service.deploy(request).await.is_ok());
    }
}
