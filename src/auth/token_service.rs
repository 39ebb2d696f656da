use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{auth::models::Claims, config::AuthConfig, Result};

pub struct TokenService;

impl TokenService {
    /// Mints a token the way the identity provider does. The API itself never
    /// issues tokens; this is used by tests and local tooling.
    pub fn create_token(claims: &Claims, config: &AuthConfig) -> Result<String> {
        let token = encode(
            &Header::new(config.jwt_algorithm),
            claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )?;
        Ok(token)
    }

    pub fn validate_token(token: &str, config: &AuthConfig) -> Result<Claims> {
        let mut validation = Validation::new(config.jwt_algorithm);
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_issuer(&[config.issuer.as_str()]);

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &validation,
        )?;
        Ok(decoded.claims)
    }
}

impl Claims {
    pub fn new(sub: impl Into<String>, config: &AuthConfig, ttl: Duration) -> Self {
        let iat = Utc::now();
        let exp = iat + ttl;

        Self {
            sub: sub.into(),
            exp: exp.timestamp() as usize,
            iat: iat.timestamp() as usize,
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
            email: None,
            first_name: None,
            last_name: None,
            profile_image_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            issuer: "https://id.example.com".to_string(),
            audience: "songbook".to_string(),
            jwt_algorithm: Algorithm::HS256,
        }
    }

    #[test]
    fn test_round_trip_keeps_profile_claims() {
        let config = config();
        let mut claims = Claims::new("user-1", &config, Duration::minutes(5));
        claims.email = Some("grace@example.com".to_string());

        let token = TokenService::create_token(&claims, &config).unwrap();
        let decoded = TokenService::validate_token(&token, &config).unwrap();

        assert_eq!(decoded.sub, "user-1");
        assert_eq!(decoded.email.as_deref(), Some("grace@example.com"));
    }

    #[test]
    fn test_rejects_foreign_audience() {
        let config = config();
        let claims = Claims::new("user-1", &config, Duration::minutes(5));
        let token = TokenService::create_token(&claims, &config).unwrap();

        let other = AuthConfig {
            audience: "another-app".to_string(),
            ..config
        };
        assert!(TokenService::validate_token(&token, &other).is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let config = config();
        let claims = Claims::new("user-1", &config, Duration::hours(-2));
        let token = TokenService::create_token(&claims, &config).unwrap();

        assert!(TokenService::validate_token(&token, &config).is_err());
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let config = config();
        let claims = Claims::new("user-1", &config, Duration::minutes(5));
        let token = TokenService::create_token(&claims, &config).unwrap();

        let other = AuthConfig {
            jwt_secret: "not-the-secret".to_string(),
            ..config
        };
        assert!(TokenService::validate_token(&token, &other).is_err());
    }
}
