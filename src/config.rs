use std::env;

use jsonwebtoken::Algorithm;

use crate::{Error, Result};

#[derive(Clone, Debug)]
pub struct DbConfig {
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Settings for verifying tokens issued by the identity provider.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: String,
    pub audience: String,
    pub jwt_algorithm: Algorithm,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db: DbConfig,
    pub auth: AuthConfig,
    pub bind_host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::MissingEnvVar {
                    name: name.to_string(),
                })
        };

        let db = DbConfig {
            url: required("DB_URL")?,
            namespace: lookup("DB_NS").unwrap_or_else(|| "songbook".to_string()),
            database: lookup("DB_NAME").unwrap_or_else(|| "catalog".to_string()),
            username: lookup("DB_USER"),
            password: lookup("DB_PASSWORD"),
        };

        let issuer = required("IDENTITY_ISSUER")?;
        let auth = AuthConfig {
            jwt_secret: required("JWT_SECRET")?,
            audience: lookup("IDENTITY_AUDIENCE").unwrap_or_else(|| issuer.clone()),
            issuer,
            jwt_algorithm: Algorithm::HS256,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| Error::InvalidConfig {
                reason: format!("PORT must be a port number, got '{raw}'"),
            })?,
            None => 8080,
        };

        Ok(Self {
            db,
            auth,
            bind_host: lookup("BIND_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
        })
    }
}
