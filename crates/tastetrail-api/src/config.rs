use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use eyre::WrapErr;

use tastetrail_auth::password::DEFAULT_COST;
use tastetrail_core::models::user::normalize_email;

const DEFAULT_JWT_SECRET: &str = "secret";

/// Which backend holds the documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Local { data_dir: PathBuf },
    S3 { bucket: String },
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub port: u16,
    pub storage: StorageConfig,
    pub jwt_secret: String,
    pub token_ttl_hours: u32,
    pub bcrypt_cost: u32,
    /// Normalized emails that register with the admin role.
    pub admin_emails: Vec<String>,
    pub seed: bool,
}

impl AppConfig {
    /// Defaults for a local store rooted at `data_dir`.
    pub fn local(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 5001,
            storage: StorageConfig::Local {
                data_dir: data_dir.into(),
            },
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: DEFAULT_COST,
            admin_emails: Vec::new(),
            seed: true,
        }
    }

    pub fn from_env() -> eyre::Result<Self> {
        let data_dir = env::var("TASTETRAIL_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        let mut config = Self::local(data_dir);

        config.bind = env::var("TASTETRAIL_BIND").unwrap_or(config.bind);
        config.port = parse_var("PORT", config.port)?;

        match env::var("TASTETRAIL_STORAGE").as_deref() {
            Ok("s3") => {
                config.storage = StorageConfig::S3 {
                    bucket: env::var("TASTETRAIL_BUCKET")
                        .unwrap_or_else(|_| "tastetrail".to_string()),
                };
            }
            Ok("local") | Err(_) => {}
            Ok(other) => eyre::bail!("TASTETRAIL_STORAGE must be `local` or `s3`, got `{other}`"),
        }

        match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => config.jwt_secret = secret,
            _ => tracing::warn!("JWT_SECRET not set, using the built-in development secret"),
        }

        config.token_ttl_hours = parse_var("TOKEN_TTL_HOURS", config.token_ttl_hours)?;
        config.bcrypt_cost = parse_var("BCRYPT_COST", config.bcrypt_cost)?;
        config.seed = parse_var("TASTETRAIL_SEED", config.seed)?;

        if let Ok(emails) = env::var("TASTETRAIL_ADMIN_EMAILS") {
            config.admin_emails = parse_email_list(&emails);
        }

        Ok(config)
    }

    pub fn is_admin_email(&self, email: &str) -> bool {
        let email = normalize_email(email);
        self.admin_emails.iter().any(|e| *e == email)
    }
}

fn parse_var<T>(name: &str, default: T) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("invalid value for {name}: `{raw}`")),
        Err(_) => Ok(default),
    }
}

/// Split a comma-separated list, dropping blanks.
pub fn parse_email_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_email)
        .filter(|e| !e.is_empty())
        .collect()
}
