use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::core::{AppError, Result};
use crate::modules::payroll::services::{PayrollService, PayrollSettings};
use crate::modules::taxes::{BracketTaxProvider, RemoteTaxProvider, TaxProvider};

pub mod rates;
pub mod server;

pub use rates::RateSchedule;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub payroll: PayrollConfig,
    /// Present only when an external tax service is configured
    pub tax_service: Option<TaxServiceConfig>,
    pub rates: RateSchedule,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct PayrollConfig {
    pub max_concurrency: usize,
    pub tax_timeout_ms: u64,
}

#[derive(Debug, Clone)]
pub struct TaxServiceConfig {
    pub url: String,
    pub api_key: Option<String>,
}

fn parse_var<T: FromStr>(name: &str, default: &str) -> Result<T> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::configuration(format!("Invalid {}", name)))
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let rates = match env::var("PAYROLL_RATES_FILE") {
            Ok(path) => RateSchedule::from_yaml_file(path)?,
            Err(_) => RateSchedule::default(),
        };

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            payroll: PayrollConfig {
                max_concurrency: parse_var("PAYROLL_MAX_CONCURRENCY", "8")?,
                tax_timeout_ms: parse_var("TAX_TIMEOUT_MS", "2000")?,
            },
            tax_service: env::var("TAX_SERVICE_URL").ok().map(|url| TaxServiceConfig {
                url,
                api_key: env::var("TAX_SERVICE_API_KEY").ok(),
            }),
            rates,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.payroll.max_concurrency == 0 {
            return Err(AppError::configuration(
                "Payroll max concurrency must be greater than 0",
            ));
        }

        if self.payroll.tax_timeout_ms == 0 {
            return Err(AppError::configuration(
                "Tax timeout must be greater than 0",
            ));
        }

        if let Some(ref tax_service) = self.tax_service {
            if !tax_service.url.starts_with("http://") && !tax_service.url.starts_with("https://") {
                return Err(AppError::configuration(format!(
                    "TAX_SERVICE_URL must be an http(s) URL, got {}",
                    tax_service.url
                )));
            }
        }

        self.rates.contributions.validate()
    }

    pub fn payroll_settings(&self) -> PayrollSettings {
        PayrollSettings {
            max_concurrency: self.payroll.max_concurrency,
            tax_timeout: Duration::from_millis(self.payroll.tax_timeout_ms),
        }
    }

    /// Wire the payroll service with the configured tax provider
    pub fn build_payroll_service(&self) -> Result<PayrollService> {
        let settings = self.payroll_settings();
        let table = self.rates.tax_brackets.clone();

        let provider: Arc<dyn TaxProvider> = match self.tax_service {
            Some(ref tax_service) => Arc::new(RemoteTaxProvider::new(
                tax_service.url.clone(),
                tax_service.api_key.clone(),
                table,
                settings.tax_timeout,
            )?),
            None => Arc::new(BracketTaxProvider::new(table)),
        };

        Ok(PayrollService::new(
            Arc::new(self.rates.contributions.clone()),
            provider,
            settings,
        ))
    }
}
