use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::core::catalog::{default_products, Catalog};
use crate::core::eligibility::DEFAULT_WINDOW_DAYS;
use crate::domain::model::Product;
use crate::utils::error::{IntakeError, Result};
use crate::utils::validation::{
    validate_positive_number, validate_subdomain, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub ticketing: TicketingConfig,
    pub eligibility: Option<EligibilityConfig>,
    pub catalog: Option<CatalogConfig>,
}

/// Connection details for the support-ticketing system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketingConfig {
    /// Full base URL or bare subdomain of the hosted desk.
    pub base_url: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub api_token: String,
    pub timeout_seconds: Option<u64>,
}

impl TicketingConfig {
    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub window_days: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub products: Vec<Product>,
}

fn placeholder_pattern() -> Result<Regex> {
    Regex::new(r"\$\{([^}]+)\}").map_err(|e| IntakeError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| IntakeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TICKETING_API_TOKEN})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = placeholder_pattern()?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 仍含有 `${VAR}` 的憑證欄位（環境變數未設定）
    pub fn unresolved_credentials(&self) -> Result<Vec<&'static str>> {
        let re = placeholder_pattern()?;
        let fields = [
            ("ticketing.account", &self.ticketing.account),
            ("ticketing.api_token", &self.ticketing.api_token),
        ];

        Ok(fields
            .into_iter()
            .filter(|(_, value)| re.is_match(value))
            .map(|(field, _)| field)
            .collect())
    }

    pub fn window_days(&self) -> u32 {
        self.eligibility
            .as_ref()
            .and_then(|e| e.window_days)
            .unwrap_or(DEFAULT_WINDOW_DAYS)
    }

    /// 設定檔未列出產品時使用內建目錄
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(catalog) => Catalog::new(catalog.products.clone()),
            None => Catalog::new(default_products()),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        let base_url = self.ticketing.base_url.trim();
        if base_url.contains("://") {
            validate_url("ticketing.base_url", base_url)?;
        } else {
            validate_subdomain("ticketing.base_url", base_url)?;
        }

        validate_positive_number(
            "ticketing.timeout_seconds",
            self.ticketing.timeout_seconds(),
            1,
        )?;
        validate_positive_number("eligibility.window_days", u64::from(self.window_days()), 1)?;

        self.catalog()?;

        // 憑證缺漏不視為錯誤，只提醒
        if self.ticketing.account.trim().is_empty() || self.ticketing.api_token.trim().is_empty() {
            tracing::warn!("⚠️ Ticketing credentials are empty; tickets will be sent unauthenticated");
        }

        for field in self.unresolved_credentials()? {
            tracing::warn!(
                "⚠️ {} still contains an unresolved ${{VAR}} placeholder; it will be sent literally",
                field
            );
        }

        Ok(())
    }
}
