use crate::services::report_service::UnresolvedPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub investments_service_url: String,
    pub companies_service_url: String,
    pub exports_service_url: String,
    pub unresolved_policy: UnresolvedPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8083".to_string())
            .parse::<u16>()
            .map_err(|e| format!("invalid PORT: {}", e))?;

        let investments_service_url = std::env::var("INVESTMENTS_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:8081".to_string());
        let companies_service_url = std::env::var("COMPANIES_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:8082".to_string());
        // The export endpoint lives on the investments service unless
        // pointed elsewhere.
        let exports_service_url = std::env::var("EXPORTS_SERVICE_URL")
            .unwrap_or_else(|_| investments_service_url.clone());

        let unresolved_policy = std::env::var("UNRESOLVED_HOLDING_POLICY")
            .unwrap_or_else(|_| "fail".to_string())
            .parse::<UnresolvedPolicy>()?;

        Ok(Self {
            port,
            investments_service_url,
            companies_service_url,
            exports_service_url,
            unresolved_policy,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("INVESTMENTS_SERVICE_URL", &self.investments_service_url),
            ("COMPANIES_SERVICE_URL", &self.companies_service_url),
            ("EXPORTS_SERVICE_URL", &self.exports_service_url),
        ] {
            let parsed =
                url::Url::parse(value).map_err(|e| format!("invalid {}: {}", name, e))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(format!(
                    "invalid {}: expected an http(s) url, got scheme '{}'",
                    name,
                    parsed.scheme()
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_urls(investments: &str, companies: &str, exports: &str) -> Config {
        Config {
            port: 8083,
            investments_service_url: investments.to_string(),
            companies_service_url: companies.to_string(),
            exports_service_url: exports.to_string(),
            unresolved_policy: UnresolvedPolicy::Fail,
        }
    }

    #[test]
    fn test_validate_accepts_http_urls() {
        let config = config_with_urls(
            "http://localhost:8081",
            "http://localhost:8082",
            "http://localhost:8081",
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bare_host() {
        let config = config_with_urls("localhost:8081", "http://localhost:8082", "http://x");
        assert!(config.validate().is_err());
    }
}
