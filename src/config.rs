use std::env;

// ============================================================================
// Storefront Configuration
// ============================================================================
//
// The backend base URL is the only runtime setting. Every endpoint and every
// relative image path is resolved against it.
//
// ============================================================================

/// Environment variable that overrides the backend base URL
pub const API_BASE_URL_ENV: &str = "ALBUM_API_BASE_URL";

/// Backend used when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5007";

#[derive(Clone, Debug, PartialEq)]
pub struct StorefrontConfig {
    /// Backend origin without the `/api` suffix, e.g. `http://localhost:5007`
    pub api_base_url: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url: String = api_base_url.into();
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `ALBUM_API_BASE_URL`, falling back to the default
    pub fn from_env() -> Self {
        match env::var(API_BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn endpoints(&self) -> ApiEndpoints {
        ApiEndpoints::new(self)
    }
}

// ============================================================================
// API Endpoints
// ============================================================================

/// Builds backend URLs under `{base}/api`
#[derive(Clone, Debug)]
pub struct ApiEndpoints {
    api_root: String,
}

impl ApiEndpoints {
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            api_root: format!("{}/api", config.api_base_url),
        }
    }

    fn build(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_root, endpoint)
    }

    // Auth
    pub fn login(&self) -> String {
        self.build("/login")
    }

    pub fn register(&self) -> String {
        self.build("/register")
    }

    pub fn verify(&self) -> String {
        self.build("/verify")
    }

    // Users
    pub fn users(&self) -> String {
        self.build("/users")
    }

    pub fn user_by_id(&self, id: &str) -> String {
        self.build(&format!("/users/{id}"))
    }

    // Products
    pub fn products(&self) -> String {
        self.build("/products")
    }

    pub fn product_by_id(&self, id: &str) -> String {
        self.build(&format!("/products/{id}"))
    }

    // Orders
    pub fn orders(&self) -> String {
        self.build("/orders")
    }

    pub fn order_by_id(&self, id: &str) -> String {
        self.build(&format!("/orders/{id}"))
    }

    pub fn order_status(&self, id: &str) -> String {
        self.build(&format!("/orders/{id}/status"))
    }

    pub fn my_orders(&self, user_id: &str) -> String {
        self.build(&format!("/orders/my-orders/{user_id}"))
    }

    pub fn upload(&self) -> String {
        self.build("/upload")
    }

    pub fn album_pricing(&self) -> String {
        self.build("/album/pricing")
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = StorefrontConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5007");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = StorefrontConfig::new("https://albums.example.com/");
        assert_eq!(config.api_base_url, "https://albums.example.com");
        assert_eq!(
            config.endpoints().products(),
            "https://albums.example.com/api/products"
        );
    }

    #[test]
    fn test_endpoint_paths() {
        let endpoints = StorefrontConfig::default().endpoints();

        assert_eq!(endpoints.login(), "http://localhost:5007/api/login");
        assert_eq!(endpoints.register(), "http://localhost:5007/api/register");
        assert_eq!(endpoints.verify(), "http://localhost:5007/api/verify");
        assert_eq!(endpoints.users(), "http://localhost:5007/api/users");
        assert_eq!(endpoints.user_by_id("u1"), "http://localhost:5007/api/users/u1");
        assert_eq!(endpoints.product_by_id("p9"), "http://localhost:5007/api/products/p9");
        assert_eq!(endpoints.orders(), "http://localhost:5007/api/orders");
        assert_eq!(endpoints.order_by_id("o1"), "http://localhost:5007/api/orders/o1");
        assert_eq!(
            endpoints.order_status("o1"),
            "http://localhost:5007/api/orders/o1/status"
        );
        assert_eq!(
            endpoints.my_orders("u1"),
            "http://localhost:5007/api/orders/my-orders/u1"
        );
        assert_eq!(endpoints.upload(), "http://localhost:5007/api/upload");
        assert_eq!(
            endpoints.album_pricing(),
            "http://localhost:5007/api/album/pricing"
        );
    }
}
