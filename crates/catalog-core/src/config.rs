//! Catalog configuration
//!
//! All settings are fixed at build time. There is no runtime environment
//! configuration and nothing is persisted between sessions.

/// Endpoint returning the full product collection as a JSON array
pub const DEFAULT_API_URL: &str = "https://api.escuelajs.co/api/v1/products";

/// Image shown when a product has no usable image reference
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/50x50?text=No+Image";

/// Page sizes offered in the page-size selector
pub const PAGE_SIZES: [usize; 3] = [5, 10, 20];

/// Page size used before the user picks one
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog endpoint (single unauthenticated GET)
    pub api_url: String,
    /// Fallback image for products without valid images and for images that fail to load
    pub placeholder_image_url: String,
    /// Allowed page sizes, in display order
    pub page_sizes: Vec<usize>,
    /// Initial page size; always one of `page_sizes`
    pub default_page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            placeholder_image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            page_sizes: PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogConfig {
    /// Default configuration pointed at a different endpoint
    pub fn with_api_url(url: impl Into<String>) -> Self {
        Self {
            api_url: url.into(),
            ..Self::default()
        }
    }

    pub fn is_allowed_page_size(&self, size: usize) -> bool {
        self.page_sizes.contains(&size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.page_sizes, vec![5, 10, 20]);
        assert!(config.is_allowed_page_size(config.default_page_size));
    }

    #[test]
    fn test_with_api_url_keeps_other_defaults() {
        let config = CatalogConfig::with_api_url("http://localhost:3000/products");
        assert_eq!(config.api_url, "http://localhost:3000/products");
        assert_eq!(config.placeholder_image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(config.default_page_size, 10);
    }

    #[test]
    fn test_page_size_validation() {
        let config = CatalogConfig::default();
        assert!(config.is_allowed_page_size(5));
        assert!(config.is_allowed_page_size(20));
        assert!(!config.is_allowed_page_size(0));
        assert!(!config.is_allowed_page_size(7));
    }
}
