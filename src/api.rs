//! Catalog data source
//!
//! The app makes exactly one request: a GET of the whole product collection
//! at startup. No parameters, no authentication, no retry.

use catalog_core::{parse_products, CatalogError, Product, Result};
use gloo_net::http::Request;

/// Fetch and decode every product from `url`
pub async fn fetch_products(url: &str) -> Result<Vec<Product>> {
    tracing::info!(url, "fetching catalog");

    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogError::HttpStatus(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;

    parse_products(&body)
}
