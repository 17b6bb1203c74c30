//! Catalog item types and decoding of the endpoint's response body

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Product category as embedded in each item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A catalog entry. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    /// Raw image references exactly as the API sent them. Usually an array of
    /// URLs, but entries can be JSON-encoded arrays with stray brackets and
    /// quotes, and the field itself can be missing or not an array at all.
    #[serde(default)]
    pub images: Value,
}

/// Treat an explicit `null` like a missing key. One item with a null field
/// must not fail the whole catalog.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }

    /// Price with a leading dollar sign; integral prices have no fractional part
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

/// Decode the catalog endpoint's body (a JSON array of products)
pub fn parse_products(body: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(body)?;
    tracing::debug!(count = products.len(), "decoded catalog");
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    const SAMPLE: &str = r#"[
        {
            "id": 4,
            "title": "Handmade Fresh Table",
            "slug": "handmade-fresh-table",
            "price": 687,
            "description": "Andy shoes are designed to keeping in mind durability",
            "category": {"id": 5, "name": "Others", "slug": "others"},
            "images": ["https://placeimg.com/640/480/any"]
        },
        {
            "id": 7,
            "title": "Classic Red Pullover Hoodie",
            "price": 10.5,
            "category": {"id": 1, "name": "Clothes"},
            "images": ["[\"https://i.imgur.com/1twoaDy.jpeg\"", "\"https://i.imgur.com/FDwQgLy.jpeg\"]"]
        }
    ]"#;

    #[test]
    fn test_parse_products() {
        let products = parse_products(SAMPLE).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 4);
        assert_eq!(products[0].title, "Handmade Fresh Table");
        assert_eq!(products[0].category_name(), "Others");
        assert!(products[0].images.is_array());
        assert_eq!(products[1].images.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_missing_optional_fields() {
        let products = parse_products(r#"[{"id": 1}]"#).unwrap();
        let product = &products[0];
        assert_eq!(product.title, "");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.category_name(), "");
        assert!(product.images.is_null());
    }

    #[test]
    fn test_null_fields_do_not_fail_the_catalog() {
        let products = parse_products(
            r#"[
                {"id": 1, "title": "Apple", "price": 10, "category": {"name": "Fruit"}, "images": []},
                {"id": 2, "title": null, "price": null, "category": {"id": 3, "name": null}, "images": null},
                {"id": 3, "title": "Cherry", "price": 2, "category": null, "description": null}
            ]"#,
        )
        .unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[1].title, "");
        assert_eq!(products[1].price, 0.0);
        assert_eq!(products[1].category_name(), "");
        assert!(products[1].images.is_null());
        assert_eq!(products[2].category_name(), "");
    }

    #[test]
    fn test_price_label() {
        let products = parse_products(SAMPLE).unwrap();
        assert_eq!(products[0].price_label(), "$687");
        assert_eq!(products[1].price_label(), "$10.5");
    }

    #[test]
    fn test_non_array_body_is_decode_error() {
        let err = parse_products(r#"{"statusCode": 500, "message": "Internal server error"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));

        let err = parse_products("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
