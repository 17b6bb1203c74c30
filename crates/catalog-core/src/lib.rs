//! Catalog Core - Item model, image normalization, query pipeline and view model
//!
//! Nothing in here touches the browser, so the whole data path from a fetched
//! JSON body to the rows and pagination controls on screen is testable natively.

pub mod config;
pub mod error;
pub mod images;
pub mod model;
pub mod query;
pub mod store;
pub mod view;

pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use images::normalize_images;
pub use model::{parse_products, Category, Product};
pub use query::{SortKey, ViewState};
pub use store::{CatalogStore, LoadState, PageAction};
pub use view::{
    CatalogView, NavControl, Notice, PageButton, PaginationBar, ProductRow, ResultSummary, TableBody,
};
