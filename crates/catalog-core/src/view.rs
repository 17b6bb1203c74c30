//! Plain-data view model for the product table and pagination strip
//!
//! The frontend turns these into DOM; nothing here knows about the browser.

use std::fmt;

use crate::images::normalize_images;
use crate::model::Product;
use crate::store::PageAction;

/// Table column headers, in display order
pub const COLUMNS: [&str; 6] = ["ID", "Images", "Title", "Price", "Category", "Actions"];

/// Label of the per-row detail button
pub const DETAILS_LABEL: &str = "Details";

/// Everything needed to draw one state of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub body: TableBody,
    /// `None` when there are zero or one pages
    pub pagination: Option<PaginationBar>,
    pub summary: Option<ResultSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<ProductRow>),
    /// A single informational row spanning all columns
    Notice(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Loading,
    LoadFailed,
    NoResults,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Loading => "Loading products...",
            Notice::LoadFailed => "Unable to load products.",
            Notice::NoResults => "No products found.",
        }
    }
}

/// One table row, with images already normalized
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub images: Vec<String>,
    pub price_label: String,
    pub category: String,
}

impl ProductRow {
    pub fn from_product(product: &Product, placeholder: &str) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            images: normalize_images(&product.images, placeholder),
            price_label: product.price_label(),
            category: product.category_name().to_string(),
        }
    }
}

/// Previous / numbered / next controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBar {
    pub previous: NavControl,
    pub pages: Vec<PageButton>,
    pub next: NavControl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    pub label: &'static str,
    pub enabled: bool,
    pub action: PageAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub current: bool,
}

impl PageButton {
    pub fn action(&self) -> PageAction {
        PageAction::Page(self.number)
    }
}

impl PaginationBar {
    /// Controls for `total_pages` pages with `current` marked. No bar for a
    /// single page or none.
    pub fn new(current: usize, total_pages: usize) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        Some(Self {
            previous: NavControl {
                label: "Previous",
                enabled: current > 1,
                action: PageAction::Previous,
            },
            pages: (1..=total_pages)
                .map(|number| PageButton {
                    number,
                    current: number == current,
                })
                .collect(),
            next: NavControl {
                label: "Next",
                enabled: current < total_pages,
                action: PageAction::Next,
            },
        })
    }
}

/// 1-based positions of the visible rows within the filtered set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl ResultSummary {
    /// `None` when the page shows nothing
    pub fn new(page: usize, shown: usize, page_size: usize, total: usize) -> Option<Self> {
        if shown == 0 || page == 0 {
            return None;
        }
        let first = (page - 1) * page_size + 1;
        Some(Self {
            first,
            last: first + shown - 1,
            total,
        })
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.total == 1 { "product" } else { "products" };
        write!(f, "Showing {}–{} of {} {}", self.first, self.last, self.total, noun)
    }
}
