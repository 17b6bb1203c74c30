//! Query pipeline: filter → sort → paginate
//!
//! All functions are pure and recompute from their input every time. The
//! store calls them in that fixed order on each render.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

use crate::error::CatalogError;
use crate::model::Product;

/// Ordering applied to the filtered products
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Keep the order the API returned
    #[default]
    Unsorted,
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Unsorted,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::TitleAsc,
            SortKey::TitleDesc,
        ]
    }

    /// Value used for the `<option>` element
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Unsorted => "none",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Unsorted => "Default order",
            SortKey::PriceAsc => "Price: low to high",
            SortKey::PriceDesc => "Price: high to low",
            SortKey::TitleAsc => "Title: A to Z",
            SortKey::TitleDesc => "Title: Z to A",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownSortKey(s.to_string()))
    }
}

/// Search, sort and paging configuration driving the current render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub(crate) search_term: String,
    pub(crate) sort_key: SortKey,
    pub(crate) page: usize,
    pub(crate) page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort_key: SortKey::default(),
            page: 1,
            page_size,
        }
    }

    /// Lowercased search term
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Current page, 1-indexed
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// Indices of products whose title contains `term`, case-insensitively.
/// An empty term matches everything.
pub fn filter_indices(products: &[Product], term: &str) -> Vec<usize> {
    let term = term.to_lowercase();
    products
        .iter()
        .enumerate()
        .filter(|(_, product)| term.is_empty() || product.title.to_lowercase().contains(&term))
        .map(|(index, _)| index)
        .collect()
}

pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    filter_indices(products, term)
        .into_iter()
        .map(|index| &products[index])
        .collect()
}

/// Stable sort over a copy of `products`
pub fn sort_products<'a>(products: &[&'a Product], key: SortKey) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::Unsorted => {}
        SortKey::PriceAsc => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::TitleAsc => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortKey::TitleDesc => sorted.sort_by(|a, b| compare_titles(&b.title, &a.title)),
    }
    sorted
}

/// Root-locale collator with compiled-in data, built on first use
static TITLE_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    match Collator::try_new(Default::default(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(error) => {
            tracing::warn!(%error, "title collator unavailable, falling back to case-folded order");
            None
        }
    }
});

/// Locale-aware title order: accents sort with their base letter and, for
/// titles differing only in case, lowercase comes first. Collation ties fall
/// back to the raw strings so distinct titles never compare equal.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let collated = match TITLE_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase)),
    };
    collated.then_with(|| a.cmp(b))
}

/// Items `[(page - 1) * size, page * size)`. Out of range pages (including 0)
/// give an empty slice.
pub fn paginate<T>(items: &[T], page: usize, size: usize) -> &[T] {
    if page == 0 || size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}
