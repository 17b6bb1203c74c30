//! Catalog store: the one owner of fetched items and view state
//!
//! The full product set is written once by [`CatalogStore::load`] and never
//! mutated after that. Every user interaction goes through one of the
//! mutation methods below, then [`CatalogStore::view`] re-derives what to
//! draw from scratch.

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::model::Product;
use crate::query::{self, SortKey, ViewState};
use crate::view::{CatalogView, Notice, PaginationBar, ProductRow, ResultSummary, TableBody};

/// Progress of the single startup fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// A click on one of the pagination controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Previous,
    Next,
    Page(usize),
}

#[derive(Debug, Clone)]
pub struct CatalogStore {
    config: CatalogConfig,
    products: Vec<Product>,
    /// Indices into `products` matching the current search term, in fetch order
    filtered: Vec<usize>,
    view: ViewState,
    load_state: LoadState,
    detail_request: Option<i64>,
}

impl CatalogStore {
    pub fn new(config: CatalogConfig) -> Self {
        let view = ViewState::new(config.default_page_size);
        Self {
            config,
            products: Vec::new(),
            filtered: Vec::new(),
            view,
            load_state: LoadState::Loading,
            detail_request: None,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Id of the product whose details were last requested
    pub fn detail_request(&self) -> Option<i64> {
        self.detail_request
    }

    /// Install the fetched product set
    pub fn load(&mut self, products: Vec<Product>) {
        tracing::info!(count = products.len(), "catalog loaded");
        self.products = products;
        self.filtered = query::filter_indices(&self.products, &self.view.search_term);
        self.load_state = LoadState::Ready;
    }

    /// Record a failed fetch. The table shows a notice row from now on.
    pub fn fail(&mut self, error: &CatalogError) {
        tracing::error!(%error, "failed to fetch catalog");
        self.load_state = LoadState::Failed(error.to_string());
    }

    /// New search term; resets to page 1
    pub fn set_search(&mut self, term: &str) {
        self.view.search_term = term.to_lowercase();
        self.filtered = query::filter_indices(&self.products, &self.view.search_term);
        self.view.page = 1;
        tracing::debug!(term = %self.view.search_term, matches = self.filtered.len(), "search updated");
    }

    /// New sort order; the current page is kept
    pub fn set_sort(&mut self, key: SortKey) {
        self.view.sort_key = key;
        tracing::debug!(sort = %key, "sort updated");
    }

    /// New page size; resets to page 1. Sizes not offered by the config are rejected.
    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        if !self.config.is_allowed_page_size(size) {
            return Err(CatalogError::InvalidPageSize(size));
        }
        self.view.page_size = size;
        self.view.page = 1;
        tracing::debug!(size, "page size updated");
        Ok(())
    }

    /// Apply a pagination click. Returns whether the page changed.
    ///
    /// Previous and next stop at the first and last page, like their disabled
    /// buttons. A numbered page is taken as-is; a page past the end simply
    /// renders empty.
    pub fn go_to(&mut self, action: PageAction) -> bool {
        let current = self.view.page;
        let target = match action {
            PageAction::Previous if current > 1 => current - 1,
            PageAction::Next if current < self.total_pages() => current + 1,
            PageAction::Page(page) if page >= 1 => page,
            _ => current,
        };
        self.view.page = target;
        target != current
    }

    /// Detail view placeholder: remembers the id, no navigation
    pub fn request_details(&mut self, id: i64) {
        tracing::info!(product_id = id, "product details requested");
        self.detail_request = Some(id);
    }

    pub fn filtered_products(&self) -> Vec<&Product> {
        self.filtered.iter().map(|&index| &self.products[index]).collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        query::total_pages(self.filtered.len(), self.view.page_size)
    }

    /// Run filter → sort → paginate and build the view model
    pub fn view(&self) -> CatalogView {
        match self.load_state {
            LoadState::Loading => return Self::notice(Notice::Loading),
            LoadState::Failed(_) => return Self::notice(Notice::LoadFailed),
            LoadState::Ready => {}
        }

        let sorted = query::sort_products(&self.filtered_products(), self.view.sort_key);
        let page_items = query::paginate(&sorted, self.view.page, self.view.page_size);

        let body = if page_items.is_empty() {
            TableBody::Notice(Notice::NoResults)
        } else {
            let placeholder = &self.config.placeholder_image_url;
            TableBody::Rows(
                page_items
                    .iter()
                    .map(|product| ProductRow::from_product(product, placeholder))
                    .collect(),
            )
        };

        CatalogView {
            body,
            pagination: PaginationBar::new(self.view.page, self.total_pages()),
            summary: ResultSummary::new(
                self.view.page,
                page_items.len(),
                self.view.page_size,
                sorted.len(),
            ),
        }
    }

    fn notice(notice: Notice) -> CatalogView {
        CatalogView {
            body: TableBody::Notice(notice),
            pagination: None,
            summary: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fruit_store() -> CatalogStore {
        let products = crate::model::parse_products(
            &json!([
                {"id": 1, "title": "Apple", "price": 10, "category": {"name": "Fruit"}, "images": []},
                {"id": 2, "title": "Banana", "price": 5, "category": {"name": "Fruit"},
                 "images": ["[\"http://a.png\",\"http://b.png\"]"]}
            ])
            .to_string(),
        )
        .unwrap();
        let config = CatalogConfig {
            page_sizes: vec![1, 5, 10, 20],
            ..CatalogConfig::default()
        };
        let mut store = CatalogStore::new(config);
        store.load(products);
        store
    }

    fn row_titles(view: &CatalogView) -> Vec<String> {
        match &view.body {
            TableBody::Rows(rows) => rows.iter().map(|r| r.title.clone()).collect(),
            TableBody::Notice(_) => Vec::new(),
        }
    }

    #[test]
    fn test_loading_and_failed_states() {
        let mut store = CatalogStore::new(CatalogConfig::default());
        assert_eq!(store.view().body, TableBody::Notice(Notice::Loading));

        store.fail(&CatalogError::HttpStatus(500));
        assert_eq!(store.load_state(), &LoadState::Failed("HTTP error: 500".to_string()));
        let view = store.view();
        assert_eq!(view.body, TableBody::Notice(Notice::LoadFailed));
        assert!(view.pagination.is_none());
        assert!(view.summary.is_none());
    }

    #[test]
    fn test_price_ascending_order() {
        let mut store = fruit_store();
        store.set_sort(SortKey::PriceAsc);
        assert_eq!(row_titles(&store.view()), vec!["Banana", "Apple"]);
    }

    #[test]
    fn test_search_hides_pagination() {
        let mut store = fruit_store();
        store.set_search("ban");
        let view = store.view();
        assert_eq!(row_titles(&view), vec!["Banana"]);
        assert_eq!(store.total_pages(), 1);
        assert!(view.pagination.is_none());
    }

    #[test]
    fn test_search_with_no_matches_shows_notice() {
        let mut store = fruit_store();
        store.set_search("kiwi");
        assert_eq!(store.view().body, TableBody::Notice(Notice::NoResults));
    }

    #[test]
    fn test_paging_with_next() {
        let mut store = fruit_store();
        store.set_page_size(1).unwrap();

        let view = store.view();
        assert_eq!(row_titles(&view), vec!["Apple"]);
        let bar = view.pagination.unwrap();
        assert!(!bar.previous.enabled);
        assert!(bar.next.enabled);

        assert!(store.go_to(bar.next.action));
        let view = store.view();
        assert_eq!(row_titles(&view), vec!["Banana"]);
        let bar = view.pagination.unwrap();
        assert!(bar.previous.enabled);
        assert!(!bar.next.enabled);
        assert!(bar.pages[1].current);

        // Disabled next does nothing
        assert!(!store.go_to(PageAction::Next));
        assert_eq!(store.view_state().page(), 2);
    }

    #[test]
    fn test_search_and_page_size_reset_page_but_sort_does_not() {
        let mut store = fruit_store();
        store.set_page_size(1).unwrap();
        store.go_to(PageAction::Page(2));

        store.set_sort(SortKey::TitleDesc);
        assert_eq!(store.view_state().page(), 2);
        assert_eq!(row_titles(&store.view()), vec!["Apple"]);

        store.set_search("");
        assert_eq!(store.view_state().page(), 1);

        store.go_to(PageAction::Page(2));
        store.set_page_size(5).unwrap();
        assert_eq!(store.view_state().page(), 1);
    }

    #[test]
    fn test_invalid_page_size_rejected() {
        let mut store = fruit_store();
        let err = store.set_page_size(3).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPageSize(3)));
        assert_eq!(store.view_state().page_size(), 10);
    }

    #[test]
    fn test_out_of_range_page_renders_empty() {
        let mut store = fruit_store();
        assert!(store.go_to(PageAction::Page(7)));
        let view = store.view();
        assert_eq!(view.body, TableBody::Notice(Notice::NoResults));
        assert!(view.summary.is_none());
        assert!(!store.go_to(PageAction::Page(0)));
    }

    #[test]
    fn test_rows_have_normalized_images() {
        let store = fruit_store();
        let view = store.view();
        let TableBody::Rows(rows) = view.body else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].images, vec![store.config().placeholder_image_url.clone()]);
        assert_eq!(rows[1].images, vec!["http://a.png", "http://b.png"]);
        assert_eq!(rows[1].price_label, "$5");
    }

    #[test]
    fn test_search_term_survives_late_load() {
        let mut store = CatalogStore::new(CatalogConfig::default());
        store.set_search("APP");
        store.load(fruit_store().products().to_vec());
        assert_eq!(store.view_state().search_term(), "app");
        assert_eq!(store.filtered_count(), 1);
    }

    #[test]
    fn test_full_set_is_never_mutated() {
        let mut store = fruit_store();
        let before = store.products().to_vec();
        store.set_search("ban");
        store.set_sort(SortKey::TitleDesc);
        let _ = store.view();
        assert_eq!(store.products(), before.as_slice());
    }

    #[test]
    fn test_detail_request_recorded() {
        let mut store = fruit_store();
        assert_eq!(store.detail_request(), None);
        store.request_details(2);
        assert_eq!(store.detail_request(), Some(2));
    }

    #[test]
    fn test_summary_counts() {
        let store = fruit_store();
        let summary = store.view().summary.unwrap();
        assert_eq!(summary.to_string(), "Showing 1–2 of 2 products");
    }
}
