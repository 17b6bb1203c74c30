use leptos::prelude::*;
use leptos::task::spawn_local;
use catalog_core::{CatalogConfig, CatalogStore};
use crate::api;
use crate::components::{Pagination, ProductTable, Toolbar};

/// Default config, with the endpoint overridden by `CATALOG_API_URL` at build time
fn build_config() -> CatalogConfig {
    match option_env!("CATALOG_API_URL") {
        Some(url) if !url.is_empty() => CatalogConfig::with_api_url(url),
        _ => CatalogConfig::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Single owner of fetched products and search/sort/page state
    let store = RwSignal::new(CatalogStore::new(build_config()));

    // Load the catalog once on startup
    let api_url = store.with_untracked(|s| s.config().api_url.clone());
    spawn_local(async move {
        match api::fetch_products(&api_url).await {
            Ok(products) => store.update(|s| s.load(products)),
            Err(e) => store.update(|s| s.fail(&e)),
        }
    });

    // Re-derived from the store after every mutation
    let catalog_view = Memo::new(move |_| store.with(|s| s.view()));

    view! {
        <div class="app-container">
            <Toolbar store=store />
            <main class="catalog-content">
                <ProductTable catalog_view=catalog_view store=store />
                <div class="catalog-footer">
                    <span class="result-count">
                        {move || catalog_view.get().summary.map(|s| s.to_string())}
                    </span>
                    <Pagination catalog_view=catalog_view store=store />
                </div>
            </main>
            <footer class="build-info">
                {format!("Build {} ({})", env!("BUILD_HASH"), env!("BUILD_TIMESTAMP"))}
            </footer>
        </div>
    }
}
