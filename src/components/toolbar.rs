use leptos::prelude::*;
use catalog_core::{CatalogStore, SortKey};

/// Search box, sort selector and page size selector
#[component]
pub fn Toolbar(store: RwSignal<CatalogStore>) -> impl IntoView {
    // Raw input text; the store keeps the lowercased term
    let (search_text, set_search_text) = signal(String::new());
    let page_sizes = store.with_untracked(|s| s.config().page_sizes.clone());

    let on_search = move |text: String| {
        store.update(|s| s.set_search(&text));
        set_search_text.set(text);
    };

    view! {
        <header class="toolbar">
            <div class="toolbar-left">
                <h1 class="app-title">"Products"</h1>
            </div>
            <div class="toolbar-center">
                <div class="search-box">
                    <input
                        id="searchInput"
                        type="text"
                        placeholder="Search by title..."
                        prop:value=move || search_text.get()
                        on:input=move |ev| on_search(event_target_value(&ev))
                    />
                    <Show when=move || !search_text.get().is_empty()>
                        <button
                            class="search-clear"
                            on:click=move |_| on_search(String::new())
                            title="Clear search"
                        >
                            "×"
                        </button>
                    </Show>
                </div>
            </div>
            <div class="toolbar-right">
                <select
                    id="sortSelect"
                    class="sort-dropdown"
                    prop:value=move || store.with(|s| s.view_state().sort_key().as_str())
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<SortKey>() {
                            Ok(key) => store.update(|s| s.set_sort(key)),
                            Err(e) => tracing::warn!(error = %e, "ignoring sort selection"),
                        }
                    }
                >
                    {SortKey::all()
                        .iter()
                        .map(|key| view! { <option value=key.as_str()>{key.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    id="limitSelect"
                    class="limit-dropdown"
                    prop:value=move || store.with(|s| s.view_state().page_size().to_string())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        match value.parse::<usize>() {
                            Ok(size) => store.update(|s| {
                                if let Err(e) = s.set_page_size(size) {
                                    tracing::warn!(error = %e, "ignoring page size selection");
                                }
                            }),
                            Err(_) => tracing::warn!(value = %value, "page size is not a number"),
                        }
                    }
                >
                    {page_sizes
                        .into_iter()
                        .map(|size| view! {
                            <option value=size.to_string()>{format!("{} / page", size)}</option>
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
        </header>
    }
}
