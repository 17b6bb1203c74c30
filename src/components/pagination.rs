use leptos::prelude::*;
use catalog_core::{CatalogStore, CatalogView, PageAction};

/// Previous / page numbers / next. Renders nothing for a single page.
#[component]
pub fn Pagination(
    catalog_view: Memo<CatalogView>,
    store: RwSignal<CatalogStore>,
) -> impl IntoView {
    let go = move |action: PageAction| {
        store.update(|s| {
            if s.go_to(action) {
                tracing::debug!(page = s.view_state().page(), "page changed");
            }
        });
    };

    view! {
        <nav id="pagination" class="pagination">
            {move || catalog_view.get().pagination.map(|bar| {
                let previous = bar.previous;
                let next = bar.next;
                view! {
                    <button
                        class="page-nav"
                        disabled={!previous.enabled}
                        on:click=move |_| go(previous.action)
                    >
                        {previous.label}
                    </button>
                    {bar.pages
                        .into_iter()
                        .map(|page| {
                            let action = page.action();
                            view! {
                                <button
                                    class="page-btn"
                                    class:active=page.current
                                    on:click=move |_| go(action)
                                >
                                    {page.number}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <button
                        class="page-nav"
                        disabled={!next.enabled}
                        on:click=move |_| go(next.action)
                    >
                        {next.label}
                    </button>
                }
            })}
        </nav>
    }
}
