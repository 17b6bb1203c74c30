//! Product table: header, one row per product on the current page, or a
//! single notice row

use leptos::prelude::*;
use catalog_core::view::{COLUMNS, DETAILS_LABEL};
use catalog_core::{CatalogStore, CatalogView, Notice, ProductRow, TableBody};
use super::ProductImage;

#[component]
pub fn ProductTable(
    catalog_view: Memo<CatalogView>,
    store: RwSignal<CatalogStore>,
) -> impl IntoView {
    let placeholder = store.with_untracked(|s| s.config().placeholder_image_url.clone());

    view! {
        <table class="product-table">
            <thead>
                <tr>
                    {COLUMNS.iter().map(|column| view! { <th>{*column}</th> }).collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody id="productBody">
                {move || match catalog_view.get().body {
                    TableBody::Notice(notice) => view! {
                        <tr class="notice-row">
                            <td colspan=COLUMNS.len().to_string() class=notice_class(notice)>
                                {notice.message()}
                            </td>
                        </tr>
                    }.into_any(),
                    TableBody::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! {
                            <ProductTableRow row=row placeholder=placeholder.clone() store=store />
                        })
                        .collect::<Vec<_>>()
                        .into_any(),
                }}
            </tbody>
        </table>
    }
}

fn notice_class(notice: Notice) -> &'static str {
    match notice {
        Notice::Loading => "notice loading",
        Notice::LoadFailed => "notice error",
        Notice::NoResults => "notice empty",
    }
}

#[component]
fn ProductTableRow(
    row: ProductRow,
    placeholder: String,
    store: RwSignal<CatalogStore>,
) -> impl IntoView {
    let id = row.id;
    let alt = row.title.clone();

    view! {
        <tr class="product-row">
            <td class="product-id">{row.id}</td>
            <td>
                <div class="img-container">
                    {row.images
                        .into_iter()
                        .map(|src| view! {
                            <ProductImage src=src alt=alt.clone() placeholder=placeholder.clone() />
                        })
                        .collect::<Vec<_>>()}
                </div>
            </td>
            <td class="product-title">{row.title}</td>
            <td class="product-price">{row.price_label}</td>
            <td class="product-category">{row.category}</td>
            <td>
                <button
                    class="details-btn"
                    on:click=move |_| store.update(|s| s.request_details(id))
                >
                    {DETAILS_LABEL}
                </button>
            </td>
        </tr>
    }
}
