use leptos::prelude::*;

/// Product thumbnail that swaps to the placeholder once if loading fails
#[component]
pub fn ProductImage(
    src: String,
    #[prop(default = "".to_string())]
    alt: String,
    placeholder: String,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let original = src.clone();
    let current_src = move || if failed.get() { placeholder.clone() } else { src.clone() };

    view! {
        <img
            src=current_src
            alt=alt
            class="product-img"
            width="50"
            height="50"
            loading="lazy"
            // Some image hosts answer 403 when a referrer is sent
            referrerpolicy="no-referrer"
            on:error=move |_| {
                // Only once, so a broken placeholder cannot loop
                if !failed.get_untracked() {
                    tracing::debug!(src = %original, "image failed to load, using placeholder");
                    set_failed.set(true);
                }
            }
        />
    }
}
