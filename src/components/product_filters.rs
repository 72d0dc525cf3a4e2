//! Product Filters Component
//!
//! Title search box and category selector.

use leptos::prelude::*;
use shop_core::{CategoryOption, CategorySelection};

#[component]
pub fn ProductFilters(
    search: ReadSignal<String>,
    set_search: WriteSignal<String>,
    category: ReadSignal<CategorySelection>,
    set_category: WriteSignal<CategorySelection>,
    #[prop(into)] categories: Signal<Vec<CategoryOption>>,
) -> impl IntoView {
    view! {
        <div class="product-filters">
            <label class="search-field">
                <span class="search-icon">"🔍"</span>
                <input
                    type="search"
                    placeholder="Search by title"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </label>
            <label class="category-field">
                <span class="field-label">"Category"</span>
                <select
                    prop:value=move || category.get().as_value()
                    on:change=move |ev| set_category.set(CategorySelection::parse(&event_target_value(&ev)))
                >
                    <option value={CategorySelection::ALL_VALUE}>"All categories"</option>
                    <For
                        each=move || categories.get()
                        key=|option| option.id
                        children=move |option| {
                            view! {
                                <option value={option.id.to_string()}>{option.name}</option>
                            }
                        }
                    />
                </select>
            </label>
        </div>
    }
}
