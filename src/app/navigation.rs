use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use crate::content::{NavItem, NAV_ITEMS};
use crate::route::{select_view, Page, View};
use crate::theme::use_theme;

use super::icons::Glyph;

#[component]
pub fn Navigation() -> impl IntoView {
    let theme = use_theme();
    let pathname = use_location().pathname;
    let is_active = move |page: Page| select_view(&pathname.get()) == View::Page(page);

    view! {
        <div class="fixed top-6 left-1/2 -translate-x-1/2 z-50 w-[calc(100%-2rem)] sm:w-auto">
            <nav class="nav-container nav-enter rounded-2xl px-4 sm:px-6 py-3" aria-label="Main">
                <div class="flex items-center justify-between sm:justify-start gap-4 sm:gap-6">
                    <div class="flex items-center gap-2 sm:gap-4">
                        {NAV_ITEMS
                            .iter()
                            .map(|&item| {
                                let NavItem { page, icon } = item;
                                let label = item.label();
                                view! {
                                    <A
                                        href=item.path()
                                        exact=true
                                        attr:class=move || {
                                            if is_active(page) {
                                                "nav-link bg-primary text-primary-foreground"
                                            } else {
                                                "nav-link hover:bg-accent"
                                            }
                                        }
                                        attr:title=label
                                    >
                                        <Glyph tag=icon />
                                        <span class="sr-only">{label}</span>
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        type="button"
                        class="nav-link hover:bg-accent"
                        aria-label="Toggle theme"
                        aria-pressed=move || theme.theme().is_dark().to_string()
                        on:click=move |_| theme.toggle()
                    >
                        {move || view! { <Glyph tag=theme.theme().toggle_icon() /> }}
                    </button>
                    <A href=Page::Contact.path() attr:class="hire-button whitespace-nowrap">
                        "Hire Me"
                    </A>
                </div>
            </nav>
        </div>
    }
}
