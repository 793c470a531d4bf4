use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::content::Status;
use crate::route::Page;

use super::cards::StatusBadge;
use super::layout::{PageFrame, Reveal};

const NOT_FOUND_STATUS: Status = Status {
    label: "404",
    available: false,
};

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page not found" />
        <PageFrame>
            <Reveal index=0>
                <StatusBadge status=NOT_FOUND_STATUS />
            </Reveal>
            <Reveal index=1 class="space-y-4">
                <h1 class="text-4xl md:text-5xl font-bold text-foreground">"Page not found."</h1>
                <p class="text-lg text-muted-foreground leading-relaxed">
                    "There's nothing at this address."
                </p>
                <A href=Page::Home.path() attr:class="hire-button inline-block">
                    "Back to Home"
                </A>
            </Reveal>
        </PageFrame>
    }
}
