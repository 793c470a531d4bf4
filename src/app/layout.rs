use leptos::prelude::*;

use crate::motion::entrance_style;

/// Column every page renders into; fades in as a whole while its blocks stagger.
#[component]
pub fn PageFrame(children: Children) -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto px-6 pt-28 pb-16">
            <div class="page-enter space-y-8">{children()}</div>
        </div>
    }
}

/// A block that slides up into place, `index` positions in the stagger order.
#[component]
pub fn Reveal(
    index: usize,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("reveal {class}") style=entrance_style(index)>
            {children()}
        </div>
    }
}

#[component]
pub fn SectionHeading(children: Children) -> impl IntoView {
    view! {
        <h2 class="text-lg font-semibold text-foreground flex items-center gap-2">
            <span class="w-2 h-2 bg-success rounded-full" aria-hidden="true"></span>
            {children()}
        </h2>
    }
}
