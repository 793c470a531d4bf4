use leptos::{prelude::*, task::spawn_local};

use crate::clipboard::{copy_email, BrowserClipboard, CopyFeedback, CopyStatus};
use crate::config::COPY_FEEDBACK;
use crate::content::{IconTag, CTA_BLURB, CTA_HEADING};

use super::icons::Glyph;
use super::layout::Reveal;

/// Visual affordance only; no destination is wired.
#[component]
pub fn HireMeButton() -> impl IntoView {
    view! {
        <button type="button" class="hire-button">
            "Hire Me"
        </button>
    }
}

#[component]
pub fn CopyEmailButton() -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::default());
    let status = move || feedback.with(CopyFeedback::status);

    let on_click = move |_| {
        spawn_local(async move {
            let res = copy_email(&BrowserClipboard).await;
            let Some(stamp) = feedback.try_update(|f| f.show(CopyStatus::from(&res))) else {
                return;
            };
            set_timeout(
                move || {
                    feedback.try_update(|f| f.expire(stamp));
                },
                COPY_FEEDBACK,
            );
        });
    };

    view! {
        <button
            type="button"
            class="copy-button flex items-center gap-2"
            class:copy-failed=move || status() == CopyStatus::Failed
            on:click=on_click
        >
            <Glyph tag=IconTag::Copy />
            <span aria-live="polite">{move || status().label()}</span>
        </button>
    }
}

#[component]
pub fn ActionButtons(#[prop(default = "flex gap-3")] class: &'static str) -> impl IntoView {
    view! {
        <div class=class>
            <HireMeButton />
            <CopyEmailButton />
        </div>
    }
}

/// Closing block every page ends with.
#[component]
pub fn CallToAction(index: usize) -> impl IntoView {
    view! {
        <Reveal index=index class="text-center space-y-6 pt-8">
            <h3 class="text-2xl font-bold text-foreground">{CTA_HEADING}</h3>
            <p class="text-muted-foreground">{CTA_BLURB}</p>
            <ActionButtons class="flex gap-3 justify-center" />
        </Reveal>
    }
}
