use leptos::prelude::*;

use crate::content::{COPYRIGHT, CREDITS, SOCIAL_LINKS};
use crate::motion::{delay_style, FOOTER_DELAY};

use super::icons::Glyph;
use super::layout::SectionHeading;

#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <div class="flex gap-3">
            {SOCIAL_LINKS
                .iter()
                .map(|social| {
                    view! {
                        <a
                            href=social.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="social-link"
                            aria-label=social.label
                        >
                            <Glyph tag=social.icon class="w-5 h-5" />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let credits = CREDITS
        .iter()
        .enumerate()
        .map(|(i, credit)| {
            view! {
                {(i > 0).then_some(" // ")}
                <a
                    href=credit.href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="hover:text-foreground transition-colors focus-visible:ring-2 focus-visible:ring-ring rounded"
                >
                    {credit.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="border-t border-border mt-16 bg-background text-foreground">
            <div class="max-w-2xl mx-auto px-6 py-12">
                <div class="reveal space-y-8" style=delay_style(FOOTER_DELAY)>
                    <div class="space-y-4">
                        <SectionHeading>"Follow Me"</SectionHeading>
                        <SocialLinks />
                    </div>
                    <div class="pt-8 border-t border-border text-center space-y-2">
                        <p class="text-sm text-muted-foreground">{COPYRIGHT}</p>
                        <p class="text-xs text-muted-foreground">"by " {credits}</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
