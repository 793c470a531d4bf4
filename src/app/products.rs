use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{FEATURED_TEMPLATE, PRODUCTS_CARDS, PRODUCTS_HEADING, PRODUCTS_STATUS};
use crate::route::Page;

use super::actions::CallToAction;
use super::cards::{CardGroupList, StatusBadge};
use super::layout::{PageFrame, Reveal, SectionHeading};

#[component]
pub fn ProductsPage() -> impl IntoView {
    let [templates, more_templates] = PRODUCTS_CARDS;

    view! {
        <Title text=Page::Products.title() />
        <PageFrame>
            <Reveal index=0>
                <StatusBadge status=PRODUCTS_STATUS />
            </Reveal>
            <Reveal index=1 class="space-y-4">
                <h1 class="text-4xl md:text-5xl font-bold text-foreground">{PRODUCTS_HEADING}</h1>
                <p class="text-lg text-muted-foreground leading-relaxed">
                    "Some of the digital products that I worked on as side projects, explore and try it now"
                </p>
            </Reveal>
            <Reveal index=2 class="space-y-6">
                <SectionHeading>"Products"</SectionHeading>
                <CardGroupList group=templates class="space-y-4" />
            </Reveal>
            <Reveal index=3 class="space-y-4">
                <h3 class="text-xl font-semibold text-foreground">"More Templates & Tools"</h3>
                <CardGroupList group=more_templates class="space-y-4" />
            </Reveal>
            <Reveal
                index=4
                class="bg-card border border-border rounded-2xl p-6 text-center space-y-4"
            >
                <h3 class="text-xl font-semibold text-card-foreground">"🚀 Featured Template"</h3>
                <p class="text-muted-foreground">
                    {format!("\"{}\" - {}", FEATURED_TEMPLATE.title, FEATURED_TEMPLATE.blurb)}
                </p>
                <a
                    href=FEATURED_TEMPLATE.href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-block hire-button"
                >
                    "View Template"
                </a>
            </Reveal>
            <CallToAction index=5 />
        </PageFrame>
    }
}
