use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::CONTACT_EMAIL;
use crate::content::{CONTACT_STATUS, CTA_BLURB, CTA_HEADING};
use crate::route::Page;

use super::actions::ActionButtons;
use super::cards::StatusBadge;
use super::footer::SocialLinks;
use super::layout::{PageFrame, Reveal, SectionHeading};

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text=Page::Contact.title() />
        <PageFrame>
            <Reveal index=0>
                <StatusBadge status=CONTACT_STATUS />
            </Reveal>
            <Reveal index=1 class="space-y-4">
                <h1 class="text-4xl md:text-5xl font-bold text-foreground">{CTA_HEADING}</h1>
                <p class="text-lg text-muted-foreground leading-relaxed">{CTA_BLURB}</p>
            </Reveal>
            <Reveal index=2 class="space-y-4">
                <SectionHeading>"Email"</SectionHeading>
                <a
                    href=format!("mailto:{CONTACT_EMAIL}")
                    class="text-xl font-medium text-foreground underline-offset-4 hover:underline"
                >
                    {CONTACT_EMAIL}
                </a>
                <ActionButtons />
            </Reveal>
            <Reveal index=3 class="space-y-4">
                <SectionHeading>"Elsewhere"</SectionHeading>
                <SocialLinks />
            </Reveal>
        </PageFrame>
    }
}
