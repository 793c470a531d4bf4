use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::config::PROFILE_PHOTO;
use crate::content::{IconTag, HOME_CARDS, HOME_HEADING, HOME_STATUS};
use crate::route::Page;

use super::actions::{ActionButtons, CallToAction};
use super::cards::{CardGroupList, StatusBadge};
use super::icons::Glyph;
use super::layout::{PageFrame, Reveal, SectionHeading};

#[component]
pub fn HomePage() -> impl IntoView {
    let [projects, products] = HOME_CARDS;

    view! {
        <Title text=Page::Home.title() />
        <PageFrame>
            <Reveal index=0>
                <StatusBadge status=HOME_STATUS />
            </Reveal>
            <Reveal index=1 class="space-y-6">
                <div class="flex items-center justify-between gap-6">
                    <div class="space-y-4">
                        <h1 class="text-4xl md:text-5xl font-bold text-foreground">
                            {HOME_HEADING}
                        </h1>
                        <p class="text-lg text-muted-foreground leading-relaxed">
                            "Product designer from Jakarta, ID." <br />
                            "Currently designing at Rectangle."
                        </p>
                        <ActionButtons class="flex gap-3 pt-2" />
                    </div>
                    <div class="flex-shrink-0 hover-lift">
                        <img
                            src=PROFILE_PHOTO
                            alt="Brian Do - Product Designer"
                            class="w-24 h-24 md:w-28 md:h-28 rounded-full object-cover ring-4 ring-border"
                        />
                    </div>
                </div>
            </Reveal>
            <Reveal index=2 class="space-y-4">
                <div class="flex items-center justify-between">
                    <SectionHeading>"Projects"</SectionHeading>
                    <A
                        href=Page::Projects.path()
                        attr:class="text-muted-foreground hover:text-foreground transition-colors flex items-center gap-1 text-sm rounded focus-visible:ring-2 focus-visible:ring-ring"
                    >
                        "View All"
                        <Glyph tag=IconTag::ArrowRight class="w-3 h-3" />
                    </A>
                </div>
                <CardGroupList group=projects />
            </Reveal>
            <Reveal index=3 class="space-y-4">
                <SectionHeading>"Products"</SectionHeading>
                <CardGroupList group=products />
            </Reveal>
            <CallToAction index=4 />
        </PageFrame>
    }
}
