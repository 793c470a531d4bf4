use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{PROJECTS_CARDS, PROJECTS_HEADING, PROJECTS_STATUS};
use crate::route::Page;

use super::actions::CallToAction;
use super::cards::{CardGroupList, StatusBadge};
use super::layout::{PageFrame, Reveal, SectionHeading};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let [projects, products] = PROJECTS_CARDS;

    view! {
        <Title text=Page::Projects.title() />
        <PageFrame>
            <Reveal index=0>
                <StatusBadge status=PROJECTS_STATUS />
            </Reveal>
            <Reveal index=1 class="space-y-4">
                <h1 class="text-4xl md:text-5xl font-bold text-foreground">{PROJECTS_HEADING}</h1>
                <p class="text-lg text-muted-foreground leading-relaxed">
                    "Discover my portfolio, where purposeful interfaces meet captivating design. My work strives to enhance experiences and inspire."
                </p>
            </Reveal>
            <Reveal index=2 class="space-y-4">
                <CardGroupList group=projects />
            </Reveal>
            <Reveal index=3 class="space-y-4">
                <h2 class="text-2xl font-bold text-foreground">"Explore My Products"</h2>
                <p class="text-muted-foreground">
                    "Some of the digital products that I worked on as side projects, explore them now"
                </p>
                <div class="space-y-4">
                    <SectionHeading>"Products"</SectionHeading>
                    <CardGroupList group=products />
                </div>
            </Reveal>
            <CallToAction index=4 />
        </PageFrame>
    }
}
