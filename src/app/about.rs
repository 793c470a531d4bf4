use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::PROFILE_PHOTO;
use crate::content::{ABOUT_CARDS, ABOUT_HEADING, ABOUT_STATUS};
use crate::route::Page;

use super::actions::CallToAction;
use super::cards::{CardGroupList, StatusBadge};
use super::layout::{PageFrame, Reveal};

#[component]
pub fn AboutPage() -> impl IntoView {
    let [side_projects] = ABOUT_CARDS;

    view! {
        <Title text=Page::About.title() />
        <PageFrame>
            <Reveal index=0>
                <StatusBadge status=ABOUT_STATUS />
            </Reveal>
            <Reveal index=1>
                <h1 class="text-4xl md:text-5xl font-bold text-foreground">{ABOUT_HEADING}</h1>
            </Reveal>
            <Reveal index=2 class="space-y-4">
                <p class="text-muted-foreground leading-relaxed">
                    "I'm Brian Do, a product designer with over 5 years of experience, currently residing in Jakarta, Indonesia. I have a deep passion for crafting purposeful interfaces and products. My main goal is to bridge the divide between people and technology, transforming intricate challenges into meaningful and seamless experiences."
                </p>
            </Reveal>
            <Reveal index=3 class="flex justify-center">
                <div class="hover-lift-sm">
                    <img
                        src=PROFILE_PHOTO
                        alt="Brian Do - Full Profile Photo"
                        class="w-full max-w-xs rounded-2xl object-cover"
                    />
                </div>
            </Reveal>
            <Reveal index=4 class="space-y-4">
                <h2 class="text-2xl font-bold text-foreground">"More About Me"</h2>
                <div class="space-y-4 text-muted-foreground leading-relaxed">
                    <p>
                        "Brian Do holds a bachelor's degree in Graphic Design from a prestigious university in the United States and has a relentless drive for staying up-to-date with the latest technologies and design trends. Actively involved in the design community, Brian regularly participates in diverse design conferences and meetups."
                    </p>
                    <p>
                        "When he's not immersed in design work, he finds solace in playing the guitar and exploring new coffee shops in his local area. Brian firmly believes in maintaining a healthy work-life balance, making sure to take breaks and reenergize his creativity. In his spare time, he also volunteers at a local animal shelter on weekends."
                    </p>
                </div>
            </Reveal>
            <Reveal index=5 class="space-y-4">
                <h2 class="text-2xl font-bold text-foreground">"My Side Projects"</h2>
                <p class="text-muted-foreground">
                    "I did passion side projects in the weekend, please take a look you will love it (I hope)."
                </p>
                <CardGroupList group=side_projects />
            </Reveal>
            <CallToAction index=6 />
        </PageFrame>
    }
}
