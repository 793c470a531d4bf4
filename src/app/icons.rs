use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::content::IconTag;

pub fn icon_data(tag: IconTag) -> IconData {
    match tag {
        IconTag::Home => icondata::FaHouseSolid,
        IconTag::User => icondata::FaUserSolid,
        IconTag::Projects => icondata::FaDiagramProjectSolid,
        IconTag::Cart => icondata::FaCartShoppingSolid,
        IconTag::Sun => icondata::FaSunSolid,
        IconTag::Moon => icondata::FaMoonSolid,
        IconTag::Copy => icondata::FaCopySolid,
        IconTag::ArrowRight => icondata::FaArrowRightSolid,
        IconTag::Twitter => icondata::FaTwitterBrands,
        IconTag::Instagram => icondata::FaInstagramBrands,
        IconTag::Dribbble => icondata::FaDribbbleBrands,
        IconTag::LinkedIn => icondata::FaLinkedinBrands,
    }
}

/// Decorative glyph; the surrounding control carries the accessible label.
#[component]
pub fn Glyph(tag: IconTag, #[prop(default = "w-4 h-4")] class: &'static str) -> impl IntoView {
    view! {
        <span class=format!("inline-flex shrink-0 [&>svg]:size-full {class}") aria-hidden="true">
            <Icon icon=icon_data(tag) />
        </span>
    }
}
