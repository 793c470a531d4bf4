use leptos::prelude::*;

use crate::content::{CardGroup, IconTag, ProductEntry, ProjectEntry, Status};

use super::icons::Glyph;

#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-2 rounded-full border border-border bg-card px-3 py-1 text-sm text-muted-foreground">
            {status
                .available
                .then(|| {
                    view! {
                        <span class="relative flex w-2 h-2" title="Available for work">
                            <span class="absolute inline-flex w-full h-full rounded-full bg-success opacity-75 animate-ping"></span>
                            <span class="relative inline-flex w-2 h-2 rounded-full bg-success"></span>
                        </span>
                        <span class="sr-only">"Available for work: "</span>
                    }
                })}
            <span>{status.label}</span>
        </div>
    }
}

#[component]
pub fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    view! {
        <div class="card flex items-center gap-4 p-4">
            <div class=format!(
                "flex items-center justify-center w-12 h-12 rounded-xl text-lg font-bold {}",
                project.color.accent_class(),
            )>{project.icon}</div>
            <div class="min-w-0">
                <h3 class="card-title font-semibold text-card-foreground">{project.title}</h3>
                <p class="text-sm text-muted-foreground">{project.description}</p>
            </div>
        </div>
    }
}

/// Opens the product listing in a new browsing context.
#[component]
pub fn ProductCard(product: ProductEntry) -> impl IntoView {
    view! {
        <a
            href=product.href
            target="_blank"
            rel="noopener noreferrer"
            class="card card-link group flex items-center gap-4 p-4"
            aria-label=format!("{} - {}", product.title, product.category)
        >
            <div class="flex items-center justify-center w-12 h-12 rounded-xl bg-accent text-lg font-bold">
                {product.icon}
            </div>
            <div class="min-w-0 flex-1">
                <h3 class="card-title font-semibold text-card-foreground">{product.title}</h3>
                <p class="text-sm text-muted-foreground">{product.category}</p>
            </div>
            <Glyph
                tag=IconTag::ArrowRight
                class="w-3 h-3 text-muted-foreground transition-transform group-hover:translate-x-1"
            />
        </a>
    }
}

#[component]
pub fn ProjectList(projects: &'static [ProjectEntry]) -> impl IntoView {
    view! {
        <div class="space-y-3">
            {projects
                .iter()
                .map(|project| view! { <ProjectCard project=*project /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ProductList(
    products: &'static [ProductEntry],
    #[prop(default = "space-y-3")] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=class>
            {products
                .iter()
                .map(|product| view! { <ProductCard product=*product /> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn CardGroupList(
    group: CardGroup,
    #[prop(default = "space-y-3")] class: &'static str,
) -> impl IntoView {
    match group {
        CardGroup::Projects(projects) => view! { <ProjectList projects=projects /> }.into_any(),
        CardGroup::Products(products) => view! { <ProductList products=products class=class /> }.into_any(),
    }
}
