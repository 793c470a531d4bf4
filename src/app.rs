mod about;
mod actions;
mod cards;
mod contact;
mod footer;
mod homepage;
mod icons;
mod layout;
mod navigation;
mod not_found;
mod products;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};

use crate::config::document_title;
use crate::route::{select_view, Page, View};
use crate::theme::{provide_theme, Theme, ThemeController};

use about::AboutPage;
use contact::ContactPage;
use footer::Footer;
use homepage::HomePage;
use navigation::Navigation;
use not_found::NotFound;
use products::ProductsPage;
use projects::ProjectsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <meta name="description" content="Brian Do - Product designer from Jakarta, ID." />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme(Theme::default());
    sync_theme(theme);

    view! {
        <Title formatter=|title: String| document_title(&title) />
        <Router>
            <Navigation />
            <main class="min-h-screen bg-background text-foreground">
                <Routes fallback=|| view! { <PageOutlet /> }>
                    <Route path=path!("/") view=PageOutlet />
                    <Route path=path!("/about") view=PageOutlet />
                    <Route path=path!("/projects") view=PageOutlet />
                    <Route path=path!("/products") view=PageOutlet />
                    <Route path=path!("/contact") view=PageOutlet />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// Renders whichever view the current location selects.
#[component]
fn PageOutlet() -> impl IntoView {
    let location = use_location();
    move || match select_view(&location.pathname.get()) {
        View::Page(Page::Home) => view! { <HomePage /> }.into_any(),
        View::Page(Page::About) => view! { <AboutPage /> }.into_any(),
        View::Page(Page::Projects) => view! { <ProjectsPage /> }.into_any(),
        View::Page(Page::Products) => view! { <ProductsPage /> }.into_any(),
        View::Page(Page::Contact) => view! { <ContactPage /> }.into_any(),
        View::NotFound => view! { <NotFound /> }.into_any(),
    }
}

/// Loads the session's theme once hydrated and keeps storage and `<html>` in step with it.
fn sync_theme(theme: ThemeController) {
    #[cfg(feature = "hydrate")]
    {
        use codee::string::JsonSerdeWasmCodec;
        use leptos_use::{storage::use_session_storage, use_preferred_dark};

        use crate::config::THEME_STORAGE_KEY;

        let (stored, set_stored, _) =
            use_session_storage::<Option<Theme>, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
        let prefers_dark = use_preferred_dark();

        Effect::watch(
            || (),
            move |_, _, _| {
                let initial = stored
                    .get_untracked()
                    .unwrap_or_else(|| Theme::from_prefers_dark(prefers_dark.get_untracked()));
                log::debug!("starting with {} theme", initial.class_name());
                theme.set(initial);
            },
            true,
        );

        Effect::watch(
            move || theme.theme(),
            move |current, prev, _| {
                apply_document_theme(*current);
                // first run only mirrors the default onto the document
                if prev.is_some() {
                    set_stored.set(Some(*current));
                }
            },
            true,
        );
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = theme;
}

#[cfg(feature = "hydrate")]
fn apply_document_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        log::warn!("no document element to apply theme to");
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force("dark", theme.is_dark())
    {
        log::warn!("couldn't apply {} theme: {e:?}", theme.class_name());
    }
}
