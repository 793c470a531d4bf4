//! Maps the browser location onto one of the site's views.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Projects,
    Products,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Projects,
        Page::Products,
        Page::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::Products => "/products",
            Page::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Projects => "Projects",
            Page::Products => "Products",
            Page::Contact => "Contact",
        }
    }

    /// Text handed to the document title formatter.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Product Designer",
            Page::About => "About",
            Page::Projects => "My Works",
            Page::Products => "Products",
            Page::Contact => "Contact",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        let path = normalize(path);
        Page::ALL.into_iter().find(|p| p.path() == path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Page(Page),
    NotFound,
}

/// Resolves a location pathname to the view that renders it.
///
/// Total over every input: anything outside the fixed path set is [`View::NotFound`].
pub fn select_view(path: &str) -> View {
    match Page::from_path(path) {
        Some(page) => View::Page(page),
        None => View::NotFound,
    }
}

// drops query/fragment and a single trailing slash, keeping "/" intact
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}
