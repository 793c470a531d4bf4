//! Literal records rendered by the pages.
//!
//! Nothing here is mutated after definition. Each page draws its cards from
//! its own [`CardGroup`] table, and [`page_outline`] reads the same tables,
//! so the sequence of cards on each page can be checked without a DOM.

use crate::route::Page;

/// Every glyph the site draws. The UI layer resolves a tag to a vector icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconTag {
    Home,
    User,
    Projects,
    Cart,
    Sun,
    Moon,
    Copy,
    ArrowRight,
    Twitter,
    Instagram,
    Dribbble,
    LinkedIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub icon: IconTag,
}

impl NavItem {
    pub fn path(self) -> &'static str {
        self.page.path()
    }

    pub fn label(self) -> &'static str {
        self.page.label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconTag,
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Accent family of a project tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Morva,
    Rectangle,
    Simply,
    Glassdoor,
    Seven,
}

impl ColorTag {
    pub fn accent_class(self) -> &'static str {
        match self {
            ColorTag::Morva => "bg-violet-500 text-white",
            ColorTag::Rectangle => "bg-sky-500 text-white",
            ColorTag::Simply => "bg-amber-400 text-black",
            ColorTag::Glassdoor => "bg-emerald-500 text-white",
            ColorTag::Seven => "bg-rose-500 text-white",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: ColorTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductEntry {
    pub title: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub label: &'static str,
    pub available: bool,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        page: Page::Home,
        icon: IconTag::Home,
    },
    NavItem {
        page: Page::About,
        icon: IconTag::User,
    },
    NavItem {
        page: Page::Projects,
        icon: IconTag::Projects,
    },
    NavItem {
        page: Page::Products,
        icon: IconTag::Cart,
    },
];

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        icon: IconTag::Twitter,
        href: "https://twitter.com",
        label: "Twitter",
    },
    SocialLink {
        icon: IconTag::Instagram,
        href: "https://instagram.com",
        label: "Instagram",
    },
    SocialLink {
        icon: IconTag::Dribbble,
        href: "https://dribbble.com",
        label: "Dribbble",
    },
    SocialLink {
        icon: IconTag::LinkedIn,
        href: "https://linkedin.com",
        label: "LinkedIn",
    },
];

pub const COPYRIGHT: &str = "© 2023 Subtle Folio – Framer Template";

pub const CREDITS: [CreditLink; 3] = [
    CreditLink {
        label: "Nur Praditya",
        href: "https://twitter.com/nurpraditya",
    },
    CreditLink {
        label: "MorvaLabs",
        href: "https://morvalabs.com",
    },
    CreditLink {
        label: "Framer",
        href: "https://framer.com",
    },
];

const MORVA: ProjectEntry = ProjectEntry {
    title: "Morva labs",
    description: "Visual design, Branding",
    icon: "M",
    color: ColorTag::Morva,
};
const RECTANGLE: ProjectEntry = ProjectEntry {
    title: "Rectangle",
    description: "Product design, Icon design",
    icon: "⬜",
    color: ColorTag::Rectangle,
};
const SIMPLY: ProjectEntry = ProjectEntry {
    title: "Simply",
    description: "Landing page, Illustration design",
    icon: "⚡",
    color: ColorTag::Simply,
};
const GLASSDOOR: ProjectEntry = ProjectEntry {
    title: "Glassdoor",
    description: "Icon design, Illustration design",
    icon: "💎",
    color: ColorTag::Glassdoor,
};
const SEVEN: ProjectEntry = ProjectEntry {
    title: "Seven LTD.",
    description: "Branding, Landing page",
    icon: "7",
    color: ColorTag::Seven,
};

pub const HOME_PROJECTS: [ProjectEntry; 3] = [MORVA, RECTANGLE, SIMPLY];
pub const ALL_PROJECTS: [ProjectEntry; 5] = [MORVA, RECTANGLE, SIMPLY, GLASSDOOR, SEVEN];

const FRAMER_TEMPLATE: &str = "Framer Template";

const PORTAFO: ProductEntry = ProductEntry {
    title: "Portafo",
    category: FRAMER_TEMPLATE,
    icon: "P",
    href: "https://framer.com",
};
const FAKTUR: ProductEntry = ProductEntry {
    title: "Faktur Invoice",
    category: FRAMER_TEMPLATE,
    icon: "📄",
    href: "https://framer.com",
};
const GOVEN: ProductEntry = ProductEntry {
    title: "Goven",
    category: FRAMER_TEMPLATE,
    icon: "G",
    href: "https://framer.com",
};
const SUBTLE_FOLIO: ProductEntry = ProductEntry {
    title: "Subtle Folio",
    category: FRAMER_TEMPLATE,
    icon: "🎨",
    href: "https://framer.com",
};

pub const HOME_PRODUCTS: [ProductEntry; 3] = [PORTAFO, FAKTUR, GOVEN];

pub const SIDE_PROJECTS: [ProductEntry; 3] = [
    GOVEN,
    ProductEntry {
        title: "Upshift",
        category: "Web Design Collections",
        icon: "📱",
        href: "https://dribbble.com",
    },
    SUBTLE_FOLIO,
];

pub const PROJECTS_PAGE_PRODUCTS: [ProductEntry; 4] = [PORTAFO, FAKTUR, GOVEN, SUBTLE_FOLIO];

/// The Products page links each template to its own marketplace listing.
pub const TEMPLATES: [ProductEntry; 4] = [
    ProductEntry {
        href: "https://framer.com/templates/portafo",
        ..PORTAFO
    },
    ProductEntry {
        href: "https://framer.com/templates/invoice",
        ..FAKTUR
    },
    ProductEntry {
        href: "https://framer.com/templates/goven",
        ..GOVEN
    },
    ProductEntry {
        href: "https://framer.com/templates/portfolio",
        ..SUBTLE_FOLIO
    },
];

pub const MORE_TEMPLATES: [ProductEntry; 4] = [
    ProductEntry {
        title: "Minimal CV",
        category: FRAMER_TEMPLATE,
        icon: "📋",
        href: "https://framer.com/templates/cv",
    },
    ProductEntry {
        title: "Agency Landing",
        category: FRAMER_TEMPLATE,
        icon: "🏢",
        href: "https://framer.com/templates/agency",
    },
    ProductEntry {
        title: "Design System",
        category: "Figma Resource",
        icon: "🎯",
        href: "https://figma.com/design-system",
    },
    ProductEntry {
        title: "Icon Pack",
        category: "Design Resource",
        icon: "⭐",
        href: "https://icons.com/pack",
    },
];

pub struct Featured {
    pub title: &'static str,
    pub blurb: &'static str,
    pub href: &'static str,
}

pub const FEATURED_TEMPLATE: Featured = Featured {
    title: "Portafo",
    blurb: "A clean and modern portfolio template perfect for designers and developers. Built with responsive design and smooth animations.",
    href: "https://framer.com/templates/portafo",
};

pub const HOME_STATUS: Status = Status {
    label: "Product Designer",
    available: true,
};
pub const ABOUT_STATUS: Status = Status {
    label: "About",
    available: false,
};
pub const PROJECTS_STATUS: Status = Status {
    label: "Projects",
    available: false,
};
pub const PRODUCTS_STATUS: Status = Status {
    label: "Products",
    available: false,
};
pub const CONTACT_STATUS: Status = Status {
    label: "Contact",
    available: true,
};

pub const HOME_HEADING: &str = "I'm Brian Do";
pub const ABOUT_HEADING: &str = "It's Me Brian";
pub const PROJECTS_HEADING: &str = "My Works";
pub const PRODUCTS_HEADING: &str = "Explore My Products";
pub const CTA_HEADING: &str = "Let's work together.";
pub const CTA_BLURB: &str = "Creating user experience and visual appealing design";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    Project(&'static ProjectEntry),
    Product(&'static ProductEntry),
}

impl Card {
    pub fn title(&self) -> &'static str {
        match self {
            Card::Project(p) => p.title,
            Card::Product(p) => p.title,
        }
    }
}

/// Cards rendered together as one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardGroup {
    Projects(&'static [ProjectEntry]),
    Products(&'static [ProductEntry]),
}

impl CardGroup {
    pub fn cards(self) -> Vec<Card> {
        match self {
            CardGroup::Projects(entries) => entries.iter().map(Card::Project).collect(),
            CardGroup::Products(entries) => entries.iter().map(Card::Product).collect(),
        }
    }
}

pub const HOME_CARDS: [CardGroup; 2] = [
    CardGroup::Projects(&HOME_PROJECTS),
    CardGroup::Products(&HOME_PRODUCTS),
];
pub const ABOUT_CARDS: [CardGroup; 1] = [CardGroup::Products(&SIDE_PROJECTS)];
pub const PROJECTS_CARDS: [CardGroup; 2] = [
    CardGroup::Projects(&ALL_PROJECTS),
    CardGroup::Products(&PROJECTS_PAGE_PRODUCTS),
];
pub const PRODUCTS_CARDS: [CardGroup; 2] = [
    CardGroup::Products(&TEMPLATES),
    CardGroup::Products(&MORE_TEMPLATES),
];

/// Card lists of `page`, top to bottom.
pub fn card_groups(page: Page) -> &'static [CardGroup] {
    match page {
        Page::Home => &HOME_CARDS,
        Page::About => &ABOUT_CARDS,
        Page::Projects => &PROJECTS_CARDS,
        Page::Products => &PRODUCTS_CARDS,
        Page::Contact => &[],
    }
}

/// Status badge, heading and cards of a page in the order they render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutline {
    pub status: Status,
    pub heading: &'static str,
    pub cards: Vec<Card>,
}

pub fn page_outline(page: Page) -> PageOutline {
    let (status, heading) = match page {
        Page::Home => (HOME_STATUS, HOME_HEADING),
        Page::About => (ABOUT_STATUS, ABOUT_HEADING),
        Page::Projects => (PROJECTS_STATUS, PROJECTS_HEADING),
        Page::Products => (PRODUCTS_STATUS, PRODUCTS_HEADING),
        Page::Contact => (CONTACT_STATUS, CTA_HEADING),
    };
    PageOutline {
        status,
        heading,
        cards: card_groups(page).iter().flat_map(|group| group.cards()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{select_view, View};

    fn titles(cards: &[Card]) -> Vec<&'static str> {
        cards.iter().map(Card::title).collect()
    }

    fn project_titles(cards: &[Card]) -> Vec<&'static str> {
        cards
            .iter()
            .filter(|c| matches!(c, Card::Project(_)))
            .map(Card::title)
            .collect()
    }

    fn product_titles(cards: &[Card]) -> Vec<&'static str> {
        cards
            .iter()
            .filter(|c| matches!(c, Card::Product(_)))
            .map(Card::title)
            .collect()
    }

    fn outline_for(path: &str) -> PageOutline {
        match select_view(path) {
            View::Page(page) => page_outline(page),
            View::NotFound => panic!("{path} should map to a page"),
        }
    }

    #[test]
    fn test_home_card_order() {
        let outline = outline_for("/");
        assert_eq!(
            titles(&outline.cards),
            vec![
                "Morva labs",
                "Rectangle",
                "Simply",
                "Portafo",
                "Faktur Invoice",
                "Goven"
            ]
        );
        assert_eq!(outline.heading, "I'm Brian Do");
        assert!(outline.status.available);
    }

    #[test]
    fn test_about_scenario() {
        let outline = outline_for("/about");
        assert_eq!(
            outline.status,
            Status {
                label: "About",
                available: false
            }
        );
        assert_eq!(outline.heading, "It's Me Brian");
        assert_eq!(product_titles(&outline.cards), vec!["Goven", "Upshift", "Subtle Folio"]);
        assert!(project_titles(&outline.cards).is_empty());
    }

    #[test]
    fn test_projects_scenario() {
        let outline = outline_for("/projects");
        assert_eq!(
            project_titles(&outline.cards),
            vec!["Morva labs", "Rectangle", "Simply", "Glassdoor", "Seven LTD."]
        );
        assert_eq!(
            product_titles(&outline.cards),
            vec!["Portafo", "Faktur Invoice", "Goven", "Subtle Folio"]
        );
        // projects render before the products section
        assert!(matches!(outline.cards[4], Card::Project(_)));
        assert!(matches!(outline.cards[5], Card::Product(_)));
    }

    #[test]
    fn test_products_page_links_to_listings() {
        let outline = outline_for("/products");
        assert_eq!(outline.cards.len(), 8);
        for card in &outline.cards {
            let Card::Product(p) = card else {
                panic!("products page only renders product cards");
            };
            assert!(p.href.starts_with("https://"), "{} has no listing", p.title);
            assert_ne!(p.href, "https://framer.com");
        }
        assert_eq!(FEATURED_TEMPLATE.href, TEMPLATES[0].href);
    }

    #[test]
    fn test_outline_is_stable() {
        for page in Page::ALL {
            assert_eq!(page_outline(page), page_outline(page));
        }
    }

    #[test]
    fn test_contact_has_no_cards() {
        let outline = page_outline(Page::Contact);
        assert!(outline.cards.is_empty());
        assert_eq!(outline.heading, CTA_HEADING);
    }

    #[test]
    fn test_nav_items_resolve_to_their_pages() {
        let pages = NAV_ITEMS
            .iter()
            .map(|item| select_view(item.path()))
            .collect::<Vec<_>>();
        assert_eq!(
            pages,
            vec![
                View::Page(Page::Home),
                View::Page(Page::About),
                View::Page(Page::Projects),
                View::Page(Page::Products),
            ]
        );
        let labels = NAV_ITEMS.map(NavItem::label);
        assert_eq!(labels, ["Home", "About", "Projects", "Products"]);
    }

    #[test]
    fn test_card_groups_keep_section_boundaries() {
        assert_eq!(card_groups(Page::About), &[CardGroup::Products(&SIDE_PROJECTS)]);
        assert!(card_groups(Page::Contact).is_empty());

        let products = card_groups(Page::Products);
        assert_eq!(products.len(), 2);
        assert_eq!(
            titles(&products[1].cards()),
            vec!["Minimal CV", "Agency Landing", "Design System", "Icon Pack"]
        );
        for page in Page::ALL {
            let flattened = card_groups(page)
                .iter()
                .flat_map(|group| group.cards())
                .collect::<Vec<_>>();
            assert_eq!(flattened, page_outline(page).cards);
        }
    }

    #[test]
    fn test_accents_are_distinct() {
        let tags = [
            ColorTag::Morva,
            ColorTag::Rectangle,
            ColorTag::Simply,
            ColorTag::Glassdoor,
            ColorTag::Seven,
        ];
        let mut classes = tags.map(ColorTag::accent_class).to_vec();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), tags.len());
    }

    #[test]
    fn test_outbound_links_are_absolute() {
        let hrefs = SOCIAL_LINKS
            .iter()
            .map(|s| s.href)
            .chain(CREDITS.iter().map(|c| c.href));
        for href in hrefs {
            assert!(href.starts_with("https://"), "{href}");
        }
    }
}
