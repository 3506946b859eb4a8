#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(target_arch = "wasm32", derive(yew_router::Routable))]
pub enum Route {
    #[cfg_attr(target_arch = "wasm32", at("/"))]
    Home,
    #[cfg_attr(target_arch = "wasm32", at("/about"))]
    About,
    #[cfg_attr(target_arch = "wasm32", at("/careers"))]
    Careers,
    #[cfg_attr(target_arch = "wasm32", at("/contact"))]
    Contact,
    #[cfg_attr(target_arch = "wasm32", at("/privacy"))]
    Privacy,
    #[cfg_attr(target_arch = "wasm32", at("/terms"))]
    Terms,
    #[cfg_attr(target_arch = "wasm32", at("/social"))]
    Social,
    #[cfg_attr(target_arch = "wasm32", not_found)]
    #[cfg_attr(target_arch = "wasm32", at("/404"))]
    NotFound,
}

impl Route {
    pub const KNOWN: [Self; 7] = [
        Self::Home,
        Self::About,
        Self::Careers,
        Self::Contact,
        Self::Privacy,
        Self::Terms,
        Self::Social,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Careers => "/careers",
            Self::Contact => "/contact",
            Self::Privacy => "/privacy",
            Self::Terms => "/terms",
            Self::Social => "/social",
            Self::NotFound => "/404",
        }
    }

    /// Trailing slashes are tolerated; anything unknown is the 404 page.
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        Self::KNOWN
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or(Self::NotFound)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "70Arc | Autonomous Creative Systems",
            Self::About => "The Origin | 70Arc",
            Self::Careers => "Join the Crew | 70Arc",
            Self::Contact => "Contact | 70Arc",
            Self::Privacy => "Privacy Policy | 70Arc",
            Self::Terms => "Terms of Service | 70Arc",
            Self::Social => "Communications Array | 70Arc",
            Self::NotFound => "Lost in the Void | 70Arc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Careers => "Careers",
            Self::Contact => "Contact",
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Service",
            Self::Social => "Social",
            Self::NotFound => "Not Found",
        }
    }

    /// Trail from home to this route; empty on the home page itself.
    pub fn breadcrumbs(self) -> Vec<Self> {
        match self {
            Self::Home => Vec::new(),
            other => vec![Self::Home, other],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn letter(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        }
    }

    /// Unit offset of the compass button, y pointing down.
    pub fn unit(self) -> (f64, f64) {
        match self {
            Self::North => (0.0, -1.0),
            Self::East => (1.0, 0.0),
            Self::South => (0.0, 1.0),
            Self::West => (-1.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub direction: Direction,
}

pub const SECTIONS: [Section; 4] = [
    Section {
        id: "capabilities",
        label: "Intelligence Stack",
        direction: Direction::North,
    },
    Section {
        id: "atmosphere",
        label: "Synthesis Gallery",
        direction: Direction::East,
    },
    Section {
        id: "telemetry",
        label: "Neural Core",
        direction: Direction::South,
    },
    Section {
        id: "transmission",
        label: "Initiate Link",
        direction: Direction::West,
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    ScrollTo(String),
    Navigate { route: Route, anchor: Option<String> },
}

impl NavTarget {
    pub fn href(&self, current: Route) -> String {
        match self {
            Self::ScrollTo(id) => format!("{}#{id}", current.path()),
            Self::Navigate {
                route,
                anchor: Some(id),
            } => format!("{}#{id}", route.path()),
            Self::Navigate { route, anchor: None } => route.path().to_string(),
        }
    }
}

/// Resolves a link like `#telemetry`, `/#capabilities` or `/about` against
/// the route currently shown.
pub fn resolve_href(current: Route, href: &str) -> NavTarget {
    let (path, anchor) = match href.split_once('#') {
        Some((path, anchor)) => (path, Some(anchor).filter(|anchor| !anchor.is_empty())),
        None => (href, None),
    };

    let route = if path.is_empty() {
        current
    } else {
        Route::resolve(path)
    };

    match anchor {
        Some(id) if route == current => NavTarget::ScrollTo(id.to_string()),
        anchor => NavTarget::Navigate {
            route,
            anchor: anchor.map(str::to_string),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breadcrumbs_lead_home_except_on_home() {
        assert!(Route::Home.breadcrumbs().is_empty());
        assert_eq!(Route::Privacy.breadcrumbs(), vec![Route::Home, Route::Privacy]);

        let labels: Vec<_> = Route::Terms.breadcrumbs().into_iter().map(Route::label).collect();
        assert_eq!(labels, ["Home", "Terms of Service"]);
    }

    #[test]
    fn known_paths_map_to_routes_and_the_rest_is_not_found() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/careers/"), Route::Careers);
        assert_eq!(Route::resolve("/social"), Route::Social);
        assert_eq!(Route::resolve("/blog"), Route::NotFound);
        assert_eq!(Route::resolve("/404"), Route::NotFound);

        for route in Route::KNOWN {
            assert_eq!(Route::resolve(route.path()), route);
        }
    }

    #[test]
    fn anchor_on_the_current_route_scrolls_in_place() {
        assert_eq!(
            resolve_href(Route::Home, "/#capabilities"),
            NavTarget::ScrollTo("capabilities".to_string())
        );
        assert_eq!(
            resolve_href(Route::About, "#team"),
            NavTarget::ScrollTo("team".to_string())
        );
    }

    #[test]
    fn anchor_on_another_route_navigates_with_the_anchor_appended() {
        let target = resolve_href(Route::Contact, "/#telemetry");
        assert_eq!(
            target,
            NavTarget::Navigate {
                route: Route::Home,
                anchor: Some("telemetry".to_string())
            }
        );
        assert_eq!(target.href(Route::Contact), "/#telemetry");
    }

    #[test]
    fn plain_links_and_empty_anchors_navigate() {
        let target = resolve_href(Route::Home, "/privacy#");
        assert_eq!(
            target,
            NavTarget::Navigate {
                route: Route::Privacy,
                anchor: None
            }
        );
        assert_eq!(target.href(Route::Home), "/privacy");
    }
}
