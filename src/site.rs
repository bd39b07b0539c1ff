/// Where a navigation entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Path handled by the in-app router
    Internal(&'static str),
    /// Absolute URL opened in a new browsing context
    External(&'static str),
}

/// `target` attribute for external links
pub const EXTERNAL_TARGET: &str = "_blank";
/// `rel` attribute for external links: no opener handle, no referrer
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// What activating a link does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Ask the router for exactly this path
    Route(&'static str),
    /// Open a new, isolated browsing context
    NewContext {
        url: &'static str,
        target: &'static str,
        rel: &'static str,
    },
}

/// A single entry in the site's navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Decorative marker shown before the label (may be empty)
    pub marker: &'static str,
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavEntry {
    pub const fn internal(marker: &'static str, label: &'static str, path: &'static str) -> Self {
        Self {
            marker,
            label,
            target: NavTarget::Internal(path),
        }
    }

    pub const fn external(label: &'static str, url: &'static str) -> Self {
        Self {
            marker: "",
            label,
            target: NavTarget::External(url),
        }
    }

    /// Label as displayed, marker included
    pub fn display_label(&self) -> String {
        if self.marker.is_empty() {
            self.label.to_string()
        } else {
            format!("{} {}", self.marker, self.label)
        }
    }

    pub fn href(&self) -> &'static str {
        match self.target {
            NavTarget::Internal(path) => path,
            NavTarget::External(url) => url,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self.target, NavTarget::External(_))
    }

    pub fn resolve(&self) -> Activation {
        match self.target {
            NavTarget::Internal(path) => Activation::Route(path),
            NavTarget::External(url) => Activation::NewContext {
                url,
                target: EXTERNAL_TARGET,
                rel: EXTERNAL_REL,
            },
        }
    }

    /// Attribute pairs the rendered `<a>` carries: `href`, plus `target` and
    /// `rel` when the entry opens a new browsing context.
    pub fn anchor_attributes(&self) -> Vec<(&'static str, &'static str)> {
        match self.resolve() {
            Activation::Route(path) => vec![("href", path)],
            Activation::NewContext { url, target, rel } => {
                vec![("href", url), ("target", target), ("rel", rel)]
            }
        }
    }

    pub fn is_well_formed(&self) -> bool {
        match self.target {
            NavTarget::Internal(path) => is_well_formed_path(path),
            NavTarget::External(url) => is_well_formed_url(url),
        }
    }
}

pub const INTRO_PATH: &str = "/nca-intro";
pub const RESEARCH_PATH: &str = "/nca-research";
pub const SIMULATOR_PATH: &str = "/simulator-home";
pub const UPDATES_PATH: &str = "/keeping-up";

pub const CONTACT_URL: &str = "https://www.deepneuron.org/contact-us";

/// Internal pages linked from the landing page, in display order.
pub const EXPLORE_LINKS: [NavEntry; 4] = [
    NavEntry::internal("\u{1F4D8}", "What is Neural Cellular Automata?", INTRO_PATH),
    NavEntry::internal("\u{1F52C}", "Our Research & Latest Findings", RESEARCH_PATH),
    NavEntry::internal("\u{1F9EA}", "Try the NCA Simulator", SIMULATOR_PATH),
    NavEntry::internal("\u{1F4F0}", "Project Updates", UPDATES_PATH),
];

pub const CONTACT_LINK: NavEntry = NavEntry::external("Get in Touch", CONTACT_URL);

/// Router-relative path: leading slash, lowercase, no whitespace,
/// no trailing slash except for the root itself.
pub fn is_well_formed_path(path: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }
    if path.len() > 1 && path.ends_with('/') {
        return false;
    }
    path.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '/' || c == '_')
        && !path.contains("//")
}

/// Absolute https URL with a non-empty host.
pub fn is_well_formed_url(url: &str) -> bool {
    let Some(rest) = url.strip_prefix("https://") else {
        return false;
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    !host.is_empty()
        && host.contains('.')
        && !url.chars().any(char::is_whitespace)
}
