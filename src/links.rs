// src/links.rs
//! The fixed set of destinations shown on the hub.

/// Accent used when a link has no color of its own.
pub const DEFAULT_ACCENT: &str = "#667eea";

/// One social-platform destination with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkEntry {
    pub name: &'static str,
    pub url: &'static str,
    pub color_tag: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[LinkEntry] = &[
    LinkEntry {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/chiesadwtm/",
        color_tag: "#0077B5",
        description: "Let's connect professionally",
        icon: "in",
    },
    LinkEntry {
        name: "GitHub",
        url: "https://github.com/Chdwtm",
        color_tag: "#181717",
        description: "Explore my repositories",
        icon: "⌘",
    },
    LinkEntry {
        name: "YouTube",
        url: "https://www.youtube.com/@chiesaanugrah640",
        color_tag: "#FF0000",
        description: "Subscribe to my channel",
        icon: "▶",
    },
    LinkEntry {
        name: "TikTok",
        url: "https://www.tiktok.com/@chdwtm",
        color_tag: "#000000",
        description: "Follow for fun content",
        icon: "♪",
    },
    LinkEntry {
        name: "Instagram",
        url: "https://www.instagram.com/chiesadwtm/",
        color_tag: "#E4405F",
        description: "See my visual journey",
        icon: "◎",
    },
];

pub fn find_by_name(name: &str) -> Option<&'static LinkEntry> {
    SOCIAL_LINKS.iter().find(|link| link.name == name)
}

/// Accent color for a link name, falling back to [`DEFAULT_ACCENT`].
pub fn accent_for(name: &str) -> &'static str {
    find_by_name(name)
        .map(|link| link.color_tag)
        .unwrap_or(DEFAULT_ACCENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_link_names_are_unique() {
        let names: HashSet<_> = SOCIAL_LINKS.iter().map(|link| link.name).collect();
        assert_eq!(names.len(), SOCIAL_LINKS.len());
    }

    #[test]
    fn test_accent_lookup() {
        assert_eq!(accent_for("GitHub"), "#181717");
        assert_eq!(accent_for("Mastodon"), DEFAULT_ACCENT);
    }

    #[test]
    fn test_every_link_has_a_url() {
        for link in SOCIAL_LINKS {
            assert!(link.url.starts_with("https://"), "{} has no https url", link.name);
        }
    }
}
