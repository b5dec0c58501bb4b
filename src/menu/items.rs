//! Link and dropdown definitions shown on both surfaces.

use std::fmt;
use std::str::FromStr;

use enum_map::Enum;

use crate::error::NavError;

/// Logical dropdowns of the navigation bar.
///
/// Each key names one piece of open/closed state shared by its desktop
/// popup and its mobile submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum DropdownKey {
    /// The "Tour Package" dropdown.
    TourPackage,
    /// The "Tour By Duration" dropdown.
    TourByDuration,
}

impl DropdownKey {
    /// Every key, in bar order.
    pub const ALL: [DropdownKey; 2] = [DropdownKey::TourPackage, DropdownKey::TourByDuration];

    /// Stable textual name, used for ids and parsing.
    pub fn as_str(self) -> &'static str {
        match self {
            DropdownKey::TourPackage => "tour-package",
            DropdownKey::TourByDuration => "tour-by-duration",
        }
    }
}

impl fmt::Display for DropdownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DropdownKey {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DropdownKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NavError::UnknownDropdown(s.to_string()))
    }
}

/// Presentation surface a region belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The horizontal bar and its hover popups.
    Desktop,
    /// The slide-in panel and its expandable submenus.
    Mobile,
}

/// A plain navigation link.
pub struct NavLink {
    /// Visible text.
    pub label: String,
    /// Destination handed back to the host on selection; never inspected here.
    pub href: String,
}

impl NavLink {
    /// Create a link with visible `label` pointing at `href`.
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// A dropdown submenu: a trigger label and the entries it reveals.
pub struct DropdownMenu {
    /// Which logical dropdown this menu renders.
    pub key: DropdownKey,
    /// Trigger text.
    pub label: String,
    /// Entries listed while the dropdown is open.
    pub items: Vec<NavLink>,
}

impl DropdownMenu {
    /// Create an empty dropdown for `key`.
    pub fn new(key: DropdownKey, label: &str) -> Self {
        Self {
            key,
            label: label.to_string(),
            items: Vec::new(),
        }
    }

    /// Append an entry to the dropdown.
    ///
    /// Returns `self` for fluent chaining.
    pub fn add_item(mut self, label: &str, href: &str) -> Self {
        self.items.push(NavLink::new(label, href));
        self
    }
}

/// One slot in the link row, rendered identically on both surfaces.
pub enum NavEntry {
    /// A link selected with a single click.
    Link(NavLink),
    /// A trigger revealing a list of links.
    Dropdown(DropdownMenu),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_from_their_names() {
        for key in DropdownKey::ALL {
            assert_eq!(key.to_string().parse::<DropdownKey>(), Ok(key));
        }
        assert_eq!(
            " Tour-Package ".parse::<DropdownKey>(),
            Ok(DropdownKey::TourPackage)
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(
            "gallery".parse::<DropdownKey>(),
            Err(NavError::UnknownDropdown("gallery".to_string()))
        );
    }
}
