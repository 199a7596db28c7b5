//! Icon catalog for menu items and page headers
//!
//! Icons are identified by kind only; the rendering layer owns the assets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed catalog of picker icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconKind {
    Home,
    Folder,
    File,
    Page,
    Image,
    Camera,
    Video,
    Music,
    Star,
    Heart,
    Person,
    Email,
    Phone,
    Location,
    Calendar,
    Clock,
    Search,
    Notification,
    Layers,
    Design,
    System,
    Flow,
    Ai,
    Game,
    Book,
    Shopping,
    Favorite,
    Menu,
    More,
}

impl IconKind {
    /// Display name shown in the icon picker
    pub fn name(&self) -> &'static str {
        match self {
            IconKind::Home => "Home",
            IconKind::Folder => "Folder",
            IconKind::File => "File",
            IconKind::Page => "Page",
            IconKind::Image => "Image",
            IconKind::Camera => "Camera",
            IconKind::Video => "Video",
            IconKind::Music => "Music",
            IconKind::Star => "Star",
            IconKind::Heart => "Heart",
            IconKind::Person => "Person",
            IconKind::Email => "Email",
            IconKind::Phone => "Phone",
            IconKind::Location => "Location",
            IconKind::Calendar => "Calendar",
            IconKind::Clock => "Clock",
            IconKind::Search => "Search",
            IconKind::Notification => "Notification",
            IconKind::Layers => "Layers",
            IconKind::Design => "Design",
            IconKind::System => "System",
            IconKind::Flow => "Flow",
            IconKind::Ai => "AI",
            IconKind::Game => "Game",
            IconKind::Book => "Book",
            IconKind::Shopping => "Shopping",
            IconKind::Favorite => "Favorite",
            IconKind::Menu => "Menu",
            IconKind::More => "More",
        }
    }

    /// All icons, in picker display order
    pub fn all() -> &'static [IconKind] {
        &[
            IconKind::Home,
            IconKind::Folder,
            IconKind::File,
            IconKind::Page,
            IconKind::Image,
            IconKind::Camera,
            IconKind::Video,
            IconKind::Music,
            IconKind::Star,
            IconKind::Heart,
            IconKind::Person,
            IconKind::Email,
            IconKind::Phone,
            IconKind::Location,
            IconKind::Calendar,
            IconKind::Clock,
            IconKind::Search,
            IconKind::Notification,
            IconKind::Layers,
            IconKind::Design,
            IconKind::System,
            IconKind::Flow,
            IconKind::Ai,
            IconKind::Game,
            IconKind::Book,
            IconKind::Shopping,
            IconKind::Favorite,
            IconKind::Menu,
            IconKind::More,
        ]
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names_unique() {
        let all = IconKind::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_icon_catalog_size() {
        assert_eq!(IconKind::all().len(), 29);
    }

    #[test]
    fn test_icon_serde_roundtrip() {
        let json = serde_json::to_string(&IconKind::Design).unwrap();
        let back: IconKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IconKind::Design);
    }
}
