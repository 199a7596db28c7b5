//! # Content Registry
//!
//! Resolves a menu item id to the page content shown for it: a title, an
//! icon, a one-line description and the seed block list.
//!
//! ## Philosophy
//!
//! - **Injected**: consumers depend on the `ContentProvider` trait, never
//!   on a concrete registry, so tests can substitute fixtures
//! - **Fresh ids**: every materialization mints new block ids; two loads of
//!   the same page never alias
//! - **Total**: unknown ids resolve to the "Untitled" default page instead
//!   of failing

use core_types::{IconKind, MenuItemId};
use editor_core::{Block, BlockType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A resolved page: header plus seed blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    pub icon: IconKind,
    pub description: String,
    pub blocks: Vec<Block>,
}

/// Source of page content for menu navigation
pub trait ContentProvider {
    /// Resolves a menu item to its page, minting fresh block ids
    fn content(&self, id: &MenuItemId) -> PageContent;
}

/// Stored template a page is materialized from
#[derive(Debug, Clone)]
struct PageTemplate {
    title: &'static str,
    icon: IconKind,
    description: &'static str,
    blocks: Vec<(BlockType, &'static str)>,
}

impl PageTemplate {
    fn materialize(&self) -> PageContent {
        let blocks = if self.blocks.is_empty() {
            vec![Block::new(BlockType::Paragraph)]
        } else {
            self.blocks
                .iter()
                .map(|(kind, text)| Block::with_text(*kind, *text))
                .collect()
        };
        PageContent {
            title: self.title.to_string(),
            icon: self.icon,
            description: self.description.to_string(),
            blocks,
        }
    }
}

/// The built-in page catalog
pub struct StaticContentRegistry {
    pages: BTreeMap<&'static str, PageTemplate>,
}

impl StaticContentRegistry {
    pub fn new() -> Self {
        let mut pages = BTreeMap::new();
        let mut seed = |id: &'static str,
                        title: &'static str,
                        icon: IconKind,
                        description: &'static str| {
            pages.insert(
                id,
                PageTemplate {
                    title,
                    icon,
                    description,
                    blocks: Vec::new(),
                },
            );
        };

        // Designer pages
        seed(
            "design-process",
            "Design Process",
            IconKind::Flow,
            "Our comprehensive design process from ideation to implementation",
        );
        seed(
            "style-guide",
            "Style Guide",
            IconKind::Design,
            "Visual design standards and guidelines for consistent branding",
        );
        seed(
            "folder-name",
            "Folder Name",
            IconKind::Folder,
            "Naming conventions for project folders and organization",
        );
        seed(
            "file-structure",
            "File Name & Structure",
            IconKind::File,
            "File naming standards and organizational structure",
        );
        seed(
            "page-structure",
            "Page Name & Structure",
            IconKind::Page,
            "Page naming conventions and hierarchical structure",
        );
        seed(
            "cover-thumbnail",
            "Cover / Thumbnail",
            IconKind::Image,
            "Guidelines for creating covers and thumbnails",
        );
        seed(
            "layer-convention",
            "Layer Name Convention",
            IconKind::Layers,
            "Standardized naming for design layers and components",
        );
        seed(
            "design-bank",
            "Design Bank",
            IconKind::Design,
            "Repository of design assets and resources",
        );
        seed(
            "design-system",
            "Design System",
            IconKind::System,
            "Comprehensive design system and component library",
        );
        seed(
            "flow",
            "Flow",
            IconKind::Flow,
            "User flow diagrams and interaction patterns",
        );
        seed("ai", "AI", IconKind::Ai, "AI-powered design tools and automation");

        // Company pages
        seed(
            "mission-vision",
            "Mission & Vision",
            IconKind::Design,
            "Our mission and vision statements",
        );
        seed(
            "company-values",
            "Company Values",
            IconKind::Flow,
            "Core values that guide our behavior",
        );
        seed(
            "organization-chart",
            "Organization Chart",
            IconKind::System,
            "Company organizational structure",
        );
        seed(
            "hr-policies",
            "HR Policies",
            IconKind::File,
            "Human Resources policies and procedures",
        );
        seed(
            "code-of-conduct",
            "Code of Conduct",
            IconKind::Page,
            "Standards for ethical and professional conduct",
        );
        seed(
            "security-policies",
            "Security Policies",
            IconKind::Layers,
            "Security rules and best practices",
        );

        // Developer pages
        seed(
            "coding-standards",
            "Coding Standards",
            IconKind::File,
            "Standards for writing clean, consistent code",
        );
        seed(
            "git-workflow",
            "Git Workflow",
            IconKind::Flow,
            "Branching strategy and PR process",
        );
        seed(
            "code-review",
            "Code Review",
            IconKind::Page,
            "Guidelines for reviewing code effectively",
        );
        seed(
            "api-docs",
            "API Documentation",
            IconKind::System,
            "APIs and integration references",
        );
        seed(
            "architecture",
            "Architecture",
            IconKind::Design,
            "System architecture and diagrams",
        );
        seed(
            "deployment",
            "Deployment Guide",
            IconKind::Layers,
            "How to deploy the application",
        );

        // Content pages
        seed(
            "brand-voice",
            "Brand Voice",
            IconKind::Design,
            "Tone and voice guidelines",
        );
        seed(
            "content-guidelines",
            "Content Guidelines",
            IconKind::File,
            "Editorial standards for content",
        );
        seed(
            "editorial-calendar",
            "Editorial Calendar",
            IconKind::Page,
            "Planning and scheduling content",
        );
        seed(
            "blog-posts",
            "Blog Posts",
            IconKind::Flow,
            "Guidelines and ideas for blog posts",
        );
        seed(
            "social-media",
            "Social Media",
            IconKind::Image,
            "Social media strategy and assets",
        );
        seed(
            "marketing-copy",
            "Marketing Copy",
            IconKind::System,
            "Copywriting for marketing materials",
        );

        Self { pages }
    }

    fn default_page() -> PageContent {
        PageContent {
            title: "Untitled".to_string(),
            icon: IconKind::File,
            description: "Default content".to_string(),
            blocks: vec![Block::new(BlockType::Paragraph)],
        }
    }

    /// Number of seeded pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl Default for StaticContentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentProvider for StaticContentRegistry {
    fn content(&self, id: &MenuItemId) -> PageContent {
        match self.pages.get(id.as_str()) {
            Some(template) => template.materialize(),
            None => Self::default_page(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_page_resolves() {
        let registry = StaticContentRegistry::new();
        let page = registry.content(&MenuItemId::new("design-system"));

        assert_eq!(page.title, "Design System");
        assert_eq!(page.icon, IconKind::System);
        assert_eq!(
            page.description,
            "Comprehensive design system and component library"
        );
        assert_eq!(page.blocks.len(), 1);
        assert_eq!(page.blocks[0].kind, BlockType::Paragraph);
        assert!(page.blocks[0].is_empty());
    }

    #[test]
    fn test_unknown_page_is_untitled_default() {
        let registry = StaticContentRegistry::new();
        let page = registry.content(&MenuItemId::new("brand-assets-17"));

        assert_eq!(page.title, "Untitled");
        assert_eq!(page.icon, IconKind::File);
        assert_eq!(page.description, "Default content");
        assert_eq!(page.blocks.len(), 1);
    }

    #[test]
    fn test_materialization_mints_fresh_block_ids() {
        let registry = StaticContentRegistry::new();
        let id = MenuItemId::new("flow");

        let first = registry.content(&id);
        let second = registry.content(&id);
        assert_ne!(first.blocks[0].id, second.blocks[0].id);
    }

    #[test]
    fn test_catalog_size() {
        let registry = StaticContentRegistry::new();
        assert_eq!(registry.len(), 29);
    }
}
