//! # Navigation Service
//!
//! Workspace navigation state: the tab strip and the per-tab sidebar trees.
//!
//! ## Philosophy
//!
//! - **Deterministic**: synthesized ids use an injected monotonic counter,
//!   never wall-clock time
//! - **Two-phase deletion**: destroying a tab is request/confirm, so hosts
//!   can interpose a dialog without owning the guard logic
//! - **Per-tab trees**: each tab keeps its own sidebar; switching tabs
//!   swaps the visible tree and touches nothing else
//!
//! ## Non-Goals
//!
//! - Rendering, hover state, drag previews
//! - Persisting navigation state across sessions

pub mod sidebar;

pub use sidebar::{MenuItem, Section, SidebarTree};

use core_types::{IconKind, MenuItemId, SectionId, TabId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// One entry in the tab strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub label: String,
    pub deletable: bool,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: TabId::new(id),
            label: label.into(),
            deletable: true,
        }
    }
}

/// Navigation operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("unknown tab: {0}")]
    UnknownTab(TabId),
    #[error("unknown section: {0}")]
    UnknownSection(SectionId),
    #[error("unknown menu item: {0}")]
    UnknownItem(MenuItemId),
    #[error("tab is not deletable: {0}")]
    NotDeletable(TabId),
    #[error("the last deletable tab cannot be deleted")]
    LastDeletableTab,
    #[error("no tab deletion is pending")]
    NoPendingDelete,
}

/// Lowercases and joins whitespace runs with `-`
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// The tab strip plus one sidebar tree per tab
pub struct NavigationState {
    tabs: Vec<Tab>,
    active_tab: TabId,
    trees: BTreeMap<TabId, SidebarTree>,
    active_item: Option<MenuItemId>,
    pending_delete: Option<TabId>,
    /// Monotonic counter behind synthesized ids
    next_timestamp: u64,
}

impl NavigationState {
    /// The seeded workspace: five deletable tabs, the stock sidebar on
    /// each, `designer` active with its first item selected
    pub fn new() -> Self {
        let tabs = vec![
            Tab::new("company", "Company"),
            Tab::new("designer", "Designer"),
            Tab::new("developer", "Developer"),
            Tab::new("content", "Content"),
            Tab::new("help", "Help"),
        ];
        let trees = tabs
            .iter()
            .map(|tab| (tab.id.clone(), Self::default_tree()))
            .collect();

        Self {
            tabs,
            active_tab: TabId::new("designer"),
            trees,
            active_item: Some(MenuItemId::new("folder-structure")),
            pending_delete: None,
            next_timestamp: 1,
        }
    }

    fn default_tree() -> SidebarTree {
        SidebarTree::with_sections(vec![
            Section::new("figma-governance", "FIGMA GOVERNANCE").with_items(vec![
                MenuItem::new("folder-structure", "Folder Name & Structure", IconKind::Folder),
                MenuItem::new("file-structure", "File Name & Structure", IconKind::File),
                MenuItem::new("page-structure", "Page Name & Structure", IconKind::Page),
                MenuItem::new("cover-thumbnail", "Cover / Thumbnail", IconKind::Image),
                MenuItem::new("layer-convention", "Layer Name Convention", IconKind::Layers),
            ]),
            Section::new("design-resource", "DESIGN RESOURCE").with_items(vec![
                MenuItem::new("design-bank", "Design Bank", IconKind::Design),
                MenuItem::new("design-system", "Design System", IconKind::System),
                MenuItem::new("flow", "Flow", IconKind::Flow),
                MenuItem::new("ai", "AI", IconKind::Ai),
            ]),
        ])
    }

    fn tick(&mut self) -> u64 {
        let t = self.next_timestamp;
        self.next_timestamp += 1;
        t
    }

    // Tabs

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_tab(&self) -> &TabId {
        &self.active_tab
    }

    pub fn switch_tab(&mut self, id: &TabId) -> Result<(), NavigationError> {
        if !self.tabs.iter().any(|t| t.id == *id) {
            return Err(NavigationError::UnknownTab(id.clone()));
        }
        self.active_tab = id.clone();
        Ok(())
    }

    /// Adds a tab with a synthesized id and makes it active
    pub fn add_tab(&mut self, label: &str) -> TabId {
        let id = TabId::new(format!("tab-{}-{}", slugify(label), self.tick()));
        self.tabs.push(Tab {
            id: id.clone(),
            label: label.to_string(),
            deletable: true,
        });
        self.trees.insert(id.clone(), SidebarTree::new());
        self.active_tab = id.clone();
        id
    }

    pub fn rename_tab(&mut self, id: &TabId, label: &str) -> Result<(), NavigationError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(|| NavigationError::UnknownTab(id.clone()))?;
        tab.label = label.to_string();
        Ok(())
    }

    /// Phase one of tab deletion: validates and records the request
    ///
    /// Fails when the tab is unknown, not deletable, or when it is the
    /// last deletable tab in the strip.
    pub fn request_delete_tab(&mut self, id: &TabId) -> Result<(), NavigationError> {
        let tab = self
            .tabs
            .iter()
            .find(|t| t.id == *id)
            .ok_or_else(|| NavigationError::UnknownTab(id.clone()))?;
        if !tab.deletable {
            return Err(NavigationError::NotDeletable(id.clone()));
        }
        if self.tabs.iter().filter(|t| t.deletable).count() <= 1 {
            return Err(NavigationError::LastDeletableTab);
        }
        self.pending_delete = Some(id.clone());
        Ok(())
    }

    /// Phase two: performs the recorded deletion
    ///
    /// Deleting the active tab activates the first remaining deletable
    /// tab, falling back to the first tab.
    pub fn confirm_delete_tab(&mut self) -> Result<TabId, NavigationError> {
        let id = self.pending_delete.take().ok_or(NavigationError::NoPendingDelete)?;
        self.tabs.retain(|t| t.id != id);
        self.trees.remove(&id);

        if self.active_tab == id {
            let next = self
                .tabs
                .iter()
                .find(|t| t.deletable)
                .or_else(|| self.tabs.first())
                .map(|t| t.id.clone());
            if let Some(next) = next {
                self.active_tab = next;
            }
        }
        Ok(id)
    }

    pub fn cancel_delete_tab(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<&TabId> {
        self.pending_delete.as_ref()
    }

    // Sidebar trees

    /// The active tab's sidebar
    pub fn tree(&self) -> &SidebarTree {
        // Every tab id in `tabs` has a tree entry
        &self.trees[&self.active_tab]
    }

    pub fn tree_of(&self, tab: &TabId) -> Option<&SidebarTree> {
        self.trees.get(tab)
    }

    fn active_tree_mut(&mut self) -> &mut SidebarTree {
        self.trees.entry(self.active_tab.clone()).or_default()
    }

    // Sections (on the active tab)

    /// Appends an empty `NEW SECTION <n>` section
    pub fn add_section(&mut self) -> SectionId {
        let ordinal = self.tree().sections().len() + 1;
        let id = SectionId::new(format!("section-{}", self.tick()));
        let section = Section::new(id.as_str(), format!("NEW SECTION {}", ordinal));
        self.active_tree_mut().push_section(section);
        id
    }

    pub fn reorder_sections(&mut self, source: &SectionId, target: &SectionId) {
        self.active_tree_mut().reorder_sections(source, target);
    }

    // Menu items (on the active tab)

    /// Adds an item to a section, with an id slugged from the title
    pub fn add_item(
        &mut self,
        section: &SectionId,
        title: &str,
        icon: IconKind,
    ) -> Result<MenuItemId, NavigationError> {
        let id = MenuItemId::new(format!("{}-{}", slugify(title), self.tick()));
        let tree = self.active_tree_mut();
        let section = tree
            .section_mut(section)
            .ok_or_else(|| NavigationError::UnknownSection(section.clone()))?;
        section.items.push(MenuItem {
            id: id.clone(),
            title: title.to_string(),
            icon,
        });
        Ok(id)
    }

    pub fn rename_item(&mut self, id: &MenuItemId, title: &str) -> Result<(), NavigationError> {
        let item = self
            .active_tree_mut()
            .item_mut(id)
            .ok_or_else(|| NavigationError::UnknownItem(id.clone()))?;
        item.title = title.to_string();
        Ok(())
    }

    pub fn change_item_icon(
        &mut self,
        id: &MenuItemId,
        icon: IconKind,
    ) -> Result<(), NavigationError> {
        let item = self
            .active_tree_mut()
            .item_mut(id)
            .ok_or_else(|| NavigationError::UnknownItem(id.clone()))?;
        item.icon = icon;
        Ok(())
    }

    /// Duplicates an item at the end of its section
    ///
    /// The copy gets a `-copy-<timestamp>` id and a ` (Copy)` title suffix.
    pub fn duplicate_item(&mut self, id: &MenuItemId) -> Result<MenuItemId, NavigationError> {
        let timestamp = self.tick();
        let tree = self.active_tree_mut();
        let section_id = tree
            .section_of(id)
            .cloned()
            .ok_or_else(|| NavigationError::UnknownItem(id.clone()))?;

        let original = tree
            .item(id)
            .cloned()
            .ok_or_else(|| NavigationError::UnknownItem(id.clone()))?;
        let copy = MenuItem {
            id: original.id.duplicate(timestamp),
            title: format!("{} (Copy)", original.title),
            icon: original.icon,
        };
        let copy_id = copy.id.clone();
        tree.section_mut(&section_id)
            .ok_or_else(|| NavigationError::UnknownSection(section_id.clone()))?
            .items
            .push(copy);
        Ok(copy_id)
    }

    pub fn delete_item(&mut self, id: &MenuItemId) -> Result<(), NavigationError> {
        if self.active_tree_mut().remove_item(id).is_none() {
            return Err(NavigationError::UnknownItem(id.clone()));
        }
        if self.active_item.as_ref() == Some(id) {
            self.active_item = None;
        }
        Ok(())
    }

    pub fn move_item(
        &mut self,
        item: &MenuItemId,
        target_section: &SectionId,
        before: Option<&MenuItemId>,
    ) {
        self.active_tree_mut().move_item(item, target_section, before);
    }

    // Selection

    pub fn active_item(&self) -> Option<&MenuItemId> {
        self.active_item.as_ref()
    }

    /// Marks an item on the active tab as selected
    pub fn select_item(&mut self, id: &MenuItemId) -> Result<(), NavigationError> {
        if self.tree().item(id).is_none() {
            return Err(NavigationError::UnknownItem(id.clone()));
        }
        self.active_item = Some(id.clone());
        Ok(())
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
