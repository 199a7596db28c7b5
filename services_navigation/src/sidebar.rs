//! Sidebar tree: sections and menu items for one tab

use core_types::{IconKind, MenuItemId, SectionId};
use serde::{Deserialize, Serialize};

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub title: String,
    pub icon: IconKind,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, icon: IconKind) -> Self {
        Self {
            id: MenuItemId::new(id),
            title: title.into(),
            icon,
        }
    }
}

/// A titled group of menu items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub items: Vec<MenuItem>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(id),
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }
}

/// The ordered section list shown for one tab
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SidebarTree {
    sections: Vec<Section>,
}

impl SidebarTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == *id)
    }

    /// Looks up an item anywhere in the tree
    pub fn item(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|i| i.id == *id)
    }

    /// Id of the section containing an item
    pub fn section_of(&self, id: &MenuItemId) -> Option<&SectionId> {
        self.sections
            .iter()
            .find(|s| s.items.iter().any(|i| i.id == *id))
            .map(|s| &s.id)
    }

    pub fn push_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn remove_section(&mut self, id: &SectionId) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != *id);
        self.sections.len() != before
    }

    /// Moves `source` to `target`'s position (array-move)
    ///
    /// Unknown ids and self-drops are silently ignored.
    pub fn reorder_sections(&mut self, source: &SectionId, target: &SectionId) {
        if source == target {
            return;
        }
        let Some(from) = self.sections.iter().position(|s| s.id == *source) else {
            return;
        };
        let Some(to) = self.sections.iter().position(|s| s.id == *target) else {
            return;
        };
        let moved = self.sections.remove(from);
        self.sections.insert(to, moved);
    }

    pub fn section_mut(&mut self, id: &SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == *id)
    }

    pub fn item_mut(&mut self, id: &MenuItemId) -> Option<&mut MenuItem> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.items.iter_mut())
            .find(|i| i.id == *id)
    }

    /// Removes an item from whichever section holds it
    pub fn remove_item(&mut self, id: &MenuItemId) -> Option<MenuItem> {
        for section in &mut self.sections {
            if let Some(pos) = section.items.iter().position(|i| i.id == *id) {
                return Some(section.items.remove(pos));
            }
        }
        None
    }

    /// Moves an item into `target_section`, splicing before `before`
    ///
    /// `before: None` appends at the section end. Works both within one
    /// section and across sections. Ignored when the item or section is
    /// unknown, or when dropping an item onto itself.
    pub fn move_item(
        &mut self,
        item: &MenuItemId,
        target_section: &SectionId,
        before: Option<&MenuItemId>,
    ) {
        if before == Some(item) {
            return;
        }
        if self.section(target_section).is_none() {
            return;
        }
        let Some(moved) = self.remove_item(item) else {
            return;
        };
        // The target section was checked above and survives the removal
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == *target_section) {
            let index = before
                .and_then(|b| section.items.iter().position(|i| i.id == *b))
                .unwrap_or(section.items.len());
            section.items.insert(index, moved);
        }
    }
}
