//! # Workspace Service
//!
//! The composition root: one signed-in user working on one page, with the
//! tab strip, sidebar, page header, block editor and its view tree wired
//! together behind the auth gate.
//!
//! ## Philosophy
//!
//! - **Gate first**: every workspace operation checks the session; nothing
//!   leaks to a signed-out caller
//! - **Injected edges**: page content comes from a `ContentProvider`,
//!   persistence from a `KeyValueStore`; the workspace owns neither
//! - **Drafts are ephemeral**: navigating away reloads from the provider
//!   and discards uncommitted edits
//!
//! ## Non-Goals
//!
//! - Rendering, multi-user collaboration, server sync

use content_registry::ContentProvider;
use core_types::{BlockId, ComponentId, IconKind, MenuItemId, SectionId, TabId};
use editor_core::{BlockType, CaretState, Document, EditOutcome, EditorKey, Mark};
use event_log::{EventLog, LogEntry, LogLevel};
use services_navigation::{NavigationError, NavigationState, SidebarTree, Tab};
use services_session::{AuthError, KeyValueStore, SessionService, StoreError, User};
use services_slash_menu::{Invocation, MenuEntry, SlashAction, SlashMenu};
use services_view_sync::ViewTree;
use thiserror::Error;

/// Workspace operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkspaceError {
    #[error("not signed in")]
    NotSignedIn,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("page title cannot be empty")]
    EmptyTitle,
    #[error("no slash menu is open")]
    NoSlashMenu,
}

/// Editable page header above the block editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeader {
    pub title: String,
    pub icon: IconKind,
    pub description: String,
}

/// The workspace: session, navigation, page and editor composed
pub struct Workspace<P: ContentProvider, S: KeyValueStore> {
    session: SessionService<S>,
    nav: NavigationState,
    provider: P,
    doc: Document,
    view: ViewTree,
    header: PageHeader,
    focused: Option<BlockId>,
    invocation: Option<Invocation>,
    log: EventLog,
}

impl<P: ContentProvider, S: KeyValueStore> Workspace<P, S> {
    pub fn new(provider: P, store: S) -> Self {
        Self {
            session: SessionService::new(store),
            nav: NavigationState::new(),
            provider,
            doc: Document::new(),
            view: ViewTree::new(),
            header: PageHeader {
                title: "Untitled".to_string(),
                icon: IconKind::File,
                description: String::new(),
            },
            focused: None,
            invocation: None,
            log: EventLog::new(),
        }
    }

    fn gate(&self) -> Result<(), WorkspaceError> {
        if self.session.is_signed_in() {
            Ok(())
        } else {
            Err(WorkspaceError::NotSignedIn)
        }
    }

    /// Loads the active menu item's page into the editor
    fn load_active_page(&mut self) {
        let page = match self.nav.active_item() {
            Some(id) => self.provider.content(id),
            None => self.provider.content(&MenuItemId::new("default")),
        };
        self.header = PageHeader {
            title: page.title,
            icon: page.icon,
            description: page.description,
        };
        self.doc.load(page.blocks);
        self.focused = None;
        self.invocation = None;
        self.sync_view();
    }

    fn sync_view(&mut self) {
        self.view.sync(&self.doc, self.focused.as_ref());
    }

    /// Consumes the document's pending focus intent into workspace focus
    fn absorb_focus(&mut self) {
        if let Some(intent) = self.doc.take_focus_intent() {
            self.focused = Some(intent.block);
        }
    }

    // Session

    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<User, WorkspaceError> {
        let user = self.session.sign_in(email, password)?;
        self.log.record(
            LogEntry::new(LogLevel::Info, "workspace opened")
                .with_source(ComponentId::new("workspace")),
        );
        self.load_active_page();
        Ok(user)
    }

    pub fn restore_session(&mut self) -> Result<Option<User>, WorkspaceError> {
        let user = self.session.restore()?;
        if user.is_some() {
            self.load_active_page();
        }
        Ok(user)
    }

    pub fn sign_out(&mut self) -> Result<(), WorkspaceError> {
        self.session.sign_out()?;
        self.doc = Document::new();
        self.view = ViewTree::new();
        self.focused = None;
        self.invocation = None;
        Ok(())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    // Navigation

    pub fn tabs(&self) -> &[Tab] {
        self.nav.tabs()
    }

    pub fn sidebar(&self) -> &SidebarTree {
        self.nav.tree()
    }

    pub fn active_menu(&self) -> Option<&MenuItemId> {
        self.nav.active_item()
    }

    /// Selects a menu item and swaps the editor to its page
    ///
    /// Uncommitted edits to the previous page are discarded.
    pub fn select_menu(&mut self, id: &MenuItemId) -> Result<(), WorkspaceError> {
        self.gate()?;
        self.nav.select_item(id)?;
        self.log.record(
            LogEntry::new(LogLevel::Debug, "page selected")
                .with_source(ComponentId::new("workspace"))
                .with_field("menu", id.as_str()),
        );
        self.load_active_page();
        Ok(())
    }

    pub fn switch_tab(&mut self, id: &TabId) -> Result<(), WorkspaceError> {
        self.gate()?;
        self.nav.switch_tab(id)?;
        Ok(())
    }

    pub fn add_tab(&mut self, label: &str) -> Result<TabId, WorkspaceError> {
        self.gate()?;
        Ok(self.nav.add_tab(label))
    }

    pub fn request_delete_tab(&mut self, id: &TabId) -> Result<(), WorkspaceError> {
        self.gate()?;
        Ok(self.nav.request_delete_tab(id)?)
    }

    pub fn confirm_delete_tab(&mut self) -> Result<TabId, WorkspaceError> {
        self.gate()?;
        Ok(self.nav.confirm_delete_tab()?)
    }

    pub fn cancel_delete_tab(&mut self) {
        self.nav.cancel_delete_tab();
    }

    pub fn add_section(&mut self) -> Result<SectionId, WorkspaceError> {
        self.gate()?;
        Ok(self.nav.add_section())
    }

    pub fn reorder_sections(
        &mut self,
        source: &SectionId,
        target: &SectionId,
    ) -> Result<(), WorkspaceError> {
        self.gate()?;
        self.nav.reorder_sections(source, target);
        Ok(())
    }

    pub fn add_menu_item(
        &mut self,
        section: &SectionId,
        title: &str,
        icon: IconKind,
    ) -> Result<MenuItemId, WorkspaceError> {
        self.gate()?;
        Ok(self.nav.add_item(section, title, icon)?)
    }

    pub fn rename_menu_item(&mut self, id: &MenuItemId, title: &str) -> Result<(), WorkspaceError> {
        self.gate()?;
        Ok(self.nav.rename_item(id, title)?)
    }

    pub fn change_menu_icon(
        &mut self,
        id: &MenuItemId,
        icon: IconKind,
    ) -> Result<(), WorkspaceError> {
        self.gate()?;
        Ok(self.nav.change_item_icon(id, icon)?)
    }

    pub fn duplicate_menu_item(&mut self, id: &MenuItemId) -> Result<MenuItemId, WorkspaceError> {
        self.gate()?;
        Ok(self.nav.duplicate_item(id)?)
    }

    pub fn delete_menu_item(&mut self, id: &MenuItemId) -> Result<(), WorkspaceError> {
        self.gate()?;
        Ok(self.nav.delete_item(id)?)
    }

    pub fn move_menu_item(
        &mut self,
        item: &MenuItemId,
        target_section: &SectionId,
        before: Option<&MenuItemId>,
    ) -> Result<(), WorkspaceError> {
        self.gate()?;
        self.nav.move_item(item, target_section, before);
        Ok(())
    }

    // Page header

    pub fn header(&self) -> &PageHeader {
        &self.header
    }

    /// Renames the page; whitespace-only titles are rejected
    pub fn set_page_title(&mut self, title: &str) -> Result<(), WorkspaceError> {
        self.gate()?;
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(WorkspaceError::EmptyTitle);
        }
        self.header.title = trimmed.to_string();
        Ok(())
    }

    pub fn set_page_icon(&mut self, icon: IconKind) -> Result<(), WorkspaceError> {
        self.gate()?;
        self.header.icon = icon;
        Ok(())
    }

    // Editor

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn view(&self) -> &ViewTree {
        &self.view
    }

    pub fn focused(&self) -> Option<&BlockId> {
        self.focused.as_ref()
    }

    pub fn set_focus(&mut self, block: Option<BlockId>) {
        self.focused = block;
        self.sync_view();
    }

    /// Routes typed text into a block and tracks slash invocation state
    pub fn type_text(&mut self, block: &BlockId, text: &str) -> Result<(), WorkspaceError> {
        self.gate()?;
        self.doc.set_content(block, text);
        self.invocation = self
            .doc
            .slash_state()
            .map(|state| Invocation::Inline { block: state.block });
        self.focused = Some(*block);
        self.sync_view();
        Ok(())
    }

    /// Routes a structural key into the focused block
    pub fn apply_key(
        &mut self,
        block: &BlockId,
        key: EditorKey,
        caret: CaretState,
    ) -> Result<EditOutcome, WorkspaceError> {
        self.gate()?;
        let outcome = self.doc.apply_key(block, key, caret);
        if self.doc.slash_state().is_none() {
            self.invocation = None;
        }
        self.absorb_focus();
        self.sync_view();
        Ok(outcome)
    }

    /// Opens the slash menu from a block's add button
    pub fn open_slash_button(&mut self, anchor: &BlockId) -> Result<(), WorkspaceError> {
        self.gate()?;
        self.invocation = Some(Invocation::Button { anchor: *anchor });
        Ok(())
    }

    /// Entries the open slash menu should show, filtered by the live query
    pub fn slash_entries(&self) -> Vec<&'static MenuEntry> {
        match self.doc.slash_state() {
            Some(state) => SlashMenu::filter(&state.query),
            None => SlashMenu::filter(""),
        }
    }

    /// Confirms a slash selection under the invocation that opened it
    ///
    /// Inline converts the typing block and strips the `/query`; button
    /// inserts a fresh block after the anchor.
    pub fn confirm_slash(&mut self, kind: BlockType) -> Result<BlockId, WorkspaceError> {
        self.gate()?;
        let invocation = self.invocation.take().ok_or(WorkspaceError::NoSlashMenu)?;
        let result = match SlashMenu::resolve(invocation, kind) {
            SlashAction::ConvertBlock { .. } => {
                self.doc.confirm_slash(kind).ok_or(WorkspaceError::NoSlashMenu)
            }
            SlashAction::InsertBlock { anchor, kind } => self
                .doc
                .insert_after(&anchor, kind)
                .ok_or(WorkspaceError::NoSlashMenu),
        };
        let block = result?;
        self.absorb_focus();
        self.sync_view();
        Ok(block)
    }

    pub fn dismiss_slash(&mut self) {
        self.doc.dismiss_slash();
        self.invocation = None;
    }

    pub fn slash_invocation(&self) -> Option<&Invocation> {
        self.invocation.as_ref()
    }

    pub fn reorder_blocks(&mut self, source: &BlockId, target: &BlockId) -> Result<(), WorkspaceError> {
        self.gate()?;
        self.doc.reorder(source, target);
        self.sync_view();
        Ok(())
    }

    pub fn apply_mark(
        &mut self,
        block: &BlockId,
        range: std::ops::Range<usize>,
        mark: &Mark,
    ) -> Result<(), WorkspaceError> {
        self.gate()?;
        self.doc.apply_mark(block, range, mark);
        self.sync_view();
        Ok(())
    }

    pub fn toggle_checked(&mut self, block: &BlockId) -> Result<(), WorkspaceError> {
        self.gate()?;
        self.doc.toggle_checked(block);
        self.sync_view();
        Ok(())
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }
}
