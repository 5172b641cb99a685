//! The inline toolbar controller.
//!
//! [`InlineToolbar`] listens for selection changes on an [`EditorStore`],
//! recomputes where the panel goes one tick later, and renders either its
//! default action structure or the override content an action installed.
//!
//! # Lifecycle
//!
//! 1. Build with [`ToolbarBuilder`].
//! 2. [`mount`](InlineToolbar::mount) subscribes to selection changes.
//! 3. The host reports the panel's root node with
//!    [`attach_node`](InlineToolbar::attach_node) once it exists.
//! 4. The host calls [`render`](InlineToolbar::render) whenever
//!    [`changed`](InlineToolbar::changed) fires (and on its own schedule).
//! 5. [`unmount`](InlineToolbar::unmount) (or dropping the toolbar)
//!    unsubscribes and detaches the node. Placement tasks still queued at that
//!    point do nothing when they run.
//!
//! # Example
//!
//! ```ignore
//! let ticks = Arc::new(TickQueue::new());
//! let store = Arc::new(EditorStore::<MyEditorState>::new(ticks.clone()));
//! let toolbar = InlineToolbar::builder(store.clone(), host.clone())
//!     .with_structure(vec![Arc::new(BoldButton), Arc::new(ItalicButton)])
//!     .build()?;
//!
//! toolbar.mount();
//! toolbar.attach_node(panel_node);
//!
//! store.selection_changed();   // editor reports a new selection
//! ticks.run_tick()?;           // after the notification's handlers return
//! let frame = toolbar.render();
//! ```

use std::sync::{Arc, Weak};

use inline_toolbar_core::logging::targets;
use inline_toolbar_core::{EditorState, EditorStore, Signal, StoreKey, SubscriptionId};
use parking_lot::Mutex;

use crate::action::{ActionProps, OverrideHandle, SharedAction, UiNode};
use crate::config::ToolbarConfig;
use crate::error::Result;
use crate::geometry::AnchorPosition;
use crate::host::{reference_rect, HostEnvironment, NodeId};
use crate::indicator::IndicatorMarkers;
use crate::override_slot::{ContentSlot, SlotTransition};
use crate::positioning::{compute_placement, Placement};
use crate::theme::ToolbarTheme;
use crate::visibility::{is_visible, PanelStyle};

/// Which body the panel renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// The default action structure.
    Structure,
    /// Override content.
    Override,
}

/// One rendered frame of the toolbar.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedToolbar {
    /// Class name of the panel root.
    pub class_name: String,
    /// Position, visibility, and transition of the panel root.
    pub style: PanelStyle,
    /// Indicator markers; `None` until the first placement.
    pub indicator: Option<IndicatorMarkers>,
    /// Which body `children` came from.
    pub content: ContentKind,
    /// The rendered actions, in order.
    pub children: Vec<UiNode>,
}

/// Mutable controller state.
struct ToolbarState<S: EditorState> {
    /// The panel's root node, once the host has attached it.
    node: Option<NodeId>,
    /// Live selection subscription while mounted.
    subscription: Option<SubscriptionId>,
    /// Last committed placement. Kept while hidden.
    position: Option<AnchorPosition>,
    indicator: Option<IndicatorMarkers>,
    content: ContentSlot<S>,
}

impl<S: EditorState> Default for ToolbarState<S> {
    fn default() -> Self {
        Self {
            node: None,
            subscription: None,
            position: None,
            indicator: None,
            content: ContentSlot::Default,
        }
    }
}

/// Shared internals. Deferred tasks and store handlers hold this weakly.
struct ToolbarInner<S: EditorState> {
    store: Arc<EditorStore<S>>,
    host: Arc<dyn HostEnvironment>,
    config: ToolbarConfig,
    theme: ToolbarTheme,
    structure: Vec<SharedAction<S>>,
    state: Mutex<ToolbarState<S>>,
    changed: Signal<()>,
}

/// Builder for [`InlineToolbar`].
pub struct ToolbarBuilder<S: EditorState> {
    store: Arc<EditorStore<S>>,
    host: Arc<dyn HostEnvironment>,
    config: ToolbarConfig,
    theme: ToolbarTheme,
    structure: Vec<SharedAction<S>>,
}

impl<S: EditorState> ToolbarBuilder<S> {
    /// Set the configuration using builder pattern.
    pub fn with_config(mut self, config: ToolbarConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the theme using builder pattern.
    pub fn with_theme(mut self, theme: ToolbarTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the default action structure using builder pattern.
    pub fn with_structure(mut self, structure: Vec<SharedAction<S>>) -> Self {
        self.structure = structure;
        self
    }

    /// Append one action to the default structure.
    pub fn with_action(mut self, action: SharedAction<S>) -> Self {
        self.structure.push(action);
        self
    }

    /// Validate the configuration and build the toolbar.
    pub fn build(self) -> Result<InlineToolbar<S>> {
        self.config.validate()?;
        Ok(InlineToolbar {
            inner: Arc::new(ToolbarInner {
                store: self.store,
                host: self.host,
                config: self.config,
                theme: self.theme,
                structure: self.structure,
                state: Mutex::new(ToolbarState::default()),
                changed: Signal::new(),
            }),
        })
    }
}

/// A floating toolbar anchored above the editor's selection.
pub struct InlineToolbar<S: EditorState> {
    inner: Arc<ToolbarInner<S>>,
}

static_assertions::assert_impl_all!(InlineToolbar<inline_toolbar_core::SelectionSnapshot>: Send, Sync);

impl<S: EditorState> InlineToolbar<S> {
    /// Start building a toolbar for the session behind `store`.
    pub fn builder(store: Arc<EditorStore<S>>, host: Arc<dyn HostEnvironment>) -> ToolbarBuilder<S> {
        ToolbarBuilder {
            store,
            host,
            config: ToolbarConfig::default(),
            theme: ToolbarTheme::default(),
            structure: Vec::new(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Subscribe to selection changes. Does nothing if already mounted.
    pub fn mount(&self) {
        let mut state = self.inner.state.lock();
        if state.subscription.is_some() {
            tracing::debug!(target: targets::TOOLBAR, "toolbar already mounted");
            return;
        }

        let weak = Arc::downgrade(&self.inner);
        let subscription = self.inner.store.subscribe_to_item(StoreKey::Selection, move || {
            if let Some(inner) = weak.upgrade() {
                ToolbarInner::on_selection_changed(&inner);
            }
        });
        state.subscription = Some(subscription);
        tracing::debug!(target: targets::TOOLBAR, "toolbar mounted");
    }

    /// Unsubscribe from selection changes and detach the root node.
    ///
    /// State, including the last placement and any override content, is kept
    /// so a remount shows the panel where it was.
    pub fn unmount(&self) {
        self.inner.unmount();
    }

    /// Whether the toolbar is subscribed to selection changes.
    pub fn is_mounted(&self) -> bool {
        self.inner.state.lock().subscription.is_some()
    }

    /// Record the panel's root node. Placement is skipped until this is set.
    pub fn attach_node(&self, node: NodeId) {
        self.inner.state.lock().node = Some(node);
    }

    /// Forget the panel's root node.
    pub fn detach_node(&self) {
        self.inner.state.lock().node = None;
    }

    /// The attached root node, if any.
    pub fn node(&self) -> Option<NodeId> {
        self.inner.state.lock().node
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// React to a selection change: queue one placement for the next tick.
    ///
    /// The store handler installed by [`mount`](Self::mount) calls this; it is
    /// public for hosts that deliver selection changes some other way.
    pub fn on_selection_changed(&self) {
        ToolbarInner::on_selection_changed(&self.inner);
    }

    /// Recompute the placement now.
    ///
    /// Returns the committed placement, or `None` if the root node is not
    /// attached or nothing is visibly selected; the previous placement is kept
    /// in both cases.
    pub fn recompute_position(&self) -> Option<Placement> {
        self.inner.recompute_position()
    }

    /// The last committed anchor.
    pub fn anchor_position(&self) -> Option<AnchorPosition> {
        self.inner.state.lock().position
    }

    /// The last committed indicator markers.
    pub fn indicator(&self) -> Option<IndicatorMarkers> {
        self.inner.state.lock().indicator
    }

    // =========================================================================
    // Override content
    // =========================================================================

    /// Show `content` instead of the default structure, or restore the
    /// structure with `None`.
    pub fn on_override_content(&self, content: Option<SharedAction<S>>) {
        self.inner.set_override(content);
    }

    /// A handle actions can use to set or clear override content.
    pub fn override_handle(&self) -> OverrideHandle<S> {
        ToolbarInner::override_handle(&self.inner)
    }

    /// Whether override content is active.
    pub fn is_overridden(&self) -> bool {
        self.inner.state.lock().content.is_overridden()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Whether the panel is shown right now.
    pub fn is_visible(&self) -> bool {
        self.inner.is_visible()
    }

    /// Emitted whenever the placement or content changes and the panel should
    /// be rendered again.
    pub fn changed(&self) -> &Signal<()> {
        &self.inner.changed
    }

    /// The configuration this toolbar was built with.
    pub fn config(&self) -> &ToolbarConfig {
        &self.inner.config
    }

    /// Render the panel.
    pub fn render(&self) -> RenderedToolbar {
        ToolbarInner::render(&self.inner)
    }
}

impl<S: EditorState> Drop for InlineToolbar<S> {
    fn drop(&mut self) {
        self.inner.unmount();
    }
}

impl<S: EditorState> ToolbarInner<S> {
    fn unmount(&self) {
        let subscription = {
            let mut state = self.state.lock();
            state.node = None;
            state.subscription.take()
        };
        if let Some(subscription) = subscription {
            self.store.unsubscribe_from_item(subscription);
            tracing::debug!(target: targets::TOOLBAR, "toolbar unmounted");
        }
    }

    fn on_selection_changed(this: &Arc<Self>) {
        // Selection geometry is only settled once the host has finished its
        // own bookkeeping for the current event.
        let weak: Weak<Self> = Arc::downgrade(this);
        this.store.scheduler().post_boxed(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.recompute_position();
            }
        }));
    }

    #[tracing::instrument(name = "inline_toolbar::recompute", skip_all, target = "inline_toolbar::toolbar", level = "trace")]
    fn recompute_position(&self) -> Option<Placement> {
        let Some(node) = self.state.lock().node else {
            tracing::debug!(target: targets::TOOLBAR, "placement skipped: root node not attached");
            return None;
        };

        // Host reads happen without the state lock held.
        let reference = reference_rect(self.host.as_ref(), node);
        let Some(selection) = self.host.visible_selection_rect() else {
            tracing::debug!(target: targets::TOOLBAR, "placement skipped: no visible selection");
            return None;
        };
        let toolbar_width = self.host.offset_width(node);
        let placement = compute_placement(
            selection,
            reference,
            toolbar_width,
            self.host.viewport_width(),
            &self.config,
        );

        let changed = {
            let mut state = self.state.lock();
            if state.node != Some(node) {
                tracing::debug!(target: targets::TOOLBAR, "placement dropped: root node detached meanwhile");
                return None;
            }
            let indicator = IndicatorMarkers::at(placement.indicator_left);
            let changed =
                state.position != Some(placement.anchor) || state.indicator != Some(indicator);
            state.position = Some(placement.anchor);
            state.indicator = Some(indicator);
            changed
        };

        tracing::debug!(
            target: targets::POSITIONING,
            top = placement.anchor.top,
            left = placement.anchor.left,
            indicator = placement.indicator_left,
            overflow = ?placement.overflow,
            "placement committed"
        );
        if changed {
            self.changed.emit(());
        }
        Some(placement)
    }

    fn set_override(&self, content: Option<SharedAction<S>>) {
        let transition = self.state.lock().content.set(content);
        tracing::debug!(target: targets::TOOLBAR, ?transition, "override content set");
        if transition != SlotTransition::Unchanged {
            self.changed.emit(());
        }
    }

    fn override_handle(this: &Arc<Self>) -> OverrideHandle<S> {
        let weak = Arc::downgrade(this);
        OverrideHandle::new(move |content| {
            if let Some(inner) = weak.upgrade() {
                inner.set_override(content);
            }
        })
    }

    fn is_visible(&self) -> bool {
        let overridden = self.state.lock().content.is_overridden();
        let selection = self.store.get_editor_state().map(|state| state.selection());
        is_visible(selection.as_ref(), overridden)
    }

    fn render(this: &Arc<Self>) -> RenderedToolbar {
        let (position, indicator, content) = {
            let state = this.state.lock();
            (state.position, state.indicator, state.content.clone())
        };
        let overridden = content.is_overridden();
        let selection = this.store.get_editor_state().map(|state| state.selection());
        let visible = is_visible(selection.as_ref(), overridden);

        let props = ActionProps::new(
            this.theme.button_styles.clone(),
            this.store.editor_state_getter(),
            this.store.editor_state_setter(),
            Self::override_handle(this),
        );

        // Actions run without the state lock so they may set override content.
        let (kind, children) = match &content {
            ContentSlot::Overridden(action) => (ContentKind::Override, vec![action.render(&props)]),
            ContentSlot::Default => (
                ContentKind::Structure,
                this.structure.iter().map(|action| action.render(&props)).collect(),
            ),
        };

        RenderedToolbar {
            class_name: this.theme.toolbar_styles.toolbar.clone(),
            style: PanelStyle::derive(position, visible, &this.config),
            indicator,
            content: kind,
            children,
        }
    }
}
