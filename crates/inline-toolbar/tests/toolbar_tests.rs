//! End-to-end tests for the inline toolbar against an in-memory host.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use inline_toolbar::{
    ActionProps, AnchorPosition, ContentKind, EdgeOverflow, HostEnvironment, InlineToolbar, NodeId,
    PositionMode, Rect, SharedAction, ToolbarAction, ToolbarConfig, ToolbarTheme, UiNode,
};
use inline_toolbar_core::{EditorStore, SelectionSnapshot, StoreKey, TickQueue};
use parking_lot::Mutex;

const ROOT: NodeId = NodeId::new(0);
const CONTAINER: NodeId = NodeId::new(1);
const PANEL: NodeId = NodeId::new(2);
const OTHER_PANEL: NodeId = NodeId::new(3);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("inline_toolbar=debug")
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Fake host
// ============================================================================

struct FakeHost {
    nodes: Mutex<HashMap<NodeId, (Option<NodeId>, PositionMode, Rect)>>,
    widths: Mutex<HashMap<NodeId, f32>>,
    viewport_width: Mutex<f32>,
    selection: Mutex<Option<Rect>>,
    reads: AtomicUsize,
}

impl FakeHost {
    /// A document root with a relatively positioned container at (100, 50)
    /// holding two panels.
    fn new() -> Arc<Self> {
        let mut nodes = HashMap::new();
        nodes.insert(ROOT, (None, PositionMode::Static, Rect::new(0.0, 0.0, 1000.0, 2000.0)));
        nodes.insert(
            CONTAINER,
            (Some(ROOT), PositionMode::Relative, Rect::new(100.0, 50.0, 800.0, 600.0)),
        );
        nodes.insert(PANEL, (Some(CONTAINER), PositionMode::Absolute, Rect::ZERO));
        nodes.insert(OTHER_PANEL, (Some(CONTAINER), PositionMode::Absolute, Rect::ZERO));

        let mut widths = HashMap::new();
        widths.insert(PANEL, 200.0);
        widths.insert(OTHER_PANEL, 200.0);

        Arc::new(Self {
            nodes: Mutex::new(nodes),
            widths: Mutex::new(widths),
            viewport_width: Mutex::new(1000.0),
            selection: Mutex::new(None),
            reads: AtomicUsize::new(0),
        })
    }

    fn select(&self, rect: Option<Rect>) {
        *self.selection.lock() = rect;
    }

    fn set_container(&self, mode: PositionMode, rect: Rect) {
        let mut nodes = self.nodes.lock();
        if let Some(entry) = nodes.get_mut(&CONTAINER) {
            entry.1 = mode;
            entry.2 = rect;
        }
    }

    fn set_width(&self, node: NodeId, width: f32) {
        self.widths.lock().insert(node, width);
    }

    fn set_viewport_width(&self, width: f32) {
        *self.viewport_width.lock() = width;
    }

    fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl HostEnvironment for FakeHost {
    fn viewport_width(&self) -> f32 {
        *self.viewport_width.lock()
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        self.nodes.lock().get(&node).map(|n| n.2).unwrap_or(Rect::ZERO)
    }

    fn position_mode(&self, node: NodeId) -> PositionMode {
        self.nodes.lock().get(&node).map(|n| n.1).unwrap_or_default()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.lock().get(&node).and_then(|n| n.0)
    }

    fn document_root(&self) -> NodeId {
        ROOT
    }

    fn offset_width(&self, node: NodeId) -> f32 {
        self.widths.lock().get(&node).copied().unwrap_or(0.0)
    }

    fn visible_selection_rect(&self) -> Option<Rect> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        *self.selection.lock()
    }
}

// ============================================================================
// Editor wiring
// ============================================================================

struct Session {
    ticks: Arc<TickQueue>,
    store: Arc<EditorStore<SelectionSnapshot>>,
    host: Arc<FakeHost>,
    editor: Arc<Mutex<SelectionSnapshot>>,
}

impl Session {
    fn new() -> Self {
        init_tracing();
        let ticks = Arc::new(TickQueue::new());
        let store = Arc::new(EditorStore::new(ticks.clone()));
        let editor = Arc::new(Mutex::new(SelectionSnapshot::IDLE));

        let reader = editor.clone();
        let writer = editor.clone();
        store.set_editor_accessors(
            Arc::new(move || *reader.lock()),
            Arc::new(move |next: SelectionSnapshot| *writer.lock() = next),
        );

        Self {
            ticks,
            store,
            host: FakeHost::new(),
            editor,
        }
    }

    fn toolbar(&self, structure: Vec<SharedAction<SelectionSnapshot>>) -> InlineToolbar<SelectionSnapshot> {
        let toolbar = InlineToolbar::builder(self.store.clone(), self.host.clone())
            .with_structure(structure)
            .build()
            .unwrap();
        toolbar.mount();
        toolbar.attach_node(PANEL);
        toolbar
    }

    /// The editor reports a new selection and the host runs one tick.
    fn select(&self, snapshot: SelectionSnapshot, rect: Option<Rect>) {
        *self.editor.lock() = snapshot;
        self.host.select(rect);
        self.store.selection_changed();
        self.ticks.run_tick().unwrap();
    }
}

struct Label(&'static str);

impl ToolbarAction<SelectionSnapshot> for Label {
    fn render(&self, _props: &ActionProps<SelectionSnapshot>) -> UiNode {
        UiNode::Text(self.0.into())
    }

    fn name(&self) -> &str {
        self.0
    }
}

/// Installs a prompt as override content when rendered with `armed` set.
struct LinkButton {
    armed: Mutex<bool>,
}

impl ToolbarAction<SelectionSnapshot> for LinkButton {
    fn render(&self, props: &ActionProps<SelectionSnapshot>) -> UiNode {
        if std::mem::take(&mut *self.armed.lock()) {
            props.on_override_content(Some(Arc::new(Label("url prompt"))));
        }
        UiNode::button("link", &props.theme, false)
    }
}

// ============================================================================
// Visibility
// ============================================================================

#[test]
fn test_hidden_until_range_selected_in_focused_editor() {
    let session = Session::new();
    let toolbar = session.toolbar(vec![Arc::new(Label("bold"))]);
    let rect = Some(Rect::new(150.0, 200.0, 40.0, 18.0));

    session.select(SelectionSnapshot::new(true, true), rect);
    assert!(!toolbar.render().style.is_visible());

    session.select(SelectionSnapshot::new(false, false), rect);
    assert!(!toolbar.render().style.is_visible());

    session.select(SelectionSnapshot::ranged(), rect);
    let frame = toolbar.render();
    assert!(frame.style.is_visible());
    assert!(frame.style.interactive);
    assert_eq!(frame.style.transform.scale, 1.0);
}

#[test]
fn test_hidden_panel_keeps_last_position() {
    let session = Session::new();
    let toolbar = session.toolbar(vec![Arc::new(Label("bold"))]);

    session.select(SelectionSnapshot::ranged(), Some(Rect::new(150.0, 200.0, 40.0, 18.0)));
    let shown = toolbar.render();

    session.select(SelectionSnapshot::IDLE, None);
    let hidden = toolbar.render();

    assert!(!hidden.style.is_visible());
    assert!(hidden.style.hidden_from_layout);
    assert!(hidden.style.transition.is_none());
    assert_eq!(hidden.style.position, shown.style.position);
}

#[test]
fn test_override_keeps_panel_visible() {
    let session = Session::new();
    let toolbar = session.toolbar(vec![Arc::new(Label("bold"))]);

    toolbar.on_override_content(Some(Arc::new(Label("url prompt"))));
    session.select(SelectionSnapshot::new(true, false), None);
    assert!(toolbar.is_visible());

    toolbar.on_override_content(None);
    assert!(!toolbar.is_visible());
}

#[test]
fn test_without_editor_accessors_panel_is_hidden() {
    init_tracing();
    let ticks = Arc::new(TickQueue::new());
    let store = Arc::new(EditorStore::<SelectionSnapshot>::new(ticks));
    let toolbar = InlineToolbar::builder(store, FakeHost::new()).build().unwrap();

    assert!(!toolbar.is_visible());
    let frame = toolbar.render();
    assert!(frame.style.position.is_none());
    assert!(frame.indicator.is_none());
}

// ============================================================================
// Placement
// ============================================================================

#[test]
fn test_anchor_relative_to_positioned_container() {
    let session = Session::new();
    let toolbar = session.toolbar(Vec::new());

    session.select(SelectionSnapshot::ranged(), Some(Rect::new(400.0, 100.0, 40.0, 18.0)));

    // top = 100 - 50 - 30, left = 400 - 100 + 20
    assert_eq!(toolbar.anchor_position(), Some(AnchorPosition::new(20.0, 320.0)));
}

#[test]
fn test_anchor_falls_back_to_document_root() {
    let session = Session::new();
    session.host.set_container(PositionMode::Static, Rect::new(100.0, 50.0, 800.0, 600.0));
    let toolbar = session.toolbar(Vec::new());

    session.select(SelectionSnapshot::ranged(), Some(Rect::new(480.0, 300.0, 40.0, 18.0)));

    assert_eq!(toolbar.anchor_position(), Some(AnchorPosition::new(270.0, 500.0)));
    assert_eq!(toolbar.indicator().map(|m| m.left()), Some(100.0));
}

#[test]
fn test_left_edge_shift_keeps_indicator_on_selection() {
    let session = Session::new();
    session.host.set_container(PositionMode::Static, Rect::ZERO);
    let toolbar = session.toolbar(Vec::new());

    session.select(SelectionSnapshot::ranged(), Some(Rect::new(20.0, 100.0, 20.0, 18.0)));

    // Centered at 30 the panel needs 105 on each side: 75 short.
    let placement = toolbar.recompute_position().unwrap();
    assert_eq!(placement.overflow, EdgeOverflow::Left(75.0));
    assert_eq!(placement.anchor.left, 105.0);
    assert_eq!(placement.indicator_left, 25.0);

    let frame = toolbar.render();
    let markers = frame.indicator.unwrap();
    assert_eq!(markers.before, markers.after);
    assert_eq!(markers.left(), 25.0);
}

#[test]
fn test_right_edge_shift() {
    let session = Session::new();
    session.host.set_container(PositionMode::Static, Rect::ZERO);
    let toolbar = session.toolbar(Vec::new());

    session.select(SelectionSnapshot::ranged(), Some(Rect::new(960.0, 100.0, 20.0, 18.0)));

    let placement = toolbar.recompute_position().unwrap();
    assert_eq!(placement.overflow, EdgeOverflow::Right(75.0));
    assert_eq!(placement.anchor.left, 895.0);
    assert_eq!(placement.indicator_left, 175.0);
}

#[test]
fn test_narrow_viewport_prefers_left_edge() {
    let session = Session::new();
    session.host.set_container(PositionMode::Static, Rect::ZERO);
    session.host.set_viewport_width(150.0);
    let toolbar = session.toolbar(Vec::new());

    session.select(SelectionSnapshot::ranged(), Some(Rect::new(50.0, 100.0, 20.0, 18.0)));

    let placement = toolbar.recompute_position().unwrap();
    assert!(matches!(placement.overflow, EdgeOverflow::Left(_)));
}

#[test]
fn test_recompute_is_idempotent() {
    let session = Session::new();
    let toolbar = session.toolbar(Vec::new());
    session.select(SelectionSnapshot::ranged(), Some(Rect::new(150.0, 100.0, 40.0, 18.0)));

    let renders = Arc::new(AtomicUsize::new(0));
    let counter = renders.clone();
    toolbar.changed().connect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let first = toolbar.recompute_position();
    let second = toolbar.recompute_position();
    assert_eq!(first, second);
    assert_eq!(renders.load(Ordering::SeqCst), 0);
}

#[test]
fn test_missing_selection_rect_keeps_previous_placement() {
    let session = Session::new();
    let toolbar = session.toolbar(Vec::new());
    session.select(SelectionSnapshot::ranged(), Some(Rect::new(150.0, 100.0, 40.0, 18.0)));
    let before = (toolbar.anchor_position(), toolbar.indicator());

    session.select(SelectionSnapshot::ranged(), None);

    assert_eq!((toolbar.anchor_position(), toolbar.indicator()), before);
}

#[test]
fn test_unlaid_out_panel_corrects_on_next_change() {
    let session = Session::new();
    session.host.set_container(PositionMode::Static, Rect::ZERO);
    session.host.set_width(PANEL, 0.0);
    let toolbar = session.toolbar(Vec::new());

    session.select(SelectionSnapshot::ranged(), Some(Rect::new(0.0, 100.0, 4.0, 18.0)));
    assert_eq!(toolbar.anchor_position().map(|p| p.left), Some(5.0));

    session.host.set_width(PANEL, 200.0);
    session.select(SelectionSnapshot::ranged(), Some(Rect::new(0.0, 100.0, 4.0, 18.0)));
    assert_eq!(toolbar.anchor_position().map(|p| p.left), Some(105.0));
}

#[test]
fn test_position_change_notifies() {
    let session = Session::new();
    let toolbar = session.toolbar(Vec::new());

    let renders = Arc::new(AtomicUsize::new(0));
    let counter = renders.clone();
    toolbar.changed().connect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    session.select(SelectionSnapshot::ranged(), Some(Rect::new(150.0, 100.0, 40.0, 18.0)));
    session.select(SelectionSnapshot::ranged(), Some(Rect::new(300.0, 100.0, 40.0, 18.0)));
    assert_eq!(renders.load(Ordering::SeqCst), 2);
}

// ============================================================================
// Deferral and lifecycle
// ============================================================================

#[test]
fn test_placement_deferred_by_exactly_one_tick() {
    let session = Session::new();
    let toolbar = session.toolbar(Vec::new());
    *session.editor.lock() = SelectionSnapshot::ranged();
    session.host.select(Some(Rect::new(150.0, 100.0, 40.0, 18.0)));

    session.store.selection_changed();
    assert_eq!(session.host.reads(), 0);
    assert_eq!(toolbar.anchor_position(), None);
    assert_eq!(session.ticks.pending_count(), 1);

    assert_eq!(session.ticks.run_tick().unwrap(), 1);
    assert_eq!(session.host.reads(), 1);
    assert!(toolbar.anchor_position().is_some());
}

#[test]
fn test_each_notification_schedules_one_placement() {
    let session = Session::new();
    let _toolbar = session.toolbar(Vec::new());
    session.host.select(Some(Rect::new(150.0, 100.0, 40.0, 18.0)));

    session.store.selection_changed();
    session.store.selection_changed();
    assert_eq!(session.ticks.pending_count(), 2);
    assert_eq!(session.ticks.run_tick().unwrap(), 2);
    assert_eq!(session.host.reads(), 2);
}

#[test]
fn test_unmount_unsubscribes() {
    let session = Session::new();
    let toolbar = session.toolbar(Vec::new());
    assert_eq!(session.store.subscriber_count(StoreKey::Selection), 1);

    toolbar.unmount();
    assert_eq!(session.store.subscriber_count(StoreKey::Selection), 0);

    session.select(SelectionSnapshot::ranged(), Some(Rect::new(150.0, 100.0, 40.0, 18.0)));
    assert_eq!(session.host.reads(), 0);
    assert_eq!(toolbar.anchor_position(), None);
}

#[test]
fn test_task_queued_before_unmount_does_nothing() {
    let session = Session::new();
    let toolbar = session.toolbar(Vec::new());
    session.host.select(Some(Rect::new(150.0, 100.0, 40.0, 18.0)));

    session.store.selection_changed();
    toolbar.unmount();
    session.ticks.run_tick().unwrap();

    assert_eq!(toolbar.anchor_position(), None);
}

#[test]
fn test_task_queued_before_drop_does_nothing() {
    let session = Session::new();
    let toolbar = session.toolbar(Vec::new());
    session.host.select(Some(Rect::new(150.0, 100.0, 40.0, 18.0)));

    session.store.selection_changed();
    drop(toolbar);
    assert_eq!(session.ticks.run_tick().unwrap(), 1);
    assert_eq!(session.host.reads(), 0);
}

#[test]
fn test_detached_panel_skips_placement() {
    let session = Session::new();
    let toolbar = session.toolbar(Vec::new());
    toolbar.detach_node();

    session.select(SelectionSnapshot::ranged(), Some(Rect::new(150.0, 100.0, 40.0, 18.0)));
    assert_eq!(toolbar.anchor_position(), None);

    toolbar.attach_node(PANEL);
    session.select(SelectionSnapshot::ranged(), Some(Rect::new(150.0, 100.0, 40.0, 18.0)));
    assert!(toolbar.anchor_position().is_some());
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_renders_structure_in_order() {
    let session = Session::new();
    let toolbar = session.toolbar(vec![
        Arc::new(Label("bold")),
        Arc::new(Label("italic")),
        Arc::new(Label("underline")),
    ]);

    let frame = toolbar.render();
    assert_eq!(frame.class_name, "inline-toolbar");
    assert_eq!(frame.content, ContentKind::Structure);
    assert_eq!(
        frame.children,
        vec![
            UiNode::Text("bold".into()),
            UiNode::Text("italic".into()),
            UiNode::Text("underline".into()),
        ]
    );
}

#[test]
fn test_action_installs_and_clears_override() {
    let session = Session::new();
    let link = Arc::new(LinkButton {
        armed: Mutex::new(true),
    });
    let toolbar = session.toolbar(vec![Arc::new(Label("bold")), link]);

    // The link button arms the prompt during this render.
    let first = toolbar.render();
    assert_eq!(first.content, ContentKind::Structure);
    assert!(toolbar.is_overridden());

    let prompt = toolbar.render();
    assert_eq!(prompt.content, ContentKind::Override);
    assert_eq!(prompt.children, vec![UiNode::Text("url prompt".into())]);

    toolbar.override_handle().clear();
    assert_eq!(toolbar.render().children.len(), 2);
}

#[test]
fn test_last_override_wins() {
    let session = Session::new();
    let toolbar = session.toolbar(vec![Arc::new(Label("bold"))]);

    toolbar.on_override_content(Some(Arc::new(Label("first"))));
    toolbar.on_override_content(Some(Arc::new(Label("second"))));

    assert_eq!(toolbar.render().children, vec![UiNode::Text("second".into())]);
}

#[test]
fn test_override_handle_outlives_toolbar() {
    let session = Session::new();
    let toolbar = session.toolbar(Vec::new());
    let handle = toolbar.override_handle();
    drop(toolbar);

    handle.set(Some(Arc::new(Label("late"))));
}

#[test]
fn test_actions_can_write_editor_state() {
    struct Collapse;

    impl ToolbarAction<SelectionSnapshot> for Collapse {
        fn render(&self, props: &ActionProps<SelectionSnapshot>) -> UiNode {
            props.set_editor_state(SelectionSnapshot::IDLE).unwrap();
            UiNode::Separator
        }
    }

    let session = Session::new();
    *session.editor.lock() = SelectionSnapshot::ranged();
    let toolbar = session.toolbar(vec![Arc::new(Collapse)]);

    toolbar.render();
    assert_eq!(*session.editor.lock(), SelectionSnapshot::IDLE);
}

#[test]
fn test_custom_theme_reaches_actions() {
    struct Bold;

    impl ToolbarAction<SelectionSnapshot> for Bold {
        fn render(&self, props: &ActionProps<SelectionSnapshot>) -> UiNode {
            UiNode::button("B", &props.theme, false)
        }
    }

    let session = Session::new();
    let mut theme = ToolbarTheme::default().with_toolbar_class("my-toolbar");
    theme.button_styles.button = "my-button".into();

    let toolbar = InlineToolbar::builder(session.store.clone(), session.host.clone())
        .with_theme(theme)
        .with_action(Arc::new(Bold))
        .build()
        .unwrap();

    let frame = toolbar.render();
    assert_eq!(frame.class_name, "my-toolbar");
    assert_eq!(
        frame.children,
        vec![UiNode::Button {
            label: "B".into(),
            class: "my-button".into(),
            active: false,
        }]
    );
}

// ============================================================================
// Multiple toolbars
// ============================================================================

#[test]
fn test_toolbars_keep_independent_indicators() {
    let session = Session::new();
    session.host.set_container(PositionMode::Static, Rect::ZERO);
    session.host.set_width(OTHER_PANEL, 100.0);

    let wide = session.toolbar(Vec::new());
    let narrow = InlineToolbar::builder(session.store.clone(), session.host.clone())
        .build()
        .unwrap();
    narrow.mount();
    narrow.attach_node(OTHER_PANEL);

    session.select(SelectionSnapshot::ranged(), Some(Rect::new(480.0, 300.0, 40.0, 18.0)));

    assert_eq!(wide.indicator().map(|m| m.left()), Some(100.0));
    assert_eq!(narrow.indicator().map(|m| m.left()), Some(50.0));
}

#[test]
fn test_config_from_toml_drives_placement() {
    let session = Session::new();
    session.host.set_container(PositionMode::Static, Rect::ZERO);
    let config = ToolbarConfig::from_toml_str("toolbar_height = 40.0\ntransition_ms = 200").unwrap();

    let toolbar = InlineToolbar::builder(session.store.clone(), session.host.clone())
        .with_config(config)
        .build()
        .unwrap();
    toolbar.mount();
    toolbar.attach_node(PANEL);

    session.select(SelectionSnapshot::ranged(), Some(Rect::new(480.0, 300.0, 40.0, 18.0)));

    let frame = toolbar.render();
    assert_eq!(frame.style.position, Some(AnchorPosition::new(260.0, 500.0)));
    assert_eq!(
        frame.style.transition.map(|t| t.duration.as_millis()),
        Some(200)
    );
}
