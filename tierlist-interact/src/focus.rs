//! Focus trapping for overlays (drawers, dialogs, the tier navigator).

use tierlist_types::{Key, KeyEvent};
use tracing::{debug, trace};

/// The document operations a focus trap needs.
pub trait FocusHost {
    type Node: Clone + PartialEq;

    /// Focusable descendants of `container`, in document order.
    fn focusable_within(&self, container: &Self::Node) -> Vec<Self::Node>;

    /// The element that currently has focus.
    fn active_element(&self) -> Option<Self::Node>;

    fn focus(&mut self, node: &Self::Node);
}

/// What the host should do with a key event after the trap saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The trap acted; the host suppresses the default behavior.
    Handled,
    /// The host proceeds normally.
    Ignored,
}

type Accessor<N> = Box<dyn Fn() -> Option<N>>;

/// Confines Tab navigation to a container while active.
///
/// Container, activity and trigger are read through accessors on every
/// event, so the trap follows the host's current state without being
/// rebuilt.
pub struct FocusTrap<N> {
    container: Accessor<N>,
    is_active: Box<dyn Fn() -> bool>,
    trigger: Option<Accessor<N>>,
    on_escape: Option<Box<dyn FnMut()>>,
}

impl<N: Clone + PartialEq> FocusTrap<N> {
    pub fn new(
        container: impl Fn() -> Option<N> + 'static,
        is_active: impl Fn() -> bool + 'static,
    ) -> Self {
        Self {
            container: Box::new(container),
            is_active: Box::new(is_active),
            trigger: None,
            on_escape: None,
        }
    }

    /// The element that receives focus back when the overlay closes.
    #[must_use]
    pub fn with_trigger(mut self, trigger: impl Fn() -> Option<N> + 'static) -> Self {
        self.trigger = Some(Box::new(trigger));
        self
    }

    #[must_use]
    pub fn with_on_escape(mut self, on_escape: impl FnMut() + 'static) -> Self {
        self.on_escape = Some(Box::new(on_escape));
        self
    }

    pub fn is_active(&self) -> bool {
        (self.is_active)()
    }

    /// Routes a document-level key press through the trap.
    ///
    /// Tab on the last focusable wraps to the first and Shift+Tab on the
    /// first wraps to the last. Escape runs the escape callback and returns
    /// focus to the trigger. Everything else is left to the host.
    pub fn handle_key<H>(&mut self, host: &mut H, event: &KeyEvent) -> KeyDisposition
    where
        H: FocusHost<Node = N>,
    {
        if !self.is_active() {
            return KeyDisposition::Ignored;
        }

        match event.key {
            Key::Escape => {
                debug!("focus trap escaped");
                if let Some(on_escape) = self.on_escape.as_mut() {
                    on_escape();
                }
                self.restore_focus(host);
                KeyDisposition::Handled
            }
            Key::Tab => self.cycle(host, event.shift),
            _ => KeyDisposition::Ignored,
        }
    }

    fn cycle<H>(&self, host: &mut H, backwards: bool) -> KeyDisposition
    where
        H: FocusHost<Node = N>,
    {
        let Some(container) = (self.container)() else {
            return KeyDisposition::Ignored;
        };
        let focusable = host.focusable_within(&container);
        let (Some(first), Some(last)) = (focusable.first(), focusable.last()) else {
            return KeyDisposition::Ignored;
        };

        let (edge, wrap_to) = if backwards { (first, last) } else { (last, first) };
        if host.active_element().as_ref() != Some(edge) {
            return KeyDisposition::Ignored;
        }
        trace!(backwards, "focus wrapped inside trap");
        host.focus(wrap_to);
        KeyDisposition::Handled
    }

    /// Focuses the first focusable descendant of the container, if any.
    pub fn focus_first<H>(&self, host: &mut H)
    where
        H: FocusHost<Node = N>,
    {
        let Some(container) = (self.container)() else {
            return;
        };
        if let Some(first) = host.focusable_within(&container).first() {
            host.focus(first);
        }
    }

    /// Focuses the trigger, if one is registered and present.
    pub fn restore_focus<H>(&self, host: &mut H)
    where
        H: FocusHost<Node = N>,
    {
        if let Some(trigger) = self.trigger.as_ref().and_then(|trigger| trigger()) {
            host.focus(&trigger);
        }
    }
}

// ── In-memory document ───────────────────────────────────────────

/// The attributes that decide whether an element takes keyboard focus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementInfo {
    pub tag: String,
    pub href: bool,
    pub tabindex: Option<i32>,
    pub role: Option<String>,
}

impl ElementInfo {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_href(mut self) -> Self {
        self.href = true;
        self
    }

    #[must_use]
    pub fn with_tabindex(mut self, tabindex: i32) -> Self {
        self.tabindex = Some(tabindex);
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Buttons, form controls, links, `role="button"` and any explicit
    /// tabindex other than -1.
    pub fn is_focusable(&self) -> bool {
        let tag = self.tag.to_ascii_lowercase();
        matches!(tag.as_str(), "button" | "input" | "select" | "textarea")
            || self.href
            || self.tabindex.is_some_and(|index| index != -1)
            || self.role.as_deref() == Some("button")
    }
}

/// Handle to an element in a [`FocusTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct TreeNode {
    info: ElementInfo,
    children: Vec<NodeId>,
}

/// A minimal element tree for headless hosts.
#[derive(Debug, Clone)]
pub struct FocusTree {
    nodes: Vec<TreeNode>,
    focused: Option<NodeId>,
}

impl Default for FocusTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTree {
    /// Creates a tree holding only a `body` root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TreeNode {
                info: ElementInfo::new("body"),
                children: Vec::new(),
            }],
            focused: None,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends `info` as the last child of `parent`. An unknown parent
    /// attaches to the root.
    pub fn append(&mut self, parent: NodeId, info: ElementInfo) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            info,
            children: Vec::new(),
        });
        let parent = if parent.0 < id.0 { parent } else { self.root() };
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementInfo> {
        self.nodes.get(id.0).map(|node| &node.info)
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Descendants of `id` in document (pre-)order, excluding `id` itself.
    fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self
            .nodes
            .get(id.0)
            .map(|node| node.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(node) = self.nodes.get(next.0) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }
}

impl FocusHost for FocusTree {
    type Node = NodeId;

    fn focusable_within(&self, container: &NodeId) -> Vec<NodeId> {
        self.descendants(*container)
            .into_iter()
            .filter(|id| self.element(*id).is_some_and(ElementInfo::is_focusable))
            .collect()
    }

    fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    fn focus(&mut self, node: &NodeId) {
        if node.0 < self.nodes.len() {
            self.focused = Some(*node);
        }
    }
}
