use crate::board::anchor_for;
use std::cell::Cell;
use std::rc::Rc;
use tierlist_interact::{FocusHost, FocusTrap, KeyDisposition};
use tierlist_types::{Key, KeyEvent, Tier};
use tracing::debug;

/// The tier navigator overlay.
///
/// While open, focus is trapped in the panel and Escape closes it, handing
/// focus back to the trigger button. While the guided tour runs, Escape is
/// swallowed so the panel stays open under the tour.
pub struct NavigatorPanel<N> {
    open: Rc<Cell<bool>>,
    touring: Rc<Cell<bool>>,
    trap: FocusTrap<N>,
}

impl<N: Clone + PartialEq + 'static> NavigatorPanel<N> {
    pub fn new(panel: N, trigger: N) -> Self {
        let open = Rc::new(Cell::new(false));
        let is_open = Rc::clone(&open);
        let closer = Rc::clone(&open);
        let trap = FocusTrap::new(move || Some(panel.clone()), move || is_open.get())
            .with_trigger(move || Some(trigger.clone()))
            .with_on_escape(move || closer.set(false));
        Self {
            open,
            touring: Rc::new(Cell::new(false)),
            trap,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn is_touring(&self) -> bool {
        self.touring.get()
    }

    /// Opens the panel and focuses its first control. Starts the tour when
    /// `show_tour` is set; returns whether it started.
    pub fn open<H>(&mut self, host: &mut H, show_tour: bool) -> bool
    where
        H: FocusHost<Node = N>,
    {
        self.open.set(true);
        self.trap.focus_first(host);
        if show_tour {
            debug!("navigator tour started");
            self.touring.set(true);
        }
        show_tour
    }

    /// Closes the panel and returns focus to the trigger.
    pub fn close<H>(&mut self, host: &mut H)
    where
        H: FocusHost<Node = N>,
    {
        if self.open.replace(false) {
            self.trap.restore_focus(host);
        }
    }

    pub fn finish_tour(&mut self) {
        self.touring.set(false);
    }

    pub fn handle_key<H>(&mut self, host: &mut H, event: &KeyEvent) -> KeyDisposition
    where
        H: FocusHost<Node = N>,
    {
        if self.touring.get() && event.key == Key::Escape && self.is_open() {
            return KeyDisposition::Handled;
        }
        self.trap.handle_key(host, event)
    }

    /// Closes the panel, returning focus to the trigger, and returns the
    /// anchor of the tier's section for the host to scroll to.
    pub fn jump_to<H>(&mut self, host: &mut H, tier: Tier) -> String
    where
        H: FocusHost<Node = N>,
    {
        self.close(host);
        anchor_for(tier)
    }
}
