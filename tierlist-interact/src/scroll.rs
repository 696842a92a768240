//! Sticky-bar visibility from vertical scroll positions.
//!
//! Both trackers are fed the page's scroll offset on every scroll event and
//! answer whether the bar should currently be shown.

use tracing::trace;

/// Scroll jitter below this many pixels is ignored by [`ScrollHidden`].
const JITTER: f64 = 8.0;

/// Hides a bar while scrolling down and shows it while scrolling up, but
/// never hides it near the top of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollHidden {
    threshold: f64,
    delta: f64,
    last_y: f64,
    hidden: bool,
}

impl Default for ScrollHidden {
    fn default() -> Self {
        Self::new(200.0)
    }
}

impl ScrollHidden {
    /// Starts visible at offset 0. Offsets below `threshold` always show.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            delta: JITTER,
            last_y: 0.0,
            hidden: false,
        }
    }

    #[must_use]
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    #[must_use]
    pub fn starting_at(mut self, y: f64) -> Self {
        self.last_y = y;
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Feeds a scroll offset and returns the new hidden state.
    ///
    /// The reference offset only moves when a decision is taken, so slow
    /// scrolling accumulates until it crosses the jitter delta.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        if y < self.threshold {
            self.hidden = false;
            self.last_y = y;
            return self.hidden;
        }

        let diff = y - self.last_y;
        if diff > self.delta {
            self.hidden = true;
            self.last_y = y;
        } else if diff < -self.delta {
            self.hidden = false;
            self.last_y = y;
        }
        trace!(y, hidden = self.hidden, "scroll hidden");
        self.hidden
    }
}

/// Visibility by scroll direction, optionally pinned visible until the page
/// scrolls past an anchor element's natural position.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollDirection {
    threshold: f64,
    sticky_top: Option<f64>,
    last_y: f64,
    visible: bool,
}

impl Default for ScrollDirection {
    fn default() -> Self {
        Self::new(5.0, None)
    }
}

impl ScrollDirection {
    /// `sticky_top` is the anchor's absolute document offset.
    pub fn new(threshold: f64, sticky_top: Option<f64>) -> Self {
        Self {
            threshold,
            sticky_top,
            last_y: 0.0,
            visible: true,
        }
    }

    #[must_use]
    pub fn starting_at(mut self, y: f64) -> Self {
        self.last_y = y;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds a scroll offset and returns the new visibility.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        let delta = y - self.last_y;

        if self.sticky_top.is_some_and(|top| y <= top) {
            self.visible = true;
        } else if delta > self.threshold {
            self.visible = false;
        } else if delta < -self.threshold {
            self.visible = true;
        }

        self.last_y = y;
        self.visible
    }
}
