//! Viewport scroller for the horizontal tab strip.
//!
//! An activation change schedules a scroll; the host calls
//! [`ViewportScroller::on_frame`] once layout has settled and applies the
//! returned offset instantly, since an animated scroll on top of the strip's
//! own smooth scrolling would scroll twice.

use crate::tab::TabId;

/// Horizontal placement of one rendered tab, in strip coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TabExtent {
    pub id: TabId,
    pub left: f32,
    pub width: f32,
}

impl TabExtent {
    fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// Measured strip layout after a frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StripLayout {
    pub tabs: Vec<TabExtent>,
    pub viewport_width: f32,
    pub scroll_offset: f32,
}

impl StripLayout {
    /// Total scrollable width.
    pub fn content_width(&self) -> f32 {
        self.tabs.iter().map(TabExtent::right).fold(0.0, f32::max)
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content_width() - self.viewport_width).max(0.0)
    }

    fn extent(&self, id: &TabId) -> Option<&TabExtent> {
        self.tabs.iter().find(|t| &t.id == id)
    }
}

/// Scroll offset to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub offset: f32,
    /// Always false: the offset is applied without animation
    pub smooth: bool,
}

/// Offset that centres `tab` in the viewport, clamped to the scroll range.
pub fn centered_offset(layout: &StripLayout, tab: &TabExtent) -> f32 {
    let target = tab.left + tab.width / 2.0 - layout.viewport_width / 2.0;
    target.clamp(0.0, layout.max_scroll())
}

/// Tabs not fully visible at the current scroll offset, in strip order.
pub fn overflow_tabs(layout: &StripLayout) -> Vec<TabId> {
    let visible_start = layout.scroll_offset;
    let visible_end = layout.scroll_offset + layout.viewport_width;
    layout
        .tabs
        .iter()
        .filter(|t| t.left < visible_start || t.right() > visible_end)
        .map(|t| t.id.clone())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingScroll {
    tab_id: TabId,
    generation: u64,
}

/// Deferred "keep the active tab visible" requests.
///
/// At most one request is pending; scheduling again replaces it so a frame
/// never acts on a stale activation.
#[derive(Debug, Default)]
pub struct ViewportScroller {
    pending: Option<PendingScroll>,
    generation: u64,
}

impl ViewportScroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centre `tab_id` on the next frame.
    pub fn schedule(&mut self, tab_id: TabId) {
        self.generation += 1;
        log::debug!("Scroll to {} scheduled (#{})", tab_id, self.generation);
        self.pending = Some(PendingScroll {
            tab_id,
            generation: self.generation,
        });
    }

    /// Drop any pending request.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("Pending scroll cancelled");
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Resolve the pending request against the settled layout.
    ///
    /// Returns `None` when nothing is pending, the tab is not rendered, or it
    /// is already centred.
    pub fn on_frame(&mut self, layout: &StripLayout) -> Option<ScrollCommand> {
        let pending = self.pending.take()?;
        let extent = layout.extent(&pending.tab_id)?;
        let offset = centered_offset(layout, extent);
        if (offset - layout.scroll_offset).abs() < f32::EPSILON {
            return None;
        }
        Some(ScrollCommand {
            offset,
            smooth: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five 100px tabs in a 250px viewport.
    fn layout(offset: f32) -> StripLayout {
        StripLayout {
            tabs: (0..5)
                .map(|i| TabExtent {
                    id: TabId::from(format!("t{i}")),
                    left: i as f32 * 100.0,
                    width: 100.0,
                })
                .collect(),
            viewport_width: 250.0,
            scroll_offset: offset,
        }
    }

    #[test]
    fn centres_middle_tab() {
        let l = layout(0.0);
        assert_eq!(centered_offset(&l, &l.tabs[2]), 125.0);
    }

    #[test]
    fn clamps_to_bounds() {
        let l = layout(0.0);
        assert_eq!(centered_offset(&l, &l.tabs[0]), 0.0);
        assert_eq!(centered_offset(&l, &l.tabs[4]), 250.0);
    }

    #[test]
    fn narrow_content_never_scrolls() {
        let mut l = layout(0.0);
        l.viewport_width = 1000.0;
        assert_eq!(l.max_scroll(), 0.0);
        assert_eq!(centered_offset(&l, &l.tabs[4]), 0.0);
    }

    #[test]
    fn frame_consumes_pending() {
        let mut scroller = ViewportScroller::new();
        scroller.schedule(TabId::from("t3"));
        let cmd = scroller.on_frame(&layout(0.0)).unwrap();
        assert_eq!(cmd.offset, 225.0);
        assert!(!cmd.smooth);
        assert!(!scroller.has_pending());
        assert!(scroller.on_frame(&layout(0.0)).is_none());
    }

    #[test]
    fn reschedule_replaces_and_cancel_clears() {
        let mut scroller = ViewportScroller::new();
        scroller.schedule(TabId::from("t4"));
        scroller.schedule(TabId::from("t0"));
        assert!(scroller.on_frame(&layout(100.0)).is_some_and(|c| c.offset == 0.0));

        scroller.schedule(TabId::from("t4"));
        scroller.cancel();
        assert!(scroller.on_frame(&layout(0.0)).is_none());
    }

    #[test]
    fn already_centred_or_missing_tab_is_none() {
        let mut scroller = ViewportScroller::new();
        scroller.schedule(TabId::from("t2"));
        assert!(scroller.on_frame(&layout(125.0)).is_none());
        scroller.schedule(TabId::from("ghost"));
        assert!(scroller.on_frame(&layout(0.0)).is_none());
    }

    #[test]
    fn overflow_lists_partially_hidden_tabs() {
        let ids: Vec<String> = overflow_tabs(&layout(100.0))
            .into_iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, vec!["t0", "t3", "t4"]);
    }
}
