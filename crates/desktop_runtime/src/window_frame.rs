//! Interactive state machine for a single window frame.
//!
//! A [`WindowFrame`] owns one window's geometry and the transient pointer interaction acting on
//! it. Input is fed in through an explicit begin/update/end protocol:
//!
//! 1. `begin_drag` / `begin_resize` on pointer-down, together with a [`ListenerLease`] covering
//!    the global pointer listeners the binding layer subscribed for this interaction;
//! 2. `pointer_moved` for every pointer-move while the interaction is active;
//! 3. `end_interaction` on pointer-up.
//!
//! The lease is held only while an interaction is active. Ending the interaction, rejecting the
//! begin, closing, or dropping the frame releases it, so listeners can never outlive the window.
//!
//! Geometry requests are never rejected. Every write is clamped to the work area (the viewport
//! minus the taskbar strip) and to the configured minimum size.

use std::fmt;

use platform_host::{RandomSource, ViewportMetrics};
use serde::{Deserialize, Serialize};

use crate::model::{
    PointerPosition, ResizeEdge, WindowRect, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, MOBILE_BREAKPOINT_PX, TASKBAR_HEIGHT_PX,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Layout tuning shared by every frame on a desktop.
pub struct FrameConfig {
    /// Bottom strip excluded from placement and sizing.
    pub taskbar_height: i32,
    /// Width of a freshly mounted frame.
    pub default_width: i32,
    /// Height of a freshly mounted frame.
    pub default_height: i32,
    /// Resize floor for width.
    pub min_width: i32,
    /// Resize floor for height.
    pub min_height: i32,
    /// Viewports narrower than this force full-screen, non-interactive frames.
    pub mobile_breakpoint: i32,
    /// Top-left corner before jitter is applied.
    pub spawn_origin: (i32, i32),
    /// Maximum random offset added to the spawn origin on each axis.
    pub spawn_jitter: (i32, i32),
    /// Margin around a frame in narrow-viewport mode.
    pub mobile_inset: i32,
    /// Vertical space kept free below a frame in narrow-viewport mode.
    pub mobile_vertical_reserve: i32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            taskbar_height: TASKBAR_HEIGHT_PX,
            default_width: DEFAULT_WINDOW_WIDTH,
            default_height: DEFAULT_WINDOW_HEIGHT,
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
            mobile_breakpoint: MOBILE_BREAKPOINT_PX,
            spawn_origin: (100, 100),
            spawn_jitter: (200, 100),
            mobile_inset: 8,
            mobile_vertical_reserve: 80,
        }
    }
}

impl FrameConfig {
    /// The region windows may occupy: the viewport minus the taskbar strip.
    pub fn work_area(&self, viewport: ViewportMetrics) -> WindowRect {
        WindowRect::new(
            0,
            0,
            viewport.width.max(0),
            viewport.usable_height(self.taskbar_height),
        )
    }

    pub fn is_narrow(&self, viewport: ViewportMetrics) -> bool {
        viewport.width < self.mobile_breakpoint
    }

    fn narrow_rect(&self, viewport: ViewportMetrics) -> WindowRect {
        WindowRect::new(
            self.mobile_inset,
            self.mobile_inset,
            (viewport.width - 2 * self.mobile_inset).max(0),
            (viewport.height - self.mobile_vertical_reserve).max(0),
        )
    }
}

/// Scoped ownership of the global pointer listeners backing one drag or resize.
///
/// Dropping the lease runs its release callback exactly once.
pub struct ListenerLease {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerLease {
    /// Wraps a callback that unsubscribes the listeners.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A lease with nothing to release, for hosts that track pointers some other way.
    pub fn detached() -> Self {
        Self { release: None }
    }
}

impl Drop for ListenerLease {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for ListenerLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerLease")
            .field("armed", &self.release.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Requests a frame sends up to the desktop.
pub enum FrameIntent {
    BringToFront,
    Minimize,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Placement mode of a frame.
pub enum FrameMode {
    Normal,
    Maximized,
    /// Forced full-screen because the viewport is below the mobile breakpoint.
    Narrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pointer interaction currently acting on a frame.
pub enum InteractionKind {
    Idle,
    Dragging,
    Resizing(ResizeEdge),
}

#[derive(Debug)]
enum Interaction {
    Idle,
    Dragging {
        grab_offset: PointerPosition,
        _lease: ListenerLease,
    },
    Resizing {
        edge: ResizeEdge,
        pointer_start: PointerPosition,
        rect_start: WindowRect,
        _lease: ListenerLease,
    },
}

#[derive(Debug)]
/// Geometry and interaction state for one window.
pub struct WindowFrame {
    config: FrameConfig,
    viewport: ViewportMetrics,
    rect: WindowRect,
    maximized: bool,
    narrow: bool,
    saved_rect: Option<WindowRect>,
    interaction: Interaction,
}

impl WindowFrame {
    /// Mounts a frame at the spawn origin plus a random offset, with the default size.
    pub fn spawn(
        config: FrameConfig,
        viewport: ViewportMetrics,
        random: &mut dyn RandomSource,
    ) -> Self {
        let (origin_x, origin_y) = config.spawn_origin;
        let (jitter_x, jitter_y) = config.spawn_jitter;
        let x = origin_x + jitter(random, jitter_x);
        let y = origin_y + jitter(random, jitter_y);
        Self::with_rect(
            config,
            viewport,
            WindowRect::new(x, y, config.default_width, config.default_height),
        )
    }

    /// Mounts a frame at an explicit rectangle.
    pub fn with_rect(config: FrameConfig, viewport: ViewportMetrics, rect: WindowRect) -> Self {
        let mut frame = Self {
            config,
            viewport,
            rect,
            maximized: false,
            narrow: false,
            saved_rect: None,
            interaction: Interaction::Idle,
        };
        if config.is_narrow(viewport) {
            frame.enter_narrow();
        }
        frame
    }

    pub fn geometry(&self) -> WindowRect {
        self.rect
    }

    pub fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }

    pub fn mode(&self) -> FrameMode {
        if self.narrow {
            FrameMode::Narrow
        } else if self.maximized {
            FrameMode::Maximized
        } else {
            FrameMode::Normal
        }
    }

    /// True while the frame fills the screen, whether by user choice or narrow-viewport mode.
    pub fn is_maximized(&self) -> bool {
        self.mode() != FrameMode::Normal
    }

    pub fn interaction(&self) -> InteractionKind {
        match &self.interaction {
            Interaction::Idle => InteractionKind::Idle,
            Interaction::Dragging { .. } => InteractionKind::Dragging,
            Interaction::Resizing { edge, .. } => InteractionKind::Resizing(*edge),
        }
    }

    /// Drag and resize affordances exist only in [`FrameMode::Normal`].
    pub fn shows_resize_handles(&self) -> bool {
        self.mode() == FrameMode::Normal
    }

    /// Starts dragging from a title-bar pointer-down at `pointer`.
    ///
    /// Returns `Some(FrameIntent::BringToFront)` when the drag starts. Otherwise returns `None`
    /// and releases `lease` immediately.
    pub fn begin_drag(
        &mut self,
        pointer: PointerPosition,
        lease: ListenerLease,
    ) -> Option<FrameIntent> {
        if !self.accepts_interaction() {
            return None;
        }
        self.interaction = Interaction::Dragging {
            grab_offset: PointerPosition::new(pointer.x - self.rect.x, pointer.y - self.rect.y),
            _lease: lease,
        };
        Some(FrameIntent::BringToFront)
    }

    /// Starts resizing from the `edge` affordance. Same acceptance rules as
    /// [`WindowFrame::begin_drag`].
    pub fn begin_resize(
        &mut self,
        edge: ResizeEdge,
        pointer: PointerPosition,
        lease: ListenerLease,
    ) -> Option<FrameIntent> {
        if !self.accepts_interaction() {
            return None;
        }
        self.interaction = Interaction::Resizing {
            edge,
            pointer_start: pointer,
            rect_start: self.rect,
            _lease: lease,
        };
        Some(FrameIntent::BringToFront)
    }

    /// Applies a pointer-move to the active interaction. Returns whether the geometry changed.
    pub fn pointer_moved(&mut self, pointer: PointerPosition) -> bool {
        let next = match &self.interaction {
            Interaction::Idle => return false,
            Interaction::Dragging { grab_offset, .. } => {
                self.clamped_position(pointer.x - grab_offset.x, pointer.y - grab_offset.y)
            }
            Interaction::Resizing {
                edge,
                pointer_start,
                rect_start,
                ..
            } => self.resized_rect(
                *rect_start,
                *edge,
                pointer.x - pointer_start.x,
                pointer.y - pointer_start.y,
            ),
        };
        let changed = next != self.rect;
        self.rect = next;
        changed
    }

    /// Returns to idle, keeping the last clamped geometry. Returns whether an interaction was
    /// active.
    pub fn end_interaction(&mut self) -> bool {
        let was_active = !matches!(self.interaction, Interaction::Idle);
        self.interaction = Interaction::Idle;
        was_active
    }

    /// Maximize button: snapshot and fill the work area, or restore the snapshot.
    ///
    /// Does nothing in narrow-viewport mode. Returns whether the mode changed.
    pub fn toggle_maximize(&mut self) -> bool {
        if self.narrow {
            return false;
        }
        self.end_interaction();
        if self.maximized {
            if let Some(saved) = self.saved_rect.take() {
                self.rect = saved;
            }
            self.maximized = false;
        } else {
            self.saved_rect = Some(self.rect);
            self.rect = self.work_area();
            self.maximized = true;
        }
        true
    }

    pub fn title_double_clicked(&mut self) -> bool {
        self.toggle_maximize()
    }

    /// Reacts to a browser resize or orientation change.
    pub fn viewport_changed(&mut self, viewport: ViewportMetrics) {
        self.viewport = viewport;
        let narrow = self.config.is_narrow(viewport);
        match (self.narrow, narrow) {
            (false, true) => self.enter_narrow(),
            (true, true) => self.rect = self.config.narrow_rect(viewport),
            (true, false) => {
                self.narrow = false;
                if self.maximized {
                    self.rect = self.work_area();
                } else if let Some(saved) = self.saved_rect.take() {
                    self.rect = saved;
                }
            }
            (false, false) => {
                if self.maximized {
                    self.rect = self.work_area();
                }
            }
        }
    }

    /// Minimize control. Placement mode is untouched; only the desktop's flag hides the frame.
    pub fn request_minimize(&mut self) -> FrameIntent {
        self.end_interaction();
        FrameIntent::Minimize
    }

    pub fn request_close(&mut self) -> FrameIntent {
        self.end_interaction();
        FrameIntent::Close
    }

    fn accepts_interaction(&self) -> bool {
        self.mode() == FrameMode::Normal && matches!(self.interaction, Interaction::Idle)
    }

    fn work_area(&self) -> WindowRect {
        self.config.work_area(self.viewport)
    }

    fn enter_narrow(&mut self) {
        self.end_interaction();
        if !self.maximized {
            self.saved_rect = Some(self.rect);
        }
        self.narrow = true;
        self.rect = self.config.narrow_rect(self.viewport);
    }

    fn clamped_position(&self, x: i32, y: i32) -> WindowRect {
        let area = self.work_area();
        WindowRect {
            x: x.min(area.right() - self.rect.w).max(area.x),
            y: y.min(area.bottom() - self.rect.h).max(area.y),
            ..self.rect
        }
    }

    fn resized_rect(&self, start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
        let area = self.work_area();
        let (min_w, min_h) = (self.config.min_width, self.config.min_height);
        let mut rect = start;

        if edge.touches_left() {
            let right = start.right();
            rect.x = (start.x + dx).min(right - min_w).max(area.x);
            rect.w = (right - rect.x).max(min_w);
        }
        if edge.touches_right() {
            rect.w = clamp_span(start.w + dx, min_w, area.right() - rect.x);
        }
        if edge.touches_top() {
            let bottom = start.bottom();
            rect.y = (start.y + dy).min(bottom - min_h).max(area.y);
            rect.h = (bottom - rect.y).max(min_h);
        }
        if edge.touches_bottom() {
            rect.h = clamp_span(start.h + dy, min_h, area.bottom() - rect.y);
        }
        rect
    }
}

fn jitter(random: &mut dyn RandomSource, range: i32) -> i32 {
    (random.next_unit() * f64::from(range.max(0))).floor() as i32
}

// The floor wins when the bounds leave less room than the minimum.
fn clamp_span(value: i32, min: i32, max: i32) -> i32 {
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use platform_host::SequenceRandom;
    use pretty_assertions::assert_eq;

    use super::*;

    const DESKTOP: ViewportMetrics = ViewportMetrics::new(1280, 800);

    fn frame_at(rect: WindowRect) -> WindowFrame {
        WindowFrame::with_rect(FrameConfig::default(), DESKTOP, rect)
    }

    fn counting_lease(released: &Rc<Cell<u32>>) -> ListenerLease {
        let released = released.clone();
        ListenerLease::new(move || released.set(released.get() + 1))
    }

    fn work_area() -> WindowRect {
        FrameConfig::default().work_area(DESKTOP)
    }

    #[test]
    fn spawn_applies_jitter_and_default_size() {
        let mut random = SequenceRandom::new([0.5, 0.25]);
        let frame = WindowFrame::spawn(FrameConfig::default(), DESKTOP, &mut random);
        assert_eq!(frame.geometry(), WindowRect::new(200, 125, 650, 550));
        assert_eq!(frame.mode(), FrameMode::Normal);
        assert_eq!(frame.interaction(), InteractionKind::Idle);
    }

    #[test]
    fn spawn_stays_inside_jitter_range() {
        let mut random = SequenceRandom::new([0.999_999, 0.999_999]);
        let frame = WindowFrame::spawn(FrameConfig::default(), DESKTOP, &mut random);
        let rect = frame.geometry();
        assert!((100..300).contains(&rect.x));
        assert!((100..200).contains(&rect.y));
    }

    #[test]
    fn maximize_then_restore_round_trips_geometry() {
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));

        assert!(frame.toggle_maximize());
        assert_eq!(frame.geometry(), WindowRect::new(0, 0, 1280, 744));
        assert_eq!(frame.mode(), FrameMode::Maximized);

        assert!(frame.toggle_maximize());
        assert_eq!(frame.geometry(), WindowRect::new(120, 140, 650, 550));
        assert_eq!(frame.mode(), FrameMode::Normal);
    }

    #[test]
    fn title_double_click_toggles_maximize() {
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.title_double_clicked();
        assert!(frame.is_maximized());
        frame.title_double_clicked();
        assert!(!frame.is_maximized());
    }

    #[test]
    fn drag_follows_pointer_with_grab_offset() {
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        let intent = frame.begin_drag(PointerPosition::new(130, 150), ListenerLease::detached());
        assert_eq!(intent, Some(FrameIntent::BringToFront));
        assert_eq!(frame.interaction(), InteractionKind::Dragging);

        assert!(frame.pointer_moved(PointerPosition::new(230, 170)));
        assert_eq!(frame.geometry(), WindowRect::new(220, 160, 650, 550));
    }

    #[test]
    fn drag_is_clamped_on_every_move() {
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.begin_drag(PointerPosition::new(130, 150), ListenerLease::detached());

        for pointer in [
            PointerPosition::new(-500, -500),
            PointerPosition::new(5000, 5000),
            PointerPosition::new(5000, -40),
            PointerPosition::new(-40, 5000),
        ] {
            frame.pointer_moved(pointer);
            assert!(
                frame.geometry().is_within(work_area()),
                "{:?} escaped the work area",
                frame.geometry()
            );
        }

        frame.pointer_moved(PointerPosition::new(5000, 5000));
        assert_eq!(frame.geometry(), WindowRect::new(630, 194, 650, 550));
        frame.pointer_moved(PointerPosition::new(-500, -500));
        assert_eq!(frame.geometry(), WindowRect::new(0, 0, 650, 550));
    }

    #[test]
    fn end_interaction_commits_last_clamped_position() {
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.begin_drag(PointerPosition::new(130, 150), ListenerLease::detached());
        frame.pointer_moved(PointerPosition::new(-100, 300));

        assert!(frame.end_interaction());
        assert_eq!(frame.geometry(), WindowRect::new(0, 194, 650, 550));
        assert!(!frame.pointer_moved(PointerPosition::new(400, 400)));
        assert!(!frame.end_interaction());
    }

    #[test]
    fn east_resize_respects_minimum_and_work_area() {
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.begin_resize(
            ResizeEdge::East,
            PointerPosition::new(770, 300),
            ListenerLease::detached(),
        );
        assert_eq!(frame.interaction(), InteractionKind::Resizing(ResizeEdge::East));

        frame.pointer_moved(PointerPosition::new(-1000, 300));
        assert_eq!(frame.geometry(), WindowRect::new(120, 140, 300, 550));

        frame.pointer_moved(PointerPosition::new(9000, 300));
        assert_eq!(frame.geometry(), WindowRect::new(120, 140, 1160, 550));
    }

    #[test]
    fn south_resize_stops_at_taskbar() {
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.begin_resize(
            ResizeEdge::South,
            PointerPosition::new(400, 690),
            ListenerLease::detached(),
        );
        frame.pointer_moved(PointerPosition::new(400, 2000));
        assert_eq!(frame.geometry().bottom(), 744);
    }

    #[test]
    fn corner_resize_applies_both_edges_and_keeps_opposite_corner() {
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.begin_resize(
            ResizeEdge::NorthWest,
            PointerPosition::new(120, 140),
            ListenerLease::detached(),
        );

        frame.pointer_moved(PointerPosition::new(170, 190));
        assert_eq!(frame.geometry(), WindowRect::new(170, 190, 600, 500));

        frame.pointer_moved(PointerPosition::new(2000, 2000));
        assert_eq!(frame.geometry(), WindowRect::new(470, 490, 300, 200));

        frame.pointer_moved(PointerPosition::new(-1000, -1000));
        assert_eq!(frame.geometry(), WindowRect::new(0, 0, 770, 690));
    }

    #[test]
    fn resize_on_every_affordance_stays_in_bounds() {
        for edge in ResizeEdge::ALL {
            for pointer in [PointerPosition::new(-3000, -3000), PointerPosition::new(3000, 3000)] {
                let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
                frame.begin_resize(edge, PointerPosition::new(400, 400), ListenerLease::detached());
                frame.pointer_moved(pointer);
                let rect = frame.geometry();
                assert!(rect.is_within(work_area()), "{edge:?} produced {rect:?}");
                assert!(rect.w >= MIN_WINDOW_WIDTH && rect.h >= MIN_WINDOW_HEIGHT);
            }
        }
    }

    #[test]
    fn maximized_frame_rejects_drag_and_resize() {
        let released = Rc::new(Cell::new(0));
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.toggle_maximize();

        assert_eq!(
            frame.begin_drag(PointerPosition::new(10, 10), counting_lease(&released)),
            None
        );
        assert_eq!(
            frame.begin_resize(
                ResizeEdge::SouthEast,
                PointerPosition::new(10, 10),
                counting_lease(&released)
            ),
            None
        );
        assert_eq!(released.get(), 2);
        assert_eq!(frame.interaction(), InteractionKind::Idle);
        assert!(!frame.shows_resize_handles());
    }

    #[test]
    fn only_one_interaction_at_a_time() {
        let released = Rc::new(Cell::new(0));
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.begin_drag(PointerPosition::new(130, 150), counting_lease(&released));

        let second = frame.begin_resize(
            ResizeEdge::East,
            PointerPosition::new(770, 300),
            counting_lease(&released),
        );
        assert_eq!(second, None);
        assert_eq!(released.get(), 1);
        assert_eq!(frame.interaction(), InteractionKind::Dragging);
    }

    #[test]
    fn lease_is_released_when_interaction_ends() {
        let released = Rc::new(Cell::new(0));
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.begin_resize(
            ResizeEdge::West,
            PointerPosition::new(120, 300),
            counting_lease(&released),
        );
        assert_eq!(released.get(), 0);

        frame.end_interaction();
        assert_eq!(released.get(), 1);
        frame.end_interaction();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn lease_is_released_on_close_and_on_teardown() {
        let released = Rc::new(Cell::new(0));

        let mut closing = frame_at(WindowRect::new(120, 140, 650, 550));
        closing.begin_drag(PointerPosition::new(130, 150), counting_lease(&released));
        assert_eq!(closing.request_close(), FrameIntent::Close);
        assert_eq!(released.get(), 1);

        let mut dropped = frame_at(WindowRect::new(120, 140, 650, 550));
        dropped.begin_drag(PointerPosition::new(130, 150), counting_lease(&released));
        drop(dropped);
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn minimize_request_keeps_placement_mode() {
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.toggle_maximize();
        assert_eq!(frame.request_minimize(), FrameIntent::Minimize);
        assert_eq!(frame.mode(), FrameMode::Maximized);
    }

    #[test]
    fn maximized_frame_tracks_viewport_resizes() {
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.toggle_maximize();

        frame.viewport_changed(ViewportMetrics::new(1600, 1000));
        assert_eq!(frame.geometry(), WindowRect::new(0, 0, 1600, 944));

        frame.toggle_maximize();
        assert_eq!(frame.geometry(), WindowRect::new(120, 140, 650, 550));
    }

    #[test]
    fn normal_frame_keeps_geometry_on_viewport_resize() {
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.viewport_changed(ViewportMetrics::new(1600, 1000));
        assert_eq!(frame.geometry(), WindowRect::new(120, 140, 650, 550));
    }

    #[test]
    fn narrow_viewport_forces_full_screen_mode() {
        let mut frame = WindowFrame::with_rect(
            FrameConfig::default(),
            ViewportMetrics::new(600, 900),
            WindowRect::new(120, 140, 650, 550),
        );
        assert_eq!(frame.mode(), FrameMode::Narrow);
        assert!(frame.is_maximized());
        assert_eq!(frame.geometry(), WindowRect::new(8, 8, 584, 820));

        assert!(!frame.toggle_maximize());
        assert_eq!(
            frame.begin_drag(PointerPosition::new(20, 20), ListenerLease::detached()),
            None
        );

        frame.viewport_changed(ViewportMetrics::new(400, 700));
        assert_eq!(frame.geometry(), WindowRect::new(8, 8, 384, 620));
    }

    #[test]
    fn widening_restores_pre_narrow_geometry() {
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.viewport_changed(ViewportMetrics::new(500, 800));
        assert_eq!(frame.mode(), FrameMode::Narrow);

        frame.viewport_changed(DESKTOP);
        assert_eq!(frame.mode(), FrameMode::Normal);
        assert_eq!(frame.geometry(), WindowRect::new(120, 140, 650, 550));
    }

    #[test]
    fn widening_a_user_maximized_frame_stays_maximized() {
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.toggle_maximize();
        frame.viewport_changed(ViewportMetrics::new(500, 800));
        frame.viewport_changed(ViewportMetrics::new(1440, 900));

        assert_eq!(frame.mode(), FrameMode::Maximized);
        assert_eq!(frame.geometry(), WindowRect::new(0, 0, 1440, 844));
        frame.toggle_maximize();
        assert_eq!(frame.geometry(), WindowRect::new(120, 140, 650, 550));
    }

    #[test]
    fn entering_narrow_mode_mid_drag_releases_listeners() {
        let released = Rc::new(Cell::new(0));
        let mut frame = frame_at(WindowRect::new(120, 140, 650, 550));
        frame.begin_drag(PointerPosition::new(130, 150), counting_lease(&released));

        frame.viewport_changed(ViewportMetrics::new(500, 800));
        assert_eq!(released.get(), 1);
        assert_eq!(frame.interaction(), InteractionKind::Idle);
    }

    #[test]
    fn config_deserializes_with_defaults_for_missing_fields() {
        let config: FrameConfig =
            serde_json::from_str("{\"taskbar_height\":48}").expect("parse config");
        assert_eq!(config.taskbar_height, 48);
        assert_eq!(config.min_width, MIN_WINDOW_WIDTH);
        assert_eq!(config.spawn_jitter, (200, 100));
    }
}
