//! Window entities, geometry primitives, and the authoritative desktop state.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Height of the taskbar strip reserved at the bottom of the viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 56;
/// Width a freshly mounted window frame starts with.
pub const DEFAULT_WINDOW_WIDTH: i32 = 650;
/// Height a freshly mounted window frame starts with.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 550;
/// Smallest width a resize may produce.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Smallest height a resize may produce.
pub const MIN_WINDOW_HEIGHT: i32 = 200;
/// Viewports narrower than this force every frame into full-screen mode.
pub const MOBILE_BREAKPOINT_PX: i32 = 768;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Identifier of an application kind, which is also the identity of its single window.
pub struct AppId(pub String);

impl AppId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AppId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h
    }

    /// Whether `self` lies entirely inside `outer`.
    pub fn is_within(self, outer: WindowRect) -> bool {
        self.x >= outer.x
            && self.y >= outer.y
            && self.right() <= outer.right()
            && self.bottom() <= outer.bottom()
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 100,
            y: 100,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// One of the eight resize affordances around a window frame.
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    /// All affordances, edges first.
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Direction token as used by the frame's handle markup (`"top-left"`, `"right"`, ...).
    pub fn direction(self) -> &'static str {
        match self {
            Self::North => "top",
            Self::South => "bottom",
            Self::East => "right",
            Self::West => "left",
            Self::NorthEast => "top-right",
            Self::NorthWest => "top-left",
            Self::SouthEast => "bottom-right",
            Self::SouthWest => "bottom-left",
        }
    }

    pub fn touches_left(self) -> bool {
        self.direction().contains("left")
    }

    pub fn touches_right(self) -> bool {
        self.direction().contains("right")
    }

    pub fn touches_top(self) -> bool {
        self.direction().contains("top")
    }

    pub fn touches_bottom(self) -> bool {
        self.direction().contains("bottom")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One open application instance.
///
/// `content` is an opaque handle supplied by whoever opened the window; the desktop never looks
/// inside it.
pub struct WindowRecord<C> {
    pub id: AppId,
    pub title: String,
    pub content: C,
    pub minimized: bool,
    pub z_index: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Process-wide stacking sequence. Values are handed out once and never reused.
pub struct ZOrderCounter {
    next: u32,
}

impl ZOrderCounter {
    /// Returns the current value and moves the counter forward by one.
    pub fn advance(&mut self) -> u32 {
        let value = self.next;
        self.next = self.next.saturating_add(1);
        value
    }

    /// The value the next stacking operation will receive.
    pub fn peek(&self) -> u32 {
        self.next
    }
}

impl Default for ZOrderCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "DesktopSnapshot<C>",
    bound(deserialize = "C: Deserialize<'de>")
)]
/// Authoritative collection of open windows plus the z-order counter.
///
/// Only the reducer mutates this; everything else reads it. Deserialized states are validated
/// against the same invariants the reducer maintains.
pub struct DesktopState<C> {
    pub(crate) windows: Vec<WindowRecord<C>>,
    pub(crate) z_order: ZOrderCounter,
}

#[derive(Deserialize)]
struct DesktopSnapshot<C> {
    windows: Vec<WindowRecord<C>>,
    z_order: ZOrderCounter,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a serialized desktop cannot be restored.
pub enum DesktopStateError {
    /// Two windows share an id.
    #[error("window `{0}` appears more than once")]
    DuplicateWindow(AppId),
    /// The counter would hand out a value some window already holds.
    #[error("z-order counter {next} does not exceed the highest stacking value {highest}")]
    StaleCounter {
        /// Value the counter would assign next.
        next: u32,
        /// Highest z-index among the restored windows.
        highest: u32,
    },
}

impl<C> TryFrom<DesktopSnapshot<C>> for DesktopState<C> {
    type Error = DesktopStateError;

    fn try_from(snapshot: DesktopSnapshot<C>) -> Result<Self, Self::Error> {
        for (index, window) in snapshot.windows.iter().enumerate() {
            if snapshot.windows[..index].iter().any(|w| w.id == window.id) {
                return Err(DesktopStateError::DuplicateWindow(window.id.clone()));
            }
        }
        if let Some(highest) = snapshot.windows.iter().map(|w| w.z_index).max() {
            let next = snapshot.z_order.peek();
            // A saturated counter legitimately repeats its last value.
            if next <= highest && next != u32::MAX {
                return Err(DesktopStateError::StaleCounter { next, highest });
            }
        }
        Ok(Self {
            windows: snapshot.windows,
            z_order: snapshot.z_order,
        })
    }
}

impl<C> Default for DesktopState<C> {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            z_order: ZOrderCounter::default(),
        }
    }
}

impl<C> DesktopState<C> {
    /// Open windows in the order they were created.
    pub fn windows(&self) -> &[WindowRecord<C>] {
        &self.windows
    }

    pub fn window(&self, id: &AppId) -> Option<&WindowRecord<C>> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn contains(&self, id: &AppId) -> bool {
        self.window(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// The visible window with the highest z-index, if any.
    pub fn topmost_visible(&self) -> Option<&WindowRecord<C>> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
    }

    /// The z-index the next open/focus operation will assign.
    pub fn next_z_index(&self) -> u32 {
        self.z_order.peek()
    }

    pub(crate) fn window_mut(&mut self, id: &AppId) -> Option<&mut WindowRecord<C>> {
        self.windows.iter_mut().find(|w| &w.id == id)
    }
}
