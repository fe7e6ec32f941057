//! Fan-out from the authoritative window list to one mounted [`WindowFrame`] per open window.
//!
//! The manager mirrors the desktop's collection: it mounts a frame when a window appears and
//! drops it when the window disappears. It never filters, reorders, or mutates windows; frame
//! intents are forwarded verbatim as [`DesktopAction`] values.

use std::collections::BTreeMap;

use platform_host::{RandomSource, ViewportMetrics};

use crate::{
    model::{AppId, DesktopState, WindowRecord, WindowRect},
    reducer::{reduce_desktop, DesktopAction, Transition},
    window_frame::{FrameConfig, FrameIntent, FrameMode, InteractionKind, WindowFrame},
};

#[derive(Debug, Clone, PartialEq)]
/// Render-ready view of one window.
pub struct FrameView<C> {
    pub id: AppId,
    pub title: String,
    pub content: C,
    pub z_index: u32,
    pub minimized: bool,
    pub mode: FrameMode,
    /// A drag or resize is in progress.
    pub interacting: bool,
    pub resize_handles: bool,
    /// `None` while minimized: a minimized window occupies no screen position.
    pub geometry: Option<WindowRect>,
}

impl<C> FrameView<C> {
    pub fn is_maximized(&self) -> bool {
        self.mode != FrameMode::Normal
    }
}

#[derive(Debug, Default)]
/// Owner of the mounted frames, keyed by window id.
pub struct WindowManager {
    config: FrameConfig,
    viewport: ViewportMetrics,
    frames: BTreeMap<AppId, WindowFrame>,
}

impl WindowManager {
    pub fn new(config: FrameConfig, viewport: ViewportMetrics) -> Self {
        Self {
            config,
            viewport,
            frames: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> FrameConfig {
        self.config
    }

    pub fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }

    /// Mounts frames for newly opened windows and tears down frames of closed ones.
    ///
    /// Tearing down a frame drops any active [`crate::window_frame::ListenerLease`], and a
    /// reopened window gets a freshly spawned frame.
    pub fn sync<C>(&mut self, windows: &[WindowRecord<C>], random: &mut dyn RandomSource) {
        self.frames
            .retain(|id, _| windows.iter().any(|window| &window.id == id));
        for window in windows {
            if !self.frames.contains_key(&window.id) {
                let frame = WindowFrame::spawn(self.config, self.viewport, random);
                self.frames.insert(window.id.clone(), frame);
            }
        }
    }

    /// Passes a viewport change on to every mounted frame.
    pub fn set_viewport(&mut self, viewport: ViewportMetrics) {
        self.viewport = viewport;
        for frame in self.frames.values_mut() {
            frame.viewport_changed(viewport);
        }
    }

    pub fn frame(&self, id: &AppId) -> Option<&WindowFrame> {
        self.frames.get(id)
    }

    pub fn frame_mut(&mut self, id: &AppId) -> Option<&mut WindowFrame> {
        self.frames.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Projects every window, minimized ones included, in collection order.
    pub fn project<C: Clone>(&self, windows: &[WindowRecord<C>]) -> Vec<FrameView<C>> {
        windows.iter().map(|window| self.view_of(window)).collect()
    }

    /// Render-ready view of a single window and its mounted frame.
    pub fn view_of<C: Clone>(&self, window: &WindowRecord<C>) -> FrameView<C> {
        let frame = self.frames.get(&window.id);
        FrameView {
            id: window.id.clone(),
            title: window.title.clone(),
            content: window.content.clone(),
            z_index: window.z_index,
            minimized: window.minimized,
            mode: frame.map_or(FrameMode::Normal, WindowFrame::mode),
            interacting: frame.is_some_and(|f| f.interaction() != InteractionKind::Idle),
            resize_handles: frame.is_some_and(WindowFrame::shows_resize_handles),
            geometry: if window.minimized {
                None
            } else {
                frame.map(WindowFrame::geometry)
            },
        }
    }

    /// Maps a frame intent to the desktop action it requests.
    pub fn forward<C>(id: &AppId, intent: FrameIntent) -> DesktopAction<C> {
        let id = id.clone();
        match intent {
            FrameIntent::BringToFront => DesktopAction::BringToFront { id },
            FrameIntent::Minimize => DesktopAction::MinimizeWindow { id },
            FrameIntent::Close => DesktopAction::CloseWindow { id },
        }
    }

    /// Applies `action` to the desktop and keeps the mounted frames in step with it.
    ///
    /// Frames are (un)mounted only when the window set changes, that is on
    /// [`Transition::Created`] and [`Transition::Closed`].
    pub fn dispatch<C>(
        &mut self,
        state: &mut DesktopState<C>,
        action: DesktopAction<C>,
        random: &mut dyn RandomSource,
    ) -> Transition {
        let transition = reduce_desktop(state, action);
        if matches!(transition, Transition::Created { .. } | Transition::Closed) {
            self.sync(state.windows(), random);
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use platform_host::SequenceRandom;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::PointerPosition, window_frame::ListenerLease};

    const DESKTOP: ViewportMetrics = ViewportMetrics::new(1280, 800);

    fn manager() -> WindowManager {
        WindowManager::new(FrameConfig::default(), DESKTOP)
    }

    #[test]
    fn sync_mounts_one_frame_per_window() {
        let mut state = DesktopState::default();
        let mut manager = manager();
        let mut random = SequenceRandom::constant(0.0);

        state.open_window("about", "About Me", ());
        state.open_window("projects", "Projects", ());
        state.open_window("about", "About Me", ());
        manager.sync(state.windows(), &mut random);

        assert_eq!(manager.len(), 2);
        assert!(manager.frame(&AppId::new("about")).is_some());
        assert!(manager.frame(&AppId::new("projects")).is_some());
    }

    #[test]
    fn minimized_windows_are_projected_without_geometry() {
        let mut state = DesktopState::default();
        let mut manager = manager();
        let mut random = SequenceRandom::constant(0.0);

        state.open_window("about", "About Me", "about");
        state.open_window("terminal", "Terminal", "terminal");
        state.minimize_window(&AppId::new("terminal"));
        manager.sync(state.windows(), &mut random);

        let views = manager.project(state.windows());
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].geometry, Some(WindowRect::new(100, 100, 650, 550)));
        assert_eq!(views[1].title, "Terminal");
        assert!(views[1].minimized);
        assert_eq!(views[1].geometry, None);
        assert_eq!(views[1].content, "terminal");
    }

    #[test]
    fn closing_through_a_frame_unmounts_it_and_releases_listeners() {
        let mut state = DesktopState::default();
        let mut manager = manager();
        let mut random = SequenceRandom::constant(0.0);
        let released = Rc::new(Cell::new(0));
        let about = AppId::new("about");

        state.open_window("about", "About Me", ());
        manager.sync(state.windows(), &mut random);
        let lease = {
            let released = released.clone();
            ListenerLease::new(move || released.set(released.get() + 1))
        };
        manager
            .frame_mut(&about)
            .expect("frame")
            .begin_drag(PointerPosition::new(110, 110), lease);

        let close = WindowManager::forward(&about, FrameIntent::Close);
        let transition = manager.dispatch(&mut state, close, &mut random);

        assert_eq!(transition, Transition::Closed);
        assert!(manager.frame(&about).is_none());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn reopened_window_gets_fresh_default_geometry() {
        let mut state = DesktopState::default();
        let mut manager = manager();
        let mut random = SequenceRandom::constant(0.0);
        let about = AppId::new("about");

        state.open_window("about", "About Me", ());
        manager.sync(state.windows(), &mut random);
        let frame = manager.frame_mut(&about).expect("frame");
        frame.toggle_maximize();

        state.close_window(&about);
        manager.sync(state.windows(), &mut random);
        state.open_window("about", "About Me", ());
        manager.sync(state.windows(), &mut random);

        let frame = manager.frame(&about).expect("fresh frame");
        assert!(!frame.is_maximized());
        assert_eq!(frame.geometry(), WindowRect::new(100, 100, 650, 550));
        assert!(!state.window(&about).expect("window").minimized);
    }

    #[test]
    fn intents_are_forwarded_verbatim() {
        let id = AppId::new("settings");
        assert_eq!(
            WindowManager::forward::<()>(&id, FrameIntent::BringToFront),
            DesktopAction::BringToFront { id: id.clone() }
        );
        assert_eq!(
            WindowManager::forward::<()>(&id, FrameIntent::Minimize),
            DesktopAction::MinimizeWindow { id: id.clone() }
        );
        assert_eq!(
            WindowManager::forward::<()>(&id, FrameIntent::Close),
            DesktopAction::CloseWindow { id }
        );
    }

    #[test]
    fn focus_intent_raises_window() {
        let mut state = DesktopState::default();
        let mut manager = manager();
        let mut random = SequenceRandom::constant(0.0);
        state.open_window("about", "About Me", ());
        state.open_window("resume", "Resume", ());
        manager.sync(state.windows(), &mut random);

        let about = AppId::new("about");
        let intent = manager
            .frame_mut(&about)
            .and_then(|frame| {
                frame.begin_drag(PointerPosition::new(120, 110), ListenerLease::detached())
            })
            .expect("drag accepted");
        manager.dispatch(&mut state, WindowManager::forward(&about, intent), &mut random);

        assert_eq!(
            state.topmost_visible().map(|w| w.id.clone()),
            Some(about.clone())
        );
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn viewport_changes_reach_every_frame() {
        let mut state = DesktopState::default();
        let mut manager = manager();
        let mut random = SequenceRandom::constant(0.0);
        state.open_window("about", "About Me", ());
        state.open_window("contact", "Contact", ());
        manager.sync(state.windows(), &mut random);

        manager.set_viewport(ViewportMetrics::new(600, 900));

        assert_eq!(manager.viewport(), ViewportMetrics::new(600, 900));
        for view in manager.project(state.windows()) {
            assert!(view.is_maximized());
            assert_eq!(view.geometry, Some(WindowRect::new(8, 8, 584, 820)));
        }
    }

    fn open(id: &str) -> DesktopAction<()> {
        DesktopAction::OpenWindow {
            id: AppId::new(id),
            title: id.to_string(),
            content: (),
        }
    }

    #[test]
    fn dispatch_mounts_frames_on_open_and_unmounts_on_close() {
        let mut state = DesktopState::default();
        let mut manager = manager();
        let mut random = SequenceRandom::constant(0.0);
        let about = AppId::new("about");

        assert_eq!(
            manager.dispatch(&mut state, open("about"), &mut random),
            Transition::Created { z_index: 1 }
        );
        assert!(manager.frame(&about).is_some());

        manager.dispatch(
            &mut state,
            DesktopAction::CloseWindow { id: about.clone() },
            &mut random,
        );
        assert!(manager.frame(&about).is_none());
        assert!(state.is_empty());
    }

    #[test]
    fn dispatch_keeps_frame_geometry_across_raise_and_minimize() {
        let mut state = DesktopState::default();
        let mut manager = manager();
        let mut random = SequenceRandom::constant(0.0);
        let about = AppId::new("about");

        manager.dispatch(&mut state, open("about"), &mut random);
        manager.frame_mut(&about).expect("frame").toggle_maximize();

        manager.dispatch(
            &mut state,
            DesktopAction::MinimizeWindow { id: about.clone() },
            &mut random,
        );
        assert_eq!(manager.view_of(&state.windows()[0]).geometry, None);

        let transition = manager.dispatch(
            &mut state,
            DesktopAction::RestoreFromTaskbar { id: about.clone() },
            &mut random,
        );
        assert_eq!(transition, Transition::Raised { z_index: 2 });
        let view = manager.view_of(&state.windows()[0]);
        assert_eq!(view.mode, FrameMode::Maximized);
        assert_eq!(view.geometry, Some(WindowRect::new(0, 0, 1280, 744)));
    }

    #[test]
    fn dispatch_reports_unknown_ids_without_touching_frames() {
        let mut state = DesktopState::default();
        let mut manager = manager();
        let mut random = SequenceRandom::constant(0.0);
        manager.dispatch(&mut state, open("about"), &mut random);

        let transition = manager.dispatch(
            &mut state,
            DesktopAction::BringToFront {
                id: AppId::new("ghost"),
            },
            &mut random,
        );
        assert_eq!(transition, Transition::Ignored);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn view_reports_interaction_and_handles() {
        let mut state = DesktopState::default();
        let mut manager = manager();
        let mut random = SequenceRandom::constant(0.0);
        let about = AppId::new("about");
        manager.dispatch(&mut state, open("about"), &mut random);

        let idle = manager.view_of(&state.windows()[0]);
        assert!(!idle.interacting);
        assert!(idle.resize_handles);

        manager
            .frame_mut(&about)
            .expect("frame")
            .begin_drag(PointerPosition::new(110, 110), ListenerLease::detached());
        assert!(manager.view_of(&state.windows()[0]).interacting);
    }

    #[test]
    fn window_without_frame_has_no_geometry() {
        let mut state = DesktopState::default();
        state.open_window("about", "About Me", ());
        let view = manager().view_of(&state.windows()[0]);
        assert_eq!(view.geometry, None);
        assert!(!view.resize_handles);
    }
}
