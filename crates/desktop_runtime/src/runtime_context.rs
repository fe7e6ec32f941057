//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reactive containers: the authoritative [`DesktopState`], the
//! [`WindowManager`] holding every mounted frame, the theme context and the viewport metrics.
//! UI composition stays in [`crate::components`].

use leptos::*;
use platform_host::{HostServices, ViewportMetrics};

use crate::{
    apps::PortfolioApp,
    model::{AppId, DesktopState},
    reducer::{DesktopAction, Transition},
    theme::{load_theme_context, persist_theme, Theme, ThemeContext},
    window_frame::{FrameConfig, FrameIntent, WindowFrame},
    window_manager::WindowManager,
};

/// Desktop state specialized to the portfolio catalog.
pub type PortfolioDesktop = DesktopState<PortfolioApp>;

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle (prefs, randomness, viewport probe).
    pub host: StoredValue<HostServices>,
    /// Reactive desktop state signal.
    pub state: RwSignal<PortfolioDesktop>,
    /// Mounted window frames, kept in step with `state` by [`Self::dispatch_action`].
    pub frames: RwSignal<WindowManager>,
    /// Reactive theme signal.
    pub theme: RwSignal<ThemeContext>,
    /// Last viewport metrics reported by the host.
    pub viewport: RwSignal<ViewportMetrics>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction<PortfolioApp>>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction<PortfolioApp>) {
        self.dispatch.call(action);
    }

    /// Opens (or focuses) the window of `app`.
    pub fn open_app(&self, app: PortfolioApp) {
        self.dispatch_action(app.open_action());
    }

    /// Forwards a frame intent for `id` to the reducer.
    pub fn forward_intent(&self, id: &AppId, intent: FrameIntent) {
        self.dispatch_action(WindowManager::forward(id, intent));
    }

    /// Runs `f` against the mounted frame of `id`.
    ///
    /// Returns `None` when no frame is mounted or the runtime has already been torn down.
    pub fn with_frame<R>(&self, id: &AppId, f: impl FnOnce(&mut WindowFrame) -> R) -> Option<R> {
        self.frames
            .try_update(|manager| manager.frame_mut(id).map(f))
            .flatten()
    }

    /// Re-reads the host viewport and fans the new metrics out to every frame.
    pub fn refresh_viewport(&self) {
        let metrics = self.host.with_value(HostServices::viewport_metrics);
        if metrics == self.viewport.get_untracked() {
            return;
        }
        self.viewport.set(metrics);
        self.frames.update(|manager| manager.set_viewport(metrics));
    }

    /// Sets the theme and persists it.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.update(|context| context.set(theme));
        self.persist(theme);
    }

    /// Flips the theme and persists the new value.
    pub fn toggle_theme(&self) {
        let mut next = Theme::default();
        self.theme.update(|context| next = context.toggle());
        self.persist(next);
    }

    fn persist(&self, theme: Theme) {
        let prefs = self.host.with_value(|host| host.prefs.clone());
        spawn_local(async move {
            if let Err(err) = persist_theme(prefs.as_ref(), theme).await {
                logging::warn!("theme persist failed: {err}");
            }
        });
    }
}

fn install_theme_hydration(runtime: DesktopRuntimeContext) {
    let prefs = runtime.host.with_value(|host| host.prefs.clone());
    spawn_local(async move {
        let (context, err) = load_theme_context(prefs.as_ref()).await;
        if let Some(err) = err {
            logging::warn!("theme load failed, keeping default: {err}");
        }
        runtime.theme.set(context);
    });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and loads the stored theme.
pub fn DesktopProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Layout tuning for window frames.
    #[prop(optional)]
    frame_config: Option<FrameConfig>,
    children: Children,
) -> impl IntoView {
    let initial_viewport = host_services.viewport_metrics();
    let host = store_value(host_services);
    let state = create_rw_signal(PortfolioDesktop::default());
    let frames = create_rw_signal(WindowManager::new(
        frame_config.unwrap_or_default(),
        initial_viewport,
    ));
    let theme = create_rw_signal(ThemeContext::default());
    let viewport = create_rw_signal(initial_viewport);

    let dispatch = Callback::new(move |action: DesktopAction<PortfolioApp>| {
        let mut desktop = state.get_untracked();
        let target = action.target().clone();
        let mut transition = Transition::Ignored;

        // Frames mount before the window list changes so new windows render with geometry.
        frames.update(|manager| {
            host.with_value(|services| {
                services.with_random(|random| {
                    transition = manager.dispatch(&mut desktop, action, random);
                })
            })
        });

        if transition == Transition::Ignored {
            logging::log!("desktop action for unknown window `{target}` ignored");
        } else {
            state.set(desktop);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        frames,
        theme,
        viewport,
        dispatch,
    };

    provide_context(runtime);

    install_theme_hydration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
