//! Portfolio application catalog: identities, labels, icons, start-menu grouping and the
//! placeholder views mounted inside each window.

mod placeholders;

use leptos::*;

use crate::{model::AppId, reducer::DesktopAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Every application the desktop can open. Each one owns at most one window.
pub enum PortfolioApp {
    About,
    Projects,
    Resume,
    Contact,
    Terminal,
    AiAssistant,
    AiTools,
    UiCustomizer,
    SystemMonitor,
    Achievements,
    MiniGames,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Glyph shown on desktop icons, taskbar buttons and start-menu entries.
pub enum AppIcon {
    User,
    FolderOpen,
    FileText,
    Mail,
    Terminal,
    Bot,
    Brain,
    Palette,
    Activity,
    Trophy,
    Gamepad,
    Settings,
}

impl AppIcon {
    /// Stable CSS hook (`icon-user`, `icon-folder-open`, ...).
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "icon-user",
            Self::FolderOpen => "icon-folder-open",
            Self::FileText => "icon-file-text",
            Self::Mail => "icon-mail",
            Self::Terminal => "icon-terminal",
            Self::Bot => "icon-bot",
            Self::Brain => "icon-brain",
            Self::Palette => "icon-palette",
            Self::Activity => "icon-activity",
            Self::Trophy => "icon-trophy",
            Self::Gamepad => "icon-gamepad",
            Self::Settings => "icon-settings",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::User => "👤",
            Self::FolderOpen => "📂",
            Self::FileText => "📄",
            Self::Mail => "✉",
            Self::Terminal => "⌨",
            Self::Bot => "🤖",
            Self::Brain => "🧠",
            Self::Palette => "🎨",
            Self::Activity => "📈",
            Self::Trophy => "🏆",
            Self::Gamepad => "🎮",
            Self::Settings => "⚙",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Start-menu grouping.
pub enum AppCategory {
    Personal,
    Work,
    Ai,
    Tools,
    System,
    Fun,
}

impl AppCategory {
    /// Category tabs in display order. `None` in the menu stands for "All".
    pub const ALL: [AppCategory; 6] = [
        Self::Personal,
        Self::Work,
        Self::Ai,
        Self::Tools,
        Self::System,
        Self::Fun,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Work => "Work",
            Self::Ai => "AI",
            Self::Tools => "Tools",
            Self::System => "System",
            Self::Fun => "Fun",
        }
    }
}

/// Icon-grid order of the desktop.
pub const DESKTOP_APPS: [PortfolioApp; 12] = [
    PortfolioApp::About,
    PortfolioApp::Projects,
    PortfolioApp::Resume,
    PortfolioApp::Contact,
    PortfolioApp::Terminal,
    PortfolioApp::AiAssistant,
    PortfolioApp::AiTools,
    PortfolioApp::UiCustomizer,
    PortfolioApp::SystemMonitor,
    PortfolioApp::Achievements,
    PortfolioApp::MiniGames,
    PortfolioApp::Settings,
];

/// Icon used for a window whose id is not in the catalog.
pub const FALLBACK_ICON: AppIcon = AppIcon::FolderOpen;

impl PortfolioApp {
    pub fn app_id_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::Contact => "contact",
            Self::Terminal => "terminal",
            Self::AiAssistant => "ai-assistant",
            Self::AiTools => "ai-tools",
            Self::UiCustomizer => "ui-customizer",
            Self::SystemMonitor => "system-monitor",
            Self::Achievements => "achievements",
            Self::MiniGames => "mini-games",
            Self::Settings => "settings",
        }
    }

    pub fn app_id(self) -> AppId {
        AppId::new(self.app_id_str())
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Projects => "Projects",
            Self::Resume => "Resume",
            Self::Contact => "Contact",
            Self::Terminal => "Terminal",
            Self::AiAssistant => "AI Assistant",
            Self::AiTools => "AI Tools",
            Self::UiCustomizer => "UI Customizer",
            Self::SystemMonitor => "System Monitor",
            Self::Achievements => "Achievements",
            Self::MiniGames => "Mini Games",
            Self::Settings => "Settings",
        }
    }

    pub fn icon(self) -> AppIcon {
        match self {
            Self::About => AppIcon::User,
            Self::Projects => AppIcon::FolderOpen,
            Self::Resume => AppIcon::FileText,
            Self::Contact => AppIcon::Mail,
            Self::Terminal => AppIcon::Terminal,
            Self::AiAssistant => AppIcon::Bot,
            Self::AiTools => AppIcon::Brain,
            Self::UiCustomizer => AppIcon::Palette,
            Self::SystemMonitor => AppIcon::Activity,
            Self::Achievements => AppIcon::Trophy,
            Self::MiniGames => AppIcon::Gamepad,
            Self::Settings => AppIcon::Settings,
        }
    }

    pub fn category(self) -> AppCategory {
        match self {
            Self::About | Self::Resume | Self::Contact => AppCategory::Personal,
            Self::Projects => AppCategory::Work,
            Self::AiAssistant | Self::AiTools => AppCategory::Ai,
            Self::Terminal | Self::UiCustomizer => AppCategory::Tools,
            Self::SystemMonitor | Self::Settings => AppCategory::System,
            Self::Achievements | Self::MiniGames => AppCategory::Fun,
        }
    }

    /// One-line blurb shown under the start-menu entry.
    pub fn description(self) -> &'static str {
        match self {
            Self::About => "Learn about my background",
            Self::Projects => "View my portfolio",
            Self::Resume => "Download my CV",
            Self::Contact => "Get in touch",
            Self::Terminal => "Command line interface",
            Self::AiAssistant => "Chat with AI helper",
            Self::AiTools => "AI-powered utilities",
            Self::UiCustomizer => "Tweak the desktop look",
            Self::SystemMonitor => "Performance metrics",
            Self::Achievements => "Track your progress",
            Self::MiniGames => "Play games",
            Self::Settings => "Customize your experience",
        }
    }

    /// Whether the start menu flags the entry as new.
    pub fn is_new(self) -> bool {
        matches!(self, Self::AiAssistant | Self::AiTools)
    }

    pub fn from_app_id(id: &AppId) -> Option<Self> {
        DESKTOP_APPS
            .into_iter()
            .find(|app| app.app_id_str() == id.as_str())
    }

    /// The action a desktop icon or start-menu entry dispatches.
    pub fn open_action(self) -> DesktopAction<PortfolioApp> {
        DesktopAction::OpenWindow {
            id: self.app_id(),
            title: self.title().to_string(),
            content: self,
        }
    }

    /// Case-insensitive match against title, category label and description.
    pub fn matches_query(self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [self.title(), self.category().label(), self.description()]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    pub(crate) fn view(self) -> View {
        placeholders::mount_placeholder(self)
    }
}

/// Icon for a window id, falling back to [`FALLBACK_ICON`] for ids outside the catalog.
pub fn icon_for_app_id(id: &AppId) -> AppIcon {
    PortfolioApp::from_app_id(id)
        .map(PortfolioApp::icon)
        .unwrap_or(FALLBACK_ICON)
}

/// Number of icon-grid columns for a viewport width.
pub fn desktop_grid_columns(viewport_width: i32) -> usize {
    if viewport_width < 768 {
        4
    } else if viewport_width < 1024 {
        6
    } else {
        8
    }
}

/// Start-menu entries after the search box and category tab are applied.
pub fn start_menu_apps(query: &str, category: Option<AppCategory>) -> Vec<PortfolioApp> {
    DESKTOP_APPS
        .into_iter()
        .filter(|app| app.matches_query(query))
        .filter(|app| category.map_or(true, |category| app.category() == category))
        .collect()
}

/// Taskbar tray badge text, e.g. `"1 app"` or `"3 apps"`.
pub fn running_apps_label(count: usize) -> String {
    if count == 1 {
        "1 app".to_string()
    } else {
        format!("{count} apps")
    }
}
