use serde::{Deserialize, Serialize};

/// Tabs of the main area, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Dashboard,
    Alerts,
    Analytics,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Alerts, Tab::Analytics, Tab::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "대시보드",
            Tab::Alerts => "알림",
            Tab::Analytics => "분석",
            Tab::Settings => "설정",
        }
    }
}

/// Named screens reachable in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Tabs(Tab),
    Cctv,
    Simulation,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::Tabs(Tab::Dashboard) => "dashboard",
            Route::Tabs(Tab::Alerts) => "alerts",
            Route::Tabs(Tab::Analytics) => "analytics",
            Route::Tabs(Tab::Settings) => "settings",
            Route::Cctv => "cctv",
            Route::Simulation => "simulation",
        }
    }
}

/// Route stack. The bottom entry is never popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    /// The app root immediately redirects to login.
    pub fn launch() -> Self {
        Self {
            stack: vec![Route::Login],
        }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Login)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Swaps the whole stack for `route`; returns the routes that left.
    pub fn replace(&mut self, route: Route) -> Vec<Route> {
        std::mem::replace(&mut self.stack, vec![route])
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pops the top route unless it is the last one.
    pub fn back(&mut self) -> Option<Route> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    /// Switches tab when the tab group is on top; returns whether it did.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        match self.stack.last_mut() {
            Some(top @ Route::Tabs(_)) => {
                *top = Route::Tabs(tab);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_lands_on_login() {
        assert_eq!(Navigator::launch().current(), Route::Login);
    }

    #[test]
    fn back_never_pops_the_root() {
        let mut nav = Navigator::launch();
        nav.replace(Route::Tabs(Tab::Dashboard));
        nav.push(Route::Simulation);
        assert_eq!(nav.back(), Some(Route::Simulation));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.current(), Route::Tabs(Tab::Dashboard));
    }

    #[test]
    fn tabs_only_switch_when_tab_group_is_on_top() {
        let mut nav = Navigator::launch();
        assert!(!nav.select_tab(Tab::Alerts));
        nav.replace(Route::Tabs(Tab::Dashboard));
        assert!(nav.select_tab(Tab::Alerts));
        nav.push(Route::Cctv);
        assert!(!nav.select_tab(Tab::Settings));
        assert_eq!(nav.current(), Route::Cctv);
    }
}
