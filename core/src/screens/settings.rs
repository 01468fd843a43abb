use crate::model::OperatorProfile;
use crate::prelude::{Effect, Screen, ScreenContext, ShellResult};
use crate::telemetry::LogManager;
use serde::{Deserialize, Serialize};

pub const APP_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    PushNotifications,
    EmergencyAlerts,
    AutoDisinfection,
}

impl Preference {
    pub const ALL: [Preference; 3] = [
        Preference::PushNotifications,
        Preference::EmergencyAlerts,
        Preference::AutoDisinfection,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Preference::PushNotifications => "푸시 알림",
            Preference::EmergencyAlerts => "긴급 알림",
            Preference::AutoDisinfection => "자동 소독",
        }
    }
}

/// Local-only toggles; every one starts enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub push_notifications: bool,
    pub emergency_alerts: bool,
    pub auto_disinfection: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            push_notifications: true,
            emergency_alerts: true,
            auto_disinfection: true,
        }
    }
}

impl Preferences {
    pub fn get(&self, preference: Preference) -> bool {
        match preference {
            Preference::PushNotifications => self.push_notifications,
            Preference::EmergencyAlerts => self.emergency_alerts,
            Preference::AutoDisinfection => self.auto_disinfection,
        }
    }

    pub fn set(&mut self, preference: Preference, enabled: bool) {
        match preference {
            Preference::PushNotifications => self.push_notifications = enabled,
            Preference::EmergencyAlerts => self.emergency_alerts = enabled,
            Preference::AutoDisinfection => self.auto_disinfection = enabled,
        }
    }
}

#[derive(Debug)]
pub struct SettingsScreen {
    profile: Option<OperatorProfile>,
    preferences: Preferences,
    logger: LogManager,
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self {
            profile: None,
            preferences: Preferences::default(),
            logger: LogManager::new("settings"),
        }
    }
}

impl SettingsScreen {
    pub fn profile(&self) -> Option<&OperatorProfile> {
        self.profile.as_ref()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn set_preference(&mut self, preference: Preference, enabled: bool) {
        self.preferences.set(preference, enabled);
        self.logger
            .detail(&format!("{} -> {}", preference.label(), enabled));
    }
}

impl Screen for SettingsScreen {
    fn mount(&mut self, ctx: &ScreenContext<'_>) -> ShellResult<Vec<Effect>> {
        self.profile = Some(ctx.provider.profile()?);
        self.preferences = Preferences::default();
        Ok(Vec::new())
    }

    fn unmount(&mut self) -> Vec<Effect> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_start_enabled_and_toggle_independently() {
        let mut screen = SettingsScreen::default();
        assert!(Preference::ALL.iter().all(|p| screen.preferences().get(*p)));
        screen.set_preference(Preference::EmergencyAlerts, false);
        assert!(!screen.preferences().emergency_alerts);
        assert!(screen.preferences().push_notifications);
        assert!(screen.preferences().auto_disinfection);
    }
}
