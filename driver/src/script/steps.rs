use anyhow::Context;
use pigcare_core::analysis::AlertFilter;
use pigcare_core::screens::Preference;
use pigcare_core::{Action, Tab, TickTarget};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// One user gesture (or pause) in a walkthrough script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Login { phone: String, password: String },
    ForgotPassword,
    SignUp,
    Dismiss,
    Tab { tab: Tab },
    ViewAllAlerts,
    Filter { filter: AlertFilter },
    OpenAlert { id: String },
    OpenSimulation,
    Back,
    Refresh,
    Disinfect,
    Toggle { target: TickTarget },
    Preference { preference: Preference, enabled: bool },
    Rewind,
    EmergencyAlert,
    Isolate,
    Wait { ms: u64 },
    Render,
}

impl Step {
    /// Actions dispatched for this step; `Wait` and `Render` have none.
    pub fn actions(&self) -> Vec<Action> {
        match self {
            Step::Login { phone, password } => vec![
                Action::PhoneChanged(phone.clone()),
                Action::PasswordChanged(password.clone()),
                Action::SubmitLogin,
            ],
            Step::ForgotPassword => vec![Action::ForgotPassword],
            Step::SignUp => vec![Action::SignUp],
            Step::Dismiss => vec![Action::DismissNotice],
            Step::Tab { tab } => vec![Action::SelectTab(*tab)],
            Step::ViewAllAlerts => vec![Action::ViewAllAlerts],
            Step::Filter { filter } => vec![Action::SetAlertFilter(*filter)],
            Step::OpenAlert { id } => vec![Action::OpenAlert(id.clone())],
            Step::OpenSimulation => vec![Action::OpenSimulation],
            Step::Back => vec![Action::Back],
            Step::Refresh => vec![Action::Refresh],
            Step::Disinfect => vec![Action::StartDisinfection],
            Step::Toggle { target } => vec![Action::TogglePlayback(*target)],
            Step::Preference {
                preference,
                enabled,
            } => vec![Action::SetPreference(*preference, *enabled)],
            Step::Rewind => vec![Action::Rewind],
            Step::EmergencyAlert => vec![Action::SendEmergencyAlert],
            Step::Isolate => vec![Action::StartIsolation],
            Step::Wait { .. } | Step::Render => Vec::new(),
        }
    }

    pub fn pause(&self) -> Option<Duration> {
        match self {
            Step::Wait { ms } => Some(Duration::from_millis(*ms)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub name: Option<String>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading walkthrough script {}", path_ref.display()))?;
        let script: Script = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing walkthrough script {}", path_ref.display()))?;
        Ok(script)
    }

    /// Built-in tour through every screen.
    pub fn tour() -> Self {
        let cctv = TickTarget::CctvClock;
        let hour = TickTarget::SimulationHour;
        Self {
            name: Some("tour".into()),
            steps: vec![
                Step::Render,
                Step::Login {
                    phone: String::new(),
                    password: String::new(),
                },
                Step::Dismiss,
                Step::Login {
                    phone: "010-1234-5678".into(),
                    password: "pigcare".into(),
                },
                Step::Wait { ms: 1_600 },
                Step::Render,
                Step::Refresh,
                Step::Wait { ms: 1_100 },
                Step::OpenSimulation,
                Step::Toggle { target: hour },
                Step::Wait { ms: 3_100 },
                Step::Toggle { target: hour },
                Step::Render,
                Step::Back,
                Step::Tab { tab: Tab::Alerts },
                Step::Filter {
                    filter: AlertFilter::Unresolved,
                },
                Step::Render,
                Step::OpenAlert { id: "1".into() },
                Step::Wait { ms: 2_100 },
                Step::Toggle { target: cctv },
                Step::Render,
                Step::Back,
                Step::Tab {
                    tab: Tab::Analytics,
                },
                Step::Render,
                Step::Tab { tab: Tab::Settings },
                Step::Preference {
                    preference: Preference::PushNotifications,
                    enabled: false,
                },
                Step::Render,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn login_step_fills_both_fields_then_submits() {
        let step = Step::Login {
            phone: "010".into(),
            password: "pw".into(),
        };
        assert_eq!(
            step.actions(),
            vec![
                Action::PhoneChanged("010".into()),
                Action::PasswordChanged("pw".into()),
                Action::SubmitLogin
            ]
        );
    }

    #[test]
    fn script_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"name: alerts\nsteps:\n  - step: tab\n    tab: alerts\n  - step: filter\n    filter: resolved\n  - step: wait\n    ms: 250\n  - step: back\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let script = Script::load(&path).unwrap();
        assert_eq!(script.steps.len(), 4);
        assert_eq!(script.steps[0], Step::Tab { tab: Tab::Alerts });
        assert_eq!(
            script.steps[1].actions(),
            vec![Action::SetAlertFilter(AlertFilter::Resolved)]
        );
        assert_eq!(script.steps[2].pause(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn unknown_step_is_rejected() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"steps:\n  - step: teleport\n").unwrap();
        let path = temp.into_temp_path();
        assert!(Script::load(&path).is_err());
    }
}
