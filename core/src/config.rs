use crate::prelude::{ShellError, ShellResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Timings and decorative assets for the shell. Missing YAML keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub farm_name: String,
    pub login_delay_ms: u64,
    pub refresh_delay_ms: u64,
    pub disinfection_ms: u64,
    pub cctv_tick_ms: u64,
    pub simulation_tick_ms: u64,
    pub login_image_url: String,
    pub cctv_image_url: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            farm_name: "스마트 축사 A동".into(),
            login_delay_ms: 1_500,
            refresh_delay_ms: 1_000,
            disinfection_ms: 5_000,
            cctv_tick_ms: 1_000,
            simulation_tick_ms: 500,
            login_image_url: "https://images.pexels.com/photos/1300355/pexels-photo-1300355.jpeg?auto=compress&cs=tinysrgb&w=400".into(),
            cctv_image_url: "https://images.pexels.com/photos/1300355/pexels-photo-1300355.jpeg?auto=compress&cs=tinysrgb&w=800".into(),
        }
    }
}

impl ShellConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> ShellResult<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|err| {
            ShellError::Config(format!("reading shell config {}: {err}", path_ref.display()))
        })?;
        Self::from_yaml(&contents)
            .map_err(|err| ShellError::Config(format!("{} ({})", err, path_ref.display())))
    }

    pub fn from_yaml(contents: &str) -> ShellResult<Self> {
        let config: ShellConfig = serde_yaml::from_str(contents)
            .map_err(|err| ShellError::Config(format!("parsing shell config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Tick periods of zero would spin; everything else is accepted as-is.
    pub fn validate(&self) -> ShellResult<()> {
        if self.cctv_tick_ms == 0 || self.simulation_tick_ms == 0 {
            return Err(ShellError::Config("tick periods must be non-zero".into()));
        }
        Ok(())
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    pub fn disinfection_duration(&self) -> Duration {
        Duration::from_millis(self.disinfection_ms)
    }

    pub fn cctv_tick(&self) -> Duration {
        Duration::from_millis(self.cctv_tick_ms)
    }

    pub fn simulation_tick(&self) -> Duration {
        Duration::from_millis(self.simulation_tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_screen_timings() {
        let cfg = ShellConfig::default();
        assert_eq!(cfg.login_delay(), Duration::from_millis(1_500));
        assert_eq!(cfg.cctv_tick(), Duration::from_secs(1));
        assert_eq!(cfg.simulation_tick(), Duration::from_millis(500));
    }

    #[test]
    fn config_load_reads_yaml_and_keeps_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all("login_delay_ms: 10\nfarm_name: B동\n".as_bytes())
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = ShellConfig::load(&path).unwrap();
        assert_eq!(cfg.login_delay_ms, 10);
        assert_eq!(cfg.farm_name, "B동");
        assert_eq!(cfg.refresh_delay_ms, 1_000);
    }

    #[test]
    fn zero_tick_period_is_rejected() {
        let err = ShellConfig::from_yaml("simulation_tick_ms: 0\n").unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = ShellConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("reading shell config"));
    }
}
