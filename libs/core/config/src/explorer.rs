use crate::{env_flag, env_or_default, ConfigError, FromEnv};
use std::env;
use std::path::PathBuf;

/// Explorer configuration loaded from the environment.
///
/// This mirrors the programmatic `ExplorerOptions` surface so deployments
/// can move the explorer or turn off the bundled UI without a rebuild.
#[derive(Clone, Debug)]
pub struct ExplorerSettings {
    /// URL prefix the explorer is mounted under
    pub mount_path: String,
    /// Override directories for UI front-end files, highest priority first
    pub ui_dirs: Vec<PathBuf>,
    /// Whether the bundled Swagger UI is served
    pub swagger_ui: bool,
    /// Whether the explorer routes emit CORS headers
    pub cors: bool,
}

impl FromEnv for ExplorerSettings {
    /// Reads from environment variables with sensible defaults:
    /// - EXPLORER_MOUNT_PATH: defaults to `/explorer`
    /// - EXPLORER_UI_DIRS: comma-separated directories, defaults to none
    /// - EXPLORER_SWAGGER_UI: boolean flag, defaults to true
    /// - EXPLORER_CORS: boolean flag, defaults to true
    fn from_env() -> Result<Self, ConfigError> {
        let mount_path = env_or_default("EXPLORER_MOUNT_PATH", "/explorer");

        let ui_dirs = env::var("EXPLORER_UI_DIRS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            mount_path,
            ui_dirs,
            swagger_ui: env_flag("EXPLORER_SWAGGER_UI", true)?,
            cors: env_flag("EXPLORER_CORS", true)?,
        })
    }
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            mount_path: "/explorer".to_string(),
            ui_dirs: Vec::new(),
            swagger_ui: true,
            cors: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 4] = [
        "EXPLORER_MOUNT_PATH",
        "EXPLORER_UI_DIRS",
        "EXPLORER_SWAGGER_UI",
        "EXPLORER_CORS",
    ];

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(VARS, || {
            let settings = ExplorerSettings::from_env().unwrap();
            assert_eq!(settings.mount_path, "/explorer");
            assert!(settings.ui_dirs.is_empty());
            assert!(settings.swagger_ui);
            assert!(settings.cors);
        });
    }

    #[test]
    fn test_custom_mount_path() {
        temp_env::with_var("EXPLORER_MOUNT_PATH", Some("/swagger"), || {
            let settings = ExplorerSettings::from_env().unwrap();
            assert_eq!(settings.mount_path, "/swagger");
        });
    }

    #[test]
    fn test_ui_dirs_are_comma_separated() {
        temp_env::with_var("EXPLORER_UI_DIRS", Some("/srv/ui, /opt/ui,"), || {
            let settings = ExplorerSettings::from_env().unwrap();
            assert_eq!(
                settings.ui_dirs,
                vec![PathBuf::from("/srv/ui"), PathBuf::from("/opt/ui")]
            );
        });
    }

    #[test]
    fn test_flags_can_be_disabled() {
        temp_env::with_vars(
            [
                ("EXPLORER_SWAGGER_UI", Some("false")),
                ("EXPLORER_CORS", Some("0")),
            ],
            || {
                let settings = ExplorerSettings::from_env().unwrap();
                assert!(!settings.swagger_ui);
                assert!(!settings.cors);
            },
        );
    }

    #[test]
    fn test_invalid_flag_is_an_error() {
        temp_env::with_var("EXPLORER_SWAGGER_UI", Some("sometimes"), || {
            let err = ExplorerSettings::from_env().unwrap_err();
            assert!(err.to_string().contains("EXPLORER_SWAGGER_UI"));
        });
    }
}
