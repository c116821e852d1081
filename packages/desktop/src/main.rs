use std::io;

use dioxus::prelude::*;
use store::AppConfig;

fn main() {
    dioxus::launch(App);
}

/// Read `user-admin.toml` from the working directory if present, then apply
/// `USER_ADMIN_API_URL` from the environment or `.env`.
fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();

    config_from_file(std::fs::read_to_string(AppConfig::filename()))
        .with_env_overrides(|key| std::env::var(key).ok())
}

/// A missing file means defaults. Any other read or parse failure is logged and
/// also falls back to defaults.
fn config_from_file(read: io::Result<String>) -> AppConfig {
    match read {
        Ok(text) => AppConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::error!("{e}, using defaults");
            AppConfig::default()
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => AppConfig::default(),
        Err(e) => {
            tracing::error!("failed to read {}: {e}, using defaults", AppConfig::filename());
            AppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        ui::UserManagementApp { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_outcomes() {
        let read = Ok("[list]\npage_size = 10\n".to_string());
        assert_eq!(config_from_file(read).list.page_size.get(), 10);

        let missing = Err(io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(config_from_file(missing), AppConfig::default());

        let denied = Err(io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(config_from_file(denied), AppConfig::default());

        let invalid = Ok("[list]\npage_size = 0\n".to_string());
        assert_eq!(config_from_file(invalid), AppConfig::default());
    }
}
