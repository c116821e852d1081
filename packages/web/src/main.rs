use dioxus::prelude::*;
use store::AppConfig;

fn main() {
    dioxus::launch(App);
}

/// The browser has no environment or config file; the service URL can be baked in
/// at build time through `USER_ADMIN_API_URL`.
fn load_config() -> AppConfig {
    AppConfig::default()
        .with_env_overrides(|_| option_env!("USER_ADMIN_API_URL").map(str::to_string))
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        ui::UserManagementApp { config }
    }
}
