use api::HttpUserService;
use dioxus::prelude::*;
use store::AppConfig;

use crate::{UserList, UserStoreProvider, MAIN_CSS};

/// Root of the user management app, shared by the web and desktop launchers.
#[component]
pub fn UserManagementApp(config: AppConfig) -> Element {
    let service = use_hook(|| match HttpUserService::new(&config.api) {
        Ok(service) => Some(service),
        Err(e) => {
            tracing::error!("Failed to create user service: {e}");
            None
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div {
            h1 { class: "app-title", "User Management App" }
            if let Some(service) = service {
                UserStoreProvider {
                    service,
                    page_size: config.list.page_size,
                    UserList {}
                }
            } else {
                p { class: "error", "Invalid user service URL: {config.api.base_url}" }
            }
        }
    }
}
