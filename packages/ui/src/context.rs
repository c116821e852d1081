//! Store and service context for the user views.

use std::num::NonZeroUsize;

use api::HttpUserService;
use dioxus::prelude::*;
use store::UserStore;

/// List settings shared with [`crate::UserList`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListSettings {
    pub page_size: NonZeroUsize,
}

/// Get the shared user store.
pub fn use_user_store() -> Signal<UserStore> {
    use_context::<Signal<UserStore>>()
}

/// Get the service the views send requests to.
pub fn use_user_service() -> HttpUserService {
    use_context::<HttpUserService>()
}

pub fn use_list_settings() -> ListSettings {
    use_context::<ListSettings>()
}

/// Provider component for the user store, service and list settings.
/// Wrap the user views with this component.
#[component]
pub fn UserStoreProvider(
    service: HttpUserService,
    page_size: NonZeroUsize,
    children: Element,
) -> Element {
    use_context_provider(|| Signal::new(UserStore::new()));
    use_context_provider(move || service);
    use_context_provider(|| ListSettings { page_size });

    rsx! {
        {children}
    }
}
