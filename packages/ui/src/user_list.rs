use api::{delete_user, fetch_users};
use dioxus::prelude::*;
use store::pagination::{clamp_page, page_count, paginate};
use store::User;

use crate::{use_list_settings, use_user_service, use_user_store, Pagination, UserForm};

/// What the list view currently shows in place of the table.
#[derive(Clone, Debug, PartialEq)]
enum Screen {
    Table,
    Create,
    Edit(User),
}

/// Paginated user table with add, edit and delete entry points.
///
/// Loads the collection on mount. The form replaces the table while open.
#[component]
pub fn UserList() -> Element {
    let mut store = use_user_store();
    let service = use_user_service();
    let settings = use_list_settings();
    let mut screen = use_signal(|| Screen::Table);
    let mut current_page = use_signal(|| 1usize);

    // Load users on mount
    let loader_service = service.clone();
    let loader = use_resource(move || {
        let service = loader_service.clone();
        async move {
            fetch_users(&service, |action| store.write().reduce(action)).await;
        }
    });

    let on_delete = use_callback(move |id: i64| {
        let service = service.clone();
        spawn(async move {
            delete_user(&service, id, |action| store.write().reduce(action)).await;
        });
    });

    let on_edit = use_callback(move |user: User| screen.set(Screen::Edit(user)));

    let state = store();

    if state.loading() || loader.read().is_none() {
        return rsx! {
            p { class: "status", "Loading users ..." }
        };
    }

    if let Some(err) = state.error().filter(|e| e.blocks_table()) {
        return rsx! {
            p { class: "error", "{err}" }
        };
    }

    match screen() {
        Screen::Create => {
            return rsx! {
                UserForm { user: None, on_close: move |_| screen.set(Screen::Table) }
            };
        }
        Screen::Edit(user) => {
            return rsx! {
                UserForm { user: Some(user), on_close: move |_| screen.set(Screen::Table) }
            };
        }
        Screen::Table => {}
    }

    let page_size = settings.page_size;
    let pages = page_count(state.users().len(), page_size);
    let number = clamp_page(current_page(), pages);
    let page = paginate(state.users(), number, page_size);

    rsx! {
        section {
            class: "user-list",
            div {
                class: "user-list-header",
                h1 { "User List" }
                button {
                    onclick: move |_| screen.set(Screen::Create),
                    "+ Add User"
                }
            }

            if let Some(err) = state.error() {
                p { class: "error", "{err}" }
            }

            table {
                class: "user-table",
                thead {
                    tr {
                        th { "User Id" }
                        th { "First Name" }
                        th { "Last Name" }
                        th { "E-Mail" }
                        th { "Department" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for user in page.items.iter().cloned() {
                        UserRow {
                            key: "{user.id}",
                            user,
                            on_edit,
                            on_delete,
                        }
                    }
                }
            }

            Pagination {
                page_count: page.page_count,
                current: number,
                on_select: move |n: usize| current_page.set(n),
            }
        }
    }
}

#[component]
fn UserRow(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<i64>) -> Element {
    let id = user.id;
    let department = user.department().unwrap_or("N/A").to_string();
    let edit_target = user.clone();

    rsx! {
        tr {
            td { "{user.id}" }
            td { "{user.name.first}" }
            td { "{user.name.last}" }
            td { "{user.email}" }
            td { "{department}" }
            td {
                class: "flex gap-3",
                button {
                    class: "link",
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    "Edit"
                }
                button {
                    class: "link",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
