use dioxus::prelude::*;
use store::pagination::page_numbers;

/// One button per page, current page highlighted.
#[component]
pub fn Pagination(page_count: usize, current: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        nav {
            class: "mt-4",
            ul {
                class: "pagination",
                for number in page_numbers(page_count) {
                    li {
                        key: "{number}",
                        button {
                            class: if number == current { "active" } else { "" },
                            onclick: move |_| on_select.call(number),
                            "{number}"
                        }
                    }
                }
            }
        }
    }
}
