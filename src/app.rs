use dioxus::prelude::*;

use crate::domain::entities::user::UserColumn;
use crate::domain::entities::view_state::FilterState;
use crate::ui::format::{
    column_alignment, page_button_style, parse_age_input, range_label, root_container_style,
    sort_indicator, table_container_style, table_header_cell_style,
};
use crate::ui::state::app_state::AppState;

pub const APP_TITLE: &str = "FilterSortPaginate";

const FILTER_ROW_STYLE: &str = "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;";
const CELL_STYLE: &str = "border: 1px solid #bbb; padding: 4px 8px;";

#[component]
pub fn App() -> Element {
    let AppState {
        mut list_view,
        load_error,
        mut min_age_input,
        mut max_age_input,
    } = AppState::new();

    if let Some(err) = load_error() {
        return rsx! {
            div {
                p { "Failed to load users: {err}" }
            }
        };
    }

    let view = list_view.read().view();
    let filters = list_view.read().filters().clone();
    let sort = view.sort;
    let current_page = view.current_page;
    let status = range_label(&view);
    let column_count = UserColumn::ALL.len();

    let nothing_to_clear = filters == FilterState::default()
        && min_age_input.read().is_empty()
        && max_age_input.read().is_empty();
    let name_enabled = filters.name_enabled;
    let age_enabled = filters.age_enabled;
    let city_enabled = filters.city_enabled;
    let name_term = filters.name_term.clone();
    let city_term = filters.city_term.clone();

    rsx! {
        div {
            style: "{root_container_style()}",
            h2 { "{APP_TITLE}" }

            div {
                style: "{FILTER_ROW_STYLE}",
                label {
                    input {
                        r#type: "checkbox",
                        checked: name_enabled,
                        onclick: move |_| list_view.write().set_name_filter_enabled(!name_enabled),
                    }
                    " Name "
                }
                input {
                    placeholder: "Search name",
                    disabled: !name_enabled,
                    value: "{name_term}",
                    oninput: move |event| list_view.write().set_name_term(event.value()),
                }

                label {
                    input {
                        r#type: "checkbox",
                        checked: age_enabled,
                        onclick: move |_| list_view.write().set_age_filter_enabled(!age_enabled),
                    }
                    " Age "
                }
                input {
                    r#type: "number",
                    placeholder: "Min",
                    style: "width: 70px;",
                    disabled: !age_enabled,
                    value: min_age_input(),
                    oninput: move |event| {
                        let text = event.value();
                        list_view.write().set_min_age(parse_age_input(&text));
                        min_age_input.set(text);
                    },
                }
                input {
                    r#type: "number",
                    placeholder: "Max",
                    style: "width: 70px;",
                    disabled: !age_enabled,
                    value: max_age_input(),
                    oninput: move |event| {
                        let text = event.value();
                        list_view.write().set_max_age(parse_age_input(&text));
                        max_age_input.set(text);
                    },
                }

                label {
                    input {
                        r#type: "checkbox",
                        checked: city_enabled,
                        onclick: move |_| list_view.write().set_city_filter_enabled(!city_enabled),
                    }
                    " City "
                }
                input {
                    placeholder: "Search city",
                    disabled: !city_enabled,
                    value: "{city_term}",
                    oninput: move |event| list_view.write().set_city_term(event.value()),
                }

                button {
                    disabled: nothing_to_clear,
                    onclick: move |_| {
                        list_view.write().clear_filters();
                        min_age_input.set(String::new());
                        max_age_input.set(String::new());
                    },
                    "Clear filters"
                }
            }

            div {
                style: "{table_container_style()}",
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            {UserColumn::ALL.into_iter().map(|column| {
                                let label = column.label();
                                let header = format!("{label}{}", sort_indicator(sort, column));
                                rsx!(
                                    th {
                                        key: "{label}",
                                        style: "{table_header_cell_style()}",
                                        onclick: move |_| list_view.write().sort_by(column),
                                        "{header}"
                                    }
                                )
                            })}
                        }
                    }
                    tbody {
                        if view.rows.is_empty() {
                            tr {
                                td {
                                    colspan: "{column_count}",
                                    style: "{CELL_STYLE} text-align: center; color: #888;",
                                    "No users match the current filters"
                                }
                            }
                        }
                        {view.rows.iter().map(|user| {
                            let row_key = user.id.0;
                            let cells: Vec<(String, &'static str)> = UserColumn::ALL
                                .into_iter()
                                .map(|column| (column.display_value(user), column_alignment(column)))
                                .collect();
                            rsx!(
                                tr {
                                    key: "{row_key}",
                                    {cells.into_iter().map(|(value, alignment)| rsx!(
                                        td {
                                            style: "{CELL_STYLE} text-align: {alignment};",
                                            "{value}"
                                        }
                                    ))}
                                }
                            )
                        })}
                    }
                }
            }

            div {
                style: "{FILTER_ROW_STYLE}",
                button {
                    style: "{page_button_style(false)}",
                    disabled: !view.has_previous(),
                    onclick: move |_| {
                        list_view.write().change_page(current_page.saturating_sub(1));
                    },
                    "Prev"
                }
                {view.page_numbers.iter().copied().map(|page_number| {
                    let is_current = page_number == current_page;
                    rsx!(
                        button {
                            key: "{page_number}",
                            style: "{page_button_style(is_current)}",
                            onclick: move |_| {
                                list_view.write().change_page(page_number);
                            },
                            "{page_number}"
                        }
                    )
                })}
                button {
                    style: "{page_button_style(false)}",
                    disabled: !view.has_next(),
                    onclick: move |_| {
                        list_view.write().change_page(current_page + 1);
                    },
                    "Next"
                }
                span { style: "color: #555;", "{status}" }
            }
        }
    }
}
