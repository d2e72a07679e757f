use crate::domain::entities::user::UserColumn;
use crate::domain::entities::view_state::{SortDirection, SortSpec};
use crate::usecase::services::list_view::PageView;

/// Parses an age bound typed by the user. Blank or non-numeric text means no bound.
pub fn parse_age_input(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}

pub fn sort_indicator(sort: Option<SortSpec>, column: UserColumn) -> &'static str {
    match sort {
        Some(spec) if spec.column == column => match spec.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => "",
    }
}

pub fn range_label(view: &PageView) -> String {
    let scope = if view.filters_active {
        format!("{} total, filtered", view.total_count)
    } else {
        format!("{} total", view.total_count)
    };
    match view.visible_range() {
        Some((first, last)) => format!(
            "Showing {first}–{last} of {} ({scope})",
            view.filtered_count
        ),
        None => format!("Showing 0 of 0 ({scope})"),
    }
}

pub fn column_alignment(column: UserColumn) -> &'static str {
    match column {
        UserColumn::Id | UserColumn::Age => "right",
        UserColumn::Name | UserColumn::City => "left",
    }
}

pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; gap: 12px; padding: 12px; box-sizing: border-box; font-family: sans-serif;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #f5f5f5; border: 1px solid #bbb; padding: 6px 8px; cursor: pointer; user-select: none;"
}

pub fn page_button_style(is_current: bool) -> &'static str {
    if is_current {
        "border: 1px solid #3366cc; background: #3366cc; color: #fff; padding: 4px 10px; border-radius: 6px;"
    } else {
        "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_age_input_treats_blank_and_garbage_as_no_bound() {
        assert_eq!(parse_age_input(""), None);
        assert_eq!(parse_age_input("   "), None);
        assert_eq!(parse_age_input("abc"), None);
        assert_eq!(parse_age_input("-3"), None);
        assert_eq!(parse_age_input(" 28 "), Some(28));
    }

    #[test]
    fn sort_indicator_marks_only_active_column() {
        let sort = Some(SortSpec {
            column: UserColumn::Age,
            direction: SortDirection::Desc,
        });

        assert_eq!(sort_indicator(sort, UserColumn::Age), " ▼");
        assert_eq!(sort_indicator(sort, UserColumn::Name), "");
        assert_eq!(sort_indicator(None, UserColumn::Age), "");
    }

    #[test]
    fn sticky_header_styles_include_positioning() {
        let style = table_header_cell_style();

        assert!(style.contains("position: sticky"));
        assert!(style.contains("top: 0"));
        assert!(style.contains("z-index"));
    }
}
