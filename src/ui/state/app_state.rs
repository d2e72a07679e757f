use dioxus::prelude::{use_hook, use_signal, Signal};

use crate::domain::error::ViewError;
use crate::infra::seed::SeedUsers;
use crate::usecase::services::list_view::ListViewProcessor;

pub struct AppState {
    pub list_view: Signal<ListViewProcessor>,
    pub load_error: Signal<Option<ViewError>>,
    pub min_age_input: Signal<String>,
    pub max_age_input: Signal<String>,
}

impl AppState {
    /// Builds the list over the seed users. A source that fails validation
    /// leaves an empty list and records the error for the view to show.
    pub fn new() -> Self {
        let seeded = use_hook(|| ListViewProcessor::from_source(&SeedUsers));
        let for_list = seeded.clone();

        Self {
            list_view: use_signal(move || for_list.unwrap_or_default()),
            load_error: use_signal(move || {
                if let Err(err) = &seeded {
                    tracing::error!(%err, "failed to build user list");
                }
                seeded.err()
            }),
            min_age_input: use_signal(String::new),
            max_age_input: use_signal(String::new),
        }
    }
}
