use crate::api::BookApiClient;
use crate::app::state::*;
use crate::settings::BookshelfSettings;
use ref_filter_map::*;
use std::cell::{Ref, RefCell};
use std::sync::Arc;

pub struct AppServices {
    pub book_api: Arc<dyn BookApiClient + Send + Sync>,
    pub settings: BookshelfSettings,
}

pub struct AppModel {
    state: RefCell<AppState>,
    services: AppServices,
}

impl AppModel {
    pub fn new(
        book_api: Arc<dyn BookApiClient + Send + Sync>,
        settings: BookshelfSettings,
    ) -> Self {
        let state = RefCell::new(AppState::new(settings.discard_stale_responses));
        let services = AppServices { book_api, settings };
        Self { state, services }
    }

    pub fn get_book_api(&self) -> Arc<dyn BookApiClient + Send + Sync> {
        Arc::clone(&self.services.book_api)
    }

    pub fn settings(&self) -> &BookshelfSettings {
        &self.services.settings
    }

    pub fn get_state(&self) -> Ref<'_, AppState> {
        self.state.borrow()
    }

    pub fn map_state_opt<T: 'static, F: FnOnce(&AppState) -> Option<&T>>(
        &self,
        map: F,
    ) -> Option<Ref<'_, T>> {
        ref_filter_map(self.state.borrow(), map)
    }

    pub fn update_state(&self, message: AppAction) -> Vec<AppEvent> {
        let mut state = self.state.borrow_mut();
        state.update_state(message)
    }
}
