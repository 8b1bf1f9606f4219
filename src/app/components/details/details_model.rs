use std::cell::Ref;
use std::ops::Deref;
use std::rc::Rc;

use crate::app::dispatch::ActionDispatcher;
use crate::app::models::*;
use crate::app::state::{BrowserAction, DetailPhase, DetailsState};
use crate::app::AppModel;

pub struct DetailsModel {
    pub id: BookId,
    app_model: Rc<AppModel>,
    dispatcher: Box<dyn ActionDispatcher>,
}

impl DetailsModel {
    pub fn new(id: BookId, app_model: Rc<AppModel>, dispatcher: Box<dyn ActionDispatcher>) -> Self {
        Self {
            id,
            app_model,
            dispatcher,
        }
    }

    fn state(&self) -> Option<Ref<'_, DetailsState>> {
        self.app_model
            .map_state_opt(|s| s.browser.details_state(&self.id))
    }

    pub fn get_book(&self) -> Option<impl Deref<Target = Book> + '_> {
        self.app_model
            .map_state_opt(|s| s.browser.details_state(&self.id)?.content.as_ref())
    }

    pub fn phase(&self) -> Option<DetailPhase> {
        self.state().map(|s| s.phase)
    }

    pub fn title(&self) -> String {
        self.get_book()
            .map(|book| book.title.clone())
            .unwrap_or_else(|| "Loading...".to_string())
    }

    pub fn load_detail(&self) {
        let id = self.id.clone();
        let api = self.app_model.get_book_api();
        let settle_on_failure = self.app_model.settings().settle_details_on_failure;

        self.dispatcher
            .dispatch(BrowserAction::StartDetailsFetch(id.clone()).into());
        self.dispatcher.dispatch_async(Box::pin(async move {
            match api.fetch_by_id(&id).await {
                Ok(book) => Some(BrowserAction::SetDetails(id, book).into()),
                Err(err) => {
                    error!("Failed to fetch book {}: {}", id, err);
                    // Left alone, the screen keeps showing its loading state
                    if settle_on_failure {
                        Some(BrowserAction::DetailsFetchFailed(id).into())
                    } else {
                        None
                    }
                }
            }
        }));
    }
}
