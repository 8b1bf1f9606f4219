use std::cell::{Cell, Ref};
use std::ops::Deref;
use std::rc::{Rc, Weak};

use super::ScrollThreshold;
use crate::app::components::Debouncer;
use crate::app::models::*;
use crate::app::state::{BooksState, BrowserAction, FetchKind, ListPhase, RequestToken};
use crate::app::{ActionDispatcher, AppAction, AppModel};

pub struct BooksModel {
    this: Weak<BooksModel>,
    app_model: Rc<AppModel>,
    dispatcher: Box<dyn ActionDispatcher>,
    debouncer: Debouncer,
    threshold: ScrollThreshold,
    last_token: Cell<RequestToken>,
    // Set as soon as a fetch is issued, before the dispatch loop applies it
    in_flight: Cell<Option<RequestToken>>,
}

impl BooksModel {
    pub fn new(app_model: Rc<AppModel>, dispatcher: Box<dyn ActionDispatcher>) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            app_model,
            dispatcher,
            debouncer: Debouncer::new(),
            threshold: ScrollThreshold::default(),
            last_token: Cell::new(0),
            in_flight: Cell::new(None),
        })
    }

    fn state(&self) -> Option<Ref<'_, BooksState>> {
        self.app_model.map_state_opt(|s| s.browser.books_state())
    }

    pub fn get_books(&self) -> Option<impl Deref<Target = Vec<Book>> + '_> {
        Some(Ref::map(self.state()?, |s| &s.books))
    }

    pub fn phase(&self) -> ListPhase {
        self.state().map(|s| s.phase).unwrap_or_default()
    }

    fn is_busy(&self) -> bool {
        self.phase().is_fetching() || self.in_flight.get().is_some()
    }

    fn clear_in_flight(&self, token: RequestToken) {
        if self.in_flight.get() == Some(token) {
            self.in_flight.set(None);
        }
    }

    fn next_token(&self) -> RequestToken {
        let token = self.last_token.get() + 1;
        self.last_token.set(token);
        token
    }

    fn fetch_books(&self, kind: FetchKind) {
        let token = self.next_token();
        debug!("fetching books ({:?}, #{})", kind, token);
        self.in_flight.set(Some(token));
        self.dispatcher
            .dispatch(BrowserAction::StartBooksFetch(kind, token).into());

        let this = self.this.clone();
        let api = self.app_model.get_book_api();
        self.dispatcher.dispatch_async(Box::pin(async move {
            let result = api.fetch_collection().await;
            if let Some(model) = this.upgrade() {
                model.clear_in_flight(token);
            }
            match result {
                Ok(books) => Some(BrowserAction::SetBooks(token, books).into()),
                Err(err) => {
                    error!("Failed to fetch books ({:?}): {}", kind, err);
                    Some(BrowserAction::BooksFetchFailed(token).into())
                }
            }
        }));
    }

    pub fn initial_load(&self) -> Option<()> {
        if self.is_busy() {
            debug!("books already loading, skipping initial load");
            return None;
        }
        self.fetch_books(FetchKind::Initial);
        Some(())
    }

    pub fn refresh(&self) {
        self.fetch_books(FetchKind::Refresh);
    }

    pub fn maybe_load_more(&self) -> Option<()> {
        let count = self.get_books()?.len();
        if !self.threshold.should_trigger(count) || self.is_busy() {
            return None;
        }

        let this = self.this.clone();
        let delay = self.app_model.settings().load_more_delay_ms;
        self.debouncer.debounce(delay, move || {
            if let Some(model) = this.upgrade() {
                model.load_more();
            }
        });
        Some(())
    }

    pub fn load_more(&self) -> Option<()> {
        if self.is_busy() {
            debug!("books already loading, skipping load more");
            return None;
        }
        self.fetch_books(FetchKind::LoadMore);
        Some(())
    }

    pub fn open_book(&self, id: BookId) {
        self.dispatcher.dispatch(AppAction::ViewBook(id));
    }
}
