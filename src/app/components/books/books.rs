use std::rc::Rc;

use super::BooksModel;
use crate::app::components::EventListener;
use crate::app::models::*;
use crate::app::state::ListPhase;
use crate::app::{AppEvent, BrowserEvent};

/// The list screen as seen by the books component: something that shows
/// books and reports scroll, refresh and selection gestures.
pub trait BooksView {
    fn update(&self, books: &[Book], phase: ListPhase);

    fn connect_bottom_edge(&self, f: Box<dyn Fn()>);

    fn connect_refresh(&self, f: Box<dyn Fn()>);

    fn connect_book_activated(&self, f: Box<dyn Fn(BookId)>);
}

pub struct Books {
    view: Rc<dyn BooksView>,
    model: Rc<BooksModel>,
}

impl Books {
    pub fn new(model: Rc<BooksModel>, view: Rc<dyn BooksView>) -> Self {
        let weak_model = Rc::downgrade(&model);
        view.connect_bottom_edge(Box::new(move || {
            if let Some(model) = weak_model.upgrade() {
                model.maybe_load_more();
            }
        }));

        let weak_model = Rc::downgrade(&model);
        view.connect_refresh(Box::new(move || {
            if let Some(model) = weak_model.upgrade() {
                model.refresh();
            }
        }));

        let weak_model = Rc::downgrade(&model);
        view.connect_book_activated(Box::new(move |id| {
            if let Some(model) = weak_model.upgrade() {
                model.open_book(id);
            }
        }));

        Self { view, model }
    }

    fn update_view(&self) {
        let phase = self.model.phase();
        if let Some(books) = self.model.get_books() {
            self.view.update(&books, phase);
        }
    }
}

impl EventListener for Books {
    fn on_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                self.model.initial_load();
            }
            AppEvent::BrowserEvent(BrowserEvent::BooksUpdated)
            | AppEvent::BrowserEvent(BrowserEvent::BooksPhaseChanged(_)) => {
                self.update_view();
            }
            _ => {}
        }
    }
}
