use std::rc::Rc;

use crate::app::components::*;
use crate::app::models::BookId;
use crate::app::{ActionDispatcher, AppModel};

pub struct ScreenFactory {
    app_model: Rc<AppModel>,
    dispatcher: Box<dyn ActionDispatcher>,
    books_view: Rc<dyn BooksView>,
    details_view: Rc<dyn DetailsView>,
}

impl ScreenFactory {
    pub fn new(
        app_model: Rc<AppModel>,
        dispatcher: Box<dyn ActionDispatcher>,
        books_view: Rc<dyn BooksView>,
        details_view: Rc<dyn DetailsView>,
    ) -> Self {
        Self {
            app_model,
            dispatcher,
            books_view,
            details_view,
        }
    }

    pub fn details_view(&self) -> &Rc<dyn DetailsView> {
        &self.details_view
    }

    pub fn make_books(&self) -> Books {
        let model = BooksModel::new(Rc::clone(&self.app_model), self.dispatcher.box_clone());
        Books::new(model, Rc::clone(&self.books_view))
    }

    pub fn make_details(&self, id: BookId) -> Details {
        let model = DetailsModel::new(id, Rc::clone(&self.app_model), self.dispatcher.box_clone());
        Details::new(model, Rc::clone(&self.details_view))
    }
}
