use std::rc::Rc;

use crate::app::components::{Books, Details, EventListener, ScreenFactory};
use crate::app::models::BookId;
use crate::app::{AppEvent, BrowserEvent};

use super::NavigationModel;

// Owns the books screen for the whole session and one details screen per
// entry of the navigation stack.
pub struct Navigation {
    model: Rc<NavigationModel>,
    screen_factory: ScreenFactory,
    books: Books,
    children: Vec<Details>,
}

impl Navigation {
    pub fn new(model: NavigationModel, screen_factory: ScreenFactory) -> Self {
        let model = Rc::new(model);
        let weak_model = Rc::downgrade(&model);
        screen_factory
            .details_view()
            .connect_back(Box::new(move || {
                if let Some(model) = weak_model.upgrade() {
                    model.go_back();
                }
            }));

        let books = screen_factory.make_books();
        Self {
            model,
            screen_factory,
            books,
            children: vec![],
        }
    }

    pub fn depth(&self) -> usize {
        self.model.children_count()
    }

    fn push_details(&mut self, id: &BookId) {
        let details = self.screen_factory.make_details(id.clone());
        details.mount();
        self.children.push(details);
    }

    fn pop(&mut self, id: &BookId) {
        match self.children.pop() {
            Some(details) if details.id() == id => {}
            Some(details) => warn!(
                "popped details of book {} while expecting {}",
                details.id(),
                id
            ),
            None => warn!("no details screen to pop"),
        }
    }
}

impl EventListener for Navigation {
    fn on_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::BrowserEvent(BrowserEvent::NavigatedToDetails(id)) => {
                self.push_details(id);
                debug!("navigation depth is now {}", self.depth());
            }
            AppEvent::BrowserEvent(BrowserEvent::NavigationPopped(id)) => {
                self.pop(id);
                debug!("navigation depth is now {}", self.depth());
            }
            _ => {}
        };
        self.books.on_event(event);
        for child in self.children.iter_mut() {
            child.on_event(event);
        }
    }
}
