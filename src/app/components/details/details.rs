use std::rc::Rc;

use super::DetailsModel;
use crate::app::components::EventListener;
use crate::app::models::*;
use crate::app::state::DetailPhase;
use crate::app::{AppEvent, BrowserEvent};

pub trait DetailsView {
    fn update(&self, title: &str, book: Option<&Book>, phase: DetailPhase);

    fn connect_back(&self, f: Box<dyn Fn()>);
}

pub struct Details {
    view: Rc<dyn DetailsView>,
    model: DetailsModel,
}

impl Details {
    pub fn new(model: DetailsModel, view: Rc<dyn DetailsView>) -> Self {
        Self { view, model }
    }

    pub fn id(&self) -> &BookId {
        &self.model.id
    }

    pub fn mount(&self) {
        self.model.load_detail();
    }

    fn update_view(&self) {
        let title = self.model.title();
        let phase = self.model.phase().unwrap_or(DetailPhase::Idle);
        let book = self.model.get_book();
        self.view.update(&title, book.as_deref(), phase);
    }
}

impl EventListener for Details {
    fn on_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::BrowserEvent(BrowserEvent::DetailsPhaseChanged(id, _))
                if id == self.id() =>
            {
                self.update_view();
            }
            _ => {}
        }
    }
}
