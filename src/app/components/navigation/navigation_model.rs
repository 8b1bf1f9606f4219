use crate::app::{ActionDispatcher, AppAction, AppModel};
use std::rc::Rc;

pub struct NavigationModel {
    app_model: Rc<AppModel>,
    dispatcher: Box<dyn ActionDispatcher>,
}

impl NavigationModel {
    pub fn new(app_model: Rc<AppModel>, dispatcher: Box<dyn ActionDispatcher>) -> Self {
        Self {
            app_model,
            dispatcher,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.children_count() > 1
    }

    pub fn go_back(&self) {
        if self.can_go_back() {
            self.dispatcher.dispatch(AppAction::NavigateBack);
        }
    }

    pub fn children_count(&self) -> usize {
        self.app_model.get_state().browser.count()
    }
}
