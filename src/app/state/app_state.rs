use crate::app::models::*;
use crate::app::state::{BrowserAction, BrowserEvent, BrowserState, UpdatableState};

#[derive(Clone, Debug)]
pub enum AppAction {
    Start,
    ViewBook(BookId),
    NavigateBack,
    BrowserAction(BrowserAction),
}

#[derive(Clone, Debug)]
pub enum AppEvent {
    Started,
    BrowserEvent(BrowserEvent),
}

impl From<BrowserEvent> for AppEvent {
    fn from(event: BrowserEvent) -> Self {
        AppEvent::BrowserEvent(event)
    }
}

pub struct AppState {
    pub started: bool,
    pub browser: BrowserState,
}

impl AppState {
    pub fn new(discard_stale: bool) -> Self {
        Self {
            started: false,
            browser: BrowserState::new(discard_stale),
        }
    }

    fn update_browser(&mut self, action: BrowserAction) -> Vec<AppEvent> {
        self.browser
            .update_with(action)
            .into_iter()
            .map(AppEvent::from)
            .collect()
    }

    pub fn update_state(&mut self, message: AppAction) -> Vec<AppEvent> {
        match message {
            AppAction::Start if !self.started => {
                self.started = true;
                vec![AppEvent::Started]
            }
            AppAction::Start => vec![],
            AppAction::ViewBook(id) => self.update_browser(BrowserAction::NavigateToDetails(id)),
            AppAction::NavigateBack => self.update_browser(BrowserAction::GoBack),
            AppAction::BrowserAction(a) => self.update_browser(a),
        }
    }
}
