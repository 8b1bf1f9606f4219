use super::{
    AppAction, BooksState, DetailPhase, DetailsState, FetchKind, ListPhase, RequestToken,
    UpdatableState,
};
use crate::app::models::*;

#[derive(Clone, Debug)]
pub enum BrowserAction {
    StartBooksFetch(FetchKind, RequestToken),
    SetBooks(RequestToken, Vec<Book>),
    BooksFetchFailed(RequestToken),
    NavigateToDetails(BookId),
    StartDetailsFetch(BookId),
    SetDetails(BookId, Book),
    DetailsFetchFailed(BookId),
    GoBack,
}

impl From<BrowserAction> for AppAction {
    fn from(action: BrowserAction) -> Self {
        AppAction::BrowserAction(action)
    }
}

#[derive(Clone, Debug)]
pub enum BrowserEvent {
    BooksUpdated,
    BooksPhaseChanged(ListPhase),
    NavigatedToDetails(BookId),
    DetailsPhaseChanged(BookId, DetailPhase),
    NavigationPopped(BookId),
}

pub enum BrowserScreen {
    Books(BooksState),
    Details(DetailsState),
}

pub struct BrowserState {
    // The books screen is always at the bottom
    navigation: Vec<BrowserScreen>,
}

impl BrowserState {
    pub fn new(discard_stale: bool) -> Self {
        Self {
            navigation: vec![BrowserScreen::Books(BooksState::new(discard_stale))],
        }
    }

    pub fn books_state(&self) -> Option<&BooksState> {
        self.navigation.iter().find_map(|screen| match screen {
            BrowserScreen::Books(state) => Some(state),
            _ => None,
        })
    }

    fn books_state_mut(&mut self) -> Option<&mut BooksState> {
        self.navigation.iter_mut().find_map(|screen| match screen {
            BrowserScreen::Books(state) => Some(state),
            _ => None,
        })
    }

    pub fn details_state(&self, id: &BookId) -> Option<&DetailsState> {
        self.navigation.iter().rev().find_map(|screen| match screen {
            BrowserScreen::Details(state) if &state.id == id => Some(state),
            _ => None,
        })
    }

    fn details_state_mut(&mut self, id: &BookId) -> Option<&mut DetailsState> {
        self.navigation.iter_mut().rev().find_map(|screen| match screen {
            BrowserScreen::Details(state) if &state.id == id => Some(state),
            _ => None,
        })
    }

    pub fn count(&self) -> usize {
        self.navigation.len()
    }
}

impl UpdatableState for BrowserState {
    type Action = BrowserAction;
    type Event = BrowserEvent;

    fn update_with(&mut self, action: Self::Action) -> Vec<Self::Event> {
        match action {
            BrowserAction::NavigateToDetails(id) => {
                self.navigation
                    .push(BrowserScreen::Details(DetailsState::new(id.clone())));
                vec![BrowserEvent::NavigatedToDetails(id)]
            }
            BrowserAction::GoBack if self.navigation.len() > 1 => match self.navigation.pop() {
                Some(BrowserScreen::Details(state)) => {
                    vec![BrowserEvent::NavigationPopped(state.id)]
                }
                _ => vec![],
            },
            BrowserAction::StartDetailsFetch(ref id)
            | BrowserAction::SetDetails(ref id, _)
            | BrowserAction::DetailsFetchFailed(ref id) => {
                let id = id.clone();
                match self.details_state_mut(&id) {
                    Some(state) => state.update_with(action),
                    None => {
                        debug!("no details screen for book {}, ignoring", id);
                        vec![]
                    }
                }
            }
            _ => self
                .books_state_mut()
                .map(|state| state.update_with(action))
                .unwrap_or_default(),
        }
    }
}
