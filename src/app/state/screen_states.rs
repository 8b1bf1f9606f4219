use super::{BrowserAction, BrowserEvent, UpdatableState};
use crate::app::models::*;

pub type RequestToken = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Refreshing,
    LoadingMore,
    // Shared vocabulary with the views, list fetches always settle on Idle
    Error,
}

impl ListPhase {
    pub fn is_fetching(self) -> bool {
        matches!(self, Self::Loading | Self::Refreshing | Self::LoadingMore)
    }
}

impl Default for ListPhase {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    Refresh,
    LoadMore,
}

impl FetchKind {
    fn phase(self) -> ListPhase {
        match self {
            Self::Initial => ListPhase::Loading,
            Self::Refresh => ListPhase::Refreshing,
            Self::LoadMore => ListPhase::LoadingMore,
        }
    }
}

pub struct BooksState {
    pub books: Vec<Book>,
    pub phase: ListPhase,
    latest_request: Option<RequestToken>,
    discard_stale: bool,
}

impl BooksState {
    pub fn new(discard_stale: bool) -> Self {
        Self {
            books: vec![],
            phase: ListPhase::Idle,
            latest_request: None,
            discard_stale,
        }
    }

    fn is_stale(&self, token: RequestToken) -> bool {
        self.discard_stale && self.latest_request != Some(token)
    }

    fn set_phase(&mut self, phase: ListPhase) -> Vec<BrowserEvent> {
        if self.phase != phase {
            self.phase = phase;
            vec![BrowserEvent::BooksPhaseChanged(phase)]
        } else {
            vec![]
        }
    }
}

impl UpdatableState for BooksState {
    type Action = BrowserAction;
    type Event = BrowserEvent;

    fn update_with(&mut self, action: Self::Action) -> Vec<Self::Event> {
        match action {
            BrowserAction::StartBooksFetch(kind, token) => {
                self.latest_request = Some(token);
                self.set_phase(kind.phase())
            }
            BrowserAction::SetBooks(token, _) if self.is_stale(token) => {
                debug!("discarding stale books response #{}", token);
                vec![]
            }
            BrowserAction::SetBooks(_, books) => {
                // one event for both the new items and the return to Idle
                self.books = books;
                self.phase = ListPhase::Idle;
                vec![BrowserEvent::BooksUpdated]
            }
            BrowserAction::BooksFetchFailed(token) if self.is_stale(token) => {
                debug!("discarding stale books failure #{}", token);
                vec![]
            }
            BrowserAction::BooksFetchFailed(_) => self.set_phase(ListPhase::Idle),
            _ => vec![],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailPhase {
    Idle,
    Loading,
    Error,
}

pub struct DetailsState {
    pub id: BookId,
    pub content: Option<Book>,
    pub phase: DetailPhase,
}

impl DetailsState {
    pub fn new(id: BookId) -> Self {
        Self {
            id,
            content: None,
            phase: DetailPhase::Idle,
        }
    }
}

impl UpdatableState for DetailsState {
    type Action = BrowserAction;
    type Event = BrowserEvent;

    fn update_with(&mut self, action: Self::Action) -> Vec<Self::Event> {
        match action {
            BrowserAction::StartDetailsFetch(id) if id == self.id => {
                self.phase = DetailPhase::Loading;
                vec![BrowserEvent::DetailsPhaseChanged(id, DetailPhase::Loading)]
            }
            BrowserAction::SetDetails(id, book) if id == self.id => {
                self.content = Some(book);
                self.phase = DetailPhase::Idle;
                vec![BrowserEvent::DetailsPhaseChanged(id, DetailPhase::Idle)]
            }
            BrowserAction::DetailsFetchFailed(id) if id == self.id => {
                self.phase = DetailPhase::Error;
                vec![BrowserEvent::DetailsPhaseChanged(id, DetailPhase::Error)]
            }
            _ => vec![],
        }
    }
}
