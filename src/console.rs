use std::cell::RefCell;
use std::str::FromStr;

use crate::app::components::{BooksView, DetailsView};
use crate::app::models::{Book, BookId};
use crate::app::state::{DetailPhase, ListPhase};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Scroll,
    Refresh,
    Open(BookId),
    Back,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = match (words.next(), words.next(), words.next()) {
            (Some("scroll"), None, _) => Command::Scroll,
            (Some("refresh"), None, _) => Command::Refresh,
            (Some("open"), Some(id), None) => Command::Open(BookId::new(id)),
            (Some("back"), None, _) => Command::Back,
            (Some("quit"), None, _) => Command::Quit,
            _ => return Err(UnknownCommand(line.trim().to_string())),
        };
        Ok(command)
    }
}

fn describe(phase: ListPhase) -> &'static str {
    match phase {
        ListPhase::Idle => "",
        ListPhase::Loading => " (loading)",
        ListPhase::Refreshing => " (refreshing)",
        ListPhase::LoadingMore => " (loading more)",
        ListPhase::Error => " (error)",
    }
}

fn book_line(book: &Book) -> String {
    format!(
        "[{}] {}  {}  {}",
        book.id,
        book.title,
        book.formatted_discount(),
        book.formatted_price()
    )
}

#[derive(Default)]
struct Callbacks {
    bottom_edge: Option<Box<dyn Fn()>>,
    refresh: Option<Box<dyn Fn()>>,
    activated: Option<Box<dyn Fn(BookId)>>,
    back: Option<Box<dyn Fn()>>,
}

/// Prints both screens to stdout and turns commands into the gestures
/// the components listen to.
#[derive(Default)]
pub struct ConsoleView {
    callbacks: RefCell<Callbacks>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&self, command: Command) {
        let callbacks = self.callbacks.borrow();
        match command {
            Command::Scroll => callbacks.bottom_edge.as_ref().map(|f| f()),
            Command::Refresh => callbacks.refresh.as_ref().map(|f| f()),
            Command::Open(id) => callbacks.activated.as_ref().map(|f| f(id)),
            Command::Back => callbacks.back.as_ref().map(|f| f()),
            Command::Quit => None,
        };
    }
}

impl BooksView for ConsoleView {
    fn update(&self, books: &[Book], phase: ListPhase) {
        println!("== Books{} ==", describe(phase));
        for book in books {
            println!("{}", book_line(book));
        }
    }

    fn connect_bottom_edge(&self, f: Box<dyn Fn()>) {
        self.callbacks.borrow_mut().bottom_edge = Some(f);
    }

    fn connect_refresh(&self, f: Box<dyn Fn()>) {
        self.callbacks.borrow_mut().refresh = Some(f);
    }

    fn connect_book_activated(&self, f: Box<dyn Fn(BookId)>) {
        self.callbacks.borrow_mut().activated = Some(f);
    }
}

impl DetailsView for ConsoleView {
    fn update(&self, title: &str, book: Option<&Book>, phase: DetailPhase) {
        println!("== {} ==", title);
        match (book, phase) {
            (_, DetailPhase::Error) => println!("could not load this book"),
            (Some(book), _) => {
                println!("{}", book_line(book));
                if let Some(description) = &book.description {
                    println!("{}", description);
                }
            }
            (None, _) => {}
        }
    }

    fn connect_back(&self, f: Box<dyn Fn()>) {
        self.callbacks.borrow_mut().back = Some(f);
    }
}
