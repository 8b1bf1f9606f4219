use crate::app::AppEvent;

mod navigation;
pub use navigation::*;

mod books;
pub use books::*;

mod details;
pub use details::*;

mod utils;
pub use utils::Debouncer;

pub trait EventListener {
    fn on_event(&mut self, _: &AppEvent) {}
}
