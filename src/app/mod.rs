use std::rc::Rc;

pub mod dispatch;
pub use dispatch::{ActionDispatcher, DispatchLoop, Worker};

pub mod components;
use components::*;

pub mod models;

pub mod state;
pub use state::{AppAction, AppEvent, AppModel, BrowserEvent};

pub struct App {
    components: Vec<Box<dyn EventListener>>,
    model: Rc<AppModel>,
}

impl App {
    pub fn new(
        model: Rc<AppModel>,
        dispatcher: Box<dyn ActionDispatcher>,
        books_view: Rc<dyn BooksView>,
        details_view: Rc<dyn DetailsView>,
    ) -> Self {
        let components: Vec<Box<dyn EventListener>> = vec![App::make_navigation(
            Rc::clone(&model),
            dispatcher,
            books_view,
            details_view,
        )];

        Self { components, model }
    }

    fn make_navigation(
        app_model: Rc<AppModel>,
        dispatcher: Box<dyn ActionDispatcher>,
        books_view: Rc<dyn BooksView>,
        details_view: Rc<dyn DetailsView>,
    ) -> Box<Navigation> {
        let model = NavigationModel::new(Rc::clone(&app_model), dispatcher.box_clone());
        let screen_factory = ScreenFactory::new(app_model, dispatcher, books_view, details_view);
        Box::new(Navigation::new(model, screen_factory))
    }

    fn handle(&mut self, message: AppAction) {
        trace!("handling {:?}", message);
        let events = self.model.update_state(message);

        for event in events.iter() {
            debug!("event: {:?}", event);
            for component in self.components.iter_mut() {
                component.on_event(event);
            }
        }
    }

    pub async fn attach(mut self, dispatch_loop: DispatchLoop) {
        let app = &mut self;
        dispatch_loop
            .attach(move |action| {
                app.handle(action);
            })
            .await;
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::api::TestBookApiClient;
    use crate::app::models::{Book, BookId};
    use crate::app::state::{DetailPhase, ListPhase};
    use crate::settings::BookshelfSettings;
    use std::cell::RefCell;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::task::LocalSet;
    use tokio::time::sleep;

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn book(id: &str) -> Book {
        Book {
            id: BookId::new(id),
            title: format!("Book {}", id),
            cover_image: String::new(),
            price: 15000.0,
            discount_rate: 20.0,
            description: Some(format!("About book {}", id)),
        }
    }

    fn books(count: usize) -> Vec<Book> {
        (1..=count).map(|i| book(&i.to_string())).collect()
    }

    #[derive(Default)]
    struct FakeBooksView {
        updates: RefCell<Vec<(usize, ListPhase)>>,
        bottom_edge: RefCell<Option<Box<dyn Fn()>>>,
        refresh: RefCell<Option<Box<dyn Fn()>>>,
        activated: RefCell<Option<Box<dyn Fn(BookId)>>>,
    }

    impl FakeBooksView {
        fn last_update(&self) -> Option<(usize, ListPhase)> {
            self.updates.borrow().last().copied()
        }

        fn scroll_to_bottom(&self) {
            if let Some(f) = self.bottom_edge.borrow().as_ref() {
                f();
            }
        }

        fn pull_to_refresh(&self) {
            if let Some(f) = self.refresh.borrow().as_ref() {
                f();
            }
        }

        fn activate(&self, id: &str) {
            if let Some(f) = self.activated.borrow().as_ref() {
                f(BookId::new(id));
            }
        }
    }

    impl BooksView for FakeBooksView {
        fn update(&self, books: &[Book], phase: ListPhase) {
            self.updates.borrow_mut().push((books.len(), phase));
        }

        fn connect_bottom_edge(&self, f: Box<dyn Fn()>) {
            self.bottom_edge.replace(Some(f));
        }

        fn connect_refresh(&self, f: Box<dyn Fn()>) {
            self.refresh.replace(Some(f));
        }

        fn connect_book_activated(&self, f: Box<dyn Fn(BookId)>) {
            self.activated.replace(Some(f));
        }
    }

    #[derive(Default)]
    struct FakeDetailsView {
        updates: RefCell<Vec<(String, DetailPhase)>>,
        back: RefCell<Option<Box<dyn Fn()>>>,
    }

    impl FakeDetailsView {
        fn last_update(&self) -> Option<(String, DetailPhase)> {
            self.updates.borrow().last().cloned()
        }

        fn press_back(&self) {
            if let Some(f) = self.back.borrow().as_ref() {
                f();
            }
        }
    }

    impl DetailsView for FakeDetailsView {
        fn update(&self, title: &str, _: Option<&Book>, phase: DetailPhase) {
            self.updates.borrow_mut().push((title.to_string(), phase));
        }

        fn connect_back(&self, f: Box<dyn Fn()>) {
            self.back.replace(Some(f));
        }
    }

    struct Harness {
        api: Arc<TestBookApiClient>,
        model: Rc<AppModel>,
        dispatcher: Box<dyn ActionDispatcher>,
        books_view: Rc<FakeBooksView>,
        details_view: Rc<FakeDetailsView>,
    }

    impl Harness {
        fn start(api: TestBookApiClient) -> Self {
            let api = Arc::new(api);
            let model = Rc::new(AppModel::new(api.clone(), BookshelfSettings::default()));
            let dispatch_loop = DispatchLoop::new();
            let dispatcher = dispatch_loop.make_dispatcher(Worker);
            let books_view = Rc::new(FakeBooksView::default());
            let details_view = Rc::new(FakeDetailsView::default());

            let app = App::new(
                Rc::clone(&model),
                dispatcher.box_clone(),
                books_view.clone(),
                details_view.clone(),
            );
            Worker.send_local_task(app.attach(dispatch_loop));
            dispatcher.dispatch(AppAction::Start);

            Self {
                api,
                model,
                dispatcher,
                books_view,
                details_view,
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_loads_books_into_view() {
        LocalSet::new()
            .run_until(async {
                let harness =
                    Harness::start(TestBookApiClient::new().with_collection(100, Ok(books(10))));

                sleep(ms(10)).await;
                assert_eq!(
                    harness.books_view.last_update(),
                    Some((0, ListPhase::Loading))
                );

                sleep(ms(200)).await;
                assert_eq!(
                    *harness.books_view.updates.borrow(),
                    vec![(0, ListPhase::Loading), (10, ListPhase::Idle)]
                );
                assert_eq!(harness.api.collection_calls().len(), 1);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_gestures_reach_the_model() {
        LocalSet::new()
            .run_until(async {
                let harness = Harness::start(
                    TestBookApiClient::new()
                        .with_collection(0, Ok(books(5)))
                        .with_collection(50, Ok(books(8)))
                        .with_collection(50, Ok(books(3))),
                );
                sleep(ms(10)).await;

                harness.books_view.scroll_to_bottom();
                sleep(ms(400)).await;
                assert_eq!(harness.api.collection_calls().len(), 1);
                sleep(ms(200)).await;
                assert_eq!(harness.api.collection_calls().len(), 2);

                sleep(ms(100)).await;
                assert_eq!(harness.books_view.last_update(), Some((8, ListPhase::Idle)));

                harness.books_view.pull_to_refresh();
                sleep(ms(10)).await;
                assert_eq!(
                    harness.books_view.last_update(),
                    Some((8, ListPhase::Refreshing))
                );
                sleep(ms(100)).await;
                assert_eq!(harness.books_view.last_update(), Some((3, ListPhase::Idle)));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_details_mount_and_back() {
        LocalSet::new()
            .run_until(async {
                let harness = Harness::start(
                    TestBookApiClient::new()
                        .with_collection(0, Ok(books(3)))
                        .with_details(100, Ok(book("2"))),
                );
                sleep(ms(10)).await;

                harness.books_view.activate("2");
                sleep(ms(10)).await;
                assert_eq!(harness.model.get_state().browser.count(), 2);
                assert_eq!(harness.api.detail_calls(), vec![BookId::new("2")]);
                assert_eq!(
                    harness.details_view.last_update(),
                    Some(("Loading...".to_string(), DetailPhase::Loading))
                );

                sleep(ms(200)).await;
                assert_eq!(
                    harness.details_view.last_update(),
                    Some(("Book 2".to_string(), DetailPhase::Idle))
                );

                harness.details_view.press_back();
                sleep(ms(10)).await;
                assert_eq!(harness.model.get_state().browser.count(), 1);

                // nothing left to pop
                harness.details_view.press_back();
                harness.dispatcher.dispatch(AppAction::NavigateBack);
                sleep(ms(10)).await;
                assert_eq!(harness.model.get_state().browser.count(), 1);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_details_response_after_back_is_ignored() {
        LocalSet::new()
            .run_until(async {
                let harness = Harness::start(
                    TestBookApiClient::new()
                        .with_collection(0, Ok(books(3)))
                        .with_details(500, Ok(book("1"))),
                );
                sleep(ms(10)).await;

                harness.books_view.activate("1");
                sleep(ms(10)).await;
                harness.details_view.press_back();
                sleep(ms(1000)).await;

                assert_eq!(harness.model.get_state().browser.count(), 1);
                assert_eq!(
                    harness.details_view.last_update(),
                    Some(("Loading...".to_string(), DetailPhase::Loading))
                );
            })
            .await;
    }
}
