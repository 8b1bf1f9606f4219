#[macro_use]
extern crate log;

use std::rc::Rc;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::LocalSet;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod console;
mod settings;

use crate::api::BookshelfClient;
use crate::app::{App, AppAction, AppModel, DispatchLoop, Worker};
use crate::console::{Command, ConsoleView, UnknownCommand};
use crate::settings::BookshelfSettings;

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bookshelf=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let settings = BookshelfSettings::new_from_env().unwrap_or_else(|err| {
        warn!("{}, using default settings", err);
        BookshelfSettings::default()
    });

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("Failed to start runtime: {}", err);
            return;
        }
    };

    LocalSet::new().block_on(&runtime, run(settings));
}

async fn run(settings: BookshelfSettings) {
    let book_api = match BookshelfClient::new(&settings.base_url) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            error!("Invalid base url {}: {}", settings.base_url, err);
            return;
        }
    };
    info!("using bookshelf at {}", settings.base_url);

    let model = Rc::new(AppModel::new(book_api, settings));
    let dispatch_loop = DispatchLoop::new();
    let dispatcher = dispatch_loop.make_dispatcher(Worker);
    let view = Rc::new(ConsoleView::new());

    let app = App::new(model, dispatcher.box_clone(), view.clone(), view.clone());
    let app_task = Worker.send_local_task(app.attach(dispatch_loop));
    dispatcher.dispatch(AppAction::Start);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => view.run(command),
                Err(UnknownCommand(line)) if line.is_empty() => {}
                Err(UnknownCommand(line)) => {
                    warn!("unknown command {:?}, try scroll, refresh, open <id>, back or quit", line)
                }
            },
            Ok(None) => break,
            Err(err) => {
                error!("Failed to read stdin: {}", err);
                break;
            }
        }
    }

    app_task.abort();
}
