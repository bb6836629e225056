use action::ActionResult;
use error::AppError;
use event::Emitter;
use model::{clipboard, Model};
use settings::Settings;
use terminal::TerminalWrapper;
use update::{startup, update};
use view::render_model;

mod action;
pub mod error;
mod event;
mod layout;
mod model;
mod query;
pub mod settings;
mod task;
mod terminal;
mod uid;
mod update;
mod view;

pub async fn run(settings: Settings) -> Result<(), AppError> {
    let mut terminal = TerminalWrapper::start()?;
    let mut emitter = Emitter::start();

    let mut model = Model {
        clipboard: clipboard::resolve_system_clipboard(),
        settings,
        ..Default::default()
    };

    let actions = startup::initialize(&mut model);
    action::exec(&mut emitter, actions);

    tracing::debug!("starting with model state: {:?}", model);

    let mut result = Vec::new();
    if let Err(error) = render_model(&mut terminal, &model) {
        result.push(error);
    }

    while result.is_empty() {
        let envelope = match emitter.receiver.recv().await {
            Some(it) => it,
            None => break,
        };

        tracing::debug!("received messages: {:?}", envelope.messages);

        let actions = update(&mut model, &envelope);
        if action::exec(&mut emitter, actions) == ActionResult::Quit {
            break;
        }

        if let Err(error) = render_model(&mut terminal, &model) {
            result.push(error);
        }
    }

    if let Err(error) = emitter.shutdown().await {
        result.push(error);
    }

    terminal.shutdown()?;

    if result.is_empty() {
        Ok(())
    } else {
        Err(AppError::Aggregate(result))
    }
}
