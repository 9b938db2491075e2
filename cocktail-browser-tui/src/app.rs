use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Executor;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the main loop until the user quits
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    executor: &Executor,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    executor.execute(update::startup(app));

    loop {
        // 1. Apply finished background work
        while let Ok(msg) = rx.try_recv() {
            dispatch(app, executor, msg);
        }

        // 2. Draw
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        // 3. Poll input (100ms timeout)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            dispatch(app, executor, msg);
        }
    }

    Ok(())
}

/// Update the model and start any work it asks for
fn dispatch(app: &mut App, executor: &Executor, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        executor.execute(command);
    }
}
