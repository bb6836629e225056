use crate::{error::AppError, layout::AppLayout, model::Model, terminal::TerminalWrapper};

mod commandline;
mod editor;
mod sidebar;
mod statusline;

pub fn render_model(terminal: &mut TerminalWrapper, model: &Model) -> Result<(), AppError> {
    terminal.draw(|frame| {
        let layout = AppLayout::new(frame.area());

        editor::view(model, frame, layout.editor);
        sidebar::view(model, frame, &layout.sidebar);
        statusline::view(model, frame, layout.statusline);
        commandline::view(model, frame, layout.commandline);
    })
}
