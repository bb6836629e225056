use uidit_buffer::message::BufferMessage;
use uidit_keymap::message::{KeySequence, KeymapMessage};

use crate::{
    action::Action,
    event::{Envelope, Message, MessageSource},
    model::Model,
};

mod buffer;
mod clipboard;
mod command;
mod commandline;
pub mod file;
mod mode;
pub mod startup;
mod uid;

#[tracing::instrument(skip(model))]
pub fn update(model: &mut Model, envelope: &Envelope) -> Vec<Action> {
    match &envelope.sequence {
        KeySequence::Completed(_) => model.key_sequence.clear(),
        KeySequence::Changed(sequence) => model.key_sequence = sequence.to_owned(),
        KeySequence::None => {}
    };

    if envelope.source == MessageSource::User {
        model.commandline.message = None;
    }

    envelope
        .messages
        .iter()
        .flat_map(|message| update_with_message(model, message))
        .collect()
}

#[tracing::instrument(skip(model))]
fn update_with_message(model: &mut Model, message: &Message) -> Vec<Action> {
    match message {
        Message::Keymap(msg) => update_with_keymap_message(model, msg),
        Message::FileDownloaded(path) => {
            file::downloaded(model, path);
            Vec::new()
        }
        Message::FileDownloadFailed(path, error) => {
            file::download_failed(model, path, error);
            Vec::new()
        }
        Message::FileLoaded(path, content) => {
            file::loaded(model, path, content);
            Vec::new()
        }
        Message::FileLoadFailed(path, error) => {
            file::load_failed(model, path, error);
            Vec::new()
        }
        Message::Resize(_, _) => Vec::new(),
    }
}

fn update_with_keymap_message(model: &mut Model, message: &KeymapMessage) -> Vec<Action> {
    match message {
        KeymapMessage::Buffer(BufferMessage::ChangeMode(from, to)) => {
            mode::change(model, from, to);
            Vec::new()
        }
        KeymapMessage::Buffer(msg) => {
            buffer::update(model, msg);
            Vec::new()
        }
        KeymapMessage::CopyToClipboard => {
            clipboard::copy(model);
            Vec::new()
        }
        KeymapMessage::DownloadFile => file::download(model),
        KeymapMessage::ExecuteCommand => commandline::execute(model),
        KeymapMessage::ExportAsJson => {
            uid::export_as_json(model);
            Vec::new()
        }
        KeymapMessage::InsertTemplate => {
            uid::insert_template(model);
            Vec::new()
        }
        KeymapMessage::LeaveCommandMode => {
            commandline::leave(model);
            Vec::new()
        }
        KeymapMessage::Quit => vec![Action::Quit],
        KeymapMessage::Validate => {
            uid::validate(model);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use uidit_buffer::{
        message::{BufferMessage, TextModification},
        model::Mode,
    };
    use uidit_keymap::message::{KeySequence, KeymapMessage};

    use crate::{
        action::Action,
        event::{Envelope, Message, MessageSource},
        model::{Model, Status},
        task::Task,
    };

    fn user(messages: Vec<Message>, sequence: KeySequence) -> Envelope {
        Envelope {
            messages,
            sequence,
            source: MessageSource::User,
        }
    }

    fn keys(messages: Vec<KeymapMessage>) -> Envelope {
        user(
            messages.into_iter().map(Message::Keymap).collect(),
            KeySequence::Completed(String::new()),
        )
    }

    fn task(message: Message) -> Envelope {
        Envelope {
            messages: vec![message],
            sequence: KeySequence::None,
            source: MessageSource::Task,
        }
    }

    fn change_mode(from: Mode, to: Mode) -> KeymapMessage {
        KeymapMessage::Buffer(BufferMessage::ChangeMode(from, to))
    }

    fn insert(text: &str) -> KeymapMessage {
        KeymapMessage::Buffer(BufferMessage::Modification(
            1,
            TextModification::Insert(text.to_string()),
        ))
    }

    #[test]
    fn key_sequence_follows_envelope() {
        let mut model = Model::default();

        super::update(
            &mut model,
            &user(Vec::new(), KeySequence::Changed("g".to_string())),
        );
        assert_eq!(model.key_sequence, "g");

        super::update(&mut model, &task(Message::Resize(1, 1)));
        assert_eq!(model.key_sequence, "g");

        super::update(
            &mut model,
            &user(Vec::new(), KeySequence::Completed("gg".to_string())),
        );
        assert_eq!(model.key_sequence, "");
    }

    #[test]
    fn insert_mode_typing_edits_editor() {
        let mut model = Model::default();

        super::update(
            &mut model,
            &keys(vec![change_mode(Mode::Normal, Mode::Insert), insert("42")]),
        );

        assert_eq!(model.mode, Mode::Insert);
        assert_eq!(model.editor.content(), "42");
        assert!(model.commandline.buffer.is_empty());
    }

    #[test]
    fn command_mode_typing_edits_commandline() {
        let mut model = Model::default();
        model.editor.set_content("1");

        super::update(
            &mut model,
            &keys(vec![change_mode(Mode::Normal, Mode::Command), insert("sample")]),
        );

        assert_eq!(model.mode, Mode::Command);
        assert_eq!(model.commandline.buffer.content(), "sample");
        assert_eq!(model.editor.content(), "1");
    }

    #[test]
    fn executed_command_runs_and_returns_to_normal() {
        let mut model = Model::default();

        super::update(
            &mut model,
            &keys(vec![change_mode(Mode::Normal, Mode::Command), insert("sample")]),
        );
        super::update(
            &mut model,
            &keys(vec![
                change_mode(Mode::Command, Mode::Normal),
                KeymapMessage::ExecuteCommand,
            ]),
        );

        assert_eq!(model.mode, Mode::Normal);
        assert_eq!(model.editor.content(), crate::uid::TEMPLATE);
        assert!(model.commandline.buffer.is_empty());
    }

    #[test]
    fn unknown_command_message_is_cleared_by_next_key() {
        let mut model = Model::default();

        super::update(
            &mut model,
            &keys(vec![change_mode(Mode::Normal, Mode::Command), insert("nope")]),
        );
        super::update(
            &mut model,
            &keys(vec![
                change_mode(Mode::Command, Mode::Normal),
                KeymapMessage::ExecuteCommand,
            ]),
        );
        assert_eq!(
            model.commandline.message,
            Some("unknown command: nope".to_string())
        );
        assert_eq!(model.status, None);

        super::update(&mut model, &keys(Vec::new()));
        assert_eq!(model.commandline.message, None);
    }

    #[test]
    fn left_command_mode_drops_input() {
        let mut model = Model::default();

        super::update(
            &mut model,
            &keys(vec![change_mode(Mode::Normal, Mode::Command), insert("q")]),
        );
        let actions = super::update(
            &mut model,
            &keys(vec![
                change_mode(Mode::Command, Mode::Normal),
                KeymapMessage::LeaveCommandMode,
            ]),
        );

        assert!(actions.is_empty());
        assert!(model.commandline.buffer.is_empty());
    }

    #[test]
    fn quit_returns_quit_action() {
        let mut model = Model::default();
        let actions = super::update(&mut model, &keys(vec![KeymapMessage::Quit]));
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn download_key_returns_save_task() {
        let mut model = Model::default();
        model.settings.download_path = PathBuf::from("/downloads");
        model.editor.set_content("7");

        let actions = super::update(&mut model, &keys(vec![KeymapMessage::DownloadFile]));
        assert_eq!(
            actions,
            vec![Action::Task(Task::SaveFile(
                PathBuf::from("/downloads/uid.txt"),
                "7".to_string()
            ))]
        );
    }

    #[test]
    fn loaded_file_from_task_replaces_buffer() {
        let mut model = Model::default();

        super::update(
            &mut model,
            &task(Message::FileLoaded(
                PathBuf::from("/tmp/list.txt"),
                "1\r\n2".to_string(),
            )),
        );

        assert_eq!(model.editor.content(), "1\r\n2");
        assert_eq!(model.filename, "list.txt");
        assert_eq!(
            model.status,
            Some(Status::Information("Loaded list.txt".to_string()))
        );
    }

    #[test]
    fn task_envelope_keeps_commandline_message() {
        let mut model = Model::default();
        model.commandline.message = Some("unknown command: x".to_string());

        super::update(
            &mut model,
            &task(Message::FileDownloaded(PathBuf::from("/tmp/uid.txt"))),
        );

        assert_eq!(
            model.commandline.message,
            Some("unknown command: x".to_string())
        );
        assert_eq!(
            model.status,
            Some(Status::Information("File downloaded".to_string()))
        );
    }
}
