use uidit_buffer::{
    message::{BufferMessage, CursorDirection, LineDirection, TextModification},
    model::Mode,
};
use uidit_keymap::{
    conversion,
    key::{Key, KeyCode, KeyModifier},
    message::{KeySequence, KeymapMessage},
    MessageResolver,
};

#[test]
fn add_and_resolve_key_normal_colon() {
    let mut resolver = MessageResolver::default();
    let result = resolver.add_key(Key::new(KeyCode::from_char(':'), vec![]));

    println!("{:?}", result);

    assert_eq!(
        Some(&KeymapMessage::Buffer(BufferMessage::ChangeMode(
            Mode::Normal,
            Mode::Command
        ))),
        result.0.first()
    );
    assert_eq!(KeySequence::Completed(":".to_string()), result.1);
    assert_eq!(1, result.0.len());
    assert_eq!(Mode::Command, resolver.mode);
}

#[test]
fn add_and_resolve_key_normal_g() {
    let mut resolver = MessageResolver::default();
    let result = resolver.add_key(Key::new(KeyCode::from_char('g'), vec![]));

    println!("{:?}", result);

    assert_eq!(KeySequence::Changed("g".to_string()), result.1);
    assert!(result.0.is_empty());
}

#[test]
fn add_and_resolve_key_normal_gg() {
    let mut resolver = MessageResolver::default();
    let _ = resolver.add_key(Key::new(KeyCode::from_char('g'), vec![]));
    let result = resolver.add_key(Key::new(KeyCode::from_char('g'), vec![]));

    println!("{:?}", result);

    assert_eq!(
        Some(&KeymapMessage::Buffer(BufferMessage::MoveCursor(
            1,
            CursorDirection::Top
        ))),
        result.0.first()
    );
    assert_eq!(KeySequence::Completed("gg".to_string()), result.1);
}

#[test]
fn add_and_resolve_key_normal_gq() {
    let mut resolver = MessageResolver::default();
    let _ = resolver.add_key(Key::new(KeyCode::from_char('g'), vec![]));
    let result = resolver.add_key(Key::new(KeyCode::from_char('q'), vec![]));

    println!("{:?}", result);

    assert_eq!(KeySequence::Completed("gq".to_string()), result.1);
    assert!(result.0.is_empty());
}

#[test]
fn add_and_resolve_key_normal_g_esc() {
    let mut resolver = MessageResolver::default();
    let _ = resolver.add_key(Key::new(KeyCode::from_char('g'), vec![]));
    let result = resolver.add_key(Key::new(KeyCode::Esc, vec![]));

    assert_eq!(KeySequence::Completed("g<esc>".to_string()), result.1);
    assert!(result.0.is_empty());
}

#[test]
fn add_and_resolve_key_normal_surface_actions() {
    let cases = [
        ('s', vec![], KeymapMessage::InsertTemplate),
        ('j', vec![KeyModifier::Shift], KeymapMessage::ExportAsJson),
        ('y', vec![], KeymapMessage::CopyToClipboard),
        ('w', vec![], KeymapMessage::DownloadFile),
        ('v', vec![], KeymapMessage::Validate),
        ('q', vec![], KeymapMessage::Quit),
    ];

    for (c, modifiers, expected) in cases {
        let mut resolver = MessageResolver::default();
        let result = resolver.add_key(Key::new(KeyCode::from_char(c), modifiers));

        assert_eq!(vec![expected], result.0);
    }
}

#[test]
fn add_and_resolve_key_normal_unbound_is_ignored() {
    let mut resolver = MessageResolver::default();
    let result = resolver.add_key(Key::new(KeyCode::from_char('z'), vec![]));

    assert_eq!(KeySequence::Completed("z".to_string()), result.1);
    assert!(result.0.is_empty());
}

#[test]
fn add_and_resolve_key_normal_o() {
    let mut resolver = MessageResolver::default();
    let result = resolver.add_key(Key::new(KeyCode::from_char('o'), vec![]));

    assert_eq!(
        vec![
            KeymapMessage::Buffer(BufferMessage::ChangeMode(Mode::Normal, Mode::Insert)),
            KeymapMessage::Buffer(BufferMessage::Modification(
                1,
                TextModification::InsertNewLine(LineDirection::Down)
            )),
        ],
        result.0
    );
    assert_eq!(Mode::Insert, resolver.mode);
}

#[test]
fn add_and_resolve_key_insert_passthrough() {
    let mut resolver = MessageResolver::default();
    resolver.mode = Mode::Insert;

    let result = resolver.add_key(Key::new(KeyCode::from_char('4'), vec![]));

    assert_eq!(
        vec![KeymapMessage::Buffer(BufferMessage::Modification(
            1,
            TextModification::Insert("4".to_string())
        ))],
        result.0
    );
}

#[test]
fn add_and_resolve_key_insert_ctrl_is_not_inserted() {
    let mut resolver = MessageResolver::default();
    resolver.mode = Mode::Insert;

    let result = resolver.add_key(Key::new(KeyCode::from_char('c'), vec![KeyModifier::Ctrl]));

    assert!(result.0.is_empty());
}

#[test]
fn add_and_resolve_key_insert_enter() {
    let mut resolver = MessageResolver::default();
    resolver.mode = Mode::Insert;

    let result = resolver.add_key(Key::new(KeyCode::Enter, vec![]));

    assert_eq!(
        vec![KeymapMessage::Buffer(BufferMessage::Modification(
            1,
            TextModification::InsertLineBreak
        ))],
        result.0
    );
}

#[test]
fn add_and_resolve_key_insert_esc() {
    let mut resolver = MessageResolver::default();
    resolver.mode = Mode::Insert;

    let result = resolver.add_key(Key::new(KeyCode::Esc, vec![]));

    assert_eq!(
        vec![KeymapMessage::Buffer(BufferMessage::ChangeMode(
            Mode::Insert,
            Mode::Normal
        ))],
        result.0
    );
    assert_eq!(Mode::Normal, resolver.mode);
}

#[test]
fn add_keys_command_sequence() {
    let mut resolver = MessageResolver::default();
    let messages = resolver.add_keys(conversion::from_keycode_string(":json<cr>"));

    assert_eq!(
        vec![
            KeymapMessage::Buffer(BufferMessage::ChangeMode(Mode::Normal, Mode::Command)),
            KeymapMessage::Buffer(BufferMessage::Modification(
                1,
                TextModification::Insert("j".to_string())
            )),
            KeymapMessage::Buffer(BufferMessage::Modification(
                1,
                TextModification::Insert("s".to_string())
            )),
            KeymapMessage::Buffer(BufferMessage::Modification(
                1,
                TextModification::Insert("o".to_string())
            )),
            KeymapMessage::Buffer(BufferMessage::Modification(
                1,
                TextModification::Insert("n".to_string())
            )),
            KeymapMessage::Buffer(BufferMessage::ChangeMode(Mode::Command, Mode::Normal)),
            KeymapMessage::ExecuteCommand,
        ],
        messages
    );
}

#[test]
fn add_keys_command_escape() {
    let mut resolver = MessageResolver::default();
    let messages = resolver.add_keys(conversion::from_keycode_string(":<esc>"));

    assert_eq!(
        vec![
            KeymapMessage::Buffer(BufferMessage::ChangeMode(Mode::Normal, Mode::Command)),
            KeymapMessage::Buffer(BufferMessage::ChangeMode(Mode::Command, Mode::Normal)),
            KeymapMessage::LeaveCommandMode,
        ],
        messages
    );
}
