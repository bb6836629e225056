use std::collections::HashMap;

use uidit_buffer::{
    message::{CursorDirection, LineDirection, TextModification},
    model::Mode,
};

use crate::{
    key::{Key, KeyCode, KeyModifier},
    message::{Binding, BindingKind, KeymapMessage},
    tree::KeyTree,
};

#[derive(Debug)]
pub struct KeyMap {
    mappings: HashMap<Mode, Vec<(Vec<Key>, Binding)>>,
}

impl KeyMap {
    pub fn into_tree(self) -> KeyTree {
        let mut tree = KeyTree::default();
        for (mode, mappings) in self.mappings {
            for (keys, binding) in mappings {
                if let Err(error) = tree.add_mapping(&mode, keys.clone(), binding) {
                    tracing::error!("adding mapping {:?} for {} failed: {}", keys, mode, error);
                }
            }
        }
        tree
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut mappings = HashMap::new();

        add_mapping(
            &mut mappings,
            vec![Mode::Command],
            vec![
                (
                    vec![Key::new(KeyCode::Backspace, vec![])],
                    modification(TextModification::DeleteCharBeforeCursor),
                ),
                (
                    vec![Key::new(KeyCode::Delete, vec![])],
                    modification(TextModification::DeleteCharOnCursor),
                ),
                (
                    vec![Key::new(KeyCode::Enter, vec![])],
                    Binding {
                        force: Some(Mode::Normal),
                        kind: BindingKind::Message(KeymapMessage::ExecuteCommand),
                    },
                ),
                (
                    vec![Key::new(KeyCode::Esc, vec![])],
                    Binding {
                        force: Some(Mode::Normal),
                        kind: BindingKind::Message(KeymapMessage::LeaveCommandMode),
                    },
                ),
            ],
        );

        add_mapping(
            &mut mappings,
            vec![Mode::Insert],
            vec![
                (
                    vec![Key::new(KeyCode::Backspace, vec![])],
                    modification(TextModification::DeleteCharBeforeCursor),
                ),
                (
                    vec![Key::new(KeyCode::Delete, vec![])],
                    modification(TextModification::DeleteCharOnCursor),
                ),
                (
                    vec![Key::new(KeyCode::Enter, vec![])],
                    modification(TextModification::InsertLineBreak),
                ),
                (
                    vec![Key::new(KeyCode::Esc, vec![])],
                    Binding {
                        force: Some(Mode::Normal),
                        ..Default::default()
                    },
                ),
            ],
        );

        add_mapping(
            &mut mappings,
            vec![Mode::Normal],
            vec![
                (
                    vec![Key::new(KeyCode::from_char(':'), vec![])],
                    Binding {
                        force: Some(Mode::Command),
                        ..Default::default()
                    },
                ),
                (
                    vec![Key::new(KeyCode::from_char('i'), vec![])],
                    Binding {
                        force: Some(Mode::Insert),
                        ..Default::default()
                    },
                ),
                (
                    vec![Key::new(KeyCode::from_char('a'), vec![])],
                    Binding {
                        force: Some(Mode::Insert),
                        kind: BindingKind::Motion(CursorDirection::Right),
                    },
                ),
                (
                    vec![Key::new(KeyCode::from_char('a'), vec![KeyModifier::Shift])],
                    Binding {
                        force: Some(Mode::Insert),
                        kind: BindingKind::Motion(CursorDirection::LineEnd),
                    },
                ),
                (
                    vec![Key::new(KeyCode::from_char('o'), vec![])],
                    Binding {
                        force: Some(Mode::Insert),
                        kind: BindingKind::Modification(TextModification::InsertNewLine(
                            LineDirection::Down,
                        )),
                    },
                ),
                (
                    vec![Key::new(KeyCode::from_char('o'), vec![KeyModifier::Shift])],
                    Binding {
                        force: Some(Mode::Insert),
                        kind: BindingKind::Modification(TextModification::InsertNewLine(
                            LineDirection::Up,
                        )),
                    },
                ),
                (
                    vec![Key::new(KeyCode::from_char('x'), vec![])],
                    modification(TextModification::DeleteCharOnCursor),
                ),
                (
                    vec![Key::new(KeyCode::from_char('h'), vec![])],
                    motion(CursorDirection::Left),
                ),
                (
                    vec![Key::new(KeyCode::from_char('j'), vec![])],
                    motion(CursorDirection::Down),
                ),
                (
                    vec![Key::new(KeyCode::from_char('k'), vec![])],
                    motion(CursorDirection::Up),
                ),
                (
                    vec![Key::new(KeyCode::from_char('l'), vec![])],
                    motion(CursorDirection::Right),
                ),
                (
                    vec![Key::new(KeyCode::from_char('0'), vec![])],
                    motion(CursorDirection::LineStart),
                ),
                (
                    vec![Key::new(KeyCode::from_char('$'), vec![])],
                    motion(CursorDirection::LineEnd),
                ),
                (
                    vec![
                        Key::new(KeyCode::from_char('g'), vec![]),
                        Key::new(KeyCode::from_char('g'), vec![]),
                    ],
                    motion(CursorDirection::Top),
                ),
                (
                    vec![Key::new(KeyCode::from_char('g'), vec![KeyModifier::Shift])],
                    motion(CursorDirection::Bottom),
                ),
                (
                    vec![Key::new(KeyCode::from_char('j'), vec![KeyModifier::Shift])],
                    message(KeymapMessage::ExportAsJson),
                ),
                (
                    vec![Key::new(KeyCode::from_char('q'), vec![])],
                    message(KeymapMessage::Quit),
                ),
                (
                    vec![Key::new(KeyCode::from_char('s'), vec![])],
                    message(KeymapMessage::InsertTemplate),
                ),
                (
                    vec![Key::new(KeyCode::from_char('v'), vec![])],
                    message(KeymapMessage::Validate),
                ),
                (
                    vec![Key::new(KeyCode::from_char('w'), vec![])],
                    message(KeymapMessage::DownloadFile),
                ),
                (
                    vec![Key::new(KeyCode::from_char('y'), vec![])],
                    message(KeymapMessage::CopyToClipboard),
                ),
            ],
        );

        add_mapping(
            &mut mappings,
            vec![Mode::Insert, Mode::Normal],
            vec![
                (
                    vec![Key::new(KeyCode::Down, vec![])],
                    motion(CursorDirection::Down),
                ),
                (
                    vec![Key::new(KeyCode::Up, vec![])],
                    motion(CursorDirection::Up),
                ),
                (
                    vec![Key::new(KeyCode::Home, vec![])],
                    motion(CursorDirection::LineStart),
                ),
                (
                    vec![Key::new(KeyCode::End, vec![])],
                    motion(CursorDirection::LineEnd),
                ),
            ],
        );

        add_mapping(
            &mut mappings,
            vec![Mode::Command, Mode::Insert, Mode::Normal],
            vec![
                (
                    vec![Key::new(KeyCode::Left, vec![])],
                    motion(CursorDirection::Left),
                ),
                (
                    vec![Key::new(KeyCode::Right, vec![])],
                    motion(CursorDirection::Right),
                ),
            ],
        );

        Self { mappings }
    }
}

fn message(message: KeymapMessage) -> Binding {
    Binding {
        kind: BindingKind::Message(message),
        ..Default::default()
    }
}

fn modification(modification: TextModification) -> Binding {
    Binding {
        kind: BindingKind::Modification(modification),
        ..Default::default()
    }
}

fn motion(direction: CursorDirection) -> Binding {
    Binding {
        kind: BindingKind::Motion(direction),
        ..Default::default()
    }
}

fn add_mapping(
    mappings: &mut HashMap<Mode, Vec<(Vec<Key>, Binding)>>,
    modes: Vec<Mode>,
    bindings: Vec<(Vec<Key>, Binding)>,
) {
    for mode in modes {
        if let Some(mappings_for_mode) = mappings.get_mut(&mode) {
            mappings_for_mode.extend(bindings.clone());
        } else {
            mappings.insert(mode, bindings.clone());
        }
    }
}
