use std::collections::VecDeque;

use key::{Key, KeyCode};
use map::KeyMap;
use message::{Binding, BindingKind, KeySequence, KeymapMessage};
use tree::KeyTree;
use uidit_buffer::{
    message::{BufferMessage, TextModification},
    model::Mode,
};

pub mod conversion;
pub mod key;
mod map;
pub mod message;
mod tree;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum KeyMapError {
    #[error("Key sequence is incomplete.")]
    KeySequenceIncomplete,
    #[error("Mapping conflicts with an existing binding.")]
    MappingConflict,
    #[error("Failed to add mapping for mode {0}.")]
    ModeUnresolvable(String),
    #[error("Failed to resolve valid binding.")]
    NoValidBindingFound,
    #[error("No keys left.")]
    NoKeysRemaining,
}

pub struct MessageResolver {
    pending: Vec<Key>,
    pub mode: Mode,
    tree: KeyTree,
}

impl Default for MessageResolver {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            mode: Mode::default(),
            tree: KeyMap::default().into_tree(),
        }
    }
}

impl MessageResolver {
    pub fn add_keys(&mut self, mut keys: VecDeque<Key>) -> Vec<KeymapMessage> {
        let mut messages = Vec::new();
        while let Some(key) = keys.pop_front() {
            let (resolved, _) = self.add_key(key);
            messages.extend(resolved);
        }
        messages
    }

    pub fn add_key(&mut self, key: Key) -> (Vec<KeymapMessage>, KeySequence) {
        let is_cancel = key.code == KeyCode::Esc && !self.pending.is_empty();

        self.pending.push(key);
        let sequence = get_sequence(&self.pending);

        if is_cancel {
            self.pending.clear();
            return (Vec::new(), KeySequence::Completed(sequence));
        }

        match self.tree.get_binding(&self.mode, &self.pending) {
            Ok(binding) => {
                self.pending.clear();

                let messages = get_messages_from_binding(&self.mode, &binding);
                if let Some(mode) = binding.force {
                    self.mode = mode;
                }

                (messages, KeySequence::Completed(sequence))
            }
            Err(KeyMapError::KeySequenceIncomplete) => (Vec::new(), KeySequence::Changed(sequence)),
            Err(error) => {
                tracing::trace!("no binding for {:?} in {}: {}", sequence, self.mode, error);

                let messages = if get_passthrough_by_mode(&self.mode) {
                    get_passthrough_messages(&self.pending)
                } else {
                    Vec::new()
                };

                self.pending.clear();
                (messages, KeySequence::Completed(sequence))
            }
        }
    }
}

fn get_sequence(keys: &[Key]) -> String {
    keys.iter().map(Key::to_keycode_string).collect()
}

fn get_messages_from_binding(mode: &Mode, binding: &Binding) -> Vec<KeymapMessage> {
    let mut messages = Vec::new();
    if let Some(md) = &binding.force {
        messages.push(KeymapMessage::Buffer(BufferMessage::ChangeMode(
            mode.clone(),
            md.clone(),
        )));
    };

    match &binding.kind {
        BindingKind::Message(msg) => messages.push(msg.clone()),
        BindingKind::Modification(mdf) => messages.push(KeymapMessage::Buffer(
            BufferMessage::Modification(1, mdf.clone()),
        )),
        BindingKind::Motion(mtn) => messages.push(KeymapMessage::Buffer(
            BufferMessage::MoveCursor(1, mtn.clone()),
        )),
        BindingKind::None => {}
    }

    messages
}

fn get_passthrough_messages(keys: &[Key]) -> Vec<KeymapMessage> {
    let text: String = keys.iter().filter_map(|key| key.to_text()).collect();
    if text.is_empty() {
        return Vec::new();
    }

    vec![KeymapMessage::Buffer(BufferMessage::Modification(
        1,
        TextModification::Insert(text),
    ))]
}

fn get_passthrough_by_mode(mode: &Mode) -> bool {
    match mode {
        Mode::Command | Mode::Insert => true,
        Mode::Normal => false,
    }
}
