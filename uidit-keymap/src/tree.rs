use std::{collections::HashMap, slice::Iter};

use uidit_buffer::model::Mode;

use crate::{key::Key, message::Binding, KeyMapError};

#[derive(Debug, Default)]
pub struct KeyTree {
    modes: HashMap<Mode, Node>,
}

#[derive(Clone, Debug)]
pub enum Node {
    Binding(Binding),
    Key(HashMap<Key, Node>),
}

impl KeyTree {
    pub fn add_mapping(
        &mut self,
        mode: &Mode,
        keys: Vec<Key>,
        binding: Binding,
    ) -> Result<(), KeyMapError> {
        if keys.is_empty() {
            return Err(KeyMapError::NoKeysRemaining);
        }

        let node = self
            .modes
            .entry(mode.clone())
            .or_insert_with(|| Node::Key(HashMap::new()));

        add_mapping_node(&mut keys.iter(), node, binding)
    }

    pub fn get_binding(&self, mode: &Mode, keys: &[Key]) -> Result<Binding, KeyMapError> {
        if let Some(node) = self.modes.get(mode) {
            match get_bindings_from_node(node, &mut keys.iter())? {
                Node::Binding(binding) => Ok(binding.clone()),
                Node::Key(_) => Err(KeyMapError::KeySequenceIncomplete),
            }
        } else {
            Err(KeyMapError::ModeUnresolvable(mode.to_string()))
        }
    }
}

fn add_mapping_node(
    iter: &mut Iter<'_, Key>,
    node: &mut Node,
    binding: Binding,
) -> Result<(), KeyMapError> {
    let map = match node {
        Node::Key(map) => map,
        Node::Binding(_) => return Err(KeyMapError::MappingConflict),
    };

    let key = match iter.next() {
        Some(it) => it,
        None => return Err(KeyMapError::NoKeysRemaining),
    };

    if iter.len() == 0 {
        if map.contains_key(key) {
            return Err(KeyMapError::MappingConflict);
        }

        map.insert(key.clone(), Node::Binding(binding));
        Ok(())
    } else {
        let next = map
            .entry(key.clone())
            .or_insert_with(|| Node::Key(HashMap::new()));

        add_mapping_node(iter, next, binding)
    }
}

fn get_bindings_from_node<'a>(
    node: &'a Node,
    iter: &mut Iter<'_, Key>,
) -> Result<&'a Node, KeyMapError> {
    match node {
        Node::Binding(_) => Ok(node),
        Node::Key(map) => {
            let key = match iter.next() {
                Some(it) => it,
                None => return Ok(node),
            };

            match map.get(key) {
                Some(next) => get_bindings_from_node(next, iter),
                None => Err(KeyMapError::NoValidBindingFound),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use uidit_buffer::model::Mode;

    use crate::{
        key::{Key, KeyCode},
        message::{Binding, BindingKind, KeymapMessage},
        KeyMapError,
    };

    use super::KeyTree;

    fn key(c: char) -> Key {
        Key::new(KeyCode::from_char(c), vec![])
    }

    fn binding(message: KeymapMessage) -> Binding {
        Binding {
            kind: BindingKind::Message(message),
            ..Default::default()
        }
    }

    #[test]
    fn get_binding_for_sequence() {
        let mut tree = KeyTree::default();
        let result = tree.add_mapping(
            &Mode::Normal,
            vec![key('g'), key('q')],
            binding(KeymapMessage::Quit),
        );
        assert!(result.is_ok());

        let incomplete = tree.get_binding(&Mode::Normal, &[key('g')]);
        assert_eq!(incomplete, Err(KeyMapError::KeySequenceIncomplete));

        let completed = tree.get_binding(&Mode::Normal, &[key('g'), key('q')]);
        assert_eq!(completed, Ok(binding(KeymapMessage::Quit)));
    }

    #[test]
    fn get_binding_for_unknown_key() {
        let mut tree = KeyTree::default();
        let _ = tree.add_mapping(&Mode::Normal, vec![key('q')], binding(KeymapMessage::Quit));

        let result = tree.get_binding(&Mode::Normal, &[key('z')]);
        assert_eq!(result, Err(KeyMapError::NoValidBindingFound));
    }

    #[test]
    fn get_binding_for_unmapped_mode() {
        let tree = KeyTree::default();
        let result = tree.get_binding(&Mode::Insert, &[key('q')]);
        assert_eq!(
            result,
            Err(KeyMapError::ModeUnresolvable("insert".to_string()))
        );
    }

    #[test]
    fn add_mapping_twice_conflicts() {
        let mut tree = KeyTree::default();
        let _ = tree.add_mapping(&Mode::Normal, vec![key('q')], binding(KeymapMessage::Quit));
        let result = tree.add_mapping(
            &Mode::Normal,
            vec![key('q')],
            binding(KeymapMessage::Validate),
        );

        assert_eq!(result, Err(KeyMapError::MappingConflict));
    }

    #[test]
    fn add_mapping_below_binding_conflicts() {
        let mut tree = KeyTree::default();
        let _ = tree.add_mapping(&Mode::Normal, vec![key('g')], binding(KeymapMessage::Quit));
        let result = tree.add_mapping(
            &Mode::Normal,
            vec![key('g'), key('g')],
            binding(KeymapMessage::Validate),
        );

        assert_eq!(result, Err(KeyMapError::MappingConflict));
    }
}
