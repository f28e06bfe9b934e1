use std::collections::HashMap;

/// Byte trie over the keys of one direction of a [`super::Mapping`].
///
/// Keys are matched byte-wise; since every key is a complete UTF-8 string,
/// a match that starts on a char boundary also ends on one.
#[derive(Debug, Default)]
pub(super) struct KeyTrie {
    root: Node,
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<u8, Node>,
    value: Option<String>,
}

impl KeyTrie {
    pub(super) fn build<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut trie = Self::default();
        for (key, value) in pairs {
            trie.insert(key, value);
        }
        trie
    }

    fn insert(&mut self, key: &str, value: &str) {
        let mut node = &mut self.root;
        for &b in key.as_bytes() {
            node = node.children.entry(b).or_default();
        }
        node.value = Some(value.to_string());
    }

    /// Longest key that is a prefix of `input`, as `(byte_len, value)`.
    pub(super) fn longest_prefix(&self, input: &str) -> Option<(usize, &str)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, b) in input.bytes().enumerate() {
            match node.children.get(&b) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(value) = &node.value {
                best = Some((i + 1, value.as_str()));
            }
        }
        best
    }

    /// Byte lengths of every key that is a prefix of `input`, shortest first.
    pub(super) fn prefix_lengths(&self, input: &str) -> Vec<usize> {
        let mut node = &self.root;
        let mut lengths = Vec::new();
        for (i, b) in input.bytes().enumerate() {
            match node.children.get(&b) {
                Some(child) => node = child,
                None => break,
            }
            if node.value.is_some() {
                lengths.push(i + 1);
            }
        }
        lengths
    }

    pub(super) fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }
}
