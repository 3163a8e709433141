use std::{collections::HashSet, fmt};

const ALPHABET: usize = 26;

#[derive(Default)]
struct Node {
    letter: char,
    children: [Option<Box<Node>>; ALPHABET],
    is_word: bool,
}

impl Node {
    fn new(letter: char) -> Self {
        Self {
            letter,
            ..Default::default()
        }
    }

    fn child(&self, c: char) -> Option<&Node> {
        self.children[slot(c)?].as_deref()
    }
}

/// Slot index of a lowercase a-z letter.
fn slot(c: char) -> Option<usize> {
    c.is_ascii_lowercase().then(|| (c as u8 - b'a') as usize)
}

/// In-memory 26-ary prefix trie over lowercase a-z words for completions.
/// Walks and teardown use explicit stacks, so word length isn't bounded by
/// the thread stack.
#[derive(Default)]
pub struct PrefixTrie {
    root: Node,
    len: usize,
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word. Words with characters outside a-z are ignored and
    /// re-inserting an existing word is a no-op.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
            return;
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            let Some(i) = slot(c) else { return };
            node = node.children[i]
                .get_or_insert_with(|| Box::new(Node::new(c)))
                .as_mut();
        }

        if !node.is_word {
            node.is_word = true;
            self.len += 1;
        }
    }

    /// Check whether a node exists for every prefix of `word`.
    pub fn contains_path(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    /// Check whether `word` was inserted as a complete word.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|n| n.is_word)
    }

    /// All stored words that start with `word` and are strictly longer than it.
    pub fn completions(&self, word: &str) -> HashSet<String> {
        let mut out = HashSet::new();
        let Some(node) = self.find(word) else {
            return out;
        };

        // Depth first, tracking each node's depth below `word` so the shared
        // buffer can be cut back to its parent's path before appending.
        let base = word.len();
        let mut buf = word.to_string();
        let mut stack: Vec<(&Node, usize)> = children(node).map(|n| (n, 0)).collect();
        while let Some((n, depth)) = stack.pop() {
            buf.truncate(base + depth);
            buf.push(n.letter);
            if n.is_word {
                out.insert(buf.clone());
            }
            stack.extend(children(n).map(|c| (c, depth + 1)));
        }
        out
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find(&self, prefix: &str) -> Option<&Node> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }
}

fn children(node: &Node) -> impl Iterator<Item = &Node> {
    node.children.iter().flatten().map(|c| &**c)
}

impl Drop for PrefixTrie {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self
            .root
            .children
            .iter_mut()
            .filter_map(Option::take)
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl fmt::Debug for PrefixTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixTrie")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
