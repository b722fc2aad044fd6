//! Generic prefix trie over token sequences.
//!
//! Both indexes in this crate store their keys *reversed* (most recent
//! token first), which turns "match against the tail of a growing history"
//! into an ordinary prefix walk from the root. The trie itself is agnostic
//! to that trick: it maps token sequences to values and offers two walk
//! termination policies over the same structure — greedy deepest
//! ([`longest_prefix`](SequenceTrie::longest_prefix)) and eager shallowest
//! ([`shortest_prefix`](SequenceTrie::shortest_prefix)).
//!
//! Nodes live in an arena indexed by `usize`, with child edges stored as
//! per-node hash maps keyed by token. Ownership is strictly tree-shaped:
//! the trie owns every node, so a built trie can be shared read-only
//! without any coordination.

use std::collections::HashMap;

use crate::TokenId;

/// One arena slot: child edges plus an optional stored value.
///
/// Nodes created purely as path segments for a longer key carry no value;
/// the walk policies skip them when reporting matches.
#[derive(Debug, Clone)]
struct TrieNode<V> {
    children: HashMap<TokenId, usize>,
    value: Option<V>,
}

impl<V> TrieNode<V> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }
}

/// A prefix trie mapping token sequences to values of type `V`.
///
/// The trie is built once and then queried for the rest of its life; there
/// is no deletion. Insertion accepts any `u32` token, so it cannot fail.
///
/// Key and query arguments are token iterators rather than slices, so a
/// caller matching against the tail of a history can pass
/// `history.iter().rev().copied()` without building a reversed buffer.
#[derive(Debug, Clone)]
pub struct SequenceTrie<V> {
    /// Node arena; index 0 is the root (the empty key).
    nodes: Vec<TrieNode<V>>,
    /// Number of keys with a stored value.
    len: usize,
}

impl<V> SequenceTrie<V> {
    /// Create an empty trie containing only the (valueless) root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            len: 0,
        }
    }

    /// Number of keys with a stored value.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if no key has a stored value.
    ///
    /// Note that an empty trie still has its root node; emptiness is about
    /// values, not arena size.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of nodes in the arena, including valueless path
    /// segments and the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert or update the value at `key`.
    ///
    /// Walks the trie along `key`, creating nodes as needed, then replaces
    /// the terminal node's value with `update(existing)`. Passing the
    /// existing value through the closure lets callers express
    /// union-with-existing or overwrite semantics without a default-value
    /// convention at the call site.
    pub fn insert_with<I, F>(&mut self, key: I, update: F)
    where
        I: IntoIterator<Item = TokenId>,
        F: FnOnce(Option<V>) -> V,
    {
        let mut cur = 0;
        for token in key {
            // Copy the child index out before any arena mutation.
            let next = self.nodes[cur].children.get(&token).copied();
            cur = match next {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[cur].children.insert(token, child);
                    child
                }
            };
        }
        let existing = self.nodes[cur].value.take();
        if existing.is_none() {
            self.len += 1;
        }
        self.nodes[cur].value = Some(update(existing));
    }

    /// Insert `value` at `key`, overwriting any existing value.
    pub fn insert<I>(&mut self, key: I, value: V)
    where
        I: IntoIterator<Item = TokenId>,
    {
        self.insert_with(key, |_| value);
    }

    /// Look up the value stored exactly at `key`.
    pub fn get<I>(&self, key: I) -> Option<&V>
    where
        I: IntoIterator<Item = TokenId>,
    {
        let mut cur = 0;
        for token in key {
            match self.nodes[cur].children.get(&token) {
                Some(&child) => cur = child,
                None => return None,
            }
        }
        self.nodes[cur].value.as_ref()
    }

    /// Find the *deepest* valued node along `query`.
    ///
    /// Follows edges for as long as they exist, remembering the last node
    /// that actually stores a value — valueless path segments are walked
    /// through but never reported. Returns the matched key length together
    /// with the value, or `None` if no valued node (the root included) lies
    /// on the walked path.
    ///
    /// Runs in O(min(query length, deepest inserted key)).
    pub fn longest_prefix<I>(&self, query: I) -> Option<(usize, &V)>
    where
        I: IntoIterator<Item = TokenId>,
    {
        let mut best = self.nodes[0].value.as_ref().map(|value| (0, value));
        let mut cur = 0;
        let mut depth = 0;
        for token in query {
            match self.nodes[cur].children.get(&token) {
                Some(&child) => {
                    cur = child;
                    depth += 1;
                    if let Some(value) = self.nodes[cur].value.as_ref() {
                        best = Some((depth, value));
                    }
                }
                None => break,
            }
        }
        best
    }

    /// Find the *shallowest* valued node along `query`.
    ///
    /// Returns as soon as any value is encountered, starting with the
    /// empty key at depth 0. `None` if the walk runs off the trie or
    /// exhausts `query` without meeting a value.
    pub fn shortest_prefix<I>(&self, query: I) -> Option<(usize, &V)>
    where
        I: IntoIterator<Item = TokenId>,
    {
        if let Some(value) = self.nodes[0].value.as_ref() {
            return Some((0, value));
        }
        let mut cur = 0;
        let mut depth = 0;
        for token in query {
            match self.nodes[cur].children.get(&token) {
                Some(&child) => {
                    cur = child;
                    depth += 1;
                    if let Some(value) = self.nodes[cur].value.as_ref() {
                        return Some((depth, value));
                    }
                }
                None => return None,
            }
        }
        None
    }
}

impl<V> Default for SequenceTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}
