//! Token-sequence phrase table

use neg2pheno_domain::Token;
use std::collections::HashMap;

struct Node<L> {
    children: HashMap<String, usize>,
    labels: Vec<L>,
}

impl<L> Node<L> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            labels: Vec::new(),
        }
    }
}

/// A trie of lowercased token sequences, each carrying one or more labels
///
/// Lookup walks the trie from every token position, so every occurrence of
/// every phrase is reported, overlapping ones included.
pub(crate) struct PhraseTable<L> {
    nodes: Vec<Node<L>>,
    patterns: usize,
}

impl<L: Clone + PartialEq> PhraseTable<L> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            patterns: 0,
        }
    }

    /// Register a phrase; returns false for empty or already registered ones
    pub(crate) fn insert(&mut self, tokens: &[String], label: L) -> bool {
        if tokens.is_empty() {
            return false;
        }

        let mut node = 0;
        for token in tokens {
            let existing = self.nodes[node].children.get(token).copied();
            node = match existing {
                Some(next) => next,
                None => {
                    self.nodes.push(Node::new());
                    let next = self.nodes.len() - 1;
                    self.nodes[node].children.insert(token.clone(), next);
                    next
                }
            };
        }

        let labels = &mut self.nodes[node].labels;
        if labels.contains(&label) {
            return false;
        }
        labels.push(label);
        self.patterns += 1;
        true
    }

    /// Every (label, start, end) occurrence in the token stream
    pub(crate) fn find_all(&self, tokens: &[Token]) -> Vec<(L, usize, usize)> {
        let mut matches = Vec::new();

        for start in 0..tokens.len() {
            let mut node = 0;
            for (offset, token) in tokens[start..].iter().enumerate() {
                match self.nodes[node].children.get(&token.lower) {
                    Some(&next) => node = next,
                    None => break,
                }
                for label in &self.nodes[node].labels {
                    matches.push((label.clone(), start, start + offset + 1));
                }
            }
        }

        matches
    }

    /// Number of registered (phrase, label) pairs
    pub(crate) fn len(&self) -> usize {
        self.patterns
    }
}
