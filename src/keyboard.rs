//! Keyboard adjacency table used to generate plausible corruptions.
//!
//! The default table maps every letter, digit, and common punctuation mark
//! to the keys physically surrounding it on a QWERTY layout (digits form a
//! linear chain `0-9-8-...-2-1`). It drives the corruption step only; the
//! decoder never consults it.

use std::collections::HashMap;

/// QWERTY surroundings per key. Uppercase letters mirror their lowercase
/// neighbors shifted.
const QWERTY_NEIGHBORS: &[(char, &[char])] = &[
    ('a', &['q', 'w', 's', 'x', 'z']),
    ('b', &['f', 'g', 'h', 'n', 'v']),
    ('c', &['x', 's', 'd', 'f', 'v']),
    ('d', &['w', 'e', 'r', 's', 'f', 'x', 'c', 'v']),
    ('e', &['w', 'r', 's', 'd', 'f']),
    ('f', &['e', 'r', 't', 'd', 'g', 'c', 'v', 'b']),
    ('g', &['r', 't', 'y', 'f', 'h', 'v', 'b', 'n']),
    ('h', &['t', 'y', 'u', 'g', 'j', 'b', 'n', 'm']),
    ('i', &['u', 'o', 'j', 'k', 'l']),
    ('j', &['y', 'u', 'i', 'h', 'k', 'n', 'm']),
    ('k', &['u', 'i', 'o', 'j', 'l', 'm']),
    ('l', &['i', 'o', 'p', 'k']),
    ('m', &['n', 'h', 'j', 'k']),
    ('n', &['b', 'g', 'h', 'j', 'm']),
    ('o', &['i', 'k', 'l', 'p']),
    ('p', &['o', 'l']),
    ('q', &['a', 's', 'w']),
    ('r', &['e', 'd', 'f', 'g', 't']),
    ('s', &['q', 'w', 'e', 'a', 'd', 'z', 'x', 'c']),
    ('t', &['r', 'y', 'f', 'g', 'h']),
    ('u', &['y', 'i', 'h', 'j', 'k']),
    ('v', &['d', 'f', 'g', 'c', 'b']),
    ('w', &['q', 'e', 'a', 's', 'd']),
    ('x', &['a', 's', 'd', 'z', 'c']),
    ('y', &['t', 'u', 'g', 'h', 'j']),
    ('z', &['a', 's', 'x']),
    ('0', &['9']),
    ('9', &['8', '0']),
    ('8', &['7', '9']),
    ('7', &['6', '8']),
    ('6', &['5', '7']),
    ('5', &['4', '6']),
    ('4', &['3', '5']),
    ('3', &['2', '4']),
    ('2', &['1', '3']),
    ('1', &['2']),
    ('"', &[':', '?', '{', '}']),
    ('<', &['m', '>', 'L', 'K']),
    ('>', &['<', 'L', ':']),
    (',', &['m', 'k', 'l', '.']),
    ('.', &[',', 'l', ';', '/']),
    (';', &['l', 'p', '[', ']', '`']),
    ('[', &['p', ';', '`']),
    (']', &['[', '`']),
    ('?', &['>', '"', ':']),
    ('!', &['@', '~']),
    ('~', &['!']),
    ('\\', &[']']),
    ('@', &['!', '#']),
    ('#', &['@', '$']),
    ('$', &['#', '%']),
    ('^', &['$', '&']),
    ('&', &['^', '*']),
    ('*', &['&', '(']),
    ('(', &['*', ')']),
    (')', &['(', '_']),
    ('_', &[')', '+']),
    ('+', &['_']),
    ('-', &['0', '=']),
    ('=', &['-']),
];

/// Mapping from a symbol to the ordered list of symbols considered adjacent
/// on a keyboard.
///
/// Symbols absent from the map have no corruption candidates and pass
/// through unchanged. The map is immutable once built.
#[derive(Debug, Clone)]
pub struct AdjacencyMap {
    entries: HashMap<char, Vec<char>>,
}

impl AdjacencyMap {
    /// Build the default QWERTY table: lowercase letters, their uppercase
    /// mirrors, digits 0-9, and common punctuation.
    pub fn qwerty() -> AdjacencyMap {
        let mut entries = HashMap::new();
        for &(key, neighbors) in QWERTY_NEIGHBORS {
            entries.insert(key, neighbors.to_vec());
            if key.is_ascii_lowercase() {
                let upper = key.to_ascii_uppercase();
                let upper_neighbors = neighbors.iter().map(|c| c.to_ascii_uppercase()).collect();
                entries.insert(upper, upper_neighbors);
            }
        }
        AdjacencyMap { entries }
    }

    /// Build a custom table from explicit entries. Entries with an empty
    /// neighbor list are dropped, keeping the map's non-empty invariant.
    pub fn from_entries<I>(entries: I) -> AdjacencyMap
    where
        I: IntoIterator<Item = (char, Vec<char>)>,
    {
        let entries = entries
            .into_iter()
            .filter(|(_, neighbors)| !neighbors.is_empty())
            .collect();
        AdjacencyMap { entries }
    }

    /// The ordered neighbors of a symbol; empty for symbols not present.
    pub fn neighbors(&self, symbol: char) -> &[char] {
        self.entries
            .get(&symbol)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the symbol has at least one neighbor.
    pub fn contains(&self, symbol: char) -> bool {
        self.entries.contains_key(&symbol)
    }

    /// Number of symbols in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AdjacencyMap {
    fn default() -> Self {
        AdjacencyMap::qwerty()
    }
}
