//! Rendered documents
//!
//! A document is an ordered list of blocks. Each block remembers which option
//! keys it was derived from so callers (and tests) can reason about gating
//! without parsing the text.

use std::collections::BTreeSet;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub id: &'static str,
    /// Gate keys plus keys whose values the block prints
    pub sources: Vec<&'static str>,
    pub lines: Vec<String>,
}

impl Block {
    pub fn depends_on(&self, key: &str) -> bool {
        self.sources.iter().any(|k| *k == key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedDocument {
    blocks: Vec<Block>,
}

impl RenderedDocument {
    pub(crate) fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn has_block(&self, id: &str) -> bool {
        self.block(id).is_some()
    }

    pub fn block_ids(&self) -> Vec<&'static str> {
        self.blocks.iter().map(|b| b.id).collect()
    }

    /// Full text, newline-terminated
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in self.blocks.iter().flat_map(|b| b.lines.iter()) {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Names referenced as `${NAME}` anywhere in the document
    pub fn interpolated_vars(&self) -> BTreeSet<String> {
        interpolations(&self.to_text())
    }

    /// Names assigned by `NAME=value` lines (comments ignored)
    pub fn assigned_vars(&self) -> BTreeSet<String> {
        self.blocks
            .iter()
            .flat_map(|b| b.lines.iter())
            .filter(|line| !line.trim_start().starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(name, _)| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// Extract `${NAME}` references, skipping `$${...}` escapes
pub fn interpolations(text: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'$' {
            if bytes.get(i + 1) == Some(&b'$') {
                i += 2;
                continue;
            }
            if bytes.get(i + 1) == Some(&b'{') {
                if let Some(end) = text[i + 2..].find('}') {
                    let name = &text[i + 2..i + 2 + end];
                    let name = name.split([':', '-', '?']).next().unwrap_or(name);
                    if !name.is_empty() {
                        names.insert(name.to_string());
                    }
                    i += end + 3;
                    continue;
                }
            }
        }
        i += 1;
    }
    names
}
