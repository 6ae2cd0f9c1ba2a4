//! Block scope tracking
//!
//! Liquid closes every block with a tag named after its opener (`endif`,
//! `endfor`, ...) while SKTL uses a bare `end`. The converter records each
//! opened block here and pops it when it meets an `end`.

use smallvec::SmallVec;
use std::fmt;

/// Kind of block that an `end` can close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    If,
    Unless,
    For,
    Search,
    CatalogSearch,
    LearningPathItem,
}

impl ScopeKind {
    /// Liquid tag name of the block
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Unless => "unless",
            Self::For => "for",
            Self::Search => "search",
            Self::CatalogSearch => "catalog_search",
            Self::LearningPathItem => "learning_path_item",
        }
    }

    /// Scope opened by a conditional call, if `name` is one
    pub fn conditional(name: &str) -> Option<Self> {
        match name {
            "if" => Some(Self::If),
            "unless" => Some(Self::Unless),
            _ => None,
        }
    }

    /// Closing tag body for this block
    pub fn end_tag(&self) -> String {
        format!("end{}", self.as_str())
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stack of currently open blocks for one document
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    stack: SmallVec<[ScopeKind; 8]>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a block
    pub fn push(&mut self, kind: ScopeKind) {
        self.stack.push(kind);
    }

    /// Close the innermost block
    pub fn pop(&mut self) -> Option<ScopeKind> {
        self.stack.pop()
    }

    /// Innermost open block
    pub fn current(&self) -> Option<ScopeKind> {
        self.stack.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Open blocks, outermost first
    pub fn as_slice(&self) -> &[ScopeKind] {
        &self.stack
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
