/// Semantic section a region was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Markup between `<template>` and `</template>`.
    Template,
    /// Script text between the script-open tag and `export default`.
    ScriptPreamble,
    /// Body of a `key: { ... }` options block, braces excluded.
    NamedBlock,
}

/// A contiguous slice of a document.
///
/// `start` is the byte offset of `text` inside the parent document, so a
/// match index inside the region maps back with [`Region::absolute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region<'a> {
    pub kind: RegionKind,
    pub text: &'a str,
    pub start: usize,
}

impl<'a> Region<'a> {
    pub fn new(kind: RegionKind, text: &'a str, start: usize) -> Self {
        Self { kind, text, start }
    }

    /// Byte offset just past the region's last byte in the parent document.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn absolute(&self, local: usize) -> usize {
        self.start + local
    }
}
