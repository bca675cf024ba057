use std::path::Path;

/// Kind of source document, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Single-file component mixing template, script and style sections (`.vue`).
    HybridComponent,
    /// Plain script file (`.js`, `.ts`, ...).
    PlainScript,
    /// Anything else. Scanning it yields no findings.
    Unrecognized,
}

impl DocumentKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "vue" => Self::HybridComponent,
            "js" | "jsx" | "ts" | "tsx" | "mjs" | "cjs" => Self::PlainScript,
            _ => Self::Unrecognized,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unrecognized)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

/// Raw text of one source file plus its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub kind: DocumentKind,
}

impl Document {
    pub fn new(text: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}
