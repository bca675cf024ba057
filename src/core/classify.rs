//! Per-kind extraction routines.
//!
//! Hybrid components are scanned region by region in a fixed order:
//! template, script preamble, then the `props` block. Plain scripts are
//! scanned as a whole.

use enum_dispatch::enum_dispatch;

use super::{
    data::{DocumentKind, Finding, FindingRegion, RegionKind},
    error::ScanError,
    inspect::is_between_tag_boundary,
    scanner::Scanner,
    segment::{extract_between, find_named_block},
};

#[enum_dispatch]
pub trait Classify {
    fn classify(&self, scanner: &Scanner, text: &str) -> Result<Vec<Finding>, ScanError>;
}

#[enum_dispatch(Classify)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classifier {
    HybridComponent(HybridComponent),
    PlainScript(PlainScript),
    Unrecognized(Unrecognized),
}

impl From<DocumentKind> for Classifier {
    fn from(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::HybridComponent => HybridComponent.into(),
            DocumentKind::PlainScript => PlainScript.into(),
            DocumentKind::Unrecognized => Unrecognized.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HybridComponent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainScript;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unrecognized;

impl Classify for HybridComponent {
    fn classify(&self, scanner: &Scanner, text: &str) -> Result<Vec<Finding>, ScanError> {
        let mut findings = scan_template(scanner, text);

        let preamble = extract_between(
            text,
            scanner.catalog().script_preamble(),
            RegionKind::ScriptPreamble,
        );
        let rest = match preamble {
            Some(region) => {
                findings.extend(scan_script(
                    scanner,
                    region.text,
                    region.start,
                    FindingRegion::ScriptPre,
                ));
                region.end()
            }
            None => 0,
        };

        // The options block is searched past the preamble so regions never overlap.
        if let Some(block) = find_named_block(&text[rest..], scanner.props_intro())? {
            findings.extend(scan_script(
                scanner,
                block.text,
                rest + block.start,
                FindingRegion::Props,
            ));
        }

        Ok(findings)
    }
}

impl Classify for PlainScript {
    fn classify(&self, scanner: &Scanner, text: &str) -> Result<Vec<Finding>, ScanError> {
        Ok(scan_script(scanner, text, 0, FindingRegion::Plain))
    }
}

impl Classify for Unrecognized {
    fn classify(&self, _scanner: &Scanner, _text: &str) -> Result<Vec<Finding>, ScanError> {
        Ok(Vec::new())
    }
}

/// Quoted literals in script text that are not commented out or wrapped.
///
/// `base` is the byte offset of `text` in the document.
fn scan_script(scanner: &Scanner, text: &str, base: usize, tag: FindingRegion) -> Vec<Finding> {
    scanner
        .catalog()
        .quoted_literals(text)
        .filter(|m| {
            !scanner
                .inspector()
                .script_verdict(text, m.start)
                .is_suppressed()
        })
        .map(|m| Finding::new(tag, m.payload, base + m.start))
        .collect()
}

/// Text nodes and static attribute values of the template region.
fn scan_template(scanner: &Scanner, text: &str) -> Vec<Finding> {
    let catalog = scanner.catalog();
    let inspector = scanner.inspector();
    let Some(template) = extract_between(text, catalog.template(), RegionKind::Template) else {
        return Vec::new();
    };
    let src = template.text;

    let mut findings = Vec::new();
    let mut report = |literal: &str, index: usize| {
        if !inspector.markup_verdict(src, index).is_suppressed() {
            findings.push(Finding::new(
                FindingRegion::Template,
                literal,
                template.absolute(index),
            ));
        }
    };

    for content in catalog.tag_contents(src) {
        let trimmed = content.payload.trim();
        if trimmed.is_empty() {
            continue;
        }
        let lead = content.payload.len() - content.payload.trim_start().len();
        let index = content.payload_start + lead;

        if catalog.is_literal(trimmed)
            && is_between_tag_boundary(src, index, trimmed.len(), inspector.windows().tag)
        {
            report(trimmed, index);
            continue;
        }
        // Mixed content such as `{{ count }} 条记录`: report each run.
        for run in catalog.literal_runs(content.payload) {
            report(run.matched.trim_end(), content.payload_start + run.start);
        }
    }

    for tag in catalog.start_tags(src) {
        for attr in catalog.attributes(tag.payload) {
            if attr.is_expression() || !catalog.is_literal(attr.value.payload) {
                continue;
            }
            report(
                attr.value.payload,
                tag.payload_start + attr.value.payload_start,
            );
        }
    }

    findings.sort_by_key(|f| f.offset);
    findings
}
