//! Indented plain-text presets.
//!
//! ```text
//! root: my-project
//! category: Web
//!
//! src/
//!   main.rs
//! README.md
//! ```
//!
//! Two spaces per level, a trailing `/` marks a folder, `#` starts a comment.

use crate::models::{FolderPreset, NodeKind, PresetNode};
use regex::Regex;
use std::sync::LazyLock;

const INDENT_UNIT: usize = 2;
const DEFAULT_PRESET_ROOT: &str = "project";
pub const TEMP_PREFIX: &str = "temp-";

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid slug regex"));
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresetMeta<'a> {
    pub category: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// `temp-<slug>`, suffixed `-2`, `-3`, ... until it is not in `existing`.
pub fn slugify_preset_value<S: AsRef<str>>(label: &str, existing: &[S]) -> String {
    let lower = label.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lower, "");
    let slug = WHITESPACE_RUNS.replace_all(&stripped, "-");
    let base = format!("{TEMP_PREFIX}{}", slug.trim());

    let taken = |candidate: &str| existing.iter().any(|v| v.as_ref() == candidate);
    if !taken(&base) {
        return base;
    }
    (2u32..)
        .map(|counter| format!("{base}-{counter}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}

pub fn parse_indented_preset<S: AsRef<str>>(text: &str, existing_values: &[S]) -> FolderPreset {
    let mut root_name = DEFAULT_PRESET_ROOT.to_string();
    let mut category = None;
    let mut description = None;

    // stack[0] collects the top level.
    let mut stack: Vec<PresetNode> = vec![PresetNode::folder("", Vec::new())];

    for raw in text.lines() {
        let line = raw.replace('\t', "  ");
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(value) = header_value(trimmed, "root:") {
            if !value.is_empty() {
                root_name = value.to_string();
            }
            continue;
        }
        if let Some(value) = header_value(trimmed, "category:") {
            category = non_empty(value);
            continue;
        }
        if let Some(value) = header_value(trimmed, "description:") {
            description = non_empty(value);
            continue;
        }

        let leading = line.len() - line.trim_start().len();
        let depth = leading / INDENT_UNIT + 1;

        while stack.len() > depth {
            close_top(&mut stack);
        }
        // An indentation jump opens unnamed fillers; they are dropped below.
        while stack.len() < depth {
            stack.push(PresetNode::folder("", Vec::new()));
        }

        let (is_dir, name) = match trimmed.strip_suffix('/') {
            Some(name) => (true, name.trim()),
            None => (false, trimmed),
        };
        if name.is_empty() {
            continue;
        }

        if is_dir {
            stack.push(PresetNode::folder(name, Vec::new()));
        } else {
            push_child(&mut stack, PresetNode::file(name));
        }
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }
    let structure = stack
        .pop()
        .map(|top| drop_fillers(top.children.unwrap_or_default()))
        .unwrap_or_default();

    FolderPreset {
        value: slugify_preset_value(&root_name, existing_values),
        label: root_name.clone(),
        category,
        description,
        root_name,
        structure,
    }
}

pub fn serialize_indented_preset(root_name: &str, nodes: &[PresetNode], meta: PresetMeta) -> String {
    let mut out = vec![format!("root: {root_name}")];
    if let Some(category) = meta.category.filter(|c| !c.is_empty()) {
        out.push(format!("category: {category}"));
    }
    if let Some(description) = meta.description.filter(|d| !d.is_empty()) {
        out.push(format!("description: {description}"));
    }
    out.push(String::new());

    fn walk(items: &[PresetNode], depth: usize, out: &mut Vec<String>) {
        for item in items {
            let indent = " ".repeat(depth * INDENT_UNIT);
            match item.kind {
                NodeKind::Folder => {
                    out.push(format!("{indent}{}/", item.name));
                    walk(item.children(), depth + 1, out);
                }
                NodeKind::File => out.push(format!("{indent}{}", item.name)),
            }
        }
    }
    walk(nodes, 0, &mut out);

    let mut text = out.join("\n");
    text.push('\n');
    text
}

pub fn preset_to_text(preset: &FolderPreset) -> String {
    serialize_indented_preset(
        &preset.root_name,
        &preset.structure,
        PresetMeta {
            category: preset.category.as_deref(),
            description: preset.description.as_deref(),
        },
    )
}

fn header_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let head = line.get(..key.len())?;
    head.eq_ignore_ascii_case(key)
        .then(|| line[key.len()..].trim())
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn push_child(stack: &mut [PresetNode], node: PresetNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.get_or_insert_with(Vec::new).push(node);
    }
}

fn close_top(stack: &mut Vec<PresetNode>) {
    if let Some(done) = stack.pop() {
        push_child(stack, done);
    }
}

fn drop_fillers(items: Vec<PresetNode>) -> Vec<PresetNode> {
    items
        .into_iter()
        .filter(|item| !item.name.is_empty())
        .map(|item| PresetNode {
            children: match item.kind {
                NodeKind::Folder => Some(drop_fillers(item.children.unwrap_or_default())),
                NodeKind::File => None,
            },
            ..item
        })
        .collect()
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/presets/text.rs"]
mod tests;
