//! Turns raw model output into a bare component source.
//!
//! This is line-based string surgery: fences and language tags are dropped,
//! then the code body is located with per-framework heuristics and anything
//! before or after it is discarded.

use std::sync::LazyLock;

use regex::Regex;

use crate::technology::{Framework, Technology};

static FENCE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*```(?P<tag>[A-Za-z0-9_+\-]*)(?P<rest>.*)$").expect("valid fence regex")
});

const LANGUAGE_TAGS: &[&str] = &[
    "jsx",
    "tsx",
    "js",
    "javascript",
    "ts",
    "typescript",
    "html",
    "svelte",
    "vue",
    "react",
];

const DECLARATION_PREFIXES: &[&str] = &[
    "'use client'",
    "\"use client\"",
    "const ",
    "function ",
    "export ",
    "class ",
    "let ",
];

const VUE_BLOCK_OPEN: &[&str] = &["<template", "<script", "<style"];
const VUE_BLOCK_CLOSE: &[&str] = &["</template>", "</script>", "</style>"];

pub fn sanitize(raw: &str, technology: Technology) -> String {
    let unfenced = strip_fences(raw);
    extract_code(&unfenced, technology.framework()).unwrap_or_else(|| unfenced.trim().to_string())
}

/// Like [`sanitize`], but `None` when no code body is found instead of
/// handing back the prose.
pub fn extract_component(raw: &str, technology: Technology) -> Option<String> {
    extract_code(&strip_fences(raw), technology.framework())
}

/// Removes Markdown fences (with their language tag) and a stray language tag
/// on the first non-empty line.
pub fn strip_fences(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in raw.lines() {
        if let Some(caps) = FENCE_OPEN.captures(line) {
            let tag = &caps["tag"];
            let rest = &caps["rest"];
            // A word glued to the fence is only a tag if it names a language
            // or ends the line; otherwise it is the first token of code.
            let is_tag = LANGUAGE_TAGS.contains(&tag.to_ascii_lowercase().as_str())
                || rest.trim().is_empty();
            let kept = if is_tag {
                rest.trim_start().replace("```", "")
            } else {
                format!("{tag}{rest}").replace("```", "")
            };
            if !kept.trim().is_empty() {
                lines.push(kept);
            }
            continue;
        }
        lines.push(line.replace("```", ""));
    }

    if let Some(first) = lines.iter().position(|line| !line.trim().is_empty())
        && LANGUAGE_TAGS.contains(&lines[first].trim().to_ascii_lowercase().as_str())
    {
        lines.remove(first);
    }

    lines.join("\n")
}

/// Keeps the span between the first code-like line and the last closing line.
/// `None` when there is no recognizable body.
pub fn extract_code(code: &str, framework: Framework) -> Option<String> {
    let lines: Vec<&str> = code.lines().collect();
    let span = match framework {
        Framework::React => react_span(&lines),
        Framework::Svelte => markup_span(&lines),
        Framework::Vue => vue_span(&lines).or_else(|| markup_span(&lines)),
    };

    match span {
        Some((start, end)) if start <= end => {
            Some(lines[start..=end].join("\n").trim().to_string())
        }
        _ => None,
    }
}

fn react_span(lines: &[&str]) -> Option<(usize, usize)> {
    let start = lines
        .iter()
        .position(|line| is_import_line(line))
        .or_else(|| {
            lines.iter().position(|line| {
                let trimmed = line.trim_start();
                DECLARATION_PREFIXES
                    .iter()
                    .any(|prefix| trimmed.starts_with(prefix))
            })
        })?;

    let end = match lines
        .iter()
        .rposition(|line| line.trim_start().starts_with("export default"))
    {
        Some(export) if opens_block(lines[export]) => lines
            .iter()
            .enumerate()
            .skip(export + 1)
            .filter(|(_, line)| {
                let trimmed = line.trim_start();
                trimmed.starts_with('}') || trimmed.starts_with(')')
            })
            .map(|(index, _)| index)
            .last()
            .unwrap_or(export),
        Some(export) => export,
        None => lines.iter().rposition(|line| {
            let trimmed = line.trim_end();
            trimmed.ends_with(';') || trimmed.ends_with('}') || trimmed.ends_with(')')
        })?,
    };

    Some((start, end))
}

fn is_import_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("import ") || trimmed.starts_with("import{")
}

fn opens_block(line: &str) -> bool {
    let opens = line.matches('{').count() + line.matches('(').count();
    let closes = line.matches('}').count() + line.matches(')').count();
    opens > closes
}

fn markup_span(lines: &[&str]) -> Option<(usize, usize)> {
    let start = lines
        .iter()
        .position(|line| line.trim_start().starts_with('<'))?;
    let end = lines.iter().rposition(|line| line.trim_end().ends_with('>'))?;
    Some((start, end))
}

fn vue_span(lines: &[&str]) -> Option<(usize, usize)> {
    let start = lines.iter().position(|line| {
        let trimmed = line.trim_start();
        VUE_BLOCK_OPEN.iter().any(|tag| trimmed.starts_with(tag))
    })?;
    let end = lines.iter().rposition(|line| {
        let trimmed = line.trim_start();
        VUE_BLOCK_CLOSE.iter().any(|tag| trimmed.starts_with(tag))
    })?;
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    const REACT_BODY: &str = "import React from 'react';\n\nconst A = () => <button>Hi</button>;\nexport default A;";
    const SVELTE_BODY: &str = "<script>\n  let count = 0;\n</script>\n\n<button on:click={() => count++}>{count}</button>";
    const VUE_BODY: &str = "<template>\n  <button>Hi</button>\n</template>\n\n<script>\nexport default { name: 'A' };\n</script>";

    fn body_for(technology: Technology) -> &'static str {
        match technology.framework() {
            Framework::React => REACT_BODY,
            Framework::Svelte => SVELTE_BODY,
            Framework::Vue => VUE_BODY,
        }
    }

    #[test]
    fn removes_fences_and_prose_for_every_technology() {
        for technology in Technology::iter() {
            let body = body_for(technology);
            let raw = format!(
                "Sure! Here is the component you asked for:\n\n```jsx\n{body}\n```\n\nLet me know if you need changes."
            );
            let cleaned = sanitize(&raw, technology);
            assert!(!cleaned.contains("```"), "{technology}: {cleaned}");
            assert!(!cleaned.contains("Sure!"), "{technology}: {cleaned}");
            assert!(!cleaned.contains("Let me know"), "{technology}: {cleaned}");
            assert_eq!(cleaned, body, "{technology}");
        }
    }

    #[test]
    fn clean_input_is_unchanged() {
        for technology in Technology::iter() {
            let body = body_for(technology);
            assert_eq!(sanitize(body, technology), body);
        }
    }

    #[test]
    fn drops_a_stray_language_tag_line() {
        let raw = format!("jsx\n{REACT_BODY}");
        assert_eq!(sanitize(&raw, Technology::Tailwind), REACT_BODY);
    }

    #[test]
    fn keeps_identifiers_that_contain_js() {
        let raw = "import json from './data.json';\nconst jsx = json;\nexport default jsx;";
        assert_eq!(sanitize(raw, Technology::Tailwind), raw);
    }

    #[test]
    fn keeps_code_on_the_fence_line() {
        let raw = "```jsx import React from 'react';\nexport default A;```";
        assert_eq!(
            strip_fences(raw),
            "import React from 'react';\nexport default A;"
        );
    }

    #[test]
    fn code_glued_to_the_fence_is_kept() {
        let raw = "```import React from 'react';\nconst A = () => <b/>;\nexport default A;\n```";
        assert_eq!(
            sanitize(raw, Technology::Tailwind),
            "import React from 'react';\nconst A = () => <b/>;\nexport default A;"
        );
    }

    #[test]
    fn unknown_tag_alone_on_the_fence_line_is_dropped() {
        let raw = "```python\nconst A = () => <b/>;\nexport default A;\n```";
        assert_eq!(
            strip_fences(raw),
            "const A = () => <b/>;\nexport default A;"
        );
    }

    #[test]
    fn prose_only_has_no_component() {
        let raw = "The component already looks correct; no changes are needed.";
        for technology in Technology::iter() {
            assert_eq!(extract_component(raw, technology), None, "{technology}");
        }
        assert_eq!(
            extract_component(REACT_BODY, Technology::Tailwind).as_deref(),
            Some(REACT_BODY)
        );
    }

    #[test]
    fn export_default_function_keeps_its_body() {
        let raw = "Here you go:\nimport React from 'react';\n\nexport default function Card() {\n  return <div />;\n}\n\nEnjoy!";
        assert_eq!(
            sanitize(raw, Technology::Mantine),
            "import React from 'react';\n\nexport default function Card() {\n  return <div />;\n}"
        );
    }

    #[test]
    fn react_without_imports_starts_at_the_declaration() {
        let raw = "This renders a button.\nconst A = () => <button>Hi</button>;\nexport default A;";
        assert_eq!(
            sanitize(raw, Technology::Tailwind),
            "const A = () => <button>Hi</button>;\nexport default A;"
        );
    }

    #[test]
    fn text_without_code_is_only_trimmed() {
        let raw = "  I cannot help with that.  ";
        assert_eq!(sanitize(raw, Technology::Tailwind), "I cannot help with that.");
        assert_eq!(sanitize(raw, Technology::Vue), "I cannot help with that.");
    }

    #[test]
    fn vue_falls_back_to_markup_heuristic() {
        let raw = "Output:\n<div class=\"p-4\">\n  <p>Hi</p>\n</div>\nDone.";
        assert_eq!(
            sanitize(raw, Technology::Vue),
            "<div class=\"p-4\">\n  <p>Hi</p>\n</div>"
        );
    }
}
