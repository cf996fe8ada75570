//! Blacklist check for module specifiers the preview sandbox cannot resolve.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::technology::Technology;

static MODULE_SPECIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\bfrom\s*|\bimport\s*\(?\s*|\brequire\s*\(\s*)(['"])([^'"\n]+)(['"])"#)
        .expect("valid module specifier regex")
});

const TABLER_ICONS: &str = "@tabler/icons-react";
const MANTINE_CORE: &str = "@mantine/core";
const MANTINE_TYPO: &str = "@matine/core";
const MANTINE_SCOPE: &str = "@mantine/";

const ICON_PACKAGES: &[&str] = &[
    "react-icons",
    "@heroicons/react",
    "@fortawesome/react-fontawesome",
    "@fortawesome/free-solid-svg-icons",
    "@fortawesome/fontawesome-svg-core",
    "@mui/icons-material",
    "lucide-react",
];

const COMPONENT_LIBRARIES: &[&str] = &["@mui/material", "antd", "@chakra-ui/react"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Allow,
    Redirect(&'static str),
    Reject,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    Redirected { package: String, to: String },
    Rejected { package: String },
    Residual { package: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub code: String,
    pub valid: bool,
    pub violations: Vec<Violation>,
}

/// Returns the blacklisted package a specifier belongs to and what to do with
/// it for `technology`. `None` means the specifier is not on the list.
fn classify(specifier: &str, technology: Technology) -> Option<(&'static str, Action)> {
    let mantine = technology == Technology::Mantine;

    if matches_package(specifier, TABLER_ICONS) {
        let action = if mantine { Action::Allow } else { Action::Reject };
        return Some((TABLER_ICONS, action));
    }
    if let Some(package) = ICON_PACKAGES
        .iter()
        .find(|package| matches_package(specifier, package))
    {
        let action = if mantine {
            Action::Redirect(TABLER_ICONS)
        } else {
            Action::Reject
        };
        return Some((*package, action));
    }
    if matches_package(specifier, MANTINE_TYPO) {
        let action = if mantine {
            Action::Redirect(MANTINE_CORE)
        } else {
            Action::Reject
        };
        return Some((MANTINE_TYPO, action));
    }
    if specifier.starts_with(MANTINE_SCOPE) {
        let action = if mantine { Action::Allow } else { Action::Reject };
        return Some((MANTINE_SCOPE, action));
    }
    COMPONENT_LIBRARIES
        .iter()
        .find(|package| matches_package(specifier, package))
        .map(|package| (*package, Action::Reject))
}

fn matches_package(specifier: &str, package: &str) -> bool {
    specifier == package
        || specifier
            .strip_prefix(package)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Every package that must not survive in `technology` output.
fn disallowed_packages(technology: Technology) -> impl Iterator<Item = &'static str> {
    [TABLER_ICONS, MANTINE_TYPO, MANTINE_SCOPE]
        .into_iter()
        .chain(ICON_PACKAGES.iter().copied())
        .chain(COMPONENT_LIBRARIES.iter().copied())
        .filter(move |package| {
            !matches!(classify(package, technology), Some((_, Action::Allow)) | None)
        })
}

/// Substring search that ignores longer names sharing the prefix, such as
/// `react-icons-extra` or `antdesign`.
fn mentions_package(code: &str, package: &str) -> bool {
    let is_name_char = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_');
    code.match_indices(package).any(|(index, _)| {
        let before = code[..index].chars().next_back();
        let after = code[index + package.len()..].chars().next();
        let starts_clean = before.is_none_or(|c| !is_name_char(c) && c != '@' && c != '/');
        let ends_clean = package.ends_with('/') || after.is_none_or(|c| !is_name_char(c));
        starts_clean && ends_clean
    })
}

/// Rewrites redirectable imports and flags the rest. Best-effort: a clean
/// report does not mean the code compiles.
pub fn validate_dependencies(code: &str, technology: Technology) -> ValidationReport {
    let mut violations = Vec::new();

    let rewritten = MODULE_SPECIFIER.replace_all(code, |caps: &Captures| {
        let specifier = &caps[3];
        match classify(specifier, technology) {
            Some((package, Action::Redirect(target))) => {
                let violation = Violation::Redirected {
                    package: package.to_string(),
                    to: target.to_string(),
                };
                if !violations.contains(&violation) {
                    violations.push(violation);
                }
                format!("{}{}{}{}", &caps[1], &caps[2], target, &caps[4])
            }
            Some((package, Action::Reject)) => {
                let violation = Violation::Rejected {
                    package: package.to_string(),
                };
                if !violations.contains(&violation) {
                    violations.push(violation);
                }
                caps[0].to_string()
            }
            Some((_, Action::Allow)) | None => caps[0].to_string(),
        }
    });
    let code = rewritten.into_owned();

    for package in disallowed_packages(technology) {
        let already_rejected = violations.iter().any(|violation| {
            matches!(violation, Violation::Rejected { package: rejected } if rejected == package)
        });
        if !already_rejected && mentions_package(&code, package) {
            violations.push(Violation::Residual {
                package: package.to_string(),
            });
        }
    }

    let valid = !violations
        .iter()
        .any(|violation| !matches!(violation, Violation::Redirected { .. }));

    if !violations.is_empty() {
        tracing::debug!(
            technology = %technology,
            valid,
            violations = violations.len(),
            "Dependency validation adjusted generated code"
        );
    }

    ValidationReport {
        code,
        valid,
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mantine_icon_imports_are_redirected_to_tabler() {
        let code = "import React from 'react';\nimport { FaBeer } from 'react-icons/fa';\nimport { HeartIcon } from \"@heroicons/react/24/solid\";\nexport default A;";
        let report = validate_dependencies(code, Technology::Mantine);

        assert!(report.valid);
        assert!(!report.code.contains("react-icons"));
        assert!(!report.code.contains("@heroicons/react"));
        assert!(report.code.contains("import { FaBeer } from '@tabler/icons-react';"));
        assert!(
            report
                .code
                .contains("import { HeartIcon } from \"@tabler/icons-react\";")
        );
        assert_eq!(report.violations.len(), 2);
    }

    #[test]
    fn mantine_typo_is_corrected() {
        let code = "import { Button } from '@matine/core';";
        let report = validate_dependencies(code, Technology::Mantine);
        assert!(report.valid);
        assert_eq!(report.code, "import { Button } from '@mantine/core';");
    }

    #[test]
    fn icon_imports_are_rejected_outside_mantine() {
        for technology in [Technology::Tailwind, Technology::Svelte, Technology::Vue] {
            let code = "import { FaBeer } from 'react-icons/fa';";
            let report = validate_dependencies(code, technology);
            assert!(!report.valid, "{technology}");
            assert_eq!(report.code, code);
            assert_eq!(
                report.violations,
                vec![Violation::Rejected {
                    package: "react-icons".to_string()
                }]
            );
        }
    }

    #[test]
    fn tabler_and_mantine_are_only_allowed_for_mantine() {
        let code = "import { Button } from '@mantine/core';\nimport { IconCheck } from '@tabler/icons-react';";
        assert!(validate_dependencies(code, Technology::Mantine).valid);
        let report = validate_dependencies(code, Technology::Tailwind);
        assert!(!report.valid);
        assert_eq!(report.violations.len(), 2);
    }

    #[test]
    fn component_libraries_are_rejected_everywhere() {
        let code = "const { Button } = require('antd');";
        assert!(!validate_dependencies(code, Technology::Mantine).valid);
        assert!(!validate_dependencies(code, Technology::Tailwind).valid);
    }

    #[test]
    fn similar_names_are_not_matched() {
        let code = "import icons from 'react-icons-extra';\nimport antdLike from 'antdesign';";
        let report = validate_dependencies(code, Technology::Tailwind);
        assert!(report.valid);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn leftover_mentions_after_redirect_invalidate_the_result() {
        let code = "// uses react-icons\nimport { FaBeer } from 'react-icons/fa';";
        let report = validate_dependencies(code, Technology::Mantine);
        assert!(!report.valid);
        assert!(report.violations.contains(&Violation::Residual {
            package: "react-icons".to_string()
        }));
    }

    #[test]
    fn dynamic_imports_are_redirected_for_mantine() {
        let code = "const Icons = lazy(() => import('react-icons/fa'));\nconst Lib = require (\"@matine/core\");";
        let report = validate_dependencies(code, Technology::Mantine);
        assert!(report.valid, "{:?}", report.violations);
        assert!(!report.code.contains("react-icons"));
        assert!(report.code.contains("import('@tabler/icons-react')"));
        assert!(report.code.contains("require (\"@mantine/core\")"));
    }

    #[test]
    fn dynamic_imports_are_rejected_outside_mantine() {
        for technology in [Technology::Tailwind, Technology::Svelte, Technology::Vue] {
            let code = "const Icons = lazy(() => import('react-icons/fa'));";
            let report = validate_dependencies(code, technology);
            assert!(!report.valid, "{technology}");
            assert_eq!(
                report.violations,
                vec![Violation::Rejected {
                    package: "react-icons".to_string()
                }]
            );
        }
    }

    #[test]
    fn unparsed_mentions_of_blacklisted_packages_invalidate_the_result() {
        let code = "const load = (name) => loader(`react-icons/${name}`);";
        let report = validate_dependencies(code, Technology::Tailwind);
        assert!(!report.valid);
        assert_eq!(
            report.violations,
            vec![Violation::Residual {
                package: "react-icons".to_string()
            }]
        );
        let mantine = "import { Button } from '@mantine/core';";
        assert!(validate_dependencies(mantine, Technology::Mantine).valid);
    }

    #[test]
    fn side_effect_imports_are_checked() {
        let code = "import 'lucide-react';";
        let report = validate_dependencies(code, Technology::Mantine);
        assert_eq!(report.code, "import '@tabler/icons-react';");
    }
}
