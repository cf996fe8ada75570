use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use ts_rs::TS;

/// Target stack for a generated component.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS, Display,
    EnumString, EnumIter,
)]
#[ts(use_ts_enum)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Technology {
    #[default]
    #[strum(to_string = "tailwind", serialize = "react")]
    Tailwind,
    #[strum(to_string = "mantine")]
    Mantine,
    #[strum(to_string = "svelte")]
    Svelte,
    #[strum(to_string = "vue")]
    Vue,
}

/// Markup family, which decides how the sanitizer finds the code body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Framework {
    React,
    Svelte,
    Vue,
}

impl Technology {
    pub fn framework(self) -> Framework {
        match self {
            Technology::Tailwind | Technology::Mantine => Framework::React,
            Technology::Svelte => Framework::Svelte,
            Technology::Vue => Framework::Vue,
        }
    }

    /// How the stack is named inside prompts.
    pub fn library_label(self) -> &'static str {
        match self {
            Technology::Tailwind => "Next.js functional component + tailwind css",
            Technology::Mantine => "Next.js functional component + @mantine/core",
            Technology::Svelte => "Svelte component + tailwind css",
            Technology::Vue => "Vue single-file component + tailwind css",
        }
    }

    /// Resolves the selector from either the current `{ technology }` shape or
    /// the older `{ frontend, ui }` shape. Unknown values fall back to the default.
    pub fn resolve(technology: Option<&str>, frontend: Option<&str>, ui: Option<&str>) -> Self {
        if let Some(raw) = technology.map(str::trim).filter(|raw| !raw.is_empty()) {
            return raw.parse().unwrap_or_else(|_| {
                tracing::warn!(technology = raw, "Unknown technology, using default");
                Technology::default()
            });
        }

        if ui.is_some_and(|ui| ui.trim().eq_ignore_ascii_case("mantine")) {
            return Technology::Mantine;
        }

        match frontend.map(|frontend| frontend.trim().to_ascii_lowercase()) {
            Some(frontend) if frontend == "svelte" => Technology::Svelte,
            Some(frontend) if frontend == "vue" => Technology::Vue,
            _ => Technology::default(),
        }
    }
}
