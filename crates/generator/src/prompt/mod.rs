use serde::{Deserialize, Serialize};

use crate::technology::{Framework, Technology};

mod examples;

use examples::ExampleSet;

pub const UNSPLASH_RANDOM_URL: &str = "https://source.unsplash.com/random";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

fn example_set(technology: Technology) -> &'static ExampleSet {
    match technology {
        Technology::Tailwind => &examples::REACT,
        Technology::Mantine => &examples::MANTINE,
        Technology::Svelte => &examples::SVELTE,
        Technology::Vue => &examples::VUE,
    }
}

fn system_prompt(technology: Technology) -> String {
    let framework = match technology.framework() {
        Framework::React => "React",
        Framework::Svelte => "Svelte",
        Framework::Vue => "Vue",
    };
    format!(
        "You are a Frontend developer who writes {framework} components. \
You answer with the source of a single self-contained component and nothing else."
    )
}

fn output_rules(technology: Technology) -> String {
    let mut rules = format!(
        "Please create the code that renders the following {label}, return code only and DO NOT wrap \
the code with ```, ```jsx, triple backtick, triple backquote or any other string character. \
Return code only without any instructions or text. The component should not receive any props. \
If images are used, please use random images from unsplash using the url {UNSPLASH_RANDOM_URL}.",
        label = technology.library_label(),
    );
    match technology {
        Technology::Mantine => rules.push_str(
            " Avoid using any theme from Mantine. If icons are needed, import them from @tabler/icons-react.",
        ),
        _ => rules.push_str(" Do not import icon or component libraries; use inline SVG instead."),
    }
    rules
}

/// Builds the few-shot conversation for a generation request. The user's text
/// is always the last message.
pub fn assemble_messages(
    text: &str,
    technology: Technology,
    current_code: Option<&str>,
) -> Vec<ChatMessage> {
    let label = technology.library_label();
    let set = example_set(technology);
    let shots = [
        (
            format!("Create a {label} code for a Button. Please return only code."),
            set.button,
        ),
        (
            format!(
                "Create a {label} code for a Button, with dark background color, generate text on it. Please return only code."
            ),
            set.styled_button,
        ),
        (
            format!(
                "Create a {label} code for a contact form with name, email and message fields. Please return only code."
            ),
            set.form,
        ),
        (
            format!("Create a {label} code for a monthly calendar. Please return only code."),
            set.calendar,
        ),
    ];

    let mut messages = Vec::with_capacity(shots.len() * 2 + 4);
    messages.push(ChatMessage::system(system_prompt(technology)));
    for (request, answer) in shots {
        messages.push(ChatMessage::user(request));
        messages.push(ChatMessage::assistant(answer));
    }
    messages.push(ChatMessage::user(output_rules(technology)));

    if let Some(code) = current_code.map(str::trim).filter(|code| !code.is_empty()) {
        messages.push(ChatMessage::assistant(code));
    }

    messages.push(ChatMessage::user(text));
    messages
}

/// Conversation for the second, self-critique round-trip.
pub fn critique_messages(code: &str, technology: Technology) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt(technology)),
        ChatMessage::user(format!(
            "Review the following {label} code as a senior reviewer. Fix bugs, missing imports, \
broken markup and accessibility problems, and remove any dependency that is not part of the \
allowed stack. Keep the same component and behaviour. Return only the complete improved code, \
without explanations and without ``` fences.",
            label = technology.library_label(),
        )),
        ChatMessage::user(code.to_string()),
    ]
}
