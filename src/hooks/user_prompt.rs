// src/hooks/user_prompt.rs
// UserPromptSubmit hook handler - prepends the translator preface

use crate::error::Result;
use crate::hooks::{HookTimer, read_hook_input, write_hook_output};
use serde::Serialize;
use serde_json::Value;

/// Fixed translator instructions prepended to every prompt.
pub const INSTRUCTIONS: &str =
    "You are an expert translator with exceptional skill on Korean-English translation.\n\
     You must translate the given prompt to English first if the prompt is in Korean.\n\
     You must not change the meaning of the original Korean prompt.\n";

/// Title of the injected context block.
pub const INSTRUCTIONS_TITLE: &str = "Korean-English translator preface";

/// Event name Claude Code expects in `hookSpecificOutput`.
const HOOK_EVENT_NAME: &str = "UserPromptSubmit";

/// One injected context block.
#[derive(Debug, Serialize)]
pub struct ContextBlock {
    pub title: &'static str,
    pub content: &'static str,
}

/// `hookSpecificOutput` payload for UserPromptSubmit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPromptOutput {
    pub hook_event_name: &'static str,
    pub additional_context: Vec<ContextBlock>,
    pub modified_prompt: String,
}

/// Top-level response envelope read back by Claude Code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: UserPromptOutput,
}

/// Extract the prompt text from the hook input.
///
/// Strings are used verbatim. A missing key and JSON `null` coerce to the
/// empty string. Any other JSON value is rendered as its compact JSON text,
/// so whatever the host sent stays visible in the modified prompt.
fn prompt_text(input: &Value) -> String {
    match input.get("prompt") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Build the UserPromptSubmit response for a prompt.
fn build_output(prompt: &str) -> HookOutput {
    HookOutput {
        hook_specific_output: UserPromptOutput {
            hook_event_name: HOOK_EVENT_NAME,
            additional_context: vec![ContextBlock {
                title: INSTRUCTIONS_TITLE,
                content: INSTRUCTIONS,
            }],
            modified_prompt: format!("{INSTRUCTIONS}\n{prompt}"),
        },
    }
}

/// Run UserPromptSubmit hook
pub fn run() -> Result<()> {
    let _timer = HookTimer::start("UserPromptSubmit");

    let input = read_hook_input()?;

    let prompt = prompt_text(&input);
    tracing::debug!(
        "[tongyeok] UserPromptSubmit hook triggered (prompt length: {})",
        prompt.len()
    );
    tracing::debug!(
        "[tongyeok] Hook input keys: {:?}",
        input.as_object().map(|obj| obj.keys().collect::<Vec<_>>())
    );

    write_hook_output(&build_output(&prompt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn modified_prompt_prepends_preface() {
        let output = build_output("안녕하세요");
        assert_eq!(
            output.hook_specific_output.modified_prompt,
            format!("{INSTRUCTIONS}\n안녕하세요")
        );
    }

    #[test]
    fn empty_prompt_keeps_trailing_newline() {
        let output = build_output("");
        assert_eq!(
            output.hook_specific_output.modified_prompt,
            format!("{INSTRUCTIONS}\n")
        );
    }

    #[test]
    fn additional_context_is_single_block_matching_preface() {
        let output = build_output("hello");
        let blocks = &output.hook_specific_output.additional_context;
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title, INSTRUCTIONS_TITLE);
        assert_eq!(blocks[0].content, INSTRUCTIONS);
        assert!(
            output
                .hook_specific_output
                .modified_prompt
                .starts_with(blocks[0].content)
        );
    }

    #[test]
    fn preface_terminates_with_newline() {
        assert!(INSTRUCTIONS.ends_with('\n'));
    }

    #[test]
    fn serialized_output_uses_camel_case_keys() {
        let value = serde_json::to_value(build_output("hi")).unwrap();
        let inner = &value["hookSpecificOutput"];
        assert_eq!(inner["hookEventName"], "UserPromptSubmit");
        assert!(inner["additionalContext"].is_array());
        assert!(inner["modifiedPrompt"].is_string());
    }

    #[test]
    fn serialized_output_is_single_line() {
        let line = serde_json::to_string(&build_output("multi\nline\nprompt")).unwrap();
        assert!(!line.contains('\n'));
    }

    #[test]
    fn serialization_is_deterministic() {
        let a = serde_json::to_string(&build_output("같은 입력")).unwrap();
        let b = serde_json::to_string(&build_output("같은 입력")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn prompt_text_uses_string_verbatim() {
        let input = json!({"prompt": "  spaced  "});
        assert_eq!(prompt_text(&input), "  spaced  ");
    }

    #[test]
    fn prompt_text_defaults_missing_and_null_to_empty() {
        assert_eq!(prompt_text(&json!({})), "");
        assert_eq!(prompt_text(&json!({"prompt": null})), "");
    }

    #[test]
    fn prompt_text_coerces_non_string_values_to_json() {
        assert_eq!(prompt_text(&json!({"prompt": 42})), "42");
        assert_eq!(prompt_text(&json!({"prompt": true})), "true");
        assert_eq!(prompt_text(&json!({"prompt": ["a", "b"]})), r#"["a","b"]"#);
        assert_eq!(prompt_text(&json!({"prompt": {"k": 1}})), r#"{"k":1}"#);
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let input = json!({"session_id": "abc123", "prompt": "hello"});
        assert_eq!(prompt_text(&input), "hello");
    }
}
