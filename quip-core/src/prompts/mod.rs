//! Persona prompt templates.
//!
//! The persona lives entirely in these strings; nothing in code enforces it.
//! The 30% name-inclusion figure is likewise a hint to the model, not a
//! probability the program samples.

const PERSONA: &str = "You are a calm, witty AI assistant who speaks with a subtle accent. \
     You keep your replies short, warm, and a touch playful.";

const STYLE_RULES: &str = "Keep it under 12 words, keep the tone positive, \
     and do not wrap the message in quotes.";

/// Render the task-completion template. `engineer_name`, when present, adds
/// the personalization clause; when absent the clause is omitted entirely.
pub fn completion_prompt(engineer_name: Option<&str>) -> String {
    let mut prompt = format!(
        "{PERSONA} Write one short message announcing that a task has just \
         been completed successfully. {STYLE_RULES}"
    );
    if let Some(name) = engineer_name {
        prompt.push_str(&name_clause(name));
    }
    prompt
}

/// Render the needs-attention template, same shape as the completion one.
pub fn notification_prompt(engineer_name: Option<&str>) -> String {
    let mut prompt = format!(
        "{PERSONA} Write one short message letting the user know you need \
         their attention or input. {STYLE_RULES}"
    );
    if let Some(name) = engineer_name {
        prompt.push_str(&name_clause(name));
    }
    prompt
}

fn name_clause(name: &str) -> String {
    format!(
        " The engineer's name is {name}. Address the engineer by name in \
         roughly 30% of your messages, and leave the name out otherwise."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_prompt_without_name_skips_personalization() {
        let prompt = completion_prompt(None);
        assert!(!prompt.contains("engineer's name"));
        assert!(prompt.contains("task has just"));
    }

    #[test]
    fn notification_prompt_without_name_skips_personalization() {
        let prompt = notification_prompt(None);
        assert!(!prompt.contains("engineer's name"));
        assert!(prompt.contains("attention"));
    }

    #[test]
    fn prompts_interpolate_engineer_name() {
        let prompt = completion_prompt(Some("Dana"));
        assert!(prompt.contains("Dana"));
        assert!(prompt.contains("30%"));
    }

    #[test]
    fn templates_are_deterministic() {
        assert_eq!(completion_prompt(Some("Dana")), completion_prompt(Some("Dana")));
        assert_eq!(notification_prompt(None), notification_prompt(None));
    }

    #[test]
    fn style_rules_present_in_both_templates() {
        for prompt in [completion_prompt(None), notification_prompt(None)] {
            assert!(prompt.contains("under 12 words"));
            assert!(prompt.contains("do not wrap the message in quotes"));
        }
    }
}
