//! Built-in phrase tables used when a configuration omits a section.
//!
//! Declaration order is significant for every table: corrections apply in
//! this order, and both matchers resolve to the first qualifying entry.

use vx_protocol::{CorrectionRule, IntentDefinition, MetaCommandDefinition};

/// Speech-to-text mis-segmentations and homophones seen in coding dictation.
pub fn corrections() -> Vec<CorrectionRule> {
    vec![
        CorrectionRule::new("exit cute", "execute"),
        CorrectionRule::new("in stall", "install"),
        CorrectionRule::new("term null", "terminal"),
        // "the lead" first, or "d lead" matches the tail of "the lead lead".
        CorrectionRule::new("the lead", "delete"),
        CorrectionRule::new("d lead", "delete"),
        // Matched as a literal substring, so "shred the file" becomes
        // "shread the file". A bare "red the" would also catch "shred the".
        CorrectionRule::new("red the file", "read the file"),
        CorrectionRule::new("pie thon", "python"),
        CorrectionRule::new("java script", "javascript"),
        CorrectionRule::new("get hub", "github"),
    ]
}

/// Interface control phrases. `reset` is checked before everything else.
pub fn meta_commands() -> Vec<MetaCommandDefinition> {
    vec![
        MetaCommandDefinition::new("reset", &["reset", "clear", "start over", "new conversation"]),
        MetaCommandDefinition::new(
            "save",
            &["save conversation", "save the conversation", "save this conversation"],
        ),
        MetaCommandDefinition::new("scroll_up", &["scroll up"]),
        MetaCommandDefinition::new("scroll_down", &["scroll down"]),
        MetaCommandDefinition::new("copy", &["copy that", "copy response", "copy last response"]),
        MetaCommandDefinition::new("stop_speaking", &["stop talking", "be quiet"]),
    ]
}

/// Task intents. Destructive or side-effecting intents carry a 0.7 floor.
pub fn intents() -> Vec<IntentDefinition> {
    vec![
        IntentDefinition::new("file_read", &["read", "open", "show"], &["file"]),
        IntentDefinition::new("file_write", &["write", "create", "save"], &["file"]),
        IntentDefinition::new(
            "file_edit",
            &["edit", "modify", "change", "fix"],
            &["file", "code"],
        ),
        IntentDefinition::new("search", &["search", "find", "grep"], &["code"]),
        IntentDefinition::new("execute", &["run", "execute"], &["command", "script"])
            .with_floor(0.7),
        IntentDefinition::new("install", &["install", "setup"], &["package"]),
        IntentDefinition::new("delete", &["delete", "remove"], &["file", "folder"])
            .with_floor(0.7),
        IntentDefinition::new("terminal", &["terminal", "shell"], &["window"]),
        IntentDefinition::new("git", &["commit", "push", "pull"], &["changes"]),
    ]
}
