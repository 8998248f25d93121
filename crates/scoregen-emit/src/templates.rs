use scoregen_core::config::GenConfig;
use scoregen_core::errors::{ErrorInfo, ScoregenError};
use scoregen_core::ActionKind;

/// Placeholders a line template may reference.
const LINE_PLACEHOLDERS: [&str; 3] = ["obj", "criterion", "hook"];
/// Placeholders a criterion template may reference.
const CRITERION_PLACEHOLDERS: [&str; 1] = ["id"];

/// Generation-time line formats for one action kind.
///
/// Defaults reproduce the shipped hook wiring; a config `[templates.<kind>]`
/// table can replace individual formats. Templates are validated up front so
/// a typo'd placeholder fails the run before any artifact is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    /// Statistic criterion the installed objective counts (`{id}`).
    pub criterion: String,
    /// Objective installation line (`{obj}`, `{criterion}`).
    pub install: String,
    /// Detection trigger line of the check artifact (`{obj}`, `{hook}`).
    pub check_trigger: String,
    /// Counter reset line of the check artifact (`{obj}`).
    pub check_reset: String,
    /// Objective removal line (`{obj}`).
    pub uninstall: String,
}

impl TemplateSet {
    /// The built-in formats for an action kind.
    pub fn defaults(kind: ActionKind) -> Self {
        let criterion = match kind {
            ActionKind::Break => "minecraft.mined:{id}",
            ActionKind::Place => "minecraft.used:{id}",
        };
        Self {
            criterion: criterion.into(),
            install: "scoreboard objectives add {obj} {criterion}".into(),
            check_trigger: "execute as @a[scores={{obj}=1..}] run function {hook}".into(),
            check_reset: "execute as @a[scores={{obj}=1..}] run scoreboard players set @s {obj} 0"
                .into(),
            uninstall: "scoreboard objectives remove {obj}".into(),
        }
    }

    /// Merges configured overrides onto the defaults and validates the result.
    pub fn from_config(kind: ActionKind, config: &GenConfig) -> Result<Self, ScoregenError> {
        let mut set = Self::defaults(kind);
        if let Some(over) = config.templates.get(kind.as_str()) {
            if let Some(criterion) = &over.criterion {
                set.criterion = criterion.clone();
            }
            if let Some(install) = &over.install {
                set.install = install.clone();
            }
            if let Some(check_trigger) = &over.check_trigger {
                set.check_trigger = check_trigger.clone();
            }
            if let Some(check_reset) = &over.check_reset {
                set.check_reset = check_reset.clone();
            }
            if let Some(uninstall) = &over.uninstall {
                set.uninstall = uninstall.clone();
            }
        }
        set.validate()?;
        Ok(set)
    }

    fn validate(&self) -> Result<(), ScoregenError> {
        check_placeholders(&self.criterion, &CRITERION_PLACEHOLDERS)?;
        for template in [
            &self.install,
            &self.check_trigger,
            &self.check_reset,
            &self.uninstall,
        ] {
            check_placeholders(template, &LINE_PLACEHOLDERS)?;
        }
        Ok(())
    }

    pub(crate) fn render_criterion(&self, stat_key: &str) -> String {
        self.criterion.replace("{id}", stat_key)
    }
}

pub(crate) fn render_line(template: &str, obj: &str, criterion: &str, hook: &str) -> String {
    template
        .replace("{obj}", obj)
        .replace("{criterion}", criterion)
        .replace("{hook}", hook)
}

fn check_placeholders(template: &str, known: &[&str]) -> Result<(), ScoregenError> {
    for token in placeholder_tokens(template) {
        if !known.contains(&token) {
            return Err(ScoregenError::Template(
                ErrorInfo::new("template-placeholder", "unknown placeholder in line template")
                    .with_context("placeholder", token)
                    .with_context("template", template),
            ));
        }
    }
    Ok(())
}

/// Extracts `{word}` tokens where `word` is `[a-z_]+`. Literal selector
/// braces (`{terr.break.0=1..}`) contain other characters and never match.
fn placeholder_tokens(template: &str) -> Vec<&str> {
    let bytes = template.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'{' {
            let mut j = i + 1;
            while j < bytes.len() && (bytes[j].is_ascii_lowercase() || bytes[j] == b'_') {
                j += 1;
            }
            if j > i + 1 && j < bytes.len() && bytes[j] == b'}' {
                tokens.push(&template[i + 1..j]);
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }
    tokens
}
