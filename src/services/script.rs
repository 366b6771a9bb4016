use crate::form::Field;
use anyhow::{anyhow, Context, Result};

/// One step of a headless script.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptStep {
    Set(Field, String),
    Toggle,
    Commit,
    Reset,
}

/// Parses a `;`-separated script such as
/// `set sample_size=30; toggle; commit`.
///
/// Values are taken verbatim after `=`, so `set sample_mean= 5` stores `" 5"`.
pub fn parse_script(src: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (i, raw) in src.split(';').enumerate() {
        let step = raw.trim_start();
        if step.trim().is_empty() {
            continue;
        }
        let parsed = parse_step(step).with_context(|| format!("script step #{}", i + 1))?;
        steps.push(parsed);
    }
    Ok(steps)
}

fn parse_step(step: &str) -> Result<ScriptStep> {
    if let Some(rest) = step.strip_prefix("set ") {
        let (key, value) = rest
            .split_once('=')
            .ok_or_else(|| anyhow!("expected `set <field>=<value>`, got {step:?}"))?;
        let field = Field::from_key(key.trim())
            .ok_or_else(|| anyhow!("unknown field {:?}", key.trim()))?;
        return Ok(ScriptStep::Set(field, value.to_string()));
    }
    match step.trim_end() {
        "toggle" => Ok(ScriptStep::Toggle),
        "commit" => Ok(ScriptStep::Commit),
        "reset" => Ok(ScriptStep::Reset),
        other => Err(anyhow!("unknown step {other:?}")),
    }
}
