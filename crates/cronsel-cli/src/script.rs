use std::{str::FromStr, time::Duration};

use anyhow::{Context, anyhow, bail};

use cronsel_model::{FieldType, FieldValue, Selection, parse_part};

/// One line of an interaction script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `click <value>`: option picked in the widget.
    Click(FieldValue),
    /// `unclick <value>`: option unpicked in the widget.
    Unclick(FieldValue),
    /// `wait <ms>`: let time pass.
    Wait(Duration),
    Clear,
    /// `set <cron part>`: owner replaces the selection (`set 1-5`, `set MON,FRI`).
    Set(Selection),
    /// `readonly on|off`
    ReadOnly(bool),
    /// Print current selection and its summary.
    Show,
    /// Print the option list.
    Options,
    /// Print collected metrics in text exposition format.
    Metrics,
}

impl Command {
    /// Parses one script line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str, field: FieldType) -> anyhow::Result<Option<Self>> {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();
        if let Some(extra) = words.next() {
            bail!("unexpected argument '{extra}' in '{line}'");
        }

        let cmd = match (verb.as_str(), arg) {
            ("click" | "c", Some(v)) => Command::Click(value(v, field)?),
            ("unclick" | "u", Some(v)) => Command::Unclick(value(v, field)?),
            ("wait" | "w", Some(ms)) => {
                let ms: u64 = ms.parse().with_context(|| format!("invalid wait '{ms}'"))?;
                Command::Wait(Duration::from_millis(ms))
            }
            ("set", Some(part)) => Command::Set(parse_part(part, field)?),
            ("readonly", Some(flag)) => Command::ReadOnly(on_off(flag)?),
            ("clear", None) => Command::Clear,
            ("show", None) => Command::Show,
            ("options", None) => Command::Options,
            ("metrics", None) => Command::Metrics,
            _ => bail!("unknown command '{line}'"),
        };
        Ok(Some(cmd))
    }
}

impl FromStr for Command {
    type Err = anyhow::Error;

    /// Parses a command for a numeric-only field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse_line(s, FieldType::Minutes)?.ok_or_else(|| anyhow!("empty command"))
    }
}

fn value(token: &str, field: FieldType) -> anyhow::Result<FieldValue> {
    if let Ok(v) = token.parse::<FieldValue>() {
        return Ok(v);
    }
    field
        .unit()
        .value_of(token)
        .ok_or_else(|| anyhow!("'{token}' is not a {field} value"))
}

fn on_off(token: &str) -> anyhow::Result<bool> {
    match token.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        other => bail!("expected on/off, got '{other}'"),
    }
}
