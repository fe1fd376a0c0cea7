//! Breakdown of an escape sequence into annotated parts
//!
//! Produces the ordered list of fragments shown in an explanation view:
//! the escape marker, `[`, the optional private marker, each parameter
//! with its separators, and the final command character.

use serde::{Deserialize, Serialize};

use super::classify::command_description;
use super::sgr::{self, ParamRole};
use crate::parser::Introducer;

/// Kind of a [`TokenPart`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    Marker,
    Parameter,
    Command,
    Separator,
}

/// Whether a parameter has a recognized meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartStatus {
    Valid,
    Error,
}

/// One fragment of an escape sequence breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenPart {
    Marker {
        value: String,
        label: String,
        description: String,
    },
    Parameter {
        /// Literal field text; empty for an omitted value
        value: String,
        /// The parsed number
        label: String,
        description: String,
        status: PartStatus,
    },
    Separator {
        value: String,
    },
    Command {
        value: String,
        description: String,
    },
}

const SEPARATOR_DESCRIPTION: &str = "Parameter Separator.";

impl TokenPart {
    pub fn kind(&self) -> PartKind {
        match self {
            TokenPart::Marker { .. } => PartKind::Marker,
            TokenPart::Parameter { .. } => PartKind::Parameter,
            TokenPart::Separator { .. } => PartKind::Separator,
            TokenPart::Command { .. } => PartKind::Command,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            TokenPart::Marker { value, .. }
            | TokenPart::Parameter { value, .. }
            | TokenPart::Separator { value }
            | TokenPart::Command { value, .. } => value,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TokenPart::Marker { label, .. } | TokenPart::Parameter { label, .. } => label,
            TokenPart::Separator { value } | TokenPart::Command { value, .. } => value,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            TokenPart::Marker { description, .. }
            | TokenPart::Parameter { description, .. }
            | TokenPart::Command { description, .. } => description,
            TokenPart::Separator { .. } => SEPARATOR_DESCRIPTION,
        }
    }

    /// `Error` only for parameters without a recognized meaning
    pub fn status(&self) -> PartStatus {
        match self {
            TokenPart::Parameter { status, .. } => *status,
            _ => PartStatus::Valid,
        }
    }
}

/// Break a matched sequence into its parts.
///
/// `raw` is the full matched text; `params` are the values parsed from it
/// (including the implied `0` of a bare `m`).
pub fn explain(
    raw: &str,
    command: char,
    params: &[u32],
    private_marker: Option<char>,
) -> Vec<TokenPart> {
    let mut parts = Vec::with_capacity(4 + params.len() * 2);

    let csi_index = raw.find('[').unwrap_or(0);
    let prefix = &raw[..csi_index];
    parts.push(TokenPart::Marker {
        value: prefix.to_string(),
        label: "ESC".to_string(),
        description: escape_description(prefix),
    });

    parts.push(TokenPart::Marker {
        value: "[".to_string(),
        label: "[".to_string(),
        description: "Control Sequence Introducer (CSI). Starts the command arguments."
            .to_string(),
    });

    if let Some(marker) = private_marker {
        parts.push(TokenPart::Marker {
            value: marker.to_string(),
            label: "DEC".to_string(),
            description: "DEC Private Mode Indicator.".to_string(),
        });
    }

    let fields = param_fields(raw, csi_index, command, private_marker);
    let roles = param_roles(command, params, private_marker);

    for (index, (&param, role)) in params.iter().zip(roles).enumerate() {
        if index > 0 {
            parts.push(TokenPart::Separator {
                value: ";".to_string(),
            });
        }
        parts.push(TokenPart::Parameter {
            value: fields.get(index).copied().unwrap_or_default().to_string(),
            label: param.to_string(),
            description: role.description,
            status: if role.recognized {
                PartStatus::Valid
            } else {
                PartStatus::Error
            },
        });
    }

    parts.push(TokenPart::Command {
        value: command.to_string(),
        description: format!(
            "Command Letter: {}",
            command_description(command, private_marker)
        ),
    });

    parts
}

fn escape_description(prefix: &str) -> String {
    let base = "Escape Character (ASCII 27 / Hex 1B). Signals the start of a sequence.";
    match Introducer::from_text(prefix) {
        Some(introducer) => format!("{base} Written as the {}.", introducer.spelling()),
        None => base.to_string(),
    }
}

/// Literal `;`-separated fields of the parameter text
fn param_fields(
    raw: &str,
    csi_index: usize,
    command: char,
    private_marker: Option<char>,
) -> Vec<&str> {
    let start = csi_index + 1 + private_marker.map_or(0, char::len_utf8);
    let end = raw.len().saturating_sub(command.len_utf8());
    match raw.get(start..end) {
        Some("") | None => Vec::new(),
        Some(text) => text.split(';').collect(),
    }
}

/// One role per parameter, in order
fn param_roles(command: char, params: &[u32], private_marker: Option<char>) -> Vec<ParamRole> {
    if command == 'm' {
        return sgr::decode(params)
            .iter()
            .flat_map(|code| code.roles(params))
            .collect();
    }

    params
        .iter()
        .enumerate()
        .map(|(index, &value)| non_sgr_role(command, index, value, private_marker))
        .collect()
}

fn non_sgr_role(command: char, index: usize, value: u32, private_marker: Option<char>) -> ParamRole {
    let (description, recognized) = match (command, index) {
        ('A' | 'B' | 'C' | 'D' | 'E' | 'F', 0) => {
            (format!("Count: {} (0 or omitted means 1)", value.max(1)), true)
        }
        ('G', 0) => (format!("Column: {}", value.max(1)), true),
        ('H' | 'f', 0) => (format!("Row: {}", value.max(1)), true),
        ('H' | 'f', 1) => (format!("Column: {}", value.max(1)), true),
        ('J' | 'K', 0) => match value {
            0 => ("Erase Mode 0: From cursor to end".to_string(), true),
            1 => ("Erase Mode 1: From start to cursor".to_string(), true),
            2 => ("Erase Mode 2: Entire area".to_string(), true),
            other => (format!("Erase Mode {other} - Not recognized"), false),
        },
        ('h' | 'l', 0) if private_marker == Some('?') => match value {
            25 => ("Mode 25: Cursor Visibility (DECTCEM)".to_string(), true),
            1049 => ("Mode 1049: Alternate Screen Buffer".to_string(), true),
            2004 => ("Mode 2004: Bracketed Paste".to_string(), true),
            other => (format!("Private Mode {other} - Not recognized"), false),
        },
        ('h' | 'l', 0) => (format!("ANSI Mode {value} - Not recognized"), false),
        ('~', 0) => match value {
            1..=6 => (format!("Key Code {value}"), true),
            other => (format!("Key Code {other} - Not recognized"), false),
        },
        _ => (format!("Parameter Value {value} - Not used by this command"), false),
    };
    ParamRole {
        description,
        recognized,
    }
}
