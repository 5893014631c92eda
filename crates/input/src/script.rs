//! Command scripts: one command per line.
//!
//! ```text
//! # drop an I piece into the left corner
//! rotate
//! left
//! left
//! tick 0.5
//! drop
//! ```
//!
//! Blank lines and everything after `#` are ignored. Command names are
//! case-insensitive and accept the aliases of [`Command::from_str`]; `tick`
//! takes a non-negative duration in seconds.

use thiserror::Error;

use crate::types::Command;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: `tick` needs a duration in seconds")]
    MissingDuration { line: usize },
    #[error("line {line}: invalid tick duration `{value}`")]
    InvalidDuration { line: usize, value: String },
    #[error("line {line}: unexpected argument `{value}` after `{command}`")]
    UnexpectedArgument {
        line: usize,
        command: String,
        value: String,
    },
}

/// Parse a single script line.
///
/// Returns `Ok(None)` for blank and comment-only lines. `line` is the 1-based
/// line number used in errors.
pub fn parse_command(text: &str, line: usize) -> Result<Option<Command>, ScriptError> {
    let text = match text.find('#') {
        Some(idx) => &text[..idx],
        None => text,
    };
    let mut words = text.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    if let Some(extra) = words.next() {
        return Err(ScriptError::UnexpectedArgument {
            line,
            command: name.to_string(),
            value: extra.to_string(),
        });
    }

    if name.eq_ignore_ascii_case("tick") {
        let value = arg.ok_or(ScriptError::MissingDuration { line })?;
        let secs: f64 = value.parse().map_err(|_| ScriptError::InvalidDuration {
            line,
            value: value.to_string(),
        })?;
        if !secs.is_finite() || secs < 0.0 {
            return Err(ScriptError::InvalidDuration {
                line,
                value: value.to_string(),
            });
        }
        return Ok(Some(Command::Tick(secs)));
    }

    let command = Command::from_str(name).ok_or_else(|| ScriptError::UnknownCommand {
        line,
        command: name.to_string(),
    })?;
    if let Some(value) = arg {
        return Err(ScriptError::UnexpectedArgument {
            line,
            command: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(Some(command))
}

/// Parse a whole script, stopping at the first bad line
pub fn parse_script(text: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(command) = parse_command(line, idx + 1)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("left", 1), Ok(Some(Command::MoveLeft)));
        assert_eq!(parse_command("  Right  ", 1), Ok(Some(Command::MoveRight)));
        assert_eq!(
            parse_command("rotateClockwise", 1),
            Ok(Some(Command::RotateClockwise))
        );
        assert_eq!(parse_command("down", 1), Ok(Some(Command::SoftDropOneCell)));
        assert_eq!(parse_command("drop", 1), Ok(Some(Command::HardDropToBottom)));
        assert_eq!(parse_command("restart", 1), Ok(Some(Command::Restart)));
    }

    #[test]
    fn test_parse_tick() {
        assert_eq!(parse_command("tick 0.5", 1), Ok(Some(Command::Tick(0.5))));
        assert_eq!(parse_command("TICK 2", 1), Ok(Some(Command::Tick(2.0))));
        assert_eq!(
            parse_command("tick", 4),
            Err(ScriptError::MissingDuration { line: 4 })
        );
        assert_eq!(
            parse_command("tick -1", 5),
            Err(ScriptError::InvalidDuration {
                line: 5,
                value: "-1".to_string()
            })
        );
        assert!(parse_command("tick soon", 1).is_err());
        assert!(parse_command("tick NaN", 1).is_err());
    }

    #[test]
    fn test_comments_and_blanks() {
        assert_eq!(parse_command("", 1), Ok(None));
        assert_eq!(parse_command("   ", 1), Ok(None));
        assert_eq!(parse_command("# just a note", 1), Ok(None));
        assert_eq!(
            parse_command("left # nudge", 1),
            Ok(Some(Command::MoveLeft))
        );
    }

    #[test]
    fn test_unknown_and_extra_arguments() {
        assert_eq!(
            parse_command("hold", 3),
            Err(ScriptError::UnknownCommand {
                line: 3,
                command: "hold".to_string()
            })
        );
        assert!(matches!(
            parse_command("left 2", 1),
            Err(ScriptError::UnexpectedArgument { .. })
        ));
        assert!(matches!(
            parse_command("tick 1 2", 1),
            Err(ScriptError::UnexpectedArgument { .. })
        ));
    }

    #[test]
    fn test_parse_script_reports_line_numbers() {
        let script = "# opening\nleft\n\nrotate\ntick 0.25\ndrop\n";
        assert_eq!(
            parse_script(script),
            Ok(vec![
                Command::MoveLeft,
                Command::RotateClockwise,
                Command::Tick(0.25),
                Command::HardDropToBottom,
            ])
        );

        let err = parse_script("left\nright\nspin\n").unwrap_err();
        assert_eq!(err.to_string(), "line 3: unknown command `spin`");
    }
}
