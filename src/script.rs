//! Line-oriented event scripts for driving a [`DrawingSurface`] without a UI.
//!
//! Each non-empty line is one command; `#` starts a comment.
//!
//! ```text
//! tool rectangle
//! color #e74c3c
//! width 8
//! fill on
//! down 10 10
//! move 50 80
//! up
//! export
//! ```

use crate::draw::Color;
use crate::export::{ExportError, ExportFormat, ExportedImage};
use crate::input::{DrawingSurface, PointerEvent, Tool};
use log::debug;
use thiserror::Error;

/// A script line that could not be parsed.
#[derive(Debug, Error, PartialEq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

/// One scripted action.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    SetTool(Tool),
    SetColor(Color),
    SetWidth(f64),
    SetFill(bool),
    Pointer(PointerEvent),
    Clear,
    Export,
}

/// Parses a whole script.
pub fn parse(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = strip_comment(raw);
        if line.is_empty() {
            continue;
        }
        let command = parse_line(line).map_err(|message| ScriptError {
            line: index + 1,
            message,
        })?;
        commands.push(command);
    }
    Ok(commands)
}

/// Removes a comment and surrounding whitespace.
///
/// A `#` opens a comment at the start of a line or when it stands alone as a word,
/// so hex colors such as `#00f` survive.
fn strip_comment(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.starts_with('#') {
        return "";
    }
    let bytes = trimmed.as_bytes();
    let comment = bytes.iter().enumerate().position(|(i, &b)| {
        b == b'#'
            && bytes[i - 1].is_ascii_whitespace()
            && bytes.get(i + 1).is_none_or(|next| next.is_ascii_whitespace())
    });
    match comment {
        Some(pos) => trimmed[..pos].trim_end(),
        None => trimmed,
    }
}

fn parse_line(line: &str) -> Result<ScriptCommand, String> {
    let (keyword, rest) = line
        .split_once(char::is_whitespace)
        .map(|(k, r)| (k, r.trim()))
        .unwrap_or((line, ""));

    let command = match keyword.to_ascii_lowercase().as_str() {
        "tool" => ScriptCommand::SetTool(rest.parse()?),
        "color" => ScriptCommand::SetColor(rest.parse().map_err(|e| format!("{e}"))?),
        "width" => {
            let width: f64 = rest
                .parse()
                .map_err(|_| format!("invalid width '{rest}'"))?;
            if !width.is_finite() || width <= 0.0 {
                return Err(format!("width must be positive, got {rest}"));
            }
            ScriptCommand::SetWidth(width)
        }
        "fill" => ScriptCommand::SetFill(parse_switch(rest)?),
        "down" => {
            let (x, y) = parse_point(rest)?;
            ScriptCommand::Pointer(PointerEvent::Down { x, y })
        }
        "move" => {
            let (x, y) = parse_point(rest)?;
            ScriptCommand::Pointer(PointerEvent::Move { x, y })
        }
        "up" => no_args(rest, ScriptCommand::Pointer(PointerEvent::Up))?,
        "cancel" => no_args(rest, ScriptCommand::Pointer(PointerEvent::Cancel))?,
        "clear" => no_args(rest, ScriptCommand::Clear)?,
        "export" => no_args(rest, ScriptCommand::Export)?,
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(command)
}

fn no_args(rest: &str, command: ScriptCommand) -> Result<ScriptCommand, String> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(format!("unexpected arguments '{rest}'"))
    }
}

fn parse_switch(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(format!("expected on/off, got '{other}'")),
    }
}

fn parse_point(rest: &str) -> Result<(f64, f64), String> {
    let coords: Vec<&str> = rest.split_whitespace().collect();
    let [x, y] = coords.as_slice() else {
        return Err(format!("expected two coordinates, got '{rest}'"));
    };
    let parse = |s: &str| {
        s.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("invalid coordinate '{s}'"))
    };
    Ok((parse(x)?, parse(y)?))
}

/// Applies commands to `surface` in order, collecting one image per `export`.
///
/// When the script never exports, the final surface is exported once.
pub fn replay(
    surface: &mut DrawingSurface,
    commands: &[ScriptCommand],
    format: ExportFormat,
) -> Result<Vec<ExportedImage>, ExportError> {
    let mut exports = Vec::new();
    for command in commands {
        match command {
            ScriptCommand::SetTool(tool) => surface.set_tool(*tool),
            ScriptCommand::SetColor(color) => surface.set_color(*color),
            ScriptCommand::SetWidth(width) => surface.set_width(*width),
            ScriptCommand::SetFill(fill) => surface.set_fill_enabled(*fill),
            ScriptCommand::Pointer(event) => surface.handle_pointer(*event),
            ScriptCommand::Clear => surface.clear(),
            ScriptCommand::Export => exports.push(surface.export_image(format)?),
        }
    }
    if exports.is_empty() {
        debug!("Script has no export command; exporting final surface");
        exports.push(surface.export_image(format)?);
    }
    Ok(exports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, WHITE};
    use crate::input::PenSettings;

    #[test]
    fn parses_every_command() {
        let script = "\
# a comment
tool circle
color #00f   # trailing comment
width 3.5
fill on

down 1 2
move 3.5 -4
up
cancel
clear
export
";
        let commands = parse(script).unwrap();
        assert_eq!(
            commands,
            vec![
                ScriptCommand::SetTool(Tool::Circle),
                ScriptCommand::SetColor(BLUE),
                ScriptCommand::SetWidth(3.5),
                ScriptCommand::SetFill(true),
                ScriptCommand::Pointer(PointerEvent::Down { x: 1.0, y: 2.0 }),
                ScriptCommand::Pointer(PointerEvent::Move { x: 3.5, y: -4.0 }),
                ScriptCommand::Pointer(PointerEvent::Up),
                ScriptCommand::Pointer(PointerEvent::Cancel),
                ScriptCommand::Clear,
                ScriptCommand::Export,
            ]
        );
    }

    #[test]
    fn functional_colors_keep_spaces() {
        let commands = parse("color rgb(0, 0, 255)").unwrap();
        assert_eq!(commands, vec![ScriptCommand::SetColor(BLUE)]);
    }

    #[test]
    fn errors_carry_line_numbers() {
        let err = parse("tool brush\n\nmove 1\n").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(err.message.contains("two coordinates"));

        assert_eq!(parse("lasso").unwrap_err().line, 1);
        assert!(parse("width 0").is_err());
        assert!(parse("width -2").is_err());
        assert!(parse("fill maybe").is_err());
        assert!(parse("up now").is_err());
        assert!(parse("down NaN 3").is_err());
    }

    #[test]
    fn replay_exports_at_each_export_command() {
        let mut surface =
            DrawingSurface::new(40, 40, PenSettings::default(), WHITE).unwrap();
        let commands = parse("down 0 20\nmove 40 20\nup\nexport\nclear\nexport\n").unwrap();

        let exports = replay(&mut surface, &commands, ExportFormat::Png).unwrap();
        assert_eq!(exports.len(), 2);
        assert_ne!(exports[0].bytes, exports[1].bytes);
        assert_ne!(exports[0].filename, exports[1].filename);
    }

    #[test]
    fn replay_without_export_exports_once() {
        let mut surface =
            DrawingSurface::new(16, 16, PenSettings::default(), WHITE).unwrap();
        let exports = replay(&mut surface, &[], ExportFormat::Jpeg).unwrap();
        assert_eq!(exports.len(), 1);
        assert!(exports[0].filename.ends_with(".jpg"));
    }
}
