//! Line-oriented viewer event scripts for headless replay.
//!
//! ```text
//! # open the central scan and nudge it
//! select 1
//! down 10 10
//! move 30 40
//! up
//! wheel -1
//! zoom out
//! reset
//! section gallery
//! ```

use tracing::debug;

use crate::console::{Console, Section};
use crate::error::{FlexscopeError, Result};
use crate::input::{dispatch, ViewportEvent};
use crate::viewport::{ViewportTransform, ZoomDirection};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Select(u32),
    Section(Section),
    Event(ViewportEvent),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScriptStep {
    /// 1-based source line.
    pub line: usize,
    pub text: String,
    pub command: Command,
}

/// State of the viewer after one replayed step.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplayFrame {
    pub line: usize,
    pub step: String,
    pub section: Section,
    /// `None` when no viewport is active.
    pub transform: Option<ViewportTransform>,
    pub dragging: bool,
}

pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        let command = parse_line(text).map_err(|message| FlexscopeError::Script { line, message })?;
        steps.push(ScriptStep {
            line,
            text: text.to_string(),
            command,
        });
    }
    Ok(steps)
}

fn parse_line(text: &str) -> std::result::Result<Command, String> {
    let mut words = text.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let command = match keyword.as_str() {
        "select" => {
            let [id] = expect_args::<1>(&keyword, &args)?;
            let id = id
                .parse::<u32>()
                .map_err(|_| format!("invalid image id '{id}'"))?;
            Command::Select(id)
        }
        "section" => {
            let [name] = expect_args::<1>(&keyword, &args)?;
            Command::Section(name.parse::<Section>().map_err(|e| e.to_string())?)
        }
        "down" => {
            let [x, y] = expect_args::<2>(&keyword, &args)?;
            Command::Event(ViewportEvent::PointerDown {
                x: number(x)?,
                y: number(y)?,
            })
        }
        "move" => {
            let [x, y] = expect_args::<2>(&keyword, &args)?;
            Command::Event(ViewportEvent::PointerMove {
                x: number(x)?,
                y: number(y)?,
            })
        }
        "up" => {
            expect_args::<0>(&keyword, &args)?;
            Command::Event(ViewportEvent::PointerUp)
        }
        "leave" => {
            expect_args::<0>(&keyword, &args)?;
            Command::Event(ViewportEvent::PointerLeave)
        }
        "wheel" => {
            let [dy] = expect_args::<1>(&keyword, &args)?;
            Command::Event(ViewportEvent::Wheel { delta_y: number(dy)? })
        }
        "zoom" => {
            let [dir] = expect_args::<1>(&keyword, &args)?;
            Command::Event(ViewportEvent::ZoomButton(dir.parse::<ZoomDirection>()?))
        }
        "reset" => {
            expect_args::<0>(&keyword, &args)?;
            Command::Event(ViewportEvent::Reset)
        }
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(command)
}

fn expect_args<'a, const N: usize>(
    keyword: &str,
    args: &[&'a str],
) -> std::result::Result<[&'a str; N], String> {
    <[&str; N]>::try_from(args)
        .map_err(|_| format!("'{keyword}' takes {N} argument(s), got {}", args.len()))
}

fn number(s: &str) -> std::result::Result<f64, String> {
    s.parse::<f64>().map_err(|_| format!("invalid number '{s}'"))
}

/// Run `steps` against `console`, recording the viewer after each step.
///
/// Viewport events arriving while no image is on screen are dropped, the
/// same way a host has no surface to route them to.
pub fn replay(console: &mut Console, steps: &[ScriptStep]) -> Result<Vec<ReplayFrame>> {
    let mut frames = Vec::with_capacity(steps.len());
    for step in steps {
        match step.command {
            Command::Select(id) => console.open_image(id)?,
            Command::Section(section) => console.set_section(section),
            Command::Event(event) => match console.viewport_mut() {
                Some(viewport) => {
                    dispatch(viewport, event).map_err(|e| FlexscopeError::Script {
                        line: step.line,
                        message: e.to_string(),
                    })?;
                }
                None => debug!(line = step.line, "no active viewport, event dropped"),
            },
        }

        let viewport = console.viewport();
        frames.push(ReplayFrame {
            line: step.line,
            step: step.text.clone(),
            section: console.active_section(),
            transform: viewport.map(|v| v.current_transform()),
            dragging: viewport.is_some_and(|v| v.is_dragging()),
        });
    }
    Ok(frames)
}
