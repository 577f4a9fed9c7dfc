//! Line-driven picker session.
//!
//! Each input line is one user action (a slider move, a click on the
//! canvas, text typed into a field). The session feeds it to a [`Picker`]
//! and prints what the widget would now show.

use std::io::{self, BufRead, Write};

use rand::thread_rng;
use tracing::debug;

use crate::color::Color;
use crate::config::OutputFormat;
use crate::gradient::Canvas;
use crate::picker::Picker;
use crate::report::Report;
use crate::space::ColorFormat;

pub const HELP: &str = "\
Commands:
  slider <0-1529>        move the hue slider
  pick <x> <y>           click the canvas
  alpha <0-1>            set opacity
  alpha-step <0-255>     move the alpha slider
  rgb|hex|hsl|hsv|hsi <text>
                         type into a color field
  <text>                 any color, format detected
  random                 random hue and cursor
  show                   print the current color
  help                   this text
  quit                   leave";

/// What a line did.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Report(Box<Report>),
    /// Input was understood as a color but rejected; nothing changed.
    Unchanged,
    Message(String),
    Quit,
}

pub struct Session {
    pub picker: Picker,
    pub canvas: Canvas,
    pub output: OutputFormat,
}

impl Session {
    pub fn new(canvas: Canvas, output: OutputFormat) -> Self {
        Self {
            picker: Picker::new(&canvas),
            canvas,
            output,
        }
    }

    fn report(&self) -> Reply {
        Reply::Report(Box::new(Report::of(&self.picker)))
    }

    /// Apply one input line to the picker.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_ascii_lowercase().as_str() {
            "" => Reply::Message(String::new()),
            "quit" | "exit" | "q" => Reply::Quit,
            "help" | "?" => Reply::Message(HELP.to_string()),
            "show" => self.report(),
            "random" => {
                self.picker = Picker::random(&self.canvas, &mut thread_rng());
                self.report()
            }
            "slider" => match rest.parse::<u16>() {
                Ok(position) => {
                    self.picker.set_from_slider(position, &self.canvas);
                    self.report()
                }
                Err(_) => Reply::Message(format!("slider: expected 0-1529, got '{}'", rest)),
            },
            "pick" => match parse_point(rest) {
                Some((x, y)) => {
                    self.picker.set_from_pick(x, y, &self.canvas);
                    self.report()
                }
                None => Reply::Message(format!("pick: expected '<x> <y>', got '{}'", rest)),
            },
            "alpha" => match rest.parse::<f64>() {
                Ok(a) if a.is_finite() => {
                    self.picker.set_alpha(a);
                    self.report()
                }
                _ => Reply::Message(format!("alpha: expected 0-1, got '{}'", rest)),
            },
            "alpha-step" => match rest.parse::<u8>() {
                Ok(step) => {
                    self.picker.set_alpha_from_slider(step);
                    self.report()
                }
                Err(_) => Reply::Message(format!("alpha-step: expected 0-255, got '{}'", rest)),
            },
            "rgb" => self.answer(|p, c| p.set_from_rgb_text(rest, c)),
            "hex" => self.answer(|p, c| p.set_from_hex_text(rest, c)),
            "hsl" => self.answer(|p, c| p.set_from_hsl_text(rest, c)),
            "hsv" => self.answer(|p, c| p.set_from_hsv_text(rest, c)),
            "hsi" => self.answer(|p, c| p.set_from_hsi_text(rest, c)),
            _ => match ColorFormat::detect(line) {
                Some(format) => self.answer(|p, c| p.set_from_text(format, line, c)),
                None => Reply::Message(format!("unknown command '{}' (try 'help')", command)),
            },
        }
    }

    fn answer<F>(&mut self, set: F) -> Reply
    where
        F: FnOnce(&mut Picker, &Canvas) -> Option<Color>,
    {
        match set(&mut self.picker, &self.canvas) {
            Some(_) => self.report(),
            None => Reply::Unchanged,
        }
    }

    /// Read lines from `input` until EOF or `quit`, writing replies to
    /// `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            debug!(line = %line, "session input");
            match self.handle_line(&line) {
                Reply::Quit => break,
                Reply::Unchanged => writeln!(output, "unchanged")?,
                Reply::Message(message) => {
                    if !message.is_empty() {
                        writeln!(output, "{}", message)?;
                    }
                }
                Reply::Report(report) => {
                    let text = match self.output {
                        OutputFormat::Text => report.render(),
                        OutputFormat::Json => report
                            .to_json()
                            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?,
                    };
                    writeln!(output, "{}", text)?;
                }
            }
            output.flush()?;
        }
        Ok(())
    }
}

fn parse_point(text: &str) -> Option<(f64, f64)> {
    let mut parts = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let x: f64 = parts.next()?.parse().ok()?;
    let y: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Canvas::new(300.0, 150.0).unwrap(), OutputFormat::Text)
    }

    fn expect_report(reply: Reply) -> Report {
        match reply {
            Reply::Report(report) => *report,
            other => panic!("expected a report, got {:?}", other),
        }
    }

    #[test]
    fn slider_command() {
        let mut s = session();
        let report = expect_report(s.handle_line("slider 510"));
        assert_eq!(report.hex, "#00FF00");
    }

    #[test]
    fn pick_command() {
        let mut s = session();
        let report = expect_report(s.handle_line("pick 0 0"));
        assert_eq!(report.hex, "#FFFFFF");
        let report = expect_report(s.handle_line("pick 300, 150"));
        assert_eq!(report.hex, "#000000");
    }

    #[test]
    fn typed_fields() {
        let mut s = session();
        let report = expect_report(s.handle_line("hex #F00"));
        assert_eq!(report.rgb, "rgb(255, 0, 0)");
        let report = expect_report(s.handle_line("hsl hsl(240, 100%, 50%)"));
        assert_eq!(report.slider, 1020);
        let report = expect_report(s.handle_line("rgb 0 255 0"));
        assert_eq!(report.hsv, "hsv(120, 100%, 100%)");
    }

    #[test]
    fn bare_color_text_is_detected() {
        let mut s = session();
        let report = expect_report(s.handle_line("#00ffff"));
        assert_eq!(report.slider, 765);
        let report = expect_report(s.handle_line("hsv(60, 100%, 100%)"));
        assert_eq!(report.hex, "#FFFF00");
        let report = expect_report(s.handle_line("rgba(128, 64, 32, 0.5)"));
        assert_eq!(report.hex, "#80402080");
    }

    #[test]
    fn rejected_text_is_unchanged() {
        let mut s = session();
        s.handle_line("slider 100");
        let before = s.picker.clone();
        assert_eq!(s.handle_line("hex #12"), Reply::Unchanged);
        assert_eq!(s.handle_line("rgb(999, 0, 0)"), Reply::Unchanged);
        assert_eq!(s.picker, before);
    }

    #[test]
    fn bad_arguments_are_messages() {
        let mut s = session();
        assert!(matches!(s.handle_line("slider abc"), Reply::Message(_)));
        assert!(matches!(s.handle_line("pick 1"), Reply::Message(_)));
        assert!(matches!(s.handle_line("alpha nan"), Reply::Message(_)));
        assert!(matches!(s.handle_line("bogus"), Reply::Message(_)));
    }

    #[test]
    fn alpha_commands() {
        let mut s = session();
        let report = expect_report(s.handle_line("alpha 0.5"));
        assert_eq!(report.hex, "#FF000080");
        let report = expect_report(s.handle_line("alpha-step 255"));
        assert_eq!(report.hex, "#FF0000");
    }

    #[test]
    fn quit_and_help() {
        let mut s = session();
        assert_eq!(s.handle_line("quit"), Reply::Quit);
        assert_eq!(s.handle_line("help"), Reply::Message(HELP.to_string()));
    }

    #[test]
    fn run_writes_replies() {
        let mut s = session();
        let input = "slider 510\nhex nope\nquit\nslider 0\n";
        let mut out = Vec::new();
        s.run(input.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("#00FF00"));
        assert!(out.contains("unchanged"));
        // stopped at quit
        assert_eq!(s.picker.current_slider_position(), 510);
    }

    #[test]
    fn run_json_output() {
        let mut s = Session::new(Canvas::new(300.0, 150.0).unwrap(), OutputFormat::Json);
        let mut out = Vec::new();
        s.run("show\n".as_bytes(), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["hex"], "#FF0000");
    }
}
