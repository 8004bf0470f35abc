//! Line-oriented operator console.
//!
//! Bytes from the UART are fed to a [`Shell`], which echoes them, assembles
//! lines and runs the command named by the first word of each line.

use core::fmt::{self, Write};
use core::str;

use heapless::Vec;

use crate::cache::CacheFlush;
use crate::diag::Diagnostics;
use crate::link::LinkControl;
use crate::wait::CountdownTimer;

pub const LINE_CAPACITY: usize = 64;
pub const PROMPT: &str = "RUNTIME>";

const BACKSPACE: u8 = 0x08;
const BELL: u8 = 0x07;
const DELETE: u8 = 0x7f;

pub type Line = Vec<u8, LINE_CAPACITY>;

/// Input line being typed, with the terminal echo that goes with it.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: Line,
}

impl LineBuffer {
    pub fn new() -> LineBuffer {
        LineBuffer { buf: Vec::new() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn reset(&mut self) {
        self.buf.clear()
    }

    /// Handles one received byte. Returns the finished line on CR or LF and
    /// starts over with an empty buffer.
    pub fn input<W: Write + ?Sized>(&mut self, c: u8, echo: &mut W) -> Result<Option<Line>, fmt::Error> {
        match c {
            DELETE | BACKSPACE => {
                if self.buf.pop().is_some() {
                    echo.write_str("\x08 \x08")?;
                }
            }
            BELL => (),
            b'\r' | b'\n' => {
                echo.write_str("\n")?;
                return Ok(Some(core::mem::take(&mut self.buf)))
            }
            _ => {
                // at most LINE_CAPACITY - 1 characters per line
                if self.buf.len() < LINE_CAPACITY - 1 {
                    echo.write_char(c as char)?;
                    let _ = self.buf.push(c);
                }
            }
        }
        Ok(None)
    }
}

/// Splits off the first space-separated word.
pub fn get_token(line: &str) -> (&str, &str) {
    line.split_once(' ').unwrap_or((line, ""))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Reboot,
    LinkInit,
    LinkTest,
    LinkDump,
}

const COMMANDS: &[(&str, Command, &str)] = &[
    ("help", Command::Help, "this command"),
    ("reboot", Command::Reboot, "reboot CPU"),
    ("amc_rtm_link_init", Command::LinkInit, "(re)initialize AMC/RTM link"),
    ("amc_rtm_link_test", Command::LinkTest, "test AMC/RTM link"),
    ("amc_rtm_link_dump", Command::LinkDump, "dump AMC/RTM link memory"),
];

impl Command {
    pub fn parse(token: &str) -> Option<Command> {
        COMMANDS.iter()
            .find(|&&(name, _, _)| name == token)
            .map(|&(_, command, _)| command)
    }
}

pub fn help<W: Write + ?Sized>(out: &mut W) -> fmt::Result {
    writeln!(out, "Available commands:")?;
    for &(name, _, description) in COMMANDS {
        writeln!(out, "{:<17} - {}", name, description)?;
    }
    Ok(())
}

/// What the caller has to do once a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Jump to the reset vector; the console does not come back.
    Reboot,
}

/// Runs the command on `line`. Unknown commands are ignored without output.
pub fn execute<L, T, C, W>(line: &str, diag: &mut Diagnostics<L, T, C>, out: &mut W)
    -> Result<Outcome, fmt::Error>
where
    L: LinkControl,
    T: CountdownTimer,
    C: CacheFlush,
    W: Write + ?Sized,
{
    let (token, _args) = get_token(line);
    match Command::parse(token) {
        Some(Command::Help) => help(out)?,
        Some(Command::Reboot) => return Ok(Outcome::Reboot),
        Some(Command::LinkInit) => diag.link_init(out)?,
        Some(Command::LinkTest) => diag.link_test(out)?,
        Some(Command::LinkDump) => diag.link_dump(out)?,
        None => debug!("ignoring unknown command {:?}", token),
    }
    Ok(Outcome::Continue)
}

pub fn banner<W: Write + ?Sized>(out: &mut W, version: &str) -> fmt::Result {
    writeln!(out, "\nSayma AMC CPU testing software built {}", version)?;
    out.write_str(PROMPT)
}

#[derive(Debug, Default)]
pub struct Shell {
    line: LineBuffer,
}

impl Shell {
    pub fn new() -> Shell {
        Shell { line: LineBuffer::new() }
    }

    /// Feeds one byte from the operator. The prompt is printed again after
    /// every completed line.
    pub fn service<L, T, C, W>(&mut self, c: u8, diag: &mut Diagnostics<L, T, C>, out: &mut W)
        -> Result<Outcome, fmt::Error>
    where
        L: LinkControl,
        T: CountdownTimer,
        C: CacheFlush,
        W: Write + ?Sized,
    {
        let line = match self.line.input(c, out)? {
            Some(line) => line,
            None => return Ok(Outcome::Continue),
        };
        let outcome = match str::from_utf8(&line) {
            Ok(line) => execute(line, diag, out)?,
            Err(_) => Outcome::Continue,
        };
        if outcome == Outcome::Continue {
            out.write_str(PROMPT)?;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;

    fn feed(buffer: &mut LineBuffer, input: &[u8], echo: &mut String) -> Option<Line> {
        let mut line = None;
        for &c in input {
            if let Some(l) = buffer.input(c, echo).unwrap() {
                line = Some(l);
            }
        }
        line
    }

    #[test]
    fn line_completes_on_return() {
        let mut buffer = LineBuffer::new();
        let mut echo = String::new();
        let line = feed(&mut buffer, b"help\r", &mut echo).unwrap();
        assert_eq!(&line[..], b"help");
        assert_eq!(echo, "help\n");
        assert!(buffer.as_bytes().is_empty());
    }

    #[test]
    fn backspace_erases() {
        let mut buffer = LineBuffer::new();
        let mut echo = String::new();
        let line = feed(&mut buffer, b"hex\x7fl\x08lp\n", &mut echo).unwrap();
        assert_eq!(&line[..], b"help");
        assert_eq!(echo, "hex\x08 \x08l\x08 \x08lp\n");
    }

    #[test]
    fn backspace_on_empty_line_is_silent() {
        let mut buffer = LineBuffer::new();
        let mut echo = String::new();
        assert!(feed(&mut buffer, b"\x08\x7f\x07", &mut echo).is_none());
        assert!(echo.is_empty());
    }

    #[test]
    fn overlong_input_is_dropped() {
        let mut buffer = LineBuffer::new();
        let mut echo = String::new();
        let input = [b'a'; 100];
        assert!(feed(&mut buffer, &input, &mut echo).is_none());
        assert_eq!(buffer.as_bytes().len(), LINE_CAPACITY - 1);
        assert_eq!(echo.len(), LINE_CAPACITY - 1);
    }

    #[test]
    fn reset_discards_partial_line() {
        let mut buffer = LineBuffer::new();
        let mut echo = String::new();
        feed(&mut buffer, b"reb", &mut echo);
        buffer.reset();
        let line = feed(&mut buffer, b"help\n", &mut echo).unwrap();
        assert_eq!(&line[..], b"help");
    }

    #[test]
    fn tokens() {
        assert_eq!(get_token("amc_rtm_link_init now please"), ("amc_rtm_link_init", "now please"));
        assert_eq!(get_token("reboot"), ("reboot", ""));
        assert_eq!(get_token(""), ("", ""));
    }

    #[test]
    fn command_names() {
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("amc_rtm_link_dump"), Some(Command::LinkDump));
        assert_eq!(Command::parse("amc_rtm_link"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn help_lists_every_command() {
        let mut out = String::new();
        help(&mut out).unwrap();
        assert_eq!(out, "Available commands:\n\
                         help              - this command\n\
                         reboot            - reboot CPU\n\
                         amc_rtm_link_init - (re)initialize AMC/RTM link\n\
                         amc_rtm_link_test - test AMC/RTM link\n\
                         amc_rtm_link_dump - dump AMC/RTM link memory\n");
    }
}
