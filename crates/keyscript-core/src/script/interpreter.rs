//! Line-by-line script execution.
//!
//! Each non-comment line becomes one [`LogEntry`] holding the line's outcome
//! as a `Result`.  A failed line is recorded and the next line runs; nothing
//! short of reaching the end of the text stops a script.

use std::fmt;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::command::ScriptCommand;
use crate::clock::Clock;
use crate::engine::sequencer::{KeySequencer, SequenceError};
use crate::keymap::KeyTables;

/// Characters of a `STRING` argument echoed in the log.
const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterState {
    Idle,
    ExecutingLine,
    Halted,
}

/// One executed line.
#[derive(Debug)]
pub struct LogEntry {
    /// 1-based line number in the script text.
    pub line_number: usize,
    pub summary: String,
    pub outcome: Result<(), SequenceError>,
}

impl LogEntry {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(()) => f.write_str(&self.summary),
            Err(err) => write!(f, "{} (failed: {err})", self.summary),
        }
    }
}

/// Everything a script run produced.
#[derive(Debug, Default)]
pub struct ExecutionReport {
    pub entries: Vec<LogEntry>,
    /// `true` once every line has been processed.
    pub completed: bool,
}

impl ExecutionReport {
    /// The log as plain strings, in execution order.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Number of lines whose outcome was an error.
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_ok()).count()
    }
}

/// Runs one script through a [`KeySequencer`].
///
/// The interpreter is single-use: once it reaches `Halted` further calls to
/// [`ScriptInterpreter::run`] return an empty, incomplete report.
pub struct ScriptInterpreter<'a> {
    sequencer: KeySequencer<'a>,
    clock: &'a dyn Clock,
    default_delay: Duration,
    state: InterpreterState,
}

impl<'a> ScriptInterpreter<'a> {
    pub fn new(sequencer: KeySequencer<'a>, clock: &'a dyn Clock) -> Self {
        Self {
            sequencer,
            clock,
            default_delay: Duration::ZERO,
            state: InterpreterState::Idle,
        }
    }

    pub fn state(&self) -> InterpreterState {
        self.state
    }

    pub fn run(&mut self, script: &str) -> ExecutionReport {
        if self.state == InterpreterState::Halted {
            warn!("interpreter already halted, ignoring script");
            return ExecutionReport::default();
        }

        info!(lines = script.lines().count(), "script started");
        let mut report = ExecutionReport::default();

        for (index, line) in script.lines().enumerate() {
            let Some(command) = ScriptCommand::parse(line) else {
                continue;
            };
            self.state = InterpreterState::ExecutingLine;
            let line_number = index + 1;
            debug!(line_number, ?command, "executing line");

            let entry = self.dispatch(line_number, command);
            if let Err(err) = &entry.outcome {
                warn!(line_number, error = %err, "line failed, continuing");
            }
            report.entries.push(entry);

            if !self.default_delay.is_zero() {
                self.clock.sleep(self.default_delay);
            }
        }

        self.state = InterpreterState::Halted;
        report.completed = true;
        info!(
            entries = report.entries.len(),
            failures = report.failures(),
            "script finished"
        );
        report
    }

    fn dispatch(&mut self, line_number: usize, command: ScriptCommand) -> LogEntry {
        let (summary, outcome) = match command {
            ScriptCommand::TypeText(text) => {
                let hold = self.sequencer.timing().key_hold;
                let outcome = self.sequencer.type_text(&text, hold).map(|_| ());
                (format!("Typed: {}", preview(&text)), outcome)
            }
            ScriptCommand::Delay(ms) => {
                self.clock.sleep(Duration::from_millis(ms));
                (format!("Delayed: {ms}ms"), Ok(()))
            }
            ScriptCommand::SetDefaultDelay(ms) => {
                self.default_delay = Duration::from_millis(ms);
                (format!("Default delay set: {ms}ms"), Ok(()))
            }
            ScriptCommand::Repeat(_) => ("REPEAT not supported".to_string(), Ok(())),
            ScriptCommand::KeyOrCombo(tokens) => {
                let names: Vec<String> = tokens
                    .iter()
                    .map(|t| KeyTables::normalize_script_token(t))
                    .collect();
                let outcome = self.press_names(&names);
                (format!("Key(s): {}", names.join(" + ")), outcome)
            }
        };
        LogEntry {
            line_number,
            summary,
            outcome,
        }
    }

    fn press_names(&self, names: &[String]) -> Result<(), SequenceError> {
        match names {
            [single] if KeyTables::modifier_bit_of(single).is_none() => {
                let hold = self.sequencer.timing().key_hold;
                self.sequencer.press_and_release(single, hold).map(|_| ())
            }
            _ => {
                let resolution = self.sequencer.press_combo(names)?;
                if resolution.unresolved.is_empty() {
                    Ok(())
                } else {
                    Err(SequenceError::UnknownKey(resolution.unresolved.join(" ")))
                }
            }
        }
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::device::MemorySink;
    use crate::engine::sequencer::Timing;

    fn run(script: &str) -> (ExecutionReport, MemorySink, ManualClock) {
        let sink = MemorySink::new();
        let clock = ManualClock::new();
        let report = {
            let sequencer = KeySequencer::new(&sink, &clock, Timing::default());
            ScriptInterpreter::new(sequencer, &clock).run(script)
        };
        (report, sink, clock)
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "x".repeat(60);
        assert_eq!(preview(&long), format!("{}...", "x".repeat(50)));
        assert_eq!(preview(&"y".repeat(50)), "y".repeat(50));
    }

    #[test]
    fn test_log_entry_display_marks_failures() {
        let entry = LogEntry {
            line_number: 3,
            summary: "Key(s): nope".to_string(),
            outcome: Err(SequenceError::UnknownKey("nope".to_string())),
        };
        assert_eq!(entry.to_string(), "Key(s): nope (failed: unknown key: nope)");
    }

    #[test]
    fn test_repeat_is_logged_without_effect() {
        let (report, sink, _) = run("REPEAT 5\n");
        assert_eq!(report.messages(), vec!["REPEAT not supported"]);
        assert!(sink.reports().is_empty());
    }

    #[test]
    fn test_default_delay_follows_every_command() {
        // Arrange / Act
        let (report, _, clock) = run("DEFAULT_DELAY 200\nDELAY 7\n");

        // Assert
        assert_eq!(
            report.messages(),
            vec!["Default delay set: 200ms", "Delayed: 7ms"]
        );
        let ms = Duration::from_millis;
        assert_eq!(clock.sleeps(), vec![ms(200), ms(7), ms(200)]);
    }

    #[test]
    fn test_comments_do_not_trigger_default_delay() {
        let (_, _, clock) = run("DEFAULTDELAY 30\nREM a\n# b\n\n");
        assert_eq!(clock.sleeps(), vec![Duration::from_millis(30)]);
    }

    #[test]
    fn test_lone_modifier_presses_modifier_only() {
        let (report, sink, _) = run("GUI\n");
        assert_eq!(report.messages(), vec!["Key(s): gui"]);
        assert_eq!(sink.report_bytes()[0], [0x08, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_line_numbers_count_skipped_lines() {
        let (report, _, _) = run("REM x\n\nENTER\n");
        assert_eq!(report.entries[0].line_number, 3);
    }

    #[test]
    fn test_crlf_line_endings() {
        let (report, _, _) = run("DELAY 1\r\nSTRING ok\r\n");
        assert_eq!(report.messages(), vec!["Delayed: 1ms", "Typed: ok"]);
    }

    #[test]
    fn test_state_transitions_to_halted() {
        let sink = MemorySink::new();
        let clock = ManualClock::new();
        let sequencer = KeySequencer::new(&sink, &clock, Timing::default());
        let mut interpreter = ScriptInterpreter::new(sequencer, &clock);
        assert_eq!(interpreter.state(), InterpreterState::Idle);

        let first = interpreter.run("ENTER\n");
        let second = interpreter.run("ENTER\n");

        assert_eq!(interpreter.state(), InterpreterState::Halted);
        assert!(first.completed);
        assert!(!second.completed);
        assert!(second.entries.is_empty());
    }

    #[test]
    fn test_device_failure_is_logged_and_script_continues() {
        let sink = MemorySink::new();
        sink.should_fail
            .store(true, std::sync::atomic::Ordering::SeqCst);
        let clock = ManualClock::new();
        let sequencer = KeySequencer::new(&sink, &clock, Timing::default());

        let report = ScriptInterpreter::new(sequencer, &clock).run("STRING a\nENTER\nDELAY 5\n");

        assert!(report.completed);
        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.failures(), 2);
        assert!(report.entries[2].is_ok());
    }
}
