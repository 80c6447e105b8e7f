//! Line parser for the keystroke script language.

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// `STRING <text>`: the remainder of the line, typed verbatim.
    TypeText(String),
    /// `DELAY <ms>`
    Delay(u64),
    /// `DEFAULT_DELAY <ms>` or `DEFAULTDELAY <ms>`
    SetDefaultDelay(u64),
    /// `REPEAT <n>`: recognised but not executed.
    Repeat(u64),
    /// Anything else: whitespace-separated key tokens as written.
    KeyOrCombo(Vec<String>),
}

impl ScriptCommand {
    /// Parses a single line.
    ///
    /// Returns `None` for blank lines and comments: a leading `#`, or the
    /// upper-case token `REM` as the first word.  `rem` and `REMOTE` are not
    /// comments.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim_start()),
            None => (line, ""),
        };

        if keyword == "REM" {
            return None;
        }

        let command = match keyword.to_ascii_uppercase().as_str() {
            "STRING" => Self::TypeText(rest.to_string()),
            "DELAY" => Self::Delay(parse_count(rest)),
            "DEFAULT_DELAY" | "DEFAULTDELAY" => Self::SetDefaultDelay(parse_count(rest)),
            "REPEAT" => Self::Repeat(parse_count(rest)),
            _ => Self::KeyOrCombo(line.split_whitespace().map(str::to_string).collect()),
        };
        Some(command)
    }
}

/// Reads the leading decimal digits of `arg`; anything unparsable is 0.
fn parse_count(arg: &str) -> u64 {
    let digits: &str = arg
        .trim_start()
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or("");
    digits.parse().unwrap_or(0)
}
