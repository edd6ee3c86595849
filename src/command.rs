//! Host command grammar
//!
//! A command is one line of whitespace separated tokens: a verb followed by its arguments.
//! Verbs and arguments are case-sensitive.
//!
//! * `REF ON` / `REF OFF`: include or exclude the reference channel from the next cycle on.
//! * `REGS`: report the ADC register contents.
use core::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::EnumString)]
enum Verb {
    #[strum(serialize = "REF")]
    Reference,
    #[strum(serialize = "REGS")]
    Registers,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::EnumString)]
enum Switch {
    #[strum(serialize = "ON")]
    On,
    #[strum(serialize = "OFF")]
    Off,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reference(bool),
    DumpRegisters,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command")]
    UnknownVerb,
    #[error("Missing argument")]
    MissingArgument,
    #[error("Unknown argument")]
    UnknownArgument,
    #[error("Command too long")]
    Overflow,
}

impl CommandError {
    /// The message reported to the host.
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnknownVerb => "ERROR UNKNOWN COMMAND",
            Self::MissingArgument => "ERROR MISSING ARGUMENT",
            Self::UnknownArgument => "ERROR UNKNOWN ARGUMENT",
            Self::Overflow => "ERROR COMMAND TOO LONG",
        }
    }
}

impl Command {
    /// Parse one line of host input.
    ///
    /// # Returns
    /// `None` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_ascii_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(None);
        };
        let verb =
            Verb::from_str(verb).map_err(|_| CommandError::UnknownVerb)?;

        let command = match verb {
            Verb::Reference => {
                let switch = tokens.next().ok_or(CommandError::MissingArgument)?;
                match Switch::from_str(switch)
                    .map_err(|_| CommandError::UnknownArgument)?
                {
                    Switch::On => Command::Reference(true),
                    Switch::Off => Command::Reference(false),
                }
            }
            Verb::Registers => Command::DumpRegisters,
        };

        if tokens.next().is_some() {
            return Err(CommandError::UnknownArgument);
        }
        Ok(Some(command))
    }

    /// Parse one line of raw host input.
    pub fn from_bytes(line: &[u8]) -> Result<Option<Self>, CommandError> {
        let line = core::str::from_utf8(line)
            .map_err(|_| CommandError::UnknownVerb)?;
        Self::parse(line)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reference_switch() {
        assert_eq!(Command::parse("REF ON"), Ok(Some(Command::Reference(true))));
        assert_eq!(
            Command::parse("REF OFF\r\n"),
            Ok(Some(Command::Reference(false)))
        );
        assert_eq!(
            Command::parse("  REF   ON\n"),
            Ok(Some(Command::Reference(true)))
        );
    }

    #[test]
    fn registers() {
        assert_eq!(Command::parse("REGS\n"), Ok(Some(Command::DumpRegisters)));
    }

    #[test]
    fn malformed() {
        assert_eq!(Command::parse("FOO BAR"), Err(CommandError::UnknownVerb));
        assert_eq!(Command::parse("ref on"), Err(CommandError::UnknownVerb));
        assert_eq!(Command::parse("REF"), Err(CommandError::MissingArgument));
        assert_eq!(Command::parse("REF on"), Err(CommandError::UnknownArgument));
        assert_eq!(
            Command::parse("REF ON NOW"),
            Err(CommandError::UnknownArgument)
        );
        assert_eq!(
            CommandError::UnknownVerb.message(),
            "ERROR UNKNOWN COMMAND"
        );
    }

    #[test]
    fn raw_bytes() {
        assert_eq!(
            Command::from_bytes(b"REF OFF"),
            Ok(Some(Command::Reference(false)))
        );
        assert_eq!(
            Command::from_bytes(&[0xff, 0xfe]),
            Err(CommandError::UnknownVerb)
        );
    }

    #[test]
    fn blank() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("\r\n"), Ok(None));
    }
}
