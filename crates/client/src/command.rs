//! Line commands understood by the terminal client.

use std::str::FromStr;

/// One parsed input line. Indices are 1-based, as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play the n-th card of the hand.
    Play(usize),
    EndTurn,
    /// Pick offered items by their position in the offer listing.
    Pick(Vec<usize>),
    /// Show a card's full text and keyword tooltips.
    Inspect(usize),
    State,
    Json,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("unknown command `{0}`, type `help`")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{0}` is not a position (use 1, 2, ...)")]
    BadIndex(String),
}

pub const HELP: &str = "\
commands:
  play <n>          play the n-th card in hand
  end               end the turn
  pick <n> [<n>..]  take offered equipment by position
  inspect <n>       show the n-th card with keyword tooltips
  state             redraw the board
  json              print the raw snapshot
  help              show this text
  quit              leave the run";

fn index(word: &str) -> Result<usize, ParseError> {
    match word.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::BadIndex(word.to_owned())),
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseError::Empty);
        };

        let single = |words: &mut std::str::SplitWhitespace<'_>, command: &'static str| {
            words
                .next()
                .ok_or(ParseError::MissingArgument {
                    command,
                    expected: "a card position",
                })
                .and_then(index)
        };

        match head.to_ascii_lowercase().as_str() {
            "play" | "p" => single(&mut words, "play").map(Command::Play),
            "inspect" | "i" => single(&mut words, "inspect").map(Command::Inspect),
            "end" | "e" => Ok(Command::EndTurn),
            "pick" => {
                let picks = words.map(index).collect::<Result<Vec<_>, _>>()?;
                if picks.is_empty() {
                    return Err(ParseError::MissingArgument {
                        command: "pick",
                        expected: "one or more offer positions",
                    });
                }
                Ok(Command::Pick(picks))
            }
            "state" | "s" => Ok(Command::State),
            "json" => Ok(Command::Json),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_owned())),
        }
    }
}

/// Maps a 1-based position onto a slice.
pub fn nth<T: Copy>(items: &[T], position: usize) -> Option<T> {
    position.checked_sub(1).and_then(|i| items.get(i).copied())
}
