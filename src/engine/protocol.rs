//! Text commands understood by [`crate::Engine`].

#[derive(Debug, PartialEq)]
pub(super) enum Command {
    /// Start a new episode with the configured layout.
    NewGame,
    /// Print the board.
    Show,
    /// Print the 12x8 action space of the side to move.
    ActionSpace,
    /// List legal actions of the side to move.
    Moves,
    /// Apply action `index` to the piece in roster `slot`.
    Move { slot: usize, index: usize },
    /// Print the material score.
    Score,
    /// Print the occupancy planes.
    Encode,
    Quit,
    Unknown(String),
}

fn parse_move(parts: &[&str]) -> Option<Command> {
    match parts {
        [_, slot, index] => Some(Command::Move {
            slot: slot.parse().ok()?,
            index: index.parse().ok()?,
        }),
        _ => None,
    }
}

impl Command {
    pub(super) fn parse(input: &str) -> Self {
        let parts: Vec<&str> = input.split_whitespace().collect();

        if parts.is_empty() {
            return Self::Unknown(input.to_string());
        }

        let command = match parts[0] {
            "new" => Some(Self::NewGame),
            "d" | "show" => Some(Self::Show),
            "actions" => Some(Self::ActionSpace),
            "moves" => Some(Self::Moves),
            "move" => parse_move(&parts),
            "score" => Some(Self::Score),
            "encode" => Some(Self::Encode),
            "quit" => Some(Self::Quit),
            _ => None,
        };
        command.unwrap_or_else(|| Self::Unknown(input.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        assert_eq!(Command::parse("new"), Command::NewGame);
        assert_eq!(Command::parse("d"), Command::Show);
        assert_eq!(Command::parse("show\n"), Command::Show);
        assert_eq!(Command::parse("actions"), Command::ActionSpace);
        assert_eq!(Command::parse("moves"), Command::Moves);
        assert_eq!(Command::parse("score"), Command::Score);
        assert_eq!(Command::parse("encode"), Command::Encode);
        assert_eq!(Command::parse("quit"), Command::Quit);
    }

    #[test]
    fn parse_move() {
        assert_eq!(
            Command::parse("move 9 1"),
            Command::Move { slot: 9, index: 1 }
        );
        assert_eq!(
            Command::parse("move 9"),
            Command::Unknown("move 9".to_string())
        );
        assert_eq!(
            Command::parse("move x 1"),
            Command::Unknown("move x 1".to_string())
        );
    }

    #[test]
    fn unknown() {
        assert_eq!(
            Command::parse("unknown command"),
            Command::Unknown("unknown command".to_string())
        );
    }
}
