use std::fmt;

/// Lifecycle stage of a game.
///
/// Phases only ever advance: `New → Ready → Playable → Over`, and `Over` is
/// reachable only from `Playable`. Once `Over`, no operation changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Constructed, player tokens not assigned yet.
    New,
    /// Player tokens assigned, no token dropped yet.
    Ready,
    /// At least one token dropped, outcome still open.
    Playable,
    /// Won or drawn; terminal.
    Over,
}

/// Phase-gated operation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AssignTokens,
    DropToken,
    QueryPlayerToken,
    QueryMoveState,
}

impl GamePhase {
    /// Whether `action` is legal in this phase. Single source of truth for
    /// every phase check in the engine.
    pub fn allows(self, action: Action) -> bool {
        use GamePhase::*;
        match action {
            Action::AssignTokens => matches!(self, New | Ready),
            Action::DropToken => matches!(self, Ready | Playable),
            Action::QueryPlayerToken => !matches!(self, New),
            Action::QueryMoveState => matches!(self, Playable | Over),
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::New => "new",
            GamePhase::Ready => "ready",
            GamePhase::Playable => "playable",
            GamePhase::Over => "over",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::AssignTokens => "token assignment",
            Action::DropToken => "token drop",
            Action::QueryPlayerToken => "player token lookup",
            Action::QueryMoveState => "move state lookup",
        };
        f.write_str(name)
    }
}
