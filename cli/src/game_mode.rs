#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seat {
    Human,
    Engine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsEngine,
    EngineVsHuman,
    EngineVsEngine,
}

impl GameMode {
    pub fn from_code(code: &str) -> Option<GameMode> {
        match code {
            "hh" => Some(GameMode::HumanVsHuman),
            "ha" => Some(GameMode::HumanVsEngine),
            "ah" => Some(GameMode::EngineVsHuman),
            "aa" => Some(GameMode::EngineVsEngine),
            _ => None,
        }
    }

    /// Seats for (X, O). X always moves first, so the code's first letter
    /// names the first mover.
    pub fn seats(&self) -> (Seat, Seat) {
        match self {
            GameMode::HumanVsHuman => (Seat::Human, Seat::Human),
            GameMode::HumanVsEngine => (Seat::Human, Seat::Engine),
            GameMode::EngineVsHuman => (Seat::Engine, Seat::Human),
            GameMode::EngineVsEngine => (Seat::Engine, Seat::Engine),
        }
    }
}
