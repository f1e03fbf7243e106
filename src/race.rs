//! Race session setup written by the front-end screens
//!
//! The setup screens fill in one `RaceSetup` value step by step (players,
//! karts, mode, difficulty, track, laps); the race module reads it when the
//! race starts. Nothing here drives the simulation itself.

/// Maximum simultaneous (split-screen) players
pub const MAX_PLAYERS: usize = 4;

/// Karts selectable on the character-select screen
pub const KART_ROSTER: [&str; 8] = [
    "Turbo Fox",
    "Clockwork",
    "Marmalade",
    "Night Owl",
    "Piston Pete",
    "Sparkplug",
    "Dune Viper",
    "Old Smokey",
];

/// Tracks selectable for a single race
pub const TRACK_ROSTER: [&str; 6] = [
    "Sunset Loop",
    "Harbor Run",
    "Canyon Drift",
    "Frostbite Pass",
    "Neon Circuit",
    "Junkyard Sprint",
];

/// Grand prix cups; each cup is a fixed track sequence owned by the race
/// module
pub const CUP_ROSTER: [&str; 3] = ["Piston Cup", "Comet Cup", "Scrapheap Cup"];

/// AI strength picked on the difficulty screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> Vec<Self> {
        vec![Self::Easy, Self::Medium, Self::Hard]
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Easy => "Novice",
            Self::Medium => "Driver",
            Self::Hard => "Racer",
        }
    }
}

/// Top-level race mode picked after character select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceMode {
    /// One-off race on a single track
    QuickRace,
    /// Solo against the clock, no AI karts
    TimeTrial,
    /// Cup sequence with standings carried between races
    GrandPrix,
}

impl RaceMode {
    pub fn all() -> Vec<Self> {
        vec![Self::QuickRace, Self::TimeTrial, Self::GrandPrix]
    }

    pub fn name(&self) -> &str {
        match self {
            Self::QuickRace => "Quick Race",
            Self::TimeTrial => "Time Trial",
            Self::GrandPrix => "Grand Prix",
        }
    }
}

/// Everything the race module needs to start a session
#[derive(Debug, Clone)]
pub struct RaceSetup {
    pub difficulty: Difficulty,
    pub mode: RaceMode,
    pub num_laps: u32,
    /// Human players (1..=MAX_PLAYERS); AI fills the rest of the grid
    pub num_players: usize,
    /// Kart chosen per human player, filled by the character-select chain
    pub karts: [Option<&'static str>; MAX_PLAYERS],
    pub track: Option<&'static str>,
    pub grand_prix: Option<&'static str>,
}

impl RaceSetup {
    pub fn new() -> Self {
        RaceSetup {
            difficulty: Difficulty::Medium,
            mode: RaceMode::QuickRace,
            num_laps: 3,
            num_players: 1,
            karts: [None; MAX_PLAYERS],
            track: None,
            grand_prix: None,
        }
    }

    /// Kart chosen by the given player, if they picked one yet
    pub fn kart_for(&self, player: usize) -> Option<&'static str> {
        self.karts.get(player).copied().flatten()
    }
}

impl Default for RaceSetup {
    fn default() -> Self {
        Self::new()
    }
}
