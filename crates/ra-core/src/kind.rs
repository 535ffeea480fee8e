//! Actor classification enums shared across all crates.

/// What sort of actor occupies a registry slot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    /// The human-controlled bot.
    Player,
    /// A robot that walks its patrol and rams its targets.
    GroundBot,
    /// A robot that hovers; flipping good triggers a blast.
    FlyingBot,
}

impl ActorKind {
    /// `true` for every robot variant.
    #[inline]
    pub fn is_robot(self) -> bool {
        !matches!(self, ActorKind::Player)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            ActorKind::Player    => "player",
            ActorKind::GroundBot => "ground_bot",
            ActorKind::FlyingBot => "flying_bot",
        }
    }
}

impl std::fmt::Display for ActorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A robot's disposition.  Governs patrol path, animation set and speed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    Good,
    Bad,
}

impl Alignment {
    #[inline]
    pub fn is_good(self) -> bool {
        matches!(self, Alignment::Good)
    }

    /// The opposite alignment.
    #[inline]
    pub fn flipped(self) -> Alignment {
        match self {
            Alignment::Good => Alignment::Bad,
            Alignment::Bad  => Alignment::Good,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Good => "good",
            Alignment::Bad  => "bad",
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
