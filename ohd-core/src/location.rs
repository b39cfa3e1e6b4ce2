use serde::{Deserialize, Serialize};
use std::fmt;

/// The beaches offered by the location selector.
///
/// `name()` is sent verbatim as the `location` of a hazard request.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
pub enum BeachLocation {
    #[default]
    SantaMonica,
    Venice,
    Manhattan,
    Malibu,
    Huntington,
}

impl BeachLocation {
    pub const ALL: [BeachLocation; 5] = [
        BeachLocation::SantaMonica,
        BeachLocation::Venice,
        BeachLocation::Manhattan,
        BeachLocation::Malibu,
        BeachLocation::Huntington,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BeachLocation::SantaMonica => "Santa Monica Beach, California",
            BeachLocation::Venice => "Venice Beach, California",
            BeachLocation::Manhattan => "Manhattan Beach, California",
            BeachLocation::Malibu => "Malibu Beach, California",
            BeachLocation::Huntington => "Huntington Beach, California",
        }
    }

    /// Short command-line friendly identifier.
    pub fn slug(&self) -> &'static str {
        match self {
            BeachLocation::SantaMonica => "santa-monica",
            BeachLocation::Venice => "venice",
            BeachLocation::Manhattan => "manhattan",
            BeachLocation::Malibu => "malibu",
            BeachLocation::Huntington => "huntington",
        }
    }

    pub fn from_slug(slug: &str) -> Option<BeachLocation> {
        let slug = slug.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|b| b.slug() == slug)
    }

    /// Exact match against [`BeachLocation::name`].
    pub fn from_name(name: &str) -> Option<BeachLocation> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }
}

impl fmt::Display for BeachLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
