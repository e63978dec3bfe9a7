//! Supported WCA events.

use std::fmt;
use std::str::FromStr;

use crate::error::IsochronError;

/// One official WCA event, identified by the id used in the result exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Cube333,
    Cube222,
    Cube444,
    Cube555,
    Cube666,
    Cube777,
    Blind333,
    OneHanded333,
    Feet333,
    Clock,
    Megaminx,
    Pyraminx,
    Skewb,
    Square1,
    Blind444,
    Blind555,
    MasterMagic,
}

impl Event {
    pub const ALL: [Event; 17] = [
        Event::Cube333,
        Event::Cube222,
        Event::Cube444,
        Event::Cube555,
        Event::Cube666,
        Event::Cube777,
        Event::Blind333,
        Event::OneHanded333,
        Event::Feet333,
        Event::Clock,
        Event::Megaminx,
        Event::Pyraminx,
        Event::Skewb,
        Event::Square1,
        Event::Blind444,
        Event::Blind555,
        Event::MasterMagic,
    ];

    /// The event id as it appears in the `eventId` column.
    pub fn id(self) -> &'static str {
        match self {
            Event::Cube333 => "333",
            Event::Cube222 => "222",
            Event::Cube444 => "444",
            Event::Cube555 => "555",
            Event::Cube666 => "666",
            Event::Cube777 => "777",
            Event::Blind333 => "333bf",
            Event::OneHanded333 => "333oh",
            Event::Feet333 => "333ft",
            Event::Clock => "clock",
            Event::Megaminx => "minx",
            Event::Pyraminx => "pyram",
            Event::Skewb => "skewb",
            Event::Square1 => "sq1",
            Event::Blind444 => "444bf",
            Event::Blind555 => "555bf",
            Event::MasterMagic => "mmagic",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Event {
    type Err = IsochronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::ALL
            .iter()
            .copied()
            .find(|e| e.id() == s)
            .ok_or_else(|| IsochronError::Config(format!("unknown event id '{s}'")))
    }
}
