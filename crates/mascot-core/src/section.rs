use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MascotError {
    #[error("unknown section id `{0}`")]
    UnknownSection(String),
    #[error("unknown avatar variant `{0}`")]
    UnknownVariant(String),
}

/// Named page regions the mascot reacts to, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Highlights,
    Projects,
    Publications,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Highlights,
        SectionId::Projects,
        SectionId::Publications,
    ];

    /// DOM element id of the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Highlights => "highlights",
            SectionId::Projects => "projects",
            SectionId::Publications => "publications",
        }
    }
}

impl FromStr for SectionId {
    type Err = MascotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| MascotError::UnknownSection(s.to_string()))
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the tracker last announced: a section, or the closing footer region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Section(SectionId),
    Footer,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Section(id) => id.as_str(),
            Region::Footer => "footer",
        }
    }

    pub fn section(&self) -> Option<SectionId> {
        match self {
            Region::Section(id) => Some(*id),
            Region::Footer => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
