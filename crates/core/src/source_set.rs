use std::fmt::Display;

/// The two source sets relayed between the host module and the workspace.
///
/// Production and test sources are kept separate on both sides so that test
/// schemas never leak into production generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSet {
    Main,
    Test,
}

impl SourceSet {
    pub const ALL: [Self; 2] = [Self::Main, Self::Test];

    #[must_use]
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
        }
    }
}

impl Display for SourceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}
