use wrench_fs::ResourceName;

/// Which anchors a cascade loads and which of them are mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Client properties only: the client anchor is mandatory.
    Client,
    /// A deployable instance: the instance anchor is mandatory, the client
    /// and target anchors are optional.
    Instance,
}

impl Profile {
    /// Anchor resources loaded before the list stages, with whether each is
    /// required.
    pub fn leading_anchors(&self) -> &'static [(ResourceName, bool)] {
        match self {
            Self::Client => &[(ResourceName::Client, true)],
            Self::Instance => &[(ResourceName::Client, false), (ResourceName::Instance, true)],
        }
    }

    /// Anchor resources loaded after the list stages.
    pub fn trailing_anchors(&self) -> &'static [(ResourceName, bool)] {
        match self {
            Self::Client => &[],
            Self::Instance => &[(ResourceName::Target, false)],
        }
    }
}

/// A stage that loads one resource per element of a list key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStage {
    Hosts,
    Applications,
    Environments,
}

impl ListStage {
    /// List stages in cascade order.
    pub const ALL: [ListStage; 3] = [Self::Hosts, Self::Applications, Self::Environments];

    /// The stage name used in list keys, e.g. `hosts`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hosts => "hosts",
            Self::Applications => "applications",
            Self::Environments => "environments",
        }
    }
}

impl std::fmt::Display for ListStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
