use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::EnvironmentError;

/// Kind of cluster the tests run on
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClusterType {
    Osd,
    Ocp,
    Hypershift,
    Kind,
    #[default]
    Undefined,
}

impl ClusterType {
    pub const ALL: [ClusterType; 5] = [
        ClusterType::Osd,
        ClusterType::Ocp,
        ClusterType::Hypershift,
        ClusterType::Kind,
        ClusterType::Undefined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClusterType::Osd => "OSD",
            ClusterType::Ocp => "OCP",
            ClusterType::Hypershift => "HYPERSHIFT",
            ClusterType::Kind => "KIND",
            ClusterType::Undefined => "UNDEFINED",
        }
    }

    /// Same as `from_str`, unknown values become `Undefined`
    pub fn parse_or_undefined(value: &str) -> Self {
        value.parse().unwrap_or(ClusterType::Undefined)
    }
}

impl FromStr for ClusterType {
    type Err = EnvironmentError;

    // exact match only, "osd" is not "OSD"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OSD" => Ok(ClusterType::Osd),
            "OCP" => Ok(ClusterType::Ocp),
            "HYPERSHIFT" => Ok(ClusterType::Hypershift),
            "KIND" => Ok(ClusterType::Kind),
            _ => Err(EnvironmentError::UnknownClusterType(s.to_string())),
        }
    }
}

impl fmt::Display for ClusterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
