use std::fmt;

use serde::{Deserialize, Serialize};

/// Field label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Label {
    Required,
    Optional,
    Repeated,
    /// No label keyword: proto3 singular fields and oneof members.
    Singular,
}

impl Label {
    /// Returns the keyword written before the field type, if any.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Required => Some("required"),
            Self::Optional => Some("optional"),
            Self::Repeated => Some("repeated"),
            Self::Singular => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or(""))
    }
}
