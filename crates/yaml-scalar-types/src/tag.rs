//! Core schema tags

use crate::target::TargetKind;
use serde::{Deserialize, Serialize};

const TAG_PREFIX: &str = "tag:yaml.org,2002:";
const SHORTHAND_PREFIX: &str = "!!";

/// Tags of the core schema that name a resolution target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreTag {
    Bool,
    Int,
    Float,
    Str,
    Timestamp,
    Binary,
    Seq,
    Map,
}

impl CoreTag {
    /// Get the simple name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Timestamp => "timestamp",
            Self::Binary => "binary",
            Self::Seq => "seq",
            Self::Map => "map",
        }
    }

    /// Get the full qualified tag, e.g. `tag:yaml.org,2002:int`
    pub fn qualified_name(&self) -> String {
        format!("{TAG_PREFIX}{}", self.name())
    }

    /// Get the shorthand tag, e.g. `!!int`
    pub fn shorthand(&self) -> String {
        format!("{SHORTHAND_PREFIX}{}", self.name())
    }

    /// Recognize a tag in either qualified or shorthand form
    pub fn from_tag(tag: &str) -> Option<Self> {
        let name = tag
            .strip_prefix(TAG_PREFIX)
            .or_else(|| tag.strip_prefix(SHORTHAND_PREFIX))?;
        let tag = match name {
            "bool" => Self::Bool,
            "int" => Self::Int,
            "float" => Self::Float,
            "str" => Self::Str,
            "timestamp" => Self::Timestamp,
            "binary" => Self::Binary,
            "seq" => Self::Seq,
            "map" => Self::Map,
            _ => return None,
        };
        Some(tag)
    }

    /// The target kind a scalar carrying this tag resolves into
    pub const fn target_kind(&self) -> TargetKind {
        match self {
            Self::Bool => TargetKind::Bool,
            Self::Int => TargetKind::I64,
            Self::Float => TargetKind::F64,
            Self::Str => TargetKind::String,
            Self::Timestamp => TargetKind::Timestamp,
            Self::Binary => TargetKind::Binary,
            Self::Seq => TargetKind::Sequence,
            Self::Map => TargetKind::Mapping,
        }
    }
}
