use serde::{Deserialize, Serialize};

use std::fmt::Display;

use super::Book;

/// Type-safe identifier for Members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(pub u32);

impl From<u32> for MemberId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "member_{}", self.0)
    }
}

/// Represents a registered library member.
///
/// `borrowed` holds snapshots of the books taken at borrow time, in borrow order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub borrowed: Vec<Book>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            borrowed: Vec::new(),
        }
    }
}

/// Payload for registering a member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreate {
    pub id: MemberId,
    pub name: String,
}

impl MemberCreate {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: MemberId(id),
            name: name.into(),
        }
    }
}

impl From<MemberCreate> for Member {
    fn from(params: MemberCreate) -> Self {
        Member::new(params.id, params.name)
    }
}
