use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

/// The race a candidate runs in. Each category carries its own per-device
/// vote cap and local storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "backend", derive(sqlx::Type))]
#[cfg_attr(feature = "backend", sqlx(type_name = "category", rename_all = "lowercase"))]
pub enum Category {
    Mayor,
    Councillor,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Mayor, Category::Councillor];

    pub const fn vote_cap(self) -> usize {
        match self {
            Category::Mayor => 2,
            Category::Councillor => 7,
        }
    }

    pub const fn storage_key(self) -> &'static str {
        match self {
            Category::Mayor => "mayorVotes",
            Category::Councillor => "councillorVotes",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Mayor => "mayor",
            Category::Councillor => "councillor",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Mayor => "Mayor",
            Category::Councillor => "Ward Councillor",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mayor" => Ok(Category::Mayor),
            "councillor" => Ok(Category::Councillor),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// A roster entry, fixed at build time. The `hp` stat, quote, and totem are
/// card flavor, not election data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub ward: &'static str,
    pub hp: u32,
    pub image: &'static str,
    pub vibe: &'static str,
    pub quote: &'static str,
    pub totem: &'static str,
}

/// Request to append one vote to the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewVote {
    pub candidate_id: String,
    pub category: Category,
    pub voter_id: String,
}

/// One stored ledger row. Append-only; never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "backend", derive(sqlx::FromRow))]
pub struct VoteRecord {
    pub id: Uuid,
    pub candidate_id: String,
    pub category: Category,
    pub voter_id: String,
    pub cast_at: OffsetDateTime,
}
