//! Note records exchanged with the host application

use serde::{Deserialize, Serialize};

/// A note with its markdown body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Note id
    pub id: String,
    /// Note title
    pub title: String,
    /// Creation time, milliseconds since the epoch
    #[serde(default)]
    pub created_time: i64,
    /// Last update time, milliseconds since the epoch
    #[serde(default)]
    pub updated_time: i64,
    /// Raw markdown
    #[serde(default)]
    pub body: String,
}

impl Note {
    /// Create a note with zero timestamps
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            created_time: 0,
            updated_time: 0,
            body: body.into(),
        }
    }
}

/// A search hit, before its body is fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchedNote {
    /// Note id
    pub id: String,
    /// Note title
    pub title: String,
    /// Id of the notebook holding the note
    #[serde(default)]
    pub parent_id: String,
    /// Notebook path such as `/Work/Projects`, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// A notebook and its nested notebooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    /// Notebook id
    pub id: String,
    /// Id of the enclosing notebook; empty at the top level
    #[serde(default)]
    pub parent_id: String,
    /// Notebook title
    pub title: String,
    /// Nested notebooks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Notebook>,
}

/// A note that links to the target, with its rendered mentions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referrer {
    /// The referring note
    #[serde(flatten)]
    pub note: Note,
    /// One HTML excerpt per reference; empty strings when excerpts are off
    pub mentions: Vec<String>,
}

impl Referrer {
    /// Number of references the note makes to the target
    pub fn mention_count(&self) -> usize {
        self.mentions.len()
    }
}
