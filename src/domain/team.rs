use serde::{Deserialize, Serialize};

use crate::domain::types::TeamId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewTeam {
    pub name: String,
}

impl NewTeam {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
        }
    }
}
