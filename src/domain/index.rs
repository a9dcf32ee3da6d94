use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One documented server: its directory name and raw README Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    pub name: String,
    pub readme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameGroup {
    pub name: String,
    pub servers: Vec<ServerEntry>,
}

impl GameGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            servers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub games: Vec<GameGroup>,
    pub generated_date: NaiveDate,
}

impl Index {
    pub fn new(games: Vec<GameGroup>, generated_date: NaiveDate) -> Self {
        Self {
            games,
            generated_date,
        }
    }

    pub fn total_servers(&self) -> usize {
        self.games.iter().map(|game| game.servers.len()).sum()
    }

    /// Sorts games and their servers by name.
    pub fn sort(&mut self) {
        self.games.sort_by(|a, b| a.name.cmp(&b.name));
        for game in &mut self.games {
            game.servers.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }
}
