use crate::domain::storage::Storage;
use crate::domain::{GameGroup, Index, ServerEntry};
use crate::error::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

pub struct IndexService {
    store: Arc<dyn Storage>,
}

impl IndexService {
    pub fn new(store: Arc<dyn Storage + 'static>) -> Self {
        Self { store }
    }

    /// Walks `game/server` and collects every server that has a README.
    ///
    /// A server without a README is skipped. A game left with no servers is
    /// dropped from the index. Failing to list the root or a game directory
    /// aborts the whole build.
    pub fn build(&self, generated_date: NaiveDate) -> Result<Index> {
        let mut games = Vec::new();

        for game_name in self.store.list_games()? {
            let mut game = GameGroup::new(game_name.as_str());

            for server_name in self.store.list_servers(&game_name)? {
                match self.store.load_readme(&game_name, &server_name)? {
                    Some(readme) => {
                        info!("Found README in: {}/{}", game_name, server_name);
                        game.servers.push(ServerEntry {
                            name: server_name,
                            readme,
                        });
                    }
                    None => info!("No README found in: {}/{}", game_name, server_name),
                }
            }

            if game.servers.is_empty() {
                debug!("Skipping {}: no servers with a README", game_name);
                continue;
            }
            games.push(game);
        }

        Ok(Index::new(games, generated_date))
    }
}
