use shared::{
    domain::{GameId, GameRecord, NewGame, SortKey},
    error::ValidationError,
    sort::sort_games,
};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info, warn};

use crate::{
    api::GamesApi,
    view::{CardView, GameCard},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered { cards: usize },
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Created(GameRecord),
    Rejected(ValidationError),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Failed,
}

/// Keeps a card view in step with the remote collection.
///
/// Every action is one request/response; failures are logged and reported as
/// an outcome, never propagated. The view lock is never held across a
/// network round trip.
pub struct ViewSyncController<A, V> {
    api: A,
    view: Mutex<V>,
    sort_key: Mutex<SortKey>,
}

impl<A: GamesApi, V: CardView> ViewSyncController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view: Mutex::new(view),
            sort_key: Mutex::new(SortKey::default()),
        }
    }

    /// Sort key used by refreshes that follow a delete.
    pub fn with_sort_key(self, sort_key: SortKey) -> Self {
        Self {
            sort_key: Mutex::new(sort_key),
            ..self
        }
    }

    pub async fn view(&self) -> MutexGuard<'_, V> {
        self.view.lock().await
    }

    pub async fn sort_key(&self) -> SortKey {
        *self.sort_key.lock().await
    }

    pub fn into_view(self) -> V {
        self.view.into_inner()
    }

    /// Page-load entry point.
    pub async fn start(&self) -> LoadOutcome {
        let key = self.sort_key().await;
        self.load_list(key).await
    }

    /// Sort dropdown change.
    pub async fn change_sort(&self, sort_key: SortKey) -> LoadOutcome {
        *self.sort_key.lock().await = sort_key;
        self.load_list(sort_key).await
    }

    pub async fn load_list(&self, sort_key: SortKey) -> LoadOutcome {
        let mut games = match self.api.list_games().await {
            Ok(games) => games,
            Err(err) => {
                error!(%sort_key, error = %err, "games: failed to fetch collection");
                return LoadOutcome::Failed;
            }
        };
        sort_games(&mut games, sort_key);
        let cards: Vec<GameCard> = games.iter().map(GameCard::from).collect();
        let count = cards.len();
        self.view.lock().await.replace_cards(cards);
        info!(%sort_key, cards = count, "games: list rendered");
        LoadOutcome::Rendered { cards: count }
    }

    /// Form submit: reads the view's form and creates from it.
    pub async fn submit_form(&self) -> CreateOutcome {
        let fields = self.view.lock().await.form().to_new_game();
        self.create_record(fields).await
    }

    pub async fn create_record(&self, fields: NewGame) -> CreateOutcome {
        let game = match fields.validate() {
            Ok(game) => game,
            Err(err) => {
                error!(error = %err, "games: rejected new game");
                return CreateOutcome::Rejected(err);
            }
        };

        let created = match self.api.create_game(&game).await {
            Ok(created) => created,
            Err(err) => {
                error!(title = %game.title, error = %err, "games: failed to add new game");
                return CreateOutcome::Failed;
            }
        };
        info!(id = %created.id, title = %created.title, "games: added with server-assigned id");

        self.view.lock().await.reset_form();
        *self.sort_key.lock().await = SortKey::default();
        self.load_list(SortKey::default()).await;
        CreateOutcome::Created(created)
    }

    pub async fn delete_record(&self, id: &GameId) -> DeleteOutcome {
        info!(%id, "games: delete requested");
        match self.api.delete_game(id).await {
            Ok(()) => {
                info!(%id, "games: deleted");
                let key = self.sort_key().await;
                self.load_list(key).await;
                DeleteOutcome::Deleted
            }
            Err(err) if err.is_not_found() => {
                warn!(%id, "games: game not found");
                DeleteOutcome::NotFound
            }
            Err(err) => {
                error!(%id, status = ?err.status(), error = %err, "games: failed to delete");
                DeleteOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
