use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use shared::{
    domain::{GameId, GameRecord, NewGame},
    error::{ErrorBody, ValidationError},
};
use thiserror::Error;
use url::Url;

pub const DEFAULT_COLLECTION: &str = "games";

#[derive(Debug, Error)]
pub enum GamesApiError {
    #[error("invalid api base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{url} answered {status}{}", detail_suffix(.message))]
    Status {
        status: u16,
        url: String,
        message: Option<String>,
    },
    #[error("failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
    #[error("game with id {0} not found")]
    NotFound(GameId),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl GamesApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GamesApiError::NotFound(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            GamesApiError::Status { status, .. } => Some(*status),
            GamesApiError::NotFound(_) => Some(StatusCode::NOT_FOUND.as_u16()),
            GamesApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// List/create/delete over a remote collection of games.
#[async_trait]
pub trait GamesApi: Send + Sync {
    async fn list_games(&self) -> Result<Vec<GameRecord>, GamesApiError>;
    async fn create_game(&self, game: &NewGame) -> Result<GameRecord, GamesApiError>;
    async fn delete_game(&self, id: &GameId) -> Result<(), GamesApiError>;
}

#[async_trait]
impl<T> GamesApi for std::sync::Arc<T>
where
    T: GamesApi + ?Sized,
{
    async fn list_games(&self) -> Result<Vec<GameRecord>, GamesApiError> {
        (**self).list_games().await
    }

    async fn create_game(&self, game: &NewGame) -> Result<GameRecord, GamesApiError> {
        (**self).create_game(game).await
    }

    async fn delete_game(&self, id: &GameId) -> Result<(), GamesApiError> {
        (**self).delete_game(id).await
    }
}

pub struct HttpGamesApi {
    http: Client,
    collection_url: Url,
}

impl HttpGamesApi {
    pub fn new(base_url: &str) -> Result<Self, GamesApiError> {
        Self::with_collection(base_url, DEFAULT_COLLECTION)
    }

    pub fn with_collection(base_url: &str, collection: &str) -> Result<Self, GamesApiError> {
        Self::with_client(Client::new(), base_url, collection)
    }

    pub fn with_client(
        http: Client,
        base_url: &str,
        collection: &str,
    ) -> Result<Self, GamesApiError> {
        let invalid = |reason: String| GamesApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let mut collection_url =
            Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if collection_url.cannot_be_a_base() {
            return Err(invalid("url cannot carry a path".to_string()));
        }
        let collection = collection.trim_matches('/');
        if collection.is_empty() {
            return Err(invalid("collection name is empty".to_string()));
        }
        collection_url
            .path_segments_mut()
            .map_err(|_| invalid("url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(collection.split('/'));
        collection_url.set_query(None);
        collection_url.set_fragment(None);
        Ok(Self {
            http,
            collection_url,
        })
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection_url
    }

    pub fn record_url(&self, id: &GameId) -> Url {
        let mut url = self.collection_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id.as_str());
        }
        url
    }
}

async fn decode_json<T: serde::de::DeserializeOwned>(
    url: &Url,
    response: Response,
) -> Result<T, GamesApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| GamesApiError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

async fn status_error(url: &Url, response: Response) -> GamesApiError {
    let status = response.status().as_u16();
    let message = response
        .bytes()
        .await
        .ok()
        .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
        .map(|body| body.message);
    GamesApiError::Status {
        status,
        url: url.to_string(),
        message,
    }
}

#[async_trait]
impl GamesApi for HttpGamesApi {
    async fn list_games(&self) -> Result<Vec<GameRecord>, GamesApiError> {
        let url = &self.collection_url;
        let response = self.http.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(status_error(url, response).await);
        }
        decode_json(url, response).await
    }

    async fn create_game(&self, game: &NewGame) -> Result<GameRecord, GamesApiError> {
        let url = &self.collection_url;
        let response = self.http.post(url.clone()).json(game).send().await?;
        if !response.status().is_success() {
            return Err(status_error(url, response).await);
        }
        decode_json(url, response).await
    }

    async fn delete_game(&self, id: &GameId) -> Result<(), GamesApiError> {
        let url = self.record_url(id);
        let response = self.http.delete(url.clone()).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GamesApiError::NotFound(id.clone()));
        }
        if !response.status().is_success() {
            return Err(status_error(&url, response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
