pub mod api;
pub mod controller;
pub mod view;

pub use api::{GamesApi, GamesApiError, HttpGamesApi, DEFAULT_COLLECTION};
pub use controller::{CreateOutcome, DeleteOutcome, LoadOutcome, ViewSyncController};
pub use view::{
    render_card_html, render_cards_html, CardView, GameCard, GameForm, MemoryView,
    PLACEHOLDER_IMAGE_URL,
};
