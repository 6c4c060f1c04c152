//! Render targets for the game list and the creation form.

use shared::domain::{GameId, GameRecord, NewGame};

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// One visual card per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCard {
    pub id: GameId,
    pub title: String,
    pub description: String,
    pub img_src: String,
    pub alt: String,
}

impl From<&GameRecord> for GameCard {
    fn from(record: &GameRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            img_src: record
                .image_url()
                .unwrap_or(PLACEHOLDER_IMAGE_URL)
                .to_string(),
            alt: record.title.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameForm {
    pub title: String,
    pub img: String,
    pub description: String,
}

impl GameForm {
    pub fn to_new_game(&self) -> NewGame {
        NewGame::new(&self.title, &self.img, &self.description)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl From<NewGame> for GameForm {
    fn from(game: NewGame) -> Self {
        Self {
            title: game.title,
            img: game.img,
            description: game.description,
        }
    }
}

/// Display surface the controller renders into.
pub trait CardView: Send {
    /// Replaces every card on display. Never appends.
    fn replace_cards(&mut self, cards: Vec<GameCard>);
    fn form(&self) -> GameForm;
    fn reset_form(&mut self);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryView {
    pub cards: Vec<GameCard>,
    pub form: GameForm,
    pub renders: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: GameForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.title.as_str()).collect()
    }

    pub fn contains(&self, id: &GameId) -> bool {
        self.cards.iter().any(|card| &card.id == id)
    }
}

impl CardView for MemoryView {
    fn replace_cards(&mut self, cards: Vec<GameCard>) {
        self.cards = cards;
        self.renders += 1;
    }

    fn form(&self) -> GameForm {
        self.form.clone()
    }

    fn reset_form(&mut self) {
        self.form.clear();
    }
}

/// Card markup for HTML hosts. Interpolated text is escaped.
pub fn render_card_html(card: &GameCard) -> String {
    format!(
        r#"<div class="card bg-secondary text-white m-2" style="width: 18rem;">
  <img src="{img}" class="card-img-top" alt="{alt}">
  <div class="card-body">
    <h5 class="card-title">{title}</h5>
    <p class="card-text">{description}</p>
    <button class="btn btn-danger" data-id="{id}">Delete</button>
  </div>
</div>"#,
        img = escape_html(&card.img_src),
        alt = escape_html(&card.alt),
        title = escape_html(&card.title),
        description = escape_html(&card.description),
        id = escape_html(card.id.as_str()),
    )
}

pub fn render_cards_html(cards: &[GameCard]) -> String {
    cards
        .iter()
        .map(render_card_html)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
