//! Plain-text card view for the command line.

use std::io::Write;

use client_core::{CardView, GameCard, GameForm};
use tracing::error;

pub struct TerminalView {
    out: Box<dyn Write + Send>,
    form: GameForm,
}

impl TerminalView {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out,
            form: GameForm::default(),
        }
    }

    pub fn with_form(mut self, form: GameForm) -> Self {
        self.form = form;
        self
    }
}

pub fn format_card(card: &GameCard) -> String {
    let mut text = format!("[{}] {}\n", card.id, card.title);
    if !card.description.is_empty() {
        text.push_str(&format!("    {}\n", card.description));
    }
    text.push_str(&format!("    image: {}\n", card.img_src));
    text
}

impl CardView for TerminalView {
    fn replace_cards(&mut self, cards: Vec<GameCard>) {
        let mut text = match cards.len() {
            0 => "no games\n".to_string(),
            1 => "1 game\n".to_string(),
            n => format!("{n} games\n"),
        };
        for card in &cards {
            text.push_str(&format_card(card));
        }
        if let Err(error) = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
        {
            error!(%error, "failed to write game list");
        }
    }

    fn form(&self) -> GameForm {
        self.form.clone()
    }

    fn reset_form(&mut self) {
        self.form.clear();
    }
}

#[cfg(test)]
#[path = "tests/terminal_tests.rs"]
mod tests;
