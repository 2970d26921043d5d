//! Score text in the page

use game_core::Score;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

pub const PLAYER_SCORE_ID: &str = "playerScore";
pub const COMPUTER_SCORE_ID: &str = "computerScore";

/// The two DOM elements showing each side's points
pub struct Scoreboard {
    player: Element,
    computer: Element,
}

impl Scoreboard {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("Score element #{id} not found")))
        };
        Ok(Self {
            player: find(PLAYER_SCORE_ID)?,
            computer: find(COMPUTER_SCORE_ID)?,
        })
    }

    pub fn show(&self, score: Score) {
        self.player
            .set_text_content(Some(&score.player.to_string()));
        self.computer
            .set_text_content(Some(&score.computer.to_string()));
    }
}
