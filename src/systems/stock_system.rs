// src/systems/stock_system.rs
//! Handles the Stock pile interactions: turning cards onto the Waste pile
//! and resetting the Waste back into the Stock once it runs dry.

use crate::components::game_state::GameState;
use crate::components::pile::StackType;
use crate::config::scoring::STOCK_TURN_COUNT;
use crate::logic::rules::stock_waste;
use crate::systems::undo::MoveRecord;
use log::{debug, info};

/// System for the two stock-click operations. Same contract as the other
/// executors: `None` means the request was ignored and nothing changed.
pub struct StockSystem;

impl StockSystem {
    pub fn new() -> Self {
        Self
    }

    /// Turns up to `STOCK_TURN_COUNT` (= 3) cards from the top of the Stock
    /// onto the Waste, face up, in order. Only the last turned card ends up
    /// draggable; the previous Waste top loses its draggability.
    pub fn turn_stock(&self, state: &mut GameState) -> Option<MoveRecord> {
        if !stock_waste::can_deal_from_stock(state.stock.is_empty()) {
            debug!("StockSystem: stock is empty, cannot turn.");
            return None;
        }

        let count = STOCK_TURN_COUNT.min(state.stock.len());
        for _ in 0..count {
            if let Some(mut card) = state.stock.pop() {
                card.is_face_up = true;
                state.waste.push(card);
            }
        }
        state.refresh_draggable(StackType::Stock);
        state.refresh_draggable(StackType::Waste);

        info!("StockSystem: turned {} card(s) onto the waste.", count);
        Some(MoveRecord::TurnStock { count })
    }

    /// Moves every Waste card back to the Stock, face down, top first.
    /// Popping the waste onto the stock reverses the order twice, so the
    /// stock comes back in its original order and turning again replays
    /// the exact same cards.
    pub fn reset_stock(&self, state: &mut GameState) -> Option<MoveRecord> {
        if !stock_waste::can_reset_stock_from_waste(state.stock.is_empty(), state.waste.is_empty()) {
            debug!("StockSystem: cannot reset (stock not empty or waste empty).");
            return None;
        }

        let count = state.waste.len();
        while let Some(mut card) = state.waste.pop() {
            card.is_face_up = false;
            state.stock.push(card);
        }
        state.refresh_draggable(StackType::Stock);
        state.refresh_draggable(StackType::Waste);

        info!("StockSystem: reset {} card(s) from waste back to stock.", count);
        Some(MoveRecord::ResetStock { count })
    }

    /// One stock click: turn if there is anything to turn, otherwise reset.
    pub fn advance(&self, state: &mut GameState) -> Option<MoveRecord> {
        if !state.stock.is_empty() {
            self.turn_stock(state)
        } else {
            self.reset_stock(state)
        }
    }
}

impl Default for StockSystem {
    fn default() -> Self {
        Self::new()
    }
}
