//! Sowing, relay and capture resolution.
//!
//! Sowing is counter-clockwise through the fixed cycle
//! `5,4,3,2,1,0,6,7,8,9,10,11` and wraps from 11 back to 5. A move may
//! chain: when a leg ends in a pit that now holds more than one seed and
//! was not captured, that pit is picked up and sown as a new leg.
//!
//! Capture precedence: the eight-seed rule is checked before normal
//! capture on every landing.

use smallvec::SmallVec;

use crate::core::{EngineResult, GameRng, InvalidInput, PlayerId, RuleEngine};

use super::state::{AyoState, PIT_COUNT};

/// Next pit in the counter-clockwise sowing cycle, indexed by pit.
pub(crate) const NEXT_PIT: [usize; PIT_COUNT] = [6, 0, 1, 2, 3, 4, 7, 8, 9, 10, 11, 5];

/// One captured pit, credited to a player. Display-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture {
    /// Pit that was emptied.
    pub pit: usize,
    /// Player whose score received the seeds.
    pub awarded_to: PlayerId,
}

/// Result of one move: next state plus display-only side effects.
#[derive(Clone, Debug)]
pub struct AyoOutcome {
    /// State after the move.
    pub state: AyoState,
    /// Pits visited per sowing leg, origin first. One entry per leg.
    pub paths: Vec<Vec<usize>>,
    /// Pits captured during the move, in order.
    pub captures: Vec<Capture>,
}

impl AyoOutcome {
    fn unchanged(state: &AyoState) -> Self {
        Self {
            state: state.clone(),
            paths: Vec::new(),
            captures: Vec::new(),
        }
    }
}

/// The Ayo rules engine. Stateless; all game data lives in `AyoState`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AyoEngine;

impl AyoEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Sowable pits for the current player, in pit-index order.
    #[must_use]
    pub fn valid_moves(&self, state: &AyoState) -> SmallVec<[usize; 6]> {
        if state.game_over {
            return SmallVec::new();
        }
        AyoState::side(state.current_player)
            .filter(|&pit| state.board[pit] > 0)
            .collect()
    }

    /// Where the initial leg of a sow from `pit` would land.
    ///
    /// Used by heuristics; relays are not followed.
    #[must_use]
    pub fn landing_pit(&self, state: &AyoState, pit: usize) -> usize {
        let mut cursor = pit;
        for _ in 0..state.board[pit] {
            cursor = NEXT_PIT[cursor];
        }
        cursor
    }

    /// Sow from `pit` and resolve relays, captures and turn passing.
    ///
    /// A pit the current player does not own, or an empty pit, is a
    /// gameplay rejection: the returned outcome carries the input state
    /// unchanged and no paths. An out-of-range pit is structural and
    /// fails.
    pub fn sow(&self, state: &AyoState, pit: usize) -> EngineResult<AyoOutcome> {
        if pit >= PIT_COUNT {
            return Err(InvalidInput::OutOfRange {
                what: "pit",
                value: pit,
                limit: PIT_COUNT,
            });
        }

        if state.game_over
            || AyoState::pit_owner(pit) != state.current_player
            || state.board[pit] == 0
        {
            return Ok(AyoOutcome::unchanged(state));
        }

        let mover = state.current_player;
        let mut out = AyoOutcome::unchanged(state);
        let mut origin = pit;

        loop {
            // Board total at the moment this leg begins, hand included.
            let leg_total = out.state.seeds_on_board();

            let mut hand = out.state.board[origin];
            out.state.board[origin] = 0;

            let mut path = Vec::with_capacity(hand as usize + 1);
            path.push(origin);

            let mut cursor = origin;
            let mut end_captured = false;

            while hand > 0 {
                cursor = NEXT_PIT[cursor];
                hand -= 1;
                out.state.board[cursor] += 1;
                path.push(cursor);

                if out.state.board[cursor] != 4 {
                    continue;
                }

                // Eight-seed rule: force-end, all remaining seeds to the
                // mover. Checked before normal capture.
                if leg_total == 8 {
                    out.state.scores[mover.index()] += 8;
                    out.state.board = [0; PIT_COUNT];
                    out.state.game_over = true;
                    out.paths.push(path);
                    return Ok(out);
                }

                let last_seed = hand == 0;
                let owner = AyoState::pit_owner(cursor);
                let awarded_to = if last_seed && owner != mover { mover } else { owner };

                out.state.scores[awarded_to.index()] += 4;
                out.state.board[cursor] = 0;
                out.captures.push(Capture { pit: cursor, awarded_to });

                if last_seed {
                    end_captured = true;
                }
            }

            out.paths.push(path);

            // Relay: pick up the ending pit if it grew past one seed and
            // survived this leg.
            if !end_captured && out.state.board[cursor] > 1 {
                origin = cursor;
            } else {
                break;
            }
        }

        if out.state.seeds_on_board() == 0 {
            out.state.game_over = true;
        } else {
            let opponent = mover.other();
            if out.state.has_move(opponent) {
                out.state.current_player = opponent;
            }
            // A starved opponent leaves the turn with the mover.
        }

        Ok(out)
    }
}

impl RuleEngine for AyoEngine {
    type State = AyoState;
    type Move = usize;
    type Outcome = AyoOutcome;

    fn legal_moves(&self, state: &AyoState) -> Vec<usize> {
        self.valid_moves(state).to_vec()
    }

    fn apply(&self, state: &AyoState, mv: &usize, _rng: &mut GameRng) -> EngineResult<AyoOutcome> {
        self.sow(state, *mv)
    }

    fn is_terminal(&self, state: &AyoState) -> bool {
        state.game_over
    }

    fn winner(&self, state: &AyoState) -> Option<PlayerId> {
        if !state.game_over {
            return None;
        }
        match state.scores[0].cmp(&state.scores[1]) {
            std::cmp::Ordering::Greater => Some(PlayerId::new(0)),
            std::cmp::Ordering::Less => Some(PlayerId::new(1)),
            std::cmp::Ordering::Equal => None,
        }
    }
}
