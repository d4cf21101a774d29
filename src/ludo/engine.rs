//! Dice, movement, capture and turn sequencing.
//!
//! Captures compare ring coordinates, never raw track positions, and are
//! re-checked at apply time against the shield table. The combination
//! rule collapses two unused dice into one atomic move when a lone
//! on-track seed is the only thing that can move.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::{EngineResult, GameRng, InvalidInput, PlayerId, RuleEngine};

use super::geometry::{BoardGeometry, FINISH, HOUSE};
use super::state::{LudoState, Seed, SEEDS_PER_PLAYER};

/// Milliseconds of victim-return delay per tile travelled.
const DELAY_PER_TILE_MS: u32 = 200;

/// One candidate or applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LudoMove {
    /// Seed index within the moving player, 0–3.
    pub seed_id: u8,
    /// Position the seed moves from.
    pub from: i8,
    /// Indices into `state.dice` this move consumes.
    pub dice: SmallVec<[usize; 2]>,
    /// Tiles travelled (die face, or the sum for a combination move).
    pub steps: u8,
    /// Destination track position.
    pub target: i8,
    /// Whether the destination held a capturable opponent seed when the
    /// move was generated. Re-checked at apply time.
    pub is_capture: bool,
}

/// A resolved capture, display-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureEvent {
    pub victim: PlayerId,
    pub seed_id: u8,
    /// Ring cell where the capture happened.
    pub cell: u8,
    pub animation_delay_ms: u32,
}

/// Result of one applied move.
#[derive(Clone, Debug)]
pub struct LudoOutcome {
    pub state: LudoState,
    pub capture: Option<CaptureEvent>,
    /// The mover rolls again after this move.
    pub bonus_turn: bool,
}

impl LudoOutcome {
    fn unchanged(state: &LudoState) -> Self {
        Self {
            state: state.clone(),
            capture: None,
            bonus_turn: false,
        }
    }
}

/// The Ludo rules engine. Owns the board geometry; all game data lives
/// in `LudoState`.
#[derive(Clone, Debug, Default)]
pub struct LudoEngine {
    geometry: BoardGeometry,
}

impl LudoEngine {
    /// Engine over the standard board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            geometry: BoardGeometry::standard(),
        }
    }

    /// Engine over an explicit geometry (tests, variant boards).
    #[must_use]
    pub fn with_geometry(geometry: BoardGeometry) -> Self {
        Self { geometry }
    }

    /// Roll this turn's dice.
    ///
    /// A no-op unless the state is waiting for a roll.
    #[must_use]
    pub fn roll_dice(&self, state: &LudoState, rng: &mut GameRng) -> LudoState {
        if !state.waiting_for_roll || state.winner.is_some() {
            return state.clone();
        }

        let mut next = state.clone();
        next.dice = (0..state.dice_per_turn()).map(|_| rng.roll_die()).collect();
        next.dice_used = smallvec![false; next.dice.len()];
        next.waiting_for_roll = false;
        next.log.push_back(format!(
            "{} rolled {:?}",
            state.current_player,
            next.dice.as_slice()
        ));
        next
    }

    /// Legal moves for the current player.
    #[must_use]
    pub fn valid_moves(&self, state: &LudoState) -> Vec<LudoMove> {
        if state.waiting_for_roll || state.winner.is_some() {
            return Vec::new();
        }

        if let Some(combo) = self.combination_move(state) {
            return vec![combo];
        }

        let mut moves = Vec::new();
        for (die_index, face) in state.unused_dice() {
            for seed in &state.current().seeds {
                if seed.position == HOUSE {
                    // House exit needs an exact 6 and lands on position 0.
                    if face == 6 {
                        moves.push(self.candidate(state, seed, die_index, 1, 0));
                    }
                } else if !seed.is_finished() && seed.position + face as i8 <= FINISH {
                    moves.push(self.candidate(
                        state,
                        seed,
                        die_index,
                        face,
                        seed.position + face as i8,
                    ));
                }
            }
        }
        moves
    }

    fn candidate(
        &self,
        state: &LudoState,
        seed: &Seed,
        die_index: usize,
        steps: u8,
        target: i8,
    ) -> LudoMove {
        LudoMove {
            seed_id: seed.id,
            from: seed.position,
            dice: smallvec![die_index],
            steps,
            target,
            is_capture: self.capture_at(state, target).is_some(),
        }
    }

    /// The collapsed two-dice move, when the rule applies.
    ///
    /// Requires exactly two unused dice and exactly one movable seed,
    /// which must sit on the track (house exits stay sequential) and be
    /// reachable by either die individually as well as by their sum.
    fn combination_move(&self, state: &LudoState) -> Option<LudoMove> {
        let unused = state.unused_dice();
        if unused.len() != 2 {
            return None;
        }
        let (i1, d1) = unused[0];
        let (i2, d2) = unused[1];

        let mut sole: Option<&Seed> = None;
        for seed in &state.current().seeds {
            let movable = if seed.position == HOUSE {
                d1 == 6 || d2 == 6
            } else {
                !seed.is_finished()
                    && (seed.position + d1 as i8 <= FINISH || seed.position + d2 as i8 <= FINISH)
            };
            if movable {
                if sole.is_some() {
                    return None;
                }
                sole = Some(seed);
            }
        }

        let seed = sole?;
        if seed.position == HOUSE {
            return None;
        }

        let either_die = seed.position + d1 as i8 <= FINISH && seed.position + d2 as i8 <= FINISH;
        let sum = d1 + d2;
        let target = seed.position + sum as i8;
        if !either_die || target > FINISH {
            return None;
        }

        Some(LudoMove {
            seed_id: seed.id,
            from: seed.position,
            dice: smallvec![i1, i2],
            steps: sum,
            target,
            is_capture: self.capture_at(state, target).is_some(),
        })
    }

    /// Opponent seed capturable on the tile `target` maps to, if any.
    fn capture_at(&self, state: &LudoState, target: i8) -> Option<(u8, u8)> {
        let cell = self.geometry.cell(state.current().color, target)?;
        if state.shields_active() && self.geometry.is_shield(cell) {
            return None;
        }
        let opponent = state.opponent();
        opponent.seeds.iter().find_map(|seed| {
            self.geometry
                .cell(opponent.color, seed.position)
                .filter(|&c| c == cell)
                .map(|c| (seed.id, c))
        })
    }

    /// Apply a move.
    ///
    /// A move that does not match any currently legal candidate is a
    /// gameplay rejection and returns the state unchanged.
    pub fn apply_move(&self, state: &LudoState, mv: &LudoMove) -> EngineResult<LudoOutcome> {
        if mv.seed_id as usize >= SEEDS_PER_PLAYER {
            return Err(InvalidInput::OutOfRange {
                what: "seed",
                value: mv.seed_id as usize,
                limit: SEEDS_PER_PLAYER,
            });
        }
        if mv.dice.is_empty() {
            return Err(InvalidInput::Malformed("move consumes no dice"));
        }
        for &die_index in &mv.dice {
            if die_index >= state.dice.len() {
                return Err(InvalidInput::OutOfRange {
                    what: "die index",
                    value: die_index,
                    limit: state.dice.len(),
                });
            }
        }

        let Some(legal) = self.valid_moves(state).into_iter().find(|cand| {
            cand.seed_id == mv.seed_id
                && cand.target == mv.target
                && cand.dice.len() == mv.dice.len()
                && mv.dice.iter().all(|d| cand.dice.contains(d))
        }) else {
            return Ok(LudoOutcome::unchanged(state));
        };

        let mover = state.current_player;
        let mut next = state.clone();

        // Capture is re-resolved now, not trusted from move generation.
        let captured = self.capture_at(state, legal.target);

        {
            let seed = &mut next.players[mover.index()].seeds[legal.seed_id as usize];
            seed.position = legal.target;
            seed.landing_pos = legal.target;
            seed.animation_delay_ms = 0;
        }
        next.log.push_back(format!(
            "{} moved seed {} from {} to {}",
            mover, legal.seed_id, legal.from, legal.target
        ));

        let mut capture_event = None;
        if let Some((victim_seed, cell)) = captured {
            let delay = legal.steps as u32 * DELAY_PER_TILE_MS;
            let victim = mover.other();
            let seed = &mut next.players[victim.index()].seeds[victim_seed as usize];
            seed.position = HOUSE;
            seed.landing_pos = HOUSE;
            seed.animation_delay_ms = delay;

            capture_event = Some(CaptureEvent {
                victim,
                seed_id: victim_seed,
                cell,
                animation_delay_ms: delay,
            });
            next.log.push_back(format!(
                "{} captured seed {} of {} on cell {}",
                mover, victim_seed, victim, cell
            ));

            // Aggressive capture bonus: the capturing seed rides straight
            // to the finish instead of stopping on the capture tile.
            if state.level >= 3 {
                next.players[mover.index()].seeds[legal.seed_id as usize].position = FINISH;
            }
        }

        for &die_index in &legal.dice {
            next.dice_used[die_index] = true;
        }

        if next.players[mover.index()].has_won() {
            next.winner = Some(mover);
            next.log.push_back(format!("{} wins", mover));
        }

        let mut bonus_turn = false;
        let all_used = next.dice_used.iter().all(|&used| used);
        if next.winner.is_none() && all_used {
            let rolled_six = if state.level >= 3 {
                state.dice.len() == 2 && state.dice[0] == 6 && state.dice[1] == 6
            } else {
                state.dice.first() == Some(&6)
            };
            bonus_turn = rolled_six || (state.level < 3 && capture_event.is_some());

            next.dice.clear();
            next.dice_used.clear();
            next.waiting_for_roll = true;
            if !bonus_turn {
                next.current_player = mover.other();
            }
        }
        // With a die still unused the mover keeps going and
        // `waiting_for_roll` stays false.

        Ok(LudoOutcome {
            state: next,
            capture: capture_event,
            bonus_turn,
        })
    }

    /// Explicit forfeiture when no move exists.
    ///
    /// A no-op while a move is available, a roll is pending or the game
    /// is over.
    #[must_use]
    pub fn pass_turn(&self, state: &LudoState) -> LudoState {
        if state.waiting_for_roll
            || state.winner.is_some()
            || !self.valid_moves(state).is_empty()
        {
            return state.clone();
        }

        let mut next = state.clone();
        next.dice.clear();
        next.dice_used.clear();
        next.waiting_for_roll = true;
        next.current_player = state.current_player.other();
        next.log.push_back(format!("{} passes", state.current_player));
        next
    }
}

impl RuleEngine for LudoEngine {
    type State = LudoState;
    type Move = LudoMove;
    type Outcome = LudoOutcome;

    fn legal_moves(&self, state: &LudoState) -> Vec<LudoMove> {
        self.valid_moves(state)
    }

    fn apply(
        &self,
        state: &LudoState,
        mv: &LudoMove,
        _rng: &mut GameRng,
    ) -> EngineResult<LudoOutcome> {
        self.apply_move(state, mv)
    }

    fn is_terminal(&self, state: &LudoState) -> bool {
        state.winner.is_some()
    }

    fn winner(&self, state: &LudoState) -> Option<PlayerId> {
        state.winner
    }
}
