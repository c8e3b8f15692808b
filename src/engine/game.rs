//! The Pig game engine.

use tracing::{debug, info};

use crate::core::{
    Action, ActionRecord, DieRoller, EngineConfig, GameRng, GameState, PlayerId, MAX_FACE, MIN_FACE,
};
use crate::error::GameError;
use crate::events::{Events, GameEvent, GameObserver};
use crate::rules::RulesEngine;

/// Owns the game state and applies the three player actions to it.
///
/// Generic over the die so the presentation layer and tests can inject
/// their own; production code uses the seeded `GameRng`.
pub struct PigEngine<R = GameRng> {
    config: EngineConfig,
    pub(super) state: GameState,
    pub(super) dice: R,
    observers: Vec<Box<dyn GameObserver>>,
}

impl PigEngine<GameRng> {
    /// Create an engine rolling a `GameRng`.
    ///
    /// Uses `config.seed` when set, OS entropy otherwise.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_dice(config, rng)
    }
}

impl<R: DieRoller> PigEngine<R> {
    /// Create an engine rolling the given dice.
    #[must_use]
    pub fn with_dice(config: EngineConfig, dice: R) -> Self {
        Self {
            config,
            state: GameState::new(),
            dice,
            observers: Vec::new(),
        }
    }

    pub(super) fn from_parts(config: EngineConfig, state: GameState, dice: R) -> Self {
        Self {
            config,
            state,
            dice,
            observers: Vec::new(),
        }
    }

    /// Get the engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the dice.
    #[must_use]
    pub fn dice(&self) -> &R {
        &self.dice
    }

    /// Register an observer for every subsequent event.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Roll the die for the active player.
    ///
    /// A face other than 1 is added to the turn score. A 1 is a bust: the
    /// turn score drops to 0 and the other player takes over. Ignored once
    /// the game is over, returning no events.
    pub fn roll_dice(&mut self) -> Events {
        self.apply_action(Action::Roll).unwrap_or_else(|err| {
            debug!(%err, "roll ignored");
            Events::new()
        })
    }

    /// Bank the turn score for the active player.
    ///
    /// Ends the game if the new total reaches the winning score, otherwise
    /// passes the turn. Ignored once the game is over, returning no events.
    pub fn hold(&mut self) -> Events {
        self.apply_action(Action::Hold).unwrap_or_else(|err| {
            debug!(%err, "hold ignored");
            Events::new()
        })
    }

    /// Reset to the opening state. Always allowed.
    pub fn new_game(&mut self) -> Events {
        self.state = GameState::new();
        info!("new game");

        let mut events = Events::new();
        events.push(GameEvent::GameReset);
        for player in PlayerId::all() {
            events.push(GameEvent::CurrentScoreChanged { player, value: 0 });
        }
        for player in PlayerId::all() {
            events.push(GameEvent::TotalScoreChanged { player, value: 0 });
        }
        events.push(GameEvent::TurnSwitched {
            active_player: PlayerId::FIRST,
        });

        self.publish(events)
    }

    fn roll(&mut self) -> Result<Events, GameError> {
        self.ensure_in_progress()?;

        let face = self.dice.roll();
        if !(MIN_FACE..=MAX_FACE).contains(&face) {
            return Err(GameError::InvalidFace(face));
        }

        let player = self.state.active_player;
        self.record(player, Action::Roll, Some(face));

        let mut events = Events::new();
        events.push(GameEvent::DiceRolled { face });

        if face == 1 {
            self.state.current_score = 0;
            events.push(GameEvent::CurrentScoreChanged { player, value: 0 });
            debug!(%player, "bust");
            self.switch_player(&mut events);
        } else {
            self.state.current_score += u32::from(face);
            events.push(GameEvent::CurrentScoreChanged {
                player,
                value: self.state.current_score,
            });
            debug!(%player, face, current = self.state.current_score, "rolled");
        }

        Ok(self.publish(events))
    }

    fn bank(&mut self) -> Result<Events, GameError> {
        self.ensure_in_progress()?;

        let player = self.state.active_player;
        self.record(player, Action::Hold, None);

        let mut events = Events::new();

        self.state.totals[player] += self.state.current_score;
        let total = self.state.totals[player];
        events.push(GameEvent::TotalScoreChanged { player, value: total });

        self.state.current_score = 0;
        events.push(GameEvent::CurrentScoreChanged { player, value: 0 });
        debug!(%player, total, "held");

        if self.state.has_reached_goal(player) {
            self.state.game_over = true;
            events.push(GameEvent::PlayerWon { player });
            info!(%player, total, "player won");
        } else {
            self.switch_player(&mut events);
        }

        Ok(self.publish(events))
    }

    /// Hand the turn to the other player.
    fn switch_player(&mut self, events: &mut Events) {
        self.state.switch_player();
        events.push(GameEvent::TurnSwitched {
            active_player: self.state.active_player,
        });
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.state.game_over {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    fn record(&mut self, player: PlayerId, action: Action, face: Option<u8>) {
        if !self.config.record_history {
            return;
        }
        let sequence = self.state.next_sequence();
        let turn = self.state.turn_number;
        self.state
            .record_action(ActionRecord::new(player, action, face, turn, sequence));
    }

    fn publish(&mut self, events: Events) -> Events {
        for event in &events {
            for observer in &mut self.observers {
                observer.on_event(event);
            }
        }
        events
    }
}

impl<R: DieRoller> RulesEngine for PigEngine<R> {
    fn state(&self) -> &GameState {
        &self.state
    }

    fn apply_action(&mut self, action: Action) -> Result<Events, GameError> {
        match action {
            Action::Roll => self.roll(),
            Action::Hold => self.bank(),
            Action::NewGame => Ok(self.new_game()),
        }
    }
}
