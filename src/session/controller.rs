//! Screen state machine driving the progression and combat engines from
//! discrete input triggers.

use crate::catalog::Catalog;
use crate::combat::{CombatEvent, CombatSession, EncounterOutcome, EncounterRules, SingleEnemyRules};
use crate::core::config::GameConfig;
use crate::progression::{draw, DrawResult};
use crate::save::{KeyValueStore, SaveRecord, SaveStore};
use rand::Rng;

/// What the player is looking at.
#[derive(Debug)]
pub enum Screen {
    Menu,
    /// Placeholder; node traversal is not implemented.
    Map,
    Combat(CombatSession),
    /// Showing the result of the last draw.
    Reveal(DrawResult),
}

/// Payload-free mirror of [`Screen`] for comparisons and events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Menu,
    Map,
    Combat,
    Reveal,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Menu => ScreenKind::Menu,
            Screen::Map => ScreenKind::Map,
            Screen::Combat(_) => ScreenKind::Combat,
            Screen::Reveal(_) => ScreenKind::Reveal,
        }
    }
}

/// UI-agnostic input triggers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionInput {
    Draw,
    StartRun,
    OpenMap,
    /// One discrete press of a hero's activation key.
    KeyPressed(char),
    Ultimate { key: char, charge_fraction: f64 },
    /// Back out of the current screen to the menu.
    Dismiss,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    ScreenChanged(ScreenKind),
    Drew(DrawResult),
    RunStarted {
        party: Vec<String>,
        enemies: Vec<String>,
    },
    Combat(CombatEvent),
    RunEnded(EncounterOutcome),
    RunAbandoned,
}

/// Factory for the encounter policy of each new run.
pub type RulesFactory = Box<dyn Fn() -> Box<dyn EncounterRules>>;

/// Owns everything a play session mutates: the reconciled save record, the
/// save store it is written through to, and the active screen.
pub struct Session<S: KeyValueStore, R: Rng> {
    catalog: Catalog,
    saves: SaveStore<S>,
    record: SaveRecord,
    config: GameConfig,
    rng: R,
    screen: Screen,
    rules: RulesFactory,
}

impl<S: KeyValueStore, R: Rng> Session<S, R> {
    /// Loads and reconciles the save, then opens the menu.
    pub fn new(catalog: Catalog, store: S, config: GameConfig, rng: R) -> Self {
        let saves = SaveStore::with_key(store, config.save_key.clone());
        let record = saves.load_reconciled(&catalog);
        tracing::info!(
            unlocked = record.unlocked.len(),
            demon_souls = record.currency,
            "session started"
        );
        Self {
            catalog,
            saves,
            record,
            config,
            rng,
            screen: Screen::Menu,
            rules: Box::new(|| Box::new(SingleEnemyRules) as Box<dyn EncounterRules>),
        }
    }

    /// Replaces the encounter policy used by future runs.
    pub fn with_rules(mut self, rules: RulesFactory) -> Self {
        self.rules = rules;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn record(&self) -> &SaveRecord {
        &self.record
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    pub fn saves(&self) -> &SaveStore<S> {
        &self.saves
    }

    pub fn combat(&self) -> Option<&CombatSession> {
        match &self.screen {
            Screen::Combat(combat) => Some(combat),
            _ => None,
        }
    }

    fn set_screen(&mut self, screen: Screen, events: &mut Vec<SessionEvent>) {
        let kind = screen.kind();
        self.screen = screen;
        events.push(SessionEvent::ScreenChanged(kind));
    }

    /// Reacts to one input trigger. Triggers that make no sense on the
    /// current screen are ignored.
    pub fn handle_input(&mut self, input: SessionInput) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        match (input, self.screen.kind()) {
            (SessionInput::Draw, ScreenKind::Menu | ScreenKind::Reveal) => {
                let result = draw(
                    &mut self.record,
                    &self.catalog,
                    &mut self.saves,
                    &self.config.progression,
                    &mut self.rng,
                );
                events.push(SessionEvent::Drew(result.clone()));
                self.set_screen(Screen::Reveal(result), &mut events);
            }
            (SessionInput::StartRun, ScreenKind::Menu | ScreenKind::Map) => {
                let combat = CombatSession::start_with_rules(
                    &self.record,
                    &self.catalog,
                    &self.config,
                    (self.rules)(),
                );
                let party: Vec<String> =
                    combat.party().iter().map(|h| h.hero_id().to_string()).collect();
                let enemies: Vec<String> = combat
                    .enemies()
                    .iter()
                    .map(|e| e.enemy_id().to_string())
                    .collect();
                tracing::info!(?party, ?enemies, "run started");
                events.push(SessionEvent::RunStarted { party, enemies });
                self.set_screen(Screen::Combat(combat), &mut events);
            }
            (SessionInput::OpenMap, ScreenKind::Menu) => {
                self.set_screen(Screen::Map, &mut events);
            }
            (SessionInput::KeyPressed(key), ScreenKind::Combat) => {
                if let Screen::Combat(combat) = &mut self.screen {
                    combat.press_key(key);
                }
            }
            (
                SessionInput::Ultimate {
                    key,
                    charge_fraction,
                },
                ScreenKind::Combat,
            ) => {
                if let Screen::Combat(combat) = &mut self.screen {
                    combat.request_ultimate(key, charge_fraction);
                }
            }
            (SessionInput::Dismiss, ScreenKind::Combat) => {
                tracing::info!("run abandoned");
                events.push(SessionEvent::RunAbandoned);
                self.set_screen(Screen::Menu, &mut events);
            }
            (SessionInput::Dismiss, ScreenKind::Map | ScreenKind::Reveal) => {
                self.set_screen(Screen::Menu, &mut events);
            }
            _ => {}
        }
        events
    }

    /// Advances the active encounter by one tick. Returns to the menu when
    /// the encounter ends.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let Screen::Combat(combat) = &mut self.screen else {
            return events;
        };

        events.extend(combat.tick().into_iter().map(SessionEvent::Combat));

        if let Some(outcome) = combat.outcome() {
            tracing::info!(?outcome, ticks = combat.ticks(), "run ended");
            events.push(SessionEvent::RunEnded(outcome));
            self.set_screen(Screen::Menu, &mut events);
        }
        events
    }
}
