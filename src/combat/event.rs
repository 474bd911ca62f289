//! Combat events and the presentation sink that receives them.
//!
//! The state machine calls `Notifier::notify` at the moment each event
//! becomes true. Notifiers cannot fail and cannot reach back into the match,
//! so whatever the presentation layer does (or fails to do) with an event
//! has no effect on the game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DieRoll, Side};

/// Something the presentation layer may want to animate or play a sound for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CombatEvent {
    /// A die landed.
    DiceRolled { value: DieRoll },
    /// The attacking side landed a hit.
    Attack { side: Side },
    /// The defending side blocked.
    Block { side: Side },
    /// The defending side struck back.
    Counter { side: Side },
    /// A side took damage (zero for the defender on a block).
    Damage { side: Side, amount: i32 },
    /// The match ended.
    GameOver { winner: Side },
}

/// Receiver for combat events.
pub trait Notifier {
    fn notify(&mut self, event: CombatEvent);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, event: CombatEvent) {
        (**self).notify(event);
    }
}

/// Collects every event, in order.
impl Notifier for Vec<CombatEvent> {
    fn notify(&mut self, event: CombatEvent) {
        self.push(event);
    }
}

/// Discards events. For headless simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _event: CombatEvent) {}
}

/// Adapts a closure into a `Notifier`.
pub struct FnNotifier<F>(pub F);

impl<F: FnMut(CombatEvent)> Notifier for FnNotifier<F> {
    fn notify(&mut self, event: CombatEvent) {
        (self.0)(event);
    }
}

/// Events produced by a single roll.
///
/// A roll emits at most four events (die, outcome, damage, game over), so
/// the buffer never touches the heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventBuffer(SmallVec<[CombatEvent; 4]>);

impl EventBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[CombatEvent] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CombatEvent> {
        self.0.iter()
    }

    /// Forward the buffered events to another notifier and clear.
    pub fn drain_into(&mut self, target: &mut impl Notifier) {
        for event in self.0.drain(..) {
            target.notify(event);
        }
    }
}

impl Notifier for EventBuffer {
    fn notify(&mut self, event: CombatEvent) {
        self.0.push(event);
    }
}
