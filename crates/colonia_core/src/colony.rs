//! Colony entity and the random vectors it is born with.

use crate::automaton::Automaton;
use colonia_data::{ColonySnapshot, Decision, Morphology, State, Strategy, Vec2};
use rand::Rng;
use uuid::Uuid;

/// Birth vectors of a colony: a point on the unit circle and a growth
/// vector along it, scaled by a factor in `[1.0, 1.5)`.
pub fn birth_vectors<R: Rng + ?Sized>(rng: &mut R) -> (Vec2, Vec2) {
    let x = rng.gen::<f64>() * random_sign(rng);
    let y = (1.0 - x * x).sqrt() * random_sign(rng);
    let position = Vec2::new(x, y);
    let growth = position * (rng.gen::<f64>() * 0.5 + 1.0);
    (position, growth)
}

fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.gen::<bool>() {
        1.0
    } else {
        -1.0
    }
}

/// A single bacterial colony.
///
/// Colonies are created and owned by a [`crate::Simulator`]; fields are only
/// mutated through the simulator's step.
#[derive(Debug, Clone)]
pub struct Colony {
    id: Uuid,
    position: Vec2,
    growth: Vec2,
    direction: Vec2,
    automaton: Automaton,
    strategy: Strategy,
    defects: bool,
    steps: u64,
}

/// Outcome of the fallible half of a step, applied afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ColonyUpdate {
    pub growth: Vec2,
    pub next_state: State,
}

impl Colony {
    pub(crate) fn new(
        id: Uuid,
        position: Vec2,
        growth: Vec2,
        automaton: Automaton,
        strategy: Strategy,
        defects: bool,
    ) -> Self {
        Self {
            id,
            position,
            growth,
            direction: position.normalized(),
            automaton,
            strategy,
            defects,
            steps: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn growth(&self) -> Vec2 {
        self.growth
    }

    /// Unit vector along the birth position.
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn defects(&self) -> bool {
        self.defects
    }

    pub fn decision(&self) -> Decision {
        Decision::from_defect(self.defects)
    }

    pub fn state(&self) -> State {
        self.automaton.current()
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn morphology(&self) -> Option<Morphology> {
        self.automaton.morphology()
    }

    pub fn is_dead(&self) -> bool {
        self.automaton.is_dead()
    }

    pub fn is_terminal(&self) -> bool {
        self.automaton.is_terminal()
    }

    /// Number of steps this colony has taken part in.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub(crate) fn apply(&mut self, update: ColonyUpdate) {
        self.growth = update.growth;
        self.automaton.commit(update.next_state);
        self.steps += 1;
    }

    pub(crate) fn set_defects(&mut self, defects: bool) {
        self.defects = defects;
    }

    pub fn snapshot(&self) -> ColonySnapshot {
        ColonySnapshot {
            id: self.id,
            position: self.position,
            growth: self.growth,
            state: self.state(),
            morphology: self.morphology(),
            strategy: self.strategy,
            defects: self.defects,
            dead: self.is_dead(),
            terminal: self.is_terminal(),
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_birth_vectors_on_unit_circle() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let (pos, growth) = birth_vectors(&mut rng);
            assert!((pos.length() - 1.0).abs() < 1e-9, "{pos:?}");
            let k = growth.length() / pos.length();
            assert!(k > 1.0 - 1e-9 && k < 1.5, "scale {k}");
            let dir = growth.normalized();
            assert!((dir.x - pos.x).abs() < 1e-9 && (dir.y - pos.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_birth_covers_all_quadrants() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let (p, _) = birth_vectors(&mut rng);
            let q = (p.x < 0.0) as usize * 2 + (p.y < 0.0) as usize;
            seen[q] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
