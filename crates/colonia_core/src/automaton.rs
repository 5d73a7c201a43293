//! Table-driven deterministic finite automaton for colony morphology.
//!
//! A [`TransitionTable`] maps every declared `(state, symbol)` pair to exactly
//! one next state. It is validated once at construction, so a lookup for a
//! declared state can only fail for a state the table never declared.
//! [`Automaton`] layers the mutable current state on top of a shared table.

use crate::error::{Result, SimError};
use colonia_data::{Morphology, State, Symbol};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable `(state, symbol) -> state` mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTable {
    states: Vec<State>,
    transitions: HashMap<(State, Symbol), State>,
}

impl TransitionTable {
    /// Builds a table from rows in declaration order.
    ///
    /// Each row lists the next state for `a`..`e`. When a state is declared
    /// twice the first row wins for lookups, but both declarations are kept
    /// in [`TransitionTable::states`].
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (State, [State; 5])>,
    {
        let mut states = Vec::new();
        let mut entries = Vec::new();
        for (state, next) in rows {
            states.push(state);
            for symbol in Symbol::ALL {
                entries.push(((state, symbol), next[symbol.index()]));
            }
        }
        Self::from_entries(states, entries)
    }

    /// Builds a table from loose entries, checking that every declared state
    /// has a next state for every symbol.
    pub fn from_entries<I>(states: Vec<State>, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = ((State, Symbol), State)>,
    {
        if states.is_empty() {
            return Err(SimError::invalid_config(
                "transition table declares no states",
            ));
        }
        if states.iter().any(|s| s.is_dead()) {
            return Err(SimError::invalid_config(
                "the DEAD state cannot be declared as a table row",
            ));
        }

        let mut transitions = HashMap::new();
        for (key, next) in entries {
            if !states.contains(&key.0) {
                return Err(SimError::UndeclaredState(key.0));
            }
            transitions.entry(key).or_insert(next);
        }

        for &state in &states {
            for symbol in Symbol::ALL {
                let next = transitions
                    .get(&(state, symbol))
                    .ok_or(SimError::UnknownTransition {
                        state,
                        symbol: symbol.as_char(),
                    })?;
                if !next.is_dead() && !states.contains(next) {
                    return Err(SimError::UndeclaredState(*next));
                }
            }
        }

        Ok(Self {
            states,
            transitions,
        })
    }

    /// Declared states in source order, duplicates included.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn contains(&self, state: State) -> bool {
        self.states.contains(&state)
    }

    /// Next state for `state` on `symbol`. `DEAD` always maps to `DEAD`.
    pub fn transition(&self, state: State, symbol: Symbol) -> Result<State> {
        if state.is_dead() {
            return Ok(State::DEAD);
        }
        self.transitions
            .get(&(state, symbol))
            .copied()
            .ok_or(SimError::UnknownTransition {
                state,
                symbol: symbol.as_char(),
            })
    }

    /// Like [`TransitionTable::transition`] but takes a raw character, which
    /// must belong to the alphabet.
    pub fn transition_char(&self, state: State, symbol: char) -> Result<State> {
        if state.is_dead() {
            return Ok(State::DEAD);
        }
        let parsed =
            Symbol::from_char(symbol).ok_or(SimError::UnknownTransition { state, symbol })?;
        self.transition(state, parsed)
    }
}

/// A running DFA instance.
///
/// `DEAD` is absorbing. The terminal state only matters for reporting: the
/// automaton may leave it again if the table says so.
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Arc<[State]>,
    initial: State,
    terminal: State,
    current: State,
    table: Arc<TransitionTable>,
}

impl Automaton {
    pub fn new(
        states: Vec<State>,
        initial: State,
        terminal: State,
        table: Arc<TransitionTable>,
    ) -> Result<Self> {
        if let Some(&missing) = states.iter().find(|s| !s.is_dead() && !table.contains(**s)) {
            return Err(SimError::UndeclaredState(missing));
        }
        if !states.contains(&initial) || initial.is_dead() {
            return Err(SimError::UndeclaredState(initial));
        }
        if !terminal.is_dead() && !states.contains(&terminal) {
            return Err(SimError::UndeclaredState(terminal));
        }
        Ok(Self {
            states: states.into(),
            initial,
            terminal,
            current: initial,
            table,
        })
    }

    /// Uses the table's declared states as the state set.
    pub fn from_table(table: Arc<TransitionTable>, initial: State, terminal: State) -> Result<Self> {
        let states = table.states().to_vec();
        Self::new(states, initial, terminal, table)
    }

    /// Advances one step and returns the new current state.
    pub fn step(&mut self, symbol: Symbol) -> Result<State> {
        self.current = self.peek(symbol)?;
        Ok(self.current)
    }

    pub fn step_char(&mut self, symbol: char) -> Result<State> {
        self.current = self.table.transition_char(self.current, symbol)?;
        Ok(self.current)
    }

    /// Feeds every character of `input` in order, stopping at the first error.
    pub fn run(&mut self, input: &str) -> Result<State> {
        for c in input.chars() {
            self.step_char(c)?;
        }
        Ok(self.current)
    }

    /// State the automaton would move to on `symbol`, without moving.
    pub fn peek(&self, symbol: Symbol) -> Result<State> {
        self.table.transition(self.current, symbol)
    }

    /// Moves to a state previously obtained from [`Automaton::peek`].
    pub(crate) fn commit(&mut self, next: State) {
        if !self.current.is_dead() {
            self.current = next;
        }
    }

    pub fn reset(&mut self) {
        self.current = self.initial;
    }

    pub fn current(&self) -> State {
        self.current
    }

    pub fn initial(&self) -> State {
        self.initial
    }

    pub fn terminal(&self) -> State {
        self.terminal
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn table(&self) -> &Arc<TransitionTable> {
        &self.table
    }

    pub fn is_dead(&self) -> bool {
        self.current.is_dead()
    }

    pub fn is_terminal(&self) -> bool {
        self.current == self.terminal
    }

    pub fn morphology(&self) -> Option<Morphology> {
        self.current.morphology()
    }
}
