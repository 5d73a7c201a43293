//! Transition table loading from CSV.
//!
//! Expected layout: a header with a `state` column and one column per
//! symbol `a`..`e` in any order, then one integer row per state. `-1` is the
//! dead state. Blank lines are skipped.
//!
//! ```text
//! state,a,b,c,d,e
//! 0,1,1,0,0,-1
//! ```

use crate::error::{IoError, Result};
use colonia_core::TransitionTable;
use colonia_data::{State, Symbol};
use std::fs;
use std::path::Path;

struct Columns {
    state: usize,
    symbols: [usize; 5],
    width: usize,
}

fn parse_header(line: usize, header: &str) -> Result<Columns> {
    let names: Vec<&str> = header
        .trim_start_matches('\u{feff}')
        .split(',')
        .map(str::trim)
        .collect();

    let mut state = None;
    let mut symbols = [None; 5];
    for (i, name) in names.iter().enumerate() {
        if *name == "state" {
            if state.replace(i).is_some() {
                return Err(IoError::parse(line, "duplicate 'state' column"));
            }
            continue;
        }
        let mut chars = name.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => Symbol::from_char(c),
            _ => None,
        }
        .ok_or_else(|| IoError::parse(line, format!("unknown column {name:?}")))?;
        if symbols[symbol.index()].replace(i).is_some() {
            return Err(IoError::parse(line, format!("duplicate column {name:?}")));
        }
    }

    let state = state.ok_or_else(|| IoError::parse(line, "missing 'state' column"))?;
    let mut resolved = [0usize; 5];
    for symbol in Symbol::ALL {
        resolved[symbol.index()] = symbols[symbol.index()].ok_or_else(|| {
            IoError::parse(line, format!("missing column '{}'", symbol.as_char()))
        })?;
    }

    Ok(Columns {
        state,
        symbols: resolved,
        width: names.len(),
    })
}

fn parse_cell(line: usize, cell: &str) -> Result<State> {
    cell.trim()
        .parse::<i32>()
        .map(State)
        .map_err(|e| IoError::parse(line, format!("invalid state {:?}: {e}", cell.trim())))
}

/// Parses CSV text into a validated table.
pub fn parse_table_csv(content: &str) -> Result<TransitionTable> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| IoError::validation("transition table is empty"))?;
    let columns = parse_header(header_line, header)?;

    let mut rows = Vec::new();
    for (line, text) in lines {
        let cells: Vec<&str> = text.split(',').collect();
        if cells.len() != columns.width {
            return Err(IoError::parse(
                line,
                format!("expected {} cells, found {}", columns.width, cells.len()),
            ));
        }
        let state = parse_cell(line, cells[columns.state])?;
        let mut next = [State::DEAD; 5];
        for symbol in Symbol::ALL {
            next[symbol.index()] = parse_cell(line, cells[columns.symbols[symbol.index()]])?;
        }
        rows.push((state, next));
    }

    Ok(TransitionTable::from_rows(rows)?)
}

/// Reads and parses a CSV transition table.
pub fn load_table_csv<P: AsRef<Path>>(path: P) -> Result<TransitionTable> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| IoError::from(e).with_context(format!("reading {}", path.display())))?;
    let table = parse_table_csv(&content)
        .map_err(|e| e.with_context(format!("parsing {}", path.display())))?;
    tracing::info!(
        path = %path.display(),
        states = table.states().len(),
        "Loaded transition table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colonia_core::SimError;

    const SAMPLE: &str = "state,a,b,c,d,e\n0,1,0,0,0,-1\n1,1,1,1,1,5\n\n5,5,5,5,5,5\n";

    #[test]
    fn test_parse_sample() {
        let table = parse_table_csv(SAMPLE).unwrap();
        assert_eq!(table.states(), &[State(0), State(1), State(5)]);
        assert_eq!(table.transition(State(0), Symbol::A).unwrap(), State(1));
        assert_eq!(table.transition(State(0), Symbol::E).unwrap(), State::DEAD);
        assert_eq!(table.transition(State(1), Symbol::E).unwrap(), State(5));
    }

    #[test]
    fn test_column_order_is_free() {
        let table = parse_table_csv("e, state, d,c,b,a\n-1,0,0,0,0,0\n").unwrap();
        assert_eq!(table.transition(State(0), Symbol::E).unwrap(), State::DEAD);
        assert_eq!(table.transition(State(0), Symbol::A).unwrap(), State(0));
    }

    #[test]
    fn test_missing_symbol_column() {
        let err = parse_table_csv("state,a,b,c,d\n0,0,0,0,0\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 1, .. }));
        assert!(err.to_string().contains("'e'"));
    }

    #[test]
    fn test_unknown_column() {
        let err = parse_table_csv("state,a,b,c,d,e,f\n").unwrap_err();
        assert!(err.to_string().contains("\"f\""));
    }

    #[test]
    fn test_short_row() {
        let err = parse_table_csv("state,a,b,c,d,e\n0,0,0\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_bad_number() {
        let err = parse_table_csv("state,a,b,c,d,e\n0,0,x,0,0,0\n").unwrap_err();
        assert!(matches!(err, IoError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_undeclared_target() {
        let err = parse_table_csv("state,a,b,c,d,e\n0,3,0,0,0,0\n").unwrap_err();
        assert!(matches!(err, IoError::Sim(SimError::UndeclaredState(State(3)))));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_table_csv("\n\n"),
            Err(IoError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_table_csv("no/such/table.csv").unwrap_err();
        assert!(matches!(err, IoError::Context { .. }));
    }
}
