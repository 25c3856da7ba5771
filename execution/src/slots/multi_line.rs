//! Multi-line grid machine.
//!
//! The board is drawn deck-style: each column rebuilds the full weighted
//! strip and draws its rows from that private copy without replacement.
//! Columns are independent. A payline is a horizontal row index and pays
//! only when every column carries the same symbol at that row.

use super::{GameRng, Reels, SlotMachine, SpinError, SpinResult};
use reelhouse_types::{strip_population, Symbol, COLS, ROWS};

/// Build one column's working strip from the symbol populations.
fn build_strip() -> Vec<Symbol> {
    let mut strip = Vec::with_capacity(strip_population());
    for symbol in Symbol::ALL {
        for _ in 0..symbol.population() {
            strip.push(symbol);
        }
    }
    strip
}

/// Draw a full grid of `cols` columns with `rows` symbols each.
///
/// Draws within a column consume that column's strip; requesting more rows
/// than the strip holds fails without producing a partial grid.
pub fn spin_grid(
    rows: usize,
    cols: usize,
    rng: &mut GameRng,
) -> Result<Vec<Vec<Symbol>>, SpinError> {
    let population = strip_population();
    if rows > population {
        return Err(SpinError::ReelExhausted { rows, population });
    }

    let mut columns = Vec::with_capacity(cols);
    for _ in 0..cols {
        let mut strip = build_strip();
        let mut column = Vec::with_capacity(rows);
        for _ in 0..rows {
            match rng.draw(&mut strip) {
                Some(symbol) => column.push(symbol),
                None => return Err(SpinError::ReelExhausted { rows, population }),
            }
        }
        columns.push(column);
    }
    Ok(columns)
}

/// Resolve winnings across the active paylines.
///
/// Returned line numbers are 1-indexed; lines that missed contribute zero
/// and are omitted.
pub fn check_winnings(columns: &[Vec<Symbol>], lines: u8, bet: u64) -> (u64, Vec<u8>) {
    let mut winnings = 0u64;
    let mut win_lines = Vec::new();

    for line in 0..lines as usize {
        let symbol = match columns.first().and_then(|column| column.get(line)) {
            Some(&symbol) => symbol,
            None => continue,
        };
        if columns
            .iter()
            .all(|column| column.get(line) == Some(&symbol))
        {
            winnings += symbol.line_value() * bet;
            win_lines.push(line as u8 + 1);
        }
    }

    (winnings, win_lines)
}

pub struct MultiLine;

impl SlotMachine for MultiLine {
    fn play(bet: u64, lines: u8, rng: &mut GameRng) -> Result<SpinResult, SpinError> {
        let columns = spin_grid(ROWS, COLS, rng)?;
        let (winnings, win_lines) = check_winnings(&columns, lines, bet);
        Ok(SpinResult {
            reels: Reels::Grid(columns),
            winnings,
            win_lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        let mut rng = GameRng::from_seed(1);
        let columns = spin_grid(ROWS, COLS, &mut rng).unwrap();

        assert_eq!(columns.len(), COLS);
        for column in &columns {
            assert_eq!(column.len(), ROWS);
        }
    }

    #[test]
    fn test_column_respects_population() {
        // Without replacement: no column may carry more copies of a symbol
        // than the strip holds.
        let mut rng = GameRng::from_seed(2);
        for _ in 0..200 {
            let columns = spin_grid(strip_population(), COLS, &mut rng).unwrap();
            for column in &columns {
                for symbol in Symbol::ALL {
                    let copies = column.iter().filter(|&&s| s == symbol).count();
                    assert!(copies <= symbol.population());
                }
            }
        }
    }

    #[test]
    fn test_rows_beyond_population_fail() {
        let mut rng = GameRng::from_seed(3);
        let err = spin_grid(strip_population() + 1, COLS, &mut rng).unwrap_err();
        assert_eq!(
            err,
            SpinError::ReelExhausted {
                rows: strip_population() + 1,
                population: strip_population(),
            }
        );
    }

    #[test]
    fn test_winnings_on_matching_rows() {
        // Row 0 matches on A, row 1 matches on D, row 2 is mixed.
        let columns = vec![
            vec![Symbol::A, Symbol::D, Symbol::B],
            vec![Symbol::A, Symbol::D, Symbol::C],
            vec![Symbol::A, Symbol::D, Symbol::B],
        ];

        let (winnings, win_lines) = check_winnings(&columns, 3, 10);
        assert_eq!(
            winnings,
            Symbol::A.line_value() * 10 + Symbol::D.line_value() * 10
        );
        assert_eq!(win_lines, vec![1, 2]);
    }

    #[test]
    fn test_inactive_lines_do_not_pay() {
        let columns = vec![
            vec![Symbol::B, Symbol::D, Symbol::D],
            vec![Symbol::C, Symbol::D, Symbol::D],
            vec![Symbol::B, Symbol::D, Symbol::D],
        ];

        // Only line 1 active: rows 2 and 3 match but are not played.
        let (winnings, win_lines) = check_winnings(&columns, 1, 5);
        assert_eq!(winnings, 0);
        assert!(win_lines.is_empty());

        // All three active: both matching rows pay.
        let (winnings, win_lines) = check_winnings(&columns, 3, 5);
        assert_eq!(winnings, Symbol::D.line_value() * 5 * 2);
        assert_eq!(win_lines, vec![2, 3]);
    }

    #[test]
    fn test_resolver_is_pure() {
        let columns = vec![
            vec![Symbol::C, Symbol::A, Symbol::B],
            vec![Symbol::C, Symbol::B, Symbol::B],
            vec![Symbol::C, Symbol::A, Symbol::B],
        ];

        let first = check_winnings(&columns, 3, 7);
        for _ in 0..10 {
            assert_eq!(check_winnings(&columns, 3, 7), first);
        }
    }

    #[test]
    fn test_play_balances_result() {
        let mut rng = GameRng::from_seed(11);
        for _ in 0..500 {
            let result = MultiLine::play(4, 3, &mut rng).unwrap();
            let columns = match &result.reels {
                Reels::Grid(columns) => columns,
                Reels::Line(_) => panic!("multi-line machine produced a line"),
            };

            // Reported winnings always equal a fresh resolution.
            let (winnings, win_lines) = check_winnings(columns, 3, 4);
            assert_eq!(result.winnings, winnings);
            assert_eq!(result.win_lines, win_lines);
        }
    }
}
