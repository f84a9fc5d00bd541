//! Aggregate statistics over the outcome log.

use peg_solitaire::{GameResult, Outcome, ParseResultError};
use tracing::warn;

/// Totals across all logged games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogStats {
    /// Games logged.
    pub games: usize,
    /// Games won.
    pub victories: usize,
    /// Games lost or abandoned.
    pub defeats: usize,
    /// Fewest pegs left in any game.
    pub best_remaining: Option<usize>,
    /// Lines that could not be parsed.
    pub skipped: usize,
}

impl LogStats {
    /// Folds parsed log lines into totals, skipping malformed ones.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Result<GameResult, ParseResultError>>,
    {
        results
            .into_iter()
            .fold(Self::default(), |mut stats, line| {
                match line {
                    Ok(result) => {
                        stats.games += 1;
                        match result.outcome() {
                            Outcome::Victory => stats.victories += 1,
                            Outcome::Defeat => stats.defeats += 1,
                        }
                        let pegs = *result.remaining_pegs();
                        stats.best_remaining =
                            Some(stats.best_remaining.map_or(pegs, |best| best.min(pegs)));
                    }
                    Err(e) => {
                        warn!(error = %e, "Skipping log line");
                        stats.skipped += 1;
                    }
                }
                stats
            })
    }
}

impl std::fmt::Display for LogStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Games played:   {}", self.games)?;
        writeln!(f, "Victories:      {}", self.victories)?;
        writeln!(f, "Defeats:        {}", self.defeats)?;
        match self.best_remaining {
            Some(best) => write!(f, "Fewest pegs:    {}", best)?,
            None => write!(f, "Fewest pegs:    -")?,
        }
        if self.skipped > 0 {
            write!(f, "\nSkipped lines:  {}", self.skipped)?;
        }
        Ok(())
    }
}
