//! Fan poll tally.

use crate::consts::POLL_SEPARATOR;
use crate::util::escape::escape_html;

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

/// One rendered result row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollLine {
    pub candidate: String,
    pub votes: u32,
    /// Share of all votes, rounded to the nearest whole percent.
    pub percent: u32,
}

/// Vote counts per candidate, kept in order of each candidate's first vote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Poll {
    tally: Vec<(String, u32)>,
}

impl Poll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidate key for a vote button: `data-player`, else its visible text.
    #[must_use]
    pub fn candidate_key(data_player: Option<&str>, button_text: &str) -> String {
        data_player
            .filter(|key| !key.is_empty())
            .map_or_else(|| button_text.trim().to_owned(), str::to_owned)
    }

    pub fn vote(&mut self, candidate: &str) {
        match self.tally.iter_mut().find(|(name, _)| name == candidate) {
            Some((_, count)) => *count = count.saturating_add(1),
            None => self.tally.push((candidate.to_owned(), 1)),
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.tally.iter().map(|(_, count)| *count).sum()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<PollLine> {
        let total = self.total();
        self.tally
            .iter()
            .map(|(candidate, votes)| PollLine { candidate: candidate.clone(), votes: *votes, percent: percent_of(*votes, total) })
            .collect()
    }

    /// Result markup: `<strong>A</strong>: 2 (67%) • <strong>B</strong>: 1 (33%)`.
    #[must_use]
    pub fn render_html(&self) -> String {
        self.lines()
            .iter()
            .map(|line| format!("<strong>{}</strong>: {} ({}%)", escape_html(&line.candidate), line.votes, line.percent))
            .collect::<Vec<_>>()
            .join(POLL_SEPARATOR)
    }
}

fn percent_of(votes: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    // Round half up in integer arithmetic: (200v + t) / 2t.
    let numerator = u64::from(votes) * 200 + u64::from(total);
    let denominator = u64::from(total) * 2;
    u32::try_from(numerator / denominator).unwrap_or(100)
}
