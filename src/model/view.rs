use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named filter controlling which tasks are displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Today,
    Upcoming,
    All,
    Completed,
}

impl View {
    /// Sidebar order
    pub const ALL: [View; 4] = [View::Today, View::Upcoming, View::All, View::Completed];

    /// Sidebar label
    pub fn label(self) -> &'static str {
        match self {
            View::Today => "Today",
            View::Upcoming => "Upcoming",
            View::All => "All Tasks",
            View::Completed => "Completed",
        }
    }

    /// Position in the sidebar
    pub fn index(self) -> usize {
        match self {
            View::Today => 0,
            View::Upcoming => 1,
            View::All => 2,
            View::Completed => 3,
        }
    }

    pub fn next(self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            View::Today => "today",
            View::Upcoming => "upcoming",
            View::All => "all",
            View::Completed => "completed",
        };
        f.write_str(s)
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(View::Today),
            "upcoming" => Ok(View::Upcoming),
            "all" => Ok(View::All),
            "completed" => Ok(View::Completed),
            other => Err(format!(
                "unknown view '{}' (expected today, upcoming, all or completed)",
                other
            )),
        }
    }
}
