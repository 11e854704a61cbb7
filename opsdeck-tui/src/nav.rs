//! Navigation and screen switching utilities.

use serde::{Deserialize, Serialize};

/// Top-level screen of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Dashboard,
    Operations,
    Studio,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Operations => "Operations",
            Screen::Studio => "Studio",
        }
    }

    pub fn all() -> &'static [Screen] {
        &[Screen::Dashboard, Screen::Operations, Screen::Studio]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Screen> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> Screen {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Screen {
        let all = Self::all();
        let idx = self.index();
        all[if idx == 0 { all.len() - 1 } else { idx - 1 }]
    }
}

/// Tab within the studio screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StudioTab {
    Agents,
    Workflows,
    TestChat,
}

impl StudioTab {
    pub fn title(&self) -> &'static str {
        match self {
            StudioTab::Agents => "Agents",
            StudioTab::Workflows => "Workflows",
            StudioTab::TestChat => "Test Chat",
        }
    }

    pub fn all() -> &'static [StudioTab] {
        &[StudioTab::Agents, StudioTab::Workflows, StudioTab::TestChat]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> StudioTab {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> StudioTab {
        let all = Self::all();
        let idx = self.index();
        all[if idx == 0 { all.len() - 1 } else { idx - 1 }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_next_cycles() {
        let mut screen = Screen::Dashboard;
        for _ in 0..Screen::all().len() {
            screen = screen.next();
        }
        assert_eq!(screen, Screen::Dashboard);
    }

    #[test]
    fn screen_previous_inverts_next() {
        for screen in Screen::all() {
            assert_eq!(screen.next().previous(), *screen);
        }
    }

    #[test]
    fn studio_tab_cycles_both_ways() {
        for tab in StudioTab::all() {
            assert_eq!(tab.next().previous(), *tab);
        }
    }
}
