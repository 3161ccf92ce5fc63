/// Detail tabs for a selected route. Favorites reuse the same set minus
/// Trips.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DetailTab {
    Stops,
    Trips,
    Live,
    Alerts,
}

impl DetailTab {
    pub const DEFAULT: DetailTab = DetailTab::Stops;

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Stops => "Stops",
            DetailTab::Trips => "Trips",
            DetailTab::Live => "Live Vehicles",
            DetailTab::Alerts => "Alerts",
        }
    }
}

/// Tab-selection state machine. Every transition bumps a monotonically
/// increasing generation; a fetch started under an older generation is
/// stale and its response must be discarded, so the content region always
/// shows the tab the user is actually on.
#[derive(Clone, PartialEq, Debug)]
pub struct TabState {
    active: DetailTab,
    generation: u64,
}

impl TabState {
    pub fn new() -> Self {
        Self {
            active: DetailTab::DEFAULT,
            generation: 0,
        }
    }

    pub fn active(&self) -> DetailTab {
        self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Switch to a tab. Re-selecting the active tab still bumps the
    /// generation, which doubles as a user-initiated reload.
    pub fn select(&self, tab: DetailTab) -> Self {
        Self {
            active: tab,
            generation: self.generation + 1,
        }
    }

    /// Entering a (new) route always lands on the default tab, whatever was
    /// active before.
    pub fn reset(&self) -> Self {
        Self {
            active: DetailTab::DEFAULT,
            generation: self.generation + 1,
        }
    }
}

impl Default for TabState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_default_tab() {
        assert_eq!(TabState::new().active(), DetailTab::Stops);
    }

    #[test]
    fn reset_returns_to_default_from_any_tab() {
        let state = TabState::new().select(DetailTab::Alerts);
        assert_eq!(state.active(), DetailTab::Alerts);

        let reset = state.reset();
        assert_eq!(reset.active(), DetailTab::Stops);
        assert!(reset.generation() > state.generation());
    }

    #[test]
    fn every_transition_bumps_the_generation() {
        let s0 = TabState::new();
        let s1 = s0.select(DetailTab::Live);
        let s2 = s1.select(DetailTab::Live);
        assert!(s1.generation() > s0.generation());
        assert!(s2.generation() > s1.generation());
    }

    #[test]
    fn stale_generation_is_detectable() {
        let s0 = TabState::new();
        let started_under = s0.generation();
        let s1 = s0.select(DetailTab::Alerts);
        // The fetch started under s0 must lose against the newer state.
        assert_ne!(started_under, s1.generation());
    }
}
