//! Application state and view state definitions.
//!
//! The whole console is a tree of mutually exclusive view-selector flags
//! plus pure filters from `opsdeck-core`. Nothing here mutates seed data;
//! the studio keeps a per-session working copy of the agent list.

use crate::config::TuiConfig;
use crate::nav::{Screen, StudioTab};
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::OpsdeckTheme;
use chrono::NaiveDate;
use opsdeck_core::{
    dataset, filter_records, ActionKind, AgentDefinition, Channel, ChannelStat, DrillLevel,
    Industry, IndustryProfile, OperationalRecord, Period, StatusBucket,
};

/// Which text input currently consumes keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    #[default]
    None,
    Search,
    Date,
    Chat,
}

/// One turn of the studio test conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    Operator,
    Agent,
}

/// Modal offering the operator actions for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionModal {
    pub record_id: String,
    pub selected: usize,
}

impl ActionModal {
    pub fn selected_action(&self) -> ActionKind {
        ActionKind::all()[self.selected % ActionKind::all().len()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardViewState {
    pub level: DrillLevel,
    pub period: Period,
    /// Channel chosen at drill level 3; scopes level 4.
    pub selected_channel: Option<Channel>,
    /// Record chosen at drill level 3's conversation list; scopes level 4
    /// when no channel is selected.
    pub selected_record: Option<String>,
}

impl DashboardViewState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct OperationsViewState {
    pub query: String,
    /// Raw date text as typed; parsed on apply.
    pub date_input: String,
    pub search_date: Option<NaiveDate>,
    pub bucket: Option<StatusBucket>,
    pub selected: Option<String>,
}

impl OperationsViewState {
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.date_input.clear();
        self.search_date = None;
        self.bucket = None;
    }
}

#[derive(Debug, Clone)]
pub struct StudioViewState {
    pub tab: StudioTab,
    /// Session-local working copy of the industry's agents.
    pub agents: Vec<AgentDefinition>,
    pub selected_agent: Option<usize>,
    pub transcript: Vec<ChatTurn>,
    pub chat_input: String,
    /// True while a simulated reply is in flight.
    pub reply_pending: bool,
}

impl StudioViewState {
    pub fn for_industry(industry: Industry) -> Self {
        Self {
            tab: StudioTab::Agents,
            agents: dataset(industry).agents.clone(),
            selected_agent: None,
            transcript: Vec::new(),
            chat_input: String::new(),
            reply_pending: false,
        }
    }
}

pub struct App {
    pub config: TuiConfig,
    pub theme: OpsdeckTheme,
    pub industry: Industry,
    pub active_screen: Screen,

    pub dashboard: DashboardViewState,
    pub operations: OperationsViewState,
    pub studio: StudioViewState,

    pub notifications: Vec<Notification>,
    pub action_modal: Option<ActionModal>,
    pub help_open: bool,
    pub input_focus: InputFocus,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        let industry = config.default_industry;
        Self {
            config,
            theme: OpsdeckTheme::opsdeck(),
            industry,
            active_screen: Screen::Dashboard,
            dashboard: DashboardViewState::default(),
            operations: OperationsViewState::default(),
            studio: StudioViewState::for_industry(industry),
            notifications: Vec::new(),
            action_modal: None,
            help_open: false,
            input_focus: InputFocus::None,
        }
    }

    // ------------------------------------------------------------------
    // Dataset access
    // ------------------------------------------------------------------

    pub fn profile(&self) -> &'static IndustryProfile {
        opsdeck_core::profile(self.industry)
    }

    pub fn records(&self) -> &'static [OperationalRecord] {
        &dataset(self.industry).records
    }

    /// Channel stats for the dashboard's current period.
    pub fn channel_stats(&self) -> Vec<&'static ChannelStat> {
        dataset(self.industry)
            .channel_stats
            .iter()
            .filter(|s| s.period == self.dashboard.period)
            .collect()
    }

    /// Records visible in the operations console under the active filters.
    pub fn visible_records(&self) -> Vec<&'static OperationalRecord> {
        filter_records(
            self.records(),
            &self.operations.query,
            self.operations.bucket,
            self.operations.search_date,
        )
    }

    pub fn selected_record(&self) -> Option<&'static OperationalRecord> {
        let id = self.operations.selected.as_deref()?;
        self.records().iter().find(|r| r.record_id == id)
    }

    /// Records shown at dashboard drill level 4, scoped by the level-3
    /// selection. Channel takes precedence when both are set.
    pub fn drill_records(&self) -> Vec<&'static OperationalRecord> {
        if self.dashboard.selected_channel.is_some() {
            // Seed data has no per-record channel attribution; a channel
            // selection scopes to records with timeline activity.
            self.records()
                .iter()
                .filter(|r| !r.timeline.is_empty())
                .collect()
        } else if let Some(id) = self.dashboard.selected_record.as_deref() {
            self.records()
                .iter()
                .filter(|r| r.record_id == id)
                .collect()
        } else {
            self.records().iter().collect()
        }
    }

    // ------------------------------------------------------------------
    // Industry switching
    // ------------------------------------------------------------------

    /// Replace the active dataset pointer. Resets drill-down to level 1 and
    /// clears every selection, per the console's navigation contract.
    pub fn switch_industry(&mut self, industry: Industry) {
        if industry == self.industry {
            return;
        }
        tracing::info!(from = %self.industry, to = %industry, "industry switched");
        self.industry = industry;
        self.dashboard.reset();
        self.operations = OperationsViewState::default();
        self.studio = StudioViewState::for_industry(industry);
        self.action_modal = None;
        self.input_focus = InputFocus::None;
    }

    pub fn cycle_industry(&mut self) {
        let next = Industry::from_index((self.industry.index() + 1) % Industry::all().len())
            .unwrap_or(Industry::Clinic);
        self.switch_industry(next);
    }

    // ------------------------------------------------------------------
    // Dashboard drill-down
    // ------------------------------------------------------------------

    pub fn drill_in(&mut self) {
        self.dashboard.level = self.dashboard.level.deeper();
    }

    pub fn drill_out(&mut self) {
        self.dashboard.level = self.dashboard.level.shallower();
        if self.dashboard.level < DrillLevel::clamped(4) {
            // Leaving level 4 invalidates the conversation scope.
            self.dashboard.selected_record = None;
        }
        if self.dashboard.level < DrillLevel::clamped(3) {
            self.dashboard.selected_channel = None;
        }
    }

    pub fn cycle_period(&mut self) {
        self.dashboard.period = self.dashboard.period.next();
    }

    // ------------------------------------------------------------------
    // Selection navigation
    // ------------------------------------------------------------------

    pub fn select_next(&mut self) {
        if let Some(modal) = self.action_modal.as_mut() {
            modal.selected = (modal.selected + 1) % ActionKind::all().len();
            return;
        }
        match self.active_screen {
            Screen::Dashboard => self.dashboard_select(1),
            Screen::Operations => {
                let visible = self.visible_records();
                select_next_record(&visible, &mut self.operations.selected);
            }
            Screen::Studio => {
                if self.studio.tab == StudioTab::Agents {
                    wrap_next(self.studio.agents.len(), &mut self.studio.selected_agent);
                }
            }
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(modal) = self.action_modal.as_mut() {
            let len = ActionKind::all().len();
            modal.selected = if modal.selected == 0 {
                len - 1
            } else {
                modal.selected - 1
            };
            return;
        }
        match self.active_screen {
            Screen::Dashboard => self.dashboard_select(-1),
            Screen::Operations => {
                let visible = self.visible_records();
                select_prev_record(&visible, &mut self.operations.selected);
            }
            Screen::Studio => {
                if self.studio.tab == StudioTab::Agents {
                    wrap_prev(self.studio.agents.len(), &mut self.studio.selected_agent);
                }
            }
        }
    }

    fn dashboard_select(&mut self, step: i8) {
        match self.dashboard.level.as_u8() {
            3 => {
                let channels = Channel::all();
                let mut index = self
                    .dashboard
                    .selected_channel
                    .and_then(|c| channels.iter().position(|x| *x == c));
                if step >= 0 {
                    wrap_next(channels.len(), &mut index);
                } else {
                    wrap_prev(channels.len(), &mut index);
                }
                self.dashboard.selected_channel = index.map(|i| channels[i]);
            }
            4 => {
                let records: Vec<&OperationalRecord> = self.records().iter().collect();
                if step >= 0 {
                    select_next_record(&records, &mut self.dashboard.selected_record);
                } else {
                    select_prev_record(&records, &mut self.dashboard.selected_record);
                }
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Operations console
    // ------------------------------------------------------------------

    pub fn open_selected_record(&mut self) {
        if self.operations.selected.is_none() {
            if let Some(first) = self.visible_records().first() {
                self.operations.selected = Some(first.record_id.clone());
            }
        }
    }

    pub fn cycle_bucket(&mut self) {
        self.operations.bucket = match self.operations.bucket {
            None => Some(StatusBucket::Resolved),
            Some(StatusBucket::Resolved) => Some(StatusBucket::Escalated),
            Some(StatusBucket::Escalated) => Some(StatusBucket::Pending),
            Some(StatusBucket::Pending) => Some(StatusBucket::Error),
            Some(StatusBucket::Error) => None,
        };
        self.reconcile_selection();
    }

    pub fn clear_filters(&mut self) {
        self.operations.clear_filters();
    }

    /// Drop the selection if filtering hid the selected record.
    fn reconcile_selection(&mut self) {
        if let Some(id) = self.operations.selected.as_deref() {
            let still_visible = self.visible_records().iter().any(|r| r.record_id == id);
            if !still_visible {
                self.operations.selected = None;
            }
        }
    }

    /// Parse the typed date filter. Unparseable input degrades to "no date
    /// filter" with a warning; there is no error state.
    pub fn apply_date_input(&mut self) {
        let raw = self.operations.date_input.trim().to_string();
        if raw.is_empty() {
            self.operations.search_date = None;
            return;
        }
        match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => {
                self.operations.search_date = Some(date);
                self.reconcile_selection();
            }
            Err(_) => {
                self.operations.search_date = None;
                self.notify(
                    NotificationLevel::Warning,
                    format!("Ignoring unparseable date '{}' (want YYYY-MM-DD)", raw),
                );
            }
        }
    }

    // ------------------------------------------------------------------
    // Action modal
    // ------------------------------------------------------------------

    pub fn open_actions(&mut self) {
        let record_id = match self.active_screen {
            Screen::Operations => self.operations.selected.clone(),
            Screen::Dashboard => self.dashboard.selected_record.clone(),
            Screen::Studio => None,
        };
        match record_id {
            Some(record_id) => {
                self.action_modal = Some(ActionModal {
                    record_id,
                    selected: 0,
                });
            }
            None => self.notify(NotificationLevel::Info, "Select a record first"),
        }
    }

    /// Submit the modal's highlighted action. Cosmetic by design: the
    /// intent is logged and the modal closes; no record changes.
    pub fn submit_action(&mut self) {
        if let Some(modal) = self.action_modal.take() {
            let action = modal.selected_action();
            tracing::info!(record = %modal.record_id, action = %action, "operator action submitted");
            self.notify(
                NotificationLevel::Success,
                format!("{} queued for {}", action, modal.record_id),
            );
        }
    }

    pub fn close_modal(&mut self) {
        self.action_modal = None;
    }

    // ------------------------------------------------------------------
    // Studio
    // ------------------------------------------------------------------

    pub fn next_studio_tab(&mut self) {
        self.studio.tab = self.studio.tab.next();
    }

    /// Flip the selected agent between active and paused. Touches exactly
    /// one agent; the seed dataset is untouched.
    pub fn toggle_selected_agent(&mut self) {
        if let Some(index) = self.studio.selected_agent {
            if let Some(agent) = self.studio.agents.get_mut(index) {
                agent.status = agent.status.toggled();
                tracing::info!(agent = %agent.name, status = %agent.status, "agent toggled");
            }
        }
    }

    /// Push the typed chat message onto the transcript and return it so
    /// the event loop can schedule the simulated reply.
    pub fn submit_chat_message(&mut self) -> Option<String> {
        let text = self.studio.chat_input.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.studio.chat_input.clear();
        self.studio.transcript.push(ChatTurn {
            role: ChatRole::Operator,
            text: text.clone(),
        });
        self.studio.reply_pending = true;
        Some(text)
    }

    /// Append the simulated agent reply once its latency has elapsed.
    pub fn apply_chat_reply(&mut self, text: String) {
        self.studio.reply_pending = false;
        self.studio.transcript.push(ChatTurn {
            role: ChatRole::Agent,
            text,
        });
    }

    /// Canned reply used by the test chat. Fixed per industry; the latency
    /// is the only simulated part.
    pub fn canned_reply(&self) -> String {
        let noun = self.profile().entity_noun.to_lowercase();
        format!(
            "Understood. I would confirm the {}'s slot, send a recap on their \
             preferred channel, and flag anything urgent for staff review.",
            noun
        )
    }

    // ------------------------------------------------------------------
    // Text input handling
    // ------------------------------------------------------------------

    pub fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.input_focus {
            InputFocus::None => None,
            InputFocus::Search => Some(&mut self.operations.query),
            InputFocus::Date => Some(&mut self.operations.date_input),
            InputFocus::Chat => Some(&mut self.studio.chat_input),
        }
    }

    pub fn push_input_char(&mut self, c: char) {
        if let Some(buffer) = self.focused_input_mut() {
            buffer.push(c);
        }
        if self.input_focus == InputFocus::Search {
            self.reconcile_selection();
        }
    }

    pub fn pop_input_char(&mut self) {
        if let Some(buffer) = self.focused_input_mut() {
            buffer.pop();
        }
        if self.input_focus == InputFocus::Search {
            self.reconcile_selection();
        }
    }

    /// Confirm the focused input. Returns a chat message to schedule when
    /// the chat input was submitted.
    pub fn confirm_input(&mut self) -> Option<String> {
        match self.input_focus {
            InputFocus::None => None,
            InputFocus::Search => {
                self.input_focus = InputFocus::None;
                self.reconcile_selection();
                None
            }
            InputFocus::Date => {
                self.input_focus = InputFocus::None;
                self.apply_date_input();
                None
            }
            InputFocus::Chat => {
                let message = self.submit_chat_message();
                if message.is_none() {
                    self.input_focus = InputFocus::None;
                }
                message
            }
        }
    }

    pub fn cancel_input(&mut self) {
        self.input_focus = InputFocus::None;
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }
}

// ============================================================================
// SELECTION HELPERS
// ============================================================================

fn select_next_record(records: &[&OperationalRecord], selected: &mut Option<String>) {
    if records.is_empty() {
        *selected = None;
        return;
    }
    let index = selected
        .as_deref()
        .and_then(|id| records.iter().position(|r| r.record_id == id));
    let next = match index {
        Some(i) => (i + 1) % records.len(),
        None => 0,
    };
    *selected = Some(records[next].record_id.clone());
}

fn select_prev_record(records: &[&OperationalRecord], selected: &mut Option<String>) {
    if records.is_empty() {
        *selected = None;
        return;
    }
    let index = selected
        .as_deref()
        .and_then(|id| records.iter().position(|r| r.record_id == id))
        .unwrap_or(0);
    let prev = if index == 0 { records.len() - 1 } else { index - 1 };
    *selected = Some(records[prev].record_id.clone());
}

fn wrap_next(len: usize, selected: &mut Option<usize>) {
    if len == 0 {
        *selected = None;
        return;
    }
    *selected = Some(match *selected {
        Some(i) => (i + 1) % len,
        None => 0,
    });
}

fn wrap_prev(len: usize, selected: &mut Option<usize>) {
    if len == 0 {
        *selected = None;
        return;
    }
    *selected = Some(match *selected {
        Some(0) | None => len - 1,
        Some(i) => i - 1,
    });
}

// ============================================================================
// TESTS
// ============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::config::ThemeConfig;
    use proptest::prelude::*;

    fn test_config() -> TuiConfig {
        TuiConfig {
            default_industry: Industry::Clinic,
            tick_interval_ms: 200,
            reply_latency_ms: 900,
            persistence_path: "tmp/opsdeck-state.json".into(),
            log_path: "tmp/opsdeck.log".into(),
            theme: ThemeConfig {
                name: "opsdeck".to_string(),
            },
        }
    }

    fn arb_industry() -> impl Strategy<Value = Industry> {
        prop_oneof![
            Just(Industry::Clinic),
            Just(Industry::Hotel),
            Just(Industry::Sales),
            Just(Industry::Insurance),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Drill depth stays in 1..=4 under any in/out sequence.
        #[test]
        fn prop_drill_depth_stays_in_range(ops in prop::collection::vec(any::<bool>(), 0..40)) {
            let mut app = App::new(test_config());
            for op in ops {
                if op {
                    app.drill_in();
                } else {
                    app.drill_out();
                }
                let level = app.dashboard.level.as_u8();
                prop_assert!((1..=4).contains(&level));
            }
        }

        /// Switching industry always lands on level 1 with no selections.
        #[test]
        fn prop_industry_switch_resets(
            industries in prop::collection::vec(arb_industry(), 1..8),
            drills in 0u8..6
        ) {
            let mut app = App::new(test_config());
            for industry in industries {
                for _ in 0..drills {
                    app.drill_in();
                }
                let before = app.industry;
                app.switch_industry(industry);
                if industry != before {
                    prop_assert_eq!(app.dashboard.level, DrillLevel::MIN);
                    prop_assert!(app.dashboard.selected_record.is_none());
                    prop_assert!(app.dashboard.selected_channel.is_none());
                    prop_assert!(app.operations.selected.is_none());
                }
            }
        }

        /// The visible set is exactly the records satisfying both predicates.
        #[test]
        fn prop_visible_records_satisfy_filters(
            query in "[a-zA-Z]{0,6}",
            bucket_idx in 0usize..5
        ) {
            let mut app = App::new(test_config());
            app.operations.query = query.clone();
            app.operations.bucket = StatusBucket::all().get(bucket_idx).copied();

            let visible = app.visible_records();
            for record in app.records() {
                let matches = opsdeck_core::record_matches_query(record, &query)
                    && app.operations.bucket.map_or(true, |b| record.status.bucket() == b);
                let shown = visible.iter().any(|r| r.record_id == record.record_id);
                prop_assert_eq!(matches, shown);
            }
        }

        /// Selection navigation never panics and never selects a hidden record.
        #[test]
        fn prop_selection_stays_visible(ops in prop::collection::vec(any::<bool>(), 0..30)) {
            let mut app = App::new(test_config());
            app.active_screen = Screen::Operations;
            for op in ops {
                if op {
                    app.select_next();
                } else {
                    app.select_previous();
                }
                if let Some(id) = app.operations.selected.as_deref() {
                    prop_assert!(app.visible_records().iter().any(|r| r.record_id == id));
                }
            }
        }

        /// Toggling one agent N times leaves every other agent untouched.
        #[test]
        fn prop_toggle_isolated(index in 0usize..3, toggles in 0usize..6) {
            let mut app = App::new(test_config());
            let count = app.studio.agents.len();
            let index = index % count;
            app.studio.selected_agent = Some(index);
            let before = app.studio.agents.clone();

            for _ in 0..toggles {
                app.toggle_selected_agent();
            }

            for (i, agent) in app.studio.agents.iter().enumerate() {
                if i == index {
                    let expected = if toggles % 2 == 0 {
                        before[i].status
                    } else {
                        before[i].status.toggled()
                    };
                    prop_assert_eq!(agent.status, expected);
                } else {
                    prop_assert_eq!(agent.status, before[i].status);
                }
            }
        }
    }
}
