use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use opsdeck_core::{dataset, DrillLevel, Industry, StatusBucket};
use opsdeck_tui::config::{ThemeConfig, TuiConfig};
use opsdeck_tui::keys::{map_key, Action};
use opsdeck_tui::nav::{Screen, StudioTab};
use opsdeck_tui::state::App;
use opsdeck_tui::theme::{bucket_color, risk_color, OpsdeckTheme};
use opsdeck_tui::views::render_view;
use proptest::prelude::*;
use ratatui::{backend::TestBackend, Terminal};

fn base_config() -> TuiConfig {
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

#[test]
fn config_requires_known_theme() {
    let mut config = base_config();
    config.theme = ThemeConfig {
        name: "unknown".to_string(),
    };
    assert!(config.validate().is_err());
}

/// Every screen, drill level, and studio tab renders with selections set,
/// so the whole view layer is exercised, not just the state layer.
#[test]
fn every_screen_renders_without_panicking() {
    let backend = TestBackend::new(100, 32);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut app = App::new(base_config());
    app.operations.selected = Some("APT-001".to_string());
    app.studio.selected_agent = Some(0);

    for screen in Screen::all() {
        app.active_screen = *screen;
        terminal.draw(|f| render_view(f, &app)).unwrap();
    }

    app.active_screen = Screen::Dashboard;
    for _ in 0..3 {
        app.drill_in();
        app.select_next();
        terminal.draw(|f| render_view(f, &app)).unwrap();
    }

    app.active_screen = Screen::Studio;
    for _ in 0..StudioTab::all().len() {
        app.next_studio_tab();
        terminal.draw(|f| render_view(f, &app)).unwrap();
    }

    app.active_screen = Screen::Operations;
    app.open_actions();
    assert!(app.action_modal.is_some());
    app.help_open = true;
    terminal.draw(|f| render_view(f, &app)).unwrap();
}

#[test]
fn every_industry_ships_a_dataset() {
    for industry in Industry::all() {
        let data = dataset(*industry);
        assert!(!data.records.is_empty());
        assert!(!data.agents.is_empty());
        assert!(!data.channel_stats.is_empty());
    }
}

proptest! {
    #[test]
    fn keybinding_digit_switches_screen(digit in 0u8..=9u8) {
        let ch = char::from(b'0' + digit);
        let event = KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        };
        let action = map_key(event);
        let expected_index = match ch {
            '1' => Some(0),
            '2' => Some(1),
            '3' => Some(2),
            _ => None,
        };
        if let Some(index) = expected_index {
            prop_assert!(matches!(action, Some(Action::SwitchScreen(i)) if i == index));
        } else {
            prop_assert!(action.is_none());
        }
    }

    #[test]
    fn navigation_keys_consistent(use_vim in prop::bool::ANY) {
        let key = if use_vim {
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)
        } else {
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
        };
        let action = map_key(key);
        prop_assert!(matches!(action, Some(Action::MoveDown)));
    }

    #[test]
    fn all_action_keys_mapped(
        key_char in proptest::sample::select(vec!['q', 'd', 'b', 'p', 'a', 'i', 'c', 't', '?', '/'])
    ) {
        let event = KeyEvent::new(KeyCode::Char(key_char), KeyModifiers::NONE);
        let action = map_key(event);
        prop_assert!(action.is_some(), "Key '{}' should map to an action", key_char);
    }

    // ========================================================================
    // Drill-down depth stays in 1..=4 under arbitrary input
    // ========================================================================

    #[test]
    fn drill_depth_always_in_range(ops in prop::collection::vec(any::<bool>(), 0..50)) {
        let mut app = App::new(base_config());
        for op in ops {
            if op {
                app.drill_in();
            } else {
                app.drill_out();
            }
            let level = app.dashboard.level.as_u8();
            prop_assert!((1..=4).contains(&level), "drill level {} escaped range", level);
        }
    }

    // ========================================================================
    // Industry switch resets drill level and clears selections
    // ========================================================================

    #[test]
    fn industry_switch_resets_navigation(
        industries in prop::collection::vec(arb_industry(), 1..10),
        drills in 0u8..6
    ) {
        let mut app = App::new(base_config());
        for industry in industries {
            for _ in 0..drills {
                app.drill_in();
            }
            app.select_next();
            let before = app.industry;
            app.switch_industry(industry);
            if industry != before {
                prop_assert_eq!(app.dashboard.level, DrillLevel::MIN);
                prop_assert!(app.dashboard.selected_channel.is_none());
                prop_assert!(app.dashboard.selected_record.is_none());
                prop_assert!(app.operations.selected.is_none());
                prop_assert!(app.operations.query.is_empty());
                prop_assert_eq!(&app.studio.agents, &dataset(industry).agents);
            }
        }
    }

    // ========================================================================
    // Filter correctness: visible set == records passing every predicate
    // ========================================================================

    #[test]
    fn filters_combine_as_conjunction(
        industry in arb_industry(),
        query in "[a-zA-Z ]{0,8}",
        bucket_idx in 0usize..5
    ) {
        let mut app = App::new(base_config());
        app.switch_industry(industry);
        app.operations.query = query.clone();
        app.operations.bucket = StatusBucket::all().get(bucket_idx).copied();

        let visible = app.visible_records();
        for record in app.records() {
            let matches = opsdeck_core::record_matches_query(record, &query)
                && app
                    .operations
                    .bucket
                    .map_or(true, |b| record.status.bucket() == b);
            let shown = visible.iter().any(|r| r.record_id == record.record_id);
            prop_assert_eq!(matches, shown, "record {} filter mismatch", record.record_id);
        }
    }

    #[test]
    fn unmatched_date_never_empties_the_list(industry in arb_industry(), year in 2030i32..2040) {
        let mut app = App::new(base_config());
        app.switch_industry(industry);
        app.operations.search_date = NaiveDate::from_ymd_opt(year, 1, 1);
        prop_assert_eq!(app.visible_records().len(), app.records().len());
    }

    // ========================================================================
    // Agent toggling is isolated to the selected agent
    // ========================================================================

    #[test]
    fn agent_toggle_is_isolated(
        industry in arb_industry(),
        index in 0usize..4,
        toggles in 0usize..8
    ) {
        let mut app = App::new(base_config());
        app.switch_industry(industry);
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
        // The seed dataset never changes.
        prop_assert_eq!(&dataset(industry).agents, &before);
    }

    // ========================================================================
    // Status-to-color mapping
    // ========================================================================

    #[test]
    fn bucket_colors_correct(bucket_idx in 0usize..4) {
        let theme = OpsdeckTheme::opsdeck();
        let bucket = StatusBucket::all()[bucket_idx];
        let expected = match bucket {
            StatusBucket::Resolved => theme.success,
            StatusBucket::Escalated => theme.warning,
            StatusBucket::Pending => theme.info,
            StatusBucket::Error => theme.error,
        };
        prop_assert_eq!(bucket_color(bucket, &theme), expected);
    }

    #[test]
    fn risk_color_thresholds_correct(risk in 0u8..=100) {
        let theme = OpsdeckTheme::opsdeck();
        let color = risk_color(risk, &theme);
        if risk < 40 {
            prop_assert_eq!(color, theme.success, "Below 40 should be green");
        } else if risk < 70 {
            prop_assert_eq!(color, theme.warning, "40-70 should be amber");
        } else {
            prop_assert_eq!(color, theme.error, "70+ should be red");
        }
    }

    // ========================================================================
    // Period cycling always lands on stats for that period
    // ========================================================================

    #[test]
    fn channel_stats_follow_period(cycles in 0usize..9) {
        let mut app = App::new(base_config());
        for _ in 0..cycles {
            app.cycle_period();
        }
        let period = app.dashboard.period;
        let stats = app.channel_stats();
        prop_assert!(!stats.is_empty());
        prop_assert!(stats.iter().all(|s| s.period == period));
    }

    // ========================================================================
    // Screen cycling is a bijection
    // ========================================================================

    #[test]
    fn screen_cycle_round_trips(steps in 0usize..12) {
        let mut screen = Screen::Dashboard;
        for _ in 0..steps {
            screen = screen.next();
        }
        for _ in 0..steps {
            screen = screen.previous();
        }
        prop_assert_eq!(screen, Screen::Dashboard);
    }
}
