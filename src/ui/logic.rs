//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和每帧的驱动

use std::time::Duration;

use tracing::debug;

use super::actions::Action;
use super::components::Panel;
use super::state::App;
use crate::error::StateError;
use crate::playback::{NotifyReport, Player};

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!(?action, "dispatch");
        match action {
            Action::Quit => return true,
            Action::ToggleAnimation => self.toggle_animation(),
            Action::StepForward => self.scrub(|player| player.step(true)),
            Action::StepBackward => self.scrub(|player| player.step(false)),
            Action::JumpToFirst => self.scrub(|player| player.jump_to_first()),
            Action::JumpToLast => self.scrub(|player| player.jump_to_last()),
        }
        false
    }

    /// 驱动一帧：推进动画，再让组件处理延迟效果
    pub fn frame(&mut self, now: Duration) {
        if let Some(report) = self.player.frame(now) {
            self.apply_report(report);
        }
        for (_, panel) in self.player.broadcaster_mut().iter_mut() {
            panel.advance(now);
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        let report = self.player.resize(width, height);
        self.apply_report(report);
    }

    /// 鼠标点击命中的组件操作
    pub fn click(&self, column: u16, row: u16) -> Option<Action> {
        self.player
            .broadcaster()
            .iter()
            .find_map(|(_, panel)| panel.on_click(column, row))
    }

    fn toggle_animation(&mut self) {
        if let Some(report) = self.player.toggle_animation(false) {
            self.apply_report(report);
        }
    }

    /// 手动选择年份前先暂停播放
    fn scrub<F>(&mut self, select: F)
    where
        F: FnOnce(&mut Player<dyn Panel>) -> Result<NotifyReport, StateError>,
    {
        if let Some(report) = self.player.toggle_animation(true) {
            self.apply_report(report);
        }
        match select(&mut self.player) {
            Ok(report) => self.apply_report(report),
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// 组件失败时在底栏提示，成功的通知清除旧提示
    fn apply_report(&mut self, report: NotifyReport) {
        match report.failures.first() {
            Some((name, err)) => self.message = Some(format!("{name}: {err}")),
            None if report.invoked() > 0 => self.message = None,
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{CountryRecord, Dataset};
    use crate::playback::Year;
    use crate::ui::components::CONTROLS;

    fn record(year: Year) -> CountryRecord {
        CountryRecord {
            country: "Norway".to_string(),
            year,
            life_expectancy: 70.0,
            fertility: 2.0,
            population: 3_000_000,
            continent: "Europe".to_string(),
        }
    }

    fn app(start: Year, end: Year) -> App {
        let config = Config {
            start_year: start,
            end_year: end,
            ..Config::default()
        };
        let dataset = Dataset::from_records((start..=end).map(record).collect());
        App::new(&config, dataset).unwrap()
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn quit_returns_true() {
        let mut app = app(1950, 2015);
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::StepForward));
    }

    #[test]
    fn toggle_starts_and_stops_frames() {
        let mut app = app(1950, 2015);
        assert!(!app.wants_frames());

        app.dispatch(Action::ToggleAnimation);
        assert!(app.player.state().is_animating());
        assert!(app.wants_frames());

        app.dispatch(Action::ToggleAnimation);
        assert!(!app.player.state().is_animating());
        assert!(!app.wants_frames());
    }

    #[test]
    fn stepping_pauses_animation() {
        let mut app = app(1950, 2015);
        app.dispatch(Action::ToggleAnimation);
        app.frame(ms(0));
        assert_eq!(app.selected_year(), 1951);

        app.dispatch(Action::StepBackward);
        assert!(!app.player.state().is_animating());
        assert_eq!(app.selected_year(), 1950);

        app.dispatch(Action::JumpToLast);
        assert_eq!(app.selected_year(), 2015);
        app.dispatch(Action::StepForward);
        assert_eq!(app.selected_year(), 1950);
    }

    #[test]
    fn pending_label_keeps_frames_running_until_applied() {
        let mut app = app(1950, 2015);
        app.dispatch(Action::StepForward);
        assert!(app.wants_frames());

        app.frame(ms(0));
        app.frame(ms(375));
        assert!(!app.wants_frames());

        let controls = app.player.broadcaster().iter().find(|(name, _)| *name == CONTROLS);
        assert!(controls.is_some_and(|(_, panel)| panel.is_settled()));
    }

    #[test]
    fn missing_year_is_reported_in_message() {
        let config = Config::default();
        let dataset = Dataset::from_records(vec![record(1950)]);
        let mut app = App::new(&config, dataset).unwrap();

        app.dispatch(Action::StepForward);

        let message = app.message.clone().unwrap_or_default();
        assert!(message.contains("1951"), "message: {message}");
        // 其余组件照常收到通知
        assert_eq!(app.selected_year(), 1951);
        assert!(!app.player.broadcaster().iter().all(|(_, p)| p.is_settled()));
    }

    #[test]
    fn space_still_toggles_without_data() {
        let mut app = App::new(&Config::default(), Dataset::new()).unwrap();
        assert_eq!(app.click(5, 26), None);

        app.dispatch(Action::ToggleAnimation);
        assert!(app.player.state().is_animating());
        app.frame(ms(0));
        assert_eq!(app.selected_year(), 1951);
        assert_eq!(app.message, None);
    }

    #[test]
    fn click_outside_toggle_does_nothing() {
        let app = app(1950, 2015);
        assert_eq!(app.click(0, 0), None);
    }
}
