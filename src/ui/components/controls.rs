//! 控制栏：播放/暂停按钮、年份标签、年份进度

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    widgets::{Block, Borders},
};

use super::Panel;
use crate::error::ComponentError;
use crate::playback::{AnimationObserver, Component, Year, YearObserver, YearRange};
use crate::ui::actions::Action;
use crate::ui::view::components::{render_toggle_button, render_year_label, render_year_progress};

/// 等待生效的年份标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingLabel {
    year: Year,
    /// 首次 advance 时确定生效时间
    due: Option<Duration>,
}

#[derive(Debug)]
pub struct Controls {
    range: YearRange,
    label: Year,
    pending: Option<PendingLabel>,
    label_delay: Duration,
    playing: bool,
    disabled: bool,
    toggle_area: Rect,
}

impl Controls {
    pub fn new(range: YearRange, year: Year, animating: bool, label_delay: Duration) -> Self {
        Self {
            range,
            label: year,
            pending: None,
            label_delay,
            playing: animating,
            disabled: false,
            toggle_area: Rect::default(),
        }
    }

    /// 禁用后点击按钮无效（空格键不受影响）
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn progress(&self) -> f64 {
        let steps = self.range.len().saturating_sub(1);
        if steps == 0 {
            return 1.0;
        }
        let index = self.range.index_of(self.label).unwrap_or(0);
        index as f64 / steps as f64
    }
}

impl YearObserver for Controls {
    /// 标签在过渡进行到一半时更新；新的年份覆盖尚未生效的旧年份
    fn update(&mut self, year: Year) -> Result<(), ComponentError> {
        self.pending = Some(PendingLabel { year, due: None });
        Ok(())
    }
}

impl AnimationObserver for Controls {
    fn set_animation_state(&mut self, animating: bool) -> Result<(), ComponentError> {
        self.playing = animating;
        Ok(())
    }
}

impl Component for Controls {
    fn as_year_observer(&mut self) -> Option<&mut dyn YearObserver> {
        Some(self)
    }

    fn as_animation_observer(&mut self) -> Option<&mut dyn AnimationObserver> {
        Some(self)
    }
}

impl Panel for Controls {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("控制").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12), // 按钮
                Constraint::Length(8),  // 年份
                Constraint::Min(10),    // 进度
            ])
            .split(inner);

        self.toggle_area = chunks[0];
        render_toggle_button(frame, chunks[0], self.playing, self.disabled);
        render_year_label(frame, chunks[1], self.label);
        render_year_progress(
            frame,
            chunks[2],
            self.progress(),
            self.range.first(),
            self.range.last(),
        );
    }

    fn advance(&mut self, now: Duration) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        let due = *pending.due.get_or_insert(now + self.label_delay);
        if now >= due {
            self.label = pending.year;
            self.pending = None;
        }
    }

    fn is_settled(&self) -> bool {
        self.pending.is_none()
    }

    fn on_click(&self, column: u16, row: u16) -> Option<Action> {
        if self.disabled || !self.toggle_area.contains(Position::new(column, row)) {
            return None;
        }
        Some(Action::ToggleAnimation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn controls() -> Controls {
        Controls::new(YearRange::new(1950, 2015).unwrap(), 1950, false, ms(375))
    }

    #[test]
    fn label_changes_after_half_transition() {
        let mut controls = controls();
        controls.update(1951).unwrap();
        assert!(!controls.is_settled());

        controls.advance(ms(1000));
        assert_eq!(controls.label, 1950);
        controls.advance(ms(1374));
        assert_eq!(controls.label, 1950);
        controls.advance(ms(1375));
        assert_eq!(controls.label, 1951);
        assert!(controls.is_settled());
    }

    #[test]
    fn newer_update_replaces_pending_label() {
        let mut controls = controls();
        controls.update(1951).unwrap();
        controls.advance(ms(0));
        controls.update(1990).unwrap();
        controls.advance(ms(100));
        controls.advance(ms(400));
        assert_eq!(controls.label, 1950);

        controls.advance(ms(475));
        assert_eq!(controls.label, 1990);

        // nothing stale lands afterwards
        controls.advance(ms(2000));
        assert_eq!(controls.label, 1990);
    }

    #[test]
    fn toggle_reflects_animation_state() {
        let mut controls = controls();
        assert!(!controls.playing);
        controls.set_animation_state(true).unwrap();
        assert!(controls.playing);
        controls.set_animation_state(false).unwrap();
        assert!(!controls.playing);
    }

    #[test]
    fn click_on_toggle_maps_to_action() {
        let mut controls = controls();
        controls.toggle_area = Rect::new(1, 1, 12, 1);

        assert_eq!(controls.on_click(5, 1), Some(Action::ToggleAnimation));
        assert_eq!(controls.on_click(30, 1), None);
    }

    #[test]
    fn disabled_toggle_ignores_clicks() {
        let mut controls = controls().with_disabled(true);
        controls.toggle_area = Rect::new(1, 1, 12, 1);

        assert_eq!(controls.on_click(5, 1), None);
    }

    #[test]
    fn progress_tracks_label_position() {
        let mut controls = controls();
        assert_eq!(controls.progress(), 0.0);
        controls.label = 2015;
        assert_eq!(controls.progress(), 1.0);

        let single = Controls::new(YearRange::new(2000, 2000).unwrap(), 2000, false, ms(0));
        assert_eq!(single.progress(), 1.0);
    }
}
