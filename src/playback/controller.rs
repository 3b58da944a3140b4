//! 播放控制器
//!
//! 唯一持有 [`AppState`] 的地方。所有状态修改都经过这里，
//! 修改后立即通知注册的组件。

use std::time::Duration;

use tracing::{debug, info, warn};

use super::broadcast::{Component, NotifyReport, UpdateBroadcaster};
use super::clock::{AnimationClock, ClockStep};
use super::state::AppState;
use super::Year;
use crate::error::StateError;

pub struct Player<C: ?Sized = dyn Component> {
    state: AppState,
    clock: AnimationClock,
    broadcaster: UpdateBroadcaster<C>,
}

impl<C: Component + ?Sized> Player<C> {
    pub fn new(state: AppState, clock: AnimationClock, broadcaster: UpdateBroadcaster<C>) -> Self {
        Self {
            state,
            clock,
            broadcaster,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn broadcaster(&self) -> &UpdateBroadcaster<C> {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut UpdateBroadcaster<C> {
        &mut self.broadcaster
    }

    /// 事件循环是否还需要继续按帧调用 [`Player::frame`]
    pub fn is_frame_scheduled(&self) -> bool {
        self.clock.is_running()
    }

    /// 选中年份并通知组件；年份无效时状态不变，也不发通知
    pub fn set_year(&mut self, year: Year) -> Result<NotifyReport, StateError> {
        self.state.select(year)?;
        debug!(year, "year selected");
        Ok(self.broadcaster.notify_year_change(year))
    }

    /// 切换播放状态
    ///
    /// 正在播放或 `force_disable` 时停止，否则开始。
    /// 已经停止时强制停止不做任何事，返回 `None`。
    pub fn toggle_animation(&mut self, force_disable: bool) -> Option<NotifyReport> {
        if self.state.is_animating() {
            Some(self.stop())
        } else if force_disable {
            None
        } else {
            Some(self.start())
        }
    }

    fn start(&mut self) -> NotifyReport {
        self.state.set_animating(true);
        let report = self.broadcaster.notify_animation_state(true);
        self.clock.start();
        info!(year = self.state.selected_year(), "animation started");
        report
    }

    fn stop(&mut self) -> NotifyReport {
        self.state.set_animating(false);
        let report = self.broadcaster.notify_animation_state(false);
        self.clock.stop();
        info!(year = self.state.selected_year(), "animation stopped");
        report
    }

    /// 处理一帧；本帧推进了年份时返回通知结果
    ///
    /// 帧结束后是否还需要下一帧由 [`Player::is_frame_scheduled`] 判断。
    pub fn frame(&mut self, time: Duration) -> Option<NotifyReport> {
        if !self.state.is_animating() {
            self.clock.stop();
            return None;
        }

        match self.clock.tick(time) {
            ClockStep::Stopped | ClockStep::Wait => None,
            ClockStep::Advance => {
                let next = self.state.next_year();
                match self.set_year(next) {
                    Ok(report) => Some(report),
                    Err(err) => {
                        warn!(error = %err, "failed to advance year");
                        None
                    }
                }
            }
        }
    }

    /// 前进或后退一年，越界时回绕
    pub fn step(&mut self, forward: bool) -> Result<NotifyReport, StateError> {
        let year = if forward {
            self.state.next_year()
        } else {
            self.state.previous_year()
        };
        self.set_year(year)
    }

    pub fn jump_to_first(&mut self) -> Result<NotifyReport, StateError> {
        self.set_year(self.state.available().first())
    }

    pub fn jump_to_last(&mut self) -> Result<NotifyReport, StateError> {
        self.set_year(self.state.available().last())
    }

    pub fn resize(&mut self, width: u16, height: u16) -> NotifyReport {
        debug!(width, height, "resize");
        self.broadcaster.notify_resize(width, height)
    }
}
