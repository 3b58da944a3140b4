//! 界面组件
//!
//! 每个组件既是播放核心的观察者 ([`Component`])，也负责绘制自己的区域。

pub mod chart;
pub mod controls;

use std::time::Duration;

use ratatui::{Frame, layout::Rect};

use super::actions::Action;
use crate::playback::Component;

pub use chart::Scatterplot;
pub use controls::Controls;

/// 注册名
pub const SCATTERPLOT: &str = "scatterplot";
pub const CONTROLS: &str = "controls";

/// 可绘制的组件
pub trait Panel: Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// 每帧调用，处理延迟生效的显示效果
    fn advance(&mut self, _now: Duration) {}

    /// 没有等待生效的显示效果
    fn is_settled(&self) -> bool {
        true
    }

    /// 鼠标点击 (column, row)，命中时返回对应的 Action
    fn on_click(&self, _column: u16, _row: u16) -> Option<Action> {
        None
    }
}
