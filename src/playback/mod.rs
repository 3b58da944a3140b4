//! 播放核心
//!
//! - state.rs: 年份范围与当前选中年份
//! - clock.rs: 按固定间隔推进年份的动画时钟
//! - broadcast.rs: 组件注册表与变更通知
//! - controller.rs: 持有以上三者的控制器

pub mod broadcast;
pub mod clock;
pub mod controller;
pub mod state;

/// 年份
pub type Year = i32;

pub use broadcast::{
    AnimationObserver, Component, NotifyReport, ResizeObserver, UpdateBroadcaster, YearObserver,
};
pub use clock::AnimationClock;
pub use controller::Player;
pub use state::{AppState, YearRange};
