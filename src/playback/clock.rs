//! 动画时钟
//!
//! 每一帧由事件循环调用 [`AnimationClock::tick`]，传入单调递增的时间戳。
//! 时钟本身不持有定时器：`start` / `stop` 只翻转标志位，事件循环根据
//! [`AnimationClock::is_running`] 决定是否继续按帧轮询。
//!
//! 一个周期内最多推进一次年份：周期开始的那一帧推进，之后等待到间隔
//! 结束，再下一帧开启新周期。

use std::time::Duration;

/// 两次推进年份之间的最小间隔
pub const TRANSITION_INTERVAL: Duration = Duration::from_millis(750);

/// 一帧的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStep {
    /// 本帧开启新周期，应推进到下一年
    Advance,
    /// 仍在当前周期内，继续等待下一帧
    Wait,
    /// 时钟已停止，不再需要帧
    Stopped,
}

#[derive(Debug, Clone)]
pub struct AnimationClock {
    interval: Duration,
    cycle_start: Option<Duration>,
    running: bool,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(TRANSITION_INTERVAL)
    }
}

impl AnimationClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            cycle_start: None,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// 开始计时，下一帧立即推进
    pub fn start(&mut self) {
        self.running = true;
        self.cycle_start = None;
    }

    /// 取消后续帧
    pub fn stop(&mut self) {
        self.running = false;
        self.cycle_start = None;
    }

    pub fn tick(&mut self, time: Duration) -> ClockStep {
        if !self.running {
            return ClockStep::Stopped;
        }

        let Some(start) = self.cycle_start else {
            self.cycle_start = Some(time);
            return ClockStep::Advance;
        };

        // 间隔到期后清空周期起点，下一帧才推进
        if time.saturating_sub(start) > self.interval {
            self.cycle_start = None;
        }
        ClockStep::Wait
    }
}
