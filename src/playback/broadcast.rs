//! 组件注册表与通知分发
//!
//! 组件通过 [`Component`] 上的访问方法声明自己具备哪些能力，
//! 没有某项能力的组件不会收到对应的通知。
//! 单个组件失败只记录日志，不影响后续组件。

use tracing::{debug, warn};

use super::Year;
use crate::error::ComponentError;

/// 接收年份变化
pub trait YearObserver {
    fn update(&mut self, year: Year) -> Result<(), ComponentError>;
}

/// 接收播放/暂停状态变化
pub trait AnimationObserver {
    fn set_animation_state(&mut self, animating: bool) -> Result<(), ComponentError>;
}

/// 接收终端尺寸变化
pub trait ResizeObserver {
    fn resize(&mut self, width: u16, height: u16) -> Result<(), ComponentError>;
}

/// 可注册的组件，每项能力都是可选的
pub trait Component {
    fn as_year_observer(&mut self) -> Option<&mut dyn YearObserver> {
        None
    }

    fn as_animation_observer(&mut self) -> Option<&mut dyn AnimationObserver> {
        None
    }

    fn as_resize_observer(&mut self) -> Option<&mut dyn ResizeObserver> {
        None
    }
}

/// 一次通知的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifyReport {
    /// 成功收到通知的组件，按注册顺序
    pub notified: Vec<String>,
    pub failures: Vec<(String, ComponentError)>,
}

impl NotifyReport {
    /// 所有被调用过的组件数（含失败）
    pub fn invoked(&self) -> usize {
        self.notified.len() + self.failures.len()
    }
}

/// 按注册顺序保存组件，并向具备相应能力的组件分发通知
pub struct UpdateBroadcaster<C: ?Sized = dyn Component> {
    components: Vec<(String, Box<C>)>,
}

impl<C: ?Sized> Default for UpdateBroadcaster<C> {
    fn default() -> Self {
        Self {
            components: Vec::new(),
        }
    }
}

impl<C: Component + ?Sized> UpdateBroadcaster<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册组件；同名组件原位替换，保持原有顺序
    pub fn register(&mut self, name: impl Into<String>, component: Box<C>) {
        let name = name.into();
        if let Some(slot) = self.components.iter_mut().find(|(n, _)| *n == name) {
            warn!(component = %name, "replacing already registered component");
            slot.1 = component;
        } else {
            debug!(component = %name, "component registered");
            self.components.push((name, component));
        }
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut C> {
        self.components
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_mut())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &C)> {
        self.components
            .iter()
            .map(|(n, c)| (n.as_str(), c.as_ref()))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut C)> {
        self.components
            .iter_mut()
            .map(|(n, c)| (n.as_str(), c.as_mut()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|(n, _)| n.as_str())
    }

    pub fn notify_year_change(&mut self, year: Year) -> NotifyReport {
        self.broadcast("update", |component| {
            component
                .as_year_observer()
                .map(|observer| observer.update(year))
        })
    }

    pub fn notify_animation_state(&mut self, animating: bool) -> NotifyReport {
        self.broadcast("set_animation_state", |component| {
            component
                .as_animation_observer()
                .map(|observer| observer.set_animation_state(animating))
        })
    }

    pub fn notify_resize(&mut self, width: u16, height: u16) -> NotifyReport {
        self.broadcast("resize", |component| {
            component
                .as_resize_observer()
                .map(|observer| observer.resize(width, height))
        })
    }

    /// `call` 返回 `None` 表示该组件不具备此能力
    fn broadcast<F>(&mut self, event: &'static str, mut call: F) -> NotifyReport
    where
        F: FnMut(&mut C) -> Option<Result<(), ComponentError>>,
    {
        let mut report = NotifyReport::default();
        for (name, component) in &mut self.components {
            match call(component.as_mut()) {
                None => {}
                Some(Ok(())) => report.notified.push(name.clone()),
                Some(Err(err)) => {
                    warn!(component = %name, event, error = %err, "component failed to handle notification");
                    report.failures.push((name.clone(), err));
                }
            }
        }
        report
    }
}
