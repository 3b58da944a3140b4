//! 播放状态 (Model)
//!
//! 可选年份范围、当前年份以及是否正在播放

use super::Year;
use crate::error::StateError;

/// 连续的年份范围（闭区间，步长 1）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    first: Year,
    last: Year,
}

impl YearRange {
    pub fn new(start: Year, end: Year) -> Result<Self, StateError> {
        if start > end {
            return Err(StateError::EmptyRange { start, end });
        }
        Ok(Self {
            first: start,
            last: end,
        })
    }

    pub fn first(&self) -> Year {
        self.first
    }

    pub fn last(&self) -> Year {
        self.last
    }

    /// 跨度按 i64 计算，整个 i32 范围也不会溢出
    pub fn len(&self) -> usize {
        Self::span(self.first, self.last) as usize + 1
    }

    pub fn contains(&self, year: Year) -> bool {
        (self.first..=self.last).contains(&year)
    }

    pub fn index_of(&self, year: Year) -> Option<usize> {
        self.contains(year)
            .then(|| Self::span(self.first, year) as usize)
    }

    /// 按下标取年份，越界时回绕
    pub fn year_at(&self, index: usize) -> Year {
        let offset = (index % self.len()) as i64;
        (i64::from(self.first) + offset) as Year
    }

    fn span(from: Year, to: Year) -> i64 {
        i64::from(to) - i64::from(from)
    }
}

/// 应用状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    available: YearRange,
    selected: Year,
    animating: bool,
}

impl AppState {
    /// 初始年份为范围起点，未在播放
    pub fn new(available: YearRange) -> Self {
        Self {
            available,
            selected: available.first(),
            animating: false,
        }
    }

    pub fn available(&self) -> YearRange {
        self.available
    }

    pub fn selected_year(&self) -> Year {
        self.selected
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// 选中年份；不在范围内时返回错误且状态不变
    pub fn select(&mut self, year: Year) -> Result<(), StateError> {
        if !self.available.contains(year) {
            return Err(StateError::InvalidYear {
                year,
                first: self.available.first(),
                last: self.available.last(),
            });
        }
        self.selected = year;
        Ok(())
    }

    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    /// 下一年，末尾回到起点
    pub fn next_year(&self) -> Year {
        self.offset_year(1)
    }

    /// 上一年，起点回到末尾
    pub fn previous_year(&self) -> Year {
        self.offset_year(-1)
    }

    fn offset_year(&self, delta: isize) -> Year {
        let len = self.available.len() as isize;
        let index = self.available.index_of(self.selected).unwrap_or(0) as isize;
        self.available.year_at((index + delta).rem_euclid(len) as usize)
    }
}
