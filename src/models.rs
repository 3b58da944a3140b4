use std::collections::{BTreeSet, HashMap};

use crate::playback::Year;

/// 某国某年的统计数据
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub country: String,
    pub year: Year,
    pub life_expectancy: f64,
    pub fertility: f64,
    pub population: u64,
    pub continent: String,
}

/// 全部年份上的取值范围，坐标轴据此固定，播放时不跳动
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub fertility: (f64, f64),
    pub life_expectancy: (f64, f64),
}

impl Bounds {
    fn of(record: &CountryRecord) -> Self {
        Self {
            fertility: (record.fertility, record.fertility),
            life_expectancy: (record.life_expectancy, record.life_expectancy),
        }
    }

    fn include(&mut self, record: &CountryRecord) {
        self.fertility.0 = self.fertility.0.min(record.fertility);
        self.fertility.1 = self.fertility.1.max(record.fertility);
        self.life_expectancy.0 = self.life_expectancy.0.min(record.life_expectancy);
        self.life_expectancy.1 = self.life_expectancy.1.max(record.life_expectancy);
    }
}

/// 运行时数据集（按年份建索引）
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<CountryRecord>,
    year_index: HashMap<Year, Vec<usize>>, // year -> record indices
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        let mut dataset = Self::new();
        for record in records {
            dataset.push(record);
        }
        dataset
    }

    pub fn push(&mut self, record: CountryRecord) {
        self.year_index
            .entry(record.year)
            .or_default()
            .push(self.records.len());
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 不同国家的数量
    pub fn country_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.country.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// 某一年的全部记录，按加载顺序
    pub fn records_for_year(&self, year: Year) -> impl Iterator<Item = &CountryRecord> {
        self.year_index
            .get(&year)
            .into_iter()
            .flatten()
            .map(|&i| &self.records[i])
    }

    pub fn has_year(&self, year: Year) -> bool {
        self.year_index.contains_key(&year)
    }

    /// 出现过的大洲，按字母排序
    pub fn continents(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.continent.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let (first, rest) = self.records.split_first()?;
        let mut bounds = Bounds::of(first);
        for record in rest {
            bounds.include(record);
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, year: Year, life: f64, fertility: f64, continent: &str) -> CountryRecord {
        CountryRecord {
            country: country.to_string(),
            year,
            life_expectancy: life,
            fertility,
            population: 1_000,
            continent: continent.to_string(),
        }
    }

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            record("Norway", 1950, 72.0, 2.6, "Europe"),
            record("Chad", 1950, 36.5, 6.1, "Africa"),
            record("Norway", 1951, 72.4, 2.5, "Europe"),
            record("Japan", 1950, 59.2, 3.0, "Asia"),
        ])
    }

    #[test]
    fn records_for_year_keeps_load_order() {
        let dataset = sample();
        let countries: Vec<_> = dataset
            .records_for_year(1950)
            .map(|r| r.country.as_str())
            .collect();
        assert_eq!(countries, vec!["Norway", "Chad", "Japan"]);
        assert_eq!(dataset.records_for_year(1999).count(), 0);
        assert!(dataset.has_year(1951));
        assert!(!dataset.has_year(1952));
    }

    #[test]
    fn counts_distinct_countries() {
        assert_eq!(sample().country_count(), 3);
    }

    #[test]
    fn continents_are_sorted_and_distinct() {
        assert_eq!(sample().continents(), vec!["Africa", "Asia", "Europe"]);
    }

    #[test]
    fn bounds_cover_all_years() {
        let bounds = sample().bounds().unwrap();
        assert_eq!(bounds.fertility, (2.5, 6.1));
        assert_eq!(bounds.life_expectancy, (36.5, 72.4));
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        assert!(Dataset::new().bounds().is_none());
        assert!(Dataset::new().continents().is_empty());
    }
}
