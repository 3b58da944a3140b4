//! 散点图：横轴生育率，纵轴预期寿命，每个大洲一组颜色

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset as ChartDataset, GraphType, LegendPosition},
};

use super::Panel;
use crate::error::ComponentError;
use crate::models::{Bounds, Dataset};
use crate::playback::{Component, ResizeObserver, Year, YearObserver};

const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::LightRed,
    Color::LightBlue,
];

/// 小于该尺寸时改用紧凑显示
const COMPACT_WIDTH: u16 = 60;
const COMPACT_HEIGHT: u16 = 20;

/// 某个大洲在当前年份的点
#[derive(Debug, Clone)]
struct Series {
    continent: String,
    color: Color,
    points: Vec<(f64, f64)>,
}

pub struct Scatterplot {
    dataset: Rc<Dataset>,
    bounds: Bounds,
    series: Vec<Series>,
    year: Year,
    population: u64,
    compact: bool,
}

impl Scatterplot {
    pub fn new(dataset: Rc<Dataset>, year: Year) -> Self {
        let mut chart = Self::setup(dataset);
        chart.load_year(year);
        chart
    }

    /// 只做一次的初始化：坐标轴范围和大洲配色
    fn setup(dataset: Rc<Dataset>) -> Self {
        let bounds = dataset.bounds().unwrap_or(Bounds {
            fertility: (0.0, 8.0),
            life_expectancy: (20.0, 90.0),
        });
        let series = dataset
            .continents()
            .into_iter()
            .zip(PALETTE.iter().cycle())
            .map(|(continent, color)| Series {
                continent: continent.to_string(),
                color: *color,
                points: Vec::new(),
            })
            .collect();

        Self {
            dataset,
            bounds,
            series,
            year: 0,
            population: 0,
            compact: false,
        }
    }

    /// 换成某一年的数据
    fn load_year(&mut self, year: Year) {
        self.year = year;
        self.population = 0;
        for series in &mut self.series {
            series.points.clear();
        }

        for record in self.dataset.records_for_year(year) {
            if let Some(series) = self
                .series
                .iter_mut()
                .find(|s| s.continent == record.continent)
            {
                series.points.push((record.fertility, record.life_expectancy));
                self.population = self.population.saturating_add(record.population);
            }
        }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

impl YearObserver for Scatterplot {
    fn update(&mut self, year: Year) -> Result<(), ComponentError> {
        self.load_year(year);
        if !self.dataset.has_year(year) && !self.dataset.is_empty() {
            return Err(ComponentError::MissingYear {
                component: super::SCATTERPLOT.to_string(),
                year,
            });
        }
        Ok(())
    }
}

impl ResizeObserver for Scatterplot {
    fn resize(&mut self, width: u16, height: u16) -> Result<(), ComponentError> {
        self.compact = width < COMPACT_WIDTH || height < COMPACT_HEIGHT;
        Ok(())
    }
}

impl Component for Scatterplot {
    fn as_year_observer(&mut self) -> Option<&mut dyn YearObserver> {
        Some(self)
    }

    fn as_resize_observer(&mut self) -> Option<&mut dyn ResizeObserver> {
        Some(self)
    }
}

impl Panel for Scatterplot {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let marker = if self.compact {
            Marker::Dot
        } else {
            Marker::Braille
        };

        let datasets: Vec<ChartDataset> = self
            .series
            .iter()
            .map(|series| {
                ChartDataset::default()
                    .name(series.continent.as_str())
                    .marker(marker)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(series.color))
                    .data(&series.points)
            })
            .collect();

        let (x_min, x_max) = axis_range(self.bounds.fertility);
        let (y_min, y_max) = axis_range(self.bounds.life_expectancy);
        let x_axis = Axis::default()
            .title("生育率")
            .style(Style::default().fg(Color::Gray))
            .bounds([x_min, x_max])
            .labels(axis_labels(x_min, x_max));
        let y_axis = Axis::default()
            .title("预期寿命")
            .style(Style::default().fg(Color::Gray))
            .bounds([y_min, y_max])
            .labels(axis_labels(y_min, y_max));

        let title = format!(
            "{}  ({} 个国家, 总人口 {:.2} 亿)",
            self.year,
            self.point_count(),
            self.population as f64 / 1e8
        );
        let legend = if self.compact {
            None
        } else {
            Some(LegendPosition::BottomRight)
        };

        let chart = Chart::new(datasets)
            .block(Block::default().title(title).borders(Borders::ALL))
            .x_axis(x_axis)
            .y_axis(y_axis)
            .legend_position(legend);

        frame.render_widget(chart, area);
    }
}

/// 取整后的坐标范围，至少为 1
fn axis_range((min, max): (f64, f64)) -> (f64, f64) {
    let (min, max) = (min.floor(), max.ceil());
    if max - min < 1.0 {
        (min, min + 1.0)
    } else {
        (min, max)
    }
}

fn axis_labels(min: f64, max: f64) -> Vec<Span<'static>> {
    let mid = (min + max) / 2.0;
    [min, mid, max]
        .into_iter()
        .map(|v| Span::raw(format!("{v:.0}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountryRecord;

    fn record(country: &str, year: Year, continent: &str) -> CountryRecord {
        CountryRecord {
            country: country.to_string(),
            year,
            life_expectancy: 60.0,
            fertility: 3.0,
            population: 1_000_000,
            continent: continent.to_string(),
        }
    }

    fn chart() -> Scatterplot {
        let dataset = Dataset::from_records(vec![
            record("Norway", 1950, "Europe"),
            record("Chad", 1950, "Africa"),
            record("Mali", 1950, "Africa"),
            record("Norway", 1951, "Europe"),
        ]);
        Scatterplot::new(Rc::new(dataset), 1950)
    }

    #[test]
    fn setup_loads_initial_year() {
        let chart = chart();
        assert_eq!(chart.year, 1950);
        assert_eq!(chart.point_count(), 3);
        assert_eq!(chart.population, 3_000_000);
        let continents: Vec<_> = chart.series.iter().map(|s| s.continent.as_str()).collect();
        assert_eq!(continents, vec!["Africa", "Europe"]);
    }

    #[test]
    fn update_regroups_points() {
        let mut chart = chart();
        chart.update(1951).unwrap();
        assert_eq!(chart.year, 1951);
        assert_eq!(chart.point_count(), 1);
        assert_eq!(chart.population, 1_000_000);
        assert!(chart.series[0].points.is_empty());
        assert_eq!(chart.series[1].points, vec![(3.0, 60.0)]);
    }

    #[test]
    fn year_without_rows_reports_error() {
        let mut chart = chart();
        let err = chart.update(1999).unwrap_err();
        assert_eq!(
            err,
            ComponentError::MissingYear {
                component: "scatterplot".to_string(),
                year: 1999
            }
        );
        assert_eq!(chart.point_count(), 0);
    }

    #[test]
    fn population_total_saturates() {
        let mut huge = record("A", 1950, "Asia");
        huge.population = u64::MAX;
        let dataset = Dataset::from_records(vec![huge, record("B", 1950, "Asia")]);

        let chart = Scatterplot::new(Rc::new(dataset), 1950);
        assert_eq!(chart.population, u64::MAX);
        assert_eq!(chart.point_count(), 2);
    }

    #[test]
    fn empty_dataset_is_not_an_error() {
        let mut chart = Scatterplot::new(Rc::new(Dataset::new()), 1950);
        assert!(chart.update(1951).is_ok());
    }

    #[test]
    fn axis_range_is_never_empty() {
        assert_eq!(axis_range((2.4, 7.6)), (2.0, 8.0));
        assert_eq!(axis_range((3.0, 3.0)), (3.0, 4.0));
    }

    #[test]
    fn small_terminal_switches_to_compact() {
        let mut chart = chart();
        chart.resize(50, 40).unwrap();
        assert!(chart.compact);
        chart.resize(120, 40).unwrap();
        assert!(!chart.compact);
    }
}
