use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::info;

use crate::error::DataError;
use crate::models::{CountryRecord, Dataset};

/// CSV 中的一行，所有字段先按字符串读取
#[derive(Debug, Deserialize)]
struct CsvRow {
    country: String,
    year: String,
    life_expectancy: String,
    total_fertility: String,
    population: String,
    continent: String,
}

/// 从CSV文件加载数据集
pub fn load_dataset(path: &Path) -> Result<Dataset, DataError> {
    let file = File::open(path).map_err(|e| DataError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;

    let dataset = read_dataset(file, path)?;
    info!(
        path = %path.display(),
        records = dataset.len(),
        countries = dataset.country_count(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// 从任意输入读取数据集，`path` 只用于错误信息
pub fn read_dataset<R: io::Read>(input: R, path: &Path) -> Result<Dataset, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let read_error = |source: csv::Error| DataError::Read {
        path: path.to_path_buf(),
        line: source.position().map(|p| p.line()).unwrap_or(0),
        source,
    };

    let headers = reader.headers().map_err(read_error)?.clone();
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(read_error)?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: CsvRow = record.deserialize(Some(&headers)).map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            line,
            source,
        })?;
        records.push(row.into_record(path, line)?);
    }

    Ok(Dataset::from_records(records))
}

impl CsvRow {
    fn into_record(self, path: &Path, line: u64) -> Result<CountryRecord, DataError> {
        let row = RowContext { path, line };

        Ok(CountryRecord {
            year: row.field("year", &self.year).parse()?,
            life_expectancy: row
                .field("life_expectancy", &self.life_expectancy)
                .parse_finite()?,
            fertility: row
                .field("total_fertility", &self.total_fertility)
                .parse_finite()?,
            population: row.field("population", &self.population).parse()?,
            country: self.country,
            continent: self.continent,
        })
    }
}

struct RowContext<'a> {
    path: &'a Path,
    line: u64,
}

impl<'a> RowContext<'a> {
    fn field(&self, column: &'static str, value: &'a str) -> FieldContext<'a> {
        FieldContext {
            path: self.path,
            line: self.line,
            column,
            value,
        }
    }
}

struct FieldContext<'a> {
    path: &'a Path,
    line: u64,
    column: &'static str,
    value: &'a str,
}

impl FieldContext<'_> {
    fn parse<T: FromStr>(&self) -> Result<T, DataError> {
        self.value.parse().map_err(|_| self.error())
    }

    /// 拒绝 NaN / inf，数值列只接受有限小数
    fn parse_finite(&self) -> Result<f64, DataError> {
        let value: f64 = self.parse()?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.error())
        }
    }

    fn error(&self) -> DataError {
        DataError::Parse {
            path: self.path.to_path_buf(),
            line: self.line,
            column: self.column,
            value: self.value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const HEADER: &str = "country,year,life_expectancy,total_fertility,population,continent\n";

    fn parse(body: &str) -> Result<Dataset, DataError> {
        let csv = format!("{HEADER}{body}");
        read_dataset(csv.as_bytes(), Path::new("data.csv"))
    }

    #[test]
    fn converts_numeric_columns() {
        let dataset = parse("Afghanistan,1950,28.17,7.45,7752000,Asia\n").unwrap();
        let record = dataset.records_for_year(1950).next().unwrap();
        assert_eq!(record.country, "Afghanistan");
        assert_eq!(record.year, 1950);
        assert_eq!(record.life_expectancy, 28.17);
        assert_eq!(record.fertility, 7.45);
        assert_eq!(record.population, 7_752_000);
        assert_eq!(record.continent, "Asia");
    }

    #[test]
    fn header_only_file_is_empty() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn quoted_names_and_padding_are_accepted() {
        let dataset = parse("\"Korea, Rep.\", 1960 , 53.0, 6.0, 25000000 ,Asia\n").unwrap();
        let record = dataset.records_for_year(1960).next().unwrap();
        assert_eq!(record.country, "Korea, Rep.");
        assert_eq!(record.year, 1960);
        assert_eq!(record.population, 25_000_000);
    }

    #[test]
    fn malformed_number_fails_with_location() {
        let err = parse("Chad,1950,36.5,6.1,2500000,Africa\nChad,1951,n/a,6.1,2550000,Africa\n")
            .unwrap_err();
        match err {
            DataError::Parse {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "life_expectancy");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = parse("Chad,1950,NaN,6.1,2500000,Africa\n").unwrap_err();
        assert!(matches!(
            err,
            DataError::Parse {
                column: "life_expectancy",
                ..
            }
        ));
    }

    #[test]
    fn missing_column_is_a_read_error() {
        let csv = "country,year\nChad,1950\n";
        let err = read_dataset(csv.as_bytes(), Path::new("data.csv")).unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{HEADER}Norway,1950,72.0,2.6,3265000,Europe\nNorway,1951,72.4,2.5,3296000,Europe\n"
        )
        .unwrap();

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records_for_year(1951).count(), 1);
    }

    #[test]
    fn missing_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, DataError::Open { .. }));
    }
}
