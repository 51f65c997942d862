//! CSV directory price source.

use std::path::{Path, PathBuf};

use dashmap::DashMap;

use hedgefolio_core::{Date, PricePoint, PriceSeries, Symbol};
use hedgefolio_traits::market_data::{restrict_to_range, PriceSource};
use hedgefolio_traits::{DataFetchError, FetchResult};

/// Column holding the observation date.
pub const DATE_COLUMN: &str = "Date";

/// Column holding the split- and dividend-adjusted close.
pub const ADJ_CLOSE_COLUMN: &str = "Adj Close";

// =============================================================================
// CSV PRICE SOURCE
// =============================================================================

/// Price source over a directory of per-symbol CSV files.
///
/// Each file is parsed on first use and cached for the life of the source.
pub struct CsvPriceSource {
    dir: PathBuf,
    cache: DashMap<Symbol, PriceSeries>,
}

impl CsvPriceSource {
    /// Create a source over `dir`.
    ///
    /// # Errors
    ///
    /// `DataFetchError::Io` if `dir` is not a readable directory.
    pub fn new(dir: impl AsRef<Path>) -> FetchResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.is_dir() {
            return Err(DataFetchError::Io {
                path: dir.display().to_string(),
                message: "not a directory".to_string(),
            });
        }
        Ok(Self {
            dir,
            cache: DashMap::new(),
        })
    }

    /// Directory being read.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file for `symbol`.
    pub fn file_for(&self, symbol: &Symbol) -> PathBuf {
        self.dir.join(format!("{}.csv", symbol.as_str()))
    }

    /// Finds the file for `symbol`, matching the file stem case-insensitively
    /// when `<SYMBOL>.csv` itself does not exist.
    fn locate(&self, symbol: &Symbol) -> FetchResult<Option<PathBuf>> {
        let exact = self.file_for(symbol);
        if exact.is_file() {
            return Ok(Some(exact));
        }
        Ok(self
            .csv_files()?
            .into_iter()
            .find(|(stem, path)| stem.eq_ignore_ascii_case(symbol.as_str()) && path.is_file())
            .map(|(_, path)| path))
    }

    /// `(stem, path)` of every `.csv` file in the directory.
    fn csv_files(&self) -> FetchResult<Vec<(String, PathBuf)>> {
        let entries = std::fs::read_dir(&self.dir)
            .map_err(|e| DataFetchError::io(self.dir.display().to_string(), &e))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| DataFetchError::io(self.dir.display().to_string(), &e))?
                .path();
            let is_csv = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if let (true, Some(stem)) = (is_csv, path.file_stem().and_then(|s| s.to_str())) {
                files.push((stem.to_string(), path.clone()));
            }
        }
        Ok(files)
    }

    /// Forget cached files so the next fetch re-reads them.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Full history of `symbol`, read from disk on first use.
    pub fn history(&self, symbol: &Symbol) -> FetchResult<PriceSeries> {
        if let Some(series) = self.cache.get(symbol) {
            return Ok(series.clone());
        }

        let path = self
            .locate(symbol)?
            .ok_or_else(|| DataFetchError::UnknownSymbol(symbol.to_string()))?;
        let series = read_price_file(symbol, &path)?;
        tracing::debug!(
            %symbol,
            path = %path.display(),
            points = series.len(),
            "loaded price file"
        );
        self.cache.insert(symbol.clone(), series.clone());
        Ok(series)
    }
}

impl PriceSource for CsvPriceSource {
    fn source_name(&self) -> &str {
        "csv"
    }

    fn symbols(&self) -> FetchResult<Vec<Symbol>> {
        let mut symbols: Vec<Symbol> = self
            .csv_files()?
            .iter()
            .filter_map(|(stem, _)| stem.parse().ok())
            .collect();
        symbols.sort();
        symbols.dedup();
        Ok(symbols)
    }

    fn fetch_daily_adjusted_close(
        &self,
        symbol: &Symbol,
        start: Date,
        end: Date,
    ) -> FetchResult<PriceSeries> {
        let history = self.history(symbol)?;
        restrict_to_range(&history, start, end)
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn read_price_file(symbol: &Symbol, path: &Path) -> FetchResult<PriceSeries> {
    let name = path.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| DataFetchError::Io {
            path: name.clone(),
            message: e.to_string(),
        })?;

    let headers = reader
        .headers()
        .map_err(|e| DataFetchError::parse(&name, e.to_string()))?
        .clone();
    let column = |wanted: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DataFetchError::parse(&name, format!("missing '{wanted}' column")))
    };
    let date_idx = column(DATE_COLUMN)?;
    let price_idx = column(ADJ_CLOSE_COLUMN)?;

    let mut points = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| DataFetchError::parse(&name, e.to_string()))?;
        // Header is line 1
        let row = line + 2;
        let raw_date = record.get(date_idx).unwrap_or_default();
        let date = parse_date(raw_date)
            .ok_or_else(|| DataFetchError::parse(&name, format!("line {row}: bad date '{raw_date}'")))?;
        let price = parse_price(record.get(price_idx).unwrap_or_default())
            .map_err(|raw| DataFetchError::parse(&name, format!("line {row}: bad price '{raw}'")))?;
        points.push(PricePoint::new(date, price));
    }

    Ok(PriceSeries::from_unsorted(symbol.clone(), points)?)
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time component.
fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw)
        .ok()
        .or_else(|| raw.get(..10).and_then(|head| Date::parse(head).ok()))
}

/// Missing observations become NaN.
fn parse_price(raw: &str) -> Result<f64, String> {
    if raw.is_empty() || raw.eq_ignore_ascii_case("null") || raw.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|_| raw.to_string())
}
