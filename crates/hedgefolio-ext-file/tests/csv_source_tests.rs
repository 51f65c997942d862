//! Tests for the CSV directory price source.

use std::fs;

use hedgefolio_core::{Date, Lookback, Symbol};
use hedgefolio_ext_file::CsvPriceSource;
use hedgefolio_traits::{DataFetchError, PriceSource};
use tempfile::TempDir;

const AAPL_CSV: &str = "\
Date,Open,High,Low,Close,Adj Close,Volume
2021-01-04,133.52,133.61,126.76,129.41,127.33,143301900
2021-01-05,128.89,131.74,128.43,131.01,128.91,97664900
2021-01-06,127.72,131.05,126.38,126.60,124.57,155088000
2021-01-07,128.36,131.63,127.86,130.92,128.82,109578200
";

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("AAPL.csv"), AAPL_CSV).unwrap();
    // Unsorted rows with a missing price
    fs::write(
        dir.path().join("KO.csv"),
        "Date,Adj Close\n2021-01-05,49.80\n2021-01-04,50.10\n2021-01-06,\n2021-01-07,50.42\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "not prices").unwrap();
    dir
}

#[test]
fn reads_adjusted_close() {
    let dir = fixture();
    let source = CsvPriceSource::new(dir.path()).unwrap();

    let prices = source
        .fetch_daily_adjusted_close(&Symbol::new("AAPL"), d(2021, 1, 1), d(2021, 12, 31))
        .unwrap();
    assert_eq!(prices.len(), 4);
    assert_eq!(prices.price_on(d(2021, 1, 4)), Some(127.33));
    assert_eq!(prices.last_date(), Some(d(2021, 1, 7)));
}

#[test]
fn end_date_is_exclusive() {
    let dir = fixture();
    let source = CsvPriceSource::new(dir.path()).unwrap();

    let prices = source
        .fetch_daily_adjusted_close(&Symbol::new("AAPL"), d(2021, 1, 5), d(2021, 1, 7))
        .unwrap();
    assert_eq!(prices.dates(), vec![d(2021, 1, 5), d(2021, 1, 6)]);
}

#[test]
fn sorts_rows_and_keeps_missing_prices() {
    let dir = fixture();
    let source = CsvPriceSource::new(dir.path()).unwrap();

    let prices = source
        .fetch_daily_adjusted_close_period(&Symbol::new("ko"), Lookback::Days(10), d(2021, 1, 7))
        .unwrap();
    assert_eq!(prices.first_date(), Some(d(2021, 1, 4)));
    assert_eq!(prices.len(), 4);
    assert!(prices.price_on(d(2021, 1, 6)).unwrap().is_nan());
}

#[test]
fn lists_csv_symbols() {
    let dir = fixture();
    let source = CsvPriceSource::new(dir.path()).unwrap();
    let symbols: Vec<String> = source
        .symbols()
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(symbols, vec!["AAPL", "KO"]);
}

#[test]
fn unknown_symbol_and_empty_range() {
    let dir = fixture();
    let source = CsvPriceSource::new(dir.path()).unwrap();

    assert!(matches!(
        source.fetch_daily_adjusted_close(&Symbol::new("MSFT"), d(2021, 1, 1), d(2022, 1, 1)),
        Err(DataFetchError::UnknownSymbol(_))
    ));
    assert!(matches!(
        source.fetch_daily_adjusted_close(&Symbol::new("AAPL"), d(2020, 1, 1), d(2020, 6, 1)),
        Err(DataFetchError::EmptyRange { .. })
    ));
}

#[test]
fn malformed_files_are_parse_errors() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("PEP.csv"), "Date,Close\n2021-01-04,140.0\n").unwrap();
    fs::write(dir.path().join("PG.csv"), "Date,Adj Close\n2021-01-04,abc\n").unwrap();
    let source = CsvPriceSource::new(dir.path()).unwrap();

    for symbol in ["PEP", "PG"] {
        let err = source
            .fetch_daily_adjusted_close(&Symbol::new(symbol), d(2021, 1, 1), d(2022, 1, 1))
            .unwrap_err();
        assert!(matches!(err, DataFetchError::Parse { .. }), "{symbol}: {err}");
    }
}

#[test]
fn duplicate_dates_are_invalid_data() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("COST.csv"),
        "Date,Adj Close\n2021-01-04,370.0\n2021-01-04,371.0\n",
    )
    .unwrap();
    let source = CsvPriceSource::new(dir.path()).unwrap();
    assert!(matches!(
        source.fetch_daily_adjusted_close(&Symbol::new("COST"), d(2021, 1, 1), d(2022, 1, 1)),
        Err(DataFetchError::InvalidData(_))
    ));
}

#[test]
fn cache_survives_file_removal_until_cleared() {
    let dir = fixture();
    let source = CsvPriceSource::new(dir.path()).unwrap();
    let symbol = Symbol::new("AAPL");

    source.history(&symbol).unwrap();
    fs::remove_file(dir.path().join("AAPL.csv")).unwrap();
    assert!(source.history(&symbol).is_ok());

    source.clear_cache();
    assert!(matches!(
        source.history(&symbol),
        Err(DataFetchError::UnknownSymbol(_))
    ));
}

#[test]
fn missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    assert!(matches!(
        CsvPriceSource::new(&missing),
        Err(DataFetchError::Io { .. })
    ));
}

#[test]
fn lower_case_file_names_resolve_for_listed_symbols() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("msft.csv"), "Date,Adj Close\n2021-01-04,217.69\n2021-01-05,217.90\n")
        .unwrap();
    let source = CsvPriceSource::new(dir.path()).unwrap();

    let listed = source.symbols().unwrap();
    assert_eq!(listed, vec![Symbol::new("MSFT")]);

    let prices = source
        .fetch_daily_adjusted_close(&listed[0], d(2021, 1, 1), d(2021, 2, 1))
        .unwrap();
    assert_eq!(prices.len(), 2);
    assert_eq!(prices.price_on(d(2021, 1, 5)), Some(217.90));
}
