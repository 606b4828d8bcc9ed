use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use revenue_core::filters::{filter_revenue_data, filter_transactions};
use revenue_core::model::{Category, CategoryFilter, TimeFilter, Transaction};
use revenue_core::sample;

// ===========================================================================
// Filtering the sample dataset
// ===========================================================================

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn ids(txns: &[Transaction]) -> Vec<u64> {
    txns.iter().map(|t| t.id).collect()
}

fn owners(txns: &[Transaction]) -> Vec<&str> {
    txns.iter().map(|t| t.owner.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[test]
fn test_search_jane_finds_only_jane() {
    let out = filter_transactions(
        &sample::transactions(),
        "jane",
        &TimeFilter::SixMonths,
        &CategoryFilter::All,
        as_of(),
    );
    assert_eq!(owners(&out), vec!["Jane Smith"]);
}

#[test]
fn test_search_property_prefix() {
    let out = filter_transactions(
        &sample::transactions(),
        "P12",
        &TimeFilter::SixMonths,
        &CategoryFilter::All,
        as_of(),
    );
    assert_eq!(ids(&out), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_one_month_window_from_later_date() {
    // 2024-04-05 minus 30 days = 2024-03-06
    let later = NaiveDate::from_ymd_opt(2024, 4, 5).unwrap();
    let out = filter_transactions(
        &sample::transactions(),
        "",
        &TimeFilter::OneMonth,
        &CategoryFilter::All,
        later,
    );
    assert_eq!(ids(&out), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_everything_ages_out_after_a_year() {
    let much_later = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let out = filter_transactions(
        &sample::transactions(),
        "",
        &TimeFilter::OneYear,
        &CategoryFilter::All,
        much_later,
    );
    assert!(out.is_empty());
}

#[test]
fn test_category_and_search_combine() {
    let out = filter_transactions(
        &sample::transactions(),
        "o",
        &TimeFilter::OneYear,
        &CategoryFilter::Only(Category::Residential),
        as_of(),
    );
    // John Doe (P123) and Alice Brown (P126) are residential; both contain "o"
    assert_eq!(ids(&out), vec![1, 4]);
}

#[test]
fn test_filtering_is_idempotent() {
    let tf = TimeFilter::ThreeMonths;
    let cf = CategoryFilter::Only(Category::Commercial);
    let once = filter_transactions(&sample::transactions(), "", &tf, &cf, as_of());
    let twice = filter_transactions(&once, "", &tf, &cf, as_of());
    assert_eq!(once, twice);
    assert_eq!(ids(&once), vec![2, 5]);
}

#[test]
fn test_unknown_window_is_empty_not_error() {
    let out = filter_transactions(
        &sample::transactions(),
        "",
        &TimeFilter::from("5y"),
        &CategoryFilter::All,
        as_of(),
    );
    assert!(out.is_empty());
}

// ---------------------------------------------------------------------------
// Revenue series
// ---------------------------------------------------------------------------

#[test]
fn test_year_window_keeps_whole_sample_series() {
    let series = sample::revenue_series();
    assert_eq!(filter_revenue_data(&series, &TimeFilter::OneYear, &CategoryFilter::All), series);
}

#[test]
fn test_three_month_window() {
    let out = filter_revenue_data(
        &sample::revenue_series(),
        &TimeFilter::ThreeMonths,
        &CategoryFilter::All,
    );
    let months: Vec<&str> = out.iter().map(|p| p.month.as_str()).collect();
    assert_eq!(months, vec!["Oct", "Nov", "Dec"]);
}

#[test]
fn test_industrial_six_month_window() {
    let out = filter_revenue_data(
        &sample::revenue_series(),
        &TimeFilter::SixMonths,
        &CategoryFilter::Only(Category::Industrial),
    );
    let months: Vec<&str> = out.iter().map(|p| p.month.as_str()).collect();
    assert_eq!(months, vec!["Mar", "Jun", "Sep"]);
}

#[test]
fn test_recreational_has_no_periods() {
    let out = filter_revenue_data(
        &sample::revenue_series(),
        &TimeFilter::OneYear,
        &CategoryFilter::Only(Category::Recreational),
    );
    assert!(out.is_empty());
}
