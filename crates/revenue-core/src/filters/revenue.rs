use crate::model::{CategoryFilter, RevenuePeriod, TimeFilter};

/// Keep periods of the selected category, then the most recent N of those.
///
/// Fewer than N matching periods returns all of them. An unrecognised
/// window returns nothing.
pub fn filter_revenue_data(
    series: &[RevenuePeriod],
    time_filter: &TimeFilter,
    category_filter: &CategoryFilter,
) -> Vec<RevenuePeriod> {
    let Some(months) = time_filter.months() else {
        return Vec::new();
    };

    let by_category: Vec<&RevenuePeriod> = series
        .iter()
        .filter(|p| category_filter.matches(p.category))
        .collect();

    let skip = by_category.len().saturating_sub(months);
    by_category.into_iter().skip(skip).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use rust_decimal::Decimal;

    fn series() -> Vec<RevenuePeriod> {
        let cats = [
            Category::Residential,
            Category::Commercial,
            Category::Industrial,
            Category::Residential,
            Category::Commercial,
            Category::Industrial,
            Category::MixedUse,
            Category::Agricultural,
            Category::Industrial,
        ];
        cats.iter()
            .enumerate()
            .map(|(i, c)| RevenuePeriod {
                month: format!("M{}", i + 1),
                revenue: Decimal::from(1000 + i as i64),
                collected: Decimal::from(900),
                overdue: Decimal::from(100 + i as i64),
                category: *c,
                total_properties: 10,
            })
            .collect()
    }

    fn months(out: &[RevenuePeriod]) -> Vec<&str> {
        out.iter().map(|p| p.month.as_str()).collect()
    }

    #[test]
    fn test_trailing_window() {
        let out = filter_revenue_data(&series(), &TimeFilter::ThreeMonths, &CategoryFilter::All);
        assert_eq!(months(&out), vec!["M7", "M8", "M9"]);
        let out = filter_revenue_data(&series(), &TimeFilter::OneMonth, &CategoryFilter::All);
        assert_eq!(months(&out), vec!["M9"]);
    }

    #[test]
    fn test_year_window_returns_whole_short_series() {
        let s = series();
        let out = filter_revenue_data(&s, &TimeFilter::OneYear, &CategoryFilter::All);
        assert_eq!(out, s);
    }

    #[test]
    fn test_category_applied_before_window() {
        let f = CategoryFilter::Only(Category::Industrial);
        let out = filter_revenue_data(&series(), &TimeFilter::ThreeMonths, &f);
        assert_eq!(months(&out), vec!["M3", "M6", "M9"]);
        let out = filter_revenue_data(&series(), &TimeFilter::OneMonth, &f);
        assert_eq!(months(&out), vec!["M9"]);
    }

    #[test]
    fn test_fewer_than_window_returns_all_matches() {
        let f = CategoryFilter::Only(Category::MixedUse);
        let out = filter_revenue_data(&series(), &TimeFilter::SixMonths, &f);
        assert_eq!(months(&out), vec!["M7"]);
        let f = CategoryFilter::Only(Category::Vacant);
        assert!(filter_revenue_data(&series(), &TimeFilter::SixMonths, &f).is_empty());
    }

    #[test]
    fn test_unrecognised_window_yields_empty() {
        let out = filter_revenue_data(&series(), &"18m".into(), &CategoryFilter::All);
        assert!(out.is_empty());
    }
}
