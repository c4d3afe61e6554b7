//! Aggregate distribution fixtures behind the analytics charts.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use newslens_common::Region;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategorySlice {
    pub category: String,
    pub fake: u64,
    pub real: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RegionSlice {
    pub region: Region,
    pub fake: u64,
    pub real: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimePoint {
    pub date: NaiveDate,
    pub fake: u64,
    pub real: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analytics {
    pub category_distribution: Vec<CategorySlice>,
    pub region_distribution: Vec<RegionSlice>,
    pub time_series: Vec<TimePoint>,
}

fn category(category: &str, fake: u64, real: u64, total: u64) -> CategorySlice {
    CategorySlice {
        category: category.to_string(),
        fake,
        real,
        total,
    }
}

fn day(d: u32, fake: u64, real: u64) -> TimePoint {
    TimePoint {
        date: NaiveDate::from_ymd_opt(2025, 8, d).unwrap(),
        fake,
        real,
    }
}

/// The analytics fixture: five categories, three regions, eight days.
pub fn analytics() -> Analytics {
    Analytics {
        category_distribution: vec![
            category("Politics", 1245, 2876, 4121),
            category("Health", 987, 2134, 3121),
            category("Technology", 456, 1987, 2443),
            category("Sports", 123, 1594, 1717),
            category("Environment", 234, 1876, 2110),
        ],
        region_distribution: vec![
            RegionSlice {
                region: Region::Karnataka,
                fake: 45,
                real: 156,
                total: 201,
            },
            RegionSlice {
                region: Region::India,
                fake: 234,
                real: 567,
                total: 801,
            },
            RegionSlice {
                region: Region::International,
                fake: 123,
                real: 445,
                total: 568,
            },
        ],
        time_series: vec![
            day(16, 45, 123),
            day(17, 52, 134),
            day(18, 38, 156),
            day(19, 61, 142),
            day(20, 47, 167),
            day(21, 55, 178),
            day(22, 43, 145),
            day(23, 39, 134),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_totals_are_consistent() {
        let a = analytics();
        for slice in &a.category_distribution {
            assert_eq!(slice.fake + slice.real, slice.total, "{}", slice.category);
        }
        for slice in &a.region_distribution {
            assert_eq!(slice.fake + slice.real, slice.total, "{}", slice.region);
        }
    }

    #[test]
    fn time_series_covers_eight_consecutive_days() {
        let a = analytics();
        assert_eq!(a.time_series.len(), 8);
        for pair in a.time_series.windows(2) {
            assert_eq!(
                pair[1].date,
                pair[0].date.succ_opt().unwrap(),
                "gap in series"
            );
        }
    }

    #[test]
    fn all_regions_present() {
        let a = analytics();
        assert_eq!(a.region_distribution.len(), 3);
    }
}
