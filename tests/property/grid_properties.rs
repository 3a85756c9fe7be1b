use day_planner::services::calendar::{build_grid, date_key_for};
use day_planner::utils::date::{days_in_month, first_weekday_of_month, shift_month};
use proptest::prelude::*;

proptest! {
    /// Property: padding plus days fills the grid exactly, days in order
    #[test]
    fn prop_grid_is_padding_then_days(year in 1900..2200i32, month0 in 0..12u32) {
        let grid = build_grid(year, month0).unwrap();
        let padding = first_weekday_of_month(year, month0).unwrap() as usize;
        let days = days_in_month(year, month0).unwrap();

        prop_assert_eq!(grid.len(), padding + days as usize);
        prop_assert!(grid[..padding].iter().all(|cell| cell.is_none()));

        let listed: Vec<u32> = grid[padding..].iter().map(|cell| cell.unwrap()).collect();
        let expected: Vec<u32> = (1..=days).collect();
        prop_assert_eq!(listed, expected);
    }

    /// Property: shifting forward then back returns to the start
    #[test]
    fn prop_shift_month_inverts(year in 1900..2200i32, month0 in 0..12u32, delta in -600..600i32) {
        let (y, m) = shift_month(year, month0, delta);
        prop_assert!(m < 12);
        prop_assert_eq!(shift_month(y, m, -delta), (year, month0));
    }

    /// Property: keys name the constructed day whatever the offset
    #[test]
    fn prop_date_key_matches_day(
        year in 1970..2100i32,
        month0 in 0..12u32,
        day in 1..=28u32,
        offset in -1439..=1439i32,
    ) {
        let key = date_key_for(year, month0, day, offset).unwrap();
        prop_assert_eq!(key.to_string(), format!("{:04}-{:02}-{:02}", year, month0 + 1, day));
    }
}
