//! Daily mileage allocation within a week.

use super::mileage::round_half_up;
use crate::models::DAYS_PER_WEEK;

/// Workout days run this much further than easy days.
pub const WORKOUT_TO_EASY_RATIO: f64 = 1.4;

// Three easy days plus two workout days, in units of one easy day.
const EASY_DAY_SHARES: f64 = 3.0 + 2.0 * WORKOUT_TO_EASY_RATIO;

/// Splits a week's target into Monday..Sunday distances.
///
/// Saturday carries the long run and Sunday is always zero. The remainder is
/// divided between three easy days and two workout days, both rounded to
/// whole miles, and the rounding residual is spread back over the easy days.
/// The result sums to the target within a mile or two, not exactly.
pub fn allocate_week(target_mileage: f64, long_run: f64) -> [f64; DAYS_PER_WEEK] {
    let raw_easy = (target_mileage - long_run) / EASY_DAY_SHARES;
    let workout = round_half_up(raw_easy * WORKOUT_TO_EASY_RATIO);
    let mut easy = round_half_up(raw_easy);

    let residual = target_mileage - (3.0 * easy + 2.0 * workout + long_run);
    easy += round_half_up(residual / 3.0);

    [easy, workout, easy, workout, easy, long_run, 0.0]
}
