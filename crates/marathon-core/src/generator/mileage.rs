//! Weekly mileage curve and long-run progression.
//!
//! Both are pure functions of the week number and the peak weekly mileage.
//! The long run in particular is recomputed from week 1 on every call rather
//! than carried over from the previous week.

/// Week of the plan that reaches the full peak weekly mileage.
pub const PEAK_WEEK: u32 = 16;

/// Peak weekly mileage at or above which the longest run is 22 miles.
pub const LONG_RUN_PEAK_THRESHOLD: f64 = 60.0;

/// Hard cap on the long run of the first taper week.
pub const TAPER_LONG_RUN_CAP: f64 = 14.0;

/// Rounds to the nearest whole number, with halves rounded towards positive
/// infinity (`10.5 -> 11`, `-1.5 -> -1`).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Planned total distance for a week.
///
/// Week 16 is the peak, weeks 17 and 18 taper to 75% and 40% of it, and
/// weeks 1-15 climb from 50% towards 95% with a three-week wave: +5% on the
/// second week of each cycle, -10% on the third.
pub fn weekly_target_mileage(week_number: u32, peak_weekly_mileage: f64) -> f64 {
    match week_number {
        PEAK_WEEK => peak_weekly_mileage,
        17 => round_half_up(peak_weekly_mileage * 0.75),
        18 => round_half_up(peak_weekly_mileage * 0.40),
        _ => round_half_up(peak_weekly_mileage * build_fraction(week_number)),
    }
}

/// Fraction of peak mileage for a build week, clamped to `[0.50, 0.95]`.
fn build_fraction(week_number: u32) -> f64 {
    let offset = week_number.saturating_sub(1);
    let base = 0.5 + (f64::from(offset) / 15.0) * 0.45;
    let wave = match offset % 3 {
        1 => 0.05,
        2 => -0.10,
        _ => 0.0,
    };
    (base + wave).clamp(0.50, 0.95)
}

/// Longest run of the plan, reached in week 16.
pub fn peak_long_run(peak_weekly_mileage: f64) -> f64 {
    if peak_weekly_mileage >= LONG_RUN_PEAK_THRESHOLD {
        22.0
    } else {
        20.0
    }
}

/// Saturday long-run distance for a week.
pub fn long_run_miles(week_number: u32, peak_weekly_mileage: f64) -> f64 {
    match week_number {
        PEAK_WEEK => peak_long_run(peak_weekly_mileage),
        17 => round_half_up(0.35 * weekly_target_mileage(17, peak_weekly_mileage))
            .min(TAPER_LONG_RUN_CAP),
        18 => round_half_up(0.25 * weekly_target_mileage(18, peak_weekly_mileage)),
        _ => build_long_run(week_number, peak_long_run(peak_weekly_mileage)),
    }
}

/// Long run for weeks 1-15: starts at 40% of the peak long run, grows by
/// 2 miles a week through week 8 and 1 mile after that, never beyond the
/// peak, and steps back by a quarter every fourth week.
fn build_long_run(week_number: u32, peak_long_run: f64) -> f64 {
    (2..=week_number).fold(round_half_up(0.40 * peak_long_run), |long_run, week| {
        if week % 4 == 0 {
            round_half_up(long_run * 0.75)
        } else {
            let increment = if week <= 8 { 2.0 } else { 1.0 };
            (long_run + increment).min(peak_long_run)
        }
    })
}
