//! The interval table and the tunable scheduler parameters.

use chrono::Duration;

use crate::SrsError;

/// Days until the next review, indexed by mastery level 1, 2, 3, ...
///
/// * Level 1: 1 day
/// * Level 2: 3 days
/// * Level 3: 1 week
/// * Level 4: 2 weeks
/// * Level 5: 1 month
/// * Level 6: 3 months
/// * Level 7: 6 months
/// * Level 8: 1 year (mastered, repeats at this cadence)
pub const DEFAULT_INTERVALS_DAYS: [u32; 8] = [1, 3, 7, 14, 30, 90, 180, 365];

/// Minutes before an item graded `again` resurfaces.
pub const DEFAULT_AGAIN_DELAY_MINUTES: u32 = 10;

const MIN_TABLE_LEN: usize = 6;
const MAX_TABLE_LEN: usize = 10;

/// Longest accepted interval, ten years.
pub const MAX_INTERVAL_DAYS: u32 = 3650;

/// Scheduler parameters: the interval table and the short `again` delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    intervals_days: Vec<u32>,
    again_delay_minutes: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            intervals_days: DEFAULT_INTERVALS_DAYS.to_vec(),
            again_delay_minutes: DEFAULT_AGAIN_DELAY_MINUTES,
        }
    }
}

impl SchedulerConfig {
    /// Build a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `intervals_days` - Days per level, starting at level 1
    /// * `again_delay_minutes` - Delay applied after an `again` grade
    ///
    /// # Errors
    ///
    /// The table must hold 6 to 10 strictly increasing, positive entries no
    /// longer than [`MAX_INTERVAL_DAYS`], and the again-delay must keep the
    /// item inside the current hour.
    pub fn new(intervals_days: Vec<u32>, again_delay_minutes: u32) -> Result<Self, SrsError> {
        if !(MIN_TABLE_LEN..=MAX_TABLE_LEN).contains(&intervals_days.len()) {
            return Err(SrsError::InvalidIntervals(format!(
                "expected {MIN_TABLE_LEN} to {MAX_TABLE_LEN} entries, got {}",
                intervals_days.len()
            )));
        }

        if intervals_days.first() == Some(&0) {
            return Err(SrsError::InvalidIntervals(
                "intervals must be at least one day".to_string(),
            ));
        }

        if let Some(pair) = intervals_days.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(SrsError::InvalidIntervals(format!(
                "intervals must be strictly increasing, found {} followed by {}",
                pair[0], pair[1]
            )));
        }

        if let Some(&last) = intervals_days.last()
            && last > MAX_INTERVAL_DAYS
        {
            return Err(SrsError::InvalidIntervals(format!(
                "intervals must be at most {MAX_INTERVAL_DAYS} days, got {last}"
            )));
        }

        if !(1..60).contains(&again_delay_minutes) {
            return Err(SrsError::InvalidAgainDelay(again_delay_minutes));
        }

        Ok(Self {
            intervals_days,
            again_delay_minutes,
        })
    }

    pub fn intervals_days(&self) -> &[u32] {
        &self.intervals_days
    }

    /// The highest reachable level, equal to the table length.
    pub fn max_level(&self) -> u32 {
        // The table length is bounded by MAX_TABLE_LEN.
        self.intervals_days.len() as u32
    }

    pub fn again_delay(&self) -> Duration {
        Duration::minutes(i64::from(self.again_delay_minutes))
    }

    /// Get the review interval for a given level.
    ///
    /// # Returns
    ///
    /// `None` for level 0 (which has no table entry) and for levels past the
    /// top of the table.
    pub fn interval_for_level(&self, level: u32) -> Option<Duration> {
        let index = usize::try_from(level.checked_sub(1)?).ok()?;
        self.intervals_days
            .get(index)
            .map(|days| Duration::days(i64::from(*days)))
    }
}
