const SECONDS_PER_DAY: i64 = 86400;
const SECONDS_PER_HOUR: i64 = 3600;

pub fn day_id(timestamp: i64) -> i64 {
    timestamp.div_euclid(SECONDS_PER_DAY)
}

pub fn day_start_timestamp(day_id: i64) -> i64 {
    day_id * SECONDS_PER_DAY
}

/// Unique hour within unix history.
pub fn hour_index(timestamp: i64) -> i64 {
    timestamp.div_euclid(SECONDS_PER_HOUR)
}

pub fn hour_start_unix(hour_index: i64) -> i64 {
    hour_index * SECONDS_PER_HOUR
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Hour,
}

impl Granularity {
    pub fn index_of(self, timestamp: i64) -> i64 {
        match self {
            Granularity::Day => day_id(timestamp),
            Granularity::Hour => hour_index(timestamp),
        }
    }

    pub fn period_start(self, index: i64) -> i64 {
        match self {
            Granularity::Day => day_start_timestamp(index),
            Granularity::Hour => hour_start_unix(index),
        }
    }
}
