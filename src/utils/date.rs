use std::sync::{Arc, RwLock};
use chrono::{Duration, Local, NaiveDate};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// Clock is the only source of "today" for loan dates, overdue checks and fines.
pub trait Clock: Sync + Send {
    fn today(&self) -> NaiveDate;
}

// SystemClock reads the calendar date in the local time zone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

// ManualClock answers whatever date it was last set to. Clones share the same date, so a
// clone handed to a Catalog can be moved forward from outside.
#[derive(Debug, Clone)]
pub struct ManualClock {
    today: Arc<RwLock<NaiveDate>>,
}

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today: Arc::new(RwLock::new(today)) }
    }

    pub fn set(&self, today: NaiveDate) {
        match self.today.write() {
            Ok(mut guard) => *guard = today,
            Err(poisoned) => *poisoned.into_inner() = today,
        }
    }

    pub fn advance(&self, days: i64) {
        self.set(self.today() + Duration::days(days));
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        match self.today.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};
    use chrono::NaiveDateTime;
    use crate::utils::date::{Clock, ManualClock, SystemClock, serializer};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[tokio::test]
    async fn test_should_move_manual_clock() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 28).expect("valid date");
        let clock = ManualClock::new(day);
        let shared = clock.clone();
        assert_eq!(day, shared.today());
        clock.advance(2);
        assert_eq!(NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"), shared.today());
        clock.set(day);
        assert_eq!(day, shared.today());
    }

    #[tokio::test]
    async fn test_should_read_system_clock() {
        let today = SystemClock.today();
        assert!(today > NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"));
    }

    #[tokio::test]
    async fn test_should_serialize_dates() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
            .and_hms_milli_opt(10, 11, 12, 345).expect("valid time");
        let json = serde_json::to_string(&Stamped { at }).expect("should serialize");
        assert_eq!("{\"at\":\"2024-03-01T10:11:12.345\"}", json.as_str());
        let parsed: Stamped = serde_json::from_str(json.as_str()).expect("should deserialize");
        assert_eq!(at, parsed.at);
    }
}
