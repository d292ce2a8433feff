// src/greeting.rs
//! Time-of-day greeting shown under the profile name.
use chrono::{Datelike, Timelike};

/// The five bands the local day is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    LateNight,
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => DayPeriod::LateNight,
            6..=11 => DayPeriod::Morning,
            12..=16 => DayPeriod::Afternoon,
            17..=20 => DayPeriod::Evening,
            _ => DayPeriod::Night,
        }
    }

    pub fn of<T: Timelike>(now: &T) -> Self {
        Self::from_hour(now.hour())
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            DayPeriod::LateNight => "🦉",
            DayPeriod::Morning => "☀️",
            DayPeriod::Afternoon => "🌞",
            DayPeriod::Evening => "🌅",
            DayPeriod::Night => "🌙",
        }
    }
}

pub fn greeting<T: Datelike + Timelike>(now: &T) -> String {
    let day = weekday_name(now);

    match DayPeriod::of(now) {
        DayPeriod::LateNight => "🌙 Late night, early bird?".to_string(),
        DayPeriod::Morning => format!("🌅 Good Morning! Happy {}", day),
        DayPeriod::Afternoon => format!("☀️ Good Afternoon! Enjoying your {}?", day),
        DayPeriod::Evening => format!("🌆 Good Evening! Hope your {} was great", day),
        DayPeriod::Night => "🌙 Good Night! Sweet dreams".to_string(),
    }
}

pub fn emoji<T: Timelike>(now: &T) -> &'static str {
    DayPeriod::of(now).emoji()
}

fn weekday_name<T: Datelike>(now: &T) -> &'static str {
    use chrono::Weekday::*;
    match now.weekday() {
        Mon => "Monday",
        Tue => "Tuesday",
        Wed => "Wednesday",
        Thu => "Thursday",
        Fri => "Friday",
        Sat => "Saturday",
        Sun => "Sunday",
    }
}
