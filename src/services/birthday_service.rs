//! Birthday recurrence engine.
//!
//! Maps stored birthdays to their next occurrence relative to a reference
//! date, keeps the ones that fall inside the upcoming window, and moves
//! weekend greetings to the following Monday.

use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Default horizon, in days after today, for upcoming birthdays.
pub const UPCOMING_WINDOW_DAYS: u32 = 7;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The birthday moved into `year`. Feb 29 falls back to Feb 28 in common years.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// Next occurrence of `birthday` on or after `today`.
///
/// Returns `None` only when the target year is outside chrono's range.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let candidate = occurrence_in_year(birthday, today.year())?;
    if candidate < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        Some(candidate)
    }
}

/// Move a Saturday or Sunday to the following Monday.
///
/// Returns `None` when that Monday is past the last representable date.
pub fn congratulation_date(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_signed(Duration::days(2)),
        Weekday::Sun => date.checked_add_signed(Duration::days(1)),
        _ => Some(date),
    }
}

/// One contact to greet inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Congratulation {
    pub name: String,
    /// The actual birthday occurrence.
    pub occurrence: NaiveDate,
    /// The day the greeting is scheduled for, after weekend shifting.
    pub congratulation_date: NaiveDate,
}

/// Birthdays inside `[today, today + window_days]`, sorted by greeting date
/// then by case-insensitive name.
///
/// Window membership is decided on the real occurrence, so a weekend
/// birthday at the edge of the window can be greeted up to two days past it.
pub fn upcoming_congratulations<'a, I>(
    records: I,
    today: NaiveDate,
    window_days: u32,
) -> Vec<Congratulation>
where
    I: IntoIterator<Item = &'a Record>,
{
    let window_end = today
        .checked_add_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    let mut upcoming: Vec<Congratulation> = records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let occurrence = next_occurrence(birthday.date(), today)?;
            if occurrence > window_end {
                return None;
            }
            Some(Congratulation {
                name: record.name().to_string(),
                occurrence,
                congratulation_date: congratulation_date(occurrence)?,
            })
        })
        .collect();

    upcoming.sort_by_cached_key(|c| (c.congratulation_date, c.name.to_lowercase()));
    upcoming
}

/// Upcoming birthdays grouped by greeting weekday.
///
/// Groups iterate Monday to Sunday; weekdays without anyone are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    groups: [Vec<String>; 7],
}

impl UpcomingBirthdays {
    /// Group congratulations by the weekday of their greeting date.
    pub fn from_congratulations(congratulations: &[Congratulation]) -> Self {
        let mut upcoming = Self::default();
        for c in congratulations {
            let slot = c.congratulation_date.weekday().num_days_from_monday() as usize;
            upcoming.groups[slot].push(c.name.clone());
        }
        for names in upcoming.groups.iter_mut() {
            names.sort_by_cached_key(|name| name.to_lowercase());
        }
        upcoming
    }

    /// Names greeted on `weekday`, or `None` if nobody is.
    pub fn get(&self, weekday: Weekday) -> Option<&[String]> {
        let names = &self.groups[weekday.num_days_from_monday() as usize];
        (!names.is_empty()).then_some(names.as_slice())
    }

    /// Non-empty groups in Monday to Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> + '_ {
        WEEK.iter()
            .zip(self.groups.iter())
            .filter(|(_, names)| !names.is_empty())
            .map(|(weekday, names)| (*weekday, names.as_slice()))
    }

    /// Number of non-empty weekday groups.
    pub fn len(&self) -> usize {
        self.groups.iter().filter(|names| !names.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }
}

impl Serialize for UpcomingBirthdays {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (weekday, names) in self.iter() {
            map.serialize_entry(weekday_name(weekday), names)?;
        }
        map.end()
    }
}

/// One line per weekday: `Monday: Ann, Bob`.
impl fmt::Display for UpcomingBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (weekday, names) in self.iter() {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{}: {}", weekday_name(weekday), names.join(", "))?;
        }
        Ok(())
    }
}

/// Group the upcoming birthdays of `records` by greeting weekday.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window_days: u32,
) -> UpcomingBirthdays
where
    I: IntoIterator<Item = &'a Record>,
{
    let congratulations = upcoming_congratulations(records, today, window_days);
    UpcomingBirthdays::from_congratulations(&congratulations)
}
