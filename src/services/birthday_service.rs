/// Birthday service - works out whom to congratulate in the coming week
use chrono::NaiveDate;
use tracing::debug;

use crate::constants::UPCOMING_WINDOW_DAYS;
use crate::models::{AddressBook, Record};
use crate::utils::datetime::{congratulation_date, days_between};

/// A contact whose birthday falls inside the upcoming window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday<'a> {
    pub record: &'a Record,
    /// Next occurrence, moved to Monday when it lands on a weekend
    pub congratulation_date: NaiveDate,
}

/// Service for birthday-related queries over an address book
pub struct BirthdayService<'a> {
    book: &'a AddressBook,
}

impl<'a> BirthdayService<'a> {
    /// Create a new birthday service
    pub fn new(book: &'a AddressBook) -> Self {
        Self { book }
    }

    /// Contacts to congratulate within `UPCOMING_WINDOW_DAYS` of `today`, in book order
    pub fn upcoming(&self, today: NaiveDate) -> Vec<UpcomingBirthday<'a>> {
        self.book
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = congratulation_date(birthday.date(), today)?;
                Self::is_within_window(today, date).then_some(UpcomingBirthday {
                    record,
                    congratulation_date: date,
                })
            })
            .inspect(|upcoming| {
                debug!(
                    "Upcoming birthday: {} on {}",
                    upcoming.record.name(),
                    upcoming.congratulation_date
                );
            })
            .collect()
    }

    fn is_within_window(today: NaiveDate, date: NaiveDate) -> bool {
        (0..=UPCOMING_WINDOW_DAYS).contains(&days_between(today, date))
    }
}

impl AddressBook {
    /// Records whose (weekend-shifted) birthday is at most a week from `today`
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<&Record> {
        BirthdayService::new(self)
            .upcoming(today)
            .into_iter()
            .map(|upcoming| upcoming.record)
            .collect()
    }

    /// Same as `get_upcoming_birthdays`, paired with the congratulation date
    pub fn upcoming_congratulations(&self, today: NaiveDate) -> Vec<UpcomingBirthday<'_>> {
        BirthdayService::new(self).upcoming(today)
    }
}
