use chrono::{Datelike, NaiveDate};

use crate::utils::datetime::format_date;
use crate::utils::validation::{ValidationError, parse_birthday, validate_name, validate_phone};

/// A validated ten-digit phone number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    /// Build a phone number, rejecting anything but ten ASCII digits
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        validate_phone(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` birthday whose year is not after `current_year`
    pub fn parse(value: &str, current_year: i32) -> Result<Self, ValidationError> {
        parse_birthday(value, current_year).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for Birthday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_date(self.0))
    }
}

/// Errors raised by address book and record operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    ContactNotFound(String),
    PhoneNotFound(String),
    Validation(ValidationError),
}

impl std::fmt::Display for BookError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookError::ContactNotFound(name) => write!(f, "Contact not found: {}", name),
            BookError::PhoneNotFound(phone) => write!(f, "Phone number not found: {}", phone),
            BookError::Validation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BookError {}

impl From<ValidationError> for BookError {
    fn from(e: ValidationError) -> Self {
        BookError::Validation(e)
    }
}

/// A single contact: a fixed name, its phone numbers and an optional birthday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for a non-blank name
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Append a phone number; duplicates are kept
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(value)?);
        Ok(())
    }

    /// Replace every entry equal to `old` with `new`
    ///
    /// `new` is validated before anything changes. Fails with
    /// `BookError::PhoneNotFound` when `old` is not on the record.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), BookError> {
        let replacement = Phone::new(new)?;

        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
            replaced += 1;
        }

        if replaced == 0 {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }
        Ok(())
    }

    /// Remove the first entry equal to `value`; absent values are ignored
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(index) = self.phones.iter().position(|p| p.as_str() == value) {
            self.phones.remove(index);
        }
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Set the birthday from `DD.MM.YYYY`, replacing any previous one
    pub fn add_birthday(&mut self, value: &str, today: NaiveDate) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(value, today.year())?);
        Ok(())
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

/// Contacts keyed by name, kept in insertion order
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record under its name, replacing any record with the same name in place
    pub fn add_record(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.name == record.name) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Result<&Record, BookError> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record, BookError> {
        self.records
            .iter_mut()
            .find(|r| r.name == name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove a record permanently
    pub fn delete(&mut self, name: &str) -> Result<Record, BookError> {
        let index = self
            .records
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        Ok(self.records.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 1).unwrap()
    }

    fn record_with_phone(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn test_record_rejects_blank_name() {
        assert_eq!(Record::new(" "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone() {
        let mut record = Record::new("John").unwrap();
        assert!(record.add_phone("1234567890").is_ok());
        assert!(record.add_phone("1234567890").is_ok()); // duplicates permitted
        assert!(matches!(
            record.add_phone("12345"),
            Err(ValidationError::InvalidPhone(_))
        ));
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_edit_phone_replaces_every_match() {
        let mut record = record_with_phone("John", "1234567890");
        record.add_phone("5555555555").unwrap();
        record.add_phone("1234567890").unwrap();

        record.edit_phone("1234567890", "0987654321").unwrap();

        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["0987654321", "5555555555", "0987654321"]);
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = record_with_phone("John", "1234567890");
        assert_eq!(
            record.edit_phone("1111111111", "0987654321"),
            Err(BookError::PhoneNotFound("1111111111".to_string()))
        );
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_record_untouched() {
        let mut record = record_with_phone("John", "1234567890");
        assert!(matches!(
            record.edit_phone("1234567890", "abc"),
            Err(BookError::Validation(ValidationError::InvalidPhone(_)))
        ));
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_phone_round_trip() {
        let mut record = record_with_phone("John", "1234567890");
        record.add_phone("5555555555").unwrap();
        record.add_phone("1112223334").unwrap();

        assert_eq!(
            record.find_phone("5555555555").map(Phone::as_str),
            Some("5555555555")
        );
        record.remove_phone("5555555555");

        assert!(record.find_phone("5555555555").is_none());
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["1234567890", "1112223334"]);

        // Removing an absent number is a no-op
        record.remove_phone("9999999999");
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_removes_first_occurrence_only() {
        let mut record = record_with_phone("John", "1234567890");
        record.add_phone("1234567890").unwrap();
        record.remove_phone("1234567890");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_add_birthday() {
        let mut record = Record::new("Alice").unwrap();
        assert!(record.add_birthday("01.01.2000", today()).is_ok());
        assert_eq!(record.birthday().map(|b| b.to_string()), Some("01.01.2000".to_string()));

        assert!(record.add_birthday("01.01.2025", today()).is_err());
        assert!(record.add_birthday("2000/01/01", today()).is_err());
        // A failed update keeps the previous value
        assert_eq!(record.birthday().map(|b| b.to_string()), Some("01.01.2000".to_string()));
    }

    #[test]
    fn test_record_display() {
        let mut record = record_with_phone("John", "1234567890");
        record.add_phone("0987654321").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 0987654321"
        );

        record.add_birthday("02.11.1990", today()).unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 0987654321, birthday: 02.11.1990"
        );
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));
        book.add_record(record_with_phone("Alice", "0987654321"));
        book.add_record(record_with_phone("John", "5555555555"));

        assert_eq!(book.len(), 2);
        let names: Vec<&str> = book.iter().map(Record::name).collect();
        assert_eq!(names, vec!["John", "Alice"]);
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "5555555555");
        assert_eq!(book.find("John").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_find_and_delete() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));

        assert!(book.find("John").is_ok());
        assert!(book.contains("John"));
        assert_eq!(
            book.find("Nobody"),
            Err(BookError::ContactNotFound("Nobody".to_string()))
        );

        let removed = book.delete("John").unwrap();
        assert_eq!(removed.name(), "John");
        assert!(book.is_empty());
        assert_eq!(
            book.delete("John"),
            Err(BookError::ContactNotFound("John".to_string()))
        );
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));
        book.find_mut("John").unwrap().add_phone("0987654321").unwrap();
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }
}
