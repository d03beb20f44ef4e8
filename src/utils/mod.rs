/// Utility modules for common functionality
pub mod datetime;
pub mod message_formatter;
pub mod messages;
pub mod string_utils;
pub mod timezone;
pub mod validation;
