use chrono::NaiveDate;

/// Wire and display format for dates (pt-BR short form).
pub const BR_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a `dd/mm/yyyy` date as sent by the backend.
pub fn parse_br_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), BR_DATE_FORMAT).ok()
}

/// Formats a date the way the pt-BR locale prints short dates.
pub fn format_br_date(date: NaiveDate) -> String {
    date.format(BR_DATE_FORMAT).to_string()
}
