use chrono::NaiveDate;

/// Short label for list rows: "Today", "Yesterday", or e.g. "Sat, Aug 23".
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.pred_opt() == Some(date) {
        "Yesterday".to_string()
    } else {
        short_date(date)
    }
}

/// Compact date, e.g. "Sat, Aug 23".
pub fn short_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Heading form, e.g. "Saturday, August 23, 2025".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
