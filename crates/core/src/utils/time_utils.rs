use chrono::{Datelike, NaiveDate};

/// Returns the `months` calendar months ending with the month of `today`,
/// oldest first, formatted `YYYY-MM`.
pub fn trailing_months(today: NaiveDate, months: usize) -> Vec<String> {
    let current = today.year() * 12 + today.month0() as i32;
    (0..months as i32)
        .rev()
        .map(|back| {
            let index = current - back;
            format!("{:04}-{:02}", index.div_euclid(12), index.rem_euclid(12) + 1)
        })
        .collect()
}
