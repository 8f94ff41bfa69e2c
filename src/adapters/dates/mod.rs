//! Rule-based English date parser
//!
//! Implements `DateParser` for the deadline phrases that show up in
//! meeting notes: relative days, weekday names, "in N weeks", calendar
//! dates in a few common spellings, and ISO / RFC 3339 timestamps.
//!
//! Date-only expressions resolve to the last second of that day (UTC).

use chrono::{DateTime, Datelike, Days, Month, Months, NaiveDate, Utc, Weekday};

use crate::core::ports::DateParser;

/// Longest token run tried as one expression
const MAX_PHRASE_TOKENS: usize = 4;

/// Words skipped before the expression proper
const LEADING_FILLER: &[&str] = &["is", "on", "by", "at", "due", "before", "until"];

/// Parses English date expressions relative to a reference clock
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishDateParser {
    reference: Option<DateTime<Utc>>,
}

impl EnglishDateParser {
    /// Parser anchored to the wall clock at each call
    #[must_use]
    pub const fn new() -> Self {
        Self { reference: None }
    }

    /// Parser anchored to a fixed instant
    #[must_use]
    pub const fn anchored(reference: DateTime<Utc>) -> Self {
        Self {
            reference: Some(reference),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.reference.unwrap_or_else(Utc::now)
    }
}

impl DateParser for EnglishDateParser {
    fn parse(&self, expression: &str, locale: &str) -> Option<DateTime<Utc>> {
        if !is_english(locale) {
            return None;
        }

        let lowered = expression.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split_whitespace()
            .map(|t| t.trim_end_matches([',', '.', '!', '?', ';']))
            .filter(|t| !t.is_empty() && *t != "the")
            .skip_while(|t| LEADING_FILLER.contains(t))
            .collect();

        let now = self.now();
        (1..=tokens.len().min(MAX_PHRASE_TOKENS))
            .rev()
            .find_map(|n| parse_phrase(&tokens[..n], now))
    }
}

fn is_english(locale: &str) -> bool {
    locale
        .split(['-', '_'])
        .next()
        .is_some_and(|lang| lang.is_empty() || lang.eq_ignore_ascii_case("en"))
}

fn parse_phrase(tokens: &[&str], now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let today = now.date_naive();

    let date = match tokens {
        [single] => {
            if let Ok(exact) = DateTime::parse_from_rfc3339(&single.to_uppercase()) {
                return Some(exact.with_timezone(&Utc));
            }
            single_token_date(single, today)?
        },
        ["end", "of", "day"] => today,
        ["end", "of", "week"] => {
            let to_sunday = (7 - today.weekday().num_days_from_sunday()) % 7;
            today.checked_add_days(Days::new(u64::from(to_sunday)))?
        },
        ["end", "of", "month"] => NaiveDate::from_ymd_opt(today.year(), today.month(), 1)?
            .checked_add_months(Months::new(1))?
            .pred_opt()?,
        ["next", "week"] => today.checked_add_days(Days::new(7))?,
        ["next", "month"] => today.checked_add_months(Months::new(1))?,
        ["next", "year"] => today.checked_add_months(Months::new(12))?,
        ["next", day] => {
            let ahead = days_until(today, day.parse::<Weekday>().ok()?);
            today.checked_add_days(Days::new(if ahead == 0 { 7 } else { ahead }))?
        },
        ["this", day] => {
            let ahead = days_until(today, day.parse::<Weekday>().ok()?);
            today.checked_add_days(Days::new(ahead))?
        },
        ["in", count, unit] => offset(today, count, unit)?,
        [count, unit, "from", "now"] => offset(today, count, unit)?,
        [a, b] => month_day(a, b, None, today).or_else(|| month_day(b, a, None, today))?,
        [a, b, year] => {
            let year = year.parse::<i32>().ok().filter(|y| *y >= 1000)?;
            month_day(a, b, Some(year), today).or_else(|| month_day(b, a, Some(year), today))?
        },
        _ => return None,
    };

    end_of(date)
}

fn single_token_date(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    match token {
        "today" | "tonight" | "eod" => Some(today),
        "tomorrow" => today.succ_opt(),
        "yesterday" => today.pred_opt(),
        _ => {
            if let Ok(weekday) = token.parse::<Weekday>() {
                return today.checked_add_days(Days::new(days_until(today, weekday)));
            }
            NaiveDate::parse_from_str(token, "%Y-%m-%d")
                .or_else(|_| NaiveDate::parse_from_str(token, "%m/%d/%Y"))
                .ok()
        },
    }
}

/// Days from `today` to the next `target`, zero when today is `target`
fn days_until(today: NaiveDate, target: Weekday) -> u64 {
    let from = today.weekday().num_days_from_monday();
    let to = target.num_days_from_monday();
    u64::from((to + 7 - from) % 7)
}

fn offset(today: NaiveDate, count: &str, unit: &str) -> Option<NaiveDate> {
    let n = count_value(count)?;
    match unit {
        "day" | "days" => today.checked_add_days(Days::new(u64::from(n))),
        "week" | "weeks" => today.checked_add_days(Days::new(u64::from(n) * 7)),
        "month" | "months" => today.checked_add_months(Months::new(n)),
        _ => None,
    }
}

fn count_value(word: &str) -> Option<u32> {
    let n = match word {
        "a" | "an" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        _ => return word.parse().ok(),
    };
    Some(n)
}

/// "march" + "15th" (+ year); without a year a date already behind us rolls over
fn month_day(month: &str, day: &str, year: Option<i32>, today: NaiveDate) -> Option<NaiveDate> {
    let month = month.parse::<Month>().ok()?.number_from_month();
    let split = day.find(|c: char| !c.is_ascii_digit()).unwrap_or(day.len());
    let (digits, suffix) = day.split_at(split);
    if digits.is_empty() || !matches!(suffix, "" | "st" | "nd" | "rd" | "th") {
        return None;
    }
    let day = digits.parse::<u32>().ok()?;

    match year {
        Some(year) => NaiveDate::from_ymd_opt(year, month, day),
        None => {
            let this_year = NaiveDate::from_ymd_opt(today.year(), month, day)?;
            if this_year < today {
                NaiveDate::from_ymd_opt(today.year() + 1, month, day)
            } else {
                Some(this_year)
            }
        },
    }
}

fn end_of(date: NaiveDate) -> Option<DateTime<Utc>> {
    Some(date.and_hms_opt(23, 59, 59)?.and_utc())
}
