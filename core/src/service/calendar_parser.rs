use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::ParseError;
use crate::input::{is_likely_initial, NameMapping};
use crate::model::day::DayRecord;
use crate::time::{first_of_next_month, parse_start_date, with_day_overflow};

/// Lines per schedule week: one header of day numbers, then the rows.
pub const BLOCK_LINES: usize = 5;
pub const WORKER_ROWS: usize = BLOCK_LINES - 1;

pub struct CalendarParser<'a> {
    mapping: &'a NameMapping,
}

impl<'a> CalendarParser<'a> {
    pub fn new(mapping: &'a NameMapping) -> Self {
        Self { mapping }
    }

    /// Parses the whole calendar. Any failure discards every record.
    pub fn parse(&self, text: &str, start_date: &str) -> Result<Vec<DayRecord>, ParseError> {
        let mut current = parse_start_date(start_date)?;
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let mut records = Vec::new();
        for (block, chunk) in lines.chunks(BLOCK_LINES).enumerate() {
            current = self.parse_block(block, chunk, current, &mut records)?;
        }

        debug!(records = records.len(), "calendar parsed");
        Ok(records)
    }

    fn parse_block(
        &self,
        block: usize,
        chunk: &[&str],
        mut current: NaiveDate,
        records: &mut Vec<DayRecord>,
    ) -> Result<NaiveDate, ParseError> {
        let header: Vec<&str> = chunk[0].split_whitespace().collect();
        let day_count = header.len();
        debug!(block, day_count, "parsing block");

        // Short trailing blocks read missing rows as empty.
        let rows: Vec<Vec<String>> = (1..=WORKER_ROWS)
            .map(|r| {
                let row = chunk.get(r).copied().unwrap_or_default();
                parse_worker_names(row, day_count, self.mapping)
            })
            .collect();

        let mut previous: Option<u32> = None;
        for (j, token) in header.iter().enumerate() {
            let day = parse_day_token(token).ok_or_else(|| ParseError::InvalidDayToken {
                block,
                token: token.to_string(),
            })?;

            if previous.is_some_and(|prev| day < prev) {
                current = first_of_next_month(current)
                    .ok_or(ParseError::DateOutOfRange { block, day })?;
                debug!(block, day, month = current.month(), "month rollover");
            }
            current = with_day_overflow(current, day).ok_or(ParseError::DateOutOfRange { block, day })?;
            previous = Some(day);

            let workers = rows.iter().filter_map(|row| row.get(j).cloned()).collect();
            records.push(DayRecord::new(day, current.month(), current.year(), workers));
        }

        Ok(current)
    }
}

/// Convenience entry point taking the raw `FROM=TO` mapping text.
pub fn parse_calendar(text: &str, start_date: &str, mapping_text: &str) -> Result<Vec<DayRecord>, ParseError> {
    let mapping = NameMapping::parse(mapping_text);
    CalendarParser::new(&mapping).parse(text, start_date)
}

/// Splits a worker row into at most `day_count` resolved names.
///
/// When the token count already matches the day count and no later token
/// looks like an initial, each token is one name. Otherwise initials are
/// glued onto the preceding token ("MANUEL H" is one worker).
pub fn parse_worker_names(row: &str, day_count: usize, mapping: &NameMapping) -> Vec<String> {
    let words: Vec<&str> = row.split_whitespace().collect();

    let has_initials = words.iter().skip(1).any(|w| is_likely_initial(w));
    if words.len() == day_count && !has_initials {
        return words.iter().filter_map(|w| mapping.resolve(w)).collect();
    }

    let mut workers = Vec::with_capacity(day_count);
    let mut iter = words.iter().peekable();
    while workers.len() < day_count {
        let Some(first) = iter.next() else { break };
        let mut name = first.to_string();
        while let Some(next) = iter.next_if(|w| is_likely_initial(w)) {
            name.push(' ');
            name.push_str(next);
        }
        workers.push(name);
    }

    workers.iter().filter_map(|name| mapping.resolve(name)).collect()
}

/// Reads the leading digits of a header token ("22", "22.", "7*").
fn parse_day_token(token: &str) -> Option<u32> {
    let digits: String = token.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
