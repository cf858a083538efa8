//! Mock data commands.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use rand::Rng;

use ft_core::mock::{MockRange, generate, has_mock_data, purge_mock};
use ft_db::Store;

/// Appends mock entries for every day from `start` to `end` inclusive.
///
/// Missing bounds default to three months before `today` and `today`.
pub fn generate_run<W: Write, R: Rng>(
    writer: &mut W,
    store: &Store,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
    rng: &mut R,
) -> Result<usize> {
    let defaults = MockRange::default_for(today);
    let range = MockRange {
        start: start.unwrap_or(defaults.start),
        end: end.unwrap_or(defaults.end),
    };
    if range.start > range.end {
        bail!("start date {} is after end date {}", range.start, range.end);
    }

    let mock = generate(range, rng);
    let count = mock.len();
    let mut entries = store.load_entries()?;
    entries.extend(mock);
    store.save_entries(&entries)?;

    writeln!(
        writer,
        "Generated {count} mock entries from {} to {}.",
        range.start, range.end
    )?;
    Ok(count)
}

/// Removes every mock entry, leaving real data untouched.
pub fn purge_run<W: Write>(writer: &mut W, store: &Store) -> Result<usize> {
    let mut entries = store.load_entries()?;
    if !has_mock_data(&entries) {
        writeln!(writer, "No mock data to remove.")?;
        return Ok(0);
    }
    let removed = purge_mock(&mut entries);
    store.save_entries(&entries)?;
    tracing::info!(removed, "Purged mock entries");
    writeln!(writer, "Removed {removed} mock entries.")?;
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use ft_core::FlowEntry;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn generate_then_purge_restores_real_entries() {
        let store = Store::open_in_memory().unwrap();
        let real = FlowEntry::new(Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap(), 250.0, 25.0);
        store.save_entries(std::slice::from_ref(&real)).unwrap();

        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(11);
        let count = generate_run(
            &mut output,
            &store,
            Some(date(2025, 1, 1)),
            Some(date(2025, 1, 7)),
            date(2025, 3, 1),
            &mut rng,
        )
        .unwrap();
        assert_eq!(count, 21);
        assert_eq!(store.load_entries().unwrap().len(), 22);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Generated 21 mock entries from 2025-01-01 to 2025-01-07.\n"
        );

        let mut output = Vec::new();
        assert_eq!(purge_run(&mut output, &store).unwrap(), 21);
        assert_eq!(store.load_entries().unwrap(), vec![real]);

        let mut output = Vec::new();
        assert_eq!(purge_run(&mut output, &store).unwrap(), 0);
        assert_eq!(String::from_utf8(output).unwrap(), "No mock data to remove.\n");
    }

    #[test]
    fn generate_defaults_to_last_three_months() {
        let store = Store::open_in_memory().unwrap();
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(5);
        let count =
            generate_run(&mut output, &store, None, None, date(2025, 4, 30), &mut rng).unwrap();
        // 2025-01-30 through 2025-04-30 is 91 days.
        assert_eq!(count, 91 * 3);
    }

    #[test]
    fn generate_rejects_inverted_range() {
        let store = Store::open_in_memory().unwrap();
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(5);
        let err = generate_run(
            &mut output,
            &store,
            Some(date(2025, 2, 1)),
            Some(date(2025, 1, 1)),
            date(2025, 3, 1),
            &mut rng,
        )
        .unwrap_err();
        assert!(err.to_string().contains("is after end date"));
        assert!(store.load_entries().unwrap().is_empty());
    }
}
