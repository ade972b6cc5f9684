pub mod calendar;
pub mod feed;
pub mod fortune;
pub mod insights;
pub mod prompt;
pub mod reset;
pub mod show;
pub mod status;
pub mod write;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use mood_journal::{JournalConfig, JsonFileStore, Session};

/// Settings shared by every command.
pub struct Context {
    user: String,
    data_dir: PathBuf,
    seed: Option<u64>,
    pub today: NaiveDate,
}

impl Context {
    pub fn new(
        user: String,
        data_dir: PathBuf,
        seed: Option<u64>,
        today: Option<&str>,
    ) -> Result<Self, String> {
        let today = match today {
            Some(raw) => parse_date(raw)?,
            None => Local::now().date_naive(),
        };
        Ok(Self {
            user,
            data_dir,
            seed,
            today,
        })
    }

    /// Open the user's session from the data directory.
    pub fn open(&self) -> Result<Session<JsonFileStore>, String> {
        let mut config = JournalConfig::default();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        tracing::debug!(
            user = %self.user,
            dir = %self.data_dir.display(),
            "opening session"
        );
        let store = JsonFileStore::new(&self.data_dir);
        Session::open(&self.user, store, config, self.today)
            .map_err(|e| e.to_string())
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date \"{raw}\" (expected YYYY-MM-DD)"))
}

/// Parse a `YYYY-MM` month.
pub fn parse_month(raw: &str) -> Result<(i32, u32), String> {
    let invalid = || format!("invalid month \"{raw}\" (expected YYYY-MM)");
    let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
    let year = year.parse().map_err(|_| invalid())?;
    let month = month.parse().map_err(|_| invalid())?;
    Ok((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_parse() {
        assert_eq!(
            parse_date(" 2024-06-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(parse_date("01/06/2024").is_err());
    }

    #[test]
    fn months_parse() {
        assert_eq!(parse_month("2024-02").unwrap(), (2024, 2));
        assert!(parse_month("2024").is_err());
        assert!(parse_month("abcd-ef").is_err());
    }
}
