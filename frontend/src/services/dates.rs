/// A date-of-birth string is stored as `YYYY-MM-DD`, but the backend
/// sometimes returns it with a time suffix (`2010-06-01T00:00:00`).
/// Everything user-facing wants only the date part.
pub fn display_date(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    use crate::services::validation::validate_date_of_birth;

    #[test]
    fn time_suffix_is_dropped() {
        assert_eq!(display_date("2010-06-01T00:00:00"), "2010-06-01");
        assert_eq!(display_date("2010-06-01"), "2010-06-01");
        assert_eq!(display_date(""), "");
    }

    #[test]
    fn backend_loaded_date_validates_after_normalization() {
        // An edit populates the form from the backend value; the suffix must
        // be gone by then or an untouched date field fails validation.
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            validate_date_of_birth(display_date("2010-06-01T00:00:00"), today),
            Ok(NaiveDate::from_ymd_opt(2010, 6, 1).unwrap())
        );
    }
}
