#[cfg(test)]
mod tests {
    use crate::models::{TimeOfDay, MINUTES_PER_DAY};
    use chrono::NaiveTime;

    #[test]
    fn test_from_hm() {
        let time = TimeOfDay::from_hm(13, 45).unwrap();
        assert_eq!(time.minutes(), 13 * 60 + 45);
        assert_eq!(time.hour(), 13);
        assert_eq!(time.minute(), 45);
    }

    #[test]
    fn test_from_hm_bounds() {
        assert_eq!(TimeOfDay::from_hm(0, 0), Some(TimeOfDay::MIDNIGHT));
        assert_eq!(TimeOfDay::from_hm(23, 59).map(|t| t.minutes()), Some(1439));
        assert!(TimeOfDay::from_hm(24, 0).is_none());
        assert!(TimeOfDay::from_hm(12, 60).is_none());
    }

    #[test]
    fn test_from_minutes() {
        assert!(TimeOfDay::from_minutes(MINUTES_PER_DAY - 1).is_some());
        assert!(TimeOfDay::from_minutes(MINUTES_PER_DAY).is_none());
    }

    #[test]
    fn test_ordering_follows_clock() {
        let morning = TimeOfDay::from_hm(9, 0).unwrap();
        let noon = TimeOfDay::from_hm(12, 0).unwrap();

        assert!(morning < noon);
        assert!(noon > morning);
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeOfDay::from_hm(9, 5).unwrap().to_string(), "9:05");
        assert_eq!(TimeOfDay::from_hm(14, 20).unwrap().to_string(), "14:20");
        assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "0:00");
    }

    #[test]
    fn test_naive_time_conversion() {
        let time = TimeOfDay::from_hm(21, 30).unwrap();
        assert_eq!(
            time.to_naive_time(),
            NaiveTime::from_hms_opt(21, 30, 0).unwrap()
        );

        let with_seconds = NaiveTime::from_hms_opt(7, 15, 42).unwrap();
        assert_eq!(
            TimeOfDay::from_naive_time(with_seconds),
            TimeOfDay::from_hm(7, 15).unwrap()
        );
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert!(TimeOfDay::try_from(1440u16).is_err());
        assert_eq!(TimeOfDay::try_from(600u16).unwrap().hour(), 10);
    }

    #[test]
    fn test_serde_uses_minutes() {
        let time = TimeOfDay::from_hm(1, 30).unwrap();
        let encoded = toml::Value::try_from(time).unwrap();
        assert_eq!(encoded.as_integer(), Some(90));
    }
}
