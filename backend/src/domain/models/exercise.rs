use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Exercise {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub exercise_type: String,
    pub distance: String,
    pub duration: String,
    pub comments: String,
}

impl Exercise {
    /// Field-by-field comparison that ignores `date`.
    ///
    /// Timestamps lose precision on their way through the store and the wire, so
    /// two records describe the same activity when everything except the date matches.
    pub fn same_activity(&self, other: &Exercise) -> bool {
        self.id == other.id
            && self.exercise_type == other.exercise_type
            && self.distance == other.distance
            && self.duration == other.duration
            && self.comments == other.comments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn run() -> Exercise {
        Exercise {
            id: 4,
            date: Utc.with_ymd_and_hms(2012, 3, 1, 7, 0, 0).unwrap(),
            exercise_type: "run".to_string(),
            distance: "10km".to_string(),
            duration: "5 mins".to_string(),
            comments: "putExercise Test".to_string(),
        }
    }

    #[test]
    fn test_same_activity_ignores_date() {
        let original = run();
        let mut stored = run();
        stored.date = original.date + Duration::milliseconds(999);
        assert!(original.same_activity(&stored));
    }

    #[test]
    fn test_same_activity_compares_other_fields() {
        let original = run();

        let mut different_id = run();
        different_id.id = 5;
        assert!(!original.same_activity(&different_id));

        let mut different_comment = run();
        different_comment.comments = "edited".to_string();
        assert!(!original.same_activity(&different_comment));
    }
}
