/// Primary keys of the `submissions` table are PostgreSQL SERIAL.
pub type DbId = i32;

/// `submission_date` is a PostgreSQL `timestamp` (no time zone).
pub type Timestamp = chrono::NaiveDateTime;
