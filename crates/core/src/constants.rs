//! Constants used throughout the obstetric core crate.
//!
//! Clinical thresholds that drive classification live in [`crate::thresholds`]; this module
//! holds the calendar conventions and configuration defaults.

/// Days from the last menstrual period to the expected delivery date (40 weeks).
pub const PREGNANCY_TERM_DAYS: u64 = 280;

/// Days per gestational week.
pub const DAYS_PER_WEEK: i64 = 7;

/// Last gestational week counted in the first trimester.
pub const FIRST_TRIMESTER_LAST_WEEK: u32 = 13;

/// Last gestational week counted in the second trimester.
pub const SECOND_TRIMESTER_LAST_WEEK: u32 = 28;

/// Number of antenatal visits making up the minimum complete panel.
pub const MINIMUM_ANTENATAL_VISITS: usize = 4;

/// Number of doses in the maternal tetanus-toxoid chain.
pub const TETANUS_DOSE_COUNT: usize = 5;

/// Default 5-minute Apgar score below which a low-Apgar alert is raised.
pub const DEFAULT_LOW_APGAR_THRESHOLD: u8 = 7;

/// Default number of days before the expected delivery date that triggers a reminder.
pub const DEFAULT_DELIVERY_WINDOW_DAYS: u32 = 7;

/// Default length of the immediate post-partum surveillance window.
pub const DEFAULT_OBSERVATION_WINDOW_MINUTES: u32 = 120;

/// Default spacing between post-partum observations.
pub const DEFAULT_OBSERVATION_INTERVAL_MINUTES: u32 = 15;

/// Environment variable overriding the low-Apgar threshold.
pub const LOW_APGAR_THRESHOLD_ENV: &str = "OBSTETRIC_LOW_APGAR_THRESHOLD";

/// Environment variable overriding the delivery reminder window.
pub const DELIVERY_WINDOW_DAYS_ENV: &str = "OBSTETRIC_DELIVERY_WINDOW_DAYS";

/// Environment variable overriding the post-partum observation window.
pub const OBSERVATION_WINDOW_MINUTES_ENV: &str = "OBSTETRIC_OBSERVATION_WINDOW_MINUTES";

/// Environment variable overriding the post-partum observation interval.
pub const OBSERVATION_INTERVAL_MINUTES_ENV: &str = "OBSTETRIC_OBSERVATION_INTERVAL_MINUTES";
