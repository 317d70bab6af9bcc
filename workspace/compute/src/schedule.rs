use chrono::{Days, Months, NaiveDate};
use model::Frequency;

use crate::error::{ComputeError, Result};

/// Returns the next occurrence date for a schedule.
///
/// Advancement is always relative to the scheduled date, never to the day a
/// payment actually happened, so a late settlement does not drift the
/// schedule forward.
///
/// Biweekly is fifteen days: the twice-a-month pay cycle this ledger
/// models, not every-other-week. Month and year steps use chrono's
/// calendar arithmetic, which clamps to the last day of a short month
/// (Jan 31 -> Feb 28).
pub fn advance(date: NaiveDate, frequency: Frequency) -> Result<NaiveDate> {
    let next = match frequency {
        Frequency::Weekly => date.checked_add_days(Days::new(7)),
        Frequency::Biweekly => date.checked_add_days(Days::new(15)),
        Frequency::Monthly => date.checked_add_months(Months::new(1)),
        Frequency::Yearly => date.checked_add_months(Months::new(12)),
    };
    next.ok_or(ComputeError::DateOverflow { date, frequency })
}
