use chrono::{DateTime, Duration, Months, Utc};

use super::Frequency;
use crate::errors::{invalid_input, Error, Result};
use crate::utils::start_of_utc_day;

fn recurring_once_error() -> Error {
    invalid_input("A recurring transaction cannot have the frequency 'once'")
}

/// Rejects the "recurring but only once" contradiction.
pub fn ensure_recurrence_is_consistent(frequency: Frequency, is_recurring: bool) -> Result<()> {
    if is_recurring && frequency == Frequency::Once {
        return Err(recurring_once_error());
    }
    Ok(())
}

/// Computes the single next payment date for a schedule, relative to `now`.
///
/// Non-recurring schedules have no next date. Monthly and yearly steps are
/// calendar-aware: a day-of-month that does not exist in the target month
/// is clamped to that month's last day (Jan 31 -> Feb 28/29). The result is
/// normalized to midnight UTC.
pub fn next_payment_date(
    frequency: Frequency,
    is_recurring: bool,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>> {
    if !is_recurring {
        return Ok(None);
    }

    let next = match frequency {
        Frequency::Once => return Err(recurring_once_error()),
        Frequency::Weekly => now.checked_add_signed(Duration::days(7)),
        Frequency::Monthly => now.checked_add_months(Months::new(1)),
        Frequency::Yearly => now.checked_add_months(Months::new(12)),
    }
    .ok_or_else(|| Error::Unexpected(format!("Next payment date out of range for {}", now)))?;

    Ok(Some(start_of_utc_day(next)))
}
