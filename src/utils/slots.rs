use chrono::{Datelike, NaiveDate};
use sea_orm::{ColumnTrait, ConnectionTrait, DbBackend, EntityTrait, QueryFilter, Statement};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::booking::{self, BookingStatus, SlotRange};
use crate::error::{AppError, AppResult};

/// One conflict found during slot validation: the slot already reserved by
/// another booking and the proposed slot that collides with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlappingSlot {
    pub booking_id: Uuid,
    pub booked: SlotRange,
    pub proposed: SlotRange,
}

/// Half-open interval overlap: `[a.start, a.end)` intersects `[b.start, b.end)`.
/// Touching endpoints (one slot ending exactly when the next starts) do not
/// conflict.
pub fn slots_overlap(a: &SlotRange, b: &SlotRange) -> bool {
    a.start < b.end && a.end > b.start
}

/// Collect every conflicting pair between the proposed slots and the slots
/// already held by other bookings.
pub fn find_overlaps(
    proposed: &[SlotRange],
    existing: &[(Uuid, SlotRange)],
) -> Vec<OverlappingSlot> {
    let mut overlaps = Vec::new();
    for p in proposed {
        for (booking_id, booked) in existing {
            if slots_overlap(p, booked) {
                overlaps.push(OverlappingSlot {
                    booking_id: *booking_id,
                    booked: *booked,
                    proposed: *p,
                });
            }
        }
    }
    overlaps
}

/// Advisory lock key for one expert's schedule on one date. Stable across
/// processes so every competing transaction derives the same key.
fn schedule_lock_key(expert_id: Uuid, date: NaiveDate) -> i64 {
    let raw = expert_id.as_u128();
    let mixed = (raw >> 64) as u64
        ^ (raw as u64).rotate_left(31)
        ^ (date.num_days_from_ce() as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    mixed as i64
}

/// Validate the proposed slots against every other booking holding slots for
/// the same expert on the same date. `exclude_booking_id` keeps an update from
/// conflicting with the booking's own current slots.
///
/// Takes `pg_advisory_xact_lock` on the (expert, date) pair before reading,
/// so two concurrent validate-then-insert transactions serialize even when
/// no competing row exists yet (row locks cannot cover not-yet-inserted
/// bookings). The lock is released at commit/rollback of the caller's
/// transaction; the function performs no writes itself.
pub async fn validate_booking_slots<C: ConnectionTrait>(
    conn: &C,
    exclude_booking_id: Option<Uuid>,
    proposed: &[SlotRange],
    date: NaiveDate,
    expert_id: Option<Uuid>,
) -> AppResult<()> {
    // Without an assigned expert there is no resource to contend for.
    let Some(expert_id) = expert_id else {
        return Ok(());
    };
    if proposed.is_empty() {
        return Ok(());
    }

    conn.execute(Statement::from_sql_and_values(
        DbBackend::Postgres,
        "SELECT pg_advisory_xact_lock($1)",
        [schedule_lock_key(expert_id, date).into()],
    ))
    .await?;

    let mut query = booking::Entity::find()
        .filter(booking::Column::ExpertId.eq(expert_id))
        .filter(booking::Column::JobStartDate.eq(date))
        .filter(booking::Column::Status.is_not_in([
            BookingStatus::RejectedByClient,
            BookingStatus::RejectedByGarageOwner,
        ]));

    if let Some(id) = exclude_booking_id {
        query = query.filter(booking::Column::Id.ne(id));
    }

    let competing = query.all(conn).await?;

    let existing: Vec<(Uuid, SlotRange)> = competing
        .iter()
        .flat_map(|b| b.booked_slots.0.iter().map(|s| (b.id, *s)))
        .collect();

    let overlapping_slots = find_overlaps(proposed, &existing);
    if overlapping_slots.is_empty() {
        Ok(())
    } else {
        Err(AppError::SlotConflict { overlapping_slots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn slot(start: (u32, u32), end: (u32, u32)) -> SlotRange {
        SlotRange {
            start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        }
    }

    #[test]
    fn disjoint_slots_do_not_overlap() {
        assert!(!slots_overlap(&slot((8, 0), (9, 0)), &slot((10, 0), (11, 0))));
        assert!(!slots_overlap(&slot((10, 0), (11, 0)), &slot((8, 0), (9, 0))));
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        // Half-open semantics: [8,9) and [9,10) share only the boundary.
        assert!(!slots_overlap(&slot((8, 0), (9, 0)), &slot((9, 0), (10, 0))));
    }

    #[test]
    fn partial_and_contained_ranges_overlap() {
        assert!(slots_overlap(&slot((8, 0), (9, 30)), &slot((9, 0), (10, 0))));
        assert!(slots_overlap(&slot((8, 0), (12, 0)), &slot((9, 0), (10, 0))));
        assert!(slots_overlap(&slot((9, 0), (10, 0)), &slot((8, 0), (12, 0))));
    }

    #[test]
    fn find_overlaps_reports_exactly_the_conflicting_subset() {
        let other = Uuid::new_v4();
        let existing = vec![
            (other, slot((8, 0), (9, 0))),
            (other, slot((13, 0), (14, 0))),
        ];
        let proposed = vec![slot((8, 30), (9, 30)), slot((10, 0), (11, 0))];

        let overlaps = find_overlaps(&proposed, &existing);
        assert_eq!(overlaps.len(), 1);
        assert_eq!(overlaps[0].booking_id, other);
        assert_eq!(overlaps[0].booked, slot((8, 0), (9, 0)));
        assert_eq!(overlaps[0].proposed, slot((8, 30), (9, 30)));
    }

    #[test]
    fn every_conflicting_pair_is_collected() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let existing = vec![(a, slot((8, 0), (10, 0))), (b, slot((9, 0), (11, 0)))];
        let proposed = vec![slot((9, 30), (10, 30))];

        let overlaps = find_overlaps(&proposed, &existing);
        assert_eq!(overlaps.len(), 2);
    }

    #[test]
    fn no_existing_slots_means_no_conflict() {
        let proposed = vec![slot((8, 0), (9, 0))];
        assert!(find_overlaps(&proposed, &[]).is_empty());
    }

    #[test]
    fn schedule_lock_key_is_stable_per_expert_and_date() {
        let expert = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2025, 8, 11).unwrap();

        // Concurrent transactions must derive the identical key.
        assert_eq!(
            schedule_lock_key(expert, date),
            schedule_lock_key(expert, date)
        );
        assert_ne!(
            schedule_lock_key(expert, date),
            schedule_lock_key(Uuid::new_v4(), date)
        );
        assert_ne!(
            schedule_lock_key(expert, date),
            schedule_lock_key(expert, date.succ_opt().unwrap())
        );
    }
}
