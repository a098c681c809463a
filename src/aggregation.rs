//! Overlap arithmetic behind `GET /subs/sum`.
//!
//! A subscription bills its monthly price for every month it shares with the
//! query interval. Both intervals are inclusive and compared as absolute
//! month indices. An open-ended subscription is bounded by the filter's end.

use crate::domain::{Subscription, SumFilter};

/// Number of months `subscription` is active within `filter`'s interval,
/// ignoring the user and service constraints.
pub fn overlapping_months(subscription: &Subscription, filter: &SumFilter) -> i64 {
    let filter_end = filter.end.month_index();
    let lower = filter.start.month_index().max(subscription.start.month_index());
    let upper = subscription
        .end
        .map_or(filter_end, |end| end.month_index().min(filter_end));

    (upper - lower + 1).max(0)
}

/// Amount billed by one subscription, zero when it does not match the filter.
pub fn contribution(subscription: &Subscription, filter: &SumFilter) -> i64 {
    if !filter.matches(subscription) {
        return 0;
    }

    i64::from(subscription.price.value()) * overlapping_months(subscription, filter)
}

/// Sum of every contribution, `None` when it does not fit in an `i64`.
pub fn total<'a, I>(subscriptions: I, filter: &SumFilter) -> Option<i64>
where
    I: IntoIterator<Item = &'a Subscription>,
{
    subscriptions
        .into_iter()
        .try_fold(0i64, |sum, subscription| {
            sum.checked_add(contribution(subscription, filter))
        })
}
