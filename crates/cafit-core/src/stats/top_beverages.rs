//! Most-consumed beverages over a period.
//!
//! Beverage identity is the (name, brand, volume) triple, so a 250ml and a
//! 500ml can of the same drink count separately. Ordering is deterministic:
//! count descending, then most recent consumption first, then name ascending.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::intake::IntakeRecord;

/// Consumption count for one beverage identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopBeverageStat {
    pub beverage_name: String,
    pub brand_name: Option<String>,
    pub volume_ml: u32,
    pub count: u64,
}

struct Tally {
    count: u64,
    last_consumed_at: DateTime<Utc>,
}

/// Rank beverage identities consumed between `start_date` and `end_date`
/// (inclusive, by UTC calendar date) and return the top `limit`.
pub fn top_beverages(
    intakes: &[IntakeRecord],
    start_date: NaiveDate,
    end_date: NaiveDate,
    limit: usize,
) -> Vec<TopBeverageStat> {
    let mut tallies: HashMap<(String, Option<String>, u32), Tally> = HashMap::new();

    for intake in intakes {
        let date = intake.consumed_at.date_naive();
        if date < start_date || date > end_date {
            continue;
        }
        let key = (
            intake.beverage_name.clone(),
            intake.brand_name.clone(),
            intake.volume_ml,
        );
        tallies
            .entry(key)
            .and_modify(|tally| {
                tally.count += 1;
                tally.last_consumed_at = tally.last_consumed_at.max(intake.consumed_at);
            })
            .or_insert(Tally {
                count: 1,
                last_consumed_at: intake.consumed_at,
            });
    }

    let mut ranked: Vec<((String, Option<String>, u32), Tally)> = tallies.into_iter().collect();
    ranked.sort_by(|(a_key, a), (b_key, b)| {
        b.count
            .cmp(&a.count)
            .then(b.last_consumed_at.cmp(&a.last_consumed_at))
            .then(a_key.0.cmp(&b_key.0))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|((beverage_name, brand_name, volume_ml), tally)| TopBeverageStat {
            beverage_name,
            brand_name,
            volume_ml,
            count: tally.count,
        })
        .collect()
}
