use crate::models::{DailyStat, LedgerData};

pub fn record_rollover(ledger: &mut LedgerData, date_label: String) -> DailyStat {
    let entry = DailyStat {
        date: date_label,
        calories: ledger.running_calories,
    };
    ledger.entries.push(entry.clone());
    ledger.running_calories = 0.0;
    entry
}

pub fn add_calories(ledger: &mut LedgerData, delta: f64) {
    ledger.running_calories = (ledger.running_calories + delta).max(0.0);
}
