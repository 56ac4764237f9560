use crate::errors::AppError;
use crate::models::{LedgerData, SessionData, TrackerData};
use std::collections::BTreeMap;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub const KEY_FOOD_COUNTS: &str = "foodCounts";
pub const KEY_TOTALS: &str = "totals";
pub const KEY_DAILY_STATS: &str = "dailyStats";
pub const KEY_TOTAL_CALORIES: &str = "totalCalories";

// The data file mirrors a browser localStorage area: string keys, each value
// itself a serialized JSON document.
pub type StoreMap = BTreeMap<String, String>;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/tracker.json"))
}

pub fn encode_session(map: &mut StoreMap, session: &SessionData) -> Result<(), serde_json::Error> {
    map.insert(
        KEY_FOOD_COUNTS.to_string(),
        serde_json::to_string(&session.foods)?,
    );
    map.insert(
        KEY_TOTALS.to_string(),
        serde_json::to_string(&session.totals)?,
    );
    Ok(())
}

pub fn decode_session(map: &StoreMap) -> SessionData {
    SessionData {
        foods: decode_key(map, KEY_FOOD_COUNTS),
        totals: decode_key(map, KEY_TOTALS),
    }
}

pub fn encode_ledger_state(map: &mut StoreMap, ledger: &LedgerData) -> Result<(), serde_json::Error> {
    map.insert(
        KEY_DAILY_STATS.to_string(),
        serde_json::to_string(&ledger.entries)?,
    );
    map.insert(
        KEY_TOTAL_CALORIES.to_string(),
        serde_json::to_string(&ledger.running_calories)?,
    );
    Ok(())
}

pub fn decode_ledger_state(map: &StoreMap) -> LedgerData {
    LedgerData {
        entries: decode_key(map, KEY_DAILY_STATS),
        running_calories: decode_key(map, KEY_TOTAL_CALORIES),
    }
}

// A missing key is normal (fresh install); a malformed one falls back to the
// default for that key only, so the rest of the store still loads.
fn decode_key<T>(map: &StoreMap, key: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    let Some(raw) = map.get(key) else {
        return T::default();
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("stored value for '{key}' is malformed, starting empty: {err}");
            T::default()
        }
    }
}

pub async fn load_data(path: &Path) -> TrackerData {
    let map = match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<StoreMap>(&bytes) {
            Ok(map) => map,
            Err(err) => {
                error!("failed to parse data file: {err}");
                StoreMap::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreMap::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            StoreMap::new()
        }
    };

    TrackerData {
        session: decode_session(&map),
        ledger: decode_ledger_state(&map),
    }
}

pub async fn persist_data(path: &Path, data: &TrackerData) -> Result<(), AppError> {
    let mut map = StoreMap::new();
    encode_session(&mut map, &data.session).map_err(AppError::internal)?;
    encode_ledger_state(&mut map, &data.ledger).map_err(AppError::internal)?;

    let payload = serde_json::to_vec_pretty(&map).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
