use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Nutrients {
    pub calories: f64,
    pub fat: f64,
    pub carbs: f64,
    pub sugar: f64,
    pub protein: f64,
}

impl Nutrients {
    pub fn is_valid(&self) -> bool {
        [self.calories, self.fat, self.carbs, self.sugar, self.protein]
            .iter()
            .all(|value| value.is_finite() && *value >= 0.0)
    }

    pub fn scale(&self, factor: f64) -> Nutrients {
        Nutrients {
            calories: self.calories * factor,
            fat: self.fat * factor,
            carbs: self.carbs * factor,
            sugar: self.sugar * factor,
            protein: self.protein * factor,
        }
    }

    pub fn add(&mut self, other: &Nutrients) {
        self.calories += other.calories;
        self.fat += other.fat;
        self.carbs += other.carbs;
        self.sugar += other.sugar;
        self.protein += other.protein;
    }

    // Clamped at zero per component so rounding never drives a total negative.
    pub fn subtract(&mut self, other: &Nutrients) {
        self.calories = (self.calories - other.calories).max(0.0);
        self.fat = (self.fat - other.fat).max(0.0);
        self.carbs = (self.carbs - other.carbs).max(0.0);
        self.sugar = (self.sugar - other.sugar).max(0.0);
        self.protein = (self.protein - other.protein).max(0.0);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub count: u64,
    #[serde(flatten)]
    pub per_unit: Nutrients,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionData {
    pub foods: BTreeMap<String, FoodRecord>,
    pub totals: Nutrients,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStat {
    pub date: String,
    pub calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LedgerData {
    pub entries: Vec<DailyStat>,
    pub running_calories: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TrackerData {
    pub session: SessionData,
    pub ledger: LedgerData,
}

#[derive(Debug, Deserialize)]
pub struct SelectFoodRequest {
    pub name: String,
    pub calories: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub protein: f64,
}

impl SelectFoodRequest {
    pub fn nutrients(&self) -> Nutrients {
        Nutrients {
            calories: self.calories,
            fat: self.fat,
            carbs: self.carbs,
            sugar: self.sugar,
            protein: self.protein,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveFoodRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct RolloverRequest {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FoodCountEntry {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub date: String,
    pub totals: Nutrients,
    pub foods: Vec<FoodCountEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<DailyStat>,
    pub running_calories: f64,
}

#[derive(Debug, Serialize)]
pub struct RolloverResponse {
    pub entry: DailyStat,
    pub running_calories: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
