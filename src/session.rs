use crate::errors::AppError;
use crate::models::{FoodRecord, Nutrients, SessionData};

pub fn select_food(
    session: &mut SessionData,
    name: &str,
    per_unit: Nutrients,
) -> Result<Nutrients, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("food name must not be empty"));
    }
    if !per_unit.is_valid() {
        return Err(AppError::bad_request(
            "nutrient values must be finite and non-negative",
        ));
    }

    // The per-unit values are snapshotted on first selection; later calls for
    // the same name accumulate the snapshot, not whatever the caller sent.
    let added = {
        let record = session
            .foods
            .entry(name.to_string())
            .or_insert(FoodRecord { count: 0, per_unit });
        record.count = record.count.saturating_add(1);
        record.per_unit.clone()
    };
    session.totals.add(&added);

    Ok(added)
}

pub fn remove_food(session: &mut SessionData, name: &str) -> Result<Nutrients, AppError> {
    let name = name.trim();
    let record = session
        .foods
        .remove(name)
        .ok_or_else(|| AppError::not_found(format!("no selection named '{name}'")))?;

    let contribution = record.per_unit.scale(record.count as f64);
    session.totals.subtract(&contribution);

    Ok(contribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn apple() -> Nutrients {
        Nutrients {
            calories: 95.0,
            fat: 0.3,
            carbs: 25.0,
            sugar: 19.0,
            protein: 0.5,
        }
    }

    fn summed(session: &SessionData) -> Nutrients {
        let mut total = Nutrients::default();
        for record in session.foods.values() {
            total.add(&record.per_unit.scale(record.count as f64));
        }
        total
    }

    #[test]
    fn select_food_twice_accumulates_count_and_totals() {
        let mut session = SessionData::default();
        select_food(&mut session, "Pomme", apple()).unwrap();
        select_food(&mut session, "Pomme", apple()).unwrap();

        let record = session.foods.get("Pomme").expect("missing record");
        assert_eq!(record.count, 2);
        assert_eq!(record.per_unit, apple());
        assert_eq!(
            session.totals,
            Nutrients {
                calories: 190.0,
                fat: 0.6,
                carbs: 50.0,
                sugar: 38.0,
                protein: 1.0,
            }
        );
    }

    #[test]
    fn totals_match_mapping_after_every_call() {
        let mut session = SessionData::default();
        // Dyadic fractions, so the interleaved running sum and the recomputed
        // per-food sum agree bit for bit.
        let oeuf = Nutrients {
            calories: 78.0,
            fat: 5.25,
            carbs: 0.5,
            sugar: 0.5,
            protein: 6.25,
        };
        let riz = Nutrients {
            calories: 206.0,
            fat: 0.5,
            carbs: 45.0,
            sugar: 0.125,
            protein: 4.25,
        };

        for name in ["Oeuf", "Riz", "Oeuf", "Riz", "Riz"] {
            let unit = if name == "Oeuf" { oeuf.clone() } else { riz.clone() };
            select_food(&mut session, name, unit).unwrap();
            assert_eq!(session.totals, summed(&session));
        }

        remove_food(&mut session, "Riz").unwrap();
        assert_eq!(session.totals, summed(&session));
    }

    #[test]
    fn remove_food_is_the_inverse_of_selection() {
        let mut session = SessionData::default();
        select_food(&mut session, "Pomme", apple()).unwrap();
        select_food(&mut session, "Pomme", apple()).unwrap();

        remove_food(&mut session, "Pomme").unwrap();

        assert!(session.foods.is_empty());
        assert_eq!(session.totals, Nutrients::default());
    }

    #[test]
    fn remove_food_unknown_name_signals_not_found() {
        let mut session = SessionData::default();
        let err = remove_food(&mut session, "Banane").unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(session.foods.is_empty());
        assert_eq!(session.totals, Nutrients::default());
    }

    #[test]
    fn later_values_do_not_replace_the_snapshot() {
        let mut session = SessionData::default();
        select_food(&mut session, "Pomme", apple()).unwrap();

        let drifted = Nutrients {
            calories: 400.0,
            ..apple()
        };
        select_food(&mut session, "Pomme", drifted).unwrap();

        let record = session.foods.get("Pomme").unwrap();
        assert_eq!(record.per_unit, apple());
        assert_eq!(session.totals.calories, 190.0);
        assert_eq!(session.totals, summed(&session));
    }

    #[test]
    fn select_food_rejects_invalid_input() {
        let mut session = SessionData::default();

        let err = select_food(&mut session, "  ", apple()).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let negative = Nutrients {
            fat: -1.0,
            ..apple()
        };
        let err = select_food(&mut session, "Pomme", negative).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let non_finite = Nutrients {
            calories: f64::NAN,
            ..apple()
        };
        let err = select_food(&mut session, "Pomme", non_finite).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        assert!(session.foods.is_empty());
        assert_eq!(session.totals, Nutrients::default());
    }

    #[test]
    fn select_food_trims_the_name() {
        let mut session = SessionData::default();
        select_food(&mut session, " Pomme ", apple()).unwrap();
        select_food(&mut session, "Pomme", apple()).unwrap();

        assert_eq!(session.foods.len(), 1);
        assert_eq!(session.foods.get("Pomme").unwrap().count, 2);
    }
}
