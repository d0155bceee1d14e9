//! Query parameters to [`HealthRecord`].
//!
//! Each recognised key maps to a setter in a static table. Setters coerce the
//! first supplied value and leave the field at its default when coercion fails.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::record::query::{parse_query, QueryValues};
use crate::record::schema::HealthRecord;

type Setter = fn(&mut HealthRecord, &str);

static SETTERS: LazyLock<HashMap<&'static str, Setter>> = LazyLock::new(|| {
    let table: [(&'static str, Setter); 20] = [
        ("uid", |r, v| r.uid = v.to_string()),
        ("age", |r, v| set_int(&mut r.age, v)),
        ("gender", |r, v| set_int(&mut r.gender, v)),
        ("rdw", |r, v| set_float(&mut r.rdw, v)),
        ("wbc", |r, v| set_float(&mut r.wbc, v)),
        ("rbc", |r, v| set_float(&mut r.rbc, v)),
        ("hgb", |r, v| set_float(&mut r.hgb, v)),
        ("hct", |r, v| set_float(&mut r.hct, v)),
        ("mcv", |r, v| set_float(&mut r.mcv, v)),
        ("mch", |r, v| set_float(&mut r.mch, v)),
        ("mchc", |r, v| set_float(&mut r.mchc, v)),
        ("plt", |r, v| set_float(&mut r.plt, v)),
        ("neu", |r, v| set_float(&mut r.neu, v)),
        ("eos", |r, v| set_float(&mut r.eos, v)),
        ("bas", |r, v| set_float(&mut r.bas, v)),
        ("lym", |r, v| set_float(&mut r.lym, v)),
        ("mon", |r, v| set_float(&mut r.mon, v)),
        ("soe", |r, v| set_float(&mut r.soe, v)),
        ("chol", |r, v| set_float(&mut r.chol, v)),
        ("glu", |r, v| set_float(&mut r.glu, v)),
    ];
    HashMap::from(table)
});

fn set_int(slot: &mut i64, raw: &str) {
    if let Ok(value) = raw.parse() {
        *slot = value;
    }
}

// NaN and infinities cannot be written as JSON numbers.
fn set_float(slot: &mut f64, raw: &str) {
    if let Ok(value) = raw.parse::<f64>() {
        if value.is_finite() {
            *slot = value;
        }
    }
}

/// Build a record from decoded query parameters.
///
/// Unknown keys and keys without values are ignored. `NaN` and infinite
/// values are treated as unparsable and leave the field at 0, instead of
/// failing serialization later with a 500.
pub fn decode(query: &QueryValues) -> HealthRecord {
    let mut record = HealthRecord::default();
    for (key, values) in query {
        let Some(setter) = SETTERS.get(key.as_str()) else {
            continue;
        };
        if let Some(first) = values.first() {
            setter(&mut record, first);
        }
    }
    record
}

/// Build a record straight from a raw query string.
pub fn decode_query_string(raw: &str) -> HealthRecord {
    decode(&parse_query(raw))
}
