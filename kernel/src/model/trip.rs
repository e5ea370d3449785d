use crate::model::id::UserId;
use serde::{Deserialize, Serialize};

/// One trip/parking reservation as persisted in the document store.
///
/// The serde renames pin the wire field names the production database
/// already holds; the Rust side keeps English names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    #[serde(rename = "uid")]
    pub owner_id: UserId,
    #[serde(rename = "name")]
    pub owner_name: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "vehiculo")]
    pub vehicle: String,
    #[serde(rename = "patente")]
    pub plate: String,
    #[serde(rename = "espacio")]
    pub slot: u32,
    pub price: f64,
    pub destination: String,
    pub image: Option<String>,
}

impl TripRecord {
    /// Document path for this record: `trips/{uid}-{epochMillis}`.
    pub fn document_path(&self, epoch_millis: i64) -> String {
        format!("trips/{}-{}", self.owner_id, epoch_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> TripRecord {
        TripRecord {
            owner_id: "u1".into(),
            owner_name: "Ana".to_string(),
            date: "2026-08-29".to_string(),
            time: "10:15:00".to_string(),
            vehicle: "Toyota Yaris".to_string(),
            plate: "AB1234".to_string(),
            slot: 2,
            price: 1000.0,
            destination: "-70.64,-33.45".to_string(),
            image: None,
        }
    }

    #[test]
    fn document_path_joins_uid_and_epoch() {
        assert_eq!(record().document_path(1764396915000), "trips/u1-1764396915000");
    }

    #[test]
    fn serializes_with_the_production_field_names() {
        let doc = serde_json::to_value(record()).unwrap();
        assert_eq!(
            doc,
            json!({
                "uid": "u1",
                "name": "Ana",
                "date": "2026-08-29",
                "time": "10:15:00",
                "vehiculo": "Toyota Yaris",
                "patente": "AB1234",
                "espacio": 2,
                "price": 1000.0,
                "destination": "-70.64,-33.45",
                "image": null,
            })
        );
    }
}
