use garde::Validate;
use kernel::model::id::UserId;
use kernel::model::trip::TripRecord;

/// Field state of one reservation form, with the same constraints the
/// product's form controls enforce. `uid`/`name`/`date`/`time` are filled
/// automatically and never validated; the rest is user input.
#[derive(Debug, Clone, Default, Validate)]
pub struct TripForm {
    #[garde(skip)]
    pub uid: UserId,
    #[garde(skip)]
    pub name: String,
    #[garde(skip)]
    pub date: String,
    #[garde(skip)]
    pub time: String,
    #[garde(length(min = 3))]
    pub vehicle: String,
    #[garde(length(min = 6))]
    pub plate: String,
    #[garde(required, inner(range(min = 1)))]
    pub slot: Option<u32>,
    #[garde(required, inner(range(min = 0.0)))]
    pub price: Option<f64>,
    #[garde(required, inner(length(min = 1)))]
    pub destination: Option<String>,
    #[garde(skip)]
    pub image: Option<String>,
}

impl TripForm {
    pub fn is_valid(&self) -> bool {
        self.validate(&()).is_ok()
    }

    /// Converts a valid form into the document record. `None` when any
    /// required-field constraint is violated.
    pub fn build_record(&self) -> Option<TripRecord> {
        if !self.is_valid() {
            return None;
        }
        Some(TripRecord {
            owner_id: self.uid.clone(),
            owner_name: self.name.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            vehicle: self.vehicle.clone(),
            plate: self.plate.clone(),
            slot: self.slot?,
            price: self.price?,
            destination: self.destination.clone()?,
            image: self.image.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> TripForm {
        TripForm {
            uid: "u1".into(),
            name: "Ana".to_string(),
            date: "2026-08-29".to_string(),
            time: "10:15:00".to_string(),
            vehicle: "Toyota Yaris".to_string(),
            plate: "AB1234".to_string(),
            slot: Some(2),
            price: Some(1000.0),
            destination: Some("-70.64,-33.45".to_string()),
            image: None,
        }
    }

    #[test]
    fn a_fully_filled_form_is_valid() {
        assert!(filled_form().is_valid());
    }

    #[test]
    fn missing_identity_fields_do_not_block_validation() {
        let form = TripForm {
            uid: UserId::default(),
            name: String::new(),
            ..filled_form()
        };
        assert!(form.is_valid());
    }

    #[test]
    fn vehicle_requires_three_characters() {
        let mut form = filled_form();
        form.vehicle = "GM".to_string();
        assert!(!form.is_valid());
        form.vehicle = String::new();
        assert!(!form.is_valid());
    }

    #[test]
    fn plate_requires_six_characters() {
        let mut form = filled_form();
        form.plate = "AB123".to_string();
        assert!(!form.is_valid());
    }

    #[test]
    fn slot_must_be_present_and_at_least_one() {
        let mut form = filled_form();
        form.slot = None;
        assert!(!form.is_valid());
        form.slot = Some(0);
        assert!(!form.is_valid());
        form.slot = Some(1);
        assert!(form.is_valid());
    }

    #[test]
    fn price_must_be_present_and_non_negative() {
        let mut form = filled_form();
        form.price = None;
        assert!(!form.is_valid());
        form.price = Some(-1.0);
        assert!(!form.is_valid());
        form.price = Some(0.0);
        assert!(form.is_valid());
    }

    #[test]
    fn destination_must_be_present_and_non_empty() {
        let mut form = filled_form();
        form.destination = None;
        assert!(!form.is_valid());
        form.destination = Some(String::new());
        assert!(!form.is_valid());
    }

    #[test]
    fn image_is_optional() {
        let mut form = filled_form();
        form.image = Some("data:image/png;base64,aGk=".to_string());
        assert!(form.is_valid());
    }

    #[test]
    fn build_record_none_for_invalid_forms() {
        let mut form = filled_form();
        form.plate = String::new();
        assert!(form.build_record().is_none());
    }

    #[test]
    fn build_record_carries_every_field() {
        let record = filled_form().build_record().unwrap();
        assert_eq!(record.owner_id, "u1".into());
        assert_eq!(record.vehicle, "Toyota Yaris");
        assert_eq!(record.plate, "AB1234");
        assert_eq!(record.slot, 2);
        assert_eq!(record.price, 1000.0);
        assert_eq!(record.destination, "-70.64,-33.45");
    }
}
