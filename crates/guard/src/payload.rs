//! Booking payload as submitted by the booking API.
//!
//! The payload is flat: every kind shares one JSON object and only some
//! fields are meaningful for a given `kind`. Original REST field names are
//! accepted as aliases. [`BookingPayload::to_request`] turns it into the
//! typed [`Request`] the engine understands.

use std::borrow::Cow;

use chrono::NaiveDate;
use mealbook_core::request::{
    CoffeeBreak, ExtraRoute, HomeOffice, SnackRequest, TeamSchedule, VisitorSchedule,
};
use mealbook_core::{Meal, Request, RequestKind, Shift};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{GuardError, GuardResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_date_order"))]
pub struct BookingPayload {
    #[serde(alias = "tipo")]
    pub kind: RequestKind,
    #[serde(default, alias = "turno")]
    pub shift: Option<Shift>,
    #[serde(default, alias = "feriado")]
    pub is_holiday: bool,
    #[serde(default, alias = "dataFeriado")]
    pub holiday_date: Option<NaiveDate>,
    #[serde(default, alias = "dataInicio")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, alias = "dataFim")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, alias = "refeicoes")]
    pub meals: Vec<Meal>,
    #[serde(default, alias = "data", alias = "dataCoffee")]
    pub date: Option<NaiveDate>,
}

impl BookingPayload {
    /// An empty payload of the given kind.
    pub fn new(kind: RequestKind) -> Self {
        Self {
            kind,
            shift: None,
            is_holiday: false,
            holiday_date: None,
            start_date: None,
            end_date: None,
            meals: Vec::new(),
            date: None,
        }
    }

    /// Build the typed request, rejecting payloads missing a required field.
    ///
    /// Optional dates (team range, holiday date, extra-route dates) may be
    /// absent; the engine allows what it cannot evaluate yet.
    pub fn to_request(&self) -> GuardResult<Request> {
        let request = match self.kind {
            RequestKind::TeamSchedule => Request::TeamSchedule(TeamSchedule {
                shift: self.require(self.shift, "shift")?,
                is_holiday: self.is_holiday,
                holiday_date: self.holiday_date,
                start_date: self.start_date,
                end_date: self.end_date,
            }),
            RequestKind::HomeOffice => {
                if self.meals.is_empty() {
                    return Err(self.missing("meals"));
                }
                Request::HomeOffice(HomeOffice {
                    shift: self.require(self.shift, "shift")?,
                    start_date: self.require(self.start_date, "start_date")?,
                    end_date: self.end_date,
                    meals: self.meals.iter().copied().collect(),
                })
            }
            RequestKind::SnackRequest => Request::SnackRequest(SnackRequest {
                date: self.require(self.date, "date")?,
            }),
            RequestKind::VisitorSchedule => Request::VisitorSchedule(VisitorSchedule {
                date: self.require(self.date, "date")?,
            }),
            RequestKind::CoffeeBreak => Request::CoffeeBreak(CoffeeBreak {
                date: self.require(self.date, "date")?,
            }),
            RequestKind::ExtraRoute => Request::ExtraRoute(ExtraRoute {
                start_date: self.start_date,
                end_date: self.end_date,
            }),
        };
        Ok(request)
    }

    fn require<T>(&self, value: Option<T>, field: &'static str) -> GuardResult<T> {
        value.ok_or_else(|| self.missing(field))
    }

    fn missing(&self, field: &'static str) -> GuardError {
        GuardError::MissingField {
            kind: self.kind,
            field,
        }
    }
}

fn validate_date_order(payload: &BookingPayload) -> Result<(), ValidationError> {
    match (payload.start_date, payload.end_date) {
        (Some(start), Some(end)) if end < start => {
            let mut err = ValidationError::new("date_order");
            err.message = Some(Cow::Borrowed("end_date must not be before start_date"));
            Err(err)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn portuguese_field_names_are_accepted() {
        let payload: BookingPayload = serde_json::from_value(json!({
            "tipo": "home_office",
            "turno": "B",
            "dataInicio": "2024-01-15",
            "dataFim": "2024-01-19",
            "refeicoes": ["almoco", "lanche"]
        }))
        .unwrap();
        assert_eq!(payload.start_date, Some(date(2024, 1, 15)));
        assert_eq!(payload.meals, vec![Meal::Lunch, Meal::Snack]);

        let request = payload.to_request().unwrap();
        assert_matches!(request, Request::HomeOffice(ho) => {
            assert_eq!(ho.shift, Shift::B);
            assert_eq!(ho.end_date, Some(date(2024, 1, 19)));
        });
    }

    #[test]
    fn lowercase_shift_and_meal_codes_are_accepted() {
        let payload: BookingPayload = serde_json::from_value(json!({
            "kind": "team_schedule",
            "turno": "adm",
            "feriado": false,
            "dataInicio": "2024-01-15",
            "refeicoes": ["Lanche"]
        }))
        .unwrap();
        assert_eq!(payload.shift, Some(Shift::Adm));
        assert_eq!(payload.meals, vec![Meal::Snack]);
    }

    #[test]
    fn unknown_shift_is_a_json_error() {
        let err = serde_json::from_value::<BookingPayload>(json!({
            "kind": "team_schedule",
            "turno": "C"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("Valid shifts"), "error was: {err}");
    }

    #[test]
    fn coffee_date_alias() {
        let payload: BookingPayload = serde_json::from_value(json!({
            "kind": "coffee_break",
            "dataCoffee": "2024-01-17"
        }))
        .unwrap();
        assert_eq!(
            payload.to_request().unwrap(),
            Request::CoffeeBreak(CoffeeBreak {
                date: date(2024, 1, 17)
            })
        );
    }

    #[test]
    fn missing_required_date_is_reported() {
        let err = BookingPayload::new(RequestKind::SnackRequest)
            .to_request()
            .unwrap_err();
        assert_matches!(
            err,
            GuardError::MissingField {
                kind: RequestKind::SnackRequest,
                field: "date"
            }
        );
    }

    #[test]
    fn home_office_needs_a_meal() {
        let mut payload = BookingPayload::new(RequestKind::HomeOffice);
        payload.shift = Some(Shift::A);
        payload.start_date = Some(date(2024, 1, 15));
        assert_matches!(
            payload.to_request(),
            Err(GuardError::MissingField { field: "meals", .. })
        );
    }

    #[test]
    fn team_schedule_without_dates_is_still_a_request() {
        let mut payload = BookingPayload::new(RequestKind::TeamSchedule);
        payload.shift = Some(Shift::Adm);
        assert_matches!(payload.to_request(), Ok(Request::TeamSchedule(_)));
    }

    #[test]
    fn reversed_range_fails_validation() {
        let mut payload = BookingPayload::new(RequestKind::ExtraRoute);
        payload.start_date = Some(date(2024, 1, 21));
        payload.end_date = Some(date(2024, 1, 20));
        assert!(payload.validate().is_err());

        payload.end_date = Some(date(2024, 1, 21));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn unknown_kind_is_a_json_error() {
        let result: Result<BookingPayload, _> =
            serde_json::from_value(json!({ "kind": "breakfast" }));
        assert!(result.is_err());
    }
}
