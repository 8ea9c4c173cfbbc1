//! Form Validation
//!
//! Client-side checks run before any request is issued.

use crate::api::{GrantApplication, PurchaseArgs};
use crate::error::FormError;

/// Word typed into the leadership transfer box to unlock the confirm button
pub const TRANSFER_CONFIRMATION: &str = "TRANSFER";

/// Labels of blank (empty or whitespace-only) fields, in declaration order
pub fn missing_fields<S: AsRef<str>>(fields: &[(&str, S)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, value)| value.as_ref().trim().is_empty())
        .map(|(label, _)| label.to_string())
        .collect()
}

pub fn require<S: AsRef<str>>(fields: &[(&str, S)]) -> Result<(), FormError> {
    let missing = missing_fields(fields);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormError::Missing(missing))
    }
}

pub fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("http://") || value.starts_with("https://")
}

pub fn require_http_url(label: &str, value: &str) -> Result<(), FormError> {
    if is_http_url(value) {
        Ok(())
    } else {
        Err(FormError::InvalidUrl(label.to_string()))
    }
}

/// Positive, finite dollar amount
pub fn parse_amount(raw: &str) -> Result<f64, FormError> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(FormError::InvalidAmount),
    }
}

pub fn check_balance(amount: f64, balance: f64) -> Result<(), FormError> {
    if amount > balance {
        Err(FormError::ExceedsBalance { balance })
    } else {
        Ok(())
    }
}

/// Raw purchase form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseForm {
    pub leader_first_name: String,
    pub leader_last_name: String,
    pub leader_email: String,
    pub purchase_type: String,
    pub description: String,
    pub reason: String,
    pub fulfillment_method: String,
    pub amount: String,
}

/// Missing fields first, then amount shape, then the balance cap
pub fn validate_purchase(form: &PurchaseForm, balance: f64) -> Result<f64, FormError> {
    require(&[
        ("Purchase type", &form.purchase_type),
        ("Description", &form.description),
        ("Reason", &form.reason),
        ("Fulfillment method", &form.fulfillment_method),
        ("Amount", &form.amount),
    ])?;
    let amount = parse_amount(&form.amount)?;
    check_balance(amount, balance)?;
    Ok(amount)
}

impl PurchaseForm {
    /// Request body once validated
    pub fn into_args(self, amount: f64, club_name: &str) -> PurchaseArgs {
        PurchaseArgs {
            leader_first_name: self.leader_first_name.trim().to_string(),
            leader_last_name: self.leader_last_name.trim().to_string(),
            leader_email: self.leader_email.trim().to_string(),
            purchase_type: self.purchase_type.trim().to_string(),
            description: self.description.trim().to_string(),
            reason: self.reason.trim().to_string(),
            fulfillment_method: self.fulfillment_method.trim().to_string(),
            amount,
            club_name: club_name.to_string(),
        }
    }
}

/// URL shape, in-person attestation, then the required fields
pub fn validate_grant(app: &GrantApplication) -> Result<(), FormError> {
    require_http_url("GitHub URL", &app.github_url)?;
    require_http_url("Live URL", &app.live_url)?;
    if !app.is_in_person_meeting {
        return Err(FormError::InPersonRequired);
    }
    require(&[
        ("Member selection", &app.member_id),
        ("Project name", &app.project_name),
        ("First name", &app.first_name),
        ("Last name", &app.last_name),
        ("Email address", &app.email),
        ("Birthday", &app.birthday),
        ("Project description", &app.project_description),
        ("GitHub URL", &app.github_url),
        ("Live URL", &app.live_url),
        ("What you learned", &app.learning),
        ("What we are doing well", &app.doing_well),
        ("How we can improve", &app.improve),
        ("Address line 1", &app.address_1),
        ("City", &app.city),
        ("State/Province", &app.state),
        ("ZIP/Postal code", &app.zip),
        ("Country", &app.country),
    ])
}

pub fn transfer_confirmed(input: &str) -> bool {
    input.trim().to_uppercase() == TRANSFER_CONFIRMATION
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purchase(amount: &str) -> PurchaseForm {
        PurchaseForm {
            purchase_type: "Pizza".into(),
            description: "Friday pizza".into(),
            reason: "Hack night".into(),
            fulfillment_method: "Gift card".into(),
            amount: amount.into(),
            ..Default::default()
        }
    }

    fn grant() -> GrantApplication {
        GrantApplication {
            member_id: "12".into(),
            project_name: "Game".into(),
            project_hours: "1.50".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            birthday: "2008-01-01".into(),
            project_description: "A game".into(),
            github_url: "https://github.com/ada/game".into(),
            live_url: "https://ada.dev/game".into(),
            learning: "Rust".into(),
            doing_well: "Pizza".into(),
            improve: "More pizza".into(),
            address_1: "1 Main St".into(),
            address_2: String::new(),
            city: "Town".into(),
            state: "VT".into(),
            zip: "05401".into(),
            country: "US".into(),
            screenshot_url: String::new(),
            is_in_person_meeting: true,
        }
    }

    #[test]
    fn test_missing_fields_in_order() {
        let missing = missing_fields(&[("Title", "  "), ("Date", "2024-05-01"), ("Start time", "")]);
        assert_eq!(missing, vec!["Title", "Start time"]);
        assert!(require(&[("Title", "Demo"), ("Date", "2024-05-01")]).is_ok());
    }

    #[test]
    fn test_require_rejects_blank() {
        let err = require(&[("Content", "\n\t ")]).unwrap_err();
        assert_eq!(err, FormError::Missing(vec!["Content".into()]));
    }

    #[test]
    fn test_purchase_exceeding_balance_rejected() {
        let err = validate_purchase(&purchase("50"), 30.0).unwrap_err();
        assert_eq!(err, FormError::ExceedsBalance { balance: 30.0 });
        assert_eq!(err.to_string(), "Amount cannot exceed club balance of $30.00");
    }

    #[test]
    fn test_purchase_order_of_checks() {
        let mut form = purchase("abc");
        form.reason = String::new();
        assert_eq!(
            validate_purchase(&form, 30.0).unwrap_err(),
            FormError::Missing(vec!["Reason".into()])
        );
        assert_eq!(validate_purchase(&purchase("abc"), 30.0).unwrap_err(), FormError::InvalidAmount);
        assert_eq!(validate_purchase(&purchase("0"), 30.0).unwrap_err(), FormError::InvalidAmount);
        assert_eq!(validate_purchase(&purchase("-5"), 30.0).unwrap_err(), FormError::InvalidAmount);
        assert_eq!(validate_purchase(&purchase("30"), 30.0), Ok(30.0));
    }

    #[test]
    fn test_purchase_args_body() {
        let mut form = purchase("12.5");
        form.leader_email = " lead@example.com ".into();
        let args = form.into_args(12.5, "Robotics");
        assert_eq!(args.leader_email, "lead@example.com");
        assert_eq!(args.amount, 12.5);
        assert_eq!(args.club_name, "Robotics");
        assert_eq!(args.purchase_type, "Pizza");
    }

    #[test]
    fn test_grant_valid() {
        assert!(validate_grant(&grant()).is_ok());
    }

    #[test]
    fn test_grant_url_checked_before_fields() {
        let mut app = grant();
        app.github_url = "github.com/ada".into();
        app.city = String::new();
        assert_eq!(validate_grant(&app).unwrap_err(), FormError::InvalidUrl("GitHub URL".into()));

        let mut app = grant();
        app.live_url = "ftp://ada.dev".into();
        assert_eq!(
            validate_grant(&app).unwrap_err().to_string(),
            "Live URL must start with http:// or https://"
        );
    }

    #[test]
    fn test_grant_requires_in_person() {
        let mut app = grant();
        app.is_in_person_meeting = false;
        assert_eq!(validate_grant(&app).unwrap_err(), FormError::InPersonRequired);
    }

    #[test]
    fn test_grant_missing_fields_listed() {
        let mut app = grant();
        app.member_id = String::new();
        app.country = " ".into();
        assert_eq!(
            validate_grant(&app).unwrap_err().to_string(),
            "Please fill in: Member selection, Country"
        );
    }

    #[test]
    fn test_transfer_confirmation() {
        assert!(transfer_confirmed(" transfer "));
        assert!(transfer_confirmed("TRANSFER"));
        assert!(!transfer_confirmed("TRANSFE"));
        assert!(!transfer_confirmed(""));
    }
}
