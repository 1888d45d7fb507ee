use dto::checkup_status::CheckupStatus;
use dto::membership_status::MembershipStatus;
use serde_json::Value;
use std::collections::HashMap;

pub fn membership_label(status: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let status: MembershipStatus = serde::Deserialize::deserialize(status)?;
    Ok(Value::String(status.label().to_owned()))
}

pub fn membership_badge(status: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let status: MembershipStatus = serde::Deserialize::deserialize(status)?;
    Ok(Value::String(status.badge_class().to_owned()))
}

pub fn checkup_label(status: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let status: CheckupStatus = serde::Deserialize::deserialize(status)?;
    Ok(Value::String(status.label().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_render_membership_badge_and_label() {
        let status = json!("expiring_soon");

        let label = membership_label(&status, &HashMap::new()).unwrap();
        let badge = membership_badge(&status, &HashMap::new()).unwrap();

        assert_eq!(json!("Expiring Soon"), label);
        assert_eq!(json!("badge-expiring-soon"), badge);
    }

    #[test]
    fn should_render_checkup_label() {
        let status = json!("due_tomorrow");

        let label = checkup_label(&status, &HashMap::new()).unwrap();

        assert_eq!(json!("Due tomorrow"), label);
    }

    #[test]
    fn should_fail_on_unknown_status() {
        let status = json!("dormant");

        assert!(membership_label(&status, &HashMap::new()).is_err());
    }
}
