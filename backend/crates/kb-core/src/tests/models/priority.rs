use crate::Priority;

use std::str::FromStr;

#[test]
fn test_priority_round_trips_through_str() {
    for priority in Priority::ALL {
        assert_eq!(Priority::from_str(priority.as_str()).unwrap(), priority);
    }
}

#[test]
fn test_priority_rejects_unknown_value() {
    assert!(Priority::from_str("urgent").is_err());
    assert!(Priority::from_str("High").is_err());
}

#[test]
fn test_priority_defaults_to_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn test_priority_display_matches_as_str() {
    assert_eq!(Priority::High.to_string(), "high");
    assert_eq!(Priority::Low.to_string(), Priority::Low.as_str());
}
