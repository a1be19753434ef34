use crate::{NewTask, Priority};

use chrono::NaiveDate;
use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_padded_fields_when_validated_then_trimmed_and_blanks_dropped() {
    let mut input = NewTask::new(Uuid::new_v4(), "  Write docs ", 0);
    input.description = Some("   ".to_string());
    input.assignee = Some(" sam ".to_string());

    let task = input.validated().unwrap();

    assert_that!(task.title, eq("Write docs"));
    assert_that!(task.description, none());
    assert_that!(task.assignee, some(eq("sam")));
    assert_that!(task.priority, eq(Priority::Medium));
}

#[test]
fn given_blank_title_when_validated_then_rejected() {
    let input = NewTask::new(Uuid::new_v4(), "  ", 0);

    assert_that!(input.validated(), err(anything()));
}

#[test]
fn given_negative_sort_order_when_validated_then_rejected() {
    let input = NewTask::new(Uuid::new_v4(), "Task", -1);

    assert_that!(input.validated(), err(anything()));
}

#[test]
fn test_parse_due_date() {
    assert_eq!(
        NewTask::parse_due_date("2026-03-01").unwrap(),
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    );
    assert_that!(NewTask::parse_due_date("03/01/2026"), err(anything()));
}
