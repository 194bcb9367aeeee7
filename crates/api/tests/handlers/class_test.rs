use chrono::{TimeZone, Utc};
use fitbook_api::middleware::error_handling::AppError;
use fitbook_core::{errors::BookingError, models::fitness_class::ClassResponse, timezone};
use pretty_assertions::assert_eq;

use crate::test_utils::{sample_class, TestContext};

// Test wrapper that exercises the listing handler's decision logic against
// the mocked repository: timezone validation before any storage access,
// then per-row conversion.
async fn test_list_classes_wrapper(
    ctx: &TestContext,
    tz: Option<&str>,
    default_tz: &str,
) -> Result<Vec<ClassResponse>, AppError> {
    let tz_name = tz.unwrap_or(default_tz);
    timezone::validate(tz_name)?;

    let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let classes = ctx.class_repo.get_upcoming_classes(now).await?;

    let mut response = Vec::with_capacity(classes.len());
    for class in classes {
        response.push(ClassResponse {
            id: class.id,
            name: class.name,
            instructor: class.instructor,
            start_time: timezone::to_local(class.start_time, tz_name)?,
            available_slots: class.available_slots,
        });
    }

    Ok(response)
}

fn seeded_context() -> TestContext {
    let mut ctx = TestContext::new();

    let classes = vec![
        sample_class(
            1,
            "Yoga",
            "Alice",
            Utc.with_ymd_and_hms(2025, 6, 15, 8, 0, 0).unwrap(),
            5,
        ),
        sample_class(
            2,
            "Zumba",
            "Bob",
            Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap(),
            8,
        ),
        sample_class(
            3,
            "HIIT",
            "Charlie",
            Utc.with_ymd_and_hms(2025, 6, 16, 7, 0, 0).unwrap(),
            6,
        ),
    ];

    ctx.class_repo
        .expect_get_upcoming_classes()
        .returning(move |_| Ok(classes.clone()));

    ctx
}

#[tokio::test]
async fn test_list_classes_in_utc() {
    let ctx = seeded_context();

    let response = test_list_classes_wrapper(&ctx, Some("UTC"), "Asia/Kolkata")
        .await
        .unwrap();

    assert_eq!(response.len(), 3);
    assert_eq!(response[0].name, "Yoga");
    assert_eq!(response[1].name, "Zumba");
    assert_eq!(response[2].name, "HIIT");

    assert_eq!(response[0].start_time, "2025-06-15 08:00:00");
    assert_eq!(response[1].start_time, "2025-06-15 10:00:00");
    assert_eq!(response[2].start_time, "2025-06-16 07:00:00");
}

#[tokio::test]
async fn test_list_classes_defaults_to_service_timezone() {
    let ctx = seeded_context();

    let response = test_list_classes_wrapper(&ctx, None, "Asia/Kolkata")
        .await
        .unwrap();

    // 08:00 UTC is 13:30 in Kolkata (UTC+5:30).
    assert_eq!(response[0].start_time, "2025-06-15 13:30:00");
    assert_eq!(response[0].available_slots, 5);
}

#[tokio::test]
async fn test_list_classes_rejects_unknown_timezone() {
    // No expectation on the repo: an invalid timezone must fail before any
    // storage access, so a repository call would panic the mock.
    let ctx = TestContext::new();

    let err = test_list_classes_wrapper(&ctx, Some("Mars/Olympus"), "Asia/Kolkata")
        .await
        .unwrap_err();

    match err.0 {
        BookingError::InvalidTimezone(name) => assert_eq!(name, "Mars/Olympus"),
        other => panic!("expected InvalidTimezone, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_classes_is_idempotent() {
    let ctx = seeded_context();

    let first = test_list_classes_wrapper(&ctx, Some("UTC"), "Asia/Kolkata")
        .await
        .unwrap();
    let second = test_list_classes_wrapper(&ctx, Some("UTC"), "Asia/Kolkata")
        .await
        .unwrap();

    let first_ids: Vec<i64> = first.iter().map(|c| c.id).collect();
    let second_ids: Vec<i64> = second.iter().map(|c| c.id).collect();
    assert_eq!(first_ids, second_ids);
}
