use crate::helpers::{subscription_body, TestApp};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn sum_counts_every_overlapping_month() {
    // given
    let app = TestApp::spawn().await;
    app.create_subscription(&subscription_body("service", 400, "07-2024", Some("09-2024")))
        .await;

    // then
    let test_cases = vec![
        ("07-2024", "09-2024", 1200, "identical window"),
        ("09-2024", "09-2024", 400, "last month only"),
        ("01-2024", "03-2024", 0, "window before the subscription"),
        ("08-2024", "12-2024", 800, "window overhanging the end"),
        ("01-2024", "07-2024", 400, "window overhanging the start"),
    ];

    for (start, end, expected, description) in test_cases {
        // when
        let sum = app.sum(&[("start_date", start), ("end_date", end)]).await;

        // then
        assert_eq!(sum, expected, "Unexpected sum for {description}");
    }
}

#[tokio::test]
async fn open_ended_subscription_is_billed_up_to_the_window_end() {
    // given
    let app = TestApp::spawn().await;
    app.create_subscription(&subscription_body("service", 250, "10-2024", None))
        .await;

    // when
    let sum = app
        .sum(&[("start_date", "10-2024"), ("end_date", "12-2024")])
        .await;

    // then
    assert_eq!(sum, 250 * 3);
}

#[tokio::test]
async fn sum_is_narrowed_by_user_and_service() {
    // given
    let app = TestApp::spawn().await;
    let user_id = Uuid::new_v4().to_string();
    let mine = json!({
        "service_name": "music",
        "price": 100,
        "user_id": user_id,
        "start_date": "01-2024",
        "end_date": null,
    });
    let mine_other_service = json!({
        "service_name": "video",
        "price": 10,
        "user_id": user_id,
        "start_date": "01-2024",
    });
    app.create_subscription(&mine).await;
    app.create_subscription(&mine_other_service).await;
    app.create_subscription(&subscription_body("music", 1000, "01-2024", Some("01-2024")))
        .await;
    let window = [("start_date", "01-2024"), ("end_date", "02-2024")];

    // when
    let everyone = app.sum(&window).await;
    let by_user = app.sum(&[window[0], window[1], ("user_id", user_id.as_str())]).await;
    let by_service = app
        .sum(&[window[0], window[1], ("service_name", "music")])
        .await;
    let by_both = app
        .sum(&[
            window[0],
            window[1],
            ("user_id", user_id.as_str()),
            ("service_name", "music"),
        ])
        .await;
    let unknown_service = app
        .sum(&[window[0], window[1], ("service_name", "books")])
        .await;

    // then
    assert_eq!(everyone, 200 + 20 + 1000);
    assert_eq!(by_user, 220);
    assert_eq!(by_service, 1200);
    assert_eq!(by_both, 200);
    assert_eq!(unknown_service, 0);
}

#[tokio::test]
async fn empty_constraints_are_ignored() {
    // given
    let app = TestApp::spawn().await;
    app.create_subscription(&subscription_body("service", 5, "01-2024", None))
        .await;

    // when
    let sum = app
        .sum(&[
            ("start_date", "01-2024"),
            ("end_date", "01-2024"),
            ("user_id", ""),
            ("service_name", ""),
        ])
        .await;

    // then
    assert_eq!(sum, 5);
}

#[tokio::test]
async fn sum_of_an_empty_store_is_zero() {
    // given
    let app = TestApp::spawn().await;

    // when
    let sum = app
        .sum(&[("start_date", "01-2024"), ("end_date", "12-2024")])
        .await;

    // then
    assert_eq!(sum, 0);
}

#[tokio::test]
async fn sum_returns_a_400_for_invalid_filters() {
    // given
    let app = TestApp::spawn().await;
    let test_cases: Vec<(Vec<(&str, &str)>, &str)> = vec![
        (vec![("start_date", "07-2024")], "missing end date"),
        (vec![("end_date", "07-2024")], "missing start date"),
        (
            vec![("start_date", "07-2024"), ("end_date", "")],
            "empty end date",
        ),
        (
            vec![("start_date", "13-2024"), ("end_date", "12-2024")],
            "invalid start month",
        ),
        (
            vec![("start_date", "07-2024"), ("end_date", "07/2024")],
            "wrong delimiter",
        ),
        (
            vec![
                ("start_date", "07-2024"),
                ("end_date", "09-2024"),
                ("user_id", "123"),
            ],
            "non-uuid user id",
        ),
        (vec![], "no parameters at all"),
    ];

    for (query, description) in test_cases {
        // when
        let response = app.get_sum(&query).await;

        // then
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 BAD_REQUEST for {}",
            description
        );
    }
}
