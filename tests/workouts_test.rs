mod common;

use axum::http::StatusCode;
use gymtrack::repositories::WorkoutRepository;
use tower::ServiceExt;

#[tokio::test]
async fn test_workouts_list_shows_count_and_rows() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;
    common::create_test_workout(
        &pool,
        "Heavy chest",
        chest.id,
        common::date(2025, 8, 23),
        Some("Strength focus"),
    )
    .await;
    common::create_test_workout(
        &pool,
        "Light chest",
        chest.id,
        common::date(2025, 8, 20),
        None,
    )
    .await;
    let app = common::create_test_app(pool);

    let response = app.oneshot(common::get("/workouts")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("2 workouts total"));
    assert!(body.contains("Heavy chest"));
    assert!(body.contains("Light chest"));
    assert!(body.contains("Strength focus"));
    assert!(body.contains("Sat, Aug 23"));
}

#[tokio::test]
async fn test_workouts_list_empty_state() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app.oneshot(common::get("/workouts")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("0 workouts total"));
    assert!(body.contains("Create your first workout"));
}

#[tokio::test]
async fn test_workouts_list_filters_by_group() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;
    let back = common::create_test_group(&pool, "Back").await;
    common::create_test_workout(&pool, "Push day", chest.id, common::date(2025, 8, 23), None).await;
    common::create_test_workout(&pool, "Pull day", back.id, common::date(2025, 8, 22), None).await;
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(common::get(&format!("/workouts?group={}", back.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("1 workout total"));
    assert!(body.contains("Pull day"));
    assert!(!body.contains("Push day"));
}

#[tokio::test]
async fn test_workouts_list_empty_group_param_means_all() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;
    common::create_test_workout(&pool, "Push day", chest.id, common::date(2025, 8, 23), None).await;
    let app = common::create_test_app(pool);

    let response = app.oneshot(common::get("/workouts?group=")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Push day"));
}

#[tokio::test]
async fn test_new_workout_page_lists_groups() {
    let pool = common::setup_test_db();
    common::create_test_group(&pool, "Shoulders").await;
    let app = common::create_test_app(pool);

    let response = app.oneshot(common::get("/workouts/new")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Shoulders"));
}

#[tokio::test]
async fn test_create_workout_redirects_to_detail() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::post_form(
            "/workouts",
            &format!(
                "name=Heavy%20chest&muscle_group_id={}&date=2025-08-23&notes=Strength%20focus",
                chest.id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let workouts = WorkoutRepository::new(pool)
        .find_all_with_groups()
        .await
        .unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].name, "Heavy chest");
    assert_eq!(workouts[0].date, common::date(2025, 8, 23));
    assert_eq!(workouts[0].notes.as_deref(), Some("Strength focus"));
    assert_eq!(
        response.headers().get("location").unwrap(),
        &format!("/workouts/{}", workouts[0].id)
    );
}

#[tokio::test]
async fn test_create_workout_without_date_uses_today() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::post_form(
            "/workouts",
            &format!("name=Quick&muscle_group_id={}&date=&notes=", chest.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let workouts = WorkoutRepository::new(pool)
        .find_all_with_groups()
        .await
        .unwrap();
    assert_eq!(workouts[0].date, chrono::Local::now().date_naive());
    assert_eq!(workouts[0].notes, None);
}

#[tokio::test]
async fn test_create_workout_requires_name_and_group() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;

    let cases = [
        format!("name=&muscle_group_id={}", chest.id),
        format!("name=%20%20&muscle_group_id={}", chest.id),
        "name=Leg%20day&muscle_group_id=".to_string(),
    ];

    for body in cases {
        let app = common::create_test_app(pool.clone());
        let response = app
            .oneshot(common::post_form("/workouts", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "body: {}", body);
        let html = common::body_string(response).await;
        assert!(html.contains("Fill in at least a name and a muscle group"));
    }

    let workouts = WorkoutRepository::new(pool)
        .find_all_with_groups()
        .await
        .unwrap();
    assert!(workouts.is_empty());
}

#[tokio::test]
async fn test_create_workout_unknown_group_rerenders_form() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(common::post_form(
            "/workouts",
            "name=Mystery&muscle_group_id=999",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Unknown muscle group"));
    assert!(body.contains("Mystery"));
}

#[tokio::test]
async fn test_show_workout_groups_exercises_with_progress() {
    let pool = common::setup_test_db();
    let back = common::create_test_group(&pool, "Back").await;
    let biceps = common::create_test_group(&pool, "Biceps").await;
    let pullups = common::create_test_exercise(&pool, "Pull-ups", back.id).await;
    let row = common::create_test_exercise(&pool, "Barbell row", back.id).await;
    let curl = common::create_test_exercise(&pool, "Barbell curl", biceps.id).await;
    let workout = common::create_test_workout(
        &pool,
        "Back and biceps",
        back.id,
        common::date(2025, 8, 22),
        Some("High volume"),
    )
    .await;

    let first =
        common::add_test_exercise(&pool, workout.id, pullups.id, Some(4), Some(6), None).await;
    common::add_test_exercise(&pool, workout.id, row.id, Some(3), Some(8), Some(60.0)).await;
    common::add_test_exercise(&pool, workout.id, curl.id, Some(3), Some(12), Some(22.5)).await;
    WorkoutRepository::new(pool.clone())
        .set_exercise_completed(first.id, true)
        .await
        .unwrap();

    let app = common::create_test_app(pool);
    let response = app
        .oneshot(common::get(&format!("/workouts/{}", workout.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Friday, August 22, 2025"));
    assert!(body.contains("High volume"));
    assert!(body.contains("1/3 exercises"));
    assert!(body.contains("33% complete"));
    assert!(body.contains("1/2 exercises (50%)"));
    assert!(body.contains("0/1 exercises (0%)"));
    assert!(body.contains("3 sets • 12 reps • 22.5kg"));
    assert!(body.contains("4 sets • 6 reps"));
}

#[tokio::test]
async fn test_show_workout_not_found() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app.oneshot(common::get("/workouts/4242")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_workout_completion() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;
    let workout =
        common::create_test_workout(&pool, "Push", chest.id, common::date(2025, 8, 23), None).await;
    let repo = WorkoutRepository::new(pool.clone());

    let app = common::create_test_app(pool.clone());
    let response = app
        .oneshot(common::post_form(
            &format!("/workouts/{}/complete", workout.id),
            "completed=true&redirect=list",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/workouts");
    let found = repo.find_with_group_by_id(workout.id).await.unwrap().unwrap();
    assert!(found.is_completed);

    let app = common::create_test_app(pool.clone());
    let response = app
        .oneshot(common::post_form(
            &format!("/workouts/{}/complete", workout.id),
            "completed=false",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        &format!("/workouts/{}", workout.id)
    );
    let found = repo.find_with_group_by_id(workout.id).await.unwrap().unwrap();
    assert!(!found.is_completed);
}

#[tokio::test]
async fn test_toggle_workout_from_dashboard_returns_to_dashboard() {
    let pool = common::setup_test_db();
    let legs = common::create_test_group(&pool, "Legs").await;
    let workout =
        common::create_test_workout(&pool, "Squat day", legs.id, common::date(2025, 8, 22), None)
            .await;

    let app = common::create_test_app(pool.clone());
    let response = app
        .oneshot(common::post_form(
            &format!("/workouts/{}/complete", workout.id),
            "completed=true&redirect=dashboard",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/");
    let found = WorkoutRepository::new(pool)
        .find_with_group_by_id(workout.id)
        .await
        .unwrap()
        .unwrap();
    assert!(found.is_completed);
}

#[tokio::test]
async fn test_toggle_missing_workout_is_404() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(common::post_form("/workouts/77/complete", "completed=true"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_workout() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;
    let bench = common::create_test_exercise(&pool, "Bench press", chest.id).await;
    let workout =
        common::create_test_workout(&pool, "Push", chest.id, common::date(2025, 8, 23), None).await;
    let entry =
        common::add_test_exercise(&pool, workout.id, bench.id, Some(4), Some(8), Some(80.0)).await;

    let app = common::create_test_app(pool.clone());
    let response = app
        .oneshot(common::post_form(
            &format!("/workouts/{}/delete", workout.id),
            "",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/workouts");

    let repo = WorkoutRepository::new(pool);
    assert!(repo.find_with_group_by_id(workout.id).await.unwrap().is_none());
    assert!(repo.find_exercise_by_id(entry.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_workout_is_404() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;
    let kept =
        common::create_test_workout(&pool, "Push", chest.id, common::date(2025, 8, 23), None).await;
    let app = common::create_test_app(pool.clone());

    let response = app
        .oneshot(common::post_form("/workouts/31337/delete", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let workouts = WorkoutRepository::new(pool)
        .find_all_with_groups()
        .await
        .unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].id, kept.id);
}

#[tokio::test]
async fn test_add_exercise_to_workout() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;
    let bench = common::create_test_exercise(&pool, "Bench press", chest.id).await;
    let workout =
        common::create_test_workout(&pool, "Push", chest.id, common::date(2025, 8, 23), None).await;

    let app = common::create_test_app(pool.clone());
    let response = app
        .oneshot(common::post_form(
            &format!("/workouts/{}/exercises", workout.id),
            &format!(
                "exercise_id={}&sets=4&reps=8&weight=80&notes=Paused%20reps",
                bench.id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let entries = WorkoutRepository::new(pool)
        .find_exercises(workout.id)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].exercise_name, "Bench press");
    assert_eq!(entries[0].sets, Some(4));
    assert_eq!(entries[0].reps, Some(8));
    assert_eq!(entries[0].weight, Some(80.0));
    assert_eq!(entries[0].notes.as_deref(), Some("Paused reps"));
    assert!(!entries[0].is_completed);
}

#[tokio::test]
async fn test_add_exercise_blank_numbers_are_empty() {
    let pool = common::setup_test_db();
    let back = common::create_test_group(&pool, "Back").await;
    let pullups = common::create_test_exercise(&pool, "Pull-ups", back.id).await;
    let workout =
        common::create_test_workout(&pool, "Pull", back.id, common::date(2025, 8, 22), None).await;

    let app = common::create_test_app(pool.clone());
    let response = app
        .oneshot(common::post_form(
            &format!("/workouts/{}/exercises", workout.id),
            &format!("exercise_id={}&sets=&reps=&weight=&notes=", pullups.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let entries = WorkoutRepository::new(pool)
        .find_exercises(workout.id)
        .await
        .unwrap();
    assert_eq!(entries[0].sets, None);
    assert_eq!(entries[0].weight, None);
    assert_eq!(entries[0].notes, None);
}

#[tokio::test]
async fn test_add_exercise_requires_exercise() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;
    let workout =
        common::create_test_workout(&pool, "Push", chest.id, common::date(2025, 8, 23), None).await;
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(common::post_form(
            &format!("/workouts/{}/exercises", workout.id),
            "exercise_id=&sets=3",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_exercise_to_missing_workout_is_404() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;
    let bench = common::create_test_exercise(&pool, "Bench press", chest.id).await;
    let app = common::create_test_app(pool);

    let response = app
        .oneshot(common::post_form(
            "/workouts/999/exercises",
            &format!("exercise_id={}", bench.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_exercise_completion() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;
    let bench = common::create_test_exercise(&pool, "Bench press", chest.id).await;
    let workout =
        common::create_test_workout(&pool, "Push", chest.id, common::date(2025, 8, 23), None).await;
    let entry =
        common::add_test_exercise(&pool, workout.id, bench.id, Some(4), Some(8), Some(80.0)).await;

    let app = common::create_test_app(pool.clone());
    let response = app
        .oneshot(common::post_form(
            &format!("/workouts/{}/exercises/{}/complete", workout.id, entry.id),
            "completed=true",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        &format!("/workouts/{}", workout.id)
    );

    let complete = WorkoutRepository::new(pool)
        .find_complete(workout.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(complete.completed_exercises, 1);
    assert_eq!(complete.progress().percentage(), 100);
}

#[tokio::test]
async fn test_toggle_exercise_of_other_workout_is_404() {
    let pool = common::setup_test_db();
    let chest = common::create_test_group(&pool, "Chest").await;
    let bench = common::create_test_exercise(&pool, "Bench press", chest.id).await;
    let mine =
        common::create_test_workout(&pool, "Push", chest.id, common::date(2025, 8, 23), None).await;
    let other = common::create_test_workout(
        &pool,
        "Push again",
        chest.id,
        common::date(2025, 8, 24),
        None,
    )
    .await;
    let entry = common::add_test_exercise(&pool, other.id, bench.id, None, None, None).await;

    let app = common::create_test_app(pool.clone());
    let response = app
        .oneshot(common::post_form(
            &format!("/workouts/{}/exercises/{}/complete", mine.id, entry.id),
            "completed=true",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let found = WorkoutRepository::new(pool)
        .find_exercise_by_id(entry.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!found.is_completed);
}
