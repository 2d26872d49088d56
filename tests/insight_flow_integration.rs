//! Integration tests for the full insight flow.
//!
//! Exercises the end-to-end path over in-memory adapters:
//! 1. Quiz submission classifies an archetype
//! 2. Partner records accumulate through the partner handlers
//! 3. Profile analysis generates, caches and re-serves an insight
//! 4. Metrics aggregate from the history snapshot
//! 5. Achievements unlock monotonically along the way

use std::sync::Arc;

use flavour_lens::adapters::achievements::InMemoryAchievementStore;
use flavour_lens::adapters::cache::InMemoryInsightCache;
use flavour_lens::adapters::insight::TemplateInsightSource;
use flavour_lens::adapters::partner::InMemoryPartnerStore;
use flavour_lens::ports::{AchievementStore, PartnerStore};
use flavour_lens::application::handlers::{
    AnalyzeProfileCommand, AnalyzeProfileHandler, CreatePartnerCommand, CreatePartnerHandler,
    ListPartnersHandler, RefreshAchievementsHandler, SubmitQuizCommand, SubmitQuizHandler,
};
use flavour_lens::domain::foundation::{ErrorCode, UserId};
use flavour_lens::domain::insight::AnalysisType;
use flavour_lens::domain::partner::{DurationBucket, OutcomeBucket};
use flavour_lens::domain::quiz::{Archetype, QuizAnswers};

struct TestApp {
    partners: Arc<InMemoryPartnerStore>,
    cache: Arc<InMemoryInsightCache>,
    achievements: Arc<InMemoryAchievementStore>,
    submit_quiz: SubmitQuizHandler,
    create_partner: CreatePartnerHandler,
    list_partners: ListPartnersHandler,
    analyze: AnalyzeProfileHandler,
    refresh: Arc<RefreshAchievementsHandler>,
}

fn test_app() -> TestApp {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let partners = Arc::new(InMemoryPartnerStore::new());
    let cache = Arc::new(InMemoryInsightCache::new());
    let achievements = Arc::new(InMemoryAchievementStore::new());
    let refresh = Arc::new(RefreshAchievementsHandler::new(
        partners.clone(),
        achievements.clone(),
    ));

    TestApp {
        submit_quiz: SubmitQuizHandler::new(achievements.clone()),
        create_partner: CreatePartnerHandler::new(partners.clone())
            .with_change_handler(refresh.clone()),
        list_partners: ListPartnersHandler::new(partners.clone()),
        analyze: AnalyzeProfileHandler::new(
            partners.clone(),
            cache.clone(),
            Arc::new(TemplateInsightSource::new()),
            24,
        ),
        refresh,
        partners,
        cache,
        achievements,
    }
}

fn user() -> UserId {
    UserId::new("integration-user").unwrap()
}

fn vanilla_answers() -> QuizAnswers {
    QuizAnswers::new()
        .with_answer("conflict_style", "keep_the_peace")
        .with_answer("ideal_weekend", "cozy_night_in")
        .with_answer("love_language", "quality_time")
        .with_answer("pace", "steady")
        .with_answer("social_energy", "small_circle")
        .with_answer("surprise_reaction", "prefer_plans")
        .with_answer("texting_style", "minimal")
}

async fn add_partner(app: &TestApp, archetype: Archetype) {
    app.create_partner
        .handle(CreatePartnerCommand {
            user_id: user(),
            archetype,
            duration: DurationBucket::ThreeToTwelveMonths,
            outcome: OutcomeBucket::Amicable,
            notes: None,
        })
        .await
        .unwrap();
}

fn analyze_command() -> AnalyzeProfileCommand {
    AnalyzeProfileCommand {
        user_id: user(),
        archetype: Archetype::Vanilla,
        traits: vec!["thoughtful".to_string()],
        lifestyle_tags: vec!["early_bird".to_string()],
        analysis_type: AnalysisType::Compatibility,
    }
}

#[tokio::test]
async fn quiz_to_insight_happy_path() {
    let app = test_app();

    let quiz = app
        .submit_quiz
        .handle(SubmitQuizCommand {
            user_id: user(),
            answers: vanilla_answers(),
        })
        .await
        .unwrap();
    assert_eq!(quiz.archetype, Archetype::Vanilla);

    add_partner(&app, Archetype::Chocolate).await;
    add_partner(&app, Archetype::Chocolate).await;
    add_partner(&app, Archetype::Vanilla).await;
    assert_eq!(app.list_partners.handle(&user()).await.unwrap().len(), 3);

    let result = app.analyze.handle(analyze_command()).await.unwrap();
    assert!(!result.cache_hit);
    assert!(!result.degraded);
    assert!(result.payload.validate().is_ok());

    // [chocolate, chocolate, vanilla] -> dominant archetype in 2 of 3.
    let consistency = result.metrics.archetype_consistency.value();
    assert!((consistency - 2.0 / 3.0).abs() < 1e-9);
    assert!(result.metrics.overall.value() >= 0.0 && result.metrics.overall.value() <= 1.0);

    // Same snapshot, second call served from the cache.
    let again = app.analyze.handle(analyze_command()).await.unwrap();
    assert!(again.cache_hit);
    assert_eq!(again.payload, result.payload);
    assert_eq!(app.cache.entry_count().await, 1);
}

#[tokio::test]
async fn analysis_with_thin_history_is_rejected() {
    let app = test_app();
    add_partner(&app, Archetype::Mint).await;

    let err = app.analyze.handle(analyze_command()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InsufficientData);
}

#[tokio::test]
async fn cache_outage_degrades_gracefully() {
    let app = test_app();
    add_partner(&app, Archetype::Coffee).await;
    add_partner(&app, Archetype::Coffee).await;

    app.cache.set_unavailable(true);
    let result = app.analyze.handle(analyze_command()).await.unwrap();
    assert!(result.degraded);
    assert!(!result.cache_hit);
    assert!(result.payload.validate().is_ok());

    // Outage over: next call repopulates and the one after hits.
    app.cache.set_unavailable(false);
    let repopulated = app.analyze.handle(analyze_command()).await.unwrap();
    assert!(!repopulated.cache_hit);
    let hit = app.analyze.handle(analyze_command()).await.unwrap();
    assert!(hit.cache_hit);
}

#[tokio::test]
async fn history_changes_invalidate_by_fingerprint() {
    let app = test_app();
    add_partner(&app, Archetype::Chilli).await;
    add_partner(&app, Archetype::Chilli).await;

    let before = app.analyze.handle(analyze_command()).await.unwrap();
    assert!(!before.cache_hit);

    add_partner(&app, Archetype::Coconut).await;
    let after = app.analyze.handle(analyze_command()).await.unwrap();
    assert!(!after.cache_hit);
    assert_eq!(app.cache.entry_count().await, 2);
}

#[tokio::test]
async fn achievements_accumulate_across_the_flow() {
    let app = test_app();

    // First partner through the change feed unlocks first_taste.
    add_partner(&app, Archetype::Chocolate).await;
    let state = app.achievements.load(&user()).await.unwrap();
    assert_eq!(state.counters.partners_analyzed, 1);

    add_partner(&app, Archetype::Vanilla).await;
    add_partner(&app, Archetype::Mint).await;
    add_partner(&app, Archetype::Chilli).await;
    add_partner(&app, Archetype::Coffee).await;

    let result = app.refresh.refresh(&user()).await.unwrap();
    let unlocked: Vec<&str> = result
        .achievements
        .iter()
        .filter(|a| a.unlocked)
        .map(|a| a.id.as_str())
        .collect();
    assert!(unlocked.contains(&"first_taste"));
    assert!(unlocked.contains(&"deep_diver"));
    assert!(unlocked.contains(&"flavour_collector"));

    // Analysis counts toward insight_seeker.
    app.analyze.handle(analyze_command()).await.unwrap();
    app.refresh.record_insight_generated(&user()).await.unwrap();
    let state = app.achievements.load(&user()).await.unwrap();
    assert_eq!(state.counters.insights_generated, 1);

    // Progress pairs stay within bounds.
    for achievement in &result.achievements {
        if let Some((current, max)) = achievement.progress {
            assert!(current <= max);
        }
    }
}

#[tokio::test]
async fn deleting_partners_never_relocks_achievements() {
    let app = test_app();
    add_partner(&app, Archetype::Caramel).await;
    app.refresh.refresh(&user()).await.unwrap();

    let records = app.list_partners.handle(&user()).await.unwrap();
    for record in records {
        app.partners.delete(&user(), record.id()).await.unwrap();
    }
    let result = app.refresh.refresh(&user()).await.unwrap();

    let first_taste = result
        .achievements
        .iter()
        .find(|a| a.id.as_str() == "first_taste")
        .unwrap();
    assert!(first_taste.unlocked);
    assert_eq!(first_taste.progress, Some((0, 1)));
}
