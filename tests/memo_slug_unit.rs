// tests/memo_slug_unit.rs
mod support;

use memo_core::application::{
    commands::memos::{CreateMemoCommand, UpdateMemoCommand},
    dto::{AuthenticatedUser, MemoLocator},
    services::ApplicationServices,
};
use memo_core::domain::memo::{MemoTitle, services::MemoSlugService};
use memo_core::domain::user::UserId;
use memo_core::infrastructure::util::{DefaultSlugGenerator, KanaTransliterator};
use std::collections::HashSet;
use std::sync::Arc;
use support::{FailingTransliterator, InMemoryMemoRepo, InMemoryUserRepo, MemoBuilder, build_services};

fn actor(id: i64) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        username: format!("tester{id}"),
        session_id: None,
    }
}

fn services_with(memos: Arc<InMemoryMemoRepo>) -> Arc<ApplicationServices> {
    build_services(
        memos,
        Arc::new(InMemoryUserRepo::with_testers()),
        Arc::new(KanaTransliterator::new()),
    )
}

fn titled(title: &str) -> CreateMemoCommand {
    CreateMemoCommand::builder()
        .title(title)
        .content("message")
        .build()
}

async fn create_slug(services: &ApplicationServices, owner: i64, title: &str) -> String {
    services
        .memo_commands
        .create_memo(&actor(owner), titled(title))
        .await
        .unwrap()
        .slug
}

#[tokio::test]
async fn ascii_title_gets_numbered_suffix_on_collision() {
    let services = services_with(Arc::new(InMemoryMemoRepo::new()));

    assert_eq!(create_slug(&services, 7, "test1").await, "test1");
    assert_eq!(create_slug(&services, 7, "test1").await, "test1-1");
    assert_eq!(create_slug(&services, 7, "test1").await, "test1-2");
}

#[tokio::test]
async fn katakana_title_is_romanized() {
    let services = services_with(Arc::new(InMemoryMemoRepo::new()));

    assert_eq!(create_slug(&services, 7, "テスト1").await, "tesuto1");
    assert_eq!(create_slug(&services, 7, "テスト1").await, "tesuto1-1");
}

#[tokio::test]
async fn symbol_only_title_falls_back_to_owner_placeholder() {
    let services = services_with(Arc::new(InMemoryMemoRepo::new()));

    assert_eq!(create_slug(&services, 7, "!!!").await, "memo-7");
    assert_eq!(create_slug(&services, 7, "!!!").await, "memo-7-1");
    assert_eq!(create_slug(&services, 7, "???").await, "memo-7-2");
}

#[tokio::test]
async fn failed_transliteration_uses_placeholder() {
    let services = build_services(
        Arc::new(InMemoryMemoRepo::new()),
        Arc::new(InMemoryUserRepo::with_testers()),
        Arc::new(FailingTransliterator),
    );

    assert_eq!(create_slug(&services, 8, "テスト").await, "memo-8");
}

#[tokio::test]
async fn other_owners_may_reuse_a_slug() {
    let memos = Arc::new(InMemoryMemoRepo::new());
    let services = services_with(Arc::clone(&memos));

    assert_eq!(create_slug(&services, 7, "test1").await, "test1");
    assert_eq!(create_slug(&services, 8, "test1").await, "test1");
    assert_eq!(memos.slugs_of(7), vec!["test1"]);
    assert_eq!(memos.slugs_of(8), vec!["test1"]);
}

#[tokio::test]
async fn first_free_suffix_fills_gaps() {
    let memos = Arc::new(InMemoryMemoRepo::new());
    memos.seed(MemoBuilder::new(1).slug("test1").build());
    memos.seed(MemoBuilder::new(2).slug("test1-2").build());
    let services = services_with(Arc::clone(&memos));

    assert_eq!(create_slug(&services, 7, "test1").await, "test1-1");
    assert_eq!(create_slug(&services, 7, "test1").await, "test1-3");
}

#[tokio::test]
async fn editing_title_keeps_slug() {
    let services = services_with(Arc::new(InMemoryMemoRepo::new()));
    let owner = actor(7);
    let created = services
        .memo_commands
        .create_memo(&owner, titled("test1"))
        .await
        .unwrap();

    let updated = services
        .memo_commands
        .update_memo(
            &owner,
            UpdateMemoCommand {
                target: MemoLocator::Id(created.id),
                title: Some("renamed".into()),
                content: None,
                category: None,
                priority: None,
                partial: true,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.slug, "test1");
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn concurrent_creations_for_one_owner_stay_unique() {
    let memos = Arc::new(InMemoryMemoRepo::new());
    let services = services_with(Arc::clone(&memos));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let services = Arc::clone(&services);
        handles.push(tokio::spawn(async move {
            create_slug(&services, 7, "same title").await
        }));
    }
    let mut slugs = HashSet::new();
    for handle in handles {
        slugs.insert(handle.await.unwrap());
    }

    assert_eq!(slugs.len(), 10);
    assert!(slugs.contains("same-title"));
    for n in 1..10 {
        assert!(slugs.contains(&format!("same-title-{n}")));
    }
}

#[tokio::test]
async fn generated_slugs_are_lowercase_ascii() {
    let services = services_with(Arc::new(InMemoryMemoRepo::new()));

    for title in ["Hello World", "さくら 2024", "買い物リスト", "A_B.C"] {
        let slug = create_slug(&services, 7, title).await;
        assert!(!slug.is_empty());
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "unexpected slug {slug:?} for {title:?}"
        );
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
    }
}

#[tokio::test]
async fn slug_service_can_exclude_the_memo_being_saved() {
    let memos = Arc::new(InMemoryMemoRepo::new());
    let existing = MemoBuilder::new(1).slug("test1").build();
    let existing_id = existing.id;
    memos.seed(existing);

    let service = MemoSlugService::new(
        memos,
        Arc::new(KanaTransliterator::new()),
        Arc::new(DefaultSlugGenerator),
    );
    let title = MemoTitle::new("test1").unwrap();
    let owner = UserId::new(7).unwrap();

    let other = service
        .generate_unique_slug(&title, owner, None)
        .await
        .unwrap();
    assert_eq!(other.as_str(), "test1-1");

    let same = service
        .generate_unique_slug(&title, owner, Some(existing_id))
        .await
        .unwrap();
    assert_eq!(same.as_str(), "test1");
}

#[tokio::test]
async fn expanding_title_still_yields_a_storable_slug() {
    let services = services_with(Arc::new(InMemoryMemoRepo::new()));
    let title = "ﷺ".repeat(20);

    let first = create_slug(&services, 7, &title).await;
    let second = create_slug(&services, 7, &title).await;

    assert!(first.len() <= 255);
    assert!(!first.ends_with('-'));
    assert_eq!(second, format!("{first}-1"));
    assert!(second.len() <= 255);
}

#[tokio::test]
async fn small_ke_counter_is_romanized_instead_of_placeholder() {
    let services = services_with(Arc::new(InMemoryMemoRepo::new()));

    let slug = create_slug(&services, 7, "3ヶ月メモ").await;
    assert!(slug.starts_with("3ka"), "unexpected slug {slug:?}");
    assert!(slug.ends_with("memo"), "unexpected slug {slug:?}");
}
