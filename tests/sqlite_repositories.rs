mod support;

use chrono::Duration;
use scribe_core::domain::{
    article::{
        ArticleContent, ArticleFilter, ArticleHeading, ArticleId, ArticleReadRepository,
        ArticleUpdate, ArticleWriteRepository, Category, ImageUrl, NewArticle, PageRequest,
    },
    errors::DomainError,
    user::{Email, NewUser, PasswordHash, User, UserId, UserRepository, Username},
};
use scribe_core::infrastructure::repositories::{
    SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteUserRepository,
};
use sqlx::SqlitePool;
use support::fixed_now;

struct Repos {
    users: SqliteUserRepository,
    writes: SqliteArticleWriteRepository,
    reads: SqliteArticleReadRepository,
}

async fn repos() -> (Repos, SqlitePool) {
    let pool = support::memory_pool().await;
    let repos = Repos {
        users: SqliteUserRepository::new(pool.clone()),
        writes: SqliteArticleWriteRepository::new(pool.clone()),
        reads: SqliteArticleReadRepository::new(pool.clone()),
    };
    (repos, pool)
}

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser::new(
        Username::new(username).unwrap(),
        Email::new(email).unwrap(),
        PasswordHash::new("plain:secret").unwrap(),
        fixed_now(),
    )
}

fn new_article(heading: &str, category: Category, author: &User, offset_secs: i64) -> NewArticle {
    NewArticle::new(
        ArticleHeading::new(heading).unwrap(),
        ArticleContent::new("content").unwrap(),
        ImageUrl::new("https://img.example/1.png").unwrap(),
        category,
        author.id,
        fixed_now() + Duration::seconds(offset_secs),
    )
}

fn count_matches_ids(user: &User) -> bool {
    usize::try_from(user.article_count).is_ok_and(|count| count == user.article_ids.len())
}

#[tokio::test]
async fn inserted_user_is_found_by_normalised_email() {
    let (repos, _pool) = repos().await;
    let user = repos.users.insert(new_user("ada", "Ada@Example.com")).await.unwrap();

    assert_eq!(user.article_count, 0);
    assert!(user.article_ids.is_empty());

    let found = repos
        .users
        .find_by_email(&Email::new(" ADA@example.com ").unwrap())
        .await
        .unwrap()
        .expect("user present");
    assert_eq!(found.id, user.id);
    assert_eq!(found.username.as_str(), "ada");

    let by_id = repos.users.find_by_id(user.id).await.unwrap();
    assert!(by_id.is_some());
    assert!(repos.users.find_by_id(UserId::generate()).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_username_or_email_is_a_validation_error() {
    let (repos, _pool) = repos().await;
    repos.users.insert(new_user("ada", "ada@example.com")).await.unwrap();

    let err = repos
        .users
        .insert(new_user("other", "ada@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ref m) if m == "email already registered"));

    let err = repos
        .users
        .insert(new_user("ada", "second@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ref m) if m == "username already taken"));
}

#[tokio::test]
async fn record_new_article_keeps_count_and_ids_in_step() {
    let (repos, _pool) = repos().await;
    let user = repos.users.insert(new_user("ada", "ada@example.com")).await.unwrap();

    let first = ArticleId::generate();
    let second = ArticleId::generate();
    repos.users.record_new_article(user.id, first, fixed_now()).await.unwrap();
    let updated = repos
        .users
        .record_new_article(user.id, second, fixed_now())
        .await
        .unwrap();

    assert_eq!(updated.article_count, 2);
    assert_eq!(updated.article_ids, vec![first, second]);
    assert!(count_matches_ids(&updated));

    let reloaded = repos.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(reloaded.article_ids, vec![first, second]);
}

#[tokio::test]
async fn concurrent_records_for_one_user_both_land() {
    let (repos, _pool) = repos().await;
    let user = repos.users.insert(new_user("ada", "ada@example.com")).await.unwrap();

    let (a, b) = tokio::join!(
        repos.users.record_new_article(user.id, ArticleId::generate(), fixed_now()),
        repos.users.record_new_article(user.id, ArticleId::generate(), fixed_now()),
    );
    a.unwrap();
    b.unwrap();

    let reloaded = repos.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(reloaded.article_count, 2);
    assert!(count_matches_ids(&reloaded));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn reads_never_see_a_half_recorded_article() {
    let db = support::FileDb::new(8).await;
    let users = SqliteUserRepository::new(db.pool.clone());
    let user = users.insert(new_user("ada", "ada@example.com")).await.unwrap();
    let email = user.email.clone();

    let writer = {
        let users = users.clone();
        tokio::spawn(async move {
            for _ in 0..150 {
                users
                    .record_new_article(user.id, ArticleId::generate(), fixed_now())
                    .await
                    .unwrap();
            }
        })
    };

    let mut reads = 0;
    while !writer.is_finished() {
        let seen = users.find_by_email(&email).await.unwrap().unwrap();
        assert!(
            count_matches_ids(&seen),
            "count {} with {} ids",
            seen.article_count,
            seen.article_ids.len()
        );
        reads += 1;
    }
    writer.await.unwrap();

    let last = users.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(last.article_count, 150);
    assert!(count_matches_ids(&last));
    assert!(reads > 0);
}

#[tokio::test]
async fn record_for_missing_user_is_not_found_and_writes_nothing() {
    let (repos, pool) = repos().await;
    let err = repos
        .users
        .record_new_article(UserId::generate(), ArticleId::generate(), fixed_now())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_articles")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn duplicate_heading_is_rejected() {
    let (repos, _pool) = repos().await;
    let author = repos.users.insert(new_user("ada", "ada@example.com")).await.unwrap();
    repos
        .writes
        .insert(new_article("Same", Category::Health, &author, 0))
        .await
        .unwrap();

    let err = repos
        .writes
        .insert(new_article("Same", Category::Sports, &author, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ref m) if m == "heading already exists"));
}

#[tokio::test]
async fn article_for_unknown_author_is_not_found() {
    let (repos, _pool) = repos().await;
    let ghost = repos.users.insert(new_user("ghost", "ghost@example.com")).await.unwrap();
    let mut article = new_article("Orphan", Category::Business, &ghost, 0);
    article.author_id = UserId::generate();

    let err = repos.writes.insert(article).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn detail_resolves_author_name() {
    let (repos, _pool) = repos().await;
    let author = repos.users.insert(new_user("ada", "ada@example.com")).await.unwrap();
    let article = repos
        .writes
        .insert(new_article("Hello", Category::Technology, &author, 0).featured(true))
        .await
        .unwrap();

    let detail = repos.reads.find_detail(article.id).await.unwrap().unwrap();
    assert_eq!(detail.author_name.unwrap().as_str(), "ada");
    assert_eq!(detail.article.heading.as_str(), "Hello");
    assert!(detail.article.featured);

    assert!(repos.reads.find_detail(ArticleId::generate()).await.unwrap().is_none());
}

#[tokio::test]
async fn search_is_case_insensitive_substring_on_heading() {
    let (repos, _pool) = repos().await;
    let author = repos.users.insert(new_user("ada", "ada@example.com")).await.unwrap();
    for (i, heading) in ["Learning Rust", "rusty tools", "Gardening"].into_iter().enumerate() {
        repos
            .writes
            .insert(new_article(heading, Category::Lifestyle, &author, i as i64))
            .await
            .unwrap();
    }

    let filter = ArticleFilter::new(Some("RUST".into()), None);
    let found = repos.reads.list_page(&filter, PageRequest::default()).await.unwrap();
    let headings: Vec<&str> = found.iter().map(|a| a.heading.as_str()).collect();
    assert_eq!(headings, vec!["rusty tools", "Learning Rust"]);
}

#[tokio::test]
async fn search_folds_non_ascii_headings() {
    let (repos, _pool) = repos().await;
    let author = repos.users.insert(new_user("ada", "ada@example.com")).await.unwrap();
    let article = repos
        .writes
        .insert(new_article("ÉCOLE Überblick", Category::Lifestyle, &author, 0))
        .await
        .unwrap();

    for term in ["école", "überblick", "ÉCOLE", "ole ÜB"] {
        let filter = ArticleFilter::new(Some(term.into()), None);
        let found = repos.reads.list_page(&filter, PageRequest::default()).await.unwrap();
        assert_eq!(found.len(), 1, "search {term:?}");
    }

    repos
        .writes
        .update(
            ArticleUpdate::new(article.id, fixed_now())
                .with_heading(ArticleHeading::new("Ärger im Büro").unwrap()),
        )
        .await
        .unwrap();
    let filter = ArticleFilter::new(Some("ärger".into()), None);
    assert_eq!(
        repos.reads.list_page(&filter, PageRequest::default()).await.unwrap().len(),
        1
    );
    let filter = ArticleFilter::new(Some("école".into()), None);
    assert!(repos.reads.list_page(&filter, PageRequest::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn search_keeps_inner_spaces_significant() {
    let (repos, _pool) = repos().await;
    let author = repos.users.insert(new_user("ada", "ada@example.com")).await.unwrap();
    for (i, heading) in ["rust tips", "rusty"].into_iter().enumerate() {
        repos
            .writes
            .insert(new_article(heading, Category::Lifestyle, &author, i as i64))
            .await
            .unwrap();
    }

    let filter = ArticleFilter::new(Some("rust ".into()), None);
    let found = repos.reads.list_page(&filter, PageRequest::default()).await.unwrap();
    let headings: Vec<&str> = found.iter().map(|a| a.heading.as_str()).collect();
    assert_eq!(headings, vec!["rust tips"]);
}

#[tokio::test]
async fn same_timestamp_orders_newest_insert_first() {
    let (repos, _pool) = repos().await;
    let author = repos.users.insert(new_user("ada", "ada@example.com")).await.unwrap();
    for heading in ["first", "second", "third"] {
        repos
            .writes
            .insert(new_article(heading, Category::Sports, &author, 0))
            .await
            .unwrap();
    }

    let listed = repos.reads.list_by_category(Category::Sports).await.unwrap();
    let headings: Vec<&str> = listed.iter().map(|a| a.heading.as_str()).collect();
    assert_eq!(headings, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn partial_update_touches_only_given_fields() {
    let (repos, _pool) = repos().await;
    let author = repos.users.insert(new_user("ada", "ada@example.com")).await.unwrap();
    let article = repos
        .writes
        .insert(new_article("Stable", Category::Health, &author, 0))
        .await
        .unwrap();

    let later = fixed_now() + Duration::minutes(5);
    let updated = repos
        .writes
        .update(ArticleUpdate::new(article.id, later).with_featured(true))
        .await
        .unwrap();

    assert!(updated.featured);
    assert_eq!(updated.heading, article.heading);
    assert_eq!(updated.content, article.content);
    assert_eq!(updated.category, article.category);
    assert_eq!(updated.created_at, article.created_at);
    assert_eq!(updated.updated_at, later);

    let err = repos
        .writes
        .update(ArticleUpdate::new(ArticleId::generate(), later).with_featured(true))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn delete_returns_the_article_and_leaves_author_list_alone() {
    let (repos, _pool) = repos().await;
    let author = repos.users.insert(new_user("ada", "ada@example.com")).await.unwrap();
    let article = repos
        .writes
        .insert(new_article("Doomed", Category::Entertainment, &author, 0))
        .await
        .unwrap();
    repos
        .users
        .record_new_article(author.id, article.id, fixed_now())
        .await
        .unwrap();

    let deleted = repos.writes.delete(article.id).await.unwrap();
    assert_eq!(deleted.id, article.id);
    assert!(repos.reads.find_by_id(article.id).await.unwrap().is_none());

    let owner = repos.users.find_by_id(author.id).await.unwrap().unwrap();
    assert_eq!(owner.article_ids, vec![article.id]);
    assert_eq!(owner.article_count, 1);

    let err = repos.writes.delete(article.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn featured_listing_respects_limit() {
    let (repos, _pool) = repos().await;
    let author = repos.users.insert(new_user("ada", "ada@example.com")).await.unwrap();
    for i in 0..5 {
        repos
            .writes
            .insert(new_article(&format!("post {i}"), Category::Business, &author, i).featured(i % 2 == 0))
            .await
            .unwrap();
    }

    let featured = repos.reads.list_featured(2).await.unwrap();
    let headings: Vec<&str> = featured.iter().map(|a| a.heading.as_str()).collect();
    assert_eq!(headings, vec!["post 4", "post 2"]);
}

#[tokio::test]
async fn author_listing_is_a_newest_first_summary() {
    let (repos, _pool) = repos().await;
    let ada = repos.users.insert(new_user("ada", "ada@example.com")).await.unwrap();
    let bob = repos.users.insert(new_user("bob", "bob@example.com")).await.unwrap();
    repos.writes.insert(new_article("ada 1", Category::Health, &ada, 0)).await.unwrap();
    repos.writes.insert(new_article("bob 1", Category::Health, &bob, 1)).await.unwrap();
    repos.writes.insert(new_article("ada 2", Category::Sports, &ada, 2)).await.unwrap();

    let summaries = repos.reads.list_by_author(ada.id).await.unwrap();
    let headings: Vec<&str> = summaries.iter().map(|s| s.heading.as_str()).collect();
    assert_eq!(headings, vec!["ada 2", "ada 1"]);
    assert_eq!(summaries[0].category, Category::Sports);
}
