//! Integration tests for the membership repository.
//!
//! Exercises the join/leave lifecycle, the two independent state flags,
//! the uniqueness constraint on (user, challenge), and the read
//! projections (my challenges, favorites, wall of fame, joined check).

use sqlx::PgPool;
use uuid::Uuid;

use fittogether_db::models::challenge::{CreateChallenge, Difficulty};
use fittogether_db::models::user::CreateUser;
use fittogether_db::repositories::{ChallengeRepo, MembershipRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(name: &str) -> CreateUser {
    CreateUser {
        uuid: Uuid::new_v4(),
        name: name.to_string(),
        username: name.to_lowercase().replace(' ', "_"),
    }
}

fn new_challenge(name: &str) -> CreateChallenge {
    CreateChallenge {
        name: name.to_string(),
        description: String::new(),
        difficulty: Some(Difficulty::Medium),
    }
}

fn assert_unique_violation(err: sqlx::Error, constraint: &str) {
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some(constraint));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Create / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_membership_defaults_both_flags_to_false(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Alice")).await.unwrap();
    let challenge = ChallengeRepo::create(&pool, &new_challenge("Run 5k"))
        .await
        .unwrap();

    let membership = MembershipRepo::create(&pool, user.id, user.uuid, challenge.id)
        .await
        .unwrap();

    assert_eq!(membership.user_id, user.id);
    assert_eq!(membership.user_uuid, user.uuid);
    assert_eq!(membership.challenge_id, challenge.id);
    assert!(!membership.completed);
    assert!(!membership.favorite);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_membership_fails_on_unique_constraint(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Bob")).await.unwrap();
    let challenge = ChallengeRepo::create(&pool, &new_challenge("Plank month"))
        .await
        .unwrap();

    MembershipRepo::create(&pool, user.id, user.uuid, challenge.id)
        .await
        .unwrap();
    let err = MembershipRepo::create(&pool, user.id, user.uuid, challenge.id)
        .await
        .unwrap_err();

    assert_unique_violation(err, "uq_memberships_user_challenge");
}

#[sqlx::test(migrations = "./migrations")]
async fn join_then_leave_round_trip(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Cara")).await.unwrap();
    let challenge = ChallengeRepo::create(&pool, &new_challenge("Daily yoga"))
        .await
        .unwrap();

    let membership = MembershipRepo::create(&pool, user.id, user.uuid, challenge.id)
        .await
        .unwrap();
    assert!(MembershipRepo::is_joined(&pool, user.uuid, challenge.id)
        .await
        .unwrap());

    assert!(MembershipRepo::delete(&pool, membership.id).await.unwrap());
    assert!(!MembershipRepo::is_joined(&pool, user.uuid, challenge.id)
        .await
        .unwrap());

    // Second delete finds nothing.
    assert!(!MembershipRepo::delete(&pool, membership.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Flag updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn favorite_toggle_leaves_completed_unchanged(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Dan")).await.unwrap();
    let challenge = ChallengeRepo::create(&pool, &new_challenge("Cold showers"))
        .await
        .unwrap();
    let membership = MembershipRepo::create(&pool, user.id, user.uuid, challenge.id)
        .await
        .unwrap();

    let completed = MembershipRepo::set_completed(&pool, membership.id, true)
        .await
        .unwrap()
        .unwrap();
    assert!(completed.completed);

    let favorited = MembershipRepo::set_favorite(&pool, membership.id, true)
        .await
        .unwrap()
        .unwrap();
    assert!(favorited.favorite);
    assert!(favorited.completed, "favorite must not touch completed");

    let unfavorited = MembershipRepo::set_favorite(&pool, membership.id, false)
        .await
        .unwrap()
        .unwrap();
    assert!(!unfavorited.favorite);
    assert!(unfavorited.completed, "favorite must not touch completed");
}

#[sqlx::test(migrations = "./migrations")]
async fn set_flags_are_idempotent(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Eve")).await.unwrap();
    let challenge = ChallengeRepo::create(&pool, &new_challenge("10k steps"))
        .await
        .unwrap();
    let membership = MembershipRepo::create(&pool, user.id, user.uuid, challenge.id)
        .await
        .unwrap();

    for _ in 0..3 {
        let updated = MembershipRepo::set_completed(&pool, membership.id, true)
            .await
            .unwrap()
            .unwrap();
        assert!(updated.completed);
        assert!(!updated.favorite);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn set_flag_on_missing_membership_returns_none(pool: PgPool) {
    assert!(MembershipRepo::set_favorite(&pool, 999_999, true)
        .await
        .unwrap()
        .is_none());
    assert!(MembershipRepo::set_completed(&pool, 999_999, true)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_for_user_is_empty_not_an_error(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Fay")).await.unwrap();
    let memberships = MembershipRepo::list_for_user(&pool, user.uuid)
        .await
        .unwrap();
    assert!(memberships.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_for_user_orders_by_membership_id(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Gil")).await.unwrap();
    let c1 = ChallengeRepo::create(&pool, &new_challenge("First"))
        .await
        .unwrap();
    let c2 = ChallengeRepo::create(&pool, &new_challenge("Second"))
        .await
        .unwrap();
    let c3 = ChallengeRepo::create(&pool, &new_challenge("Third"))
        .await
        .unwrap();

    for c in [&c2, &c1, &c3] {
        MembershipRepo::create(&pool, user.id, user.uuid, c.id)
            .await
            .unwrap();
    }

    let memberships = MembershipRepo::list_for_user(&pool, user.uuid)
        .await
        .unwrap();
    assert_eq!(memberships.len(), 3);
    let ids: Vec<_> = memberships.iter().map(|m| m.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
    // Join order, not challenge id order.
    assert_eq!(memberships[0].challenge_id, c2.id);
    assert_eq!(memberships[0].challenge_name, "Second");
}

#[sqlx::test(migrations = "./migrations")]
async fn list_favorites_filters_to_favorite_rows(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Hana")).await.unwrap();
    let c1 = ChallengeRepo::create(&pool, &new_challenge("Keep"))
        .await
        .unwrap();
    let c2 = ChallengeRepo::create(&pool, &new_challenge("Skip"))
        .await
        .unwrap();

    let m1 = MembershipRepo::create(&pool, user.id, user.uuid, c1.id)
        .await
        .unwrap();
    MembershipRepo::create(&pool, user.id, user.uuid, c2.id)
        .await
        .unwrap();
    MembershipRepo::set_favorite(&pool, m1.id, true).await.unwrap();

    let favorites = MembershipRepo::list_favorites(&pool, user.uuid)
        .await
        .unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].challenge_id, c1.id);
    assert!(favorites[0].favorite);
}

#[sqlx::test(migrations = "./migrations")]
async fn wall_of_fame_only_contains_completed_memberships(pool: PgPool) {
    let alice = UserRepo::create(&pool, &new_user("Alice")).await.unwrap();
    let bob = UserRepo::create(&pool, &new_user("Bob")).await.unwrap();
    let challenge = ChallengeRepo::create(&pool, &new_challenge("Marathon"))
        .await
        .unwrap();

    let done = MembershipRepo::create(&pool, alice.id, alice.uuid, challenge.id)
        .await
        .unwrap();
    MembershipRepo::create(&pool, bob.id, bob.uuid, challenge.id)
        .await
        .unwrap();
    MembershipRepo::set_completed(&pool, done.id, true)
        .await
        .unwrap();

    let wall = MembershipRepo::wall_of_fame(&pool).await.unwrap();
    assert_eq!(wall.len(), 1);
    let entry = &wall[0];
    assert_eq!(entry.membership_id, done.id);
    assert_eq!(entry.user_id, alice.id);
    assert_eq!(entry.user_uuid, alice.uuid);
    assert_eq!(entry.user_name, "Alice");
    assert_eq!(entry.challenge_id, challenge.id);
    assert_eq!(entry.challenge_name, "Marathon");
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn deleting_a_challenge_cascades_its_memberships(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Ines")).await.unwrap();
    let challenge = ChallengeRepo::create(&pool, &new_challenge("Doomed"))
        .await
        .unwrap();
    let membership = MembershipRepo::create(&pool, user.id, user.uuid, challenge.id)
        .await
        .unwrap();

    assert!(ChallengeRepo::delete(&pool, challenge.id).await.unwrap());

    assert!(MembershipRepo::find_by_id(&pool, membership.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn deleting_a_user_cascades_their_memberships(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("Jon")).await.unwrap();
    let challenge = ChallengeRepo::create(&pool, &new_challenge("Abandoned"))
        .await
        .unwrap();
    let membership = MembershipRepo::create(&pool, user.id, user.uuid, challenge.id)
        .await
        .unwrap();

    assert!(UserRepo::delete(&pool, user.id).await.unwrap());

    assert!(MembershipRepo::find_by_id(&pool, membership.id)
        .await
        .unwrap()
        .is_none());
}
