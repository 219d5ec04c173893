//! Integration tests for `SqliteCatalogRepository` against a real schema.

use chrono::NaiveDate;
use gameshelf_core::{
    CatalogRepository, ConstraintKind, DatabaseConfig, GameDetailService, NewGame,
    RepositoryError,
};
use gameshelf_db::{CatalogFactory, SeededRefs, TestDb, setup_database};
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};

fn chrono_trigger(refs: &SeededRefs) -> NewGame {
    NewGame {
        value: Some(39.99),
        purchase_date: NaiveDate::from_ymd_opt(1995, 8, 22),
        ..NewGame::new(
            "Chrono Trigger",
            "ct.png",
            refs.console_id,
            refs.company_id,
            refs.other_company_id,
        )
    }
}

#[tokio::test]
async fn test_create_game_with_genres() {
    let db = TestDb::new().await.unwrap();
    let refs = db.seed_reference_data().await.unwrap();
    let repo = db.catalog_repository();

    let id = assert_ok!(
        repo.create_game(&chrono_trigger(&refs), &[refs.rpg_id, refs.adventure_id])
            .await
    );

    let detail = repo.get_game_detail_by_id(id).await.unwrap().unwrap();
    assert_eq!(detail.name, "Chrono Trigger");
    assert_eq!(detail.value, Some(39.99));
    assert_eq!(detail.purchase_date, NaiveDate::from_ymd_opt(1995, 8, 22));
    assert_eq!(detail.highscore, None);
    assert_eq!(detail.genre_names(), vec!["Adventure", "RPG"]);
    assert!(repo.get_all_game_ids().await.unwrap().contains(&id));
}

#[tokio::test]
async fn test_unknown_genre_rolls_back_whole_insert() {
    let db = TestDb::new().await.unwrap();
    let refs = db.seed_reference_data().await.unwrap();
    let repo = db.catalog_repository();

    let err = assert_err!(
        repo.create_game(&chrono_trigger(&refs), &[refs.rpg_id, 9999])
            .await
    );

    assert!(err.is_transaction());
    assert_eq!(err.constraint_kind(), Some(ConstraintKind::ForeignKey));
    assert_eq!(db.count_rows("game").await.unwrap(), 0);
    assert_eq!(db.count_rows("game_genre").await.unwrap(), 0);
}

#[tokio::test]
async fn test_unknown_console_is_foreign_key_violation() {
    let db = TestDb::new().await.unwrap();
    let refs = db.seed_reference_data().await.unwrap();
    let repo = db.catalog_repository();

    let game = NewGame::new("Orphan", "", 4242, refs.company_id, refs.company_id);
    let err = assert_err!(repo.create_game(&game, &[]).await);

    assert!(err.is_constraint(ConstraintKind::ForeignKey));
    assert_eq!(db.count_rows("game").await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_then_read_back() {
    let db = TestDb::new().await.unwrap();
    let refs = db.seed_reference_data().await.unwrap();
    let repo = db.catalog_repository();

    let id = repo
        .create_game(&chrono_trigger(&refs), &[refs.rpg_id])
        .await
        .unwrap();

    let mut game = repo.get_game_by_id(id).await.unwrap().unwrap();
    game.name = "Chrono Trigger DS".to_string();
    game.value = None;
    game.highscore = Some(42);
    // Not part of an update; must stay as stored.
    game.console_id = 4242;
    game.publisher_id = refs.company_id;

    assert!(repo.update_game(&game).await.unwrap());

    let stored = repo.get_game_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Chrono Trigger DS");
    assert_eq!(stored.value, None);
    assert_eq!(stored.highscore, Some(42));
    assert_eq!(stored.console_id, refs.console_id);
    assert_eq!(stored.publisher_id, refs.other_company_id);
}

#[tokio::test]
async fn test_update_reports_existence() {
    let db = TestDb::new().await.unwrap();
    let refs = db.seed_reference_data().await.unwrap();
    let repo = db.catalog_repository();

    let id = repo
        .create_game(&chrono_trigger(&refs), &[])
        .await
        .unwrap();
    let game = repo.get_game_by_id(id).await.unwrap().unwrap();

    // Identical values still match the row.
    assert!(repo.update_game(&game).await.unwrap());

    let missing = chrono_trigger(&refs).with_id(id + 100);
    assert!(!repo.update_game(&missing).await.unwrap());
}

#[tokio::test]
async fn test_delete_removes_game_and_associations() {
    let db = TestDb::new().await.unwrap();
    let refs = db.seed_reference_data().await.unwrap();
    let repo = db.catalog_repository();

    let id = repo
        .create_game(&chrono_trigger(&refs), &[refs.rpg_id, refs.adventure_id])
        .await
        .unwrap();

    assert!(repo.delete_game(id).await.unwrap());
    assert_eq!(repo.get_game_by_id(id).await.unwrap(), None);
    assert_eq!(repo.get_game_detail_by_id(id).await.unwrap(), None);
    assert!(repo.get_genres_for_game(id).await.unwrap().is_empty());
    assert_eq!(db.count_rows("game_genre").await.unwrap(), 0);

    // Genres themselves survive.
    assert_eq!(repo.get_all_genres().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_nonexistent_game() {
    let db = TestDb::new().await.unwrap();
    let repo = db.catalog_repository();

    assert!(!repo.delete_game(77).await.unwrap());
}

#[tokio::test]
async fn test_detail_without_genres() {
    let db = TestDb::new().await.unwrap();
    let refs = db.seed_reference_data().await.unwrap();
    let repo = db.catalog_repository();

    let id = repo
        .create_game(&chrono_trigger(&refs), &[])
        .await
        .unwrap();

    let detail = repo.get_game_detail_by_id(id).await.unwrap().unwrap();
    assert_eq!(detail.id, id);
    assert!(detail.genres.is_empty());
}

#[tokio::test]
async fn test_highscore_round_trip() {
    let db = TestDb::new().await.unwrap();
    let refs = db.seed_reference_data().await.unwrap();
    let repo = db.catalog_repository();

    let without = repo
        .create_game(&chrono_trigger(&refs), &[])
        .await
        .unwrap();
    let with = NewGame {
        highscore: Some(42),
        ..chrono_trigger(&refs)
    };
    let with = repo.create_game(&with, &[]).await.unwrap();

    assert_eq!(
        repo.get_game_by_id(without).await.unwrap().unwrap().highscore,
        None
    );
    assert_eq!(
        repo.get_game_by_id(with).await.unwrap().unwrap().highscore,
        Some(42)
    );
}

#[tokio::test]
async fn test_duplicate_company_is_unique_violation() {
    let db = TestDb::new().await.unwrap();
    let repo = db.catalog_repository();

    assert_ok!(repo.create_company("Nintendo").await);
    let err = assert_err!(repo.create_company("Nintendo").await);

    assert!(matches!(
        err,
        RepositoryError::Constraint {
            kind: ConstraintKind::Unique,
            ..
        }
    ));
    assert_eq!(repo.get_all_companies().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_blank_name_is_check_violation() {
    let db = TestDb::new().await.unwrap();
    let repo = db.catalog_repository();

    let err = assert_err!(repo.create_genre("   ").await);
    assert!(err.is_constraint(ConstraintKind::Check));
}

#[tokio::test]
async fn test_summaries_list_every_game() {
    let db = TestDb::new().await.unwrap();
    let refs = db.seed_reference_data().await.unwrap();
    let repo = db.catalog_repository();

    assert!(repo.get_all_game_summaries().await.unwrap().is_empty());

    let first = repo
        .create_game(&chrono_trigger(&refs), &[])
        .await
        .unwrap();
    let som = NewGame::new("Secret of Mana", "som.png", refs.console_id, refs.company_id, refs.company_id);
    let second = repo.create_game(&som, &[]).await.unwrap();

    let mut summaries = repo.get_all_game_summaries().await.unwrap();
    summaries.sort_by_key(|s| s.id);
    assert_eq!(summaries.len(), 2);
    assert_eq!((summaries[0].id, summaries[0].image_url.as_str()), (first, "ct.png"));
    assert_eq!((summaries[1].id, summaries[1].image_url.as_str()), (second, "som.png"));
}

#[tokio::test]
async fn test_detail_service_against_database() {
    let db = TestDb::new().await.unwrap();
    let refs = db.seed_reference_data().await.unwrap();
    let repo = Arc::new(db.catalog_repository());
    let service = GameDetailService::new(repo.clone());

    let id = repo
        .create_game(&chrono_trigger(&refs), &[refs.rpg_id, refs.adventure_id])
        .await
        .unwrap();

    let merged = service.get_game_detail(id).await.unwrap().unwrap();
    let joined = repo.get_game_detail_by_id(id).await.unwrap().unwrap();
    assert_eq!(merged.clone().into_game(), joined.clone().into_game());
    assert_eq!(merged.genre_names(), joined.genre_names());

    assert_eq!(service.get_game_detail(id + 1).await.unwrap(), None);
}

#[tokio::test]
async fn test_file_database_persists_across_pools() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("gameshelf.db");
    let config = DatabaseConfig::for_path(&path);

    let pool = setup_database(&config).await.unwrap();
    let repo = CatalogFactory::catalog_repository(pool.clone());
    repo.create_console("Mega Drive").await.unwrap();
    pool.close().await;

    assert!(path.exists());

    let pool = setup_database(&config).await.unwrap();
    let core = CatalogFactory::build_app_core(pool);
    let consoles = core.catalog().list_consoles().await.unwrap();
    assert_eq!(consoles.len(), 1);
    assert_eq!(consoles[0].name, "Mega Drive");
}
