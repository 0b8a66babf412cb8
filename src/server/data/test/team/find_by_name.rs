use super::*;

/// Tests finding a team by its exact name.
///
/// Expected: Ok(Some) for the stored name, Ok(None) for others
#[tokio::test]
async fn finds_team_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db)
        .name("Bad Boys")
        .build()
        .await?;

    let repo = TeamRepository::new(db);

    assert_eq!(repo.find_by_name("Bad Boys").await?.map(|t| t.id), Some(team.id));
    assert!(repo.find_by_name("Good Boys").await?.is_none());

    Ok(())
}
