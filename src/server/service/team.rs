use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        player_season::PlayerSeasonRepository, team::TeamRepository,
        team_player::TeamPlayerRepository,
    },
    error::{team::TeamError, AppError},
    model::{
        player::PlayerSeason,
        stats::StatTotals,
        team::{
            missing_positions, rank_by_ppg, validate_player_ids, CreateTeamParams, RosterEntry,
            Team, TeamComparison, TeamDetail, TeamPlayerStats, UpdateTeamParams,
        },
    },
    util::parse::parse_position_from_string,
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every team ordered by name.
    pub async fn list(&self) -> Result<Vec<Team>, AppError> {
        Ok(TeamRepository::new(self.db).get_all().await?)
    }

    /// Creates a team with a full roster.
    ///
    /// The team row and all membership rows are written in one transaction, so any
    /// failure leaves nothing behind.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team created
    /// - `Ok(None)` - A team with that name already exists
    /// - `Err(AppError::TeamErr)` - Roster failed validation or a player is on another team
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, params: CreateTeamParams) -> Result<Option<Team>, AppError> {
        let txn = self.db.begin().await?;
        let teams = TeamRepository::new(&txn);

        if teams.find_by_name(&params.name).await?.is_some() {
            return Ok(None);
        }

        validate_player_ids(&params.player_ids)?;
        let roster = resolve_roster(&txn, &params.player_ids).await?;

        let memberships = TeamPlayerRepository::new(&txn);
        let conflicts = memberships.find_conflicts(&params.player_ids, None).await?;
        if !conflicts.is_empty() {
            return Err(TeamError::PlayersOnOtherTeams(conflicts).into());
        }

        let team = teams.create(params.name).await.map_err(roster_write_err)?;
        memberships
            .insert_roster(team.id, &roster)
            .await
            .map_err(roster_write_err)?;

        txn.commit().await?;

        tracing::info!("Created team {} ({})", team.id, team.name);

        Ok(Some(team))
    }

    /// Replaces a team's roster and optionally renames it.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team updated
    /// - `Ok(None)` - No team with that id
    /// - `Err(AppError::TeamErr)` - Roster failed validation, the new name belongs to
    ///   another team, or a player is on another team
    /// - `Err(AppError)` - Database error
    pub async fn update(&self, params: UpdateTeamParams) -> Result<Option<Team>, AppError> {
        let txn = self.db.begin().await?;
        let teams = TeamRepository::new(&txn);

        let Some(mut team) = teams.find_by_id(params.id).await? else {
            return Ok(None);
        };

        validate_player_ids(&params.player_ids)?;

        if let Some(name) = &params.name {
            if let Some(existing) = teams.find_by_name(name).await? {
                if existing.id != team.id {
                    return Err(TeamError::DuplicateName(name.clone()).into());
                }
            }
        }

        let roster = resolve_roster(&txn, &params.player_ids).await?;

        let memberships = TeamPlayerRepository::new(&txn);
        let conflicts = memberships
            .find_conflicts(&params.player_ids, Some(team.id))
            .await?;
        if !conflicts.is_empty() {
            return Err(TeamError::PlayersOnOtherTeams(conflicts).into());
        }

        if let Some(name) = params.name {
            if name != team.name {
                team = teams.rename(team.id, name).await.map_err(roster_write_err)?;
            }
        }

        memberships.delete_by_team(team.id).await?;
        memberships
            .insert_roster(team.id, &roster)
            .await
            .map_err(roster_write_err)?;

        txn.commit().await?;

        tracing::info!("Updated team {} ({})", team.id, team.name);

        Ok(Some(team))
    }

    /// Deletes a team and its roster.
    ///
    /// # Returns
    /// - `Ok(true)` - Team deleted
    /// - `Ok(false)` - No team with that id
    /// - `Err(AppError)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let teams = TeamRepository::new(&txn);

        if teams.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        TeamPlayerRepository::new(&txn).delete_by_team(id).await?;
        teams.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted team {}", id);

        Ok(true)
    }

    /// Gets a team with career totals for each rostered player.
    ///
    /// Players are ordered PG, SG, SF, PF, C. A rostered player with no season rows
    /// reports zero totals.
    ///
    /// # Returns
    /// - `Ok(Some(TeamDetail))` - Team found
    /// - `Ok(None)` - No team with that id
    /// - `Err(AppError)` - Database error or unparseable stored row
    pub async fn get_detail(&self, id: i32) -> Result<Option<TeamDetail>, AppError> {
        let Some(team) = TeamRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let roster = TeamPlayerRepository::new(self.db).find_roster(id).await?;
        let player_ids: Vec<i32> = roster.iter().map(|(m, _)| m.player_id).collect();
        let seasons = self.seasons_by_player(&player_ids).await?;

        let mut players = roster
            .into_iter()
            .map(|(membership, player)| {
                Ok(TeamPlayerStats {
                    position: parse_position_from_string(membership.position)?,
                    totals: StatTotals::from_seasons(seasons.get(&player.id).into_iter().flatten()),
                    player_id: player.id,
                    player_name: player.player_name,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;
        players.sort_by_key(|p| p.position);

        Ok(Some(TeamDetail { team, players }))
    }

    /// Compares fantasy teams by the combined career totals of their rosters.
    ///
    /// # Arguments
    /// - `ids` - Team ids in request order, at least two
    ///
    /// # Returns
    /// - `Ok(Vec<TeamComparison>)` - One row per requested id, highest PPG first
    /// - `Err(AppError::BadRequest)` - Fewer than two ids
    /// - `Err(AppError::NotFound)` - An id does not match a team
    pub async fn compare_by_ids(&self, ids: Vec<i32>) -> Result<Vec<TeamComparison>, AppError> {
        if ids.len() < 2 {
            return Err(AppError::BadRequest(
                "At least two team IDs are required for comparison".to_string(),
            ));
        }

        let teams: HashMap<i32, Team> = TeamRepository::new(self.db)
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        if let Some(missing) = ids.iter().find(|id| !teams.contains_key(id)) {
            return Err(AppError::NotFound(format!(
                "Team with ID {} does not exist",
                missing
            )));
        }

        let memberships = TeamPlayerRepository::new(self.db)
            .find_by_team_ids(&ids)
            .await?;
        let player_ids: Vec<i32> = memberships.iter().map(|m| m.player_id).collect();
        let seasons = self.seasons_by_player(&player_ids).await?;

        let comparisons = ids
            .iter()
            .filter_map(|id| teams.get(id))
            .map(|team| {
                let team_seasons = memberships
                    .iter()
                    .filter(|m| m.team_id == team.id)
                    .filter_map(|m| seasons.get(&m.player_id))
                    .flatten();

                TeamComparison {
                    team_id: Some(team.id),
                    team_name: team.name.clone(),
                    totals: StatTotals::from_seasons(team_seasons),
                }
            })
            .collect();

        Ok(rank_by_ppg(comparisons))
    }

    /// Compares real-world teams by every season row tagged with their abbreviation.
    ///
    /// # Arguments
    /// - `names` - Two or three team abbreviations in request order
    ///
    /// # Returns
    /// - `Ok(Vec<TeamComparison>)` - One row per name, highest PPG first
    /// - `Err(AppError::BadRequest)` - Fewer than two or more than three names
    /// - `Err(AppError::NotFound)` - A name has no season rows
    pub async fn compare_by_names(
        &self,
        names: Vec<String>,
    ) -> Result<Vec<TeamComparison>, AppError> {
        if !(2..=3).contains(&names.len()) {
            return Err(AppError::BadRequest(
                "Between 2 and 3 team names are required for comparison".to_string(),
            ));
        }

        let repo = PlayerSeasonRepository::new(self.db);
        let mut comparisons = Vec::with_capacity(names.len());

        for name in names {
            let rows = repo.find_by_team_name(&name).await?;
            if rows.is_empty() {
                return Err(AppError::NotFound(format!("Team '{}' not found", name)));
            }

            let seasons = rows
                .into_iter()
                .map(PlayerSeason::from_entity)
                .collect::<Result<Vec<_>, _>>()?;

            comparisons.push(TeamComparison {
                team_id: None,
                team_name: name,
                totals: StatTotals::from_seasons(&seasons),
            });
        }

        Ok(rank_by_ppg(comparisons))
    }

    async fn seasons_by_player(
        &self,
        player_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<PlayerSeason>>, AppError> {
        let rows = PlayerSeasonRepository::new(self.db)
            .find_by_player_ids(player_ids)
            .await?;

        let mut seasons: HashMap<i32, Vec<PlayerSeason>> = HashMap::new();
        for row in rows {
            let season = PlayerSeason::from_entity(row)?;
            seasons.entry(season.player_id).or_default().push(season);
        }

        Ok(seasons)
    }
}

/// Resolves each player's position from their most recent season and checks every
/// roster position is covered.
async fn resolve_roster<C: ConnectionTrait>(
    db: &C,
    player_ids: &[i32],
) -> Result<Vec<RosterEntry>, AppError> {
    let repo = PlayerSeasonRepository::new(db);
    let mut roster = Vec::with_capacity(player_ids.len());

    for &player_id in player_ids {
        let latest = repo
            .find_latest_for_player(player_id)
            .await?
            .ok_or(TeamError::PlayerNotFound(player_id))?;

        roster.push(RosterEntry {
            player_id,
            position: parse_position_from_string(latest.position)?,
        });
    }

    let missing = missing_positions(&roster);
    if !missing.is_empty() {
        return Err(TeamError::MissingPositions(missing).into());
    }

    Ok(roster)
}

/// Maps unique index violations on team or roster writes to a roster conflict.
pub(super) fn roster_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => TeamError::ConcurrentModification.into(),
        _ => err.into(),
    }
}
