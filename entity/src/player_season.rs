use sea_orm::entity::prelude::*;

/// One row of season totals for a player, unique per `(player_id, season)`.
///
/// `atr` and `ppg_ratio` are the values computed when the row was ingested. Readers
/// recompute both from the raw totals.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player_seasons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: i32,
    pub season: i32,
    pub team: String,
    pub position: String,
    pub points: i32,
    pub games: i32,
    pub two_percent: Option<f64>,
    pub three_percent: Option<f64>,
    pub assists: i32,
    pub turnovers: i32,
    pub atr: Option<f64>,
    pub ppg_ratio: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
