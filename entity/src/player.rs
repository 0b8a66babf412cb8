use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub player_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_season::Entity")]
    PlayerSeason,
    #[sea_orm(has_many = "super::team_player::Entity")]
    TeamPlayer,
}

impl Related<super::player_season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerSeason.def()
    }
}

impl Related<super::team_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamPlayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
