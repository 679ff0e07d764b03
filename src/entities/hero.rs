use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CODENAME_MAX_LEN: usize = 50;
pub const REAL_NAME_MAX_LEN: usize = 100;
pub const PRIMARY_POWER_MAX_LEN: usize = 100;
pub const CITY_MAX_LEN: usize = 100;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "heroes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "String(Some(50))", unique)]
    pub codename: String,
    #[sea_orm(column_type = "String(Some(100))", nullable)]
    pub real_name: Option<String>,
    #[sea_orm(column_type = "String(Some(100))")]
    pub primary_power: String,
    #[sea_orm(column_type = "String(Some(100))")]
    pub city: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub backstory: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Posts,
    #[sea_orm(has_many = "super::like::Entity")]
    Likes,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.codename)
    }
}
