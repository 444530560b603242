use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Post,
    Comment,
    Profile,
    ActivityLog,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Post => Entity::has_many(super::post::Entity).into(),
            Relation::Comment => Entity::has_many(super::comment::Entity).into(),
            Relation::Profile => Entity::has_one(super::user_profile::Entity).into(),
            Relation::ActivityLog => Entity::has_many(super::activity_log::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
