//! Course database entity for SeaORM.
//!
//! The tutor is stored inline; a tutor has no life of its own outside the
//! courses it facilitates.

use sea_orm::entity::prelude::*;

use domain::{Tutor, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub tutor_uuid: Uuid,
    pub tutor_name: String,
    pub tutor_lastname: String,
    pub tutor_faculty: String,
    pub tutor_lecturer_of: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_student::Entity")]
    Students,
}

impl Related<super::course_student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Rebuild the tutor from its inline columns
    pub fn tutor(&self) -> Tutor {
        Tutor::new(
            User::new(self.tutor_uuid, self.tutor_name.clone(), self.tutor_lastname.clone()),
            self.tutor_faculty.clone(),
            self.tutor_lecturer_of.clone(),
        )
    }
}
