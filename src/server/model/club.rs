use crate::{
    model::club::{ClubDto, ClubWriteDto},
    server::error::validation::{check_text, ValidationError},
};

pub const CLUB_NAME_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: i32,
    pub name: String,
}

impl Club {
    pub fn from_entity(entity: entity::club::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Writable club fields, shared by create and update.
#[derive(Debug, Clone)]
pub struct ClubParams {
    pub name: String,
}

impl ClubParams {
    pub fn from_dto(dto: ClubWriteDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut err = ValidationError::new();
        check_text(&mut err, "name", &self.name, CLUB_NAME_MAX_LEN);
        err.into_result()
    }
}
