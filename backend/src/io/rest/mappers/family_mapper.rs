//! backend/src/io/rest/mappers/family_mapper.rs

use shared::{FamiliesResponse, Family as SharedFamily};

use crate::domain::models::Family as DomainFamily;

pub struct FamilyMapper;

impl FamilyMapper {
    pub fn to_dto(domain: DomainFamily) -> SharedFamily {
        SharedFamily {
            id: domain.id,
            name: domain.name,
        }
    }

    pub fn to_list_response(families: Vec<DomainFamily>) -> FamiliesResponse {
        FamiliesResponse {
            families: families.into_iter().map(Self::to_dto).collect(),
        }
    }
}
