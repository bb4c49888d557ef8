//! backend/src/io/rest/mappers/person_mapper.rs

use chrono::NaiveDate;
use shared::{wire_date, Person as SharedPerson, PersonResponse, PersonsResponse};

use crate::domain::models::Person as DomainPerson;
use crate::domain::{DomainError, DomainResult};

/// Mapper to convert between shared Person DTOs and domain Person models.
pub struct PersonMapper;

impl PersonMapper {
    /// Converts a shared Person DTO to a domain Person model.
    ///
    /// A missing or blank `DateOfBirth` means "unknown"; anything else must decode.
    pub fn to_domain(dto: SharedPerson) -> DomainResult<DomainPerson> {
        let date_of_birth = match dto.date_of_birth.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(Self::parse_date_of_birth(raw)?),
        };

        Ok(DomainPerson {
            id: dto.id,
            parent: dto.parent,
            first_name: dto.first_name,
            last_name: dto.last_name,
            date_of_birth,
            has_children: false,
        })
    }

    /// Converts a domain Person model to a shared Person DTO.
    pub fn to_dto(domain: DomainPerson) -> SharedPerson {
        SharedPerson {
            id: domain.id,
            parent: domain.parent,
            first_name: domain.first_name,
            last_name: domain.last_name,
            date_of_birth: domain.date_of_birth.map(wire_date::format_date),
            has_children: domain.has_children,
        }
    }

    /// The person together with its display label as of `today`
    pub fn to_response(domain: DomainPerson, today: NaiveDate) -> PersonResponse {
        let label = domain.display_label(today);
        PersonResponse {
            person: Self::to_dto(domain),
            label,
        }
    }

    pub fn to_list_response(persons: Vec<DomainPerson>) -> PersonsResponse {
        PersonsResponse {
            persons: persons.into_iter().map(Self::to_dto).collect(),
        }
    }

    fn parse_date_of_birth(raw: &str) -> DomainResult<NaiveDate> {
        wire_date::parse_date(raw)
            .map_err(|e| DomainError::validation(format!("Invalid DateOfBirth: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(date_of_birth: Option<&str>) -> SharedPerson {
        SharedPerson {
            id: 3,
            parent: Some(1),
            first_name: "Michaela".to_string(),
            last_name: "MacDonald".to_string(),
            date_of_birth: date_of_birth.map(str::to_string),
            has_children: true,
        }
    }

    #[test]
    fn test_to_domain_accepts_iso_and_legacy_dates() {
        let expected = NaiveDate::from_ymd_opt(1967, 5, 27);

        let iso = PersonMapper::to_domain(dto(Some("1967-05-27"))).unwrap();
        assert_eq!(iso.date_of_birth, expected);

        let legacy = PersonMapper::to_domain(dto(Some("/Date(-82080000000)/"))).unwrap();
        assert_eq!(legacy.date_of_birth, expected);
    }

    #[test]
    fn test_to_domain_blank_date_is_unknown() {
        assert_eq!(PersonMapper::to_domain(dto(None)).unwrap().date_of_birth, None);
        assert_eq!(PersonMapper::to_domain(dto(Some("  "))).unwrap().date_of_birth, None);
    }

    #[test]
    fn test_to_domain_rejects_garbage_date() {
        let err = PersonMapper::to_domain(dto(Some("next tuesday"))).unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref e) if e[0].starts_with("Invalid DateOfBirth")));
    }

    #[test]
    fn test_to_domain_ignores_client_child_flag() {
        assert!(!PersonMapper::to_domain(dto(None)).unwrap().has_children);
    }

    #[test]
    fn test_to_response_carries_label() {
        let person = PersonMapper::to_domain(dto(Some("1985-07-23"))).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 7, 23).unwrap();

        let response = PersonMapper::to_response(person, today);
        assert_eq!(response.label, "Michaela MacDonald is 40 years old.");
        assert_eq!(response.person.date_of_birth.as_deref(), Some("1985-07-23"));
    }
}
