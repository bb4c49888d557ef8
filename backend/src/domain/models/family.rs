#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub id: i64,
    pub name: String,
}

/// Association row linking a person to a family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMember {
    pub family_id: i64,
    pub person_id: i64,
}
