use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

wire_enum! {
    OrganizationType("organization type") {
        Company => "company",
        College => "college",
        Committee => "committee",
        Other => "other",
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RegisterOrganizerDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub profile_picture: Option<String>,
    pub organization_type: OrganizationType,
    #[serde(default)]
    pub organization_name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateOrganizerDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub profile_picture: Option<String>,
    pub organization_type: Option<OrganizationType>,
    pub organization_name: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct OrganizerDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub organization_type: OrganizationType,
    pub organization_name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PaginatedOrganizersDto {
    pub organizers: Vec<OrganizerDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
