use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{model::team::TeamRole, server::data::registration::RegistrationRepository};

mod find_team_id;
mod get_for_participant;
