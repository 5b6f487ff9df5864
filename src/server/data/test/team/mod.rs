use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::team::TeamRole,
    server::data::team::{NewTeam, TeamRepository},
};

mod create;
mod find_by_code;
mod get_with_members;
mod release_seat;
mod try_reserve_seat;
