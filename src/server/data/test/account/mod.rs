use crate::{model::auth::AccountType, server::data::account::AccountRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod find_credentials;
