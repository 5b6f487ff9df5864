use crate::model::auth::{AccountDto, AccountType};

/// The authenticated account behind a session, whichever table it lives in.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub account_type: AccountType,
}

impl Account {
    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            name: self.name,
            email: self.email,
            account_type: self.account_type,
        }
    }
}

/// Login attempt against one of the account tables.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
    pub account_type: AccountType,
}

impl LoginParams {
    pub fn from_dto(dto: crate::model::auth::LoginDto) -> Self {
        Self {
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
            account_type: dto.account_type,
        }
    }
}
