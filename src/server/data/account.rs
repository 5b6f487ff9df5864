use sea_orm::{ConnectionTrait, DbErr};

use crate::{
    model::auth::AccountType,
    server::{
        data::{
            mentor_judge::MentorJudgeRepository, organizer::OrganizerRepository,
            participant::ParticipantRepository,
        },
        model::account::Account,
    },
};

/// Account lookups across the organizer, participant and mentor/judge tables.
///
/// The account type picks the table; IDs are only unique within one table.
pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        id: i32,
        account_type: AccountType,
    ) -> Result<Option<Account>, DbErr> {
        Ok(self
            .find(Lookup::Id(id), account_type)
            .await?
            .map(|(account, _)| account))
    }

    /// Gets an account together with its password hash.
    pub async fn find_credentials(
        &self,
        email: &str,
        account_type: AccountType,
    ) -> Result<Option<(Account, String)>, DbErr> {
        self.find(Lookup::Email(email), account_type).await
    }

    async fn find(
        &self,
        lookup: Lookup<'_>,
        account_type: AccountType,
    ) -> Result<Option<(Account, String)>, DbErr> {
        let found = match account_type {
            AccountType::Organizer => {
                let repo = OrganizerRepository::new(self.db);
                let organizer = match lookup {
                    Lookup::Id(id) => repo.find_by_id(id).await?,
                    Lookup::Email(email) => repo.find_by_email(email).await?,
                };
                organizer.map(|o| (o.id, o.profile.name, o.profile.email, o.password_hash))
            }
            AccountType::Participant => {
                let repo = ParticipantRepository::new(self.db);
                let participant = match lookup {
                    Lookup::Id(id) => repo.find_by_id(id).await?,
                    Lookup::Email(email) => repo.find_by_email(email).await?,
                };
                participant.map(|p| (p.id, p.profile.name, p.profile.email, p.password_hash))
            }
            AccountType::MentorJudge => {
                let repo = MentorJudgeRepository::new(self.db);
                let mentor_judge = match lookup {
                    Lookup::Id(id) => repo.find_by_id(id).await?,
                    Lookup::Email(email) => repo.find_by_email(email).await?,
                };
                mentor_judge.map(|m| (m.id, m.profile.name, m.profile.email, m.password_hash))
            }
        };

        Ok(found.map(|(id, name, email, password_hash)| {
            let account = Account {
                id,
                name,
                email,
                account_type,
            };
            (account, password_hash)
        }))
    }
}

#[derive(Clone, Copy)]
enum Lookup<'a> {
    Id(i32),
    Email(&'a str),
}
