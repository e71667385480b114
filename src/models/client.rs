use diesel::prelude::*;

use crate::domain::client::{Client as DomainClient, NewClient as DomainNewClient};
use crate::domain::types::{ClientId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    pub pesel: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub telephone: &'a str,
    pub pesel: &'a str,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientId::try_from(client.id)?,
            first_name: client.first_name,
            last_name: client.last_name,
            email: client.email,
            telephone: client.telephone,
            pesel: client.pesel,
        })
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            first_name: client.first_name.as_str(),
            last_name: client.last_name.as_str(),
            email: client.email.as_str(),
            telephone: client.telephone.as_str(),
            pesel: client.pesel.as_str(),
        }
    }
}
