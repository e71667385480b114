use diesel::prelude::*;

use crate::{
    domain::{
        client::{Client, NewClient},
        types::{ClientId, Pesel},
    },
    models::client::{Client as DbClient, NewClient as DbNewClient},
    repository::{
        ClientReader, ClientWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let db_client = clients::table
            .find(id.get())
            .select(DbClient::as_select())
            .first::<DbClient>(&mut conn)
            .optional()?;

        db_client
            .map(Client::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn get_client_by_pesel(&self, pesel: &Pesel) -> RepositoryResult<Option<Client>> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let db_client = clients::table
            .filter(clients::pesel.eq(pesel.as_str()))
            .select(DbClient::as_select())
            .first::<DbClient>(&mut conn)
            .optional()?;

        db_client
            .map(Client::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let insertable: DbNewClient = new_client.into();

        let db_client = diesel::insert_into(clients::table)
            .values(&insertable)
            .returning(DbClient::as_returning())
            .get_result::<DbClient>(&mut conn)?;

        Ok(Client::try_from(db_client)?)
    }

    fn delete_client(&self, id: ClientId) -> RepositoryResult<()> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(clients::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
