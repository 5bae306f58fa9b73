use tracing::{info, warn};

use crate::domain::common::{Identifiable, NamedEntity};
use crate::domain::gym::Gym;
use crate::domain::person::{Client, Person};
use crate::domain::secretary::Secretary;
use crate::errors::{DuplicateScope, GymError, GymResult};

/// Client registration and removal.
pub struct ClientService;

impl ClientService {
    /// Registers `person` as a client, enforcing the minimum age and
    /// uniqueness.
    pub fn register(gym: &mut Gym, secretary: &Secretary, person: Person) -> GymResult<Client> {
        gym.ensure_active(secretary)?;

        let age = person.age_on(gym.today());
        let minimum = gym.policy().minimum_client_age;
        if age < minimum {
            warn!(person = %person.id(), age, "registration refused: under age");
            return Err(GymError::InvalidAge { age, minimum });
        }

        let client = Client::from(person);
        if gym.is_client_registered(&client) {
            return Err(GymError::DuplicateClient {
                client: client.id(),
                scope: DuplicateScope::Gym,
            });
        }

        gym.add_client(client.clone());
        gym.record_action(format!("Registered new client: {}", client.name()));
        info!(client = %client.id(), "client registered");
        Ok(client)
    }

    /// Removes `client` from the gym. Session rosters and the client's
    /// account are left untouched.
    pub fn unregister(gym: &mut Gym, secretary: &Secretary, client: &Client) -> GymResult<()> {
        gym.ensure_active(secretary)?;

        let removed = gym
            .remove_client(client)
            .ok_or(GymError::ClientNotRegistered(client.id()))?;
        gym.record_action(format!("Unregistered client: {}", removed.name()));
        info!(client = %removed.id(), "client unregistered");
        Ok(())
    }
}
