// crates/profile/src/application/create_profile_on_auth/create_profile_on_auth_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::value_objects::Username;
use shared_kernel::errors::Result;

use crate::application::CallerIdentity;
use crate::application::create_profile_on_auth::CreateProfileOnAuthCommand;
use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;
use crate::domain::value_objects::Picture;

pub struct CreateProfileOnAuthUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl CreateProfileOnAuthUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(name = "create_profile_on_auth", skip_all)]
    pub async fn execute(&self, command: CreateProfileOnAuthCommand) -> Result<Profile> {
        // 1. Identité
        let caller = CallerIdentity::require(command.caller.as_ref())?;

        // 2. Idempotence : un profil existe déjà pour cet email
        if let Some(existing) = self.repo.find_by_email(&caller.email).await? {
            return Ok(existing);
        }

        // 3. Construction du profil initial
        let username = Username::try_new(caller.display_name())?;
        let profile = Profile::builder(caller.email.clone(), username)
            .with_picture(caller.picture.clone().map(Picture::from_raw))
            .build();

        // 4. Persistance
        match self.repo.create(&profile).await {
            Ok(created) => {
                tracing::info!(profile_id = %created.id(), "profile created on first sign-in");
                Ok(created)
            }
            Err(e) if e.is_already_exists() => {
                // Deux premières connexions simultanées : l'autre a gagné, on relit.
                // Si l'email n'a toujours pas de profil, c'est le username qui est pris.
                match self.repo.find_by_email(&caller.email).await? {
                    Some(existing) => Ok(existing),
                    None => Err(e),
                }
            }
            Err(e) => Err(e),
        }
    }
}
