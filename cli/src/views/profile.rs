use super::notify;
use crate::logger::Logger;
use crate::models::UserProfile;
use crate::store::Store;
use crate::thunks::{self, Services};

pub async fn load(store: &mut Store, services: &Services) -> bool {
    match thunks::fetch_profile(store, services).await {
        Ok(_) => true,
        Err(e) => {
            notify(store, e.message());
            false
        }
    }
}

pub fn render(profile: &UserProfile) {
    Logger::header("Profile");
    Logger::info(format!("Username: {}", Logger::highlight(&profile.username)));
    Logger::info(format!("Name:     {}", profile.name));
    Logger::info(format!("Email:    {}", profile.email));
    if let Some(created) = profile.created_at {
        Logger::info(format!(
            "Member since {}",
            Logger::dim(created.format("%Y-%m-%d"))
        ));
    }
}
